use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use entigraph_core::sdl;

use super::run_common::{CompileOptions, compile_manifest, fail};

pub struct CompileArgs {
    pub manifest_path: PathBuf,
    pub output: Option<PathBuf>,
    pub descriptions: bool,
    pub color: bool,
    pub private_prefix: char,
    pub allow_empty: bool,
}

pub fn run(args: CompileArgs) {
    let options = CompileOptions {
        private_prefix: args.private_prefix,
        allow_empty: args.allow_empty,
    };
    let schema = match compile_manifest(&args.manifest_path, options) {
        Ok(schema) => schema,
        Err(err) => fail(&err),
    };

    let config = sdl::Config::new()
        .descriptions(args.descriptions)
        .colored(args.color);
    let output = schema.sdl(&config);

    let written = match &args.output {
        Some(path) => fs::write(path, &output)
            .map_err(|e| format!("failed to write '{}': {}", path.display(), e)),
        None => io::stdout()
            .lock()
            .write_all(output.as_bytes())
            .map_err(|e| format!("failed to write output: {}", e)),
    };
    if let Err(msg) = written {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    }
}
