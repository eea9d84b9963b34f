use std::path::PathBuf;

use super::run_common::{CompileOptions, compile_manifest, fail};

pub struct CheckArgs {
    pub manifest_path: PathBuf,
    pub private_prefix: char,
    pub allow_empty: bool,
}

pub fn run(args: CheckArgs) {
    let options = CompileOptions {
        private_prefix: args.private_prefix,
        allow_empty: args.allow_empty,
    };
    if let Err(err) = compile_manifest(&args.manifest_path, options) {
        fail(&err);
    }

    // Silent on success (like cargo check)
}
