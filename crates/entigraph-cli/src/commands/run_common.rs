//! Shared pipeline: load a manifest, lower it, compile it.

use std::path::Path;

use entigraph_compiler::{Config, compile_schema_with};
use entigraph_core::Schema;

use crate::manifest::{Manifest, ManifestError, lower};

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Compile(#[from] entigraph_compiler::Error),
}

/// Compiler options shared by `compile` and `check`.
#[derive(Clone, Copy, Debug)]
pub struct CompileOptions {
    pub private_prefix: char,
    pub allow_empty: bool,
}

impl CompileOptions {
    fn config(self) -> Config {
        Config::new()
            .private_prefix(self.private_prefix)
            .allow_empty_types(self.allow_empty)
    }
}

pub fn compile_manifest(path: &Path, options: CompileOptions) -> Result<Schema, RunError> {
    let manifest = Manifest::load(path)?;
    compile_parsed(&manifest, options)
}

pub fn compile_parsed(manifest: &Manifest, options: CompileOptions) -> Result<Schema, RunError> {
    let lowered = lower(manifest)?;
    let schema = compile_schema_with(&lowered.catalog, &lowered.namespaces, &options.config())?;
    Ok(schema)
}

/// Report a failed run and exit.
pub fn fail(err: &RunError) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1);
}
