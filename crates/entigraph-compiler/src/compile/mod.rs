//! Graph resolution: turn declarations into output, input and argument types.
//!
//! The pipeline per run:
//! 1. Pre-scan groups exported declarations into bundles by logical name and
//!    queues the roots.
//! 2. The worklist is drained breadth-first. Each field resolves its leaf;
//!    entity references are named, queued at most once per variant, and
//!    materialized as empty nodes the queue fills in later.
//! 3. The schema picks up the `Query`, `Mutation` and `Subscription` nodes.

mod compiler;
mod config;
mod nodes;
mod prescan;
mod resolve;
mod traverse;
mod union;
mod variant;
mod wrappers;

#[cfg(test)]
mod resolve_tests;

use entigraph_core::Schema;

use crate::Result;
use crate::declare::{Catalog, Namespace};

pub use compiler::{Compiler, ROOT_NAMES};
pub use config::Config;
pub use resolve::NameAllocator;
pub use variant::{RESERVED_SUFFIXES, Variant};

/// Compile `namespaces` with the default configuration.
pub fn compile_schema(catalog: &Catalog, namespaces: &[Namespace]) -> Result<Schema> {
    compile_schema_with(catalog, namespaces, &Config::default())
}

pub fn compile_schema_with(
    catalog: &Catalog,
    namespaces: &[Namespace],
    config: &Config,
) -> Result<Schema> {
    Compiler::new(catalog, config).compile(namespaces)
}
