//! Compiler state and entry point.

use std::collections::{HashMap, HashSet};

use entigraph_core::{Schema, TypeId, TypeRegistry};
use indexmap::IndexMap;

use super::nodes::{NodeHandle, NodeStore};
use super::resolve::NameAllocator;
use super::{Config, Variant};
use crate::declare::{Catalog, DeclId, Declaration, Namespace};
use crate::{Error, Result};

/// Names that seed the schema roots.
pub const ROOT_NAMES: [&str; 3] = ["Query", "Mutation", "Subscription"];

/// Pending unit of work: compile `decl` as node `name` under `variant`.
#[derive(Clone, Debug)]
pub(super) struct QueueEntry {
    pub(super) decl: DeclId,
    pub(super) name: String,
    pub(super) variant: Variant,
}

/// All declarations registered under one logical name.
#[derive(Debug, Default)]
pub(super) struct Bundle {
    pub(super) members: Vec<DeclId>,
    /// Whether the bundle was already queued, per variant.
    pub(super) scheduled: [bool; 3],
}

/// Per-run compiler state.
///
/// One instance compiles one schema; `compile` consumes it.
pub struct Compiler<'a> {
    pub(super) catalog: &'a Catalog,
    pub(super) config: &'a Config,
    pub(super) registry: TypeRegistry,
    pub(super) nodes: NodeStore,
    /// Worklist, read by `cursor` while it grows.
    pub(super) queue: Vec<QueueEntry>,
    pub(super) cursor: usize,
    pub(super) bundles: IndexMap<String, Bundle>,
    /// Declarations already queued, per variant.
    pub(super) scheduled: [HashSet<DeclId>; 3],
    pub(super) names: NameAllocator,
    /// Names given to inline declarations, reused on later references.
    pub(super) inline_names: HashMap<(DeclId, Variant), String>,
    /// Compiled unions by declaration.
    pub(super) unions: HashMap<DeclId, TypeId>,
}

impl<'a> Compiler<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a Config) -> Self {
        Self {
            catalog,
            config,
            registry: TypeRegistry::new(),
            nodes: NodeStore::new(),
            queue: Vec::new(),
            cursor: 0,
            bundles: IndexMap::new(),
            scheduled: Default::default(),
            names: NameAllocator::new(),
            inline_names: HashMap::new(),
            unions: HashMap::new(),
        }
    }

    /// Compile every entity reachable from the roots of `namespaces`.
    pub fn compile(mut self, namespaces: &[Namespace]) -> Result<Schema> {
        let span = tracing::debug_span!(
            "compile_schema",
            namespaces = namespaces.len(),
            declarations = self.catalog.len()
        );
        let _guard = span.enter();

        self.prescan(namespaces)?;
        self.drain()?;
        self.finish()
    }

    pub(super) fn declaration(&self, id: DeclId) -> Result<&'a Declaration> {
        self.catalog.get(id).ok_or(Error::UnknownDeclaration(id))
    }

    pub(super) fn enqueue(&mut self, decl: DeclId, name: String, variant: Variant) {
        tracing::debug!(name = %name, variant = ?variant, "entity scheduled");
        self.queue.push(QueueEntry {
            decl,
            name,
            variant,
        });
    }

    fn finish(self) -> Result<Schema> {
        if !self.config.allow_empty_types {
            for (name, node) in self.nodes.iter() {
                if node.type_id().is_some() && node.field_count(&self.registry) == 0 {
                    return Err(Error::EmptyType(name.to_owned()));
                }
            }
        }

        let root = |name: &str| match self.nodes.get(name) {
            Some(NodeHandle::Object(id)) => Some(id),
            _ => None,
        };
        let (query, mutation, subscription) =
            (root("Query"), root("Mutation"), root("Subscription"));

        tracing::info!(
            nodes = self.nodes.len(),
            types = self.registry.len(),
            processed = self.queue.len(),
            "schema compiled"
        );

        Ok(Schema::new(self.registry)
            .with_query(query)
            .with_mutation(mutation)
            .with_subscription(subscription))
    }
}
