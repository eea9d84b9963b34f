//! Union compilation, memoized per declaration.

use entigraph_core::{TypeId, UnionType};

use super::Variant;
use super::compiler::Compiler;
use super::nodes::clash;
use super::resolve::Target;
use crate::Result;
use crate::declare::{DeclId, EntityRef, UnionDecl};

/// Field key used when resolving union members.
const MEMBER_KEY: &str = "unknown";

impl Compiler<'_> {
    /// Compile `union` (declared as `decl`) into a union type.
    ///
    /// Members are resolved as output types right away, outside the worklist.
    pub(super) fn compile_union(&mut self, decl: DeclId, union: &UnionDecl) -> Result<TypeId> {
        if let Some(&id) = self.unions.get(&decl) {
            return Ok(id);
        }

        let mut members = Vec::with_capacity(union.members.len());
        for member in &union.members {
            let target = match member {
                EntityRef::Decl(id) => Target::Decl(*id),
                EntityRef::Named(name) => Target::Named(name),
            };
            let name = self.resolve(target, MEMBER_KEY, Variant::Output)?;
            members.push(self.node_type(&name, Variant::Output)?);
        }

        let union_type = UnionType {
            name: union.name.clone(),
            description: union.description.clone(),
            members,
            resolver: union.resolver.clone(),
        };
        let id = match self.registry.add_union(union_type) {
            Ok(id) => id,
            Err(err) => return Err(clash(&self.registry, err, "union")),
        };

        tracing::debug!(
            name = %union.name,
            members = union.members.len(),
            "union compiled"
        );
        self.unions.insert(decl, id);
        Ok(id)
    }
}
