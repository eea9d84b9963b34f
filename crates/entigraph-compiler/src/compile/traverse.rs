//! Worklist traversal: compile queued entities field by field.

use entigraph_core::{ArgsId, ArgumentField, InputField, OutputField, TypeId, TypeRef};

use super::compiler::{Compiler, QueueEntry};
use super::nodes::{NodeHandle, clash};
use super::resolve::Target;
use super::variant::reserved_suffix;
use super::{Variant, wrappers};
use crate::declare::{DeclId, Declaration, FieldSchema, FieldShape, Leaf, UnionDecl};
use crate::{Error, Result};

impl<'a> Compiler<'a> {
    /// Process queue entries until none are left. Entries appended while
    /// draining are picked up in order.
    pub(super) fn drain(&mut self) -> Result<()> {
        while self.cursor < self.queue.len() {
            let entry = self.queue[self.cursor].clone();
            self.cursor += 1;
            self.process(entry)?;
        }
        Ok(())
    }

    fn process(&mut self, entry: QueueEntry) -> Result<()> {
        let QueueEntry {
            decl,
            name,
            variant,
        } = entry;

        if let Some(suffix) = reserved_suffix(&name) {
            return Err(Error::ReservedName { name, suffix });
        }

        let declaration = self.declaration(decl)?;
        let (fields, description) = match declaration {
            Declaration::Class {
                descriptor: Some(descriptor),
                ..
            }
            | Declaration::Described(descriptor) => {
                (&descriptor.fields, descriptor.description.as_deref())
            }
            Declaration::Class {
                descriptor: None, ..
            } => return Err(Error::MissingDescriptor(name)),
            Declaration::Mapping(fields) => (fields, None),
            Declaration::Union(union) => {
                self.compile_union(decl, union)?;
                return Ok(());
            }
        };

        let node_name = variant.apply(&name);
        let node = self
            .nodes
            .get_or_create(&mut self.registry, &node_name, variant)?;
        if let (Some(text), Some(id)) = (description, node.type_id()) {
            self.registry.describe(id, text)?;
        }

        tracing::debug!(
            name = %node_name,
            kind = declaration.label(),
            fields = fields.len(),
            "compiling node"
        );
        for (key, field) in fields {
            self.compile_field(node, &node_name, key, field)?;
        }
        Ok(())
    }

    fn compile_field(
        &mut self,
        node: NodeHandle,
        owner: &str,
        key: &str,
        field: &FieldSchema,
    ) -> Result<()> {
        if node.has_field(&self.registry, key) {
            return Err(Error::DuplicateField {
                type_name: owner.to_owned(),
                field: key.to_owned(),
            });
        }

        let (stack, inner) = wrappers::collect(field);
        let FieldShape::Leaf(leaf) = &inner.shape else {
            return Err(Error::MissingReference {
                type_name: owner.to_owned(),
                field: key.to_owned(),
            });
        };
        let leaf_id = self.leaf_type(leaf, key, node.variant().field_variant())?;
        let ty = wrappers::apply(&stack, TypeRef::named(leaf_id));

        let args = match field.args.as_deref() {
            Some(args) => Some(self.argument_list(args, owner, key)?),
            None => None,
        };

        tracing::trace!(
            owner,
            field = key,
            ty = %self.registry.render(&ty),
            "field compiled"
        );

        match node {
            NodeHandle::Object(id) => {
                let mut output = OutputField::new(ty);
                output.args = args;
                output.resolve = field.resolver.clone();
                output.subscribe = field.subscribe.clone();
                output.description = field.comment.clone();
                output.deprecation_reason = field.deprecated.clone();
                self.registry
                    .object_fields_mut(id)?
                    .insert(key.to_owned(), output);
            }
            NodeHandle::Input(id) => {
                let input = InputField {
                    name: field.rename.clone().unwrap_or_else(|| key.to_owned()),
                    ty,
                    default_value: field.default.clone(),
                    description: field.comment.clone(),
                    deprecation_reason: field.deprecated.clone(),
                };
                self.registry
                    .input_fields_mut(id)?
                    .insert(key.to_owned(), input);
            }
            NodeHandle::Arguments(id) => {
                let argument = ArgumentField {
                    ty,
                    default_value: field.default.clone(),
                    description: field.comment.clone(),
                    deprecation_reason: field.deprecated.clone(),
                };
                self.registry
                    .arguments_mut(id)
                    .insert(key.to_owned(), argument);
            }
        }
        Ok(())
    }

    /// Target type of a field leaf. Entity references are resolved under `variant`.
    fn leaf_type(&mut self, leaf: &Leaf, key: &str, variant: Variant) -> Result<TypeId> {
        match leaf {
            Leaf::Builtin(scalar) => Ok(self.registry.builtin(*scalar)),
            Leaf::Scalar(scalar) => match self.registry.add_scalar(scalar.clone()) {
                Ok(id) => Ok(id),
                Err(err) => Err(clash(&self.registry, err, "scalar")),
            },
            Leaf::Enum(enum_type) => match self.registry.add_enum(enum_type.clone()) {
                Ok(id) => Ok(id),
                Err(err) => Err(clash(&self.registry, err, "enum")),
            },
            Leaf::Entity(id) => {
                if let Declaration::Union(union) = self.declaration(*id)? {
                    return self.compile_union(*id, union);
                }
                let name = self.resolve(Target::Decl(*id), key, variant)?;
                self.node_type(&variant.apply(&name), variant)
            }
            Leaf::Named(name) => {
                if let Some((decl, union)) = self.bundled_union(name) {
                    return self.compile_union(decl, union);
                }
                let name = self.resolve(Target::Named(name), key, variant)?;
                self.node_type(&variant.apply(&name), variant)
            }
        }
    }

    /// Argument list for a field's `args`, compiled under a fresh `_Arg` node.
    fn argument_list(&mut self, args: &FieldSchema, owner: &str, key: &str) -> Result<ArgsId> {
        let missing = || Error::MissingArgument {
            type_name: owner.to_owned(),
            field: key.to_owned(),
        };

        let target = match &args.shape {
            FieldShape::Leaf(Leaf::Entity(id)) => {
                if self.declaration(*id)?.is_union() {
                    return Err(missing());
                }
                Target::Decl(*id)
            }
            FieldShape::Leaf(Leaf::Named(name)) => Target::Named(name),
            _ => return Err(missing()),
        };

        let name = self.resolve(target, key, Variant::Argument)?;
        let node = self.nodes.get_or_create(
            &mut self.registry,
            &Variant::Argument.apply(&name),
            Variant::Argument,
        )?;
        match node {
            NodeHandle::Arguments(id) => Ok(id),
            _ => Err(missing()),
        }
    }

    /// Type id of the output or input node `name`.
    pub(super) fn node_type(&mut self, name: &str, variant: Variant) -> Result<TypeId> {
        let node = self
            .nodes
            .get_or_create(&mut self.registry, name, variant)?;
        node.type_id().ok_or_else(|| Error::TypeConflict {
            name: name.to_owned(),
            existing: node.variant().label(),
            requested: variant.label(),
        })
    }

    /// Union declared in the bundle registered under `name`, if any.
    fn bundled_union(&self, name: &str) -> Option<(DeclId, &'a UnionDecl)> {
        let catalog = self.catalog;
        self.bundles
            .get(name)?
            .members
            .iter()
            .find_map(|&decl| match catalog.get(decl) {
                Some(Declaration::Union(union)) => Some((decl, union)),
                _ => None,
            })
    }
}
