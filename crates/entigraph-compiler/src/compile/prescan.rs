//! Pre-scan: group exported declarations into bundles and seed the roots.

use std::collections::HashSet;

use super::Variant;
use super::compiler::{Compiler, ROOT_NAMES};
use crate::declare::{Declaration, Export, Namespace};
use crate::{Error, Result};

impl Compiler<'_> {
    pub(super) fn prescan(&mut self, namespaces: &[Namespace]) -> Result<()> {
        let mut seen = HashSet::new();
        let mut roots = HashSet::new();

        for namespace in namespaces {
            for (key, export) in namespace.iter() {
                if self.config.is_private(key) {
                    continue;
                }
                let Export::Decl(decl) = *export else {
                    continue;
                };
                let declaration = self.declaration(decl)?;

                if ROOT_NAMES.iter().any(|root| *root == key) {
                    if !roots.insert((decl, key)) {
                        continue;
                    }
                    // A field reference resolves to the declared name; only a
                    // matching one points at the root node itself
                    if declared_name(declaration) == Some(key) {
                        self.scheduled[Variant::Output.index()].insert(decl);
                    }
                    self.enqueue(decl, key.to_owned(), Variant::Output);
                    continue;
                }

                if !seen.insert(decl) {
                    continue;
                }

                let name = match declaration {
                    Declaration::Class {
                        name,
                        descriptor: None,
                    } => return Err(Error::MissingDescriptor(name.clone())),
                    Declaration::Class { name, .. } => name.clone(),
                    _ => key.to_owned(),
                };
                self.bundles.entry(name).or_default().members.push(decl);
            }
        }

        tracing::debug!(
            roots = self.queue.len(),
            bundles = self.bundles.len(),
            "prescan finished"
        );
        Ok(())
    }
}

/// Name a field reference to `declaration` resolves to under OUTPUT, when it
/// does not depend on the referencing field.
fn declared_name(declaration: &Declaration) -> Option<&str> {
    match declaration {
        Declaration::Class { name, .. } => Some(name),
        Declaration::Described(descriptor) => descriptor.name.as_deref(),
        Declaration::Mapping(_) | Declaration::Union(_) => None,
    }
}
