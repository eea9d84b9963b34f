//! Reference resolution: canonical names and scheduling.

use std::collections::HashMap;

use super::Variant;
use super::compiler::{Compiler, QueueEntry};
use crate::declare::{DeclId, Declaration};
use crate::{Error, Result};

/// Per-run counter of generated names, `{base}_{n}` with `n` from 0 per base.
#[derive(Debug, Default)]
pub struct NameAllocator {
    counters: HashMap<String, u32>,
}

impl NameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, base: &str) -> String {
        let counter = self.counters.entry(base.to_owned()).or_insert(0);
        let name = format!("{base}_{counter}");
        *counter += 1;
        name
    }
}

/// What a field or union member points at.
#[derive(Clone, Copy, Debug)]
pub(super) enum Target<'r> {
    Decl(DeclId),
    Named(&'r str),
}

impl Compiler<'_> {
    /// Canonical (unsuffixed) name of `target`, scheduling its compilation
    /// under `variant` on first sight.
    pub(super) fn resolve(
        &mut self,
        target: Target<'_>,
        field_key: &str,
        variant: Variant,
    ) -> Result<String> {
        let name = match target {
            Target::Named(name) => name.to_owned(),
            Target::Decl(id) => match self.declaration(id)? {
                Declaration::Class {
                    name,
                    descriptor: Some(_),
                } => name.clone(),
                Declaration::Class {
                    name,
                    descriptor: None,
                } => return Err(Error::MissingDescriptor(name.clone())),
                // Argument lists are positional: a fresh node per use site
                Declaration::Described(descriptor) if variant == Variant::Argument => {
                    let base = descriptor.name.as_deref().unwrap_or(field_key);
                    let name = self.names.allocate(base);
                    self.enqueue(id, name.clone(), variant);
                    return Ok(name);
                }
                Declaration::Mapping(_) if variant == Variant::Argument => {
                    let name = self.names.allocate(field_key);
                    self.enqueue(id, name.clone(), variant);
                    return Ok(name);
                }
                declaration => {
                    if let Some(name) = self.inline_names.get(&(id, variant)) {
                        return Ok(name.clone());
                    }
                    let name = match declaration {
                        Declaration::Described(descriptor) => descriptor
                            .name
                            .clone()
                            .unwrap_or_else(|| field_key.to_owned()),
                        _ => self.names.allocate(field_key),
                    };
                    self.inline_names.insert((id, variant), name.clone());
                    name
                }
            },
        };

        self.schedule_bundle(&name, variant);
        if let Target::Decl(id) = target {
            if self.scheduled[variant.index()].insert(id) {
                self.enqueue(id, name.clone(), variant);
            }
        }

        Ok(name)
    }

    /// Queue every declaration of the bundle `name`, once per variant.
    fn schedule_bundle(&mut self, name: &str, variant: Variant) {
        let Some(bundle) = self.bundles.get_mut(name) else {
            return;
        };
        let slot = variant.index();
        if bundle.scheduled[slot] {
            return;
        }
        bundle.scheduled[slot] = true;

        tracing::debug!(
            name,
            variant = ?variant,
            members = bundle.members.len(),
            "bundle scheduled"
        );
        for &decl in &bundle.members {
            self.scheduled[slot].insert(decl);
            self.queue.push(QueueEntry {
                decl,
                name: name.to_owned(),
                variant,
            });
        }
    }
}
