//! Lowering: manifest to a `Catalog` and `Namespace`s.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use entigraph_compiler::{
    Catalog, DeclId, EntityDescriptor, EntityRef, Export, FieldSchema, Namespace, UnionDecl,
    compile_enum,
};
use entigraph_core::{EnumType, ScalarType};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use super::type_expr::{TypeExpr, TypeShape};
use super::{EntitySpec, FieldSpec, Manifest, ManifestError, TypeSpec, UnionSpec, is_entity};

/// Compiler input built from a manifest.
#[derive(Debug)]
pub struct Lowered {
    pub catalog: Catalog,
    pub namespaces: Vec<Namespace>,
}

pub fn lower(manifest: &Manifest) -> Result<Lowered, ManifestError> {
    let mut lowerer = Lowerer {
        catalog: Catalog::new(),
        scalars: HashMap::new(),
        enums: HashMap::new(),
        unions: HashMap::new(),
    };

    for (name, spec) in &manifest.scalars {
        let mut scalar = ScalarType::new(name.as_str());
        if let Some(text) = &spec.description {
            scalar = scalar.description(text.as_str());
        }
        lowerer.scalars.insert(name.as_str(), Arc::new(scalar));
    }

    for (name, spec) in &manifest.enums {
        let enum_type = compile_enum(
            name.as_str(),
            spec.description.as_deref(),
            &spec.values,
            spec.descriptions.as_ref(),
        );
        lowerer.enums.insert(name.as_str(), Arc::new(enum_type));
    }

    let entities = entity_names(manifest);
    for (name, spec) in &manifest.unions {
        let decl = lowerer.union(name, spec, &entities)?;
        lowerer.unions.insert(name.as_str(), decl);
    }

    let mut namespaces = Vec::with_capacity(manifest.namespaces.len());
    for exports in &manifest.namespaces {
        let mut namespace = Namespace::new();
        for (key, value) in exports {
            if !is_entity(value) {
                namespace.insert(key.as_str(), Export::Value(value.clone()));
                continue;
            }
            let spec = EntitySpec::deserialize(value)?;
            let descriptor = lowerer.descriptor(&spec)?;
            let name = spec.name.as_deref().unwrap_or(key);
            let decl = lowerer.catalog.class(name, descriptor);
            namespace.insert(key.as_str(), Export::Decl(decl));
        }
        namespaces.push(namespace);
    }

    tracing::debug!(
        declarations = lowerer.catalog.len(),
        namespaces = namespaces.len(),
        "manifest lowered"
    );
    Ok(Lowered {
        catalog: lowerer.catalog,
        namespaces,
    })
}

/// Class names declared across all namespaces.
fn entity_names(manifest: &Manifest) -> HashSet<&str> {
    manifest
        .namespaces
        .iter()
        .flatten()
        .filter(|(_, value)| is_entity(value))
        .map(|(key, value)| {
            value
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or(key.as_str())
        })
        .collect()
}

struct Lowerer<'m> {
    catalog: Catalog,
    scalars: HashMap<&'m str, Arc<ScalarType>>,
    enums: HashMap<&'m str, Arc<EnumType>>,
    unions: HashMap<&'m str, DeclId>,
}

impl Lowerer<'_> {
    fn union(
        &mut self,
        name: &str,
        spec: &UnionSpec,
        entities: &HashSet<&str>,
    ) -> Result<DeclId, ManifestError> {
        if let Some(member) = spec
            .members
            .iter()
            .find(|member| !entities.contains(member.as_str()))
        {
            return Err(ManifestError::UnknownMember {
                union: name.to_owned(),
                member: member.clone(),
            });
        }

        let members = spec.members.clone();
        let discriminator = spec.discriminator.clone();
        Ok(self.catalog.union(UnionDecl {
            name: name.to_owned(),
            description: spec.description.clone(),
            members: spec.members.iter().cloned().map(EntityRef::Named).collect(),
            resolver: Arc::new(move |value: &Value| {
                let tag = value.get(&discriminator)?.as_str()?;
                members.iter().position(|member| member == tag)
            }),
        }))
    }

    fn descriptor(&mut self, spec: &EntitySpec) -> Result<EntityDescriptor, ManifestError> {
        Ok(EntityDescriptor {
            name: spec.name.clone(),
            description: spec.description.clone(),
            fields: self.fields(&spec.fields)?,
        })
    }

    fn fields(
        &mut self,
        specs: &IndexMap<String, FieldSpec>,
    ) -> Result<IndexMap<String, FieldSchema>, ManifestError> {
        specs
            .iter()
            .map(|(key, spec)| Ok((key.clone(), self.field(spec)?)))
            .collect()
    }

    fn field(&mut self, spec: &FieldSpec) -> Result<FieldSchema, ManifestError> {
        let object = match spec {
            FieldSpec::Expr(text) => return self.type_expr(text),
            FieldSpec::Full(object) => object,
        };

        let mut schema = match &object.ty {
            Some(ty) => self.type_spec(ty)?,
            None => FieldSchema::new(),
        };
        if let Some(value) = &object.default {
            schema = schema.default(value.clone());
        }
        if let Some(text) = &object.comment {
            schema = schema.comment(text.as_str());
        }
        if let Some(reason) = &object.deprecated {
            schema = schema.deprecated(reason.as_str());
        }
        if let Some(name) = &object.rename {
            schema = schema.rename(name.as_str());
        }
        if let Some(args) = &object.args {
            schema = schema.args(self.type_spec(args)?);
        }
        Ok(schema)
    }

    fn type_spec(&mut self, spec: &TypeSpec) -> Result<FieldSchema, ManifestError> {
        match spec {
            TypeSpec::Expr(text) => self.type_expr(text),
            TypeSpec::Inline(entity) => {
                // Named or described inline types keep their metadata
                let decl = if entity.name.is_some() || entity.description.is_some() {
                    let descriptor = self.descriptor(entity)?;
                    self.catalog.described(descriptor)
                } else {
                    let fields = self.fields(&entity.fields)?;
                    self.catalog.mapping(fields)
                };
                Ok(FieldSchema::entity(decl))
            }
        }
    }

    fn type_expr(&self, text: &str) -> Result<FieldSchema, ManifestError> {
        let expr = TypeExpr::parse(text)?;
        Ok(self.schema(&expr))
    }

    fn schema(&self, expr: &TypeExpr) -> FieldSchema {
        let schema = match &expr.shape {
            TypeShape::Named(name) => self.leaf(name),
            TypeShape::List(items) => FieldSchema::list(self.schema(items)),
        };
        if expr.required {
            schema.required()
        } else {
            schema
        }
    }

    /// Builtins first, then scalars, enums and unions; anything else is an
    /// entity named by its logical name.
    fn leaf(&self, name: &str) -> FieldSchema {
        match name {
            "String" => FieldSchema::string(),
            "Float" => FieldSchema::float(),
            "Boolean" => FieldSchema::boolean(),
            "Int" => FieldSchema::int(),
            "ID" => FieldSchema::id(),
            _ => {
                if let Some(scalar) = self.scalars.get(name) {
                    FieldSchema::scalar(scalar.clone())
                } else if let Some(enum_type) = self.enums.get(name) {
                    FieldSchema::enumeration(enum_type.clone())
                } else if let Some(&decl) = self.unions.get(name) {
                    FieldSchema::entity(decl)
                } else {
                    FieldSchema::named(name)
                }
            }
        }
    }
}
