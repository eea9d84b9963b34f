//! JSON declaration manifests.
//!
//! A manifest lists custom scalars, enums, unions, and namespaces of entity
//! declarations. `lower` turns it into a `Catalog` plus `Namespace`s for the
//! compiler.

mod lower;
mod type_expr;

#[cfg(test)]
mod lower_tests;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

pub use lower::lower;

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid type expression `{expr}`: {reason}")]
    TypeExpr { expr: String, reason: &'static str },

    #[error("union `{union}` has unknown member `{member}`")]
    UnknownMember { union: String, member: String },
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub scalars: IndexMap<String, ScalarSpec>,
    #[serde(default)]
    pub enums: IndexMap<String, EnumSpec>,
    #[serde(default)]
    pub unions: IndexMap<String, UnionSpec>,
    /// Each namespace maps export keys to entity declarations or plain values.
    #[serde(default)]
    pub namespaces: Vec<IndexMap<String, Value>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScalarSpec {
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EnumSpec {
    pub description: Option<String>,
    pub values: IndexMap<String, Value>,
    pub descriptions: Option<IndexMap<String, String>>,
}

#[derive(Debug, Deserialize)]
pub struct UnionSpec {
    pub description: Option<String>,
    pub members: Vec<String>,
    /// Key whose string value names the member a runtime value belongs to.
    pub discriminator: String,
}

/// Entity declaration: a namespace entry or inline type carrying `fields`.
#[derive(Debug, Deserialize)]
pub struct EntitySpec {
    pub name: Option<String>,
    pub description: Option<String>,
    pub fields: IndexMap<String, FieldSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum FieldSpec {
    Expr(String),
    Full(FieldObject),
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldObject {
    #[serde(rename = "type")]
    pub ty: Option<TypeSpec>,
    pub default: Option<Value>,
    pub comment: Option<String>,
    pub deprecated: Option<String>,
    pub rename: Option<String>,
    pub args: Option<TypeSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TypeSpec {
    Expr(String),
    Inline(EntitySpec),
}

impl Manifest {
    pub fn parse(text: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a manifest from `path`, or stdin for `-`.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let text = if path.as_os_str() == "-" {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| ManifestError::Io {
                    path: "<stdin>".to_owned(),
                    source,
                })?;
            buf
        } else {
            fs::read_to_string(path).map_err(|source| ManifestError::Io {
                path: path.display().to_string(),
                source,
            })?
        };
        Self::parse(&text)
    }
}

/// Whether a namespace value declares an entity.
pub(crate) fn is_entity(value: &Value) -> bool {
    value.get("fields").is_some_and(Value::is_object)
}
