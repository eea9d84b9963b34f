//! GraphQL-style type expressions: `Name`, `Name!`, `[Name]`, `[Name!]!`.

use super::ManifestError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeShape {
    Named(String),
    List(Box<TypeExpr>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeExpr {
    pub shape: TypeShape,
    pub required: bool,
}

impl TypeExpr {
    pub fn parse(text: &str) -> Result<Self, ManifestError> {
        parse_inner(text.trim()).map_err(|reason| ManifestError::TypeExpr {
            expr: text.to_owned(),
            reason,
        })
    }
}

fn parse_inner(text: &str) -> Result<TypeExpr, &'static str> {
    let (body, required) = match text.strip_suffix('!') {
        Some(body) => (body.trim_end(), true),
        None => (text, false),
    };
    if body.is_empty() {
        return Err("expected a type name");
    }

    let shape = if let Some(rest) = body.strip_prefix('[') {
        let inner = rest.strip_suffix(']').ok_or("unclosed `[`")?;
        TypeShape::List(Box::new(parse_inner(inner.trim())?))
    } else if is_name(body) {
        TypeShape::Named(body.to_owned())
    } else {
        return Err("invalid type name");
    };

    Ok(TypeExpr { shape, required })
}

fn is_name(text: &str) -> bool {
    let mut chars = text.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
