use entigraph_core::BuiltinScalar;
use serde_json::{Map, Value, json};

use super::*;

#[test]
fn builtin_constructors() {
    let cases = [
        (FieldSchema::string(), BuiltinScalar::String),
        (FieldSchema::float(), BuiltinScalar::Float),
        (FieldSchema::boolean(), BuiltinScalar::Boolean),
        (FieldSchema::int(), BuiltinScalar::Int),
        (FieldSchema::id(), BuiltinScalar::Id),
    ];
    for (schema, expected) in cases {
        assert!(matches!(schema.leaf(), Some(Leaf::Builtin(s)) if *s == expected));
        assert!(!schema.is_required());
    }
}

#[test]
fn leaf_found_through_nested_lists() {
    let schema = FieldSchema::list(FieldSchema::list(FieldSchema::named("Tag").required()));
    assert!(matches!(schema.leaf(), Some(Leaf::Named(name)) if name == "Tag"));
}

#[test]
fn unset_has_no_leaf() {
    assert!(FieldSchema::new().leaf().is_none());
    assert!(FieldSchema::list(FieldSchema::new()).leaf().is_none());
}

#[test]
fn modifiers_accumulate() {
    let schema = FieldSchema::int()
        .required()
        .default(json!(3))
        .comment("Page size")
        .deprecated("use limit")
        .rename("size")
        .args(FieldSchema::named("Page"));

    assert!(schema.is_required());
    assert_eq!(schema.default_value(), Some(&json!(3)));
    assert_eq!(schema.comment.as_deref(), Some("Page size"));
    assert_eq!(schema.deprecated.as_deref(), Some("use limit"));
    assert_eq!(schema.rename.as_deref(), Some("size"));
    assert!(matches!(
        schema.args_schema().and_then(FieldSchema::leaf),
        Some(Leaf::Named(name)) if name == "Page"
    ));
}

#[test]
fn hooks_are_carried() {
    let schema = FieldSchema::string()
        .resolver(|parent: &Value, _: &Map<String, Value>| parent["name"].clone());

    let resolve = schema.resolver.clone().unwrap();
    assert_eq!(resolve(&json!({ "name": "Ada" }), &Map::new()), json!("Ada"));
    assert!(schema.subscribe.is_none());

    let debug = format!("{schema:?}");
    assert!(debug.contains("resolver: true"));
}
