use std::sync::Arc;

use indexmap::IndexMap;

use super::*;

#[test]
fn ids_are_dense_and_stable() {
    let mut catalog = Catalog::new();
    let a = catalog.class("A", EntityDescriptor::new());
    let b = catalog.mapping(IndexMap::new());

    assert_eq!(a.index(), 0);
    assert_eq!(b.index(), 1);
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get(b).unwrap().label(), "mapping");
}

#[test]
fn forward_declared_class_takes_metadata_later() {
    let mut catalog = Catalog::new();
    let node = catalog.declare_class("Node");
    assert!(matches!(
        catalog.get(node),
        Some(Declaration::Class {
            descriptor: None,
            ..
        })
    ));

    let descriptor = EntityDescriptor::new().field("next", FieldSchema::entity(node));
    assert!(catalog.attach(node, descriptor));

    let Some(Declaration::Class {
        name,
        descriptor: Some(descriptor),
    }) = catalog.get(node)
    else {
        panic!("expected attached class");
    };
    assert_eq!(name, "Node");
    assert_eq!(descriptor.fields.len(), 1);
}

#[test]
fn foreign_id_is_not_found() {
    let mut large = Catalog::new();
    large.class("A", EntityDescriptor::new());
    let foreign = large.class("B", EntityDescriptor::new());

    let mut small = Catalog::new();
    small.class("A", EntityDescriptor::new());

    assert!(small.get(foreign).is_none());
    assert!(large.get(foreign).is_some());
}

#[test]
fn attach_rejects_non_class() {
    let mut catalog = Catalog::new();
    let inline = catalog.described(EntityDescriptor::named("Inline"));
    assert!(!catalog.attach(inline, EntityDescriptor::new()));
}

#[test]
fn descriptor_builder_keeps_field_order() {
    let descriptor = EntityDescriptor::named("User")
        .description("A person")
        .field("name", FieldSchema::string())
        .field("age", FieldSchema::int())
        .field("email", FieldSchema::string());

    let keys: Vec<&str> = descriptor.fields.keys().map(String::as_str).collect();
    assert_eq!(keys, ["name", "age", "email"]);
    assert_eq!(descriptor.description.as_deref(), Some("A person"));
}

#[test]
fn union_declaration() {
    let mut catalog = Catalog::new();
    let photo = catalog.class("Photo", EntityDescriptor::new());
    let media = catalog.union(UnionDecl {
        name: "Media".to_string(),
        description: None,
        members: vec![EntityRef::Decl(photo), EntityRef::Named("Video".to_string())],
        resolver: Arc::new(|_: &serde_json::Value| Some(0)),
    });

    assert!(catalog.get(media).is_some_and(Declaration::is_union));
    assert!(!catalog.get(photo).unwrap().is_union());
}

#[test]
fn namespace_preserves_export_order() {
    let mut catalog = Catalog::new();
    let user = catalog.class("User", EntityDescriptor::new());
    let namespace = Namespace::new()
        .export("User", user)
        .value("VERSION", serde_json::json!(2))
        .export("_Private", user);

    let keys: Vec<&str> = namespace.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["User", "VERSION", "_Private"]);
    assert_eq!(namespace.get("User"), Some(&Export::Decl(user)));
}
