use crate::{Colors, RegistryError, Schema, TYPE_INT, TypeId, TypeRegistry};

#[test]
fn colors_toggle() {
    assert!(Colors::new(true).is_enabled());
    assert!(!Colors::new(false).is_enabled());
    assert_eq!(Colors::default(), Colors::OFF);
}

#[test]
fn colors_paint() {
    let on = Colors::ON;
    assert_eq!(on.paint(on.keyword, "type"), "\x1b[35mtype\x1b[0m");
    assert_eq!(Colors::OFF.paint(Colors::OFF.keyword, "type"), "type");
}

#[test]
fn registry_error_messages() {
    let err = RegistryError::DuplicateType {
        name: "User".to_string(),
    };
    assert_eq!(err.to_string(), "type name already in use: User");

    let err = RegistryError::UnknownType(TypeId(42));
    assert_eq!(err.to_string(), "unknown type id: TypeId(42)");
}

#[test]
fn schema_roots_in_conventional_order() {
    let mut registry = TypeRegistry::new();
    let query = registry.add_object("Query", None).unwrap();
    let subscription = registry.add_object("Subscription", None).unwrap();

    let schema = Schema::new(registry)
        .with_query(Some(query))
        .with_subscription(Some(subscription));

    let roots: Vec<_> = schema.roots().collect();
    assert_eq!(roots, vec![("Query", query), ("Subscription", subscription)]);
    assert_eq!(schema.mutation(), None);
    assert!(schema.object("Query").is_some());
    assert!(schema.object("Int").is_none());
    assert_eq!(schema.registry().name(TYPE_INT), Some("Int"));
}
