use super::*;

#[test]
fn named_type_unwraps_all_wrappers() {
    let ty = TypeRef::named(TYPE_INT).non_null().list().non_null();
    assert_eq!(ty.named_type(), TYPE_INT);
    assert_eq!(ty.depth(), 3);
}

#[test]
fn list_detection_sees_through_non_null() {
    assert!(TypeRef::named(TYPE_INT).list().non_null().is_list());
    assert!(TypeRef::named(TYPE_INT).list().is_list());
    assert!(!TypeRef::named(TYPE_INT).non_null().is_list());
}

#[test]
fn bare_named_has_no_wrappers() {
    let ty = TypeRef::named(TYPE_STRING);
    assert_eq!(ty.depth(), 0);
    assert!(!ty.is_non_null());
    assert!(!ty.is_list());
}
