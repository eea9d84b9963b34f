use indexmap::IndexMap;
use serde_json::{Value, json};

use crate::compile_enum;

fn value_map(entries: &[(&str, Value)]) -> IndexMap<String, Value> {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone()))
        .collect()
}

#[test]
fn numeric_keys_are_dropped() {
    let values = value_map(&[("RED", json!(0)), ("GREEN", json!(1)), ("0", json!("x"))]);
    let color = compile_enum("Color", None, &values, None);

    let symbols: Vec<&str> = color.symbols().collect();
    assert_eq!(symbols, ["RED", "GREEN"]);
    assert_eq!(color.values["GREEN"].value, json!(1));
}

#[test]
fn empty_key_is_dropped() {
    let values = value_map(&[("", json!(0)), ("A", json!(1))]);
    let symbols: Vec<String> = compile_enum("E", None, &values, None)
        .symbols()
        .map(str::to_owned)
        .collect();
    assert_eq!(symbols, ["A"]);
}

#[test]
fn descriptions_attach_per_value() {
    let values = value_map(&[("ACTIVE", json!("a")), ("BANNED", json!("b"))]);
    let mut descriptions = IndexMap::new();
    descriptions.insert("BANNED".to_string(), "Blocked by a moderator".to_string());

    let status = compile_enum("Status", Some("Account state"), &values, Some(&descriptions));

    assert_eq!(status.description.as_deref(), Some("Account state"));
    assert_eq!(status.values["ACTIVE"].description, None);
    assert_eq!(
        status.values["BANNED"].description.as_deref(),
        Some("Blocked by a moderator")
    );
}
