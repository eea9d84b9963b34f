//! Enum types from symbol/value maps.

use entigraph_core::{EnumType, EnumValue};
use indexmap::IndexMap;
use serde_json::Value;

/// Build an enum from `values`, in order.
///
/// Keys starting with a digit are dropped: value maps produced from numeric
/// enums carry reverse entries (`"0" -> "RED"`) that are not symbols.
pub fn compile_enum(
    name: impl Into<String>,
    description: Option<&str>,
    values: &IndexMap<String, Value>,
    descriptions: Option<&IndexMap<String, String>>,
) -> EnumType {
    let values = values
        .iter()
        .filter(|(key, _)| is_symbol(key))
        .map(|(key, value)| {
            let entry = EnumValue {
                value: value.clone(),
                description: descriptions.and_then(|d| d.get(key)).cloned(),
            };
            (key.clone(), entry)
        })
        .collect();

    EnumType {
        name: name.into(),
        description: description.map(str::to_owned),
        values,
    }
}

fn is_symbol(key: &str) -> bool {
    key.chars().next().is_some_and(|c| !c.is_ascii_digit())
}
