//! Conversion from parsed JSON and YAML documents into values

use rust_decimal::Decimal;

use crate::value::{Mapping, Value};

/// Convert a parsed JSON document.
///
/// Integers that fit `i64` become `Integer`, larger unsigned integers
/// become `Decimal`, everything else numeric becomes `Float`.
pub fn value_from_json(json: serde_json::Value) -> Value {
    use serde_json::Value as Json;

    match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(b),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Integer(i)
            } else if let Some(u) = n.as_u64() {
                Value::Decimal(Decimal::from(u))
            } else {
                n.as_f64().map_or(Value::Null, Value::Float)
            }
        }
        Json::String(s) => Value::string(s),
        Json::Array(items) => Value::list(items.into_iter().map(value_from_json).collect()),
        Json::Object(entries) => Value::map(
            entries
                .into_iter()
                .map(|(k, v)| (k, value_from_json(v)))
                .collect(),
        ),
    }
}

/// Convert a parsed YAML document.
///
/// Non-string keys are rendered as strings and tags are dropped.
pub fn value_from_yaml(yaml: serde_yaml::Value) -> Value {
    use serde_yaml::Value as Yaml;

    match yaml {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Integer(i)
            } else if let Some(u) = n.as_u64() {
                Value::Decimal(Decimal::from(u))
            } else {
                n.as_f64().map_or(Value::Null, Value::Float)
            }
        }
        Yaml::String(s) => Value::string(s),
        Yaml::Sequence(items) => Value::list(items.into_iter().map(value_from_yaml).collect()),
        Yaml::Mapping(entries) => Value::map(
            entries
                .into_iter()
                .map(|(k, v)| (yaml_key(k), value_from_yaml(v)))
                .collect(),
        ),
        Yaml::Tagged(tagged) => value_from_yaml(tagged.value),
    }
}

fn yaml_key(key: serde_yaml::Value) -> String {
    use serde_yaml::Value as Yaml;

    match key {
        Yaml::String(s) => s,
        Yaml::Bool(b) => b.to_string(),
        Yaml::Number(n) => n.to_string(),
        Yaml::Null => "null".to_string(),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// Convert a JSON document that must be an object.
pub fn mapping_from_json(json: serde_json::Value) -> Option<Mapping> {
    match value_from_json(json) {
        Value::Map(entries) => Some(unwrap_map(entries)),
        _ => None,
    }
}

/// Convert a YAML document that must be a mapping. An empty document
/// counts as an empty mapping.
pub fn mapping_from_yaml(yaml: serde_yaml::Value) -> Option<Mapping> {
    match value_from_yaml(yaml) {
        Value::Map(entries) => Some(unwrap_map(entries)),
        Value::Null => Some(Mapping::new()),
        _ => None,
    }
}

fn unwrap_map(entries: std::sync::Arc<Mapping>) -> Mapping {
    std::sync::Arc::try_unwrap(entries).unwrap_or_else(|shared| (*shared).clone())
}
