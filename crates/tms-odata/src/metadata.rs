//! Verbose-mode payload envelopes.

use serde_json::{Map, Value, json};

use crate::ODataError;

/// `SP.Data.{name}ListItem`, with spaces encoded as `_x0020_`.
pub fn entity_type_name(list_name: &str) -> String {
    format!("SP.Data.{}ListItem", list_name.replace(' ', "_x0020_"))
}

/// Insert `__metadata: {"type": type_name}` into an object payload.
/// An existing `__metadata` member is replaced.
pub fn with_metadata(payload: Value, type_name: &str) -> Result<Value, ODataError> {
    let Value::Object(fields) = payload else {
        return Err(ODataError::NotAnObject);
    };
    let mut out = Map::with_capacity(fields.len() + 1);
    out.insert("__metadata".to_string(), json!({ "type": type_name }));
    for (key, value) in fields {
        if key != "__metadata" {
            out.insert(key, value);
        }
    }
    Ok(Value::Object(out))
}

/// The `d` member of a verbose response.
pub fn unwrap_verbose(body: Value) -> Result<Value, ODataError> {
    match body {
        Value::Object(mut map) => map.remove("d").ok_or(ODataError::MissingEnvelope("d")),
        _ => Err(ODataError::MissingEnvelope("d")),
    }
}

/// The `value` array of a nometadata collection response.
pub fn unwrap_collection(body: Value) -> Result<Vec<Value>, ODataError> {
    match body {
        Value::Object(mut map) => match map.remove("value") {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(ODataError::MissingEnvelope("value")),
        },
        _ => Err(ODataError::MissingEnvelope("value")),
    }
}
