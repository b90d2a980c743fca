use serde_json::Value;

use crate::error::OpcError;

/// The evaluated configuration object.
pub type ResultMap = serde_json::Map<String, Value>;

/// Coerce an engine result into a [`ResultMap`].
///
/// Anything other than a JSON object is rejected with
/// [`OpcError::UnexpectedResultShape`].
pub fn into_result_map(value: Value) -> Result<ResultMap, OpcError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(OpcError::UnexpectedResultShape(json_kind(&other))),
    }
}

/// Human-readable JSON kind, used in error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
