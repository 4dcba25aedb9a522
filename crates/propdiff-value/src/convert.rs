//! Conversion boundary between the serde data model and the generic tree.
//!
//! Typed values enter the diff engine through this module: any
//! `T: Serialize` is serialized into a `serde_json::Value` and mapped onto
//! [`Value`]. The diff engine itself never performs this conversion; it
//! only consumes the resulting tree.

use serde::Serialize;

use crate::error::ValueError;
use crate::number::Number;
use crate::value::Value;

impl From<serde_json::Number> for Number {
    fn from(n: serde_json::Number) -> Self {
        if let Some(u) = n.as_u64() {
            Number::from(u)
        } else if let Some(i) = n.as_i64() {
            Number::from(i)
        } else {
            Number::from(n.as_f64().unwrap_or(f64::NAN))
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.into()),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(fields) => Value::Mapping(
                fields
                    .into_iter()
                    .map(|(name, value)| (name, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Convert any serializable value into the generic tree model.
pub fn to_value<T: Serialize>(value: &T) -> Result<Value, ValueError> {
    let json =
        serde_json::to_value(value).map_err(|e| ValueError::Serialization(e.to_string()))?;
    Ok(Value::from(json))
}
