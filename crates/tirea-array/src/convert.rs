//! Conversion between JSON arrays and index-keyed JSON objects.

use crate::error::value_type_name;
use crate::{ArrayError, ArrayResult};
use serde_json::{Map, Value};

/// Convert an array into an object having the array indices as keys.
///
/// Keys are inserted in index order: `"0"`, `"1"`, ...
///
/// ```
/// use serde_json::json;
/// use tirea_array::array_to_object;
///
/// let obj = array_to_object(&[json!(10), json!(20)]);
/// assert_eq!(serde_json::Value::Object(obj), json!({"0": 10, "1": 20}));
/// ```
pub fn array_to_object(array: &[Value]) -> Map<String, Value> {
    array
        .iter()
        .enumerate()
        .map(|(i, v)| (i.to_string(), v.clone()))
        .collect()
}

/// Get the values of an object as an array, in the object's own order.
pub fn object_to_array(object: &Map<String, Value>) -> Vec<Value> {
    object.values().cloned().collect()
}

/// [`array_to_object`] for a value that must be a JSON array.
pub fn value_array_to_object(value: &Value) -> ArrayResult<Value> {
    match value {
        Value::Array(items) => Ok(Value::Object(array_to_object(items))),
        other => Err(ArrayError::type_mismatch("array", value_type_name(other))),
    }
}

/// [`object_to_array`] for a value that must be a JSON object.
pub fn value_object_to_array(value: &Value) -> ArrayResult<Value> {
    match value {
        Value::Object(map) => Ok(Value::Array(object_to_array(map))),
        other => Err(ArrayError::type_mismatch("object", value_type_name(other))),
    }
}
