/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use serde_json::Value;

/// Returns a copy of `data` with every property called `property` removed, at
/// any depth. Arrays are descended as well as objects; the input is untouched.
///
/// # Example
/// ```
/// use odata_read_oracle::utils::remove_property;
/// use serde_json::json;
///
/// let data = json!({"odata.metadata": "x", "d": [{"odata.metadata": "y", "id": 1}]});
/// assert_eq!(remove_property(&data, "odata.metadata"), json!({"d": [{"id": 1}]}));
/// ```
#[must_use]
pub fn remove_property(data: &Value, property: &str) -> Value {
    let mut copy = data.clone();
    strip_property(&mut copy, property);
    copy
}

/// Removes every property called `property` from `data` in place, at any depth.
pub fn strip_property(data: &mut Value, property: &str) {
    match data {
        Value::Object(map) => {
            map.remove(property);
            for child in map.values_mut() {
                strip_property(child, property);
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                strip_property(item, property);
            }
        }
        _ => {}
    }
}
