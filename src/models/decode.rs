//! Payload decoding rules shared by every record type.
//!
//! Records only decode from JSON objects, at the top of a request body and
//! wherever they are nested. Ids are never negative.

use serde::de::{self, DeserializeOwned, Unexpected};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a record from a parsed request body.
pub fn object<T: DeserializeOwned>(value: Value) -> Result<T, serde_json::Error> {
    from_object(value)
}

/// `deserialize_with` for a list of nested records.
pub fn objects<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Vec::<Value>::deserialize(deserializer)?
        .into_iter()
        .map(from_object)
        .collect()
}

/// `deserialize_with` for an optional nested record; `null` is `None`.
pub fn optional_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Option::<Value>::deserialize(deserializer)?
        .map(from_object)
        .transpose()
}

/// `deserialize_with` for ids and foreign keys.
pub fn id<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let n = i32::deserialize(deserializer)?;
    if n < 0 {
        return Err(de::Error::invalid_value(
            Unexpected::Signed(n.into()),
            &"a non-negative id",
        ));
    }
    Ok(n)
}

fn from_object<T: DeserializeOwned, E: de::Error>(value: Value) -> Result<T, E> {
    match value {
        Value::Object(_) => serde_json::from_value(value).map_err(E::custom),
        other => Err(E::invalid_type(unexpected(&other), &"a JSON object")),
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}
