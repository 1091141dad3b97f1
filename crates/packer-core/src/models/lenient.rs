//! Tolerant field decoders for persisted snapshots.
//!
//! Snapshots may have been written by older front ends that stored empty
//! strings for unset fields and unvalidated numbers for quantities. These
//! decoders map such values onto the model's optional fields instead of
//! failing the whole snapshot.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Decodes an optional string, treating blank text as absent.
pub(crate) fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Decodes a quantity, keeping only positive integers.
pub(crate) fn positive_quantity<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| match v {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse::<u64>().ok(),
            _ => None,
        })
        .filter(|q| *q > 0)
        .and_then(|q| u32::try_from(q).ok()))
}

/// Entities stored in ordered maps keyed by their own identifier.
pub(crate) trait Keyed {
    fn key(&self) -> &str;
}

/// Serializes an ordered id map as a plain sequence of its values.
pub(crate) fn serialize_seq<S, T>(map: &IndexMap<String, T>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    serializer.collect_seq(map.values())
}

/// Deserializes a sequence into an ordered id map. A repeated id keeps the
/// first position and the last value.
pub(crate) fn deserialize_seq<'de, D, T>(deserializer: D) -> Result<IndexMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Keyed,
{
    let values = Vec::<T>::deserialize(deserializer)?;
    Ok(values
        .into_iter()
        .map(|value| (value.key().to_string(), value))
        .collect())
}
