use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;

/// Handle returned by the backend's create call. Only the id matters here;
/// the backend may encode it as a string or a number and it is kept opaque.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedRequest {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
}

/// The backend's report of one executed call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResponseDescriptor {
    pub status_code: u16,
    /// Milliseconds.
    #[serde(default)]
    pub duration: f64,
    /// Bytes.
    #[serde(default, deserialize_with = "byte_count")]
    pub size: u64,
    /// Entries in the order the backend sent them.
    #[serde(default, deserialize_with = "header_entries")]
    pub headers: Vec<(String, String)>,
    #[serde(default)]
    pub body: String,
}

fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) if !s.is_empty() => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!("unusable request id: {other}"))),
    }
}

/// Any non-negative JSON number; fractional sizes are rounded.
fn byte_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let n = serde_json::Number::deserialize(deserializer)?;
    if let Some(n) = n.as_u64() {
        return Ok(n);
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f >= 0.0 => Ok(f.round() as u64),
        _ => Err(de::Error::custom(format!("unusable size: {n}"))),
    }
}

fn header_entries<'de, D>(deserializer: D) -> Result<Vec<(String, String)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct Entries;

    impl<'de> Visitor<'de> for Entries {
        type Value = Vec<(String, String)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of header names to values")
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((name, value)) = map.next_entry::<String, String>()? {
                entries.push((name, value));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_any(Entries)
}
