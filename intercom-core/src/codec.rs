//! Wire codec
//!
//! The API emits the `id` field as a JSON string on some endpoints and as a
//! JSON number on others. [`WireId`] records which shape the reader saw so the
//! mapper can normalize it into a canonical string.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde_json::Number;
use thiserror::Error;

/// Maximum number of response bytes quoted in a decode error
const CONTEXT_LIMIT: usize = 256;

/// Errors raised while turning response bytes into domain values
#[derive(Debug, Error)]
pub enum WireError {
    /// The `id` field held something other than a string, number or null
    #[error("malformed identifier: expected a string or number, found {found}")]
    MalformedIdentifier {
        /// JSON kind that was read instead
        found: &'static str,
    },

    /// The response body did not match the expected shape
    #[error("failed to decode response `{context}`: {source}")]
    Decode {
        /// Leading excerpt of the offending bytes
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl WireError {
    /// Build a decode error quoting the start of `bytes`
    pub fn decode(bytes: &[u8], source: serde_json::Error) -> Self {
        Self::Decode {
            context: excerpt(bytes),
            source,
        }
    }
}

/// Raw `id` as read from the wire
#[derive(Debug, Clone, Default, PartialEq)]
pub enum WireId {
    /// Missing or `null`
    #[default]
    Absent,
    /// JSON string, kept verbatim
    Text(String),
    /// JSON number
    Number(Number),
    /// Any other JSON kind; carries the kind name for error reporting
    Malformed(&'static str),
}

impl WireId {
    /// Normalize into the canonical string form
    ///
    /// Absent ids become the empty string.
    pub fn into_canonical(self) -> Result<String, WireError> {
        match self {
            WireId::Absent => Ok(String::new()),
            WireId::Text(text) => Ok(text),
            WireId::Number(number) => Ok(canonical_number(&number)),
            WireId::Malformed(found) => Err(WireError::MalformedIdentifier { found }),
        }
    }
}

impl<'de> Deserialize<'de> for WireId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(WireIdVisitor)
    }
}

struct WireIdVisitor;

impl<'de> Visitor<'de> for WireIdVisitor {
    type Value = WireId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an identifier")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<WireId, E> {
        Ok(WireId::Text(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<WireId, E> {
        Ok(WireId::Text(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<WireId, E> {
        Ok(WireId::Number(value.into()))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<WireId, E> {
        Ok(WireId::Number(value.into()))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<WireId, E> {
        Ok(Number::from_f64(value)
            .map(WireId::Number)
            .unwrap_or(WireId::Malformed("non-finite number")))
    }

    fn visit_bool<E: de::Error>(self, _value: bool) -> Result<WireId, E> {
        Ok(WireId::Malformed("boolean"))
    }

    fn visit_unit<E: de::Error>(self) -> Result<WireId, E> {
        Ok(WireId::Absent)
    }

    fn visit_none<E: de::Error>(self) -> Result<WireId, E> {
        Ok(WireId::Absent)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<WireId, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(WireId::Malformed("array"))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<WireId, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(WireId::Malformed("object"))
    }
}

/// Format a JSON number as a plain decimal string
///
/// Integers print as-is. Floats use the shortest exact representation with no
/// exponent, so `482.0` prints as `482`.
pub fn canonical_number(number: &Number) -> String {
    if let Some(value) = number.as_u64() {
        value.to_string()
    } else if let Some(value) = number.as_i64() {
        value.to_string()
    } else {
        number
            .as_f64()
            .map(|value| value.to_string())
            .unwrap_or_else(|| number.to_string())
    }
}

fn excerpt(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(&bytes[..bytes.len().min(CONTEXT_LIMIT)]);
    if bytes.len() > CONTEXT_LIMIT {
        format!("{}...", text)
    } else {
        text.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Record {
        #[serde(default)]
        id: WireId,
    }

    fn canonical(json: &str) -> Result<String, WireError> {
        let record: Record = serde_json::from_str(json).unwrap();
        record.id.into_canonical()
    }

    #[test]
    fn test_number_id_is_stringified() {
        assert_eq!(canonical(r#"{"id": 482}"#).unwrap(), "482");
    }

    #[test]
    fn test_string_id_is_verbatim() {
        assert_eq!(canonical(r#"{"id": "482"}"#).unwrap(), "482");
        assert_eq!(canonical(r#"{"id": "5a1b"}"#).unwrap(), "5a1b");
    }

    #[test]
    fn test_null_and_missing_ids_are_empty() {
        assert_eq!(canonical(r#"{"id": null}"#).unwrap(), "");
        assert_eq!(canonical("{}").unwrap(), "");
    }

    #[test]
    fn test_float_ids_have_no_trailing_zeros() {
        assert_eq!(canonical(r#"{"id": 482.0}"#).unwrap(), "482");
        assert_eq!(canonical(r#"{"id": 1.5}"#).unwrap(), "1.5");
        assert_eq!(canonical(r#"{"id": 1e3}"#).unwrap(), "1000");
        assert_eq!(canonical(r#"{"id": -7}"#).unwrap(), "-7");
    }

    #[test]
    fn test_other_kinds_are_malformed() {
        for (json, kind) in [
            (r#"{"id": true}"#, "boolean"),
            (r#"{"id": [1, 2]}"#, "array"),
            (r#"{"id": {"value": 1}}"#, "object"),
        ] {
            match canonical(json) {
                Err(WireError::MalformedIdentifier { found }) => assert_eq!(found, kind),
                other => panic!("expected malformed identifier for {}, got {:?}", json, other),
            }
        }
    }

    #[test]
    fn test_decode_error_context_is_bounded() {
        let bytes = vec![b'x'; 1000];
        let source = serde_json::from_slice::<serde_json::Value>(&bytes).unwrap_err();
        match WireError::decode(&bytes, source) {
            WireError::Decode { context, .. } => {
                assert_eq!(context.len(), CONTEXT_LIMIT + 3);
                assert!(context.ends_with("..."));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
