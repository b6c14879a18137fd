//! Conversion between typed setting values and raw store bytes.

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors produced by a [`Codec`].
#[derive(Debug, Error)]
pub enum CodecError {
    /// The value can't be represented in the codec's format.
    #[error("Failed to encode setting: {0}")]
    Encode(#[source] BoxError),
    /// The bytes don't describe a value of the requested type.
    #[error("Failed to decode setting: {0}")]
    Decode(#[source] BoxError),
}

/// A structured serialization format used to store setting values.
///
/// Any serde-compatible format that round-trips the shapes used for settings (scalars, strings,
/// sequences, nested structs) can be used.
pub trait Codec {
    /// Encode `value` into raw bytes.
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError>;

    /// Decode raw bytes into a value of type `T`.
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError>;
}

/// The default codec, storing values as JSON text.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(value).map_err(|e| CodecError::Encode(e.into()))
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        serde_json::from_slice(bytes).map_err(|e| CodecError::Decode(e.into()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde::Deserialize;

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Window {
        title: String,
        size: (u32, u32),
        tabs: Vec<String>,
        extra: BTreeMap<String, Option<f64>>,
    }

    #[test]
    fn test_json_is_human_readable() {
        assert_eq!(JsonCodec.encode(&true).unwrap(), b"true");
        assert_eq!(JsonCodec.encode("dark").unwrap(), b"\"dark\"");
    }

    #[test]
    fn test_nested_struct() {
        let window = Window {
            title: "main".to_string(),
            size: (800, 600),
            tabs: vec!["a".to_string(), "b".to_string()],
            extra: BTreeMap::from([("zoom".to_string(), Some(1.5)), ("dpi".to_string(), None)]),
        };

        let bytes = JsonCodec.encode(&window).unwrap();
        assert_eq!(JsonCodec.decode::<Window>(&bytes).unwrap(), window);
    }

    #[test]
    fn test_decode_type_mismatch() {
        let err = JsonCodec.decode::<bool>(b"\"yes\"").unwrap_err();
        assert!(matches!(err, CodecError::Decode(_)));
        assert!(err.to_string().starts_with("Failed to decode setting: "));
    }

    #[test]
    fn test_encode_non_string_map_keys() {
        let map = BTreeMap::from([((1u8, 2u8), "tuple key")]);

        let err = JsonCodec.encode(&map).unwrap_err();
        assert!(matches!(err, CodecError::Encode(_)));
    }
}
