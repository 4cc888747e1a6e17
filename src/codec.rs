//! Body encoding and decoding.

use crate::{metadata::Parameters, Error, Result};
use serde::de::DeserializeOwned;

/// Turns parameters into a request body and response bytes into values.
///
/// The executor never parses bodies itself; it goes through this trait.
pub trait Codec: Send + Sync {
    /// Encodes a parameter mapping as a request body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationFailed`] if the mapping can't be encoded.
    fn encode_parameters(&self, parameters: &Parameters) -> Result<Vec<u8>>;

    /// Decodes `bytes` into a `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if `bytes` is not a valid `T`.
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T>;
}

/// JSON encoding via `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode_parameters(&self, parameters: &Parameters) -> Result<Vec<u8>> {
        serde_json::to_vec(parameters).map_err(|e| Error::SerializationFailed(e.to_string()))
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        serde_json::from_slice(bytes).map_err(|e| Error::Decode {
            message: e.to_string(),
            raw_body: String::from_utf8_lossy(bytes).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::HashMap;

    #[test]
    fn test_empty_parameters_encode_to_empty_object() {
        let bytes = JsonCodec.encode_parameters(&Parameters::new()).unwrap();
        assert_eq!(bytes, b"{}");

        let decoded: HashMap<String, String> = JsonCodec.decode(&bytes).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_parameters_survive_encoding() {
        let mut parameters = Parameters::new();
        parameters.insert("a".to_string(), "b".to_string());

        let bytes = JsonCodec.encode_parameters(&parameters).unwrap();
        let decoded: HashMap<String, String> = JsonCodec.decode(&bytes).unwrap();
        assert_eq!(decoded, parameters);
    }

    #[test]
    fn test_decode_failure_keeps_raw_body() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Product {
            id: u32,
        }

        let result = JsonCodec.decode::<Product>(b"not json");
        match result {
            Err(Error::Decode { message, raw_body }) => {
                assert!(message.contains("expected"));
                assert_eq!(raw_body, "not json");
            }
            other => panic!("Expected Decode, got {:?}", other),
        }
    }
}
