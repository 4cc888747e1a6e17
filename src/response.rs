//! The `{ "data": ... }` envelope some APIs wrap their payloads in.
//!
//! Use [`Envelope<T>`] as the expected type when the server nests the value
//! under a `data` key.

use serde::{Deserialize, Serialize};

/// A payload nested under an optional `data` key.
///
/// # Examples
///
/// ```
/// use appservices::Envelope;
/// use serde::Deserialize;
///
/// #[derive(Debug, Deserialize, PartialEq)]
/// struct Title {
///     title: Option<String>,
/// }
///
/// let envelope: Envelope<Title> = serde_json::from_str(r#"{"data":{"title":"Shoes"}}"#).unwrap();
/// assert_eq!(envelope.data.unwrap().title.as_deref(), Some("Shoes"));
///
/// let empty: Envelope<Title> = serde_json::from_str("{}").unwrap();
/// assert!(empty.data.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// The wrapped payload, absent when the server sent none.
    pub data: Option<T>,
}

impl<T> Default for Envelope<T> {
    fn default() -> Self {
        Self { data: None }
    }
}

impl<T> Envelope<T> {
    /// Wraps `data`.
    pub fn new(data: T) -> Self {
        Self { data: Some(data) }
    }

    /// Unwraps into the payload, if any.
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Maps the payload, keeping an absent payload absent.
    pub fn map<U, F>(self, f: F) -> Envelope<U>
    where
        F: FnOnce(T) -> U,
    {
        Envelope {
            data: self.data.map(f),
        }
    }
}

impl<T> From<T> for Envelope<T> {
    fn from(data: T) -> Self {
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Title {
        title: String,
    }

    #[test]
    fn test_decodes_payload_without_default() {
        let present: Envelope<Title> =
            serde_json::from_str(r#"{"data":{"title":"Shoes"}}"#).unwrap();
        assert_eq!(
            present.into_data(),
            Some(Title {
                title: "Shoes".to_string()
            })
        );

        let missing: Envelope<Title> = serde_json::from_str("{}").unwrap();
        assert!(missing.data.is_none());
    }

    #[test]
    fn test_default_is_empty_for_any_payload() {
        let empty: Envelope<Title> = Envelope::default();
        assert!(empty.data.is_none());
    }

    #[test]
    fn test_null_data_is_none() {
        let envelope: Envelope<u32> = serde_json::from_str(r#"{"data":null}"#).unwrap();
        assert_eq!(envelope.into_data(), None);
    }

    #[test]
    fn test_map_keeps_absence() {
        let present = Envelope::new(21).map(|n| n * 2);
        assert_eq!(present.data, Some(42));

        let absent: Envelope<u32> = Envelope::default();
        assert_eq!(absent.map(|n| n * 2).data, None);
    }
}
