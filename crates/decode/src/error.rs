//! Failure modes of keyed decoding.

use serde_json::Value;

/// Errors returned by mandatory key decoding.
///
/// Every variant carries enough context to find the offending key (or the
/// document root) and the value that could not be converted. Equality is
/// structural: two errors are equal when their variant and every field
/// match, which also means they render the same description.
///
/// `expected_type` and `raw_representable` hold the full
/// [`std::any::type_name`] path; the rendered description drops the module
/// prefixes (`alloc::vec::Vec<alloc::string::String>` renders as
/// `Vec<String>`).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecodingError {
    /// The key is absent from the object.
    #[error("mandatory key not found: '{key}'")]
    MandatoryKeyNotFound { key: String },

    /// The key is present but its value cannot be converted to the
    /// expected type or shape.
    #[error(
        "mandatory key '{key}' has type mismatch: expected {expected}, found {actual_value}",
        expected = short_type_name(.expected_type)
    )]
    MandatoryTypeMismatch {
        key: String,
        expected_type: &'static str,
        actual_value: Value,
    },

    /// The raw value has the right type but names no case of the
    /// raw-representable type.
    #[error(
        "mandatory key '{key}': {raw_value} is not a valid raw value for {ty}",
        ty = short_type_name(.raw_representable)
    )]
    MandatoryRawRepresentableHasIncorrectValue {
        key: String,
        raw_representable: &'static str,
        raw_value: Value,
    },

    /// A document root handed to [`crate::decode_root`] is not a JSON object.
    #[error(
        "document root has type mismatch: expected {expected}, found {actual_value}",
        expected = short_type_name(.expected_type)
    )]
    RootTypeMismatch {
        expected_type: &'static str,
        actual_value: Value,
    },
}

impl DecodingError {
    /// Build a [`DecodingError::MandatoryKeyNotFound`] for `key`.
    pub fn key_not_found(key: &str) -> Self {
        DecodingError::MandatoryKeyNotFound {
            key: key.to_string(),
        }
    }

    /// Build a [`DecodingError::MandatoryTypeMismatch`] expecting `T`.
    pub fn type_mismatch<T: ?Sized>(key: &str, actual_value: &Value) -> Self {
        DecodingError::MandatoryTypeMismatch {
            key: key.to_string(),
            expected_type: std::any::type_name::<T>(),
            actual_value: actual_value.clone(),
        }
    }

    /// Build a [`DecodingError::MandatoryRawRepresentableHasIncorrectValue`]
    /// for the raw-representable type `T`.
    pub fn incorrect_raw_value<T: ?Sized>(key: &str, raw_value: &Value) -> Self {
        DecodingError::MandatoryRawRepresentableHasIncorrectValue {
            key: key.to_string(),
            raw_representable: std::any::type_name::<T>(),
            raw_value: raw_value.clone(),
        }
    }

    /// The key the failure is attached to, if any.
    ///
    /// Root failures have no key.
    pub fn key(&self) -> Option<&str> {
        match self {
            DecodingError::MandatoryKeyNotFound { key }
            | DecodingError::MandatoryTypeMismatch { key, .. }
            | DecodingError::MandatoryRawRepresentableHasIncorrectValue { key, .. } => Some(key),
            DecodingError::RootTypeMismatch { .. } => None,
        }
    }
}

/// Strip module paths from every segment of a type name, keeping generics.
fn short_type_name(name: &str) -> String {
    let mut short = String::with_capacity(name.len());
    let mut segment = String::new();
    for c in name.chars() {
        if c.is_alphanumeric() || c == '_' {
            segment.push(c);
        } else if c == ':' {
            segment.clear();
        } else {
            short.push_str(&segment);
            segment.clear();
            short.push(c);
        }
    }
    short.push_str(&segment);
    short
}
