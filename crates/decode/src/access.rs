//! Mandatory and optional key access.
//!
//! [`decode_required`] is the only place a key is looked up. Optional access
//! is defined as mandatory access with the error discarded, so the two can
//! never disagree on what counts as success.

use crate::error::DecodingError;
use crate::value::{FromJsonValue, JsonObject};

/// Look up `key` and convert its value to `T`.
///
/// Fails with [`DecodingError::MandatoryKeyNotFound`] when the key is absent,
/// otherwise with whatever error `T`'s conversion reports.
pub fn decode_required<T: FromJsonValue>(
    object: &JsonObject,
    key: &str,
) -> Result<T, DecodingError> {
    let value = object
        .get(key)
        .ok_or_else(|| DecodingError::key_not_found(key))?;
    T::from_json_value(key, value)
}

/// Like [`decode_required`], but any failure becomes `None`.
pub fn decode_optional<T: FromJsonValue>(object: &JsonObject, key: &str) -> Option<T> {
    decode_required(object, key).ok()
}

/// Method-call form of [`decode_required`] and [`decode_optional`].
pub trait JsonKeyAccess {
    fn decode_required<T: FromJsonValue>(&self, key: &str) -> Result<T, DecodingError>;

    fn decode_optional<T: FromJsonValue>(&self, key: &str) -> Option<T>;
}

impl JsonKeyAccess for JsonObject {
    fn decode_required<T: FromJsonValue>(&self, key: &str) -> Result<T, DecodingError> {
        decode_required(self, key)
    }

    fn decode_optional<T: FromJsonValue>(&self, key: &str) -> Option<T> {
        decode_optional(self, key)
    }
}
