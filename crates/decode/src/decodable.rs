//! Nested-object construction.

use crate::error::DecodingError;
use crate::value::{FromJsonValue, JsonObject};
use serde_json::Value;

/// A type constructible from a JSON object.
///
/// Implementations typically read their own fields through
/// [`crate::JsonKeyAccess`], choosing mandatory or optional decoding per
/// field. Fields may themselves be `JsonDecodable`, or arrays of them, so
/// documents of any depth decode through the same entry points.
///
/// Every `JsonDecodable` type is also a [`FromJsonValue`]: decoding it under a
/// key requires the value to be an object, then calls
/// [`JsonDecodable::from_json_object`] and propagates its error unchanged.
pub trait JsonDecodable: Sized {
    fn from_json_object(object: &JsonObject) -> Result<Self, DecodingError>;
}

impl<T: JsonDecodable> FromJsonValue for T {
    fn from_json_value(key: &str, value: &Value) -> Result<Self, DecodingError> {
        let object = value
            .as_object()
            .ok_or_else(|| DecodingError::type_mismatch::<T>(key, value))?;
        T::from_json_object(object)
    }
}

/// Decode a whole document whose root must be a JSON object.
///
/// Fails with [`DecodingError::RootTypeMismatch`] when the root is any other
/// kind of value, e.g. a top-level array.
pub fn decode_root<T: JsonDecodable>(root: &Value) -> Result<T, DecodingError> {
    let object = root
        .as_object()
        .ok_or_else(|| DecodingError::RootTypeMismatch {
            expected_type: std::any::type_name::<T>(),
            actual_value: root.clone(),
        })?;
    T::from_json_object(object)
}
