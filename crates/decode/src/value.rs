//! The conversion capability every keyed target type implements.
//!
//! [`FromJsonValue`] is what [`crate::decode_required`] is generic over.
//! Implementations exist for:
//! - the closed set of raw scalars (see [`crate::JsonRawType`]),
//! - [`JsonObject`] itself,
//! - every [`crate::JsonDecodable`] type,
//! - types opted in with [`crate::json_raw_representable!`],
//! - `Vec<T>` of any of the above.

use crate::error::DecodingError;
use crate::log;
use serde_json::Value;

/// A string-keyed JSON object, as produced by `serde_json`.
pub type JsonObject = serde_json::Map<String, Value>;

/// Conversion from the untyped value stored under `key`.
///
/// `key` is only used to attribute failures; the lookup itself has already
/// happened by the time this is called.
pub trait FromJsonValue: Sized {
    fn from_json_value(key: &str, value: &Value) -> Result<Self, DecodingError>;
}

impl FromJsonValue for JsonObject {
    fn from_json_value(key: &str, value: &Value) -> Result<Self, DecodingError> {
        value
            .as_object()
            .cloned()
            .ok_or_else(|| DecodingError::type_mismatch::<JsonObject>(key, value))
    }
}

/// Arrays are strict about their own shape but permissive about their
/// elements: an element that fails to convert is dropped and the rest keep
/// their original order.
impl<T: FromJsonValue> FromJsonValue for Vec<T> {
    fn from_json_value(key: &str, value: &Value) -> Result<Self, DecodingError> {
        let elements = value
            .as_array()
            .ok_or_else(|| DecodingError::type_mismatch::<Vec<T>>(key, value))?;

        Ok(elements
            .iter()
            .enumerate()
            .filter_map(|(index, element)| match T::from_json_value(key, element) {
                Ok(decoded) => Some(decoded),
                Err(error) => {
                    log::dropped_element(key, index, &error);
                    None
                }
            })
            .collect())
    }
}
