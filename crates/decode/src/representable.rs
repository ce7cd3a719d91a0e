//! Finite-case types keyed by a raw scalar, typically string enums.

use crate::error::DecodingError;
use crate::log;
use crate::raw::JsonRawType;
use crate::value::FromJsonValue;
use serde_json::Value;

/// A type whose cases map to and from a single raw scalar.
///
/// ```
/// use jsonkey_decode::{json_raw_representable, JsonKeyAccess, RawRepresentable};
/// use serde_json::json;
///
/// #[derive(Debug, PartialEq)]
/// enum Size {
///     Small,
///     Large,
/// }
///
/// impl RawRepresentable for Size {
///     type Raw = String;
///
///     fn from_raw(raw: &String) -> Option<Self> {
///         match raw.as_str() {
///             "small" => Some(Size::Small),
///             "large" => Some(Size::Large),
///             _ => None,
///         }
///     }
///
///     fn raw_value(&self) -> String {
///         match self {
///             Size::Small => "small".to_string(),
///             Size::Large => "large".to_string(),
///         }
///     }
/// }
///
/// json_raw_representable!(Size);
///
/// let object = json!({"size": "large"});
/// let size: Size = object.as_object().unwrap().decode_required("size").unwrap();
/// assert_eq!(size, Size::Large);
/// ```
pub trait RawRepresentable: Sized {
    type Raw: JsonRawType;

    /// The case named by `raw`, or `None` if there is no such case.
    fn from_raw(raw: &Self::Raw) -> Option<Self>;

    fn raw_value(&self) -> Self::Raw;
}

/// Convert `value` to `T`'s raw type, then to one of `T`'s cases.
///
/// A value of the wrong raw type is a [`DecodingError::MandatoryTypeMismatch`]
/// naming `T`; a raw value matching no case is
/// [`DecodingError::MandatoryRawRepresentableHasIncorrectValue`].
pub fn decode_raw_representable<T: RawRepresentable>(
    key: &str,
    value: &Value,
) -> Result<T, DecodingError> {
    let raw = <T::Raw as FromJsonValue>::from_json_value(key, value)
        .map_err(|_| DecodingError::type_mismatch::<T>(key, value))?;

    T::from_raw(&raw).ok_or_else(|| {
        log::unknown_raw_value(key, std::any::type_name::<T>(), value);
        DecodingError::incorrect_raw_value::<T>(key, value)
    })
}

/// Opt one or more [`RawRepresentable`] types into keyed decoding.
///
/// Expands to a [`crate::FromJsonValue`] impl per type, which makes the
/// type (and `Vec`s of it) usable with [`crate::decode_required`] and
/// [`crate::decode_optional`].
#[macro_export]
macro_rules! json_raw_representable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::FromJsonValue for $ty {
                fn from_json_value(
                    key: &str,
                    value: &$crate::Value,
                ) -> ::std::result::Result<Self, $crate::DecodingError> {
                    $crate::decode_raw_representable::<$ty>(key, value)
                }
            }
        )+
    };
}
