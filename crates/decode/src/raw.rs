//! Raw scalar conversions.
//!
//! The raw set is closed: booleans, strings, floats and the fixed-width
//! integers. [`JsonRawType`] is sealed so it cannot grow outside this crate.

use crate::error::DecodingError;
use crate::value::FromJsonValue;
use serde_json::Value;

mod private {
    pub trait Sealed {}
}

/// A scalar directly representable as a JSON primitive.
///
/// This is also the set of types a [`crate::RawRepresentable`] may use as
/// its raw value.
pub trait JsonRawType: FromJsonValue + private::Sealed {}

impl private::Sealed for bool {}
impl JsonRawType for bool {}

impl FromJsonValue for bool {
    fn from_json_value(key: &str, value: &Value) -> Result<Self, DecodingError> {
        value
            .as_bool()
            .ok_or_else(|| DecodingError::type_mismatch::<bool>(key, value))
    }
}

impl private::Sealed for String {}
impl JsonRawType for String {}

impl FromJsonValue for String {
    fn from_json_value(key: &str, value: &Value) -> Result<Self, DecodingError> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| DecodingError::type_mismatch::<String>(key, value))
    }
}

impl private::Sealed for f64 {}
impl JsonRawType for f64 {}

impl FromJsonValue for f64 {
    fn from_json_value(key: &str, value: &Value) -> Result<Self, DecodingError> {
        value
            .as_f64()
            .ok_or_else(|| DecodingError::type_mismatch::<f64>(key, value))
    }
}

impl private::Sealed for f32 {}
impl JsonRawType for f32 {}

// Numbers beyond the f32 range would narrow to infinity; those don't fit.
impl FromJsonValue for f32 {
    fn from_json_value(key: &str, value: &Value) -> Result<Self, DecodingError> {
        value
            .as_f64()
            .map(|n| n as f32)
            .filter(|n| n.is_finite())
            .ok_or_else(|| DecodingError::type_mismatch::<f32>(key, value))
    }
}

// Only JSON integers qualify, and only when they fit the target width.
macro_rules! integer_raw_type {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl private::Sealed for $ty {}
            impl JsonRawType for $ty {}

            impl FromJsonValue for $ty {
                fn from_json_value(key: &str, value: &Value) -> Result<Self, DecodingError> {
                    let converted = if let Some(n) = value.as_i64() {
                        <$ty>::try_from(n).ok()
                    } else if let Some(n) = value.as_u64() {
                        <$ty>::try_from(n).ok()
                    } else {
                        None
                    };
                    converted.ok_or_else(|| DecodingError::type_mismatch::<$ty>(key, value))
                }
            }
        )+
    };
}

integer_raw_type!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
