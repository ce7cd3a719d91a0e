//! jsonkey-decode: typed, fail-fast access to values in untyped JSON objects.
//!
//! Callers name the type they expect under a key and get either the
//! converted value or a [`DecodingError`] saying which key failed and why.
//! Parsing JSON text is left to `serde_json`; this crate starts from a
//! [`JsonObject`] that already exists.
//!
//! Two access modes are offered:
//! - [`decode_required`] fails on a missing key, a value of the wrong shape,
//!   or a raw value matching no enum case.
//! - [`decode_optional`] returns `None` in every case where
//!   [`decode_required`] would fail.
//!
//! Arrays are checked for presence and shape, but elements that fail to
//! convert are dropped rather than failing the whole array.

mod access;
mod decodable;
pub mod error;
mod log;
mod raw;
mod representable;
mod value;

pub use access::{decode_optional, decode_required, JsonKeyAccess};
pub use decodable::{decode_root, JsonDecodable};
pub use error::DecodingError;
pub use raw::JsonRawType;
pub use representable::{decode_raw_representable, RawRepresentable};
pub use serde_json::Value;
pub use value::{FromJsonValue, JsonObject};
