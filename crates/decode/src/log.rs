//! Diagnostic events for failures that are absorbed instead of returned.
//!
//! Compiled to no-ops without the `tracing` feature.

use crate::error::DecodingError;
use serde_json::Value;

#[cfg(feature = "tracing")]
pub(crate) fn dropped_element(key: &str, index: usize, error: &DecodingError) {
    tracing::debug!(key, index, %error, "dropping array element that failed to decode");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn dropped_element(_key: &str, _index: usize, _error: &DecodingError) {}

#[cfg(feature = "tracing")]
pub(crate) fn unknown_raw_value(key: &str, raw_representable: &'static str, raw_value: &Value) {
    tracing::trace!(key, raw_representable, %raw_value, "raw value matches no case");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn unknown_raw_value(_key: &str, _raw_representable: &'static str, _raw_value: &Value) {}
