//! Serde helpers for the proto JSON mapping

use serde::Serializer;
use std::fmt::Display;

/// Proto3 JSON omits fields holding their default value.
pub(crate) fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// 64-bit integers are written as JSON strings.
pub(crate) fn as_string<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(value)
}
