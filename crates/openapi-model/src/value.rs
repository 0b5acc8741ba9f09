//! Open value slots and omission predicates
//!
//! Every optional field in the model is skipped during serialization when it
//! holds its zero value. The predicates here are referenced from
//! `#[serde(skip_serializing_if = "...")]` attributes across the crate.

/// An OpenAPI Schema Object.
///
/// Schemas follow an extended JSON Schema dialect and are not modeled by
/// dedicated types; they pass through encoding and decoding untouched.
pub type Schema = serde_json::Value;

/// Arbitrary structured data (examples, link parameters, extensions).
pub type Any = serde_json::Value;

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

pub(crate) fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}
