//! Operation parameters and headers

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::content::{Example, MediaType};
use crate::value::{is_default, is_false, Any, Schema};

/// `form` serialization style, the default for query and cookie parameters
pub const STYLE_FORM: &str = "form";
/// `simple` serialization style, the default for path parameters and headers
pub const STYLE_SIMPLE: &str = "simple";

/// A single operation parameter
///
/// Identified within a list by the `(name, location)` pair. Path parameters
/// must set `required`, and either `schema` or a single `content` entry
/// describes the value; neither rule is checked here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Parameter {
    /// Parameter name (always serialized)
    pub name: String,

    /// One of `query`, `header`, `path`, `cookie` (always serialized)
    #[serde(rename = "in")]
    pub location: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(skip_serializing_if = "is_false")]
    pub required: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub deprecated: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub allow_empty_value: bool,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub style: String,

    #[serde(skip_serializing_if = "is_false")]
    pub explode: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub allow_reserved: bool,

    #[serde(skip_serializing_if = "Schema::is_null")]
    pub schema: Schema,

    #[serde(skip_serializing_if = "Any::is_null")]
    pub example: Any,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub examples: BTreeMap<String, Example>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub content: BTreeMap<String, MediaType>,
}

impl Parameter {
    /// Create a parameter with a name and location
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            ..Default::default()
        }
    }

    /// Query parameter
    pub fn query(name: impl Into<String>) -> Self {
        Self::new(name, "query")
    }

    /// Header parameter
    pub fn header(name: impl Into<String>) -> Self {
        Self::new(name, "header")
    }

    /// Path parameter, marked as required
    pub fn path(name: impl Into<String>) -> Self {
        Self {
            required: true,
            ..Self::new(name, "path")
        }
    }

    /// Cookie parameter
    pub fn cookie(name: impl Into<String>) -> Self {
        Self::new(name, "cookie")
    }

    /// Set description
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Set whether the parameter is mandatory
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Mark as deprecated
    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Allow an empty value (query parameters only)
    pub fn allow_empty_value(mut self) -> Self {
        self.allow_empty_value = true;
        self
    }

    /// Set serialization style
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// Set explode
    pub fn explode(mut self, explode: bool) -> Self {
        self.explode = explode;
        self
    }

    /// Allow RFC 3986 reserved characters without percent-encoding
    pub fn allow_reserved(mut self) -> Self {
        self.allow_reserved = true;
        self
    }

    /// Set schema
    pub fn schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    /// Set example value
    pub fn example(mut self, example: Any) -> Self {
        self.example = example;
        self
    }

    /// Add a named example
    pub fn named_example(mut self, name: impl Into<String>, example: Example) -> Self {
        self.examples.insert(name.into(), example);
        self
    }

    /// Add a media type entry
    pub fn content(mut self, media_type: impl Into<String>, content: MediaType) -> Self {
        self.content.insert(media_type.into(), content);
        self
    }

    /// Style in effect, falling back to the location's default
    ///
    /// Returns `None` for an unknown location without an explicit style.
    pub fn effective_style(&self) -> Option<&str> {
        if !self.style.is_empty() {
            return Some(&self.style);
        }
        match self.location.as_str() {
            "query" | "cookie" => Some(STYLE_FORM),
            "path" | "header" => Some(STYLE_SIMPLE),
            _ => None,
        }
    }

    /// Explode in effect
    ///
    /// An explicit `false` is indistinguishable from an unset value, so a
    /// `form` style parameter always reports `true`.
    pub fn effective_explode(&self) -> bool {
        self.explode || self.effective_style() == Some(STYLE_FORM)
    }

    /// Whether every field holds its zero value
    pub fn is_empty(&self) -> bool {
        is_default(self)
    }
}

/// A response or encoding header
///
/// Follows [`Parameter`] without `name` and `in`: the name is the map key and
/// the location is implicitly `header`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Header {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(skip_serializing_if = "is_false")]
    pub required: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub deprecated: bool,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub style: String,

    #[serde(skip_serializing_if = "is_false")]
    pub explode: bool,

    #[serde(skip_serializing_if = "Schema::is_null")]
    pub schema: Schema,

    #[serde(skip_serializing_if = "Any::is_null")]
    pub example: Any,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub examples: BTreeMap<String, Example>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub content: BTreeMap<String, MediaType>,
}

impl Header {
    /// Create a header with a schema
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            ..Default::default()
        }
    }

    /// Set description
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Set whether the header is mandatory
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Mark as deprecated
    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Set serialization style
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// Set explode
    pub fn explode(mut self, explode: bool) -> Self {
        self.explode = explode;
        self
    }

    /// Set example value
    pub fn example(mut self, example: Any) -> Self {
        self.example = example;
        self
    }

    /// Add a named example
    pub fn named_example(mut self, name: impl Into<String>, example: Example) -> Self {
        self.examples.insert(name.into(), example);
        self
    }

    /// Add a media type entry
    pub fn content(mut self, media_type: impl Into<String>, content: MediaType) -> Self {
        self.content.insert(media_type.into(), content);
        self
    }

    /// Style in effect; headers only support `simple`
    pub fn effective_style(&self) -> &str {
        if self.style.is_empty() {
            STYLE_SIMPLE
        } else {
            &self.style
        }
    }

    /// Whether every field holds its zero value
    pub fn is_empty(&self) -> bool {
        is_default(self)
    }
}
