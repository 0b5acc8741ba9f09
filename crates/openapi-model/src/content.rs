//! Payload descriptions: request bodies, media types, examples and links

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::parameter::Header;
use crate::server::Server;
use crate::value::{is_default, is_false, Any, Schema};

/// Request payload
///
/// `content` is always serialized, even when empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestBody {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Payload descriptions keyed by media type or media type range
    pub content: BTreeMap<String, MediaType>,

    #[serde(skip_serializing_if = "is_false")]
    pub required: bool,
}

impl RequestBody {
    /// Create an empty request body
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a required `application/json` body with a schema
    pub fn json(schema: Schema) -> Self {
        Self::new()
            .content("application/json", MediaType::new(schema))
            .required(true)
    }

    /// Set description
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Add a media type entry
    pub fn content(mut self, media_type: impl Into<String>, content: MediaType) -> Self {
        self.content.insert(media_type.into(), content);
        self
    }

    /// Set whether the body is mandatory
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Whether every field holds its zero value
    pub fn is_empty(&self) -> bool {
        is_default(self)
    }
}

/// Schema and examples for one media type
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaType {
    #[serde(skip_serializing_if = "Schema::is_null")]
    pub schema: Schema,

    #[serde(skip_serializing_if = "Any::is_null")]
    pub example: Any,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub examples: BTreeMap<String, Example>,

    /// Per-property encoding, for `multipart` and form bodies
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub encoding: BTreeMap<String, Encoding>,
}

impl MediaType {
    /// Create a media type description with a schema
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            ..Default::default()
        }
    }

    /// Set example
    pub fn example(mut self, example: Any) -> Self {
        self.example = example;
        self
    }

    /// Add a named example
    pub fn named_example(mut self, name: impl Into<String>, example: Example) -> Self {
        self.examples.insert(name.into(), example);
        self
    }

    /// Add an encoding for a property
    pub fn encoding(mut self, property: impl Into<String>, encoding: Encoding) -> Self {
        self.encoding.insert(property.into(), encoding);
        self
    }

    /// Whether every field holds its zero value
    pub fn is_empty(&self) -> bool {
        is_default(self)
    }
}

/// Encoding of a single schema property
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Encoding {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content_type: String,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, Header>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub style: String,

    #[serde(skip_serializing_if = "is_false")]
    pub explode: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub allow_reserved: bool,
}

impl Encoding {
    /// Create an encoding with a content type
    pub fn new(content_type: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            ..Default::default()
        }
    }

    /// Add a header
    pub fn header(mut self, name: impl Into<String>, header: Header) -> Self {
        self.headers.insert(name.into(), header);
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

    /// Allow reserved characters without percent-encoding
    pub fn allow_reserved(mut self) -> Self {
        self.allow_reserved = true;
        self
    }

    /// Whether every field holds its zero value
    pub fn is_empty(&self) -> bool {
        is_default(self)
    }
}

/// An example value
///
/// `value` and `external_value` are mutually exclusive in OpenAPI; both may
/// still be set here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Example {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Embedded literal example
    #[serde(skip_serializing_if = "Any::is_null")]
    pub value: Any,

    /// URI of an example that cannot be embedded
    #[serde(skip_serializing_if = "String::is_empty")]
    pub external_value: String,
}

impl Example {
    /// Create an example with an embedded value
    pub fn new(value: Any) -> Self {
        Self {
            value,
            ..Default::default()
        }
    }

    /// Create an example pointing at an external value
    pub fn external(uri: impl Into<String>) -> Self {
        Self {
            external_value: uri.into(),
            ..Default::default()
        }
    }

    /// Set summary
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Whether every field holds its zero value
    pub fn is_empty(&self) -> bool {
        is_default(self)
    }
}

/// A design-time link from a response to another operation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Link {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub operation_ref: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub operation_id: String,

    /// Values or runtime expressions passed to the linked operation
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, Any>,

    #[serde(skip_serializing_if = "Any::is_null")]
    pub request_body: Any,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(skip_serializing_if = "Server::is_empty")]
    pub server: Server,
}

impl Link {
    /// Create a link to an operation by ID
    pub fn to_operation(operation_id: impl Into<String>) -> Self {
        Self {
            operation_id: operation_id.into(),
            ..Default::default()
        }
    }

    /// Add a parameter
    pub fn parameter(mut self, name: impl Into<String>, value: Any) -> Self {
        self.parameters.insert(name.into(), value);
        self
    }

    /// Whether every field holds its zero value
    pub fn is_empty(&self) -> bool {
        is_default(self)
    }
}
