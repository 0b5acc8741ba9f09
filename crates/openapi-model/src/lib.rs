//! Typed OpenAPI document model
//!
//! This crate mirrors the OpenAPI Description object model as plain Rust
//! records that serialize to and from JSON (and YAML with the `yaml`
//! feature). It does not resolve `$ref`s, validate documents, or generate
//! code; those belong to tools layered on top.
//!
//! # Serialization rules
//!
//! - Every field has a fixed external key (`operationId`, `$ref`, `in`, ...).
//! - Optional fields are omitted while they hold their zero value: empty
//!   string, empty list or map, `false`, a null open value, or a nested record
//!   equal to its `Default`. A field deliberately set to `""` or `false` is
//!   therefore indistinguishable from an unset one.
//! - A few keys are always written because OpenAPI requires them:
//!   `openapi`, `info`, `Info.title`, `License.name`, `Server.url`,
//!   `ServerVariable.default`, `ExternalDoc.url`, `Parameter.name`,
//!   `Parameter.in`, `RequestBody.content`, `Response.description`,
//!   `Tag.name`, `SecurityScheme.{type,name,in,scheme}` and
//!   `OAuthFlow.{authorizationUrl,tokenUrl,scopes}`.
//! - Schemas and example values are open [`serde_json::Value`]s.
//! - [`Responses`] is a closed table of well-known status codes.
//!
//! # Usage
//!
//! ```rust
//! use openapi_model::{Method, OpenApi, Operation};
//!
//! let doc = OpenApi::new("3.0.2", "Cool service")
//!     .operation("/echo", Method::Post, Operation::new().summary("Scream into the void"));
//!
//! assert_eq!(
//!     doc.to_json().unwrap(),
//!     r#"{"openapi":"3.0.2","info":{"title":"Cool service"},"paths":{"/echo":{"post":{"summary":"Scream into the void"}}}}"#
//! );
//! ```

mod codec;
mod components;
mod config;
mod content;
mod document;
mod error;
mod parameter;
mod paths;
mod reference;
mod responses;
mod security;
mod server;
mod value;

pub use codec::{decode, encode, from_value, to_value};
pub use components::Components;
pub use config::{CodecConfig, Format};
pub use content::{Encoding, Example, Link, MediaType, RequestBody};
pub use document::{Contact, ExternalDoc, Info, License, OpenApi, Tag};
pub use error::{Error, Result};
pub use parameter::{Header, Parameter, STYLE_FORM, STYLE_SIMPLE};
pub use paths::{Callback, Method, Operation, PathItem, Paths};
pub use reference::Reference;
pub use responses::{Response, Responses, StatusCode};
pub use security::{requirement, OAuthFlow, OAuthFlows, SecurityRequirement, SecurityScheme};
pub use server::{Server, ServerVariable};
pub use value::{Any, Schema};
