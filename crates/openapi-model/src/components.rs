//! Reusable components

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::content::{Example, Link, RequestBody};
use crate::parameter::{Header, Parameter};
use crate::paths::{Callback, PathItem};
use crate::responses::Response;
use crate::security::SecurityScheme;
use crate::value::{is_default, Schema};

/// Reusable objects keyed by component name
///
/// Nothing defined here takes effect unless referenced from elsewhere in the
/// document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Components {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub schemas: BTreeMap<String, Schema>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub responses: BTreeMap<String, Response>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, Parameter>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub examples: BTreeMap<String, Example>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub request_bodies: BTreeMap<String, RequestBody>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, Header>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub security_schemes: BTreeMap<String, SecurityScheme>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub links: BTreeMap<String, Link>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub callbacks: BTreeMap<String, Callback>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub path_items: BTreeMap<String, PathItem>,
}

impl Components {
    /// Create an empty bundle
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a schema
    pub fn schema(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.schemas.insert(name.into(), schema);
        self
    }

    /// Add a response
    pub fn response(mut self, name: impl Into<String>, response: Response) -> Self {
        self.responses.insert(name.into(), response);
        self
    }

    /// Add a parameter
    pub fn parameter(mut self, name: impl Into<String>, parameter: Parameter) -> Self {
        self.parameters.insert(name.into(), parameter);
        self
    }

    /// Add an example
    pub fn example(mut self, name: impl Into<String>, example: Example) -> Self {
        self.examples.insert(name.into(), example);
        self
    }

    /// Add a request body
    pub fn request_body(mut self, name: impl Into<String>, body: RequestBody) -> Self {
        self.request_bodies.insert(name.into(), body);
        self
    }

    /// Add a header
    pub fn header(mut self, name: impl Into<String>, header: Header) -> Self {
        self.headers.insert(name.into(), header);
        self
    }

    /// Add a security scheme
    pub fn security_scheme(mut self, name: impl Into<String>, scheme: SecurityScheme) -> Self {
        self.security_schemes.insert(name.into(), scheme);
        self
    }

    /// Add a link
    pub fn link(mut self, name: impl Into<String>, link: Link) -> Self {
        self.links.insert(name.into(), link);
        self
    }

    /// Add a callback
    pub fn callback(mut self, name: impl Into<String>, callback: Callback) -> Self {
        self.callbacks.insert(name.into(), callback);
        self
    }

    /// Add a path item
    pub fn path_item(mut self, name: impl Into<String>, item: PathItem) -> Self {
        self.path_items.insert(name.into(), item);
        self
    }

    /// Whether every field holds its zero value
    pub fn is_empty(&self) -> bool {
        is_default(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_camel_case_keys() {
        let components = Components::new()
            .schema("Pet", json!({"type": "object"}))
            .request_body("PetBody", RequestBody::json(json!({"$ref": "#/components/schemas/Pet"})))
            .security_scheme("bearer", SecurityScheme::bearer("JWT"))
            .path_item("Pets", PathItem::new().summary("Pets"));

        let json = serde_json::to_value(&components).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 4);
        for key in ["schemas", "requestBodies", "securitySchemes", "pathItems"] {
            assert!(keys.iter().any(|k| k == key), "missing {key}");
        }
    }

    #[test]
    fn test_empty_components() {
        assert!(Components::new().is_empty());
        assert_eq!(serde_json::to_value(Components::new()).unwrap(), json!({}));
        assert!(!Components::new().header("X-Id", Header::default()).is_empty());
    }
}
