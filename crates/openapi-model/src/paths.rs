//! Paths, path items and operations

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::content::RequestBody;
use crate::document::ExternalDoc;
use crate::error::Error;
use crate::parameter::Parameter;
use crate::responses::Responses;
use crate::security::SecurityRequirement;
use crate::server::Server;
use crate::value::{is_default, is_false};

/// Relative paths to individual endpoints, keyed by path template (`/pets/{id}`)
pub type Paths = BTreeMap<String, PathItem>;

/// Out-of-band requests keyed by a runtime expression such as
/// `{$request.body#/callbackUrl}`
pub type Callback = BTreeMap<String, PathItem>;

/// HTTP methods that have a slot in a [`PathItem`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl Method {
    /// Every method, in the order path items serialize them
    pub const ALL: [Method; 8] = [
        Method::Get,
        Method::Put,
        Method::Post,
        Method::Delete,
        Method::Options,
        Method::Head,
        Method::Patch,
        Method::Trace,
    ];

    /// Lowercase key used in a path item
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Put => "put",
            Method::Post => "post",
            Method::Delete => "delete",
            Method::Options => "options",
            Method::Head => "head",
            Method::Patch => "patch",
            Method::Trace => "trace",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = Error;

    /// Case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnsupportedMethod(s.to_string()))
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => http::Method::GET,
            Method::Put => http::Method::PUT,
            Method::Post => http::Method::POST,
            Method::Delete => http::Method::DELETE,
            Method::Options => http::Method::OPTIONS,
            Method::Head => http::Method::HEAD,
            Method::Patch => http::Method::PATCH,
            Method::Trace => http::Method::TRACE,
        }
    }
}

impl TryFrom<&http::Method> for Method {
    type Error = Error;

    fn try_from(method: &http::Method) -> Result<Self, Self::Error> {
        method.as_str().parse()
    }
}

impl TryFrom<http::Method> for Method {
    type Error = Error;

    fn try_from(method: http::Method) -> Result<Self, Self::Error> {
        Method::try_from(&method)
    }
}

/// Operations available on a single path
///
/// Either a `$ref` to a reusable path item or up to eight operations, plus
/// servers and parameters shared by every operation on the path.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathItem {
    #[serde(rename = "$ref", skip_serializing_if = "String::is_empty")]
    pub reference: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(skip_serializing_if = "Operation::is_empty")]
    pub get: Operation,
    #[serde(skip_serializing_if = "Operation::is_empty")]
    pub put: Operation,
    #[serde(skip_serializing_if = "Operation::is_empty")]
    pub post: Operation,
    #[serde(skip_serializing_if = "Operation::is_empty")]
    pub delete: Operation,
    #[serde(skip_serializing_if = "Operation::is_empty")]
    pub options: Operation,
    #[serde(skip_serializing_if = "Operation::is_empty")]
    pub head: Operation,
    #[serde(skip_serializing_if = "Operation::is_empty")]
    pub patch: Operation,
    #[serde(skip_serializing_if = "Operation::is_empty")]
    pub trace: Operation,

    /// Alternative servers for every operation on this path
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,

    /// Parameters shared by every operation on this path
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
}

impl PathItem {
    /// Create an empty path item
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a path item that points at a reusable one
    pub fn reference(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            ..Default::default()
        }
    }

    /// Set the summary
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Set the description
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Set the operation for a method
    pub fn with(mut self, method: Method, operation: Operation) -> Self {
        self.set_operation(method, operation);
        self
    }

    /// Set the GET operation
    pub fn get(self, operation: Operation) -> Self {
        self.with(Method::Get, operation)
    }

    /// Set the PUT operation
    pub fn put(self, operation: Operation) -> Self {
        self.with(Method::Put, operation)
    }

    /// Set the POST operation
    pub fn post(self, operation: Operation) -> Self {
        self.with(Method::Post, operation)
    }

    /// Set the DELETE operation
    pub fn delete(self, operation: Operation) -> Self {
        self.with(Method::Delete, operation)
    }

    /// Set the OPTIONS operation
    pub fn options(self, operation: Operation) -> Self {
        self.with(Method::Options, operation)
    }

    /// Set the HEAD operation
    pub fn head(self, operation: Operation) -> Self {
        self.with(Method::Head, operation)
    }

    /// Set the PATCH operation
    pub fn patch(self, operation: Operation) -> Self {
        self.with(Method::Patch, operation)
    }

    /// Set the TRACE operation
    pub fn trace(self, operation: Operation) -> Self {
        self.with(Method::Trace, operation)
    }

    /// Add a server
    pub fn server(mut self, server: Server) -> Self {
        self.servers.push(server);
        self
    }

    /// Add a shared parameter
    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Operation slot for a method, `None` when the slot is empty
    pub fn operation(&self, method: Method) -> Option<&Operation> {
        let op = self.slot(method);
        (!op.is_empty()).then_some(op)
    }

    /// Mutable access to the slot for a method, empty or not
    pub fn operation_mut(&mut self, method: Method) -> &mut Operation {
        match method {
            Method::Get => &mut self.get,
            Method::Put => &mut self.put,
            Method::Post => &mut self.post,
            Method::Delete => &mut self.delete,
            Method::Options => &mut self.options,
            Method::Head => &mut self.head,
            Method::Patch => &mut self.patch,
            Method::Trace => &mut self.trace,
        }
    }

    /// Replace the operation for a method, returning the previous one
    pub fn set_operation(&mut self, method: Method, operation: Operation) -> Operation {
        std::mem::replace(self.operation_mut(method), operation)
    }

    /// Non-empty operations in serialization order
    pub fn operations(&self) -> impl Iterator<Item = (Method, &Operation)> {
        Method::ALL
            .into_iter()
            .map(move |method| (method, self.slot(method)))
            .filter(|(_, op)| !op.is_empty())
    }

    fn slot(&self, method: Method) -> &Operation {
        match method {
            Method::Get => &self.get,
            Method::Put => &self.put,
            Method::Post => &self.post,
            Method::Delete => &self.delete,
            Method::Options => &self.options,
            Method::Head => &self.head,
            Method::Patch => &self.patch,
            Method::Trace => &self.trace,
        }
    }

    /// Whether every field holds its zero value
    pub fn is_empty(&self) -> bool {
        is_default(self)
    }
}

/// A single API operation on a path
///
/// `operation_id` is expected to be unique across the document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Operation {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(skip_serializing_if = "ExternalDoc::is_empty")]
    pub external_docs: ExternalDoc,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub operation_id: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,

    #[serde(skip_serializing_if = "RequestBody::is_empty")]
    pub request_body: RequestBody,

    #[serde(skip_serializing_if = "Responses::is_empty")]
    pub responses: Responses,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub callbacks: BTreeMap<String, Callback>,

    #[serde(skip_serializing_if = "is_false")]
    pub deprecated: bool,

    /// Overrides the document-level security; an empty list keeps it
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<SecurityRequirement>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,
}

impl Operation {
    /// Create an empty operation
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Set summary
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Set description
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Set external documentation
    pub fn external_docs(mut self, docs: ExternalDoc) -> Self {
        self.external_docs = docs;
        self
    }

    /// Set operation ID
    pub fn operation_id(mut self, id: impl Into<String>) -> Self {
        self.operation_id = id.into();
        self
    }

    /// Add a parameter
    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Set request body
    pub fn request_body(mut self, body: RequestBody) -> Self {
        self.request_body = body;
        self
    }

    /// Set the whole responses table
    pub fn responses(mut self, responses: Responses) -> Self {
        self.responses = responses;
        self
    }

    /// Add a response for a status code
    pub fn response(mut self, status: crate::StatusCode, response: crate::Response) -> Self {
        self.responses.insert(status, response);
        self
    }

    /// Set the response for unlisted status codes
    pub fn default_response(mut self, response: crate::Response) -> Self {
        self.responses.default = response;
        self
    }

    /// Add a callback
    pub fn callback(mut self, name: impl Into<String>, callback: Callback) -> Self {
        self.callbacks.insert(name.into(), callback);
        self
    }

    /// Mark as deprecated
    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Add a security requirement alternative
    pub fn security(mut self, requirement: SecurityRequirement) -> Self {
        self.security.push(requirement);
        self
    }

    /// Add a server
    pub fn server(mut self, server: Server) -> Self {
        self.servers.push(server);
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
    use crate::{Response, StatusCode};
    use serde_json::json;

    #[test]
    fn test_method_parse_and_display() {
        assert_eq!("GET".parse::<Method>().unwrap(), Method::Get);
        assert_eq!("trace".parse::<Method>().unwrap(), Method::Trace);
        assert!(matches!(
            "CONNECT".parse::<Method>(),
            Err(Error::UnsupportedMethod(m)) if m == "CONNECT"
        ));
        assert_eq!(Method::Options.to_string(), "options");
    }

    #[test]
    fn test_method_http_conversion() {
        for method in Method::ALL {
            let http_method: http::Method = method.into();
            assert_eq!(Method::try_from(&http_method).unwrap(), method);
        }
        assert!(Method::try_from(http::Method::CONNECT).is_err());
    }

    #[test]
    fn test_empty_slots_are_skipped() {
        let item = PathItem::new().post(Operation::new().summary("Scream into the void"));

        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({"post": {"summary": "Scream into the void"}})
        );
        assert!(item.operation(Method::Get).is_none());
        assert_eq!(
            item.operation(Method::Post).map(|op| op.summary.as_str()),
            Some("Scream into the void")
        );
    }

    #[test]
    fn test_operations_in_fixed_order() {
        let item = PathItem::new()
            .patch(Operation::new().operation_id("patch"))
            .get(Operation::new().operation_id("get"))
            .with(Method::Trace, Operation::new().operation_id("trace"));

        let methods: Vec<_> = item.operations().map(|(m, _)| m).collect();
        assert_eq!(methods, vec![Method::Get, Method::Patch, Method::Trace]);
    }

    #[test]
    fn test_method_setters_fill_matching_slot() {
        let op = |id: &str| Operation::new().operation_id(id);
        let item = PathItem::new()
            .get(op("get"))
            .put(op("put"))
            .post(op("post"))
            .delete(op("delete"))
            .options(op("options"))
            .head(op("head"))
            .patch(op("patch"))
            .trace(op("trace"));

        for method in Method::ALL {
            let slot = item.operation(method).unwrap();
            assert_eq!(slot.operation_id, method.as_str());
        }
        assert_eq!(
            serde_json::to_value(&item).unwrap()["options"],
            json!({"operationId": "options"})
        );
    }

    #[test]
    fn test_set_operation_returns_previous() {
        let mut item = PathItem::new().get(Operation::new().summary("old"));
        let old = item.set_operation(Method::Get, Operation::new().summary("new"));

        assert_eq!(old.summary, "old");
        assert_eq!(item.get.summary, "new");
        item.operation_mut(Method::Head).deprecated = true;
        assert!(item.operation(Method::Head).is_some());
    }

    #[test]
    fn test_reference_path_item() {
        let item = PathItem::reference("#/components/pathItems/Pets");
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({"$ref": "#/components/pathItems/Pets"})
        );
    }

    #[test]
    fn test_operation_keys() {
        let op = Operation::new()
            .tag("pets")
            .operation_id("listPets")
            .external_docs(ExternalDoc::new("https://example.com"))
            .response(StatusCode::Ok, Response::new("A list of pets"))
            .deprecated();

        assert_eq!(
            serde_json::to_value(&op).unwrap(),
            json!({
                "tags": ["pets"],
                "externalDocs": {"url": "https://example.com"},
                "operationId": "listPets",
                "responses": {"200": {"description": "A list of pets"}},
                "deprecated": true
            })
        );
    }

    #[test]
    fn test_callback_round_trip() {
        let callback: Callback = [(
            "{$request.body#/callbackUrl}".to_string(),
            PathItem::new().post(Operation::new().summary("Event delivery")),
        )]
        .into_iter()
        .collect();
        let op = Operation::new().callback("onEvent", callback);

        let json = serde_json::to_value(&op).unwrap();
        assert_eq!(
            json["callbacks"]["onEvent"]["{$request.body#/callbackUrl}"]["post"]["summary"],
            "Event delivery"
        );
        assert_eq!(serde_json::from_value::<Operation>(json).unwrap(), op);
    }
}
