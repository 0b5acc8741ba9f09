//! Root document and API metadata

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::components::Components;
use crate::paths::{Operation, PathItem, Paths};
use crate::security::SecurityRequirement;
use crate::server::Server;
use crate::value::is_default;

/// Root object of an OpenAPI Description
///
/// `openapi` and `info` are always serialized. Everything else is omitted
/// while it holds its zero value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OpenApi {
    /// Version of the OpenAPI Specification the document uses (e.g. "3.1.0").
    /// Unrelated to `info.version`.
    pub openapi: String,

    /// API metadata
    pub info: Info,

    /// Default `$schema` for Schema Objects in this document
    #[serde(skip_serializing_if = "String::is_empty")]
    pub json_schema_dialect: String,

    /// Connectivity information for target servers
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,

    /// Available paths and operations
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub paths: Paths,

    /// Incoming webhooks keyed by webhook name
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub webhooks: BTreeMap<String, PathItem>,

    /// Reusable objects
    #[serde(skip_serializing_if = "Components::is_empty")]
    pub components: Components,

    /// Alternative security requirements applying to the whole API
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<SecurityRequirement>,

    /// Tags used by operations, in display order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,

    /// Additional external documentation
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub external_docs: Vec<ExternalDoc>,
}

impl OpenApi {
    /// Create a document for the given specification version and API title
    pub fn new(openapi: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            openapi: openapi.into(),
            info: Info::new(title),
            ..Default::default()
        }
    }

    /// Set the API metadata
    pub fn info(mut self, info: Info) -> Self {
        self.info = info;
        self
    }

    /// Set the default JSON Schema dialect
    pub fn json_schema_dialect(mut self, dialect: impl Into<String>) -> Self {
        self.json_schema_dialect = dialect.into();
        self
    }

    /// Add a server
    pub fn server(mut self, server: Server) -> Self {
        self.servers.push(server);
        self
    }

    /// Insert or replace the path item for a path template
    pub fn path(mut self, template: impl Into<String>, item: PathItem) -> Self {
        self.paths.insert(template.into(), item);
        self
    }

    /// Set a single operation, creating the path item when missing
    pub fn operation(
        mut self,
        template: impl Into<String>,
        method: crate::Method,
        operation: Operation,
    ) -> Self {
        self.paths
            .entry(template.into())
            .or_default()
            .set_operation(method, operation);
        self
    }

    /// Add a webhook
    pub fn webhook(mut self, name: impl Into<String>, item: PathItem) -> Self {
        self.webhooks.insert(name.into(), item);
        self
    }

    /// Set the components bundle
    pub fn components(mut self, components: Components) -> Self {
        self.components = components;
        self
    }

    /// Add a security requirement alternative
    pub fn security(mut self, requirement: SecurityRequirement) -> Self {
        self.security.push(requirement);
        self
    }

    /// Add a tag
    pub fn tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Add an external documentation entry
    pub fn external_docs(mut self, docs: ExternalDoc) -> Self {
        self.external_docs.push(docs);
        self
    }

    /// Iterate over every operation under `paths` as `(template, method, operation)`
    pub fn operations(&self) -> impl Iterator<Item = (&str, crate::Method, &Operation)> {
        self.paths.iter().flat_map(|(template, item)| {
            item.operations()
                .map(move |(method, op)| (template.as_str(), method, op))
        })
    }

    /// Whether every field holds its zero value
    pub fn is_empty(&self) -> bool {
        is_default(self)
    }
}

/// API metadata
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Info {
    /// API title (always serialized)
    pub title: String,

    /// Short summary
    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,

    /// Description, CommonMark allowed
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Terms of service URL
    #[serde(skip_serializing_if = "String::is_empty")]
    pub terms_of_service: String,

    /// Contact information
    #[serde(skip_serializing_if = "Contact::is_empty")]
    pub contact: Contact,

    /// License information
    #[serde(skip_serializing_if = "License::is_empty")]
    pub license: License,

    /// Version of the described API
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
}

impl Info {
    /// Create API metadata with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the API version
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
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

    /// Set the terms of service URL
    pub fn terms_of_service(mut self, url: impl Into<String>) -> Self {
        self.terms_of_service = url.into();
        self
    }

    /// Set contact information
    pub fn contact(mut self, contact: Contact) -> Self {
        self.contact = contact;
        self
    }

    /// Set license information
    pub fn license(mut self, license: License) -> Self {
        self.license = license;
        self
    }

    /// Whether every field holds its zero value
    pub fn is_empty(&self) -> bool {
        is_default(self)
    }
}

/// Contact information for the exposed API
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
}

impl Contact {
    /// Create empty contact information
    pub fn new() -> Self {
        Self::default()
    }

    /// Set name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set URL
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set email
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Whether every field holds its zero value
    pub fn is_empty(&self) -> bool {
        is_default(self)
    }
}

/// License information
///
/// `identifier` (an SPDX expression) and `url` are mutually exclusive in
/// OpenAPI; both may still be set here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct License {
    /// License name (always serialized)
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub identifier: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
}

impl License {
    /// Create a license with a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create a license with an SPDX identifier
    pub fn spdx(name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
            ..Default::default()
        }
    }

    /// Set URL
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Whether every field holds its zero value
    pub fn is_empty(&self) -> bool {
        is_default(self)
    }
}

/// Reference to external documentation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalDoc {
    /// Target URL (always serialized)
    pub url: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl ExternalDoc {
    /// Create external documentation pointing at a URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: String::new(),
        }
    }

    /// Set description
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Whether every field holds its zero value
    pub fn is_empty(&self) -> bool {
        is_default(self)
    }
}

/// Metadata for a tag used by operations
///
/// Tag names are unique per document; uniqueness is not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tag {
    /// Tag name (always serialized)
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(skip_serializing_if = "ExternalDoc::is_empty")]
    pub external_docs: ExternalDoc,
}

impl Tag {
    /// Create a new tag
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
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

    /// Whether every field holds its zero value
    pub fn is_empty(&self) -> bool {
        is_default(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Method;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_empty_document_keeps_required_keys() {
        let json = serde_json::to_value(OpenApi::default()).unwrap();
        assert_eq!(json, json!({"openapi": "", "info": {"title": ""}}));
    }

    #[test]
    fn test_info_omits_unset_version() {
        let info = Info::new("Cool service");
        assert_eq!(serde_json::to_value(&info).unwrap(), json!({"title": "Cool service"}));

        let info = info.version("1.2.0").license(License::spdx("MIT License", "MIT"));
        assert_eq!(
            serde_json::to_value(&info).unwrap(),
            json!({
                "title": "Cool service",
                "license": {"name": "MIT License", "identifier": "MIT"},
                "version": "1.2.0"
            })
        );
    }

    #[test]
    fn test_license_keeps_both_identifier_and_url() {
        let license = License::spdx("Apache 2.0", "Apache-2.0")
            .url("https://www.apache.org/licenses/LICENSE-2.0");
        let json = serde_json::to_value(&license).unwrap();

        assert_eq!(json["identifier"], "Apache-2.0");
        assert_eq!(json["url"], "https://www.apache.org/licenses/LICENSE-2.0");
    }

    #[test]
    fn test_tag_with_external_docs() {
        let tag = Tag::new("pets")
            .description("Everything about pets")
            .external_docs(ExternalDoc::new("https://example.com/pets"));

        assert_eq!(
            serde_json::to_value(&tag).unwrap(),
            json!({
                "name": "pets",
                "description": "Everything about pets",
                "externalDocs": {"url": "https://example.com/pets"}
            })
        );
        assert_eq!(
            serde_json::to_value(Tag::default()).unwrap(),
            json!({"name": ""})
        );
    }

    #[test]
    fn test_operations_iterates_all_paths() {
        let doc = OpenApi::new("3.1.0", "Zoo")
            .operation("/pets", Method::Get, Operation::new().operation_id("listPets"))
            .operation("/pets", Method::Post, Operation::new().operation_id("createPet"))
            .operation("/pets/{id}", Method::Delete, Operation::new().operation_id("deletePet"));

        let ids: Vec<_> = doc
            .operations()
            .map(|(path, method, op)| (path, method, op.operation_id.as_str()))
            .collect();

        assert_eq!(
            ids,
            vec![
                ("/pets", Method::Get, "listPets"),
                ("/pets", Method::Post, "createPet"),
                ("/pets/{id}", Method::Delete, "deletePet"),
            ]
        );
    }

    #[test]
    fn test_missing_keys_decode_to_zero_values() {
        let doc: OpenApi = serde_json::from_value(json!({"info": {"version": "2"}})).unwrap();
        assert_eq!(doc.openapi, "");
        assert_eq!(doc.info.title, "");
        assert_eq!(doc.info.version, "2");
        assert!(doc.paths.is_empty());
    }
}
