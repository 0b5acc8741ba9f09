//! Server definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::value::is_default;

/// A target host
///
/// The URL may contain `{name}` placeholders substituted from `variables`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Server {
    /// Server URL template (always serialized)
    pub url: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub variables: BTreeMap<String, ServerVariable>,
}

impl Server {
    /// Create a new server
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set description
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Add a variable
    pub fn variable(mut self, name: impl Into<String>, var: ServerVariable) -> Self {
        self.variables.insert(name.into(), var);
        self
    }

    /// Substitute every known `{name}` placeholder with its variable's default.
    ///
    /// Placeholders without a matching variable are left in place.
    pub fn default_url(&self) -> String {
        self.variables
            .iter()
            .fold(self.url.clone(), |url, (name, var)| {
                url.replace(&format!("{{{name}}}"), &var.default)
            })
    }

    /// Whether every field holds its zero value
    pub fn is_empty(&self) -> bool {
        is_default(self)
    }
}

/// A variable for server URL template substitution
///
/// When `enum_values` is non-empty, `default` is expected to be one of them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerVariable {
    /// Allowed substitution values
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,

    /// Value used when none is supplied (always serialized)
    pub default: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl ServerVariable {
    /// Create a new variable with default value
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            ..Default::default()
        }
    }

    /// Set allowed values
    pub fn enum_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = values.into_iter().map(Into::into).collect();
        self
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
