//! References to other components

use serde::{Deserialize, Serialize};

use crate::value::is_default;

/// A pointer to another object, in place of an inline definition
///
/// `summary` and `description` override those of the referenced component.
/// Resolving the pointer is up to the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Reference {
    #[serde(rename = "$ref", skip_serializing_if = "String::is_empty")]
    pub reference: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl Reference {
    /// Create a reference from a URI
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            ..Default::default()
        }
    }

    /// Reference to `#/components/{kind}/{name}`
    pub fn component(kind: &str, name: &str) -> Self {
        Self::new(format!("#/components/{kind}/{name}"))
    }

    /// Reference to a component schema
    pub fn schema(name: &str) -> Self {
        Self::component("schemas", name)
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

    /// Name of the referenced component for local `#/components/{kind}/{name}`
    /// pointers
    pub fn component_name(&self) -> Option<(&str, &str)> {
        let rest = self.reference.strip_prefix("#/components/")?;
        let (kind, name) = rest.split_once('/')?;
        (!kind.is_empty() && !name.is_empty() && !name.contains('/')).then_some((kind, name))
    }

    /// Open value form, usable in a schema slot
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
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
    fn test_reference_keys() {
        let reference = Reference::schema("Pet").summary("A pet");
        assert_eq!(
            serde_json::to_value(&reference).unwrap(),
            json!({"$ref": "#/components/schemas/Pet", "summary": "A pet"})
        );
        assert_eq!(reference.to_value()["$ref"], "#/components/schemas/Pet");
    }

    #[test]
    fn test_component_name() {
        assert_eq!(
            Reference::component("responses", "NotFound").component_name(),
            Some(("responses", "NotFound"))
        );
        assert_eq!(Reference::new("https://example.com/pet.yaml").component_name(), None);
        assert_eq!(Reference::new("#/components/schemas/").component_name(), None);
        assert_eq!(Reference::new("#/components/schemas/a/b").component_name(), None);
    }
}
