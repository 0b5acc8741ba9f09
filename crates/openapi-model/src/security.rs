//! Security schemes and requirements

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::value::{is_default, Any};

const EXTENSION_PREFIX: &str = "x-";

/// Security schemes required to execute an operation, keyed by scheme name
///
/// Values list the required scopes (OAuth2 / OpenID Connect) or roles. An
/// empty requirement `{}` makes authentication optional for that alternative.
pub type SecurityRequirement = BTreeMap<String, Vec<String>>;

/// Build a requirement naming a single scheme
pub fn requirement<I, S>(scheme: impl Into<String>, scopes: I) -> SecurityRequirement
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    BTreeMap::from([(scheme.into(), scopes.into_iter().map(Into::into).collect())])
}

/// A security scheme usable by operations
///
/// Which fields matter depends on `scheme_type`: `apiKey` uses `name` and
/// `location`, `http` uses `scheme` (and `bearer_format`), `oauth2` uses
/// `flows`, `openIdConnect` uses `open_id_connect_url`. The combination is
/// not checked.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SecurityScheme {
    /// One of `apiKey`, `http`, `mutualTLS`, `oauth2`, `openIdConnect`
    /// (always serialized)
    #[serde(rename = "type")]
    pub scheme_type: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Header, query or cookie parameter name for apiKey (always serialized)
    pub name: String,

    /// Location of the API key: `query`, `header` or `cookie` (always
    /// serialized)
    #[serde(rename = "in")]
    pub location: String,

    /// HTTP authorization scheme for http (always serialized)
    pub scheme: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub bearer_format: String,

    #[serde(skip_serializing_if = "OAuthFlows::is_empty")]
    pub flows: OAuthFlows,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub open_id_connect_url: String,

    /// Any other keys, typically `x-` specification extensions
    ///
    /// Keys must not repeat a named field (`type`, `name`, ...), otherwise
    /// the encoded object carries that key twice.
    #[serde(flatten)]
    pub extensions: BTreeMap<String, Any>,
}

impl SecurityScheme {
    fn with_type(scheme_type: &str) -> Self {
        Self {
            scheme_type: scheme_type.to_string(),
            ..Default::default()
        }
    }

    /// Create an API key security scheme
    pub fn api_key(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            ..Self::with_type("apiKey")
        }
    }

    /// Create a bearer token security scheme
    pub fn bearer(format: impl Into<String>) -> Self {
        Self {
            scheme: "bearer".to_string(),
            bearer_format: format.into(),
            ..Self::with_type("http")
        }
    }

    /// Create a basic auth security scheme
    pub fn basic() -> Self {
        Self {
            scheme: "basic".to_string(),
            ..Self::with_type("http")
        }
    }

    /// Create an OAuth2 security scheme
    pub fn oauth2(flows: OAuthFlows) -> Self {
        Self {
            flows,
            ..Self::with_type("oauth2")
        }
    }

    /// Create an OpenID Connect security scheme
    pub fn openid_connect(url: impl Into<String>) -> Self {
        Self {
            open_id_connect_url: url.into(),
            ..Self::with_type("openIdConnect")
        }
    }

    /// Set description
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Add an `x-` extension key
    ///
    /// Keys without the `x-` prefix are ignored.
    pub fn extension(mut self, key: impl Into<String>, value: Any) -> Self {
        let key = key.into();
        if key.starts_with(EXTENSION_PREFIX) {
            self.extensions.insert(key, value);
        } else {
            tracing::warn!(key = %key, "ignoring security scheme extension without `x-` prefix");
        }
        self
    }

    /// Whether every field holds its zero value
    pub fn is_empty(&self) -> bool {
        is_default(self)
    }
}

/// Configuration of the supported OAuth2 flows
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OAuthFlows {
    #[serde(skip_serializing_if = "OAuthFlow::is_empty")]
    pub implicit: OAuthFlow,

    #[serde(skip_serializing_if = "OAuthFlow::is_empty")]
    pub password: OAuthFlow,

    #[serde(skip_serializing_if = "OAuthFlow::is_empty")]
    pub client_credentials: OAuthFlow,

    #[serde(skip_serializing_if = "OAuthFlow::is_empty")]
    pub authorization_code: OAuthFlow,
}

impl OAuthFlows {
    /// Whether every field holds its zero value
    pub fn is_empty(&self) -> bool {
        is_default(self)
    }
}

/// A single OAuth2 flow
///
/// `authorizationUrl`, `tokenUrl` and `scopes` are always serialized, even
/// when empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OAuthFlow {
    /// Used by the implicit and authorization code flows
    pub authorization_url: String,

    /// Used by the password, client credentials and authorization code flows
    pub token_url: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub refresh_url: String,

    /// Scope name to short description
    pub scopes: BTreeMap<String, String>,
}

impl OAuthFlow {
    /// Flow with an authorization URL (implicit)
    pub fn implicit(authorization_url: impl Into<String>) -> Self {
        Self {
            authorization_url: authorization_url.into(),
            ..Default::default()
        }
    }

    /// Flow with a token URL (password, client credentials)
    pub fn token(token_url: impl Into<String>) -> Self {
        Self {
            token_url: token_url.into(),
            ..Default::default()
        }
    }

    /// Flow with both URLs (authorization code)
    pub fn authorization_code(
        authorization_url: impl Into<String>,
        token_url: impl Into<String>,
    ) -> Self {
        Self {
            authorization_url: authorization_url.into(),
            token_url: token_url.into(),
            ..Default::default()
        }
    }

    /// Set refresh URL
    pub fn refresh_url(mut self, url: impl Into<String>) -> Self {
        self.refresh_url = url.into();
        self
    }

    /// Add a scope
    pub fn scope(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.scopes.insert(name.into(), description.into());
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
    fn test_empty_requirement_is_empty_object() {
        let req = SecurityRequirement::new();
        assert_eq!(serde_json::to_string(&req).unwrap(), "{}");
    }

    #[test]
    fn test_requirement_scopes_keep_order() {
        let req = requirement("petstore_auth", ["write:pets", "read:pets"]);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"petstore_auth": ["write:pets", "read:pets"]})
        );
    }

    #[test]
    fn test_api_key_scheme() {
        let scheme = SecurityScheme::api_key("X-API-Key", "header");
        assert_eq!(
            serde_json::to_value(&scheme).unwrap(),
            json!({"type": "apiKey", "name": "X-API-Key", "in": "header", "scheme": ""})
        );
    }

    #[test]
    fn test_bearer_scheme() {
        let scheme = SecurityScheme::bearer("JWT").description("JWT Bearer token authentication");
        assert_eq!(
            serde_json::to_value(&scheme).unwrap(),
            json!({
                "type": "http",
                "description": "JWT Bearer token authentication",
                "name": "",
                "in": "",
                "scheme": "bearer",
                "bearerFormat": "JWT"
            })
        );
    }

    #[test]
    fn test_oauth2_scheme() {
        let flows = OAuthFlows {
            authorization_code: OAuthFlow::authorization_code(
                "https://example.com/authorize",
                "https://example.com/token",
            )
            .scope("read:pets", "read your pets"),
            client_credentials: OAuthFlow::token("https://example.com/token"),
            ..Default::default()
        };
        let scheme = SecurityScheme::oauth2(flows);

        assert_eq!(
            serde_json::to_value(&scheme).unwrap(),
            json!({
                "type": "oauth2",
                "name": "",
                "in": "",
                "scheme": "",
                "flows": {
                    "clientCredentials": {
                        "authorizationUrl": "",
                        "tokenUrl": "https://example.com/token",
                        "scopes": {}
                    },
                    "authorizationCode": {
                        "authorizationUrl": "https://example.com/authorize",
                        "tokenUrl": "https://example.com/token",
                        "scopes": {"read:pets": "read your pets"}
                    }
                }
            })
        );
    }

    #[test]
    fn test_openid_connect_scheme() {
        let scheme = SecurityScheme::openid_connect("https://example.com/.well-known/openid-configuration");
        let json = serde_json::to_value(&scheme).unwrap();
        assert_eq!(json["type"], "openIdConnect");
        assert_eq!(
            json["openIdConnectUrl"],
            "https://example.com/.well-known/openid-configuration"
        );
    }

    #[test]
    fn test_extensions_round_trip() {
        let json = json!({
            "type": "apiKey",
            "name": "token",
            "in": "query",
            "scheme": "",
            "x-internal": {"owner": "platform", "rotations": [1, 2]}
        });
        let scheme: SecurityScheme = serde_json::from_value(json.clone()).unwrap();

        assert_eq!(scheme.extensions["x-internal"]["owner"], "platform");
        assert_eq!(serde_json::to_value(&scheme).unwrap(), json);
    }

    #[test]
    fn test_extension_builder_only_takes_prefixed_keys() {
        let scheme = SecurityScheme::basic()
            .extension("x-owner", json!("platform"))
            .extension("type", json!("apiKey"))
            .extension("scheme", json!("digest"));

        assert_eq!(scheme.extensions.len(), 1);
        assert_eq!(
            serde_json::to_string(&scheme).unwrap(),
            r#"{"type":"http","name":"","in":"","scheme":"basic","x-owner":"platform"}"#
        );
    }

    #[test]
    fn test_missing_conditional_fields_are_representable() {
        let scheme: SecurityScheme = serde_json::from_value(json!({"type": "oauth2"})).unwrap();
        assert!(scheme.flows.is_empty());
        assert_eq!(
            serde_json::to_value(&scheme).unwrap(),
            json!({"type": "oauth2", "name": "", "in": "", "scheme": ""})
        );
    }
}
