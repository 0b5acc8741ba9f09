//! Encoding and decoding of model values
//!
//! Every record in the crate goes through the same two entry points,
//! [`encode`] and [`decode`]. The codec performs no validation: whatever the
//! types can represent is written, and whatever matches the types is read.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{CodecConfig, Format};
use crate::document::OpenApi;
use crate::error::{Error, Result};

/// Encode a value as text
pub fn encode<T: Serialize + ?Sized>(value: &T, config: &CodecConfig) -> Result<String> {
    let result = match config.format {
        Format::Json if config.pretty => {
            serde_json::to_string_pretty(value).map_err(Error::encode_json)
        }
        Format::Json => serde_json::to_string(value).map_err(Error::encode_json),
        #[cfg(feature = "yaml")]
        Format::Yaml => serde_yaml::to_string(value).map_err(Error::encode_yaml),
    };

    match &result {
        Ok(text) => tracing::debug!(format = %config.format, bytes = text.len(), "encoded OpenAPI value"),
        Err(e) => tracing::debug!(format = %config.format, error = %e, "failed to encode OpenAPI value"),
    }
    result
}

/// Decode a value from text
pub fn decode<T: DeserializeOwned>(text: &str, format: Format) -> Result<T> {
    let result = match format {
        Format::Json => serde_json::from_str(text).map_err(Error::decode_json),
        #[cfg(feature = "yaml")]
        Format::Yaml => serde_yaml::from_str(text).map_err(Error::decode_yaml),
    };

    match &result {
        Ok(_) => tracing::debug!(%format, bytes = text.len(), "decoded OpenAPI value"),
        Err(e) => tracing::debug!(%format, error = %e, "failed to decode OpenAPI value"),
    }
    result
}

/// Encode a value into an open JSON value
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<serde_json::Value> {
    serde_json::to_value(value).map_err(Error::encode_json)
}

/// Decode a value from an open JSON value
pub fn from_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T> {
    serde_json::from_value(value).map_err(Error::decode_json)
}

impl OpenApi {
    /// Compact JSON text
    pub fn to_json(&self) -> Result<String> {
        encode(self, &CodecConfig::json())
    }

    /// Indented JSON text
    pub fn to_json_pretty(&self) -> Result<String> {
        encode(self, &CodecConfig::json().pretty(true))
    }

    /// Parse a document from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        decode(text, Format::Json)
    }

    /// Open JSON value form of the document
    pub fn to_value(&self) -> Result<serde_json::Value> {
        to_value(self)
    }

    /// Build a document from an open JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        from_value(value)
    }

    /// YAML text
    #[cfg(feature = "yaml")]
    pub fn to_yaml(&self) -> Result<String> {
        encode(self, &CodecConfig::yaml())
    }

    /// Parse a document from YAML text
    #[cfg(feature = "yaml")]
    pub fn from_yaml(text: &str) -> Result<Self> {
        decode(text, Format::Yaml)
    }
}
