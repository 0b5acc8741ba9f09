//! Codec configuration

use std::fmt;

/// Text format of an encoded document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// JSON text
    #[default]
    Json,
    /// YAML text
    #[cfg(feature = "yaml")]
    Yaml,
}

impl Format {
    /// Conventional media type for documents in this format
    pub fn media_type(self) -> &'static str {
        match self {
            Format::Json => "application/openapi+json",
            #[cfg(feature = "yaml")]
            Format::Yaml => "application/openapi+yaml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => f.write_str("JSON"),
            #[cfg(feature = "yaml")]
            Format::Yaml => f.write_str("YAML"),
        }
    }
}

/// Configuration for encoding documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Output format
    pub format: Format,
    /// Emit indented, multi-line output (JSON only; YAML is always block style)
    pub pretty: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            format: Format::Json,
            pretty: false,
        }
    }
}

impl CodecConfig {
    /// Create a configuration for the given format
    pub fn new(format: Format) -> Self {
        Self {
            format,
            ..Default::default()
        }
    }

    /// Compact JSON output
    pub fn json() -> Self {
        Self::new(Format::Json)
    }

    /// YAML output
    #[cfg(feature = "yaml")]
    pub fn yaml() -> Self {
        Self::new(Format::Yaml)
    }

    /// Enable or disable pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_compact_json() {
        let config = CodecConfig::default();
        assert_eq!(config.format, Format::Json);
        assert!(!config.pretty);
        assert_eq!(config, CodecConfig::json());
    }

    #[test]
    fn test_builder() {
        let config = CodecConfig::json().pretty(true);
        assert!(config.pretty);
        assert_eq!(config.format.media_type(), "application/openapi+json");
        assert_eq!(config.format.to_string(), "JSON");
    }
}
