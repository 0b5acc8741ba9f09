//! Error types for encoding and decoding OpenAPI documents

use thiserror::Error;

use crate::config::Format;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for OpenAPI model operations
///
/// The model itself never validates anything, so every failure originates
/// either in the underlying codec or in a conversion from HTTP vocabulary
/// types that have no slot in the document.
#[derive(Error, Debug)]
pub enum Error {
    /// A value could not be serialized (e.g. an open value slot holding a
    /// non-string map key)
    #[error("{format} encoding error: {message}")]
    Encode { format: Format, message: String },

    /// The input text is malformed or a field received an incompatible type
    #[error("{format} decoding error: {message}")]
    Decode {
        format: Format,
        message: String,
        /// 1-based line of the offending input, when the codec reports one
        line: Option<usize>,
        /// 1-based column of the offending input, when the codec reports one
        column: Option<usize>,
    },

    /// HTTP status code outside the closed `Responses` table
    #[error("unsupported response status code: {0}")]
    UnsupportedStatus(u16),

    /// HTTP method without a path item slot
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),
}

impl Error {
    pub(crate) fn encode_json(err: serde_json::Error) -> Self {
        Error::Encode {
            format: Format::Json,
            message: err.to_string(),
        }
    }

    pub(crate) fn decode_json(err: serde_json::Error) -> Self {
        // serde_json reports line 0 for errors that are not tied to input text
        let (line, column) = match err.line() {
            0 => (None, None),
            line => (Some(line), Some(err.column())),
        };
        Error::Decode {
            format: Format::Json,
            message: err.to_string(),
            line,
            column,
        }
    }

    #[cfg(feature = "yaml")]
    pub(crate) fn encode_yaml(err: serde_yaml::Error) -> Self {
        Error::Encode {
            format: Format::Yaml,
            message: err.to_string(),
        }
    }

    #[cfg(feature = "yaml")]
    pub(crate) fn decode_yaml(err: serde_yaml::Error) -> Self {
        let location = err.location();
        Error::Decode {
            format: Format::Yaml,
            message: err.to_string(),
            line: location.as_ref().map(|l| l.line()),
            column: location.as_ref().map(|l| l.column()),
        }
    }

    /// Returns true for failures raised while reading input text
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }

    /// Position of a decode failure as `(line, column)`, if known
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::Decode {
                line: Some(line),
                column: Some(column),
                ..
            } => Some((*line, *column)),
            _ => None,
        }
    }
}
