//! Responses keyed by HTTP status code
//!
//! The table is closed: only `default` and the well-known status codes listed
//! in [`StatusCode`] are accepted. Unknown keys fail to decode.

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::content::{Link, MediaType};
use crate::error::Error;
use crate::parameter::Header;
use crate::value::is_default;

const DEFAULT_KEY: &str = "default";

macro_rules! status_codes {
    ($($(#[$meta:meta])* $name:ident = $code:literal,)+) => {
        /// HTTP status codes that may key a [`Responses`] entry
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum StatusCode {
            $($(#[$meta])* $name = $code,)+
        }

        impl StatusCode {
            /// Every supported status code, ascending
            pub const ALL: &'static [StatusCode] = &[$(StatusCode::$name,)+];

            /// Look up a supported status code
            pub fn from_u16(code: u16) -> Option<Self> {
                match code {
                    $($code => Some(StatusCode::$name),)+
                    _ => None,
                }
            }
        }
    };
}

status_codes! {
    Continue = 100,
    SwitchingProtocols = 101,
    Processing = 102,
    EarlyHints = 103,
    Ok = 200,
    Created = 201,
    Accepted = 202,
    NonAuthoritativeInformation = 203,
    NoContent = 204,
    ResetContent = 205,
    PartialContent = 206,
    MultiStatus = 207,
    AlreadyReported = 208,
    ImUsed = 226,
    MultipleChoices = 300,
    MovedPermanently = 301,
    Found = 302,
    SeeOther = 303,
    NotModified = 304,
    UseProxy = 305,
    TemporaryRedirect = 307,
    PermanentRedirect = 308,
    BadRequest = 400,
    Unauthorized = 401,
    PaymentRequired = 402,
    Forbidden = 403,
    NotFound = 404,
    MethodNotAllowed = 405,
    NotAcceptable = 406,
    ProxyAuthenticationRequired = 407,
    RequestTimeout = 408,
    Conflict = 409,
    Gone = 410,
    LengthRequired = 411,
    PreconditionFailed = 412,
    PayloadTooLarge = 413,
    UriTooLong = 414,
    UnsupportedMediaType = 415,
    RangeNotSatisfiable = 416,
    ExpectationFailed = 417,
    ImATeapot = 418,
    MisdirectedRequest = 421,
    UnprocessableEntity = 422,
    Locked = 423,
    FailedDependency = 424,
    TooEarly = 425,
    UpgradeRequired = 426,
    PreconditionRequired = 428,
    TooManyRequests = 429,
    RequestHeaderFieldsTooLarge = 431,
    UnavailableForLegalReasons = 451,
    InternalServerError = 500,
    NotImplemented = 501,
    BadGateway = 502,
    ServiceUnavailable = 503,
    GatewayTimeout = 504,
    HttpVersionNotSupported = 505,
    VariantAlsoNegotiates = 506,
    InsufficientStorage = 507,
    LoopDetected = 508,
    NotExtended = 510,
    NetworkAuthenticationRequired = 511,
}

impl StatusCode {
    /// Numeric status code
    pub fn as_u16(self) -> u16 {
        self as u16
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = Error;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        StatusCode::from_u16(code).ok_or(Error::UnsupportedStatus(code))
    }
}

impl TryFrom<http::StatusCode> for StatusCode {
    type Error = Error;

    fn try_from(status: http::StatusCode) -> Result<Self, Self::Error> {
        StatusCode::try_from(status.as_u16())
    }
}

impl PartialEq<http::StatusCode> for StatusCode {
    fn eq(&self, other: &http::StatusCode) -> bool {
        self.as_u16() == other.as_u16()
    }
}

/// Expected responses of an operation
///
/// A sparse table from [`StatusCode`] to [`Response`] plus a `default` entry
/// for every unlisted code. Empty responses are never stored, so setting a
/// slot to `Response::default()` clears it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Responses {
    /// Response for status codes without their own entry
    pub default: Response,
    statuses: BTreeMap<StatusCode, Response>,
}

impl Responses {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the response for a status code, returning the previous one
    pub fn insert(&mut self, status: StatusCode, response: Response) -> Option<Response> {
        if response.is_empty() {
            self.statuses.remove(&status)
        } else {
            self.statuses.insert(status, response)
        }
    }

    /// Builder form of [`Responses::insert`]
    pub fn with(mut self, status: StatusCode, response: Response) -> Self {
        self.insert(status, response);
        self
    }

    /// Builder form for the default entry
    pub fn with_default(mut self, response: Response) -> Self {
        self.default = response;
        self
    }

    /// Response for exactly this status code, ignoring `default`
    pub fn get(&self, status: StatusCode) -> Option<&Response> {
        self.statuses.get(&status)
    }

    /// Remove the entry for a status code, returning it
    pub fn remove(&mut self, status: StatusCode) -> Option<Response> {
        self.statuses.remove(&status)
    }

    /// Response that applies to a status code: its own entry, else `default`
    ///
    /// Returns `None` when neither is set.
    pub fn resolve(&self, status: StatusCode) -> Option<&Response> {
        self.get(status)
            .or_else(|| (!self.default.is_empty()).then_some(&self.default))
    }

    /// Status-specific entries, ascending by code
    pub fn iter(&self) -> impl Iterator<Item = (StatusCode, &Response)> {
        self.statuses.iter().map(|(status, response)| (*status, response))
    }

    /// Number of status-specific entries
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    /// Whether neither `default` nor any status entry is set
    pub fn is_empty(&self) -> bool {
        self.default.is_empty() && self.statuses.is_empty()
    }
}

impl Serialize for Responses {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let has_default = !self.default.is_empty();
        let mut map = serializer.serialize_map(Some(self.statuses.len() + has_default as usize))?;
        if has_default {
            map.serialize_entry(DEFAULT_KEY, &self.default)?;
        }
        for (status, response) in &self.statuses {
            map.serialize_entry(&status.to_string(), response)?;
        }
        map.end()
    }
}

/// Key of a responses map entry
enum ResponseKey {
    Default,
    Status(StatusCode),
}

impl ResponseKey {
    fn from_code<E: de::Error>(code: u64) -> Result<Self, E> {
        u16::try_from(code)
            .ok()
            .and_then(StatusCode::from_u16)
            .map(ResponseKey::Status)
            .ok_or_else(|| E::custom(format!("unsupported response status code `{code}`")))
    }
}

impl<'de> Deserialize<'de> for ResponseKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyVisitor;

        impl<'de> Visitor<'de> for KeyVisitor {
            type Value = ResponseKey;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("`default` or an HTTP status code")
            }

            fn visit_str<E: de::Error>(self, key: &str) -> Result<Self::Value, E> {
                if key == DEFAULT_KEY {
                    return Ok(ResponseKey::Default);
                }
                // only the canonical spelling: no sign, no leading zeros
                StatusCode::ALL
                    .iter()
                    .find(|status| status.to_string() == key)
                    .map(|status| ResponseKey::Status(*status))
                    .ok_or_else(|| E::custom(format!("unsupported response key `{key}`")))
            }

            // YAML documents may key responses with bare integers
            fn visit_u64<E: de::Error>(self, code: u64) -> Result<Self::Value, E> {
                ResponseKey::from_code(code)
            }

            fn visit_i64<E: de::Error>(self, code: i64) -> Result<Self::Value, E> {
                let code = u64::try_from(code)
                    .map_err(|_| E::custom(format!("unsupported response status code `{code}`")))?;
                ResponseKey::from_code(code)
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}

impl<'de> Deserialize<'de> for Responses {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ResponsesVisitor;

        impl<'de> Visitor<'de> for ResponsesVisitor {
            type Value = Responses;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of status codes to responses")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut responses = Responses::new();
                while let Some(key) = map.next_key::<ResponseKey>()? {
                    let response: Response = map.next_value()?;
                    match key {
                        ResponseKey::Default => responses.default = response,
                        ResponseKey::Status(status) => {
                            responses.insert(status, response);
                        }
                    }
                }
                Ok(responses)
            }
        }

        deserializer.deserialize_map(ResponsesVisitor)
    }
}

/// A single response
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Response {
    /// Response description (always serialized)
    pub description: String,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, Header>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub content: BTreeMap<String, MediaType>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub links: BTreeMap<String, Link>,
}

impl Response {
    /// Create a response with a description
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }

    /// Add a header
    pub fn header(mut self, name: impl Into<String>, header: Header) -> Self {
        self.headers.insert(name.into(), header);
        self
    }

    /// Add a media type entry
    pub fn content(mut self, media_type: impl Into<String>, content: MediaType) -> Self {
        self.content.insert(media_type.into(), content);
        self
    }

    /// Add a link
    pub fn link(mut self, name: impl Into<String>, link: Link) -> Self {
        self.links.insert(name.into(), link);
        self
    }

    /// Whether every field holds its zero value
    pub fn is_empty(&self) -> bool {
        is_default(self)
    }
}
