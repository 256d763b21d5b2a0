//! Error types for decoding and encoding metadata documents.

use thiserror::Error;

use crate::nbmp::parameter::ParameterError;
use crate::opencast::reference::ReferenceError;
use crate::scalar::ScalarError;

/// Errors that can occur while reading or writing a metadata document.
#[derive(Debug, Error)]
pub enum Error {
    /// XML parsing, shape or serialization error.
    #[error("XML error: {0}")]
    Xml(String),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error during read/write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A scalar value (date, time, duration, URI) could not be converted.
    #[error(transparent)]
    Scalar(#[from] ScalarError),

    /// A media-package reference attribute could not be converted.
    #[error(transparent)]
    Reference(#[from] ReferenceError),

    /// An NBMP parameter failed its datatype-driven decode.
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// A structured text value (flavor, resolution, brand) was malformed.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A namespace prefix has no registered or declared URI.
    #[error("Unknown namespace prefix: {0}")]
    UnknownPrefix(String),

    /// Unsupported encoding or feature.
    #[error("Unsupported: {0}")]
    Unsupported(String),
}

impl Error {
    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Create an unsupported-feature error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported(message.into())
    }
}

/// Errors raised by the small text grammars embedded in attributes and
/// element text (flavors, resolutions, NBMP brands, DCMI types).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Resolution text is not `WIDTHxHEIGHT`.
    #[error("malformed resolution `{0}`, expected WIDTHxHEIGHT")]
    Resolution(String),

    /// Flavor text is not `type/subtype`.
    #[error("malformed flavor `{0}`, expected type/subtype")]
    Flavor(String),

    /// Brand is not `urn:mpeg:mpegi:nbmp:2XXX:<token>`.
    #[error("malformed NBMP brand `{0}`")]
    Brand(String),

    /// Not a term of the DCMI Type Vocabulary.
    #[error("unknown DCMI type `{0}`")]
    DcmiType(String),
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
