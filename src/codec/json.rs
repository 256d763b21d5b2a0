//! JSON encoding.
//!
//! The schema types serialize straight through `serde_json`; attribute keys
//! keep their `@` prefix and mixed-content text sits under `#value`:
//!
//! ```json
//! {
//!   "dc:title": [
//!     { "#value": "TestTitle" },
//!     { "#value": "TestTitleDe", "@xml:lang": "de" }
//!   ]
//! }
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::format::{Document, DocumentFormat};
use crate::error::{Error, Result};

/// JSON encoding handler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Json {
    /// Indent nested objects.
    pub pretty: bool,
}

impl Json {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl DocumentFormat for Json {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn decode<T: Document>(&self, input: &[u8]) -> Result<T> {
        from_slice(input)
    }

    fn encode<T: Document>(&self, value: &T) -> Result<Vec<u8>> {
        if self.pretty {
            to_vec_pretty(value)
        } else {
            to_vec(value)
        }
    }

    fn validate(&self, input: &[u8]) -> Result<()> {
        serde_json::from_slice::<serde::de::IgnoredAny>(input)?;
        Ok(())
    }
}

/// Decode any serde type; NBMP descriptors have no XML form and use this directly.
pub fn from_slice<T: DeserializeOwned>(input: &[u8]) -> Result<T> {
    tracing::trace!(bytes = input.len(), "decoding JSON document");
    serde_json::from_slice(input).map_err(Error::from)
}

pub fn to_vec<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let bytes = serde_json::to_vec(value)?;
    tracing::trace!(bytes = bytes.len(), "encoded JSON document");
    Ok(bytes)
}

pub fn to_vec_pretty<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let bytes = serde_json::to_vec_pretty(value)?;
    tracing::trace!(bytes = bytes.len(), "encoded JSON document");
    Ok(bytes)
}
