//! Encodings shared by every schema module.
//!
//! ```text
//! ┌────────────┐        ┌────────────┐
//! │  XML bytes │        │ JSON bytes │
//! └─────┬──────┘        └─────┬──────┘
//!       │ element tree        │ serde_json
//!       ▼                     ▼
//! ┌──────────────────────────────────────┐
//! │        DocumentFormat trait          │
//! │  - decode(&[u8]) -> Result<T>        │
//! │  - encode(&T) -> Result<Vec<u8>>     │
//! └──────────────────────────────────────┘
//!       │
//!       ▼
//! ┌──────────────────────────────────────┐
//! │ serde-derived schema types           │
//! │ (@attr, #value, prefix:child keys)   │
//! └──────────────────────────────────────┘
//! ```

mod format;
pub mod json;
pub mod lenient;
pub mod namespace;
pub mod xml;

pub use format::{Document, DocumentFormat, XmlRoot};
pub use json::Json;
pub use namespace::QualifiedName;
pub use xml::{Xml, XmlDocument};

use crate::error::Result;

/// The encodings a document can be read from or written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Xml(Xml),
    Json(Json),
}

impl DocumentFormat for Encoding {
    fn name(&self) -> &'static str {
        match self {
            Self::Xml(xml) => xml.name(),
            Self::Json(json) => json.name(),
        }
    }

    fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Xml(xml) => xml.extensions(),
            Self::Json(json) => json.extensions(),
        }
    }

    fn mime_type(&self) -> &'static str {
        match self {
            Self::Xml(xml) => xml.mime_type(),
            Self::Json(json) => json.mime_type(),
        }
    }

    fn decode<T: Document>(&self, input: &[u8]) -> Result<T> {
        match self {
            Self::Xml(xml) => xml.decode(input),
            Self::Json(json) => json.decode(input),
        }
    }

    fn encode<T: Document>(&self, value: &T) -> Result<Vec<u8>> {
        match self {
            Self::Xml(xml) => xml.encode(value),
            Self::Json(json) => json.encode(value),
        }
    }

    fn validate(&self, input: &[u8]) -> Result<()> {
        match self {
            Self::Xml(xml) => xml.validate(input),
            Self::Json(json) => json.validate(input),
        }
    }
}

/// Supported file extensions.
pub fn supported_extensions() -> &'static [&'static str] {
    &["xml", "json"]
}

/// Detect encoding from file extension.
pub fn detect_encoding(path: &std::path::Path) -> Option<Encoding> {
    let ext = path.extension()?.to_str()?;
    match ext.to_lowercase().as_str() {
        "xml" => Some(Encoding::Xml(Xml::default())),
        "json" => Some(Encoding::Json(Json::default())),
        _ => None,
    }
}

/// Detect encoding from MIME type.
pub fn detect_encoding_from_mime(mime: &str) -> Option<Encoding> {
    let essence = mime.split(';').next().unwrap_or(mime).trim();
    match essence {
        "application/xml" | "text/xml" => Some(Encoding::Xml(Xml::default())),
        "application/json" => Some(Encoding::Json(Json::default())),
        other if other.ends_with("+xml") => Some(Encoding::Xml(Xml::default())),
        other if other.ends_with("+json") => Some(Encoding::Json(Json::default())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::Path;

    #[rstest]
    #[case("package.xml", Some("XML"))]
    #[case("FUNCTION.JSON", Some("JSON"))]
    #[case("track.mp4", None)]
    #[case("no_extension", None)]
    fn test_detect_encoding(#[case] path: &str, #[case] expected: Option<&str>) {
        assert_eq!(detect_encoding(Path::new(path)).map(|e| e.name()), expected);
    }

    #[rstest]
    #[case("application/xml", Some("XML"))]
    #[case("application/json; charset=utf-8", Some("JSON"))]
    #[case("application/atom+xml", Some("XML"))]
    #[case("application/ld+json", Some("JSON"))]
    #[case("text/plain", None)]
    fn test_detect_encoding_from_mime(#[case] mime: &str, #[case] expected: Option<&str>) {
        assert_eq!(detect_encoding_from_mime(mime).map(|e| e.name()), expected);
    }
}
