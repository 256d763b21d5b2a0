//! Common trait for document encodings.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::namespace::QualifiedName;
use crate::error::Result;

/// Fixed XML root element of a document type.
///
/// JSON ignores it; XML uses it to name the root on output and to check the
/// root on input.
pub trait XmlRoot {
    const NAMESPACE: &'static str;
    const LOCAL_NAME: &'static str;

    fn root_name() -> QualifiedName {
        QualifiedName::new(Self::NAMESPACE, Self::LOCAL_NAME)
    }

    /// Whether a decoded root element may hold this type.
    fn accepts_root(name: &QualifiedName) -> bool {
        name.matches(Self::NAMESPACE, Self::LOCAL_NAME)
    }
}

/// A top-level document that every encoding can read and write.
pub trait Document: Serialize + DeserializeOwned + XmlRoot {}

impl<T: Serialize + DeserializeOwned + XmlRoot> Document for T {}

/// Trait for document encodings.
///
/// Implementations convert between the serde-derived schema types and the
/// bytes of one wire format.
pub trait DocumentFormat {
    /// Human-readable name of the encoding.
    fn name(&self) -> &'static str;

    /// File extension(s) for this encoding.
    fn extensions(&self) -> &'static [&'static str];

    /// MIME type for this encoding.
    fn mime_type(&self) -> &'static str;

    /// Decode a document from bytes.
    fn decode<T: Document>(&self, input: &[u8]) -> Result<T>;

    /// Encode a document to bytes.
    fn encode<T: Document>(&self, value: &T) -> Result<Vec<u8>>;

    /// Quick well-formedness check that doesn't build a document.
    fn validate(&self, input: &[u8]) -> Result<()> {
        let _ = input;
        Ok(())
    }
}
