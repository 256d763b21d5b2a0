//! XML encoding.
//!
//! Decoding parses the document into an element tree with resolved
//! namespaces and hands that tree to the schema types' serde derives.
//! Encoding goes the other way through `serde_json::Value`, so the XML and
//! JSON forms of a value always carry the same keys.
//!
//! ```xml
//! <ebuCoreMain xmlns="urn:ebu:metadata-schema:ebucore"
//!              xmlns:dc="http://purl.org/dc/elements/1.1/" version="1.10">
//!   <coreMetadata>
//!     <title><dc:title xml:lang="en">News</dc:title></title>
//!   </coreMetadata>
//! </ebuCoreMain>
//! ```

#[cfg(feature = "xml")]
mod de;
#[cfg(feature = "xml")]
mod dom;
#[cfg(feature = "xml")]
mod ser;

#[cfg(feature = "xml")]
pub use de::DeError;
#[cfg(feature = "xml")]
pub use dom::{XmlAttribute, XmlElement};

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::format::{Document, DocumentFormat};
use super::namespace::QualifiedName;
use crate::error::{Error, Result};

/// XML encoding handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Xml {
    /// Spaces per nesting level; `None` writes a single line.
    pub indent: Option<usize>,
    /// Emit the `<?xml ...?>` declaration.
    pub declaration: bool,
}

impl Default for Xml {
    fn default() -> Self {
        Self {
            indent: Some(2),
            declaration: true,
        }
    }
}

impl Xml {
    /// Single-line output without declaration.
    pub fn compact() -> Self {
        Self {
            indent: None,
            declaration: false,
        }
    }

    /// Read a document whose root element is not fixed by its type.
    pub fn decode_document<T: DeserializeOwned>(&self, input: &[u8]) -> Result<XmlDocument<T>> {
        #[cfg(feature = "xml")]
        {
            read_document(input)
        }
        #[cfg(not(feature = "xml"))]
        {
            let _ = input;
            Err(Error::unsupported("XML decoding requires the 'xml' feature"))
        }
    }

    /// Write a value under the root name carried by the document.
    pub fn encode_document<T: Serialize>(&self, document: &XmlDocument<T>) -> Result<Vec<u8>> {
        #[cfg(feature = "xml")]
        {
            write_value(document.name.clone(), &document.value, self)
        }
        #[cfg(not(feature = "xml"))]
        {
            let _ = document;
            Err(Error::unsupported("XML encoding requires the 'xml' feature"))
        }
    }
}

impl DocumentFormat for Xml {
    fn name(&self) -> &'static str {
        "XML"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["xml"]
    }

    fn mime_type(&self) -> &'static str {
        "application/xml"
    }

    fn decode<T: Document>(&self, input: &[u8]) -> Result<T> {
        #[cfg(feature = "xml")]
        {
            from_slice(input)
        }
        #[cfg(not(feature = "xml"))]
        {
            let _ = input;
            Err(Error::unsupported("XML decoding requires the 'xml' feature"))
        }
    }

    fn encode<T: Document>(&self, value: &T) -> Result<Vec<u8>> {
        #[cfg(feature = "xml")]
        {
            write_value(T::root_name(), value, self)
        }
        #[cfg(not(feature = "xml"))]
        {
            let _ = value;
            Err(Error::unsupported("XML encoding requires the 'xml' feature"))
        }
    }

    fn validate(&self, input: &[u8]) -> Result<()> {
        let content =
            std::str::from_utf8(input).map_err(|e| Error::xml(format!("Invalid UTF-8: {e}")))?;
        if !content.trim_start().starts_with('<') {
            return Err(Error::xml("Missing root element"));
        }
        Ok(())
    }
}

/// A decoded value together with the name of the element it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlDocument<T> {
    pub name: QualifiedName,
    pub value: T,
}

impl<T> XmlDocument<T> {
    pub fn new(name: QualifiedName, value: T) -> Self {
        Self { name, value }
    }
}

// ============================================================================
// FREE FUNCTIONS (require xml feature)
// ============================================================================

/// Decode a document of type `T`, checking its root element.
#[cfg(feature = "xml")]
pub fn from_slice<T: Document>(input: &[u8]) -> Result<T> {
    let document = read_document::<T>(input)?;
    if !T::accepts_root(&document.name) {
        return Err(Error::xml(format!(
            "unexpected root element {}, expected {}",
            document.name,
            T::root_name()
        )));
    }
    Ok(document.value)
}

/// Encode a document of type `T` with default formatting.
#[cfg(feature = "xml")]
pub fn to_vec<T: Document>(value: &T) -> Result<Vec<u8>> {
    write_value(T::root_name(), value, &Xml::default())
}

/// Decode any element tree into `T`, keeping the root name.
#[cfg(feature = "xml")]
pub fn read_document<T: DeserializeOwned>(input: &[u8]) -> Result<XmlDocument<T>> {
    let root = dom::parse(input)?;
    tracing::trace!(root = %root.name, bytes = input.len(), "decoding XML document");
    let value = de::from_element(&root)
        .map_err(|e| Error::xml(format!("<{}>: {e}", root.name.local)))?;
    Ok(XmlDocument::new(root.name, value))
}

#[cfg(feature = "xml")]
fn write_value<T: Serialize>(name: QualifiedName, value: &T, options: &Xml) -> Result<Vec<u8>> {
    let tree = serde_json::to_value(value)?;
    let root = ser::to_element(name, &tree)?;
    let bytes = dom::write(&root, options.indent, options.declaration)?;
    tracing::trace!(root = %root.name, bytes = bytes.len(), "encoded XML document");
    Ok(bytes)
}

#[cfg(all(test, feature = "xml"))]
mod tests {
    use super::*;
    use crate::codec::format::XmlRoot;
    use crate::codec::namespace;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        #[serde(rename = "@lang", default, skip_serializing_if = "Option::is_none")]
        lang: Option<String>,
        #[serde(rename = "dc:subject", default, skip_serializing_if = "Vec::is_empty")]
        subjects: Vec<String>,
    }

    impl XmlRoot for Note {
        const NAMESPACE: &'static str = namespace::EBUCORE;
        const LOCAL_NAME: &'static str = "note";
    }

    #[test]
    fn test_round_trip() {
        let note = Note {
            lang: Some("en".into()),
            subjects: vec!["a".into(), "b".into()],
        };
        let bytes = Xml::default().encode(&note).unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.starts_with("<?xml"));
        assert!(text.contains(r#"<note xmlns="urn:ebu:metadata-schema:ebucore""#));
        assert_eq!(Xml::default().decode::<Note>(&bytes).unwrap(), note);
    }

    #[test]
    fn test_wrong_root_is_rejected() {
        let err = from_slice::<Note>(br#"<other xmlns="urn:ebu:metadata-schema:ebucore"/>"#)
            .unwrap_err();
        assert!(err.to_string().contains("unexpected root element"));
    }

    #[test]
    fn test_compact_has_no_declaration() {
        let note = Note {
            lang: None,
            subjects: vec![],
        };
        let bytes = Xml::compact().encode(&note).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"<note xmlns="urn:ebu:metadata-schema:ebucore"/>"#
        );
    }
}
