//! The Dublin Core Metadata Element Set 1.1.

use serde::{Deserialize, Serialize};

use super::literal_set;
use super::schemes::EncodingScheme;
use crate::codec::XmlRoot;
use crate::codec::namespace::{self, QualifiedName};

/// Text with an optional language and encoding scheme.
///
/// ```xml
/// <dc:title xml:lang="de">TestTitleDe</dc:title>
/// <dcterms:created xsi:type="dcterms:W3CDTF">2024-05-01</dcterms:created>
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimpleLiteral {
    #[serde(rename = "#value", default)]
    pub value: String,
    #[serde(rename = "@xml:lang", default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(rename = "@xsi:type", default, skip_serializing_if = "Option::is_none")]
    pub xsi_type: Option<String>,
}

impl SimpleLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn with_scheme(mut self, scheme: EncodingScheme) -> Self {
        self.xsi_type = Some(scheme.xsi_type().to_string());
        self
    }

    /// The encoding scheme named by `xsi:type`, if it is a known one.
    pub fn scheme(&self) -> Option<EncodingScheme> {
        self.xsi_type.as_deref().and_then(EncodingScheme::from_xsi_type)
    }
}

impl From<&str> for SimpleLiteral {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

literal_set! {
    /// The fifteen Dublin Core elements, each repeatable.
    ///
    /// The container element is chosen by the embedding document, so any
    /// root is accepted on input; `oai_dc:dc` is written when none is given.
    pub struct Elements {
        title => "dc:title" as "title",
        creator => "dc:creator" as "creator",
        subject => "dc:subject" as "subject",
        description => "dc:description" as "description",
        publisher => "dc:publisher" as "publisher",
        contributor => "dc:contributor" as "contributor",
        date => "dc:date" as "date",
        kind => "dc:type" as "type",
        format => "dc:format" as "format",
        identifier => "dc:identifier" as "identifier",
        source => "dc:source" as "source",
        language => "dc:language" as "language",
        relation => "dc:relation" as "relation",
        coverage => "dc:coverage" as "coverage",
        rights => "dc:rights" as "rights",
    }
}

impl XmlRoot for Elements {
    const NAMESPACE: &'static str = namespace::OAI_DC;
    const LOCAL_NAME: &'static str = "dc";

    fn accepts_root(_name: &QualifiedName) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_cover_all_fifteen_elements() {
        assert_eq!(Elements::KEYS.len(), 15);
        assert!(Elements::KEYS.iter().all(|key| key.starts_with("dc:")));
    }

    #[test]
    fn test_get_by_key() {
        let mut elements = Elements::default();
        assert!(elements.is_empty());
        elements.get_mut("dc:type").unwrap().push("Text".into());
        assert_eq!(elements.kind[0].value, "Text");
        assert_eq!(elements.get("dc:type").map(<[_]>::len), Some(1));
        assert_eq!(elements.len(), 1);
        assert!(elements.get("dc:nothing").is_none());
    }

    #[test]
    fn test_json_form() {
        let elements = Elements {
            title: vec![SimpleLiteral::new("A"), SimpleLiteral::new("B").with_lang("de")],
            ..Elements::default()
        };
        assert_eq!(
            serde_json::to_value(&elements).unwrap(),
            serde_json::json!({
                "dc:title": [
                    { "#value": "A" },
                    { "#value": "B", "@xml:lang": "de" }
                ]
            })
        );
    }

    #[test]
    fn test_scheme_lookup() {
        let literal = SimpleLiteral::new("2024-05-01").with_scheme(EncodingScheme::W3cdtf);
        assert_eq!(literal.xsi_type.as_deref(), Some("dcterms:W3CDTF"));
        assert_eq!(literal.scheme(), Some(EncodingScheme::W3cdtf));
        assert_eq!(SimpleLiteral::new("x").scheme(), None);
    }
}
