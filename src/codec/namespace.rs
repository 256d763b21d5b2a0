//! XML namespace registry and the key scheme shared by both encodings.
//!
//! Schema structs name their fields once and both encodings use those names:
//!
//! ```text
//! @typeLabel          attribute without namespace
//! @xml:lang           attribute in a registered namespace
//! #value              mixed-content text
//! title               child in the same namespace as its parent
//! dc:title            child in another registered namespace
//! {urn:x}title        child in an unregistered namespace (Clark notation)
//! ```

use std::fmt;

use crate::error::{Error, Result};

/// Dublin Core Metadata Element Set 1.1.
pub const DC: &str = "http://purl.org/dc/elements/1.1/";
/// DCMI Metadata Terms.
pub const DCTERMS: &str = "http://purl.org/dc/terms";
/// DCMI Terms as published with a trailing slash; accepted on input.
pub const DCTERMS_SLASH: &str = "http://purl.org/dc/terms/";
/// DCMI Type Vocabulary.
pub const DCMITYPE: &str = "http://purl.org/dc/dcmitype/";
/// EBU Core Metadata Set.
pub const EBUCORE: &str = "urn:ebu:metadata-schema:ebucore";
/// Opencast media package.
pub const MEDIAPACKAGE: &str = "http://mediapackage.opencastproject.org";
/// Opencast Dublin Core catalog container.
pub const OPENCAST_DC: &str = "http://www.opencastproject.org/xsd/1.0/dublincore/";
/// OAI-PMH Dublin Core container.
pub const OAI_DC: &str = "http://www.openarchives.org/OAI/2.0/oai_dc/";
/// XML Schema instance (`xsi:type`).
pub const XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
/// The implicitly bound `xml` prefix (`xml:lang`).
pub const XML: &str = "http://www.w3.org/XML/1998/namespace";

/// Key under which mixed-content text is stored.
pub const TEXT_KEY: &str = "#value";

/// Canonical prefix for every registered namespace URI.
const REGISTRY: &[(&str, &str)] = &[
    ("dc", DC),
    ("dcterms", DCTERMS),
    ("dcterms", DCTERMS_SLASH),
    ("dcmitype", DCMITYPE),
    ("ebucore", EBUCORE),
    ("mp", MEDIAPACKAGE),
    ("oc", OPENCAST_DC),
    ("oai_dc", OAI_DC),
    ("xsi", XSI),
    ("xml", XML),
];

/// Canonical prefix of a registered namespace.
pub fn prefix_for(uri: &str) -> Option<&'static str> {
    REGISTRY
        .iter()
        .find(|(_, candidate)| *candidate == uri)
        .map(|(prefix, _)| *prefix)
}

/// Namespace URI emitted for a canonical prefix.
pub fn uri_for(prefix: &str) -> Option<&'static str> {
    REGISTRY
        .iter()
        .find(|(candidate, _)| *candidate == prefix)
        .map(|(_, uri)| *uri)
}

/// Fold aliases onto the URI that is emitted.
pub fn canonical_uri(uri: &str) -> &str {
    match prefix_for(uri).and_then(uri_for) {
        Some(canonical) => canonical,
        None => uri,
    }
}

/// An expanded XML name: namespace URI plus local part.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    pub namespace: Option<String>,
    pub local: String,
}

impl QualifiedName {
    pub fn new(namespace: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            local: local.into(),
        }
    }

    pub fn unqualified(local: impl Into<String>) -> Self {
        Self {
            namespace: None,
            local: local.into(),
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Compare names treating namespace aliases as equal.
    pub fn matches(&self, namespace: &str, local: &str) -> bool {
        self.local == local && self.namespace().map(canonical_uri) == Some(canonical_uri(namespace))
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{{{ns}}}{}", self.local),
            None => f.write_str(&self.local),
        }
    }
}

/// Key of a child element as seen from its parent.
pub fn child_key(parent: Option<&str>, name: &QualifiedName) -> String {
    let same = match (parent, name.namespace()) {
        (Some(p), Some(c)) => canonical_uri(p) == canonical_uri(c),
        (None, None) => true,
        _ => false,
    };
    if same {
        return name.local.clone();
    }
    qualified_key(name)
}

/// Key of an attribute, including the leading `@`.
pub fn attribute_key(name: &QualifiedName) -> String {
    match name.namespace() {
        None => format!("@{}", name.local),
        Some(_) => format!("@{}", qualified_key(name)),
    }
}

fn qualified_key(name: &QualifiedName) -> String {
    match name.namespace() {
        None => name.local.clone(),
        Some(ns) => match prefix_for(ns) {
            Some(prefix) => format!("{prefix}:{}", name.local),
            None => {
                tracing::debug!(namespace = ns, local = %name.local, "unregistered namespace");
                format!("{{{ns}}}{}", name.local)
            }
        },
    }
}

/// Expand a child key back into a name; unprefixed keys inherit `parent`.
pub fn parse_child_key(key: &str, parent: Option<&str>) -> Result<QualifiedName> {
    match split_key(key)? {
        Some(name) => Ok(name),
        None => Ok(QualifiedName {
            namespace: parent.map(str::to_string),
            local: key.to_string(),
        }),
    }
}

/// Expand an attribute key (without its `@`); unprefixed keys have no namespace.
pub fn parse_attribute_key(key: &str) -> Result<QualifiedName> {
    Ok(split_key(key)?.unwrap_or_else(|| QualifiedName::unqualified(key)))
}

fn split_key(key: &str) -> Result<Option<QualifiedName>> {
    if let Some(rest) = key.strip_prefix('{') {
        let (ns, local) = rest
            .split_once('}')
            .ok_or_else(|| Error::xml(format!("unterminated namespace in key `{key}`")))?;
        return Ok(Some(QualifiedName::new(ns, local)));
    }
    match key.split_once(':') {
        Some((prefix, local)) => {
            let uri = uri_for(prefix).ok_or_else(|| Error::UnknownPrefix(prefix.to_string()))?;
            Ok(Some(QualifiedName::new(uri, local)))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(EBUCORE), QualifiedName::new(EBUCORE, "title"), "title")]
    #[case(Some(EBUCORE), QualifiedName::new(DC, "title"), "dc:title")]
    #[case(Some(DCTERMS), QualifiedName::new(DCTERMS_SLASH, "created"), "created")]
    #[case(Some(DC), QualifiedName::new("urn:x", "extra"), "{urn:x}extra")]
    fn test_child_key(
        #[case] parent: Option<&str>,
        #[case] name: QualifiedName,
        #[case] expected: &str,
    ) {
        assert_eq!(child_key(parent, &name), expected);
    }

    #[test]
    fn test_attribute_keys() {
        assert_eq!(attribute_key(&QualifiedName::unqualified("typeLabel")), "@typeLabel");
        assert_eq!(attribute_key(&QualifiedName::new(XML, "lang")), "@xml:lang");
        assert_eq!(
            parse_attribute_key("xsi:type").unwrap(),
            QualifiedName::new(XSI, "type")
        );
    }

    #[test]
    fn test_parse_child_key_inherits_parent() {
        let name = parse_child_key("format", Some(EBUCORE)).unwrap();
        assert_eq!(name, QualifiedName::new(EBUCORE, "format"));
        assert!(matches!(
            parse_child_key("nope:format", Some(EBUCORE)),
            Err(Error::UnknownPrefix(_))
        ));
    }

    #[test]
    fn test_alias_matching() {
        let name = QualifiedName::new(DCTERMS_SLASH, "abstract");
        assert!(name.matches(DCTERMS, "abstract"));
        assert_eq!(canonical_uri(DCTERMS_SLASH), DCTERMS);
    }
}
