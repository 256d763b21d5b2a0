//! Minimal element tree read and written with quick-xml events.
//!
//! Namespace prefixes are resolved while reading, so every name in the tree
//! is an expanded [`QualifiedName`] and the prefixes a producer picked do
//! not matter.

use indexmap::IndexMap;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::codec::namespace::{self, QualifiedName};
use crate::error::{Error, Result};

/// One attribute with its expanded name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlAttribute {
    pub name: QualifiedName,
    pub value: String,
}

/// An element with resolved names, its attributes, children and text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: QualifiedName,
    pub attributes: Vec<XmlAttribute>,
    pub children: Vec<XmlElement>,
    pub text: String,
}

impl XmlElement {
    pub fn new(name: QualifiedName) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// No attributes and no children: the element is just its text.
    pub fn is_leaf(&self) -> bool {
        self.attributes.is_empty() && self.children.is_empty()
    }
}

// ============================================================================
// READER
// ============================================================================

/// Prefix bindings of the open elements, innermost last.
#[derive(Default)]
struct NamespaceStack {
    bindings: Vec<(Option<String>, String)>,
    marks: Vec<usize>,
}

impl NamespaceStack {
    fn push_scope(&mut self) {
        self.marks.push(self.bindings.len());
    }

    fn pop_scope(&mut self) {
        if let Some(mark) = self.marks.pop() {
            self.bindings.truncate(mark);
        }
    }

    fn bind(&mut self, prefix: Option<String>, uri: String) {
        self.bindings.push((prefix, uri));
    }

    fn lookup(&self, prefix: Option<&str>) -> Option<&str> {
        if prefix == Some("xml") {
            return Some(namespace::XML);
        }
        self.bindings
            .iter()
            .rev()
            .find(|(bound, _)| bound.as_deref() == prefix)
            .map(|(_, uri)| uri.as_str())
    }

    fn resolve_element(&self, raw: &str) -> Result<QualifiedName> {
        match raw.split_once(':') {
            Some((prefix, local)) => {
                let uri = self
                    .lookup(Some(prefix))
                    .ok_or_else(|| Error::UnknownPrefix(prefix.to_string()))?;
                Ok(QualifiedName::new(uri, local))
            }
            // An empty default binding (`xmlns=""`) undeclares the namespace.
            None => Ok(match self.lookup(None) {
                Some(uri) if !uri.is_empty() => QualifiedName::new(uri, raw),
                _ => QualifiedName::unqualified(raw),
            }),
        }
    }

    fn resolve_attribute(&self, raw: &str) -> Result<QualifiedName> {
        match raw.split_once(':') {
            Some((prefix, local)) => {
                let uri = self
                    .lookup(Some(prefix))
                    .ok_or_else(|| Error::UnknownPrefix(prefix.to_string()))?;
                Ok(QualifiedName::new(uri, local))
            }
            None => Ok(QualifiedName::unqualified(raw)),
        }
    }
}

/// Parse a document into its root element.
pub fn parse(input: &[u8]) -> Result<XmlElement> {
    let mut reader = Reader::from_reader(input);

    let mut buf = Vec::new();
    let mut namespaces = NamespaceStack::default();
    let mut open: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let element = open_element(e, &mut namespaces)?;
                open.push(element);
            }
            Ok(Event::Empty(ref e)) => {
                let element = open_element(e, &mut namespaces)?;
                namespaces.pop_scope();
                close_element(element, &mut open, &mut root)?;
            }
            Ok(Event::End(_)) => {
                namespaces.pop_scope();
                let element = open
                    .pop()
                    .ok_or_else(|| Error::xml("closing tag without an open element"))?;
                close_element(element, &mut open, &mut root)?;
            }
            Ok(Event::Text(ref e)) => {
                if let Some(current) = open.last_mut() {
                    let text = e
                        .unescape()
                        .map_err(|e| Error::xml(format!("Text error: {e}")))?;
                    current.text.push_str(&text);
                }
            }
            Ok(Event::CData(ref e)) => {
                if let Some(current) = open.last_mut() {
                    let text = std::str::from_utf8(e)
                        .map_err(|e| Error::xml(format!("Invalid UTF-8 in CDATA: {e}")))?;
                    current.text.push_str(text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::xml(format!(
                    "XML parse error at position {}: {e}",
                    reader.error_position()
                )));
            }
            _ => {}
        }
        buf.clear();
    }

    if !open.is_empty() {
        return Err(Error::xml("unexpected end of document"));
    }
    root.ok_or_else(|| Error::xml("document has no root element"))
}

fn open_element(e: &BytesStart<'_>, namespaces: &mut NamespaceStack) -> Result<XmlElement> {
    namespaces.push_scope();

    let mut raw_attributes = Vec::new();
    for attr_result in e.attributes() {
        let attr = attr_result.map_err(|e| Error::xml(format!("Attribute error: {e}")))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| Error::xml(format!("Attribute key error: {e}")))?
            .to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| Error::xml(format!("Attribute value error: {e}")))?
            .into_owned();

        if key == "xmlns" {
            namespaces.bind(None, value);
        } else if let Some(prefix) = key.strip_prefix("xmlns:") {
            namespaces.bind(Some(prefix.to_string()), value);
        } else {
            raw_attributes.push((key, value));
        }
    }

    let name_bytes = e.name();
    let tag_name = std::str::from_utf8(name_bytes.as_ref())
        .map_err(|e| Error::xml(format!("Invalid tag name: {e}")))?;

    let mut element = XmlElement::new(namespaces.resolve_element(tag_name)?);
    for (key, value) in raw_attributes {
        element.attributes.push(XmlAttribute {
            name: namespaces.resolve_attribute(&key)?,
            value,
        });
    }
    Ok(element)
}

fn close_element(
    mut element: XmlElement,
    open: &mut [XmlElement],
    root: &mut Option<XmlElement>,
) -> Result<()> {
    // Indentation around child elements is layout, not content.
    if !element.children.is_empty() && element.text.trim().is_empty() {
        element.text.clear();
    }
    if let Some(parent) = open.last_mut() {
        parent.children.push(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(Error::xml(format!(
            "second root element <{}> after the document element",
            element.name
        )));
    }
    *root = Some(element);
    Ok(())
}

// ============================================================================
// WRITER
// ============================================================================

/// Prefix assignment for one document: the root namespace is the default
/// namespace, every other namespace gets its canonical prefix.
struct Prefixes {
    default: Option<String>,
    prefixed: IndexMap<String, String>,
}

impl Prefixes {
    fn collect(root: &XmlElement) -> Self {
        let default = root.name.namespace().map(|ns| namespace::canonical_uri(ns).to_string());
        let mut prefixes = Self {
            default,
            prefixed: IndexMap::new(),
        };
        prefixes.visit(root);
        prefixes
    }

    fn visit(&mut self, element: &XmlElement) {
        if let Some(ns) = element.name.namespace() {
            if Some(namespace::canonical_uri(ns)) != self.default.as_deref() {
                self.declare(ns);
            }
        }
        // Attributes never take the default namespace, so any namespaced
        // attribute needs a prefix even when it shares the root namespace.
        for attr in &element.attributes {
            if let Some(ns) = attr.name.namespace() {
                self.declare(ns);
            }
        }
        for child in &element.children {
            self.visit(child);
        }
    }

    fn declare(&mut self, ns: &str) {
        let ns = namespace::canonical_uri(ns);
        if ns == namespace::XML || self.prefixed.contains_key(ns) {
            return;
        }
        let prefix = match namespace::prefix_for(ns) {
            Some(prefix) => prefix.to_string(),
            None => format!("ns{}", self.prefixed.len()),
        };
        self.prefixed.insert(ns.to_string(), prefix);
    }

    fn element_name(&self, name: &QualifiedName) -> String {
        match name.namespace().map(namespace::canonical_uri) {
            None => name.local.clone(),
            Some(ns) if Some(ns) == self.default.as_deref() => name.local.clone(),
            Some(ns) => self.prefixed_name(ns, &name.local),
        }
    }

    fn attribute_name(&self, name: &QualifiedName) -> String {
        match name.namespace().map(namespace::canonical_uri) {
            None => name.local.clone(),
            Some(ns) => self.prefixed_name(ns, &name.local),
        }
    }

    fn prefixed_name(&self, ns: &str, local: &str) -> String {
        if ns == namespace::XML {
            return format!("xml:{local}");
        }
        match self.prefixed.get(ns) {
            Some(prefix) => format!("{prefix}:{local}"),
            None => local.to_string(),
        }
    }
}

/// Serialize an element tree, declaring only the namespaces it uses.
pub fn write(root: &XmlElement, indent: Option<usize>, declaration: bool) -> Result<Vec<u8>> {
    let prefixes = Prefixes::collect(root);
    let mut writer = match indent {
        Some(size) => Writer::new_with_indent(Vec::new(), b' ', size),
        None => Writer::new(Vec::new()),
    };

    if declaration {
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(|e| Error::xml(format!("Write error: {e}")))?;
    }

    write_element(&mut writer, root, &prefixes, true)?;

    let mut output = writer.into_inner();
    if indent.is_some() {
        output.push(b'\n');
    }
    Ok(output)
}

fn write_element(
    writer: &mut Writer<Vec<u8>>,
    element: &XmlElement,
    prefixes: &Prefixes,
    is_root: bool,
) -> Result<()> {
    let tag = prefixes.element_name(&element.name);
    let mut start = BytesStart::new(tag.as_str());

    if is_root {
        if let Some(ns) = &prefixes.default {
            start.push_attribute(("xmlns", ns.as_str()));
        }
        for (ns, prefix) in &prefixes.prefixed {
            let key = format!("xmlns:{prefix}");
            start.push_attribute((key.as_str(), ns.as_str()));
        }
    }
    for attr in &element.attributes {
        let key = prefixes.attribute_name(&attr.name);
        start.push_attribute((key.as_str(), attr.value.as_str()));
    }

    if element.children.is_empty() && element.text.is_empty() {
        writer
            .write_event(Event::Empty(start))
            .map_err(|e| Error::xml(format!("Write error: {e}")))?;
        return Ok(());
    }

    writer
        .write_event(Event::Start(start))
        .map_err(|e| Error::xml(format!("Write error: {e}")))?;
    if !element.text.is_empty() {
        writer
            .write_event(Event::Text(BytesText::new(&element.text)))
            .map_err(|e| Error::xml(format!("Write error: {e}")))?;
    }
    for child in &element.children {
        write_element(writer, child, prefixes, false)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(tag.as_str())))
        .map_err(|e| Error::xml(format!("Write error: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes_resolve_to_namespaces() {
        let xml = br#"<m:root xmlns:m="urn:ebu:metadata-schema:ebucore" xmlns:d="http://purl.org/dc/elements/1.1/">
            <d:title xml:lang="en">Hello</d:title>
        </m:root>"#;
        let root = parse(xml).unwrap();
        assert_eq!(root.name, QualifiedName::new(namespace::EBUCORE, "root"));
        let title = &root.children[0];
        assert_eq!(title.name, QualifiedName::new(namespace::DC, "title"));
        assert_eq!(title.attributes[0].name, QualifiedName::new(namespace::XML, "lang"));
        assert_eq!(title.text, "Hello");
    }

    #[test]
    fn test_default_namespace_scoping() {
        let xml = br#"<a xmlns="urn:one"><b xmlns="urn:two"><c/></b><d/></a>"#;
        let root = parse(xml).unwrap();
        assert_eq!(root.children[0].children[0].name, QualifiedName::new("urn:two", "c"));
        assert_eq!(root.children[1].name, QualifiedName::new("urn:one", "d"));
    }

    #[test]
    fn test_unknown_prefix_is_an_error() {
        assert!(matches!(parse(b"<x:root/>"), Err(Error::UnknownPrefix(p)) if p == "x"));
    }

    #[test]
    fn test_entities_and_cdata() {
        let root = parse(b"<r>a &amp; b<![CDATA[ <c> ]]></r>").unwrap();
        assert_eq!(root.text, "a & b <c> ");
    }

    #[test]
    fn test_text_keeps_surrounding_whitespace() {
        let root = parse(b"<r>\n  <a>  padded  </a>\n  <b>\t</b>\n</r>").unwrap();
        assert_eq!(root.text, "");
        assert_eq!(root.children[0].text, "  padded  ");
        assert_eq!(root.children[1].text, "\t");
    }

    #[test]
    fn test_writer_declares_only_used_namespaces() {
        let mut root = XmlElement::new(QualifiedName::new(namespace::EBUCORE, "ebuCoreMain"));
        let mut title = XmlElement::new(QualifiedName::new(namespace::DC, "title"));
        title.attributes.push(XmlAttribute {
            name: QualifiedName::new(namespace::XML, "lang"),
            value: "en".into(),
        });
        title.text = "News".into();
        root.children.push(title);

        let out = String::from_utf8(write(&root, None, false).unwrap()).unwrap();
        assert_eq!(
            out,
            r#"<ebuCoreMain xmlns="urn:ebu:metadata-schema:ebucore" xmlns:dc="http://purl.org/dc/elements/1.1/"><dc:title xml:lang="en">News</dc:title></ebuCoreMain>"#
        );
        assert!(!out.contains("xmlns:xsi"));
    }

    #[test]
    fn test_write_then_parse() {
        let mut root = XmlElement::new(QualifiedName::new("urn:custom", "doc"));
        let mut child = XmlElement::new(QualifiedName::new(namespace::XSI, "thing"));
        child.text = " x < y ".into();
        root.children.push(child);

        let bytes = write(&root, Some(2), true).unwrap();
        assert_eq!(parse(&bytes).unwrap(), root);
    }
}
