//! serde `Deserializer` over an [`XmlElement`] tree.
//!
//! An element is presented as a map whose keys follow the scheme in
//! [`crate::codec::namespace`]. Repeated children are grouped under one key
//! so they can fill a `Vec`, and attribute or text values are parsed
//! according to the type the target field asks for.

use indexmap::IndexMap;
use serde::de::{
    self, DeserializeSeed, Deserializer as _, IntoDeserializer, MapAccess, SeqAccess, Visitor,
};
use std::fmt;

use super::dom::XmlElement;
use crate::codec::namespace::{TEXT_KEY, attribute_key, child_key};

/// Deserialization failure with the key path that led to it.
#[derive(Debug)]
pub struct DeError {
    path: Vec<String>,
    message: String,
}

impl DeError {
    fn within(mut self, key: &str) -> Self {
        self.path.insert(0, key.to_string());
        self
    }
}

impl fmt::Display for DeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.path.join("/"), self.message)
        }
    }
}

impl std::error::Error for DeError {}

impl de::Error for DeError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Self {
            path: Vec::new(),
            message: msg.to_string(),
        }
    }
}

pub fn from_element<T: de::DeserializeOwned>(element: &XmlElement) -> Result<T, DeError> {
    T::deserialize(ElementDeserializer { element })
}

// ============================================================================
// ELEMENT
// ============================================================================

struct ElementDeserializer<'a> {
    element: &'a XmlElement,
}

impl<'a> ElementDeserializer<'a> {
    fn text(&self) -> TextDeserializer<'a> {
        TextDeserializer {
            text: &self.element.text,
        }
    }
}

macro_rules! text_scalars {
    ($($method:ident)*) => {$(
        fn $method<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
            self.text().$method(visitor)
        }
    )*};
}

impl<'de, 'a> de::Deserializer<'de> for ElementDeserializer<'a> {
    type Error = DeError;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        if self.element.is_leaf() {
            visitor.visit_str(&self.element.text)
        } else {
            visitor.visit_map(ElementAccess::new(self.element))
        }
    }

    text_scalars! {
        deserialize_bool deserialize_i8 deserialize_i16 deserialize_i32 deserialize_i64
        deserialize_u8 deserialize_u16 deserialize_u32 deserialize_u64
        deserialize_f32 deserialize_f64 deserialize_char deserialize_str deserialize_string
        deserialize_bytes deserialize_byte_buf deserialize_identifier
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        visitor.visit_some(self)
    }

    fn deserialize_unit<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, DeError> {
        visitor.visit_unit()
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, DeError> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        visitor.visit_seq(ElementSeq {
            elements: vec![self.element].into_iter(),
        })
    }

    fn deserialize_tuple<V: Visitor<'de>>(self, _len: usize, visitor: V) -> Result<V::Value, DeError> {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value, DeError> {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        visitor.visit_map(ElementAccess::new(self.element))
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, DeError> {
        self.deserialize_map(visitor)
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, DeError> {
        if !self.element.is_leaf() {
            return Err(de::Error::custom(format!(
                "expected text for {name}, found element content"
            )));
        }
        self.text().deserialize_enum(name, variants, visitor)
    }

    fn deserialize_ignored_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        visitor.visit_unit()
    }
}

// ============================================================================
// CHILD GROUP
// ============================================================================

/// All children sharing one key. Fills a `Vec` as a sequence; any other
/// target reads the first occurrence.
struct ChildrenDeserializer<'a> {
    elements: Vec<&'a XmlElement>,
}

impl<'a> ChildrenDeserializer<'a> {
    fn first(&self) -> Result<ElementDeserializer<'a>, DeError> {
        self.elements
            .first()
            .map(|element| ElementDeserializer { element })
            .ok_or_else(|| de::Error::custom("empty child group"))
    }
}

macro_rules! first_child {
    ($($method:ident)*) => {$(
        fn $method<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
            self.first()?.$method(visitor)
        }
    )*};
}

impl<'de, 'a> de::Deserializer<'de> for ChildrenDeserializer<'a> {
    type Error = DeError;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        if self.elements.len() == 1 {
            self.first()?.deserialize_any(visitor)
        } else {
            self.deserialize_seq(visitor)
        }
    }

    first_child! {
        deserialize_bool deserialize_i8 deserialize_i16 deserialize_i32 deserialize_i64
        deserialize_u8 deserialize_u16 deserialize_u32 deserialize_u64
        deserialize_f32 deserialize_f64 deserialize_char deserialize_str deserialize_string
        deserialize_bytes deserialize_byte_buf deserialize_identifier deserialize_unit
        deserialize_map
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        visitor.visit_some(self)
    }

    fn deserialize_unit_struct<V: Visitor<'de>>(
        self,
        name: &'static str,
        visitor: V,
    ) -> Result<V::Value, DeError> {
        self.first()?.deserialize_unit_struct(name, visitor)
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, DeError> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        visitor.visit_seq(ElementSeq {
            elements: self.elements.into_iter(),
        })
    }

    fn deserialize_tuple<V: Visitor<'de>>(self, _len: usize, visitor: V) -> Result<V::Value, DeError> {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value, DeError> {
        self.deserialize_seq(visitor)
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, DeError> {
        self.first()?.deserialize_struct(name, fields, visitor)
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, DeError> {
        self.first()?.deserialize_enum(name, variants, visitor)
    }

    fn deserialize_ignored_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        visitor.visit_unit()
    }
}

struct ElementSeq<'a> {
    elements: std::vec::IntoIter<&'a XmlElement>,
}

impl<'de, 'a> SeqAccess<'de> for ElementSeq<'a> {
    type Error = DeError;

    fn next_element_seed<T: DeserializeSeed<'de>>(
        &mut self,
        seed: T,
    ) -> Result<Option<T::Value>, DeError> {
        match self.elements.next() {
            Some(element) => seed.deserialize(ElementDeserializer { element }).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.elements.len())
    }
}

// ============================================================================
// ELEMENT AS MAP
// ============================================================================

enum Entry<'a> {
    Text(&'a str),
    Children(Vec<&'a XmlElement>),
}

struct ElementAccess<'a> {
    entries: std::vec::IntoIter<(String, Entry<'a>)>,
    pending: Option<(String, Entry<'a>)>,
}

impl<'a> ElementAccess<'a> {
    fn new(element: &'a XmlElement) -> Self {
        let mut entries = Vec::with_capacity(element.attributes.len() + element.children.len() + 1);
        for attr in &element.attributes {
            entries.push((attribute_key(&attr.name), Entry::Text(attr.value.as_str())));
        }
        if !element.text.is_empty() {
            entries.push((TEXT_KEY.to_string(), Entry::Text(element.text.as_str())));
        }

        let parent = element.name.namespace();
        let mut groups: IndexMap<String, Vec<&'a XmlElement>> = IndexMap::new();
        for child in &element.children {
            groups.entry(child_key(parent, &child.name)).or_default().push(child);
        }
        entries.extend(groups.into_iter().map(|(key, group)| (key, Entry::Children(group))));

        Self {
            entries: entries.into_iter(),
            pending: None,
        }
    }
}

impl<'de, 'a> MapAccess<'de> for ElementAccess<'a> {
    type Error = DeError;

    fn next_key_seed<K: DeserializeSeed<'de>>(
        &mut self,
        seed: K,
    ) -> Result<Option<K::Value>, DeError> {
        let Some((key, entry)) = self.entries.next() else {
            return Ok(None);
        };
        let key_de: de::value::StrDeserializer<'_, DeError> = key.as_str().into_deserializer();
        let value = seed.deserialize(key_de)?;
        self.pending = Some((key, entry));
        Ok(Some(value))
    }

    fn next_value_seed<V: DeserializeSeed<'de>>(&mut self, seed: V) -> Result<V::Value, DeError> {
        let (key, entry) = self
            .pending
            .take()
            .ok_or_else(|| de::Error::custom("value requested before its key"))?;
        let result = match entry {
            Entry::Text(text) => seed.deserialize(TextDeserializer { text }),
            Entry::Children(elements) => seed.deserialize(ChildrenDeserializer { elements }),
        };
        result.map_err(|e| e.within(&key))
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.entries.len())
    }
}

// ============================================================================
// TEXT (attribute values and element content)
// ============================================================================

struct TextDeserializer<'a> {
    text: &'a str,
}

impl TextDeserializer<'_> {
    fn parse<T: std::str::FromStr>(&self, expected: &str) -> Result<T, DeError>
    where
        T::Err: fmt::Display,
    {
        self.text
            .trim()
            .parse()
            .map_err(|e| de::Error::custom(format!("invalid {expected} `{}`: {e}", self.text)))
    }
}

macro_rules! text_numbers {
    ($($method:ident => $visit:ident: $ty:ty),* $(,)?) => {$(
        fn $method<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
            visitor.$visit(self.parse::<$ty>(stringify!($ty))?)
        }
    )*};
}

impl<'de, 'a> de::Deserializer<'de> for TextDeserializer<'a> {
    type Error = DeError;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        visitor.visit_str(self.text)
    }

    fn deserialize_bool<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        match self.text.trim() {
            "true" | "1" => visitor.visit_bool(true),
            "false" | "0" => visitor.visit_bool(false),
            other => Err(de::Error::custom(format!("invalid boolean `{other}`"))),
        }
    }

    text_numbers! {
        deserialize_i8 => visit_i8: i8,
        deserialize_i16 => visit_i16: i16,
        deserialize_i32 => visit_i32: i32,
        deserialize_i64 => visit_i64: i64,
        deserialize_u8 => visit_u8: u8,
        deserialize_u16 => visit_u16: u16,
        deserialize_u32 => visit_u32: u32,
        deserialize_u64 => visit_u64: u64,
        deserialize_f32 => visit_f32: f32,
        deserialize_f64 => visit_f64: f64,
        deserialize_char => visit_char: char,
    }

    fn deserialize_str<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        visitor.visit_str(self.text)
    }

    fn deserialize_string<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        visitor.visit_str(self.text)
    }

    fn deserialize_identifier<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        visitor.visit_str(self.text)
    }

    fn deserialize_bytes<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        visitor.visit_bytes(self.text.as_bytes())
    }

    fn deserialize_byte_buf<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        visitor.visit_bytes(self.text.as_bytes())
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        visitor.visit_some(self)
    }

    fn deserialize_unit<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, DeError> {
        visitor.visit_unit()
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, DeError> {
        visitor.visit_newtype_struct(self)
    }

    /// `xs:list` values: whitespace separated tokens.
    fn deserialize_seq<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        visitor.visit_seq(TokenSeq {
            tokens: self.text.split_whitespace(),
        })
    }

    fn deserialize_tuple<V: Visitor<'de>>(self, _len: usize, visitor: V) -> Result<V::Value, DeError> {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value, DeError> {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value, DeError> {
        Err(de::Error::custom(format!(
            "expected an element, found text `{}`",
            self.text
        )))
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, DeError> {
        self.deserialize_map(visitor)
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, DeError> {
        let variant: de::value::StrDeserializer<'_, DeError> = self.text.trim().into_deserializer();
        visitor.visit_enum(variant)
    }

    fn deserialize_ignored_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        visitor.visit_unit()
    }
}

struct TokenSeq<'a> {
    tokens: std::str::SplitWhitespace<'a>,
}

impl<'de, 'a> SeqAccess<'de> for TokenSeq<'a> {
    type Error = DeError;

    fn next_element_seed<T: DeserializeSeed<'de>>(
        &mut self,
        seed: T,
    ) -> Result<Option<T::Value>, DeError> {
        match self.tokens.next() {
            Some(text) => seed.deserialize(TextDeserializer { text }).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::namespace::{self, QualifiedName};
    use crate::codec::xml::dom;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Literal {
        #[serde(rename = "@xml:lang", default)]
        lang: Option<String>,
        #[serde(rename = "#value", default)]
        value: String,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Container {
        #[serde(rename = "@version")]
        version: String,
        #[serde(rename = "dc:title", default)]
        titles: Vec<Literal>,
        #[serde(default)]
        width: Option<u32>,
        #[serde(rename = "@flags", default)]
        flags: Vec<String>,
    }

    #[test]
    fn test_struct_from_element() {
        let root = dom::parse(
            br#"<c xmlns="urn:test" xmlns:d="http://purl.org/dc/elements/1.1/" version="1.0" flags="a b">
                <d:title>One</d:title>
                <d:title xml:lang="de">Eins</d:title>
                <width> 640 </width>
            </c>"#,
        )
        .unwrap();
        let container: Container = from_element(&root).unwrap();
        assert_eq!(container.version, "1.0");
        assert_eq!(container.titles.len(), 2);
        assert_eq!(container.titles[1].lang.as_deref(), Some("de"));
        assert_eq!(container.width, Some(640));
        assert_eq!(container.flags, vec!["a", "b"]);
    }

    #[test]
    fn test_error_carries_path() {
        let mut root = XmlElement::new(QualifiedName::new(namespace::EBUCORE, "c"));
        root.attributes.push(dom::XmlAttribute {
            name: QualifiedName::unqualified("version"),
            value: "1".into(),
        });
        let mut width = XmlElement::new(QualifiedName::new(namespace::EBUCORE, "width"));
        width.text = "wide".into();
        root.children.push(width);

        let err = from_element::<Container>(&root).unwrap_err();
        assert!(err.to_string().starts_with("width: invalid u32 `wide`"), "{err}");
    }
}
