//! References between the elements of a media package.
//!
//! A reference is carried as one attribute string:
//!
//! ```text
//! ref      = "self" / type ":" id
//! full     = ref *( ";" key "=" value )
//! ```
//!
//! `self` stands for the enclosing media package and is the same as
//! `mediapackage:self`; it is always written in the short form.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The sentinel identifier naming the enclosing media package.
pub const SELF: &str = "self";

/// Errors raised while reading or writing a reference string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    /// The leading segment is neither `self` nor `type:id`.
    #[error("malformed reference `{0}`, expected `self` or `type:id`")]
    Malformed(String),

    /// A property segment does not hold exactly one `=`.
    #[error("malformed reference property `{0}`, expected `key=value`")]
    MalformedProperty(String),

    /// The reference has no identifier and cannot be written.
    #[error("reference of type `{0}` has an empty identifier")]
    EmptyIdentifier(String),

    /// A part of the reference holds a separator and would not read back.
    #[error("reference {part} `{text}` contains reserved character `{character}`")]
    ReservedCharacter {
        part: &'static str,
        text: String,
        character: char,
    },
}

/// The element kinds a reference may point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceType {
    MediaPackage,
    Track,
    Catalog,
    Attachment,
    Series,
}

impl ReferenceType {
    pub const ALL: [Self; 5] = [
        Self::MediaPackage,
        Self::Track,
        Self::Catalog,
        Self::Attachment,
        Self::Series,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MediaPackage => "mediapackage",
            Self::Track => "track",
            Self::Catalog => "catalog",
            Self::Attachment => "attachment",
            Self::Series => "series",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed pointer from one media-package element to another.
///
/// The type is kept as a string so that references of kinds this crate does
/// not know survive a round trip; [`reference_type`](Self::reference_type)
/// maps it onto the known kinds. Properties compare as a map, ignoring
/// their order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaPackageReference {
    kind: String,
    identifier: String,
    properties: IndexMap<String, String>,
}

impl MediaPackageReference {
    pub fn new(kind: ReferenceType, identifier: impl Into<String>) -> Self {
        Self::with_kind(kind.as_str(), identifier)
    }

    /// A reference of a kind outside [`ReferenceType`].
    pub fn with_kind(kind: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            identifier: identifier.into(),
            properties: IndexMap::new(),
        }
    }

    /// Reference to the enclosing media package.
    pub fn to_self() -> Self {
        Self::new(ReferenceType::MediaPackage, SELF)
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn reference_type(&self) -> Option<ReferenceType> {
        ReferenceType::from_name(&self.kind)
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn is_self(&self) -> bool {
        self.kind == ReferenceType::MediaPackage.as_str() && self.identifier == SELF
    }

    pub fn properties(&self) -> &IndexMap<String, String> {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.properties.insert(key.into(), value.into())
    }

    pub fn remove_property(&mut self, key: &str) -> Option<String> {
        self.properties.shift_remove(key)
    }

    /// Parse the attribute text.
    ///
    /// The head must hold exactly one `:`; `track:a:b` is malformed rather
    /// than an id of `a:b`.
    ///
    /// Empty text yields a media-package reference with an empty
    /// identifier, which [`encode`](Self::encode) refuses. When a property
    /// key repeats, the last value wins.
    pub fn parse(text: &str) -> Result<Self, ReferenceError> {
        let mut segments = text.split(';');
        let head = segments.next().unwrap_or_default();

        let mut reference = if head == SELF {
            Self::to_self()
        } else if head.is_empty() && text.is_empty() {
            Self::new(ReferenceType::MediaPackage, "")
        } else {
            match head.split_once(':') {
                Some((kind, id)) if !kind.is_empty() && !id.is_empty() && !id.contains(':') => {
                    Self::with_kind(kind, id)
                }
                _ => return Err(ReferenceError::Malformed(text.to_string())),
            }
        };

        for segment in segments {
            let (key, value) = match segment.split_once('=') {
                Some((key, value)) if !value.contains('=') => (key, value),
                _ => return Err(ReferenceError::MalformedProperty(segment.to_string())),
            };
            if let Some(previous) = reference.set_property(key, value) {
                tracing::warn!(
                    key,
                    previous = %previous,
                    value,
                    "duplicate reference property; keeping the last value"
                );
            }
        }
        Ok(reference)
    }

    /// Write the attribute text.
    ///
    /// Refuses references without an identifier and parts holding a
    /// separator: `:` or `;` in the type or id, `;` or `=` in a property.
    pub fn encode(&self) -> Result<String, ReferenceError> {
        if self.identifier.is_empty() {
            return Err(ReferenceError::EmptyIdentifier(self.kind.clone()));
        }
        if !self.is_self() {
            if self.kind.is_empty() {
                return Err(ReferenceError::Malformed(self.to_string()));
            }
            reject_reserved("type", &self.kind, &[':', ';'])?;
            reject_reserved("identifier", &self.identifier, &[':', ';'])?;
        }
        for (key, value) in &self.properties {
            reject_reserved("property key", key, &[';', '='])?;
            reject_reserved("property value", value, &[';', '='])?;
        }
        Ok(self.to_string())
    }
}

fn reject_reserved(part: &'static str, text: &str, reserved: &[char]) -> Result<(), ReferenceError> {
    match text.chars().find(|c| reserved.contains(c)) {
        Some(character) => Err(ReferenceError::ReservedCharacter {
            part,
            text: text.to_string(),
            character,
        }),
        None => Ok(()),
    }
}

impl Default for MediaPackageReference {
    fn default() -> Self {
        Self::to_self()
    }
}

impl fmt::Display for MediaPackageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_self() {
            f.write_str(SELF)?;
        } else {
            write!(f, "{}:{}", self.kind, self.identifier)?;
        }
        for (key, value) in &self.properties {
            write!(f, ";{key}={value}")?;
        }
        Ok(())
    }
}

impl FromStr for MediaPackageReference {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for MediaPackageReference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let text = self.encode().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }
}

impl<'de> Deserialize<'de> for MediaPackageReference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(de::Error::custom)
    }
}
