//! DCMI Type Vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::codec::namespace;
use crate::error::FormatError;

/// High-level nature of a resource, written as the term name
/// (`MovingImage`) or its full URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DcmiType {
    Collection,
    Dataset,
    Event,
    Image,
    InteractiveResource,
    MovingImage,
    PhysicalObject,
    Service,
    Software,
    Sound,
    StillImage,
    Text,
}

impl DcmiType {
    pub const ALL: [Self; 12] = [
        Self::Collection,
        Self::Dataset,
        Self::Event,
        Self::Image,
        Self::InteractiveResource,
        Self::MovingImage,
        Self::PhysicalObject,
        Self::Service,
        Self::Software,
        Self::Sound,
        Self::StillImage,
        Self::Text,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Collection => "Collection",
            Self::Dataset => "Dataset",
            Self::Event => "Event",
            Self::Image => "Image",
            Self::InteractiveResource => "InteractiveResource",
            Self::MovingImage => "MovingImage",
            Self::PhysicalObject => "PhysicalObject",
            Self::Service => "Service",
            Self::Software => "Software",
            Self::Sound => "Sound",
            Self::StillImage => "StillImage",
            Self::Text => "Text",
        }
    }

    pub fn uri(self) -> String {
        format!("{}{}", namespace::DCMITYPE, self.name())
    }

    /// `StillImage` and `MovingImage` are refinements of `Image`.
    pub fn is_image(self) -> bool {
        matches!(self, Self::Image | Self::StillImage | Self::MovingImage)
    }
}

impl fmt::Display for DcmiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DcmiType {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_prefix(namespace::DCMITYPE).unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| FormatError::DcmiType(s.to_string()))
    }
}

impl TryFrom<String> for DcmiType {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DcmiType> for String {
    fn from(kind: DcmiType) -> Self {
        kind.name().to_string()
    }
}
