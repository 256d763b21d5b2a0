//! Opencast media packages.
//!
//! A media package bundles the tracks, metadata catalogs, attachments and
//! publications of one recording. Elements point at each other with
//! [`MediaPackageReference`] strings.

mod mediapackage;
pub mod reference;

pub use mediapackage::{
    Attachment, Attachments, AudioStream, Catalog, Creators, Contributors, Device, ElementRef,
    Encoder, Media, MediaPackage, Metadata, Publication, Publications, ScanType, Subjects,
    SubtitleStream, Tags, Track, VideoStream,
};
pub use reference::{MediaPackageReference, ReferenceError, ReferenceType};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

// ============================================================================
// FLAVOR
// ============================================================================

/// `type/subtype` classification of a media-package element, for example
/// `presenter/source` or `dublincore/episode`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Flavor {
    kind: String,
    subtype: String,
}

impl Flavor {
    pub fn new(kind: impl Into<String>, subtype: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            subtype: subtype.into(),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// Match against another flavor where `*` in either part matches anything.
    pub fn matches(&self, pattern: &Flavor) -> bool {
        let part = |mine: &str, theirs: &str| mine == "*" || theirs == "*" || mine == theirs;
        part(&self.kind, &pattern.kind) && part(&self.subtype, &pattern.subtype)
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.subtype)
    }
}

impl FromStr for Flavor {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((kind, subtype)) if !kind.is_empty() && !subtype.is_empty() && !subtype.contains('/') => {
                Ok(Self::new(kind.trim(), subtype.trim()))
            }
            _ => Err(FormatError::Flavor(s.to_string())),
        }
    }
}

impl TryFrom<String> for Flavor {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Flavor> for String {
    fn from(flavor: Flavor) -> Self {
        flavor.to_string()
    }
}

// ============================================================================
// RESOLUTION
// ============================================================================

/// Frame size written as `WIDTHxHEIGHT`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Resolution {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || FormatError::Resolution(s.to_string());
        let (width, height) = s.split_once('x').ok_or_else(malformed)?;
        let width = crate::scalar::parse_digits(width).ok_or_else(malformed)?;
        let height = crate::scalar::parse_digits(height).ok_or_else(malformed)?;
        Ok(Self { width, height })
    }
}

impl TryFrom<String> for Resolution {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Resolution> for String {
    fn from(resolution: Resolution) -> Self {
        resolution.to_string()
    }
}

// ============================================================================
// CHECKSUM
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChecksumType {
    #[default]
    #[serde(rename = "md5")]
    Md5,
    #[serde(rename = "sha-1")]
    Sha1,
    #[serde(rename = "sha-256")]
    Sha256,
}

/// Digest of an element's payload: `<checksum type="md5">hex</checksum>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Checksum {
    #[serde(rename = "@type", default)]
    pub kind: ChecksumType,
    #[serde(rename = "#value", default)]
    pub value: String,
}

impl Checksum {
    pub fn md5(value: impl Into<String>) -> Self {
        Self {
            kind: ChecksumType::Md5,
            value: value.into(),
        }
    }

    /// Whether the value is a hex digest of the length its type implies.
    pub fn is_well_formed(&self) -> bool {
        let expected = match self.kind {
            ChecksumType::Md5 => 32,
            ChecksumType::Sha1 => 40,
            ChecksumType::Sha256 => 64,
        };
        self.value.len() == expected && self.value.bytes().all(|b| b.is_ascii_hexdigit())
    }
}
