//! EBU Core Metadata Set v1.10 (`urn:ebu:metadata-schema:ebucore`).
//!
//! ```text
//! ebuCoreMain
//! ├── coreMetadata           descriptive  (title, creator, ..., part)
//! │   └── format             format       (container, video, audio, data)
//! │       └── audioFormatExtended          audio_extended (ADM)
//! └── metadataProvider       descriptive::Entity
//! ```
//!
//! Attribute groups shared by many elements live in [`attributes`] and are
//! flattened into their hosts.

pub mod attributes;
pub mod audio_extended;
pub mod descriptive;
pub mod format;

pub use attributes::{
    DateAttributes, FormatAttributes, StatusAttributes, TechnicalAttribute,
    TechnicalAttributeRational, TechnicalAttributes, TypeAttributes,
};
pub use audio_extended::{AudioBlock, AudioBlockFormat, AudioBlockKind, AudioChannelFormat, AudioFormatExtended};
pub use descriptive::{CoreMetadata, Entity, Identifier, Part, Relation, Text, Title};
pub use format::{
    AudioFormat, ContainerFormat, DataFormat, Dimension, Format, MediaDuration, MediaTime, Rational,
    VideoFormat,
};

use serde::{Deserialize, Serialize};

use crate::codec::XmlRoot;
use crate::codec::namespace;
use crate::scalar::{Date, Time};

/// Schema version written by [`Main::new`].
pub const SCHEMA_VERSION: &str = "1.10";

/// `ebuCoreMain`: the document root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Main {
    #[serde(rename = "@schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "@dateLastModified", default, skip_serializing_if = "Option::is_none")]
    pub date_last_modified: Option<Date>,
    #[serde(rename = "@timeLastModified", default, skip_serializing_if = "Option::is_none")]
    pub time_last_modified: Option<Time>,
    #[serde(rename = "@documentId", default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(rename = "@xml:lang", default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    #[serde(default)]
    pub core_metadata: CoreMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_provider: Option<Entity>,
}

impl Main {
    pub fn new(core_metadata: CoreMetadata) -> Self {
        Self {
            version: Some(SCHEMA_VERSION.to_string()),
            core_metadata,
            ..Self::default()
        }
    }

    /// Every format description, including those nested in parts.
    pub fn formats(&self) -> Vec<&Format> {
        fn collect<'a>(parts: &'a [Part], out: &mut Vec<&'a Format>) {
            for part in parts {
                out.extend(&part.format);
                collect(&part.part, out);
            }
        }

        let mut out: Vec<&Format> = self.core_metadata.format.iter().collect();
        collect(&self.core_metadata.part, &mut out);
        out
    }
}

impl XmlRoot for Main {
    const NAMESPACE: &'static str = namespace::EBUCORE;
    const LOCAL_NAME: &'static str = "ebuCoreMain";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_version() {
        let main = Main::new(CoreMetadata::default());
        assert_eq!(main.version.as_deref(), Some("1.10"));
        assert_eq!(
            serde_json::to_value(&main).unwrap(),
            serde_json::json!({ "@version": "1.10", "coreMetadata": {} })
        );
    }

    #[test]
    fn test_formats_include_parts() {
        let mut core = CoreMetadata {
            format: vec![Format::default()],
            ..CoreMetadata::default()
        };
        core.part.push(Part {
            format: vec![Format {
                file_size: Some(1),
                ..Format::default()
            }],
            ..Part::default()
        });
        let main = Main::new(core);
        let formats = main.formats();
        assert_eq!(formats.len(), 2);
        assert_eq!(formats[1].file_size, Some(1));
    }

    #[test]
    fn test_root_name() {
        let root = Main::root_name();
        assert!(root.matches(namespace::EBUCORE, "ebuCoreMain"));
    }
}
