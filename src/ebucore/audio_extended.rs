//! Audio Definition Model (ITU-R BS.2076) as embedded in EBUCore's
//! `audioFormatExtended`.
//!
//! Elements reference each other by ID (`audioObjectIDRef` and friends).
//! The references are kept as plain strings; [`AudioFormatExtended`] offers
//! lookups to follow them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioFormatExtended {
    #[serde(rename = "@audioFormatExtendedID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "@audioFormatExtendedName", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "@audioFormatExtendedDefinition", default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(rename = "@audioFormatExtendedVersion", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(rename = "audioProgramme", default, skip_serializing_if = "Vec::is_empty")]
    pub programmes: Vec<AudioProgramme>,
    #[serde(rename = "audioContent", default, skip_serializing_if = "Vec::is_empty")]
    pub contents: Vec<AudioContent>,
    #[serde(rename = "audioObject", default, skip_serializing_if = "Vec::is_empty")]
    pub objects: Vec<AudioObject>,
    #[serde(rename = "audioPackFormat", default, skip_serializing_if = "Vec::is_empty")]
    pub pack_formats: Vec<AudioPackFormat>,
    #[serde(rename = "audioChannelFormat", default, skip_serializing_if = "Vec::is_empty")]
    pub channel_formats: Vec<AudioChannelFormat>,
    #[serde(rename = "audioStreamFormat", default, skip_serializing_if = "Vec::is_empty")]
    pub stream_formats: Vec<AudioStreamFormat>,
    #[serde(rename = "audioTrackFormat", default, skip_serializing_if = "Vec::is_empty")]
    pub track_formats: Vec<AudioTrackFormat>,
    #[serde(rename = "audioTrackUID", default, skip_serializing_if = "Vec::is_empty")]
    pub track_uids: Vec<AudioTrackUid>,
}

impl AudioFormatExtended {
    pub fn programme(&self, id: &str) -> Option<&AudioProgramme> {
        self.programmes.iter().find(|p| p.id == id)
    }

    pub fn content(&self, id: &str) -> Option<&AudioContent> {
        self.contents.iter().find(|c| c.id == id)
    }

    pub fn object(&self, id: &str) -> Option<&AudioObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn pack_format(&self, id: &str) -> Option<&AudioPackFormat> {
        self.pack_formats.iter().find(|p| p.id == id)
    }

    pub fn channel_format(&self, id: &str) -> Option<&AudioChannelFormat> {
        self.channel_formats.iter().find(|c| c.id == id)
    }

    /// Channel formats reachable from a pack, following nested packs.
    pub fn channels_of_pack(&self, id: &str) -> Vec<&AudioChannelFormat> {
        let mut found = Vec::new();
        let mut pending = vec![id];
        let mut seen = Vec::new();
        while let Some(pack_id) = pending.pop() {
            if seen.contains(&pack_id) {
                continue;
            }
            seen.push(pack_id);
            let Some(pack) = self.pack_format(pack_id) else {
                continue;
            };
            found.extend(
                pack.channel_format_refs
                    .iter()
                    .filter_map(|r| self.channel_format(r)),
            );
            pending.extend(pack.pack_format_refs.iter().map(String::as_str));
        }
        found
    }

    /// References that name no element of this model, as `(referrer, target)`.
    pub fn dangling_references(&self) -> Vec<(&str, &str)> {
        let mut dangling = Vec::new();
        for programme in &self.programmes {
            for target in &programme.content_refs {
                if self.content(target).is_none() {
                    dangling.push((programme.id.as_str(), target.as_str()));
                }
            }
        }
        for content in &self.contents {
            for target in &content.object_refs {
                if self.object(target).is_none() {
                    dangling.push((content.id.as_str(), target.as_str()));
                }
            }
        }
        for object in &self.objects {
            for target in &object.pack_format_refs {
                if self.pack_format(target).is_none() {
                    dangling.push((object.id.as_str(), target.as_str()));
                }
            }
            for target in &object.object_refs {
                if self.object(target).is_none() {
                    dangling.push((object.id.as_str(), target.as_str()));
                }
            }
        }
        for pack in &self.pack_formats {
            for target in &pack.channel_format_refs {
                if self.channel_format(target).is_none() {
                    dangling.push((pack.id.as_str(), target.as_str()));
                }
            }
        }
        dangling
    }
}

// ============================================================================
// PROGRAMME / CONTENT / OBJECT
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioProgramme {
    #[serde(rename = "@audioProgrammeID", default)]
    pub id: String,
    #[serde(rename = "@audioProgrammeName", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "@audioProgrammeLanguage", default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(rename = "@start", default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(rename = "@end", default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(rename = "@maxDuckingDepth", default, skip_serializing_if = "Option::is_none")]
    pub max_ducking_depth: Option<f64>,
    #[serde(rename = "audioContentIDRef", default, skip_serializing_if = "Vec::is_empty")]
    pub content_refs: Vec<String>,
    #[serde(rename = "loudnessMetadata", default, skip_serializing_if = "Vec::is_empty")]
    pub loudness: Vec<LoudnessMetadata>,
    #[serde(rename = "audioProgrammeLabel", default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioContent {
    #[serde(rename = "@audioContentID", default)]
    pub id: String,
    #[serde(rename = "@audioContentName", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "@audioContentLanguage", default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(rename = "audioObjectIDRef", default, skip_serializing_if = "Vec::is_empty")]
    pub object_refs: Vec<String>,
    #[serde(rename = "loudnessMetadata", default, skip_serializing_if = "Vec::is_empty")]
    pub loudness: Vec<LoudnessMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialogue: Option<Dialogue>,
    #[serde(rename = "audioContentLabel", default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioObject {
    #[serde(rename = "@audioObjectID", default)]
    pub id: String,
    #[serde(rename = "@audioObjectName", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "@start", default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(rename = "@duration", default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(rename = "@dialogue", default, skip_serializing_if = "Option::is_none")]
    pub dialogue: Option<u8>,
    #[serde(rename = "@importance", default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<u8>,
    #[serde(rename = "@interact", default, skip_serializing_if = "Option::is_none")]
    pub interact: Option<bool>,
    #[serde(rename = "@disableDucking", default, skip_serializing_if = "Option::is_none")]
    pub disable_ducking: Option<bool>,
    #[serde(rename = "audioPackFormatIDRef", default, skip_serializing_if = "Vec::is_empty")]
    pub pack_format_refs: Vec<String>,
    #[serde(rename = "audioObjectIDRef", default, skip_serializing_if = "Vec::is_empty")]
    pub object_refs: Vec<String>,
    #[serde(rename = "audioComplementaryObjectIDRef", default, skip_serializing_if = "Vec::is_empty")]
    pub complementary_object_refs: Vec<String>,
    #[serde(rename = "audioTrackUIDRef", default, skip_serializing_if = "Vec::is_empty")]
    pub track_uid_refs: Vec<String>,
    #[serde(rename = "audioObjectLabel", default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    #[serde(rename = "@language", default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(rename = "#value", default)]
    pub value: String,
}

/// Dialogue kind `0..=2` with its sub-kind attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialogue {
    #[serde(rename = "#value", default)]
    pub value: u8,
    #[serde(rename = "@nonDialogueContentKind", default, skip_serializing_if = "Option::is_none")]
    pub non_dialogue_content_kind: Option<u8>,
    #[serde(rename = "@dialogueContentKind", default, skip_serializing_if = "Option::is_none")]
    pub dialogue_content_kind: Option<u8>,
    #[serde(rename = "@mixedContentKind", default, skip_serializing_if = "Option::is_none")]
    pub mixed_content_kind: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoudnessMetadata {
    #[serde(rename = "@loudnessMethod", default, skip_serializing_if = "Option::is_none")]
    pub loudness_method: Option<String>,
    #[serde(rename = "@loudnessRecType", default, skip_serializing_if = "Option::is_none")]
    pub loudness_rec_type: Option<String>,
    #[serde(rename = "@loudnessCorrectionType", default, skip_serializing_if = "Option::is_none")]
    pub loudness_correction_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integrated_loudness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loudness_range: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_true_peak: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_momentary: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_short_term: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialogue_loudness: Option<f64>,
}

// ============================================================================
// PACK / CHANNEL FORMATS
// ============================================================================

/// ADM type of a pack or channel, from `typeDefinition` or its four digit
/// `typeLabel` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioBlockKind {
    DirectSpeakers,
    Matrix,
    Objects,
    Hoa,
    Binaural,
}

impl AudioBlockKind {
    pub const ALL: [AudioBlockKind; 5] = [
        Self::DirectSpeakers,
        Self::Matrix,
        Self::Objects,
        Self::Hoa,
        Self::Binaural,
    ];

    /// The `typeDefinition` spelling.
    pub fn definition(&self) -> &'static str {
        match self {
            Self::DirectSpeakers => "DirectSpeakers",
            Self::Matrix => "Matrix",
            Self::Objects => "Objects",
            Self::Hoa => "HOA",
            Self::Binaural => "Binaural",
        }
    }

    /// The `typeLabel` code.
    pub fn label(&self) -> &'static str {
        match self {
            Self::DirectSpeakers => "0001",
            Self::Matrix => "0002",
            Self::Objects => "0003",
            Self::Hoa => "0004",
            Self::Binaural => "0005",
        }
    }

    /// Resolve from a `typeDefinition`/`typeLabel` pair. The definition wins
    /// when both are present and recognised, even if they disagree.
    pub fn resolve(definition: Option<&str>, label: Option<&str>) -> Option<Self> {
        definition
            .and_then(|d| d.parse().ok())
            .or_else(|| label.and_then(|l| Self::ALL.into_iter().find(|k| k.label() == l)))
    }
}

impl fmt::Display for AudioBlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.definition())
    }
}

impl FromStr for AudioBlockKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.definition().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown ADM type definition `{s}`"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioPackFormat {
    #[serde(rename = "@audioPackFormatID", default)]
    pub id: String,
    #[serde(rename = "@audioPackFormatName", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "@typeLabel", default, skip_serializing_if = "Option::is_none")]
    pub type_label: Option<String>,
    #[serde(rename = "@typeDefinition", default, skip_serializing_if = "Option::is_none")]
    pub type_definition: Option<String>,
    #[serde(rename = "@importance", default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<u8>,
    #[serde(rename = "audioChannelFormatIDRef", default, skip_serializing_if = "Vec::is_empty")]
    pub channel_format_refs: Vec<String>,
    #[serde(rename = "audioPackFormatIDRef", default, skip_serializing_if = "Vec::is_empty")]
    pub pack_format_refs: Vec<String>,
    #[serde(rename = "absoluteDistance", default, skip_serializing_if = "Option::is_none")]
    pub absolute_distance: Option<f64>,
    #[serde(rename = "normalization", default, skip_serializing_if = "Option::is_none")]
    pub normalization: Option<String>,
    #[serde(rename = "nfcRefDist", default, skip_serializing_if = "Option::is_none")]
    pub nfc_ref_dist: Option<f64>,
    #[serde(rename = "screenRef", default, skip_serializing_if = "Option::is_none")]
    pub screen_ref: Option<bool>,
}

impl AudioPackFormat {
    pub fn kind(&self) -> Option<AudioBlockKind> {
        AudioBlockKind::resolve(self.type_definition.as_deref(), self.type_label.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frequency {
    #[serde(rename = "@typeDefinition", default, skip_serializing_if = "Option::is_none")]
    pub type_definition: Option<String>,
    #[serde(rename = "#value", default)]
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioChannelFormat {
    #[serde(rename = "@audioChannelFormatID", default)]
    pub id: String,
    #[serde(rename = "@audioChannelFormatName", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "@typeLabel", default, skip_serializing_if = "Option::is_none")]
    pub type_label: Option<String>,
    #[serde(rename = "@typeDefinition", default, skip_serializing_if = "Option::is_none")]
    pub type_definition: Option<String>,
    #[serde(rename = "audioBlockFormat", default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<AudioBlockFormat>,
    #[serde(rename = "frequency", default, skip_serializing_if = "Vec::is_empty")]
    pub frequency: Vec<Frequency>,
}

impl AudioChannelFormat {
    /// Which block shape applies to this channel's blocks.
    pub fn kind(&self) -> Option<AudioBlockKind> {
        AudioBlockKind::resolve(self.type_definition.as_deref(), self.type_label.as_deref())
    }

    /// Blocks viewed through the shape dictated by this channel's type.
    /// `None` when the type is missing or unrecognised.
    pub fn typed_blocks(&self) -> Option<Vec<AudioBlock<'_>>> {
        let kind = self.kind()?;
        Some(self.blocks.iter().map(|b| b.as_kind(kind)).collect())
    }
}

// ============================================================================
// BLOCK FORMAT
// ============================================================================

/// One coordinate of a position: `<position coordinate="azimuth">-30.0</position>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(rename = "@coordinate")]
    pub coordinate: String,
    #[serde(rename = "@bound", default, skip_serializing_if = "Option::is_none")]
    pub bound: Option<String>,
    #[serde(rename = "@screenEdgeLock", default, skip_serializing_if = "Option::is_none")]
    pub screen_edge_lock: Option<String>,
    #[serde(rename = "#value", default)]
    pub value: f64,
}

impl Position {
    pub fn new(coordinate: impl Into<String>, value: f64) -> Self {
        Self {
            coordinate: coordinate.into(),
            bound: None,
            screen_edge_lock: None,
            value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatrixCoefficient {
    #[serde(rename = "@gain", default, skip_serializing_if = "Option::is_none")]
    pub gain: Option<f64>,
    #[serde(rename = "@phase", default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<f64>,
    #[serde(rename = "@delay", default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    /// Referenced `audioChannelFormatID`.
    #[serde(rename = "#value", default)]
    pub channel_format_ref: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    #[serde(rename = "coefficient", default, skip_serializing_if = "Vec::is_empty")]
    pub coefficients: Vec<MatrixCoefficient>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelLock {
    #[serde(rename = "@maxDistance", default, skip_serializing_if = "Option::is_none")]
    pub max_distance: Option<f64>,
    #[serde(rename = "#value", default)]
    pub value: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectDivergence {
    #[serde(rename = "@azimuthRange", default, skip_serializing_if = "Option::is_none")]
    pub azimuth_range: Option<f64>,
    #[serde(rename = "@positionRange", default, skip_serializing_if = "Option::is_none")]
    pub position_range: Option<f64>,
    #[serde(rename = "#value", default)]
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JumpPosition {
    #[serde(rename = "@interpolationLength", default, skip_serializing_if = "Option::is_none")]
    pub interpolation_length: Option<f64>,
    #[serde(rename = "#value", default)]
    pub value: bool,
}

/// `audioBlockFormat`: one time slice of a channel's rendering parameters.
///
/// The wire form is the union of every ADM block shape; which fields are
/// meaningful depends on the parent channel's type. Use
/// [`AudioChannelFormat::typed_blocks`] or [`AudioBlockFormat::as_kind`] for
/// the tagged view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioBlockFormat {
    #[serde(rename = "@audioBlockFormatID", default)]
    pub id: String,
    #[serde(rename = "@rtime", default, skip_serializing_if = "Option::is_none")]
    pub rtime: Option<String>,
    #[serde(rename = "@duration", default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gain: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_locked: Option<bool>,

    // DirectSpeakers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub speaker_label: Vec<String>,

    // DirectSpeakers, Objects
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub position: Vec<Position>,

    // Matrix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix: Option<Matrix>,

    // Objects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cartesian: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diffuse: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_lock: Option<ChannelLock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_divergence: Option<ObjectDivergence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jump_position: Option<JumpPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_ref: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<u8>,

    // HOA
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nfc_ref_dist: Option<f64>,
}

/// Typed view of a block under the shape its channel dictates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AudioBlock<'a> {
    DirectSpeakers {
        speaker_labels: &'a [String],
        position: &'a [Position],
    },
    Matrix {
        coefficients: &'a [MatrixCoefficient],
    },
    Objects {
        position: &'a [Position],
        width: Option<f64>,
        height: Option<f64>,
        depth: Option<f64>,
        diffuse: Option<f64>,
    },
    Hoa {
        order: Option<u32>,
        degree: Option<i32>,
        normalization: Option<&'a str>,
    },
    Binaural,
}

impl AudioBlockFormat {
    pub fn as_kind(&self, kind: AudioBlockKind) -> AudioBlock<'_> {
        match kind {
            AudioBlockKind::DirectSpeakers => AudioBlock::DirectSpeakers {
                speaker_labels: &self.speaker_label,
                position: &self.position,
            },
            AudioBlockKind::Matrix => AudioBlock::Matrix {
                coefficients: self
                    .matrix
                    .as_ref()
                    .map(|m| m.coefficients.as_slice())
                    .unwrap_or_default(),
            },
            AudioBlockKind::Objects => AudioBlock::Objects {
                position: &self.position,
                width: self.width,
                height: self.height,
                depth: self.depth,
                diffuse: self.diffuse,
            },
            AudioBlockKind::Hoa => AudioBlock::Hoa {
                order: self.order,
                degree: self.degree,
                normalization: self.normalization.as_deref(),
            },
            AudioBlockKind::Binaural => AudioBlock::Binaural,
        }
    }

    /// Names of populated fields that do not belong to `kind`.
    pub fn stray_fields(&self, kind: AudioBlockKind) -> Vec<&'static str> {
        use AudioBlockKind as K;

        let fields: [(&str, bool, &[AudioBlockKind]); 16] = [
            ("speakerLabel", !self.speaker_label.is_empty(), &[K::DirectSpeakers]),
            ("position", !self.position.is_empty(), &[K::DirectSpeakers, K::Objects]),
            ("matrix", self.matrix.is_some(), &[K::Matrix]),
            ("cartesian", self.cartesian.is_some(), &[K::DirectSpeakers, K::Objects]),
            ("width", self.width.is_some(), &[K::Objects]),
            ("height", self.height.is_some(), &[K::Objects]),
            ("depth", self.depth.is_some(), &[K::Objects]),
            ("diffuse", self.diffuse.is_some(), &[K::Objects]),
            ("channelLock", self.channel_lock.is_some(), &[K::Objects]),
            ("objectDivergence", self.object_divergence.is_some(), &[K::Objects]),
            ("jumpPosition", self.jump_position.is_some(), &[K::Objects]),
            ("equation", self.equation.is_some(), &[K::Hoa]),
            ("order", self.order.is_some(), &[K::Hoa]),
            ("degree", self.degree.is_some(), &[K::Hoa]),
            ("normalization", self.normalization.is_some(), &[K::Hoa]),
            ("nfcRefDist", self.nfc_ref_dist.is_some(), &[K::Hoa]),
        ];
        fields
            .into_iter()
            .filter(|(_, set, kinds)| *set && !kinds.contains(&kind))
            .map(|(name, _, _)| name)
            .collect()
    }
}

// ============================================================================
// STREAMS, TRACKS, UIDS
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioStreamFormat {
    #[serde(rename = "@audioStreamFormatID", default)]
    pub id: String,
    #[serde(rename = "@audioStreamFormatName", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "@formatLabel", default, skip_serializing_if = "Option::is_none")]
    pub format_label: Option<String>,
    #[serde(rename = "@formatDefinition", default, skip_serializing_if = "Option::is_none")]
    pub format_definition: Option<String>,
    #[serde(rename = "audioChannelFormatIDRef", default, skip_serializing_if = "Option::is_none")]
    pub channel_format_ref: Option<String>,
    #[serde(rename = "audioPackFormatIDRef", default, skip_serializing_if = "Option::is_none")]
    pub pack_format_ref: Option<String>,
    #[serde(rename = "audioTrackFormatIDRef", default, skip_serializing_if = "Vec::is_empty")]
    pub track_format_refs: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioTrackFormat {
    #[serde(rename = "@audioTrackFormatID", default)]
    pub id: String,
    #[serde(rename = "@audioTrackFormatName", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "@formatLabel", default, skip_serializing_if = "Option::is_none")]
    pub format_label: Option<String>,
    #[serde(rename = "@formatDefinition", default, skip_serializing_if = "Option::is_none")]
    pub format_definition: Option<String>,
    #[serde(rename = "audioStreamFormatIDRef", default, skip_serializing_if = "Option::is_none")]
    pub stream_format_ref: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioTrackUid {
    #[serde(rename = "@UID", default)]
    pub uid: String,
    #[serde(rename = "@sampleRate", default, skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<u32>,
    #[serde(rename = "@bitDepth", default, skip_serializing_if = "Option::is_none")]
    pub bit_depth: Option<u32>,
    #[serde(rename = "audioTrackFormatIDRef", default, skip_serializing_if = "Option::is_none")]
    pub track_format_ref: Option<String>,
    #[serde(rename = "audioPackFormatIDRef", default, skip_serializing_if = "Option::is_none")]
    pub pack_format_ref: Option<String>,
    #[serde(rename = "audioChannelFormatIDRef", default, skip_serializing_if = "Option::is_none")]
    pub channel_format_ref: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn stereo() -> AudioFormatExtended {
        let channel = |id: &str, label: &str, azimuth: f64| AudioChannelFormat {
            id: id.into(),
            name: Some(label.into()),
            type_label: Some("0001".into()),
            type_definition: Some("DirectSpeakers".into()),
            blocks: vec![AudioBlockFormat {
                id: format!("AB_{}_00000001", &id[3..]),
                speaker_label: vec![label.into()],
                position: vec![Position::new("azimuth", azimuth)],
                ..AudioBlockFormat::default()
            }],
            frequency: Vec::new(),
        };
        AudioFormatExtended {
            pack_formats: vec![AudioPackFormat {
                id: "AP_00010002".into(),
                type_definition: Some("DirectSpeakers".into()),
                channel_format_refs: vec!["AC_00010001".into(), "AC_00010002".into()],
                ..AudioPackFormat::default()
            }],
            channel_formats: vec![
                channel("AC_00010001", "M+030", 30.0),
                channel("AC_00010002", "M-030", -30.0),
            ],
            ..AudioFormatExtended::default()
        }
    }

    #[rstest]
    #[case(Some("Objects"), Some("0001"), Some(AudioBlockKind::Objects))]
    #[case(None, Some("0004"), Some(AudioBlockKind::Hoa))]
    #[case(Some("hoa"), None, Some(AudioBlockKind::Hoa))]
    #[case(Some("Unknown"), Some("0002"), Some(AudioBlockKind::Matrix))]
    #[case(None, Some("9999"), None)]
    #[case(None, None, None)]
    fn test_kind_resolution(
        #[case] definition: Option<&str>,
        #[case] label: Option<&str>,
        #[case] expected: Option<AudioBlockKind>,
    ) {
        assert_eq!(AudioBlockKind::resolve(definition, label), expected);
    }

    #[test]
    fn test_typed_blocks_follow_channel_type() {
        let adm = stereo();
        let blocks = adm.channel_formats[0].typed_blocks().unwrap();
        match blocks[0] {
            AudioBlock::DirectSpeakers { speaker_labels, position } => {
                assert_eq!(speaker_labels, ["M+030"]);
                assert_eq!(position[0].value, 30.0);
            }
            other => panic!("unexpected block {other:?}"),
        }
    }

    #[test]
    fn test_stray_fields() {
        let block = AudioBlockFormat {
            speaker_label: vec!["M+000".into()],
            order: Some(1),
            ..AudioBlockFormat::default()
        };
        assert_eq!(block.stray_fields(AudioBlockKind::DirectSpeakers), ["order"]);
        assert_eq!(block.stray_fields(AudioBlockKind::Hoa), ["speakerLabel"]);
    }

    #[test]
    fn test_pack_lookup_and_dangling_refs() {
        let mut adm = stereo();
        assert_eq!(adm.channels_of_pack("AP_00010002").len(), 2);
        assert!(adm.dangling_references().is_empty());

        adm.pack_formats[0].channel_format_refs.push("AC_00010003".into());
        assert_eq!(adm.dangling_references(), [("AP_00010002", "AC_00010003")]);
    }

    #[test]
    fn test_json_keys() {
        let value = serde_json::to_value(stereo()).unwrap();
        let channel = &value["audioChannelFormat"][0];
        assert_eq!(channel["@audioChannelFormatID"], "AC_00010001");
        assert_eq!(channel["audioBlockFormat"][0]["speakerLabel"][0], "M+030");
        assert_eq!(
            channel["audioBlockFormat"][0]["position"][0],
            serde_json::json!({ "@coordinate": "azimuth", "#value": 30.0 })
        );
    }
}
