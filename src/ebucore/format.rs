//! Technical description of a media resource: container, essence streams,
//! time points, file facts.

use serde::{Deserialize, Serialize};

use super::attributes::{DateAttributes, FormatAttributes, TechnicalAttributes, TypeAttributes};
use super::audio_extended::AudioFormatExtended;
use super::Text;
use crate::scalar::Duration;

/// A value qualified by the `typeGroup`, such as `<medium typeLabel="tape"/>`
/// or `<mimeType typeLabel="video/mp4"/>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typed {
    #[serde(flatten)]
    pub kind: TypeAttributes,
    #[serde(rename = "#value", default, skip_serializing_if = "String::is_empty")]
    pub value: String,
}

impl Typed {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            kind: TypeAttributes::label(label),
            value: String::new(),
        }
    }
}

/// A value qualified by the `formatGroup`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formatted {
    #[serde(flatten)]
    pub format: FormatAttributes,
    #[serde(rename = "#value", default, skip_serializing_if = "String::is_empty")]
    pub value: String,
}

impl Formatted {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            format: FormatAttributes::label(label),
            value: String::new(),
        }
    }
}

// ============================================================================
// FORMAT
// ============================================================================

/// `formatType`: everything known about one physical or digital
/// manifestation of the asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Format {
    #[serde(rename = "@formatId", default, skip_serializing_if = "Option::is_none")]
    pub format_id: Option<String>,
    #[serde(rename = "@formatVersionId", default, skip_serializing_if = "Option::is_none")]
    pub format_version_id: Option<String>,
    #[serde(rename = "@formatName", default, skip_serializing_if = "Option::is_none")]
    pub format_name: Option<String>,
    #[serde(rename = "@formatDefinition", default, skip_serializing_if = "Option::is_none")]
    pub format_definition: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub medium: Vec<Typed>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_format: Vec<ImageFormat>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub video_format: Vec<VideoFormat>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub audio_format: Vec<AudioFormat>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub audio_format_extended: Vec<AudioFormatExtended>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub container_format: Vec<ContainerFormat>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_format: Vec<DataFormat>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub signing_format: Vec<SigningFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_format: Option<DocumentFormatInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<MediaTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<MediaTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<MediaDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub file_name: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mime_type: Vec<Typed>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locator: Vec<Locator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_bit_rate: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<Dated>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<Dated>,
    #[serde(flatten)]
    pub technical: TechnicalAttributes,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comment: Vec<Comment>,
}

impl Format {
    pub fn is_video(&self) -> bool {
        !self.video_format.is_empty()
    }

    pub fn is_audio_only(&self) -> bool {
        self.video_format.is_empty() && !self.audio_format.is_empty()
    }

    /// Total channel count over every audio stream that declares one.
    pub fn audio_channels(&self) -> u32 {
        self.audio_format.iter().filter_map(|a| a.channels).sum()
    }

    /// Languages of the data tracks, in document order.
    pub fn data_track_languages(&self) -> impl Iterator<Item = &str> {
        self.data_format
            .iter()
            .filter_map(|d| d.data_track_language.as_deref())
    }
}

/// Element made only of a `dateGroup`, such as `<dateCreated startDate="..."/>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dated {
    #[serde(flatten)]
    pub dates: DateAttributes,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "@typeLabel", default, skip_serializing_if = "Option::is_none")]
    pub type_label: Option<String>,
    #[serde(rename = "#value", default)]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locator {
    #[serde(flatten)]
    pub kind: TypeAttributes,
    #[serde(rename = "#value", default)]
    pub value: String,
}

// ============================================================================
// COMMON BUILDING BLOCKS
// ============================================================================

/// `dimensionType`: a measurement with an optional unit, pixels if absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    #[serde(rename = "#value", default)]
    pub value: f64,
    #[serde(rename = "@unit", default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(flatten)]
    pub kind: TypeAttributes,
}

impl Dimension {
    pub fn pixels(value: u32) -> Self {
        Self {
            value: f64::from(value),
            ..Self::default()
        }
    }
}

/// `rationalType`: an integer scaled by `factorNumerator/factorDenominator`,
/// both 1 when absent. `<frameRate factorNumerator="1000" factorDenominator="1001">30</frameRate>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rational {
    #[serde(rename = "#value", default)]
    pub value: u64,
    #[serde(rename = "@factorNumerator", default, skip_serializing_if = "Option::is_none")]
    pub factor_numerator: Option<u64>,
    #[serde(rename = "@factorDenominator", default, skip_serializing_if = "Option::is_none")]
    pub factor_denominator: Option<u64>,
}

impl Rational {
    pub fn whole(value: u64) -> Self {
        Self {
            value,
            factor_numerator: None,
            factor_denominator: None,
        }
    }

    /// Scaled value; `None` for a zero denominator.
    pub fn as_f64(&self) -> Option<f64> {
        let numerator = self.factor_numerator.unwrap_or(1);
        let denominator = self.factor_denominator.unwrap_or(1);
        if denominator == 0 {
            return None;
        }
        Some(self.value as f64 * numerator as f64 / denominator as f64)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectRatio {
    #[serde(flatten)]
    pub kind: TypeAttributes,
    #[serde(default)]
    pub factor_numerator: u64,
    #[serde(default)]
    pub factor_denominator: u64,
}

/// `codecType`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Codec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codec_identifier: Option<CodecIdentifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecIdentifier {
    #[serde(flatten)]
    pub kind: TypeAttributes,
    #[serde(rename = "dc:identifier", default)]
    pub identifier: String,
}

// ============================================================================
// TIME POINTS AND DURATIONS
// ============================================================================

/// `editUnitNumberType`: a count of edit units at `editRate`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditUnitNumber {
    #[serde(rename = "#value", default)]
    pub value: i64,
    #[serde(rename = "@editRate", default, skip_serializing_if = "Option::is_none")]
    pub edit_rate: Option<u64>,
    #[serde(rename = "@factorNumerator", default, skip_serializing_if = "Option::is_none")]
    pub factor_numerator: Option<u64>,
    #[serde(rename = "@factorDenominator", default, skip_serializing_if = "Option::is_none")]
    pub factor_denominator: Option<u64>,
}

/// `timeType`: a point on the media timeline.
///
/// The schema allows exactly one representation; on the wire each is its own
/// optional child. [`MediaTime::value`] exposes the first one present as a
/// [`TimeValue`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaTime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timecode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal_play_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_unit_number: Option<EditUnitNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<Formatted>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeValue {
    Timecode(String),
    NormalPlayTime(String),
    EditUnits(EditUnitNumber),
    Other(Formatted),
}

impl MediaTime {
    pub fn value(&self) -> Option<TimeValue> {
        if let Some(tc) = &self.timecode {
            return Some(TimeValue::Timecode(tc.clone()));
        }
        if let Some(npt) = &self.normal_play_time {
            return Some(TimeValue::NormalPlayTime(npt.clone()));
        }
        if let Some(units) = self.edit_unit_number {
            return Some(TimeValue::EditUnits(units));
        }
        self.time.clone().map(TimeValue::Other)
    }
}

impl From<TimeValue> for MediaTime {
    fn from(value: TimeValue) -> Self {
        let mut time = Self::default();
        match value {
            TimeValue::Timecode(tc) => time.timecode = Some(tc),
            TimeValue::NormalPlayTime(npt) => time.normal_play_time = Some(npt),
            TimeValue::EditUnits(units) => time.edit_unit_number = Some(units),
            TimeValue::Other(other) => time.time = Some(other),
        }
        time
    }
}

/// `durationType`: a length on the media timeline, one representation of
/// several. See [`MediaTime`] for how the choice is exposed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaDuration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timecode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal_play_time: Option<Duration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_unit_number: Option<EditUnitNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Formatted>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationValue {
    Timecode(String),
    NormalPlayTime(Duration),
    EditUnits(EditUnitNumber),
    Other(Formatted),
}

impl MediaDuration {
    pub fn value(&self) -> Option<DurationValue> {
        if let Some(tc) = &self.timecode {
            return Some(DurationValue::Timecode(tc.clone()));
        }
        if let Some(npt) = self.normal_play_time {
            return Some(DurationValue::NormalPlayTime(npt));
        }
        if let Some(units) = self.edit_unit_number {
            return Some(DurationValue::EditUnits(units));
        }
        self.duration.clone().map(DurationValue::Other)
    }
}

impl From<DurationValue> for MediaDuration {
    fn from(value: DurationValue) -> Self {
        let mut duration = Self::default();
        match value {
            DurationValue::Timecode(tc) => duration.timecode = Some(tc),
            DurationValue::NormalPlayTime(npt) => duration.normal_play_time = Some(npt),
            DurationValue::EditUnits(units) => duration.edit_unit_number = Some(units),
            DurationValue::Other(other) => duration.duration = Some(other),
        }
        duration
    }
}

// ============================================================================
// CONTAINER
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerFormat {
    #[serde(rename = "@containerFormatId", default, skip_serializing_if = "Option::is_none")]
    pub container_format_id: Option<String>,
    #[serde(rename = "@containerFormatVersionId", default, skip_serializing_if = "Option::is_none")]
    pub container_format_version_id: Option<String>,
    #[serde(rename = "@containerFormatName", default, skip_serializing_if = "Option::is_none")]
    pub container_format_name: Option<String>,
    #[serde(rename = "@containerFormatDefinition", default, skip_serializing_if = "Option::is_none")]
    pub container_format_definition: Option<String>,
    #[serde(flatten)]
    pub format: FormatAttributes,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub container_encoding: Vec<Formatted>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_codec: Option<Codec>,
    #[serde(flatten)]
    pub technical: TechnicalAttributes,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comment: Vec<Comment>,
}

impl ContainerFormat {
    /// Container identified by its format label, e.g. `MPEG-4`.
    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            format: FormatAttributes::label(label),
            ..Self::default()
        }
    }
}

// ============================================================================
// VIDEO
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoTrack {
    #[serde(rename = "@trackId", default, skip_serializing_if = "Option::is_none")]
    pub track_id: Option<String>,
    #[serde(rename = "@trackName", default, skip_serializing_if = "Option::is_none")]
    pub track_name: Option<String>,
    #[serde(flatten)]
    pub kind: TypeAttributes,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoFormat {
    #[serde(rename = "@videoFormatId", default, skip_serializing_if = "Option::is_none")]
    pub video_format_id: Option<String>,
    #[serde(rename = "@videoFormatVersionId", default, skip_serializing_if = "Option::is_none")]
    pub video_format_version_id: Option<String>,
    #[serde(rename = "@videoFormatName", default, skip_serializing_if = "Option::is_none")]
    pub video_format_name: Option<String>,
    #[serde(rename = "@videoFormatDefinition", default, skip_serializing_if = "Option::is_none")]
    pub video_format_definition: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_delim_x: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_delim_y: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub width: Vec<Dimension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub height: Vec<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_rate: Option<Rational>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aspect_ratio: Vec<AspectRatio>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub video_encoding: Vec<Typed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codec: Option<Codec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bit_rate: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bit_rate_max: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bit_rate_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bit_depth: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scanning_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scanning_order: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub video_track: Vec<VideoTrack>,
    #[serde(rename = "flag_3D", default, skip_serializing_if = "Option::is_none")]
    pub flag_3d: Option<bool>,
    #[serde(flatten)]
    pub technical: TechnicalAttributes,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comment: Vec<Comment>,
}

impl VideoFormat {
    /// Pixel dimensions from the first width and height entries.
    pub fn frame_size(&self) -> Option<(f64, f64)> {
        Some((self.width.first()?.value, self.height.first()?.value))
    }

    pub fn frames_per_second(&self) -> Option<f64> {
        self.frame_rate.as_ref().and_then(Rational::as_f64)
    }

    pub fn is_progressive(&self) -> bool {
        self.scanning_format.as_deref() == Some("progressive")
    }
}

// ============================================================================
// AUDIO
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioTrack {
    #[serde(rename = "@trackId", default, skip_serializing_if = "Option::is_none")]
    pub track_id: Option<String>,
    #[serde(rename = "@trackName", default, skip_serializing_if = "Option::is_none")]
    pub track_name: Option<String>,
    #[serde(rename = "@trackLanguage", default, skip_serializing_if = "Option::is_none")]
    pub track_language: Option<String>,
    #[serde(flatten)]
    pub kind: TypeAttributes,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioFormat {
    #[serde(rename = "@audioFormatId", default, skip_serializing_if = "Option::is_none")]
    pub audio_format_id: Option<String>,
    #[serde(rename = "@audioFormatVersionId", default, skip_serializing_if = "Option::is_none")]
    pub audio_format_version_id: Option<String>,
    #[serde(rename = "@audioFormatName", default, skip_serializing_if = "Option::is_none")]
    pub audio_format_name: Option<String>,
    #[serde(rename = "@audioFormatDefinition", default, skip_serializing_if = "Option::is_none")]
    pub audio_format_definition: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub audio_encoding: Vec<Typed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codec: Option<Codec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_track_configuration: Option<Typed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sampling_rate: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bit_rate: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bit_rate_max: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bit_rate_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub audio_track: Vec<AudioTrack>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<u32>,
    #[serde(flatten)]
    pub technical: TechnicalAttributes,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comment: Vec<Comment>,
}

// ============================================================================
// IMAGE, DATA, SIGNING, DOCUMENT
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFormat {
    #[serde(rename = "@imageFormatId", default, skip_serializing_if = "Option::is_none")]
    pub image_format_id: Option<String>,
    #[serde(rename = "@imageFormatVersionId", default, skip_serializing_if = "Option::is_none")]
    pub image_format_version_id: Option<String>,
    #[serde(rename = "@imageFormatName", default, skip_serializing_if = "Option::is_none")]
    pub image_format_name: Option<String>,
    #[serde(rename = "@imageFormatDefinition", default, skip_serializing_if = "Option::is_none")]
    pub image_format_definition: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_delim_x: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_delim_y: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub width: Vec<Dimension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub height: Vec<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_encoding: Vec<Typed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codec: Option<Codec>,
    #[serde(flatten)]
    pub technical: TechnicalAttributes,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comment: Vec<Comment>,
}

/// Attributes common to captioning, subtitling and signing tracks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextTrack {
    #[serde(rename = "@trackId", default, skip_serializing_if = "Option::is_none")]
    pub track_id: Option<String>,
    #[serde(rename = "@trackName", default, skip_serializing_if = "Option::is_none")]
    pub track_name: Option<String>,
    #[serde(rename = "@language", default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(rename = "@closed", default, skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
    #[serde(flatten)]
    pub kind: TypeAttributes,
    #[serde(flatten)]
    pub format: FormatAttributes,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptioningFormat {
    #[serde(rename = "@captioningFormatId", default, skip_serializing_if = "Option::is_none")]
    pub captioning_format_id: Option<String>,
    #[serde(rename = "@captioningFormatName", default, skip_serializing_if = "Option::is_none")]
    pub captioning_format_name: Option<String>,
    #[serde(rename = "@captioningSourceUri", default, skip_serializing_if = "Option::is_none")]
    pub captioning_source_uri: Option<String>,
    #[serde(flatten)]
    pub track: TextTrack,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitlingFormat {
    #[serde(rename = "@subtitlingFormatId", default, skip_serializing_if = "Option::is_none")]
    pub subtitling_format_id: Option<String>,
    #[serde(rename = "@subtitlingFormatName", default, skip_serializing_if = "Option::is_none")]
    pub subtitling_format_name: Option<String>,
    #[serde(rename = "@subtitlingSourceUri", default, skip_serializing_if = "Option::is_none")]
    pub subtitling_source_uri: Option<String>,
    #[serde(flatten)]
    pub track: TextTrack,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningFormat {
    #[serde(rename = "@signingFormatId", default, skip_serializing_if = "Option::is_none")]
    pub signing_format_id: Option<String>,
    #[serde(rename = "@signingFormatVersionId", default, skip_serializing_if = "Option::is_none")]
    pub signing_format_version_id: Option<String>,
    #[serde(rename = "@signingFormatName", default, skip_serializing_if = "Option::is_none")]
    pub signing_format_name: Option<String>,
    #[serde(rename = "@signingSourceUri", default, skip_serializing_if = "Option::is_none")]
    pub signing_source_uri: Option<String>,
    #[serde(flatten)]
    pub track: TextTrack,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AncillaryDataFormat {
    #[serde(rename = "@ancillaryDataFormatId", default, skip_serializing_if = "Option::is_none")]
    pub ancillary_data_format_id: Option<String>,
    #[serde(rename = "@ancillaryDataFormatName", default, skip_serializing_if = "Option::is_none")]
    pub ancillary_data_format_name: Option<String>,
    #[serde(rename = "DID", default, skip_serializing_if = "Option::is_none")]
    pub did: Option<u32>,
    #[serde(rename = "SDID", default, skip_serializing_if = "Option::is_none")]
    pub sdid: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub line_number: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrapping_type: Option<u32>,
}

/// `dataFormatType`: captions, subtitles, timed text and ancillary data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataFormat {
    #[serde(rename = "@dataFormatId", default, skip_serializing_if = "Option::is_none")]
    pub data_format_id: Option<String>,
    #[serde(rename = "@dataFormatVersionId", default, skip_serializing_if = "Option::is_none")]
    pub data_format_version_id: Option<String>,
    #[serde(rename = "@dataFormatName", default, skip_serializing_if = "Option::is_none")]
    pub data_format_name: Option<String>,
    #[serde(rename = "@dataFormatDefinition", default, skip_serializing_if = "Option::is_none")]
    pub data_format_definition: Option<String>,
    #[serde(rename = "@dataTrackId", default, skip_serializing_if = "Option::is_none")]
    pub data_track_id: Option<String>,
    #[serde(rename = "@dataTrackName", default, skip_serializing_if = "Option::is_none")]
    pub data_track_name: Option<String>,
    #[serde(rename = "@dataTrackLanguage", default, skip_serializing_if = "Option::is_none")]
    pub data_track_language: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub captioning_format: Vec<CaptioningFormat>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtitling_format: Vec<SubtitlingFormat>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ancillary_data_format: Vec<AncillaryDataFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codec: Option<Codec>,
    #[serde(flatten)]
    pub technical: TechnicalAttributes,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comment: Vec<Comment>,
}

impl DataFormat {
    pub fn timed_text(language: impl Into<String>) -> Self {
        Self {
            data_format_name: Some("Timed Text".to_string()),
            data_track_language: Some(language.into()),
            ..Self::default()
        }
    }
}

/// `documentFormatType`, for text and scanned documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFormatInfo {
    #[serde(rename = "@documentFormatId", default, skip_serializing_if = "Option::is_none")]
    pub document_format_id: Option<String>,
    #[serde(rename = "@documentFormatName", default, skip_serializing_if = "Option::is_none")]
    pub document_format_name: Option<String>,
    #[serde(rename = "@documentFormatDefinition", default, skip_serializing_if = "Option::is_none")]
    pub document_format_definition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub width: Vec<Dimension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub height: Vec<Dimension>,
    #[serde(flatten)]
    pub technical: TechnicalAttributes,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comment: Vec<Text>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(Rational::whole(24), Some(24.0))]
    #[case(Rational { value: 30, factor_numerator: Some(1000), factor_denominator: Some(1001) }, Some(30.0 * 1000.0 / 1001.0))]
    #[case(Rational { value: 25, factor_numerator: None, factor_denominator: Some(0) }, None)]
    fn test_rational_scaling(#[case] rate: Rational, #[case] expected: Option<f64>) {
        assert_eq!(rate.as_f64(), expected);
    }

    #[test]
    fn test_time_choice_prefers_first_present() {
        let time = MediaTime {
            timecode: Some("00:01:00:00".into()),
            edit_unit_number: Some(EditUnitNumber::default()),
            ..MediaTime::default()
        };
        assert_eq!(time.value(), Some(TimeValue::Timecode("00:01:00:00".into())));
        assert_eq!(MediaTime::default().value(), None);
    }

    #[test]
    fn test_duration_from_variant() {
        let npt: Duration = "PT12M14S".parse().unwrap();
        let duration = MediaDuration::from(DurationValue::NormalPlayTime(npt));
        assert_eq!(
            serde_json::to_value(&duration).unwrap(),
            json!({ "normalPlayTime": "PT12M14S" })
        );
        assert_eq!(duration.value(), Some(DurationValue::NormalPlayTime(npt)));
    }

    #[test]
    fn test_video_format_json_keys() {
        let video = VideoFormat {
            width: vec![Dimension::pixels(4096)],
            height: vec![Dimension::pixels(1714)],
            frame_rate: Some(Rational::whole(24)),
            bit_rate: Some(61_229_438),
            bit_depth: Some(10),
            scanning_format: Some("progressive".into()),
            ..VideoFormat::default()
        };
        let value = serde_json::to_value(&video).unwrap();
        assert_eq!(value["frameRate"], json!({ "#value": 24 }));
        assert_eq!(value["bitRate"], json!(61_229_438));
        assert_eq!(value["scanningFormat"], json!("progressive"));
        assert!(video.is_progressive());
        assert_eq!(video.frame_size(), Some((4096.0, 1714.0)));
        assert_eq!(serde_json::from_value::<VideoFormat>(value).unwrap(), video);
    }

    #[test]
    fn test_format_summaries() {
        let format = Format {
            audio_format: vec![
                AudioFormat { channels: Some(6), ..AudioFormat::default() },
                AudioFormat { channels: Some(2), ..AudioFormat::default() },
            ],
            data_format: vec![DataFormat::timed_text("en"), DataFormat::timed_text("de")],
            ..Format::default()
        };
        assert!(format.is_audio_only());
        assert_eq!(format.audio_channels(), 8);
        assert_eq!(format.data_track_languages().collect::<Vec<_>>(), ["en", "de"]);
    }
}
