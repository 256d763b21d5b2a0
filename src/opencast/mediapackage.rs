//! The `<mediapackage>` document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::reference::{MediaPackageReference, ReferenceType};
use super::{Checksum, Flavor, Resolution};
use crate::codec::XmlRoot;
use crate::codec::namespace;
use crate::scalar::Url;

/// Root of an Opencast media package.
///
/// ```xml
/// <mediapackage xmlns="http://mediapackage.opencastproject.org"
///               id="10e8a7e0-..." start="2021-09-01T10:00:00Z" duration="1000">
///   <title>Lecture</title>
///   <media>
///     <track id="track-1" type="presenter/source">...</track>
///   </media>
/// </mediapackage>
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaPackage {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@start", default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    /// Milliseconds.
    #[serde(rename = "@duration", default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(rename = "seriestitle", default, skip_serializing_if = "Option::is_none")]
    pub series_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creators: Option<Creators>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributors: Option<Contributors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Subjects>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Attachments>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publications: Option<Publications>,
}

impl XmlRoot for MediaPackage {
    const NAMESPACE: &'static str = namespace::MEDIAPACKAGE;
    const LOCAL_NAME: &'static str = "mediapackage";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creators {
    #[serde(rename = "creator", default)]
    pub creators: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributors {
    #[serde(rename = "contributor", default)]
    pub contributors: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subjects {
    #[serde(rename = "subject", default)]
    pub subjects: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Media {
    #[serde(rename = "track", default)]
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(rename = "catalog", default)]
    pub catalogs: Vec<Catalog>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachments {
    #[serde(rename = "attachment", default)]
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Publications {
    #[serde(rename = "publication", default)]
    pub publications: Vec<Publication>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tags {
    #[serde(rename = "tag", default)]
    pub tags: Vec<String>,
}

// ============================================================================
// ELEMENTS
// ============================================================================

/// A media track with its stream descriptions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub flavor: Option<Flavor>,
    #[serde(rename = "@ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<MediaPackageReference>,
    #[serde(rename = "@transport", default, skip_serializing_if = "Option::is_none")]
    pub transport: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "mimetype", default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    #[serde(default)]
    pub url: Url,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<Checksum>,
    /// Milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    #[serde(rename = "audio", default, skip_serializing_if = "Vec::is_empty")]
    pub audio_streams: Vec<AudioStream>,
    #[serde(rename = "video", default, skip_serializing_if = "Vec::is_empty")]
    pub video_streams: Vec<VideoStream>,
    #[serde(rename = "subtitle", default, skip_serializing_if = "Vec::is_empty")]
    pub subtitle_streams: Vec<SubtitleStream>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<bool>,
}

impl Track {
    /// A new track with a generated id.
    pub fn new(flavor: Flavor, url: impl Into<Url>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            flavor: Some(flavor),
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn has_audio(&self) -> bool {
        !self.audio_streams.is_empty()
    }

    pub fn has_video(&self) -> bool {
        !self.video_streams.is_empty()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.as_ref().is_some_and(|tags| tags.tags.iter().any(|t| t == tag))
    }
}

/// A metadata catalog such as a Dublin Core episode document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub flavor: Option<Flavor>,
    #[serde(rename = "@ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<MediaPackageReference>,
    #[serde(rename = "mimetype", default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    #[serde(default)]
    pub url: Url,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<Checksum>,
    /// Bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl Catalog {
    pub fn new(flavor: Flavor, url: impl Into<Url>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            flavor: Some(flavor),
            url: url.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub flavor: Option<Flavor>,
    #[serde(rename = "@ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<MediaPackageReference>,
    #[serde(rename = "mimetype", default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    #[serde(default)]
    pub url: Url,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<Checksum>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl Attachment {
    pub fn new(flavor: Flavor, url: impl Into<Url>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            flavor: Some(flavor),
            url: url.into(),
            ..Self::default()
        }
    }
}

/// Distribution of part of the package to a channel, such as an engage
/// player or a download server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@channel")]
    pub channel: String,
    #[serde(rename = "mimetype", default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub url: Url,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Attachments>,
}

// ============================================================================
// STREAMS
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "@vendor", default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encoder {
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioStream {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoder: Option<Encoder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framecount: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub samplingrate: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peakleveldb: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rmsleveldb: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rmspeakdb: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanType {
    /// `progressive` or `interlaced`.
    #[serde(rename = "@type")]
    pub kind: String,
    /// Field order of interlaced video: `top` or `bottom`.
    #[serde(rename = "@order", default, skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoStream {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoder: Option<Encoder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framecount: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framerate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<Resolution>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scantype: Option<ScanType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleStream {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoder: Option<Encoder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

// ============================================================================
// LOOKUP
// ============================================================================

/// An element of a package found by id or reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementRef<'a> {
    MediaPackage(&'a MediaPackage),
    Track(&'a Track),
    Catalog(&'a Catalog),
    Attachment(&'a Attachment),
}

impl MediaPackage {
    /// An empty package with a generated id.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            ..Self::default()
        }
    }

    pub fn tracks(&self) -> &[Track] {
        self.media.as_ref().map(|m| m.tracks.as_slice()).unwrap_or_default()
    }

    pub fn catalogs(&self) -> &[Catalog] {
        self.metadata.as_ref().map(|m| m.catalogs.as_slice()).unwrap_or_default()
    }

    pub fn attachment_list(&self) -> &[Attachment] {
        self.attachments.as_ref().map(|a| a.attachments.as_slice()).unwrap_or_default()
    }

    pub fn publication_list(&self) -> &[Publication] {
        self.publications.as_ref().map(|p| p.publications.as_slice()).unwrap_or_default()
    }

    pub fn add_track(&mut self, track: Track) {
        self.media.get_or_insert_with(Media::default).tracks.push(track);
    }

    pub fn add_catalog(&mut self, catalog: Catalog) {
        self.metadata.get_or_insert_with(Metadata::default).catalogs.push(catalog);
    }

    pub fn add_attachment(&mut self, attachment: Attachment) {
        self.attachments
            .get_or_insert_with(Attachments::default)
            .attachments
            .push(attachment);
    }

    pub fn add_publication(&mut self, publication: Publication) {
        self.publications
            .get_or_insert_with(Publications::default)
            .publications
            .push(publication);
    }

    /// Tracks whose flavor matches `pattern` (wildcards allowed).
    pub fn tracks_by_flavor<'a>(&'a self, pattern: &'a Flavor) -> impl Iterator<Item = &'a Track> + 'a {
        self.tracks()
            .iter()
            .filter(move |track| track.flavor.as_ref().is_some_and(|f| f.matches(pattern)))
    }

    /// Any top-level element with this id.
    pub fn element(&self, id: &str) -> Option<ElementRef<'_>> {
        if let Some(track) = self.tracks().iter().find(|t| t.id == id) {
            return Some(ElementRef::Track(track));
        }
        if let Some(catalog) = self.catalogs().iter().find(|c| c.id == id) {
            return Some(ElementRef::Catalog(catalog));
        }
        self.attachment_list()
            .iter()
            .find(|a| a.id == id)
            .map(ElementRef::Attachment)
    }

    /// Follow a reference to the element it names.
    ///
    /// Series references point outside the package and never resolve here;
    /// neither do references of unknown kinds.
    pub fn resolve(&self, reference: &MediaPackageReference) -> Option<ElementRef<'_>> {
        let id = reference.identifier();
        match reference.reference_type()? {
            ReferenceType::MediaPackage if reference.is_self() || id == self.id => {
                Some(ElementRef::MediaPackage(self))
            }
            ReferenceType::MediaPackage | ReferenceType::Series => None,
            ReferenceType::Track => self.tracks().iter().find(|t| t.id == id).map(ElementRef::Track),
            ReferenceType::Catalog => self.catalogs().iter().find(|c| c.id == id).map(ElementRef::Catalog),
            ReferenceType::Attachment => self
                .attachment_list()
                .iter()
                .find(|a| a.id == id)
                .map(ElementRef::Attachment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package() -> MediaPackage {
        let mut package = MediaPackage::new();
        let mut track = Track::new(Flavor::new("presenter", "source"), "http://example.org/t.mp4");
        track.id = "track-1".into();
        package.add_track(track);

        let mut catalog = Catalog::new(Flavor::new("dublincore", "episode"), "http://example.org/e.xml");
        catalog.id = "catalog-1".into();
        catalog.reference = Some(MediaPackageReference::new(ReferenceType::Track, "track-1"));
        package.add_catalog(catalog);
        package
    }

    #[test]
    fn test_new_ids_are_unique() {
        assert_ne!(MediaPackage::new().id, MediaPackage::new().id);
        let flavor = Flavor::new("a", "b");
        assert_ne!(Track::new(flavor.clone(), "u").id, Track::new(flavor, "u").id);
    }

    #[test]
    fn test_resolve_references() {
        let package = package();
        let catalog = &package.catalogs()[0];
        let target = catalog.reference.as_ref().and_then(|r| package.resolve(r));
        assert!(matches!(target, Some(ElementRef::Track(t)) if t.id == "track-1"));

        assert!(matches!(
            package.resolve(&MediaPackageReference::to_self()),
            Some(ElementRef::MediaPackage(_))
        ));
        assert!(package.resolve(&MediaPackageReference::new(ReferenceType::Track, "missing")).is_none());
        assert!(package.resolve(&MediaPackageReference::new(ReferenceType::Series, "s1")).is_none());
    }

    #[test]
    fn test_element_lookup_and_flavor_filter() {
        let package = package();
        assert!(matches!(package.element("catalog-1"), Some(ElementRef::Catalog(_))));
        assert!(package.element("nope").is_none());

        let pattern: Flavor = "*/source".parse().unwrap();
        assert_eq!(package.tracks_by_flavor(&pattern).count(), 1);
    }

    #[test]
    fn test_empty_containers_are_omitted_in_json() {
        let package = MediaPackage {
            id: "p1".into(),
            ..MediaPackage::default()
        };
        assert_eq!(serde_json::to_value(&package).unwrap(), serde_json::json!({ "@id": "p1" }));
    }
}
