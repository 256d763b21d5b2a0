//! Opencast media packages and the references between their elements.
#![cfg(feature = "xml")]

use mediameta::codec::{DocumentFormat, Json, Xml};
use mediameta::opencast::{
    Catalog, ChecksumType, ElementRef, Flavor, MediaPackage, MediaPackageReference,
    ReferenceError, ReferenceType, Resolution,
};
use rstest::rstest;

const LECTURE: &str = include_str!("fixtures/mediapackage/lecture.xml");
const TRACK_ID: &str = "b2bc6d47-4790-4209-af0e-e035fceed403";

fn lecture() -> MediaPackage {
    Xml::default().decode(LECTURE.as_bytes()).unwrap()
}

// ============================================================================
// REFERENCE GRAMMAR
// ============================================================================

#[test]
fn test_track_reference_in_attribute() {
    let package = lecture();
    let catalog = &package.catalogs()[0];
    let reference = catalog.reference.as_ref().unwrap();

    assert_eq!(reference.reference_type(), Some(ReferenceType::Track));
    assert_eq!(reference.identifier(), TRACK_ID);
    assert_eq!(reference.property("example-for"), Some("tests"));
    assert_eq!(
        reference.encode().unwrap(),
        format!("track:{TRACK_ID};example-for=tests")
    );
}

#[test]
fn test_self_reference_in_attribute() {
    let package = lecture();
    let reference = package.tracks()[0].reference.as_ref().unwrap();

    assert!(reference.is_self());
    assert_eq!(reference.kind(), "mediapackage");
    assert_eq!(reference.identifier(), "self");
    assert_eq!(reference.property("example-for"), Some("tests"));
    assert_eq!(reference.encode().unwrap(), "self;example-for=tests");
}

#[rstest]
#[case("track:")]
#[case(":abc")]
#[case("track")]
#[case("track:a:b")]
fn test_malformed_references(#[case] text: &str) {
    assert_eq!(
        MediaPackageReference::parse(text),
        Err(ReferenceError::Malformed(text.to_string()))
    );
}

#[rstest]
#[case("track:abc;")]
#[case("self;novalue")]
#[case("track:t1;a=b=c")]
fn test_malformed_properties(#[case] text: &str) {
    assert!(matches!(
        MediaPackageReference::parse(text),
        Err(ReferenceError::MalformedProperty(_))
    ));
}

#[test]
fn test_empty_reference_cannot_be_written() {
    let reference = MediaPackageReference::parse("").unwrap();
    assert_eq!(reference.kind(), "mediapackage");
    assert_eq!(reference.identifier(), "");
    assert!(reference.properties().is_empty());
    assert_eq!(
        reference.encode(),
        Err(ReferenceError::EmptyIdentifier("mediapackage".into()))
    );
}

#[test]
fn test_duplicate_property_keeps_last_value() {
    let reference = MediaPackageReference::parse("catalog:c1;lang=en;lang=de").unwrap();
    assert_eq!(reference.property("lang"), Some("de"));
    assert_eq!(reference.properties().len(), 1);
}

#[test]
fn test_property_order_does_not_affect_equality() {
    let a = MediaPackageReference::parse("track:t1;a=1;b=2").unwrap();
    let b = MediaPackageReference::parse("track:t1;b=2;a=1").unwrap();
    assert_eq!(a, b);
}

// ============================================================================
// DOCUMENT
// ============================================================================

#[test]
fn test_package_attributes_and_metadata() {
    let package = lecture();
    assert_eq!(package.id, "10e4a4b3-a0c4-4d1e-9b1f-3f5c7c1c2d11");
    assert_eq!(package.start.unwrap().to_rfc3339(), "2024-05-01T10:00:00+00:00");
    assert_eq!(package.duration, Some(5_400_000));
    assert_eq!(package.title.as_deref(), Some("Lecture 1: Introduction"));
    assert_eq!(package.series_title.as_deref(), Some("Computer Science 101"));
    assert_eq!(
        package.creators.as_ref().unwrap().creators,
        ["Jane Doe", "John Roe"]
    );
    assert_eq!(package.subjects.as_ref().unwrap().subjects, ["Algorithms"]);
}

#[test]
fn test_track_streams() {
    let package = lecture();
    let track = &package.tracks()[0];

    assert_eq!(track.flavor, Some(Flavor::new("presenter", "source")));
    assert_eq!(track.mime_type.as_deref(), Some("video/mp4"));
    assert!(track.has_tag("engage-download"));
    assert_eq!(track.url.as_str(), "https://example.org/files/presenter.mp4");
    assert_eq!(track.duration, Some(5_400_000));
    assert_eq!(track.live, Some(false));

    let checksum = track.checksum.as_ref().unwrap();
    assert_eq!(checksum.kind, ChecksumType::Md5);
    assert!(checksum.is_well_formed());

    let audio = &track.audio_streams[0];
    assert_eq!(audio.encoder.as_ref().unwrap().kind.as_deref(), Some("AAC"));
    assert_eq!(audio.channels, Some(2));
    assert_eq!(audio.samplingrate, Some(48_000));
    assert_eq!(audio.bitrate, Some(128_000.0));

    let video = &track.video_streams[0];
    assert_eq!(video.resolution, Some(Resolution::new(1920, 1080)));
    assert_eq!(video.framerate, Some(25.0));
    assert_eq!(video.scantype.as_ref().unwrap().kind, "progressive");
}

#[test]
fn test_references_resolve_within_package() {
    let package = lecture();

    let catalog_ref = package.catalogs()[0].reference.as_ref().unwrap();
    assert!(matches!(package.resolve(catalog_ref), Some(ElementRef::Track(t)) if t.id == TRACK_ID));

    let attachment_ref = package.attachment_list()[0].reference.as_ref().unwrap();
    assert!(matches!(
        package.resolve(attachment_ref),
        Some(ElementRef::Catalog(c)) if c.id == "catalog-1"
    ));

    let self_ref = package.tracks()[0].reference.as_ref().unwrap();
    assert!(matches!(package.resolve(self_ref), Some(ElementRef::MediaPackage(_))));

    let series = MediaPackageReference::new(ReferenceType::Series, "series-42");
    assert_eq!(package.resolve(&series), None);
}

#[test]
fn test_flavor_wildcards() {
    let package = lecture();
    let any_source: Flavor = "*/source".parse().unwrap();
    assert_eq!(package.tracks_by_flavor(&any_source).count(), 1);
    let slides: Flavor = "presentation/*".parse().unwrap();
    assert_eq!(package.tracks_by_flavor(&slides).count(), 0);
}

// ============================================================================
// ROUND TRIPS
// ============================================================================

#[test]
fn test_xml_round_trip() {
    let package = lecture();
    let xml = Xml::default();
    let bytes = xml.encode(&package).unwrap();
    let again: MediaPackage = xml.decode(&bytes).unwrap();
    assert_eq!(again, package);

    let text = String::from_utf8(bytes).unwrap();
    assert!(text.contains(r#"<mediapackage xmlns="http://mediapackage.opencastproject.org""#), "{text}");
    assert!(text.contains(r#"ref="self;example-for=tests""#), "{text}");
    assert!(text.contains("<resolution>1920x1080</resolution>"), "{text}");
    assert!(text.contains(r#"<checksum type="md5">"#), "{text}");
}

#[test]
fn test_json_round_trip() {
    let package = lecture();
    let json = Json::default();
    let bytes = json.encode(&package).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["@id"], package.id.as_str());
    assert_eq!(value["media"]["track"][0]["@type"], "presenter/source");
    assert_eq!(value["media"]["track"][0]["@ref"], "self;example-for=tests");
    assert_eq!(value["media"]["track"][0]["video"][0]["resolution"], "1920x1080");

    let back: MediaPackage = json.decode(&bytes).unwrap();
    assert_eq!(back, package);
}

#[test]
fn test_writing_empty_reference_fails() {
    let mut package = lecture();
    package.add_catalog(Catalog {
        id: "broken".into(),
        reference: Some(MediaPackageReference::parse("").unwrap()),
        ..Catalog::default()
    });

    let err = Json::default().encode(&package).unwrap_err();
    assert!(err.to_string().contains("empty identifier"), "{err}");
}
