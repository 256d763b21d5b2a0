//! Dublin Core documents through the XML and JSON encodings.
#![cfg(feature = "xml")]

use mediameta::codec::namespace::{self, QualifiedName};
use mediameta::codec::{DocumentFormat, Json, Xml, XmlDocument};
use mediameta::dc::{DcmiType, Elements, EncodingScheme, SimpleLiteral, Terms};

const S1_METADATA: &str = include_str!("fixtures/dublincore/s1_metadata.xml");
const OAI_DC_RECORD: &str = include_str!("fixtures/dublincore/oai_dc_record.xml");
const EPISODE: &str = include_str!("fixtures/dublincore/episode.xml");

fn values(literals: &[SimpleLiteral]) -> Vec<&str> {
    literals.iter().map(|l| l.value.as_str()).collect()
}

// ============================================================================
// ELEMENTS
// ============================================================================

#[test]
fn test_elements_inside_foreign_container() {
    let document: XmlDocument<Elements> = Xml::default()
        .decode_document(S1_METADATA.as_bytes())
        .unwrap();

    assert_eq!(
        document.name,
        QualifiedName::new("http://example.org/myapp/", "metadata")
    );
    assert_eq!(document.name.to_string(), "{http://example.org/myapp/}metadata");

    let dc = &document.value;
    assert_eq!(values(&dc.title), ["TestTitle", "TestTitleDe", "TestTitleNl"]);
    assert_eq!(dc.title[0].lang, None);
    assert_eq!(dc.title[1].lang.as_deref(), Some("de"));
    assert_eq!(dc.title[2].lang.as_deref(), Some("nl"));
    assert!(dc.title.iter().all(|t| t.xsi_type.is_none()));

    let expected = [
        ("dc:creator", "TestCreator"),
        ("dc:subject", "TestSubject"),
        ("dc:description", "TestDescription"),
        ("dc:publisher", "TestPublisher"),
        ("dc:contributor", "TestContributor"),
        ("dc:date", "TestDate"),
        ("dc:type", "TestType"),
        ("dc:format", "TestFormat"),
        ("dc:identifier", "TestIdentifier"),
        ("dc:source", "TestSource"),
        ("dc:language", "TestLanguage"),
        ("dc:relation", "TestRelation"),
        ("dc:coverage", "TestCoverage"),
        ("dc:rights", "TestRights"),
    ];
    for (key, value) in expected {
        let literals = dc.get(key).unwrap();
        assert_eq!(values(literals), [value], "{key}");
    }
    assert_eq!(dc.len(), 17);
}

#[test]
fn test_elements_xml_round_trip_keeps_container() {
    let xml = Xml::default();
    let document: XmlDocument<Elements> = xml.decode_document(S1_METADATA.as_bytes()).unwrap();
    let bytes = xml.encode_document(&document).unwrap();
    let again: XmlDocument<Elements> = xml.decode_document(&bytes).unwrap();
    assert_eq!(again, document);

    let text = String::from_utf8(bytes).unwrap();
    assert!(text.contains(r#"xmlns="http://example.org/myapp/""#), "{text}");
    assert!(text.contains(r#"<dc:title xml:lang="de">TestTitleDe</dc:title>"#), "{text}");
}

#[test]
fn test_unused_namespaces_are_not_declared() {
    let xml = Xml::default();
    let document: XmlDocument<Elements> = xml.decode_document(S1_METADATA.as_bytes()).unwrap();
    let text = String::from_utf8(xml.encode_document(&document).unwrap()).unwrap();

    // The input declares xsi but never uses it.
    assert!(!text.contains(namespace::XSI), "{text}");
    assert!(text.contains(namespace::DC), "{text}");
}

#[test]
fn test_prefix_choice_does_not_matter() {
    let renamed = S1_METADATA
        .replace("xmlns:dc=", "xmlns:elements=")
        .replace("<dc:", "<elements:")
        .replace("</dc:", "</elements:");
    let xml = Xml::default();
    let original: XmlDocument<Elements> = xml.decode_document(S1_METADATA.as_bytes()).unwrap();
    let prefixed: XmlDocument<Elements> = xml.decode_document(renamed.as_bytes()).unwrap();
    assert_eq!(prefixed.value, original.value);
}

#[test]
fn test_oai_dc_record_with_schemes() {
    let dc: Elements = Xml::default().decode(OAI_DC_RECORD.as_bytes()).unwrap();

    assert_eq!(values(&dc.creator), ["Ian Hubert"]);
    assert_eq!(dc.title[0].lang.as_deref(), Some("en"));
    assert_eq!(dc.date[0].scheme(), Some(EncodingScheme::W3cdtf));
    assert_eq!(dc.kind[0].scheme(), Some(EncodingScheme::DcmiType));
    assert_eq!(dc.kind[0].value.parse::<DcmiType>().unwrap(), DcmiType::MovingImage);

    let encoded = mediameta::codec::xml::to_vec(&dc).unwrap();
    let text = String::from_utf8(encoded).unwrap();
    assert!(text.contains(r#"<dc xmlns="http://www.openarchives.org/OAI/2.0/oai_dc/""#), "{text}");
    assert!(text.contains(r#"xsi:type="dcterms:W3CDTF""#), "{text}");
}

#[test]
fn test_elements_json_form() {
    let dc: Elements = Xml::default().decode(OAI_DC_RECORD.as_bytes()).unwrap();
    let bytes = Json::default().encode(&dc).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(value["dc:title"][0]["#value"], "Tears of Steel");
    assert_eq!(value["dc:title"][0]["@xml:lang"], "en");
    assert_eq!(value["dc:date"][0]["@xsi:type"], "dcterms:W3CDTF");

    let back: Elements = Json::default().decode(&bytes).unwrap();
    assert_eq!(back, dc);
}

// ============================================================================
// TERMS
// ============================================================================

#[test]
fn test_opencast_episode_catalog() {
    let terms: Terms = Xml::default().decode(EPISODE.as_bytes()).unwrap();

    assert_eq!(terms.first("dcterms:title"), Some("Lecture 1: Introduction"));
    assert_eq!(terms.first("dcterms:isPartOf"), Some("series-42"));
    assert_eq!(terms.first("dcterms:license"), Some("CC-BY"));
    assert_eq!(terms.created[0].scheme(), Some(EncodingScheme::W3cdtf));
    assert_eq!(terms.temporal[0].scheme(), Some(EncodingScheme::Period));
    assert!(terms.temporal[0].value.starts_with("start=2024-05-01T10:00:00Z;"));
    assert!(terms.r#abstract.is_empty());
}

#[test]
fn test_terms_round_trip_through_both_encodings() {
    let xml = Xml::default();
    let terms: Terms = xml.decode(EPISODE.as_bytes()).unwrap();

    let again: Terms = xml.decode(&xml.encode(&terms).unwrap()).unwrap();
    assert_eq!(again, terms);

    let json = Json::pretty();
    let back: Terms = json.decode(&json.encode(&terms).unwrap()).unwrap();
    assert_eq!(back, terms);
}

#[test]
fn test_container_in_dc_namespace() {
    let input = r#"<dc:record xmlns:dc="http://purl.org/dc/elements/1.1/"><dc:title>X</dc:title><dc:type>Text</dc:type></dc:record>"#;
    let xml = Xml::default();
    let document: XmlDocument<Elements> = xml.decode_document(input.as_bytes()).unwrap();
    assert_eq!(document.name, QualifiedName::new(namespace::DC, "record"));
    assert_eq!(values(&document.value.title), ["X"]);
    assert_eq!(values(&document.value.kind), ["Text"]);

    let again: XmlDocument<Elements> = xml
        .decode_document(&xml.encode_document(&document).unwrap())
        .unwrap();
    assert_eq!(again, document);
}

#[test]
fn test_terms_in_dcterms_namespace() {
    let input = r#"<dcterms:record xmlns:dcterms="http://purl.org/dc/terms/"><dcterms:abstract>Summary</dcterms:abstract></dcterms:record>"#;
    let terms: Terms = Xml::default().decode(input.as_bytes()).unwrap();
    assert_eq!(values(&terms.r#abstract), ["Summary"]);
}

#[test]
fn test_padded_literal_survives_xml() {
    let dc = Elements {
        title: vec![SimpleLiteral::new("  padded  ")],
        description: vec![SimpleLiteral::new("line one\nline two\n").with_lang("en")],
        ..Elements::default()
    };
    for xml in [Xml::default(), Xml::compact()] {
        let back: Elements = xml.decode(&xml.encode(&dc).unwrap()).unwrap();
        assert_eq!(back, dc);
    }
}
