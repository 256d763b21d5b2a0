//! Every fixture survives decode → encode → decode in its own encoding and,
//! for XML documents, through JSON as well.
#![cfg(feature = "xml")]

use std::fmt::Debug;
use std::path::{Path, PathBuf};

use mediameta::codec::{self, DocumentFormat, Json};
use mediameta::dc::{Elements, Terms};
use mediameta::ebucore::Main;
use mediameta::nbmp::{Function, Workflow};
use mediameta::opencast::MediaPackage;
use mediameta::{Document, Encoding};
use serde::Serialize;
use serde::de::DeserializeOwned;
use walkdir::WalkDir;

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn fixtures() -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(fixtures_dir())
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    files
}

fn document_round_trip<T>(path: &Path) -> Result<(), String>
where
    T: Document + PartialEq + Debug,
{
    let encoding = codec::detect_encoding(path).ok_or("no encoding for extension")?;
    let input = std::fs::read(path).map_err(|e| e.to_string())?;

    let first: T = encoding.decode(&input).map_err(|e| format!("decode: {e}"))?;
    let bytes = encoding.encode(&first).map_err(|e| format!("encode: {e}"))?;
    let second: T = encoding.decode(&bytes).map_err(|e| format!("re-decode: {e}"))?;
    if second != first {
        return Err(format!("{} round trip changed the document", encoding.name()));
    }

    if let Encoding::Xml(_) = encoding {
        let json = Json::default();
        let bytes = json.encode(&first).map_err(|e| format!("JSON encode: {e}"))?;
        let back: T = json.decode(&bytes).map_err(|e| format!("JSON decode: {e}"))?;
        if back != first {
            return Err("JSON round trip changed the document".into());
        }
    }
    Ok(())
}

fn json_round_trip<T>(path: &Path) -> Result<(), String>
where
    T: Serialize + DeserializeOwned + PartialEq + Debug,
{
    let input = std::fs::read(path).map_err(|e| e.to_string())?;
    let first: T = codec::json::from_slice(&input).map_err(|e| format!("decode: {e}"))?;
    let bytes = codec::json::to_vec(&first).map_err(|e| format!("encode: {e}"))?;
    let second: T = codec::json::from_slice(&bytes).map_err(|e| format!("re-decode: {e}"))?;
    if second != first {
        return Err("JSON round trip changed the document".into());
    }
    Ok(())
}

fn round_trip(path: &Path) -> Result<(), String> {
    let group = path
        .parent()
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();

    match (group, stem) {
        ("dublincore", "episode") => document_round_trip::<Terms>(path),
        ("dublincore", _) => document_round_trip::<Elements>(path),
        ("ebucore", _) => document_round_trip::<Main>(path),
        ("mediapackage", _) => document_round_trip::<MediaPackage>(path),
        ("nbmp", stem) if stem.starts_with("workflow") => json_round_trip::<Workflow>(path),
        ("nbmp", _) => json_round_trip::<Function>(path),
        _ => Err(format!("no document type for fixture group `{group}`")),
    }
}

#[test]
fn test_all_fixtures_round_trip() {
    let files = fixtures();
    assert!(files.len() >= 7, "expected fixtures under {:?}", fixtures_dir());

    let mut failures = Vec::new();
    for path in &files {
        if let Err(message) = round_trip(path) {
            failures.push(format!("{}: {message}", path.display()));
        }
    }

    println!("round-tripped {}/{} fixtures", files.len() - failures.len(), files.len());
    assert!(failures.is_empty(), "round trip failures:\n{}", failures.join("\n"));
}
