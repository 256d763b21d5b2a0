//! # mediameta
//!
//! Data-model types for media-metadata standards, bound to their XML and
//! JSON encodings.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! dc, ebucore, opencast, nbmp  → schema types (serde derives)
//!   ↓
//! codec                        → XML/JSON encodings, namespace registry
//!   ↓
//! scalar                       → Date, Time, Duration, Uri, Url
//!   ↓
//! error                        → Error, Result
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use mediameta::codec::{DocumentFormat, Json, Xml};
//! use mediameta::opencast::MediaPackage;
//!
//! let package: MediaPackage = Xml::default().decode(&bytes)?;
//! let json = Json::pretty().encode(&package)?;
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Error types shared by every module
pub mod error;

/// Typed scalar values: dates, times, durations, URIs
pub mod scalar;

/// Encodings: XML and JSON behind one trait, namespace registry
pub mod codec;

/// Dublin Core elements, DCMI terms, type vocabulary, encoding schemes
pub mod dc;

/// EBU Core Metadata Set v1.10
pub mod ebucore;

/// Opencast media package and element references
pub mod opencast;

/// MPEG NBMP (ISO/IEC 23090-8) descriptors
pub mod nbmp;

pub use codec::{Document, DocumentFormat, Encoding, Json, Xml, XmlDocument, XmlRoot};
pub use error::{Error, FormatError, Result};
pub use scalar::{Date, Duration, ScalarError, Time, Uri, Url};
