//! DCMI syntax and vocabulary encoding schemes.

use std::fmt;

/// A scheme named by `xsi:type` on a [`SimpleLiteral`](super::SimpleLiteral).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodingScheme {
    // Vocabulary encoding schemes
    DcmiType,
    Ddc,
    Imt,
    Lcc,
    Lcsh,
    Mesh,
    Nlm,
    Tgn,
    Udc,
    // Syntax encoding schemes
    Box,
    Iso3166,
    Iso639_2,
    Iso639_3,
    Period,
    Point,
    Rfc1766,
    Rfc3066,
    Rfc4646,
    Rfc5646,
    Uri,
    W3cdtf,
}

impl EncodingScheme {
    pub const ALL: [Self; 21] = [
        Self::DcmiType,
        Self::Ddc,
        Self::Imt,
        Self::Lcc,
        Self::Lcsh,
        Self::Mesh,
        Self::Nlm,
        Self::Tgn,
        Self::Udc,
        Self::Box,
        Self::Iso3166,
        Self::Iso639_2,
        Self::Iso639_3,
        Self::Period,
        Self::Point,
        Self::Rfc1766,
        Self::Rfc3066,
        Self::Rfc4646,
        Self::Rfc5646,
        Self::Uri,
        Self::W3cdtf,
    ];

    /// Local name as published by DCMI.
    pub fn name(self) -> &'static str {
        match self {
            Self::DcmiType => "DCMIType",
            Self::Ddc => "DDC",
            Self::Imt => "IMT",
            Self::Lcc => "LCC",
            Self::Lcsh => "LCSH",
            Self::Mesh => "MESH",
            Self::Nlm => "NLM",
            Self::Tgn => "TGN",
            Self::Udc => "UDC",
            Self::Box => "Box",
            Self::Iso3166 => "ISO3166",
            Self::Iso639_2 => "ISO639-2",
            Self::Iso639_3 => "ISO639-3",
            Self::Period => "Period",
            Self::Point => "Point",
            Self::Rfc1766 => "RFC1766",
            Self::Rfc3066 => "RFC3066",
            Self::Rfc4646 => "RFC4646",
            Self::Rfc5646 => "RFC5646",
            Self::Uri => "URI",
            Self::W3cdtf => "W3CDTF",
        }
    }

    pub fn is_syntax_scheme(self) -> bool {
        !matches!(
            self,
            Self::DcmiType
                | Self::Ddc
                | Self::Imt
                | Self::Lcc
                | Self::Lcsh
                | Self::Mesh
                | Self::Nlm
                | Self::Tgn
                | Self::Udc
        )
    }

    /// `xsi:type` value with the canonical `dcterms` prefix.
    pub fn xsi_type(self) -> &'static str {
        match self {
            Self::DcmiType => "dcterms:DCMIType",
            Self::Ddc => "dcterms:DDC",
            Self::Imt => "dcterms:IMT",
            Self::Lcc => "dcterms:LCC",
            Self::Lcsh => "dcterms:LCSH",
            Self::Mesh => "dcterms:MESH",
            Self::Nlm => "dcterms:NLM",
            Self::Tgn => "dcterms:TGN",
            Self::Udc => "dcterms:UDC",
            Self::Box => "dcterms:Box",
            Self::Iso3166 => "dcterms:ISO3166",
            Self::Iso639_2 => "dcterms:ISO639-2",
            Self::Iso639_3 => "dcterms:ISO639-3",
            Self::Period => "dcterms:Period",
            Self::Point => "dcterms:Point",
            Self::Rfc1766 => "dcterms:RFC1766",
            Self::Rfc3066 => "dcterms:RFC3066",
            Self::Rfc4646 => "dcterms:RFC4646",
            Self::Rfc5646 => "dcterms:RFC5646",
            Self::Uri => "dcterms:URI",
            Self::W3cdtf => "dcterms:W3CDTF",
        }
    }

    /// Look up an `xsi:type` value. The prefix is whatever the producer
    /// bound, so only the local part is compared.
    pub fn from_xsi_type(value: &str) -> Option<Self> {
        let local = value.rsplit_once(':').map_or(value, |(_, local)| local);
        Self::ALL.into_iter().find(|scheme| scheme.name() == local)
    }
}

impl fmt::Display for EncodingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.xsi_type())
    }
}
