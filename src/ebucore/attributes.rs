//! Attribute groups shared across the EBUCore tree.
//!
//! Each group is embedded with `#[serde(flatten)]` and contributes its own
//! disjoint set of attribute names, so any number of groups can sit on one
//! element.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use crate::codec::lenient::{number_or_text, one_or_many};
use crate::scalar::{Date, Time};

/// `typeGroup`: classification of the element it sits on.
///
/// `typeLabel` and `typeDefinition` are both free text; where a schema
/// restricts one of them (for example a four digit ADM type code) no
/// cross-check is made.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeAttributes {
    #[serde(rename = "@typeLabel", default, skip_serializing_if = "Option::is_none")]
    pub type_label: Option<String>,
    #[serde(rename = "@typeDefinition", default, skip_serializing_if = "Option::is_none")]
    pub type_definition: Option<String>,
    #[serde(rename = "@typeLink", default, skip_serializing_if = "Option::is_none")]
    pub type_link: Option<String>,
    #[serde(rename = "@typeSource", default, skip_serializing_if = "Option::is_none")]
    pub type_source: Option<String>,
    #[serde(rename = "@typeNamespace", default, skip_serializing_if = "Option::is_none")]
    pub type_namespace: Option<String>,
    #[serde(rename = "@typeLanguage", default, skip_serializing_if = "Option::is_none")]
    pub type_language: Option<String>,
}

impl TypeAttributes {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            type_label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// `formatGroup`: the format the element's value is expressed in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormatAttributes {
    #[serde(rename = "@formatLabel", default, skip_serializing_if = "Option::is_none")]
    pub format_label: Option<String>,
    #[serde(rename = "@formatDefinition", default, skip_serializing_if = "Option::is_none")]
    pub format_definition: Option<String>,
    #[serde(rename = "@formatLink", default, skip_serializing_if = "Option::is_none")]
    pub format_link: Option<String>,
    #[serde(rename = "@formatSource", default, skip_serializing_if = "Option::is_none")]
    pub format_source: Option<String>,
    #[serde(rename = "@formatNamespace", default, skip_serializing_if = "Option::is_none")]
    pub format_namespace: Option<String>,
    #[serde(rename = "@formatLanguage", default, skip_serializing_if = "Option::is_none")]
    pub format_language: Option<String>,
}

impl FormatAttributes {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            format_label: Some(label.into()),
            ..Self::default()
        }
    }
}

/// `statusGroup`: editorial status of the element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusAttributes {
    #[serde(rename = "@statusLabel", default, skip_serializing_if = "Option::is_none")]
    pub status_label: Option<String>,
    #[serde(rename = "@statusDefinition", default, skip_serializing_if = "Option::is_none")]
    pub status_definition: Option<String>,
    #[serde(rename = "@statusLink", default, skip_serializing_if = "Option::is_none")]
    pub status_link: Option<String>,
    #[serde(rename = "@statusSource", default, skip_serializing_if = "Option::is_none")]
    pub status_source: Option<String>,
    #[serde(rename = "@statusNamespace", default, skip_serializing_if = "Option::is_none")]
    pub status_namespace: Option<String>,
    #[serde(rename = "@statusLanguage", default, skip_serializing_if = "Option::is_none")]
    pub status_language: Option<String>,
}

/// `dateGroup`: validity period of the element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateAttributes {
    /// `xs:gYear`.
    #[serde(rename = "@startYear", default, skip_serializing_if = "Option::is_none")]
    pub start_year: Option<String>,
    #[serde(rename = "@startDate", default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,
    #[serde(rename = "@startTime", default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<Time>,
    #[serde(rename = "@endYear", default, skip_serializing_if = "Option::is_none")]
    pub end_year: Option<String>,
    #[serde(rename = "@endDate", default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,
    #[serde(rename = "@endTime", default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<Time>,
    #[serde(rename = "@period", default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
}

// ============================================================================
// TECHNICAL ATTRIBUTES
// ============================================================================

/// A typed technical value with its classification:
/// `<technicalAttributeInteger typeLabel="GOP">12</technicalAttributeInteger>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + FromStr, T::Err: Display"))]
pub struct TechnicalAttribute<T> {
    #[serde(rename = "#value", deserialize_with = "number_or_text")]
    pub value: T,
    #[serde(flatten)]
    pub kind: TypeAttributes,
}

impl<T> TechnicalAttribute<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            value,
            kind: TypeAttributes::label(label),
        }
    }
}

/// `technicalAttributeRational`: an integer scaled by a fraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalAttributeRational {
    #[serde(rename = "#value", deserialize_with = "number_or_text")]
    pub value: i64,
    #[serde(rename = "@factorNumerator", default, skip_serializing_if = "Option::is_none")]
    pub factor_numerator: Option<String>,
    #[serde(rename = "@factorDenominator", default, skip_serializing_if = "Option::is_none")]
    pub factor_denominator: Option<String>,
    #[serde(flatten)]
    pub kind: TypeAttributes,
}

/// `technicalAttributes` group: open-ended typed values attached to a
/// format description, one list per value type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalAttributes {
    #[serde(rename = "technicalAttributeString", default, deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub strings: Vec<TechnicalAttribute<String>>,
    #[serde(rename = "technicalAttributeByte", default, deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub bytes: Vec<TechnicalAttribute<i8>>,
    #[serde(rename = "technicalAttributeShort", default, deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub shorts: Vec<TechnicalAttribute<i16>>,
    #[serde(rename = "technicalAttributeInteger", default, deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub integers: Vec<TechnicalAttribute<i32>>,
    #[serde(rename = "technicalAttributeLong", default, deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub longs: Vec<TechnicalAttribute<i64>>,
    #[serde(rename = "technicalAttributeUnsignedByte", default, deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub unsigned_bytes: Vec<TechnicalAttribute<u8>>,
    #[serde(rename = "technicalAttributeUnsignedShort", default, deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub unsigned_shorts: Vec<TechnicalAttribute<u16>>,
    #[serde(rename = "technicalAttributeUnsignedInteger", default, deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub unsigned_integers: Vec<TechnicalAttribute<u32>>,
    #[serde(rename = "technicalAttributeUnsignedLong", default, deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub unsigned_longs: Vec<TechnicalAttribute<u64>>,
    #[serde(rename = "technicalAttributeFloat", default, deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub floats: Vec<TechnicalAttribute<f64>>,
    #[serde(rename = "technicalAttributeBoolean", default, deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub booleans: Vec<TechnicalAttribute<bool>>,
    #[serde(rename = "technicalAttributeRational", default, deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub rationals: Vec<TechnicalAttributeRational>,
    #[serde(rename = "technicalAttributeUri", default, deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub uris: Vec<TechnicalAttribute<String>>,
}

impl TechnicalAttributes {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The string attribute with this type label.
    pub fn string(&self, label: &str) -> Option<&str> {
        self.strings
            .iter()
            .find(|attr| attr.kind.type_label.as_deref() == Some(label))
            .map(|attr| attr.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Holder {
        #[serde(rename = "@id", default)]
        id: String,
        #[serde(flatten)]
        kind: TypeAttributes,
        #[serde(flatten)]
        format: FormatAttributes,
        #[serde(flatten)]
        dates: DateAttributes,
        #[serde(flatten)]
        technical: TechnicalAttributes,
    }

    #[test]
    fn test_bundles_compose_without_collision() {
        let holder = Holder {
            id: "h1".into(),
            kind: TypeAttributes::label("main"),
            format: FormatAttributes::label("MPEG-4"),
            dates: DateAttributes {
                start_date: Date::from_ymd(2012, 9, 26),
                ..DateAttributes::default()
            },
            technical: TechnicalAttributes {
                integers: vec![TechnicalAttribute::new("GOP", 12)],
                ..TechnicalAttributes::default()
            },
        };
        let value = serde_json::to_value(&holder).unwrap();
        assert_eq!(
            value,
            json!({
                "@id": "h1",
                "@typeLabel": "main",
                "@formatLabel": "MPEG-4",
                "@startDate": "2012-09-26",
                "technicalAttributeInteger": [{ "#value": 12, "@typeLabel": "GOP" }]
            })
        );
        assert_eq!(serde_json::from_value::<Holder>(value).unwrap(), holder);
    }

    #[test]
    fn test_technical_values_accept_text_and_single_items() {
        let holder: Holder = serde_json::from_value(json!({
            "technicalAttributeUnsignedLong": { "#value": "6464125480", "@typeLabel": "size" },
            "technicalAttributeBoolean": [{ "#value": "true" }]
        }))
        .unwrap();
        assert_eq!(holder.technical.unsigned_longs[0].value, 6_464_125_480);
        assert!(holder.technical.booleans[0].value);
    }

    #[test]
    fn test_string_lookup() {
        let technical = TechnicalAttributes {
            strings: vec![TechnicalAttribute::new("profile", "Main 10".to_string())],
            ..TechnicalAttributes::default()
        };
        assert_eq!(technical.string("profile"), Some("Main 10"));
        assert_eq!(technical.string("level"), None);
        assert!(!technical.is_empty());
    }
}
