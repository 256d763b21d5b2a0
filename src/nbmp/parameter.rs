//! NBMP configuration parameters.
//!
//! The shape of a parameter's `values` depends on its sibling `datatype`,
//! so decoding happens in two passes: the object is first staged with its
//! values left as raw JSON ([`RawParameter`]), then every value is decoded
//! into the descriptor type the datatype selects.
//!
//! ```json
//! {
//!   "name": "bitrate", "id": 1, "datatype": "integer",
//!   "values": [
//!     { "name": "low", "id": 1,
//!       "restrictions": { "min-value": 100, "max-value": 1000, "increment": 50 } }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while decoding a parameter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    /// The object itself could not be staged.
    #[error("malformed parameter: {0}")]
    Malformed(String),

    /// `datatype` is not one of the five known tags.
    #[error("unknown parameter datatype `{0}`")]
    UnknownDatatype(String),

    /// An array parameter listed values; arrays are described by `schema`.
    #[error("parameter of datatype `array` must not carry values")]
    InvalidValuesForArray,

    /// One entry of `values` does not fit the declared datatype.
    #[error("value {index} is not a valid {datatype} value: {message}")]
    ElementDecodeFailed {
        index: usize,
        datatype: Datatype,
        message: String,
    },
}

/// The `datatype` discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Datatype {
    Boolean,
    Integer,
    Number,
    String,
    Array,
}

impl Datatype {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
        }
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Datatype {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boolean" => Ok(Self::Boolean),
            "integer" => Ok(Self::Integer),
            "number" => Ok(Self::Number),
            "string" => Ok(Self::String),
            "array" => Ok(Self::Array),
            other => Err(ParameterError::UnknownDatatype(other.to_string())),
        }
    }
}

// ============================================================================
// VALUE DESCRIPTORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooleanValue {
    pub name: String,
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<bool>,
}

/// Range restriction shared by integer and number values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range<T> {
    #[serde(rename = "min-value", default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<T>,
    #[serde(rename = "max-value", default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub increment: Option<T>,
}

impl<T: PartialOrd + Copy> Range<T> {
    /// Whether `value` lies within the bounds that are set.
    pub fn contains(&self, value: T) -> bool {
        self.min_value.is_none_or(|min| value >= min) && self.max_value.is_none_or(|max| value <= max)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegerValue {
    pub name: String,
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<Range<i64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberValue {
    pub name: String,
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<Range<f64>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringValue {
    pub name: String,
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<Vec<String>>,
}

/// The value domain of a parameter, selected by its datatype.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterDomain {
    Boolean(Vec<BooleanValue>),
    Integer(Vec<IntegerValue>),
    Number(Vec<NumberValue>),
    String(Vec<StringValue>),
    Array { schema: Option<Map<String, Value>> },
}

impl ParameterDomain {
    pub fn datatype(&self) -> Datatype {
        match self {
            Self::Boolean(_) => Datatype::Boolean,
            Self::Integer(_) => Datatype::Integer,
            Self::Number(_) => Datatype::Number,
            Self::String(_) => Datatype::String,
            Self::Array { .. } => Datatype::Array,
        }
    }

    pub fn values_len(&self) -> usize {
        match self {
            Self::Boolean(values) => values.len(),
            Self::Integer(values) => values.len(),
            Self::Number(values) => values.len(),
            Self::String(values) => values.len(),
            Self::Array { .. } => 0,
        }
    }
}

// ============================================================================
// PARAMETER
// ============================================================================

/// A configuration knob with a declared value domain.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawParameter")]
pub struct Parameter {
    pub name: String,
    pub id: u64,
    /// Spelled as in the NBMP schema.
    pub discription: Option<String>,
    pub domain: ParameterDomain,
    /// Ids of parameters that must be set together with this one.
    pub conditions: Vec<u64>,
    /// Ids of parameters that must not be set together with this one.
    pub exclusions: Vec<u64>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, id: u64, domain: ParameterDomain) -> Self {
        Self {
            name: name.into(),
            id,
            discription: None,
            domain,
            conditions: Vec::new(),
            exclusions: Vec::new(),
        }
    }

    pub fn datatype(&self) -> Datatype {
        self.domain.datatype()
    }

    pub fn values_len(&self) -> usize {
        self.domain.values_len()
    }
}

/// A parameter with its values not yet decoded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawParameter {
    pub name: String,
    pub id: u64,
    #[serde(default)]
    pub discription: Option<String>,
    pub datatype: String,
    #[serde(default)]
    pub conditions: Option<Vec<u64>>,
    #[serde(default)]
    pub exclusions: Option<Vec<u64>>,
    #[serde(default)]
    pub values: Option<Vec<Value>>,
    #[serde(default)]
    pub schema: Option<Map<String, Value>>,
}

impl TryFrom<RawParameter> for Parameter {
    type Error = ParameterError;

    fn try_from(raw: RawParameter) -> Result<Self, Self::Error> {
        let values = raw.values.unwrap_or_default();
        if raw.datatype == Datatype::Array.as_str() && !values.is_empty() {
            return Err(ParameterError::InvalidValuesForArray);
        }
        let datatype: Datatype = raw.datatype.parse()?;

        let domain = match datatype {
            Datatype::Boolean => ParameterDomain::Boolean(decode_values(values, datatype)?),
            Datatype::Integer => ParameterDomain::Integer(decode_values(values, datatype)?),
            Datatype::Number => ParameterDomain::Number(decode_values(values, datatype)?),
            Datatype::String => ParameterDomain::String(decode_values(values, datatype)?),
            Datatype::Array => ParameterDomain::Array { schema: raw.schema },
        };

        Ok(Self {
            name: raw.name,
            id: raw.id,
            discription: raw.discription,
            domain,
            conditions: raw.conditions.unwrap_or_default(),
            exclusions: raw.exclusions.unwrap_or_default(),
        })
    }
}

fn decode_values<T: serde::de::DeserializeOwned>(
    values: Vec<Value>,
    datatype: Datatype,
) -> Result<Vec<T>, ParameterError> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            serde_json::from_value(raw).map_err(|e| ParameterError::ElementDecodeFailed {
                index,
                datatype,
                message: e.to_string(),
            })
        })
        .collect()
}

/// Decode a parameter, keeping the typed error.
pub fn decode(input: &[u8]) -> Result<Parameter, ParameterError> {
    let raw: RawParameter =
        serde_json::from_slice(input).map_err(|e| ParameterError::Malformed(e.to_string()))?;
    Parameter::try_from(raw)
}

/// Decode a parameter from an already parsed JSON value.
pub fn from_value(value: Value) -> Result<Parameter, ParameterError> {
    let raw: RawParameter =
        serde_json::from_value(value).map_err(|e| ParameterError::Malformed(e.to_string()))?;
    Parameter::try_from(raw)
}

#[derive(Serialize)]
#[serde(untagged)]
enum ValuesRef<'a> {
    Boolean(&'a [BooleanValue]),
    Integer(&'a [IntegerValue]),
    Number(&'a [NumberValue]),
    String(&'a [StringValue]),
}

impl ValuesRef<'_> {
    fn is_empty(&self) -> bool {
        match self {
            Self::Boolean(values) => values.is_empty(),
            Self::Integer(values) => values.is_empty(),
            Self::Number(values) => values.is_empty(),
            Self::String(values) => values.is_empty(),
        }
    }
}

#[derive(Serialize)]
struct ParameterRef<'a> {
    name: &'a str,
    id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    discription: Option<&'a str>,
    datatype: Datatype,
    #[serde(skip_serializing_if = "no_ids")]
    conditions: &'a [u64],
    #[serde(skip_serializing_if = "no_ids")]
    exclusions: &'a [u64],
    #[serde(skip_serializing_if = "Option::is_none")]
    values: Option<ValuesRef<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    schema: Option<&'a Map<String, Value>>,
}

fn no_ids(ids: &&[u64]) -> bool {
    ids.is_empty()
}

impl Serialize for Parameter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (values, schema) = match &self.domain {
            ParameterDomain::Boolean(values) => (Some(ValuesRef::Boolean(values)), None),
            ParameterDomain::Integer(values) => (Some(ValuesRef::Integer(values)), None),
            ParameterDomain::Number(values) => (Some(ValuesRef::Number(values)), None),
            ParameterDomain::String(values) => (Some(ValuesRef::String(values)), None),
            ParameterDomain::Array { schema } => (None, schema.as_ref()),
        };
        ParameterRef {
            name: &self.name,
            id: self.id,
            discription: self.discription.as_deref(),
            datatype: self.datatype(),
            conditions: &self.conditions,
            exclusions: &self.exclusions,
            values: values.filter(|values| !values.is_empty()),
            schema,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    const BITRATE: &str = r#"{"name":"bitrate","id":1,"datatype":"integer","values":[{"name":"low","id":1,"restrictions":{"min-value":100,"max-value":1000,"increment":50}}]}"#;

    #[test]
    fn test_integer_parameter() {
        let parameter = decode(BITRATE.as_bytes()).unwrap();
        assert_eq!(parameter.name, "bitrate");
        assert_eq!(parameter.datatype(), Datatype::Integer);
        let ParameterDomain::Integer(values) = &parameter.domain else {
            panic!("expected integer values, got {:?}", parameter.domain);
        };
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].name, "low");
        assert_eq!(
            values[0].restrictions,
            Some(Range {
                min_value: Some(100),
                max_value: Some(1000),
                increment: Some(50),
            })
        );
        assert_eq!(serde_json::to_string(&parameter).unwrap(), BITRATE);
    }

    #[test]
    fn test_array_with_values_is_rejected() {
        let input = BITRATE.replace(r#""integer""#, r#""array""#);
        assert_eq!(decode(input.as_bytes()), Err(ParameterError::InvalidValuesForArray));
    }

    #[test]
    fn test_unknown_datatype() {
        let input = json!({ "name": "x", "id": 2, "datatype": "complex" });
        assert_eq!(
            from_value(input),
            Err(ParameterError::UnknownDatatype("complex".into()))
        );
    }

    #[test]
    fn test_empty_restrictions_round_trip() {
        let input = json!({
            "name": "level", "id": 3, "datatype": "integer",
            "values": [{ "name": "any", "id": 1, "restrictions": {} }]
        });
        let parameter = from_value(input.clone()).unwrap();
        let ParameterDomain::Integer(values) = &parameter.domain else {
            panic!("expected integer values");
        };
        assert_eq!(values[0].restrictions, Some(Range::default()));
        assert_eq!(serde_json::to_value(&parameter).unwrap(), input);
        assert_eq!(from_value(serde_json::to_value(&parameter).unwrap()).unwrap(), parameter);
    }

    #[rstest]
    #[case(json!({ "name": "flag", "id": 1, "restrictions": "yes" }), Datatype::Boolean)]
    #[case(json!({ "name": "level", "id": "one" }), Datatype::Integer)]
    #[case(json!({ "name": "gain", "id": 1, "restrictions": { "min-value": "low" } }), Datatype::Number)]
    #[case(json!({ "name": "codec", "id": 1, "restrictions": "h264" }), Datatype::String)]
    fn test_element_decode_failure_names_index(#[case] bad: Value, #[case] datatype: Datatype) {
        let good = match datatype {
            Datatype::Boolean => json!({ "name": "ok", "id": 0, "restrictions": true }),
            Datatype::Integer => json!({ "name": "ok", "id": 0 }),
            Datatype::Number => json!({ "name": "ok", "id": 0, "restrictions": { "min-value": 0.5 } }),
            _ => json!({ "name": "ok", "id": 0, "restrictions": ["h265"] }),
        };
        let input = json!({
            "name": "p", "id": 9, "datatype": datatype.as_str(),
            "values": [good, bad]
        });
        match from_value(input) {
            Err(ParameterError::ElementDecodeFailed { index, datatype: got, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(got, datatype);
            }
            other => panic!("expected element failure, got {other:?}"),
        }
    }

    #[test]
    fn test_array_keeps_schema_and_omits_values() {
        let input = json!({
            "name": "regions", "id": 4, "datatype": "array",
            "values": [],
            "schema": { "type": "object", "properties": { "x": { "type": "integer" } } }
        });
        let parameter = from_value(input).unwrap();
        assert!(matches!(parameter.domain, ParameterDomain::Array { schema: Some(_) }));

        let out = serde_json::to_value(&parameter).unwrap();
        assert!(out.get("values").is_none());
        assert_eq!(out["schema"]["type"], "object");
    }

    #[test]
    fn test_schema_is_dropped_for_scalar_datatypes() {
        let input = json!({
            "name": "fps", "id": 5, "datatype": "number",
            "schema": { "type": "number" },
            "conditions": [1], "exclusions": [2, 3]
        });
        let parameter = from_value(input).unwrap();
        let out = serde_json::to_value(&parameter).unwrap();
        assert!(out.get("schema").is_none());
        assert!(out.get("values").is_none());
        assert_eq!(out["conditions"], json!([1]));
        assert_eq!(out["exclusions"], json!([2, 3]));
    }

    #[test]
    fn test_serde_deserialize_routes_through_decoder() {
        let result: Result<Parameter, _> =
            serde_json::from_str(r#"{"name":"x","id":1,"datatype":"array","values":[{}]}"#);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("must not carry values"), "{message}");
    }

    #[test]
    fn test_range_contains() {
        let range = Range {
            min_value: Some(100),
            max_value: Some(1000),
            increment: Some(50),
        };
        assert!(range.contains(100));
        assert!(!range.contains(1001));
        assert!(Range::<i64>::default().contains(-5));
    }
}
