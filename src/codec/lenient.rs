//! Field adapters for values that reach a type as text in one encoding and
//! natively in the other.
//!
//! XML carries every scalar as text and cannot tell a one-item list from a
//! single child. Inside `#[serde(flatten)]` bundles serde buffers values
//! without knowing their target type, so typed fields there opt into these
//! adapters with `deserialize_with`.

use serde::de::{Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

/// Accept a single item where a list is expected.
pub fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        Many(Vec<T>),
        One(T),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(items) => items,
        OneOrMany::One(item) => vec![item],
    })
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum NumberOrText<T> {
    Native(T),
    Text(String),
}

impl<T> NumberOrText<T>
where
    T: FromStr,
    T::Err: Display,
{
    fn into_value<E: serde::de::Error>(self) -> Result<T, E> {
        match self {
            Self::Native(value) => Ok(value),
            Self::Text(text) => text
                .trim()
                .parse()
                .map_err(|e| E::custom(format!("invalid value `{text}`: {e}"))),
        }
    }
}

/// Accept a number (or boolean) either natively or as its text form.
pub fn number_or_text<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    NumberOrText::deserialize(deserializer)?.into_value()
}

/// Optional form of [`number_or_text`].
pub fn option_number_or_text<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    Option::<NumberOrText<T>>::deserialize(deserializer)?
        .map(NumberOrText::into_value)
        .transpose()
}
