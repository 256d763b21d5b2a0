use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};
use std::str::FromStr;

use super::{ScalarError, parse_digits};

/// A calendar day, written as `YYYY-MM-DD`.
///
/// Any day `chrono` can represent is storable, but only years in
/// `[0, 9999]` have a text form; [`Date::encode`] rejects the rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Smallest encodable year.
    pub const MIN_YEAR: i32 = 0;
    /// Largest encodable year.
    pub const MAX_YEAR: i32 = 9999;

    /// Build a date from its components; `None` if the day does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// The underlying `chrono` date.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// True for the zero value produced by decoding JSON `null`.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Render as `YYYY-MM-DD`.
    pub fn encode(&self) -> Result<String, ScalarError> {
        let year = self.year();
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(ScalarError::YearOutOfRange(year));
        }
        Ok(format!("{year:04}-{:02}-{:02}", self.month(), self.day()))
    }

    /// Parse `YYYY-MM-DD`.
    pub fn decode(text: &str) -> Result<Self, ScalarError> {
        let malformed = || ScalarError::MalformedDate(text.to_string());
        let text = text.trim();
        let mut parts = text.split('-');
        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };
        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return Err(malformed());
        }
        let year = parse_digits(year).ok_or_else(malformed)?;
        let month = parse_digits(month).ok_or_else(malformed)?;
        let day = parse_digits(day).ok_or_else(malformed)?;
        Self::from_ymd(year as i32, month, day).ok_or_else(malformed)
    }
}

impl Default for Date {
    /// `0001-01-01`, the value `null` decodes to.
    fn default() -> Self {
        Self(NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for Date {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let text = self.encode().map_err(ser::Error::custom)?;
        serializer.serialize_str(&text)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) => Self::decode(&text).map_err(de::Error::custom),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2024, 2, 29, "2024-02-29")]
    #[case(0, 1, 1, "0000-01-01")]
    #[case(9999, 12, 31, "9999-12-31")]
    #[case(1, 1, 1, "0001-01-01")]
    fn test_encode_and_decode(#[case] y: i32, #[case] m: u32, #[case] d: u32, #[case] text: &str) {
        let date = Date::from_ymd(y, m, d).unwrap();
        assert_eq!(date.encode().unwrap(), text);
        assert_eq!(Date::decode(text).unwrap(), date);
    }

    #[rstest]
    #[case(-1)]
    #[case(10000)]
    fn test_year_out_of_range(#[case] year: i32) {
        let date = Date::from_ymd(year, 6, 1).unwrap();
        assert_eq!(date.encode(), Err(ScalarError::YearOutOfRange(year)));
    }

    #[rstest]
    #[case("")]
    #[case("2024-2-29")]
    #[case("24-02-29")]
    #[case("2023-02-29")]
    #[case("2024/02/29")]
    #[case("2024-02-29-01")]
    #[case("+024-02-29")]
    fn test_malformed(#[case] text: &str) {
        assert!(matches!(Date::decode(text), Err(ScalarError::MalformedDate(_))));
    }

    #[test]
    fn test_json_null_is_zero() {
        let date: Date = serde_json::from_str("null").unwrap();
        assert!(date.is_zero());
        assert_eq!(date.encode().unwrap(), "0001-01-01");
    }

    #[test]
    fn test_json_is_quoted() {
        let date = Date::from_ymd(2013, 5, 17).unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2013-05-17\"");
        assert!(serde_json::to_string(&Date::from_ymd(-5, 1, 1).unwrap()).is_err());
    }
}
