use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use super::ScalarError;

/// Compiled once and never mutated; shared by every decode.
static DURATION_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^P(?:(\d+)Y)?(?:(\d+)M)?(?:(\d+)W)?(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)(?:[.,](\d{1,9}))?S)?)?$",
    )
    .expect("duration grammar is a valid regex")
});

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// An ISO-8601 duration kept component by component.
///
/// Components are not normalised: `PT90M` stays ninety minutes and does not
/// become `PT1H30M`, so the text form survives a round trip. Fractional
/// seconds are kept to nanosecond precision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Duration {
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    /// Whole seconds held here carry into `seconds` when written.
    pub nanoseconds: u32,
}

impl Duration {
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    fn has_time(&self) -> bool {
        self.hours != 0 || self.minutes != 0 || self.seconds != 0 || self.nanoseconds != 0
    }

    /// Render the duration; the zero value is `P0D`.
    pub fn encode(&self) -> String {
        self.to_string()
    }

    pub fn decode(text: &str) -> Result<Self, ScalarError> {
        let malformed = || ScalarError::MalformedDuration(text.to_string());
        let caps = DURATION_GRAMMAR.captures(text.trim()).ok_or_else(malformed)?;

        // `P` and `P1DT` match the pattern but carry no component after the
        // designator they open.
        if (1..=7).all(|i| caps.get(i).is_none()) {
            return Err(malformed());
        }
        if text.contains('T') && (5..=7).all(|i| caps.get(i).is_none()) {
            return Err(malformed());
        }

        let field = |i: usize| -> Result<u32, ScalarError> {
            caps.get(i)
                .map_or(Ok(0), |m| m.as_str().parse().map_err(|_| malformed()))
        };
        let nanoseconds = match caps.get(8) {
            Some(m) => format!("{:0<9}", m.as_str()).parse().map_err(|_| malformed())?,
            None => 0,
        };

        Ok(Self {
            years: field(1)?,
            months: field(2)?,
            weeks: field(3)?,
            days: field(4)?,
            hours: field(5)?,
            minutes: field(6)?,
            seconds: field(7)?,
            nanoseconds,
        })
    }

    /// Exact length as a `std::time::Duration`.
    ///
    /// `None` when years or months are set, since their length depends on
    /// the calendar position the duration is applied to.
    pub fn to_std(&self) -> Option<std::time::Duration> {
        if self.years != 0 || self.months != 0 {
            return None;
        }
        let days = u64::from(self.weeks) * 7 + u64::from(self.days);
        let secs = days * 86_400
            + u64::from(self.hours) * 3_600
            + u64::from(self.minutes) * 60
            + u64::from(self.seconds);
        Some(std::time::Duration::new(secs, self.nanoseconds))
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("P0D");
        }
        f.write_str("P")?;
        for (value, designator) in [
            (self.years, 'Y'),
            (self.months, 'M'),
            (self.weeks, 'W'),
            (self.days, 'D'),
        ] {
            if value != 0 {
                write!(f, "{value}{designator}")?;
            }
        }
        if !self.has_time() {
            return Ok(());
        }
        f.write_str("T")?;
        if self.hours != 0 {
            write!(f, "{}H", self.hours)?;
        }
        if self.minutes != 0 {
            write!(f, "{}M", self.minutes)?;
        }
        let seconds = u64::from(self.seconds) + u64::from(self.nanoseconds / NANOS_PER_SECOND);
        let nanoseconds = self.nanoseconds % NANOS_PER_SECOND;
        if nanoseconds != 0 {
            let fraction = format!("{nanoseconds:09}");
            write!(f, "{seconds}.{}S", fraction.trim_end_matches('0'))?;
        } else if seconds != 0 {
            write!(f, "{seconds}S")?;
        }
        Ok(())
    }
}

impl FromStr for Duration {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Duration {
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

    #[test]
    fn test_zero_is_p0d() {
        assert_eq!(Duration::default().encode(), "P0D");
        assert!(Duration::decode("P0D").unwrap().is_zero());
        assert!(Duration::decode("PT0S").unwrap().is_zero());
    }

    #[rstest]
    #[case("P1Y2M3W4DT5H6M7S")]
    #[case("P2W")]
    #[case("PT90M")]
    #[case("PT1H")]
    #[case("P3DT12H")]
    #[case("PT2.5S")]
    #[case("PT0.000000001S")]
    #[case("P1M")]
    fn test_text_round_trip(#[case] text: &str) {
        assert_eq!(Duration::decode(text).unwrap().encode(), text);
    }

    #[test]
    fn test_value_round_trip() {
        let duration = Duration {
            days: 1,
            minutes: 30,
            seconds: 4,
            nanoseconds: 120_000_000,
            ..Duration::default()
        };
        assert_eq!(duration.encode(), "P1DT30M4.12S");
        assert_eq!(Duration::decode(&duration.encode()).unwrap(), duration);
    }

    #[test]
    fn test_t_only_when_time_components_set() {
        let duration = Duration {
            years: 1,
            ..Duration::default()
        };
        assert_eq!(duration.encode(), "P1Y");
    }

    #[rstest]
    #[case("")]
    #[case("P")]
    #[case("PT")]
    #[case("P1DT")]
    #[case("1D")]
    #[case("P1H")]
    #[case("PT1.S")]
    #[case("P-1D")]
    #[case("P1D1Y")]
    #[case("PT1.0000000001S")]
    fn test_malformed(#[case] text: &str) {
        assert!(matches!(Duration::decode(text), Err(ScalarError::MalformedDuration(_))));
    }

    #[test]
    fn test_to_std() {
        let duration = Duration::decode("P1DT1H0.5S").unwrap();
        assert_eq!(
            duration.to_std(),
            Some(std::time::Duration::from_millis(90_000_000 + 500))
        );
        assert_eq!(Duration::decode("P1M").unwrap().to_std(), None);
    }

    #[rstest]
    #[case(0, 1_500_000_000, "PT1.5S")]
    #[case(2, 1_000_000_000, "PT3S")]
    #[case(59, 2_000_000_001, "PT61.000000001S")]
    fn test_nanosecond_overflow_carries_into_seconds(
        #[case] seconds: u32,
        #[case] nanoseconds: u32,
        #[case] text: &str,
    ) {
        let duration = Duration {
            seconds,
            nanoseconds,
            ..Duration::default()
        };
        assert_eq!(duration.encode(), text);
        let back = Duration::decode(text).unwrap();
        assert_eq!(back.to_std(), duration.to_std());
        assert!(back.nanoseconds < 1_000_000_000);
    }
}
