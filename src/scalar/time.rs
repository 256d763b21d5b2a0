use chrono::{FixedOffset, NaiveTime, Offset, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;

use super::{ScalarError, parse_digits};

/// Wall-clock time with a mandatory UTC offset.
///
/// Text form is `HH:MM:SSZ` for a zero offset and `HH:MM:SS±HH:MM`
/// otherwise. Sub-second precision is not part of the text form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Time {
    time: NaiveTime,
    offset: FixedOffset,
}

impl Time {
    /// Build a time; `offset_seconds` is seconds east of UTC.
    pub fn new(hour: u32, minute: u32, second: u32, offset_seconds: i32) -> Option<Self> {
        Some(Self {
            time: NaiveTime::from_hms_opt(hour, minute, second)?,
            offset: FixedOffset::east_opt(offset_seconds)?,
        })
    }

    /// Shorthand for a UTC time.
    pub fn utc(hour: u32, minute: u32, second: u32) -> Option<Self> {
        Self::new(hour, minute, second, 0)
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn encode(&self) -> String {
        self.to_string()
    }

    pub fn decode(text: &str) -> Result<Self, ScalarError> {
        let malformed = || ScalarError::MalformedTime(text.to_string());
        let text = text.trim();
        if text.len() < 9 || !text.is_char_boundary(8) {
            return Err(malformed());
        }
        let (clock, zone) = text.split_at(8);

        let mut fields = clock.split(':');
        let (Some(h), Some(m), Some(s), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(malformed());
        };
        let two_digits = |f: &str| if f.len() == 2 { parse_digits(f) } else { None };
        let time = NaiveTime::from_hms_opt(
            two_digits(h).ok_or_else(malformed)?,
            two_digits(m).ok_or_else(malformed)?,
            two_digits(s).ok_or_else(malformed)?,
        )
        .ok_or_else(malformed)?;

        let offset = match zone {
            "Z" => Utc.fix(),
            _ if zone.len() == 6 && zone.as_bytes()[3] == b':' => {
                let sign = match zone.as_bytes()[0] {
                    b'+' => 1,
                    b'-' => -1,
                    _ => return Err(malformed()),
                };
                let hours = two_digits(&zone[1..3]).ok_or_else(malformed)?;
                let minutes = two_digits(&zone[4..6]).ok_or_else(malformed)?;
                if minutes > 59 {
                    return Err(malformed());
                }
                let seconds = sign * (hours * 3600 + minutes * 60) as i32;
                FixedOffset::east_opt(seconds).ok_or_else(malformed)?
            }
            _ => return Err(malformed()),
        };

        Ok(Self { time, offset })
    }
}

impl Default for Time {
    /// `00:00:00Z`, the value `null` decodes to.
    fn default() -> Self {
        Self {
            time: NaiveTime::default(),
            offset: Utc.fix(),
        }
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.time.hour(),
            self.time.minute(),
            self.time.second()
        )?;
        let east = self.offset.local_minus_utc();
        if east == 0 {
            return f.write_str("Z");
        }
        let sign = if east < 0 { '-' } else { '+' };
        let east = east.unsigned_abs();
        write!(f, "{sign}{:02}:{:02}", east / 3600, (east % 3600) / 60)
    }
}

impl FromStr for Time {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl Serialize for Time {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) => Self::decode(&text).map_err(de::Error::custom),
            None => Ok(Self::default()),
        }
    }
}
