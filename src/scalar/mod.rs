//! Typed scalar wrappers shared by every schema.
//!
//! Each wrapper owns a lossless text form:
//!
//! | Type | Text form |
//! |------|-----------|
//! | [`Date`] | `YYYY-MM-DD` |
//! | [`Time`] | `HH:MM:SSZ` or `HH:MM:SS±HH:MM` |
//! | [`Duration`] | `P[nY][nM][nW][nD][T[nH][nM][n[.f]S]]` |
//! | [`Uri`], [`Url`] | opaque strings |
//!
//! In JSON the date, time and duration forms are strings; the literal `null`
//! decodes to the zero value.

mod date;
mod duration;
mod time;
mod uri;

pub use date::Date;
pub use duration::Duration;
pub use time::Time;
pub use uri::{Uri, Url};

use thiserror::Error;

/// Errors raised by the scalar text codecs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScalarError {
    /// Date year outside `[0, 9999]`.
    #[error("year {0} is outside the encodable range 0..=9999")]
    YearOutOfRange(i32),

    /// Input did not match `YYYY-MM-DD`.
    #[error("malformed date `{0}`")]
    MalformedDate(String),

    /// Input did not match `HH:MM:SS(Z|±HH:MM)`.
    #[error("malformed time `{0}`")]
    MalformedTime(String),

    /// Input did not match the ISO-8601 duration grammar.
    #[error("malformed duration `{0}`")]
    MalformedDuration(String),

    /// The string could not be resolved to an absolute URL.
    #[error("cannot resolve `{value}` as a URL: {message}")]
    Unresolvable { value: String, message: String },
}

/// Parse a non-empty run of ASCII digits (no sign, no whitespace).
pub(crate) fn parse_digits(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
