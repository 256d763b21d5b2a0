//! MPEG Network-Based Media Processing (ISO/IEC 23090-8) descriptors.
//!
//! NBMP documents are JSON only. Read them with
//! [`codec::json::from_slice`](crate::codec::json::from_slice) or
//! `serde_json` directly.

pub mod descriptors;
mod function;
mod mpe;
pub mod parameter;
mod task;
mod workflow;

pub use descriptors::{Configuration, General, Input, Output, Processing, Requirements};
pub use function::Function;
pub use mpe::{MpeCapabilities, MpeCapabilityDescription, SupportedFunction};
pub use parameter::{Datatype, Parameter, ParameterDomain, ParameterError};
pub use task::Task;
pub use workflow::Workflow;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

const BRAND_PREFIX: &str = "urn:mpeg:mpegi:nbmp:";

/// A validated `urn:mpeg:mpegi:nbmp:2XXX:<token>` brand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Brand(String);

impl Brand {
    pub fn new(value: impl Into<String>) -> Result<Self, FormatError> {
        let value = value.into();
        let Some((year, token)) = value
            .strip_prefix(BRAND_PREFIX)
            .and_then(|rest| rest.split_once(':'))
        else {
            return Err(FormatError::Brand(value));
        };
        let valid_year = year.len() == 4
            && year.starts_with('2')
            && year.bytes().all(|b| b.is_ascii_digit());
        if !valid_year || token.is_empty() {
            return Err(FormatError::Brand(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The four-digit edition year.
    pub fn year(&self) -> u16 {
        self.0[BRAND_PREFIX.len()..BRAND_PREFIX.len() + 4]
            .parse()
            .unwrap_or_default()
    }

    /// Everything after the year.
    pub fn token(&self) -> &str {
        &self.0[BRAND_PREFIX.len() + 5..]
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Brand {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Brand {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Brand> for String {
    fn from(brand: Brand) -> Self {
        brand.0
    }
}
