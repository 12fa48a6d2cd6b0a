//! Location classification and resolved coordinates

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of digits in a CEP
const POSTAL_CODE_LEN: usize = 8;

/// Shape of a raw location string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationKind {
    /// Exactly eight ASCII digits, e.g. `01001001`
    PostalCode,
    /// Two signed decimals separated by a comma, e.g. `-23.55028,-46.63389`
    Coordinates,
    /// Anything else
    Invalid,
}

impl LocationKind {
    /// Classify a raw location string.
    ///
    /// Only exact shapes are accepted: surrounding whitespace is not trimmed
    /// and geographic ranges are not checked.
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        if is_postal_code(raw) {
            Self::PostalCode
        } else if is_coordinate_pair(raw) {
            Self::Coordinates
        } else {
            Self::Invalid
        }
    }
}

fn is_postal_code(raw: &str) -> bool {
    raw.len() == POSTAL_CODE_LEN && is_digits(raw)
}

fn is_coordinate_pair(raw: &str) -> bool {
    raw.split_once(',')
        .is_some_and(|(lat, lon)| is_signed_decimal(lat) && is_signed_decimal(lon))
}

/// `-?\d+(\.\d+)?`
fn is_signed_decimal(value: &str) -> bool {
    let unsigned = value.strip_prefix('-').unwrap_or(value);
    match unsigned.split_once('.') {
        Some((integer, fraction)) => is_digits(integer) && is_digits(fraction),
        None => is_digits(unsigned),
    }
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Latitude/longitude pair as handed to the weather provider, e.g. `-23.55,-46.63`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coordinates(String);

impl Coordinates {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Build coordinates from separate latitude and longitude strings
    #[must_use]
    pub fn from_parts(latitude: &str, longitude: &str) -> Self {
        Self(format!("{},{}", latitude.trim(), longitude.trim()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
