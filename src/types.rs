// Core types for coordex
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

// Same digit class the extractor matches with
static DECIMAL_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d$").expect("digit pattern"));

/// A latitude/longitude reading kept as the exact text tokens.
///
/// Tokens stay strings so the original reading can be reported verbatim;
/// use [`CoordinatePair::to_degrees`] when numbers are needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinatePair {
    pub latitude: String,
    pub longitude: String,
}

impl CoordinatePair {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    /// Parse both tokens as decimal degrees.
    pub fn to_degrees(&self) -> Result<(f64, f64)> {
        Ok((parse_token(&self.latitude)?, parse_token(&self.longitude)?))
    }
}

impl fmt::Display for CoordinatePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

fn parse_token(token: &str) -> Result<f64> {
    to_ascii_digits(token)
        .parse::<f64>()
        .map_err(|_| CoordexError::InvalidNumber(token.to_string()))
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// Numeric value of any Unicode decimal digit (Arabic-Indic, fullwidth, ...).
///
/// Decimal digits are encoded as contiguous runs of whole 0..9 blocks, so the
/// offset from the start of the run, mod 10, is the value.
fn digit_value(c: char) -> Option<u32> {
    if c.is_ascii_digit() {
        return c.to_digit(10);
    }
    if !is_decimal_digit(c) {
        return None;
    }
    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    Some((c as u32 - start) % 10)
}

/// Fold non-ASCII decimal digits to ASCII so `f64::from_str` accepts them.
fn to_ascii_digits(token: &str) -> String {
    token
        .chars()
        .map(|c| match digit_value(c) {
            Some(d) if !c.is_ascii() => char::from_digit(d, 10).unwrap_or(c),
            _ => c,
        })
        .collect()
}

/// Both readings produced by one successful extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// Tokens exactly as captured from the text.
    pub original: CoordinatePair,
    /// Latitude after hemisphere-sign correction; longitude untouched.
    pub adjusted: CoordinatePair,
}

impl Extraction {
    pub fn hemisphere_corrected(&self) -> bool {
        self.original.latitude != self.adjusted.latitude
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Latitude,
    Longitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

// Error types
#[derive(Debug, thiserror::Error)]
pub enum CoordexError {
    #[error("no coordinate pair found in text")]
    NotFound,

    #[error("{axis} {value} is outside the valid range")]
    OutOfRange { axis: Axis, value: f64 },

    #[error("token is not a decimal number: {0}")]
    InvalidNumber(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CoordexError>;
