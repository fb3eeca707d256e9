//! Coordinate matching over normalized OCR text.
//!
//! The search pattern is assembled from small named rules so each part of the
//! grammar can be read (and tested) on its own:
//!
//! ```text
//! SIGN_MARKER  (lat: DECIMAL)  FILLER  LONGITUDE_MARKER  (lon: UNSIGNED_DECIMAL)
//! ```
//!
//! Matching is a search, not an anchored parse: the first occurrence anywhere
//! in the text wins.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ExtractorConfig;
use crate::normalizer;
use crate::types::{CoordexError, CoordinatePair, Extraction, Result};
use crate::validation;

/// Optional `$` (OCR's usual reading of a minus) then optional `S`.
pub const SIGN_MARKER: &str = r"\$?S?";
/// Latitude: decimal number with an optional embedded minus.
pub const DECIMAL: &str = r"-?\d+\.\d+";
/// Anything between the two numbers, as long as it never crosses an `E`.
pub const FILLER: &str = r"[^E]*";
/// East marker followed by at most one whitespace character (C0 separators
/// U+001C..U+001F included).
pub const LONGITUDE_MARKER: &str = r"E[\s\x1C-\x1F]?";
/// Longitude: decimal number, never signed.
pub const UNSIGNED_DECIMAL: &str = r"\d+\.\d+";

/// Characters that mark a southern latitude wherever they appear.
const SOUTH_MARKERS: [char; 2] = ['$', 'S'];

static COORDINATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        "{SIGN_MARKER}(?P<lat>{DECIMAL}){FILLER}{LONGITUDE_MARKER}(?P<lon>{UNSIGNED_DECIMAL})"
    );
    Regex::new(&pattern).expect("coordinate pattern")
});

/// The two raw tokens of a single pattern hit, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateMatch<'a> {
    pub latitude: &'a str,
    pub longitude: &'a str,
}

/// Find the first coordinate-shaped span in `text`.
pub fn find_match(text: &str) -> Option<CoordinateMatch<'_>> {
    let caps = COORDINATE_PATTERN.captures(text)?;
    Some(CoordinateMatch {
        latitude: caps.name("lat")?.as_str(),
        longitude: caps.name("lon")?.as_str(),
    })
}

/// Force `latitude` negative when `full_text` carries a south marker anywhere.
///
/// `full_text` must be the whole normalized text, not the matched span: an `S`
/// in an unrelated word still flips the sign.
pub fn apply_hemisphere(latitude: &str, full_text: &str) -> String {
    if full_text.contains(&SOUTH_MARKERS[..]) {
        format!("-{}", latitude.trim_start_matches('-'))
    } else {
        latitude.to_string()
    }
}

/// Extract both readings from already-normalized text.
pub fn extract(normalized: &str) -> Result<Extraction> {
    let Some(hit) = find_match(normalized) else {
        tracing::warn!("Pattern did not match; no valid GPS coordinates in text");
        return Err(CoordexError::NotFound);
    };

    tracing::info!(
        latitude = hit.latitude,
        longitude = hit.longitude,
        "Matched coordinate tokens"
    );

    let original = CoordinatePair::new(hit.latitude, hit.longitude);
    let adjusted = CoordinatePair::new(apply_hemisphere(hit.latitude, normalized), hit.longitude);

    Ok(Extraction { original, adjusted })
}

/// Normalize raw OCR output and extract from it.
pub fn extract_coordinates(raw: &str) -> Result<Extraction> {
    extract(&normalizer::normalize(raw))
}

/// Pipeline entry point carrying the caller's extraction settings.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    pub fn run(&self, raw: &str) -> Result<Extraction> {
        let extraction = extract_coordinates(raw)?;

        if self.config.validate_ranges {
            validation::validate_pair(&extraction.adjusted)?;
            validation::validate_pair(&extraction.original)?;
        }

        Ok(extraction)
    }
}
