// Optional geographic range checks, off unless `validate_ranges` is set
use crate::types::{Axis, CoordexError, CoordinatePair, Result};

fn ensure_within(value: f64, min: f64, max: f64, axis: Axis) -> Result<f64> {
    if value < min || value > max {
        Err(CoordexError::OutOfRange { axis, value })
    } else {
        Ok(value)
    }
}

pub fn validate_latitude(value: f64) -> Result<f64> {
    ensure_within(value, -90.0, 90.0, Axis::Latitude)
}

pub fn validate_longitude(value: f64) -> Result<f64> {
    ensure_within(value, -180.0, 180.0, Axis::Longitude)
}

/// Parse and range-check both tokens of a pair.
pub fn validate_pair(pair: &CoordinatePair) -> Result<(f64, f64)> {
    let (lat, lon) = pair.to_degrees()?;
    Ok((validate_latitude(lat)?, validate_longitude(lon)?))
}
