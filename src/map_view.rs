//! Data for a map collaborator: where to center and which markers to pin.
//!
//! Nothing is rendered here. This is also the point where coordinate tokens
//! become numbers; the extractor only ever hands out strings.
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_MAP_ZOOM;
use crate::types::{CoordinatePair, Extraction, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Blue,
    Red,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// `[latitude, longitude]` in decimal degrees.
    pub position: [f64; 2],
    pub popup: String,
    pub color: MarkerColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: [f64; 2],
    pub zoom: u8,
    pub markers: Vec<Marker>,
}

impl MapView {
    /// Center on the adjusted pair with a blue pin for the original reading and
    /// a red pin for the adjusted one.
    pub fn from_extraction(extraction: &Extraction, zoom: u8) -> Result<Self> {
        let original = marker(&extraction.original, "Original Coordinates", MarkerColor::Blue)?;
        let adjusted = marker(&extraction.adjusted, "Adjusted Coordinates", MarkerColor::Red)?;

        Ok(Self {
            center: adjusted.position,
            zoom,
            markers: vec![original, adjusted],
        })
    }
}

impl TryFrom<&Extraction> for MapView {
    type Error = crate::types::CoordexError;

    fn try_from(extraction: &Extraction) -> Result<Self> {
        Self::from_extraction(extraction, DEFAULT_MAP_ZOOM)
    }
}

fn marker(pair: &CoordinatePair, label: &str, color: MarkerColor) -> Result<Marker> {
    let (lat, lon) = pair.to_degrees()?;
    Ok(Marker {
        position: [lat, lon],
        popup: format!("{label}: {pair}"),
        color,
    })
}
