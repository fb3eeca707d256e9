//! Coordinate extraction from noisy OCR text.
//!
//! ```
//! let result = coordex::extract_coordinates("$23.456 garbage E78.901").unwrap();
//! assert_eq!(result.original.latitude, "23.456");
//! assert_eq!(result.adjusted.latitude, "-23.456");
//! ```
pub mod config;
pub mod extractor;
pub mod map_view;
pub mod normalizer;
pub mod storage;
pub mod types;
pub mod validation;

pub use config::{AppConfig, ExtractorConfig};
pub use extractor::{extract, extract_coordinates, Extractor};
pub use map_view::MapView;
pub use normalizer::normalize;
pub use storage::CoordinateSink;
pub use types::{CoordexError, CoordinatePair, Extraction, Result};
