// Record sinks for successful extractions
pub mod sqlite_store;
pub mod text_log;

pub use sqlite_store::{SqliteStore, StoredExtraction};
pub use text_log::TextLog;

use crate::types::{Extraction, Result};

/// Destination for extraction records. Handles are owned by the caller;
/// nothing here touches process-wide files on its own.
pub trait CoordinateSink {
    /// Record one extraction. `source` names where the text came from
    /// (a file path, `stdin`, `argument`).
    fn record(&mut self, source: &str, extraction: &Extraction) -> Result<()>;
}
