// Sink behaviour against real files
use coordex::storage::{CoordinateSink, SqliteStore, TextLog};
use coordex::extract_coordinates;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_text_log_appends_blocks() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("extracted_coordinates.txt");

    let first = extract_coordinates("$23.456 garbage E78.901").unwrap();
    let second = extract_coordinates("23.456 E 78.901").unwrap();

    {
        let mut log = TextLog::open(&path).unwrap();
        log.record("first", &first).unwrap();
    }
    {
        // Reopening must append, not truncate.
        let mut log = TextLog::open(&path).unwrap();
        log.record("second", &second).unwrap();
    }

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "Original Coordinates: 23.456, 78.901\n\
         Adjusted Coordinates: -23.456, 78.901\n\n\
         Original Coordinates: 23.456, 78.901\n\
         Adjusted Coordinates: 23.456, 78.901\n\n"
    );
}

#[test]
fn test_sqlite_store_persists_across_connections() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("coords.db");

    let extraction = extract_coordinates("-12.3 text S text E 45.6").unwrap();
    {
        let mut store = SqliteStore::new(Some(&path)).unwrap();
        store.record("scan-001.txt", &extraction).unwrap();
    }

    let store = SqliteStore::new(Some(&path)).unwrap();
    assert_eq!(store.count().unwrap(), 1);

    let stored = &store.recent(5).unwrap()[0];
    assert_eq!(stored.source, "scan-001.txt");
    assert_eq!(stored.extraction, extraction);
    assert!(!stored.extracted_at.is_empty());
}

#[test]
fn test_sinks_behind_trait_objects() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("log.txt");

    let mut sinks: Vec<Box<dyn CoordinateSink>> = vec![
        Box::new(TextLog::open(&log_path).unwrap()),
        Box::new(SqliteStore::new(None).unwrap()),
    ];

    let extraction = extract_coordinates("S 1.5 E 2.5").unwrap();
    for sink in sinks.iter_mut() {
        sink.record("argument", &extraction).unwrap();
    }

    assert!(fs::read_to_string(&log_path).unwrap().contains("Adjusted Coordinates: -1.5, 2.5"));
}
