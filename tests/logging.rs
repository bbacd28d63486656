#![cfg(feature = "log")]

use std::sync::Mutex;

use inverse_cache::prelude::*;
use log::{Level, LevelFilter, Log, Metadata, Record};
use nalgebra::DMatrix;

/// Keeps every record so the test can inspect what was emitted.
struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl CaptureLogger {
    fn cache_hits(&self) -> usize {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|(level, message)| {
                *level == Level::Debug && message.starts_with("returning cached inverse")
            })
            .count()
    }
}

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

// the logger is process-global, so every check lives in this one test
#[test]
fn cache_hit_is_logged_from_second_call() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut cell = CacheCell::new(DMatrix::from_row_slice(2, 2, &[4., 3., 3., 2.]));
    cached_inverse(&mut cell).unwrap();
    assert_eq!(LOGGER.cache_hits(), 0);

    cached_inverse(&mut cell).unwrap();
    assert_eq!(LOGGER.cache_hits(), 1);

    cached_inverse(&mut cell).unwrap();
    assert_eq!(LOGGER.cache_hits(), 2);

    // reassignment brings back a silent first call
    cell.set_matrix(DMatrix::from_row_slice(2, 2, &[2., 0., 0., 5.]));
    cached_inverse(&mut cell).unwrap();
    assert_eq!(LOGGER.cache_hits(), 2);
}
