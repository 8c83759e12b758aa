//! Shared helpers for unit and integration tests.

use std::env;
use std::sync::Once;

use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::domain::RecordSet;

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "trace");
        }
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Category tree used across the test suite.
///
/// ```text
/// 1 Electronics
/// ├ 3 Phones
/// │ ├ 6 Android
/// │ └ 7 iOS
/// └ 4 Laptops
/// 2 Books
/// └ 5 Fiction
/// ```
pub fn category_records() -> RecordSet {
    RecordSet::from_value(json!([
        {"id": 1, "pid": 0, "name": "Electronics", "url": "/electronics"},
        {"id": 2, "pid": 0, "name": "Books", "url": "/books", "badge": "new"},
        {"id": 3, "pid": 1, "name": "Phones", "url": "/phones"},
        {"id": 4, "pid": "1", "name": "Laptops", "url": "/laptops?sort=price"},
        {"id": "5", "pid": 2, "name": "Fiction"},
        {"id": 6, "pid": 3, "name": "Android", "url": "/android"},
        {"id": 7, "pid": 3, "name": "iOS"},
    ]))
    .expect("valid category records")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_setup() {
        init_test_setup();
        init_test_setup();
    }

    #[test]
    fn test_category_records_are_complete() {
        assert_eq!(category_records().len(), 7);
    }
}
