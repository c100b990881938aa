//! The global logger can be installed once per process, so everything that
//! depends on it lives in a single test.

#![allow(clippy::disallowed_methods)]

use std::fs;

use log::LevelFilter;
use smartdefi_common::logger::setup_logger;

#[test]
fn test_setup_logger_writes_file_and_installs_once() {
    let path = std::env::temp_dir().join(format!("smartdefi-logger-{}.log", std::process::id()));
    let _ = fs::remove_file(&path);

    setup_logger(LevelFilter::Debug, Some(&path)).expect("first setup succeeds");
    log::debug!("backing pool probe");
    log::trace!("filtered out");
    log::logger().flush();

    let content = fs::read_to_string(&path).expect("log file exists");
    assert!(content.contains("logger ready"));
    assert!(content.contains("backing pool probe"));
    assert!(!content.contains("filtered out"));
    // No color escapes in the file output
    assert!(!content.contains('\u{1b}'));

    assert!(setup_logger(LevelFilter::Info, None).is_err());

    let _ = fs::remove_file(&path);
}

#[test]
fn test_unwritable_log_file_is_reported() {
    let err = smartdefi_common::logger::setup_logger(
        LevelFilter::Info,
        Some(std::path::Path::new("/nonexistent-dir/smartdefi.log")),
    );
    assert!(err.is_err());
}
