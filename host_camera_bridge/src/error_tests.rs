//! Unit tests for error.rs
//!
//! Tests all Error variants and the hostcam_err!/hostcam_bail! macros.

use crate::error::{Error, Result};
use crate::camera_system::CameraSystem;
use crate::log::{Logger, LogEntry, LogSeverity};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_address_not_found_display() {
    let err = Error::AddressNotFound("camera struct".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Host address not found"));
    assert!(display.contains("camera struct"));
}

#[test]
fn test_no_snapshot_display() {
    assert_eq!(format!("{}", Error::NoSnapshot), "No camera snapshot captured");
}

#[test]
fn test_memory_access_display() {
    let err = Error::MemoryAccess("range 0x10..0x40 outside region".to_string());
    let display = format!("{}", err);
    assert!(display.starts_with("Host memory access failed"));
    assert!(display.contains("0x10..0x40"));
}

#[test]
fn test_initialization_failed_display() {
    let err = Error::InitializationFailed("addresses already registered".to_string());
    assert!(format!("{}", err).contains("Initialization failed"));
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::NoSnapshot;
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_clone_and_eq() {
    let err = Error::MemoryAccess("x".to_string());
    assert_eq!(err.clone(), err);
    assert_ne!(err, Error::NoSnapshot);
}

#[test]
fn test_result_question_mark() {
    fn inner() -> Result<u32> {
        Err(Error::NoSnapshot)
    }
    fn outer() -> Result<u32> {
        let value = inner()?;
        Ok(value + 1)
    }
    assert_eq!(outer(), Err(Error::NoSnapshot));
}

// ============================================================================
// MACROS
// ============================================================================

struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

#[test]
#[serial]
fn test_hostcam_err_logs_with_location() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    CameraSystem::set_logger(CaptureLogger { entries: entries.clone() });

    let err = crate::hostcam_err!("hostcam::Test", MemoryAccess, "bad read at {:#x}", 0x40usize);
    assert_eq!(err, Error::MemoryAccess("bad read at 0x40".to_string()));

    let captured: Vec<LogEntry> = entries.lock().unwrap().iter()
        .filter(|e| e.source == "hostcam::Test")
        .cloned()
        .collect();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Error);
    assert_eq!(captured[0].source, "hostcam::Test");
    assert!(captured[0].message.contains("bad read at 0x40"));
    assert!(captured[0].file.is_some());
    assert!(captured[0].line.is_some());

    CameraSystem::reset_logger();
}

#[test]
#[serial]
fn test_hostcam_bail_returns_error() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    CameraSystem::set_logger(CaptureLogger { entries: entries.clone() });

    fn restore() -> Result<()> {
        crate::hostcam_bail!("hostcam::Test", NoSnapshot);
    }
    assert_eq!(restore(), Err(Error::NoSnapshot));
    let from_test = entries.lock().unwrap().iter()
        .filter(|e| e.source == "hostcam::Test")
        .count();
    assert_eq!(from_test, 1);

    CameraSystem::reset_logger();
}
