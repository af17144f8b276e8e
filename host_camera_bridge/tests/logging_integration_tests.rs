//! Integration tests for the logging system
//!
//! Run with: cargo test --test logging_integration_tests

use host_camera_bridge::glam::{Quat, Vec3};
use host_camera_bridge::hostcam::log::{LogEntry, LogSeverity, Logger};
use host_camera_bridge::hostcam::{
    CameraSystem, HostAddress, HostAddresses, HostLayout, OverrideSession, SimulatedMemory,
};
use serial_test::serial;
use std::sync::{Arc, Mutex};

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn layout() -> HostLayout {
    HostLayout::new("logging", 0x10, 0x04, 0x00, 0x00)
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger() {
    let (logger, entries) = TestLogger::new();
    CameraSystem::set_logger(logger);

    CameraSystem::log(LogSeverity::Info, "test::module", "info".to_string());
    CameraSystem::log_detailed(LogSeverity::Error, "test::module", "error".to_string(), "test_file.rs", 42);

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0].severity, LogSeverity::Info);
    assert_eq!(captured[1].file, Some("test_file.rs"));
    assert_eq!(captured[1].line, Some(42));
    drop(captured);

    CameraSystem::reset_logger();
}

#[test]
#[serial]
fn test_integration_session_lifecycle_is_logged() {
    let (logger, entries) = TestLogger::new();
    CameraSystem::set_logger(logger);

    let base = 0x8000;
    let memory = SimulatedMemory::new(base, 0x100);
    let addresses = HostAddresses::new(HostAddress::new(base), HostAddress::ABSENT, HostAddress::new(base + 0x80));
    let mut session = OverrideSession::new(addresses, layout(), memory);
    session.cache_original_camera_values().unwrap();
    session.display_camera_struct_address();
    session.write_new_camera_values_to_game_data(Vec3::X, Quat::IDENTITY).unwrap();
    session.end().unwrap();

    let captured = entries.lock().unwrap();
    let messages: Vec<(LogSeverity, &str)> = captured.iter()
        .map(|e| (e.severity, e.message.as_str()))
        .collect();
    assert!(messages.iter().any(|(s, m)| *s == LogSeverity::Info && m.contains("session created for host build 'logging'")));
    assert!(messages.iter().any(|(s, m)| *s == LogSeverity::Debug && *m == "Camera struct address: 0x0000000000008000"));
    assert!(messages.iter().any(|(s, _)| *s == LogSeverity::Trace));
    assert!(messages.iter().any(|(s, m)| *s == LogSeverity::Info && m.contains("session ended")));
    drop(captured);

    CameraSystem::reset_logger();
}

#[test]
#[serial]
fn test_integration_failed_restore_logs_error_with_location() {
    let (logger, entries) = TestLogger::new();
    CameraSystem::set_logger(logger);

    let session = OverrideSession::new(HostAddresses::absent(), layout(), SimulatedMemory::new(0x1000, 0x10));
    assert!(session.end().is_err());

    let captured = entries.lock().unwrap();
    let error = captured.iter()
        .find(|e| e.severity == LogSeverity::Error)
        .expect("restore failure should be logged");
    assert_eq!(error.source, "hostcam::CameraStateCache");
    assert!(error.file.is_some());
    drop(captured);

    CameraSystem::reset_logger();
}
