/// CameraSystem: process-wide registry for discovered host addresses
/// and the global logger.
///
/// Discovery registers the camera, timestop and FOV addresses once.
/// Sessions read them back through `addresses()`. A registry that was never
/// filled reports every address as absent, which every write path already
/// tolerates.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::error::{Error, Result};
use crate::host::HostAddresses;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global registry storage
static SYSTEM_STATE: OnceLock<SystemState> = OnceLock::new();

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

struct SystemState {
    /// Addresses from discovery, `None` until registered
    addresses: RwLock<Option<HostAddresses>>,
}

impl SystemState {
    fn new() -> Self {
        Self {
            addresses: RwLock::new(None),
        }
    }
}

// ===== PUBLIC API =====

/// Process-wide registry
///
/// # Example
///
/// ```no_run
/// use host_camera_bridge::hostcam::{CameraSystem, HostAddress, HostAddresses};
///
/// CameraSystem::initialize()?;
/// CameraSystem::register_addresses(HostAddresses::new(
///     HostAddress::new(0x7FF6_1234_0000),
///     HostAddress::ABSENT,
///     HostAddress::new(0x7FF6_5678_0000),
/// ))?;
/// assert!(CameraSystem::is_camera_found());
/// # Ok::<(), host_camera_bridge::hostcam::Error>(())
/// ```
pub struct CameraSystem;

impl CameraSystem {
    fn log_and_return_error(error: Error) -> Error {
        crate::hostcam_log!(Error, "hostcam::CameraSystem", "{}", error);
        error
    }

    /// Initialize the registry. Idempotent.
    pub fn initialize() -> Result<()> {
        SYSTEM_STATE.get_or_init(SystemState::new);
        Ok(())
    }

    /// Forget the registered addresses.
    ///
    /// After this, `register_addresses()` may be called again (host
    /// reloaded, new discovery pass).
    pub fn shutdown() {
        if let Some(state) = SYSTEM_STATE.get() {
            if let Ok(mut addresses) = state.addresses.write() {
                *addresses = None;
            }
        }
    }

    /// Register the discovered addresses.
    ///
    /// # Errors
    ///
    /// - The registry is not initialized
    /// - Addresses were already registered
    /// - The registry lock is poisoned
    pub fn register_addresses(addresses: HostAddresses) -> Result<()> {
        let state = SYSTEM_STATE.get()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("CameraSystem not initialized. Call CameraSystem::initialize() first.".to_string())
            ))?;

        let mut lock = state.addresses.write()
            .map_err(|_| Self::log_and_return_error(
                Error::InitializationFailed("Address registry lock poisoned".to_string())
            ))?;

        if lock.is_some() {
            return Err(Self::log_and_return_error(
                Error::InitializationFailed("Host addresses already registered. Call CameraSystem::shutdown() first.".to_string())
            ));
        }

        *lock = Some(addresses);
        drop(lock);

        crate::hostcam_log!(Info, "hostcam::CameraSystem",
            "Host addresses registered (camera {}, timestop {}, fov {})",
            addresses.camera, addresses.timestop, addresses.fov);
        Ok(())
    }

    /// Registered addresses, all absent if discovery has not reported yet.
    pub fn addresses() -> HostAddresses {
        SYSTEM_STATE.get()
            .and_then(|state| state.addresses.read().ok().and_then(|lock| *lock))
            .unwrap_or_default()
    }

    /// Whether discovery found the camera structure.
    pub fn is_camera_found() -> bool {
        Self::addresses().camera.is_present()
    }

    /// Emit the registered camera struct address at Debug severity.
    pub fn display_camera_struct_address() {
        crate::hostcam_log!(Debug, "hostcam::CameraSystem",
            "Camera struct address: {}", Self::addresses().camera);
    }

    // ===== LOGGING API =====

    /// Replace the logger
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::default())));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to DefaultLogger
    pub fn reset_logger() {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::default())));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(DefaultLogger::default());
        }
    }

    /// Log without file:line (used by hostcam_log! below Error)
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::default())));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Log with file:line (used by hostcam_log!(Error, ..))
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::default())));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

#[cfg(test)]
#[path = "camera_system_tests.rs"]
mod tests;
