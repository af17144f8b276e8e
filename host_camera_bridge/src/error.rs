//! Error types for the host camera bridge
//!
//! Write paths never produce errors for a missing host address; that case is
//! a silent no-op. Errors are reserved for the snapshot protocol, the address
//! registry and failed host memory accesses.

use std::fmt;

/// Result type for host camera bridge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Host camera bridge errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A host address required by a snapshot operation was never discovered
    AddressNotFound(String),

    /// Restore requested before any snapshot was captured in this session
    NoSnapshot,

    /// Reading or writing host memory failed (range not mapped, null base...)
    MemoryAccess(String),

    /// Registry setup failed (addresses registered twice, etc.)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AddressNotFound(what) => write!(f, "Host address not found: {}", what),
            Error::NoSnapshot => write!(f, "No camera snapshot captured"),
            Error::MemoryAccess(msg) => write!(f, "Host memory access failed: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Build an `Error`, logging it at Error severity with file:line.
///
/// ```ignore
/// return Err(hostcam_err!("hostcam::Memory", MemoryAccess, "address {:#x} unmapped", addr));
/// ```
#[macro_export]
macro_rules! hostcam_err {
    ($source:expr, NoSnapshot) => {{
        let error = $crate::hostcam::Error::NoSnapshot;
        $crate::hostcam_log!(Error, $source, "{}", error);
        error
    }};
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let error = $crate::hostcam::Error::$variant(format!($($arg)*));
        $crate::hostcam_log!(Error, $source, "{}", error);
        error
    }};
}

/// Log and return an `Error` from the enclosing function.
#[macro_export]
macro_rules! hostcam_bail {
    ($($arg:tt)*) => {
        return Err($crate::hostcam_err!($($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
