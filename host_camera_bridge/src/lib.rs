/*!
# Host Camera Bridge

Overrides the camera of a host application from inside its address space.

The host's camera lives in structures whose base addresses come from an
external discovery pass and whose field offsets are known per host build.
This crate packs an engine-agnostic pose (position + quaternion) into the
host's 3x4 rotation/translation block, snapshots and restores the original
camera around an override session, and drives a few scalar fields
(field of view, time freeze, supersampling).

## Architecture

- **HostAddress / HostRegion**: maybe-present base address + fixed-offset field
- **HostMemory**: byte-level read/write (in-process or simulated)
- **PoseWriter**: pose → packed camera block, with a position mirror
- **CameraStateCache**: snapshot/restore of block + FOV
- **ScalarOverrideController**: FOV, timestop, supersampling
- **OverrideSession**: one override, owning all of the above
- **CameraSystem**: process-wide address registry and logger
*/

// Internal modules
mod camera_system;
mod error;
pub mod camera;
pub mod host;
pub mod log;

// Main hostcam namespace module
pub mod hostcam {
    // Error types
    pub use crate::error::{Error, Result};

    // Registry singleton
    pub use crate::camera_system::CameraSystem;

    // Host memory access
    pub use crate::host::{
        FieldDesc, FieldType, FieldValue, HostAddress, HostAddresses, HostLayout, HostMemory,
        HostRegion, Matrix34Packing, ProcessMemory, SimulatedMemory,
    };

    // Camera override
    pub use crate::camera::{
        CachedOriginalState, CameraPose, CameraStateCache, HostCameraBlock, OverrideSession,
        PoseWriter, ScalarOverrideController,
    };

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }
}

// Re-export math library at crate root
pub use glam;
