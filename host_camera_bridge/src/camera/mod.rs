//! Camera module: pose packing and the override session.
//!
//! PoseWriter, CameraStateCache and ScalarOverrideController each own the
//! host regions they touch; OverrideSession ties them to one memory handle.

mod camera_block;
mod pose;
mod pose_writer;
mod scalar_override;
mod session;
mod state_cache;

pub use camera_block::HostCameraBlock;
pub use pose::CameraPose;
pub use pose_writer::PoseWriter;
pub use scalar_override::ScalarOverrideController;
pub use session::OverrideSession;
pub use state_cache::{CachedOriginalState, CameraStateCache};
