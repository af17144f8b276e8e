/// HostCameraBlock: the host's packed 3x4 rotation + translation.
///
/// Layout (12 f32, three rows of four):
///
/// ```text
///   [ r00 r01 r02 tx ]
///   [ r10 r11 r12 ty ]
///   [ r20 r21 r22 tz ]
/// ```
///
/// With `Matrix34Packing::RowMajor`, `r` is the column-vector rotation
/// matrix built from the pose quaternion. A row-vector (DirectX style)
/// matrix therefore lands transposed. Getting this wrong mirrors the view
/// instead of crashing.

use glam::{Mat3, Quat, Vec3};
use crate::host::Matrix34Packing;
use super::pose::CameraPose;

/// Slot index of translation component `r` in the block
const fn translation_slot(row: usize) -> usize {
    row * 4 + 3
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostCameraBlock([f32; 12]);

impl HostCameraBlock {
    pub fn from_values(values: [f32; 12]) -> Self {
        Self(values)
    }

    /// Pack a pose.
    pub fn from_pose(position: Vec3, orientation: Quat, packing: Matrix34Packing) -> Self {
        let rotation = Mat3::from_quat(orientation);
        let mut values = [0.0f32; 12];
        for r in 0..3 {
            let rotation_row = match packing {
                Matrix34Packing::RowMajor => rotation.row(r),
                Matrix34Packing::ColumnMajor => rotation.col(r),
            };
            values[r * 4..r * 4 + 3].copy_from_slice(&rotation_row.to_array());
            values[translation_slot(r)] = position[r];
        }
        Self(values)
    }

    pub fn values(&self) -> &[f32; 12] {
        &self.0
    }

    /// Translation slots 3, 7, 11
    pub fn translation(&self) -> Vec3 {
        Vec3::new(
            self.0[translation_slot(0)],
            self.0[translation_slot(1)],
            self.0[translation_slot(2)],
        )
    }

    /// The nine rotation slots in storage order
    pub fn rotation_values(&self) -> [f32; 9] {
        let v = &self.0;
        [v[0], v[1], v[2], v[4], v[5], v[6], v[8], v[9], v[10]]
    }

    /// Column-vector rotation matrix stored in the block
    pub fn rotation(&self, packing: Matrix34Packing) -> Mat3 {
        let stored = Mat3::from_cols_array(&self.rotation_values());
        // from_cols_array reads the stored rows as columns
        match packing {
            Matrix34Packing::RowMajor => stored.transpose(),
            Matrix34Packing::ColumnMajor => stored,
        }
    }

    /// Unpack into a pose
    pub fn to_pose(&self, packing: Matrix34Packing) -> CameraPose {
        CameraPose::new(self.translation(), Quat::from_mat3(&self.rotation(packing)))
    }
}

impl From<HostCameraBlock> for [f32; 12] {
    fn from(block: HostCameraBlock) -> Self {
        block.0
    }
}

#[cfg(test)]
#[path = "camera_block_tests.rs"]
mod tests;
