/// Host layout: versioned byte offsets of the fields we override.
///
/// Offsets and the camera block packing are properties of one host binary
/// build. They are supplied as data and never derived at runtime.

use super::field::{FieldDesc, FieldType};

/// How the host stores its 3x4 rotation + translation block.
///
/// The block is always three rows of four f32, the fourth slot of row `r`
/// holding translation component `r`. Only the rotation part differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Matrix34Packing {
    /// Row `r` holds row `r` of the column-vector rotation matrix
    /// (equivalently column `r` of the row-vector matrix).
    #[default]
    RowMajor,
    /// Row `r` holds column `r` of the column-vector rotation matrix.
    ColumnMajor,
}

/// Field offsets for one supported host build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostLayout {
    /// Free-form host build label, for diagnostics
    pub version: String,
    /// Offset of the 12-f32 block inside the camera structure
    pub matrix_in_struct_offset: usize,
    /// Offset of the FOV f32 inside the FOV structure
    pub fov_in_struct_offset: usize,
    /// Offset of the time-freeze byte inside the timestop structure
    pub timestop_in_struct_offset: usize,
    /// Offset of the supersampling f32 inside an image structure
    pub supersampling_in_image_offset: usize,
    /// Rotation packing of the camera block
    pub packing: Matrix34Packing,
}

impl HostLayout {
    pub fn new(
        version: impl Into<String>,
        matrix_in_struct_offset: usize,
        fov_in_struct_offset: usize,
        timestop_in_struct_offset: usize,
        supersampling_in_image_offset: usize,
    ) -> Self {
        Self {
            version: version.into(),
            matrix_in_struct_offset,
            fov_in_struct_offset,
            timestop_in_struct_offset,
            supersampling_in_image_offset,
            packing: Matrix34Packing::default(),
        }
    }

    pub fn with_packing(mut self, packing: Matrix34Packing) -> Self {
        self.packing = packing;
        self
    }

    // ===== FIELD DESCRIPTORS =====

    pub fn camera_block_field(&self) -> FieldDesc {
        FieldDesc::new("camera_matrix", self.matrix_in_struct_offset, FieldType::F32x12)
    }

    pub fn fov_field(&self) -> FieldDesc {
        FieldDesc::new("fov", self.fov_in_struct_offset, FieldType::F32)
    }

    pub fn timestop_field(&self) -> FieldDesc {
        FieldDesc::new("timestop", self.timestop_in_struct_offset, FieldType::U8)
    }

    pub fn supersampling_field(&self) -> FieldDesc {
        FieldDesc::new("supersampling", self.supersampling_in_image_offset, FieldType::F32)
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
