/// Field descriptors: (offset, width, numeric encoding) of one host value.
///
/// Values are encoded with `bytemuck` in native byte order. We execute
/// inside the host's address space, so native order is the host's order.

use bytemuck::Pod;

/// Width and numeric encoding of a host field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Single byte flag
    U8,
    /// IEEE-754 single precision
    F32,
    /// Twelve contiguous f32 (3x4 packed rotation + translation)
    F32x12,
}

impl FieldType {
    /// Size in bytes
    pub fn size_bytes(&self) -> usize {
        match self {
            FieldType::U8     => 1,
            FieldType::F32    => 4,
            FieldType::F32x12 => 48,
        }
    }
}

/// A named field at a fixed byte offset from a host structure base
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDesc {
    pub name: &'static str,
    pub offset: usize,
    pub field_type: FieldType,
}

impl FieldDesc {
    pub const fn new(name: &'static str, offset: usize, field_type: FieldType) -> Self {
        Self { name, offset, field_type }
    }

    /// Byte range covered by the field, relative to the structure base
    pub fn span(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.field_type.size_bytes()
    }
}

/// Rust type that can be read from / written to a field of matching type.
pub trait FieldValue: Pod {
    const FIELD_TYPE: FieldType;
}

impl FieldValue for u8 {
    const FIELD_TYPE: FieldType = FieldType::U8;
}

impl FieldValue for f32 {
    const FIELD_TYPE: FieldType = FieldType::F32;
}

impl FieldValue for [f32; 12] {
    const FIELD_TYPE: FieldType = FieldType::F32x12;
}

/// Encode a value into the bytes stored in host memory.
pub fn encode<T: FieldValue>(value: &T) -> &[u8] {
    bytemuck::bytes_of(value)
}

#[cfg(test)]
#[path = "field_tests.rs"]
mod tests;
