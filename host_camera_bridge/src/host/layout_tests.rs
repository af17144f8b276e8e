use super::*;

fn layout() -> HostLayout {
    HostLayout::new("test-build", 0x30, 0x1C, 0x08, 0x94)
}

#[test]
fn test_new_defaults_to_row_major() {
    let layout = layout();
    assert_eq!(layout.version, "test-build");
    assert_eq!(layout.packing, Matrix34Packing::RowMajor);
}

#[test]
fn test_with_packing() {
    let layout = layout().with_packing(Matrix34Packing::ColumnMajor);
    assert_eq!(layout.packing, Matrix34Packing::ColumnMajor);
    assert_eq!(layout.matrix_in_struct_offset, 0x30);
}

#[test]
fn test_field_descriptors() {
    let layout = layout();

    let block = layout.camera_block_field();
    assert_eq!(block.offset, 0x30);
    assert_eq!(block.field_type, FieldType::F32x12);
    assert_eq!(block.span(), 0x30..0x60);

    assert_eq!(layout.fov_field().offset, 0x1C);
    assert_eq!(layout.fov_field().field_type, FieldType::F32);
    assert_eq!(layout.timestop_field().offset, 0x08);
    assert_eq!(layout.timestop_field().field_type, FieldType::U8);
    assert_eq!(layout.supersampling_field().offset, 0x94);
}
