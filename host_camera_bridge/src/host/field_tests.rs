use super::*;

#[test]
fn test_field_type_sizes() {
    assert_eq!(FieldType::U8.size_bytes(), 1);
    assert_eq!(FieldType::F32.size_bytes(), 4);
    assert_eq!(FieldType::F32x12.size_bytes(), 12 * std::mem::size_of::<f32>());
}

#[test]
fn test_field_value_types_match_widths() {
    assert_eq!(<u8 as FieldValue>::FIELD_TYPE.size_bytes(), std::mem::size_of::<u8>());
    assert_eq!(<f32 as FieldValue>::FIELD_TYPE.size_bytes(), std::mem::size_of::<f32>());
    assert_eq!(<[f32; 12] as FieldValue>::FIELD_TYPE.size_bytes(), std::mem::size_of::<[f32; 12]>());
}

#[test]
fn test_span() {
    let field = FieldDesc::new("fov", 0x2C, FieldType::F32);
    assert_eq!(field.span(), 0x2C..0x30);
}

#[test]
fn test_f32_encoding_is_native_ieee754() {
    assert_eq!(encode(&1.5f32), 1.5f32.to_ne_bytes());
    assert_eq!(encode(&1u8), &[1]);
}

#[test]
fn test_block_encoding_is_contiguous() {
    let values: [f32; 12] = [1.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 2.0, 0.0, 0.0, 1.0, 3.0];
    let bytes = encode(&values);
    assert_eq!(bytes.len(), FieldType::F32x12.size_bytes());
    assert_eq!(&bytes[28..32], &2.0f32.to_ne_bytes());
}
