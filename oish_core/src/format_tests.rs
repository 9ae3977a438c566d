use super::*;

// ============================================================================
// from_scalar tests
// ============================================================================

#[test]
fn test_float_vec4_maps_to_rgba32_sfloat() {
    assert_eq!(BufferFormat::from_scalar(ScalarKind::Float, 4), BufferFormat::R32G32B32A32_SFLOAT);
}

#[test]
fn test_float_scalar_maps_to_r32_sfloat() {
    assert_eq!(BufferFormat::from_scalar(ScalarKind::Float, 1), BufferFormat::R32_SFLOAT);
}

#[test]
fn test_every_block_is_ordered_four_components_first() {
    let kinds = [
        ScalarKind::Half,
        ScalarKind::Float,
        ScalarKind::UInt,
        ScalarKind::Int,
        ScalarKind::UInt64,
        ScalarKind::Double,
    ];

    for kind in kinds {
        let four = BufferFormat::from_scalar(kind, 4) as u16;
        for components in 1..=4u32 {
            let format = BufferFormat::from_scalar(kind, components);
            assert_eq!(format as u16, four + (4 - components) as u16, "{:?} x{}", kind, components);
            assert_eq!(format.components(), components);
        }
    }
}

#[test]
fn test_bool_and_char_use_uint_block() {
    assert_eq!(BufferFormat::from_scalar(ScalarKind::Bool, 1), BufferFormat::R32_UINT);
    assert_eq!(BufferFormat::from_scalar(ScalarKind::Char, 3), BufferFormat::R32G32B32_UINT);
}

#[test]
fn test_unsupported_inputs_map_to_undefined() {
    assert_eq!(BufferFormat::from_scalar(ScalarKind::Int64, 2), BufferFormat::Undefined);
    assert_eq!(BufferFormat::from_scalar(ScalarKind::Float, 0), BufferFormat::Undefined);
    assert_eq!(BufferFormat::from_scalar(ScalarKind::Float, 5), BufferFormat::Undefined);
    assert!(BufferFormat::from_scalar(ScalarKind::Int64, 1).is_undefined());
}

// ============================================================================
// size tests
// ============================================================================

#[test]
fn test_size_bytes() {
    assert_eq!(BufferFormat::Undefined.size_bytes(), 0);
    assert_eq!(BufferFormat::R16G16_SFLOAT.size_bytes(), 4);
    assert_eq!(BufferFormat::R32G32B32_SFLOAT.size_bytes(), 12);
    assert_eq!(BufferFormat::R32G32B32A32_SINT.size_bytes(), 16);
    assert_eq!(BufferFormat::R64G64B64A64_SFLOAT.size_bytes(), 32);
    assert_eq!(BufferFormat::R64_UINT.size_bytes(), 8);
}

// ============================================================================
// from_u16 tests
// ============================================================================

#[test]
fn test_all_table_matches_discriminants() {
    for (index, format) in BufferFormat::ALL.iter().enumerate() {
        assert_eq!(*format as u16 as usize, index);
        assert_eq!(BufferFormat::from_u16(index as u16), Some(*format));
    }
    assert_eq!(BufferFormat::from_u16(25), None);
}
