use super::*;

fn mat4() -> ReflectedType {
    ReflectedType::Matrix { scalar: ScalarKind::Float, columns: 4, rows: 4 }
}

#[test]
fn test_matrix_format_is_column_vector() {
    assert_eq!(mat4().format(), BufferFormat::R32G32B32A32_SFLOAT);
    assert_eq!(mat4().columns(), 4);
}

#[test]
fn test_array_reports_element_format_and_length() {
    let ty = ReflectedType::Array {
        element: Box::new(ReflectedType::Vector(ScalarKind::Float, 3)),
        count: Some(8),
        stride: Some(16),
    };
    assert_eq!(ty.format(), BufferFormat::R32G32B32_SFLOAT);
    assert_eq!(ty.columns(), 1);
    assert_eq!(ty.array_len(), 8);
}

#[test]
fn test_nested_array_length_multiplies() {
    let ty = ReflectedType::Array {
        element: Box::new(ReflectedType::Array {
            element: Box::new(ReflectedType::Scalar(ScalarKind::Int)),
            count: Some(3),
            stride: Some(4),
        }),
        count: Some(2),
        stride: Some(12),
    };
    assert_eq!(ty.array_len(), 6);
}

#[test]
fn test_runtime_array_has_zero_length() {
    let ty = ReflectedType::Array {
        element: Box::new(ReflectedType::Scalar(ScalarKind::UInt)),
        count: None,
        stride: Some(4),
    };
    assert_eq!(ty.array_len(), 0);
}

#[test]
fn test_struct_and_opaque_have_undefined_format() {
    let st = ReflectedType::Struct(ReflectedStruct { name: "Light".into(), size: Some(16), members: vec![] });
    assert!(st.format().is_undefined());
    assert!(ReflectedType::Opaque.format().is_undefined());
}

#[test]
fn test_as_struct_through_array() {
    let inner = ReflectedStruct { name: "Light".into(), size: Some(32), members: vec![] };
    let ty = ReflectedType::Array {
        element: Box::new(ReflectedType::Struct(inner.clone())),
        count: Some(4),
        stride: Some(32),
    };
    assert_eq!(ty.as_struct(), Some(&inner));
    assert_eq!(ReflectedType::Opaque.as_struct(), None);
}

#[test]
fn test_struct_byte_size_fallback() {
    let st = ReflectedStruct {
        name: "Block".into(),
        size: None,
        members: vec![
            ReflectedMember { name: "a".into(), offset: 0, size: Some(16), ty: ReflectedType::Vector(ScalarKind::Float, 4) },
            ReflectedMember { name: "b".into(), offset: 16, size: Some(12), ty: ReflectedType::Vector(ScalarKind::Float, 3) },
        ],
    };
    assert_eq!(st.byte_size(), 28);

    let declared = ReflectedStruct { size: Some(32), ..st };
    assert_eq!(declared.byte_size(), 32);
}
