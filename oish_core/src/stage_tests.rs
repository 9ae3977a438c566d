use super::*;

#[test]
fn test_from_extension_known_stages() {
    assert_eq!(ShaderStage::from_extension(".vert").unwrap(), ShaderStage::Vertex);
    assert_eq!(ShaderStage::from_extension(".frag").unwrap(), ShaderStage::Fragment);
    assert_eq!(ShaderStage::from_extension(".geom").unwrap(), ShaderStage::Geometry);
    assert_eq!(ShaderStage::from_extension(".comp").unwrap(), ShaderStage::Compute);
}

#[test]
fn test_from_extension_rejects_unknown() {
    assert!(matches!(ShaderStage::from_extension("vert"), Err(Error::UnknownStage(_))));
    assert!(matches!(ShaderStage::from_extension(".tesc"), Err(Error::UnknownStage(_))));
    assert!(matches!(ShaderStage::from_extension(""), Err(Error::UnknownStage(_))));
}

#[test]
fn test_extension_roundtrip() {
    for stage in ShaderStage::ALL {
        assert_eq!(ShaderStage::from_extension(stage.extension()).unwrap(), stage);
        assert_eq!(ShaderStage::from_u8(stage as u8), Some(stage));
    }
    assert_eq!(ShaderStage::from_u8(0), None);
}

#[test]
fn test_stage_flags_are_disjoint() {
    let mut seen = ShaderStageFlags::empty();
    for stage in ShaderStage::ALL {
        assert!(!seen.intersects(stage.flags()));
        seen |= stage.flags();
    }
    assert_eq!(seen, ShaderStageFlags::all());
}

#[test]
fn test_from_stages() {
    let flags = ShaderStageFlags::from_stages(&[ShaderStage::Vertex, ShaderStage::Fragment]);
    assert_eq!(flags, ShaderStageFlags::VERTEX | ShaderStageFlags::FRAGMENT);
    assert!(ShaderStageFlags::from_stages(&[]).is_empty());
}
