use super::*;

#[test]
fn test_first_touch_sets_kind_and_name() {
    let mut table = RegisterTable::new();
    let register = table
        .merge(0, RegisterKind::UniformBuffer, ShaderStageFlags::VERTEX, "Camera")
        .unwrap();
    assert_eq!(register.kind, RegisterKind::UniformBuffer);
    assert_eq!(register.name, "Camera");
    assert_eq!(register.access, ShaderStageFlags::VERTEX);
}

#[test]
fn test_uniform_buffer_access_is_or_of_stages() {
    let mut table = RegisterTable::new();
    table.merge(1, RegisterKind::UniformBuffer, ShaderStageFlags::VERTEX, "Camera").unwrap();
    table.merge(1, RegisterKind::UniformBuffer, ShaderStageFlags::FRAGMENT, "CameraFs").unwrap();

    let register = table.get(1).unwrap();
    assert_eq!(register.access, ShaderStageFlags::VERTEX | ShaderStageFlags::FRAGMENT);
    // Name from the first stage wins
    assert_eq!(register.name, "Camera");
}

#[test]
fn test_same_stage_twice_is_idempotent() {
    let mut table = RegisterTable::new();
    table.merge(2, RegisterKind::Sampler, ShaderStageFlags::FRAGMENT, "linear").unwrap();
    table.merge(2, RegisterKind::Sampler, ShaderStageFlags::FRAGMENT, "linear").unwrap();
    assert_eq!(table.get(2).unwrap().access, ShaderStageFlags::FRAGMENT);
}

#[test]
fn test_kind_mismatch_fails() {
    let mut table = RegisterTable::new();
    table.merge(3, RegisterKind::Texture, ShaderStageFlags::VERTEX, "albedo").unwrap();
    let result = table.merge(3, RegisterKind::Sampler, ShaderStageFlags::FRAGMENT, "albedoSampler");
    assert!(matches!(
        result,
        Err(Error::RegisterConflict { binding: 3, existing: RegisterKind::Texture, found: RegisterKind::Sampler })
    ));
    // The failed merge leaves the register untouched
    assert_eq!(table.get(3).unwrap().access, ShaderStageFlags::VERTEX);
}

#[test]
fn test_empty_access_fails() {
    let mut table = RegisterTable::new();
    let result = table.merge(0, RegisterKind::Image, ShaderStageFlags::empty(), "target");
    assert!(matches!(result, Err(Error::InvalidRegisterAccess { binding: 0, .. })));
}

#[test]
fn test_into_dense_fills_gaps() {
    let mut table = RegisterTable::new();
    table.merge(4, RegisterKind::Texture, ShaderStageFlags::FRAGMENT, "albedo").unwrap();
    table.merge(1, RegisterKind::UniformBuffer, ShaderStageFlags::VERTEX, "Camera").unwrap();
    assert_eq!(table.max_binding(), Some(4));

    let dense = table.into_dense();
    assert_eq!(dense.len(), 5);
    for (index, register) in dense.iter().enumerate() {
        assert_eq!(register.binding, index as u32);
    }
    assert!(dense[0].is_undefined());
    assert_eq!(dense[1].name, "Camera");
    assert!(dense[2].is_undefined());
    assert!(dense[3].is_undefined());
    assert_eq!(dense[4].kind, RegisterKind::Texture);
}

#[test]
fn test_into_dense_empty() {
    let table = RegisterTable::new();
    assert!(table.is_empty());
    assert!(table.into_dense().is_empty());
}

#[test]
fn test_binding_above_limit_fails() {
    let mut table = RegisterTable::new();
    let result = table.merge(u32::MAX, RegisterKind::Texture, ShaderStageFlags::FRAGMENT, "far");
    assert!(matches!(result, Err(Error::UnsupportedResource(_))));
    assert!(table.is_empty());
}

#[test]
fn test_highest_binding_is_accepted() {
    let mut table = RegisterTable::new();
    table.merge(MAX_BINDING, RegisterKind::Sampler, ShaderStageFlags::COMPUTE, "last").unwrap();

    let dense = table.into_dense();
    assert_eq!(dense.len(), MAX_BINDING as usize + 1);
    assert_eq!(dense[MAX_BINDING as usize].name, "last");
}
