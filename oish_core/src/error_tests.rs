//! Unit tests for error.rs
//!
//! Tests Error variants and their implementations (Display, Debug, Clone, std::error::Error).

use crate::error::{Error, Result};
use crate::descriptor::RegisterKind;
use crate::stage::ShaderStage;

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_usage_display() {
    let err = Error::Usage("oish_gen <path> <name> <stages>...".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Incorrect usage"));
    assert!(display.contains("<stages>"));
}

#[test]
fn test_unknown_stage_display() {
    let err = Error::UnknownStage(".tesc".to_string());
    let display = format!("{}", err);
    assert!(display.contains(".tesc"));
    assert!(display.contains(".vert"));
}

#[test]
fn test_malformed_bytecode_display() {
    let err = Error::MalformedBytecode { path: "basic.vert.spv".to_string(), size: 13 };
    let display = format!("{}", err);
    assert!(display.contains("basic.vert.spv"));
    assert!(display.contains("13 bytes"));
}

#[test]
fn test_register_conflict_display() {
    let err = Error::RegisterConflict {
        binding: 3,
        existing: RegisterKind::Texture,
        found: RegisterKind::Sampler,
    };
    let display = format!("{}", err);
    assert!(display.contains("binding 3"));
    assert!(display.contains("Texture"));
    assert!(display.contains("Sampler"));
}

#[test]
fn test_section_conflict_display() {
    let err = Error::SectionConflict { buffer: 2, per_instance: true };
    assert_eq!(format!("{}", err), "Vertex section 2 can't be changed to per-instance");
}

#[test]
fn test_duplicate_stage_display() {
    let err = Error::DuplicateStage(ShaderStage::Fragment);
    assert!(format!("{}", err).contains("Fragment"));
}

#[test]
fn test_io_helper_keeps_path() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err = Error::io("shaders/basic.vert.spv", io);
    match err {
        Error::Io { path, message } => {
            assert_eq!(path, "shaders/basic.vert.spv");
            assert!(message.contains("missing"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::ReflectionFailed("bad header".to_string());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_clone() {
    let err1 = Error::InvalidRegisterAccess { binding: 1, name: "Camera".to_string() };
    let err2 = err1.clone();
    assert_eq!(format!("{}", err1), format!("{}", err2));
}

// ============================================================================
// RESULT TYPE TESTS
// ============================================================================

#[test]
fn test_error_propagation_with_question_mark() {
    fn inner() -> Result<u32> {
        Err(Error::MalformedDescriptor("truncated".to_string()))
    }

    fn outer() -> Result<u32> {
        let value = inner()?;
        Ok(value + 1)
    }

    assert!(matches!(outer(), Err(Error::MalformedDescriptor(_))));
}
