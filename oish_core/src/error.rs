//! Error types for the oiSH shader tools
//!
//! Every failure of a conversion run is fatal: the error is logged where it is
//! detected and then propagated up to the binary, which exits with a failure code.

use std::fmt;
use crate::descriptor::RegisterKind;
use crate::stage::ShaderStage;

/// Result type for oiSH operations
pub type Result<T> = std::result::Result<T, Error>;

/// oiSH errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Wrong command line usage
    Usage(String),

    /// Stage extension is not one of `.vert .frag .geom .comp`
    UnknownStage(String),

    /// A file could not be opened, read or written
    Io {
        path: String,
        message: String,
    },

    /// Bytecode byte length is not a multiple of 4
    MalformedBytecode {
        path: String,
        size: usize,
    },

    /// Merging stage access for a register produced an empty mask
    InvalidRegisterAccess {
        binding: u32,
        name: String,
    },

    /// Two stages declare the same binding with different register kinds
    RegisterConflict {
        binding: u32,
        existing: RegisterKind,
        found: RegisterKind,
    },

    /// A vertex section cannot switch between per-vertex and per-instance
    SectionConflict {
        buffer: u32,
        per_instance: bool,
    },

    /// The same stage was given twice
    DuplicateStage(ShaderStage),

    /// The reflection library rejected the bytecode
    ReflectionFailed(String),

    /// Resource type that cannot be expressed as a shader register
    UnsupportedResource(String),

    /// `.oiSH` data could not be encoded or decoded
    MalformedDescriptor(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Usage(msg) => write!(f, "Incorrect usage: {}", msg),
            Error::UnknownStage(ext) => write!(
                f,
                "Couldn't pick a shader stage from extension '{}' (expected .vert, .frag, .geom or .comp)",
                ext
            ),
            Error::Io { path, message } => write!(f, "I/O error on '{}': {}", path, message),
            Error::MalformedBytecode { path, size } => write!(
                f,
                "SPIR-V bytecode '{}' is malformed: {} bytes is not a multiple of 4",
                path, size
            ),
            Error::InvalidRegisterAccess { binding, name } => write!(
                f,
                "Invalid register access for '{}' (binding {})",
                name, binding
            ),
            Error::RegisterConflict { binding, existing, found } => write!(
                f,
                "Register conflict at binding {}: declared as {:?}, redeclared as {:?}",
                binding, existing, found
            ),
            Error::SectionConflict { buffer, per_instance } => write!(
                f,
                "Vertex section {} can't be changed to {}",
                buffer,
                if *per_instance { "per-instance" } else { "per-vertex" }
            ),
            Error::DuplicateStage(stage) => write!(f, "Shader stage {:?} given more than once", stage),
            Error::ReflectionFailed(msg) => write!(f, "SPIR-V reflection failed: {}", msg),
            Error::UnsupportedResource(msg) => write!(f, "Unsupported shader resource: {}", msg),
            Error::MalformedDescriptor(msg) => write!(f, "Malformed oiSH data: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Build an `Io` error from a path and an `std::io::Error`
    pub fn io(path: impl AsRef<std::path::Path>, err: std::io::Error) -> Self {
        Error::Io {
            path: path.as_ref().display().to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
