/// Reflection model and the `Reflector` trait
///
/// A `Reflector` turns one stage's bytecode into a `ReflectedStage`, a
/// library-independent view of its inputs, outputs and resource bindings.
/// Backends (e.g. the spirq reflector in `oish_gen`) convert their own type
/// trees into `ReflectedType`.

use crate::error::Result;
use crate::format::{BufferFormat, ScalarKind};
use crate::stage::ShaderStage;

/// Reflected data type
#[derive(Debug, Clone, PartialEq)]
pub enum ReflectedType {
    /// Single scalar
    Scalar(ScalarKind),
    /// Vector (scalar kind, component count)
    Vector(ScalarKind, u32),
    /// Column-major matrix; `rows` is the component count of one column
    Matrix {
        scalar: ScalarKind,
        columns: u32,
        rows: u32,
    },
    /// Array (count is `None` for runtime-sized arrays)
    Array {
        element: Box<ReflectedType>,
        count: Option<u32>,
        stride: Option<u32>,
    },
    /// Struct with laid-out members
    Struct(ReflectedStruct),
    /// Images, samplers and anything else without a data layout
    Opaque,
}

/// Reflected struct type
#[derive(Debug, Clone, PartialEq)]
pub struct ReflectedStruct {
    /// Type name (may be empty)
    pub name: String,
    /// Declared size in bytes, when the reflection library knows it
    pub size: Option<u32>,
    /// Members in declaration order
    pub members: Vec<ReflectedMember>,
}

/// Reflected struct member
#[derive(Debug, Clone, PartialEq)]
pub struct ReflectedMember {
    pub name: String,
    /// Byte offset inside the parent struct
    pub offset: u32,
    /// Byte size of the member, when known
    pub size: Option<u32>,
    pub ty: ReflectedType,
}

/// Stage input or output variable
#[derive(Debug, Clone, PartialEq)]
pub struct ReflectedVariable {
    pub name: String,
    pub location: u32,
    pub ty: ReflectedType,
}

/// Kind of a descriptor resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    UniformBuffer,
    StorageBuffer,
    SampledImage,
    StorageImage,
    CombinedImageSampler,
    Sampler,
}

/// Descriptor resource (buffer, image, sampler)
#[derive(Debug, Clone, PartialEq)]
pub struct ReflectedResource {
    pub name: String,
    pub set: u32,
    pub binding: u32,
    pub kind: ResourceKind,
    /// Block type for buffers, `Opaque` otherwise
    pub ty: ReflectedType,
}

/// Everything reflected from one stage
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReflectedStage {
    pub inputs: Vec<ReflectedVariable>,
    pub outputs: Vec<ReflectedVariable>,
    pub resources: Vec<ReflectedResource>,
}

/// Shader reflection backend
pub trait Reflector {
    /// Reflect one stage from its SPIR-V words
    fn reflect(&self, stage: ShaderStage, words: &[u32]) -> Result<ReflectedStage>;
}

impl ReflectedType {
    /// Element format: the scalar/vector itself, a matrix's column vector,
    /// or an array's element. `Undefined` for structs and opaque types.
    pub fn format(&self) -> BufferFormat {
        match self {
            ReflectedType::Scalar(kind) => BufferFormat::from_scalar(*kind, 1),
            ReflectedType::Vector(kind, count) => BufferFormat::from_scalar(*kind, *count),
            ReflectedType::Matrix { scalar, rows, .. } => BufferFormat::from_scalar(*scalar, *rows),
            ReflectedType::Array { element, .. } => element.format(),
            ReflectedType::Struct(_) | ReflectedType::Opaque => BufferFormat::Undefined,
        }
    }

    /// Matrix column count (1 for anything else; arrays report their element's)
    pub fn columns(&self) -> u32 {
        match self {
            ReflectedType::Matrix { columns, .. } => *columns,
            ReflectedType::Array { element, .. } => element.columns(),
            _ => 1,
        }
    }

    /// Total number of array elements (1 when not an array, 0 if runtime-sized)
    pub fn array_len(&self) -> u32 {
        match self {
            ReflectedType::Array { element, count, .. } => {
                count.unwrap_or(0) * element.array_len()
            }
            _ => 1,
        }
    }

    /// Struct reached through any number of array levels
    pub fn as_struct(&self) -> Option<&ReflectedStruct> {
        match self {
            ReflectedType::Struct(st) => Some(st),
            ReflectedType::Array { element, .. } => element.as_struct(),
            _ => None,
        }
    }
}

impl ReflectedStruct {
    /// Declared size, or the end of the last laid-out member
    pub fn byte_size(&self) -> u32 {
        self.size.unwrap_or_else(|| {
            self.members
                .iter()
                .map(|m| m.offset + m.size.unwrap_or(0))
                .max()
                .unwrap_or(0)
        })
    }
}

#[cfg(test)]
#[path = "reflection_tests.rs"]
mod tests;
