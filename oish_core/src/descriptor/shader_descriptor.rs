/// Shader descriptor records: the output of one conversion run

use std::collections::BTreeMap;
use crate::format::BufferFormat;
use crate::reflection::ResourceKind;
use crate::stage::{ShaderStage, ShaderStageFlags};
use crate::descriptor::{ShaderBufferLayout, VertexSection};

/// Compiled bytecode of one stage, stored verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderStageBlob {
    pub stage: ShaderStage,
    pub code: Vec<u8>,
}

/// Vertex attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Name with its buffer prefix stripped (`a1_normal` -> `normal`)
    pub name: String,
    /// Format of one column
    pub format: BufferFormat,
    /// Input location in the vertex shader
    pub location: u32,
    /// Offset in bytes inside its section
    pub offset: u32,
    /// Index of the owning section in `ShaderDescriptor::sections`
    pub buffer: u32,
}

/// Fragment shader output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentOutput {
    pub name: String,
    pub format: BufferFormat,
    pub location: u32,
}

/// Type of resource bound at a register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RegisterKind {
    /// Unused binding slot
    Undefined = 0,
    /// Uniform buffer (read-only structured data)
    UniformBuffer = 1,
    /// Storage buffer (read/write structured data)
    StorageBuffer = 2,
    /// Sampled texture
    Texture = 3,
    /// Writable storage image
    Image = 4,
    /// Separate sampler
    Sampler = 5,
}

impl RegisterKind {
    /// Whether registers of this kind carry a buffer layout
    pub fn is_buffer(&self) -> bool {
        matches!(self, RegisterKind::UniformBuffer | RegisterKind::StorageBuffer)
    }

    /// Decode a serialized kind
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(RegisterKind::Undefined),
            1 => Some(RegisterKind::UniformBuffer),
            2 => Some(RegisterKind::StorageBuffer),
            3 => Some(RegisterKind::Texture),
            4 => Some(RegisterKind::Image),
            5 => Some(RegisterKind::Sampler),
            _ => None,
        }
    }
}

impl From<ResourceKind> for RegisterKind {
    fn from(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::UniformBuffer => RegisterKind::UniformBuffer,
            ResourceKind::StorageBuffer => RegisterKind::StorageBuffer,
            ResourceKind::SampledImage | ResourceKind::CombinedImageSampler => RegisterKind::Texture,
            ResourceKind::StorageImage => RegisterKind::Image,
            ResourceKind::Sampler => RegisterKind::Sampler,
        }
    }
}

/// A binding slot merged across every stage that references it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderRegister {
    pub binding: u32,
    pub kind: RegisterKind,
    /// Stages that access this register
    pub access: ShaderStageFlags,
    pub name: String,
}

impl ShaderRegister {
    /// Placeholder for a binding no stage uses
    pub fn undefined(binding: u32) -> Self {
        Self {
            binding,
            kind: RegisterKind::Undefined,
            access: ShaderStageFlags::empty(),
            name: String::new(),
        }
    }

    pub fn is_undefined(&self) -> bool {
        self.kind == RegisterKind::Undefined
    }
}

/// Stage-merged description of a shader
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShaderDescriptor {
    /// Logical shader name
    pub name: String,
    /// Optimized bytecode per stage, in input order
    pub stages: Vec<ShaderStageBlob>,
    pub attributes: Vec<VertexAttribute>,
    pub sections: Vec<VertexSection>,
    pub outputs: Vec<FragmentOutput>,
    /// Dense, indexed by binding
    pub registers: Vec<ShaderRegister>,
    /// Buffer layouts by buffer name
    pub buffers: BTreeMap<String, ShaderBufferLayout>,
}

impl ShaderDescriptor {
    /// Access mask of all stages present in this descriptor
    pub fn stage_flags(&self) -> ShaderStageFlags {
        self.stages.iter().fold(ShaderStageFlags::empty(), |acc, blob| acc | blob.stage.flags())
    }

    /// Attributes owned by a section, in offset order
    pub fn section_attributes(&self, section: u32) -> impl Iterator<Item = &VertexAttribute> {
        self.attributes.iter().filter(move |a| a.buffer == section)
    }

    /// Register at a binding, if it is in use
    pub fn register(&self, binding: u32) -> Option<&ShaderRegister> {
        self.registers.get(binding as usize).filter(|r| !r.is_undefined())
    }
}
