/// Shader stages and stage access flags

use bitflags::bitflags;
use crate::error::{Error, Result};

/// Shader stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex = 1,
    /// Fragment shader
    Fragment = 2,
    /// Geometry shader
    Geometry = 3,
    /// Compute shader
    Compute = 4,
}

bitflags! {
    /// Shader stage visibility flags
    ///
    /// The empty mask is the "undefined" access value: a register must always
    /// be visible to at least one stage.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ShaderStageFlags: u8 {
        const VERTEX = 0x01;
        const FRAGMENT = 0x02;
        const GEOMETRY = 0x04;
        const COMPUTE = 0x08;
    }
}

impl ShaderStage {
    /// All stages, in declaration order
    pub const ALL: [ShaderStage; 4] = [
        ShaderStage::Vertex,
        ShaderStage::Fragment,
        ShaderStage::Geometry,
        ShaderStage::Compute,
    ];

    /// Resolve a stage from its file extension (`.vert`, `.frag`, `.geom`, `.comp`)
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext {
            ".vert" => Ok(ShaderStage::Vertex),
            ".frag" => Ok(ShaderStage::Fragment),
            ".geom" => Ok(ShaderStage::Geometry),
            ".comp" => Ok(ShaderStage::Compute),
            other => Err(Error::UnknownStage(other.to_string())),
        }
    }

    /// File extension of this stage, including the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            ShaderStage::Vertex => ".vert",
            ShaderStage::Fragment => ".frag",
            ShaderStage::Geometry => ".geom",
            ShaderStage::Compute => ".comp",
        }
    }

    /// Access bit of this stage
    pub fn flags(&self) -> ShaderStageFlags {
        match self {
            ShaderStage::Vertex => ShaderStageFlags::VERTEX,
            ShaderStage::Fragment => ShaderStageFlags::FRAGMENT,
            ShaderStage::Geometry => ShaderStageFlags::GEOMETRY,
            ShaderStage::Compute => ShaderStageFlags::COMPUTE,
        }
    }

    /// Decode a serialized stage id
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|stage| *stage as u8 == value)
    }
}

impl ShaderStageFlags {
    /// Create from a slice of ShaderStage
    pub fn from_stages(stages: &[ShaderStage]) -> Self {
        stages.iter().fold(Self::empty(), |acc, stage| acc | stage.flags())
    }
}

#[cfg(test)]
#[path = "stage_tests.rs"]
mod tests;
