/// Data formats for vertex attributes, fragment outputs and buffer members

/// Reflected scalar base type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// 16-bit float
    Half,
    /// 32-bit float
    Float,
    /// 64-bit float
    Double,
    /// 32-bit signed integer
    Int,
    /// 32-bit unsigned integer
    UInt,
    /// 64-bit signed integer (no format block)
    Int64,
    /// 64-bit unsigned integer
    UInt64,
    /// Boolean (stored as 32-bit uint)
    Bool,
    /// 8-bit character (stored as 32-bit uint)
    Char,
}

/// Element format of an attribute, output or buffer member
///
/// Each base type owns a block of four consecutive values, ordered from
/// 4 components down to 1. `Undefined` is the sentinel for anything that has
/// no element format (nested structs, opaque types, unsupported scalars).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
#[repr(u16)]
pub enum BufferFormat {
    Undefined = 0,

    // Half float
    R16G16B16A16_SFLOAT = 1,
    R16G16B16_SFLOAT = 2,
    R16G16_SFLOAT = 3,
    R16_SFLOAT = 4,

    // Float
    R32G32B32A32_SFLOAT = 5,
    R32G32B32_SFLOAT = 6,
    R32G32_SFLOAT = 7,
    R32_SFLOAT = 8,

    // Unsigned int
    R32G32B32A32_UINT = 9,
    R32G32B32_UINT = 10,
    R32G32_UINT = 11,
    R32_UINT = 12,

    // Signed int
    R32G32B32A32_SINT = 13,
    R32G32B32_SINT = 14,
    R32G32_SINT = 15,
    R32_SINT = 16,

    // 64-bit unsigned int
    R64G64B64A64_UINT = 17,
    R64G64B64_UINT = 18,
    R64G64_UINT = 19,
    R64_UINT = 20,

    // Double
    R64G64B64A64_SFLOAT = 21,
    R64G64B64_SFLOAT = 22,
    R64G64_SFLOAT = 23,
    R64_SFLOAT = 24,
}

use BufferFormat::*;

const HALF_BLOCK: [BufferFormat; 4] = [R16G16B16A16_SFLOAT, R16G16B16_SFLOAT, R16G16_SFLOAT, R16_SFLOAT];
const FLOAT_BLOCK: [BufferFormat; 4] = [R32G32B32A32_SFLOAT, R32G32B32_SFLOAT, R32G32_SFLOAT, R32_SFLOAT];
const UINT_BLOCK: [BufferFormat; 4] = [R32G32B32A32_UINT, R32G32B32_UINT, R32G32_UINT, R32_UINT];
const SINT_BLOCK: [BufferFormat; 4] = [R32G32B32A32_SINT, R32G32B32_SINT, R32G32_SINT, R32_SINT];
const UINT64_BLOCK: [BufferFormat; 4] = [R64G64B64A64_UINT, R64G64B64_UINT, R64G64_UINT, R64_UINT];
const DOUBLE_BLOCK: [BufferFormat; 4] = [R64G64B64A64_SFLOAT, R64G64B64_SFLOAT, R64G64_SFLOAT, R64_SFLOAT];

impl BufferFormat {
    /// Every format, indexed by its discriminant
    pub const ALL: [BufferFormat; 25] = [
        Undefined,
        R16G16B16A16_SFLOAT, R16G16B16_SFLOAT, R16G16_SFLOAT, R16_SFLOAT,
        R32G32B32A32_SFLOAT, R32G32B32_SFLOAT, R32G32_SFLOAT, R32_SFLOAT,
        R32G32B32A32_UINT, R32G32B32_UINT, R32G32_UINT, R32_UINT,
        R32G32B32A32_SINT, R32G32B32_SINT, R32G32_SINT, R32_SINT,
        R64G64B64A64_UINT, R64G64B64_UINT, R64G64_UINT, R64_UINT,
        R64G64B64A64_SFLOAT, R64G64B64_SFLOAT, R64G64_SFLOAT, R64_SFLOAT,
    ];

    /// Map a scalar base type and component count (1-4) to a format
    ///
    /// Returns `Undefined` for unsupported base types or component counts.
    pub fn from_scalar(kind: ScalarKind, components: u32) -> Self {
        if !(1..=4).contains(&components) {
            return Undefined;
        }

        let block = match kind {
            ScalarKind::Half => &HALF_BLOCK,
            ScalarKind::Float => &FLOAT_BLOCK,
            ScalarKind::UInt | ScalarKind::Bool | ScalarKind::Char => &UINT_BLOCK,
            ScalarKind::Int => &SINT_BLOCK,
            ScalarKind::UInt64 => &UINT64_BLOCK,
            ScalarKind::Double => &DOUBLE_BLOCK,
            ScalarKind::Int64 => return Undefined,
        };

        block[(4 - components) as usize]
    }

    /// Decode a serialized discriminant
    pub fn from_u16(value: u16) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// Whether this is the `Undefined` sentinel
    pub fn is_undefined(&self) -> bool {
        *self == Undefined
    }

    /// Number of components (0 for `Undefined`)
    pub fn components(&self) -> u32 {
        match self {
            Undefined => 0,
            // Position inside the 4-wide block: 0 => 4 components, 3 => 1 component
            other => 4 - ((*other as u16 - 1) % 4) as u32,
        }
    }

    /// Size of one component in bytes (0 for `Undefined`)
    pub fn component_size(&self) -> u32 {
        match *self as u16 {
            0 => 0,
            1..=4 => 2,
            5..=16 => 4,
            _ => 8,
        }
    }

    /// Returns size in bytes for this format
    pub fn size_bytes(&self) -> u32 {
        self.components() * self.component_size()
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
