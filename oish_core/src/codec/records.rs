/// Fixed-size `.oiSH` records
///
/// Every record is `#[repr(C)]` with explicit padding fields so it can be
/// copied to and from bytes with bytemuck. Fields are stored little-endian.

use bytemuck::{Pod, Zeroable};

/// `b"oiSH"` read as a little-endian u32
pub(crate) const MAGIC: u32 = u32::from_le_bytes(*b"oiSH");

/// Current container version
pub(crate) const VERSION: u32 = 1;

/// Parent index of a root element
pub(crate) const NO_PARENT: u32 = u32::MAX;

/// Record with a fixed little-endian layout
pub(crate) trait LeRecord: Pod {
    /// Convert between native and little-endian byte order (an involution)
    fn swap_le(self) -> Self;
}

macro_rules! le_record {
    ($(#[$meta:meta])* $name:ident { $($field:ident: $ty:ty),* $(,)? }) => {
        $(#[$meta])*
        #[repr(C)]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
        pub(crate) struct $name {
            $(pub $field: $ty),*
        }

        impl LeRecord for $name {
            fn swap_le(self) -> Self {
                Self { $($field: self.$field.to_le()),* }
            }
        }
    };
}

le_record!(
    /// File header: magic, version and the length of every table
    Header {
        magic: u32,
        version: u32,
        string_count: u32,
        stage_count: u32,
        section_count: u32,
        attribute_count: u32,
        output_count: u32,
        register_count: u32,
        buffer_count: u32,
        element_count: u32,
        code_size: u32,
    }
);

le_record!(StageRecord {
    kind: u8,
    pad0: u8,
    pad1: u16,
    code_len: u32,
});

le_record!(SectionRecord {
    stride: u32,
    per_instance: u8,
    pad0: u8,
    pad1: u16,
});

le_record!(AttributeRecord {
    name: u32,
    offset: u32,
    format: u16,
    section: u16,
    location: u32,
});

le_record!(OutputRecord {
    name: u32,
    format: u16,
    pad: u16,
    location: u32,
});

le_record!(
    /// Register at the binding equal to its record index
    RegisterRecord {
        name: u32,
        kind: u8,
        access: u8,
        pad: u16,
    }
);

le_record!(
    /// Buffer layout; its elements are `first_element..first_element + element_count`
    BufferRecord {
        name: u32,
        binding: u32,
        size: u32,
        first_element: u32,
        element_count: u32,
        kind: u8,
        allocate: u8,
        pad: u16,
    }
);

le_record!(
    /// Buffer element; `parent` is relative to the owning buffer's first element
    ElementRecord {
        name: u32,
        offset: u32,
        array_size: u32,
        length: u32,
        format: u16,
        pad: u16,
        parent: u32,
    }
);
