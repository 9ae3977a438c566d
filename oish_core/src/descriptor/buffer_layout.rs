/// Uniform/storage buffer layouts
///
/// A buffer's struct tree is flattened into an arena of `BufferElement`s.
/// Element 0 is the buffer itself; every other element points back to its
/// parent by arena index, so nested structs never own their children.

use crate::format::BufferFormat;
use crate::reflection::ReflectedStruct;
use crate::descriptor::RegisterKind;

const ALLOCATE_SUFFIX: &str = "_ext";

/// One member (or the root) of a buffer layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferElement {
    pub name: String,
    /// Byte offset inside the parent struct
    pub offset: u32,
    /// Element format; `Undefined` for structs
    pub format: BufferFormat,
    /// Matrix columns x array elements for leaves, array elements for structs
    /// (0 for runtime-sized arrays)
    pub array_size: u32,
    /// Byte length: one column for leaves, the whole member for structs
    pub length: u32,
    /// Arena index of the parent; `None` only for the root
    pub parent: Option<u32>,
}

/// Flattened struct layout of a buffer register
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderBufferLayout {
    /// Buffer name without its `_ext` suffix
    pub name: String,
    pub binding: u32,
    pub kind: RegisterKind,
    /// Declared size of the buffer struct in bytes
    pub size: u32,
    /// Declared with an `_ext` suffix: the buffer is allocated by the user
    pub allocate: bool,
    /// Element 0 is the root
    pub elements: Vec<BufferElement>,
}

/// Strip the `_ext` suffix (case-insensitive) and report whether it was present
pub fn split_allocate_suffix(name: &str) -> (&str, bool) {
    let split = name.len().checked_sub(ALLOCATE_SUFFIX.len());
    match split {
        Some(at) if name.is_char_boundary(at)
            && name[at..].eq_ignore_ascii_case(ALLOCATE_SUFFIX) => (&name[..at], true),
        _ => (name, false),
    }
}

impl ShaderBufferLayout {
    /// Flatten the block struct of a buffer register
    pub fn from_struct(name: &str, binding: u32, kind: RegisterKind, block: &ReflectedStruct) -> Self {
        let (display_name, allocate) = split_allocate_suffix(name);
        let size = block.byte_size();

        let mut elements = vec![BufferElement {
            name: display_name.to_string(),
            offset: 0,
            format: BufferFormat::Undefined,
            array_size: 1,
            length: size,
            parent: None,
        }];
        flatten(block, 0, &mut elements);

        crate::oish_debug!("oish::buffers", "Buffer '{}' (binding {}): {} bytes, {} elements{}",
            display_name, binding, size, elements.len() - 1,
            if allocate { ", user allocated" } else { "" });

        Self {
            name: display_name.to_string(),
            binding,
            kind,
            size,
            allocate,
            elements,
        }
    }

    /// The element describing the whole buffer
    pub fn root(&self) -> &BufferElement {
        &self.elements[0]
    }

    /// Direct children of an element, with their arena indices
    pub fn children(&self, parent: u32) -> impl Iterator<Item = (u32, &BufferElement)> {
        self.elements
            .iter()
            .enumerate()
            .filter(move |(_, e)| e.parent == Some(parent))
            .map(|(i, e)| (i as u32, e))
    }

    /// Find an element by dotted path from the root (e.g. `lights.color`)
    pub fn find(&self, path: &str) -> Option<&BufferElement> {
        let mut current = 0u32;
        for part in path.split('.') {
            let (index, _) = self.children(current).find(|(_, e)| e.name == part)?;
            current = index;
        }
        self.elements.get(current as usize)
    }
}

fn flatten(block: &ReflectedStruct, parent: u32, out: &mut Vec<BufferElement>) {
    for member in &block.members {
        if let Some(nested) = member.ty.as_struct() {
            let array_size = member.ty.array_len();
            let length = member
                .size
                .unwrap_or_else(|| nested.byte_size() * array_size.max(1));

            let index = out.len() as u32;
            out.push(BufferElement {
                name: member.name.clone(),
                offset: member.offset,
                format: BufferFormat::Undefined,
                array_size,
                length,
                parent: Some(parent),
            });

            flatten(nested, index, out);
        } else {
            let format = member.ty.format();
            out.push(BufferElement {
                name: member.name.clone(),
                offset: member.offset,
                format,
                array_size: member.ty.columns() * member.ty.array_len(),
                length: format.size_bytes(),
                parent: Some(parent),
            });
        }
    }
}

#[cfg(test)]
#[path = "buffer_layout_tests.rs"]
mod tests;
