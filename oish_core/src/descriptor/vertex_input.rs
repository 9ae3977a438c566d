/// Vertex input layout: buffer slot inference and section assignment
///
/// Attribute names encode which vertex or instance buffer they live in:
///
/// | Name          | Slot              | Display name |
/// |---------------|-------------------|--------------|
/// | `i_m`         | instance buffer 0 | `m`          |
/// | `i1_m`        | instance buffer 1 | `m`          |
/// | `a_m`         | vertex buffer 0   | `m`          |
/// | `a2_m`        | vertex buffer 2   | `m`          |
/// | `3_m`         | vertex buffer 3   | `m`          |
/// | anything else | vertex buffer 0   | unchanged    |
///
/// Sections are keyed by slot while attributes are added, then renumbered:
/// vertex buffers first in buffer order, instance buffers after them.

use rustc_hash::FxHashMap;
use crate::error::{Error, Result};

/// Vertex or instance buffer an attribute belongs to
///
/// Ordering sorts per-vertex slots before per-instance slots, then by buffer
/// index, which is the final section order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferSlot {
    pub per_instance: bool,
    pub buffer: u32,
}

impl BufferSlot {
    /// Per-vertex buffer slot
    pub fn vertex(buffer: u32) -> Self {
        Self { per_instance: false, buffer }
    }

    /// Per-instance buffer slot
    pub fn instance(buffer: u32) -> Self {
        Self { per_instance: true, buffer }
    }

    /// Infer the slot of an attribute from its name
    ///
    /// Returns the slot and the name without its buffer prefix.
    pub fn parse(name: &str) -> (BufferSlot, &str) {
        let Some((head, rest)) = name.split_once('_') else {
            return (Self::vertex(0), name);
        };

        let (per_instance, index) = if let Some(index) = head.strip_prefix('i') {
            (true, index)
        } else if let Some(index) = head.strip_prefix('a') {
            (false, index)
        } else {
            // Bare numeric token: `<N>_name`
            return match parse_index(head) {
                Some(buffer) => (Self::vertex(buffer), rest),
                None => (Self::vertex(0), name),
            };
        };

        if index.is_empty() {
            return (Self { per_instance, buffer: 0 }, rest);
        }

        match parse_index(index) {
            Some(buffer) => (Self { per_instance, buffer }, rest),
            None => (Self::vertex(0), name),
        }
    }
}

fn parse_index(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Attributes sharing one input buffer binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexSection {
    /// Bytes between consecutive elements
    pub stride: u32,
    /// Advances per instance instead of per vertex
    pub per_instance: bool,
}

impl VertexSection {
    pub fn new(per_instance: bool) -> Self {
        Self { stride: 0, per_instance }
    }

    /// Append an attribute of `size` bytes and return its offset
    ///
    /// The instancing flag of a section is fixed at creation.
    pub fn push(&mut self, slot: BufferSlot, size: u32) -> Result<u32> {
        if slot.per_instance != self.per_instance {
            crate::oish_bail!("oish::sections", Error::SectionConflict {
                buffer: slot.buffer,
                per_instance: slot.per_instance,
            });
        }

        let offset = self.stride;
        self.stride += size;
        Ok(offset)
    }
}

/// Sections under construction, keyed by buffer slot
#[derive(Debug, Default)]
pub struct SectionTable {
    sections: FxHashMap<BufferSlot, VertexSection>,
}

impl SectionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an attribute to the section of `slot` and return its offset
    pub fn push(&mut self, slot: BufferSlot, size: u32) -> Result<u32> {
        self.sections
            .entry(slot)
            .or_insert_with(|| VertexSection::new(slot.per_instance))
            .push(slot, size)
    }

    /// Section of a slot, if any attribute was added to it
    pub fn get(&self, slot: BufferSlot) -> Option<&VertexSection> {
        self.sections.get(&slot)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Collapse into the final section list
    ///
    /// Returns the sections in final order and the slot -> section index map.
    pub fn finish(self) -> (Vec<VertexSection>, FxHashMap<BufferSlot, u32>) {
        let mut entries: Vec<(BufferSlot, VertexSection)> = self.sections.into_iter().collect();
        entries.sort_by_key(|(slot, _)| *slot);

        let mut remap = FxHashMap::default();
        let mut sections = Vec::with_capacity(entries.len());
        for (index, (slot, section)) in entries.into_iter().enumerate() {
            remap.insert(slot, index as u32);
            sections.push(section);
        }
        (sections, remap)
    }
}

#[cfg(test)]
#[path = "vertex_input_tests.rs"]
mod tests;
