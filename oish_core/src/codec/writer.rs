/// `.oiSH` encoder

use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::descriptor::ShaderDescriptor;
use crate::codec::records::*;

/// De-duplicated string table; index 0 is the shader name
#[derive(Default)]
struct StringTable {
    strings: Vec<String>,
    lookup: FxHashMap<String, u32>,
}

impl StringTable {
    fn intern(&mut self, value: &str) -> u32 {
        if let Some(&index) = self.lookup.get(value) {
            return index;
        }
        let index = self.strings.len() as u32;
        self.strings.push(value.to_string());
        self.lookup.insert(value.to_string(), index);
        index
    }

    fn write(&self, out: &mut Vec<u8>) -> Result<()> {
        for value in &self.strings {
            let len = u16::try_from(value.len()).map_err(|_| {
                Error::MalformedDescriptor(format!("name '{}...' is longer than {} bytes",
                    value.chars().take(16).collect::<String>(), u16::MAX))
            })?;
            out.extend_from_slice(&len.to_le_bytes());
            out.extend_from_slice(value.as_bytes());
        }
        Ok(())
    }
}

fn count(what: &str, len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| Error::MalformedDescriptor(format!("too many {}: {}", what, len)))
}

fn push<T: LeRecord>(out: &mut Vec<u8>, record: T) {
    out.extend_from_slice(bytemuck::bytes_of(&record.swap_le()));
}

/// Encode a descriptor into `.oiSH` bytes
pub fn write(descriptor: &ShaderDescriptor) -> Result<Vec<u8>> {
    encode(descriptor).map_err(|e| crate::oish_err!("oish::codec", e))
}

fn encode(descriptor: &ShaderDescriptor) -> Result<Vec<u8>> {
    let mut strings = StringTable::default();
    strings.intern(&descriptor.name);

    let mut stages = Vec::with_capacity(descriptor.stages.len());
    let mut code_size = 0u32;
    for blob in &descriptor.stages {
        let code_len = count("code bytes", blob.code.len())?;
        code_size = code_size.checked_add(code_len)
            .ok_or_else(|| Error::MalformedDescriptor("stage code exceeds 4 GiB".to_string()))?;
        stages.push(StageRecord { kind: blob.stage as u8, code_len, ..Default::default() });
    }

    let sections: Vec<SectionRecord> = descriptor.sections.iter()
        .map(|s| SectionRecord { stride: s.stride, per_instance: s.per_instance as u8, ..Default::default() })
        .collect();

    let mut attributes = Vec::with_capacity(descriptor.attributes.len());
    for attribute in &descriptor.attributes {
        if attribute.buffer as usize >= sections.len() {
            return Err(Error::MalformedDescriptor(format!(
                "attribute '{}' references missing section {}", attribute.name, attribute.buffer)));
        }
        let section = u16::try_from(attribute.buffer)
            .map_err(|_| Error::MalformedDescriptor(format!("section index {} too large", attribute.buffer)))?;
        attributes.push(AttributeRecord {
            name: strings.intern(&attribute.name),
            offset: attribute.offset,
            format: attribute.format as u16,
            section,
            location: attribute.location,
        });
    }

    let outputs: Vec<OutputRecord> = descriptor.outputs.iter()
        .map(|o| OutputRecord {
            name: strings.intern(&o.name),
            format: o.format as u16,
            pad: 0,
            location: o.location,
        })
        .collect();

    let mut registers = Vec::with_capacity(descriptor.registers.len());
    for (index, register) in descriptor.registers.iter().enumerate() {
        if register.binding as usize != index {
            return Err(Error::MalformedDescriptor(format!(
                "register '{}' has binding {} but is stored at {}", register.name, register.binding, index)));
        }
        registers.push(RegisterRecord {
            name: strings.intern(&register.name),
            kind: register.kind as u8,
            access: register.access.bits(),
            pad: 0,
        });
    }

    let mut buffers = Vec::with_capacity(descriptor.buffers.len());
    let mut elements = Vec::new();
    for layout in descriptor.buffers.values() {
        let first_element = count("buffer elements", elements.len())?;
        if layout.elements.first().map(|root| root.parent) != Some(None) {
            return Err(Error::MalformedDescriptor(format!("buffer '{}' has no root element", layout.name)));
        }
        for (index, element) in layout.elements.iter().enumerate() {
            let parent = match element.parent {
                None if index > 0 => {
                    return Err(Error::MalformedDescriptor(format!(
                        "element '{}' of '{}' has no parent", element.name, layout.name)));
                }
                Some(parent) if parent as usize >= layout.elements.len() => {
                    return Err(Error::MalformedDescriptor(format!(
                        "element '{}' of '{}' has a dangling parent", element.name, layout.name)));
                }
                Some(parent) => parent,
                None => NO_PARENT,
            };
            elements.push(ElementRecord {
                name: strings.intern(&element.name),
                offset: element.offset,
                array_size: element.array_size,
                length: element.length,
                format: element.format as u16,
                pad: 0,
                parent,
            });
        }
        buffers.push(BufferRecord {
            name: strings.intern(&layout.name),
            binding: layout.binding,
            size: layout.size,
            first_element,
            element_count: count("buffer elements", layout.elements.len())?,
            kind: layout.kind as u8,
            allocate: layout.allocate as u8,
            pad: 0,
        });
    }

    let header = Header {
        magic: MAGIC,
        version: VERSION,
        string_count: count("strings", strings.strings.len())?,
        stage_count: count("stages", stages.len())?,
        section_count: count("sections", sections.len())?,
        attribute_count: count("attributes", attributes.len())?,
        output_count: count("outputs", outputs.len())?,
        register_count: count("registers", registers.len())?,
        buffer_count: count("buffers", buffers.len())?,
        element_count: count("buffer elements", elements.len())?,
        code_size,
    };

    let mut out = Vec::new();
    push(&mut out, header);
    strings.write(&mut out)?;
    stages.into_iter().for_each(|r| push(&mut out, r));
    sections.into_iter().for_each(|r| push(&mut out, r));
    attributes.into_iter().for_each(|r| push(&mut out, r));
    outputs.into_iter().for_each(|r| push(&mut out, r));
    registers.into_iter().for_each(|r| push(&mut out, r));
    buffers.into_iter().for_each(|r| push(&mut out, r));
    elements.into_iter().for_each(|r| push(&mut out, r));
    for blob in &descriptor.stages {
        out.extend_from_slice(&blob.code);
    }

    Ok(out)
}
