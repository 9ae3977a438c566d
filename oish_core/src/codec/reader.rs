/// `.oiSH` decoder

use std::collections::BTreeMap;
use crate::error::{Error, Result};
use crate::format::BufferFormat;
use crate::stage::{ShaderStage, ShaderStageFlags};
use crate::descriptor::{
    BufferElement, FragmentOutput, RegisterKind, ShaderBufferLayout, ShaderDescriptor,
    ShaderRegister, ShaderStageBlob, VertexAttribute, VertexSection,
};
use crate::codec::records::*;

fn malformed(message: impl Into<String>) -> Error {
    Error::MalformedDescriptor(message.into())
}

/// Bounds-checked view over the input bytes
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn take(&mut self, len: usize, what: &str) -> Result<&'a [u8]> {
        let end = self.pos.checked_add(len)
            .filter(|&end| end <= self.bytes.len())
            .ok_or_else(|| malformed(format!(
                "truncated {} at byte {} ({} bytes needed, {} left)",
                what, self.pos, len, self.bytes.len() - self.pos)))?;
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn record<T: LeRecord>(&mut self, what: &str) -> Result<T> {
        let bytes = self.take(std::mem::size_of::<T>(), what)?;
        Ok(bytemuck::pod_read_unaligned::<T>(bytes).swap_le())
    }

    fn records<T: LeRecord>(&mut self, count: u32, what: &str) -> Result<Vec<T>> {
        // Reject absurd counts before allocating
        let needed = (count as usize).saturating_mul(std::mem::size_of::<T>());
        if needed > self.remaining() {
            return Err(malformed(format!("{} {} do not fit in {} remaining bytes",
                count, what, self.remaining())));
        }
        (0..count).map(|_| self.record(what)).collect()
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }
}

struct Strings(Vec<String>);

impl Strings {
    fn read(cursor: &mut Cursor<'_>, count: u32) -> Result<Self> {
        // Each string needs at least its length prefix
        if (count as usize).saturating_mul(2) > cursor.remaining() {
            return Err(malformed(format!("{} strings do not fit in the file", count)));
        }
        let mut strings = Vec::with_capacity(count as usize);
        for index in 0..count {
            let len = cursor.take(2, "string length")?;
            let len = u16::from_le_bytes([len[0], len[1]]) as usize;
            let bytes = cursor.take(len, "string")?;
            let value = std::str::from_utf8(bytes)
                .map_err(|e| malformed(format!("string {} is not UTF-8: {}", index, e)))?;
            strings.push(value.to_string());
        }
        Ok(Self(strings))
    }

    fn get(&self, index: u32) -> Result<String> {
        self.0.get(index as usize)
            .cloned()
            .ok_or_else(|| malformed(format!("string index {} out of range ({} strings)", index, self.0.len())))
    }
}

fn format(value: u16) -> Result<BufferFormat> {
    BufferFormat::from_u16(value).ok_or_else(|| malformed(format!("unknown buffer format {}", value)))
}

fn register_kind(value: u8) -> Result<RegisterKind> {
    RegisterKind::from_u8(value).ok_or_else(|| malformed(format!("unknown register kind {}", value)))
}

fn flag(value: u8, what: &str) -> Result<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(malformed(format!("{} flag has value {}", what, value))),
    }
}

/// Decode `.oiSH` bytes into a descriptor
pub fn read(bytes: &[u8]) -> Result<ShaderDescriptor> {
    decode(bytes).map_err(|e| crate::oish_err!("oish::codec", e))
}

fn decode(bytes: &[u8]) -> Result<ShaderDescriptor> {
    let mut cursor = Cursor::new(bytes);
    let header: Header = cursor.record("header")?;

    if header.magic != MAGIC {
        return Err(malformed(format!("bad magic {:02x?}", header.magic.to_le_bytes())));
    }
    if header.version != VERSION {
        return Err(malformed(format!("unsupported version {} (expected {})", header.version, VERSION)));
    }
    if header.string_count == 0 {
        return Err(malformed("missing shader name"));
    }

    let strings = Strings::read(&mut cursor, header.string_count)?;
    let stage_records: Vec<StageRecord> = cursor.records(header.stage_count, "stage records")?;
    let section_records: Vec<SectionRecord> = cursor.records(header.section_count, "section records")?;
    let attribute_records: Vec<AttributeRecord> = cursor.records(header.attribute_count, "attribute records")?;
    let output_records: Vec<OutputRecord> = cursor.records(header.output_count, "output records")?;
    let register_records: Vec<RegisterRecord> = cursor.records(header.register_count, "register records")?;
    let buffer_records: Vec<BufferRecord> = cursor.records(header.buffer_count, "buffer records")?;
    let element_records: Vec<ElementRecord> = cursor.records(header.element_count, "element records")?;

    if cursor.remaining() != header.code_size as usize {
        return Err(malformed(format!("code section is {} bytes but header declares {}",
            cursor.remaining(), header.code_size)));
    }

    let mut stages = Vec::with_capacity(stage_records.len());
    let mut seen = ShaderStageFlags::empty();
    for record in &stage_records {
        let stage = ShaderStage::from_u8(record.kind)
            .ok_or_else(|| malformed(format!("unknown stage kind {}", record.kind)))?;
        if seen.contains(stage.flags()) {
            return Err(malformed(format!("stage {:?} appears twice", stage)));
        }
        seen |= stage.flags();
        let code = cursor.take(record.code_len as usize, "stage code")?;
        stages.push(ShaderStageBlob { stage, code: code.to_vec() });
    }
    if cursor.remaining() != 0 {
        return Err(malformed(format!("{} trailing bytes after stage code", cursor.remaining())));
    }

    let sections = section_records.iter()
        .map(|r| Ok(VertexSection { stride: r.stride, per_instance: flag(r.per_instance, "per-instance")? }))
        .collect::<Result<Vec<_>>>()?;

    let mut attributes = Vec::with_capacity(attribute_records.len());
    for record in &attribute_records {
        if record.section as usize >= sections.len() {
            return Err(malformed(format!("attribute references missing section {}", record.section)));
        }
        attributes.push(VertexAttribute {
            name: strings.get(record.name)?,
            format: format(record.format)?,
            location: record.location,
            offset: record.offset,
            buffer: record.section as u32,
        });
    }

    let outputs = output_records.iter()
        .map(|r| Ok(FragmentOutput {
            name: strings.get(r.name)?,
            format: format(r.format)?,
            location: r.location,
        }))
        .collect::<Result<Vec<_>>>()?;

    let mut registers = Vec::with_capacity(register_records.len());
    for (binding, record) in register_records.iter().enumerate() {
        let access = ShaderStageFlags::from_bits(record.access)
            .ok_or_else(|| malformed(format!("register {} has invalid access mask {:#04x}", binding, record.access)))?;
        registers.push(ShaderRegister {
            binding: binding as u32,
            kind: register_kind(record.kind)?,
            access,
            name: strings.get(record.name)?,
        });
    }

    let mut buffers = BTreeMap::new();
    for record in &buffer_records {
        let name = strings.get(record.name)?;
        let first = record.first_element as usize;
        let records = first.checked_add(record.element_count as usize)
            .and_then(|end| element_records.get(first..end))
            .ok_or_else(|| malformed(format!("elements of buffer '{}' out of range", name)))?;

        // Element 0 is the root and the only element without a parent
        if records.first().map(|root| root.parent) != Some(NO_PARENT) {
            return Err(malformed(format!("buffer '{}' has no root element", name)));
        }

        let mut elements = Vec::with_capacity(records.len());
        for (index, element) in records.iter().enumerate() {
            let parent = match element.parent {
                NO_PARENT if index == 0 => None,
                NO_PARENT => return Err(malformed(format!(
                    "buffer '{}' has a second root at element {}", name, index))),
                parent if parent < record.element_count => Some(parent),
                parent => return Err(malformed(format!(
                    "element of buffer '{}' has parent {} out of range", name, parent))),
            };
            elements.push(BufferElement {
                name: strings.get(element.name)?,
                offset: element.offset,
                format: format(element.format)?,
                array_size: element.array_size,
                length: element.length,
                parent,
            });
        }

        let layout = ShaderBufferLayout {
            name: name.clone(),
            binding: record.binding,
            kind: register_kind(record.kind)?,
            size: record.size,
            allocate: flag(record.allocate, "allocate")?,
            elements,
        };
        if buffers.insert(name, layout).is_some() {
            return Err(malformed(format!("buffer '{}' appears twice", strings.get(record.name)?)));
        }
    }

    Ok(ShaderDescriptor {
        name: strings.get(0)?,
        stages,
        attributes,
        sections,
        outputs,
        registers,
        buffers,
    })
}
