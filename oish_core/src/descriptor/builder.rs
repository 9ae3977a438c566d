/// ShaderDescriptorBuilder - folds reflected stages into one ShaderDescriptor
///
/// Stages are added one at a time, in input order:
/// - vertex stage inputs become attributes grouped into sections
/// - fragment stage outputs become fragment outputs
/// - every stage's resources are merged into registers and buffer layouts

use std::collections::BTreeMap;
use crate::error::{Error, Result};
use crate::reflection::{ReflectedResource, ReflectedStage, ReflectedVariable};
use crate::stage::{ShaderStage, ShaderStageFlags};
use crate::descriptor::{
    BufferSlot, FragmentOutput, RegisterKind, RegisterTable, SectionTable,
    ShaderBufferLayout, ShaderDescriptor, ShaderStageBlob, VertexAttribute,
    split_allocate_suffix,
};

/// Incremental builder for a `ShaderDescriptor`
#[derive(Debug)]
pub struct ShaderDescriptorBuilder {
    name: String,
    stages: Vec<ShaderStageBlob>,
    seen: ShaderStageFlags,
    attributes: Vec<(BufferSlot, VertexAttribute)>,
    sections: SectionTable,
    outputs: Vec<FragmentOutput>,
    registers: RegisterTable,
    buffers: BTreeMap<String, ShaderBufferLayout>,
}

impl ShaderDescriptorBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stages: Vec::new(),
            seen: ShaderStageFlags::empty(),
            attributes: Vec::new(),
            sections: SectionTable::new(),
            outputs: Vec::new(),
            registers: RegisterTable::new(),
            buffers: BTreeMap::new(),
        }
    }

    /// Add one reflected stage and its optimized bytecode
    pub fn add_stage(&mut self, stage: ShaderStage, reflection: &ReflectedStage, code: Vec<u8>) -> Result<()> {
        if self.seen.contains(stage.flags()) {
            crate::oish_bail!("oish::descriptor", Error::DuplicateStage(stage));
        }

        crate::oish_debug!("oish::descriptor", "{:?} stage: {} inputs, {} outputs, {} resources",
            stage, reflection.inputs.len(), reflection.outputs.len(), reflection.resources.len());

        match stage {
            ShaderStage::Vertex => self.add_vertex_inputs(&reflection.inputs)?,
            ShaderStage::Fragment => self.add_fragment_outputs(&reflection.outputs),
            _ => {}
        }

        for resource in &reflection.resources {
            self.add_resource(stage, resource)?;
        }

        self.seen |= stage.flags();
        self.stages.push(ShaderStageBlob { stage, code });
        Ok(())
    }

    fn add_vertex_inputs(&mut self, inputs: &[ReflectedVariable]) -> Result<()> {
        let mut inputs: Vec<&ReflectedVariable> = inputs.iter().collect();
        inputs.sort_by_key(|input| input.location);

        for input in inputs {
            let (slot, name) = BufferSlot::parse(&input.name);
            let format = input.ty.format();
            if format.is_undefined() {
                crate::oish_warn!("oish::sections",
                    "Vertex input '{}' has no attribute format", input.name);
            }

            let size = format.size_bytes() * input.ty.columns() * input.ty.array_len();
            let offset = self.sections.push(slot, size)?;

            crate::oish_trace!("oish::sections", "Attribute '{}' -> {:?} offset {} ({} bytes)",
                name, slot, offset, size);

            self.attributes.push((slot, VertexAttribute {
                name: name.to_string(),
                format,
                location: input.location,
                offset,
                buffer: 0,
            }));
        }
        Ok(())
    }

    fn add_fragment_outputs(&mut self, outputs: &[ReflectedVariable]) {
        self.outputs.extend(outputs.iter().map(|output| FragmentOutput {
            name: output.name.clone(),
            format: output.ty.format(),
            location: output.location,
        }));
        self.outputs.sort_by_key(|output| output.location);
    }

    fn add_resource(&mut self, stage: ShaderStage, resource: &ReflectedResource) -> Result<()> {
        let kind = RegisterKind::from(resource.kind);
        if resource.set != 0 {
            crate::oish_debug!("oish::registers",
                "'{}' is in descriptor set {}; registers are keyed by binding only",
                resource.name, resource.set);
        }

        self.registers.merge(resource.binding, kind, stage.flags(), &resource.name)?;

        if !kind.is_buffer() {
            return Ok(());
        }

        let (name, _) = split_allocate_suffix(&resource.name);
        if self.buffers.contains_key(name) {
            return Ok(());
        }

        let Some(block) = resource.ty.as_struct() else {
            crate::oish_bail!("oish::buffers", Error::UnsupportedResource(format!(
                "buffer '{}' at binding {} has no struct type", resource.name, resource.binding
            )));
        };

        let layout = ShaderBufferLayout::from_struct(&resource.name, resource.binding, kind, block);
        self.buffers.insert(layout.name.clone(), layout);
        Ok(())
    }

    /// Finish the run: renumber sections and densify registers
    pub fn build(self) -> Result<ShaderDescriptor> {
        let (sections, remap) = self.sections.finish();

        // Every attribute slot went through `SectionTable::push`, so it is in `remap`
        let attributes = self.attributes
            .into_iter()
            .map(|(slot, attribute)| VertexAttribute { buffer: remap[&slot], ..attribute })
            .collect();

        let descriptor = ShaderDescriptor {
            name: self.name,
            stages: self.stages,
            attributes,
            sections,
            outputs: self.outputs,
            registers: self.registers.into_dense(),
            buffers: self.buffers,
        };

        crate::oish_debug!("oish::descriptor",
            "'{}': {} stages, {} attributes in {} sections, {} outputs, {} registers, {} buffers",
            descriptor.name, descriptor.stages.len(), descriptor.attributes.len(),
            descriptor.sections.len(), descriptor.outputs.len(), descriptor.registers.len(),
            descriptor.buffers.len());

        Ok(descriptor)
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
