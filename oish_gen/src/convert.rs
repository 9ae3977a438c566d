/// Conversion pipeline: SPIR-V files in, `.oiSH` file out

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use oish_core::oish::{Error, Result};
use oish_core::oish::codec;
use oish_core::oish::descriptor::{ShaderDescriptor, ShaderDescriptorBuilder};
use oish_core::oish::reflect::Reflector;
use oish_core::oish::stage::ShaderStage;
use crate::config::GenConfig;

/// SPIR-V magic number in host order
const SPIRV_MAGIC: u32 = 0x0723_0203;

/// Debug bytecode, used for reflection
pub const DEBUG_EXTENSION: &str = "spv";

/// Optimized bytecode, stored in the output
pub const OPTIMIZED_EXTENSION: &str = "ospv";

/// `<base><stage extension>.<kind>`, e.g. `shaders/basic.vert.spv`
pub fn stage_path(base: &Path, stage: ShaderStage, kind: &str) -> PathBuf {
    let mut path = OsString::from(base.as_os_str());
    path.push(stage.extension());
    path.push(".");
    path.push(kind);
    PathBuf::from(path)
}

/// Read a SPIR-V file, rejecting lengths that are not a multiple of 4
pub fn load_bytecode(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path).map_err(|e| oish_core::oish_err!("oish::gen", Error::io(path, e)))?;

    if bytes.len() % 4 != 0 {
        oish_core::oish_bail!("oish::gen", Error::MalformedBytecode {
            path: path.display().to_string(),
            size: bytes.len(),
        });
    }

    oish_core::oish_trace!("oish::gen", "Read {} ({} bytes)", path.display(), bytes.len());
    Ok(bytes)
}

/// Decode SPIR-V bytes into words, swapping big-endian modules
pub fn bytes_to_words(bytes: &[u8]) -> Vec<u32> {
    let mut words: Vec<u32> = bytes
        .chunks_exact(4)
        .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();

    if words.first() == Some(&SPIRV_MAGIC.swap_bytes()) {
        words.iter_mut().for_each(|word| *word = word.swap_bytes());
    }
    words
}

/// Reflect every configured stage and merge them into one descriptor
pub fn convert(config: &GenConfig, reflector: &dyn Reflector) -> Result<ShaderDescriptor> {
    let mut builder = ShaderDescriptorBuilder::new(config.shader_name.clone());

    for &stage in &config.stages {
        let debug_path = stage_path(&config.input, stage, DEBUG_EXTENSION);
        let words = bytes_to_words(&load_bytecode(&debug_path)?);
        let reflection = reflector.reflect(stage, &words)?;

        let optimized_path = stage_path(&config.input, stage, OPTIMIZED_EXTENSION);
        let code = load_bytecode(&optimized_path)?;

        builder.add_stage(stage, &reflection, code)?;
        oish_core::oish_debug!("oish::gen", "Reflected {:?} stage from {}", stage, debug_path.display());
    }

    builder.build()
}

/// Encode a descriptor and write it to `path`
pub fn write_descriptor(path: &Path, descriptor: &ShaderDescriptor) -> Result<()> {
    let bytes = codec::write(descriptor)?;
    fs::write(path, &bytes).map_err(|e| oish_core::oish_err!("oish::gen", Error::io(path, e)))
}

/// Run one conversion; nothing is written unless every stage succeeds
pub fn run(config: &GenConfig, reflector: &dyn Reflector) -> Result<ShaderDescriptor> {
    oish_core::oish_info!("oish::gen", "Converting '{}' ({} stages) from {}",
        config.shader_name, config.stages.len(), config.input.display());

    let descriptor = convert(config, reflector)?;
    write_descriptor(&config.output, &descriptor)?;

    oish_core::oish_info!("oish::gen", "Wrote {}: {} attributes, {} registers, {} buffers",
        config.output.display(), descriptor.attributes.len(),
        descriptor.registers.iter().filter(|r| !r.is_undefined()).count(),
        descriptor.buffers.len());

    Ok(descriptor)
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
