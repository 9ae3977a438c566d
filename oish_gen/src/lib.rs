/*!
# oiSH generator

Reflects compiled SPIR-V stages of one shader and writes the merged layout
description as a `.oiSH` file.

For `oish_gen shaders/basic basic .vert .frag` the generator reads
`shaders/basic.vert.spv` and `shaders/basic.frag.spv` for reflection,
stores `shaders/basic.vert.ospv` and `shaders/basic.frag.ospv` as the stage
bytecode, and writes `shaders/basic.oiSH`.
*/

// Generator modules
mod cli;
mod config;
mod convert;
mod spirq_reflector;

pub use cli::Cli;
pub use config::GenConfig;
pub use convert::{bytes_to_words, convert, load_bytecode, run, stage_path, write_descriptor};
pub use spirq_reflector::SpirqReflector;
