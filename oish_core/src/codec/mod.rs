/// Codec module - `.oiSH` binary container
///
/// The container stores a header with every table length, a de-duplicated
/// string table, fixed-size records per table and finally the stage bytecode.

mod records;
mod writer;
mod reader;

pub use writer::write;
pub use reader::read;

/// File extension of encoded descriptors
pub const EXTENSION: &str = "oiSH";

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
