/// Descriptor module - shader descriptor records and their assembly

// Module declarations
pub mod shader_descriptor;
pub mod vertex_input;
pub mod registers;
pub mod buffer_layout;
pub mod builder;

// Re-export everything from shader_descriptor.rs
pub use shader_descriptor::*;

// Re-export from other modules
pub use vertex_input::*;
pub use registers::*;
pub use buffer_layout::*;
pub use builder::*;
