/*!
# oiSH core

Platform-agnostic model of a reflected shader and its `.oiSH` container.

Compiled stages are reflected by a `Reflector` backend (the generator crate
provides one on top of spirq), then folded into a single `ShaderDescriptor`:

- **Vertex attributes** grouped into per-vertex and per-instance sections
- **Fragment outputs** with their formats and locations
- **Registers** merged across every stage by binding
- **Buffer layouts** flattened from uniform and storage block types

The descriptor is serialized with `codec::write` and read back with `codec::read`.
*/

// Internal modules
mod error;
mod console;
mod format;
mod stage;
mod reflection;
pub mod log;
pub mod descriptor;
pub mod codec;

// Main oish namespace module
pub mod oish {
    // Error types
    pub use crate::error::{Error, Result};

    // Console singleton
    pub use crate::console::Console;

    // Logging sub-module (types only, macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Descriptor records and builder
    pub mod descriptor {
        pub use crate::descriptor::*;
    }

    // Attribute and element formats
    pub mod format {
        pub use crate::format::{BufferFormat, ScalarKind};
    }

    // Shader stages and access masks
    pub mod stage {
        pub use crate::stage::{ShaderStage, ShaderStageFlags};
    }

    // Backend-independent reflection data
    pub mod reflect {
        pub use crate::reflection::*;
    }

    // `.oiSH` container
    pub mod codec {
        pub use crate::codec::{read, write, EXTENSION};
    }
}
