/// Command line interface

use std::path::PathBuf;
use clap::Parser;
use oish_core::oish::log::LogSeverity;

/// Reflect SPIR-V shader stages into an oiSH layout file
#[derive(Debug, Clone, Parser)]
#[command(name = "oish_gen", version)]
pub struct Cli {
    /// Shader path without stage extension (e.g. `shaders/basic`)
    pub path: PathBuf,

    /// Logical shader name stored in the output
    pub shader_name: String,

    /// Stage extensions to read: .vert, .frag, .geom, .comp
    #[arg(required = true, num_args = 1..)]
    pub stages: Vec<String>,

    /// Output file (default: `<PATH>.oiSH`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log debug messages
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Minimum log severity selected by `--verbose` / `--quiet`
    pub fn min_severity(&self) -> LogSeverity {
        if self.verbose {
            LogSeverity::Debug
        } else if self.quiet {
            LogSeverity::Warn
        } else {
            LogSeverity::Info
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
