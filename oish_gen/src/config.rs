/// Generator configuration

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use oish_core::oish::{Error, Result};
use oish_core::oish::codec::EXTENSION;
use oish_core::oish::log::LogSeverity;
use oish_core::oish::stage::{ShaderStage, ShaderStageFlags};
use crate::cli::Cli;

/// Settings for one conversion run
#[derive(Debug, Clone, PartialEq)]
pub struct GenConfig {
    /// Shader path without stage extension
    pub input: PathBuf,
    /// Logical shader name stored in the output
    pub shader_name: String,
    /// Stages to convert, in command line order
    pub stages: Vec<ShaderStage>,
    /// Destination `.oiSH` file
    pub output: PathBuf,
    /// Minimum severity forwarded to the logger
    pub min_severity: LogSeverity,
}

impl GenConfig {
    /// Configuration with the default output path (`<input>.oiSH`)
    pub fn new<S: AsRef<str>>(
        input: impl Into<PathBuf>,
        shader_name: impl Into<String>,
        stages: &[S],
    ) -> Result<Self> {
        let input = input.into();
        Ok(Self {
            output: default_output(&input),
            stages: resolve_stages(stages)?,
            input,
            shader_name: shader_name.into(),
            min_severity: LogSeverity::Info,
        })
    }

    /// Configuration from parsed command line arguments
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Self::new(cli.path.clone(), cli.shader_name.clone(), cli.stages.as_slice())?
            .with_min_severity(cli.min_severity());
        Ok(match &cli.output {
            Some(output) => config.with_output(output.clone()),
            None => config,
        })
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_min_severity(mut self, severity: LogSeverity) -> Self {
        self.min_severity = severity;
        self
    }
}

fn default_output(input: &Path) -> PathBuf {
    let mut path = OsString::from(input.as_os_str());
    path.push(".");
    path.push(EXTENSION);
    PathBuf::from(path)
}

fn resolve_stages<S: AsRef<str>>(extensions: &[S]) -> Result<Vec<ShaderStage>> {
    if extensions.is_empty() {
        oish_core::oish_bail!("oish::gen", Error::Usage("at least one stage extension is required".to_string()));
    }

    let mut seen = ShaderStageFlags::empty();
    let mut stages = Vec::with_capacity(extensions.len());
    for ext in extensions {
        let stage = ShaderStage::from_extension(ext.as_ref())
            .map_err(|e| oish_core::oish_err!("oish::gen", e))?;
        if seen.contains(stage.flags()) {
            oish_core::oish_bail!("oish::gen", Error::DuplicateStage(stage));
        }
        seen |= stage.flags();
        stages.push(stage);
    }
    Ok(stages)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
