//! oish_gen - reflect SPIR-V stages into a `.oiSH` layout file
//!
//! Usage: oish_gen [OPTIONS] <PATH> <SHADER_NAME> <STAGES>...

use std::process::ExitCode;
use clap::Parser;
use oish_core::oish::{Console, Error};
use oish_gen::{run, Cli, GenConfig, SpirqReflector};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version print to stdout and are not failures
            if !err.use_stderr() {
                return ExitCode::SUCCESS;
            }
            oish_core::oish_error!("oish::gen", "{}",
                Error::Usage("oish_gen <PATH> <SHADER_NAME> <STAGES>...".to_string()));
            return ExitCode::FAILURE;
        }
    };

    Console::set_min_severity(cli.min_severity());

    let result = GenConfig::from_cli(&cli).and_then(|config| run(&config, &SpirqReflector::new()));
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
