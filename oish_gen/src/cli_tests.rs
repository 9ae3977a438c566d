use super::*;
use clap::error::ErrorKind;

#[test]
fn test_parse_positionals() {
    let cli = Cli::try_parse_from(["oish_gen", "shaders/basic", "basic", ".vert", ".frag"]).unwrap();

    assert_eq!(cli.path, PathBuf::from("shaders/basic"));
    assert_eq!(cli.shader_name, "basic");
    assert_eq!(cli.stages, [".vert", ".frag"]);
    assert_eq!(cli.output, None);
    assert_eq!(cli.min_severity(), LogSeverity::Info);
}

#[test]
fn test_missing_stage_is_usage_error() {
    let err = Cli::try_parse_from(["oish_gen", "shaders/basic", "basic"]).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_output_and_verbosity_flags() {
    let cli = Cli::try_parse_from(["oish_gen", "-v", "-o", "out/basic.oiSH", "s", "n", ".comp"]).unwrap();

    assert_eq!(cli.output, Some(PathBuf::from("out/basic.oiSH")));
    assert_eq!(cli.min_severity(), LogSeverity::Debug);

    let cli = Cli::try_parse_from(["oish_gen", "--quiet", "s", "n", ".comp"]).unwrap();
    assert_eq!(cli.min_severity(), LogSeverity::Warn);
}

#[test]
fn test_verbose_conflicts_with_quiet() {
    let err = Cli::try_parse_from(["oish_gen", "-v", "-q", "s", "n", ".vert"]).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
}
