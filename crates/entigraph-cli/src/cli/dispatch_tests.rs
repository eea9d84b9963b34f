use std::path::PathBuf;

use super::*;
use crate::cli::commands::{check_command, compile_command};
use crate::commands::compile::CompileArgs;

#[test]
fn compile_defaults() {
    let m = compile_command()
        .try_get_matches_from(["compile", "schema.json"])
        .unwrap();
    let params = CompileParams::from_matches(&m);

    assert_eq!(params.manifest_path, PathBuf::from("schema.json"));
    assert_eq!(params.output, None);
    assert!(params.descriptions);
    assert_eq!(params.color, ColorChoice::Auto);
    assert_eq!(params.private_prefix, '_');
    assert!(!params.allow_empty);
    assert!(!params.verbose);
}

#[test]
fn compile_all_flags() {
    let m = compile_command()
        .try_get_matches_from([
            "compile",
            "schema.json",
            "-o",
            "schema.graphql",
            "--no-descriptions",
            "--color",
            "always",
            "--private-prefix",
            "$",
            "--allow-empty",
            "-v",
        ])
        .unwrap();
    let params = CompileParams::from_matches(&m);

    assert_eq!(params.output, Some(PathBuf::from("schema.graphql")));
    assert!(!params.descriptions);
    assert_eq!(params.color, ColorChoice::Always);
    assert_eq!(params.private_prefix, '$');
    assert!(params.allow_empty);
    assert!(params.verbose);
}

#[test]
fn compile_to_file_is_never_colored() {
    let m = compile_command()
        .try_get_matches_from(["compile", "schema.json", "-o", "out.graphql", "--color", "always"])
        .unwrap();
    let args: CompileArgs = CompileParams::from_matches(&m).into();

    assert!(!args.color);
}

#[test]
fn compile_to_stdout_honors_color_flag() {
    let m = compile_command()
        .try_get_matches_from(["compile", "-", "--color", "always"])
        .unwrap();
    let args: CompileArgs = CompileParams::from_matches(&m).into();

    assert!(args.color);
    assert_eq!(args.manifest_path, PathBuf::from("-"));
}

#[test]
fn compile_requires_manifest() {
    let result = compile_command().try_get_matches_from(["compile"]);
    assert!(result.is_err());
}

#[test]
fn private_prefix_must_be_one_char() {
    let result = compile_command().try_get_matches_from([
        "compile",
        "schema.json",
        "--private-prefix",
        "__",
    ]);
    assert!(result.is_err());
}

#[test]
fn check_rejects_output_flags() {
    let result = check_command().try_get_matches_from(["check", "schema.json", "-o", "out"]);
    assert!(result.is_err());
}

#[test]
fn check_params() {
    let m = check_command()
        .try_get_matches_from(["check", "schema.json", "--allow-empty", "--verbose"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.manifest_path, PathBuf::from("schema.json"));
    assert!(params.allow_empty);
    assert!(params.verbose);
    assert_eq!(params.private_prefix, '_');
}

#[test]
fn cli_lists_subcommands() {
    let cli = build_cli();
    let names: Vec<_> = cli.get_subcommands().map(|c| c.get_name()).collect();
    assert_eq!(names, ["compile", "check"]);
}
