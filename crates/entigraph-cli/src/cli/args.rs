//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so `compile` and `check` can share
//! definitions.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Manifest file, or `-` for stdin (positional).
pub fn manifest_path_arg() -> Arg {
    Arg::new("manifest_path")
        .value_name("MANIFEST")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Declaration manifest (JSON), or - for stdin")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Omit descriptions from the printed schema (--no-descriptions).
pub fn no_descriptions_arg() -> Arg {
    Arg::new("no_descriptions")
        .long("no-descriptions")
        .action(ArgAction::SetTrue)
        .help("Omit type and field descriptions")
}

/// Namespace key prefix marking private exports (--private-prefix).
pub fn private_prefix_arg() -> Arg {
    Arg::new("private_prefix")
        .long("private-prefix")
        .value_name("CHAR")
        .default_value("_")
        .value_parser(value_parser!(char))
        .help("Skip namespace keys starting with this character")
}

/// Accept types without fields (--allow-empty).
pub fn allow_empty_arg() -> Arg {
    Arg::new("allow_empty")
        .long("allow-empty")
        .action(ArgAction::SetTrue)
        .help("Accept object and input types without fields")
}

/// Debug logging (-v/--verbose).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::SetTrue)
        .help("Log compilation progress to stderr (RUST_LOG overrides)")
}
