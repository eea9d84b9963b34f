//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Flags shared by every command that compiles a manifest.
fn with_compile_flags(cmd: Command) -> Command {
    cmd.arg(manifest_path_arg())
        .arg(private_prefix_arg())
        .arg(allow_empty_arg())
        .arg(verbose_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("entigraph")
        .about("Compile entity declarations into a typed schema")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(compile_command())
        .subcommand(check_command())
}

/// Compile a manifest and print the schema.
pub fn compile_command() -> Command {
    let cmd = Command::new("compile")
        .about("Compile a manifest and print the schema")
        .override_usage(
            "\
  entigraph compile <MANIFEST>
  entigraph compile <MANIFEST> -o <FILE>
  entigraph compile -",
        )
        .after_help(
            r#"EXAMPLES:
  entigraph compile schema.json                  # print SDL to stdout
  entigraph compile schema.json -o schema.graphql
  entigraph compile schema.json --no-descriptions
  cat schema.json | entigraph compile -          # read from stdin"#,
        )
        .arg(output_file_arg())
        .arg(no_descriptions_arg())
        .arg(color_arg());

    with_compile_flags(cmd)
}

/// Compile a manifest, reporting only errors.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a manifest")
        .override_usage(
            "\
  entigraph check <MANIFEST>
  entigraph check -",
        )
        .after_help(
            r#"EXAMPLES:
  entigraph check schema.json                    # silent on success
  entigraph check schema.json --allow-empty"#,
        );

    with_compile_flags(cmd)
}
