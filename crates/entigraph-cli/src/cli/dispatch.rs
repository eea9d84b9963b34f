//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::compile::CompileArgs;

pub struct CompileParams {
    pub manifest_path: PathBuf,
    pub output: Option<PathBuf>,
    pub descriptions: bool,
    pub color: ColorChoice,
    pub private_prefix: char,
    pub allow_empty: bool,
    pub verbose: bool,
}

impl CompileParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            manifest_path: manifest_path(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            descriptions: !m.get_flag("no_descriptions"),
            color: parse_color(m),
            private_prefix: private_prefix(m),
            allow_empty: m.get_flag("allow_empty"),
            verbose: m.get_flag("verbose"),
        }
    }
}

impl From<CompileParams> for CompileArgs {
    fn from(p: CompileParams) -> Self {
        // Files never get escape codes
        let color = p.output.is_none() && p.color.should_colorize();
        Self {
            manifest_path: p.manifest_path,
            output: p.output,
            descriptions: p.descriptions,
            color,
            private_prefix: p.private_prefix,
            allow_empty: p.allow_empty,
        }
    }
}

pub struct CheckParams {
    pub manifest_path: PathBuf,
    pub private_prefix: char,
    pub allow_empty: bool,
    pub verbose: bool,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            manifest_path: manifest_path(m),
            private_prefix: private_prefix(m),
            allow_empty: m.get_flag("allow_empty"),
            verbose: m.get_flag("verbose"),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            manifest_path: p.manifest_path,
            private_prefix: p.private_prefix,
            allow_empty: p.allow_empty,
        }
    }
}

fn manifest_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("manifest_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

fn private_prefix(m: &ArgMatches) -> char {
    m.get_one::<char>("private_prefix").copied().unwrap_or('_')
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
