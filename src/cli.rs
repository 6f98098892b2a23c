use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::LOCAL_CONFIG_NAME;
use crate::output::OutputFormat;
use crate::scanner::FilterScope;
use crate::validator::ValidatorKind;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "tag-guard")]
#[command(author, version, about = "Audio tag guard - check music metadata and file layout")]
#[command(long_about = "Normalizes the tags of FLAC, Ogg and MP3 files and checks their values \
    and the <artist>/<album>/<disc><track> - <title>.<ext> layout.\n\n\
    Exit codes:\n  \
    0 - All checks passed\n  \
    1 - Findings reported\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check the tags and paths of audio files
    Check(CheckArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Directory or file to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Descend into subdirectories (overrides config)
    #[arg(long, overrides_with = "no_recursive")]
    pub recursive: bool,

    /// Only scan the top directory (overrides config)
    #[arg(long, overrides_with = "recursive")]
    pub no_recursive: bool,

    /// Regex over file names; non-matching files are skipped (overrides config)
    #[arg(long)]
    pub filter: Option<String>,

    /// Where the filter applies [possible values: root-only, every-directory]
    #[arg(long)]
    pub filter_scope: Option<FilterScope>,

    /// Disable a validator [possible values: basic, filename, legacy-truncation, unwanted-characters]
    #[arg(long, short = 'd')]
    pub disable: Vec<ValidatorKind>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also fail (exit code 1) when a file could not be processed
    #[arg(long)]
    pub strict: bool,
}

impl CheckArgs {
    /// `Some(true)`/`Some(false)` when a recursion flag was given.
    #[must_use]
    pub const fn recursive_override(&self) -> Option<bool> {
        if self.recursive {
            Some(true)
        } else if self.no_recursive {
            Some(false)
        } else {
            None
        }
    }
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
