use std::fs;

use crate::cli::InitArgs;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, TagGuardError};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes the commented default configuration to `args.output`.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(TagGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

/// Every setting at its default value, with comments.
#[must_use]
pub fn generate_config_template() -> String {
    r#"# tag-guard configuration file
#
# Looked up as .tag-guard.toml in the current directory, then as
# config.toml in the per-user configuration directory.

[scan]
# Descend into subdirectories of the scan root (default: true)
recursive = true

# Regex over file names; files that do not match are skipped
# filter = '\.(flac|mp3)$'

# Where the filter applies: "every-directory" or "root-only"
filter_scope = "every-directory"

[validators]
# Artwork, missing fields, whitespace, disc/track/year formats
basic = true

# <artist>/<album>/<disc><track> - <title>.<ext> layout
filename = true

# Values exactly 30 characters long in ID3v1-era tags
truncation = true

# Characters outside printable ASCII
unwanted_characters = true
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
