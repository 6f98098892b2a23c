use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to access file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid filter pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Failed to read audio file: {0}")]
    Lofty(#[from] lofty::error::LoftyError),

    #[error("Failed to read ID3v2 tag: {0}")]
    Id3(#[from] id3::Error),
}

impl TagGuardError {
    /// Short machine-readable kind, used by report formatters.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::FileAccess { .. } | Self::Io(_) => "io",
            Self::InvalidPattern { .. } => "pattern",
            Self::TomlParse(_) => "toml",
            Self::JsonSerialize(_) => "json",
            Self::Lofty(_) | Self::Id3(_) => "tag",
        }
    }
}

pub type Result<T> = std::result::Result<T, TagGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
