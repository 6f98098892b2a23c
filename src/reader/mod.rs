//! Raw tag readers.
//!
//! A reader turns one audio file into a format-tagged [`RawTag`]; conversion
//! into the generic model happens later in [`crate::converter`].

mod audio;

pub use audio::{LoftyTagReader, SUPPORTED_EXTENSIONS};

use std::path::Path;

use crate::error::Result;
use crate::tag::RawTag;

pub trait TagReader {
    /// Whether files with this extension (without the dot) can be read.
    fn supports_extension(&self, extension: &str) -> bool;

    /// Read the raw tag of `path`.
    ///
    /// Returns `Ok(None)` when the file carries no tag at all.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or parsed.
    fn read(&self, path: &Path) -> Result<Option<RawTag>>;
}
