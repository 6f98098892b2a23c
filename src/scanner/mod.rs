//! Scan orchestration: walk the tree, read, convert, validate, report.

mod filter;
mod observer;
mod types;

pub use filter::{FileFilter, RegexFilter};
pub use observer::{FileOutcome, ScanObserver, ScanReport};
pub use types::{FilterScope, ScanConfig};

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::converter::{Conversion, TagConverter, default_converters};
use crate::reader::{LoftyTagReader, TagReader};
use crate::tag::{GenericTag, RawTag};
use crate::validator::{Validator, default_validators};

/// Runs the read → convert → validate pipeline over a directory tree.
///
/// The walk is single-threaded and depth-first with siblings in name order.
/// Only the cancellation flag may be touched from another thread.
pub struct Scanner {
    reader: Box<dyn TagReader>,
    converters: Vec<Box<dyn TagConverter>>,
    validators: Vec<Box<dyn Validator>>,
    cancelled: Arc<AtomicBool>,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(
            Box::new(LoftyTagReader),
            default_converters(),
            default_validators(),
        )
    }
}

impl Scanner {
    #[must_use]
    pub fn new(
        reader: Box<dyn TagReader>,
        converters: Vec<Box<dyn TagConverter>>,
        validators: Vec<Box<dyn Validator>>,
    ) -> Self {
        Self {
            reader,
            converters,
            validators,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Shared flag; storing `true` stops the walk at the next entry.
    #[must_use]
    pub fn cancellation_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Scan `config.root`, reporting every visited file to `observer`.
    ///
    /// Returns `false` without visiting anything when either argument is
    /// missing or the root does not exist, `true` otherwise, however many
    /// files failed.
    pub fn scan(
        &self,
        config: Option<&ScanConfig>,
        observer: Option<&mut dyn ScanObserver>,
    ) -> bool {
        let (Some(config), Some(observer)) = (config, observer) else {
            warn!("scan requested without configuration or observer");
            return false;
        };
        if !config.root.exists() {
            warn!(root = %config.root.display(), "scan root does not exist");
            return false;
        }

        info!(
            root = %config.root.display(),
            recursive = config.recursive,
            "starting scan"
        );
        let max_depth = if config.recursive { usize::MAX } else { 1 };
        let walker = WalkDir::new(&config.root)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.file_type().is_dir() || config.accepts_file(entry.path(), entry.depth())
            });

        for entry in walker {
            if self.is_cancelled() {
                info!("scan cancelled");
                break;
            }
            match entry {
                Ok(entry) if entry.file_type().is_dir() => {
                    debug!(dir = %entry.path().display(), "entering directory");
                }
                Ok(entry) => self.process_file(config, entry.path(), observer),
                Err(e) => warn!(error = %e, "skipping unreadable entry"),
            }
        }
        true
    }

    /// Run one file through the pipeline and report its outcome.
    pub fn process_file(
        &self,
        config: &ScanConfig,
        path: &Path,
        observer: &mut dyn ScanObserver,
    ) {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        if !self.reader.supports_extension(extension) {
            observer.unsupported_extension(path);
            return;
        }

        let raw = match self.reader.read(path) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                observer.no_tag(path);
                return;
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "cannot read tag");
                observer.not_readable(path, &e);
                return;
            }
        };

        let mut tag = GenericTag::new(path);
        for format in &raw.source_formats {
            tag.add_source_format(*format);
        }
        tag.set_has_artwork(raw.has_artwork);

        let Some(conversion) = self.convert(&mut tag, &raw) else {
            observer.tag_not_converted(path, &raw);
            return;
        };
        if !conversion.unknown_field_names.is_empty() {
            debug!(
                path = %path.display(),
                format = %raw.format,
                names = ?conversion.unknown_field_names,
                "unknown field names"
            );
            observer.unknown_field_names(raw.format, &conversion.unknown_field_names);
        }

        for validator in &self.validators {
            if config.is_enabled(validator.kind()) {
                validator.validate(&mut tag);
            }
        }

        if tag.has_findings() {
            observer.checks_failed(tag);
        } else {
            observer.checks_passed(tag);
        }
    }

    fn convert(&self, tag: &mut GenericTag, raw: &RawTag) -> Option<Conversion> {
        self.converters
            .iter()
            .filter(|converter| converter.supports(raw.format))
            .find_map(|converter| match converter.convert(tag, raw) {
                Ok(conversion) => Some(conversion),
                Err(e) => {
                    debug!(converter = converter.name(), error = %e, "conversion failed");
                    None
                }
            })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
