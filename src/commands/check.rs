use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::{CheckArgs, Cli};
use crate::config::Config;
use crate::error::TagGuardError;
use crate::output::{
    ColorMode, JsonFormatter, OutputFormat, OutputFormatter, ScanProgress, TextFormatter,
};
use crate::scanner::{ScanObserver, ScanReport, Scanner};
use crate::tag::{GenericTag, RawTag, TagFormat};
use crate::{EXIT_CHECKS_FAILED, EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::{color_choice_to_mode, load_config, write_output};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

pub(crate) fn run_check_impl(args: &CheckArgs, cli: &Cli) -> crate::Result<i32> {
    // 1. Configuration, then command-line overrides
    let loaded = load_config(args.config.as_deref(), cli.no_config)?;
    let mut config = loaded.config;
    apply_cli_overrides(&mut config, args);

    // 2. Resolve the scan root
    let root = resolve_root(&args.path)?;
    let scan_config = config.scan_config(&root)?;

    // 3. Scan
    let scanner = Scanner::default();
    let progress = ScanProgress::new(cli.quiet);
    let mut report = ScanReport::new();
    let completed = {
        let mut observer = ProgressObserver {
            inner: &mut report,
            progress: &progress,
        };
        scanner.scan(Some(&scan_config), Some(&mut observer))
    };
    progress.finish();
    if !completed {
        return Err(TagGuardError::Config(format!(
            "Scan root does not exist: {}",
            root.display()
        )));
    }
    info!(
        files = report.outcomes.len(),
        failed = report.failed_count(),
        "scan finished"
    );

    // 4. Report
    let display_root = display_root(&root);
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(args.format, &report, color_mode, cli.verbose, &display_root)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(check_exit_code(&report, args.strict))
}

/// Command-line flags win over the loaded configuration.
pub(crate) fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(recursive) = args.recursive_override() {
        config.scan.recursive = recursive;
    }
    if let Some(filter) = &args.filter {
        config.scan.filter = Some(filter.clone());
    }
    if let Some(scope) = args.filter_scope {
        config.scan.filter_scope = scope;
    }
    for kind in &args.disable {
        config.validators.set_enabled(*kind, false);
    }
}

fn resolve_root(path: &Path) -> crate::Result<PathBuf> {
    dunce::canonicalize(path).map_err(|source| TagGuardError::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}

/// Directory that reported paths are shown relative to.
fn display_root(root: &Path) -> PathBuf {
    if root.is_file() {
        root.parent().map_or_else(PathBuf::new, Path::to_path_buf)
    } else {
        root.to_path_buf()
    }
}

pub(crate) fn format_output(
    format: OutputFormat,
    report: &ScanReport,
    color_mode: ColorMode,
    verbose: u8,
    root: &Path,
) -> crate::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose)
            .with_root(root)
            .format(report),
        OutputFormat::Json => JsonFormatter::new().with_root(root).format(report),
    }
}

/// `1` when any file failed its checks, or with `strict` when any file was
/// left unprocessed.
#[must_use]
pub fn check_exit_code(report: &ScanReport, strict: bool) -> i32 {
    if report.has_failures() || (strict && report.unprocessed_count() > 0) {
        EXIT_CHECKS_FAILED
    } else {
        EXIT_SUCCESS
    }
}

/// Forwards every outcome to the report and ticks the spinner.
struct ProgressObserver<'a> {
    inner: &'a mut ScanReport,
    progress: &'a ScanProgress,
}

impl ProgressObserver<'_> {
    fn tick(&self, path: &Path) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.progress.inc(&name);
    }
}

impl ScanObserver for ProgressObserver<'_> {
    fn unsupported_extension(&mut self, path: &Path) {
        self.tick(path);
        self.inner.unsupported_extension(path);
    }

    fn not_readable(&mut self, path: &Path, error: &TagGuardError) {
        self.tick(path);
        self.inner.not_readable(path, error);
    }

    fn no_tag(&mut self, path: &Path) {
        self.tick(path);
        self.inner.no_tag(path);
    }

    fn tag_not_converted(&mut self, path: &Path, raw: &RawTag) {
        self.tick(path);
        self.inner.tag_not_converted(path, raw);
    }

    fn checks_failed(&mut self, tag: GenericTag) {
        self.tick(tag.backing_path());
        self.inner.checks_failed(tag);
    }

    fn checks_passed(&mut self, tag: GenericTag) {
        self.tick(tag.backing_path());
        self.inner.checks_passed(tag);
    }

    fn unknown_field_names(&mut self, format: TagFormat, names: &BTreeSet<String>) {
        self.inner.unknown_field_names(format, names);
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
