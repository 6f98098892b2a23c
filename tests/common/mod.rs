#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the tag-guard binary.
#[macro_export]
macro_rules! tag_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("tag-guard"))
    };
}

/// A temporary music library for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.tag-guard.toml` at the library root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".tag-guard.toml", content);
    }

    /// A file with an audio extension whose content no tag reader accepts.
    pub fn create_broken_audio(&self, relative_path: &str) {
        self.create_file(relative_path, "not really audio");
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Only top-level files, every validator except the filename check.
pub const SHALLOW_CONFIG: &str = r#"
[scan]
recursive = false

[validators]
filename = false
"#;
