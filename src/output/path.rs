//! Path display with forward slashes, relative to the scan root when possible.

use std::path::Path;

/// `path` relative to `root`, or as-is when it is not below `root`.
///
/// Returns `"."` when `path` equals `root`.
#[must_use]
pub fn display_path(path: &Path, root: Option<&Path>) -> String {
    let relative = root
        .and_then(|root| path.strip_prefix(root).ok())
        .unwrap_or(path);
    let result = normalize_separators(&relative.to_string_lossy());
    if result.is_empty() {
        ".".to_string()
    } else {
        result
    }
}

#[must_use]
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_to_root() {
        assert_eq!(
            display_path(Path::new("/music/Band/a.flac"), Some(Path::new("/music"))),
            "Band/a.flac"
        );
    }

    #[test]
    fn outside_root_is_unchanged() {
        assert_eq!(
            display_path(Path::new("/other/a.flac"), Some(Path::new("/music"))),
            "/other/a.flac"
        );
    }

    #[test]
    fn root_itself_is_dot() {
        assert_eq!(
            display_path(Path::new("/music"), Some(Path::new("/music"))),
            "."
        );
    }

    #[test]
    fn backslashes_become_slashes() {
        assert_eq!(normalize_separators(r"Band\Album\a.flac"), "Band/Album/a.flac");
    }
}
