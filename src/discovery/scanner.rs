//! File system scanner for discovering icon images.
//!
//! Recursively walks the manifest's source directories and collects every
//! `.png` file, remembering each file's path relative to its source root so
//! the output tree can mirror the input tree.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// An icon found during scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconFile {
    /// Absolute or base-relative path to the image.
    pub path: PathBuf,
    /// Path relative to the source directory it was found in.
    pub relative: PathBuf,
}

impl IconFile {
    /// Where this icon's processed version goes under `output_dir`.
    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(&self.relative)
    }
}

/// Check whether a path looks like a PNG icon.
pub fn is_icon(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}

/// Scan a directory for PNG icons.
///
/// Files under `skip` (normally the output directory) are ignored so a
/// second run never reprocesses its own results.
pub fn scan_directory(root: &Path, manifest: &Manifest, skip: Option<&Path>) -> Vec<IconFile> {
    let mut icons = Vec::new();

    if !root.exists() {
        return icons;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !entry.file_type().is_file() || !is_icon(path) {
            continue;
        }

        if skip.is_some_and(|s| path.starts_with(s)) {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();
        if manifest.is_excluded(&relative) {
            continue;
        }

        icons.push(IconFile {
            path: path.to_path_buf(),
            relative,
        });
    }

    icons
}

/// Scan every source listed in the manifest, resolved against `base_path`.
pub fn scan_sources(base_path: &Path, manifest: &Manifest) -> Vec<IconFile> {
    let output_dir = resolve(base_path, &manifest.output.to_string_lossy());

    manifest
        .effective_sources()
        .iter()
        .flat_map(|source| {
            let source_path = resolve(base_path, source);
            scan_directory(&source_path, manifest, Some(&output_dir))
        })
        .collect()
}

/// Resolve `path` against `base` unless it is already absolute.
pub fn resolve(base: &Path, path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        base.join(path)
    }
}
