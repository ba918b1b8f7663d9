//! Icon discovery for batch processing.
//!
//! Finds the `iconfx.yaml` manifest (falling back to defaults when there is
//! none) and every icon under the manifest's source directories.
//!
//! # Example
//!
//! ```ignore
//! use iconfx::discovery::discover;
//!
//! let result = discover("./icons")?;
//! println!("Found {} icons", result.icons.len());
//! ```

mod manifest;
mod scanner;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{IconError, Result};

pub use manifest::{EffectsConfig, Manifest};
pub use scanner::{is_icon, resolve, scan_directory, scan_sources, IconFile};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "iconfx.yaml";

/// Result of discovering icons in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no iconfx.yaml was found).
    pub manifest: Manifest,

    /// Whether an iconfx.yaml manifest was found.
    pub has_manifest: bool,

    /// Icons found under the manifest's sources.
    pub icons: Vec<IconFile>,
}

impl DiscoveryResult {
    /// Absolute output directory for this project.
    pub fn output_dir(&self) -> PathBuf {
        resolve(&self.root, &self.manifest.output.to_string_lossy())
    }
}

/// Discover icons under `root`, reading `root/iconfx.yaml` if it exists.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref();
    let manifest_path = root.join(MANIFEST_FILENAME);

    if manifest_path.exists() {
        discover_with_manifest(root, &manifest_path)
    } else {
        scan_with(root, Manifest::default(), false)
    }
}

/// Discover icons using an explicit manifest file.
///
/// Relative paths inside the manifest resolve against `root`.
pub fn discover_with_manifest(root: &Path, manifest_path: &Path) -> Result<DiscoveryResult> {
    let manifest = Manifest::load(manifest_path)?;
    scan_with(root, manifest, true)
}

fn scan_with(root: &Path, manifest: Manifest, has_manifest: bool) -> Result<DiscoveryResult> {
    let output_dir = resolve(root, &manifest.output.to_string_lossy());
    let icons = unique_outputs(scan_sources(root, &manifest), &output_dir)?;
    log::debug!(
        "discovered {} icon(s) under {}",
        icons.len(),
        root.display()
    );

    Ok(DiscoveryResult {
        root: root.to_path_buf(),
        manifest,
        has_manifest,
        icons,
    })
}

/// Drop icons found twice through overlapping sources, and reject two
/// different icons that map to the same output file.
fn unique_outputs(icons: Vec<IconFile>, output_dir: &Path) -> Result<Vec<IconFile>> {
    let mut claimed: BTreeMap<PathBuf, PathBuf> = BTreeMap::new();
    let mut unique = Vec::with_capacity(icons.len());

    for icon in icons {
        let output = icon.output_path(output_dir);
        match claimed.get(&output) {
            Some(first) if *first == icon.path => {
                log::debug!("{} listed by more than one source", icon.path.display());
            }
            Some(first) => {
                return Err(IconError::OutputCollision {
                    output,
                    first: first.clone(),
                    second: icon.path,
                });
            }
            None => {
                claimed.insert(output, icon.path.clone());
                unique.push(icon);
            }
        }
    }

    Ok(unique)
}
