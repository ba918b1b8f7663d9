//! `iconfx init`: write a starter `iconfx.yaml`.
//!
//! Directories that already hold icons become the manifest's `sources`.
//! The effects block starts with a single outline and the other effects
//! commented out.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{scan_directory, IconFile, Manifest, MANIFEST_FILENAME};
use crate::error::{IconError, Result};
use crate::output::{display_path, plural, Printer};

/// Initialize an iconfx project by generating an iconfx.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Replace an existing iconfx.yaml
    #[arg(long)]
    pub force: bool,
}

const EFFECTS_TEMPLATE: &str = "\
effects:
  # padding: 14
  # remove_partial_transparency: true
  # opacity_threshold: 128
  # brightness: -20
  outline: \"2px #000000\"
";

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let target = args.path.join(MANIFEST_FILENAME);
    if target.exists() && !args.force {
        return Err(IconError::AlreadyExists { path: target });
    }

    let defaults = Manifest::default();
    let icons = scan_directory(&args.path, &defaults, Some(&args.path.join(&defaults.output)));
    let sources = source_dirs(&icons);
    log::debug!("init found {} icon(s) in {} dir(s)", icons.len(), sources.len());

    let yaml = render_manifest(&sources, &defaults.output);
    fs::write(&target, yaml).map_err(|e| IconError::Io {
        path: target.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    if !sources.is_empty() {
        let listed: Vec<&str> = sources.iter().map(String::as_str).collect();
        printer.info("Sources", &listed.join(", "));
    }
    printer.success(
        "Created",
        &format!("{} ({})", display_path(&target), plural(icons.len(), "icon", "icons")),
    );

    Ok(())
}

/// Parent directory of every icon as a `dir/` entry; `.` for the root.
fn source_dirs(icons: &[IconFile]) -> BTreeSet<String> {
    icons
        .iter()
        .map(|icon| match icon.relative.parent() {
            Some(parent) if parent != Path::new("") => {
                format!("{}/", parent.display()).replace('\\', "/")
            }
            _ => ".".to_string(),
        })
        .collect()
}

fn render_manifest(sources: &BTreeSet<String>, output: &Path) -> String {
    let mut yaml = String::new();

    // Only the root: the default source list already covers it
    let root_only = sources.iter().all(|s| s == ".");
    if !root_only {
        yaml.push_str("sources:\n");
        yaml.extend(sources.iter().map(|s| format!("  - \"{}\"\n", s)));
    }

    yaml.push_str(&format!("output: {}\n", output.display()));
    yaml.push_str(EFFECTS_TEMPLATE);
    yaml
}
