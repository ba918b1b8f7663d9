//! Batch command implementation.
//!
//! Applies the manifest's effects to every discovered icon. Icons are
//! independent, so they are processed in parallel; one failure does not
//! stop the others.

use std::path::PathBuf;

use clap::Args;
use rayon::prelude::*;

use crate::discovery::{discover, discover_with_manifest, MANIFEST_FILENAME};
use crate::effects::process_file;
use crate::error::{IconError, Result};
use crate::output::{display_path, plural, Printer};

/// Apply the manifest's effects to every icon in a project
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Manifest to use instead of <PATH>/iconfx.yaml
    #[arg(long, short)]
    pub manifest: Option<PathBuf>,
}

pub fn run(args: BatchArgs, printer: &Printer) -> Result<()> {
    let discovery = match &args.manifest {
        Some(manifest) => discover_with_manifest(&args.path, manifest)?,
        None => discover(&args.path)?,
    };

    if !discovery.has_manifest {
        printer.warning(
            "Missing",
            &format!("no {} found, using defaults", MANIFEST_FILENAME),
        );
    }

    let request = discovery.manifest.effects.to_request()?;
    if request.is_empty() {
        printer.info("Skipped", "no effects configured");
        return Ok(());
    }

    let total = discovery.icons.len();
    if total == 0 {
        printer.warning("Skipped", "no icons found");
        return Ok(());
    }

    printer.status(
        "Processing",
        &format!("{} ({})", plural(total, "icon", "icons"), request.summary().join(", ")),
    );

    let output_dir = discovery.output_dir();
    let results: Vec<_> = discovery
        .icons
        .par_iter()
        .map(|icon| {
            let destination = icon.output_path(&output_dir);
            let result = process_file(&icon.path, &destination, &request);
            (icon, destination, result)
        })
        .collect();

    let mut failed = 0;
    for (icon, destination, result) in &results {
        match result {
            Ok(_) => printer.status("Processed", &display_path(destination)),
            Err(e) => {
                failed += 1;
                log::debug!("{} failed: {:?}", icon.path.display(), e);
                printer.error("Failed", &format!("{}: {}", display_path(&icon.path), e));
            }
        }
    }

    if failed > 0 {
        return Err(IconError::Batch { failed, total });
    }

    printer.success(
        "Finished",
        &format!(
            "{} to {}",
            plural(total, "icon", "icons"),
            display_path(&output_dir)
        ),
    );

    Ok(())
}
