use crate::error::{Result, SplitError};
use crate::splitter::{FileSplitter, Layout};
use crate::unit::SourceUnit;
use serde::Serialize;
use std::path::Path;
use walkdir::WalkDir;

/// Tally of one batch run. The driver itself has no failure mode: every
/// per-file error is logged, counted and left behind.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct BatchSummary {
    pub processed: usize,
    pub skipped: usize,
}

/// Split `input` into `destination`, one file at a time.
///
/// A directory input is walked depth-first, every entry, no extension
/// filtering; each file's full pipeline (parse → classify → refine →
/// split) completes before the next file starts.
pub fn process_path(input: &Path, destination: &Path, layout: Layout) -> BatchSummary {
    let mut summary = BatchSummary::default();
    if input.is_dir() {
        for entry in WalkDir::new(input) {
            match entry {
                Ok(entry) if entry.file_type().is_file() => {
                    process_one(entry.path(), destination, layout, &mut summary);
                }
                Ok(_) => {}
                Err(err) => log::warn!("failed to read entry: {err}"),
            }
        }
    } else {
        process_one(input, destination, layout, &mut summary);
    }
    log::info!(
        "processed {} file(s), skipped {}",
        summary.processed,
        summary.skipped
    );
    summary
}

fn process_one(path: &Path, destination: &Path, layout: Layout, summary: &mut BatchSummary) {
    match split_file(path, destination, layout) {
        Ok(()) => {
            summary.processed += 1;
            log::info!("split {} -> {}", path.display(), destination.display());
        }
        Err(err) => {
            summary.skipped += 1;
            match err {
                SplitError::NoLanguageFound(_) | SplitError::ParseFailed { .. } => {
                    log::warn!("{err}, skipping");
                }
                other => log::warn!("failed to split {}: {other}, skipping", path.display()),
            }
        }
    }
}

fn split_file(path: &Path, destination: &Path, layout: Layout) -> Result<()> {
    let mut unit = SourceUnit::from_path(path)?;
    unit.parse()?;
    let outcome = FileSplitter::new(&unit, destination, layout)?.split()?;
    for kept in &outcome.skipped {
        log::debug!("kept existing {}", kept.display());
    }
    Ok(())
}
