// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding image files under the slideshow sources.
//!
//! Every source is walked recursively. Only regular files with a supported
//! image extension are kept. Entries that cannot be read are logged and
//! skipped so one bad subfolder never empties the whole list.

use crate::media;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Result of expanding a set of sources into image paths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanOutcome {
    /// Image files in source order, then path order within a source.
    pub files: Vec<PathBuf>,
    /// Number of directory entries that could not be read.
    pub skipped_entries: usize,
}

impl ScanOutcome {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}

/// Recursively lists the supported images below `directory`.
///
/// A missing or unreadable directory yields no files.
pub fn scan_directory(directory: &Path) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();
    collect_into(directory, &mut outcome);
    outcome
}

/// Expands every source into one flat list of image paths.
pub fn scan_sources(sources: &[PathBuf]) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();
    for source in sources {
        collect_into(source, &mut outcome);
    }
    log::info!(
        "scanned {} source(s): {} image(s), {} unreadable entries",
        sources.len(),
        outcome.files.len(),
        outcome.skipped_entries
    );
    outcome
}

fn collect_into(directory: &Path, outcome: &mut ScanOutcome) {
    let start = outcome.files.len();

    for entry in WalkDir::new(directory).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("skipping unreadable entry under {}: {}", directory.display(), err);
                outcome.skipped_entries += 1;
                continue;
            }
        };

        if entry.file_type().is_file() && media::is_supported_image(entry.path()) {
            outcome.files.push(entry.into_path());
        }
    }

    outcome.files[start..].sort();
}
