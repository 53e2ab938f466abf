// SPDX-License-Identifier: MPL-2.0
//! The user's source directories, kept in insertion order without duplicates.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sources {
    dirs: Vec<PathBuf>,
}

impl Sources {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a source.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateSource`] if the same path is already present; the
    /// list is left unchanged.
    pub fn add(&mut self, dir: PathBuf) -> Result<()> {
        if self.contains(&dir) {
            return Err(Error::DuplicateSource(dir));
        }
        log::info!("added source {}", dir.display());
        self.dirs.push(dir);
        Ok(())
    }

    /// Removes the source at `index`, returning it.
    pub fn remove(&mut self, index: usize) -> Option<PathBuf> {
        if index >= self.dirs.len() {
            return None;
        }
        let removed = self.dirs.remove(index);
        log::info!("removed source {}", removed.display());
        Some(removed)
    }

    #[must_use]
    pub fn contains(&self, dir: &Path) -> bool {
        self.dirs.iter().any(|d| d == dir)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.dirs.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}
