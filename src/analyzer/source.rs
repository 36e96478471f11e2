//! Directory listing seam
//!
//! The classifier reads the filesystem only through [`DirectorySource`], so a
//! listing failure is a plain `io::Result` the caller decides what to do with.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::types::log_filter_error;

/// What a directory entry resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

/// One immediate child of a listed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntryInfo {
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Dir,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }
}

/// Lists the immediate children of a directory, in no particular order
pub trait DirectorySource {
    fn list(&self, dir: &Path) -> io::Result<Vec<DirEntryInfo>>;

    /// Stable identity of `dir` (its canonical path), used to detect link cycles.
    ///
    /// Sources without symlinks can keep the default.
    fn identity(&self, _dir: &Path) -> Option<PathBuf> {
        None
    }
}

/// [`DirectorySource`] backed by the real filesystem
#[derive(Debug, Clone)]
pub struct FsSource {
    follow_symlinks: bool,
}

impl Default for FsSource {
    fn default() -> Self {
        Self {
            follow_symlinks: true,
        }
    }
}

impl FsSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Descend into symlinked directories (on by default)
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    fn resolve(&self, entry: &fs::DirEntry) -> Option<EntryKind> {
        let file_type = log_filter_error(entry.file_type(), "reading entry type")?;

        if !file_type.is_symlink() {
            return Some(if file_type.is_dir() {
                EntryKind::Dir
            } else {
                EntryKind::File
            });
        }

        // Dangling links resolve to nothing and are skipped
        let target = log_filter_error(fs::metadata(entry.path()), "resolving symlink")?;
        if target.is_dir() {
            self.follow_symlinks.then_some(EntryKind::Dir)
        } else {
            Some(EntryKind::File)
        }
    }
}

impl DirectorySource for FsSource {
    fn list(&self, dir: &Path) -> io::Result<Vec<DirEntryInfo>> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(dir)?.filter_map(|e| log_filter_error(e, "reading directory entry")) {
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    tracing::debug!("Skipping non UTF-8 entry {:?} in {}", raw, dir.display());
                    continue;
                }
            };

            if let Some(kind) = self.resolve(&entry) {
                entries.push(DirEntryInfo { name, kind });
            }
        }

        Ok(entries)
    }

    fn identity(&self, dir: &Path) -> Option<PathBuf> {
        log_filter_error(fs::canonicalize(dir), "canonicalizing folder")
    }
}
