use crate::error::Error;
use glob::Pattern;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Names of the immediate children of one directory, split by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryListing {
    pub directories: BTreeSet<String>,
    pub files: BTreeSet<String>,
}

/// Source of single-level directory listings.
///
/// The filesystem implementation is [`FsReader`]; tests can supply their own.
pub trait DirectoryReader {
    fn list_immediate_children(&self, path: &Path) -> Result<DirectoryListing, Error>;
}

/// Lists a directory on the local filesystem, one level deep.
#[derive(Debug, Clone, Default)]
pub struct FsReader {
    ignore_patterns: Vec<Pattern>,
}

impl FsReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop children whose bare name matches any of `globs`.
    pub fn with_ignore_patterns(mut self, globs: &[String]) -> Result<Self, Error> {
        for glob in globs {
            let pattern = Pattern::new(glob).map_err(|source| Error::InvalidPattern {
                pattern: glob.clone(),
                source,
            })?;
            self.ignore_patterns.push(pattern);
        }
        Ok(self)
    }

    fn is_ignored(&self, name: &str) -> bool {
        self.ignore_patterns
            .iter()
            .any(|pattern| pattern.matches(name))
    }
}

impl DirectoryReader for FsReader {
    fn list_immediate_children(&self, path: &Path) -> Result<DirectoryListing, Error> {
        let metadata = fs::metadata(path).map_err(|err| Error::unavailable(path, err))?;
        if !metadata.is_dir() {
            return Err(Error::unavailable(
                path,
                io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
            ));
        }

        let mut listing = DirectoryListing::default();

        for entry_result in WalkDir::new(path).min_depth(1).max_depth(1) {
            let entry = match entry_result {
                Ok(entry) => entry,
                Err(err) => {
                    if err.depth() == 0 || err.path() == Some(path) {
                        let source = err
                            .into_io_error()
                            .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "listing failed"));
                        return Err(Error::unavailable(path, source));
                    }
                    warn!("Skipping unreadable entry in {}: {}", path.display(), err);
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy().into_owned();
            if self.is_ignored(&name) {
                debug!("Ignoring {}", name);
                continue;
            }

            // A link to a directory lists as a directory; it is never descended into.
            let is_dir = entry.file_type().is_dir()
                || (entry.path_is_symlink() && entry.path().is_dir());

            if is_dir {
                listing.directories.insert(name);
            } else {
                listing.files.insert(name);
            }
        }

        debug!(
            "Listed {}: {} directories, {} files",
            path.display(),
            listing.directories.len(),
            listing.files.len()
        );

        Ok(listing)
    }
}
