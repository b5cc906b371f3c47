use crate::error::Error;
use crate::reader::{DirectoryReader, FsReader};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Snapshot of one directory level: subdirectory name to full path, plus file names.
///
/// File and directory names are tracked independently, so the same name may
/// appear in both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryRecord {
    pub directories: BTreeMap<String, PathBuf>,
    pub files: BTreeSet<String>,
}

/// Scan the immediate children of `root` on the local filesystem.
pub fn scan(root: &Path) -> Result<DirectoryRecord, Error> {
    scan_with(&FsReader::default(), root)
}

pub fn scan_with<R>(reader: &R, root: &Path) -> Result<DirectoryRecord, Error>
where
    R: DirectoryReader + ?Sized,
{
    let listing = reader.list_immediate_children(root)?;

    let directories: BTreeMap<String, PathBuf> = listing
        .directories
        .into_iter()
        .map(|name| {
            let path = root.join(&name);
            (name, path)
        })
        .collect();

    debug!(
        "Scanned {}: {} directories, {} files",
        root.display(),
        directories.len(),
        listing.files.len()
    );

    Ok(DirectoryRecord {
        directories,
        files: listing.files,
    })
}
