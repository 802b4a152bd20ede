use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::{DirEntry, WalkDir};

use crate::error::Error;

const SUFFIXES: [&str; 2] = [".tsx", ".ts"];

pub fn is_source_file(path: &Path) -> bool {
    path.file_name()
        .map(|os_str| os_str.to_string_lossy())
        .map(|s| SUFFIXES.iter().any(|suffix| s.ends_with(suffix)))
        .unwrap_or(false)
}

// Symlinked directories aren't descended into, but a symlink to a file (or a
// dangling one) is handed on like any other file.
fn is_file_like(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();

    match file_type.is_symlink() {
        false => file_type.is_file(),
        true => fs::metadata(entry.path())
            .map(|metadata| !metadata.is_dir())
            .unwrap_or(true),
    }
}

fn check_root(root: &Path) -> Result<(), Error> {
    let metadata = fs::metadata(root).map_err(|source| Error::Traversal {
        root: root.to_path_buf(),
        source,
    })?;

    match metadata.is_dir() {
        true => Ok(()),
        false => Err(Error::Traversal {
            root: root.to_path_buf(),
            source: io::Error::new(io::ErrorKind::Other, "not a directory"),
        }),
    }
}

/// Every `.ts` / `.tsx` file below `root`, in walk order.
///
/// Entries that can't be read mid-walk are logged and skipped.
pub fn source_files(root: &Path) -> Result<impl Iterator<Item = PathBuf>, Error> {
    check_root(root)?;

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| is_file_like(entry))
        .filter(|entry| is_source_file(entry.path()))
        .map(|entry| entry.into_path());

    Ok(walker)
}
