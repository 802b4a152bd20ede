use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{source}")]
    Traversal { root: PathBuf, source: io::Error },
    #[error("{source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("{source}")]
    Write { path: PathBuf, source: io::Error },
}

impl Error {
    pub fn path(&self) -> &PathBuf {
        match self {
            Error::Traversal { root, .. } => root,
            Error::Read { path, .. } => path,
            Error::Write { path, .. } => path,
        }
    }
}
