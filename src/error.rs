//! Error types for scanning and archiving

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to callers of the scanner, archiver and output layer.
///
/// Failures while listing an individual directory are not represented here:
/// the scanner absorbs them and keeps walking.
#[derive(Debug, Error)]
pub enum Error {
    /// The scan root does not exist or cannot be resolved.
    #[error("cannot access '{}': {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot scan '{}': not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    #[error(transparent)]
    Archive(#[from] ArchiveError),

    /// Returned when the caller asked to fail if anything matched.
    #[error("found {count} matching '{target}' file(s)")]
    MatchesFound { count: usize, target: String },

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

/// Failures while staging or compressing matched files.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("nothing to archive")]
    Empty,

    #[error("failed to stage '{}': {source}", .path.display())]
    Stage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to compress archive: {0}")]
    Compress(#[from] zip::result::ZipError),

    #[error("failed to write archive '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
