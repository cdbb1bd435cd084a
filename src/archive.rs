//! Zip archive of matched files
//!
//! Matched files are first copied into a temporary staging directory that
//! mirrors their relative layout, then the staged tree is compressed into a
//! single zip. The staging directory is a `TempDir`, so it is removed when it
//! goes out of scope on every path out of `archive`.

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use tempfile::{NamedTempFile, TempDir};
use tracing::debug;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::ArchiveError;

/// Bundle `matches` (relative to `root`) into a zip at `destination`.
///
/// Any existing file at `destination` is replaced. Returns the absolute
/// path of the written archive.
pub fn archive(
    root: &Path,
    matches: &[String],
    destination: &Path,
) -> Result<PathBuf, ArchiveError> {
    if matches.is_empty() {
        return Err(ArchiveError::Empty);
    }

    let destination = absolute(destination).map_err(|source| ArchiveError::Write {
        path: destination.to_path_buf(),
        source,
    })?;

    let staging = stage(root, matches)?;
    debug!(
        staging = %staging.path().display(),
        files = matches.len(),
        "staged matched files"
    );
    compress(staging.path(), matches, &destination)?;

    debug!(archive = %destination.display(), "archive written");
    Ok(destination)
}

/// Copy every match into a fresh temporary directory at its relative path.
fn stage(root: &Path, matches: &[String]) -> Result<TempDir, ArchiveError> {
    let staging = tempfile::Builder::new()
        .prefix("rcscan-staging-")
        .tempdir()
        .map_err(|source| ArchiveError::Stage {
            path: std::env::temp_dir(),
            source,
        })?;

    for rel in matches {
        let from = root.join(rel);
        let to = staging.path().join(rel);
        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent).map_err(|source| ArchiveError::Stage {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::copy(&from, &to).map_err(|source| ArchiveError::Stage { path: from, source })?;
    }

    Ok(staging)
}

/// Write the staged files into a zip next to `destination`, then move it
/// into place so a failed run never leaves a truncated archive.
fn compress(staging: &Path, entries: &[String], destination: &Path) -> Result<(), ArchiveError> {
    let write_err = |source: io::Error| ArchiveError::Write {
        path: destination.to_path_buf(),
        source,
    };

    let parent = destination
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let partial = NamedTempFile::new_in(parent).map_err(write_err)?;

    let mut zip = ZipWriter::new(BufWriter::new(partial));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for name in entries {
        let staged = staging.join(name);
        let mut file = File::open(&staged).map_err(|source| ArchiveError::Stage {
            path: staged.clone(),
            source,
        })?;
        zip.start_file(name.as_str(), options)?;
        io::copy(&mut file, &mut zip).map_err(write_err)?;
    }

    let writer = zip.finish()?;
    let partial = writer.into_inner().map_err(|e| write_err(e.into_error()))?;
    partial
        .persist(destination)
        .map_err(|e| write_err(e.error))?;
    Ok(())
}

fn absolute(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
