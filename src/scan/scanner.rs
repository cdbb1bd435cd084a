//! FilteredScanner - stack-based walk that prunes excluded directories

use std::fs::{self, DirEntry, FileType};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::error::Error;

use super::config::ScanConfig;
use super::exclude::ExclusionSet;

/// Counters collected during a single scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub dirs_visited: usize,
    /// Directories skipped because their name is excluded
    pub dirs_pruned: usize,
    /// Directories whose listing failed (permissions, I/O errors)
    pub unreadable_dirs: usize,
    /// Single entries that could not be read or typed inside a listed directory
    pub unreadable_entries: usize,
    pub files_matched: usize,
}

/// Result of one scan.
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Canonical root the relative paths are based on
    pub root: PathBuf,
    pub target: String,
    /// Relative paths using `/` separators, sorted and deduplicated
    pub matches: Vec<String>,
    pub stats: ScanStats,
}

impl ScanReport {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Absolute path of every match, in result order.
    pub fn full_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.matches.iter().map(|rel| self.root.join(rel))
    }
}

/// Scanner that finds every file named `config.target` under the root,
/// never opening a directory whose name is in the exclusion set.
pub struct FilteredScanner {
    config: ScanConfig,
    excludes: ExclusionSet,
}

impl FilteredScanner {
    pub fn new(config: ScanConfig) -> Self {
        let excludes = ExclusionSet::with_defaults(&config.extra_excludes);
        Self { config, excludes }
    }

    /// Replace the exclusion set (defaults included) with `excludes`.
    pub fn with_excludes(mut self, excludes: ExclusionSet) -> Self {
        self.excludes = excludes;
        self
    }

    pub fn excludes(&self) -> &ExclusionSet {
        &self.excludes
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Walk the tree and collect matching files.
    ///
    /// Only a root that cannot be resolved is an error. Directories that fail
    /// to list are skipped and counted in `ScanStats::unreadable_dirs`; bad
    /// entries inside a listed directory in `ScanStats::unreadable_entries`.
    pub fn scan(&self) -> Result<ScanReport, Error> {
        let root = resolve_root(&self.config.root)?;
        let started = Instant::now();

        let mut state = WalkState {
            frontier: vec![root.clone()],
            ..Default::default()
        };

        while let Some(dir) = state.frontier.pop() {
            state.stats.dirs_visited += 1;

            match fs::read_dir(&dir) {
                Ok(entries) => self.visit_dir(&root, &dir, entries, &mut state),
                Err(err) => {
                    state.stats.unreadable_dirs += 1;
                    debug!(path = %dir.display(), error = %err, "skipping unreadable directory");
                }
            }
        }

        let WalkState {
            mut matches,
            mut stats,
            ..
        } = state;
        matches.sort();
        matches.dedup();
        stats.files_matched = matches.len();

        debug!(
            root = %root.display(),
            visited = stats.dirs_visited,
            pruned = stats.dirs_pruned,
            unreadable_dirs = stats.unreadable_dirs,
            unreadable_entries = stats.unreadable_entries,
            matched = stats.files_matched,
            "scan finished in {}",
            humantime::format_duration(whole_millis(started.elapsed()))
        );

        Ok(ScanReport {
            root,
            target: self.config.target.clone(),
            matches,
            stats,
        })
    }

    /// Sort the entries of one listed directory into the frontier and matches.
    fn visit_dir<I>(&self, root: &Path, dir: &Path, entries: I, state: &mut WalkState)
    where
        I: IntoIterator<Item = io::Result<DirEntry>>,
    {
        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    state.skip_entry(dir, &err);
                    continue;
                }
            };
            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(err) => {
                    state.skip_entry(&entry.path(), &err);
                    continue;
                }
            };

            if file_type.is_dir() {
                // Pruned before push so excluded subtrees are never opened
                if self.excludes.is_excluded(&entry.file_name()) {
                    state.stats.dirs_pruned += 1;
                    debug!(path = %entry.path().display(), "pruned excluded directory");
                    continue;
                }
                state.frontier.push(entry.path());
            } else if self.is_target(&entry, file_type) {
                let path = entry.path();
                match relative_path(root, &path) {
                    Some(rel) => state.matches.push(rel),
                    None => warn!(path = %path.display(), "skipping match with non UTF-8 path"),
                }
            }
        }
    }

    fn is_target(&self, entry: &DirEntry, file_type: FileType) -> bool {
        if entry.file_name() != self.config.target.as_str() {
            return false;
        }
        if file_type.is_file() {
            return true;
        }
        // Symlinks count only when they resolve to a regular file
        file_type.is_symlink() && fs::metadata(entry.path()).is_ok_and(|m| m.is_file())
    }
}

/// Mutable traversal state owned by a single scan.
#[derive(Default)]
struct WalkState {
    frontier: Vec<PathBuf>,
    matches: Vec<String>,
    stats: ScanStats,
}

impl WalkState {
    fn skip_entry(&mut self, path: &Path, err: &io::Error) {
        self.stats.unreadable_entries += 1;
        debug!(path = %path.display(), error = %err, "skipping unreadable entry");
    }
}

/// Truncate to whole milliseconds for log output.
fn whole_millis(elapsed: Duration) -> Duration {
    Duration::from_millis(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
}

/// Scan `root` for files named `target` using exactly the given exclusions.
pub fn scan(root: &Path, excludes: &ExclusionSet, target: &str) -> Result<ScanReport, Error> {
    FilteredScanner::new(ScanConfig::new(root).target(target))
        .with_excludes(excludes.clone())
        .scan()
}

fn resolve_root(root: &Path) -> Result<PathBuf, Error> {
    let resolved = fs::canonicalize(root).map_err(|source| Error::NotFound {
        path: root.to_path_buf(),
        source,
    })?;
    if !resolved.is_dir() {
        return Err(Error::NotADirectory { path: resolved });
    }
    Ok(resolved)
}

/// Path of `path` relative to `root`, joined with `/`.
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let segments = rel
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    Some(segments.join("/"))
}
