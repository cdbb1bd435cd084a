//! Configuration types for the scanner

use std::path::PathBuf;

/// Directory names that are never descended into.
pub const DEFAULT_EXCLUDES: &[&str] = &["node_modules", "dist", "build", "out", ".git"];

/// Basename of the configuration file the scanner looks for.
pub const DEFAULT_TARGET: &str = ".blinkmrc.json";

/// Default file name for the archive of matched files.
pub const DEFAULT_ARCHIVE_NAME: &str = "blinkmrc-files.zip";

/// Configuration for one scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub root: PathBuf,
    /// Basename a file must have to be reported
    pub target: String,
    /// Extra directory names to prune, merged with `DEFAULT_EXCLUDES`
    pub extra_excludes: Vec<String>,
}

impl ScanConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_excludes.extend(names.into_iter().map(Into::into));
        self
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            target: DEFAULT_TARGET.to_string(),
            extra_excludes: Vec::new(),
        }
    }
}
