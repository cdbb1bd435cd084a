//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The tree is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory (and its parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Populate a synthetic project layout: `packages` workspaces, each with
    /// a config file, a `src` tree `depth` levels deep and a `node_modules`
    /// folder holding `noise` decoy packages.
    pub fn populate_workspace(&self, target: &str, packages: usize, depth: usize, noise: usize) {
        for p in 0..packages {
            let pkg = format!("packages/pkg{}", p);
            self.add_file(&format!("{}/{}", pkg, target), "{}");

            let mut nested = format!("{}/src", pkg);
            for d in 0..depth {
                nested.push_str(&format!("/level{}", d));
                self.add_file(&format!("{}/index.js", nested), "module.exports = {};");
            }

            for n in 0..noise {
                self.add_file(&format!("{}/node_modules/dep{}/{}", pkg, n, target), "{}");
            }
        }
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
