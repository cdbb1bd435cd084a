//! Test harness for rcscan integration tests

#![allow(dead_code)]

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::process::Command;

pub use rcscan::test_utils::TestTree;

/// Output of one rcscan invocation.
pub struct RunOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

/// Build a command for the rcscan binary with a clean environment.
pub fn rcscan_command(dir: &Path, args: &[&str]) -> Command {
    let binary = env!("CARGO_BIN_EXE_rcscan");
    let mut cmd = Command::new(binary);
    cmd.args(args)
        .current_dir(dir)
        .env_remove("RCSCAN_TARGET")
        .env_remove("RCSCAN_ARCHIVE_PATH")
        .env_remove("RUST_LOG")
        .env_remove("FORCE_COLOR");
    cmd
}

pub fn run_rcscan(dir: &Path, args: &[&str]) -> RunOutput {
    let output = rcscan_command(dir, args)
        .output()
        .expect("Failed to run rcscan");

    RunOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        success: output.status.success(),
        code: output.status.code(),
    }
}

/// Entry names and contents of a zip archive, sorted by name.
pub fn zip_entries(path: &Path) -> Vec<(String, Vec<u8>)> {
    let file = File::open(path).expect("Failed to open archive");
    let mut zip = zip::ZipArchive::new(file).expect("Failed to read archive");
    let mut entries = Vec::new();
    for i in 0..zip.len() {
        let mut entry = zip.by_index(i).expect("Failed to read entry");
        if entry.is_dir() {
            continue;
        }
        let mut content = Vec::new();
        entry
            .read_to_end(&mut content)
            .expect("Failed to read entry content");
        entries.push((entry.name().to_string(), content));
    }
    entries.sort();
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let tree = TestTree::new();
        let file_path = tree.add_file("nested/dir/.blinkmrc.json", "{}");
        assert!(file_path.exists());
    }
}
