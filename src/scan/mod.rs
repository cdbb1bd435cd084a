//! Filtered tree scanning
//!
//! - `ScanConfig`: root, target basename and extra exclusions
//! - `ExclusionSet`: case-insensitive directory names that prune a subtree
//! - `FilteredScanner`: explicit-stack walk producing a sorted `ScanReport`

mod config;
mod exclude;
mod scanner;

pub use config::{DEFAULT_ARCHIVE_NAME, DEFAULT_EXCLUDES, DEFAULT_TARGET, ScanConfig};
pub use exclude::ExclusionSet;
pub use scanner::{FilteredScanner, ScanReport, ScanStats, scan};
