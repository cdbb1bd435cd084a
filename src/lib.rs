//! rcscan - find configuration files outside build output and bundle them

pub mod archive;
pub mod error;
pub mod output;
pub mod scan;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use archive::archive;
pub use error::{ArchiveError, Error};
pub use output::{OutputConfig, OutputFormat, print_archive_notice, print_report, write_report};
pub use scan::{
    DEFAULT_ARCHIVE_NAME, DEFAULT_EXCLUDES, DEFAULT_TARGET, ExclusionSet, FilteredScanner,
    ScanConfig, ScanReport, ScanStats, scan,
};
