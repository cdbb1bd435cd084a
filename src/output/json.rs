//! JSON output formatting

use std::io::{self, Write};

use crate::scan::ScanReport;

/// Write the matched relative paths as a pretty-printed JSON array.
pub fn write_json<W: Write>(out: &mut W, report: &ScanReport) -> io::Result<()> {
    let json = serde_json::to_string_pretty(&report.matches).map_err(io::Error::other)?;
    writeln!(out, "{}", json)
}
