//! Report formatting and display
//!
//! - `text` - one relative path per line
//! - `json` - JSON array of relative paths
//! - `table` - object list with size, modification time and absolute path
//!
//! Writers are generic over `WriteColor` so tests can render into a buffer;
//! the `print_*` helpers target stdout.

mod config;
mod json;
mod table;
mod text;

use std::io::{self, Write};
use std::path::Path;

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::scan::ScanReport;

pub use config::{OutputConfig, OutputFormat};
pub use json::write_json;
pub use table::{MatchRow, format_size, write_table};
pub use text::write_text;

/// Write the match list in the configured format.
pub fn write_report<W: WriteColor>(
    out: &mut W,
    report: &ScanReport,
    config: &OutputConfig,
) -> io::Result<()> {
    match config.format {
        OutputFormat::Text => write_text(out, report),
        OutputFormat::Json => write_json(out, report),
        OutputFormat::ObjectList => write_table(out, report),
    }
}

/// Print the match list to stdout.
pub fn print_report(report: &ScanReport, config: &OutputConfig) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(config.color_choice());
    write_report(&mut stdout, report, config)?;
    stdout.flush()
}

/// Write the confirmation line for a created archive.
pub fn write_archive_notice<W: WriteColor>(
    out: &mut W,
    archive: &Path,
    files: usize,
) -> io::Result<()> {
    let mut bold = ColorSpec::new();
    bold.set_bold(true);
    write!(out, "Archive created: ")?;
    out.set_color(&bold)?;
    write!(out, "{}", archive.display())?;
    out.reset()?;
    writeln!(out, " ({} {})", files, if files == 1 { "file" } else { "files" })
}

/// Print the archive confirmation to stdout.
pub fn print_archive_notice(archive: &Path, files: usize, use_color: bool) -> io::Result<()> {
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    write_archive_notice(&mut stdout, archive, files)?;
    stdout.flush()
}
