//! Object-list output: one row per match with file details

use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Local};
use termcolor::{ColorSpec, WriteColor};

use crate::scan::ScanReport;

const HEADERS: [&str; 4] = ["RelativePath", "Size", "Modified", "FullName"];
const COLUMN_GAP: &str = "  ";

/// A single rendered row of the object list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRow {
    pub relative_path: String,
    pub size: String,
    pub modified: String,
    pub full_name: String,
}

impl MatchRow {
    /// Build a row from filesystem metadata. Missing metadata renders as `-`.
    pub fn from_path(relative_path: &str, full_path: &Path) -> Self {
        let metadata = full_path.metadata().ok();
        let size = metadata
            .as_ref()
            .map(|m| format_size(m.len()))
            .unwrap_or_else(|| "-".to_string());
        let modified = metadata
            .and_then(|m| m.modified().ok())
            .map(|t| {
                DateTime::<Local>::from(t)
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string()
            })
            .unwrap_or_else(|| "-".to_string());

        Self {
            relative_path: relative_path.to_string(),
            size,
            modified,
            full_name: full_path.display().to_string(),
        }
    }

    fn cells(&self) -> [&str; 4] {
        [&self.relative_path, &self.size, &self.modified, &self.full_name]
    }
}

/// Write matches as an aligned table. Nothing is written when there are no matches.
pub fn write_table<W: WriteColor>(out: &mut W, report: &ScanReport) -> io::Result<()> {
    let rows: Vec<MatchRow> = report
        .matches
        .iter()
        .zip(report.full_paths())
        .map(|(rel, full)| MatchRow::from_path(rel, &full))
        .collect();
    write_rows(out, &rows)
}

fn write_rows<W: WriteColor>(out: &mut W, rows: &[MatchRow]) -> io::Result<()> {
    if rows.is_empty() {
        return Ok(());
    }

    let mut widths = HEADERS.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut bold = ColorSpec::new();
    bold.set_bold(true);
    out.set_color(&bold)?;
    write_line(out, &HEADERS, &widths)?;
    out.reset()?;

    let underline = widths.map(|w| "-".repeat(w));
    write_line(out, &underline.each_ref().map(String::as_str), &widths)?;

    for row in rows {
        write_line(out, &row.cells(), &widths)?;
    }
    Ok(())
}

/// Write one row padded to `widths`; the last column is not padded.
fn write_line<W: Write>(out: &mut W, cells: &[&str; 4], widths: &[usize; 4]) -> io::Result<()> {
    let last = cells.len() - 1;
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i == last {
            write!(out, "{}", cell)?;
        } else {
            write!(out, "{:<width$}{}", cell, COLUMN_GAP, width = *width)?;
        }
    }
    writeln!(out)
}

/// Format a size in bytes to human-readable format.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1}G", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1}M", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}K", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}
