//! Plain list output, one relative path per line

use std::io;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::scan::ScanReport;

/// Write each match on its own line, coloring the directory part.
pub fn write_text<W: WriteColor>(out: &mut W, report: &ScanReport) -> io::Result<()> {
    let mut dir_color = ColorSpec::new();
    dir_color.set_fg(Some(Color::Blue)).set_bold(true);
    let mut file_color = ColorSpec::new();
    file_color.set_fg(Some(Color::Green));

    for rel in &report.matches {
        let (dir, name) = match rel.rfind('/') {
            Some(idx) => rel.split_at(idx + 1),
            None => ("", rel.as_str()),
        };
        if !dir.is_empty() {
            out.set_color(&dir_color)?;
            write!(out, "{}", dir)?;
        }
        out.set_color(&file_color)?;
        write!(out, "{}", name)?;
        out.reset()?;
        writeln!(out)?;
    }

    Ok(())
}
