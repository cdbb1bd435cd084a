//! CLI entry point for rcscan

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use rcscan::{
    DEFAULT_ARCHIVE_NAME, DEFAULT_TARGET, Error, FilteredScanner, OutputConfig, OutputFormat,
    ScanConfig, archive, print_archive_notice, print_report,
};
use tracing::{Level, debug};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "rcscan")]
#[command(about = "Find .blinkmrc.json files outside build output and optionally zip them")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Additional directory names to skip (repeatable or comma separated).
    /// Always merged with: node_modules, dist, build, out, .git
    #[arg(short = 'x', long = "exclude", value_name = "NAME", value_delimiter = ',')]
    exclude: Vec<String>,

    /// File name to look for
    #[arg(short = 't', long = "target", env = "RCSCAN_TARGET", default_value = DEFAULT_TARGET)]
    target: String,

    /// Output format for the list of matches
    #[arg(short = 'o', long = "format", value_enum, default_value = "text")]
    format: OutputFormat,

    /// Exit with a non-zero status when any file is found
    #[arg(long = "fail-on-match")]
    fail_on_match: bool,

    /// Bundle the matched files into a zip archive
    #[arg(short = 'a', long = "archive")]
    archive: bool,

    /// Destination of the zip archive (replaced if it exists)
    #[arg(
        long = "archive-path",
        value_name = "PATH",
        env = "RCSCAN_ARCHIVE_PATH",
        default_value = DEFAULT_ARCHIVE_NAME
    )]
    archive_path: PathBuf,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    // RUST_LOG always takes precedence; otherwise --verbose selects DEBUG.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { Level::DEBUG } else { Level::WARN };
        EnvFilter::default().add_directive(level.into())
    });
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

/// Scan, print the matches, then archive. The archive confirmation is always
/// the last line written, and fail-on-match is only reported after the
/// archive step has finished.
fn run(args: &Args) -> Result<(), Error> {
    let config = ScanConfig::new(&args.path)
        .target(&args.target)
        .exclude(args.exclude.iter().cloned());
    let scanner = FilteredScanner::new(config);
    debug!(excludes = ?scanner.excludes().iter().collect::<Vec<_>>(), "exclusion set");

    let report = scanner.scan()?;

    let use_color = should_use_color(args.color);
    let output_config = OutputConfig::new(args.format, use_color);
    print_report(&report, &output_config)?;

    if report.is_empty() {
        if args.format == OutputFormat::Text {
            eprintln!(
                "No '{}' files found under '{}'",
                report.target,
                report.root.display()
            );
        }
        if args.archive {
            debug!("no matches, skipping archive");
        }
        return Ok(());
    }

    if args.archive {
        let written = archive(&report.root, &report.matches, &args.archive_path)?;
        print_archive_notice(&written, report.len(), use_color && args.format != OutputFormat::Json)?;
    }

    if args.fail_on_match {
        return Err(Error::MatchesFound {
            count: report.len(),
            target: report.target.clone(),
        });
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("rcscan: {}", e);
        process::exit(1);
    }
}
