//! Output configuration types

use clap::ValueEnum;
use termcolor::ColorChoice;

/// How the list of matches is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One relative path per line
    #[default]
    Text,
    /// JSON array of relative paths
    Json,
    /// Table with size, modification time and absolute path
    ObjectList,
}

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub use_color: bool,
}

impl OutputConfig {
    pub fn new(format: OutputFormat, use_color: bool) -> Self {
        Self { format, use_color }
    }

    /// Color choice for termcolor streams. JSON is never colored.
    pub fn color_choice(&self) -> ColorChoice {
        if self.use_color && self.format != OutputFormat::Json {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        }
    }
}
