mod html;
mod json;
mod report;
pub mod svg;
mod text;

pub use html::{HtmlFormatter, legend_markup};
pub use json::JsonFormatter;
pub use report::Report;
pub use text::{ColorMode, TextFormatter};

use crate::error::Result;

/// Trait for formatting a report into various output formats.
pub trait OutputFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &Report) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "html" => Ok(Self::Html),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}
