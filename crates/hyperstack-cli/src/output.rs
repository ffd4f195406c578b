//! Output formatting for API responses.
//!
//! Supports pretty (indented JSON) and compact JSON output.

use std::io::Write;

use serde_json::Value;

use crate::cli::Format;
use crate::error::CliError;

/// Output formatter for response envelopes.
#[derive(Debug, Clone)]
pub struct OutputFormat {
    format: Format,
}

impl OutputFormat {
    /// Create a new output formatter.
    #[must_use]
    pub const fn new(format: Format) -> Self {
        Self { format }
    }

    /// Render an envelope to a string, without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render(&self, envelope: &Value) -> Result<String, CliError> {
        let rendered = match self.format {
            Format::Json => serde_json::to_string(envelope),
            Format::Pretty => serde_json::to_string_pretty(envelope),
        };
        rendered.map_err(|e| CliError::Format(format!("JSON serialization failed: {e}")))
    }

    /// Write an envelope followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write<W: Write>(&self, writer: &mut W, envelope: &Value) -> Result<(), CliError> {
        let rendered = self.render(envelope)?;
        writeln!(writer, "{rendered}")?;
        Ok(())
    }
}
