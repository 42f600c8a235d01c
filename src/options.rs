//! Render options built from the command line and the terminal.

use crate::DEFAULT_DELIMITER;
use crate::cli::Cli;
use crate::error::HrError;
use crate::terminal::{Console, terminal_width};
use crate::width::validate_delimiter;

/// Everything the renderer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// One display column wide.
    pub delimiter: String,
    pub color: bool,
    pub width: usize,
    /// Set by `-w`; skips the terminal query.
    pub width_is_explicit: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            delimiter: DEFAULT_DELIMITER.to_string(),
            color: true,
            width: 0,
            width_is_explicit: false,
        }
    }
}

impl RenderOptions {
    /// Apply parsed flags and the color policy.
    ///
    /// `-n` wins over `-c`. Without either, color follows whether stdout is
    /// a terminal.
    pub fn from_cli(cli: &Cli, console: &dyn Console) -> Result<Self, HrError> {
        let mut options = RenderOptions::default();

        if let Some(delimiter) = &cli.delimiter {
            validate_delimiter(delimiter)?;
            options.delimiter = delimiter.clone();
        }
        if let Some(width) = &cli.width {
            options.width = parse_width(width)?;
            options.width_is_explicit = true;
        }
        if cli.no_color {
            options.color = false;
        }
        if !cli.force_color && !console.stdout_is_terminal() {
            options.color = false;
        }

        tracing::debug!(
            color = options.color,
            delimiter = %options.delimiter,
            "parsed options"
        );
        Ok(options)
    }

    /// Fill in the width from the stdin terminal unless `-w` set it.
    pub fn resolve_width(&mut self, console: &dyn Console) -> Result<(), HrError> {
        if !self.width_is_explicit {
            self.width = terminal_width(console)?;
        }
        tracing::debug!(
            width = self.width,
            explicit = self.width_is_explicit,
            "resolved width"
        );
        Ok(())
    }
}

/// Parse a base-10 width. Negative values render as width 0.
pub fn parse_width(value: &str) -> Result<usize, HrError> {
    let width: i64 = value
        .parse()
        .map_err(|_| HrError::InvalidWidth(value.to_string()))?;
    Ok(usize::try_from(width).unwrap_or(0))
}
