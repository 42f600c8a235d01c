//! Errors that stop `hr` before a rule is printed.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HrError {
    /// Delimiter is not exactly one display column.
    #[error("Delimiter must be a single column in width, your string is {columns} columns wide")]
    InvalidDelimiter { columns: usize },

    /// Width argument is not a clean base-10 integer.
    #[error("Unable to convert width to an integer: {0:?}")]
    InvalidWidth(String),

    /// Stdin is not attached to a terminal and no width was given.
    #[error("Not connected to a tty!")]
    NotATty,

    /// Stdin is a terminal but its window size could not be read.
    #[error("Unable to retrieve terminal width")]
    TerminalSize,
}
