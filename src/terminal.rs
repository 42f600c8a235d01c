//! Terminal inspection: TTY checks and the stdin window size query.

use is_terminal::IsTerminal;
use terminal_size::{Width, terminal_size_of};

use crate::error::HrError;

/// Access to the process's standard streams as terminals.
pub trait Console {
    fn stdin_is_terminal(&self) -> bool;
    fn stdout_is_terminal(&self) -> bool;
    /// Column count of the terminal on stdin, if it can be read.
    fn stdin_columns(&self) -> Option<u16>;
}

/// The real standard streams.
pub struct StdConsole;

impl Console for StdConsole {
    fn stdin_is_terminal(&self) -> bool {
        std::io::stdin().is_terminal()
    }

    fn stdout_is_terminal(&self) -> bool {
        std::io::stdout().is_terminal()
    }

    /// `terminal_size` reports a zero-column window as `None`.
    fn stdin_columns(&self) -> Option<u16> {
        terminal_size_of(std::io::stdin()).map(|(Width(w), _)| w)
    }
}

/// Width of the terminal attached to stdin.
///
/// Sized from the input terminal, not stdout, so `hr > file` still follows
/// the window it was typed in.
pub fn terminal_width(console: &dyn Console) -> Result<usize, HrError> {
    if !console.stdin_is_terminal() {
        return Err(HrError::NotATty);
    }
    let columns = console.stdin_columns().ok_or(HrError::TerminalSize)?;
    tracing::debug!(columns, "queried stdin terminal size");
    Ok(usize::from(columns))
}
