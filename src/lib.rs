pub mod cli;
pub mod error;
pub mod logging;
pub mod options;
pub mod print_hline;
pub mod terminal;
pub mod width;

/// Default delimiter glyph (U+2501 BOX DRAWINGS HEAVY HORIZONTAL)
pub const DEFAULT_DELIMITER: &str = "━";
