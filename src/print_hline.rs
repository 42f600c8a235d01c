use std::io::{self, Write};

use crate::options::RenderOptions;

pub const ANSI_MAGENTA: &str = "\x1b[35m";
pub const ANSI_RESET: &str = "\x1b[0m";

/// Stream the rule: optional color, blank line, `width` columns with blank
/// edges, blank line, optional reset.
///
/// Columns are written one at a time so memory stays flat for any width; wrap
/// `out` in a `BufWriter`.
pub fn write_hline<W: Write>(out: &mut W, options: &RenderOptions) -> io::Result<()> {
    let width = options.width;
    if options.color {
        out.write_all(ANSI_MAGENTA.as_bytes())?;
    }
    out.write_all(b"\n")?;
    for column in 0..width {
        if column == 0 || column + 1 == width {
            out.write_all(b" ")?;
        } else {
            out.write_all(options.delimiter.as_bytes())?;
        }
    }
    out.write_all(b"\n\n")?;
    if options.color {
        out.write_all(ANSI_RESET.as_bytes())?;
    }
    out.flush()
}
