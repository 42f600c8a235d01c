use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "hr")]
#[command(about = "Print a horizontal rule across the terminal")]
#[command(version)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Force color output even when stdout is not a terminal
    #[arg(short = 'c', long = "force-color")]
    pub force_color: bool,

    /// Delimiter glyph, must be a single column wide (default '━')
    #[arg(short = 'd', long = "delimiter", allow_hyphen_values = true)]
    pub delimiter: Option<String>,

    /// Disable color output
    #[arg(short = 'n', long = "no-color")]
    pub no_color: bool,

    /// Width in columns (defaults to the width of the terminal on stdin)
    #[arg(short = 'w', long = "width", allow_hyphen_values = true)]
    pub width: Option<String>,
}
