use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use std::io::BufWriter;
use std::process::ExitCode;

use hr::cli::Cli;
use hr::logging;
use hr::options::RenderOptions;
use hr::print_hline::write_hline;
use hr::terminal::StdConsole;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    logging::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and succeed; anything else is a usage error
            e.print().context("failed to print usage")?;
            return Ok(match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            });
        }
    };

    let console = StdConsole;
    let mut options = RenderOptions::from_cli(&cli, &console)?;
    options.resolve_width(&console)?;

    let mut out = BufWriter::new(std::io::stdout().lock());
    write_hline(&mut out, &options).context("failed to write rule")?;

    Ok(ExitCode::SUCCESS)
}
