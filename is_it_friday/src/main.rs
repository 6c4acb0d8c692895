//! `is-it-friday` entry point: load config, set up logging, print the answer.

use clap::Parser;
use tracing::Level;
use tracing_subscriber::fmt;

use is_it_friday::cli::{CommandLine, load_config};
use is_it_friday::clock::SystemClock;
use is_it_friday::error::Result;
use is_it_friday::runner::print_answer;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    run().map_err(color_eyre::eyre::Report::from)
}

fn run() -> Result<()> {
    let cli = CommandLine::parse();
    let program = std::env::args_os()
        .next()
        .unwrap_or_else(|| std::ffi::OsString::from("is-it-friday"));
    let config = load_config(&cli, &program)?;
    let max_level = if config.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    fmt()
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .init();
    print_answer(&config, &SystemClock)?;
    Ok(())
}
