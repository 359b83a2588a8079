mod cli;
mod config;
mod convert;
mod coverage_cmd;
mod generate;
mod logging;
mod timeline_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Generate(args) => generate::run(args),
        Command::Coverage(args) => coverage_cmd::run(args),
        Command::Timeline(args) => timeline_cmd::run(args),
    }
}
