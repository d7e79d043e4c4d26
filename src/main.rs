mod cli;
mod config;
mod convert;
mod day_cmd;
mod logging;
mod nearest_cmd;
mod rank_cmd;
mod series_cmd;

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
        Command::Day(args) => day_cmd::run(args),
        Command::Series(args) => series_cmd::run(args),
        Command::Rank(args) => rank_cmd::run(args),
        Command::Nearest(args) => nearest_cmd::run(args),
    }
}
