mod cli;
mod config;
mod date_cmd;
mod logging;
mod output;
mod range_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::CivilConfig;
use crate::output::Printer;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = CivilConfig::load(cli.config.as_deref())?;
    let printer = Printer::new(&config.output, cli.json);

    match cli.command {
        Command::Today(args) => date_cmd::today(&config, &printer, args),
        Command::Info(args) => date_cmd::info(&printer, args),
        Command::Add(args) => date_cmd::add(&printer, args),
        Command::Diff(args) => date_cmd::diff(&printer, args),
        Command::Sort(args) => date_cmd::sort(&printer, args),
        Command::Range(args) => range_cmd::range(&printer, args),
        Command::List(args) => range_cmd::list(&printer, args),
        Command::Split(args) => range_cmd::split(&printer, args),
        Command::Contains(args) => range_cmd::contains(&printer, args),
        Command::Intersects(args) => range_cmd::intersects(&printer, args),
    }
}
