mod cli;
mod config;
mod convert;
mod logging;
mod markov_cmd;
mod output;
mod queue_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::convert::QueueKind;

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
        Command::Markov(args) => markov_cmd::run(args),
        Command::Mm1(args) => queue_cmd::run(QueueKind::Mm1, args.queue, None, None),
        Command::Mmk(args) => queue_cmd::run(QueueKind::Mmk, args.queue, args.servers, None),
        Command::Mm1mm(args) => {
            queue_cmd::run(QueueKind::Mm1mm, args.queue, None, args.population)
        }
        Command::Mmkmm(args) => {
            queue_cmd::run(QueueKind::Mmkmm, args.queue, args.servers, args.population)
        }
    }
}
