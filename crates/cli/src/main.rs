use std::process::ExitCode;

use clap::Parser;
use log::debug;

mod commands;
mod printer;

use commands::Command;
use samedia_runtime::{AUTHORS, DESCRIPTION, PROGRAM_NAME, VERSION, logging};

#[derive(Debug, Parser)]
#[command(name = PROGRAM_NAME, version, author = AUTHORS, about = DESCRIPTION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

fn main() -> ExitCode {
    logging::init().ok();
    debug!("{PROGRAM_NAME} {VERSION}");

    let cli = Cli::parse();
    match cli.command {
        Command::Inspect(args) => commands::inspect::run(args),
    }
}
