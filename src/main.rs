mod cli;
mod cmd;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Update { verbose } => cmd::update::execute(&cli.vault, verbose),
        Commands::Watch => cmd::watch::execute(&cli.vault),
        Commands::Config { action } => cmd::config::execute(&cli.vault, action),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
