//! Granizo Calc - hail-damage quote pricing CLI

use clap::Parser;
use granizo_calc::cli::Cli;
use granizo_calc::commands;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
