//! HomeSafe CLI - household-safety tracking in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

mod commands;
mod output;

/// HomeSafe - household-safety tracking in your terminal
#[derive(Parser)]
#[command(name = "hs", version, about, long_about = None)]
struct Cli {
    /// Data directory (defaults to $HOMESAFE_DIR, then ~/.homesafe)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match commands::session::run(cli.data_dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
