//! Floorgen: dungeon floor layout generator
//!
//! Main entry point for the command-line tool.

use std::io;
use std::process::ExitCode;

use clap::Parser;

use fg_cli::{Args, run};

fn main() -> ExitCode {
    // Parse command-line arguments before logging so -v can set the level
    let args = Args::parse();

    // RUST_LOG overrides the -v level
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let stdout = io::stdout();
    match run(&args, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("floorgen: {err}");
            ExitCode::FAILURE
        }
    }
}
