/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Main executable for rydberg-rs

use clap::Parser;
use rydberg_rs::cli::Args;
use rydberg_rs::Session;
use std::io;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging, RUST_LOG takes precedence over -v
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let config = args.session_config()?;
    log::debug!("starting session with {config:?}");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config);
    session.run()?;

    Ok(())
}
