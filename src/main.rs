use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod domain;
mod services;

use crate::cli::Cli;
use crate::domain::constants::LOG_FILE_NAME;
use crate::services::storage::{shim_home, FailureLog};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let home = match shim_home() {
        Ok(home) => home,
        Err(err) => {
            eprintln!("gpg-signify: {err:#}");
            return ExitCode::FAILURE;
        }
    };
    let mut log = FailureLog::open(&home.join(LOG_FILE_NAME));
    commands::dispatch(&cli.args, &home, &mut log)
}
