//! Command handler layer.
//!
//! This module owns invocation dispatch and stdio wiring.
//!
//! ## Files
//! - `sign.rs` — `--status-fd=2 -bsau <user-id>`.
//! - `verify.rs` — `--status-fd=1 --verify <file> -`.
//!
//! ## Principles
//! - Parse/match argv here.
//! - Delegate the work to `services/*`.
//! - Fatal errors come back as `Err`; only `dispatch` decides to log and abort.

pub mod sign;
pub mod verify;

use crate::cli::display_args;
use crate::domain::models::Invocation;
use crate::services::config::load_config;
use crate::services::storage::FailureLog;
use std::ffi::OsString;
use std::path::Path;
use std::process::ExitCode;

pub fn dispatch(args: &[OsString], home: &Path, log: &mut FailureLog) -> ExitCode {
    match execute(args, home) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log.record(&display_args(args), &err);
            ExitCode::FAILURE
        }
    }
}

fn execute(args: &[OsString], home: &Path) -> anyhow::Result<()> {
    match Invocation::from_args(args)? {
        Invocation::Noop => Ok(()),
        Invocation::Sign { user_id } => {
            let config = load_config(home)?;
            sign::handle_sign(
                &config,
                &user_id,
                &mut std::io::stdout().lock(),
                &mut std::io::stderr().lock(),
            )
        }
        Invocation::Verify { signature_path } => {
            let config = load_config(home)?;
            verify::handle_verify(
                &config,
                home,
                &signature_path,
                &mut std::io::stdin().lock(),
                &mut std::io::stdout().lock(),
                &mut std::io::stderr().lock(),
            )
        }
    }
}
