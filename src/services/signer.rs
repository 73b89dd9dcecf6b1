use crate::domain::errors::ShimError;
use crate::services::config::ProgramConfig;
use crate::services::process::{run, Completion, StdinSource};
use anyhow::Context;
use std::ffi::OsString;
use std::time::Duration;

/// Ask the external signer for a signature over our stdin.
///
/// Returns the signify body (comment line + base64 line) the signer printed.
pub fn sign(
    signer: &ProgramConfig,
    user_id: &str,
    timeout: Option<Duration>,
) -> anyhow::Result<String> {
    let mut args: Vec<OsString> = signer.args.iter().map(OsString::from).collect();
    args.push(user_id.into());

    match run(&signer.program, &args, StdinSource::Inherit, timeout)? {
        Completion::TimedOut(limit) => Err(ShimError::TimedOut {
            program: signer.program.clone(),
            secs: limit.as_secs(),
        }
        .into()),
        Completion::Finished(out) if !out.status.success() => Err(ShimError::ProgramFailed {
            program: signer.program.clone(),
            status: out.status.to_string(),
            stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
        }
        .into()),
        Completion::Finished(out) => {
            String::from_utf8(out.stdout).context("signer output is not valid UTF-8")
        }
    }
}
