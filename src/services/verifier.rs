use crate::domain::constants::SIGNATURE_VERIFIED;
use crate::services::config::ProgramConfig;
use crate::services::process::{run, Completion, StdinSource};
use anyhow::Context;
use std::ffi::OsString;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

/// Checks one signature body against one public key block.
pub trait SignatureCheck {
    fn check(&self, pubkey_block: &str, signature_body: &str, message: &[u8])
        -> anyhow::Result<bool>;
}

/// `signify -V` style verifier run as a child process.
pub struct ExternalVerifier<'a> {
    program: &'a ProgramConfig,
    timeout: Option<Duration>,
}

impl<'a> ExternalVerifier<'a> {
    pub fn new(program: &'a ProgramConfig, timeout: Option<Duration>) -> Self {
        Self { program, timeout }
    }
}

impl SignatureCheck for ExternalVerifier<'_> {
    /// Only a clean exit printing exactly `Signature Verified\n` counts.
    /// Other exits, other output and timeouts all read as `false`.
    fn check(
        &self,
        pubkey_block: &str,
        signature_body: &str,
        message: &[u8],
    ) -> anyhow::Result<bool> {
        // both files are removed when they go out of scope, whatever happens below
        let pubkey_file = temp_file(pubkey_block)?;
        let signature_file = temp_file(signature_body)?;

        let mut args: Vec<OsString> = self.program.args.iter().map(OsString::from).collect();
        args.push(flag("-x", &signature_file));
        args.push(flag("-p", &pubkey_file));

        let verified = match run(
            &self.program.program,
            &args,
            StdinSource::Bytes(message),
            self.timeout,
        )? {
            Completion::Finished(out) => {
                out.status.success() && out.stdout == SIGNATURE_VERIFIED.as_bytes()
            }
            Completion::TimedOut(_) => false,
        };
        Ok(verified)
    }
}

fn temp_file(contents: &str) -> anyhow::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("gpg-signify-")
        .tempfile()
        .context("failed to create temporary file")?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

fn flag(name: &str, file: &NamedTempFile) -> OsString {
    let mut arg = OsString::from(name);
    arg.push(file.path());
    arg
}
