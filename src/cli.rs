use crate::domain::constants::{
    SIGN_FLAGS, STATUS_FD_STDERR, STATUS_FD_STDOUT, STDIN_MARKER, VERIFY_FLAG,
};
use crate::domain::errors::ShimError;
use crate::domain::models::Invocation;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Callers speak GnuPG's argv dialect, so clap only collects the raw words;
/// help and version flags are disabled to keep `-bsau` and friends intact.
#[derive(Parser, Debug)]
#[command(
    name = "gpg-signify",
    about = "GnuPG status-fd front-end for signify signatures",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<OsString>,
}

impl Invocation {
    /// Accepted shapes:
    /// - `--status-fd=2 -bsau <user-id>`
    /// - `<option> --status-fd=1 --verify <signature-file> -`
    ///
    /// The leading option of the verify shape (git sends `--keyid-format=long`)
    /// is ignored. Everything else is rejected, including any word that is
    /// not valid UTF-8.
    pub fn from_args(args: &[OsString]) -> Result<Self, ShimError> {
        let malformed = || ShimError::MalformedInvocation(display_args(args));
        let words = args
            .iter()
            .map(|a| a.to_str())
            .collect::<Option<Vec<&str>>>()
            .ok_or_else(malformed)?;
        match words.as_slice() {
            [] => Ok(Self::Noop),
            [STATUS_FD_STDERR, SIGN_FLAGS, user_id] => Ok(Self::Sign {
                user_id: user_id.to_string(),
            }),
            [_, STATUS_FD_STDOUT, VERIFY_FLAG, signature_path, STDIN_MARKER] => Ok(Self::Verify {
                signature_path: PathBuf::from(signature_path),
            }),
            _ => Err(malformed()),
        }
    }
}

/// Argv as it goes into the failure log.
pub fn display_args(args: &[OsString]) -> Vec<String> {
    args.iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect()
}
