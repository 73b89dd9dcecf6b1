use crate::domain::constants::{
    PGP_PREFIX, STATUS_BADSIG, STATUS_ERRSIG, STATUS_GOODSIG, STATUS_SIG_CREATED,
};
use crate::domain::models::VerificationOutcome;
use std::io::Write;

/// Sign path: armored signature on stdout, status on stderr (`--status-fd=2`).
pub fn emit_signature(
    stdout: &mut impl Write,
    stderr: &mut impl Write,
    body: &str,
) -> std::io::Result<()> {
    write!(stdout, "{PGP_PREFIX}{body}")?;
    stdout.flush()?;
    write!(stderr, "{STATUS_SIG_CREATED}")?;
    stderr.flush()
}

/// Verify path: human text on stderr, status on stdout (`--status-fd=1`).
pub fn emit_outcome(
    outcome: &VerificationOutcome,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> std::io::Result<()> {
    match outcome {
        VerificationOutcome::Good(key) => {
            writeln!(stderr, "Good signature from {} \"{}\"", key.raw_key, key.label)?;
            write!(stdout, "{STATUS_GOODSIG}")?;
        }
        VerificationOutcome::Bad(key) => {
            writeln!(stderr, "Bad signature from {} \"{}\"", key.raw_key, key.label)?;
            write!(stdout, "{STATUS_BADSIG}")?;
        }
        VerificationOutcome::NoKey(key_id) => {
            write!(stdout, "{STATUS_ERRSIG}")?;
            writeln!(stderr, "Can't check signature: No public key {key_id}")?;
        }
    }
    stdout.flush()?;
    stderr.flush()
}
