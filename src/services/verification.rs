use crate::domain::errors::ShimError;
use crate::domain::models::{SignatureArtifact, VerificationOutcome};
use crate::services::keyring::KeyDirectory;
use crate::services::verifier::SignatureCheck;
use anyhow::Context;
use std::io::Read;
use std::path::Path;

pub fn read_signature(path: &Path) -> anyhow::Result<SignatureArtifact> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read signature {}", path.display()))?;
    SignatureArtifact::parse(&raw).map_err(|reason| {
        ShimError::MalformedSignature {
            path: path.display().to_string(),
            reason,
        }
        .into()
    })
}

/// Decide the outcome for `artifact`.
///
/// Only the first record carrying the signature's key id is tried: if it does
/// not verify the answer is `Bad`, even when a later record with the same id
/// would have. The message is read from `message` only when there is a
/// candidate to check it against.
pub fn evaluate(
    artifact: &SignatureArtifact,
    keys: &KeyDirectory,
    verifier: &dyn SignatureCheck,
    message: &mut dyn Read,
) -> anyhow::Result<VerificationOutcome> {
    let key_id = artifact.key_id()?;
    let first = keys.find(&key_id).next().transpose();
    let Some(record) = first.context("failed to look up key")? else {
        return Ok(VerificationOutcome::NoKey(key_id));
    };

    let mut buf = Vec::new();
    message
        .read_to_end(&mut buf)
        .context("failed to read message")?;

    if verifier.check(&record.pubkey_block(), &artifact.body(), &buf)? {
        Ok(VerificationOutcome::Good(record))
    } else {
        Ok(VerificationOutcome::Bad(record))
    }
}
