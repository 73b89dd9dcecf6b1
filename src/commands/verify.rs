use crate::services::config::ShimConfig;
use crate::services::keyring::KeyDirectory;
use crate::services::status::emit_outcome;
use crate::services::verification::{evaluate, read_signature};
use crate::services::verifier::ExternalVerifier;
use std::io::{Read, Write};
use std::path::Path;

pub fn handle_verify(
    config: &ShimConfig,
    home: &Path,
    signature_path: &Path,
    message: &mut impl Read,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> anyhow::Result<()> {
    let artifact = read_signature(signature_path)?;
    let keys = KeyDirectory::load(&config.pubkeys_path(home))?;
    let verifier = ExternalVerifier::new(&config.verifier, config.timeout());
    let outcome = evaluate(&artifact, &keys, &verifier, message)?;
    emit_outcome(&outcome, stdout, stderr)?;
    Ok(())
}
