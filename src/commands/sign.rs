use crate::services::config::ShimConfig;
use crate::services::signer::sign;
use crate::services::status::emit_signature;
use std::io::Write;

pub fn handle_sign(
    config: &ShimConfig,
    user_id: &str,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> anyhow::Result<()> {
    let body = sign(&config.signer, user_id, config.timeout())?;
    emit_signature(stdout, stderr, &body)?;
    Ok(())
}
