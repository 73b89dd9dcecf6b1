use crate::domain::constants::{KEY_ID_LEN, PGP_PREFIX, UNTRUSTED_COMMENT};
use crate::domain::errors::ShimError;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use std::fmt;
use std::path::PathBuf;

/// Leading bytes of a decoded signify blob (algorithm tag + key number).
///
/// Keys and signatures share the derivation, which makes it the join key
/// between a signature and the record that may have produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyId(Vec<u8>);

impl KeyId {
    pub fn from_base64(encoded: &str) -> Result<Self, ShimError> {
        let data = BASE64_STANDARD.decode(encoded.trim())?;
        Ok(Self(data.into_iter().take(KEY_ID_LEN).collect()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.as_bytes()))
    }
}

/// One line of the key list: `<base64 key> <label>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRecord {
    pub raw_key: String,
    pub label: String,
}

impl KeyRecord {
    pub fn key_id(&self) -> Result<KeyId, ShimError> {
        KeyId::from_base64(&self.raw_key)
    }

    /// Public key file contents in the layout signify expects.
    pub fn pubkey_block(&self) -> String {
        format!("{}{}\n{}\n", UNTRUSTED_COMMENT, self.label, self.raw_key)
    }
}

/// Armored signature as written by the sign path.
///
/// Both lines keep their terminators so `body()` reproduces the signify file
/// byte for byte. CRLF line endings are read as LF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureArtifact {
    pub untrusted_comment: String,
    pub base64_value: String,
}

impl SignatureArtifact {
    pub fn parse(text: &str) -> Result<Self, &'static str> {
        let text = text.replace("\r\n", "\n");
        let lines: Vec<&str> = text.split_inclusive('\n').collect();
        match lines.as_slice() {
            [header, ..] if *header != PGP_PREFIX => Err("missing armor header"),
            [_, comment, ..] if !comment.starts_with(UNTRUSTED_COMMENT) => {
                Err("missing untrusted comment")
            }
            [_, comment, value] => Ok(Self {
                untrusted_comment: comment.to_string(),
                base64_value: value.to_string(),
            }),
            [] | [_] | [_, _] => Err("truncated signature"),
            _ => Err("unexpected trailing lines"),
        }
    }

    pub fn body(&self) -> String {
        format!("{}{}", self.untrusted_comment, self.base64_value)
    }

    pub fn key_id(&self) -> Result<KeyId, ShimError> {
        KeyId::from_base64(&self.base64_value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    Good(KeyRecord),
    Bad(KeyRecord),
    NoKey(KeyId),
}

/// The argv shapes the shim understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Noop,
    Sign { user_id: String },
    Verify { signature_path: PathBuf },
}
