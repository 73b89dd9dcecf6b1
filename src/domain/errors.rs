/// Conditions that abort an invocation. They are never reported through the
/// status protocol; `commands::dispatch` appends them to the failure log.
#[derive(thiserror::Error, Debug)]
pub enum ShimError {
    #[error("unexpected invocation: {0:?}")]
    MalformedInvocation(Vec<String>),
    #[error("malformed signature file {path}: {reason}")]
    MalformedSignature { path: String, reason: &'static str },
    #[error("malformed key list line {line}: expected `<base64 key> <label>`")]
    MalformedKeyList { line: usize },
    #[error("key list line {line}: key is not valid base64")]
    UndecodableKey { line: usize },
    #[error("invalid base64 blob: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("{program} exited with {status}: {stderr}")]
    ProgramFailed {
        program: String,
        status: String,
        stderr: String,
    },
    #[error("{program} did not finish within {secs}s")]
    TimedOut { program: String, secs: u64 },
}
