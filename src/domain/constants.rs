/// First line of every armored signature we emit and accept.
pub const PGP_PREFIX: &str = "-----BEGIN PGP SIGNATURE-----\n";
pub const UNTRUSTED_COMMENT: &str = "untrusted comment: ";

/// Key ids are this many leading bytes of a decoded key or signature blob.
pub const KEY_ID_LEN: usize = 10;

// argv markers of the two invocation shapes
pub const STATUS_FD_STDERR: &str = "--status-fd=2";
pub const STATUS_FD_STDOUT: &str = "--status-fd=1";
pub const SIGN_FLAGS: &str = "-bsau";
pub const VERIFY_FLAG: &str = "--verify";
pub const STDIN_MARKER: &str = "-";

// status lines are intentionally left without their trailing fields
pub const STATUS_SIG_CREATED: &str = "\n[GNUPG:] SIG_CREATED ";
pub const STATUS_GOODSIG: &str = "\n[GNUPG:] GOODSIG ";
pub const STATUS_BADSIG: &str = "\n[GNUPG:] BADSIG ";
pub const STATUS_ERRSIG: &str = "\n[GNUPG:] ERRSIG ";

/// Exact stdout of a successful `signify -V`.
pub const SIGNATURE_VERIFIED: &str = "Signature Verified\n";

pub const HOME_ENV: &str = "GPG_SIGNIFY_HOME";
pub const CONFIG_FILE_NAME: &str = "gpg-signify.toml";
pub const LOG_FILE_NAME: &str = "log.txt";
pub const DEFAULT_PUBKEYS_FILE: &str = ".pubkeys";

pub const DEFAULT_SIGNER_PROGRAM: &str = "trezor-signify";
pub const DEFAULT_VERIFIER_PROGRAM: &str = "signify-openbsd";
