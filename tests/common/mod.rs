#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PGP_PREFIX: &str = "-----BEGIN PGP SIGNATURE-----\n";
pub const USER_ID: &str = "dev@example.com";
pub const MESSAGE: &str = "hello";
pub const KEYNUM_A: &[u8; 8] = b"KEYNUM_A";
pub const SIG_COMMENT: &str = "untrusted comment: signature from trezor\n";

/// `Ed` + key number + fill bytes, the shape of a signify public key.
pub fn key_blob(keynum: &[u8; 8], fill: u8) -> String {
    blob(keynum, fill, 32)
}

/// `Ed` + key number + fill bytes, the shape of a signify signature.
pub fn sig_blob(keynum: &[u8; 8], fill: u8) -> String {
    blob(keynum, fill, 64)
}

fn blob(keynum: &[u8; 8], fill: u8, len: usize) -> String {
    let mut bytes = b"Ed".to_vec();
    bytes.extend_from_slice(keynum);
    bytes.extend(std::iter::repeat(fill).take(len));
    BASE64_STANDARD.encode(bytes)
}

pub fn key_id_hex(keynum: &[u8; 8]) -> String {
    let mut id = b"Ed".to_vec();
    id.extend_from_slice(keynum);
    hex::encode(id)
}

/// Isolated shim home with fake signer/verifier scripts.
///
/// The fake signer only signs for `USER_ID` and always emits the signature of
/// `good_key()`. The fake verifier accepts exactly that key, that signature and
/// `MESSAGE`, and records the temp file paths it was given in `seen_path()`.
pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub work: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let work = tmp.path().join("work");
        fs::create_dir_all(home.join("bin")).expect("create shim home");
        fs::create_dir_all(&work).expect("create work dir");

        let env = Self {
            _tmp: tmp,
            home,
            work,
        };
        env.install_script("signer", &env.default_signer());
        env.install_script("verifier", &env.default_verifier());
        env.write_config(None);
        env
    }

    pub fn good_key() -> String {
        key_blob(KEYNUM_A, 1)
    }

    pub fn good_sig() -> String {
        sig_blob(KEYNUM_A, 9)
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("gpg-signify");
        cmd.env("GPG_SIGNIFY_HOME", &self.home);
        cmd
    }

    pub fn sign_cmd(&self, user_id: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.args(["--status-fd=2", "-bsau", user_id]);
        cmd
    }

    pub fn verify_cmd(&self, signature: &Path) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("--keyid-format=long")
            .arg("--status-fd=1")
            .arg("--verify")
            .arg(signature)
            .arg("-");
        cmd
    }

    pub fn write_config(&self, timeout_secs: Option<u64>) {
        let mut raw = String::new();
        if let Some(secs) = timeout_secs {
            raw.push_str(&format!("timeout_secs = {secs}\n\n"));
        }
        for name in ["signer", "verifier"] {
            raw.push_str(&format!(
                "[{name}]\nprogram = \"sh\"\nargs = ['{}']\n\n",
                self.home.join("bin").join(name).display()
            ));
        }
        fs::write(self.home.join("gpg-signify.toml"), raw).expect("write config");
    }

    /// Scripts are run through `sh`, so they need no exec bit.
    pub fn install_script(&self, name: &str, body: &str) {
        fs::write(self.home.join("bin").join(name), body).expect("write script");
    }

    pub fn write_pubkeys(&self, lines: &[String]) {
        let mut raw = lines.join("\n");
        raw.push('\n');
        fs::write(self.home.join(".pubkeys"), raw).expect("write pubkeys");
    }

    pub fn write_signature(&self, contents: &str) -> PathBuf {
        let path = self.work.join("signature.asc");
        fs::write(&path, contents).expect("write signature");
        path
    }

    pub fn armored_good_signature(&self) -> PathBuf {
        self.write_signature(&format!("{PGP_PREFIX}{SIG_COMMENT}{}\n", Self::good_sig()))
    }

    pub fn seen_path(&self) -> PathBuf {
        self.home.join("verifier-seen")
    }

    pub fn seen_files(&self) -> Vec<PathBuf> {
        fs::read_to_string(self.seen_path())
            .unwrap_or_default()
            .lines()
            .map(PathBuf::from)
            .collect()
    }

    pub fn signed_message(&self) -> String {
        fs::read_to_string(self.home.join("signed-message")).unwrap_or_default()
    }

    pub fn log(&self) -> String {
        fs::read_to_string(self.home.join("log.txt")).unwrap_or_default()
    }

    fn default_signer(&self) -> String {
        format!(
            r#"[ "$1" = '{user}' ] || {{ echo "unknown identity $1" >&2; exit 1; }}
cat > '{out}'
printf '%s%s\n' '{comment}' '{sig}'
"#,
            user = USER_ID,
            out = self.home.join("signed-message").display(),
            comment = SIG_COMMENT,
            sig = Self::good_sig(),
        )
    }

    fn default_verifier(&self) -> String {
        format!(
            r#"for a in "$@"; do
  case "$a" in
    -x*) sig="${{a#-x}}" ;;
    -p*) pub="${{a#-p}}" ;;
  esac
done
printf '%s\n%s\n' "$sig" "$pub" >> '{seen}'
msg="$(cat)"
[ "$msg" = '{message}' ] || exit 1
[ "$(sed -n 2p "$pub")" = '{key}' ] || exit 1
[ "$(sed -n 2p "$sig")" = '{sig}' ] || exit 1
printf 'Signature Verified\n'
"#,
            seen = self.seen_path().display(),
            message = MESSAGE,
            key = Self::good_key(),
            sig = Self::good_sig(),
        )
    }
}
