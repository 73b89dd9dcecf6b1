use crate::domain::constants::HOME_ENV;
use anyhow::Context;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Directory holding `.pubkeys`, `log.txt` and the optional config.
///
/// Defaults to the directory of the executable; `GPG_SIGNIFY_HOME` overrides it.
pub fn shim_home() -> anyhow::Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|h| !h.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    let exe = std::env::current_exe().context("cannot locate the running executable")?;
    let exe = exe.canonicalize().unwrap_or(exe);
    exe.parent()
        .map(Path::to_path_buf)
        .context("executable has no parent directory")
}

/// Append-only record of fatal failures.
///
/// Opened once at startup; the file handle is flushed and closed on drop.
pub struct FailureLog {
    file: Option<File>,
}

impl FailureLog {
    /// Never fails: an unwritable log degrades to stderr on `record`.
    pub fn open(path: &Path) -> Self {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok();
        Self { file }
    }

    pub fn record(&mut self, args: &[String], err: &anyhow::Error) {
        let entry = format!(
            "[{}] gpg-signify {:?} failed: {:?}\n",
            unix_timestamp(),
            args,
            err
        );
        let written = self
            .file
            .as_mut()
            .map(|f| f.write_all(entry.as_bytes()).and_then(|_| f.flush()).is_ok())
            .unwrap_or(false);
        if !written {
            eprint!("{entry}");
        }
    }
}

impl Drop for FailureLog {
    fn drop(&mut self) {
        if let Some(f) = self.file.as_mut() {
            let _ = f.flush();
        }
    }
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}
