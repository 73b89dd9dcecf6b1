use crate::domain::constants::{
    CONFIG_FILE_NAME, DEFAULT_PUBKEYS_FILE, DEFAULT_SIGNER_PROGRAM, DEFAULT_VERIFIER_PROGRAM,
};
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ProgramConfig {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FilesConfig {
    #[serde(default = "default_pubkeys")]
    pub pubkeys: PathBuf,
}

fn default_pubkeys() -> PathBuf {
    PathBuf::from(DEFAULT_PUBKEYS_FILE)
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            pubkeys: default_pubkeys(),
        }
    }
}

/// Contents of `gpg-signify.toml`. Every section is optional.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ShimConfig {
    /// Upper bound for each external program; unset waits forever.
    pub timeout_secs: Option<u64>,
    pub signer: ProgramConfig,
    pub verifier: ProgramConfig,
    pub files: FilesConfig,
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            signer: ProgramConfig {
                program: DEFAULT_SIGNER_PROGRAM.to_string(),
                args: vec!["sign".to_string()],
            },
            verifier: ProgramConfig {
                program: DEFAULT_VERIFIER_PROGRAM.to_string(),
                args: vec!["-V".to_string(), "-m-".to_string()],
            },
            files: FilesConfig::default(),
        }
    }
}

impl ShimConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Relative key list paths resolve against the shim home.
    pub fn pubkeys_path(&self, home: &Path) -> PathBuf {
        home.join(&self.files.pubkeys)
    }
}

pub fn load_config(home: &Path) -> anyhow::Result<ShimConfig> {
    let path = home.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(ShimConfig::default());
    }
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("invalid config {}", path.display()))
}
