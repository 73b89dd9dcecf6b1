use crate::domain::errors::ShimError;
use crate::domain::models::{KeyId, KeyRecord};
use anyhow::Context;
use std::path::Path;

/// Public keys known to the shim, in key list order.
///
/// Lines are kept raw and only split and decoded when a lookup reaches them,
/// so a broken line never spoils the records above it.
#[derive(Debug, Default)]
pub struct KeyDirectory {
    lines: Vec<(usize, String)>,
}

impl KeyDirectory {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read key list {}", path.display()))?;
        Ok(Self::parse(&raw))
    }

    /// Keeps every non-blank, non-`#` line with its 1-based line number.
    pub fn parse(raw: &str) -> Self {
        let lines = raw
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.trim()))
            .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'))
            .map(|(no, l)| (no, l.to_string()))
            .collect();
        Self { lines }
    }

    /// Records whose derived key id equals `key_id`, in file order.
    ///
    /// A line that cannot be split or decoded surfaces as an `Err` item at
    /// its position; lines past the point where the caller stops are never
    /// looked at.
    pub fn find<'a>(
        &'a self,
        key_id: &'a KeyId,
    ) -> impl Iterator<Item = Result<KeyRecord, ShimError>> + 'a {
        self.lines.iter().filter_map(move |(no, line)| {
            match record_at(*no, line) {
                Ok((record, id)) if id == *key_id => Some(Ok(record)),
                Ok(_) => None,
                Err(err) => Some(Err(err)),
            }
        })
    }
}

fn record_at(line_no: usize, line: &str) -> Result<(KeyRecord, KeyId), ShimError> {
    let (raw_key, label) = line
        .split_once(' ')
        .ok_or(ShimError::MalformedKeyList { line: line_no })?;
    let record = KeyRecord {
        raw_key: raw_key.to_string(),
        label: label.to_string(),
    };
    let id = record
        .key_id()
        .map_err(|_| ShimError::UndecodableKey { line: line_no })?;
    Ok((record, id))
}
