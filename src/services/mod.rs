//! Service layer containing the shim's logic and side-effect helpers.
//!
//! ## Service map
//! - `keyring.rs` — key list loading + lookup by key id.
//! - `signer.rs` — external signer invocation.
//! - `verifier.rs` — external verifier invocation over temporary files.
//! - `verification.rs` — signature file parsing + single-candidate verify policy.
//! - `status.rs` — GnuPG status-fd output.
//! - `process.rs` — child process runner (stdin feeding, capture, timeout).
//! - `config.rs` — optional `gpg-signify.toml`.
//! - `storage.rs` — shim home resolution + failure log.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod keyring;
pub mod process;
pub mod signer;
pub mod status;
pub mod storage;
pub mod verification;
pub mod verifier;
