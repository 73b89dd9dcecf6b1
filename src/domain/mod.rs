//! Shared data model layer (types/constants only).
//!
//! ## Files
//! - `models.rs` — key ids, key records, signature artifacts, outcomes, invocations.
//! - `constants.rs` — armor header, status keywords and the verifier success string.
//! - `errors.rs` — fatal error taxonomy.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/process side effects.
//!
//! ## Compatibility note
//! The constants are byte-for-byte what GnuPG callers (git) parse. Keep them stable.

pub mod constants;
pub mod errors;
pub mod models;
