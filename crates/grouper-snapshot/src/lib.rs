//! # grouper-snapshot
//!
//! Durable representation of a [`Scheme`](grouper_core::Scheme).
//!
//! - [`document`]: the versioned wire format (`version`, `title`, `people[]`,
//!   `groups[]`, `useGroupPreferences`)
//! - [`codec`]: `Scheme` to document and back, plus JSON text with schema
//!   validation of untrusted input
//! - [`store`]: named snapshots as `{name}.json` files in one directory
//!
//! Decoding never runs the validator. Callers hand the decoded scheme to
//! `SchemeService::open`, which does.

pub mod codec;
pub mod document;
pub mod error;
pub mod store;

pub use codec::{decode, encode, from_json, to_json};
pub use document::{FORMAT_VERSION, GroupRecord, PersonRecord, SnapshotDocument};
pub use error::SnapshotError;
pub use store::{SnapshotStore, read_file, write_file};
