//! # grouper-core
//!
//! Core types for Grouper, the group assignment engine.
//!
//! This crate provides the foundational types shared across all Grouper crates:
//! - Entity structs for people, groups and the `Scheme` aggregate
//! - Identifier newtypes (`PersonId`, `GroupKey`)
//! - The assignment strategy enum
//! - The happiness model (satisfaction score of a placed person)
//! - Scheme statistics and preference highlighting
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod happiness;
pub mod ids;
pub mod stats;

pub use entities::{Group, Layout, Person, Scheme};
pub use enums::AssignStrategy;
pub use errors::CoreError;
pub use ids::{GroupKey, PersonId};
