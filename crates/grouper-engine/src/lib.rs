//! # grouper-engine
//!
//! Everything that changes a [`Scheme`](grouper_core::Scheme):
//! - [`assign`]: the random, sequential and balanced placement strategies
//! - [`validate`]: the data-quality validator and its `enforce` wrapper
//! - [`import`]: line-oriented bulk input for people, groups, connections and preferences
//! - [`service`]: `SchemeService`, which applies each mutation atomically
//!
//! Every mutation runs against a copy of the scheme. The copy replaces the
//! live scheme only when the validator reports no errors.

pub mod assign;
pub mod error;
pub mod import;
pub mod service;
pub mod validate;

pub use assign::{AssignmentOutcome, Placement, DEFAULT_BALANCE_SLACK};
pub use error::EngineError;
pub use import::{ImportReport, SkippedLine};
pub use service::{Committed, EngineOptions, SchemeService, Target};
pub use validate::{Anomaly, ValidationReport, Violation, enforce, validate};
