//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `catalog.rs` — list/show/validate/export.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate loading and export to `services/*`.
//! - Keep behavior and output schema stable.

pub mod catalog;

pub use catalog::handle_commands;
