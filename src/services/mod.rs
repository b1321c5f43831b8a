//! Service layer: loading, export and output helpers.
//!
//! ## Service map
//! - `loader.rs` — declaration discovery, per-file materialization,
//!   keyword/file-name uniqueness across a directory.
//! - `export.rs` — JSON handoff for the external docset generator.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod export;
pub mod loader;
pub mod output;
