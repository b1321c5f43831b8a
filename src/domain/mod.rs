//! Content model layer.
//!
//! ## Purpose
//! - Keep the cheatsheet tree and report structs in one place.
//! - Make the JSON handoff schema explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — Cheatsheet/Category/Entry plus report/output structs.
//! - `declaration.rs` — declaration builders and `DeclarationError`.
//!
//! ## Rule of thumb
//! Domain types are data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes to the serialized model affect the export handoff.
//! Keep them synchronized with `docs/contracts/cheatsheet.schema.json`.

pub mod declaration;
pub mod models;
