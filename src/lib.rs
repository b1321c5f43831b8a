//! Cheatsheet declarations for a documentation-browser cheatsheet plugin.
//!
//! Declarations live as TOML files (one cheatsheet each). The loader turns a
//! directory of them into [`Cheatsheet`](domain::models::Cheatsheet) trees and
//! the export service hands those to the external docset generator as JSON.

pub mod cli;
pub mod commands;
pub mod domain;
pub mod logging;
pub mod services;
