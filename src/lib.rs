//! nolintlint - checks suppression directives in JS/TS comments
//!
//! Suppression directives such as `//nolint:lll // long URL` silence linters
//! for a line or block. nolintlint finds these directives in source comments
//! and reports the ones that are malformed, too broad, or missing an
//! explanation.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Comment model, directive patterns, linter and check context
//! - `issues`: Issue type definitions and reporting trait
//! - `mcp`: Model Context Protocol server implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
