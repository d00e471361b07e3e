//! Core analysis engine.
//!
//! ## Module Structure
//!
//! - `comments`: Comment groups and positions (linter input)
//! - `needs`: Requirement mask (machine, specific, explanation)
//! - `patterns`: Per-directive regex compilation
//! - `linter`: Rule evaluation over comment groups
//! - `parsers`: JS/TS front end producing comment groups
//! - `file_scanner`: Source file discovery
//! - `context`: Orchestrates scanning, parsing and linting for a project

pub mod comments;
pub mod context;
pub mod file_scanner;
pub mod linter;
pub mod needs;
pub mod parsers;
pub mod patterns;

pub use comments::{CommentGroup, Position, SourceComments};
pub use context::{CheckContext, ParseFailure};
pub use linter::{Linter, LinterConfig};
pub use needs::Needs;
pub use patterns::{DirectivePatterns, LinterError, PatternKind};
