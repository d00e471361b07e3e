//! Source file parsers.
//!
//! - `source`: JS/TS source parser (uses swc) producing comment groups

pub mod source;
