//! Compilation of per-directive regular expressions.
//!
//! Every configured directive name gets two patterns:
//! - a prefix pattern, run on the normalized comment text, deciding whether the
//!   directive is used in the comment at all
//! - a full pattern, run on the first raw comment line, which is the grammar a
//!   well-formed directive must follow:
//!   `//<directive>[:<comma-separated-linters>] [// <explanation>]`

use std::fmt;

use regex::Regex;
use thiserror::Error;

/// Which of the two directive patterns failed to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Prefix,
    Full,
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternKind::Prefix => write!(f, "directive"),
            PatternKind::Full => write!(f, "full"),
        }
    }
}

/// Errors raised while building a linter.
#[derive(Debug, Error)]
pub enum LinterError {
    /// A configured directive name was empty.
    #[error("directive name must not be empty")]
    EmptyDirective,

    /// A directive name produced a pattern the regex engine rejected.
    #[error("unable to create {kind} pattern for \"{directive}\"")]
    InvalidPattern {
        directive: String,
        kind: PatternKind,
        #[source]
        source: regex::Error,
    },
}

/// Compiled patterns for one directive name.
#[derive(Debug, Clone)]
pub struct DirectivePatterns {
    name: String,
    prefix: Regex,
    full: Regex,
}

impl DirectivePatterns {
    /// Compile both patterns for `directive`.
    ///
    /// The name is matched literally; regex metacharacters are escaped.
    pub fn compile(directive: &str) -> Result<Self, LinterError> {
        if directive.is_empty() {
            return Err(LinterError::EmptyDirective);
        }
        let quoted = regex::escape(directive);

        let prefix = Regex::new(&format!(r"^\s*({quoted})(:\S+)?\b")).map_err(|source| {
            LinterError::InvalidPattern {
                directive: directive.to_string(),
                kind: PatternKind::Prefix,
                source,
            }
        })?;
        let full = Regex::new(&format!(r"^//\s*{quoted}(:\S+)?\s*(//.*)?\s*\n?$")).map_err(
            |source| LinterError::InvalidPattern {
                directive: directive.to_string(),
                kind: PatternKind::Full,
                source,
            },
        )?;

        Ok(Self {
            name: directive.to_string(),
            prefix,
            full,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Find the directive token in normalized comment text.
    pub fn find_directive<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.prefix
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Match a raw comment line against the directive grammar.
    ///
    /// Returns `(linters_text, explanation)`; either may be empty. The linter list
    /// keeps its leading `:` and the explanation keeps its leading `//`.
    pub fn match_full<'t>(&self, line: &'t str) -> Option<(&'t str, &'t str)> {
        self.full.captures(line).map(|caps| {
            let linters = caps.get(1).map_or("", |m| m.as_str());
            let explanation = caps.get(2).map_or("", |m| m.as_str());
            (linters, explanation)
        })
    }
}
