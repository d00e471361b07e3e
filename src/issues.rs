//! Issue types for directive analysis results.
//!
//! This module defines all issue types the linter can report. Each issue is
//! self-contained with all information needed by:
//! - Reporter: to display the issue to users (CLI, MCP, etc.)
//! - Fixers: the suggested directive text (for missing explanations)

use std::fmt;

use enum_dispatch::enum_dispatch;

use crate::core::Position;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    ExtraLeadingSpace,
    NotMachine,
    NotSpecific,
    Malformed,
    MissingExplanation,
}

impl Rule {
    pub fn all() -> [Rule; 5] {
        [
            Rule::ExtraLeadingSpace,
            Rule::NotMachine,
            Rule::NotSpecific,
            Rule::Malformed,
            Rule::MissingExplanation,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::ExtraLeadingSpace => "extra-leading-space",
            Rule::NotMachine => "not-machine",
            Rule::NotSpecific => "not-specific",
            Rule::Malformed => "malformed",
            Rule::MissingExplanation => "missing-explanation",
        }
    }

    /// Parse a rule identifier as printed by `Display`.
    pub fn parse(s: &str) -> Option<Self> {
        Rule::all().into_iter().find(|r| r.as_str() == s)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================
// Shared directive context
// ============================================================

/// Where a directive was found and how it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveContext {
    /// First raw comment line, exactly as written: `//  nolint:lll`.
    pub full_directive: String,
    /// Directive token with at most one leading space: `nolint` or ` nolint`.
    pub directive_with_optional_leading_space: String,
    /// Start of the comment group.
    pub position: Position,
}

impl DirectiveContext {
    pub fn new(
        full_directive: impl Into<String>,
        directive_with_optional_leading_space: impl Into<String>,
        position: Position,
    ) -> Self {
        Self {
            full_directive: full_directive.into(),
            directive_with_optional_leading_space: directive_with_optional_leading_space.into(),
            position,
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// More than one whitespace character between `//` and the directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraLeadingSpaceIssue {
    pub context: DirectiveContext,
}

impl ExtraLeadingSpaceIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::ExtraLeadingSpace
    }
}

/// Directive is not written in machine-readable form (`//nolint`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotMachineIssue {
    pub context: DirectiveContext,
}

impl NotMachineIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::NotMachine
    }

    /// The directive rewritten with no space after `//`.
    pub fn expected(&self) -> String {
        let full = &self.context.full_directive;
        match full.strip_prefix("//") {
            Some(rest) => format!("//{}", rest.trim_start()),
            None => full.clone(),
        }
    }
}

/// Directive does not name any linter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotSpecificIssue {
    pub context: DirectiveContext,
}

impl NotSpecificIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::NotSpecific
    }
}

/// Directive is used but does not follow the directive grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedIssue {
    pub context: DirectiveContext,
}

impl MalformedIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::Malformed
    }
}

/// Directive has no explanation although one is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingExplanationIssue {
    pub context: DirectiveContext,
    /// The directive with any trailing blank `//` removed, used for the suggestion.
    pub full_directive_without_explanation: String,
}

impl MissingExplanationIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::MissingExplanation
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A directive issue found during analysis.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    ExtraLeadingSpace(ExtraLeadingSpaceIssue),
    NotMachine(NotMachineIssue),
    NotSpecific(NotSpecificIssue),
    Malformed(MalformedIssue),
    MissingExplanation(MissingExplanationIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }

    pub fn position(&self) -> &Position {
        &self.context().position
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.details(), self.position())
    }
}

// ============================================================
// Report Trait
// ============================================================

/// Trait for types that can be reported.
///
/// Implemented by all issue types so reporters can treat them uniformly.
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Where and how the directive was written.
    fn context(&self) -> &DirectiveContext;

    /// Human-readable description of what was found and what was expected.
    fn details(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional replacement text for the directive.
    fn suggestion(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for ExtraLeadingSpaceIssue {
    fn context(&self) -> &DirectiveContext {
        &self.context
    }

    fn details(&self) -> String {
        format!(
            "directive `{}` should not have more than one leading space",
            self.context.full_directive
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for NotMachineIssue {
    fn context(&self) -> &DirectiveContext {
        &self.context
    }

    fn details(&self) -> String {
        format!(
            "directive `{}` should be written without leading space as `{}`",
            self.context.full_directive,
            self.expected()
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn suggestion(&self) -> Option<String> {
        Some(self.expected())
    }
}

impl Report for NotSpecificIssue {
    fn context(&self) -> &DirectiveContext {
        &self.context
    }

    fn details(&self) -> String {
        format!(
            "directive `{}` should mention specific linter such as `//{}:my-linter`",
            self.context.full_directive, self.context.directive_with_optional_leading_space
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for MalformedIssue {
    fn context(&self) -> &DirectiveContext {
        &self.context
    }

    fn details(&self) -> String {
        format!(
            "directive `{}` should match `//{}[:<comma-separated-linters>] [// <explanation>]`",
            self.context.full_directive, self.context.directive_with_optional_leading_space
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for MissingExplanationIssue {
    fn context(&self) -> &DirectiveContext {
        &self.context
    }

    fn details(&self) -> String {
        format!(
            "directive `{}` should provide explanation such as `{} // this is why`",
            self.context.full_directive, self.full_directive_without_explanation
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn suggestion(&self) -> Option<String> {
        Some(format!(
            "{} // this is why",
            self.full_directive_without_explanation
        ))
    }
}

// ============================================================
// Tests
// ============================================================
