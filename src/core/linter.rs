//! Directive linter - validates directive comments against the configured rules.
//!
//! For every comment group and every configured directive the linter:
//! 1. Detects whether the directive is used in the comment at all
//! 2. Measures whitespace between `//` and the directive
//! 3. Matches the first comment line against the directive grammar
//! 4. Applies the leading-space, machine, specific and explanation rules
//!
//! A line that uses a directive but does not follow the grammar produces a single
//! `Malformed` issue; specificity and explanation cannot be judged for it.

use std::collections::HashSet;
use std::sync::LazyLock;

use rayon::prelude::*;
use regex::Regex;

use crate::core::comments::{CommentGroup, SourceComments};
use crate::core::needs::Needs;
use crate::core::patterns::{DirectivePatterns, LinterError};
use crate::issues::{
    DirectiveContext, ExtraLeadingSpaceIssue, Issue, MalformedIssue, MissingExplanationIssue,
    NotMachineIssue, NotSpecificIssue,
};

static LEADING_SPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^//(\s*)").unwrap());
static TRAILING_BLANK_EXPLANATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*(//\s*)?$").unwrap());

/// Settings the linter is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinterConfig {
    /// Directive names to check, in order (e.g. `nolint`).
    pub directives: Vec<String>,
    /// Linter names that never require an explanation.
    pub excludes: Vec<String>,
    /// Optional requirements to enforce.
    pub needs: Needs,
}

impl LinterConfig {
    pub fn new(directives: Vec<String>, needs: Needs) -> Self {
        Self {
            directives,
            excludes: Vec::new(),
            needs,
        }
    }

    pub fn with_excludes(mut self, excludes: Vec<String>) -> Self {
        self.excludes = excludes;
        self
    }
}

/// Validates directive comments.
///
/// Built once from a [`LinterConfig`]; construction fails if any directive
/// cannot be compiled, so a `Linter` is always fully usable.
#[derive(Debug)]
pub struct Linter {
    config: LinterConfig,
    patterns: Vec<DirectivePatterns>,
    exclude_by_linter: HashSet<String>,
}

impl Linter {
    pub fn new(config: LinterConfig) -> Result<Self, LinterError> {
        let patterns = config
            .directives
            .iter()
            .map(|d| DirectivePatterns::compile(d))
            .collect::<Result<Vec<_>, _>>()?;

        let exclude_by_linter = config
            .excludes
            .iter()
            .filter(|e| !e.is_empty())
            .cloned()
            .collect();

        Ok(Self {
            config,
            patterns,
            exclude_by_linter,
        })
    }

    pub fn config(&self) -> &LinterConfig {
        &self.config
    }

    /// Check comment groups, returning issues in discovery order
    /// (group order, then directive order within a group).
    pub fn run(&self, groups: &[CommentGroup]) -> Vec<Issue> {
        let mut issues = Vec::new();
        for group in groups {
            for patterns in &self.patterns {
                self.check_directive(group, patterns, &mut issues);
            }
        }
        issues
    }

    /// Check many files in parallel. Output keeps the order of `files`.
    pub fn run_files(&self, files: &[SourceComments]) -> Vec<Issue> {
        files
            .par_iter()
            .map(|file| self.run(&file.groups))
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    }

    fn check_directive(
        &self,
        group: &CommentGroup,
        patterns: &DirectivePatterns,
        issues: &mut Vec<Issue>,
    ) {
        let Some(directive) = patterns.find_directive(group.text()) else {
            return;
        };

        // The normalized text has already lost the whitespace after `//`,
        // so it is measured on the raw line. Block comments are not checked.
        let Some(full_directive) = group.first_line() else {
            return;
        };
        let Some(leading_space) = LEADING_SPACE_REGEX
            .captures(full_directive)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
        else {
            return;
        };

        let directive_with_optional_leading_space = if leading_space.is_empty() {
            directive.to_string()
        } else {
            format!(" {directive}")
        };

        let context = DirectiveContext::new(
            full_directive,
            directive_with_optional_leading_space,
            group.position().clone(),
        );

        if leading_space.chars().count() > 1 {
            issues.push(Issue::ExtraLeadingSpace(ExtraLeadingSpaceIssue {
                context: context.clone(),
            }));
        }

        if self.config.needs.contains(Needs::MACHINE) && !leading_space.is_empty() {
            issues.push(Issue::NotMachine(NotMachineIssue {
                context: context.clone(),
            }));
        }

        let Some((linters_text, explanation)) = patterns.match_full(full_directive) else {
            issues.push(Issue::Malformed(MalformedIssue { context }));
            return;
        };

        let linters = parse_linters(linters_text);

        if self.config.needs.contains(Needs::SPECIFIC) && linters.is_empty() {
            issues.push(Issue::NotSpecific(NotSpecificIssue {
                context: context.clone(),
            }));
        }

        if self.config.needs.contains(Needs::EXPLANATION)
            && is_blank_explanation(explanation)
            && self.requires_explanation(&linters)
        {
            let full_directive_without_explanation = TRAILING_BLANK_EXPLANATION_REGEX
                .replace_all(full_directive, "")
                .into_owned();
            issues.push(Issue::MissingExplanation(MissingExplanationIssue {
                context,
                full_directive_without_explanation,
            }));
        }
    }

    /// A blanket directive always needs an explanation; otherwise one is needed
    /// unless every named linter is excluded.
    fn requires_explanation(&self, linters: &[&str]) -> bool {
        linters.is_empty()
            || linters
                .iter()
                .any(|linter| !self.exclude_by_linter.contains(*linter))
    }
}

/// Split `:a,b,,c` into `["a", "b", "c"]`.
fn parse_linters(linters_text: &str) -> Vec<&str> {
    linters_text
        .strip_prefix(':')
        .unwrap_or(linters_text)
        .split(',')
        .filter(|linter| !linter.is_empty())
        .collect()
}

fn is_blank_explanation(explanation: &str) -> bool {
    explanation.is_empty() || explanation.trim() == "//"
}
