use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::issues::{Issue, Report};

// ============================================================
// Config Types (get_config)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project root; the config file is searched upward from here
    pub project_root_path: String,
}

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub directives: Vec<String>,
    pub excludes: Vec<String>,
    pub require_explanation: bool,
    pub require_specific: bool,
    pub require_machine: bool,
    pub includes: Vec<String>,
    pub ignores: Vec<String>,
    pub ignore_test_files: bool,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            directives: c.directives,
            excludes: c.excludes,
            require_explanation: c.require_explanation,
            require_specific: c.require_specific,
            require_machine: c.require_machine,
            includes: c.includes,
            ignores: c.ignores,
            ignore_test_files: c.ignore_test_files,
        }
    }
}

// ============================================================
// Scan Types (scan_directives)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanDirectivesParams {
    /// Absolute path of the project root to scan
    pub project_root_path: String,
    /// Only return issues of this rule (e.g. "missing-explanation")
    pub rule: Option<String>,
    /// Maximum number of items to return (default 20, max 100)
    pub limit: Option<u32>,
    /// Number of items to skip
    pub offset: Option<u32>,
}

/// Result of scan_directives operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveScanResult {
    /// Number of issues matching the rule filter
    pub total_count: usize,
    /// Number of files with at least one matching issue
    pub total_file_count: usize,
    /// Issue counts per rule id, before filtering
    pub counts_by_rule: BTreeMap<String, usize>,
    /// Files that could not be parsed
    pub parse_failures: Vec<ParseFailureItem>,
    pub items: Vec<DirectiveItem>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveItem {
    pub rule: String,
    pub severity: String,
    pub file_path: String,
    pub line: usize,
    pub column: usize,
    /// The comment line as written
    pub directive: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl From<&Issue> for DirectiveItem {
    fn from(issue: &Issue) -> Self {
        let position = issue.position();
        Self {
            rule: issue.rule().to_string(),
            severity: issue.severity().to_string(),
            file_path: position.file.clone(),
            line: position.line,
            column: position.column,
            directive: issue.context().full_directive.clone(),
            message: issue.details(),
            suggestion: issue.suggestion(),
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParseFailureItem {
    pub file_path: String,
    pub error: String,
}

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
