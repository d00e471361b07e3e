use crate::{core::ParseFailure, issues::Issue};

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Init(InitSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    /// Set when the config file already existed and nothing was written.
    pub error: Option<String>,
}

/// Result of running a nolintlint command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 is returned when any issue was found.
    pub exit_on_issues: bool,
    /// Directive issues in file then position order. Empty for `init`.
    pub issues: Vec<Issue>,
    /// Source files that could not be read or parsed.
    pub parse_failures: Vec<ParseFailure>,
    pub source_files_checked: usize,
}

impl CommandResult {
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}
