use super::{CommandResult, CommandSummary};
use crate::{
    core::ParseFailure,
    issues::{Issue, Severity},
};

pub fn finish(
    summary: CommandSummary,
    issues: Vec<Issue>,
    parse_failures: Vec<ParseFailure>,
    source_files_checked: usize,
    exit_on_issues: bool,
) -> CommandResult {
    let mut error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    if let CommandSummary::Init(ref summary) = summary
        && summary.error.is_some()
    {
        error_count += 1;
    }

    CommandResult {
        summary,
        error_count,
        warning_count,
        exit_on_issues,
        issues,
        parse_failures,
        source_files_checked,
    }
}
