use anyhow::Result;

use super::super::args::CheckCommand;
use super::{CommandResult, CommandSummary, helper::finish};
use crate::core::CheckContext;

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(args)?;

    let issues = ctx.issues().to_vec();
    let parse_failures = ctx.parse_failures().to_vec();
    log::debug!(
        "Checked {} file(s): {} issue(s), {} parse failure(s)",
        ctx.files.len(),
        issues.len(),
        parse_failures.len()
    );

    Ok(finish(
        CommandSummary::Check,
        issues,
        parse_failures,
        ctx.files.len(),
        args.set_exit_status,
    ))
}
