//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Validate suppression directives in source comments
//! - `init`: Create a default `.nolintlintrc.json`
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory (config file is searched upward from here)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Directives to check, comma separated (overrides config file)
    #[arg(long = "directive", value_delimiter = ',')]
    pub directives: Vec<String>,

    /// Linters whose directives need no explanation, comma separated (overrides config file)
    #[arg(long = "exclude", value_delimiter = ',')]
    pub excludes: Vec<String>,

    /// Do not require an explanation after directives
    #[arg(long)]
    pub no_explain: bool,

    /// Do not require directives to name specific linters
    #[arg(long)]
    pub no_specific: bool,

    /// Require machine-readable directives (no space after `//`)
    #[arg(long)]
    pub machine: bool,

    /// Exit with status 1 when any issue is found
    #[arg(long)]
    pub set_exit_status: bool,
}

impl CheckArgs {
    /// Apply command line overrides on top of a loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if !self.directives.is_empty() {
            config.directives = self.directives.clone();
        }
        if !self.excludes.is_empty() {
            config.excludes = self.excludes.clone();
        }
        if self.no_explain {
            config.require_explanation = false;
        }
        if self.no_specific {
            config.require_specific = false;
        }
        if self.machine {
            config.require_machine = true;
        }
    }
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check suppression directives in JS/TS source comments
    Check(CheckCommand),
    /// Initialize a .nolintlintrc.json configuration file
    Init,
    /// Start MCP server for AI integration
    Serve,
}
