use std::{
    cell::OnceCell,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result, anyhow};
use rayon::prelude::*;

use crate::{
    cli::args::CheckArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        comments::SourceComments, file_scanner::scan_files, linter::Linter,
        parsers::source::parse_source,
    },
    issues::Issue,
};

/// A source file that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub file_path: String,
    pub error: String,
}

/// Comment groups of every parsed file, plus the files that failed.
pub struct ParsedSources {
    pub sources: Vec<SourceComments>,
    pub failures: Vec<ParseFailure>,
}

/// Shared state for a single directive check run.
///
/// Configuration is resolved and files are discovered eagerly; parsing and
/// linting happen on first access and are cached with `OnceCell`.
pub struct CheckContext {
    pub config: Config,
    pub root_dir: PathBuf,
    /// Source files in path order.
    pub files: Vec<String>,
    pub verbose: bool,
    linter: Linter,
    parsed_sources: OnceCell<ParsedSources>,
    issues: OnceCell<Vec<Issue>>,
}

impl CheckContext {
    /// Build a context from command line arguments.
    ///
    /// Settings are merged with precedence CLI > config file > defaults. The
    /// config file is searched upward from `--source-root` (or the current
    /// directory).
    pub fn new(args: &CheckArgs) -> Result<Self> {
        let root_dir = args
            .common
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        if !config_result.from_file {
            log::info!(
                "No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        args.apply_overrides(&mut config);
        config.validate()?;

        Self::from_config(root_dir, config, args.common.verbose)
    }

    /// Build a context from an already resolved configuration.
    pub fn from_config(root_dir: PathBuf, config: Config, verbose: bool) -> Result<Self> {
        let linter = Linter::new(config.linter_config())
            .context("Invalid directive configuration")?;

        let path = root_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", root_dir))?;
        if !Path::new(path).exists() {
            anyhow::bail!("Source root does not exist: {}", root_dir.display());
        }

        let scan_result = scan_files(
            path,
            &config.includes,
            &config.ignores,
            config.ignore_test_files,
        );

        if scan_result.skipped_count > 0 {
            log::warn!(
                "{} path(s) skipped due to access errors{}",
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }
        log::debug!(
            "Found {} source file(s) under {}",
            scan_result.files.len(),
            root_dir.display()
        );

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            verbose,
            linter,
            parsed_sources: OnceCell::new(),
            issues: OnceCell::new(),
        })
    }

    pub fn linter(&self) -> &Linter {
        &self.linter
    }

    /// Comment groups for every source file (lazy initialization).
    ///
    /// Reading and parsing run in parallel; each file gets its own swc
    /// `SourceMap` inside `parse_source`.
    pub fn parsed_sources(&self) -> &ParsedSources {
        self.parsed_sources.get_or_init(|| {
            let results: Vec<_> = self
                .files
                .par_iter()
                .map(|file_path| {
                    let result = std::fs::read_to_string(file_path)
                        .map_err(|e| anyhow!("Failed to read file: {}", e))
                        .and_then(|code| parse_source(code, file_path));
                    (file_path.clone(), result)
                })
                .collect();

            let mut sources = Vec::with_capacity(results.len());
            let mut failures = Vec::new();

            for (file_path, result) in results {
                match result {
                    Ok(parsed) => sources.push(parsed),
                    Err(e) => {
                        log::debug!("{} - {}", file_path, e);
                        failures.push(ParseFailure {
                            file_path,
                            error: e.to_string(),
                        });
                    }
                }
            }

            ParsedSources { sources, failures }
        })
    }

    pub fn parse_failures(&self) -> &[ParseFailure] {
        &self.parsed_sources().failures
    }

    /// Directive issues across all parsed files, in file then position order.
    pub fn issues(&self) -> &[Issue] {
        self.issues
            .get_or_init(|| self.linter.run_files(&self.parsed_sources().sources))
    }
}
