use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    config::load_config,
    core::CheckContext,
    issues::{Issue, Rule},
};

use super::types::{
    ConfigDto, ConfigValues, DirectiveItem, DirectiveScanResult, GetConfigParams, Pagination,
    ParseFailureItem, ScanDirectivesParams,
};

const DEFAULT_LIMIT: usize = 20;
const MAX_LIMIT: usize = 100;

#[derive(Clone)]
pub struct NolintlintMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for NolintlintMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl NolintlintMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Scan a project for problematic suppression directives
    #[tool(
        description = "Scan JS/TS source comments for malformed, unspecific or unexplained suppression directives (e.g. //nolint). Returns per-rule counts and a paginated list of issues."
    )]
    pub async fn scan_directives(
        &self,
        params: Parameters<ScanDirectivesParams>,
    ) -> Result<CallToolResult, McpError> {
        let scan_result = scan(&params.0)?;
        to_json_result(&scan_result)
    }

    /// Get the effective nolintlint configuration
    #[tool(
        description = "Get the nolintlint configuration for a project (directives, excluded linters, requirements, include/ignore patterns)."
    )]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {:#}", e), None))?;

        let config_dto = ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        };

        to_json_result(&config_dto)
    }
}

fn scan(params: &ScanDirectivesParams) -> Result<DirectiveScanResult, McpError> {
    let limit = params
        .limit
        .map(|v| v as usize)
        .unwrap_or(DEFAULT_LIMIT)
        .min(MAX_LIMIT);
    let offset = params.offset.map(|v| v as usize).unwrap_or(0);

    let rule_filter = match params.rule.as_deref() {
        Some(name) => Some(Rule::parse(name).ok_or_else(|| {
            let known: Vec<&str> = Rule::all().iter().map(Rule::as_str).collect();
            McpError::invalid_params(
                format!("Unknown rule '{}'. Expected one of: {}", name, known.join(", ")),
                None,
            )
        })?),
        None => None,
    };

    let root = PathBuf::from(&params.project_root_path);
    let config = load_config(&root)
        .map_err(|e| McpError::internal_error(format!("Failed to load config: {:#}", e), None))?
        .config;
    let ctx = CheckContext::from_config(root, config, false)
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {:#}", e), None))?;

    let issues = ctx.issues();

    let mut counts_by_rule: BTreeMap<String, usize> = Rule::all()
        .iter()
        .map(|rule| (rule.to_string(), 0))
        .collect();
    for issue in issues {
        *counts_by_rule.entry(issue.rule().to_string()).or_default() += 1;
    }

    let matching: Vec<&Issue> = issues
        .iter()
        .filter(|issue| rule_filter.is_none_or(|rule| issue.rule() == rule))
        .collect();

    let total_count = matching.len();
    let total_file_count = matching
        .iter()
        .map(|issue| issue.position().file.as_str())
        .collect::<HashSet<_>>()
        .len();

    let items: Vec<DirectiveItem> = matching
        .into_iter()
        .skip(offset)
        .take(limit)
        .map(DirectiveItem::from)
        .collect();
    let has_more = offset + items.len() < total_count;

    let parse_failures = ctx
        .parse_failures()
        .iter()
        .map(|f| ParseFailureItem {
            file_path: f.file_path.clone(),
            error: f.error.clone(),
        })
        .collect();

    Ok(DirectiveScanResult {
        total_count,
        total_file_count,
        counts_by_rule,
        parse_failures,
        items,
        pagination: Pagination {
            offset,
            limit,
            has_more,
        },
    })
}

fn to_json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_handler]
impl ServerHandler for NolintlintMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "nolintlint MCP helps AI agents keep linter suppression directives precise and documented.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. scan_directives - List directive issues (paginated, optional rule filter)\n\n\
                 Rules: extra-leading-space, not-machine, not-specific, malformed, missing-explanation.\n\
                 Fix malformed directives first; specific and explanation checks skip them."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = NolintlintMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
