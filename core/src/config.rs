use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;

/// Launch instructions for a single MCP server, in the shape the Claude
/// desktop app reads from `claude_desktop_config.json`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct McpServerConfig {
    pub command: String,

    #[serde(default)]
    pub args: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<IndexMap<String, String>>,
}

/// The full server selection submitted for installation.
///
/// `mcp_servers` is insertion-ordered so the generated config file is
/// byte-stable across runs with the same input.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct ClaudeDesktopConfig {
    #[serde(rename = "mcpServers", default)]
    pub mcp_servers: IndexMap<String, McpServerConfig>,

    /// Passthrough field emitted by some upstream selectors. Carried on
    /// input, always stripped by the rewriter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloudflare: Option<serde_json::Value>,
}

impl ClaudeDesktopConfig {
    /// Read and parse a server selection from `path`.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
