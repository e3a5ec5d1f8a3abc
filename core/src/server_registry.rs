//! Registry of MCP server types known to the installer.
//!
//! Built-in defaults are compiled into the binary so the tool works
//! out-of-the-box. A server type missing from this registry is still written
//! to the config file; it simply gets no extra setup step.

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

/// Per-server-type installation metadata.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ServerMetadata {
    /// Shell command the user must run once after the config file has been
    /// written. Absent for server types that work straight from `npx`/`uvx`.
    pub setup_command: Option<String>,
}

impl ServerMetadata {
    /// An empty setup command counts as "no setup needed" so it can never
    /// render as a blank instruction.
    pub fn has_setup_step(&self) -> bool {
        self.setup_command
            .as_deref()
            .is_some_and(|command| !command.is_empty())
    }
}

/// Built-in server-type registry, keyed by the name used in the
/// `mcpServers` map.
pub fn built_in_server_registry() -> HashMap<String, ServerMetadata> {
    use ServerMetadata as M;

    [
        (
            "exa",
            M {
                setup_command: Some(
                    "cd $HOME/mcp-servers/exa-mcp-server-main && npm install && npm run build"
                        .into(),
                ),
            },
        ),
        (
            "browserbase",
            M {
                setup_command: Some(
                    "cd $HOME/mcp-servers/mcp-server-browserbase-main/browserbase && npm install && npm run build"
                        .into(),
                ),
            },
        ),
        ("filesystem", M { setup_command: None }),
        ("github", M { setup_command: None }),
        ("slack", M { setup_command: None }),
        ("memory", M { setup_command: None }),
        ("puppeteer", M { setup_command: None }),
        ("brave-search", M { setup_command: None }),
        ("fetch", M { setup_command: None }),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}
