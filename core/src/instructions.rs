//! Composes the ordered "apply your changes" instruction sequence.
//!
//! Steps 1, 2 and the final restart step always exist; the additional-setup
//! step is inserted only when at least one selected server carries a setup
//! command, which shifts the restart step's ordinal from 3 to 4.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::config::ClaudeDesktopConfig;
use crate::path_rewrite::rewrite_for_machine;
use crate::server_registry::ServerMetadata;
use crate::setup::servers_needing_setup;

/// Installs Node.js 22 via fnm and prints the installed version.
pub const NODE_INSTALL_COMMAND: &str = "curl -fsSL https://fnm.vercel.app/install | bash && source ~/.zshrc && eval \"$(fnm env --use-on-cd --shell zsh)\" >> ~/.zshrc && source ~/.zshrc && fnm use --install-if-missing 22 && node -v";

/// Installs uv and a managed Python.
pub const UV_INSTALL_COMMAND: &str =
    "curl -LsSf https://astral.sh/uv/install.sh | sh && source $HOME/.cargo/env && uv python install";

const NODE_FALLBACK_NOTE: &str = "If the command above fails, install Node.js by downloading the installer from https://nodejs.org/en/download/prebuilt-installer";

/// Where the desktop app reads its configuration, relative to the shell
/// variable captured at the start of the write command.
const DESKTOP_CONFIG_PATH: &str =
    "$HOME_DIR/Library/Application Support/Claude/claude_desktop_config.json";

/// One renderable unit within a step.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StepItem {
    /// A literal shell command the user copies and runs as-is.
    Command(String),
    /// Plain prose shown between commands.
    Note(String),
}

/// One numbered instruction step.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ApplyStep {
    pub ordinal: usize,
    pub title: String,
    pub items: Vec<StepItem>,
}

/// Server-type name as shown to the user: first character upper-cased.
pub fn display_name(server_type: &str) -> String {
    let mut chars = server_type.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Shell command that writes the machine-ready config to the desktop app's
/// config file.
///
/// The JSON payload is single-quoted for `echo`, so every `$HOME_DIR` the
/// rewrite introduced is re-escaped as `'"$HOME_DIR"'` to briefly leave the
/// single-quoted region and let the shell substitute the captured value.
fn write_config_command(rewritten: &ClaudeDesktopConfig) -> String {
    #[allow(clippy::expect_used)]
    let json = serde_json::to_string_pretty(rewritten)
        .expect("desktop config serialization cannot fail");
    let json = json.replace("$HOME_DIR", "'\"$HOME_DIR\"'");
    format!("HOME_DIR=$(echo $HOME) && echo '{json}' > \"{DESKTOP_CONFIG_PATH}\"")
}

/// Builds the full instruction sequence for `config`.
///
/// Ordinals are contiguous from 1; the total step count depends only on
/// whether any selected server needs setup.
pub fn build_apply_steps(
    config: &ClaudeDesktopConfig,
    registry: &HashMap<String, ServerMetadata>,
) -> Vec<ApplyStep> {
    let needs_setup = servers_needing_setup(&config.mcp_servers, registry);
    let rewritten = rewrite_for_machine(config);
    debug!(
        servers = config.mcp_servers.len(),
        needing_setup = needs_setup.len(),
        "composing apply steps"
    );

    let mut steps = vec![
        ApplyStep {
            ordinal: 1,
            title:
                "Install Node.js and uv by running these commands (if not already installed)"
                    .to_string(),
            items: vec![
                StepItem::Command(NODE_INSTALL_COMMAND.to_string()),
                StepItem::Note(NODE_FALLBACK_NOTE.to_string()),
                StepItem::Command(UV_INSTALL_COMMAND.to_string()),
            ],
        },
        ApplyStep {
            ordinal: 2,
            title: "Save your MCP servers to Claude by running:".to_string(),
            items: vec![StepItem::Command(write_config_command(&rewritten))],
        },
    ];

    if !needs_setup.is_empty() {
        let mut items = Vec::with_capacity(needs_setup.len() * 2);
        for server_type in &needs_setup {
            let Some(setup_command) = registry
                .get(server_type)
                .and_then(|meta| meta.setup_command.clone())
            else {
                continue;
            };
            items.push(StepItem::Note(format!("{}:", display_name(server_type))));
            items.push(StepItem::Command(setup_command));
        }
        steps.push(ApplyStep {
            ordinal: 3,
            title: "Some servers require additional setup. Run the following commands:"
                .to_string(),
            items,
        });
    }

    steps.push(ApplyStep {
        ordinal: if needs_setup.is_empty() { 3 } else { 4 },
        title: "Restart Claude.app".to_string(),
        items: Vec::new(),
    });

    steps
}
