use std::collections::HashMap;

use indexmap::IndexMap;

use crate::config::McpServerConfig;
use crate::server_registry::ServerMetadata;

/// Returns the server names that need a one-time setup command after the
/// config file has been written.
///
/// The result preserves the relative order of `servers` and contains each
/// name at most once. Server types unknown to `registry` are skipped.
pub fn servers_needing_setup(
    servers: &IndexMap<String, McpServerConfig>,
    registry: &HashMap<String, ServerMetadata>,
) -> Vec<String> {
    servers
        .keys()
        .filter(|name| {
            registry
                .get(name.as_str())
                .is_some_and(ServerMetadata::has_setup_step)
        })
        .cloned()
        .collect()
}
