//! Root of the `mcp-apply-core` library.

// Prevent accidental direct writes to stdout/stderr in library code. All
// user-visible output must go through the caller's renderer.
#![deny(clippy::print_stdout, clippy::print_stderr)]

mod config;
pub mod error;
mod instructions;
mod path_rewrite;
mod server_registry;
mod setup;

pub use config::ClaudeDesktopConfig;
pub use config::McpServerConfig;
pub use instructions::ApplyStep;
pub use instructions::StepItem;
pub use instructions::build_apply_steps;
pub use instructions::display_name;
pub use path_rewrite::rewrite_for_machine;
pub use server_registry::ServerMetadata;
pub use server_registry::built_in_server_registry;
pub use setup::servers_needing_setup;
