use anyhow::Context;
use mcp_apply_core::ClaudeDesktopConfig;
use mcp_apply_core::StepItem;
use mcp_apply_core::build_apply_steps;
use mcp_apply_core::built_in_server_registry;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;

pub use cli::Cli;

/// Renders one composed instruction plan. The core only produces exact
/// string content; everything about presentation lives behind this trait.
pub trait StepRenderer {
    /// A step heading such as `Step 2: Save your MCP servers to Claude`.
    fn heading(&self, ordinal: usize, title: &str);

    /// A literal shell command the user is expected to copy and run as-is.
    fn terminal_command(&self, command: &str);

    /// Prose shown between commands.
    fn note(&self, text: &str);
}

/// Initialize the global logger once at startup based on the `--verbose`
/// flag. Logs go to stderr so they never interleave with the rendered
/// instructions on stdout.
fn init_logger(verbose: u8, allow_ansi: bool) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_ansi(allow_ansi)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn run_main(cli: Cli, renderer: &dyn StepRenderer) -> anyhow::Result<()> {
    init_logger(cli.verbose, !cli.no_ansi);

    let config = ClaudeDesktopConfig::load_from_file(&cli.config)
        .with_context(|| format!("loading server selection from {}", cli.config.display()))?;
    let registry = built_in_server_registry();
    let steps = build_apply_steps(&config, &registry);
    debug!(step_count = steps.len(), "composed instruction plan");

    if cli.json {
        let json = serde_json::to_string_pretty(&steps)
            .context("serializing instruction plan to JSON")?;
        println!("{json}");
        return Ok(());
    }

    for step in &steps {
        renderer.heading(step.ordinal, &step.title);
        for item in &step.items {
            match item {
                StepItem::Command(command) => renderer.terminal_command(command),
                StepItem::Note(text) => renderer.note(text),
            }
        }
    }

    Ok(())
}
