use clap::Parser;
use mcp_apply_cli::Cli;
use mcp_apply_cli::StepRenderer;
use mcp_apply_cli::run_main;
use owo_colors::OwoColorize;
use owo_colors::Style;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let renderer = StdioRenderer { ansi: !cli.no_ansi };
    run_main(cli, &renderer)
}

struct StdioRenderer {
    ansi: bool,
}

impl StdioRenderer {
    fn styled(&self, text: &str, style: Style) -> String {
        if self.ansi {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }
}

impl StepRenderer for StdioRenderer {
    fn heading(&self, ordinal: usize, title: &str) {
        let heading = format!("Step {ordinal}: {title}");
        println!("\n{}", self.styled(&heading, Style::new().bold()));
    }

    fn terminal_command(&self, command: &str) {
        // Indented so the command reads as one copyable block.
        println!(
            "\n    {}",
            self.styled(command, Style::new().fg_rgb::<200, 200, 200>())
        );
    }

    fn note(&self, text: &str) {
        println!("\n{}", self.styled(text, Style::new().fg_rgb::<127, 127, 127>()));
    }
}
