use anyhow::Context;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn write_selection(dir: &std::path::Path, contents: &str) -> anyhow::Result<PathBuf> {
    let path = dir.join("servers.json");
    fs::write(&path, contents)?;
    Ok(path)
}

#[test]
fn unknown_server_renders_three_steps() -> anyhow::Result<()> {
    let tmp = tempdir()?;
    let config = write_selection(
        tmp.path(),
        r#"{ "mcpServers": { "custom": { "command": "python", "args": ["main.py"] } } }"#,
    )?;

    Command::cargo_bin("mcp-apply")
        .context("should find binary for mcp-apply")?
        .arg(&config)
        .arg("--no-ansi")
        .assert()
        .success()
        .stdout(predicates::str::contains("Step 3: Restart Claude.app"))
        .stdout(predicates::str::contains("main.py"))
        .stdout(predicates::str::contains("additional setup").not());
    Ok(())
}

#[test]
fn exa_server_renders_setup_step_and_rewritten_path() -> anyhow::Result<()> {
    let tmp = tempdir()?;
    let config = write_selection(
        tmp.path(),
        r#"{
            "mcpServers": {
                "exa": {
                    "command": "node",
                    "args": ["/Users/dev/exa-mcp-server/build/index.js"],
                    "env": { "EXA_API_KEY": "secret" }
                }
            },
            "cloudflare": { "ignored": true }
        }"#,
    )?;

    Command::cargo_bin("mcp-apply")
        .context("should find binary for mcp-apply")?
        .arg(&config)
        .arg("--no-ansi")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Step 3: Some servers require additional setup. Run the following commands:",
        ))
        .stdout(predicates::str::contains("Exa:"))
        .stdout(predicates::str::contains("Step 4: Restart Claude.app"))
        .stdout(predicates::str::contains(
            "mcp-servers/exa-mcp-server-main/build/index.js",
        ))
        .stdout(predicates::str::contains("/Users/dev/exa-mcp-server").not())
        .stdout(predicates::str::contains("cloudflare").not());
    Ok(())
}

#[test]
fn json_output_parses_back_into_the_step_shape() -> anyhow::Result<()> {
    let tmp = tempdir()?;
    let config = write_selection(
        tmp.path(),
        r#"{ "mcpServers": { "exa": { "command": "node", "args": ["/dev/index.js"] } } }"#,
    )?;

    let output = Command::cargo_bin("mcp-apply")
        .context("should find binary for mcp-apply")?
        .arg(&config)
        .arg("--json")
        .output()?;
    assert!(output.status.success());

    let steps: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let steps = steps.as_array().context("top-level JSON should be an array")?;
    assert_eq!(steps.len(), 4);
    assert_eq!(steps[0]["ordinal"], 1);
    assert_eq!(steps[3]["title"], "Restart Claude.app");
    Ok(())
}

#[test]
fn missing_config_file_fails_with_context() -> anyhow::Result<()> {
    Command::cargo_bin("mcp-apply")
        .context("should find binary for mcp-apply")?
        .arg("/nonexistent/servers.json")
        .assert()
        .failure()
        .stderr(predicates::str::contains("loading server selection"));
    Ok(())
}
