use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Created .nolintlintrc.json"));
    assert!(test.root().join(".nolintlintrc.json").exists());

    let content = test.read_file(".nolintlintrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["directives"][0], "nolint");
    assert_eq!(parsed["requireExplanation"], true);
    assert_eq!(parsed["requireMachine"], false);
    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".nolintlintrc.json", "{}")?;

    let output = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains(".nolintlintrc.json already exists"));
    assert_eq!(test.read_file(".nolintlintrc.json")?, "{}");

    Ok(())
}
