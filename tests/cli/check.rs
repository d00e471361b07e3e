use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_clean_file() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.ts",
        r#"
// nolint:lll // long URL below
const url = "https://example.com";
"#,
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(
        output
            .stdout
            .contains("Checked 1 source file - no issues found")
    );
    Ok(())
}

#[test]
fn test_blanket_directive() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "const a = 1; //nolint\n")?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains(
        "warning: directive `//nolint` should mention specific linter such as `//nolint:my-linter`  not-specific"
    ));
    assert!(output.stdout.contains(
        "warning: directive `//nolint` should provide explanation such as `//nolint // this is why`  missing-explanation"
    ));
    assert!(output.stdout.contains("--> ./src/app.ts:1:14"));
    assert!(output.stdout.contains("1 | const a = 1; //nolint"));
    assert!(output.stdout.contains("= help: //nolint // this is why"));
    assert!(output.stdout.contains("2 problems (0 errors, 2 warnings)"));
    Ok(())
}

#[test]
fn test_set_exit_status() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "const a = 1; //nolint\n")?;

    let mut cmd = test.check_command();
    cmd.arg("--set-exit-status");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    Ok(())
}

#[test]
fn test_set_exit_status_without_issues() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "//nolint:lll // generated\n")?;

    let mut cmd = test.check_command();
    cmd.arg("--set-exit-status");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    Ok(())
}

#[test]
fn test_malformed_directive() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "//nolint lll\nconst a = 1;\n")?;

    let output = run(test.check_command())?;

    assert!(output.stdout.contains(
        "error: directive `//nolint lll` should match `//nolint[:<comma-separated-linters>] [// <explanation>]`  malformed"
    ));
    assert!(!output.stdout.contains("missing-explanation"));
    assert!(output.stdout.contains("1 problem (1 error, 0 warnings)"));
    Ok(())
}

#[test]
fn test_extra_leading_space() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "//  nolint:lll // ok\nconst a = 1;\n")?;

    let output = run(test.check_command())?;

    assert!(output.stdout.contains(
        "warning: directive `//  nolint:lll // ok` should not have more than one leading space  extra-leading-space"
    ));
    assert!(output.stdout.contains("1 problem (0 errors, 1 warning)"));
    Ok(())
}

#[test]
fn test_machine_flag() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "// nolint:lll // long URL\nconst a = 1;\n")?;

    let output = run(test.check_command())?;
    assert!(output.stdout.contains("no issues found"));

    let mut cmd = test.check_command();
    cmd.arg("--machine");
    let output = run(cmd)?;

    assert!(output.stdout.contains(
        "directive `// nolint:lll // long URL` should be written without leading space as `//nolint:lll // long URL`"
    ));
    assert!(output.stdout.contains("= help: //nolint:lll // long URL"));
    Ok(())
}

#[test]
fn test_relaxed_flags() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "const a = 1; //nolint\n")?;

    let mut cmd = test.check_command();
    cmd.args(["--no-explain", "--no-specific"]);
    let output = run(cmd)?;

    assert!(output.stdout.contains("no issues found"));
    Ok(())
}

#[test]
fn test_exclude_flag() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "//nolint:lll\nconst a = 1;\n")?;

    let output = run(test.check_command())?;
    assert!(output.stdout.contains("missing-explanation"));

    let mut cmd = test.check_command();
    cmd.args(["--exclude", "dupl,lll"]);
    let output = run(cmd)?;
    assert!(output.stdout.contains("no issues found"));
    Ok(())
}

#[test]
fn test_custom_directive() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.ts",
        "//nolint\nconst a = 1;\n\n//eslint-ignore:no-console\nconsole.log(a);\n",
    )?;

    let mut cmd = test.check_command();
    cmd.args(["--directive", "eslint-ignore"]);
    let output = run(cmd)?;

    assert!(!output.stdout.contains("`//nolint`"));
    assert!(output.stdout.contains(
        "directive `//eslint-ignore:no-console` should provide explanation such as `//eslint-ignore:no-console // this is why`"
    ));
    assert!(output.stdout.contains("--> ./src/app.ts:4:1"));
    Ok(())
}

#[test]
fn test_block_comments_are_skipped() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "/* nolint */\nconst a = 1;\n")?;

    let output = run(test.check_command())?;

    assert!(output.stdout.contains("no issues found"));
    Ok(())
}

#[test]
fn test_config_file() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "//nolint:lll\nconst a = 1;\n")?;
    test.write_file(".nolintlintrc.json", r#"{ "excludes": ["lll"] }"#)?;

    let output = run(test.check_command())?;

    assert!(output.stdout.contains("no issues found"));
    Ok(())
}

#[test]
fn test_cli_overrides_config_file() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "//nolint\nconst a = 1;\n")?;
    test.write_file(
        ".nolintlintrc.json",
        r#"{ "requireExplanation": false, "requireSpecific": false }"#,
    )?;

    let output = run(test.check_command())?;
    assert!(output.stdout.contains("no issues found"));

    let mut cmd = test.check_command();
    cmd.args(["--directive", "nolint", "--machine"]);
    let output = run(cmd)?;
    assert!(output.stdout.contains("no issues found"));

    test.write_file("src/other.ts", "// nolint\nconst b = 1;\n")?;
    let mut cmd = test.check_command();
    cmd.arg("--machine");
    let output = run(cmd)?;
    assert!(output.stdout.contains("not-machine"));
    assert!(output.stdout.contains("--> ./src/other.ts:1:1"));
    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".nolintlintrc.json", r#"{ "ignores": ["**/generated/**"] }"#)?;
    test.write_file("src/generated/api.ts", "//nolint\nconst a = 1;\n")?;
    test.write_file("src/app.ts", "const b = 1;\n")?;

    let output = run(test.check_command())?;

    assert!(output.stdout.contains("Checked 1 source file"));
    Ok(())
}

#[test]
fn test_source_root() -> Result<()> {
    let test = CliTest::with_file("web/app.tsx", "const a = <div />; //nolint\n")?;

    let mut cmd = test.check_command();
    cmd.args(["--source-root", "web"]);
    let output = run(cmd)?;

    assert!(output.stdout.contains("--> web/app.tsx:1:20"));
    Ok(())
}

#[test]
fn test_parse_failure_warning() -> Result<()> {
    let test = CliTest::with_file("src/broken.ts", "const = ;\n")?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(
        output
            .stderr
            .contains("1 file(s) could not be parsed (use -v for details)")
    );
    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "const a = 1;\n")?;
    test.write_file(".nolintlintrc.json", r#"{ "directives": [""] }"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Error:"));
    assert!(output.stderr.contains("directives"));
    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("--help");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    for command in ["check", "init", "serve"] {
        assert!(output.stdout.contains(command), "missing {command}");
    }
    Ok(())
}
