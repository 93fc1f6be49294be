use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const TEMPLATE_JSON: &str = r#"{"Parameters": {"Subnet": {"Type": "String"}, "Ami": {"Type": "String"}}}"#;

/// Command running inside `dir` with a clean paramgen environment.
fn paramgen(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("paramgen").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    for (key, _) in std::env::vars() {
        if key.starts_with("PARAMGEN_") {
            cmd.env_remove(key);
        }
    }
    cmd
}

#[test]
fn test_help_lists_flags() {
    let dir = TempDir::new().unwrap();
    paramgen(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--file"))
        .stdout(predicate::str::contains("--outyaml"))
        .stdout(predicate::str::contains("--prune"))
        .stdout(predicate::str::contains("PARAMGEN_INDENT"));
}

#[test]
fn test_version_flag() {
    let dir = TempDir::new().unwrap();
    paramgen(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(paramgen::VERSION));
}

#[test]
fn test_missing_file_argument_exits_with_usage_code() {
    let dir = TempDir::new().unwrap();
    paramgen(dir.path())
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Missing required argument -f"));
}

#[test]
fn test_prints_parameters_to_stdout() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("template.json"), TEMPLATE_JSON).unwrap();

    paramgen(dir.path())
        .args(["-f", "template.json"])
        .assert()
        .success()
        .stdout(
            "[\n  {\n    \"ParameterKey\": \"Ami\",\n    \"ParameterValue\": \"\"\n  },\n  {\n    \"ParameterKey\": \"Subnet\",\n    \"ParameterValue\": \"\"\n  }\n]\n",
        );
}

#[test]
fn test_missing_parameters_section_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("template.yaml"), "Resources: {}\n").unwrap();

    paramgen(dir.path())
        .args(["-f", "template.yaml", "--inyaml", "-o", "params.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Parameters not found in file"));

    assert!(!dir.path().join("params.json").exists());
}

#[test]
fn test_unreadable_template_fails() {
    let dir = TempDir::new().unwrap();
    paramgen(dir.path())
        .args(["-f", "missing.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read template"));
}

#[test]
fn test_prune_reports_removed_entries() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("template.json"), TEMPLATE_JSON).unwrap();
    fs::write(
        dir.path().join("params.json"),
        r#"[{"ParameterKey": "Ami", "ParameterValue": "ami-1"}, {"ParameterKey": "Legacy", "ParameterValue": "old"}]"#,
    )
    .unwrap();

    paramgen(dir.path())
        .args(["-f", "template.json", "-o", "params.json", "-r", "--min"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Removing value {Legacy old}"));

    assert_eq!(
        fs::read_to_string(dir.path().join("params.json")).unwrap(),
        r#"[{"ParameterKey":"Ami","ParameterValue":"ami-1"},{"ParameterKey":"Subnet","ParameterValue":""}]"#
    );
}

#[test]
fn test_config_file_supplies_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("template.yaml"),
        "Parameters:\n  Name:\n    Type: String\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("paramgen.toml"),
        "[input]\nyaml = true\n\n[output]\nyaml = true\n",
    )
    .unwrap();

    paramgen(dir.path())
        .args(["-f", "template.yaml"])
        .assert()
        .success()
        .stdout("- ParameterKey: Name\n  ParameterValue: ''\n");
}

#[test]
fn test_env_var_supplies_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("template.json"), TEMPLATE_JSON).unwrap();

    paramgen(dir.path())
        .args(["-f", "template.json"])
        .env("PARAMGEN_MINIFY", "true")
        .assert()
        .success()
        .stdout(
            "[{\"ParameterKey\":\"Ami\",\"ParameterValue\":\"\"},{\"ParameterKey\":\"Subnet\",\"ParameterValue\":\"\"}]\n",
        );
}

#[test]
fn test_log_file_receives_prune_messages() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("template.json"), TEMPLATE_JSON).unwrap();
    fs::write(
        dir.path().join("params.json"),
        r#"[{"ParameterKey": "Gone", "ParameterValue": "x"}]"#,
    )
    .unwrap();

    paramgen(dir.path())
        .args(["-f", "template.json", "-o", "params.json", "--prune"])
        .env("PARAMGEN_LOG_FILE", "logs/paramgen.log")
        .env("PARAMGEN_LOG_CONSOLE", "none")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    let log = fs::read_to_string(dir.path().join("logs").join("paramgen.log")).unwrap();
    assert!(log.contains("Removing value {Gone x}"));
}
