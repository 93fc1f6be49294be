use insta::assert_snapshot;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const TEMPLATE_YAML: &str = r#"
Parameters:
  InstanceType:
    Type: String
    Default: t3.micro
    AllowedValues:
      - t3.micro
      - t3.large
    Description: EC2 instance size
  KeyName:
    Type: AWS::EC2::KeyPair::KeyName
  Port:
    Type: Number
    Default: 8080
  Prefix:
    Type: String
    AllowedPattern: "[a-z]+"
Resources:
  Instance:
    Type: AWS::EC2::Instance
    Properties:
      InstanceType: !Ref InstanceType
      Tags:
        - Key: Name
          Value: !Sub "${Prefix}-instance"
"#;

fn run(dir: &Path, args: &[&str]) -> Output {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("paramgen"));
    cmd.current_dir(dir).args(args).env_remove("RUST_LOG");
    for (key, _) in std::env::vars() {
        if key.starts_with("PARAMGEN_") {
            cmd.env_remove(key);
        }
    }
    cmd.output().expect("should run successfully")
}

fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("template.yaml"), TEMPLATE_YAML).unwrap();
    dir
}

#[test]
fn json_stdout_snapshot() {
    let dir = workspace();
    let output = run(dir.path(), &["-f", "template.yaml", "--inyaml"]);

    assert!(output.status.success());
    assert_snapshot!(std::str::from_utf8(&output.stdout).unwrap(), @r#"
    [
      {
        "ParameterKey": "InstanceType",
        "ParameterValue": ""
      },
      {
        "ParameterKey": "KeyName",
        "ParameterValue": ""
      },
      {
        "ParameterKey": "Port",
        "ParameterValue": ""
      },
      {
        "ParameterKey": "Prefix",
        "ParameterValue": ""
      }
    ]
    "#);
}

#[test]
fn verbose_json_snapshot() {
    let dir = workspace();
    let output = run(dir.path(), &["-f", "template.yaml", "--inyaml", "-v", "--spaces", "1"]);

    assert!(output.status.success());
    assert_snapshot!(std::str::from_utf8(&output.stdout).unwrap(), @r#"
    [
     {
      "ParameterKey": "InstanceType",
      "ParameterValue": "Type: String, Default: t3.micro, AllowedValues: [t3.micro t3.large], Description: EC2 instance size"
     },
     {
      "ParameterKey": "KeyName",
      "ParameterValue": "Type: AWS::EC2::KeyPair::KeyName"
     },
     {
      "ParameterKey": "Port",
      "ParameterValue": "Type: Number, Default: 8080"
     },
     {
      "ParameterKey": "Prefix",
      "ParameterValue": "Type: String, AllowedPattern: [a-z]+"
     }
    ]
    "#);
}

#[test]
fn yaml_merge_snapshot() {
    let dir = workspace();
    fs::write(
        dir.path().join("params.yaml"),
        "- ParameterKey: Port\n  ParameterValue: '443'\n- ParameterKey: Retired\n  ParameterValue: gone\n",
    )
    .unwrap();

    let output = run(
        dir.path(),
        &["-f", "template.yaml", "--inyaml", "--outyaml", "-o", "params.yaml"],
    );

    assert!(output.status.success());
    assert_snapshot!(fs::read_to_string(dir.path().join("params.yaml")).unwrap(), @r#"
    - ParameterKey: InstanceType
      ParameterValue: ''
    - ParameterKey: KeyName
      ParameterValue: ''
    - ParameterKey: Port
      ParameterValue: '443'
    - ParameterKey: Prefix
      ParameterValue: ''
    - ParameterKey: Retired
      ParameterValue: gone
    "#);
}

#[test]
fn missing_input_snapshot() {
    let dir = workspace();
    let output = run(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(2));
    assert_snapshot!(std::str::from_utf8(&output.stderr).unwrap(), @"error: Missing required argument -f");
}
