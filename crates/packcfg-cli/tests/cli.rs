use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

/// A `packcfg resolve` command isolated from the host environment
fn resolve_in(project: &Path, gradle_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("packcfg").unwrap();
    cmd.env("GRADLE_USER_HOME", gradle_home.path())
        .env_remove("PACKCFG_LOG")
        .arg("resolve")
        .arg("--no-env")
        .arg("--project")
        .arg(project);
    cmd
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn defaults_without_inputs() {
    let project = tempdir().unwrap();
    let home = tempdir().unwrap();

    let json = json_output(resolve_in(project.path(), &home).args(["--namespace", "com.qayham.qrscanner"]));

    assert_eq!(json["namespace"], "com.qayham.qrscanner");
    assert_eq!(json["applicationId"], "com.qayham.qrscanner");
    assert_eq!(json["compileSdk"], 35);
    assert_eq!(json["minSdk"], 23);
    assert_eq!(json["targetSdk"], 35);
    assert_eq!(json["versionCode"], 13);
    assert_eq!(json["versionName"], "0.1.1");
    assert_eq!(json["signing"], serde_json::json!({}));
    assert_eq!(json["buildTypes"]["release"]["minify"], true);
}

#[test]
fn partial_signing_properties() {
    let project = tempdir().unwrap();
    let home = tempdir().unwrap();
    fs::write(project.path().join("key.properties"), "keyAlias=release\nstoreFile=/ks.jks\n").unwrap();
    fs::write(project.path().join("packcfg.yaml"), "namespace: com.qayham.qrscanner\n").unwrap();

    let json = json_output(&mut resolve_in(project.path(), &home));

    assert_eq!(
        json["signing"],
        serde_json::json!({ "keyAlias": "release", "storeFile": "/ks.jks" })
    );
}

#[test]
fn non_numeric_min_sdk_fails_without_output() {
    let project = tempdir().unwrap();
    let home = tempdir().unwrap();

    resolve_in(project.path(), &home)
        .args(["--namespace", "com.qayham.qrscanner", "-P", "flutter.minSdkVersion=abc"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("flutter.minSdkVersion"));
}

#[test]
fn missing_namespace_fails() {
    let project = tempdir().unwrap();
    let home = tempdir().unwrap();

    resolve_in(project.path(), &home)
        .assert()
        .failure()
        .stderr(predicate::str::contains("namespace"));
}

#[test]
fn blank_namespace_fails() {
    let project = tempdir().unwrap();
    let home = tempdir().unwrap();
    fs::write(project.path().join("packcfg.yaml"), "namespace: \"\"\n").unwrap();

    resolve_in(project.path(), &home)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Required value 'namespace'"));

    resolve_in(project.path(), &home)
        .args(["--namespace", " "])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn latin1_signing_file_with_classic_mac_line_endings() {
    let project = tempdir().unwrap();
    let home = tempdir().unwrap();
    fs::write(
        project.path().join("key.properties"),
        b"keyAlias=release\rkeyPassword=caf\xe9\rstoreFile=/ks.jks\rstorePassword=s3cret\r",
    )
    .unwrap();

    let json = json_output(resolve_in(project.path(), &home).args([
        "--namespace",
        "com.example",
        "--reveal-secrets",
    ]));

    assert_eq!(
        json["signing"],
        serde_json::json!({
            "keyAlias": "release",
            "keyPassword": "caf\u{e9}",
            "storeFile": "/ks.jks",
            "storePassword": "s3cret",
        })
    );
}

#[test]
fn malformed_property_file_fails() {
    let project = tempdir().unwrap();
    let home = tempdir().unwrap();
    fs::write(project.path().join("key.properties"), "keyAlias=release\nkeyPassword=\\uZZZZ\n").unwrap();

    resolve_in(project.path(), &home)
        .args(["--namespace", "com.example"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("key.properties:2"));
}

#[test]
fn overrides_beat_project_files() {
    let project = tempdir().unwrap();
    let home = tempdir().unwrap();
    fs::write(
        project.path().join("gradle.properties"),
        "flutter.versionCode=20\nflutter.versionName=2.0.0\n",
    )
    .unwrap();

    let json = json_output(resolve_in(project.path(), &home).args([
        "--namespace",
        "com.example",
        "-P",
        "flutter.versionCode=21",
    ]));

    assert_eq!(json["versionCode"], 21);
    assert_eq!(json["versionName"], "2.0.0");
    assert_eq!(json["resolvedFrom"]["versionCode"], "command line");
    assert_eq!(json["resolvedFrom"]["minSdk"], "default");
}

#[test]
fn passwords_redacted_unless_revealed() {
    let project = tempdir().unwrap();
    let home = tempdir().unwrap();
    fs::write(project.path().join("key.properties"), "keyPassword=hunter2\n").unwrap();

    resolve_in(project.path(), &home)
        .args(["--namespace", "com.example"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hunter2").not())
        .stdout(predicate::str::contains("<redacted>"));

    resolve_in(project.path(), &home)
        .args(["--namespace", "com.example", "--reveal-secrets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hunter2"));
}

#[test]
fn yaml_output_for_single_variant() {
    let project = tempdir().unwrap();
    let home = tempdir().unwrap();

    resolve_in(project.path(), &home)
        .args(["--namespace", "com.example", "--format", "yaml", "--variant", "release"])
        .assert()
        .success()
        .stdout(predicate::str::contains("minSdk: 23"))
        .stdout(predicate::str::contains("release:"))
        .stdout(predicate::str::contains("debug:").not());
}

#[test]
fn invalid_override_fails() {
    let project = tempdir().unwrap();
    let home = tempdir().unwrap();

    resolve_in(project.path(), &home)
        .args(["--namespace", "com.example", "-P", "flutter.minSdkVersion"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected key=value"));
}

#[test]
fn keys_lists_defaults() {
    Command::cargo_bin("packcfg")
        .unwrap()
        .arg("keys")
        .assert()
        .success()
        .stdout(predicate::str::contains("flutter.minSdkVersion"))
        .stdout(predicate::str::contains("0.1.1"))
        .stdout(predicate::str::contains("storePassword"));
}
