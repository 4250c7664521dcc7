use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const EXAMPLE: &str = "0,Root,1;2\n1,Foo,3\n2,Bar,3\n3,Buzz,\n";

fn write_example(dir: &Path) -> PathBuf {
    let path = dir.join("tree.csv");
    fs::write(&path, EXAMPLE).expect("write fixture");
    path
}

/// A `treeline` invocation isolated from the user's config file.
fn treeline(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("treeline"));
    cmd.arg("--no-color")
        .arg("--config")
        .arg(dir.join("config.yaml"))
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("run treeline");
    assert!(
        output.status.success(),
        "treeline failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("utf-8 stdout")
}

#[test]
fn fmt_pins_positions() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let file = write_example(tmp.path());

    let out = stdout_of(treeline(tmp.path()).arg("fmt").arg(&file));
    assert_eq!(
        out,
        "0,Root,1;2,0;0\n1,Foo,3,-100;120\n2,Bar,3,100;120\n3,Buzz,,0;240\n"
    );
    // Without --write the file is untouched.
    assert_eq!(fs::read_to_string(&file).expect("read"), EXAMPLE);
}

#[test]
fn fmt_write_replaces_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let file = write_example(tmp.path());

    treeline(tmp.path())
        .args(["fmt", "--write"])
        .arg(&file)
        .assert()
        .success();
    let written = fs::read_to_string(&file).expect("read");
    assert!(written.starts_with("0,Root,1;2,0;0\n"));
}

#[test]
fn layout_json_has_paths_and_trunk() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let file = write_example(tmp.path());

    let out = stdout_of(treeline(tmp.path()).args(["layout", "--format", "json"]).arg(&file));
    let json: serde_json::Value = serde_json::from_str(&out).expect("valid json");

    assert_eq!(json["mode"], "auto");
    assert_eq!(json["nodes"].as_array().map(Vec::len), Some(4));
    assert_eq!(json["edges"][0]["path"], "M 75 50 L 75 85 L -25 85 L -25 120");
    assert_eq!(json["edges"][2]["kind"], "trunk");
    assert_eq!(json["trunks"][0]["target"], "3");
    assert_eq!(json["channels"].as_array().map(Vec::len), Some(1));
    assert_eq!(json["channels"][0]["y"], 85.0);
    assert_eq!(json["nodes"][0]["color"], "#4e79a7");
}

#[test]
fn layout_text_lists_edges() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let file = write_example(tmp.path());

    let out = stdout_of(treeline(tmp.path()).arg("layout").arg(&file));
    assert!(out.contains("Auto layout, 4 nodes, 4 edges"));
    assert!(out.contains("M 75 50 L 75 85 L 175 85 L 175 120"));
}

#[test]
fn config_set_changes_layout() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let file = write_example(tmp.path());

    treeline(tmp.path())
        .args(["config", "set", "layout.vertical_spacing", "200"])
        .assert()
        .success();
    let show = stdout_of(treeline(tmp.path()).args(["config", "show"]));
    assert!(show.contains("layout.vertical_spacing"));
    assert!(show.contains("200"));

    let out = stdout_of(treeline(tmp.path()).arg("fmt").arg(&file));
    assert!(out.contains("3,Buzz,,0;400\n"));
}

#[test]
fn config_set_rejects_unknown_key() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let output = treeline(tmp.path())
        .args(["config", "set", "layout.depth", "3"])
        .output()
        .expect("run treeline");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown config key"));
    assert!(!tmp.path().join("config.yaml").exists());
}

#[test]
fn snap_reports_anchors() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let file = write_example(tmp.path());

    let out = stdout_of(treeline(tmp.path()).arg("snap").arg(&file).args(["2", "8", "125"]));
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("0 120"));
    assert!(out.contains("aligned with '3'"));
    assert!(out.contains("aligned with '1'"));
}

#[test]
fn snap_accepts_negative_coordinates() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let file = write_example(tmp.path());

    let out = stdout_of(treeline(tmp.path()).arg("snap").arg(&file).args(["2", "-110", "-300"]));
    assert_eq!(out.lines().next(), Some("-100 -300"));
}

#[test]
fn check_reports_problems() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let file = tmp.path().join("broken.csv");
    fs::write(&file, "0,Root,1;ghost\n1,Child,\n1,Again,\n").expect("write fixture");

    let out = stdout_of(treeline(tmp.path()).arg("check").arg(&file));
    assert!(out.contains("duplicate id '1'"));
    assert!(out.contains("unknown child 'ghost'"));
}

#[test]
fn empty_file_is_an_error() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let file = tmp.path().join("empty.csv");
    fs::write(&file, "just one field\n").expect("write fixture");

    let output = treeline(tmp.path())
        .arg("layout")
        .arg(&file)
        .output()
        .expect("run treeline");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no usable records"));
}

#[test]
fn missing_file_is_an_error() {
    let tmp = tempfile::tempdir().expect("tempdir");
    treeline(tmp.path())
        .args(["check", "does-not-exist.csv"])
        .assert()
        .failure();
}

#[test]
fn completion_generates_script() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = stdout_of(treeline(tmp.path()).args(["completion", "bash"]));
    assert!(out.contains("treeline"));
}
