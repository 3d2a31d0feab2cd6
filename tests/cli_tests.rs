#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::fixtures::USERS_YAML;
use common::temp_files::temp_yaml;
use std::process::Command;

fn exe() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_oas-view-routes"));
    cmd.env_remove("RUST_LOG").env("OASR_LOG_LEVEL", "error");
    cmd
}

#[test]
fn test_cli_generate_writes_router_options() {
    let spec = temp_yaml(USERS_YAML);
    let overrides = temp_yaml("mode: history\nroutes:\n  - path: '*'\n    redirect: /users\n");
    let out_dir = tempfile::tempdir().unwrap();
    let out = out_dir.path().join("routes.json");

    let status = exe()
        .arg("generate")
        .arg("--spec")
        .arg(spec.path())
        .arg("--overrides")
        .arg(overrides.path())
        .args(["--view", "Users=UsersPage", "--view", "UserProfile=ProfilePage"])
        .arg("--out")
        .arg(&out)
        .status()
        .expect("run cli");
    assert!(status.success());

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();

    assert_eq!(value["mode"], "history");
    assert_eq!(value["base"], "/api/v1");
    let routes = value["routes"].as_array().unwrap();
    assert_eq!(routes.len(), 3);
    assert_eq!(routes[1]["path"], "/users/:id");
    assert_eq!(routes[1]["component"], "ProfilePage");
    assert_eq!(routes[2]["redirect"], "/users");
}

#[test]
fn test_cli_generate_fails_on_missing_view() {
    let spec = temp_yaml(USERS_YAML);
    let output = exe()
        .arg("generate")
        .arg("--spec")
        .arg(spec.path())
        .args(["--view", "Users=UsersPage"])
        .output()
        .expect("run cli");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("UserProfile"));
}
