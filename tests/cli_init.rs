//! Init command scenarios: store skeleton creation and idempotence.

mod common;

use common::assertions::assert_output_contains;
use common::TestEnv;

#[test]
fn init_creates_the_store_layout() {
    let env = TestEnv::new();

    let result = env.run(&["init"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(env.store_path("deploy").is_dir());
    assert!(env.store_path("repo/refs").is_dir());
    assert!(env.store_path("repo/trees").is_dir());
    assert!(env.store_path("config.toml").is_file());
}

#[test]
fn init_is_idempotent() {
    let env = TestEnv::initialized();

    let again = env.run(&["init"]);

    assert!(again.success, "{}", again.combined_output());
}

#[test]
fn init_keeps_an_existing_config() {
    let env = TestEnv::initialized();
    let config = "[kernel]\ncommand = \"my-kernel-tool\"\n";
    std::fs::write(env.store_path("config.toml"), config).unwrap();

    let again = env.run(&["init"]);

    assert!(again.success);
    assert_eq!(
        std::fs::read_to_string(env.store_path("config.toml")).unwrap(),
        config
    );
}

#[test]
fn status_on_uninitialized_store_mentions_init() {
    let env = TestEnv::new();

    let result = env.run(&["status"]);

    assert!(!result.success);
    assert_output_contains!(result, "not initialized");
    assert_output_contains!(result, "plinth init");
}

#[test]
fn deploy_on_uninitialized_store_fails() {
    let env = TestEnv::new();

    let result = env.run(&["deploy", "myos", "stable"]);

    assert!(!result.success);
    assert_output_contains!(result, "not initialized");
}

#[test]
fn deploy_against_a_missing_store_root_reports_uninitialized() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent");

    let output = std::process::Command::new(env!("CARGO_BIN_EXE_plinth"))
        .arg("--store")
        .arg(&missing)
        .args(["deploy", "myos", "stable"])
        .output()
        .expect("failed to execute plinth");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not initialized"), "{stderr}");
    assert!(stderr.contains("plinth init"), "{stderr}");
}
