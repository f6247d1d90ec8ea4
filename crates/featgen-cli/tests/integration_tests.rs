//! End-to-end tests for the featgen binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CONFIG: &str = "\
index_generator:
  page_width: 80
  libraries:
    - directory_path: lib/src/core
      file_name: core
";

const MISSING_INDEXER: &str = "featgen-test-no-such-indexer";

fn featgen(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("featgen");
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .env("FEATGEN_INDEX__COMMAND", MISSING_INDEXER);
    cmd
}

fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("index_generator.yaml"), CONFIG).unwrap();
    temp
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    featgen(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_name_is_a_usage_error_without_side_effects() {
    let temp = TempDir::new().unwrap();
    featgen(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"))
        .stderr(predicate::str::contains("No feature name given"));

    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn generates_feature_and_registers_it() {
    let temp = project();

    featgen(temp.path())
        .args(["Order History", "--skip-index"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered feature"))
        .stdout(predicate::str::contains("is ready"));

    let root = temp.path().join("lib/src/features/order_history");
    let entity = fs::read_to_string(root.join("domain/entities/order_history_entity.dart")).unwrap();
    assert!(entity.contains("OrderHistoryEntity"));
    assert!(root.join("order_history.dart").is_file());
    assert!(
        temp.path()
            .join("test/src/features/order_history/presentation/bloc")
            .is_dir()
    );

    let config = fs::read_to_string(temp.path().join("index_generator.yaml")).unwrap();
    assert!(config.starts_with(CONFIG.trim_end()));
    assert!(config.contains("# FEATURE : ORDER_HISTORY"));
}

#[test]
fn rerun_does_not_duplicate_registration() {
    let temp = project();

    for _ in 0..2 {
        featgen(temp.path())
            .args(["Order History", "--skip-index"])
            .assert()
            .success();
    }

    featgen(temp.path())
        .args(["Order History", "--skip-index"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already registered"));

    let config = fs::read_to_string(temp.path().join("index_generator.yaml")).unwrap();
    assert_eq!(config.matches("# FEATURE : ORDER_HISTORY").count(), 1);
}

#[test]
fn missing_config_fails_and_is_not_created() {
    let temp = TempDir::new().unwrap();

    featgen(temp.path())
        .args(["cart", "--skip-index"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("index_generator.yaml"))
        .stderr(predicate::str::contains("--project-root"));

    assert!(!temp.path().join("index_generator.yaml").exists());
    // No rollback: files written before the failure stay.
    assert!(temp.path().join("lib/src/features/cart/cart.dart").is_file());
}

#[test]
fn missing_indexer_is_only_a_warning() {
    let temp = project();

    featgen(temp.path())
        .arg("cart")
        .assert()
        .success()
        .stdout(predicate::str::contains(MISSING_INDEXER))
        .stdout(predicate::str::contains("dart pub global run index_generator"));
}

#[test]
fn project_root_flag_targets_another_directory() {
    let temp = project();
    let elsewhere = TempDir::new().unwrap();

    featgen(elsewhere.path())
        .args(["cart", "--skip-index", "--project-root"])
        .arg(temp.path())
        .assert()
        .success();

    assert!(temp.path().join("lib/src/features/cart/cart.dart").is_file());
    assert_eq!(fs::read_dir(elsewhere.path()).unwrap().count(), 0);
}

#[test]
fn dry_run_touches_nothing() {
    let temp = project();

    featgen(temp.path())
        .args(["cart", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would write 13 files"))
        .stdout(predicate::str::contains("lib/src/features/cart/cart.dart"))
        .stdout(predicate::str::contains("Would register the feature"));

    assert!(!temp.path().join("lib").exists());
    assert_eq!(
        fs::read_to_string(temp.path().join("index_generator.yaml")).unwrap(),
        CONFIG
    );
}

#[test]
fn dry_run_after_real_run_reports_existing_registration() {
    let temp = project();

    featgen(temp.path())
        .args(["cart", "--skip-index"])
        .assert()
        .success();
    let config = fs::read_to_string(temp.path().join("index_generator.yaml")).unwrap();

    featgen(temp.path())
        .args(["cart", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already registered"))
        .stdout(predicate::str::contains("Would register").not());

    let out = featgen(temp.path())
        .args(["cart", "--dry-run", "--output-format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let plan: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(plan["registration"], "already_registered");

    assert_eq!(
        fs::read_to_string(temp.path().join("index_generator.yaml")).unwrap(),
        config
    );
}

#[test]
fn json_report_is_parseable() {
    let temp = project();

    let out = featgen(temp.path())
        .args(["cart", "--skip-index", "--output-format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(report["feature"]["snake_case"], "cart");
    assert_eq!(report["files"].as_array().unwrap().len(), 13);
    assert_eq!(report["stages"][3]["outcome"]["status"], "skipped");
}

#[test]
fn list_templates() {
    let temp = TempDir::new().unwrap();

    featgen(temp.path())
        .arg("--list-templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("presentation/bloc/{{FEATURE_SNAKE}}_bloc.dart"))
        .stdout(predicate::str::contains("remote-data-source"));
}

#[test]
fn list_templates_by_layer() {
    let temp = TempDir::new().unwrap();

    featgen(temp.path())
        .args(["--list-templates", "--layer", "domain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("domain/entities/{{FEATURE_SNAKE}}_entity.dart"))
        .stdout(predicate::str::contains("bloc").not());
}

#[test]
fn config_file_changes_layout() {
    let temp = project();
    let cfg = temp.path().join("featgen.toml");
    fs::write(&cfg, "[layout]\nbase_path = \"lib/features\"\ntest_base_path = \"test/features\"\n").unwrap();

    featgen(temp.path())
        .args(["cart", "--skip-index", "--config"])
        .arg(&cfg)
        .assert()
        .success();

    assert!(temp.path().join("lib/features/cart/cart.dart").is_file());
    let config = fs::read_to_string(temp.path().join("index_generator.yaml")).unwrap();
    assert!(config.contains("lib/features/cart"));
}

#[test]
fn missing_explicit_config_file_is_a_config_error() {
    let temp = TempDir::new().unwrap();
    featgen(temp.path())
        .args(["cart", "--config", "nope.toml"])
        .assert()
        .code(4);
}

#[test]
fn completions_mention_binary() {
    let temp = TempDir::new().unwrap();
    featgen(temp.path())
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("featgen"));
}
