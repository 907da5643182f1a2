use std::fs;
use std::path::Path;

use gitgauge::calculate_correctness;
use tempfile::TempDir;

use super::common::snapshot;

fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn well_tested_repo_scores_high() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "src/index.js", "module.exports = {};");
    write_file(dir.path(), "src/util.js", "exports.id = x => x;");
    write_file(dir.path(), "test/index.test.js", "require('..');");
    write_file(dir.path(), "test/util.test.js", "require('..');");
    write_file(dir.path(), ".travis.yml", "language: node_js");

    let score = calculate_correctness(&snapshot(), dir.path()).unwrap();
    // 0.3 layout + 0.4 full test ratio + 0.2 CI
    assert!((score - 0.9).abs() < 1e-9, "got {score}");
}

#[test]
fn empty_src_earns_layout_base_only() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    write_file(dir.path(), "tests/smoke.test.js", "");

    let score = calculate_correctness(&snapshot(), dir.path()).unwrap();
    assert!((score - 0.3).abs() < 1e-9, "got {score}");
}

#[test]
fn missing_test_directory_scores_zero() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "src/index.js", "module.exports = {};");

    assert_eq!(calculate_correctness(&snapshot(), dir.path()).unwrap(), 0.0);
}

#[test]
fn missing_src_directory_scores_zero() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "tests/smoke.test.js", "");

    assert_eq!(calculate_correctness(&snapshot(), dir.path()).unwrap(), 0.0);
}

#[test]
fn github_actions_counts_as_ci() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "src/index.js", "");
    write_file(dir.path(), "tests/index.test.js", "");
    write_file(dir.path(), ".github/workflows/ci.yml", "on: push");

    let score = calculate_correctness(&snapshot(), dir.path()).unwrap();
    assert!((score - 0.9).abs() < 1e-9, "got {score}");
}
