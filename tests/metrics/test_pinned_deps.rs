use gitgauge::calculate_pinned_dependencies;

use super::common::{assert_close, file, snapshot};

#[test]
fn no_manifest_scores_zero() {
    let details = snapshot();
    assert_eq!(calculate_pinned_dependencies(&details).unwrap(), 0.0);
}

#[test]
fn empty_dependency_set_is_vacuously_pinned() {
    let mut details = snapshot();
    details.files = vec![file("package.json", r#"{"name": "pkg"}"#)];
    assert_eq!(calculate_pinned_dependencies(&details).unwrap(), 1.0);
}

#[test]
fn mixed_manifest_scores_the_pinned_fraction() {
    let manifest = r#"{
        "dependencies": {
            "exact": "1.2.3",
            "range": "^1.2.3",
            "hash": "git+https://github.com/owner/repo#aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "star": "*"
        }
    }"#;
    let mut details = snapshot();
    details.files = vec![file("package.json", manifest)];

    assert_close(calculate_pinned_dependencies(&details).unwrap(), 0.5);
}

#[test]
fn lockfile_adds_a_bonus() {
    let manifest = r#"{
        "dependencies": {"exact": "1.2.3", "range": "~2.0.0"}
    }"#;
    let mut details = snapshot();
    details.files = vec![
        file("package.json", manifest),
        file("package-lock.json", "{}"),
    ];

    assert_close(calculate_pinned_dependencies(&details).unwrap(), 0.6);
}

#[test]
fn bonus_never_pushes_past_one() {
    let manifest = r#"{"dependencies": {"exact": "1.2.3"}}"#;
    let mut details = snapshot();
    details.files = vec![
        file("package.json", manifest),
        file("package-lock.json", "{}"),
    ];

    assert_eq!(calculate_pinned_dependencies(&details).unwrap(), 1.0);
}

#[test]
fn dev_dependencies_count_too() {
    let manifest = r#"{
        "dependencies": {"exact": "1.2.3"},
        "devDependencies": {"loose": "^4.0.0"}
    }"#;
    let mut details = snapshot();
    details.files = vec![file("package.json", manifest)];

    assert_close(calculate_pinned_dependencies(&details).unwrap(), 0.5);
}

#[test]
fn bare_commit_hash_counts_as_pinned() {
    let manifest = r#"{
        "dependencies": {"vendored": "deadbeefdeadbeefdeadbeefdeadbeefdeadbeef"}
    }"#;
    let mut details = snapshot();
    details.files = vec![file("package.json", manifest)];

    assert_eq!(calculate_pinned_dependencies(&details).unwrap(), 1.0);
}

#[test]
fn malformed_manifest_scores_zero() {
    let mut details = snapshot();
    details.files = vec![file("package.json", "{not json")];
    assert_eq!(calculate_pinned_dependencies(&details).unwrap(), 0.0);
}
