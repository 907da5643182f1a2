//! Repository structure and test-coverage signal from the working tree.

use std::path::Path;

use log::debug;
use walkdir::WalkDir;

use crate::github::RepoDetails;
use crate::metrics::MetricError;

/// Base credit for having both a source and a test directory.
const LAYOUT_BASE: f64 = 0.3;

/// Weight of the test-to-source file ratio.
const RATIO_WEIGHT: f64 = 0.4;

/// Bonus for detected continuous-integration configuration.
const CI_BONUS: f64 = 0.2;

/// Score the working tree's structure: source/test layout, test-to-source
/// ratio, and CI configuration.
///
/// A missing `src/` or missing test directory scores 0 outright; an empty
/// `src/` earns the layout base only.
pub fn calculate_correctness(
    details: &RepoDetails,
    checkout: &Path,
) -> Result<f64, MetricError> {
    let src_dir = checkout.join("src");
    let test_dir = ["test", "tests"]
        .iter()
        .map(|d| checkout.join(d))
        .find(|p| p.is_dir());

    let Some(test_dir) = test_dir else {
        debug!("{}/{}: no test directory, correctness 0", details.owner, details.repo);
        return Ok(0.0);
    };
    if !src_dir.is_dir() {
        debug!("{}/{}: no src directory, correctness 0", details.owner, details.repo);
        return Ok(0.0);
    }

    let src_files = count_files(&src_dir);
    let test_files = count_files(&test_dir);

    let mut score = LAYOUT_BASE;
    if src_files > 0 {
        let ratio = (test_files as f64 / src_files as f64).min(1.0);
        score += RATIO_WEIGHT * ratio;
    }
    if has_ci_config(checkout) {
        score += CI_BONUS;
    }

    debug!(
        "{}/{}: correctness {score:.3} ({test_files} test files / {src_files} source files)",
        details.owner, details.repo
    );
    Ok(score.min(1.0))
}

fn count_files(dir: &Path) -> usize {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .count()
}

/// CI detection mirrors the providers checked during tree analysis:
/// GitHub Actions, Travis, CircleCI, Jenkins, GitLab CI.
fn has_ci_config(checkout: &Path) -> bool {
    checkout.join(".github/workflows").is_dir()
        || checkout.join(".travis.yml").exists()
        || checkout.join(".circleci").exists()
        || checkout.join("Jenkinsfile").exists()
        || checkout.join(".gitlab-ci.yml").exists()
}
