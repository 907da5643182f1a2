//! Dependency version-pinning discipline from the manifest.

use lazy_static::lazy_static;
use log::{debug, error};
use regex::Regex;

use crate::github::RepoDetails;
use crate::metrics::MetricError;

/// Bonus for committing a lockfile alongside the manifest.
const LOCKFILE_BONUS: f64 = 0.1;

lazy_static! {
    static ref EXACT_VERSION_RE: Result<Regex, regex::Error> = Regex::new(r"^\d+\.\d+\.\d+$");
    static ref COMMIT_HASH_RE: Result<Regex, regex::Error> = Regex::new(r"^[a-f0-9]{40}$");
    static ref GIT_URL_HASH_RE: Result<Regex, regex::Error> =
        Regex::new(r"^git\+https://.*#[a-f0-9]{40}$");
}

/// Score the fraction of manifest dependencies pinned to an exact version.
///
/// Pinned means an exact three-part version, a 40-hex commit hash, or a
/// git URL suffixed with one. No manifest scores 0; an empty dependency
/// set is vacuously pinned and scores 1. A malformed manifest scores 0.
pub fn calculate_pinned_dependencies(details: &RepoDetails) -> Result<f64, MetricError> {
    let Some(manifest) = details.files.iter().find(|f| f.path == "package.json") else {
        debug!("No package.json found");
        return Ok(0.0);
    };
    let has_lockfile = details.files.iter().any(|f| f.path == "package-lock.json");

    let parsed: serde_json::Value = match serde_json::from_str(&manifest.content) {
        Ok(v) => v,
        Err(e) => {
            error!("Error parsing package.json: {e}");
            return Ok(0.0);
        }
    };

    let mut versions: Vec<String> = Vec::new();
    for section in ["dependencies", "devDependencies"] {
        if let Some(map) = parsed.get(section).and_then(|v| v.as_object()) {
            versions.extend(
                map.values()
                    .map(|v| v.as_str().map_or_else(|| v.to_string(), str::to_owned)),
            );
        }
    }

    if versions.is_empty() {
        debug!("No dependencies found in package.json");
        return Ok(1.0);
    }

    let pinned = versions.iter().filter(|v| is_pinned(v)).count();
    let mut score = pinned as f64 / versions.len() as f64;
    if has_lockfile {
        score = (score + LOCKFILE_BONUS).min(1.0);
    }

    debug!(
        "Pinned dependencies: {score:.3} ({pinned}/{} deps pinned)",
        versions.len()
    );
    Ok(score)
}

fn is_pinned(version: &str) -> bool {
    [&*EXACT_VERSION_RE, &*COMMIT_HASH_RE, &*GIT_URL_HASH_RE]
        .iter()
        .any(|re| re.as_ref().is_ok_and(|re| re.is_match(version)))
}
