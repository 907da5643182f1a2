//! Onboarding readiness from documentation in the working tree.

use std::path::Path;

use log::debug;

use crate::metrics::MetricError;

/// README filename variants checked in order.
const README_VARIANTS: &[&str] = &[
    "README.md",
    "README.txt",
    "README.rst",
    "README",
    "Readme.md",
    "readme.md",
];

/// A README below this size is unlikely to get a newcomer started.
const SUBSTANTIAL_README_BYTES: usize = 500;

/// Score how quickly a newcomer could ramp up on the repository.
///
/// Driven entirely by documentation presence in the checkout: a README
/// (with installation and usage sections), a docs folder, contribution
/// guidelines, and runnable examples. No README scores 0.
pub fn calculate_ramp_up(checkout: &Path) -> Result<f64, MetricError> {
    let readme_path = README_VARIANTS
        .iter()
        .map(|name| checkout.join(name))
        .find(|p| p.is_file());

    let Some(readme_path) = readme_path else {
        debug!("No README found; ramp-up 0");
        return Ok(0.0);
    };

    let content = std::fs::read_to_string(&readme_path)?;
    let lower = content.to_lowercase();

    let mut score: f64 = 0.3;
    if content.len() >= SUBSTANTIAL_README_BYTES {
        score += 0.1;
    }
    if lower.contains("install") || lower.contains("setup") {
        score += 0.15;
    }
    if lower.contains("usage") || lower.contains("example") || content.contains("```") {
        score += 0.15;
    }
    if checkout.join("docs").is_dir() {
        score += 0.15;
    }
    if checkout.join("CONTRIBUTING.md").exists() || checkout.join("CONTRIBUTING").exists() {
        score += 0.05;
    }
    if checkout.join("examples").is_dir() {
        score += 0.1;
    }

    debug!("Ramp-up: {score:.3}");
    Ok(score.min(1.0))
}
