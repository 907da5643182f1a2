//! Pull-request review discipline.

use log::debug;

use crate::github::RepoDetails;
use crate::metrics::MetricError;

/// Weight of the reviewed-PR fraction.
const REVIEW_RATIO_WEIGHT: f64 = 0.6;

/// Weight of the reviewer-density term.
const REVIEWER_DENSITY_WEIGHT: f64 = 0.3;

/// Reviews per PR that count as full density.
const REVIEWS_PER_PR_TARGET: f64 = 3.0;

/// Bonus when PR bodies carry recognizable template headings.
const TEMPLATE_BONUS: f64 = 0.1;

/// Headings that indicate a PR description template is in use.
const TEMPLATE_HEADINGS: &[&str] = &["## Description", "## Changes", "## Testing", "## Checklist"];

/// Score how consistently pull requests get reviewed.
///
/// Combines the fraction of PRs with at least one review and a reviewer
/// density term, plus a small bonus when PR bodies follow a template.
pub fn calculate_pull_request_review(details: &RepoDetails) -> Result<f64, MetricError> {
    if details.pull_requests.is_empty() {
        debug!("No pull requests found");
        return Ok(0.0);
    }

    let total = details.pull_requests.len();
    let reviewed = details
        .pull_requests
        .iter()
        .filter(|pr| !pr.reviews.is_empty())
        .count();
    let total_reviews: usize = details.pull_requests.iter().map(|pr| pr.reviews.len()).sum();

    let review_ratio = reviewed as f64 / total as f64;
    let reviewer_density =
        ((total_reviews as f64 / total as f64) / REVIEWS_PER_PR_TARGET).min(1.0);

    let has_template = details.pull_requests.iter().any(|pr| {
        pr.body
            .as_deref()
            .is_some_and(|body| TEMPLATE_HEADINGS.iter().any(|h| body.contains(h)))
    });

    let mut score =
        review_ratio * REVIEW_RATIO_WEIGHT + reviewer_density * REVIEWER_DENSITY_WEIGHT;
    if has_template {
        score = (score + TEMPLATE_BONUS).min(1.0);
    }

    debug!("Pull request review: {score:.3} ({reviewed}/{total} PRs reviewed)");
    Ok(score)
}
