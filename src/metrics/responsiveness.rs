//! Maintainer responsiveness from recent commit and issue activity.

use chrono::{DateTime, Duration, Months, Utc};
use log::debug;

use crate::github::RepoDetails;
use crate::metrics::MetricError;

/// One commit per two weeks counts as healthy baseline frequency.
const BASELINE_COMMITS_PER_WEEK: f64 = 0.5;

/// Floor applied once any commit exists in the window.
const COMMIT_RATIO_FLOOR: f64 = 0.1;

/// Normal scores never reach 1; see the same-day-turnaround rule below.
const RESPONSIVENESS_CAP: f64 = 0.99;

const SECONDS_PER_WEEK: f64 = 60.0 * 60.0 * 24.0 * 7.0;

/// Score maintainer responsiveness over the last six months (or the
/// repository's recorded activity, whichever is shorter).
///
/// The score averages a commit-frequency term against a closed-to-opened
/// issue ratio, capped at 0.99. The single exception: when every issue
/// opened in the window was created exactly yesterday and all of them are
/// already closed, the maintainers demonstrated same-day turnaround and
/// the score is exactly 1.
pub fn calculate_responsiveness(details: &RepoDetails) -> Result<f64, MetricError> {
    let now = Utc::now();
    let six_months_ago = now
        .checked_sub_months(Months::new(6))
        .unwrap_or(now - Duration::days(182));

    let mut commit_freq_ratio = 0.0;
    if let Some(earliest) = details.commits.last().and_then(|c| c.date) {
        // Commits are newest-first; the window starts at the later of the
        // earliest commit or six months ago.
        let start = earliest.max(six_months_ago);
        let in_window = details
            .commits
            .iter()
            .filter(|c| c.date.is_some_and(|d| d >= start))
            .count();

        let weeks = weeks_between(start, now);
        let avg_per_week = in_window as f64 / weeks;
        commit_freq_ratio = (avg_per_week / BASELINE_COMMITS_PER_WEEK).min(1.0);
        if in_window > 0 {
            commit_freq_ratio = commit_freq_ratio.max(COMMIT_RATIO_FLOOR);
        }
    }

    let mut closed_to_opened_ratio = 0.0;
    if let Some(earliest) = details.issues.last() {
        let start = earliest.created_at.max(six_months_ago);
        let opened: Vec<_> = details
            .issues
            .iter()
            .filter(|i| i.created_at >= start)
            .collect();
        let closed = opened.iter().filter(|i| i.state == "closed").count();

        if !opened.is_empty() {
            closed_to_opened_ratio = closed as f64 / opened.len() as f64;

            let yesterday = (now - Duration::days(1)).date_naive();
            let all_opened_yesterday = opened
                .iter()
                .all(|i| i.created_at.date_naive() == yesterday);
            if all_opened_yesterday && closed == opened.len() {
                debug!("All windowed issues opened yesterday and closed; responsiveness 1");
                return Ok(1.0);
            }
        }
    }

    let responsiveness = (commit_freq_ratio + closed_to_opened_ratio) / 2.0;
    debug!(
        "Responsiveness {responsiveness:.3} (commit term {commit_freq_ratio:.3}, issue term {closed_to_opened_ratio:.3})"
    );
    Ok(responsiveness.clamp(0.0, RESPONSIVENESS_CAP))
}

/// Whole window length in weeks, floored at one week.
fn weeks_between(start: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let weeks = (now - start).num_seconds() as f64 / SECONDS_PER_WEEK;
    weeks.max(1.0)
}
