use chrono::{Duration, Utc};
use gitgauge::calculate_responsiveness;

use super::common::{commit, issue, snapshot};

#[test]
fn no_recorded_activity_scores_zero() {
    let details = snapshot();
    assert_eq!(calculate_responsiveness(&details).unwrap(), 0.0);
}

#[test]
fn active_repo_scores_between_bounds() {
    let mut details = snapshot();
    // Weekly commits over ten weeks, newest first.
    details.commits = (0..10).map(|i| commit(i * 7)).collect();
    details.issues = vec![issue(60, true), issue(45, true), issue(30, false)];

    let score = calculate_responsiveness(&details).unwrap();
    assert!(score > 0.0 && score <= 0.99, "got {score}");
}

#[test]
fn hyperactive_repo_is_capped_below_one() {
    let mut details = snapshot();
    details.commits = (0..120).map(|i| commit(i / 2)).collect();
    details.issues = (0..10).map(|i| issue(30 + i, true)).collect();

    let score = calculate_responsiveness(&details).unwrap();
    assert!((score - 0.99).abs() < 1e-9, "got {score}");
}

#[test]
fn same_day_turnaround_scores_exactly_one() {
    let mut details = snapshot();
    let yesterday = Utc::now() - Duration::hours(24);
    details.issues = (0..3)
        .map(|_| gitgauge::IssueInfo {
            state: "closed".to_string(),
            created_at: yesterday,
            closed_at: Some(Utc::now()),
        })
        .collect();

    assert_eq!(calculate_responsiveness(&details).unwrap(), 1.0);
}

#[test]
fn open_issues_from_yesterday_do_not_trigger_the_exception() {
    let mut details = snapshot();
    let yesterday = Utc::now() - Duration::hours(24);
    details.issues = vec![
        gitgauge::IssueInfo {
            state: "closed".to_string(),
            created_at: yesterday,
            closed_at: Some(Utc::now()),
        },
        gitgauge::IssueInfo {
            state: "open".to_string(),
            created_at: yesterday,
            closed_at: None,
        },
    ];

    let score = calculate_responsiveness(&details).unwrap();
    assert!(score <= 0.99, "got {score}");
}

#[test]
fn stale_commits_outside_window_contribute_nothing() {
    let mut details = snapshot();
    details.commits = vec![commit(400), commit(500)];

    let score = calculate_responsiveness(&details).unwrap();
    assert_eq!(score, 0.0);
}
