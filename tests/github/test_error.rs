use gitgauge::GitHubError;

#[test]
fn exhausted_quota_classifies_as_rate_limit() {
    let e = GitHubError::from_status(403, Some("0"), "repos/o/r");
    assert!(matches!(e, GitHubError::RateLimitExceeded));

    let e = GitHubError::from_status(429, Some("0"), "repos/o/r");
    assert!(matches!(e, GitHubError::RateLimitExceeded));
}

#[test]
fn forbidden_with_remaining_quota_is_auth() {
    let e = GitHubError::from_status(403, Some("42"), "repos/o/r");
    assert!(matches!(e, GitHubError::Auth(_)));

    let e = GitHubError::from_status(403, None, "repos/o/r");
    assert!(matches!(e, GitHubError::Auth(_)));
}

#[test]
fn unauthorized_is_auth() {
    let e = GitHubError::from_status(401, None, "repos/o/r");
    assert!(matches!(e, GitHubError::Auth(_)));
}

#[test]
fn missing_resource_is_not_found() {
    let e = GitHubError::from_status(404, Some("5000"), "repos/o/r/readme");
    assert!(e.is_not_found());
    assert!(e.to_string().contains("repos/o/r/readme"));
}

#[test]
fn other_statuses_split_client_and_server() {
    assert!(matches!(
        GitHubError::from_status(422, None, "x"),
        GitHubError::Client { status: 422 }
    ));
    assert!(matches!(
        GitHubError::from_status(503, None, "x"),
        GitHubError::Server { status: 503 }
    ));
}

#[test]
fn rate_limit_classification_needs_the_zero_header() {
    // A 429 without the header is an ordinary client error.
    let e = GitHubError::from_status(429, None, "x");
    assert!(matches!(e, GitHubError::Client { status: 429 }));
}
