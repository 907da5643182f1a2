//! Snapshot types assembled from the GitHub REST API.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One immutable, point-in-time collection of repository facts.
///
/// Owned exclusively by a single scoring run and never mutated after the
/// fetch stage completes; every metric calculator reads from it.
#[derive(Clone, Debug)]
pub struct RepoDetails {
    pub owner: String,
    pub repo: String,
    pub created_at: Option<DateTime<Utc>>,
    pub stars: u64,
    pub open_issues: u64,
    pub forks: u64,
    /// Resolved license label, after manifest/README fallback
    pub license: Option<String>,
    /// Newest-first commit records, bounded to the history window
    pub commits: Vec<CommitInfo>,
    /// Issue records, same bound as commits
    pub issues: Vec<IssueInfo>,
    pub contributors: Vec<ContributorInfo>,
    pub pull_requests: Vec<PullRequestInfo>,
    /// Manifest-relevant files (package.json, package-lock.json) when present
    pub files: Vec<RepoFile>,
}

/// A single commit's author identity and timestamp.
#[derive(Clone, Debug)]
pub struct CommitInfo {
    pub author: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

/// A single issue's lifecycle facts.
#[derive(Clone, Debug, Deserialize)]
pub struct IssueInfo {
    pub state: String,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

/// A contributor and their recorded contribution count.
#[derive(Clone, Debug, Deserialize)]
pub struct ContributorInfo {
    pub login: String,
    pub contributions: u64,
}

/// A pull request with its review history.
#[derive(Clone, Debug)]
pub struct PullRequestInfo {
    pub number: u64,
    pub body: Option<String>,
    pub reviews: Vec<ReviewInfo>,
}

/// A single pull-request review.
#[derive(Clone, Debug, Deserialize)]
pub struct ReviewInfo {
    pub state: Option<String>,
}

/// A repository file fetched through the contents API.
#[derive(Clone, Debug)]
pub struct RepoFile {
    pub path: String,
    pub content: String,
}

// Wire shapes, deserialized straight off the REST payloads.

/// `GET repos/{owner}/{repo}` response subset.
#[derive(Debug, Deserialize)]
pub(crate) struct RepoMetadata {
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    pub license: Option<LicenseField>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LicenseField {
    pub name: Option<String>,
}

/// `GET repos/{owner}/{repo}/commits` entry.
#[derive(Debug, Deserialize)]
pub(crate) struct CommitEntry {
    pub commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommitDetail {
    pub author: Option<CommitAuthor>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommitAuthor {
    pub name: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl From<CommitEntry> for CommitInfo {
    fn from(entry: CommitEntry) -> Self {
        let (author, date) = match entry.commit.author {
            Some(a) => (a.name, a.date),
            None => (None, None),
        };
        CommitInfo { author, date }
    }
}

/// `GET repos/{owner}/{repo}/pulls` entry subset.
#[derive(Debug, Deserialize)]
pub(crate) struct PullRequestEntry {
    pub number: u64,
    pub body: Option<String>,
}
