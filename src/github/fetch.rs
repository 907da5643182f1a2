//! Repository snapshot assembly.
//!
//! Gathers metadata, history, contributors, pull requests and manifest
//! files into one immutable [`RepoDetails`] per scoring run.

use chrono::{DateTime, Duration, Utc};
use futures::try_join;
use log::{debug, info};

use crate::github::client::GitHubClient;
use crate::github::error::GitHubResult;
use crate::github::license::resolve_license;
use crate::github::types::{
    CommitEntry, CommitInfo, ContributorInfo, IssueInfo, PullRequestEntry, PullRequestInfo,
    RepoDetails, RepoFile, RepoMetadata, ReviewInfo,
};

/// Manifest files collected into the snapshot when present.
const MANIFEST_FILES: &[&str] = &["package.json", "package-lock.json"];

/// Bounds on snapshot collection.
#[derive(Debug, Clone)]
pub struct SnapshotLimits {
    /// Items requested per page (GitHub caps at 100)
    pub page_size: u8,
    /// Pages fetched per paginated collection
    pub max_pages: u32,
    /// History window in days for commits and issues
    pub history_days: i64,
}

impl Default for SnapshotLimits {
    fn default() -> Self {
        Self {
            page_size: 100,
            max_pages: 5,
            history_days: 365,
        }
    }
}

/// Fetch one complete repository snapshot.
///
/// Metadata and contributors are fetched concurrently, then the license
/// fallback chain runs, then commits and issues paginate in parallel,
/// then pull requests (with reviews) and manifest files. Any classified
/// error aborts the whole fetch; no partial snapshot is ever returned.
pub async fn get_repository_info(
    client: &GitHubClient,
    owner: &str,
    repo: &str,
    limits: &SnapshotLimits,
) -> GitHubResult<RepoDetails> {
    info!("Fetching repository snapshot for {owner}/{repo}");
    let cutoff = Utc::now() - Duration::days(limits.history_days);

    let (metadata, contributors) = try_join!(
        fetch_metadata(client, owner, repo),
        fetch_contributors(client, owner, repo, limits.page_size),
    )?;

    let platform_license = metadata.license.as_ref().and_then(|l| l.name.clone());
    let license = resolve_license(client, platform_license, owner, repo).await?;

    let (commits, issues) = try_join!(
        fetch_commits(client, owner, repo, cutoff, limits),
        fetch_issues(client, owner, repo, cutoff, limits),
    )?;

    let (pull_requests, files) = try_join!(
        fetch_pull_requests(client, owner, repo, limits.page_size),
        fetch_manifest_files(client, owner, repo),
    )?;

    debug!(
        "Snapshot for {owner}/{repo}: {} commits, {} issues, {} contributors, {} PRs",
        commits.len(),
        issues.len(),
        contributors.len(),
        pull_requests.len()
    );

    Ok(RepoDetails {
        owner: owner.to_string(),
        repo: repo.to_string(),
        created_at: metadata.created_at,
        stars: metadata.stargazers_count,
        open_issues: metadata.open_issues_count,
        forks: metadata.forks_count,
        license,
        commits,
        issues,
        contributors,
        pull_requests,
        files,
    })
}

async fn fetch_metadata(
    client: &GitHubClient,
    owner: &str,
    repo: &str,
) -> GitHubResult<RepoMetadata> {
    client.get_json(&format!("repos/{owner}/{repo}"), &[]).await
}

async fn fetch_contributors(
    client: &GitHubClient,
    owner: &str,
    repo: &str,
    page_size: u8,
) -> GitHubResult<Vec<ContributorInfo>> {
    client
        .get_json(
            &format!("repos/{owner}/{repo}/contributors"),
            &[("per_page", page_size.to_string())],
        )
        .await
}

/// A paginated collection is exhausted once a page comes back short or
/// the oldest item collected so far predates the history cutoff. The
/// page cap is the caller's loop bound.
fn collection_exhausted(
    page_len: usize,
    page_size: u8,
    oldest: Option<DateTime<Utc>>,
    cutoff: DateTime<Utc>,
) -> bool {
    page_len < usize::from(page_size) || oldest.is_some_and(|date| date < cutoff)
}

/// Paginate commits newest-first until a short page, the history cutoff,
/// or the page cap.
async fn fetch_commits(
    client: &GitHubClient,
    owner: &str,
    repo: &str,
    cutoff: chrono::DateTime<Utc>,
    limits: &SnapshotLimits,
) -> GitHubResult<Vec<CommitInfo>> {
    let mut commits: Vec<CommitInfo> = Vec::new();

    for page in 1..=limits.max_pages {
        let entries: Vec<CommitEntry> = client
            .get_json(
                &format!("repos/{owner}/{repo}/commits"),
                &[
                    ("per_page", limits.page_size.to_string()),
                    ("page", page.to_string()),
                    ("since", cutoff.to_rfc3339()),
                ],
            )
            .await?;

        let page_len = entries.len();
        commits.extend(entries.into_iter().map(CommitInfo::from));

        let oldest = commits.last().and_then(|c| c.date);
        if collection_exhausted(page_len, limits.page_size, oldest, cutoff) {
            break;
        }
    }

    Ok(commits)
}

/// Paginate issues with the same exit predicate as commits.
async fn fetch_issues(
    client: &GitHubClient,
    owner: &str,
    repo: &str,
    cutoff: chrono::DateTime<Utc>,
    limits: &SnapshotLimits,
) -> GitHubResult<Vec<IssueInfo>> {
    let mut issues: Vec<IssueInfo> = Vec::new();

    for page in 1..=limits.max_pages {
        let entries: Vec<IssueInfo> = client
            .get_json(
                &format!("repos/{owner}/{repo}/issues"),
                &[
                    ("state", "all".to_string()),
                    ("per_page", limits.page_size.to_string()),
                    ("page", page.to_string()),
                    ("since", cutoff.to_rfc3339()),
                ],
            )
            .await?;

        let page_len = entries.len();
        issues.extend(entries);

        let oldest = issues.last().map(|issue| issue.created_at);
        if collection_exhausted(page_len, limits.page_size, oldest, cutoff) {
            break;
        }
    }

    Ok(issues)
}

/// Fetch one page of pull requests, then their reviews.
///
/// Review lookups go through the shared scheduler, so fan-out here never
/// exceeds the process-wide rate cap.
async fn fetch_pull_requests(
    client: &GitHubClient,
    owner: &str,
    repo: &str,
    page_size: u8,
) -> GitHubResult<Vec<PullRequestInfo>> {
    let entries: Vec<PullRequestEntry> = client
        .get_json(
            &format!("repos/{owner}/{repo}/pulls"),
            &[
                ("state", "all".to_string()),
                ("per_page", page_size.to_string()),
            ],
        )
        .await?;

    let review_lookups = entries.into_iter().map(|entry| async move {
        let reviews: Vec<ReviewInfo> = client
            .get_json(
                &format!("repos/{owner}/{repo}/pulls/{}/reviews", entry.number),
                &[],
            )
            .await?;
        Ok(PullRequestInfo {
            number: entry.number,
            body: entry.body,
            reviews,
        })
    });

    futures::future::try_join_all(review_lookups).await
}

/// Fetch manifest files through the contents API; absence is not an error.
async fn fetch_manifest_files(
    client: &GitHubClient,
    owner: &str,
    repo: &str,
) -> GitHubResult<Vec<RepoFile>> {
    let mut files = Vec::new();

    for name in MANIFEST_FILES {
        match client
            .get_raw(&format!("repos/{owner}/{repo}/contents/{name}"))
            .await
        {
            Ok(content) => files.push(RepoFile {
                path: (*name).to_string(),
                content,
            }),
            Err(e) if e.is_not_found() => debug!("{owner}/{repo} has no {name}"),
            Err(e) => return Err(e),
        }
    }

    Ok(files)
}
