//! Rate-limited GitHub API access and snapshot assembly.

mod client;
mod error;
mod fetch;
mod license;
mod limiter;
mod types;

pub use client::{GitHubClient, GitHubClientBuilder, TOKEN_ENV_VAR};
pub use error::{GitHubError, GitHubResult};
pub use fetch::{SnapshotLimits, get_repository_info};
pub use limiter::RequestScheduler;
pub use license::extract_license_from_readme;
pub use types::{
    CommitInfo, ContributorInfo, IssueInfo, PullRequestInfo, RepoDetails, RepoFile, ReviewInfo,
};
