//! `gitgauge` - composite quality scoring for GitHub-hosted repositories.
//!
//! Fetches a rate-limited snapshot of repository facts, evaluates seven
//! independent quality metrics over it (and over a temporary local
//! checkout), and folds them into one weighted net score.
//!
//! # Examples
//!
//! ```rust,no_run
//! use gitgauge::RepoScorer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let scorer = RepoScorer::new("ghp_...")?;
//!     let report = scorer
//!         .compute_score("rust-lang", "regex", "https://github.com/rust-lang/regex.git")
//!         .await?;
//!     println!("{}", serde_json::to_string_pretty(&report)?);
//!     Ok(())
//! }
//! ```

pub mod checkout;
pub mod github;
pub mod metrics;
pub mod runtime;
pub mod score;

// Re-export runtime types
pub use runtime::AsyncTask;

// Re-export GitHub client types
pub use github::{GitHubClient, GitHubClientBuilder, RequestScheduler, TOKEN_ENV_VAR};

// Re-export GitHub error types
pub use github::{GitHubError, GitHubResult};

// Re-export snapshot types
pub use github::{
    CommitInfo, ContributorInfo, IssueInfo, PullRequestInfo, RepoDetails, RepoFile, ReviewInfo,
    SnapshotLimits, get_repository_info,
};

// Re-export checkout types
pub use checkout::{CheckoutError, CheckoutProvider, GixCheckoutProvider};

// Re-export metric calculators and result types
pub use metrics::{
    MetricResult, calculate_bus_factor, calculate_correctness, calculate_license_compatibility,
    calculate_pinned_dependencies, calculate_pull_request_review, calculate_ramp_up,
    calculate_responsiveness,
};

// Re-export scoring types
pub use score::{
    MetricLatencies, RepoScorer, ScoreConfig, ScoreError, ScoreReport, ScoreResult, SubScores,
    score_repository, weighted_net_score,
};
