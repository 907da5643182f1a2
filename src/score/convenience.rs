//! Convenience entry point for one-shot scoring.

use crate::runtime::AsyncTask;
use crate::score::{RepoScorer, ScoreReport, ScoreResult};

/// Score a repository with the default configuration and the
/// `GITHUB_TOKEN` environment credential.
///
/// Returns a spawned task handle; await it for the report.
pub fn score_repository(
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<ScoreResult<ScoreReport>> {
    let owner = owner.into();
    let repo = repo.into();

    AsyncTask::spawn_async(async move {
        let scorer = RepoScorer::from_env()?;
        let url = format!("https://github.com/{owner}/{repo}.git");
        scorer.compute_score(&owner, &repo, &url).await
    })
}
