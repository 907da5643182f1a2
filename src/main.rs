// gitgauge CLI: score one GitHub repository and print the JSON report.

use anyhow::{Context, Result};
use gitgauge::RepoScorer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let url = std::env::args()
        .nth(1)
        .context("usage: gitgauge <github-repository-url>")?;
    let (owner, repo) =
        parse_repo_url(&url).with_context(|| format!("unrecognized repository URL: {url}"))?;

    let scorer = RepoScorer::from_env()?;
    let clone_url = format!("https://github.com/{owner}/{repo}.git");
    let report = scorer.compute_score(&owner, &repo, &clone_url).await?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Extract `(owner, repo)` from a GitHub repository URL.
fn parse_repo_url(url: &str) -> Option<(String, String)> {
    let rest = url
        .strip_prefix("https://github.com/")
        .or_else(|| url.strip_prefix("http://github.com/"))
        .or_else(|| url.strip_prefix("github.com/"))?;

    let mut segments = rest.split('/').filter(|s| !s.is_empty());
    let owner = segments.next()?;
    let repo = segments.next()?.trim_end_matches(".git");
    if owner.is_empty() || repo.is_empty() {
        return None;
    }
    Some((owner.to_string(), repo.to_string()))
}
