//! Scoring orchestration: snapshot fetch, checkout, metric evaluation,
//! and weighted aggregation.

mod config;
mod convenience;
mod report;

pub use config::ScoreConfig;
pub use convenience::score_repository;
pub use report::{MetricLatencies, ScoreReport, SubScores, weighted_net_score};

use std::sync::Arc;
use std::time::Instant;

use log::info;
use thiserror::Error;

use crate::checkout::{CheckoutError, CheckoutProvider, GixCheckoutProvider};
use crate::github::{
    GitHubClient, GitHubError, RepoDetails, RequestScheduler, TOKEN_ENV_VAR, get_repository_info,
};
use crate::metrics::{
    calculate_bus_factor, calculate_correctness, calculate_license_compatibility,
    calculate_pinned_dependencies, calculate_pull_request_review, calculate_ramp_up,
    calculate_responsiveness, run_guarded,
};

/// Fatal scoring-run failures.
///
/// Calculator-internal failures never appear here; those fail closed to 0
/// inside the run.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error(transparent)]
    GitHub(#[from] GitHubError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

/// Convenience result alias for scoring operations
pub type ScoreResult<T> = Result<T, ScoreError>;

/// Computes composite quality scores for repositories.
///
/// Holds one rate-limited client; every run through the same scorer (and
/// any client sharing its scheduler) stays under the global request-rate
/// cap.
pub struct RepoScorer<P: CheckoutProvider = GixCheckoutProvider> {
    client: GitHubClient,
    checkout: P,
    config: ScoreConfig,
}

impl RepoScorer<GixCheckoutProvider> {
    /// Create a scorer with the default configuration and gix checkouts.
    pub fn new(token: impl Into<String>) -> ScoreResult<Self> {
        Self::with_config(token, ScoreConfig::default())
    }

    /// Create a scorer with a custom configuration.
    pub fn with_config(token: impl Into<String>, config: ScoreConfig) -> ScoreResult<Self> {
        let scheduler = Arc::new(RequestScheduler::new(
            config.max_in_flight,
            config.min_spacing,
        ));
        let mut builder = GitHubClient::builder()
            .personal_token(token)
            .scheduler(scheduler);
        if let Some(base) = &config.api_base {
            builder = builder.base_uri(base);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            checkout: GixCheckoutProvider,
            config,
        })
    }

    /// Create a scorer from the `GITHUB_TOKEN` environment variable.
    pub fn from_env() -> ScoreResult<Self> {
        let token = std::env::var(TOKEN_ENV_VAR)
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                GitHubError::Config(format!("{TOKEN_ENV_VAR} environment variable not set"))
            })?;
        Self::new(token)
    }
}

impl<P: CheckoutProvider> RepoScorer<P> {
    /// Create a scorer with an explicit client and checkout provider.
    pub fn with_provider(client: GitHubClient, checkout: P, config: ScoreConfig) -> Self {
        Self {
            client,
            checkout,
            config,
        }
    }

    /// Score one repository end to end.
    ///
    /// Stages: snapshot fetch and checkout acquisition (each fatal on
    /// failure), then the seven calculators in three concurrent groups,
    /// then checkout teardown, then weighted aggregation. Callers get
    /// either a complete report or an error; never a partial score.
    pub async fn compute_score(
        &self,
        owner: &str,
        repo: &str,
        url: &str,
    ) -> ScoreResult<ScoreReport> {
        let run_start = Instant::now();

        info!("Scoring {owner}/{repo}");
        let details =
            get_repository_info(&self.client, owner, repo, &self.config.limits).await?;
        let api_time = run_start.elapsed().as_secs_f64();

        let mut report = self.score_snapshot(&details, url).await?;
        report.api_time = api_time;
        report.total_time = run_start.elapsed().as_secs_f64();
        Ok(report)
    }

    /// Score an already-fetched snapshot against a fresh checkout.
    ///
    /// Runs everything downstream of the fetch stage: checkout acquisition
    /// (fatal on failure), the guarded calculators, teardown, and weighted
    /// aggregation. `api_time` in the returned report is zero; callers
    /// that fetched the snapshot themselves fill it in.
    pub async fn score_snapshot(
        &self,
        details: &RepoDetails,
        url: &str,
    ) -> ScoreResult<ScoreReport> {
        let run_start = Instant::now();

        let clone_start = Instant::now();
        let checkout_path = self.checkout.acquire(url).await?;
        let clone_time = clone_start.elapsed().as_secs_f64();
        info!(
            "Cloned {url} in {clone_time:.2}s; evaluating metrics"
        );

        // Checkout-dependent calculators first, then snapshot-only, then
        // list-dependent. Each guarded call fails closed to 0, so the
        // teardown below runs on every path.
        let (correctness, ramp_up) = tokio::join!(
            run_guarded("correctness", async {
                calculate_correctness(details, &checkout_path)
            }),
            run_guarded("ramp_up", async { calculate_ramp_up(&checkout_path) }),
        );

        let (bus_factor, responsiveness, license) = tokio::join!(
            run_guarded("bus_factor", async { calculate_bus_factor(details) }),
            run_guarded("responsiveness", async { calculate_responsiveness(details) }),
            run_guarded("license", async { calculate_license_compatibility(details) }),
        );

        let (pinned_dependencies, pull_request) = tokio::join!(
            run_guarded("pinned_dependencies", async {
                calculate_pinned_dependencies(details)
            }),
            run_guarded("pull_request", async {
                calculate_pull_request_review(details)
            }),
        );

        self.checkout.release(&checkout_path).await?;

        let net_score = weighted_net_score(&SubScores {
            correctness: correctness.value,
            bus_factor: bus_factor.value,
            license: license.value,
            responsiveness: responsiveness.value,
            ramp_up: ramp_up.value,
            pinned_dependencies: pinned_dependencies.value,
            pull_request: pull_request.value,
        });

        let total_time = run_start.elapsed().as_secs_f64();
        info!(
            "Scored {}/{}: net {net_score:.3} in {total_time:.2}s",
            details.owner, details.repo
        );

        Ok(ScoreReport {
            net_score,
            bus_factor: bus_factor.value,
            correctness: correctness.value,
            ramp_up: ramp_up.value,
            responsiveness: responsiveness.value,
            license: license.value,
            pinned_dependencies: pinned_dependencies.value,
            pull_request: pull_request.value,
            total_time,
            api_time: 0.0,
            clone_time,
            latencies: MetricLatencies {
                bus_factor: bus_factor.latency,
                correctness: correctness.latency,
                ramp_up: ramp_up.latency,
                responsiveness: responsiveness.latency,
                license: license.latency,
                pinned_dependencies: pinned_dependencies.latency,
                pull_request: pull_request.latency,
            },
        })
    }
}
