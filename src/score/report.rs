//! Score report types and net-score aggregation.

use serde::Serialize;

// Net score weights; they sum to 1.0.
const W_CORRECTNESS: f64 = 0.15;
const W_BUS_FACTOR: f64 = 0.15;
const W_LICENSE: f64 = 0.10;
const W_RESPONSIVENESS: f64 = 0.20;
const W_RAMP_UP: f64 = 0.15;
const W_PINNED: f64 = 0.15;
const W_PULL_REQUEST: f64 = 0.10;

/// Per-metric evaluation latencies, in seconds.
#[derive(Debug, Clone, Serialize)]
pub struct MetricLatencies {
    #[serde(rename = "BusFactorLatency")]
    pub bus_factor: f64,
    #[serde(rename = "CorrectnessLatency")]
    pub correctness: f64,
    #[serde(rename = "RampUpLatency")]
    pub ramp_up: f64,
    #[serde(rename = "ResponsivenessLatency")]
    pub responsiveness: f64,
    #[serde(rename = "LicenseLatency")]
    pub license: f64,
    #[serde(rename = "PinnedDependenciesLatency")]
    pub pinned_dependencies: f64,
    #[serde(rename = "PullRequestLatency")]
    pub pull_request: f64,
}

/// Complete outcome of one scoring run.
///
/// Serialized field names follow the established wire format consumed by
/// downstream rating services.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    #[serde(rename = "NetScore")]
    pub net_score: f64,
    #[serde(rename = "BusFactor")]
    pub bus_factor: f64,
    #[serde(rename = "Correctness")]
    pub correctness: f64,
    #[serde(rename = "RampUp")]
    pub ramp_up: f64,
    #[serde(rename = "ResponsivenessScore")]
    pub responsiveness: f64,
    #[serde(rename = "LicenseScore")]
    pub license: f64,
    #[serde(rename = "GoodPinningPractice")]
    pub pinned_dependencies: f64,
    #[serde(rename = "PullRequest")]
    pub pull_request: f64,
    /// Whole-run wall time in seconds
    pub total_time: f64,
    /// Snapshot fetch time in seconds
    pub api_time: f64,
    /// Checkout acquisition time in seconds
    pub clone_time: f64,
    pub latencies: MetricLatencies,
}

/// Sub-metric values feeding the weighted net score.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubScores {
    pub correctness: f64,
    pub bus_factor: f64,
    pub license: f64,
    pub responsiveness: f64,
    pub ramp_up: f64,
    pub pinned_dependencies: f64,
    pub pull_request: f64,
}

/// Fold the seven sub-metrics into the clamped weighted net score.
#[must_use]
pub fn weighted_net_score(scores: &SubScores) -> f64 {
    let weighted = W_CORRECTNESS * scores.correctness
        + W_BUS_FACTOR * scores.bus_factor
        + W_LICENSE * scores.license
        + W_RESPONSIVENESS * scores.responsiveness
        + W_RAMP_UP * scores.ramp_up
        + W_PINNED * scores.pinned_dependencies
        + W_PULL_REQUEST * scores.pull_request;
    weighted.clamp(0.0, 1.0)
}
