//! Metric calculators and the fail-closed evaluation wrapper.
//!
//! Every calculator is a total function of the snapshot (two also read a
//! local checkout). A calculator failure never aborts a scoring run: the
//! wrapper logs it and scores that metric 0.

mod bus_factor;
mod correctness;
mod license_compat;
mod pinned_deps;
mod pull_requests;
mod ramp_up;
mod responsiveness;

pub use bus_factor::calculate_bus_factor;
pub use correctness::calculate_correctness;
pub use license_compat::calculate_license_compatibility;
pub use pinned_deps::calculate_pinned_dependencies;
pub use pull_requests::calculate_pull_request_review;
pub use ramp_up::calculate_ramp_up;
pub use responsiveness::calculate_responsiveness;

use std::future::Future;
use std::time::Instant;

use log::warn;
use thiserror::Error;

/// Internal calculator failure; caught by the wrapper, never surfaced.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct MetricError(pub String);

impl From<std::io::Error> for MetricError {
    fn from(e: std::io::Error) -> Self {
        MetricError(e.to_string())
    }
}

/// One metric outcome: a value in [0,1] and the wall-clock latency in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricResult {
    pub value: f64,
    pub latency: f64,
}

/// Evaluate one calculator, timing it and failing closed to 0 on error.
///
/// The clamp keeps every reported value inside [0,1] even if a
/// calculator misbehaves.
pub(crate) async fn run_guarded<F>(name: &'static str, work: F) -> MetricResult
where
    F: Future<Output = Result<f64, MetricError>>,
{
    let start = Instant::now();
    let value = match work.await {
        Ok(value) => value.clamp(0.0, 1.0),
        Err(e) => {
            warn!("{name} metric failed, scoring 0: {e}");
            0.0
        }
    };
    MetricResult {
        value,
        latency: start.elapsed().as_secs_f64(),
    }
}
