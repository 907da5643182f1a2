//! Contributor concentration risk.

use log::debug;

use crate::github::RepoDetails;
use crate::metrics::MetricError;

/// Contributors strictly below this share of total contributions are noise.
const NOISE_CONTRIBUTION_SHARE: f64 = 0.005;

/// Core-contributor ratio that earns the full score.
const CORE_RATIO_TARGET: f64 = 0.35;

/// Score contributor concentration from the snapshot's contributor list.
///
/// The active maintaining group, not historical headcount, determines
/// resilience: one-off committers are filtered out and the score follows
/// the ratio of remaining core contributors to all contributors. A sole
/// maintainer is a single point of failure regardless of volume.
pub fn calculate_bus_factor(details: &RepoDetails) -> Result<f64, MetricError> {
    if details.contributors.is_empty() {
        debug!("No contributors available for bus factor calculation");
        return Ok(0.0);
    }
    if details.contributors.len() == 1 {
        debug!("Bus factor is 0 as there is only 1 contributor");
        return Ok(0.0);
    }

    let total: u64 = details.contributors.iter().map(|c| c.contributions).sum();
    if total == 0 {
        debug!("All contributors have zero recorded contributions");
        return Ok(0.0);
    }

    // Contributors sitting exactly at the noise floor still count as core.
    let noise_floor = total as f64 * NOISE_CONTRIBUTION_SHARE;
    let core = details
        .contributors
        .iter()
        .filter(|c| c.contributions as f64 >= noise_floor)
        .count();

    let core_ratio = core as f64 / details.contributors.len() as f64;
    debug!(
        "Bus factor: {core}/{} core contributors (ratio {core_ratio:.3})",
        details.contributors.len()
    );

    Ok((core_ratio / CORE_RATIO_TARGET).min(1.0))
}
