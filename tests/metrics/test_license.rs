use gitgauge::calculate_license_compatibility;

use super::common::snapshot;

fn score_for(license: Option<&str>) -> f64 {
    let mut details = snapshot();
    details.license = license.map(str::to_owned);
    calculate_license_compatibility(&details).unwrap()
}

#[test]
fn exact_spdx_names_match() {
    assert_eq!(score_for(Some("MIT")), 1.0);
    assert_eq!(score_for(Some("Apache-2.0")), 1.0);
    assert_eq!(score_for(Some("BSD-3-Clause")), 1.0);
    assert_eq!(score_for(Some("GPL-3.0")), 0.9);
}

#[test]
fn exact_match_is_case_insensitive() {
    assert_eq!(score_for(Some("mit")), 1.0);
    assert_eq!(score_for(Some("apache-2.0")), 1.0);
}

#[test]
fn textual_variants_match_by_pattern() {
    assert_eq!(score_for(Some("MIT License")), 1.0);
    assert_eq!(score_for(Some("Apache License 2.0")), 1.0);
    assert_eq!(score_for(Some("GNU General Public License v3.0")), 0.9);
    assert_eq!(score_for(Some("BSD 3-Clause \"New\" or \"Revised\" License")), 1.0);
    assert_eq!(score_for(Some("zlib License")), 1.0);
}

#[test]
fn copyleft_scores_lower_than_permissive() {
    assert!(score_for(Some("GPL-2.0")) < score_for(Some("MIT")));
    assert_eq!(score_for(Some("GNU Lesser General Public License v2.1")), 0.9);
}

#[test]
fn missing_license_scores_zero() {
    assert_eq!(score_for(None), 0.0);
}

#[test]
fn unrecognized_license_scores_zero() {
    assert_eq!(score_for(Some("Proprietary")), 0.0);
    assert_eq!(score_for(Some("Do What You Want 1.0")), 0.0);
}
