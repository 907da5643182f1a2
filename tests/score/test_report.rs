use gitgauge::{MetricLatencies, ScoreReport, SubScores, weighted_net_score};

fn all(value: f64) -> SubScores {
    SubScores {
        correctness: value,
        bus_factor: value,
        license: value,
        responsiveness: value,
        ramp_up: value,
        pinned_dependencies: value,
        pull_request: value,
    }
}

#[test]
fn perfect_sub_scores_yield_a_perfect_net_score() {
    let net = weighted_net_score(&all(1.0));
    assert!((net - 1.0).abs() < 1e-9, "got {net}");
}

#[test]
fn zero_sub_scores_yield_zero() {
    assert_eq!(weighted_net_score(&all(0.0)), 0.0);
}

#[test]
fn each_weight_contributes_its_share() {
    let net = weighted_net_score(&SubScores {
        correctness: 1.0,
        ..SubScores::default()
    });
    assert!((net - 0.15).abs() < 1e-9, "got {net}");

    let net = weighted_net_score(&SubScores {
        responsiveness: 1.0,
        ..SubScores::default()
    });
    assert!((net - 0.20).abs() < 1e-9, "got {net}");

    let net = weighted_net_score(&SubScores {
        license: 1.0,
        pull_request: 1.0,
        ..SubScores::default()
    });
    assert!((net - 0.20).abs() < 1e-9, "got {net}");
}

#[test]
fn net_score_stays_in_unit_range() {
    for value in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let net = weighted_net_score(&all(value));
        assert!((0.0..=1.0).contains(&net), "value {value} gave {net}");
    }
}

#[test]
fn report_serializes_with_wire_field_names() {
    let report = ScoreReport {
        net_score: 0.5,
        bus_factor: 0.4,
        correctness: 0.6,
        ramp_up: 0.7,
        responsiveness: 0.3,
        license: 1.0,
        pinned_dependencies: 0.2,
        pull_request: 0.1,
        total_time: 1.5,
        api_time: 0.8,
        clone_time: 0.4,
        latencies: MetricLatencies {
            bus_factor: 0.01,
            correctness: 0.02,
            ramp_up: 0.01,
            responsiveness: 0.01,
            license: 0.0,
            pinned_dependencies: 0.0,
            pull_request: 0.0,
        },
    };

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["NetScore"], 0.5);
    assert_eq!(json["BusFactor"], 0.4);
    assert_eq!(json["GoodPinningPractice"], 0.2);
    assert_eq!(json["ResponsivenessScore"], 0.3);
    assert_eq!(json["LicenseScore"], 1.0);
    assert_eq!(json["PullRequest"], 0.1);
    assert_eq!(json["total_time"], 1.5);
    assert_eq!(json["latencies"]["BusFactorLatency"], 0.01);
}
