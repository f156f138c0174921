//! Statistics Tests.

use pretty_assertions::assert_eq;
use rvpipe_core::stats::{STATS_SECTIONS, SimStats};

#[test]
fn derived_metrics_are_zero_before_any_work() {
    let stats = SimStats::default();
    assert_eq!(stats.branch_accuracy(), 0.0);
    assert_eq!(stats.cpi(), 0.0);
    assert_eq!(stats.branch_lookups(), 0);
}

#[test]
fn accuracy_and_cpi() {
    let stats = SimStats {
        cycles: 30,
        instructions_retired: 12,
        branch_correct: 3,
        branch_incorrect: 1,
        ..SimStats::default()
    };
    assert_eq!(stats.branch_lookups(), 4);
    assert!((stats.branch_accuracy() - 75.0).abs() < f64::EPSILON);
    assert!((stats.cpi() - 2.5).abs() < f64::EPSILON);
}

#[test]
fn reset_feature_counters_keeps_timing_and_mix() {
    let mut stats = SimStats {
        cycles: 40,
        instructions_retired: 20,
        inst_alu: 15,
        inst_branch: 5,
        branch_correct: 4,
        branch_incorrect: 1,
        forwards: 9,
        stalls: 2,
        flushes: 3,
        ..SimStats::default()
    };
    stats.reset_feature_counters();

    assert_eq!(
        stats,
        SimStats {
            cycles: 40,
            instructions_retired: 20,
            inst_alu: 15,
            inst_branch: 5,
            flushes: 3,
            ..SimStats::default()
        }
    );
}

#[test]
fn every_section_prints() {
    let stats = SimStats {
        cycles: 10,
        instructions_retired: 5,
        ..SimStats::default()
    };
    let sections: Vec<String> = STATS_SECTIONS.iter().map(|s| (*s).to_string()).collect();
    stats.print_sections(&sections);
    stats.print();
}
