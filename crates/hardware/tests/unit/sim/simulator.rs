//! Simulator API Tests.
//!
//! Covers construction, bounded runs, snapshots, feature toggling, and reset.

use pretty_assertions::assert_eq;
use rvpipe_core::common::error::SimError;
use rstest::rstest;
use rvpipe_core::config::{Config, FeatureFlags};
use rvpipe_core::core::pipeline::control::{Redirect, RedirectCause};
use rvpipe_core::core::units::bru::PredictorState;
use rvpipe_core::sim::{ProgramImage, RunOutcome, Simulator, StopReason};

use crate::common::{TestContext, inst};

// ══════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════

/// Counts x1 up to 3 with a backward BLT at 0xC.
fn counting_loop() -> Vec<u32> {
    vec![
        inst().addi(1, 0, 0).build(),
        inst().addi(2, 0, 3).build(),
        inst().addi(1, 1, 1).build(),
        inst().blt(1, 2, -4).build(),
    ]
}

fn without_prediction() -> FeatureFlags {
    FeatureFlags {
        branch_prediction: false,
        ..FeatureFlags::all()
    }
}

/// `jal x0, 0`: spins forever.
fn spin() -> Vec<u32> {
    vec![inst().jal(0, 0).build()]
}

// ══════════════════════════════════════════════════════════
// 1. Construction and runs
// ══════════════════════════════════════════════════════════

#[test]
fn empty_program_is_finished_immediately() {
    let mut sim = Simulator::new(ProgramImage::default(), &Config::default());
    assert!(sim.is_finished());
    assert_eq!(
        sim.run_to_completion(10).unwrap(),
        RunOutcome {
            cycles: 0,
            reason: StopReason::Completed,
        }
    );
}

#[test]
fn straight_line_program_takes_fill_plus_one_per_instruction() {
    let program = [
        inst().addi(1, 0, 1).build(),
        inst().addi(2, 0, 2).build(),
        inst().addi(3, 0, 3).build(),
    ];
    let mut ctx = TestContext::new(&program);
    assert_eq!(ctx.run().cycles, 7);
    assert!((ctx.stats().cpi() - 7.0 / 3.0).abs() < 1e-9);
}

#[test]
fn cycle_limit_stops_a_non_terminating_program() {
    let mut ctx = TestContext::new(&spin());
    let outcome = ctx.sim.run_to_completion(50).unwrap();
    assert_eq!(
        outcome,
        RunOutcome {
            cycles: 50,
            reason: StopReason::CycleLimit,
        }
    );
    assert!(!ctx.sim.is_finished());
}

#[test]
fn run_uses_configured_cycle_cap() {
    let config = Config::from_json(r#"{ "general": { "max_cycles": 20 } }"#).unwrap();
    let mut sim = Simulator::new(ProgramImage::from_words(spin(), vec![]), &config);
    let outcome = sim.run().unwrap();
    assert_eq!(outcome.reason, StopReason::CycleLimit);
    assert_eq!(sim.cycle(), 20);
}

#[test]
fn from_bytes_builds_and_runs() {
    let text: Vec<u8> = [inst().lw(1, 0, 4).build(), inst().addi(2, 1, 1).build()]
        .iter()
        .flat_map(|w| w.to_le_bytes())
        .collect();
    let data: Vec<u8> = [3_i32, 41].iter().flat_map(|w| w.to_le_bytes()).collect();

    let mut sim = Simulator::from_bytes(&text, &data, &Config::default()).unwrap();
    let _ = sim.run().unwrap();
    assert_eq!(sim.regs().read(2), 42);
}

#[test]
fn from_bytes_fails_before_any_cycle() {
    let err = Simulator::from_bytes(&[0; 5], &[], &Config::default()).unwrap_err();
    assert!(matches!(err, SimError::MalformedImage { segment: "text", .. }));
}

#[test]
fn run_stops_at_decode_error() {
    let program = [inst().addi(1, 0, 1).build(), 0x0000_0037];
    let mut ctx = TestContext::new(&program);
    let err = ctx.sim.run_to_completion(100).unwrap_err();
    assert!(matches!(err, SimError::Decode { pc: 4, .. }));
    assert_eq!(ctx.sim.cycle(), 3);
}

// ══════════════════════════════════════════════════════════
// 2. Snapshots
// ══════════════════════════════════════════════════════════

#[test]
fn snapshot_matches_accessors() {
    let mut ctx = TestContext::with_image(
        &[inst().lw(1, 0, 0).build(), inst().sw(0, 1, 8).build()],
        &[5],
        FeatureFlags::all(),
    );
    ctx.step_n(3);
    let snap = ctx.sim.snapshot();

    assert_eq!(snap.cycle, ctx.sim.cycle());
    assert_eq!(snap.pc, ctx.sim.pc());
    assert_eq!(snap.if_id, *ctx.sim.if_id());
    assert_eq!(snap.id_ex, *ctx.sim.id_ex());
    assert_eq!(snap.ex_mem, *ctx.sim.ex_mem());
    assert_eq!(snap.mem_wb, *ctx.sim.mem_wb());
    assert_eq!(snap.retired, *ctx.sim.retired());
    assert_eq!(&snap.regs, ctx.sim.regs());
    assert_eq!(snap.stats, *ctx.sim.stats());
    assert_eq!(snap.features, ctx.sim.features());
    assert_eq!(snap.last_redirect, ctx.sim.last_redirect());
    assert!(!snap.finished);

    let _ = ctx.run();
    let done = ctx.sim.snapshot();
    assert!(done.finished);
    assert_eq!(done.memory, vec![(0, 5), (8, 5)]);
}

#[test]
fn snapshot_can_be_rendered_on_another_thread() {
    let mut ctx = TestContext::new(&counting_loop());
    let _ = ctx.run();
    let snap = ctx.sim.snapshot();

    let rendered = std::thread::spawn(move || {
        snap.predictor
            .iter()
            .map(|(pc, state)| format!("{pc:#06x}: {state}"))
            .collect::<Vec<_>>()
    })
    .join()
    .unwrap();
    assert_eq!(rendered, vec!["0x000c: Weakly Taken".to_string()]);
}

// ══════════════════════════════════════════════════════════
// 3. Feature toggling and reset
// ══════════════════════════════════════════════════════════

#[test]
fn set_features_resets_only_per_feature_counters() {
    let mut ctx = TestContext::new(&counting_loop());
    let _ = ctx.run();
    let before = ctx.sim.snapshot();
    assert!(before.stats.branch_incorrect > 0);
    assert!(before.stats.forwards > 0);

    ctx.sim.set_features(FeatureFlags::none());

    let after = ctx.sim.snapshot();
    assert_eq!(after.features, FeatureFlags::none());
    assert_eq!(after.stats.branch_correct, 0);
    assert_eq!(after.stats.branch_incorrect, 0);
    assert_eq!(after.stats.forwards, 0);
    assert_eq!(after.stats.stalls, 0);
    assert_eq!(after.stats.cycles, before.stats.cycles);
    assert_eq!(after.stats.flushes, before.stats.flushes);
    assert_eq!(after.stats.instructions_retired, before.stats.instructions_retired);
    assert_eq!(after.predictor, before.predictor);
    assert_eq!(after.regs, before.regs);
    assert_eq!(after.pc, before.pc);
}

#[test]
fn disabling_prediction_mid_run_still_checks_in_flight_branch() {
    // beq at 0x4 is not taken but starts out predicted taken
    let program = vec![
        inst().addi(1, 0, 1).build(),
        inst().beq(0, 1, 8).build(),
        inst().addi(2, 0, 5).build(),
        inst().addi(3, 0, 7).build(),
    ];
    let config = Config::from_json(r#"{ "predictor": { "initial_state": 3 } }"#).unwrap();
    let mut sim = Simulator::new(ProgramImage::from_words(program, vec![]), &config);
    for _ in 0..3 {
        sim.advance_cycle().unwrap();
    }
    assert!(sim.id_ex().entry().unwrap().pred_taken);
    assert_eq!(sim.pc(), 16);

    sim.set_features(without_prediction());
    sim.advance_cycle().unwrap();
    assert_eq!(
        sim.last_redirect(),
        Some(Redirect {
            pc: 4,
            target: 8,
            cause: RedirectCause::Mispredict,
        })
    );
    assert_eq!(sim.stats().branch_incorrect, 1);

    let outcome = sim.run_to_completion(100).unwrap();
    assert_eq!(outcome.reason, StopReason::Completed);
    assert_eq!(sim.regs().read(2), 5);
    assert_eq!(sim.regs().read(3), 7);
}

#[rstest]
#[case::branch(inst().beq(0, 0, 8).build(), RedirectCause::TakenBranch)]
#[case::jump(inst().jal(1, 8).build(), RedirectCause::Jump)]
fn enabling_prediction_mid_run_keeps_memory_redirect(
    #[case] transfer: u32,
    #[case] cause: RedirectCause,
) {
    let program = [
        transfer,
        inst().addi(2, 0, 99).build(),
        inst().addi(3, 0, 7).build(),
    ];
    let mut ctx = TestContext::with_features(&program, without_prediction());
    ctx.step_n(3);
    assert_eq!(ctx.sim.ex_mem().entry().map(|e| e.pc), Some(0));
    assert_eq!(ctx.sim.last_redirect(), None);

    ctx.sim.set_features(FeatureFlags::all());
    ctx.step();
    assert_eq!(
        ctx.sim.last_redirect(),
        Some(Redirect {
            pc: 0,
            target: 8,
            cause,
        })
    );

    let _ = ctx.run();
    assert_eq!(ctx.reg(2), 0);
    assert_eq!(ctx.reg(3), 7);
    assert_eq!(ctx.stats().instructions_retired, 2);
}

#[test]
fn reset_rebuilds_state_and_keeps_features() {
    let mut ctx = TestContext::with_image(
        &[inst().addi(1, 0, 9).build(), inst().sw(0, 1, 0).build()],
        &[4],
        FeatureFlags::all(),
    );
    let _ = ctx.run();
    assert_eq!(ctx.mem(0), 9);

    let features = FeatureFlags {
        forwarding: false,
        ..FeatureFlags::all()
    };
    ctx.sim.set_features(features);
    ctx.sim.reset();

    assert_eq!(ctx.sim.cycle(), 0);
    assert_eq!(ctx.sim.pc(), 0);
    assert_eq!(ctx.reg(1), 0);
    assert_eq!(ctx.mem(0), 4);
    assert!(ctx.sim.predictor().is_empty());
    assert_eq!(ctx.sim.features(), features);
    assert!(ctx.sim.if_id().is_empty());

    let _ = ctx.run();
    assert_eq!(ctx.mem(0), 9);
}

#[test]
fn initial_predictor_state_is_configurable() {
    let config = Config::from_json(r#"{ "predictor": { "initial_state": "StronglyTaken" } }"#).unwrap();
    let mut sim = Simulator::new(ProgramImage::from_words(counting_loop(), vec![]), &config);
    let _ = sim.run().unwrap();

    assert_eq!(sim.regs().read(1), 3);
    assert_eq!(sim.stats().branch_correct, 2);
    assert_eq!(sim.stats().branch_incorrect, 1);
    assert_eq!(sim.predictor(), vec![(0xC, PredictorState::WeaklyTaken)]);
}

#[test]
fn report_prints_without_panicking() {
    let mut ctx = TestContext::new(&counting_loop());
    let _ = ctx.run();
    ctx.sim.print_report();
}
