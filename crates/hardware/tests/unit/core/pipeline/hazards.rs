//! Data Hazard Detection Tests.
//!
//! Verifies that `need_stall` checks the right producers under every
//! combination of the forwarding and hazard-detection flags, and that only
//! the source fields an instruction form actually reads are compared.

use rstest::rstest;
use rvpipe_core::config::FeatureFlags;
use rvpipe_core::core::pipeline::hazards::{need_stall, source_regs};
use rvpipe_core::core::pipeline::latches::{ExMem, ExMemEntry, Latch, MemWb, MemWbEntry};
use rvpipe_core::isa::decode::decode;

use crate::common::inst;

// ══════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════

fn ex_mem(word: u32) -> ExMem {
    Latch::Valid(ExMemEntry {
        pc: 0,
        raw: word,
        inst: decode(word).unwrap(),
        alu: 0,
        store_data: 0,
        taken: false,
        target: 0,
        speculative: true,
    })
}

fn mem_wb(word: u32) -> MemWb {
    Latch::Valid(MemWbEntry {
        pc: 0,
        raw: word,
        inst: decode(word).unwrap(),
        result: 0,
    })
}

fn flags(forwarding: bool, hazard_detection: bool) -> FeatureFlags {
    FeatureFlags {
        branch_prediction: true,
        forwarding,
        hazard_detection,
    }
}

// ══════════════════════════════════════════════════════════
// 1. Source registers per form
// ══════════════════════════════════════════════════════════

#[test]
fn source_registers_follow_instruction_form() {
    assert_eq!(source_regs(inst().add(3, 1, 2).build()), (Some(1), Some(2)));
    assert_eq!(source_regs(inst().sw(4, 5, 0).build()), (Some(4), Some(5)));
    assert_eq!(source_regs(inst().beq(6, 7, 8).build()), (Some(6), Some(7)));
    assert_eq!(source_regs(inst().addi(3, 1, 0x7FF).build()), (Some(1), None));
    assert_eq!(source_regs(inst().lw(3, 1, 4).build()), (Some(1), None));
    assert_eq!(source_regs(inst().jalr(0, 1, 0).build()), (Some(1), None));
    assert_eq!(source_regs(inst().jal(1, 8).build()), (None, None));
    assert_eq!(source_regs(0xFFFF_FFFF), (None, None));
}

#[test]
fn immediate_bits_in_rs2_field_do_not_stall() {
    // addi x3, x1, 5 has 5 in the rs2 field position
    let consumer = inst().addi(3, 1, 5).build();
    let producer = ex_mem(inst().addi(5, 0, 1).build());
    assert!(!need_stall(consumer, &producer, &Latch::Empty, flags(false, true)));
}

// ══════════════════════════════════════════════════════════
// 2. Flag matrix
// ══════════════════════════════════════════════════════════

#[rstest]
fn disabled_detection_never_stalls(#[values(true, false)] forwarding: bool) {
    let consumer = inst().add(2, 1, 1).build();
    let load = ex_mem(inst().lw(1, 0, 0).build());
    let alu = mem_wb(inst().addi(1, 0, 1).build());
    assert!(!need_stall(consumer, &load, &alu, flags(forwarding, false)));
}

#[test]
fn forwarding_only_stalls_on_nearer_load() {
    let consumer = inst().add(2, 1, 3).build();
    let features = flags(true, true);

    assert!(need_stall(consumer, &ex_mem(inst().lw(1, 0, 0).build()), &Latch::Empty, features));
    assert!(need_stall(consumer, &ex_mem(inst().lw(3, 0, 0).build()), &Latch::Empty, features));
    assert!(!need_stall(consumer, &ex_mem(inst().addi(1, 0, 1).build()), &Latch::Empty, features));
    // a load two ahead has already read memory by the time the consumer executes
    assert!(!need_stall(consumer, &Latch::Empty, &mem_wb(inst().lw(1, 0, 0).build()), features));
}

#[test]
fn without_forwarding_either_producer_stalls() {
    let consumer = inst().sub(2, 1, 3).build();
    let features = flags(false, true);

    assert!(need_stall(consumer, &ex_mem(inst().addi(1, 0, 1).build()), &Latch::Empty, features));
    assert!(need_stall(consumer, &Latch::Empty, &mem_wb(inst().addi(3, 0, 1).build()), features));
    assert!(!need_stall(consumer, &ex_mem(inst().addi(4, 0, 1).build()), &mem_wb(inst().addi(5, 0, 1).build()), features));
}

#[rstest]
fn x0_destination_never_stalls(#[values(true, false)] forwarding: bool) {
    let consumer = inst().add(2, 0, 0).build();
    let producer = ex_mem(inst().lw(0, 0, 0).build());
    assert!(!need_stall(consumer, &producer, &mem_wb(inst().addi(0, 0, 1).build()), flags(forwarding, true)));
}

#[test]
fn bubbles_and_stores_are_not_producers() {
    let consumer = inst().add(2, 1, 1).build();
    let store = ex_mem(inst().sw(1, 1, 0).build());
    assert!(!need_stall(consumer, &Latch::Bubble, &Latch::Bubble, flags(false, true)));
    assert!(!need_stall(consumer, &store, &Latch::Empty, flags(false, true)));
}
