//! Instruction Disassembler.
//!
//! Renders decoded instructions as upper-case assembly text for pipeline
//! viewers, per-cycle trace logs, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use rvpipe_core::isa::disasm::disassemble_word;
//! assert_eq!(disassemble_word(0x00A00293), "ADDI x5, x0, 10");
//! ```

use crate::isa::decode::decode;
use crate::isa::instruction::{AluOp, Instruction};

/// Disassembles a decoded instruction.
///
/// Loads and stores use the `offset(base)` syntax; branch and jump offsets
/// are printed as signed byte offsets relative to the instruction.
pub fn disassemble(inst: &Instruction) -> String {
    match *inst {
        Instruction::R { rd, rs1, rs2, op } => {
            format!("{} x{rd}, x{rs1}, x{rs2}", op.mnemonic())
        }
        Instruction::I { rd, rs1, imm, op } => {
            let mnemonic = match op {
                AluOp::Sll => "SLLI",
                AluOp::Srl => "SRLI",
                _ => "ADDI",
            };
            format!("{mnemonic} x{rd}, x{rs1}, {imm}")
        }
        Instruction::Load { rd, rs1, imm } => format!("LW x{rd}, {imm}(x{rs1})"),
        Instruction::Store { rs1, rs2, imm } => format!("SW x{rs2}, {imm}(x{rs1})"),
        Instruction::Branch {
            rs1,
            rs2,
            imm,
            cond,
        } => format!("{} x{rs1}, x{rs2}, {imm}", cond.mnemonic()),
        Instruction::Jal { rd, imm } => format!("JAL x{rd}, {imm}"),
        Instruction::Jalr { rd, rs1, imm } => format!("JALR x{rd}, {imm}(x{rs1})"),
    }
}

/// Disassembles a raw instruction word.
///
/// Returns `UNKNOWN (0x........)` for words the decoder rejects.
pub fn disassemble_word(word: u32) -> String {
    decode(word).map_or_else(
        |_| format!("UNKNOWN ({word:#010x})"),
        |inst| disassemble(&inst),
    )
}
