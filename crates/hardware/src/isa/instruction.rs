//! Instruction encoding and decoded instruction types.
//!
//! Provides bit extraction for raw 32-bit words and the closed set of
//! instruction forms the pipeline understands. Each form carries only the
//! fields that are meaningful for it.

use std::fmt;

use crate::common::constants::{
    FUNCT3_SHIFT, FUNCT7_SHIFT, OPCODE_MASK, RD_SHIFT, REG_FIELD_MASK, RS1_SHIFT, RS2_SHIFT,
};

/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    ///
    /// Distinguishes operations within the same opcode (e.g. BEQ vs BNE).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    ///
    /// Distinguishes ADD from SUB and the base ops from their M-extension
    /// counterparts.
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_FIELD_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> RS1_SHIFT) & REG_FIELD_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> RS2_SHIFT) & REG_FIELD_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> FUNCT3_SHIFT) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> FUNCT7_SHIFT) & FUNCT7_MASK
    }
}

/// Integer ALU operation selected by an instruction's function codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Wrapping multiplication (low 32 bits).
    Mul,
    /// Signed division, rounding toward zero.
    Div,
    /// Signed remainder.
    Rem,
    /// Bitwise exclusive or.
    Xor,
    /// Bitwise or.
    Or,
    /// Bitwise and.
    And,
    /// Logical shift left.
    Sll,
    /// Logical shift right.
    Srl,
}

impl AluOp {
    /// Upper-case mnemonic of the register-register form.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Rem => "REM",
            Self::Xor => "XOR",
            Self::Or => "OR",
            Self::And => "AND",
            Self::Sll => "SLL",
            Self::Srl => "SRL",
        }
    }
}

/// Signed comparison evaluated by a conditional branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BranchCond {
    /// Taken when `rs1 == rs2`.
    Eq,
    /// Taken when `rs1 != rs2`.
    Ne,
    /// Taken when `rs1 < rs2` (signed).
    Lt,
    /// Taken when `rs1 >= rs2` (signed).
    Ge,
}

impl BranchCond {
    /// Upper-case mnemonic of the branch.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Eq => "BEQ",
            Self::Ne => "BNE",
            Self::Lt => "BLT",
            Self::Ge => "BGE",
        }
    }
}

/// A decoded instruction.
///
/// Register fields are indices into the register file; immediates are
/// already sign-extended byte offsets or operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Register-register arithmetic: `rd = rs1 op rs2`.
    R {
        /// Destination register.
        rd: usize,
        /// First source register.
        rs1: usize,
        /// Second source register.
        rs2: usize,
        /// Operation selected by funct3/funct7.
        op: AluOp,
    },
    /// Register-immediate arithmetic: `rd = rs1 op imm`.
    ///
    /// `op` is one of [`AluOp::Add`], [`AluOp::Sll`], [`AluOp::Srl`].
    I {
        /// Destination register.
        rd: usize,
        /// Source register.
        rs1: usize,
        /// Sign-extended 12-bit immediate.
        imm: i32,
        /// Operation selected by funct3.
        op: AluOp,
    },
    /// Load word: `rd = mem[rs1 + imm]`.
    Load {
        /// Destination register.
        rd: usize,
        /// Base address register.
        rs1: usize,
        /// Sign-extended 12-bit offset.
        imm: i32,
    },
    /// Store word: `mem[rs1 + imm] = rs2`.
    Store {
        /// Base address register.
        rs1: usize,
        /// Register holding the value to store.
        rs2: usize,
        /// Sign-extended 12-bit offset.
        imm: i32,
    },
    /// Conditional branch to `pc + imm`.
    Branch {
        /// First compared register.
        rs1: usize,
        /// Second compared register.
        rs2: usize,
        /// Sign-extended 13-bit byte offset.
        imm: i32,
        /// Comparison selected by funct3.
        cond: BranchCond,
    },
    /// Jump and link: `rd = pc + 4; pc += imm`.
    Jal {
        /// Link register.
        rd: usize,
        /// Sign-extended 21-bit byte offset.
        imm: i32,
    },
    /// Jump and link register: `rd = pc + 4; pc = (rs1 + imm) & !1`.
    Jalr {
        /// Link register.
        rd: usize,
        /// Base address register.
        rs1: usize,
        /// Sign-extended 12-bit offset.
        imm: i32,
    },
}

impl Instruction {
    /// Register written at write-back, if any.
    ///
    /// Returns `None` for stores, branches, and any form whose destination is
    /// `x0`, since writes there are discarded.
    pub const fn dest(&self) -> Option<usize> {
        match *self {
            Self::R { rd, .. }
            | Self::I { rd, .. }
            | Self::Load { rd, .. }
            | Self::Jal { rd, .. }
            | Self::Jalr { rd, .. }
                if rd != 0 =>
            {
                Some(rd)
            }
            _ => None,
        }
    }

    /// Source registers actually read by this form, in `(rs1, rs2)` order.
    pub const fn sources(&self) -> (Option<usize>, Option<usize>) {
        match *self {
            Self::R { rs1, rs2, .. }
            | Self::Store { rs1, rs2, .. }
            | Self::Branch { rs1, rs2, .. } => (Some(rs1), Some(rs2)),
            Self::I { rs1, .. } | Self::Load { rs1, .. } | Self::Jalr { rs1, .. } => {
                (Some(rs1), None)
            }
            Self::Jal { .. } => (None, None),
        }
    }

    /// Returns `true` for load instructions, whose result is only known after
    /// the memory stage.
    pub const fn is_load(&self) -> bool {
        matches!(self, Self::Load { .. })
    }

    /// Returns `true` for branches and jumps.
    pub const fn is_control(&self) -> bool {
        matches!(self, Self::Branch { .. } | Self::Jal { .. } | Self::Jalr { .. })
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::isa::disasm::disassemble(self))
    }
}
