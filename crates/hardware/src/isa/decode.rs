//! RV32I Instruction Decoder.
//!
//! Turns a raw 32-bit word into an [`Instruction`]. Decoding is a pure
//! function of the word: it never touches simulator state, and decoding the
//! same word twice yields identical results.
//!
//! Immediates are reassembled from their scattered bit fields and
//! sign-extended from the field width (12 bits for I/S, 13 for B, 21 for J).

use crate::common::constants::INSTRUCTION_WIDTH;
use crate::common::error::DecodeError;
use crate::isa::instruction::{AluOp, BranchCond, Instruction, InstructionBits};
use crate::isa::rv32i::{funct3, funct7, opcodes};
use crate::isa::rv32m::{funct3 as m_funct3, funct7 as m_funct7};

/// I-Type immediate occupies bits 31-20.
const I_IMM_SHIFT: u32 = 20;

/// S-Type `imm[4:0]` lives in bits 11-7.
const S_IMM_LOW_SHIFT: u32 = 7;
const S_IMM_LOW_MASK: u32 = 0x1F;
/// S-Type `imm[11:5]` lives in bits 31-25.
const S_IMM_HIGH_SHIFT: u32 = 25;
const S_IMM_HIGH_MASK: u32 = 0x7F;
const S_IMM_HIGH_POS: u32 = 5;
const S_IMM_BITS: u32 = 12;

// B-Type: imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode
const B_IMM_11_SHIFT: u32 = 7;
const B_IMM_4_1_SHIFT: u32 = 8;
const B_IMM_4_1_MASK: u32 = 0xF;
const B_IMM_10_5_SHIFT: u32 = 25;
const B_IMM_10_5_MASK: u32 = 0x3F;
const B_IMM_12_SHIFT: u32 = 31;
const B_IMM_12_POS: u32 = 12;
const B_IMM_11_POS: u32 = 11;
const B_IMM_10_5_POS: u32 = 5;
const B_IMM_4_1_POS: u32 = 1;
const B_IMM_BITS: u32 = 13;

// J-Type: imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode
const J_IMM_19_12_SHIFT: u32 = 12;
const J_IMM_19_12_MASK: u32 = 0xFF;
const J_IMM_11_SHIFT: u32 = 20;
const J_IMM_10_1_SHIFT: u32 = 21;
const J_IMM_10_1_MASK: u32 = 0x3FF;
const J_IMM_20_SHIFT: u32 = 31;
const J_IMM_20_POS: u32 = 20;
const J_IMM_19_12_POS: u32 = 12;
const J_IMM_11_POS: u32 = 11;
const J_IMM_10_1_POS: u32 = 1;
const J_IMM_BITS: u32 = 21;

/// Single-bit field mask.
const BIT_MASK: u32 = 1;

/// Decodes a 32-bit instruction word.
///
/// # Arguments
///
/// * `inst` - The raw instruction word.
///
/// # Returns
///
/// The decoded [`Instruction`], or a [`DecodeError`] when the opcode or its
/// function codes fall outside the supported subset.
pub fn decode(inst: u32) -> Result<Instruction, DecodeError> {
    let opcode = inst.opcode();
    let rd = inst.rd();
    let rs1 = inst.rs1();
    let rs2 = inst.rs2();
    let f3 = inst.funct3();
    let f7 = inst.funct7();

    let unsupported_funct = || DecodeError::UnsupportedFunct {
        opcode,
        funct3: f3,
        funct7: f7,
    };

    let decoded = match opcode {
        opcodes::OP_REG => Instruction::R {
            rd,
            rs1,
            rs2,
            op: reg_op(f3, f7).ok_or_else(unsupported_funct)?,
        },
        opcodes::OP_IMM => Instruction::I {
            rd,
            rs1,
            imm: decode_i_type_imm(inst),
            op: match f3 {
                funct3::SLL => AluOp::Sll,
                funct3::SRL => AluOp::Srl,
                _ => AluOp::Add,
            },
        },
        opcodes::OP_LOAD if f3 == funct3::LW => Instruction::Load {
            rd,
            rs1,
            imm: decode_i_type_imm(inst),
        },
        opcodes::OP_STORE if f3 == funct3::SW => Instruction::Store {
            rs1,
            rs2,
            imm: decode_s_type_imm(inst),
        },
        opcodes::OP_BRANCH => Instruction::Branch {
            rs1,
            rs2,
            imm: decode_b_type_imm(inst),
            cond: branch_cond(f3).ok_or_else(unsupported_funct)?,
        },
        opcodes::OP_JAL => Instruction::Jal {
            rd,
            imm: decode_j_type_imm(inst),
        },
        opcodes::OP_JALR => Instruction::Jalr {
            rd,
            rs1,
            imm: decode_i_type_imm(inst),
        },
        opcodes::OP_LOAD | opcodes::OP_STORE => return Err(unsupported_funct()),
        _ => return Err(DecodeError::UnsupportedOpcode { opcode }),
    };

    Ok(decoded)
}

/// Maps R-type function codes to an ALU operation.
fn reg_op(f3: u32, f7: u32) -> Option<AluOp> {
    let op = match (f7, f3) {
        (funct7::DEFAULT, funct3::ADD_SUB) => AluOp::Add,
        (funct7::SUB, funct3::ADD_SUB) => AluOp::Sub,
        (funct7::DEFAULT, funct3::SLL) => AluOp::Sll,
        (funct7::DEFAULT, funct3::XOR) => AluOp::Xor,
        (funct7::DEFAULT, funct3::SRL) => AluOp::Srl,
        (funct7::DEFAULT, funct3::OR) => AluOp::Or,
        (funct7::DEFAULT, funct3::AND) => AluOp::And,
        (m_funct7::M_EXTENSION, m_funct3::MUL) => AluOp::Mul,
        (m_funct7::M_EXTENSION, m_funct3::DIV) => AluOp::Div,
        (m_funct7::M_EXTENSION, m_funct3::REM) => AluOp::Rem,
        _ => return None,
    };
    Some(op)
}

const fn branch_cond(f3: u32) -> Option<BranchCond> {
    match f3 {
        funct3::BEQ => Some(BranchCond::Eq),
        funct3::BNE => Some(BranchCond::Ne),
        funct3::BLT => Some(BranchCond::Lt),
        funct3::BGE => Some(BranchCond::Ge),
        _ => None,
    }
}

/// I-Type: `imm[11:0] | rs1 | funct3 | rd | opcode`.
const fn decode_i_type_imm(inst: u32) -> i32 {
    (inst as i32) >> I_IMM_SHIFT
}

/// S-Type: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`.
const fn decode_s_type_imm(inst: u32) -> i32 {
    let low = (inst >> S_IMM_LOW_SHIFT) & S_IMM_LOW_MASK;
    let high = (inst >> S_IMM_HIGH_SHIFT) & S_IMM_HIGH_MASK;
    sign_extend((high << S_IMM_HIGH_POS) | low, S_IMM_BITS)
}

/// B-Type immediates are even byte offsets in a 13-bit signed range.
const fn decode_b_type_imm(inst: u32) -> i32 {
    let bit_11 = (inst >> B_IMM_11_SHIFT) & BIT_MASK;
    let bits_4_1 = (inst >> B_IMM_4_1_SHIFT) & B_IMM_4_1_MASK;
    let bits_10_5 = (inst >> B_IMM_10_5_SHIFT) & B_IMM_10_5_MASK;
    let bit_12 = (inst >> B_IMM_12_SHIFT) & BIT_MASK;

    let combined = (bit_12 << B_IMM_12_POS)
        | (bit_11 << B_IMM_11_POS)
        | (bits_10_5 << B_IMM_10_5_POS)
        | (bits_4_1 << B_IMM_4_1_POS);
    sign_extend(combined, B_IMM_BITS)
}

/// J-Type immediates are even byte offsets in a 21-bit signed range.
const fn decode_j_type_imm(inst: u32) -> i32 {
    let bits_19_12 = (inst >> J_IMM_19_12_SHIFT) & J_IMM_19_12_MASK;
    let bit_11 = (inst >> J_IMM_11_SHIFT) & BIT_MASK;
    let bits_10_1 = (inst >> J_IMM_10_1_SHIFT) & J_IMM_10_1_MASK;
    let bit_20 = (inst >> J_IMM_20_SHIFT) & BIT_MASK;

    let combined = (bit_20 << J_IMM_20_POS)
        | (bits_19_12 << J_IMM_19_12_POS)
        | (bit_11 << J_IMM_11_POS)
        | (bits_10_1 << J_IMM_10_1_POS);
    sign_extend(combined, J_IMM_BITS)
}

/// Sign extends the low `bits` of `val` to a 32-bit signed integer.
const fn sign_extend(val: u32, bits: u32) -> i32 {
    let shift = INSTRUCTION_WIDTH - bits;
    ((val << shift) as i32) >> shift
}
