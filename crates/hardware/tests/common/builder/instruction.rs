//! RV32I instruction encoder.
//!
//! Produces raw 32-bit words for the instruction forms the pipeline
//! executes, so tests can assemble programs without external tooling.

use rvpipe_core::isa::rv32i::opcodes::{
    OP_BRANCH, OP_IMM, OP_JAL, OP_JALR, OP_LOAD, OP_REG, OP_STORE,
};

/// Builds one instruction word field by field.
#[derive(Clone, Copy, Debug, Default)]
pub struct InstructionBuilder {
    opcode: u32,
    rd: u32,
    funct3: u32,
    rs1: u32,
    rs2: u32,
    funct7: u32,
    imm: i32,
}

impl InstructionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opcode(mut self, op: u32) -> Self {
        self.opcode = op;
        self
    }

    pub fn rd(mut self, rd: u32) -> Self {
        self.rd = rd;
        self
    }

    pub fn rs1(mut self, rs1: u32) -> Self {
        self.rs1 = rs1;
        self
    }

    pub fn rs2(mut self, rs2: u32) -> Self {
        self.rs2 = rs2;
        self
    }

    pub fn funct3(mut self, funct3: u32) -> Self {
        self.funct3 = funct3;
        self
    }

    pub fn funct7(mut self, funct7: u32) -> Self {
        self.funct7 = funct7;
        self
    }

    pub fn imm(mut self, imm: i32) -> Self {
        self.imm = imm;
        self
    }

    // --- R-type ---

    fn reg(self, rd: u32, rs1: u32, rs2: u32, funct3: u32, funct7: u32) -> Self {
        self.opcode(OP_REG)
            .rd(rd)
            .rs1(rs1)
            .rs2(rs2)
            .funct3(funct3)
            .funct7(funct7)
    }

    pub fn add(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(rd, rs1, rs2, 0b000, 0b0000000)
    }

    pub fn sub(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(rd, rs1, rs2, 0b000, 0b0100000)
    }

    pub fn sll(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(rd, rs1, rs2, 0b001, 0b0000000)
    }

    pub fn xor(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(rd, rs1, rs2, 0b100, 0b0000000)
    }

    pub fn srl(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(rd, rs1, rs2, 0b101, 0b0000000)
    }

    pub fn or(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(rd, rs1, rs2, 0b110, 0b0000000)
    }

    pub fn and(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(rd, rs1, rs2, 0b111, 0b0000000)
    }

    pub fn mul(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(rd, rs1, rs2, 0b000, 0b0000001)
    }

    pub fn div(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(rd, rs1, rs2, 0b100, 0b0000001)
    }

    pub fn rem(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(rd, rs1, rs2, 0b110, 0b0000001)
    }

    // --- I-type ---

    pub fn addi(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.opcode(OP_IMM).rd(rd).rs1(rs1).funct3(0b000).imm(imm)
    }

    pub fn slli(self, rd: u32, rs1: u32, shamt: i32) -> Self {
        self.opcode(OP_IMM).rd(rd).rs1(rs1).funct3(0b001).imm(shamt)
    }

    pub fn srli(self, rd: u32, rs1: u32, shamt: i32) -> Self {
        self.opcode(OP_IMM).rd(rd).rs1(rs1).funct3(0b101).imm(shamt)
    }

    pub fn lw(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.opcode(OP_LOAD).rd(rd).rs1(rs1).funct3(0b010).imm(imm)
    }

    pub fn jalr(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.opcode(OP_JALR).rd(rd).rs1(rs1).funct3(0b000).imm(imm)
    }

    // --- S/B/J-type ---

    pub fn sw(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.opcode(OP_STORE).rs1(rs1).rs2(rs2).funct3(0b010).imm(imm)
    }

    fn branch(self, rs1: u32, rs2: u32, imm: i32, funct3: u32) -> Self {
        self.opcode(OP_BRANCH)
            .rs1(rs1)
            .rs2(rs2)
            .funct3(funct3)
            .imm(imm)
    }

    pub fn beq(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.branch(rs1, rs2, imm, 0b000)
    }

    pub fn bne(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.branch(rs1, rs2, imm, 0b001)
    }

    pub fn blt(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.branch(rs1, rs2, imm, 0b100)
    }

    pub fn bge(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.branch(rs1, rs2, imm, 0b101)
    }

    pub fn jal(self, rd: u32, imm: i32) -> Self {
        self.opcode(OP_JAL).rd(rd).imm(imm)
    }

    pub fn build(self) -> u32 {
        let opcode = self.opcode & 0x7F;
        let rd = (self.rd & 0x1F) << 7;
        let funct3 = (self.funct3 & 0x7) << 12;
        let rs1 = (self.rs1 & 0x1F) << 15;
        let rs2 = (self.rs2 & 0x1F) << 20;
        let funct7 = (self.funct7 & 0x7F) << 25;
        let imm = self.imm as u32;

        match opcode {
            OP_REG => {
                // R-type: funct7 | rs2 | rs1 | funct3 | rd | opcode
                funct7 | rs2 | rs1 | funct3 | rd | opcode
            }
            OP_IMM | OP_LOAD | OP_JALR => {
                // I-type: imm[11:0] | rs1 | funct3 | rd | opcode
                ((imm & 0xFFF) << 20) | rs1 | funct3 | rd | opcode
            }
            OP_STORE => {
                // S-type: imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode
                let imm_11_5 = ((imm >> 5) & 0x7F) << 25;
                let imm_4_0 = (imm & 0x1F) << 7;
                imm_11_5 | rs2 | rs1 | funct3 | imm_4_0 | opcode
            }
            OP_BRANCH => {
                // B-type: imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode
                let imm_12 = ((imm >> 12) & 0x1) << 31;
                let imm_10_5 = ((imm >> 5) & 0x3F) << 25;
                let imm_4_1 = ((imm >> 1) & 0xF) << 8;
                let imm_11 = ((imm >> 11) & 0x1) << 7;
                imm_12 | imm_10_5 | rs2 | rs1 | funct3 | imm_4_1 | imm_11 | opcode
            }
            OP_JAL => {
                // J-type: imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode
                let imm_20 = ((imm >> 20) & 0x1) << 31;
                let imm_10_1 = ((imm >> 1) & 0x3FF) << 21;
                let imm_11 = ((imm >> 11) & 0x1) << 20;
                let imm_19_12 = ((imm >> 12) & 0xFF) << 12;
                imm_20 | imm_10_1 | imm_11 | imm_19_12 | rd | opcode
            }
            _ => funct7 | rs2 | rs1 | funct3 | rd | opcode,
        }
    }
}

/// Shorthand for `InstructionBuilder::new()`.
pub fn inst() -> InstructionBuilder {
    InstructionBuilder::new()
}
