//! Program builder.
//!
//! Assembles LS-8 machine code one instruction at a time so tests read like
//! assembly listings instead of byte arrays.

use ls8_core::isa::opcodes::{
    ADD, CALL, CMP, DIV, HLT, JEQ, JMP, JNE, LDI, MUL, NOP, POP, PRN, PUSH, RET, SUB,
};

/// Fluent LS-8 assembler.
#[derive(Clone, Debug, Default)]
pub struct ProgramBuilder {
    bytes: Vec<u8>,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Address the next instruction will be placed at.
    pub fn here(&self) -> u8 {
        self.bytes.len() as u8
    }

    pub fn byte(mut self, b: u8) -> Self {
        self.bytes.push(b);
        self
    }

    fn op0(self, op: u8) -> Self {
        self.byte(op)
    }

    fn op1(self, op: u8, a: u8) -> Self {
        self.byte(op).byte(a)
    }

    fn op2(self, op: u8, a: u8, b: u8) -> Self {
        self.byte(op).byte(a).byte(b)
    }

    pub fn nop(self) -> Self {
        self.op0(NOP)
    }

    pub fn hlt(self) -> Self {
        self.op0(HLT)
    }

    pub fn ret(self) -> Self {
        self.op0(RET)
    }

    pub fn ldi(self, reg: u8, imm: u8) -> Self {
        self.op2(LDI, reg, imm)
    }

    pub fn prn(self, reg: u8) -> Self {
        self.op1(PRN, reg)
    }

    pub fn push(self, reg: u8) -> Self {
        self.op1(PUSH, reg)
    }

    pub fn pop(self, reg: u8) -> Self {
        self.op1(POP, reg)
    }

    pub fn call(self, reg: u8) -> Self {
        self.op1(CALL, reg)
    }

    pub fn jmp(self, reg: u8) -> Self {
        self.op1(JMP, reg)
    }

    pub fn jeq(self, reg: u8) -> Self {
        self.op1(JEQ, reg)
    }

    pub fn jne(self, reg: u8) -> Self {
        self.op1(JNE, reg)
    }

    pub fn add(self, a: u8, b: u8) -> Self {
        self.op2(ADD, a, b)
    }

    pub fn sub(self, a: u8, b: u8) -> Self {
        self.op2(SUB, a, b)
    }

    pub fn mul(self, a: u8, b: u8) -> Self {
        self.op2(MUL, a, b)
    }

    pub fn div(self, a: u8, b: u8) -> Self {
        self.op2(DIV, a, b)
    }

    pub fn cmp(self, a: u8, b: u8) -> Self {
        self.op2(CMP, a, b)
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}
