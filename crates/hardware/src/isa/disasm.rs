//! Instruction Disassembler for the LS-8.
//!
//! Converts machine code back into assembly text for instruction traces and
//! program listings.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(&[0b1000_0010, 0, 8]), "LDI R0,8");
//! ```

use crate::isa::decode::decode;

/// Disassembles the instruction at the start of `bytes`.
///
/// Bytes that do not decode (unknown opcode, bad register operand, truncated
/// operands) are rendered as a `.byte` directive.
pub fn disassemble(bytes: &[u8]) -> String {
    match decode(bytes, 0) {
        Ok(inst) => inst.to_string(),
        Err(_) => bytes
            .first()
            .map_or_else(String::new, |b| format!(".byte {b:#04x}")),
    }
}

/// Lists every instruction in `image` as `ADDR: text` lines.
///
/// Decodable instructions advance by their length; anything else advances by
/// one byte so data embedded in a program does not derail the listing.
pub fn disassemble_program(image: &[u8]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut addr = 0;
    while addr < image.len() {
        let (text, step) = match decode(image, addr) {
            Ok(inst) => (inst.to_string(), inst.length()),
            Err(_) => (format!(".byte {:#04x}", image[addr]), 1),
        };
        lines.push(format!("{addr:02X}: {text}"));
        addr += step;
    }
    lines
}
