//! Text facet: tokenized disassembly in assembler-manual operand order.

use std::fmt;

use serde::Serialize;

use crate::decoder::{Insn, Mem, Operand};
use crate::regs::{sysreg_name, Reg};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Token {
    Mnemonic(&'static str),
    Whitespace,
    /// Operand separator.
    Sep,
    Register(String),
    Integer { value: i64, base: u8 },
    Address(u32),
    BeginMem,
    EndMem,
    Text(&'static str),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Mnemonic(m) => f.write_str(m),
            Token::Whitespace => f.write_str(" "),
            Token::Sep => f.write_str(", "),
            Token::Register(r) => f.write_str(r),
            Token::Integer { value, base: 16 } if *value < 0 => write!(f, "-{:#x}", value.unsigned_abs()),
            Token::Integer { value, base: 16 } => write!(f, "{value:#x}"),
            Token::Integer { value, .. } => write!(f, "{value}"),
            Token::Address(a) => write!(f, "{a:#010x}"),
            Token::BeginMem => f.write_str("["),
            Token::EndMem => f.write_str("]"),
            Token::Text(t) => f.write_str(t),
        }
    }
}

pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.to_string()).collect()
}

fn int(value: i64) -> Token {
    let base = if (-9..=9).contains(&value) { 10 } else { 16 };
    Token::Integer { value, base }
}

fn reg(r: Reg) -> Token {
    Token::Register(r.name())
}

fn mem(out: &mut Vec<Token>, m: &Mem, short: bool) {
    match *m {
        Mem::Absolute(a) => out.push(Token::Address(a)),
        Mem::Base { base, offset } => {
            out.extend([Token::BeginMem, reg(base), Token::EndMem]);
            if offset != 0 || !short {
                out.push(int(offset as i64));
            }
        }
        Mem::PostInc { base, offset } => {
            out.extend([Token::BeginMem, reg(base), Token::Text("+"), Token::EndMem]);
            if !short {
                out.push(int(offset as i64));
            }
        }
        Mem::PreInc { base, offset } => {
            out.extend([Token::BeginMem, Token::Text("+"), reg(base), Token::EndMem]);
            out.push(int(offset as i64));
        }
        Mem::BitReverse { pair } => {
            out.extend([Token::BeginMem, reg(pair), Token::Text("+r"), Token::EndMem]);
        }
        Mem::Circular { pair, offset } => {
            out.extend([Token::BeginMem, reg(pair), Token::Text("+c"), Token::EndMem]);
            out.push(int(offset as i64));
        }
    }
}

pub fn tokens(insn: &Insn) -> Vec<Token> {
    let short = insn.len == 2;
    let mut out = vec![Token::Mnemonic(insn.mnemonic())];
    for (i, op) in insn.operands.iter().enumerate() {
        match op {
            Operand::Text(sel) => {
                out.push(Token::Text(sel));
                continue;
            }
            _ if i == 0 => out.push(Token::Whitespace),
            _ => out.push(Token::Sep),
        }
        match *op {
            Operand::Reg(r) => out.push(reg(r)),
            Operand::Imm(v) => {
                out.push(Token::Text("#"));
                out.push(int(v));
            }
            Operand::Hi(h) => {
                out.push(Token::Text("#"));
                out.push(int(h as i64));
            }
            Operand::Target(t) => out.push(Token::Address(t)),
            Operand::Mem(ref m) => mem(&mut out, m, short),
            Operand::SysReg(idx) => match sysreg_name(idx) {
                Some(name) => out.push(Token::Register(name.to_ascii_lowercase())),
                None => {
                    out.push(Token::Text("#"));
                    out.push(int(idx as i64));
                }
            },
            Operand::Text(_) => {}
        }
    }
    out
}

/// One-line listing of an instruction.
pub fn fmt_insn(insn: &Insn) -> String {
    render(&tokens(insn))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arch::IsaVariant;
    use crate::decoder::decode;

    fn text(bytes: &[u8], addr: u32) -> String {
        match decode(bytes, addr, IsaVariant::V16) {
            Ok(insn) => fmt_insn(&insn),
            Err(e) => e.to_string(),
        }
    }

    #[test]
    fn register_forms() {
        // add d3, d1, d2
        let raw: u32 = (3 << 28) | (2 << 12) | (1 << 8) | 0x0B;
        assert_eq!(text(&raw.to_le_bytes(), 0), "add d3, d1, d2");
        // mov d0, #5 (16-bit)
        assert_eq!(text(&[0x82, 0x50], 0), "mov d0, #5");
    }

    #[test]
    fn memory_forms() {
        // ld.w d1, [a2]4 (BO base)
        let raw: u32 = (0x24 << 22) | (4 << 16) | (2 << 12) | (1 << 8) | 0x09;
        assert_eq!(text(&raw.to_le_bytes(), 0), "ld.w d1, [a2]4");
        // ld.w d1, [a2+]4 (BO post-increment)
        let raw: u32 = (0x04 << 22) | (4 << 16) | (2 << 12) | (1 << 8) | 0x09;
        assert_eq!(text(&raw.to_le_bytes(), 0), "ld.w d1, [a2+]4");
        // ld.w d1, [+a2]4 (BO pre-increment)
        let raw: u32 = (0x14 << 22) | (4 << 16) | (2 << 12) | (1 << 8) | 0x09;
        assert_eq!(text(&raw.to_le_bytes(), 0), "ld.w d1, [+a2]4");
        // ld.w d1, [p2+r]
        let raw: u32 = (0x04 << 22) | (2 << 12) | (1 << 8) | 0x29;
        assert_eq!(text(&raw.to_le_bytes(), 0), "ld.w d1, [p2+r]");
        // ld.w d1, [p2+c]4
        let raw: u32 = (0x14 << 22) | (4 << 16) | (2 << 12) | (1 << 8) | 0x29;
        assert_eq!(text(&raw.to_le_bytes(), 0), "ld.w d1, [p2+c]4");
        // ld.w d4, [a5+] (16-bit SLR)
        assert_eq!(text(&[0x44, 0x54], 0), "ld.w d4, [a5+]");
    }

    #[test]
    fn targets_render_as_addresses() {
        // j +0x10
        assert_eq!(text(&[0x3C, 0x08], 0x8000_0000), "j 0x80000010");
    }

    #[test]
    fn selectors_attach_to_registers() {
        // mul.h e0, d1, d2ul, #1
        let raw: u32 = (0x18 << 18) | (1 << 16) | (2 << 12) | (1 << 8) | 0xB3;
        assert_eq!(text(&raw.to_le_bytes(), 0), "mul.h e0, d1, d2ul, #1");
    }
}
