use serde::Serialize;

use crate::arch::{IsaVariant, TriCore};
use crate::error::DecodeError;
use crate::fields::{extract_operands, extract_secondary, Format};
use crate::isa::{self, OddIndex, Row};
use crate::regs::Reg;

/// A resolved memory operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mem {
    Absolute(u32),
    Base { base: Reg, offset: i32 },
    /// Access at `base`, then `base += offset`.
    PostInc { base: Reg, offset: i32 },
    /// `base += offset`, then access at `base`.
    PreInc { base: Reg, offset: i32 },
    /// `[p+r]`: base in the even register, index/increment in the odd one.
    BitReverse { pair: Reg },
    /// `[p+c]off`: base in the even register, index/length in the odd one.
    Circular { pair: Reg, offset: i32 },
}

/// A resolved operand, ready for any of the three facets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operand {
    Reg(Reg),
    Imm(i64),
    /// const16 destined for the upper half-word.
    Hi(u16),
    Target(u32),
    Mem(Mem),
    SysReg(u16),
    /// Half-word selector attached to the preceding register.
    Text(&'static str),
}

/// One decoded instruction.
#[derive(Debug, Clone, Serialize)]
pub struct Insn {
    pub addr: u32,
    pub len: u8,
    pub raw: u32,
    pub primary: u8,
    pub format: Format,
    pub row: &'static Row,
    pub operands: Vec<Operand>,
}

impl Insn {
    pub fn mnemonic(&self) -> &'static str {
        self.row.mnemonic
    }

    /// Address of the following instruction.
    pub fn next(&self) -> u32 {
        self.addr.wrapping_add(self.len as u32)
    }

    /// Direct branch target, if the instruction has one.
    pub fn target(&self) -> Option<u32> {
        self.operands.iter().find_map(|op| match op {
            Operand::Target(t) => Some(*t),
            _ => None,
        })
    }
}

pub trait Decoder {
    fn decode(&self, bytes: &[u8], addr: u32) -> Result<Insn, DecodeError>;
}

impl Decoder for TriCore {
    fn decode(&self, bytes: &[u8], addr: u32) -> Result<Insn, DecodeError> {
        decode(bytes, addr, self.config().variant)
    }
}

/// Primary opcode of a raw encoding. BRN keeps only 7 bits (bit 7 is
/// part of the bit index) and SRRS only 6 (bits 6-7 are `n`).
pub fn primary_opcode(raw: u32, len: u8) -> u8 {
    if len == 4 && raw & 0x7F == 0x6F {
        0x6F
    } else if len == 2 && raw & 0x3F == 0x10 {
        0x10
    } else {
        (raw & 0xFF) as u8
    }
}

pub fn decode(bytes: &[u8], addr: u32, variant: IsaVariant) -> Result<Insn, DecodeError> {
    if bytes.len() < 2 {
        return Err(DecodeError::Truncated {
            addr,
            need: 4,
            have: bytes.len(),
        });
    }
    let half = u16::from_le_bytes([bytes[0], bytes[1]]);
    let len: u8 = if half & 1 == 1 { 4 } else { 2 };
    if bytes.len() < len as usize {
        return Err(DecodeError::Truncated {
            addr,
            need: len,
            have: bytes.len(),
        });
    }
    let raw = if len == 4 {
        u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    } else {
        half as u32
    };

    let primary = primary_opcode(raw, len);
    let group = isa::group(primary).ok_or(DecodeError::UnknownPrimary { addr, primary })?;
    let format = group.format;
    let secondary = extract_secondary(format, raw).unwrap_or(0);
    let row = isa::lookup(primary, secondary).ok_or(DecodeError::UnknownSecondary {
        addr,
        primary,
        secondary,
    })?;
    if row.since > variant {
        return Err(DecodeError::RequiresV16 {
            addr,
            mnemonic: row.mnemonic,
            len,
        });
    }

    let fields = extract_operands(format, raw);
    let operands = row
        .operands
        .iter()
        .map(|kind| {
            kind.resolve(format, &fields, addr)
                .map_err(|OddIndex(index)| DecodeError::OddPair {
                    addr,
                    mnemonic: row.mnemonic,
                    index,
                    len,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::trace!(addr, raw, mnemonic = row.mnemonic, "decoded");
    Ok(Insn {
        addr,
        len,
        raw,
        primary,
        format,
        row,
        operands,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dec(bytes: &[u8]) -> Result<Insn, DecodeError> {
        decode(bytes, 0x8000_0000, IsaVariant::V16)
    }

    #[test]
    fn width_comes_from_bit0() {
        assert_eq!(dec(&[0x00, 0x00]).map(|i| i.len), Ok(2));
        assert_eq!(dec(&[0x0D, 0x00, 0x00, 0x00]).map(|i| i.len), Ok(4));
    }

    #[test]
    fn truncation() {
        assert_eq!(
            dec(&[0x0D, 0x00]).map(|i| i.len),
            Err(DecodeError::Truncated {
                addr: 0x8000_0000,
                need: 4,
                have: 2
            })
        );
        assert!(matches!(
            dec(&[0x0D]),
            Err(DecodeError::Truncated { need: 4, have: 1, .. })
        ));
    }

    #[test]
    fn brn_and_srrs_probes() {
        // jnz.t d1, 17, +0: bit 7 carries n[4], bit 31 selects jnz
        let raw: u32 = 0x8000_0000 | (1 << 12) | (1 << 8) | 0x80 | 0x6F;
        let insn = dec(&raw.to_le_bytes()).map_err(|e| e.to_string());
        let insn = insn.as_ref().map(|i| (i.mnemonic(), i.operands[1]));
        assert_eq!(insn, Ok(("jnz.t", Operand::Imm(17))));

        // addsc.a a2, a3, d15, 3 with n in bits 6-7
        let raw: u16 = (3 << 12) | (2 << 8) | (3 << 6) | 0x10;
        let insn = dec(&raw.to_le_bytes()).map(|i| (i.mnemonic(), i.operands.clone()));
        assert_eq!(
            insn,
            Ok((
                "addsc.a",
                vec![
                    Operand::Reg(Reg::A(2)),
                    Operand::Reg(Reg::A(3)),
                    Operand::Reg(Reg::D(15)),
                    Operand::Imm(3)
                ]
            ))
        );
    }

    #[test]
    fn v16_rows_are_gated() {
        // fcall
        let raw: u32 = 0x61;
        let bytes = raw.to_le_bytes();
        assert!(matches!(
            decode(&bytes, 0, IsaVariant::V13),
            Err(DecodeError::RequiresV16 { mnemonic: "fcall", .. })
        ));
        assert!(decode(&bytes, 0, IsaVariant::V16).is_ok());
    }

    #[test]
    fn odd_pair_is_rejected() {
        // ld.d e1, [a2]0 (BO base mode, op2 0x25)
        let raw: u32 = (0x25 << 22) | (2 << 12) | (1 << 8) | 0x09;
        assert!(matches!(
            dec(&raw.to_le_bytes()),
            Err(DecodeError::OddPair { index: 1, .. })
        ));
    }
}
