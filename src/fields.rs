//! Raw bit-field extraction for every encoding format.
//!
//! Nothing here knows what an instruction means: a format fixes where its
//! fields sit and the per-row operand kinds decide how they are extended
//! and scaled.

use bitvec::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    // 32-bit
    Abs,
    Absb,
    B,
    Bit,
    Bo,
    Bol,
    Brc,
    Brn,
    Brr,
    Rc,
    Rcpw,
    Rcr,
    Rcrr,
    Rcrw,
    Rlc,
    Rr,
    Rr1,
    Rr2,
    Rrpw,
    Rrr,
    Rrr1,
    Rrr2,
    Rrrr,
    Rrrw,
    Sys,
    // 16-bit
    Sb,
    Sbc,
    Sbr,
    Sbrn,
    Sc,
    Slr,
    Slro,
    Sr,
    Src,
    Sro,
    Srr,
    Srrs,
    Ssr,
    Ssro,
}

impl Format {
    /// Instruction length in bytes.
    pub fn len(self) -> u8 {
        if self.is_short() {
            2
        } else {
            4
        }
    }

    pub fn is_short(self) -> bool {
        matches!(
            self,
            Format::Sb
                | Format::Sbc
                | Format::Sbr
                | Format::Sbrn
                | Format::Sc
                | Format::Slr
                | Format::Slro
                | Format::Sr
                | Format::Src
                | Format::Sro
                | Format::Srr
                | Format::Srrs
                | Format::Ssr
                | Format::Ssro
        )
    }

    /// Position and width of the secondary opcode field, if the format has one.
    ///
    /// RR1 and RR2 define wider fields than 8 bits; only the low 8 bits select.
    pub fn secondary_field(self) -> Option<(usize, usize)> {
        match self {
            Format::Abs | Format::Absb => Some((26, 2)),
            Format::Bit | Format::Rcpw | Format::Rrpw => Some((21, 2)),
            Format::Bo | Format::Sys => Some((22, 6)),
            Format::Brc | Format::Brn | Format::Brr => Some((31, 1)),
            Format::Rc => Some((21, 7)),
            Format::Rcr | Format::Rcrr | Format::Rcrw | Format::Rrrr | Format::Rrrw => {
                Some((21, 3))
            }
            Format::Rr => Some((20, 8)),
            Format::Rr1 => Some((18, 10)),
            Format::Rr2 => Some((16, 12)),
            Format::Rrr => Some((20, 4)),
            Format::Rrr1 => Some((18, 6)),
            Format::Rrr2 => Some((16, 8)),
            Format::Sr => Some((12, 4)),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Format::Abs => "ABS",
            Format::Absb => "ABSB",
            Format::B => "B",
            Format::Bit => "BIT",
            Format::Bo => "BO",
            Format::Bol => "BOL",
            Format::Brc => "BRC",
            Format::Brn => "BRN",
            Format::Brr => "BRR",
            Format::Rc => "RC",
            Format::Rcpw => "RCPW",
            Format::Rcr => "RCR",
            Format::Rcrr => "RCRR",
            Format::Rcrw => "RCRW",
            Format::Rlc => "RLC",
            Format::Rr => "RR",
            Format::Rr1 => "RR1",
            Format::Rr2 => "RR2",
            Format::Rrpw => "RRPW",
            Format::Rrr => "RRR",
            Format::Rrr1 => "RRR1",
            Format::Rrr2 => "RRR2",
            Format::Rrrr => "RRRR",
            Format::Rrrw => "RRRW",
            Format::Sys => "SYS",
            Format::Sb => "SB",
            Format::Sbc => "SBC",
            Format::Sbr => "SBR",
            Format::Sbrn => "SBRN",
            Format::Sc => "SC",
            Format::Slr => "SLR",
            Format::Slro => "SLRO",
            Format::Sr => "SR",
            Format::Src => "SRC",
            Format::Sro => "SRO",
            Format::Srr => "SRR",
            Format::Srrs => "SRRS",
            Format::Ssr => "SSR",
            Format::Ssro => "SSRO",
        }
    }
}

/// `len` bits of `raw` starting at bit `lo`.
pub fn bits(raw: u32, lo: usize, len: usize) -> u32 {
    raw.view_bits::<Lsb0>()[lo..lo + len].load_le::<u32>()
}

/// Sign-extend the low `width` bits of `value`.
pub fn sign_extend(value: u32, width: u32) -> i32 {
    let shift = 32 - width;
    ((value << shift) as i32) >> shift
}

pub fn extract_secondary(format: Format, raw: u32) -> Option<u8> {
    format
        .secondary_field()
        .map(|(lo, len)| (bits(raw, lo, len) & 0xFF) as u8)
}

/// Every raw field a format defines, unextended and unscaled.
///
/// Register fields are taken from their fixed positions (a: 8-11,
/// b: 12-15, d: 24-27, c: 28-31) whether or not the format uses them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fields {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub n: u8,
    pub konst: u32,
    pub disp: u32,
    pub off: u32,
    pub pos: u8,
    pub pos2: u8,
    pub width: u8,
    pub bit: u8,
}

pub fn extract_operands(format: Format, raw: u32) -> Fields {
    let mut f = Fields {
        a: bits(raw, 8, 4) as u8,
        b: bits(raw, 12, 4) as u8,
        ..Fields::default()
    };
    if !format.is_short() {
        f.d = bits(raw, 24, 4) as u8;
        f.c = bits(raw, 28, 4) as u8;
    }
    match format {
        Format::Abs => f.off = off18(raw),
        Format::Absb => {
            f.off = off18(raw);
            f.pos = bits(raw, 8, 3) as u8;
            f.bit = bits(raw, 11, 1) as u8;
        }
        Format::B => f.disp = bits(raw, 16, 16) | (bits(raw, 8, 8) << 16),
        Format::Bit => {
            f.pos = bits(raw, 16, 5) as u8;
            f.pos2 = bits(raw, 23, 5) as u8;
        }
        Format::Bo => f.off = bits(raw, 16, 6) | (bits(raw, 28, 4) << 6),
        Format::Bol => {
            f.off = bits(raw, 16, 6) | (bits(raw, 28, 4) << 6) | (bits(raw, 22, 6) << 10)
        }
        Format::Brc => {
            f.konst = bits(raw, 12, 4);
            f.disp = bits(raw, 16, 15);
        }
        Format::Brn => {
            f.n = (bits(raw, 12, 4) | (bits(raw, 7, 1) << 4)) as u8;
            f.disp = bits(raw, 16, 15);
        }
        Format::Brr => f.disp = bits(raw, 16, 15),
        Format::Rc | Format::Rcr => f.konst = bits(raw, 12, 9),
        Format::Rcpw => {
            f.konst = bits(raw, 12, 4);
            f.width = bits(raw, 16, 5) as u8;
            f.pos = bits(raw, 23, 5) as u8;
        }
        Format::Rcrr => f.konst = bits(raw, 12, 4),
        Format::Rcrw => {
            f.konst = bits(raw, 12, 4);
            f.width = bits(raw, 16, 5) as u8;
        }
        Format::Rlc => f.konst = bits(raw, 12, 16),
        Format::Rr | Format::Rr1 | Format::Rrr | Format::Rrr1 => f.n = bits(raw, 16, 2) as u8,
        Format::Rrpw => {
            f.width = bits(raw, 16, 5) as u8;
            f.pos = bits(raw, 23, 5) as u8;
        }
        Format::Rrrw => f.width = bits(raw, 16, 5) as u8,
        Format::Rr2 | Format::Rrr2 | Format::Rrrr | Format::Sys => {}
        Format::Sb => f.disp = bits(raw, 8, 8),
        Format::Sbc => {
            f.disp = bits(raw, 8, 4);
            f.konst = bits(raw, 12, 4);
        }
        Format::Sbr => f.disp = bits(raw, 8, 4),
        Format::Sbrn => {
            f.disp = bits(raw, 8, 4);
            f.n = bits(raw, 12, 4) as u8;
        }
        Format::Sc => f.konst = bits(raw, 8, 8),
        Format::Slro | Format::Ssro => f.off = bits(raw, 12, 4),
        // SRO keeps its base register in bits 8-11; it is reported as `b`
        // so every `[a.b]off4` operand reads the same field.
        Format::Sro => {
            f.off = bits(raw, 12, 4);
            f.b = f.a;
        }
        Format::Src => f.konst = bits(raw, 12, 4),
        Format::Srrs => f.n = bits(raw, 6, 2) as u8,
        Format::Slr | Format::Sr | Format::Srr | Format::Ssr => {}
    }
    f
}

/// ABS-format 18-bit offset, assembled from its four sub-fields.
fn off18(raw: u32) -> u32 {
    bits(raw, 16, 6) | (bits(raw, 28, 4) << 6) | (bits(raw, 22, 4) << 10) | (bits(raw, 12, 4) << 14)
}

/// `{off18[17:14], 14'b0, off18[13:0]}`: the top nibble names the segment.
pub fn abs_address(off18: u32) -> u32 {
    ((off18 >> 14) << 28) | (off18 & 0x3FFF)
}

/// How a branch operand turns its displacement into an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    /// `pc + sext(disp) * 2`; disp4 is zero-extended.
    Relative,
    /// v1.6 short compare branches reaching `pc + (disp4 + 16) * 2`.
    RelativePlus16,
    /// Short LOOP: `pc + {27'h7FFFFFF, disp4, 0}`.
    Loop,
    /// `{disp24[23:20], 7'b0, disp24[19:0], 1'b0}`.
    Absolute,
}

pub fn branch_target(format: Format, kind: TargetKind, pc: u32, f: &Fields) -> u32 {
    match kind {
        TargetKind::Absolute => ((f.disp & 0xF0_0000) << 8) | ((f.disp & 0x0F_FFFF) << 1),
        TargetKind::Loop => pc.wrapping_add(0xFFFF_FFE0 | (f.disp << 1)),
        TargetKind::RelativePlus16 => pc.wrapping_add((f.disp + 16) << 1),
        TargetKind::Relative => {
            let disp = match format {
                Format::B => sign_extend(f.disp, 24),
                Format::Brc | Format::Brn | Format::Brr => sign_extend(f.disp, 15),
                Format::Sb => sign_extend(f.disp, 8),
                _ => f.disp as i32,
            };
            pc.wrapping_add((disp as u32).wrapping_mul(2))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bits_reads_lsb0() {
        assert_eq!(bits(0xF0, 4, 4), 0xF);
        assert_eq!(bits(0x8000_0000, 31, 1), 1);
        assert_eq!(bits(0x1234_5678, 8, 16), 0x3456);
    }

    #[test]
    fn sign_extension() {
        assert_eq!(sign_extend(0xF, 4), -1);
        assert_eq!(sign_extend(0x7, 4), 7);
        assert_eq!(sign_extend(0x1FF, 9), -1);
        assert_eq!(sign_extend(0x4000, 15), -16384);
    }

    #[test]
    fn rr1_secondary_is_masked() {
        // op2 field bits 18-27 = 0x31A, only 0x1A selects
        let raw = 0x31A << 18 | 0xB3;
        assert_eq!(extract_secondary(Format::Rr1, raw), Some(0x1A));
        assert_eq!(extract_secondary(Format::B, raw), None);
    }

    #[test]
    fn off18_segments() {
        // off18 = 0x3C123: segment nibble 0xF, low 14 bits 0x0123
        let off = 0x3C123u32;
        let raw = ((off & 0x3F) << 16)
            | (((off >> 6) & 0xF) << 28)
            | (((off >> 10) & 0xF) << 22)
            | (((off >> 14) & 0xF) << 12)
            | 0x85;
        let f = extract_operands(Format::Abs, raw);
        assert_eq!(f.off, off);
        assert_eq!(abs_address(f.off), 0xF000_0123);
    }

    #[test]
    fn branch_targets() {
        let f = Fields { disp: 0x80, ..Fields::default() };
        assert_eq!(branch_target(Format::B, TargetKind::Relative, 0x2000, &f), 0x2100);
        let f = Fields { disp: 0xFF_FFFF, ..Fields::default() };
        assert_eq!(branch_target(Format::B, TargetKind::Relative, 0x2000, &f), 0x1FFE);
        let f = Fields { disp: 0x80_0100, ..Fields::default() };
        assert_eq!(branch_target(Format::B, TargetKind::Absolute, 0, &f), 0x8000_0200);
        let f = Fields { disp: 3, ..Fields::default() };
        assert_eq!(branch_target(Format::Sbr, TargetKind::Relative, 0x3000, &f), 0x3006);
        assert_eq!(branch_target(Format::Sbr, TargetKind::RelativePlus16, 0x3000, &f), 0x3026);
        assert_eq!(branch_target(Format::Sbr, TargetKind::Loop, 0x3000, &f), 0x2FE6);
    }
}
