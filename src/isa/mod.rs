//! Dispatch table: one [`Row`] per (primary, secondary) encoding.
//!
//! Rows are plain data. Decoding looks a row up, resolves its operand
//! layout against the raw fields and hands the result to the info, text and
//! lift facets, which switch on the row's semantic family.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;

use crate::arch::IsaVariant;
use crate::decoder::{Mem, Operand};
use crate::fields::{abs_address, branch_target, sign_extend, Fields, Format, TargetKind};
use crate::flags::{Flag, FlagWrite};
use crate::il::Intrinsic;
use crate::regs::Reg;

mod table16;
mod table32;

/// Operand kind: which raw field it comes from and how it is extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Opnd {
    Da,
    Db,
    Dc,
    Dd,
    D15,
    Ea,
    Ec,
    Ed,
    Aa,
    Ab,
    Ac,
    A10,
    A15,
    Pa,
    /// Half-word selector suffix (`ll`, `lu`, `ul`, `uu`, `l`, `u`).
    Sel(&'static str),
    C4s,
    C4u,
    C8u,
    C9s,
    C9u,
    C16s,
    C16u,
    /// const16 placed in the upper half-word.
    C16h,
    /// const9[5:0], signed shift count.
    Sh6,
    /// const9[4:0], signed shift count.
    Sh5,
    SysReg,
    N,
    Pos,
    Width,
    Pos2,
    /// Bit index of BRN/SBRN.
    BitN,
    Bpos3,
    Bit,
    Target(TargetKind),
    MemAbs,
    Bo(BoMode),
    Bol,
    /// `[a.b]`
    MemAb,
    /// `[a.b+]`, post-increment by the access size.
    MemAbPost(u8),
    /// `[a.b]off4`, offset scaled.
    MemAbOff(u8),
    /// `[a15]off4`, offset scaled.
    MemA15Off(u8),
    /// `[a10]const8*4`
    MemA10C8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BoMode {
    Base,
    PostInc,
    PreInc,
    BitRev,
    Circ,
}

pub const REL: Opnd = Opnd::Target(TargetKind::Relative);
pub const REL16: Opnd = Opnd::Target(TargetKind::RelativePlus16);
pub const LOOP16: Opnd = Opnd::Target(TargetKind::Loop);
pub const ABS: Opnd = Opnd::Target(TargetKind::Absolute);

/// An E/P operand named an odd register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OddIndex(pub u8);

fn pair(index: u8, make: fn(u8) -> Reg) -> Result<Operand, OddIndex> {
    if index & 1 == 1 {
        return Err(OddIndex(index));
    }
    Ok(Operand::Reg(make(index)))
}

impl Opnd {
    pub fn resolve(self, format: Format, f: &Fields, addr: u32) -> Result<Operand, OddIndex> {
        let op = match self {
            Opnd::Da => Operand::Reg(Reg::D(f.a)),
            Opnd::Db => Operand::Reg(Reg::D(f.b)),
            Opnd::Dc => Operand::Reg(Reg::D(f.c)),
            Opnd::Dd => Operand::Reg(Reg::D(f.d)),
            Opnd::D15 => Operand::Reg(Reg::D(15)),
            Opnd::Ea => return pair(f.a, Reg::E),
            Opnd::Ec => return pair(f.c, Reg::E),
            Opnd::Ed => return pair(f.d, Reg::E),
            Opnd::Pa => return pair(f.a, Reg::P),
            Opnd::Aa => Operand::Reg(Reg::A(f.a)),
            Opnd::Ab => Operand::Reg(Reg::A(f.b)),
            Opnd::Ac => Operand::Reg(Reg::A(f.c)),
            Opnd::A10 => Operand::Reg(Reg::A(10)),
            Opnd::A15 => Operand::Reg(Reg::A(15)),
            Opnd::Sel(s) => Operand::Text(s),
            Opnd::C4s => Operand::Imm(sign_extend(f.konst, 4) as i64),
            Opnd::C4u | Opnd::C8u | Opnd::C9u | Opnd::C16u => Operand::Imm(f.konst as i64),
            Opnd::C9s => Operand::Imm(sign_extend(f.konst, 9) as i64),
            Opnd::C16s => Operand::Imm(sign_extend(f.konst, 16) as i64),
            Opnd::C16h => Operand::Hi(f.konst as u16),
            Opnd::Sh6 => Operand::Imm(sign_extend(f.konst & 0x3F, 6) as i64),
            Opnd::Sh5 => Operand::Imm(sign_extend(f.konst & 0x1F, 5) as i64),
            Opnd::SysReg => Operand::SysReg(f.konst as u16),
            Opnd::N | Opnd::BitN => Operand::Imm(f.n as i64),
            Opnd::Pos | Opnd::Bpos3 => Operand::Imm(f.pos as i64),
            Opnd::Width => Operand::Imm(f.width as i64),
            Opnd::Pos2 => Operand::Imm(f.pos2 as i64),
            Opnd::Bit => Operand::Imm(f.bit as i64),
            Opnd::Target(kind) => Operand::Target(branch_target(format, kind, addr, f)),
            Opnd::MemAbs => Operand::Mem(Mem::Absolute(abs_address(f.off))),
            Opnd::Bo(mode) => {
                let offset = sign_extend(f.off, 10);
                match mode {
                    BoMode::Base => Operand::Mem(Mem::Base { base: Reg::A(f.b), offset }),
                    BoMode::PostInc => Operand::Mem(Mem::PostInc { base: Reg::A(f.b), offset }),
                    BoMode::PreInc => Operand::Mem(Mem::PreInc { base: Reg::A(f.b), offset }),
                    BoMode::BitRev => {
                        if f.b & 1 == 1 {
                            return Err(OddIndex(f.b));
                        }
                        Operand::Mem(Mem::BitReverse { pair: Reg::P(f.b) })
                    }
                    BoMode::Circ => {
                        if f.b & 1 == 1 {
                            return Err(OddIndex(f.b));
                        }
                        Operand::Mem(Mem::Circular { pair: Reg::P(f.b), offset })
                    }
                }
            }
            Opnd::Bol => Operand::Mem(Mem::Base {
                base: Reg::A(f.b),
                offset: sign_extend(f.off, 16),
            }),
            Opnd::MemAb => Operand::Mem(Mem::Base { base: Reg::A(f.b), offset: 0 }),
            Opnd::MemAbPost(size) => Operand::Mem(Mem::PostInc {
                base: Reg::A(f.b),
                offset: size as i32,
            }),
            Opnd::MemAbOff(scale) => Operand::Mem(Mem::Base {
                base: Reg::A(f.b),
                offset: (f.off * scale as u32) as i32,
            }),
            Opnd::MemA15Off(scale) => Operand::Mem(Mem::Base {
                base: Reg::A(15),
                offset: (f.off * scale as u32) as i32,
            }),
            Opnd::MemA10C8 => Operand::Mem(Mem::Base {
                base: Reg::A(10),
                offset: (f.konst * 4) as i32,
            }),
        };
        Ok(op)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sign {
    Signed,
    Unsigned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Lane {
    B,
    H,
    W,
}

impl Lane {
    pub fn bits(self) -> u32 {
        match self {
            Lane::B => 8,
            Lane::H => 16,
            Lane::W => 32,
        }
    }

    pub fn count(self) -> u32 {
        32 / self.bits()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cond {
    Eq,
    Ne,
    Lt,
    LtU,
    Ge,
    GeU,
    Gt,
    Le,
}

/// How a compare or bit result folds into the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AccOp {
    And,
    Or,
    Xor,
    /// Shift the destination left by one and insert at bit 0.
    Sh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LogicOp {
    And,
    Andn,
    Nand,
    Nor,
    Or,
    Orn,
    Xnor,
    Xor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShiftKind {
    Logical,
    Arithmetic,
    ArithmeticSat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CountKind {
    Ones,
    Sign,
    Zeros,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SatKind {
    B,
    Bu,
    H,
    Hu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PackedOp {
    Add,
    AddSat(Sign),
    Sub,
    SubSat(Sign),
    Abs,
    AbsSat,
    AbsDif,
    AbsDifSat,
    Min(Sign),
    Max(Sign),
    Eq,
    Lt(Sign),
    Sh,
    Sha,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MemKind {
    B,
    Bu,
    H,
    Hu,
    W,
    A,
    D,
    Da,
    Q,
}

impl MemKind {
    /// Access size in bytes.
    pub fn size(self) -> u8 {
        match self {
            MemKind::B | MemKind::Bu => 1,
            MemKind::H | MemKind::Hu | MemKind::Q => 2,
            MemKind::W | MemKind::A => 4,
            MemKind::D | MemKind::Da => 8,
        }
    }
}

/// Which half of `D[b]` feeds the upper and lower products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HalfMode {
    Ll,
    Lu,
    Ul,
    Uu,
}

impl HalfMode {
    /// (upper product uses D[b] upper half, lower product uses D[b] upper half)
    pub fn upper_halves(self) -> (bool, bool) {
        match self {
            HalfMode::Ll => (false, false),
            HalfMode::Lu => (false, true),
            HalfMode::Ul => (true, false),
            HalfMode::Uu => (true, true),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MacAcc {
    None,
    Add,
    Sub,
}

/// Result shape of the packed half-word multiplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PmResult {
    /// Two 32-bit products in an E pair.
    Pair,
    /// Sum of both products, shifted left 16, as one 64-bit value.
    Merged,
    /// Both products rounded into the upper half-words of one register.
    Rounded,
    /// As `Rounded`, accumulating from a 64-bit pair.
    RoundedWide,
}

/// Operand halves of the Q-format multiplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QSrc {
    Word,
    Lower,
    Upper,
    LowerLower,
    UpperUpper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DvKind {
    W,
    Wu,
    B,
    Bu,
    H,
    Hu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FOp {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FConv {
    FtoI,
    FtoIz,
    FtoU,
    FtoUz,
    ItoF,
    UtoF,
    FtoQ31,
    FtoQ31z,
    Q31toF,
    Qseed,
}

/// Semantic family. Mnemonics that mean the same thing in different
/// formats share a family and differ only in operand layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sem {
    Add,
    AddSat(Sign),
    AddCarry,
    AddExt,
    Sub,
    SubSat(Sign),
    SubCarry,
    SubExt,
    Rsub,
    RsubSat(Sign),
    AddScaled,
    AddScaledT,
    Packed(PackedOp, Lane),
    Sat(SatKind),
    Compare(Cond),
    CompareAcc(Cond, AccOp),
    EqAny(Lane),
    Logic(LogicOp),
    Not,
    Shift(ShiftKind),
    Count(CountKind, Lane),
    CondArith { sub: bool, negate: bool },
    Select { negate: bool },
    CondMove { negate: bool },
    Mov,
    MovPair,
    Lea,
    Mul { sign: Sign, wide: bool, sat: bool },
    Mac { sub: bool, sign: Sign, wide: bool, sat: bool },
    PackedMul { mode: HalfMode, hi: MacAcc, lo: MacAcc, result: PmResult, sat: bool },
    QMul { src: QSrc, wide: bool, acc: MacAcc, round: bool, sat: bool },
    Div(Sign),
    DvInit(DvKind),
    Extract(Sign),
    Insert,
    Imask,
    Dextr,
    BitOp(LogicOp, Option<AccOp>),
    InsertBit { negate: bool },
    Load(MemKind),
    Store(MemKind),
    StoreBit,
    Ldmst,
    Swap,
    CmpSwap,
    SwapMask,
    Context(Intrinsic),
    Cache(Intrinsic),
    Jump,
    JumpIndirect,
    JumpLink,
    JumpLinkIndirect,
    Call,
    CallIndirect,
    FastCall,
    FastCallIndirect,
    Ret,
    FastRet,
    Rfe,
    Rfm,
    CondJump(Cond),
    JumpBit { set: bool },
    JumpNeStep(i8),
    Loop,
    LoopU,
    Sys(Intrinsic),
    Nop,
    Trap(Flag),
    Mfcr,
    Mtcr,
    Opaque(Intrinsic),
    Float(FOp),
    FloatMac { sub: bool },
    FloatCmp,
    FloatConv(FConv),
    UpdateFlags,
}

/// Control-flow class of a family, for the info facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    FallThrough,
    Unconditional,
    Conditional,
    Call,
    Indirect,
    IndirectCall,
    Return,
    Unresolved,
}

impl Sem {
    pub fn flow(self) -> Flow {
        match self {
            Sem::Jump | Sem::LoopU => Flow::Unconditional,
            Sem::CondJump(_) | Sem::JumpBit { .. } | Sem::JumpNeStep(_) | Sem::Loop => {
                Flow::Conditional
            }
            Sem::Call | Sem::FastCall | Sem::JumpLink => Flow::Call,
            Sem::JumpIndirect => Flow::Indirect,
            Sem::CallIndirect | Sem::FastCallIndirect | Sem::JumpLinkIndirect => {
                Flow::IndirectCall
            }
            Sem::Ret | Sem::FastRet | Sem::Rfe | Sem::Rfm => Flow::Return,
            Sem::Trap(_) => Flow::Unresolved,
            _ => Flow::FallThrough,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Row {
    pub secondary: u8,
    pub mnemonic: &'static str,
    pub operands: &'static [Opnd],
    pub sem: Sem,
    pub flags: FlagWrite,
    pub since: IsaVariant,
}

impl Row {
    pub const fn v16(mut self) -> Self {
        self.since = IsaVariant::V16;
        self
    }
}

pub(crate) const fn row(
    secondary: u8,
    mnemonic: &'static str,
    operands: &'static [Opnd],
    sem: Sem,
    flags: FlagWrite,
) -> Row {
    Row {
        secondary,
        mnemonic,
        operands,
        sem,
        flags,
        since: IsaVariant::V13,
    }
}

/// All rows sharing one primary opcode.
#[derive(Debug, Serialize)]
pub struct Group {
    pub primary: u8,
    pub format: Format,
    pub rows: &'static [Row],
}

pub fn groups() -> impl Iterator<Item = &'static Group> {
    table32::GROUPS.iter().chain(table16::GROUPS.iter())
}

struct Index {
    primaries: HashMap<u8, &'static Group>,
    rows: HashMap<(u8, u8), &'static Row>,
}

fn index() -> &'static Index {
    static INDEX: OnceLock<Index> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut primaries = HashMap::new();
        let mut rows = HashMap::new();
        for group in groups() {
            primaries.insert(group.primary, group);
            for row in group.rows {
                rows.insert((group.primary, row.secondary), row);
            }
        }
        tracing::trace!(primaries = primaries.len(), rows = rows.len(), "dispatch index built");
        Index { primaries, rows }
    })
}

pub fn group(primary: u8) -> Option<&'static Group> {
    index().primaries.get(&primary).copied()
}

/// Row for a (primary, secondary) pair. Formats without a secondary
/// opcode key their single row on 0.
pub fn lookup(primary: u8, secondary: u8) -> Option<&'static Row> {
    index().rows.get(&(primary, secondary)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_duplicate_keys() {
        let mut seen = std::collections::HashSet::new();
        for g in groups() {
            for r in g.rows {
                assert!(
                    seen.insert((g.primary, r.secondary)),
                    "duplicate row {:#04x}/{:#04x} ({})",
                    g.primary,
                    r.secondary,
                    r.mnemonic
                );
            }
        }
    }

    #[test]
    fn widths_agree_with_primary_bit0() {
        for g in groups() {
            let long = g.primary & 1 == 1;
            assert_eq!(long, !g.format.is_short(), "primary {:#04x}", g.primary);
        }
    }

    #[test]
    fn rows_without_secondary_are_keyed_on_zero() {
        for g in groups() {
            if g.format.secondary_field().is_none() {
                assert_eq!(g.rows.len(), 1, "primary {:#04x}", g.primary);
                assert_eq!(g.rows[0].secondary, 0);
            }
        }
    }

    #[test]
    fn mnemonics_are_lowercase() {
        for g in groups() {
            for r in g.rows {
                assert_eq!(r.mnemonic, r.mnemonic.to_ascii_lowercase());
            }
        }
    }
}
