//! Lift facet: one decoded instruction to IL statements.
//!
//! Handlers are grouped by semantic family and read their operands by
//! position from the resolved operand list (selector text is skipped), so a
//! family serves every format that shares its meaning. Statements go to a
//! local buffer and reach the builder only when the whole instruction
//! lifted.

use crate::decoder::{Insn, Mem, Operand};
use crate::flags::{Flag, FlagWrite};
use crate::il::{CmpOp, Expr, IlBuilder, Label, Stmt, UnOp};
use crate::isa::{Cond, Lane, Sem, Sign};
use crate::regs::Reg;

mod alu;
mod bits;
mod float;
mod flow;
mod mem;
mod mul;
mod packed;
mod system;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiftError {
    #[error("{mnemonic}: operand {index} is missing or of the wrong kind")]
    Operand { mnemonic: &'static str, index: usize },
}

pub type Result<T> = std::result::Result<T, LiftError>;

/// Lift `insn` into `il`. On failure nothing is emitted.
pub fn lift<B: IlBuilder + ?Sized>(insn: &Insn, il: &mut B) -> Result<()> {
    lift_audited(insn, il).map(|_| ())
}

/// As [`lift`], also returning the PSW bits the statements write.
///
/// Debug builds assert that this equals the row's declared write-set.
pub fn lift_audited<B: IlBuilder + ?Sized>(insn: &Insn, il: &mut B) -> Result<FlagWrite> {
    let mut lifter = Lifter::new(insn, il);
    lifter.dispatch()?;
    let Lifter {
        out, written, host, ..
    } = lifter;
    if written != insn.row.flags {
        tracing::debug!(
            mnemonic = insn.mnemonic(),
            declared = ?insn.row.flags,
            ?written,
            "flag write-set mismatch"
        );
        debug_assert_eq!(
            written,
            insn.row.flags,
            "{} writes flags outside its declaration",
            insn.mnemonic()
        );
    }
    for stmt in out {
        host.emit(stmt);
    }
    Ok(written)
}

pub(crate) struct Lifter<'a, B: IlBuilder + ?Sized> {
    insn: &'a Insn,
    ops: Vec<&'a Operand>,
    host: &'a mut B,
    out: Vec<Stmt>,
    written: FlagWrite,
    temps: u8,
}

impl<'a, B: IlBuilder + ?Sized> Lifter<'a, B> {
    fn new(insn: &'a Insn, host: &'a mut B) -> Self {
        let ops = insn
            .operands
            .iter()
            .filter(|op| !matches!(op, Operand::Text(_)))
            .collect();
        Self {
            insn,
            ops,
            host,
            out: Vec::new(),
            written: FlagWrite::NONE,
            temps: 0,
        }
    }

    fn dispatch(&mut self) -> Result<()> {
        match self.insn.row.sem {
            Sem::Add => self.add(),
            Sem::AddSat(sign) => self.add_sat(sign),
            Sem::AddCarry => self.carry_arith(false, true),
            Sem::AddExt => self.carry_arith(false, false),
            Sem::Sub => self.sub(),
            Sem::SubSat(sign) => self.sub_sat(sign),
            Sem::SubCarry => self.carry_arith(true, true),
            Sem::SubExt => self.carry_arith(true, false),
            Sem::Rsub => self.rsub(None),
            Sem::RsubSat(sign) => self.rsub(Some(sign)),
            Sem::AddScaled => self.add_scaled(),
            Sem::AddScaledT => self.add_scaled_t(),
            Sem::Packed(op, lane) => self.packed(op, lane),
            Sem::Sat(kind) => self.sat(kind),
            Sem::Compare(cond) => self.compare(cond, None),
            Sem::CompareAcc(cond, acc) => self.compare(cond, Some(acc)),
            Sem::EqAny(lane) => self.eq_any(lane),
            Sem::Logic(op) => self.logic(op),
            Sem::Not => self.not(),
            Sem::Shift(kind) => self.shift(kind),
            Sem::Count(kind, lane) => self.count(kind, lane),
            Sem::CondArith { sub, negate } => self.cond_arith(sub, negate),
            Sem::Select { negate } => self.select(negate),
            Sem::CondMove { negate } => self.cond_move(negate),
            Sem::Mov => self.mov(),
            Sem::MovPair => self.mov_pair(),
            Sem::Lea => self.lea(),
            Sem::Mul { sign, wide, sat } => self.mul(sign, wide, sat),
            Sem::Mac {
                sub,
                sign,
                wide,
                sat,
            } => self.mac(sub, sign, wide, sat),
            Sem::PackedMul {
                mode,
                hi,
                lo,
                result,
                sat,
            } => self.packed_mul(mode, hi, lo, result, sat),
            Sem::QMul {
                src,
                wide,
                acc,
                round,
                sat,
            } => self.q_mul(src, wide, acc, round, sat),
            Sem::Div(sign) => self.div(sign),
            Sem::DvInit(kind) => self.dvinit(kind),
            Sem::Extract(sign) => self.extract(sign),
            Sem::Insert => self.insert(),
            Sem::Imask => self.imask(),
            Sem::Dextr => self.dextr(),
            Sem::BitOp(op, acc) => self.bit_op(op, acc),
            Sem::InsertBit { negate } => self.insert_bit(negate),
            Sem::Load(kind) => self.load(kind),
            Sem::Store(kind) => self.store(kind),
            Sem::StoreBit => self.store_bit(),
            Sem::Ldmst => self.ldmst(),
            Sem::Swap => self.swap(),
            Sem::CmpSwap => self.cmp_swap(),
            Sem::SwapMask => self.swap_mask(),
            Sem::Context(intrinsic) => self.context(intrinsic),
            Sem::Cache(intrinsic) => self.cache(intrinsic),
            Sem::Jump | Sem::LoopU => self.jump(),
            Sem::JumpIndirect => self.jump_indirect(),
            Sem::JumpLink => self.jump_link(),
            Sem::JumpLinkIndirect => self.jump_link_indirect(),
            Sem::Call => self.call(),
            Sem::CallIndirect => self.call_indirect(),
            Sem::FastCall => self.fast_call(),
            Sem::FastCallIndirect => self.fast_call_indirect(),
            Sem::Ret | Sem::Rfe => self.ret(),
            Sem::FastRet => self.fast_ret(),
            Sem::Rfm => self.rfm(),
            Sem::CondJump(cond) => self.cond_jump(cond),
            Sem::JumpBit { set } => self.jump_bit(set),
            Sem::JumpNeStep(step) => self.jump_ne_step(step),
            Sem::Loop => self.loop_(),
            Sem::Sys(intrinsic) => self.sys(intrinsic),
            Sem::Nop => {
                self.emit(Stmt::Nop);
                Ok(())
            }
            Sem::Trap(flag) => self.trap(flag),
            Sem::Mfcr => self.mfcr(),
            Sem::Mtcr => self.mtcr(),
            Sem::Opaque(intrinsic) => self.opaque(intrinsic),
            Sem::Float(op) => self.float(op),
            Sem::FloatMac { sub } => self.float_mac(sub),
            Sem::FloatCmp => self.float_cmp(),
            Sem::FloatConv(conv) => self.float_conv(conv),
            Sem::UpdateFlags => self.update_flags(),
        }
    }

    // operands

    fn bad(&self, index: usize) -> LiftError {
        LiftError::Operand {
            mnemonic: self.insn.mnemonic(),
            index,
        }
    }

    fn arity(&self) -> usize {
        self.ops.len()
    }

    fn op(&self, i: usize) -> Result<&'a Operand> {
        self.ops.get(i).copied().ok_or_else(|| self.bad(i))
    }

    fn reg(&self, i: usize) -> Result<Reg> {
        match self.op(i)? {
            Operand::Reg(r) => Ok(*r),
            _ => Err(self.bad(i)),
        }
    }

    fn imm(&self, i: usize) -> Result<i64> {
        match self.op(i)? {
            Operand::Imm(v) => Ok(*v),
            _ => Err(self.bad(i)),
        }
    }

    fn mem(&self, i: usize) -> Result<Mem> {
        match self.op(i)? {
            Operand::Mem(m) => Ok(*m),
            _ => Err(self.bad(i)),
        }
    }

    fn target(&self, i: usize) -> Result<u32> {
        match self.op(i)? {
            Operand::Target(t) => Ok(*t),
            _ => Err(self.bad(i)),
        }
    }

    /// Operand `i` as a value: registers read, immediates as 32-bit constants.
    fn val(&self, i: usize) -> Result<Expr> {
        Ok(match *self.op(i)? {
            Operand::Reg(r) => Expr::reg(r),
            Operand::Imm(v) => Expr::c32(v as u32),
            Operand::Hi(h) => Expr::c32((h as u32) << 16),
            Operand::Target(t) => Expr::c32(t),
            Operand::SysReg(idx) => Expr::konst(2, idx as u64),
            Operand::Mem(_) | Operand::Text(_) => return Err(self.bad(i)),
        })
    }

    /// Bit position or width: a static immediate, or the low five bits of a
    /// data register.
    fn amount(&self, i: usize) -> Result<Amount> {
        match *self.op(i)? {
            Operand::Imm(v) => Ok(Amount::Static(v as u32)),
            Operand::Reg(r) => Ok(Amount::Dynamic(Expr::and(4, Expr::reg(r), k(4, 31)))),
            _ => Err(self.bad(i)),
        }
    }

    // statements

    fn emit(&mut self, stmt: Stmt) {
        self.out.push(stmt);
    }

    fn set(&mut self, reg: Reg, value: Expr) {
        self.emit(Stmt::SetReg { reg, value });
    }

    fn set_flag(&mut self, flag: Flag, value: Expr) {
        self.written |= flag.write_bit();
        self.emit(Stmt::SetFlag { flag, value });
    }

    /// Bind `value` to a fresh temporary and return a read of it. Narrow
    /// values are zero-extended to 32 bits.
    fn temp(&mut self, value: Expr) -> Expr {
        let n = self.temps;
        self.temps += 1;
        let (reg, value) = match value.size() {
            8 => (Reg::TempWide(n), value),
            4 => (Reg::Temp(n), value),
            _ => (Reg::Temp(n), Expr::zext(4, value)),
        };
        self.set(reg, value);
        Expr::reg(reg)
    }

    /// Host labels cannot be released, so call this only once every
    /// operand has resolved.
    fn label(&mut self) -> Label {
        self.host.new_label()
    }

    fn mark(&mut self, label: Label) {
        self.emit(Stmt::Mark(label));
    }

    fn intrinsic(&mut self, intrinsic: crate::il::Intrinsic, outputs: Vec<Reg>, inputs: Vec<Expr>) {
        self.emit(Stmt::Intrinsic {
            intrinsic,
            outputs,
            inputs,
        });
    }

    // flags

    /// V, sticky SV, AV and sticky SAV.
    fn status(&mut self, v: Expr, av: Expr) {
        self.status_vsvav(v, av);
        self.sticky(Flag::Sav, Flag::Av);
    }

    /// V, sticky SV and AV; SAV untouched.
    fn status_vsvav(&mut self, v: Expr, av: Expr) {
        self.set_flag(Flag::V, v);
        self.sticky(Flag::Sv, Flag::V);
        self.set_flag(Flag::Av, av);
    }

    fn sticky(&mut self, sticky: Flag, source: Flag) {
        self.set_flag(sticky, Expr::or(1, Expr::flag(sticky), Expr::flag(source)));
    }
}

/// Position or width operand of the bit-field family.
pub(crate) enum Amount {
    Static(u32),
    Dynamic(Expr),
}

impl Amount {
    fn expr(&self) -> Expr {
        match self {
            Amount::Static(n) => k(4, *n as u64),
            Amount::Dynamic(e) => e.clone(),
        }
    }
}

pub(crate) fn k(size: u8, value: u64) -> Expr {
    Expr::konst(size, value)
}

/// Zero-extend or truncate to `size`.
pub(crate) fn resize(size: u8, e: Expr) -> Expr {
    match e.size().cmp(&size) {
        std::cmp::Ordering::Less => Expr::zext(size, e),
        std::cmp::Ordering::Greater => Expr::low(size, e),
        std::cmp::Ordering::Equal => e,
    }
}

pub(crate) fn extend(sign: Sign, size: u8, e: Expr) -> Expr {
    match sign {
        Sign::Signed => Expr::sext(size, e),
        Sign::Unsigned => Expr::zext(size, e),
    }
}

/// Bit `n` of `x` as a 0/1 byte.
pub(crate) fn bit(x: Expr, n: u32) -> Expr {
    let size = x.size();
    let shifted = if n == 0 {
        x
    } else {
        Expr::lsr(size, x, k(size, n as u64))
    };
    Expr::and(1, Expr::low(1, shifted), k(1, 1))
}

/// `cond ? t : f` without branching: `f ^ ((t ^ f) & -cond)`.
pub(crate) fn select(size: u8, cond: Expr, t: Expr, f: Expr) -> Expr {
    let mask = Expr::unary(UnOp::Neg, size, resize(size, cond));
    Expr::xor(size, f.clone(), Expr::and(size, Expr::xor(size, t, f), mask))
}

/// AV rule: the top two bits of `result` differ.
pub(crate) fn advanced(result: &Expr) -> Expr {
    let size = result.size();
    let top = size as u32 * 8 - 1;
    let doubled = Expr::shl(size, result.clone(), k(size, 1));
    bit(Expr::xor(size, result.clone(), doubled), top)
}

/// 1 when the 64-bit `wide` does not fit `bits` bits of the given signedness.
pub(crate) fn overflow(wide: &Expr, bits: u32, sign: Sign) -> Expr {
    let narrow = Expr::low((bits / 8) as u8, wide.clone());
    Expr::cmp(CmpOp::Ne, 8, wide.clone(), extend(sign, 8, narrow))
}

pub(crate) fn limits(bits: u32, sign: Sign) -> (i64, i64) {
    match sign {
        Sign::Signed => (-(1i64 << (bits - 1)), (1i64 << (bits - 1)) - 1),
        Sign::Unsigned => (0, (1i64 << bits) - 1),
    }
}

/// Clamp the 64-bit `wide` into `bits` bits; the result is `bits / 8` bytes.
pub(crate) fn saturate(wide: &Expr, bits: u32, sign: Sign) -> Expr {
    let (min, max) = limits(bits, sign);
    let (min, max) = (k(8, min as u64), k(8, max as u64));
    let high = select(
        8,
        Expr::cmp(CmpOp::Sgt, 8, wide.clone(), max.clone()),
        max,
        wide.clone(),
    );
    let clamped = select(8, Expr::cmp(CmpOp::Slt, 8, wide.clone(), min.clone()), min, high);
    Expr::low((bits / 8) as u8, clamped)
}

pub(crate) fn cmp_op(cond: Cond) -> CmpOp {
    match cond {
        Cond::Eq => CmpOp::Eq,
        Cond::Ne => CmpOp::Ne,
        Cond::Lt => CmpOp::Slt,
        Cond::LtU => CmpOp::Ult,
        Cond::Ge => CmpOp::Sge,
        Cond::GeU => CmpOp::Uge,
        Cond::Gt => CmpOp::Sgt,
        Cond::Le => CmpOp::Sle,
    }
}

/// Lane `i` of a packed 32-bit value.
pub(crate) fn lane(x: &Expr, lane: Lane, i: u32) -> Expr {
    let bytes = (lane.bits() / 8) as u8;
    if bytes == x.size() {
        return x.clone();
    }
    let shift = i * lane.bits();
    if shift == 0 {
        Expr::low(bytes, x.clone())
    } else {
        Expr::low(bytes, Expr::lsr(4, x.clone(), k(4, shift as u64)))
    }
}

/// Reassemble lanes (lowest first) into one 32-bit value.
pub(crate) fn pack(parts: Vec<Expr>, lane: Lane) -> Expr {
    let mut acc: Option<Expr> = None;
    for (i, part) in parts.into_iter().enumerate() {
        let shift = i as u32 * lane.bits();
        let part = resize(4, part);
        let placed = if shift == 0 {
            part
        } else {
            Expr::shl(4, part, k(4, shift as u64))
        };
        acc = Some(match acc {
            Some(prev) => Expr::or(4, prev, placed),
            None => placed,
        });
    }
    acc.unwrap_or_else(|| k(4, 0))
}

/// OR of 0/1 bytes.
pub(crate) fn any(bits: Vec<Expr>) -> Expr {
    bits.into_iter()
        .reduce(|a, b| Expr::or(1, a, b))
        .unwrap_or_else(|| k(1, 0))
}

/// Upper 32 bits of a 64-bit value.
pub(crate) fn high_word(x: Expr) -> Expr {
    Expr::low(4, Expr::lsr(8, x, k(8, 32)))
}

/// `{hi, lo}` as one 64-bit value.
pub(crate) fn pair(hi: Expr, lo: Expr) -> Expr {
    Expr::or(
        8,
        Expr::shl(8, Expr::zext(8, hi), k(8, 32)),
        Expr::zext(8, lo),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arch::IsaVariant;
    use crate::decoder::decode;
    use crate::il::IlTrace;

    fn lift_bytes(bytes: &[u8]) -> Result<IlTrace> {
        let insn = decode(bytes, 0x1000, IsaVariant::V16).map_err(|_| LiftError::Operand {
            mnemonic: "decode",
            index: 0,
        })?;
        let mut il = IlTrace::new();
        lift(&insn, &mut il)?;
        Ok(il)
    }

    #[test]
    fn movh_writes_the_upper_half() {
        // movh d3, #0xbeef
        let raw: u32 = (3 << 28) | (0xBEEF << 12) | 0x7B;
        let il = lift_bytes(&raw.to_le_bytes()).map(|il| il.to_string());
        assert_eq!(il, Ok("d3 = 0xbeef0000\n".to_string()));
    }

    #[test]
    fn nothing_is_emitted_when_an_operand_is_wrong() {
        // Build an instruction whose operand list does not fit its family.
        let raw: u32 = (3 << 28) | (0xBEEF << 12) | 0x7B;
        let mut insn = decode(&raw.to_le_bytes(), 0, IsaVariant::V16).expect("movh decodes");
        insn.operands.truncate(1);
        let mut il = IlTrace::new();
        assert!(lift(&insn, &mut il).is_err());
        assert!(il.is_empty());
    }

    #[test]
    fn select_picks_by_condition() {
        let e = select(4, k(1, 1), k(4, 7), k(4, 9));
        assert_eq!(e.size(), 4);
        assert_eq!(resize(8, k(4, 1)).size(), 8);
        assert_eq!(resize(2, k(4, 1)).size(), 2);
    }
}
