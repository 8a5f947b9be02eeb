//! Reference evaluator for lifted IL.
//!
//! Executes one instruction's statements against a [`Cpu`] and a [`Bus`].
//! It exists to check the lifter end to end, so it favours plain
//! definitions over speed.

use std::collections::HashMap;

use num_traits::ToPrimitive;

use crate::cpu::{ContextKind, Cpu, Trap};
use crate::decoder::Insn;
use crate::flags::Flag;
use crate::il::{BinOp, CmpOp, Expr, FpOp, IlTrace, Intrinsic, Label, Stmt, UnOp};
use crate::lift::lift;
use crate::memory::Bus;
use crate::regs::Reg;

pub trait Executor {
    fn exec<B: Bus>(&self, cpu: &mut Cpu, bus: &mut B, insn: &Insn) -> Result<(), Trap>;
}

/// Lifts each instruction and interprets the statements.
pub struct IlExecutor;

impl Executor for IlExecutor {
    fn exec<B: Bus>(&self, cpu: &mut Cpu, bus: &mut B, insn: &Insn) -> Result<(), Trap> {
        let mut il = IlTrace::new();
        lift(insn, &mut il).map_err(|error| {
            tracing::debug!(pc = insn.addr, %error, "lift failed");
            Trap::InvalidInstruction { pc: insn.addr }
        })?;
        execute(cpu, bus, insn.addr, &il.stmts)
    }
}

fn mask(size: u8, value: u64) -> u64 {
    if size >= 8 {
        value
    } else {
        value & ((1u64 << (size as u32 * 8)) - 1)
    }
}

fn signed(size: u8, value: u64) -> i64 {
    let shift = 64 - (size.min(8) as u32 * 8);
    ((value << shift) as i64) >> shift
}

fn float(value: u64) -> f32 {
    f32::from_bits(value as u32)
}

fn bits(value: f32) -> u64 {
    value.to_bits() as u64
}

fn is_signaling(x: f32) -> bool {
    x.is_nan() && x.to_bits() & (1 << 22) == 0
}

/// Float to i32 with saturation; NaN converts to 0.
fn to_i32(x: f32) -> u64 {
    if x.is_nan() {
        return 0;
    }
    let v = x.to_i32().unwrap_or(if x < 0.0 { i32::MIN } else { i32::MAX });
    v as u32 as u64
}

fn to_u32(x: f32) -> u64 {
    if x.is_nan() {
        return 0;
    }
    x.to_u32().unwrap_or(if x < 0.0 { 0 } else { u32::MAX }) as u64
}

/// Run `stmts` to completion. `pc` is the address of the instruction they
/// came from; the CPU's PC has already moved past it.
pub fn execute<B: Bus>(cpu: &mut Cpu, bus: &mut B, pc: u32, stmts: &[Stmt]) -> Result<(), Trap> {
    cpu.temps.clear();
    let marks: HashMap<Label, usize> = stmts
        .iter()
        .enumerate()
        .filter_map(|(i, s)| match s {
            Stmt::Mark(label) => Some((*label, i)),
            _ => None,
        })
        .collect();
    let goto = |label: &Label| {
        marks.get(label).copied().ok_or(Trap::Unsupported {
            pc,
            what: "branch to a label outside the instruction",
        })
    };
    let mut eval = Eval { cpu, bus, pc };
    let mut i = 0;
    while i < stmts.len() {
        match &stmts[i] {
            Stmt::SetReg { reg, value } => {
                let value = eval.expr(value)?;
                eval.cpu.write_reg(*reg, value);
            }
            Stmt::SetFlag { flag, value } => {
                let on = eval.expr(value)? & 1 != 0;
                eval.cpu.set_flag(*flag, on);
            }
            Stmt::Store { size, addr, value } => {
                let addr = eval.expr(addr)? as u32;
                let value = eval.expr(value)?;
                eval.store(addr, *size, value)?;
            }
            Stmt::Jump(target) | Stmt::Call(target) | Stmt::Ret(target) => {
                eval.cpu.pc = eval.expr(target)? as u32;
            }
            Stmt::If {
                cond,
                then_label,
                else_label,
            } => {
                let taken = eval.expr(cond)? != 0;
                i = goto(if taken { then_label } else { else_label })?;
                continue;
            }
            Stmt::Goto(label) => {
                i = goto(label)?;
                continue;
            }
            Stmt::Mark(_) | Stmt::Nop => {}
            Stmt::Intrinsic {
                intrinsic,
                outputs,
                inputs,
            } => {
                let args = inputs
                    .iter()
                    .map(|e| eval.expr(e))
                    .collect::<Result<Vec<_>, _>>()?;
                eval.intrinsic(*intrinsic, outputs, &args)?;
            }
            Stmt::Undefined => {
                return Err(Trap::Unsupported {
                    pc,
                    what: "undefined behaviour",
                })
            }
        }
        i += 1;
    }
    Ok(())
}

struct Eval<'a, B: Bus> {
    cpu: &'a mut Cpu,
    bus: &'a mut B,
    pc: u32,
}

impl<B: Bus> Eval<'_, B> {
    fn check_alignment(&self, addr: u32, size: u8) -> Result<(), Trap> {
        if size >= 2 && addr & 1 != 0 {
            return Err(Trap::Unaligned { addr });
        }
        Ok(())
    }

    fn load(&mut self, addr: u32, size: u8) -> Result<u64, Trap> {
        self.check_alignment(addr, size)?;
        self.bus
            .read(addr, size)
            .map_err(|source| Trap::Bus { addr, source })
    }

    fn store(&mut self, addr: u32, size: u8, value: u64) -> Result<(), Trap> {
        self.check_alignment(addr, size)?;
        self.bus
            .write(addr, size, mask(size, value))
            .map_err(|source| Trap::Bus { addr, source })
    }

    fn expr(&mut self, e: &Expr) -> Result<u64, Trap> {
        Ok(match e {
            Expr::Const { size, value } => mask(*size, *value),
            Expr::Reg(reg) => self.cpu.read_reg(*reg),
            Expr::Flag(flag) => self.cpu.flag(*flag) as u64,
            Expr::Load { size, addr } => {
                let addr = self.expr(addr)? as u32;
                self.load(addr, *size)?
            }
            Expr::Unary { op, size, arg } => {
                let v = self.expr(arg)?;
                mask(*size, unary(*op, *size, v))
            }
            Expr::Binary { op, size, lhs, rhs } => {
                let a = self.expr(lhs)?;
                let b = self.expr(rhs)?;
                mask(*size, binary(*op, *size, a, b))
            }
            Expr::Extend { signed: s, size, arg } => {
                let v = self.expr(arg)?;
                let v = if *s { signed(arg.size(), v) as u64 } else { v };
                mask(*size, v)
            }
            Expr::Low { size, arg } => mask(*size, self.expr(arg)?),
            Expr::Cmp {
                cond,
                size,
                lhs,
                rhs,
            } => {
                let a = mask(*size, self.expr(lhs)?);
                let b = mask(*size, self.expr(rhs)?);
                compare(*cond, *size, a, b) as u64
            }
            Expr::FpStatus { flag, op, args } => {
                let args = args
                    .iter()
                    .map(|e| self.expr(e).map(float))
                    .collect::<Result<Vec<_>, _>>()?;
                fp_status(*flag, *op, &args) as u64
            }
        })
    }

    fn context_to_memory(&mut self, kind: ContextKind, addr: u32) -> Result<(), Trap> {
        for (i, reg) in kind.layout().into_iter().enumerate() {
            let value = self.cpu.read_reg(reg);
            self.store(addr.wrapping_add(4 * i as u32), 4, value)?;
        }
        Ok(())
    }

    fn context_from_memory(&mut self, kind: ContextKind, addr: u32) -> Result<(), Trap> {
        for (i, reg) in kind.layout().into_iter().enumerate() {
            let value = self.load(addr.wrapping_add(4 * i as u32), 4)?;
            self.cpu.write_reg(reg, value);
        }
        Ok(())
    }

    fn intrinsic(&mut self, intrinsic: Intrinsic, outputs: &[Reg], args: &[u64]) -> Result<(), Trap> {
        let arg = |i: usize| args.get(i).copied().unwrap_or(0);
        let out = outputs.first().copied();
        let pc = self.pc;
        match intrinsic {
            Intrinsic::SaveUpperContext => self.cpu.save_context(ContextKind::Upper),
            Intrinsic::SaveLowerContext => self.cpu.save_context(ContextKind::Lower),
            Intrinsic::RestoreUpperContext => self.cpu.restore_context(ContextKind::Upper)?,
            Intrinsic::RestoreLowerContext => self.cpu.restore_context(ContextKind::Lower)?,
            Intrinsic::StoreUpperContext => self.context_to_memory(ContextKind::Upper, arg(0) as u32)?,
            Intrinsic::StoreLowerContext => self.context_to_memory(ContextKind::Lower, arg(0) as u32)?,
            Intrinsic::LoadUpperContext => self.context_from_memory(ContextKind::Upper, arg(0) as u32)?,
            Intrinsic::LoadLowerContext => self.context_from_memory(ContextKind::Lower, arg(0) as u32)?,
            Intrinsic::Bisr => {
                self.cpu.save_context(ContextKind::Lower);
                let icr = self.cpu.read_reg(Reg::Sys(crate::cpu::ICR)) & !0xFF;
                self.cpu
                    .write_reg(Reg::Sys(crate::cpu::ICR), icr | (arg(0) & 0xFF));
                self.cpu.set_interrupts(true);
            }
            Intrinsic::Mfcr => {
                if let Some(dst) = out {
                    let value = self.cpu.read_reg(Reg::Sys(arg(0) as u16));
                    self.cpu.write_reg(dst, value);
                }
            }
            Intrinsic::Mtcr => {
                if let Some(dst) = out {
                    self.cpu.write_reg(dst, arg(1));
                }
            }
            Intrinsic::Enable => self.cpu.set_interrupts(true),
            Intrinsic::Disable => self.cpu.set_interrupts(false),
            Intrinsic::DisableSave => {
                let was = self.cpu.interrupts_enabled() as u64;
                self.cpu.set_interrupts(false);
                if let Some(dst) = out {
                    self.cpu.write_reg(dst, was);
                }
            }
            Intrinsic::Restore => self.cpu.set_interrupts(arg(0) & 1 != 0),
            Intrinsic::Dsync
            | Intrinsic::Isync
            | Intrinsic::Wait
            | Intrinsic::CacheWriteback
            | Intrinsic::CacheWritebackInvalidate
            | Intrinsic::CacheInvalidate
            | Intrinsic::TlbDemap
            | Intrinsic::TlbFlushA
            | Intrinsic::TlbFlushB
            | Intrinsic::TlbProbeA
            | Intrinsic::TlbProbeI
            | Intrinsic::TlbMap => {}
            Intrinsic::Debug => return Err(Trap::Break),
            Intrinsic::Syscall => {
                return Err(Trap::Syscall {
                    pc,
                    number: arg(0) as u32,
                })
            }
            Intrinsic::Trap => return Err(Trap::Overflow { pc }),
            Intrinsic::BitReverseStep => {
                if let Some(dst) = out {
                    self.cpu.write_reg(dst, bit_reverse_step(arg(0) as u32) as u64);
                }
            }
            Intrinsic::Parity => {
                if let Some(dst) = out {
                    self.cpu.write_reg(dst, parity(arg(0) as u32) as u64);
                }
            }
            Intrinsic::Bmerge => {
                if let Some(dst) = out {
                    self.cpu
                        .write_reg(dst, bmerge(arg(0) as u32, arg(1) as u32) as u64);
                }
            }
            Intrinsic::Bsplit => {
                if let Some(dst) = out {
                    self.cpu.write_reg(dst, bsplit(arg(0) as u32));
                }
            }
            other => {
                return Err(Trap::Unsupported {
                    pc,
                    what: other.name(),
                })
            }
        }
        Ok(())
    }
}

fn unary(op: UnOp, size: u8, v: u64) -> u64 {
    let width = size as u32 * 8;
    match op {
        UnOp::Neg => v.wrapping_neg(),
        UnOp::Not => !v,
        UnOp::Clz => {
            let v = mask(size, v);
            if v == 0 {
                width as u64
            } else {
                (v << (64 - width)).leading_zeros() as u64
            }
        }
        UnOp::IntToFloat => bits(v as u32 as i32 as f32),
        UnOp::UIntToFloat => bits(v as u32 as f32),
        UnOp::FloatToInt => to_i32(float(v).round_ties_even()),
        UnOp::FloatToIntTrunc => to_i32(float(v).trunc()),
        UnOp::FloatToUInt => to_u32(float(v).round_ties_even()),
        UnOp::FloatToUIntTrunc => to_u32(float(v).trunc()),
        UnOp::FloatRsqrt => bits(1.0 / float(v).sqrt()),
    }
}

fn binary(op: BinOp, size: u8, a: u64, b: u64) -> u64 {
    let width = size as u64 * 8;
    let all_ones = mask(size, u64::MAX);
    match op {
        BinOp::Add => a.wrapping_add(b),
        BinOp::Sub => a.wrapping_sub(b),
        BinOp::Mul => a.wrapping_mul(b),
        BinOp::DivS | BinOp::ModS => {
            let (x, y) = (signed(size, a), signed(size, b));
            match (op, y) {
                (BinOp::DivS, 0) => all_ones,
                (_, 0) => a,
                (BinOp::DivS, _) => x.wrapping_div(y) as u64,
                _ => x.wrapping_rem(y) as u64,
            }
        }
        BinOp::DivU => mask(size, a).checked_div(mask(size, b)).unwrap_or(all_ones),
        BinOp::ModU => {
            let (x, y) = (mask(size, a), mask(size, b));
            if y == 0 {
                x
            } else {
                x % y
            }
        }
        BinOp::And => a & b,
        BinOp::Or => a | b,
        BinOp::Xor => a ^ b,
        BinOp::Shl if b >= width => 0,
        BinOp::Shl => a << b,
        BinOp::Lsr if b >= width => 0,
        BinOp::Lsr => mask(size, a) >> b,
        BinOp::Asr => (signed(size, a) >> b.min(width - 1)) as u64,
        BinOp::FAdd => bits(float(a) + float(b)),
        BinOp::FSub => bits(float(a) - float(b)),
        BinOp::FMul => bits(float(a) * float(b)),
        BinOp::FDiv => bits(float(a) / float(b)),
        BinOp::FScale => bits(scale(float(a), b as u32 as i32)),
    }
}

/// `x * 2^n`, rounded once.
fn scale(x: f32, n: i32) -> f32 {
    (x as f64 * 2f64.powi(n.clamp(-400, 400))) as f32
}

fn compare(cond: CmpOp, size: u8, a: u64, b: u64) -> bool {
    let (sa, sb) = (signed(size, a), signed(size, b));
    let (fa, fb) = (float(a), float(b));
    match cond {
        CmpOp::Eq => a == b,
        CmpOp::Ne => a != b,
        CmpOp::Slt => sa < sb,
        CmpOp::Sle => sa <= sb,
        CmpOp::Sgt => sa > sb,
        CmpOp::Sge => sa >= sb,
        CmpOp::Ult => a < b,
        CmpOp::Ule => a <= b,
        CmpOp::Ugt => a > b,
        CmpOp::Uge => a >= b,
        CmpOp::FLt => fa < fb,
        CmpOp::FEq => fa == fb,
        CmpOp::FGt => fa > fb,
        CmpOp::FUnord => fa.is_nan() || fb.is_nan(),
    }
}

/// IEEE exception `flag` raised by `op` over `args`.
fn fp_status(flag: Flag, op: FpOp, args: &[f32]) -> bool {
    let arg = |i: usize| args.get(i).copied().unwrap_or(0.0);
    let any_nan = args.iter().any(|x| x.is_nan());
    let any_signaling = args.iter().any(|x| is_signaling(*x));
    let arithmetic = match op {
        FpOp::Add => Some((arg(0) as f64 + arg(1) as f64, arg(0) + arg(1))),
        FpOp::Sub => Some((arg(0) as f64 - arg(1) as f64, arg(0) - arg(1))),
        FpOp::Mul => Some((arg(0) as f64 * arg(1) as f64, arg(0) * arg(1))),
        FpOp::Div => Some((arg(0) as f64 / arg(1) as f64, arg(0) / arg(1))),
        FpOp::MulAdd => Some((
            arg(0) as f64 + arg(1) as f64 * arg(2) as f64,
            arg(0) + arg(1) * arg(2),
        )),
        FpOp::MulSub => Some((
            arg(0) as f64 - arg(1) as f64 * arg(2) as f64,
            arg(0) - arg(1) * arg(2),
        )),
        _ => None,
    };
    if let Some((exact, result)) = arithmetic {
        let divide_by_zero =
            op == FpOp::Div && arg(1) == 0.0 && arg(0).is_finite() && arg(0) != 0.0;
        let finite_inputs = args.iter().all(|x| x.is_finite());
        let overflow = result.is_infinite() && finite_inputs && !divide_by_zero;
        return match flag {
            Flag::Fi => any_signaling || (result.is_nan() && !any_nan),
            Flag::Fz => divide_by_zero,
            Flag::Fv => overflow,
            Flag::Fu => {
                (result != 0.0 && result.abs() < f32::MIN_POSITIVE && result.is_finite())
                    || (result == 0.0 && exact != 0.0 && exact.is_finite())
            }
            Flag::Fx => overflow || (result.is_finite() && exact.is_finite() && result as f64 != exact),
            _ => false,
        };
    }
    let x = arg(0);
    match (op, flag) {
        (FpOp::Compare, Flag::Fi) => any_nan,
        (FpOp::ToInt, Flag::Fi) => x.is_nan() || x.round_ties_even().to_i32().is_none(),
        (FpOp::ToUInt, Flag::Fi) => x.is_nan() || x.round_ties_even().to_u32().is_none(),
        (FpOp::ToInt | FpOp::ToUInt, Flag::Fx) => x.is_finite() && x.fract() != 0.0,
        (FpOp::FromInt, Flag::Fx) => {
            let v = x.to_bits() as i32;
            v as f32 as f64 != v as f64
        }
        (FpOp::FromUInt, Flag::Fx) => {
            let v = x.to_bits();
            v as f32 as f64 != v as f64
        }
        (FpOp::Rsqrt, Flag::Fi) => any_signaling || (x < 0.0),
        _ => false,
    }
}

/// Reverse-carry increment of the `[p+r]` index in the low half-word by the
/// modifier in the high half-word.
fn bit_reverse_step(word: u32) -> u32 {
    let index = word as u16;
    let incr = (word >> 16) as u16;
    let next = (index.reverse_bits().wrapping_add(incr.reverse_bits())).reverse_bits();
    (word & 0xFFFF_0000) | next as u32
}

/// Even parity of each byte, in bit 0 of that byte.
fn parity(x: u32) -> u32 {
    (0..4).fold(0, |acc, i| {
        let byte = (x >> (8 * i)) & 0xFF;
        acc | ((byte.count_ones() & 1) << (8 * i))
    })
}

/// Interleave: `a` fills the odd bit positions, `b` the even ones.
fn bmerge(a: u32, b: u32) -> u32 {
    (0..16).fold(0, |acc, i| {
        acc | (((a >> i) & 1) << (2 * i + 1)) | (((b >> i) & 1) << (2 * i))
    })
}

/// Inverse of [`bmerge`]: odd bits to the high word, even bits to the low.
fn bsplit(x: u32) -> u64 {
    let (mut odd, mut even) = (0u64, 0u64);
    for i in 0..16 {
        odd |= (((x >> (2 * i + 1)) & 1) as u64) << i;
        even |= (((x >> (2 * i)) & 1) as u64) << i;
    }
    (odd << 32) | even
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifts_past_the_width() {
        assert_eq!(binary(BinOp::Shl, 4, 1, 32), 0);
        assert_eq!(mask(4, binary(BinOp::Asr, 4, 0x8000_0000, 40)), 0xFFFF_FFFF);
        assert_eq!(binary(BinOp::Lsr, 4, 0x8000_0000, 31), 1);
    }

    #[test]
    fn division_by_zero_is_defined() {
        assert_eq!(binary(BinOp::DivS, 4, 5, 0), 0xFFFF_FFFF);
        assert_eq!(binary(BinOp::ModU, 4, 5, 0), 5);
        let min = 0x8000_0000u64;
        assert_eq!(mask(4, binary(BinOp::DivS, 4, min, 0xFFFF_FFFF)), min);
    }

    #[test]
    fn float_conversion_saturates() {
        assert_eq!(unary(UnOp::FloatToInt, 4, bits(3.0e10)), i32::MAX as u64);
        assert_eq!(unary(UnOp::FloatToInt, 4, bits(-3.0e10)), 0x8000_0000);
        assert_eq!(unary(UnOp::FloatToUInt, 4, bits(-1.0)), 0);
        assert_eq!(unary(UnOp::FloatToInt, 4, bits(2.5)), 2);
    }

    #[test]
    fn bit_merge_and_split_invert() {
        let merged = bmerge(0xABCD, 0x1234);
        assert_eq!(bsplit(merged), (0xABCDu64 << 32) | 0x1234);
    }

    #[test]
    fn reverse_increment() {
        // increment of 8 over a 16-entry buffer steps 0 -> 8 -> 4
        let word = 8 << 16;
        let once = bit_reverse_step(word);
        assert_eq!(once & 0xFFFF, 8);
        assert_eq!(bit_reverse_step(once) & 0xFFFF, 4);
    }
}
