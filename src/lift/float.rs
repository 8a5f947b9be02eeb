//! Single-precision FPU. Results travel as IEEE bits; status flags are
//! produced by `FpStatus` expressions over the operands.

use super::{any, bit, k, select, Lifter, Result};
use crate::flags::Flag;
use crate::il::{BinOp, CmpOp, Expr, FpOp, IlBuilder, UnOp};
use crate::isa::{FConv, FOp};

const ARITH: &[Flag] = &[Flag::Fi, Flag::Fv, Flag::Fu, Flag::Fx];
const DIVIDE: &[Flag] = &[Flag::Fi, Flag::Fv, Flag::Fz, Flag::Fu, Flag::Fx];
const TO_INT: &[Flag] = &[Flag::Fi, Flag::Fx];
const FROM_INT: &[Flag] = &[Flag::Fx];
const INVALID: &[Flag] = &[Flag::Fi];

/// 1 when `x` is a denormal: zero exponent with a non-zero fraction.
fn denormal(x: &Expr) -> Expr {
    let exponent = Expr::and(4, x.clone(), Expr::c32(0x7F80_0000));
    let fraction = Expr::and(4, x.clone(), Expr::c32(0x007F_FFFF));
    Expr::and(
        1,
        Expr::cmp(CmpOp::Eq, 4, exponent, k(4, 0)),
        Expr::cmp(CmpOp::Ne, 4, fraction, k(4, 0)),
    )
}

impl<B: IlBuilder + ?Sized> Lifter<'_, B> {
    /// Write each listed exception flag from `op` over `args`, then FS as
    /// their union.
    fn fp_flags(&mut self, flags: &[Flag], op: FpOp, args: &[Expr]) {
        for &flag in flags {
            self.set_flag(flag, Expr::fp_status(flag, op, args.to_vec()));
        }
        let summary = any(flags.iter().map(|&f| Expr::flag(f)).collect());
        self.set_flag(Flag::Fs, summary);
    }

    pub(super) fn float(&mut self, op: FOp) -> Result<()> {
        let dst = self.reg(0)?;
        let a = self.val(1)?;
        let b = self.val(2)?;
        let a = self.temp(a);
        let b = self.temp(b);
        let (bin, status, flags) = match op {
            FOp::Add => (BinOp::FAdd, FpOp::Add, ARITH),
            FOp::Sub => (BinOp::FSub, FpOp::Sub, ARITH),
            FOp::Mul => (BinOp::FMul, FpOp::Mul, ARITH),
            FOp::Div => (BinOp::FDiv, FpOp::Div, DIVIDE),
        };
        self.fp_flags(flags, status, &[a.clone(), b.clone()]);
        self.set(dst, Expr::binary(bin, 4, a, b));
        Ok(())
    }

    /// MADD.F/MSUB.F: `Dd +/- Da * Db`, rounded after each step.
    pub(super) fn float_mac(&mut self, sub: bool) -> Result<()> {
        let dst = self.reg(0)?;
        let acc = self.val(1)?;
        let a = self.val(2)?;
        let b = self.val(3)?;
        let acc = self.temp(acc);
        let a = self.temp(a);
        let b = self.temp(b);
        let (combine, status) = if sub {
            (BinOp::FSub, FpOp::MulSub)
        } else {
            (BinOp::FAdd, FpOp::MulAdd)
        };
        self.fp_flags(ARITH, status, &[acc.clone(), a.clone(), b.clone()]);
        let product = Expr::binary(BinOp::FMul, 4, a, b);
        self.set(dst, Expr::binary(combine, 4, acc, product));
        Ok(())
    }

    /// CMP.F: bit 0 less, 1 equal, 2 greater, 3 unordered, 4-5 operand
    /// denormals.
    pub(super) fn float_cmp(&mut self) -> Result<()> {
        let dst = self.reg(0)?;
        let a = self.val(1)?;
        let b = self.val(2)?;
        let a = self.temp(a);
        let b = self.temp(b);
        let bits = [
            Expr::cmp(CmpOp::FLt, 4, a.clone(), b.clone()),
            Expr::cmp(CmpOp::FEq, 4, a.clone(), b.clone()),
            Expr::cmp(CmpOp::FGt, 4, a.clone(), b.clone()),
            Expr::cmp(CmpOp::FUnord, 4, a.clone(), b.clone()),
            denormal(&a),
            denormal(&b),
        ];
        let result = bits
            .into_iter()
            .enumerate()
            .map(|(i, b)| Expr::shl(4, Expr::zext(4, b), k(4, i as u64)))
            .reduce(|acc, b| Expr::or(4, acc, b))
            .unwrap_or_else(|| k(4, 0));
        self.fp_flags(INVALID, FpOp::Compare, &[a, b]);
        self.set(dst, result);
        Ok(())
    }

    pub(super) fn float_conv(&mut self, conv: FConv) -> Result<()> {
        let dst = self.reg(0)?;
        let a = self.val(1)?;
        let a = self.temp(a);
        let scale = if self.arity() == 3 {
            let b = self.val(2)?;
            Some(self.temp(b))
        } else {
            None
        };
        let scaled = |a: &Expr, by: i32| -> Expr {
            let n = scale.clone().unwrap_or_else(|| k(4, 0));
            Expr::binary(BinOp::FScale, 4, a.clone(), Expr::add(4, n, Expr::c32(by as u32)))
        };
        let (value, status, flags) = match conv {
            FConv::FtoI => (Expr::unary(UnOp::FloatToInt, 4, a.clone()), FpOp::ToInt, TO_INT),
            FConv::FtoIz => (
                Expr::unary(UnOp::FloatToIntTrunc, 4, a.clone()),
                FpOp::ToInt,
                TO_INT,
            ),
            FConv::FtoU => (Expr::unary(UnOp::FloatToUInt, 4, a.clone()), FpOp::ToUInt, TO_INT),
            FConv::FtoUz => (
                Expr::unary(UnOp::FloatToUIntTrunc, 4, a.clone()),
                FpOp::ToUInt,
                TO_INT,
            ),
            FConv::ItoF => (Expr::unary(UnOp::IntToFloat, 4, a.clone()), FpOp::FromInt, FROM_INT),
            FConv::UtoF => (
                Expr::unary(UnOp::UIntToFloat, 4, a.clone()),
                FpOp::FromUInt,
                FROM_INT,
            ),
            FConv::FtoQ31 => (
                Expr::unary(UnOp::FloatToInt, 4, scaled(&a, 31)),
                FpOp::ToInt,
                TO_INT,
            ),
            FConv::FtoQ31z => (
                Expr::unary(UnOp::FloatToIntTrunc, 4, scaled(&a, 31)),
                FpOp::ToInt,
                TO_INT,
            ),
            FConv::Q31toF => {
                let n = scale.clone().unwrap_or_else(|| k(4, 0));
                let float = Expr::unary(UnOp::IntToFloat, 4, a.clone());
                let value = Expr::binary(BinOp::FScale, 4, float, Expr::sub(4, n, k(4, 31)));
                (value, FpOp::FromInt, FROM_INT)
            }
            FConv::Qseed => (Expr::unary(UnOp::FloatRsqrt, 4, a.clone()), FpOp::Rsqrt, INVALID),
        };
        let status_arg = match conv {
            FConv::FtoQ31 | FConv::FtoQ31z => scaled(&a, 31),
            _ => a,
        };
        self.fp_flags(flags, status, &[status_arg]);
        self.set(dst, value);
        Ok(())
    }

    /// UPDFL: bits 15:8 of `Da` select which FPU flags take the value in
    /// bits 7:0.
    pub(super) fn update_flags(&mut self) -> Result<()> {
        let src = self.val(0)?;
        let src = self.temp(src);
        for flag in Flag::FPU {
            let n = flag.psw_bit() - 24;
            let enable = bit(src.clone(), n + 8);
            let value = bit(src.clone(), n);
            self.set_flag(flag, select(1, enable, value, Expr::flag(flag)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arch::IsaVariant;
    use crate::decoder::decode;
    use crate::flags::FlagWrite;
    use crate::il::IlTrace;
    use crate::lift::lift_audited;

    fn audit(raw: u32) -> FlagWrite {
        let insn = decode(&raw.to_le_bytes(), 0, IsaVariant::V16).expect("decodes");
        lift_audited(&insn, &mut IlTrace::new()).expect("lifts")
    }

    #[test]
    fn divide_reports_every_exception() {
        // div.f d3, d1, d2
        assert_eq!(audit((3 << 28) | (0x05 << 20) | (2 << 12) | (1 << 8) | 0x4B), FlagWrite::ALL_FP);
    }

    #[test]
    fn compare_sets_only_invalid() {
        // cmp.f d3, d1, d2
        assert_eq!(audit((3 << 28) | (2 << 12) | (1 << 8) | 0x4B), FlagWrite::FS_FI);
    }

    #[test]
    fn denormals_need_a_fraction() {
        assert_eq!(denormal(&k(4, 1)).size(), 1);
    }
}
