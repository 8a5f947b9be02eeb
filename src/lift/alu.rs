//! Integer arithmetic, compares, logic, shifts and moves.

use super::{
    advanced, any, bit, cmp_op, extend, k, lane, overflow, pack, resize, saturate,
    select, Lifter, Result,
};
use crate::flags::Flag;
use crate::il::{BinOp, CmpOp, Expr, IlBuilder, UnOp};
use crate::isa::{AccOp, Cond, CountKind, Lane, LogicOp, SatKind, ShiftKind, Sign};
use crate::regs::Reg;

pub(super) fn logic(size: u8, op: LogicOp, a: Expr, b: Expr) -> Expr {
    match op {
        LogicOp::And => Expr::and(size, a, b),
        LogicOp::Andn => Expr::and(size, a, Expr::not(size, b)),
        LogicOp::Nand => Expr::not(size, Expr::and(size, a, b)),
        LogicOp::Nor => Expr::not(size, Expr::or(size, a, b)),
        LogicOp::Or => Expr::or(size, a, b),
        LogicOp::Orn => Expr::or(size, a, Expr::not(size, b)),
        LogicOp::Xnor => Expr::not(size, Expr::xor(size, a, b)),
        LogicOp::Xor => Expr::xor(size, a, b),
    }
}

/// Fold the 0/1 byte `bit` into bit 0 of `dst`.
pub(super) fn accumulate(acc: AccOp, dst: Expr, bit: Expr) -> Expr {
    let bit = Expr::zext(4, bit);
    match acc {
        AccOp::And => Expr::and(4, dst, Expr::or(4, k(4, 0xFFFF_FFFE), bit)),
        AccOp::Or => Expr::or(4, dst, bit),
        AccOp::Xor => Expr::xor(4, dst, bit),
        AccOp::Sh => Expr::or(4, Expr::shl(4, dst, k(4, 1)), bit),
    }
}

fn is_address(reg: Reg) -> bool {
    matches!(reg, Reg::A(_))
}

impl<B: IlBuilder + ?Sized> Lifter<'_, B> {
    /// `(dst, lhs, rhs)` of a three-operand form, or of a two-operand form
    /// whose destination is also the left source.
    pub(super) fn binary(&self) -> Result<(Reg, Expr, Expr)> {
        match self.arity() {
            3 => Ok((self.reg(0)?, self.val(1)?, self.val(2)?)),
            2 => Ok((self.reg(0)?, self.val(0)?, self.val(1)?)),
            n => Err(self.bad(n)),
        }
    }

    /// `(dst, src)` of a two-operand form, or the in-place one-operand form.
    pub(super) fn unary(&self) -> Result<(Reg, Expr)> {
        match self.arity() {
            2 => Ok((self.reg(0)?, self.val(1)?)),
            1 => Ok((self.reg(0)?, self.val(0)?)),
            n => Err(self.bad(n)),
        }
    }

    /// `dst = lhs op rhs` with 32-bit signed overflow status.
    fn arith(&mut self, dst: Reg, op: BinOp, lhs: Expr, rhs: Expr) {
        let wide = self.temp(Expr::binary(op, 8, Expr::sext(8, lhs), Expr::sext(8, rhs)));
        let result = self.temp(Expr::low(4, wide.clone()));
        self.status(overflow(&wide, 32, Sign::Signed), advanced(&result));
        self.set(dst, result);
    }

    fn arith_sat(&mut self, dst: Reg, op: BinOp, lhs: Expr, rhs: Expr, sign: Sign) {
        let wide = self.temp(Expr::binary(
            op,
            8,
            extend(sign, 8, lhs),
            extend(sign, 8, rhs),
        ));
        let av = advanced(&Expr::low(4, wide.clone()));
        self.status(overflow(&wide, 32, sign), av);
        self.set(dst, saturate(&wide, 32, sign));
    }

    pub(super) fn add(&mut self) -> Result<()> {
        let (dst, lhs, rhs) = self.binary()?;
        if is_address(dst) {
            self.set(dst, Expr::add(4, lhs, rhs));
            return Ok(());
        }
        self.arith(dst, BinOp::Add, lhs, rhs);
        Ok(())
    }

    pub(super) fn sub(&mut self) -> Result<()> {
        let (dst, lhs, rhs) = self.binary()?;
        if is_address(dst) {
            self.set(dst, Expr::sub(4, lhs, rhs));
            return Ok(());
        }
        self.arith(dst, BinOp::Sub, lhs, rhs);
        Ok(())
    }

    pub(super) fn add_sat(&mut self, sign: Sign) -> Result<()> {
        let (dst, lhs, rhs) = self.binary()?;
        self.arith_sat(dst, BinOp::Add, lhs, rhs, sign);
        Ok(())
    }

    pub(super) fn sub_sat(&mut self, sign: Sign) -> Result<()> {
        let (dst, lhs, rhs) = self.binary()?;
        self.arith_sat(dst, BinOp::Sub, lhs, rhs, sign);
        Ok(())
    }

    /// ADDC/ADDX/SUBC/SUBX: 33-bit sums with carry out to C. With
    /// `use_carry` the carry in is PSW.C, otherwise 0 for adds and 1 for
    /// subtracts (two's complement).
    pub(super) fn carry_arith(&mut self, sub: bool, use_carry: bool) -> Result<()> {
        let (dst, lhs, rhs) = self.binary()?;
        let lhs = self.temp(lhs);
        let rhs = self.temp(if sub { Expr::not(4, rhs) } else { rhs });
        let carry_in = match (use_carry, sub) {
            (true, _) => Expr::zext(8, Expr::flag(Flag::C)),
            (false, true) => k(8, 1),
            (false, false) => k(8, 0),
        };
        let unsigned = self.temp(Expr::add(
            8,
            Expr::add(8, Expr::zext(8, lhs.clone()), Expr::zext(8, rhs.clone())),
            carry_in.clone(),
        ));
        let signed = self.temp(Expr::add(
            8,
            Expr::add(8, Expr::sext(8, lhs), Expr::sext(8, rhs)),
            carry_in,
        ));
        let result = self.temp(Expr::low(4, unsigned.clone()));
        self.set_flag(Flag::C, bit(unsigned, 32));
        self.status(overflow(&signed, 32, Sign::Signed), advanced(&result));
        self.set(dst, result);
        Ok(())
    }

    pub(super) fn rsub(&mut self, sat: Option<Sign>) -> Result<()> {
        let (dst, lhs, rhs) = match self.arity() {
            3 => (self.reg(0)?, self.val(2)?, self.val(1)?),
            1 => (self.reg(0)?, Expr::c32(0), self.val(0)?),
            n => return Err(self.bad(n)),
        };
        match sat {
            None => self.arith(dst, BinOp::Sub, lhs, rhs),
            Some(sign) => self.arith_sat(dst, BinOp::Sub, lhs, rhs, sign),
        }
        Ok(())
    }

    /// `Ac = Ab + (Da << n)`
    pub(super) fn add_scaled(&mut self) -> Result<()> {
        let dst = self.reg(0)?;
        let base = self.val(1)?;
        let index = self.val(2)?;
        let n = self.imm(3)?;
        let scaled = Expr::shl(4, index, k(4, n as u64));
        self.set(dst, Expr::add(4, base, scaled));
        Ok(())
    }

    /// `Ac = Ab + (Da >> 3)`: bit index to byte offset.
    pub(super) fn add_scaled_t(&mut self) -> Result<()> {
        let dst = self.reg(0)?;
        let base = self.val(1)?;
        let index = self.val(2)?;
        self.set(dst, Expr::add(4, base, Expr::lsr(4, index, k(4, 3))));
        Ok(())
    }

    pub(super) fn sat(&mut self, kind: SatKind) -> Result<()> {
        let (dst, src) = self.unary()?;
        let (bits, sign) = match kind {
            SatKind::B => (8, Sign::Signed),
            SatKind::Bu => (8, Sign::Unsigned),
            SatKind::H => (16, Sign::Signed),
            SatKind::Hu => (16, Sign::Unsigned),
        };
        let wide = self.temp(extend(sign, 8, src));
        self.set(dst, extend(sign, 4, saturate(&wide, bits, sign)));
        Ok(())
    }

    pub(super) fn compare(&mut self, cond: Cond, acc: Option<AccOp>) -> Result<()> {
        let (dst, lhs, rhs) = match self.arity() {
            3 => (self.reg(0)?, self.val(1)?, self.val(2)?),
            2 => (self.reg(0)?, self.val(1)?, Expr::c32(0)),
            n => return Err(self.bad(n)),
        };
        let test = Expr::cmp(cmp_op(cond), 4, lhs, rhs);
        let value = match acc {
            None => Expr::zext(4, test),
            Some(acc) => accumulate(acc, Expr::reg(dst), test),
        };
        self.set(dst, value);
        Ok(())
    }

    /// EQANY: 1 when any lane of the sources is equal.
    pub(super) fn eq_any(&mut self, width: Lane) -> Result<()> {
        let (dst, a, b) = self.binary()?;
        let a = self.temp(a);
        let b = self.temp(b);
        let bytes = (width.bits() / 8) as u8;
        let hits = (0..width.count())
            .map(|i| Expr::cmp(CmpOp::Eq, bytes, lane(&a, width, i), lane(&b, width, i)))
            .collect();
        self.set(dst, Expr::zext(4, any(hits)));
        Ok(())
    }

    pub(super) fn logic(&mut self, op: LogicOp) -> Result<()> {
        let (dst, a, b) = self.binary()?;
        self.set(dst, logic(4, op, a, b));
        Ok(())
    }

    pub(super) fn not(&mut self) -> Result<()> {
        let (dst, src) = self.unary()?;
        self.set(dst, Expr::not(4, src));
        Ok(())
    }

    pub(super) fn shift(&mut self, kind: ShiftKind) -> Result<()> {
        let (dst, src, count) = self.binary()?;
        let src = self.temp(src);
        // Register counts use the low six bits, sign-extended.
        let count = match count {
            Expr::Const { value, .. } => Expr::c32(value as u32),
            count => Expr::asr(4, Expr::shl(4, count, k(4, 26)), k(4, 26)),
        };
        let count = self.temp(count);
        let left = Expr::cmp(CmpOp::Sge, 4, count.clone(), k(4, 0));
        let right_by = Expr::unary(UnOp::Neg, 4, count.clone());
        let shl = Expr::shl(4, src.clone(), count.clone());
        match kind {
            ShiftKind::Logical => {
                let lsr = Expr::lsr(4, src, right_by);
                self.set(dst, select(4, left, shl, lsr));
            }
            ShiftKind::Arithmetic | ShiftKind::ArithmeticSat => {
                let left = self.temp(left);
                let asr = Expr::asr(4, src.clone(), right_by.clone());
                let wide = self.temp(Expr::shl(8, Expr::sext(8, src.clone()), count.clone()));
                let v = Expr::and(1, Expr::low(1, left.clone()), overflow(&wide, 32, Sign::Signed));
                let result = if kind == ShiftKind::Arithmetic {
                    let shifted_out = Expr::cmp(
                        CmpOp::Ne,
                        4,
                        Expr::lsr(4, src.clone(), Expr::sub(4, k(4, 32), count.clone())),
                        k(4, 0),
                    );
                    let mask = Expr::sub(4, Expr::shl(4, k(4, 1), right_by), k(4, 1));
                    let dropped = Expr::cmp(CmpOp::Ne, 4, Expr::and(4, src, mask), k(4, 0));
                    let carry = select(1, left.clone(), shifted_out, dropped);
                    let result = self.temp(select(4, left, shl, asr));
                    self.set_flag(Flag::C, carry);
                    result
                } else {
                    let sat = saturate(&wide, 32, Sign::Signed);
                    self.temp(select(4, left, sat, asr))
                };
                self.status(v, advanced(&result));
                self.set(dst, result);
            }
        }
        Ok(())
    }

    pub(super) fn count(&mut self, kind: CountKind, width: Lane) -> Result<()> {
        let (dst, src) = self.unary()?;
        let src = self.temp(src);
        let bytes = (width.bits() / 8) as u8;
        let parts = (0..width.count())
            .map(|i| {
                let x = lane(&src, width, i);
                let counted = match kind {
                    CountKind::Zeros => Expr::unary(UnOp::Clz, bytes, x),
                    CountKind::Ones => Expr::unary(UnOp::Clz, bytes, Expr::not(bytes, x)),
                    CountKind::Sign => {
                        let signs =
                            Expr::xor(bytes, x.clone(), Expr::asr(bytes, x, k(bytes, 1)));
                        Expr::sub(bytes, Expr::unary(UnOp::Clz, bytes, signs), k(bytes, 1))
                    }
                };
                resize(4, counted)
            })
            .collect();
        self.set(dst, pack(parts, width));
        Ok(())
    }

    /// CADD/CADDN/CSUB/CSUBN: the result and V/AV only change when the
    /// condition holds.
    pub(super) fn cond_arith(&mut self, sub: bool, negate: bool) -> Result<()> {
        let (dst, cond, lhs, rhs) = match self.arity() {
            4 => (self.reg(0)?, self.val(1)?, self.val(2)?, self.val(3)?),
            3 => (self.reg(0)?, self.val(1)?, self.val(0)?, self.val(2)?),
            n => return Err(self.bad(n)),
        };
        let test = if negate { CmpOp::Eq } else { CmpOp::Ne };
        let taken = self.temp(Expr::cmp(test, 4, cond, k(4, 0)));
        let taken = Expr::low(1, taken);
        let lhs = self.temp(lhs);
        let op = if sub { BinOp::Sub } else { BinOp::Add };
        let wide = self.temp(Expr::binary(op, 8, Expr::sext(8, lhs.clone()), Expr::sext(8, rhs)));
        let result = self.temp(Expr::low(4, wide.clone()));
        let v = select(1, taken.clone(), overflow(&wide, 32, Sign::Signed), Expr::flag(Flag::V));
        let av = select(1, taken.clone(), advanced(&result), Expr::flag(Flag::Av));
        self.status(v, av);
        self.set(dst, select(4, taken, result, lhs));
        Ok(())
    }

    /// SEL/SELN: `Dc = Dd != 0 ? Da : Db`.
    pub(super) fn select(&mut self, negate: bool) -> Result<()> {
        let dst = self.reg(0)?;
        let cond = self.val(1)?;
        let t = self.val(2)?;
        let f = self.val(3)?;
        let test = if negate { CmpOp::Eq } else { CmpOp::Ne };
        self.set(dst, select(4, Expr::cmp(test, 4, cond, k(4, 0)), t, f));
        Ok(())
    }

    /// CMOV/CMOVN: `Da = D15 != 0 ? src : Da`.
    pub(super) fn cond_move(&mut self, negate: bool) -> Result<()> {
        let dst = self.reg(0)?;
        let cond = self.val(1)?;
        let src = self.val(2)?;
        let test = if negate { CmpOp::Eq } else { CmpOp::Ne };
        let value = select(4, Expr::cmp(test, 4, cond, k(4, 0)), src, Expr::reg(dst));
        self.set(dst, value);
        Ok(())
    }

    pub(super) fn mov(&mut self) -> Result<()> {
        let dst = self.reg(0)?;
        let src = self.val(1)?;
        let value = if dst.size() == 8 {
            Expr::sext(8, src)
        } else {
            src
        };
        self.set(dst, value);
        Ok(())
    }

    /// `Ec = {Da, Db}`
    pub(super) fn mov_pair(&mut self) -> Result<()> {
        let dst = self.reg(0)?;
        let hi = self.val(1)?;
        let lo = self.val(2)?;
        self.set(dst, super::pair(hi, lo));
        Ok(())
    }

    pub(super) fn lea(&mut self) -> Result<()> {
        let dst = self.reg(0)?;
        let m = self.mem(1)?;
        let (addr, _) = self.address(m);
        self.set(dst, addr);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
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
    fn data_add_writes_overflow_status() {
        // add d3, d1, d2
        assert_eq!(audit((3 << 28) | (2 << 12) | (1 << 8) | 0x0B), FlagWrite::VSVAVSAV);
    }

    #[test]
    fn address_add_writes_nothing() {
        // add.a a3, a1, a2
        assert_eq!(audit((3 << 28) | (0x01 << 20) | (2 << 12) | (1 << 8) | 0x01), FlagWrite::NONE);
    }

    #[test]
    fn sha_writes_carry() {
        // sha d3, d1, d2
        assert_eq!(audit((3 << 28) | (0x01 << 20) | (2 << 12) | (1 << 8) | 0x0F), FlagWrite::ALL);
    }
}
