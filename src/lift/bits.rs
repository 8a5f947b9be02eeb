//! Bit-field extract/insert and single-bit logic.

use super::alu::{accumulate, logic};
use super::{bit, k, pair, Amount, Lifter, Result};
use crate::decoder::Operand;
use crate::il::{Expr, IlBuilder};
use crate::isa::{AccOp, LogicOp, Sign};
use crate::regs::Reg;

/// `((1 << width) - 1) << pos`; a width of 32 yields all ones.
fn field_mask(pos: &Amount, width: &Amount) -> Expr {
    if let (Amount::Static(pos), Amount::Static(width)) = (pos, width) {
        let ones = if *width >= 32 { u32::MAX } else { (1u32 << width) - 1 };
        return Expr::c32(ones.wrapping_shl(*pos));
    }
    let ones = Expr::sub(4, Expr::shl(4, k(4, 1), width.expr()), k(4, 1));
    Expr::shl(4, ones, pos.expr())
}

impl<B: IlBuilder + ?Sized> Lifter<'_, B> {
    /// Position and width at operand `i`: an E pair carries both (position
    /// in the low word, width in the high word), otherwise two operands.
    fn field(&self, i: usize) -> Result<(Amount, Amount)> {
        if let Operand::Reg(reg @ Reg::E(_)) = *self.op(i)? {
            let (lo, hi) = reg.halves().ok_or_else(|| self.bad(i))?;
            let five = |r: Reg| Amount::Dynamic(Expr::and(4, Expr::reg(r), k(4, 31)));
            return Ok((five(lo), five(hi)));
        }
        Ok((self.amount(i)?, self.amount(i + 1)?))
    }

    /// EXTR/EXTR.U: `width` bits of `Da` from `pos`, extended.
    pub(super) fn extract(&mut self, sign: Sign) -> Result<()> {
        let dst = self.reg(0)?;
        let src = self.val(1)?;
        let (pos, width) = self.field(2)?;
        let value = match (&pos, &width) {
            (Amount::Static(p), Amount::Static(w)) => {
                let up = 32u32.saturating_sub(p + w) as u64;
                let down = 32u32.saturating_sub(*w) as u64;
                let raised = Expr::shl(4, src, k(4, up));
                match sign {
                    Sign::Signed => Expr::asr(4, raised, k(4, down)),
                    Sign::Unsigned => Expr::lsr(4, raised, k(4, down)),
                }
            }
            _ => {
                let width = self.temp(width.expr());
                let up = Expr::sub(4, Expr::sub(4, k(4, 32), pos.expr()), width.clone());
                let down = Expr::sub(4, k(4, 32), width);
                let raised = Expr::shl(4, src, up);
                match sign {
                    Sign::Signed => Expr::asr(4, raised, down),
                    Sign::Unsigned => Expr::lsr(4, raised, down),
                }
            }
        };
        self.set(dst, value);
        Ok(())
    }

    /// INSERT: replace `width` bits of `Da` at `pos` with the low bits of
    /// the source.
    pub(super) fn insert(&mut self) -> Result<()> {
        let dst = self.reg(0)?;
        let base = self.val(1)?;
        let src = self.val(2)?;
        let (pos, width) = self.field(3)?;
        let mask = self.temp(field_mask(&pos, &width));
        let placed = Expr::and(4, Expr::shl(4, src, pos.expr()), mask.clone());
        let kept = Expr::and(4, base, Expr::not(4, mask));
        self.set(dst, Expr::or(4, kept, placed));
        Ok(())
    }

    /// IMASK: mask in the high word, shifted source in the low word.
    pub(super) fn imask(&mut self) -> Result<()> {
        let dst = self.reg(0)?;
        let src = self.val(1)?;
        let (pos, width) = self.field(2)?;
        let data = Expr::shl(4, src, pos.expr());
        self.set(dst, pair(field_mask(&pos, &width), data));
        Ok(())
    }

    /// DEXTR: the upper word of `{Da, Db} << pos`.
    pub(super) fn dextr(&mut self) -> Result<()> {
        let dst = self.reg(0)?;
        let hi = self.val(1)?;
        let lo = self.val(2)?;
        let pos = self.amount(3)?;
        let joined = Expr::shl(8, pair(hi, lo), Expr::zext(8, pos.expr()));
        self.set(dst, super::high_word(joined));
        Ok(())
    }

    fn bit_operand(&self, reg: usize) -> Result<Expr> {
        let value = self.val(reg)?;
        let pos = self.imm(reg + 1)?;
        Ok(bit(value, pos as u32))
    }

    pub(super) fn bit_op(&mut self, op: LogicOp, acc: Option<AccOp>) -> Result<()> {
        let dst = self.reg(0)?;
        let a = self.bit_operand(1)?;
        let b = self.bit_operand(3)?;
        let result = Expr::and(1, logic(1, op, a, b), k(1, 1));
        let value = match acc {
            None => Expr::zext(4, result),
            Some(acc) => accumulate(acc, Expr::reg(dst), result),
        };
        self.set(dst, value);
        Ok(())
    }

    /// INS.T/INSN.T: copy one bit of `Db` into `Da` at `pos1`.
    pub(super) fn insert_bit(&mut self, negate: bool) -> Result<()> {
        let dst = self.reg(0)?;
        let base = self.val(1)?;
        let pos = self.imm(2)? as u32;
        let mut b = self.bit_operand(3)?;
        if negate {
            b = Expr::xor(1, b, k(1, 1));
        }
        let cleared = Expr::and(4, base, Expr::c32(!(1u32 << pos)));
        let placed = Expr::shl(4, Expr::zext(4, b), k(4, pos as u64));
        self.set(dst, Expr::or(4, cleared, placed));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_masks() {
        let full = field_mask(&Amount::Static(0), &Amount::Static(32));
        assert_eq!(full, Expr::c32(u32::MAX));
        let nibble = field_mask(&Amount::Static(4), &Amount::Static(4));
        assert_eq!(nibble, Expr::c32(0xF0));
    }
}
