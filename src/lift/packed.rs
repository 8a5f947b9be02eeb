//! Lane-wise byte and half-word arithmetic.

use super::{advanced, any, k, lane, overflow, pack, saturate, select, Lifter, Result};
use crate::il::{BinOp, CmpOp, Expr, IlBuilder, UnOp};
use crate::isa::{Lane, PackedOp, Sign};

/// Per-lane result with its overflow and advanced-overflow bits.
struct LaneResult {
    value: Expr,
    v: Option<Expr>,
    av: Option<Expr>,
}

impl LaneResult {
    fn plain(value: Expr) -> Self {
        Self {
            value,
            v: None,
            av: None,
        }
    }
}

impl<B: IlBuilder + ?Sized> Lifter<'_, B> {
    pub(super) fn packed(&mut self, op: PackedOp, width: Lane) -> Result<()> {
        let (dst, a, b) = match op {
            PackedOp::Abs | PackedOp::AbsSat => (self.reg(0)?, self.val(1)?, k(4, 0)),
            _ => self.binary()?,
        };
        if matches!(op, PackedOp::Sh | PackedOp::Sha) {
            return self.packed_shift(dst, a, b, op == PackedOp::Sha);
        }
        let a = self.temp(a);
        let b = self.temp(b);
        let bytes = (width.bits() / 8) as u8;
        let mut lanes = Vec::new();
        for i in 0..width.count() {
            let la = lane(&a, width, i);
            let lb = lane(&b, width, i);
            let result = self.packed_lane(op, width, bytes, la, lb);
            lanes.push(result);
        }
        let flagged = lanes.iter().any(|l| l.v.is_some());
        let (mut vs, mut avs, mut values) = (Vec::new(), Vec::new(), Vec::new());
        for l in lanes {
            values.push(l.value);
            vs.extend(l.v);
            avs.extend(l.av);
        }
        let result = self.temp(pack(values, width));
        if flagged {
            self.status(any(vs), any(avs));
        }
        self.set(dst, result);
        Ok(())
    }

    fn packed_lane(&mut self, op: PackedOp, width: Lane, bytes: u8, a: Expr, b: Expr) -> LaneResult {
        let bits = width.bits();
        let sext = |e: &Expr| Expr::sext(8, e.clone());
        let zext = |e: &Expr| Expr::zext(8, e.clone());
        let wide = match op {
            PackedOp::Add => Some((Expr::add(8, sext(&a), sext(&b)), Sign::Signed, false)),
            PackedOp::Sub => Some((Expr::sub(8, sext(&a), sext(&b)), Sign::Signed, false)),
            PackedOp::AddSat(Sign::Signed) => Some((Expr::add(8, sext(&a), sext(&b)), Sign::Signed, true)),
            PackedOp::AddSat(Sign::Unsigned) => Some((Expr::add(8, zext(&a), zext(&b)), Sign::Unsigned, true)),
            PackedOp::SubSat(Sign::Signed) => Some((Expr::sub(8, sext(&a), sext(&b)), Sign::Signed, true)),
            PackedOp::SubSat(Sign::Unsigned) => Some((Expr::sub(8, zext(&a), zext(&b)), Sign::Unsigned, true)),
            PackedOp::Abs | PackedOp::AbsSat => {
                Some((magnitude(sext(&a)), Sign::Signed, op == PackedOp::AbsSat))
            }
            PackedOp::AbsDif | PackedOp::AbsDifSat => Some((
                magnitude(Expr::sub(8, sext(&a), sext(&b))),
                Sign::Signed,
                op == PackedOp::AbsDifSat,
            )),
            _ => None,
        };
        if let Some((wide, sign, sat)) = wide {
            let wide = self.temp(wide);
            let raw = Expr::low(bytes, wide.clone());
            let value = if sat { saturate(&wide, bits, sign) } else { raw.clone() };
            return LaneResult {
                value,
                v: Some(overflow(&wide, bits, sign)),
                av: Some(advanced(&raw)),
            };
        }
        let all_ones = |test: Expr| Expr::unary(UnOp::Neg, bytes, Expr::zext(bytes, test));
        LaneResult::plain(match op {
            PackedOp::Min(sign) => {
                let lt = Expr::cmp(less(sign), bytes, a.clone(), b.clone());
                select(bytes, lt, a, b)
            }
            PackedOp::Max(sign) => {
                let lt = Expr::cmp(less(sign), bytes, a.clone(), b.clone());
                select(bytes, lt, b, a)
            }
            PackedOp::Eq => all_ones(Expr::cmp(CmpOp::Eq, bytes, a, b)),
            PackedOp::Lt(sign) => all_ones(Expr::cmp(less(sign), bytes, a, b)),
            _ => a,
        })
    }

    /// SH.H/SHA.H: both half-words shifted by the same count.
    fn packed_shift(&mut self, dst: crate::regs::Reg, src: Expr, count: Expr, arithmetic: bool) -> Result<()> {
        let src = self.temp(src);
        let count = match count {
            Expr::Const { value, .. } => Expr::c32(value as u32),
            count => Expr::asr(4, Expr::shl(4, count, k(4, 27)), k(4, 27)),
        };
        let count = self.temp(count);
        let left = Expr::cmp(CmpOp::Sge, 4, count.clone(), k(4, 0));
        let right_by = Expr::low(2, Expr::unary(UnOp::Neg, 4, count.clone()));
        let left_by = Expr::low(2, count);
        let right_op = if arithmetic { BinOp::Asr } else { BinOp::Lsr };
        let halves = (0..2)
            .map(|i| {
                let h = lane(&src, Lane::H, i);
                let shl = Expr::shl(2, h.clone(), left_by.clone());
                let shr = Expr::binary(right_op, 2, h, right_by.clone());
                select(2, left.clone(), shl, shr)
            })
            .collect();
        self.set(dst, pack(halves, Lane::H));
        Ok(())
    }
}

fn less(sign: Sign) -> CmpOp {
    match sign {
        Sign::Signed => CmpOp::Slt,
        Sign::Unsigned => CmpOp::Ult,
    }
}

/// |x| of a 64-bit value.
fn magnitude(x: Expr) -> Expr {
    let negative = Expr::cmp(CmpOp::Slt, 8, x.clone(), k(8, 0));
    let negated = Expr::unary(UnOp::Neg, 8, x.clone());
    select(8, negative, negated, x)
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
    fn packed_add_reports_overflow() {
        // add.h d3, d1, d2
        assert_eq!(audit((3 << 28) | (0x60 << 20) | (2 << 12) | (1 << 8) | 0x0B), FlagWrite::VSVAVSAV);
    }

    #[test]
    fn packed_compare_leaves_flags() {
        // eq.b d3, d1, d2
        assert_eq!(audit((3 << 28) | (0x50 << 20) | (2 << 12) | (1 << 8) | 0x0B), FlagWrite::NONE);
    }
}
