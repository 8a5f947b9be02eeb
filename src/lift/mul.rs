//! Multiply, multiply-accumulate, Q-format and divide families.

use super::{advanced, extend, high_word, k, overflow, pair, saturate, select, Lifter, Result};
use crate::il::{BinOp, CmpOp, Expr, IlBuilder};
use crate::isa::{DvKind, HalfMode, MacAcc, PmResult, QSrc, Sign};

const INT_MIN: u64 = 0x8000_0000;

fn accumulate(op: MacAcc, acc: Expr, product: Expr) -> Expr {
    match op {
        MacAcc::None => product,
        MacAcc::Add => Expr::add(8, acc, product),
        MacAcc::Sub => Expr::sub(8, acc, product),
    }
}

/// Signed overflow of the 64-bit `result = acc op product`, by sign rule.
fn overflow64(sub: bool, acc: &Expr, product: &Expr, result: &Expr) -> Expr {
    let operands = Expr::xor(8, acc.clone(), product.clone());
    let operands = if sub { operands } else { Expr::not(8, operands) };
    let flipped = Expr::xor(8, acc.clone(), result.clone());
    super::bit(Expr::and(8, operands, flipped), 63)
}

/// 64-bit signed saturation after an overflowing accumulate.
fn saturate64(v: Expr, acc: &Expr, result: Expr) -> Expr {
    let negative = Expr::cmp(CmpOp::Slt, 8, acc.clone(), k(8, 0));
    let bound = select(8, negative, k(8, 1 << 63), k(8, i64::MAX as u64));
    select(8, v, bound, result)
}

/// Half-word `x` of a 32-bit value.
fn half(x: &Expr, upper: bool) -> Expr {
    if upper {
        Expr::low(2, Expr::lsr(4, x.clone(), k(4, 16)))
    } else {
        Expr::low(2, x.clone())
    }
}

/// `(x * y) << n` of two signed half-words, with the 0x8000 * 0x8000 << 1
/// special case pinned to 0x7fffffff.
fn half_product(x: Expr, y: Expr, n: u32) -> Expr {
    let product = Expr::mul(8, Expr::sext(8, x.clone()), Expr::sext(8, y.clone()));
    let shifted = Expr::shl(8, product, k(8, n as u64));
    if n != 1 {
        return shifted;
    }
    let both_min = Expr::and(
        1,
        Expr::cmp(CmpOp::Eq, 2, x, k(2, 0x8000)),
        Expr::cmp(CmpOp::Eq, 2, y, k(2, 0x8000)),
    );
    select(8, both_min, k(8, 0x7FFF_FFFF), shifted)
}

impl<B: IlBuilder + ?Sized> Lifter<'_, B> {
    pub(super) fn mul(&mut self, sign: Sign, wide: bool, sat: bool) -> Result<()> {
        let (dst, a, b) = self.binary()?;
        let product = self.temp(Expr::mul(8, extend(sign, 8, a), extend(sign, 8, b)));
        if wide {
            self.status(k(1, 0), advanced(&product));
            self.set(dst, product);
            return Ok(());
        }
        let av = advanced(&Expr::low(4, product.clone()));
        self.status(overflow(&product, 32, sign), av);
        let value = if sat {
            saturate(&product, 32, sign)
        } else {
            Expr::low(4, product)
        };
        self.set(dst, value);
        Ok(())
    }

    pub(super) fn mac(&mut self, sub: bool, sign: Sign, wide: bool, sat: bool) -> Result<()> {
        let dst = self.reg(0)?;
        let acc = self.val(1)?;
        let a = self.val(2)?;
        let b = self.val(3)?;
        let op = if sub { MacAcc::Sub } else { MacAcc::Add };
        let product = self.temp(Expr::mul(8, extend(sign, 8, a), extend(sign, 8, b)));
        if wide {
            let acc = self.temp(acc);
            let result = self.temp(accumulate(op, acc.clone(), product.clone()));
            let v = match sign {
                Sign::Signed => self.temp(overflow64(sub, &acc, &product, &result)),
                Sign::Unsigned => {
                    let wrapped = if sub {
                        Expr::cmp(CmpOp::Ult, 8, acc.clone(), product)
                    } else {
                        Expr::cmp(CmpOp::Ult, 8, result.clone(), acc.clone())
                    };
                    self.temp(wrapped)
                }
            };
            let v = Expr::low(1, v);
            self.status(v.clone(), advanced(&result));
            let value = match (sat, sign) {
                (false, _) => result,
                (true, Sign::Signed) => saturate64(v, &acc, result),
                (true, Sign::Unsigned) => {
                    let bound = if sub { k(8, 0) } else { k(8, u64::MAX) };
                    select(8, v, bound, result)
                }
            };
            self.set(dst, value);
            return Ok(());
        }
        // An unsigned product past 2^32 saturates whatever the accumulator
        // holds; clamping it keeps the 64-bit sum in signed range.
        let product = match sign {
            Sign::Signed => product,
            Sign::Unsigned => select(
                8,
                Expr::cmp(CmpOp::Ugt, 8, product.clone(), k(8, 0xFFFF_FFFF)),
                k(8, 1 << 32),
                product,
            ),
        };
        let result = self.temp(accumulate(op, extend(sign, 8, acc), product));
        let av = advanced(&Expr::low(4, result.clone()));
        self.status(overflow(&result, 32, sign), av);
        let value = if sat {
            saturate(&result, 32, sign)
        } else {
            Expr::low(4, result)
        };
        self.set(dst, value);
        Ok(())
    }

    /// MUL.Q/MADD.Q/MSUB.Q and the rounded forms.
    pub(super) fn q_mul(&mut self, src: QSrc, wide: bool, acc: MacAcc, round: bool, sat: bool) -> Result<()> {
        let dst = self.reg(0)?;
        let (acc_value, first) = match acc {
            MacAcc::None => (None, 1),
            _ => (Some(self.val(1)?), 2),
        };
        let a = self.temp(self.val(first)?);
        let b = self.temp(self.val(first + 1)?);
        let n = self.imm(first + 2)? as u32;

        let product = match src {
            QSrc::Word => {
                let shifted = Expr::shl(
                    8,
                    Expr::mul(8, Expr::sext(8, a.clone()), Expr::sext(8, b.clone())),
                    k(8, n as u64),
                );
                let (special, shifted) = if wide {
                    (k(8, i64::MAX as u64), shifted)
                } else {
                    (k(8, 0x7FFF_FFFF), Expr::asr(8, shifted, k(8, 32)))
                };
                if n == 1 {
                    let both_min = Expr::and(
                        1,
                        Expr::cmp(CmpOp::Eq, 4, a.clone(), k(4, INT_MIN)),
                        Expr::cmp(CmpOp::Eq, 4, b.clone(), k(4, INT_MIN)),
                    );
                    select(8, both_min, special, shifted)
                } else {
                    shifted
                }
            }
            QSrc::Lower | QSrc::Upper => {
                let y = half(&b, src == QSrc::Upper);
                let shifted = Expr::shl(
                    8,
                    Expr::mul(8, Expr::sext(8, a.clone()), Expr::sext(8, y)),
                    k(8, n as u64),
                );
                if wide {
                    shifted
                } else {
                    Expr::asr(8, shifted, k(8, 16))
                }
            }
            QSrc::LowerLower | QSrc::UpperUpper => {
                let upper = src == QSrc::UpperUpper;
                let p = half_product(half(&a, upper), half(&b, upper), n);
                if wide {
                    Expr::shl(8, p, k(8, 16))
                } else {
                    p
                }
            }
        };
        let product = self.temp(product);

        if wide {
            let Some(acc_value) = acc_value else {
                self.status(k(1, 0), advanced(&product));
                self.set(dst, product);
                return Ok(());
            };
            let acc_value = self.temp(acc_value);
            let sub = acc == MacAcc::Sub;
            let result = self.temp(accumulate(acc, acc_value.clone(), product.clone()));
            let v = Expr::low(1, self.temp(overflow64(sub, &acc_value, &product, &result)));
            self.status(v.clone(), advanced(&result));
            let value = if sat {
                saturate64(v, &acc_value, result)
            } else {
                result
            };
            self.set(dst, value);
            return Ok(());
        }

        let acc_wide = acc_value.map(|e| Expr::sext(8, e)).unwrap_or_else(|| k(8, 0));
        let mut result = accumulate(acc, acc_wide, product);
        if round {
            result = Expr::add(8, result, k(8, 0x8000));
        }
        let result = self.temp(result);
        let av = advanced(&Expr::low(4, result.clone()));
        self.status(overflow(&result, 32, Sign::Signed), av);
        let mut value = if sat {
            saturate(&result, 32, Sign::Signed)
        } else {
            Expr::low(4, result)
        };
        if round {
            value = Expr::and(4, value, k(4, 0xFFFF_0000));
        }
        self.set(dst, value);
        Ok(())
    }

    /// Packed half-word multiplies: two products, one per half.
    pub(super) fn packed_mul(
        &mut self,
        mode: HalfMode,
        hi: MacAcc,
        lo: MacAcc,
        shape: PmResult,
        sat: bool,
    ) -> Result<()> {
        let dst = self.reg(0)?;
        let (acc, first) = match hi {
            MacAcc::None => (None, 1),
            _ => (Some(self.temp(self.val(1)?)), 2),
        };
        let a = self.temp(self.val(first)?);
        let b = self.temp(self.val(first + 1)?);
        let n = self.imm(first + 2)? as u32;
        let (b_upper_hi, b_upper_lo) = mode.upper_halves();
        let p1 = self.temp(half_product(half(&a, true), half(&b, b_upper_hi), n));
        let p0 = self.temp(half_product(half(&a, false), half(&b, b_upper_lo), n));

        match shape {
            PmResult::Merged => {
                let combine = if hi == lo || hi == MacAcc::None { BinOp::Add } else { BinOp::Sub };
                let merged = Expr::shl(8, Expr::binary(combine, 8, p1, p0), k(8, 16));
                let merged = self.temp(merged);
                let Some(acc) = acc else {
                    self.status(k(1, 0), advanced(&merged));
                    self.set(dst, merged);
                    return Ok(());
                };
                let sub = hi == MacAcc::Sub;
                let result = self.temp(accumulate(hi, acc.clone(), merged.clone()));
                let v = Expr::low(1, self.temp(overflow64(sub, &acc, &merged, &result)));
                self.status(v.clone(), advanced(&result));
                let value = if sat { saturate64(v, &acc, result) } else { result };
                self.set(dst, value);
            }
            PmResult::Pair | PmResult::Rounded | PmResult::RoundedWide => {
                let rounded = shape != PmResult::Pair;
                let (acc1, acc0) = match (&acc, shape) {
                    (None, _) => (k(8, 0), k(8, 0)),
                    (Some(acc), PmResult::Rounded) => (
                        Expr::sext(8, Expr::and(4, acc.clone(), k(4, 0xFFFF_0000))),
                        Expr::sext(8, Expr::shl(4, acc.clone(), k(4, 16))),
                    ),
                    (Some(acc), _) => (
                        Expr::sext(8, high_word(acc.clone())),
                        Expr::sext(8, Expr::low(4, acc.clone())),
                    ),
                };
                let mut words = Vec::new();
                for (op, acc_word, p) in [(hi, acc1, p1), (lo, acc0, p0)] {
                    let mut w = accumulate(op, acc_word, p);
                    if rounded {
                        w = Expr::add(8, w, k(8, 0x8000));
                    }
                    words.push(self.temp(w));
                }
                let v = Expr::or(1, overflow(&words[0], 32, Sign::Signed), overflow(&words[1], 32, Sign::Signed));
                let av = Expr::or(
                    1,
                    advanced(&Expr::low(4, words[0].clone())),
                    advanced(&Expr::low(4, words[1].clone())),
                );
                self.status(v, av);
                let fit = |w: &Expr| {
                    if sat {
                        saturate(w, 32, Sign::Signed)
                    } else {
                        Expr::low(4, w.clone())
                    }
                };
                let (w1, w0) = (fit(&words[0]), fit(&words[1]));
                let value = if rounded {
                    Expr::or(
                        4,
                        Expr::and(4, w1, k(4, 0xFFFF_0000)),
                        Expr::lsr(4, w0, k(4, 16)),
                    )
                } else {
                    pair(w1, w0)
                };
                self.set(dst, value);
            }
        }
        Ok(())
    }

    /// DIV/DIV.U: quotient in the low word, remainder in the high word.
    pub(super) fn div(&mut self, sign: Sign) -> Result<()> {
        let dst = self.reg(0)?;
        let a = self.temp(self.val(1)?);
        let b = self.temp(self.val(2)?);
        let (div, rem) = match sign {
            Sign::Signed => (BinOp::DivS, BinOp::ModS),
            Sign::Unsigned => (BinOp::DivU, BinOp::ModU),
        };
        let quotient = self.temp(Expr::binary(div, 4, a.clone(), b.clone()));
        let remainder = Expr::binary(rem, 4, a.clone(), b.clone());
        let v = self.division_overflow(sign, &a, &b);
        self.status_vsvav(v, advanced(&quotient));
        self.set(dst, pair(remainder, quotient));
        Ok(())
    }

    fn division_overflow(&self, sign: Sign, a: &Expr, b: &Expr) -> Expr {
        let by_zero = Expr::cmp(CmpOp::Eq, 4, b.clone(), k(4, 0));
        match sign {
            Sign::Unsigned => by_zero,
            Sign::Signed => Expr::or(
                1,
                by_zero,
                Expr::and(
                    1,
                    Expr::cmp(CmpOp::Eq, 4, a.clone(), k(4, INT_MIN)),
                    Expr::cmp(CmpOp::Eq, 4, b.clone(), k(4, 0xFFFF_FFFF)),
                ),
            ),
        }
    }

    /// DVINIT family: prepare the 64-bit dividend for the DVSTEP sequence.
    pub(super) fn dvinit(&mut self, kind: DvKind) -> Result<()> {
        let dst = self.reg(0)?;
        let a = self.temp(self.val(1)?);
        let b = self.temp(self.val(2)?);
        let (sign, shift) = match kind {
            DvKind::W => (Sign::Signed, 0),
            DvKind::Wu => (Sign::Unsigned, 0),
            DvKind::H => (Sign::Signed, 16),
            DvKind::Hu => (Sign::Unsigned, 16),
            DvKind::B => (Sign::Signed, 24),
            DvKind::Bu => (Sign::Unsigned, 24),
        };
        let extended = extend(sign, 8, a.clone());
        let value = match (sign, shift) {
            (_, 0) => extended,
            (Sign::Unsigned, n) => Expr::shl(8, extended, k(8, n)),
            (Sign::Signed, n) => {
                // The vacated low bits hold the quotient sign.
                let quotient_negative = super::bit(Expr::xor(4, a.clone(), b.clone()), 31);
                let fill = Expr::and(
                    8,
                    Expr::unary(crate::il::UnOp::Neg, 8, Expr::zext(8, quotient_negative)),
                    k(8, (1 << n) - 1),
                );
                Expr::or(8, Expr::shl(8, extended, k(8, n)), fill)
            }
        };
        let v = match kind {
            DvKind::W => self.division_overflow(Sign::Signed, &a, &b),
            _ => self.division_overflow(Sign::Unsigned, &a, &b),
        };
        self.status_vsvav(v, k(1, 0));
        self.set(dst, value);
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
    fn division_leaves_sav() {
        // div e2, d4, d5
        assert_eq!(audit((2 << 28) | (0x20 << 20) | (5 << 12) | (4 << 8) | 0x4B), FlagWrite::VSVAV);
    }

    #[test]
    fn packed_multiply_writes_status() {
        // mul.h e0, d1, d2ul, #1
        let raw: u32 = (0x18 << 18) | (1 << 16) | (2 << 12) | (1 << 8) | 0xB3;
        assert_eq!(audit(raw), FlagWrite::VSVAVSAV);
    }
}
