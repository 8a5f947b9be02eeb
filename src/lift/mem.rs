//! Loads, stores, atomics and the context/cache intrinsics.

use super::{k, select, Lifter, Result};
use crate::decoder::Mem;
use crate::il::{CmpOp, Expr, IlBuilder, Intrinsic, Stmt};
use crate::isa::MemKind;
use crate::regs::Reg;

fn offset(off: i32) -> Expr {
    Expr::c32(off as u32)
}

fn context_registers(intrinsic: Intrinsic) -> Vec<Reg> {
    match intrinsic {
        Intrinsic::LoadLowerContext => {
            let mut regs: Vec<Reg> = (2..8).map(Reg::A).collect();
            regs.extend((0..8).map(Reg::D));
            regs.extend([Reg::A(11), Reg::Pcxi]);
            regs
        }
        Intrinsic::LoadUpperContext => {
            let mut regs: Vec<Reg> = (10..16).map(Reg::A).collect();
            regs.extend((8..16).map(Reg::D));
            regs.extend([Reg::Psw, Reg::Pcxi]);
            regs
        }
        _ => Vec::new(),
    }
}

impl<B: IlBuilder + ?Sized> Lifter<'_, B> {
    /// Effective address of `m` plus the base-register updates to emit after
    /// the access. Circular accesses wrap the index once and never split.
    pub(super) fn address(&mut self, m: Mem) -> (Expr, Vec<Stmt>) {
        match m {
            Mem::Absolute(addr) => (Expr::c32(addr), Vec::new()),
            Mem::Base { base, offset: 0 } => (Expr::reg(base), Vec::new()),
            Mem::Base { base, offset: off } => {
                (Expr::add(4, Expr::reg(base), offset(off)), Vec::new())
            }
            Mem::PostInc { base, offset: off } => {
                let addr = self.temp(Expr::reg(base));
                let update = Stmt::SetReg {
                    reg: base,
                    value: Expr::add(4, addr.clone(), offset(off)),
                };
                (addr, vec![update])
            }
            Mem::PreInc { base, offset: off } => {
                let addr = self.temp(Expr::add(4, Expr::reg(base), offset(off)));
                let update = Stmt::SetReg {
                    reg: base,
                    value: addr.clone(),
                };
                (addr, vec![update])
            }
            Mem::BitReverse { pair } => {
                let (base, index) = pair_halves(pair);
                let addr = self.temp(Expr::add(
                    4,
                    Expr::reg(base),
                    Expr::and(4, Expr::reg(index), k(4, 0xFFFF)),
                ));
                let update = Stmt::Intrinsic {
                    intrinsic: Intrinsic::BitReverseStep,
                    outputs: vec![index],
                    inputs: vec![Expr::reg(index)],
                };
                (addr, vec![update])
            }
            Mem::Circular { pair, offset: off } => {
                let (base, index_reg) = pair_halves(pair);
                let index = self.temp(Expr::and(4, Expr::reg(index_reg), k(4, 0xFFFF)));
                let length = self.temp(Expr::lsr(4, Expr::reg(index_reg), k(4, 16)));
                let addr = self.temp(Expr::add(4, Expr::reg(base), index.clone()));
                let stepped = self.temp(Expr::add(4, index, offset(off)));
                let wrapped_low = select(
                    4,
                    Expr::cmp(CmpOp::Slt, 4, stepped.clone(), k(4, 0)),
                    Expr::add(4, stepped.clone(), length.clone()),
                    stepped,
                );
                let stepped = self.temp(wrapped_low);
                let wrapped = select(
                    4,
                    Expr::cmp(CmpOp::Sge, 4, stepped.clone(), length.clone()),
                    Expr::sub(4, stepped.clone(), length.clone()),
                    stepped,
                );
                let update = Stmt::SetReg {
                    reg: index_reg,
                    value: Expr::or(
                        4,
                        Expr::shl(4, length, k(4, 16)),
                        Expr::and(4, wrapped, k(4, 0xFFFF)),
                    ),
                };
                (addr, vec![update])
            }
        }
    }

    fn commit(&mut self, updates: Vec<Stmt>) {
        self.out.extend(updates);
    }

    fn store_at(&mut self, size: u8, addr: Expr, value: Expr) {
        self.emit(Stmt::Store { size, addr, value });
    }

    pub(super) fn load(&mut self, kind: MemKind) -> Result<()> {
        let dst = self.reg(0)?;
        let m = self.mem(1)?;
        let size = kind.size();
        let (addr, updates) = self.address(m);
        let loaded = Expr::load(size, addr);
        let value = match kind {
            MemKind::B | MemKind::H => Expr::sext(4, loaded),
            MemKind::Bu | MemKind::Hu => Expr::zext(4, loaded),
            MemKind::Q => Expr::shl(4, Expr::zext(4, loaded), k(4, 16)),
            MemKind::W | MemKind::A | MemKind::D | MemKind::Da => loaded,
        };
        self.set(dst, value);
        self.commit(updates);
        Ok(())
    }

    pub(super) fn store(&mut self, kind: MemKind) -> Result<()> {
        let m = self.mem(0)?;
        let src = self.val(1)?;
        let size = kind.size();
        let value = match kind {
            MemKind::B | MemKind::Bu => Expr::low(1, src),
            MemKind::H | MemKind::Hu => Expr::low(2, src),
            MemKind::Q => Expr::low(2, Expr::lsr(4, src, k(4, 16))),
            MemKind::W | MemKind::A | MemKind::D | MemKind::Da => src,
        };
        let (addr, updates) = self.address(m);
        self.store_at(size, addr, value);
        self.commit(updates);
        Ok(())
    }

    /// ST.T: read-modify-write of one bit in a byte.
    pub(super) fn store_bit(&mut self) -> Result<()> {
        let m = self.mem(0)?;
        let pos = self.imm(1)? as u32;
        let value = self.imm(2)? as u64 & 1;
        let (addr, updates) = self.address(m);
        let cleared = Expr::and(1, Expr::load(1, addr.clone()), k(1, !(1u64 << pos) & 0xFF));
        let merged = Expr::or(1, cleared, k(1, value << pos));
        self.store_at(1, addr, merged);
        self.commit(updates);
        Ok(())
    }

    /// `(value, mask)` halves of an E pair operand.
    fn value_mask(&self, i: usize) -> Result<(Reg, Reg)> {
        self.reg(i)?.halves().ok_or_else(|| self.bad(i))
    }

    /// LDMST: `M = (M & ~mask) | (value & mask)`.
    pub(super) fn ldmst(&mut self) -> Result<()> {
        let m = self.mem(0)?;
        let (value, mask) = self.value_mask(1)?;
        let (addr, updates) = self.address(m);
        let addr = self.temp(addr);
        let kept = Expr::and(4, Expr::load(4, addr.clone()), Expr::not(4, Expr::reg(mask)));
        let placed = Expr::and(4, Expr::reg(value), Expr::reg(mask));
        self.store_at(4, addr, Expr::or(4, kept, placed));
        self.commit(updates);
        Ok(())
    }

    pub(super) fn swap(&mut self) -> Result<()> {
        let m = self.mem(0)?;
        let reg = self.reg(1)?;
        let (addr, updates) = self.address(m);
        let addr = self.temp(addr);
        let old = self.temp(Expr::load(4, addr.clone()));
        self.store_at(4, addr, Expr::reg(reg));
        self.set(reg, old);
        self.commit(updates);
        Ok(())
    }

    /// CMPSWAP.W: store `D[a]` when memory equals `D[a+1]`; `D[a]` gets the
    /// old memory word either way.
    pub(super) fn cmp_swap(&mut self) -> Result<()> {
        let m = self.mem(0)?;
        let (value, expected) = self.value_mask(1)?;
        let (addr, updates) = self.address(m);
        let addr = self.temp(addr);
        let old = self.temp(Expr::load(4, addr.clone()));
        let (hit, miss) = (self.label(), self.label());
        self.emit(Stmt::If {
            cond: Expr::cmp(CmpOp::Eq, 4, old.clone(), Expr::reg(expected)),
            then_label: hit,
            else_label: miss,
        });
        self.mark(hit);
        self.store_at(4, addr, Expr::reg(value));
        self.mark(miss);
        self.set(value, old);
        self.commit(updates);
        Ok(())
    }

    /// SWAPMSK.W: masked swap, `D[a]` gets the old memory word.
    pub(super) fn swap_mask(&mut self) -> Result<()> {
        let m = self.mem(0)?;
        let (value, mask) = self.value_mask(1)?;
        let (addr, updates) = self.address(m);
        let addr = self.temp(addr);
        let old = self.temp(Expr::load(4, addr.clone()));
        let kept = Expr::and(4, old.clone(), Expr::not(4, Expr::reg(mask)));
        let placed = Expr::and(4, Expr::reg(value), Expr::reg(mask));
        self.store_at(4, addr, Expr::or(4, kept, placed));
        self.set(value, old);
        self.commit(updates);
        Ok(())
    }

    pub(super) fn context(&mut self, intrinsic: Intrinsic) -> Result<()> {
        let m = self.mem(0)?;
        let (addr, updates) = self.address(m);
        self.intrinsic(intrinsic, context_registers(intrinsic), vec![addr]);
        self.commit(updates);
        Ok(())
    }

    pub(super) fn cache(&mut self, intrinsic: Intrinsic) -> Result<()> {
        let m = self.mem(0)?;
        let (addr, updates) = self.address(m);
        self.intrinsic(intrinsic, Vec::new(), vec![addr]);
        self.commit(updates);
        Ok(())
    }
}

/// Base and index/length registers of a `[p+r]`/`[p+c]` pair.
fn pair_halves(pair: Reg) -> (Reg, Reg) {
    pair.halves().unwrap_or((pair, pair))
}

#[cfg(test)]
mod tests {
    use crate::arch::IsaVariant;
    use crate::decoder::decode;
    use crate::il::{IlTrace, Stmt};
    use crate::lift::lift;
    use crate::regs::Reg;

    fn lift_raw(raw: u32) -> IlTrace {
        let insn = decode(&raw.to_le_bytes(), 0, IsaVariant::V16).expect("decodes");
        let mut il = IlTrace::new();
        lift(&insn, &mut il).expect("lifts");
        il
    }

    #[test]
    fn post_increment_updates_after_the_load() {
        // ld.w d1, [a2+]4
        let il = lift_raw((0x04 << 22) | (4 << 16) | (2 << 12) | (1 << 8) | 0x09);
        assert_eq!(
            il.to_string(),
            "t0 = a2\nd1 = [t0].4\na2 = add.4(t0, 0x4)\n"
        );
    }

    #[test]
    fn circular_access_rewrites_the_index_word() {
        // ld.w d1, [p2+c]4
        let il = lift_raw((0x14 << 22) | (4 << 16) | (2 << 12) | (1 << 8) | 0x29);
        assert!(matches!(
            il.stmts.last(),
            Some(Stmt::SetReg { reg: Reg::A(3), .. })
        ));
    }
}
