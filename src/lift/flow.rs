//! Jumps, calls, returns and conditional branches.

use super::{bit, cmp_op, k, Lifter, Result};
use crate::il::{CmpOp, Expr, IlBuilder, Intrinsic, Stmt};
use crate::isa::Cond;
use crate::regs::{Reg, RA, SP};

/// Registers a return from a CALL restores from the CSA.
fn upper_context() -> Vec<Reg> {
    let mut regs: Vec<Reg> = (10..16).map(Reg::A).collect();
    regs.extend((8..16).map(Reg::D));
    regs.extend([Reg::Psw, Reg::Pcxi]);
    regs
}

fn aligned(reg: Reg) -> Expr {
    Expr::and(4, Expr::reg(reg), Expr::c32(!1))
}

impl<B: IlBuilder + ?Sized> Lifter<'_, B> {
    fn jump_to(&mut self, target: u32) {
        match self.host.label_for_address(target) {
            Some(label) => self.emit(Stmt::Goto(label)),
            None => self.emit(Stmt::Jump(Expr::c32(target))),
        }
    }

    /// `if cond goto target else fall through`, reusing host labels for
    /// addresses the host already knows.
    fn branch(&mut self, cond: Expr, target: u32) {
        let next = self.insn.next();
        let taken = self.host.label_for_address(target);
        let fall = self.host.label_for_address(next);
        let then_label = taken.unwrap_or_else(|| self.label());
        let else_label = fall.unwrap_or_else(|| self.label());
        self.emit(Stmt::If {
            cond,
            then_label,
            else_label,
        });
        if taken.is_none() {
            self.mark(then_label);
            self.emit(Stmt::Jump(Expr::c32(target)));
        }
        if fall.is_none() {
            self.mark(else_label);
        }
    }

    fn last_target(&self) -> Result<u32> {
        self.target(self.arity().saturating_sub(1))
    }

    pub(super) fn jump(&mut self) -> Result<()> {
        let target = self.target(0)?;
        self.jump_to(target);
        Ok(())
    }

    pub(super) fn jump_indirect(&mut self) -> Result<()> {
        let reg = self.reg(0)?;
        let dest = self.temp(aligned(reg));
        self.emit(Stmt::Jump(dest));
        Ok(())
    }

    /// JL/JLA: link in A11 and treat the transfer as a call. No context
    /// is saved, so the callee returns with JI A11.
    pub(super) fn jump_link(&mut self) -> Result<()> {
        let target = self.target(0)?;
        self.set(RA, Expr::c32(self.insn.next()));
        self.emit(Stmt::Call(Expr::c32(target)));
        Ok(())
    }

    pub(super) fn jump_link_indirect(&mut self) -> Result<()> {
        let reg = self.reg(0)?;
        let dest = self.temp(aligned(reg));
        self.set(RA, Expr::c32(self.insn.next()));
        self.emit(Stmt::Call(dest));
        Ok(())
    }

    fn save_and_link(&mut self) {
        self.intrinsic(Intrinsic::SaveUpperContext, vec![Reg::Pcxi], Vec::new());
        self.set(RA, Expr::c32(self.insn.next()));
    }

    pub(super) fn call(&mut self) -> Result<()> {
        let target = self.target(0)?;
        self.save_and_link();
        self.emit(Stmt::Call(Expr::c32(target)));
        Ok(())
    }

    pub(super) fn call_indirect(&mut self) -> Result<()> {
        let reg = self.reg(0)?;
        let dest = self.temp(aligned(reg));
        self.save_and_link();
        self.emit(Stmt::Call(dest));
        Ok(())
    }

    /// FCALL: push A11 on the stack instead of saving a context.
    fn push_link(&mut self) {
        self.set(SP, Expr::sub(4, Expr::reg(SP), k(4, 4)));
        self.emit(Stmt::Store {
            size: 4,
            addr: Expr::reg(SP),
            value: Expr::reg(RA),
        });
        self.set(RA, Expr::c32(self.insn.next()));
    }

    pub(super) fn fast_call(&mut self) -> Result<()> {
        let target = self.target(0)?;
        self.push_link();
        self.emit(Stmt::Call(Expr::c32(target)));
        Ok(())
    }

    pub(super) fn fast_call_indirect(&mut self) -> Result<()> {
        let reg = self.reg(0)?;
        let dest = self.temp(aligned(reg));
        self.push_link();
        self.emit(Stmt::Call(dest));
        Ok(())
    }

    /// RET/RFE: return through A11 and restore the upper context.
    pub(super) fn ret(&mut self) -> Result<()> {
        let dest = self.temp(aligned(RA));
        self.intrinsic(Intrinsic::RestoreUpperContext, upper_context(), Vec::new());
        self.emit(Stmt::Ret(dest));
        Ok(())
    }

    pub(super) fn fast_ret(&mut self) -> Result<()> {
        let dest = self.temp(aligned(RA));
        self.set(RA, Expr::load(4, Expr::reg(SP)));
        self.set(SP, Expr::add(4, Expr::reg(SP), k(4, 4)));
        self.emit(Stmt::Ret(dest));
        Ok(())
    }

    pub(super) fn rfm(&mut self) -> Result<()> {
        let dest = self.temp(Expr::reg(RA));
        self.intrinsic(
            Intrinsic::RestoreDebug,
            vec![Reg::Pcxi, Reg::Psw, SP, RA],
            Vec::new(),
        );
        self.emit(Stmt::Ret(dest));
        Ok(())
    }

    /// Compare the first operand against the second (or zero) and branch.
    pub(super) fn cond_jump(&mut self, cond: Cond) -> Result<()> {
        let lhs = self.val(0)?;
        let rhs = if self.arity() == 3 {
            self.val(1)?
        } else {
            k(4, 0)
        };
        let target = self.last_target()?;
        self.branch(Expr::cmp(cmp_op(cond), 4, lhs, rhs), target);
        Ok(())
    }

    pub(super) fn jump_bit(&mut self, set: bool) -> Result<()> {
        let value = self.val(0)?;
        let n = self.imm(1)? as u32;
        let target = self.target(2)?;
        let want = if set { 1 } else { 0 };
        self.branch(Expr::cmp(CmpOp::Eq, 1, bit(value, n), k(1, want)), target);
        Ok(())
    }

    /// JNED/JNEI: compare, then step `Da`, then branch on the comparison.
    pub(super) fn jump_ne_step(&mut self, step: i8) -> Result<()> {
        let reg = self.reg(0)?;
        let rhs = self.val(1)?;
        let target = self.target(2)?;
        let differ = self.temp(Expr::cmp(CmpOp::Ne, 4, Expr::reg(reg), rhs));
        self.set(reg, Expr::add(4, Expr::reg(reg), Expr::c32(step as i32 as u32)));
        self.branch(Expr::cmp(CmpOp::Ne, 4, differ, k(4, 0)), target);
        Ok(())
    }

    /// LOOP: branch while `Ab` was non-zero, decrementing it either way.
    pub(super) fn loop_(&mut self) -> Result<()> {
        let reg = self.reg(0)?;
        let target = self.target(1)?;
        let again = self.temp(Expr::cmp(CmpOp::Ne, 4, Expr::reg(reg), k(4, 0)));
        self.set(reg, Expr::sub(4, Expr::reg(reg), k(4, 1)));
        self.branch(Expr::cmp(CmpOp::Ne, 4, again, k(4, 0)), target);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::arch::IsaVariant;
    use crate::decoder::decode;
    use crate::il::{IlBuilder, IlTrace, Stmt};
    use crate::lift::lift;

    #[test]
    fn known_targets_become_gotos() {
        // j +0x10 (16-bit, disp8 = 8)
        let insn = decode(&[0x3C, 0x08], 0x100, IsaVariant::V16).expect("decodes");
        let mut il = IlTrace::new();
        let label = il.bind_address(0x110);
        lift(&insn, &mut il).expect("lifts");
        assert_eq!(il.stmts, vec![Stmt::Goto(label)]);
    }

    #[test]
    fn unknown_branch_edges_get_fresh_labels() {
        // jz d15, +8
        let insn = decode(&[0x6E, 0x04], 0x100, IsaVariant::V16).expect("decodes");
        let mut il = IlTrace::new();
        lift(&insn, &mut il).expect("lifts");
        let text = il.to_string();
        assert!(text.starts_with("if (cmp_eq.4(d15, 0x0)) goto L0 else goto L1\nL0:\njump(0x108)\nL1:\n"));
        assert!(il.new_label().0 >= 2);
    }
}
