//! Core-register moves, traps and the opaque system/DSP intrinsics.

use super::{Lifter, Result};
use crate::decoder::Operand;
use crate::flags::Flag;
use crate::il::{Expr, IlBuilder, Intrinsic, Stmt};
use crate::regs::{canonical_sysreg, Reg};

fn lower_context() -> Vec<Reg> {
    let mut regs: Vec<Reg> = (2..8).map(Reg::A).collect();
    regs.extend((0..8).map(Reg::D));
    regs.extend([Reg::A(11), Reg::Pcxi]);
    regs
}

impl<B: IlBuilder + ?Sized> Lifter<'_, B> {
    fn inputs(&self, from: usize) -> Result<Vec<Expr>> {
        (from..self.arity()).map(|i| self.val(i)).collect()
    }

    pub(super) fn sys(&mut self, intrinsic: Intrinsic) -> Result<()> {
        let (outputs, inputs) = match intrinsic {
            Intrinsic::DisableSave => (vec![self.reg(0)?], Vec::new()),
            Intrinsic::SaveLowerContext | Intrinsic::Bisr => (vec![Reg::Pcxi], self.inputs(0)?),
            Intrinsic::RestoreLowerContext => (lower_context(), Vec::new()),
            _ => (Vec::new(), self.inputs(0)?),
        };
        self.intrinsic(intrinsic, outputs, inputs);
        Ok(())
    }

    /// TRAPV/TRAPSV: trap when the flag is set.
    pub(super) fn trap(&mut self, flag: Flag) -> Result<()> {
        let (raise, skip) = (self.label(), self.label());
        self.emit(Stmt::If {
            cond: Expr::flag(flag),
            then_label: raise,
            else_label: skip,
        });
        self.mark(raise);
        self.intrinsic(Intrinsic::Trap, Vec::new(), Vec::new());
        self.mark(skip);
        Ok(())
    }

    fn sysreg(&self, i: usize) -> Result<u16> {
        match *self.op(i)? {
            Operand::SysReg(idx) => Ok(idx),
            _ => Err(self.bad(i)),
        }
    }

    pub(super) fn mfcr(&mut self) -> Result<()> {
        let dst = self.reg(0)?;
        let idx = self.sysreg(1)?;
        self.intrinsic(Intrinsic::Mfcr, vec![dst], vec![Expr::konst(2, idx as u64)]);
        Ok(())
    }

    /// MTCR names the architectural register it writes when it has one
    /// (PSW, PCXI), so flag and context tracking see the update.
    pub(super) fn mtcr(&mut self) -> Result<()> {
        let idx = self.sysreg(0)?;
        let src = self.val(1)?;
        let target = canonical_sysreg(idx).unwrap_or(Reg::Sys(idx));
        self.intrinsic(
            Intrinsic::Mtcr,
            vec![target],
            vec![Expr::konst(2, idx as u64), src],
        );
        Ok(())
    }

    /// First operand is written, the rest are read.
    pub(super) fn opaque(&mut self, intrinsic: Intrinsic) -> Result<()> {
        let dst = self.reg(0)?;
        let inputs = self.inputs(1)?;
        self.intrinsic(intrinsic, vec![dst], inputs);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::arch::IsaVariant;
    use crate::decoder::decode;
    use crate::il::IlTrace;
    use crate::lift::lift;

    fn lift_raw(raw: u32) -> String {
        let insn = decode(&raw.to_le_bytes(), 0, IsaVariant::V16).expect("decodes");
        let mut il = IlTrace::new();
        lift(&insn, &mut il).expect("lifts");
        il.to_string()
    }

    #[test]
    fn mfcr_reads_by_index() {
        // mfcr d1, #0xfe04
        assert_eq!(lift_raw((1 << 28) | (0xFE04 << 12) | 0x4D), "d1 = mfcr(0xfe04)\n");
    }

    #[test]
    fn trapv_is_guarded() {
        // trapv
        let text = lift_raw((0x14 << 22) | 0x0D);
        assert_eq!(text, "if (flag:v) goto L0 else goto L1\nL0:\ntrap()\nL1:\n");
    }
}
