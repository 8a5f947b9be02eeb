//! Control-flow facet: length plus the edges a host should follow.

use serde::Serialize;

use crate::decoder::{Insn, Operand};
use crate::isa::Flow;
use crate::regs::Reg;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BranchKind {
    Unconditional(u32),
    /// Taken edge of a conditional branch.
    True(u32),
    /// Fall-through edge of a conditional branch.
    False(u32),
    Call(u32),
    Indirect(Reg),
    IndirectCall(Reg),
    Return,
    /// Control may leave but the destination is not known statically.
    Unresolved,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstructionInfo {
    pub length: u8,
    pub branches: Vec<BranchKind>,
}

fn first_reg(insn: &Insn) -> Option<Reg> {
    insn.operands.iter().find_map(|op| match op {
        Operand::Reg(r) => Some(*r),
        _ => None,
    })
}

pub fn classify(insn: &Insn) -> InstructionInfo {
    let target = insn.target();
    let branches = match (insn.row.sem.flow(), target) {
        (Flow::FallThrough, _) => vec![],
        (Flow::Unconditional, Some(t)) => vec![BranchKind::Unconditional(t)],
        (Flow::Conditional, Some(t)) => vec![BranchKind::True(t), BranchKind::False(insn.next())],
        (Flow::Call, Some(t)) => vec![BranchKind::Call(t)],
        (Flow::Indirect, _) => first_reg(insn)
            .map(|r| vec![BranchKind::Indirect(r)])
            .unwrap_or_else(|| vec![BranchKind::Unresolved]),
        (Flow::IndirectCall, _) => first_reg(insn)
            .map(|r| vec![BranchKind::IndirectCall(r)])
            .unwrap_or_else(|| vec![BranchKind::Unresolved]),
        (Flow::Return, _) => vec![BranchKind::Return],
        (Flow::Unresolved, _) | (_, None) => vec![BranchKind::Unresolved],
    };
    InstructionInfo {
        length: insn.len,
        branches,
    }
}
