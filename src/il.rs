//! Low-level IL the lifter emits.
//!
//! Values are plain bit patterns of 1, 2, 4 or 8 bytes; floats travel as
//! their IEEE single-precision bits. Control flow inside one instruction is
//! expressed with labels (`If`/`Goto`/`Mark`) so any host IL with
//! conditional gotos can take the statements as they are.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::flags::Flag;
use crate::regs::Reg;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Label(pub u32);

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnOp {
    Neg,
    Not,
    /// Count leading zeros within the operand size.
    Clz,
    IntToFloat,
    UIntToFloat,
    /// Round to nearest, saturating.
    FloatToInt,
    FloatToIntTrunc,
    FloatToUInt,
    FloatToUIntTrunc,
    /// Reciprocal square root estimate.
    FloatRsqrt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    DivS,
    DivU,
    ModS,
    ModU,
    And,
    Or,
    Xor,
    Shl,
    Lsr,
    Asr,
    FAdd,
    FSub,
    FMul,
    FDiv,
    /// `lhs * 2^rhs`, rhs a signed integer.
    FScale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CmpOp {
    Eq,
    Ne,
    Slt,
    Sle,
    Sgt,
    Sge,
    Ult,
    Ule,
    Ugt,
    Uge,
    FLt,
    FEq,
    FGt,
    /// Either operand is a NaN.
    FUnord,
}

/// Float operation whose IEEE exception an [`Expr::FpStatus`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FpOp {
    Add,
    Sub,
    Mul,
    Div,
    /// `args[0] + args[1] * args[2]`
    MulAdd,
    /// `args[0] - args[1] * args[2]`
    MulSub,
    Compare,
    ToInt,
    ToUInt,
    FromInt,
    FromUInt,
    Rsqrt,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    Const {
        size: u8,
        value: u64,
    },
    Reg(Reg),
    /// One PSW status bit, as a 1-byte 0/1 value.
    Flag(Flag),
    Load {
        size: u8,
        addr: Box<Expr>,
    },
    Unary {
        op: UnOp,
        size: u8,
        arg: Box<Expr>,
    },
    Binary {
        op: BinOp,
        size: u8,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Extend {
        signed: bool,
        size: u8,
        arg: Box<Expr>,
    },
    /// Truncation to the low `size` bytes.
    Low {
        size: u8,
        arg: Box<Expr>,
    },
    /// 0/1 result of comparing two `size`-byte operands.
    Cmp {
        cond: CmpOp,
        size: u8,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// 0/1: did `op` over `args` raise the exception `flag` names.
    FpStatus {
        flag: Flag,
        op: FpOp,
        args: Vec<Expr>,
    },
}

impl Expr {
    pub fn konst(size: u8, value: u64) -> Self {
        Expr::Const { size, value }
    }

    pub fn c32(value: u32) -> Self {
        Expr::konst(4, value as u64)
    }

    pub fn reg(reg: Reg) -> Self {
        Expr::Reg(reg)
    }

    pub fn flag(flag: Flag) -> Self {
        Expr::Flag(flag)
    }

    pub fn load(size: u8, addr: Expr) -> Self {
        Expr::Load {
            size,
            addr: Box::new(addr),
        }
    }

    pub fn unary(op: UnOp, size: u8, arg: Expr) -> Self {
        Expr::Unary {
            op,
            size,
            arg: Box::new(arg),
        }
    }

    pub fn binary(op: BinOp, size: u8, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            size,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn add(size: u8, lhs: Expr, rhs: Expr) -> Self {
        Expr::binary(BinOp::Add, size, lhs, rhs)
    }

    pub fn sub(size: u8, lhs: Expr, rhs: Expr) -> Self {
        Expr::binary(BinOp::Sub, size, lhs, rhs)
    }

    pub fn mul(size: u8, lhs: Expr, rhs: Expr) -> Self {
        Expr::binary(BinOp::Mul, size, lhs, rhs)
    }

    pub fn and(size: u8, lhs: Expr, rhs: Expr) -> Self {
        Expr::binary(BinOp::And, size, lhs, rhs)
    }

    pub fn or(size: u8, lhs: Expr, rhs: Expr) -> Self {
        Expr::binary(BinOp::Or, size, lhs, rhs)
    }

    pub fn xor(size: u8, lhs: Expr, rhs: Expr) -> Self {
        Expr::binary(BinOp::Xor, size, lhs, rhs)
    }

    pub fn shl(size: u8, lhs: Expr, rhs: Expr) -> Self {
        Expr::binary(BinOp::Shl, size, lhs, rhs)
    }

    pub fn lsr(size: u8, lhs: Expr, rhs: Expr) -> Self {
        Expr::binary(BinOp::Lsr, size, lhs, rhs)
    }

    pub fn asr(size: u8, lhs: Expr, rhs: Expr) -> Self {
        Expr::binary(BinOp::Asr, size, lhs, rhs)
    }

    pub fn not(size: u8, arg: Expr) -> Self {
        Expr::unary(UnOp::Not, size, arg)
    }

    pub fn sext(size: u8, arg: Expr) -> Self {
        Expr::Extend {
            signed: true,
            size,
            arg: Box::new(arg),
        }
    }

    pub fn zext(size: u8, arg: Expr) -> Self {
        Expr::Extend {
            signed: false,
            size,
            arg: Box::new(arg),
        }
    }

    pub fn low(size: u8, arg: Expr) -> Self {
        Expr::Low {
            size,
            arg: Box::new(arg),
        }
    }

    pub fn cmp(cond: CmpOp, size: u8, lhs: Expr, rhs: Expr) -> Self {
        Expr::Cmp {
            cond,
            size,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn fp_status(flag: Flag, op: FpOp, args: Vec<Expr>) -> Self {
        Expr::FpStatus { flag, op, args }
    }

    /// Result width in bytes.
    pub fn size(&self) -> u8 {
        match self {
            Expr::Const { size, .. }
            | Expr::Load { size, .. }
            | Expr::Unary { size, .. }
            | Expr::Binary { size, .. }
            | Expr::Extend { size, .. }
            | Expr::Low { size, .. } => *size,
            Expr::Reg(reg) => reg.size(),
            Expr::Flag(_) | Expr::Cmp { .. } | Expr::FpStatus { .. } => 1,
        }
    }
}

/// Calls into the platform that the IL does not model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Intrinsic {
    StoreLowerContext,
    StoreUpperContext,
    LoadLowerContext,
    LoadUpperContext,
    SaveLowerContext,
    RestoreLowerContext,
    SaveUpperContext,
    RestoreUpperContext,
    CacheWriteback,
    CacheWritebackInvalidate,
    CacheInvalidate,
    Shuffle,
    Bmerge,
    Parity,
    Crc32,
    Unpack,
    Bsplit,
    Pack,
    Crcn,
    Ixmin,
    IxminU,
    Ixmax,
    IxmaxU,
    Dvadj,
    DvstepU,
    Dvstep,
    TlbDemap,
    TlbFlushA,
    TlbFlushB,
    TlbProbeA,
    TlbProbeI,
    TlbMap,
    Debug,
    Enable,
    Disable,
    Restore,
    DisableSave,
    Dsync,
    Isync,
    Wait,
    Bisr,
    Syscall,
    Trap,
    Mfcr,
    Mtcr,
    /// Advance the index half of a bit-reverse addressing pair.
    BitReverseStep,
    RestoreDebug,
}

impl Intrinsic {
    pub fn name(self) -> &'static str {
        match self {
            Intrinsic::StoreLowerContext => "store_lower_context",
            Intrinsic::StoreUpperContext => "store_upper_context",
            Intrinsic::LoadLowerContext => "load_lower_context",
            Intrinsic::LoadUpperContext => "load_upper_context",
            Intrinsic::SaveLowerContext => "save_lower_context",
            Intrinsic::RestoreLowerContext => "restore_lower_context",
            Intrinsic::SaveUpperContext => "save_upper_context",
            Intrinsic::RestoreUpperContext => "restore_upper_context",
            Intrinsic::CacheWriteback => "cache_writeback",
            Intrinsic::CacheWritebackInvalidate => "cache_writeback_invalidate",
            Intrinsic::CacheInvalidate => "cache_invalidate",
            Intrinsic::Shuffle => "shuffle",
            Intrinsic::Bmerge => "bmerge",
            Intrinsic::Parity => "parity",
            Intrinsic::Crc32 => "crc32",
            Intrinsic::Unpack => "unpack",
            Intrinsic::Bsplit => "bsplit",
            Intrinsic::Pack => "pack",
            Intrinsic::Crcn => "crcn",
            Intrinsic::Ixmin => "ixmin",
            Intrinsic::IxminU => "ixmin_u",
            Intrinsic::Ixmax => "ixmax",
            Intrinsic::IxmaxU => "ixmax_u",
            Intrinsic::Dvadj => "dvadj",
            Intrinsic::DvstepU => "dvstep_u",
            Intrinsic::Dvstep => "dvstep",
            Intrinsic::TlbDemap => "tlb_demap",
            Intrinsic::TlbFlushA => "tlb_flush_a",
            Intrinsic::TlbFlushB => "tlb_flush_b",
            Intrinsic::TlbProbeA => "tlb_probe_a",
            Intrinsic::TlbProbeI => "tlb_probe_i",
            Intrinsic::TlbMap => "tlb_map",
            Intrinsic::Debug => "debug",
            Intrinsic::Enable => "enable_interrupts",
            Intrinsic::Disable => "disable_interrupts",
            Intrinsic::Restore => "restore_interrupts",
            Intrinsic::DisableSave => "disable_interrupts_save",
            Intrinsic::Dsync => "dsync",
            Intrinsic::Isync => "isync",
            Intrinsic::Wait => "wait",
            Intrinsic::Bisr => "bisr",
            Intrinsic::Syscall => "syscall",
            Intrinsic::Trap => "trap",
            Intrinsic::Mfcr => "mfcr",
            Intrinsic::Mtcr => "mtcr",
            Intrinsic::BitReverseStep => "bit_reverse_step",
            Intrinsic::RestoreDebug => "restore_debug",
        }
    }
}

impl fmt::Display for Intrinsic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Stmt {
    SetReg {
        reg: Reg,
        value: Expr,
    },
    SetFlag {
        flag: Flag,
        value: Expr,
    },
    Store {
        size: u8,
        addr: Expr,
        value: Expr,
    },
    Jump(Expr),
    Call(Expr),
    /// Return through the given address.
    Ret(Expr),
    If {
        cond: Expr,
        then_label: Label,
        else_label: Label,
    },
    Goto(Label),
    /// Places a label at this point in the statement list.
    Mark(Label),
    Intrinsic {
        intrinsic: Intrinsic,
        outputs: Vec<Reg>,
        inputs: Vec<Expr>,
    },
    Nop,
    Undefined,
}

/// Sink the lifter writes into.
pub trait IlBuilder {
    fn emit(&mut self, stmt: Stmt);

    fn new_label(&mut self) -> Label;

    /// Label the host already placed at `addr`, if it knows one. Branches
    /// to such addresses become gotos instead of jumps.
    fn label_for_address(&mut self, _addr: u32) -> Option<Label> {
        None
    }
}

/// In-memory builder: collects statements for printing, tests and the
/// reference evaluator.
#[derive(Debug, Default, Clone, Serialize)]
pub struct IlTrace {
    pub stmts: Vec<Stmt>,
    next_label: u32,
    #[serde(skip)]
    known: HashMap<u32, Label>,
}

impl IlTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a label for `addr` so later branches there resolve to it.
    pub fn bind_address(&mut self, addr: u32) -> Label {
        if let Some(label) = self.known.get(&addr) {
            return *label;
        }
        let label = self.new_label();
        self.known.insert(addr, label);
        label
    }

    /// Emit the `Mark` for a label bound with [`IlTrace::bind_address`].
    pub fn mark_address(&mut self, addr: u32) {
        let label = self.bind_address(addr);
        self.stmts.push(Stmt::Mark(label));
    }

    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }

    pub fn clear(&mut self) {
        self.stmts.clear();
    }
}

impl IlBuilder for IlTrace {
    fn emit(&mut self, stmt: Stmt) {
        self.stmts.push(stmt);
    }

    fn new_label(&mut self) -> Label {
        let label = Label(self.next_label);
        self.next_label += 1;
        label
    }

    fn label_for_address(&mut self, addr: u32) -> Option<Label> {
        self.known.get(&addr).copied()
    }
}

impl fmt::Display for IlTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.stmts {
            writeln!(f, "{stmt}")?;
        }
        Ok(())
    }
}

fn unop_name(op: UnOp) -> &'static str {
    match op {
        UnOp::Neg => "neg",
        UnOp::Not => "not",
        UnOp::Clz => "clz",
        UnOp::IntToFloat => "itof",
        UnOp::UIntToFloat => "utof",
        UnOp::FloatToInt => "ftoi",
        UnOp::FloatToIntTrunc => "ftoiz",
        UnOp::FloatToUInt => "ftou",
        UnOp::FloatToUIntTrunc => "ftouz",
        UnOp::FloatRsqrt => "frsqrt",
    }
}

fn binop_name(op: BinOp) -> &'static str {
    match op {
        BinOp::Add => "add",
        BinOp::Sub => "sub",
        BinOp::Mul => "mul",
        BinOp::DivS => "divs",
        BinOp::DivU => "divu",
        BinOp::ModS => "mods",
        BinOp::ModU => "modu",
        BinOp::And => "and",
        BinOp::Or => "or",
        BinOp::Xor => "xor",
        BinOp::Shl => "lsl",
        BinOp::Lsr => "lsr",
        BinOp::Asr => "asr",
        BinOp::FAdd => "fadd",
        BinOp::FSub => "fsub",
        BinOp::FMul => "fmul",
        BinOp::FDiv => "fdiv",
        BinOp::FScale => "fscale",
    }
}

fn cmp_name(op: CmpOp) -> &'static str {
    match op {
        CmpOp::Eq => "eq",
        CmpOp::Ne => "ne",
        CmpOp::Slt => "slt",
        CmpOp::Sle => "sle",
        CmpOp::Sgt => "sgt",
        CmpOp::Sge => "sge",
        CmpOp::Ult => "ult",
        CmpOp::Ule => "ule",
        CmpOp::Ugt => "ugt",
        CmpOp::Uge => "uge",
        CmpOp::FLt => "flt",
        CmpOp::FEq => "feq",
        CmpOp::FGt => "fgt",
        CmpOp::FUnord => "funord",
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Const { value, .. } => write!(f, "{value:#x}"),
            Expr::Reg(reg) => write!(f, "{reg}"),
            Expr::Flag(flag) => write!(f, "flag:{flag}"),
            Expr::Load { size, addr } => write!(f, "[{addr}].{size}"),
            Expr::Unary { op, size, arg } => write!(f, "{}.{size}({arg})", unop_name(*op)),
            Expr::Binary { op, size, lhs, rhs } => {
                write!(f, "{}.{size}({lhs}, {rhs})", binop_name(*op))
            }
            Expr::Extend { signed, size, arg } => {
                write!(f, "{}.{size}({arg})", if *signed { "sx" } else { "zx" })
            }
            Expr::Low { size, arg } => write!(f, "low.{size}({arg})"),
            Expr::Cmp {
                cond,
                size,
                lhs,
                rhs,
            } => write!(f, "cmp_{}.{size}({lhs}, {rhs})", cmp_name(*cond)),
            Expr::FpStatus { flag, op, args } => {
                write!(f, "fpstatus_{flag}({op:?}")?;
                for arg in args {
                    write!(f, ", {arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::SetReg { reg, value } => write!(f, "{reg} = {value}"),
            Stmt::SetFlag { flag, value } => write!(f, "flag:{flag} = {value}"),
            Stmt::Store { size, addr, value } => write!(f, "[{addr}].{size} = {value}"),
            Stmt::Jump(target) => write!(f, "jump({target})"),
            Stmt::Call(target) => write!(f, "call({target})"),
            Stmt::Ret(target) => write!(f, "ret({target})"),
            Stmt::If {
                cond,
                then_label,
                else_label,
            } => write!(f, "if ({cond}) goto {then_label} else goto {else_label}"),
            Stmt::Goto(label) => write!(f, "goto {label}"),
            Stmt::Mark(label) => write!(f, "{label}:"),
            Stmt::Intrinsic {
                intrinsic,
                outputs,
                inputs,
            } => {
                if !outputs.is_empty() {
                    let outs: Vec<String> = outputs.iter().map(|r| r.name()).collect();
                    write!(f, "{} = ", outs.join(", "))?;
                }
                let ins: Vec<String> = inputs.iter().map(|e| e.to_string()).collect();
                write!(f, "{intrinsic}({})", ins.join(", "))
            }
            Stmt::Nop => f.write_str("nop"),
            Stmt::Undefined => f.write_str("undefined"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_fresh() {
        let mut il = IlTrace::new();
        let a = il.new_label();
        let b = il.new_label();
        assert_ne!(a, b);
    }

    #[test]
    fn bound_addresses_resolve() {
        let mut il = IlTrace::new();
        assert_eq!(il.label_for_address(0x100), None);
        let l = il.bind_address(0x100);
        assert_eq!(il.bind_address(0x100), l);
        assert_eq!(il.label_for_address(0x100), Some(l));
        il.mark_address(0x100);
        assert_eq!(il.stmts, vec![Stmt::Mark(l)]);
    }

    #[test]
    fn expression_sizes() {
        let e = Expr::add(4, Expr::reg(Reg::D(0)), Expr::c32(1));
        assert_eq!(e.size(), 4);
        assert_eq!(Expr::reg(Reg::E(2)).size(), 8);
        assert_eq!(Expr::cmp(CmpOp::Eq, 4, e.clone(), Expr::c32(0)).size(), 1);
        assert_eq!(Expr::sext(8, e).size(), 8);
    }

    #[test]
    fn statements_print() {
        let s = Stmt::SetReg {
            reg: Reg::D(2),
            value: Expr::add(4, Expr::reg(Reg::D(0)), Expr::reg(Reg::D(1))),
        };
        assert_eq!(s.to_string(), "d2 = add.4(d0, d1)");
        let s = Stmt::Intrinsic {
            intrinsic: Intrinsic::Mfcr,
            outputs: vec![Reg::D(1)],
            inputs: vec![Expr::konst(2, 0xFE04)],
        };
        assert_eq!(s.to_string(), "d1 = mfcr(0xfe04)");
    }
}
