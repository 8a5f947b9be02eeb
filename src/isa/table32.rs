//! 32-bit encodings.

use super::Opnd::*;
use super::{
    row, AccOp, BoMode, Cond, CountKind, DvKind, FConv, FOp, Group, HalfMode, Lane, LogicOp,
    MacAcc, MemKind, PackedOp, PmResult, QSrc, Row, Sem, ShiftKind, ABS, REL,
};
use crate::fields::Format;
use crate::flags::{Flag, FlagWrite as F};
use crate::il::Intrinsic;
use crate::isa::Sign::{Signed as S, Unsigned as U};

const POST: super::Opnd = Bo(BoMode::PostInc);
const PRE: super::Opnd = Bo(BoMode::PreInc);
const BASE: super::Opnd = Bo(BoMode::Base);
const BREV: super::Opnd = Bo(BoMode::BitRev);
const CIRC: super::Opnd = Bo(BoMode::Circ);

const fn mac(sub: bool, sign: super::Sign, wide: bool, sat: bool) -> Sem {
    Sem::Mac { sub, sign, wide, sat }
}

const fn mul(sign: super::Sign, wide: bool, sat: bool) -> Sem {
    Sem::Mul { sign, wide, sat }
}

const fn pm(mode: HalfMode, hi: MacAcc, lo: MacAcc, result: PmResult, sat: bool) -> Sem {
    Sem::PackedMul { mode, hi, lo, result, sat }
}

const fn q(src: QSrc, wide: bool, acc: MacAcc, round: bool, sat: bool) -> Sem {
    Sem::QMul { src, wide, acc, round, sat }
}

const fn packed(op: PackedOp, lane: Lane) -> Sem {
    Sem::Packed(op, lane)
}

const ADDR: &[Row] = &[
    row(0x00, "mov.aa", &[Ac, Ab], Sem::Mov, F::NONE),
    row(0x01, "add.a", &[Ac, Aa, Ab], Sem::Add, F::NONE),
    row(0x02, "sub.a", &[Ac, Aa, Ab], Sem::Sub, F::NONE),
    row(0x40, "eq.a", &[Dc, Aa, Ab], Sem::Compare(Cond::Eq), F::NONE),
    row(0x41, "ne.a", &[Dc, Aa, Ab], Sem::Compare(Cond::Ne), F::NONE),
    row(0x42, "lt.a", &[Dc, Aa, Ab], Sem::Compare(Cond::LtU), F::NONE),
    row(0x43, "ge.a", &[Dc, Aa, Ab], Sem::Compare(Cond::GeU), F::NONE),
    row(0x48, "eqz.a", &[Dc, Aa], Sem::Compare(Cond::Eq), F::NONE),
    row(0x49, "nez.a", &[Dc, Aa], Sem::Compare(Cond::Ne), F::NONE),
    row(0x4C, "mov.d", &[Dc, Ab], Sem::Mov, F::NONE),
    row(0x60, "addsc.a", &[Ac, Ab, Da, N], Sem::AddScaled, F::NONE),
    row(0x62, "addsc.at", &[Ac, Ab, Da], Sem::AddScaledT, F::NONE),
    row(0x63, "mov.a", &[Ac, Db], Sem::Mov, F::NONE),
];

const MADD_RRR2: &[Row] = &[
    row(0x0A, "madd", &[Dc, Dd, Da, Db], mac(false, S, false, false), F::VSVAVSAV),
    row(0x6A, "madd", &[Ec, Ed, Da, Db], mac(false, S, true, false), F::VSVAVSAV),
    row(0x8A, "madds", &[Dc, Dd, Da, Db], mac(false, S, false, true), F::VSVAVSAV),
    row(0xEA, "madds", &[Ec, Ed, Da, Db], mac(false, S, true, true), F::VSVAVSAV),
    row(0x68, "madd.u", &[Ec, Ed, Da, Db], mac(false, U, true, false), F::VSVAVSAV),
    row(0x88, "madds.u", &[Dc, Dd, Da, Db], mac(false, U, false, true), F::VSVAVSAV),
    row(0xE8, "madds.u", &[Ec, Ed, Da, Db], mac(false, U, true, true), F::VSVAVSAV),
];

const MSUB_RRR2: &[Row] = &[
    row(0x0A, "msub", &[Dc, Dd, Da, Db], mac(true, S, false, false), F::VSVAVSAV),
    row(0x6A, "msub", &[Ec, Ed, Da, Db], mac(true, S, true, false), F::VSVAVSAV),
    row(0x8A, "msubs", &[Dc, Dd, Da, Db], mac(true, S, false, true), F::VSVAVSAV),
    row(0xEA, "msubs", &[Ec, Ed, Da, Db], mac(true, S, true, true), F::VSVAVSAV),
    row(0x68, "msub.u", &[Ec, Ed, Da, Db], mac(true, U, true, false), F::VSVAVSAV),
    row(0x88, "msubs.u", &[Dc, Dd, Da, Db], mac(true, U, false, true), F::VSVAVSAV),
    row(0xE8, "msubs.u", &[Ec, Ed, Da, Db], mac(true, U, true, true), F::VSVAVSAV),
];

const MADD_RCR: &[Row] = &[
    row(0x01, "madd", &[Dc, Dd, Da, C9s], mac(false, S, false, false), F::VSVAVSAV),
    row(0x03, "madd", &[Ec, Ed, Da, C9s], mac(false, S, true, false), F::VSVAVSAV),
    row(0x05, "madds", &[Dc, Dd, Da, C9s], mac(false, S, false, true), F::VSVAVSAV),
    row(0x07, "madds", &[Ec, Ed, Da, C9s], mac(false, S, true, true), F::VSVAVSAV),
    row(0x02, "madd.u", &[Ec, Ed, Da, C9u], mac(false, U, true, false), F::VSVAVSAV),
    row(0x04, "madds.u", &[Dc, Dd, Da, C9u], mac(false, U, false, true), F::VSVAVSAV),
    row(0x06, "madds.u", &[Ec, Ed, Da, C9u], mac(false, U, true, true), F::VSVAVSAV),
];

const MSUB_RCR: &[Row] = &[
    row(0x01, "msub", &[Dc, Dd, Da, C9s], mac(true, S, false, false), F::VSVAVSAV),
    row(0x03, "msub", &[Ec, Ed, Da, C9s], mac(true, S, true, false), F::VSVAVSAV),
    row(0x05, "msubs", &[Dc, Dd, Da, C9s], mac(true, S, false, true), F::VSVAVSAV),
    row(0x07, "msubs", &[Ec, Ed, Da, C9s], mac(true, S, true, true), F::VSVAVSAV),
    row(0x02, "msub.u", &[Ec, Ed, Da, C9u], mac(true, U, true, false), F::VSVAVSAV),
    row(0x04, "msubs.u", &[Dc, Dd, Da, C9u], mac(true, U, false, true), F::VSVAVSAV),
    row(0x06, "msubs.u", &[Ec, Ed, Da, C9u], mac(true, U, true, true), F::VSVAVSAV),
];

const ABS_LDB: &[Row] = &[
    row(0x00, "ld.b", &[Da, MemAbs], Sem::Load(MemKind::B), F::NONE),
    row(0x01, "ld.bu", &[Da, MemAbs], Sem::Load(MemKind::Bu), F::NONE),
    row(0x02, "ld.h", &[Da, MemAbs], Sem::Load(MemKind::H), F::NONE),
    row(0x03, "ld.hu", &[Da, MemAbs], Sem::Load(MemKind::Hu), F::NONE),
];

const ABS_LDW: &[Row] = &[
    row(0x00, "ld.w", &[Da, MemAbs], Sem::Load(MemKind::W), F::NONE),
    row(0x01, "ld.d", &[Ea, MemAbs], Sem::Load(MemKind::D), F::NONE),
    row(0x02, "ld.a", &[Aa, MemAbs], Sem::Load(MemKind::A), F::NONE),
    row(0x03, "ld.da", &[Pa, MemAbs], Sem::Load(MemKind::Da), F::NONE),
];

const ABS_STORE: &[Row] = &[
    row(0x00, "st.w", &[MemAbs, Da], Sem::Store(MemKind::W), F::NONE),
    row(0x01, "st.d", &[MemAbs, Ea], Sem::Store(MemKind::D), F::NONE),
    row(0x02, "st.a", &[MemAbs, Aa], Sem::Store(MemKind::A), F::NONE),
    row(0x03, "st.da", &[MemAbs, Pa], Sem::Store(MemKind::Da), F::NONE),
];

const ABS_STOREB_H: &[Row] = &[
    row(0x00, "st.b", &[MemAbs, Da], Sem::Store(MemKind::B), F::NONE),
    row(0x02, "st.h", &[MemAbs, Da], Sem::Store(MemKind::H), F::NONE),
];

const ABS_CONTEXT: &[Row] = &[
    row(0x00, "stlcx", &[MemAbs], Sem::Context(Intrinsic::StoreLowerContext), F::NONE),
    row(0x01, "stucx", &[MemAbs], Sem::Context(Intrinsic::StoreUpperContext), F::NONE),
    row(0x02, "ldlcx", &[MemAbs], Sem::Context(Intrinsic::LoadLowerContext), F::NONE),
    row(0x03, "lducx", &[MemAbs], Sem::Context(Intrinsic::LoadUpperContext), F::NONE),
];

const ABS_LDMST_SWAP: &[Row] = &[
    row(0x00, "swap.w", &[MemAbs, Da], Sem::Swap, F::NONE),
    row(0x01, "ldmst", &[MemAbs, Ea], Sem::Ldmst, F::NONE),
];

const BIT_LOGICAL_T1: &[Row] = &[
    row(0x00, "and.t", &[Dc, Da, Pos, Db, Pos2], Sem::BitOp(LogicOp::And, None), F::NONE),
    row(0x01, "or.t", &[Dc, Da, Pos, Db, Pos2], Sem::BitOp(LogicOp::Or, None), F::NONE),
    row(0x02, "nor.t", &[Dc, Da, Pos, Db, Pos2], Sem::BitOp(LogicOp::Nor, None), F::NONE),
    row(0x03, "andn.t", &[Dc, Da, Pos, Db, Pos2], Sem::BitOp(LogicOp::Andn, None), F::NONE),
];

const BIT_LOGICAL_T2: &[Row] = &[
    row(0x00, "nand.t", &[Dc, Da, Pos, Db, Pos2], Sem::BitOp(LogicOp::Nand, None), F::NONE),
    row(0x01, "orn.t", &[Dc, Da, Pos, Db, Pos2], Sem::BitOp(LogicOp::Orn, None), F::NONE),
    row(0x02, "xnor.t", &[Dc, Da, Pos, Db, Pos2], Sem::BitOp(LogicOp::Xnor, None), F::NONE),
    row(0x03, "xor.t", &[Dc, Da, Pos, Db, Pos2], Sem::BitOp(LogicOp::Xor, None), F::NONE),
];

const BIT_AND_ACC: &[Row] = &[
    row(0x00, "and.and.t", &[Dc, Da, Pos, Db, Pos2], Sem::BitOp(LogicOp::And, Some(AccOp::And)), F::NONE),
    row(0x01, "and.or.t", &[Dc, Da, Pos, Db, Pos2], Sem::BitOp(LogicOp::Or, Some(AccOp::And)), F::NONE),
    row(0x02, "and.nor.t", &[Dc, Da, Pos, Db, Pos2], Sem::BitOp(LogicOp::Nor, Some(AccOp::And)), F::NONE),
    row(0x03, "and.andn.t", &[Dc, Da, Pos, Db, Pos2], Sem::BitOp(LogicOp::Andn, Some(AccOp::And)), F::NONE),
];

const BIT_OR_ACC: &[Row] = &[
    row(0x00, "or.and.t", &[Dc, Da, Pos, Db, Pos2], Sem::BitOp(LogicOp::And, Some(AccOp::Or)), F::NONE),
    row(0x01, "or.or.t", &[Dc, Da, Pos, Db, Pos2], Sem::BitOp(LogicOp::Or, Some(AccOp::Or)), F::NONE),
    row(0x02, "or.nor.t", &[Dc, Da, Pos, Db, Pos2], Sem::BitOp(LogicOp::Nor, Some(AccOp::Or)), F::NONE),
    row(0x03, "or.andn.t", &[Dc, Da, Pos, Db, Pos2], Sem::BitOp(LogicOp::Andn, Some(AccOp::Or)), F::NONE),
];

const BIT_SH_LOGIC1: &[Row] = &[
    row(0x00, "sh.and.t", &[Dc, Da, Pos, Db, Pos2], Sem::BitOp(LogicOp::And, Some(AccOp::Sh)), F::NONE),
    row(0x01, "sh.or.t", &[Dc, Da, Pos, Db, Pos2], Sem::BitOp(LogicOp::Or, Some(AccOp::Sh)), F::NONE),
    row(0x02, "sh.nor.t", &[Dc, Da, Pos, Db, Pos2], Sem::BitOp(LogicOp::Nor, Some(AccOp::Sh)), F::NONE),
    row(0x03, "sh.andn.t", &[Dc, Da, Pos, Db, Pos2], Sem::BitOp(LogicOp::Andn, Some(AccOp::Sh)), F::NONE),
];

const BIT_SH_LOGIC2: &[Row] = &[
    row(0x00, "sh.nand.t", &[Dc, Da, Pos, Db, Pos2], Sem::BitOp(LogicOp::Nand, Some(AccOp::Sh)), F::NONE),
    row(0x01, "sh.orn.t", &[Dc, Da, Pos, Db, Pos2], Sem::BitOp(LogicOp::Orn, Some(AccOp::Sh)), F::NONE),
    row(0x02, "sh.xnor.t", &[Dc, Da, Pos, Db, Pos2], Sem::BitOp(LogicOp::Xnor, Some(AccOp::Sh)), F::NONE),
    row(0x03, "sh.xor.t", &[Dc, Da, Pos, Db, Pos2], Sem::BitOp(LogicOp::Xor, Some(AccOp::Sh)), F::NONE),
];

const BIT_INSERT: &[Row] = &[
    row(0x00, "ins.t", &[Dc, Da, Pos, Db, Pos2], Sem::InsertBit { negate: false }, F::NONE),
    row(0x01, "insn.t", &[Dc, Da, Pos, Db, Pos2], Sem::InsertBit { negate: true }, F::NONE),
];

const BO_LD_POST_PRE_BASE: &[Row] = &[
    row(0x00, "ld.b", &[Da, POST], Sem::Load(MemKind::B), F::NONE),
    row(0x10, "ld.b", &[Da, PRE], Sem::Load(MemKind::B), F::NONE),
    row(0x20, "ld.b", &[Da, BASE], Sem::Load(MemKind::B), F::NONE),
    row(0x01, "ld.bu", &[Da, POST], Sem::Load(MemKind::Bu), F::NONE),
    row(0x11, "ld.bu", &[Da, PRE], Sem::Load(MemKind::Bu), F::NONE),
    row(0x21, "ld.bu", &[Da, BASE], Sem::Load(MemKind::Bu), F::NONE),
    row(0x02, "ld.h", &[Da, POST], Sem::Load(MemKind::H), F::NONE),
    row(0x12, "ld.h", &[Da, PRE], Sem::Load(MemKind::H), F::NONE),
    row(0x22, "ld.h", &[Da, BASE], Sem::Load(MemKind::H), F::NONE),
    row(0x03, "ld.hu", &[Da, POST], Sem::Load(MemKind::Hu), F::NONE),
    row(0x13, "ld.hu", &[Da, PRE], Sem::Load(MemKind::Hu), F::NONE),
    row(0x23, "ld.hu", &[Da, BASE], Sem::Load(MemKind::Hu), F::NONE),
    row(0x04, "ld.w", &[Da, POST], Sem::Load(MemKind::W), F::NONE),
    row(0x14, "ld.w", &[Da, PRE], Sem::Load(MemKind::W), F::NONE),
    row(0x24, "ld.w", &[Da, BASE], Sem::Load(MemKind::W), F::NONE),
    row(0x05, "ld.d", &[Ea, POST], Sem::Load(MemKind::D), F::NONE),
    row(0x15, "ld.d", &[Ea, PRE], Sem::Load(MemKind::D), F::NONE),
    row(0x25, "ld.d", &[Ea, BASE], Sem::Load(MemKind::D), F::NONE),
    row(0x06, "ld.a", &[Aa, POST], Sem::Load(MemKind::A), F::NONE),
    row(0x16, "ld.a", &[Aa, PRE], Sem::Load(MemKind::A), F::NONE),
    row(0x26, "ld.a", &[Aa, BASE], Sem::Load(MemKind::A), F::NONE),
    row(0x07, "ld.da", &[Pa, POST], Sem::Load(MemKind::Da), F::NONE),
    row(0x17, "ld.da", &[Pa, PRE], Sem::Load(MemKind::Da), F::NONE),
    row(0x27, "ld.da", &[Pa, BASE], Sem::Load(MemKind::Da), F::NONE),
    row(0x08, "ld.q", &[Da, POST], Sem::Load(MemKind::Q), F::NONE),
    row(0x18, "ld.q", &[Da, PRE], Sem::Load(MemKind::Q), F::NONE),
    row(0x28, "ld.q", &[Da, BASE], Sem::Load(MemKind::Q), F::NONE),
];

const BO_LD_BITREV_CIRC: &[Row] = &[
    row(0x00, "ld.b", &[Da, BREV], Sem::Load(MemKind::B), F::NONE),
    row(0x10, "ld.b", &[Da, CIRC], Sem::Load(MemKind::B), F::NONE),
    row(0x01, "ld.bu", &[Da, BREV], Sem::Load(MemKind::Bu), F::NONE),
    row(0x11, "ld.bu", &[Da, CIRC], Sem::Load(MemKind::Bu), F::NONE),
    row(0x02, "ld.h", &[Da, BREV], Sem::Load(MemKind::H), F::NONE),
    row(0x12, "ld.h", &[Da, CIRC], Sem::Load(MemKind::H), F::NONE),
    row(0x03, "ld.hu", &[Da, BREV], Sem::Load(MemKind::Hu), F::NONE),
    row(0x13, "ld.hu", &[Da, CIRC], Sem::Load(MemKind::Hu), F::NONE),
    row(0x04, "ld.w", &[Da, BREV], Sem::Load(MemKind::W), F::NONE),
    row(0x14, "ld.w", &[Da, CIRC], Sem::Load(MemKind::W), F::NONE),
    row(0x05, "ld.d", &[Ea, BREV], Sem::Load(MemKind::D), F::NONE),
    row(0x15, "ld.d", &[Ea, CIRC], Sem::Load(MemKind::D), F::NONE),
    row(0x06, "ld.a", &[Aa, BREV], Sem::Load(MemKind::A), F::NONE),
    row(0x16, "ld.a", &[Aa, CIRC], Sem::Load(MemKind::A), F::NONE),
    row(0x07, "ld.da", &[Pa, BREV], Sem::Load(MemKind::Da), F::NONE),
    row(0x17, "ld.da", &[Pa, CIRC], Sem::Load(MemKind::Da), F::NONE),
    row(0x08, "ld.q", &[Da, BREV], Sem::Load(MemKind::Q), F::NONE),
    row(0x18, "ld.q", &[Da, CIRC], Sem::Load(MemKind::Q), F::NONE),
];

const BO_ST_POST_PRE_BASE: &[Row] = &[
    row(0x00, "st.b", &[POST, Da], Sem::Store(MemKind::B), F::NONE),
    row(0x10, "st.b", &[PRE, Da], Sem::Store(MemKind::B), F::NONE),
    row(0x20, "st.b", &[BASE, Da], Sem::Store(MemKind::B), F::NONE),
    row(0x02, "st.h", &[POST, Da], Sem::Store(MemKind::H), F::NONE),
    row(0x12, "st.h", &[PRE, Da], Sem::Store(MemKind::H), F::NONE),
    row(0x22, "st.h", &[BASE, Da], Sem::Store(MemKind::H), F::NONE),
    row(0x04, "st.w", &[POST, Da], Sem::Store(MemKind::W), F::NONE),
    row(0x14, "st.w", &[PRE, Da], Sem::Store(MemKind::W), F::NONE),
    row(0x24, "st.w", &[BASE, Da], Sem::Store(MemKind::W), F::NONE),
    row(0x05, "st.d", &[POST, Ea], Sem::Store(MemKind::D), F::NONE),
    row(0x15, "st.d", &[PRE, Ea], Sem::Store(MemKind::D), F::NONE),
    row(0x25, "st.d", &[BASE, Ea], Sem::Store(MemKind::D), F::NONE),
    row(0x06, "st.a", &[POST, Aa], Sem::Store(MemKind::A), F::NONE),
    row(0x16, "st.a", &[PRE, Aa], Sem::Store(MemKind::A), F::NONE),
    row(0x26, "st.a", &[BASE, Aa], Sem::Store(MemKind::A), F::NONE),
    row(0x07, "st.da", &[POST, Pa], Sem::Store(MemKind::Da), F::NONE),
    row(0x17, "st.da", &[PRE, Pa], Sem::Store(MemKind::Da), F::NONE),
    row(0x27, "st.da", &[BASE, Pa], Sem::Store(MemKind::Da), F::NONE),
    row(0x08, "st.q", &[POST, Da], Sem::Store(MemKind::Q), F::NONE),
    row(0x18, "st.q", &[PRE, Da], Sem::Store(MemKind::Q), F::NONE),
    row(0x28, "st.q", &[BASE, Da], Sem::Store(MemKind::Q), F::NONE),
    row(0x0C, "cachea.w", &[POST], Sem::Cache(Intrinsic::CacheWriteback), F::NONE),
    row(0x1C, "cachea.w", &[PRE], Sem::Cache(Intrinsic::CacheWriteback), F::NONE),
    row(0x2C, "cachea.w", &[BASE], Sem::Cache(Intrinsic::CacheWriteback), F::NONE),
    row(0x0D, "cachea.wi", &[POST], Sem::Cache(Intrinsic::CacheWritebackInvalidate), F::NONE),
    row(0x1D, "cachea.wi", &[PRE], Sem::Cache(Intrinsic::CacheWritebackInvalidate), F::NONE),
    row(0x2D, "cachea.wi", &[BASE], Sem::Cache(Intrinsic::CacheWritebackInvalidate), F::NONE),
    row(0x0E, "cachea.i", &[POST], Sem::Cache(Intrinsic::CacheInvalidate), F::NONE),
    row(0x1E, "cachea.i", &[PRE], Sem::Cache(Intrinsic::CacheInvalidate), F::NONE),
    row(0x2E, "cachea.i", &[BASE], Sem::Cache(Intrinsic::CacheInvalidate), F::NONE),
];

const BO_ST_BITREV_CIRC: &[Row] = &[
    row(0x00, "st.b", &[BREV, Da], Sem::Store(MemKind::B), F::NONE),
    row(0x10, "st.b", &[CIRC, Da], Sem::Store(MemKind::B), F::NONE),
    row(0x02, "st.h", &[BREV, Da], Sem::Store(MemKind::H), F::NONE),
    row(0x12, "st.h", &[CIRC, Da], Sem::Store(MemKind::H), F::NONE),
    row(0x04, "st.w", &[BREV, Da], Sem::Store(MemKind::W), F::NONE),
    row(0x14, "st.w", &[CIRC, Da], Sem::Store(MemKind::W), F::NONE),
    row(0x05, "st.d", &[BREV, Ea], Sem::Store(MemKind::D), F::NONE),
    row(0x15, "st.d", &[CIRC, Ea], Sem::Store(MemKind::D), F::NONE),
    row(0x06, "st.a", &[BREV, Aa], Sem::Store(MemKind::A), F::NONE),
    row(0x16, "st.a", &[CIRC, Aa], Sem::Store(MemKind::A), F::NONE),
    row(0x07, "st.da", &[BREV, Pa], Sem::Store(MemKind::Da), F::NONE),
    row(0x17, "st.da", &[CIRC, Pa], Sem::Store(MemKind::Da), F::NONE),
    row(0x08, "st.q", &[BREV, Da], Sem::Store(MemKind::Q), F::NONE),
    row(0x18, "st.q", &[CIRC, Da], Sem::Store(MemKind::Q), F::NONE),
    row(0x0C, "cachea.w", &[BREV], Sem::Cache(Intrinsic::CacheWriteback), F::NONE),
    row(0x1C, "cachea.w", &[CIRC], Sem::Cache(Intrinsic::CacheWriteback), F::NONE),
    row(0x0D, "cachea.wi", &[BREV], Sem::Cache(Intrinsic::CacheWritebackInvalidate), F::NONE),
    row(0x1D, "cachea.wi", &[CIRC], Sem::Cache(Intrinsic::CacheWritebackInvalidate), F::NONE),
    row(0x0E, "cachea.i", &[BREV], Sem::Cache(Intrinsic::CacheInvalidate), F::NONE),
    row(0x1E, "cachea.i", &[CIRC], Sem::Cache(Intrinsic::CacheInvalidate), F::NONE),
];

const BO_CTX_POST_PRE_BASE: &[Row] = &[
    row(0x00, "swap.w", &[POST, Da], Sem::Swap, F::NONE),
    row(0x10, "swap.w", &[PRE, Da], Sem::Swap, F::NONE),
    row(0x20, "swap.w", &[BASE, Da], Sem::Swap, F::NONE),
    row(0x01, "ldmst", &[POST, Ea], Sem::Ldmst, F::NONE),
    row(0x11, "ldmst", &[PRE, Ea], Sem::Ldmst, F::NONE),
    row(0x21, "ldmst", &[BASE, Ea], Sem::Ldmst, F::NONE),
    row(0x02, "swapmsk.w", &[POST, Ea], Sem::SwapMask, F::NONE).v16(),
    row(0x12, "swapmsk.w", &[PRE, Ea], Sem::SwapMask, F::NONE).v16(),
    row(0x22, "swapmsk.w", &[BASE, Ea], Sem::SwapMask, F::NONE).v16(),
    row(0x03, "cmpswap.w", &[POST, Ea], Sem::CmpSwap, F::NONE).v16(),
    row(0x13, "cmpswap.w", &[PRE, Ea], Sem::CmpSwap, F::NONE).v16(),
    row(0x23, "cmpswap.w", &[BASE, Ea], Sem::CmpSwap, F::NONE).v16(),
    row(0x24, "ldlcx", &[BASE], Sem::Context(Intrinsic::LoadLowerContext), F::NONE),
    row(0x25, "lducx", &[BASE], Sem::Context(Intrinsic::LoadUpperContext), F::NONE),
    row(0x26, "stlcx", &[BASE], Sem::Context(Intrinsic::StoreLowerContext), F::NONE),
    row(0x27, "stucx", &[BASE], Sem::Context(Intrinsic::StoreUpperContext), F::NONE),
    row(0x28, "lea", &[Aa, BASE], Sem::Lea, F::NONE),
];

const BO_LDMST_BITREV_CIRC: &[Row] = &[
    row(0x00, "swap.w", &[BREV, Da], Sem::Swap, F::NONE),
    row(0x10, "swap.w", &[CIRC, Da], Sem::Swap, F::NONE),
    row(0x01, "ldmst", &[BREV, Ea], Sem::Ldmst, F::NONE),
    row(0x11, "ldmst", &[CIRC, Ea], Sem::Ldmst, F::NONE),
    row(0x02, "swapmsk.w", &[BREV, Ea], Sem::SwapMask, F::NONE).v16(),
    row(0x12, "swapmsk.w", &[CIRC, Ea], Sem::SwapMask, F::NONE).v16(),
    row(0x03, "cmpswap.w", &[BREV, Ea], Sem::CmpSwap, F::NONE).v16(),
    row(0x13, "cmpswap.w", &[CIRC, Ea], Sem::CmpSwap, F::NONE).v16(),
];

const RR_ACCUMULATOR: &[Row] = &[
    row(0x00, "add", &[Dc, Da, Db], Sem::Add, F::VSVAVSAV),
    row(0x02, "adds", &[Dc, Da, Db], Sem::AddSat(S), F::VSVAVSAV),
    row(0x03, "adds.u", &[Dc, Da, Db], Sem::AddSat(U), F::VSVAVSAV),
    row(0x04, "addx", &[Dc, Da, Db], Sem::AddExt, F::ALL),
    row(0x05, "addc", &[Dc, Da, Db], Sem::AddCarry, F::ALL),
    row(0x08, "sub", &[Dc, Da, Db], Sem::Sub, F::VSVAVSAV),
    row(0x0A, "subs", &[Dc, Da, Db], Sem::SubSat(S), F::VSVAVSAV),
    row(0x0B, "subs.u", &[Dc, Da, Db], Sem::SubSat(U), F::VSVAVSAV),
    row(0x0C, "subx", &[Dc, Da, Db], Sem::SubExt, F::ALL),
    row(0x0D, "subc", &[Dc, Da, Db], Sem::SubCarry, F::ALL),
    row(0x0E, "absdif", &[Dc, Da, Db], packed(PackedOp::AbsDif, Lane::W), F::VSVAVSAV),
    row(0x0F, "absdifs", &[Dc, Da, Db], packed(PackedOp::AbsDifSat, Lane::W), F::VSVAVSAV),
    row(0x10, "eq", &[Dc, Da, Db], Sem::Compare(Cond::Eq), F::NONE),
    row(0x11, "ne", &[Dc, Da, Db], Sem::Compare(Cond::Ne), F::NONE),
    row(0x12, "lt", &[Dc, Da, Db], Sem::Compare(Cond::Lt), F::NONE),
    row(0x13, "lt.u", &[Dc, Da, Db], Sem::Compare(Cond::LtU), F::NONE),
    row(0x14, "ge", &[Dc, Da, Db], Sem::Compare(Cond::Ge), F::NONE),
    row(0x15, "ge.u", &[Dc, Da, Db], Sem::Compare(Cond::GeU), F::NONE),
    row(0x18, "min", &[Dc, Da, Db], packed(PackedOp::Min(S), Lane::W), F::NONE),
    row(0x19, "min.u", &[Dc, Da, Db], packed(PackedOp::Min(U), Lane::W), F::NONE),
    row(0x1A, "max", &[Dc, Da, Db], packed(PackedOp::Max(S), Lane::W), F::NONE),
    row(0x1B, "max.u", &[Dc, Da, Db], packed(PackedOp::Max(U), Lane::W), F::NONE),
    row(0x1C, "abs", &[Dc, Db], packed(PackedOp::Abs, Lane::W), F::VSVAVSAV),
    row(0x1D, "abss", &[Dc, Db], packed(PackedOp::AbsSat, Lane::W), F::VSVAVSAV),
    row(0x1F, "mov", &[Dc, Db], Sem::Mov, F::NONE),
    row(0x20, "and.eq", &[Dc, Da, Db], Sem::CompareAcc(Cond::Eq, AccOp::And), F::NONE),
    row(0x21, "and.ne", &[Dc, Da, Db], Sem::CompareAcc(Cond::Ne, AccOp::And), F::NONE),
    row(0x22, "and.lt", &[Dc, Da, Db], Sem::CompareAcc(Cond::Lt, AccOp::And), F::NONE),
    row(0x23, "and.lt.u", &[Dc, Da, Db], Sem::CompareAcc(Cond::LtU, AccOp::And), F::NONE),
    row(0x24, "and.ge", &[Dc, Da, Db], Sem::CompareAcc(Cond::Ge, AccOp::And), F::NONE),
    row(0x25, "and.ge.u", &[Dc, Da, Db], Sem::CompareAcc(Cond::GeU, AccOp::And), F::NONE),
    row(0x27, "or.eq", &[Dc, Da, Db], Sem::CompareAcc(Cond::Eq, AccOp::Or), F::NONE),
    row(0x28, "or.ne", &[Dc, Da, Db], Sem::CompareAcc(Cond::Ne, AccOp::Or), F::NONE),
    row(0x29, "or.lt", &[Dc, Da, Db], Sem::CompareAcc(Cond::Lt, AccOp::Or), F::NONE),
    row(0x2A, "or.lt.u", &[Dc, Da, Db], Sem::CompareAcc(Cond::LtU, AccOp::Or), F::NONE),
    row(0x2B, "or.ge", &[Dc, Da, Db], Sem::CompareAcc(Cond::Ge, AccOp::Or), F::NONE),
    row(0x2C, "or.ge.u", &[Dc, Da, Db], Sem::CompareAcc(Cond::GeU, AccOp::Or), F::NONE),
    row(0x2F, "xor.eq", &[Dc, Da, Db], Sem::CompareAcc(Cond::Eq, AccOp::Xor), F::NONE),
    row(0x30, "xor.ne", &[Dc, Da, Db], Sem::CompareAcc(Cond::Ne, AccOp::Xor), F::NONE),
    row(0x31, "xor.lt", &[Dc, Da, Db], Sem::CompareAcc(Cond::Lt, AccOp::Xor), F::NONE),
    row(0x32, "xor.lt.u", &[Dc, Da, Db], Sem::CompareAcc(Cond::LtU, AccOp::Xor), F::NONE),
    row(0x33, "xor.ge", &[Dc, Da, Db], Sem::CompareAcc(Cond::Ge, AccOp::Xor), F::NONE),
    row(0x34, "xor.ge.u", &[Dc, Da, Db], Sem::CompareAcc(Cond::GeU, AccOp::Xor), F::NONE),
    row(0x37, "sh.eq", &[Dc, Da, Db], Sem::CompareAcc(Cond::Eq, AccOp::Sh), F::NONE),
    row(0x38, "sh.ne", &[Dc, Da, Db], Sem::CompareAcc(Cond::Ne, AccOp::Sh), F::NONE),
    row(0x39, "sh.lt", &[Dc, Da, Db], Sem::CompareAcc(Cond::Lt, AccOp::Sh), F::NONE),
    row(0x3A, "sh.lt.u", &[Dc, Da, Db], Sem::CompareAcc(Cond::LtU, AccOp::Sh), F::NONE),
    row(0x3B, "sh.ge", &[Dc, Da, Db], Sem::CompareAcc(Cond::Ge, AccOp::Sh), F::NONE),
    row(0x3C, "sh.ge.u", &[Dc, Da, Db], Sem::CompareAcc(Cond::GeU, AccOp::Sh), F::NONE),
    row(0x40, "add.b", &[Dc, Da, Db], packed(PackedOp::Add, Lane::B), F::VSVAVSAV),
    row(0x48, "sub.b", &[Dc, Da, Db], packed(PackedOp::Sub, Lane::B), F::VSVAVSAV),
    row(0x4E, "absdif.b", &[Dc, Da, Db], packed(PackedOp::AbsDif, Lane::B), F::VSVAVSAV),
    row(0x50, "eq.b", &[Dc, Da, Db], packed(PackedOp::Eq, Lane::B), F::NONE),
    row(0x52, "lt.b", &[Dc, Da, Db], packed(PackedOp::Lt(S), Lane::B), F::NONE),
    row(0x53, "lt.bu", &[Dc, Da, Db], packed(PackedOp::Lt(U), Lane::B), F::NONE),
    row(0x56, "eqany.b", &[Dc, Da, Db], Sem::EqAny(Lane::B), F::NONE),
    row(0x58, "min.b", &[Dc, Da, Db], packed(PackedOp::Min(S), Lane::B), F::NONE),
    row(0x59, "min.bu", &[Dc, Da, Db], packed(PackedOp::Min(U), Lane::B), F::NONE),
    row(0x5A, "max.b", &[Dc, Da, Db], packed(PackedOp::Max(S), Lane::B), F::NONE),
    row(0x5B, "max.bu", &[Dc, Da, Db], packed(PackedOp::Max(U), Lane::B), F::NONE),
    row(0x5C, "abs.b", &[Dc, Db], packed(PackedOp::Abs, Lane::B), F::VSVAVSAV),
    row(0x5E, "sat.b", &[Dc, Da], Sem::Sat(super::SatKind::B), F::NONE),
    row(0x5F, "sat.bu", &[Dc, Da], Sem::Sat(super::SatKind::Bu), F::NONE),
    row(0x60, "add.h", &[Dc, Da, Db], packed(PackedOp::Add, Lane::H), F::VSVAVSAV),
    row(0x62, "adds.h", &[Dc, Da, Db], packed(PackedOp::AddSat(S), Lane::H), F::VSVAVSAV),
    row(0x63, "adds.hu", &[Dc, Da, Db], packed(PackedOp::AddSat(U), Lane::H), F::VSVAVSAV),
    row(0x68, "sub.h", &[Dc, Da, Db], packed(PackedOp::Sub, Lane::H), F::VSVAVSAV),
    row(0x6A, "subs.h", &[Dc, Da, Db], packed(PackedOp::SubSat(S), Lane::H), F::VSVAVSAV),
    row(0x6B, "subs.hu", &[Dc, Da, Db], packed(PackedOp::SubSat(U), Lane::H), F::VSVAVSAV),
    row(0x6E, "absdif.h", &[Dc, Da, Db], packed(PackedOp::AbsDif, Lane::H), F::VSVAVSAV),
    row(0x6F, "absdifs.h", &[Dc, Da, Db], packed(PackedOp::AbsDifSat, Lane::H), F::VSVAVSAV),
    row(0x70, "eq.h", &[Dc, Da, Db], packed(PackedOp::Eq, Lane::H), F::NONE),
    row(0x72, "lt.h", &[Dc, Da, Db], packed(PackedOp::Lt(S), Lane::H), F::NONE),
    row(0x73, "lt.hu", &[Dc, Da, Db], packed(PackedOp::Lt(U), Lane::H), F::NONE),
    row(0x76, "eqany.h", &[Dc, Da, Db], Sem::EqAny(Lane::H), F::NONE),
    row(0x78, "min.h", &[Dc, Da, Db], packed(PackedOp::Min(S), Lane::H), F::NONE),
    row(0x79, "min.hu", &[Dc, Da, Db], packed(PackedOp::Min(U), Lane::H), F::NONE),
    row(0x7A, "max.h", &[Dc, Da, Db], packed(PackedOp::Max(S), Lane::H), F::NONE),
    row(0x7B, "max.hu", &[Dc, Da, Db], packed(PackedOp::Max(U), Lane::H), F::NONE),
    row(0x7C, "abs.h", &[Dc, Db], packed(PackedOp::Abs, Lane::H), F::VSVAVSAV),
    row(0x7D, "abss.h", &[Dc, Db], packed(PackedOp::AbsSat, Lane::H), F::VSVAVSAV),
    row(0x7E, "sat.h", &[Dc, Da], Sem::Sat(super::SatKind::H), F::NONE),
    row(0x7F, "sat.hu", &[Dc, Da], Sem::Sat(super::SatKind::Hu), F::NONE),
    row(0x80, "mov", &[Ec, Db], Sem::Mov, F::NONE).v16(),
    row(0x81, "mov", &[Ec, Da, Db], Sem::MovPair, F::NONE).v16(),
    row(0x90, "eq.w", &[Dc, Da, Db], packed(PackedOp::Eq, Lane::W), F::NONE),
    row(0x92, "lt.w", &[Dc, Da, Db], packed(PackedOp::Lt(S), Lane::W), F::NONE),
    row(0x93, "lt.wu", &[Dc, Da, Db], packed(PackedOp::Lt(U), Lane::W), F::NONE),
];

const RC_ACCUMULATOR: &[Row] = &[
    row(0x00, "add", &[Dc, Da, C9s], Sem::Add, F::VSVAVSAV),
    row(0x02, "adds", &[Dc, Da, C9s], Sem::AddSat(S), F::VSVAVSAV),
    row(0x03, "adds.u", &[Dc, Da, C9s], Sem::AddSat(U), F::VSVAVSAV),
    row(0x04, "addx", &[Dc, Da, C9s], Sem::AddExt, F::ALL),
    row(0x05, "addc", &[Dc, Da, C9s], Sem::AddCarry, F::ALL),
    row(0x08, "rsub", &[Dc, Da, C9s], Sem::Rsub, F::VSVAVSAV),
    row(0x0A, "rsubs", &[Dc, Da, C9s], Sem::RsubSat(S), F::VSVAVSAV),
    row(0x0B, "rsubs.u", &[Dc, Da, C9s], Sem::RsubSat(U), F::VSVAVSAV),
    row(0x0E, "absdif", &[Dc, Da, C9s], packed(PackedOp::AbsDif, Lane::W), F::VSVAVSAV),
    row(0x0F, "absdifs", &[Dc, Da, C9s], packed(PackedOp::AbsDifSat, Lane::W), F::VSVAVSAV),
    row(0x10, "eq", &[Dc, Da, C9s], Sem::Compare(Cond::Eq), F::NONE),
    row(0x11, "ne", &[Dc, Da, C9s], Sem::Compare(Cond::Ne), F::NONE),
    row(0x12, "lt", &[Dc, Da, C9s], Sem::Compare(Cond::Lt), F::NONE),
    row(0x13, "lt.u", &[Dc, Da, C9u], Sem::Compare(Cond::LtU), F::NONE),
    row(0x14, "ge", &[Dc, Da, C9s], Sem::Compare(Cond::Ge), F::NONE),
    row(0x15, "ge.u", &[Dc, Da, C9u], Sem::Compare(Cond::GeU), F::NONE),
    row(0x18, "min", &[Dc, Da, C9s], packed(PackedOp::Min(S), Lane::W), F::NONE),
    row(0x19, "min.u", &[Dc, Da, C9u], packed(PackedOp::Min(U), Lane::W), F::NONE),
    row(0x1A, "max", &[Dc, Da, C9s], packed(PackedOp::Max(S), Lane::W), F::NONE),
    row(0x1B, "max.u", &[Dc, Da, C9u], packed(PackedOp::Max(U), Lane::W), F::NONE),
    row(0x20, "and.eq", &[Dc, Da, C9s], Sem::CompareAcc(Cond::Eq, AccOp::And), F::NONE),
    row(0x21, "and.ne", &[Dc, Da, C9s], Sem::CompareAcc(Cond::Ne, AccOp::And), F::NONE),
    row(0x22, "and.lt", &[Dc, Da, C9s], Sem::CompareAcc(Cond::Lt, AccOp::And), F::NONE),
    row(0x23, "and.lt.u", &[Dc, Da, C9u], Sem::CompareAcc(Cond::LtU, AccOp::And), F::NONE),
    row(0x24, "and.ge", &[Dc, Da, C9s], Sem::CompareAcc(Cond::Ge, AccOp::And), F::NONE),
    row(0x25, "and.ge.u", &[Dc, Da, C9u], Sem::CompareAcc(Cond::GeU, AccOp::And), F::NONE),
    row(0x27, "or.eq", &[Dc, Da, C9s], Sem::CompareAcc(Cond::Eq, AccOp::Or), F::NONE),
    row(0x28, "or.ne", &[Dc, Da, C9s], Sem::CompareAcc(Cond::Ne, AccOp::Or), F::NONE),
    row(0x29, "or.lt", &[Dc, Da, C9s], Sem::CompareAcc(Cond::Lt, AccOp::Or), F::NONE),
    row(0x2A, "or.lt.u", &[Dc, Da, C9u], Sem::CompareAcc(Cond::LtU, AccOp::Or), F::NONE),
    row(0x2B, "or.ge", &[Dc, Da, C9s], Sem::CompareAcc(Cond::Ge, AccOp::Or), F::NONE),
    row(0x2C, "or.ge.u", &[Dc, Da, C9u], Sem::CompareAcc(Cond::GeU, AccOp::Or), F::NONE),
    row(0x2F, "xor.eq", &[Dc, Da, C9s], Sem::CompareAcc(Cond::Eq, AccOp::Xor), F::NONE),
    row(0x30, "xor.ne", &[Dc, Da, C9s], Sem::CompareAcc(Cond::Ne, AccOp::Xor), F::NONE),
    row(0x31, "xor.lt", &[Dc, Da, C9s], Sem::CompareAcc(Cond::Lt, AccOp::Xor), F::NONE),
    row(0x32, "xor.lt.u", &[Dc, Da, C9u], Sem::CompareAcc(Cond::LtU, AccOp::Xor), F::NONE),
    row(0x33, "xor.ge", &[Dc, Da, C9s], Sem::CompareAcc(Cond::Ge, AccOp::Xor), F::NONE),
    row(0x34, "xor.ge.u", &[Dc, Da, C9u], Sem::CompareAcc(Cond::GeU, AccOp::Xor), F::NONE),
    row(0x37, "sh.eq", &[Dc, Da, C9s], Sem::CompareAcc(Cond::Eq, AccOp::Sh), F::NONE),
    row(0x38, "sh.ne", &[Dc, Da, C9s], Sem::CompareAcc(Cond::Ne, AccOp::Sh), F::NONE),
    row(0x39, "sh.lt", &[Dc, Da, C9s], Sem::CompareAcc(Cond::Lt, AccOp::Sh), F::NONE),
    row(0x3A, "sh.lt.u", &[Dc, Da, C9u], Sem::CompareAcc(Cond::LtU, AccOp::Sh), F::NONE),
    row(0x3B, "sh.ge", &[Dc, Da, C9s], Sem::CompareAcc(Cond::Ge, AccOp::Sh), F::NONE),
    row(0x3C, "sh.ge.u", &[Dc, Da, C9u], Sem::CompareAcc(Cond::GeU, AccOp::Sh), F::NONE),
    row(0x56, "eqany.b", &[Dc, Da, C9s], Sem::EqAny(Lane::B), F::NONE),
    row(0x76, "eqany.h", &[Dc, Da, C9s], Sem::EqAny(Lane::H), F::NONE),
];

const RR_LOGICAL_SHIFT: &[Row] = &[
    row(0x00, "sh", &[Dc, Da, Db], Sem::Shift(ShiftKind::Logical), F::NONE),
    row(0x01, "sha", &[Dc, Da, Db], Sem::Shift(ShiftKind::Arithmetic), F::ALL),
    row(0x02, "shas", &[Dc, Da, Db], Sem::Shift(ShiftKind::ArithmeticSat), F::VSVAVSAV),
    row(0x08, "and", &[Dc, Da, Db], Sem::Logic(LogicOp::And), F::NONE),
    row(0x09, "nand", &[Dc, Da, Db], Sem::Logic(LogicOp::Nand), F::NONE),
    row(0x0A, "or", &[Dc, Da, Db], Sem::Logic(LogicOp::Or), F::NONE),
    row(0x0B, "nor", &[Dc, Da, Db], Sem::Logic(LogicOp::Nor), F::NONE),
    row(0x0C, "xor", &[Dc, Da, Db], Sem::Logic(LogicOp::Xor), F::NONE),
    row(0x0D, "xnor", &[Dc, Da, Db], Sem::Logic(LogicOp::Xnor), F::NONE),
    row(0x0E, "andn", &[Dc, Da, Db], Sem::Logic(LogicOp::Andn), F::NONE),
    row(0x0F, "orn", &[Dc, Da, Db], Sem::Logic(LogicOp::Orn), F::NONE),
    row(0x1B, "clz", &[Dc, Da], Sem::Count(CountKind::Zeros, Lane::W), F::NONE),
    row(0x1C, "clo", &[Dc, Da], Sem::Count(CountKind::Ones, Lane::W), F::NONE),
    row(0x1D, "cls", &[Dc, Da], Sem::Count(CountKind::Sign, Lane::W), F::NONE),
    row(0x40, "sh.h", &[Dc, Da, Db], packed(PackedOp::Sh, Lane::H), F::NONE),
    row(0x41, "sha.h", &[Dc, Da, Db], packed(PackedOp::Sha, Lane::H), F::NONE),
    row(0x7C, "clz.h", &[Dc, Da], Sem::Count(CountKind::Zeros, Lane::H), F::NONE),
    row(0x7D, "clo.h", &[Dc, Da], Sem::Count(CountKind::Ones, Lane::H), F::NONE),
    row(0x7E, "cls.h", &[Dc, Da], Sem::Count(CountKind::Sign, Lane::H), F::NONE),
];

const RC_LOGICAL_SHIFT: &[Row] = &[
    row(0x00, "sh", &[Dc, Da, Sh6], Sem::Shift(ShiftKind::Logical), F::NONE),
    row(0x01, "sha", &[Dc, Da, Sh6], Sem::Shift(ShiftKind::Arithmetic), F::ALL),
    row(0x02, "shas", &[Dc, Da, Sh6], Sem::Shift(ShiftKind::ArithmeticSat), F::VSVAVSAV),
    row(0x07, "shuffle", &[Dc, Da, C9u], Sem::Opaque(Intrinsic::Shuffle), F::NONE).v16(),
    row(0x08, "and", &[Dc, Da, C9u], Sem::Logic(LogicOp::And), F::NONE),
    row(0x09, "nand", &[Dc, Da, C9u], Sem::Logic(LogicOp::Nand), F::NONE),
    row(0x0A, "or", &[Dc, Da, C9u], Sem::Logic(LogicOp::Or), F::NONE),
    row(0x0B, "nor", &[Dc, Da, C9u], Sem::Logic(LogicOp::Nor), F::NONE),
    row(0x0C, "xor", &[Dc, Da, C9u], Sem::Logic(LogicOp::Xor), F::NONE),
    row(0x0D, "xnor", &[Dc, Da, C9u], Sem::Logic(LogicOp::Xnor), F::NONE),
    row(0x0E, "andn", &[Dc, Da, C9u], Sem::Logic(LogicOp::Andn), F::NONE),
    row(0x0F, "orn", &[Dc, Da, C9u], Sem::Logic(LogicOp::Orn), F::NONE),
    row(0x40, "sh.h", &[Dc, Da, Sh5], packed(PackedOp::Sh, Lane::H), F::NONE),
    row(0x41, "sha.h", &[Dc, Da, Sh5], packed(PackedOp::Sha, Lane::H), F::NONE),
];

const RR_DIVIDE: &[Row] = &[
    row(0x00, "cmp.f", &[Dc, Da, Db], Sem::FloatCmp, F::FS_FI),
    row(0x01, "bmerge", &[Dc, Da, Db], Sem::Opaque(Intrinsic::Bmerge), F::NONE),
    row(0x02, "parity", &[Dc, Da], Sem::Opaque(Intrinsic::Parity), F::NONE),
    row(0x03, "crc32", &[Dc, Db, Da], Sem::Opaque(Intrinsic::Crc32), F::NONE).v16(),
    row(0x04, "mul.f", &[Dc, Da, Db], Sem::Float(FOp::Mul), F::FP_ARITH),
    row(0x05, "div.f", &[Dc, Da, Db], Sem::Float(FOp::Div), F::ALL_FP),
    row(0x08, "unpack", &[Ec, Da], Sem::Opaque(Intrinsic::Unpack), F::NONE),
    row(0x09, "bsplit", &[Ec, Da], Sem::Opaque(Intrinsic::Bsplit), F::NONE),
    row(0x0A, "dvinit.u", &[Ec, Da, Db], Sem::DvInit(DvKind::Wu), F::VSVAV),
    row(0x0C, "updfl", &[Da], Sem::UpdateFlags, F::ALL_FP),
    row(0x10, "ftoi", &[Dc, Da], Sem::FloatConv(FConv::FtoI), F::FS_FI_FX),
    row(0x11, "ftoq31", &[Dc, Da, Db], Sem::FloatConv(FConv::FtoQ31), F::FS_FI_FX),
    row(0x12, "ftou", &[Dc, Da], Sem::FloatConv(FConv::FtoU), F::FS_FI_FX),
    row(0x13, "ftoiz", &[Dc, Da], Sem::FloatConv(FConv::FtoIz), F::FS_FI_FX),
    row(0x14, "itof", &[Dc, Da], Sem::FloatConv(FConv::ItoF), F::FS_FX),
    row(0x15, "q31tof", &[Dc, Da, Db], Sem::FloatConv(FConv::Q31toF), F::FS_FX),
    row(0x16, "utof", &[Dc, Da], Sem::FloatConv(FConv::UtoF), F::FS_FX),
    row(0x17, "ftouz", &[Dc, Da], Sem::FloatConv(FConv::FtoUz), F::FS_FI_FX),
    row(0x18, "ftoq31z", &[Dc, Da, Db], Sem::FloatConv(FConv::FtoQ31z), F::FS_FI_FX),
    row(0x19, "qseed.f", &[Dc, Da], Sem::FloatConv(FConv::Qseed), F::FS_FI),
    row(0x1A, "dvinit", &[Ec, Da, Db], Sem::DvInit(DvKind::W), F::VSVAV),
    row(0x20, "div", &[Ec, Da, Db], Sem::Div(S), F::VSVAV).v16(),
    row(0x21, "div.u", &[Ec, Da, Db], Sem::Div(U), F::VSVAV).v16(),
    row(0x2A, "dvinit.hu", &[Ec, Da, Db], Sem::DvInit(DvKind::Hu), F::VSVAV),
    row(0x3A, "dvinit.h", &[Ec, Da, Db], Sem::DvInit(DvKind::H), F::VSVAV),
    row(0x4A, "dvinit.bu", &[Ec, Da, Db], Sem::DvInit(DvKind::Bu), F::VSVAV),
    row(0x5A, "dvinit.b", &[Ec, Da, Db], Sem::DvInit(DvKind::B), F::VSVAV),
];

const RRR_DIVIDE: &[Row] = &[
    row(0x00, "pack", &[Dc, Ed, Da], Sem::Opaque(Intrinsic::Pack), F::NONE),
    row(0x01, "crcn", &[Dc, Dd, Da, Db], Sem::Opaque(Intrinsic::Crcn), F::NONE).v16(),
    row(0x02, "add.f", &[Dc, Dd, Da], Sem::Float(FOp::Add), F::FP_ARITH),
    row(0x03, "sub.f", &[Dc, Dd, Da], Sem::Float(FOp::Sub), F::FP_ARITH),
    row(0x06, "madd.f", &[Dc, Dd, Da, Db], Sem::FloatMac { sub: false }, F::FP_ARITH),
    row(0x07, "msub.f", &[Dc, Dd, Da, Db], Sem::FloatMac { sub: true }, F::FP_ARITH),
    row(0x08, "ixmin", &[Ec, Ed, Db], Sem::Opaque(Intrinsic::Ixmin), F::NONE),
    row(0x09, "ixmin.u", &[Ec, Ed, Db], Sem::Opaque(Intrinsic::IxminU), F::NONE),
    row(0x0A, "ixmax", &[Ec, Ed, Db], Sem::Opaque(Intrinsic::Ixmax), F::NONE),
    row(0x0B, "ixmax.u", &[Ec, Ed, Db], Sem::Opaque(Intrinsic::IxmaxU), F::NONE),
    row(0x0D, "dvadj", &[Ec, Ed, Db], Sem::Opaque(Intrinsic::Dvadj), F::NONE),
    row(0x0E, "dvstep.u", &[Ec, Ed, Db], Sem::Opaque(Intrinsic::DvstepU), F::NONE),
    row(0x0F, "dvstep", &[Ec, Ed, Db], Sem::Opaque(Intrinsic::Dvstep), F::NONE),
];

const RR_INDIRECT: &[Row] = &[
    row(0x00, "calli", &[Aa], Sem::CallIndirect, F::NONE),
    row(0x01, "fcalli", &[Aa], Sem::FastCallIndirect, F::NONE).v16(),
    row(0x02, "jli", &[Aa], Sem::JumpLinkIndirect, F::NONE),
    row(0x03, "ji", &[Aa], Sem::JumpIndirect, F::NONE),
];

const RR_TLB: &[Row] = &[
    row(0x00, "tlbdemap", &[Da], Sem::Sys(Intrinsic::TlbDemap), F::NONE),
    row(0x04, "tlbflush.a", &[], Sem::Sys(Intrinsic::TlbFlushA), F::NONE),
    row(0x05, "tlbflush.b", &[], Sem::Sys(Intrinsic::TlbFlushB), F::NONE),
    row(0x08, "tlbprobe.a", &[Da], Sem::Sys(Intrinsic::TlbProbeA), F::NONE),
    row(0x09, "tlbprobe.i", &[Da], Sem::Sys(Intrinsic::TlbProbeI), F::NONE),
    row(0x40, "tlbmap", &[Ea], Sem::Sys(Intrinsic::TlbMap), F::NONE),
];

const RR1_MUL_H: &[Row] = &[
    row(0x18, "mul.h", &[Ec, Da, Db, Sel("ul"), N], pm(HalfMode::Ul, MacAcc::None, MacAcc::None, PmResult::Pair, false), F::VSVAVSAV),
    row(0x19, "mul.h", &[Ec, Da, Db, Sel("lu"), N], pm(HalfMode::Lu, MacAcc::None, MacAcc::None, PmResult::Pair, false), F::VSVAVSAV),
    row(0x1A, "mul.h", &[Ec, Da, Db, Sel("ll"), N], pm(HalfMode::Ll, MacAcc::None, MacAcc::None, PmResult::Pair, false), F::VSVAVSAV),
    row(0x1B, "mul.h", &[Ec, Da, Db, Sel("uu"), N], pm(HalfMode::Uu, MacAcc::None, MacAcc::None, PmResult::Pair, false), F::VSVAVSAV),
    row(0x1C, "mulm.h", &[Ec, Da, Db, Sel("ul"), N], pm(HalfMode::Ul, MacAcc::None, MacAcc::None, PmResult::Merged, false), F::VSVAVSAV),
    row(0x1D, "mulm.h", &[Ec, Da, Db, Sel("lu"), N], pm(HalfMode::Lu, MacAcc::None, MacAcc::None, PmResult::Merged, false), F::VSVAVSAV),
    row(0x1E, "mulm.h", &[Ec, Da, Db, Sel("ll"), N], pm(HalfMode::Ll, MacAcc::None, MacAcc::None, PmResult::Merged, false), F::VSVAVSAV),
    row(0x1F, "mulm.h", &[Ec, Da, Db, Sel("uu"), N], pm(HalfMode::Uu, MacAcc::None, MacAcc::None, PmResult::Merged, false), F::VSVAVSAV),
    row(0x0C, "mulr.h", &[Dc, Da, Db, Sel("ul"), N], pm(HalfMode::Ul, MacAcc::None, MacAcc::None, PmResult::Rounded, false), F::VSVAVSAV),
    row(0x0D, "mulr.h", &[Dc, Da, Db, Sel("lu"), N], pm(HalfMode::Lu, MacAcc::None, MacAcc::None, PmResult::Rounded, false), F::VSVAVSAV),
    row(0x0E, "mulr.h", &[Dc, Da, Db, Sel("ll"), N], pm(HalfMode::Ll, MacAcc::None, MacAcc::None, PmResult::Rounded, false), F::VSVAVSAV),
    row(0x0F, "mulr.h", &[Dc, Da, Db, Sel("uu"), N], pm(HalfMode::Uu, MacAcc::None, MacAcc::None, PmResult::Rounded, false), F::VSVAVSAV),
];

const RR1_MUL_Q: &[Row] = &[
    row(0x02, "mul.q", &[Dc, Da, Db, N], q(QSrc::Word, false, MacAcc::None, false, false), F::VSVAVSAV),
    row(0x1B, "mul.q", &[Ec, Da, Db, N], q(QSrc::Word, true, MacAcc::None, false, false), F::VSVAVSAV),
    row(0x01, "mul.q", &[Dc, Da, Db, Sel("l"), N], q(QSrc::Lower, false, MacAcc::None, false, false), F::VSVAVSAV),
    row(0x19, "mul.q", &[Ec, Da, Db, Sel("l"), N], q(QSrc::Lower, true, MacAcc::None, false, false), F::VSVAVSAV),
    row(0x00, "mul.q", &[Dc, Da, Db, Sel("u"), N], q(QSrc::Upper, false, MacAcc::None, false, false), F::VSVAVSAV),
    row(0x18, "mul.q", &[Ec, Da, Db, Sel("u"), N], q(QSrc::Upper, true, MacAcc::None, false, false), F::VSVAVSAV),
    row(0x05, "mul.q", &[Dc, Da, Sel("l"), Db, Sel("l"), N], q(QSrc::LowerLower, false, MacAcc::None, false, false), F::VSVAVSAV),
    row(0x04, "mul.q", &[Dc, Da, Sel("u"), Db, Sel("u"), N], q(QSrc::UpperUpper, false, MacAcc::None, false, false), F::VSVAVSAV),
    row(0x07, "mulr.q", &[Dc, Da, Sel("l"), Db, Sel("l"), N], q(QSrc::LowerLower, false, MacAcc::None, true, false), F::VSVAVSAV),
    row(0x06, "mulr.q", &[Dc, Da, Sel("u"), Db, Sel("u"), N], q(QSrc::UpperUpper, false, MacAcc::None, true, false), F::VSVAVSAV),
];

/// MADD.H-style rows: the four selector variants for each of the six
/// secondary bases (plain, saturating, merged, merged saturating, rounded,
/// rounded saturating).
macro_rules! packed_mac_rows {
    ($hi:expr, $lo:expr, [$plain:literal, $sat:literal, $m:literal, $ms:literal, $r:literal, $rs:literal]) => {
        &[
            row(0x18, $plain, &[Ec, Ed, Da, Db, Sel("ul"), N], pm(HalfMode::Ul, $hi, $lo, PmResult::Pair, false), F::VSVAVSAV),
            row(0x19, $plain, &[Ec, Ed, Da, Db, Sel("lu"), N], pm(HalfMode::Lu, $hi, $lo, PmResult::Pair, false), F::VSVAVSAV),
            row(0x1A, $plain, &[Ec, Ed, Da, Db, Sel("ll"), N], pm(HalfMode::Ll, $hi, $lo, PmResult::Pair, false), F::VSVAVSAV),
            row(0x1B, $plain, &[Ec, Ed, Da, Db, Sel("uu"), N], pm(HalfMode::Uu, $hi, $lo, PmResult::Pair, false), F::VSVAVSAV),
            row(0x38, $sat, &[Ec, Ed, Da, Db, Sel("ul"), N], pm(HalfMode::Ul, $hi, $lo, PmResult::Pair, true), F::VSVAVSAV),
            row(0x39, $sat, &[Ec, Ed, Da, Db, Sel("lu"), N], pm(HalfMode::Lu, $hi, $lo, PmResult::Pair, true), F::VSVAVSAV),
            row(0x3A, $sat, &[Ec, Ed, Da, Db, Sel("ll"), N], pm(HalfMode::Ll, $hi, $lo, PmResult::Pair, true), F::VSVAVSAV),
            row(0x3B, $sat, &[Ec, Ed, Da, Db, Sel("uu"), N], pm(HalfMode::Uu, $hi, $lo, PmResult::Pair, true), F::VSVAVSAV),
            row(0x1C, $m, &[Ec, Ed, Da, Db, Sel("ul"), N], pm(HalfMode::Ul, $hi, $lo, PmResult::Merged, false), F::VSVAVSAV),
            row(0x1D, $m, &[Ec, Ed, Da, Db, Sel("lu"), N], pm(HalfMode::Lu, $hi, $lo, PmResult::Merged, false), F::VSVAVSAV),
            row(0x1E, $m, &[Ec, Ed, Da, Db, Sel("ll"), N], pm(HalfMode::Ll, $hi, $lo, PmResult::Merged, false), F::VSVAVSAV),
            row(0x1F, $m, &[Ec, Ed, Da, Db, Sel("uu"), N], pm(HalfMode::Uu, $hi, $lo, PmResult::Merged, false), F::VSVAVSAV),
            row(0x3C, $ms, &[Ec, Ed, Da, Db, Sel("ul"), N], pm(HalfMode::Ul, $hi, $lo, PmResult::Merged, true), F::VSVAVSAV),
            row(0x3D, $ms, &[Ec, Ed, Da, Db, Sel("lu"), N], pm(HalfMode::Lu, $hi, $lo, PmResult::Merged, true), F::VSVAVSAV),
            row(0x3E, $ms, &[Ec, Ed, Da, Db, Sel("ll"), N], pm(HalfMode::Ll, $hi, $lo, PmResult::Merged, true), F::VSVAVSAV),
            row(0x3F, $ms, &[Ec, Ed, Da, Db, Sel("uu"), N], pm(HalfMode::Uu, $hi, $lo, PmResult::Merged, true), F::VSVAVSAV),
            row(0x0C, $r, &[Dc, Dd, Da, Db, Sel("ul"), N], pm(HalfMode::Ul, $hi, $lo, PmResult::Rounded, false), F::VSVAVSAV),
            row(0x0D, $r, &[Dc, Dd, Da, Db, Sel("lu"), N], pm(HalfMode::Lu, $hi, $lo, PmResult::Rounded, false), F::VSVAVSAV),
            row(0x0E, $r, &[Dc, Dd, Da, Db, Sel("ll"), N], pm(HalfMode::Ll, $hi, $lo, PmResult::Rounded, false), F::VSVAVSAV),
            row(0x0F, $r, &[Dc, Dd, Da, Db, Sel("uu"), N], pm(HalfMode::Uu, $hi, $lo, PmResult::Rounded, false), F::VSVAVSAV),
            row(0x2C, $rs, &[Dc, Dd, Da, Db, Sel("ul"), N], pm(HalfMode::Ul, $hi, $lo, PmResult::Rounded, true), F::VSVAVSAV),
            row(0x2D, $rs, &[Dc, Dd, Da, Db, Sel("lu"), N], pm(HalfMode::Lu, $hi, $lo, PmResult::Rounded, true), F::VSVAVSAV),
            row(0x2E, $rs, &[Dc, Dd, Da, Db, Sel("ll"), N], pm(HalfMode::Ll, $hi, $lo, PmResult::Rounded, true), F::VSVAVSAV),
            row(0x2F, $rs, &[Dc, Dd, Da, Db, Sel("uu"), N], pm(HalfMode::Uu, $hi, $lo, PmResult::Rounded, true), F::VSVAVSAV),
        ]
    };
}

const RRR1_MADD_H: &[Row] = packed_mac_rows!(
    MacAcc::Add,
    MacAcc::Add,
    ["madd.h", "madds.h", "maddm.h", "maddms.h", "maddr.h", "maddrs.h"]
);

const RRR1_MSUB_H: &[Row] = packed_mac_rows!(
    MacAcc::Sub,
    MacAcc::Sub,
    ["msub.h", "msubs.h", "msubm.h", "msubms.h", "msubr.h", "msubrs.h"]
);

const RRR1_MADDSU_H: &[Row] = packed_mac_rows!(
    MacAcc::Add,
    MacAcc::Sub,
    ["maddsu.h", "maddsus.h", "maddsum.h", "maddsums.h", "maddsur.h", "maddsurs.h"]
);

const RRR1_MSUBAD_H: &[Row] = packed_mac_rows!(
    MacAcc::Sub,
    MacAcc::Add,
    ["msubad.h", "msubads.h", "msubadm.h", "msubadms.h", "msubadr.h", "msubadrs.h"]
);

/// MADD.Q-style rows for one accumulate direction.
macro_rules! q_mac_rows {
    ($acc:expr, [$plain:literal, $sat:literal, $r:literal, $rs:literal, $rh:literal, $rsh:literal]) => {
        &[
            row(0x02, $plain, &[Dc, Dd, Da, Db, N], q(QSrc::Word, false, $acc, false, false), F::VSVAVSAV),
            row(0x1B, $plain, &[Ec, Ed, Da, Db, N], q(QSrc::Word, true, $acc, false, false), F::VSVAVSAV),
            row(0x01, $plain, &[Dc, Dd, Da, Db, Sel("l"), N], q(QSrc::Lower, false, $acc, false, false), F::VSVAVSAV),
            row(0x19, $plain, &[Ec, Ed, Da, Db, Sel("l"), N], q(QSrc::Lower, true, $acc, false, false), F::VSVAVSAV),
            row(0x00, $plain, &[Dc, Dd, Da, Db, Sel("u"), N], q(QSrc::Upper, false, $acc, false, false), F::VSVAVSAV),
            row(0x18, $plain, &[Ec, Ed, Da, Db, Sel("u"), N], q(QSrc::Upper, true, $acc, false, false), F::VSVAVSAV),
            row(0x05, $plain, &[Dc, Dd, Da, Sel("l"), Db, Sel("l"), N], q(QSrc::LowerLower, false, $acc, false, false), F::VSVAVSAV),
            row(0x1D, $plain, &[Ec, Ed, Da, Sel("l"), Db, Sel("l"), N], q(QSrc::LowerLower, true, $acc, false, false), F::VSVAVSAV),
            row(0x04, $plain, &[Dc, Dd, Da, Sel("u"), Db, Sel("u"), N], q(QSrc::UpperUpper, false, $acc, false, false), F::VSVAVSAV),
            row(0x1C, $plain, &[Ec, Ed, Da, Sel("u"), Db, Sel("u"), N], q(QSrc::UpperUpper, true, $acc, false, false), F::VSVAVSAV),
            row(0x22, $sat, &[Dc, Dd, Da, Db, N], q(QSrc::Word, false, $acc, false, true), F::VSVAVSAV),
            row(0x3B, $sat, &[Ec, Ed, Da, Db, N], q(QSrc::Word, true, $acc, false, true), F::VSVAVSAV),
            row(0x21, $sat, &[Dc, Dd, Da, Db, Sel("l"), N], q(QSrc::Lower, false, $acc, false, true), F::VSVAVSAV),
            row(0x39, $sat, &[Ec, Ed, Da, Db, Sel("l"), N], q(QSrc::Lower, true, $acc, false, true), F::VSVAVSAV),
            row(0x20, $sat, &[Dc, Dd, Da, Db, Sel("u"), N], q(QSrc::Upper, false, $acc, false, true), F::VSVAVSAV),
            row(0x38, $sat, &[Ec, Ed, Da, Db, Sel("u"), N], q(QSrc::Upper, true, $acc, false, true), F::VSVAVSAV),
            row(0x25, $sat, &[Dc, Dd, Da, Sel("l"), Db, Sel("l"), N], q(QSrc::LowerLower, false, $acc, false, true), F::VSVAVSAV),
            row(0x3D, $sat, &[Ec, Ed, Da, Sel("l"), Db, Sel("l"), N], q(QSrc::LowerLower, true, $acc, false, true), F::VSVAVSAV),
            row(0x24, $sat, &[Dc, Dd, Da, Sel("u"), Db, Sel("u"), N], q(QSrc::UpperUpper, false, $acc, false, true), F::VSVAVSAV),
            row(0x3C, $sat, &[Ec, Ed, Da, Sel("u"), Db, Sel("u"), N], q(QSrc::UpperUpper, true, $acc, false, true), F::VSVAVSAV),
            row(0x07, $r, &[Dc, Dd, Da, Sel("l"), Db, Sel("l"), N], q(QSrc::LowerLower, false, $acc, true, false), F::VSVAVSAV),
            row(0x06, $r, &[Dc, Dd, Da, Sel("u"), Db, Sel("u"), N], q(QSrc::UpperUpper, false, $acc, true, false), F::VSVAVSAV),
            row(0x27, $rs, &[Dc, Dd, Da, Sel("l"), Db, Sel("l"), N], q(QSrc::LowerLower, false, $acc, true, true), F::VSVAVSAV),
            row(0x26, $rs, &[Dc, Dd, Da, Sel("u"), Db, Sel("u"), N], q(QSrc::UpperUpper, false, $acc, true, true), F::VSVAVSAV),
            row(0x1E, $rh, &[Dc, Ed, Da, Db, Sel("ul"), N], pm(HalfMode::Ul, $acc, $acc, PmResult::RoundedWide, false), F::VSVAVSAV),
            row(0x3E, $rsh, &[Dc, Ed, Da, Db, Sel("ul"), N], pm(HalfMode::Ul, $acc, $acc, PmResult::RoundedWide, true), F::VSVAVSAV),
        ]
    };
}

const RRR1_MADD_Q: &[Row] = q_mac_rows!(
    MacAcc::Add,
    ["madd.q", "madds.q", "maddr.q", "maddrs.q", "maddr.h", "maddrs.h"]
);

const RRR1_MSUB_Q: &[Row] = q_mac_rows!(
    MacAcc::Sub,
    ["msub.q", "msubs.q", "msubr.q", "msubrs.q", "msubr.h", "msubrs.h"]
);

const RR2_MUL: &[Row] = &[
    row(0x0A, "mul", &[Dc, Da, Db], mul(S, false, false), F::VSVAVSAV),
    row(0x6A, "mul", &[Ec, Da, Db], mul(S, true, false), F::VSVAVSAV),
    row(0x68, "mul.u", &[Ec, Da, Db], mul(U, true, false), F::VSVAVSAV),
    row(0x88, "muls.u", &[Dc, Da, Db], mul(U, false, true), F::VSVAVSAV),
    row(0x8A, "muls", &[Dc, Da, Db], mul(S, false, true), F::VSVAVSAV),
];

const RC_MUL: &[Row] = &[
    row(0x01, "mul", &[Dc, Da, C9s], mul(S, false, false), F::VSVAVSAV),
    row(0x02, "mul.u", &[Ec, Da, C9u], mul(U, true, false), F::VSVAVSAV),
    row(0x03, "mul", &[Ec, Da, C9s], mul(S, true, false), F::VSVAVSAV),
    row(0x04, "muls.u", &[Dc, Da, C9u], mul(U, false, true), F::VSVAVSAV),
    row(0x05, "muls", &[Dc, Da, C9s], mul(S, false, true), F::VSVAVSAV),
];

const SYS_INTERRUPTS: &[Row] = &[
    row(0x00, "nop", &[], Sem::Nop, F::NONE),
    row(0x03, "fret", &[], Sem::FastRet, F::NONE).v16(),
    row(0x04, "debug", &[], Sem::Sys(Intrinsic::Debug), F::NONE),
    row(0x06, "ret", &[], Sem::Ret, F::NONE),
    row(0x07, "rfe", &[], Sem::Rfe, F::NONE),
    row(0x08, "svlcx", &[], Sem::Sys(Intrinsic::SaveLowerContext), F::NONE),
    row(0x09, "rslcx", &[], Sem::Sys(Intrinsic::RestoreLowerContext), F::NONE),
    row(0x0C, "enable", &[], Sem::Sys(Intrinsic::Enable), F::NONE),
    row(0x0D, "disable", &[], Sem::Sys(Intrinsic::Disable), F::NONE),
    row(0x0E, "restore", &[Da], Sem::Sys(Intrinsic::Restore), F::NONE).v16(),
    row(0x0F, "disable", &[Da], Sem::Sys(Intrinsic::DisableSave), F::NONE).v16(),
    row(0x12, "dsync", &[], Sem::Sys(Intrinsic::Dsync), F::NONE),
    row(0x13, "isync", &[], Sem::Sys(Intrinsic::Isync), F::NONE),
    row(0x14, "trapv", &[], Sem::Trap(Flag::V), F::NONE),
    row(0x15, "trapsv", &[], Sem::Trap(Flag::Sv), F::NONE),
    row(0x16, "wait", &[], Sem::Sys(Intrinsic::Wait), F::NONE).v16(),
];

pub(super) static GROUPS: &[Group] = &[
    Group { primary: 0x01, format: Format::Rr, rows: ADDR },
    Group { primary: 0x03, format: Format::Rrr2, rows: MADD_RRR2 },
    Group { primary: 0x05, format: Format::Abs, rows: ABS_LDB },
    Group { primary: 0x07, format: Format::Bit, rows: BIT_LOGICAL_T2 },
    Group { primary: 0x09, format: Format::Bo, rows: BO_LD_POST_PRE_BASE },
    Group { primary: 0x0B, format: Format::Rr, rows: RR_ACCUMULATOR },
    Group { primary: 0x0D, format: Format::Sys, rows: SYS_INTERRUPTS },
    Group { primary: 0x0F, format: Format::Rr, rows: RR_LOGICAL_SHIFT },
    Group {
        primary: 0x11,
        format: Format::Rlc,
        rows: &[row(0x00, "addih.a", &[Ac, Aa, C16h], Sem::Add, F::NONE)],
    },
    Group { primary: 0x13, format: Format::Rcr, rows: MADD_RCR },
    Group { primary: 0x15, format: Format::Abs, rows: ABS_CONTEXT },
    Group {
        primary: 0x17,
        format: Format::Rrrr,
        rows: &[
            row(0x00, "insert", &[Dc, Da, Db, Ed], Sem::Insert, F::NONE),
            row(0x02, "extr", &[Dc, Da, Ed], Sem::Extract(S), F::NONE),
            row(0x03, "extr.u", &[Dc, Da, Ed], Sem::Extract(U), F::NONE),
            row(0x04, "dextr", &[Dc, Da, Db, Dd], Sem::Dextr, F::NONE),
        ],
    },
    Group {
        primary: 0x19,
        format: Format::Bol,
        rows: &[row(0x00, "ld.w", &[Da, Bol], Sem::Load(MemKind::W), F::NONE)],
    },
    Group {
        primary: 0x1B,
        format: Format::Rlc,
        rows: &[row(0x00, "addi", &[Dc, Da, C16s], Sem::Add, F::VSVAVSAV)],
    },
    Group {
        primary: 0x1D,
        format: Format::B,
        rows: &[row(0x00, "j", &[REL], Sem::Jump, F::NONE)],
    },
    Group {
        primary: 0x1F,
        format: Format::Brr,
        rows: &[
            row(0x00, "jnei", &[Da, Db, REL], Sem::JumpNeStep(1), F::NONE),
            row(0x01, "jned", &[Da, Db, REL], Sem::JumpNeStep(-1), F::NONE),
        ],
    },
    Group { primary: 0x23, format: Format::Rrr2, rows: MSUB_RRR2 },
    Group { primary: 0x25, format: Format::Abs, rows: ABS_STOREB_H },
    Group { primary: 0x27, format: Format::Bit, rows: BIT_SH_LOGIC1 },
    Group { primary: 0x29, format: Format::Bo, rows: BO_LD_BITREV_CIRC },
    Group {
        primary: 0x2B,
        format: Format::Rrr,
        rows: &[
            row(0x00, "cadd", &[Dc, Dd, Da, Db], Sem::CondArith { sub: false, negate: false }, F::VSVAVSAV),
            row(0x01, "caddn", &[Dc, Dd, Da, Db], Sem::CondArith { sub: false, negate: true }, F::VSVAVSAV),
            row(0x02, "csub", &[Dc, Dd, Da, Db], Sem::CondArith { sub: true, negate: false }, F::VSVAVSAV),
            row(0x03, "csubn", &[Dc, Dd, Da, Db], Sem::CondArith { sub: true, negate: true }, F::VSVAVSAV),
            row(0x04, "sel", &[Dc, Dd, Da, Db], Sem::Select { negate: false }, F::NONE),
            row(0x05, "seln", &[Dc, Dd, Da, Db], Sem::Select { negate: true }, F::NONE),
        ],
    },
    Group { primary: 0x2D, format: Format::Rr, rows: RR_INDIRECT },
    Group { primary: 0x33, format: Format::Rcr, rows: MSUB_RCR },
    Group {
        primary: 0x37,
        format: Format::Rrpw,
        rows: &[
            row(0x00, "insert", &[Dc, Da, Db, Pos, Width], Sem::Insert, F::NONE),
            row(0x01, "imask", &[Ec, Db, Pos, Width], Sem::Imask, F::NONE),
            row(0x02, "extr", &[Dc, Da, Pos, Width], Sem::Extract(S), F::NONE),
            row(0x03, "extr.u", &[Dc, Da, Pos, Width], Sem::Extract(U), F::NONE),
        ],
    },
    Group {
        primary: 0x39,
        format: Format::Bol,
        rows: &[row(0x00, "ld.bu", &[Da, Bol], Sem::Load(MemKind::Bu), F::NONE).v16()],
    },
    Group {
        primary: 0x3B,
        format: Format::Rlc,
        rows: &[row(0x00, "mov", &[Dc, C16s], Sem::Mov, F::NONE)],
    },
    Group {
        primary: 0x3F,
        format: Format::Brr,
        rows: &[
            row(0x00, "jlt", &[Da, Db, REL], Sem::CondJump(Cond::Lt), F::NONE),
            row(0x01, "jlt.u", &[Da, Db, REL], Sem::CondJump(Cond::LtU), F::NONE),
        ],
    },
    Group { primary: 0x43, format: Format::Rrr1, rows: RRR1_MADD_Q },
    Group {
        primary: 0x45,
        format: Format::Abs,
        rows: &[row(0x00, "ld.q", &[Da, MemAbs], Sem::Load(MemKind::Q), F::NONE)],
    },
    Group { primary: 0x47, format: Format::Bit, rows: BIT_AND_ACC },
    Group { primary: 0x49, format: Format::Bo, rows: BO_CTX_POST_PRE_BASE },
    Group { primary: 0x4B, format: Format::Rr, rows: RR_DIVIDE },
    Group {
        primary: 0x4D,
        format: Format::Rlc,
        rows: &[row(0x00, "mfcr", &[Dc, SysReg], Sem::Mfcr, F::NONE)],
    },
    Group { primary: 0x53, format: Format::Rc, rows: RC_MUL },
    Group {
        primary: 0x57,
        format: Format::Rrrw,
        rows: &[
            row(0x00, "insert", &[Dc, Da, Db, Dd, Width], Sem::Insert, F::NONE),
            row(0x01, "imask", &[Ec, Db, Dd, Width], Sem::Imask, F::NONE),
            row(0x02, "extr", &[Dc, Da, Dd, Width], Sem::Extract(S), F::NONE),
            row(0x03, "extr.u", &[Dc, Da, Dd, Width], Sem::Extract(U), F::NONE),
        ],
    },
    Group {
        primary: 0x59,
        format: Format::Bol,
        rows: &[row(0x00, "st.w", &[Bol, Da], Sem::Store(MemKind::W), F::NONE)],
    },
    Group {
        primary: 0x5D,
        format: Format::B,
        rows: &[row(0x00, "jl", &[REL], Sem::JumpLink, F::NONE)],
    },
    Group {
        primary: 0x5F,
        format: Format::Brr,
        rows: &[
            row(0x00, "jeq", &[Da, Db, REL], Sem::CondJump(Cond::Eq), F::NONE),
            row(0x01, "jne", &[Da, Db, REL], Sem::CondJump(Cond::Ne), F::NONE),
        ],
    },
    Group {
        primary: 0x61,
        format: Format::B,
        rows: &[row(0x00, "fcall", &[REL], Sem::FastCall, F::NONE).v16()],
    },
    Group { primary: 0x63, format: Format::Rrr1, rows: RRR1_MSUB_Q },
    Group {
        primary: 0x65,
        format: Format::Abs,
        rows: &[row(0x00, "st.q", &[MemAbs, Da], Sem::Store(MemKind::Q), F::NONE)],
    },
    Group { primary: 0x67, format: Format::Bit, rows: BIT_INSERT },
    Group { primary: 0x69, format: Format::Bo, rows: BO_LDMST_BITREV_CIRC },
    Group { primary: 0x6B, format: Format::Rrr, rows: RRR_DIVIDE },
    Group {
        primary: 0x6D,
        format: Format::B,
        rows: &[row(0x00, "call", &[REL], Sem::Call, F::NONE)],
    },
    Group {
        primary: 0x6F,
        format: Format::Brn,
        rows: &[
            row(0x00, "jz.t", &[Da, BitN, REL], Sem::JumpBit { set: false }, F::NONE),
            row(0x01, "jnz.t", &[Da, BitN, REL], Sem::JumpBit { set: true }, F::NONE),
        ],
    },
    Group { primary: 0x73, format: Format::Rr2, rows: RR2_MUL },
    Group { primary: 0x75, format: Format::Rr, rows: RR_TLB },
    Group {
        primary: 0x77,
        format: Format::Rrpw,
        rows: &[row(0x00, "dextr", &[Dc, Da, Db, Pos], Sem::Dextr, F::NONE)],
    },
    Group {
        primary: 0x79,
        format: Format::Bol,
        rows: &[row(0x00, "ld.b", &[Da, Bol], Sem::Load(MemKind::B), F::NONE).v16()],
    },
    Group {
        primary: 0x7B,
        format: Format::Rlc,
        rows: &[row(0x00, "movh", &[Dc, C16h], Sem::Mov, F::NONE)],
    },
    Group {
        primary: 0x7D,
        format: Format::Brr,
        rows: &[
            row(0x00, "jeq.a", &[Aa, Ab, REL], Sem::CondJump(Cond::Eq), F::NONE),
            row(0x01, "jne.a", &[Aa, Ab, REL], Sem::CondJump(Cond::Ne), F::NONE),
        ],
    },
    Group {
        primary: 0x7F,
        format: Format::Brr,
        rows: &[
            row(0x00, "jge", &[Da, Db, REL], Sem::CondJump(Cond::Ge), F::NONE),
            row(0x01, "jge.u", &[Da, Db, REL], Sem::CondJump(Cond::GeU), F::NONE),
        ],
    },
    Group { primary: 0x83, format: Format::Rrr1, rows: RRR1_MADD_H },
    Group { primary: 0x85, format: Format::Abs, rows: ABS_LDW },
    Group { primary: 0x87, format: Format::Bit, rows: BIT_LOGICAL_T1 },
    Group { primary: 0x89, format: Format::Bo, rows: BO_ST_POST_PRE_BASE },
    Group { primary: 0x8B, format: Format::Rc, rows: RC_ACCUMULATOR },
    Group {
        primary: 0x8D,
        format: Format::Sys,
        rows: &[row(0x05, "rfm", &[], Sem::Rfm, F::NONE)],
    },
    Group { primary: 0x8F, format: Format::Rc, rows: RC_LOGICAL_SHIFT },
    Group {
        primary: 0x91,
        format: Format::Rlc,
        rows: &[row(0x00, "movh.a", &[Ac, C16h], Sem::Mov, F::NONE)],
    },
    Group { primary: 0x93, format: Format::Rr1, rows: RR1_MUL_Q },
    Group {
        primary: 0x97,
        format: Format::Rcrr,
        rows: &[row(0x00, "insert", &[Dc, Da, C4u, Ed], Sem::Insert, F::NONE)],
    },
    Group {
        primary: 0x99,
        format: Format::Bol,
        rows: &[row(0x00, "ld.a", &[Aa, Bol], Sem::Load(MemKind::A), F::NONE)],
    },
    Group {
        primary: 0x9B,
        format: Format::Rlc,
        rows: &[row(0x00, "addih", &[Dc, Da, C16h], Sem::Add, F::VSVAVSAV)],
    },
    Group {
        primary: 0x9D,
        format: Format::B,
        rows: &[row(0x00, "ja", &[ABS], Sem::Jump, F::NONE)],
    },
    Group {
        primary: 0x9F,
        format: Format::Brc,
        rows: &[
            row(0x00, "jnei", &[Da, C4s, REL], Sem::JumpNeStep(1), F::NONE),
            row(0x01, "jned", &[Da, C4s, REL], Sem::JumpNeStep(-1), F::NONE),
        ],
    },
    Group { primary: 0xA3, format: Format::Rrr1, rows: RRR1_MSUB_H },
    Group { primary: 0xA5, format: Format::Abs, rows: ABS_STORE },
    Group { primary: 0xA7, format: Format::Bit, rows: BIT_SH_LOGIC2 },
    Group { primary: 0xA9, format: Format::Bo, rows: BO_ST_BITREV_CIRC },
    Group {
        primary: 0xAB,
        format: Format::Rcr,
        rows: &[
            row(0x00, "cadd", &[Dc, Dd, Da, C9s], Sem::CondArith { sub: false, negate: false }, F::VSVAVSAV),
            row(0x01, "caddn", &[Dc, Dd, Da, C9s], Sem::CondArith { sub: false, negate: true }, F::VSVAVSAV),
            row(0x04, "sel", &[Dc, Dd, Da, C9s], Sem::Select { negate: false }, F::NONE),
            row(0x05, "seln", &[Dc, Dd, Da, C9s], Sem::Select { negate: true }, F::NONE),
        ],
    },
    Group {
        primary: 0xAD,
        format: Format::Rc,
        rows: &[
            row(0x00, "bisr", &[C9u], Sem::Sys(Intrinsic::Bisr), F::NONE),
            row(0x04, "syscall", &[C9u], Sem::Sys(Intrinsic::Syscall), F::NONE),
        ],
    },
    Group { primary: 0xB3, format: Format::Rr1, rows: RR1_MUL_H },
    Group {
        primary: 0xB5,
        format: Format::Bol,
        rows: &[row(0x00, "st.a", &[Bol, Aa], Sem::Store(MemKind::A), F::NONE).v16()],
    },
    Group {
        primary: 0xB7,
        format: Format::Rcpw,
        rows: &[
            row(0x00, "insert", &[Dc, Da, C4u, Pos, Width], Sem::Insert, F::NONE),
            row(0x01, "imask", &[Ec, C4u, Pos, Width], Sem::Imask, F::NONE),
        ],
    },
    Group {
        primary: 0xB9,
        format: Format::Bol,
        rows: &[row(0x00, "ld.hu", &[Da, Bol], Sem::Load(MemKind::Hu), F::NONE).v16()],
    },
    Group {
        primary: 0xBB,
        format: Format::Rlc,
        rows: &[row(0x00, "mov.u", &[Dc, C16u], Sem::Mov, F::NONE)],
    },
    Group {
        primary: 0xBD,
        format: Format::Brr,
        rows: &[
            row(0x00, "jz.a", &[Aa, REL], Sem::CondJump(Cond::Eq), F::NONE),
            row(0x01, "jnz.a", &[Aa, REL], Sem::CondJump(Cond::Ne), F::NONE),
        ],
    },
    Group {
        primary: 0xBF,
        format: Format::Brc,
        rows: &[
            row(0x00, "jlt", &[Da, C4s, REL], Sem::CondJump(Cond::Lt), F::NONE),
            row(0x01, "jlt.u", &[Da, C4u, REL], Sem::CondJump(Cond::LtU), F::NONE),
        ],
    },
    Group { primary: 0xC3, format: Format::Rrr1, rows: RRR1_MADDSU_H },
    Group {
        primary: 0xC5,
        format: Format::Abs,
        rows: &[row(0x00, "lea", &[Aa, MemAbs], Sem::Lea, F::NONE)],
    },
    Group { primary: 0xC7, format: Format::Bit, rows: BIT_OR_ACC },
    Group {
        primary: 0xC9,
        format: Format::Bol,
        rows: &[row(0x00, "ld.h", &[Da, Bol], Sem::Load(MemKind::H), F::NONE).v16()],
    },
    Group {
        primary: 0xCD,
        format: Format::Rlc,
        rows: &[row(0x00, "mtcr", &[SysReg, Da], Sem::Mtcr, F::NONE)],
    },
    Group {
        primary: 0xD5,
        format: Format::Absb,
        rows: &[row(0x00, "st.t", &[MemAbs, Bpos3, Bit], Sem::StoreBit, F::NONE)],
    },
    Group {
        primary: 0xD7,
        format: Format::Rcrw,
        rows: &[
            row(0x00, "insert", &[Dc, Da, C4u, Dd, Width], Sem::Insert, F::NONE),
            row(0x01, "imask", &[Ec, C4u, Dd, Width], Sem::Imask, F::NONE),
        ],
    },
    Group {
        primary: 0xD9,
        format: Format::Bol,
        rows: &[row(0x00, "lea", &[Aa, Bol], Sem::Lea, F::NONE)],
    },
    Group {
        primary: 0xDD,
        format: Format::B,
        rows: &[row(0x00, "jla", &[ABS], Sem::JumpLink, F::NONE)],
    },
    Group {
        primary: 0xDF,
        format: Format::Brc,
        rows: &[
            row(0x00, "jeq", &[Da, C4s, REL], Sem::CondJump(Cond::Eq), F::NONE),
            row(0x01, "jne", &[Da, C4s, REL], Sem::CondJump(Cond::Ne), F::NONE),
        ],
    },
    Group {
        primary: 0xE1,
        format: Format::B,
        rows: &[row(0x00, "fcalla", &[ABS], Sem::FastCall, F::NONE).v16()],
    },
    Group { primary: 0xE3, format: Format::Rrr1, rows: RRR1_MSUBAD_H },
    Group { primary: 0xE5, format: Format::Abs, rows: ABS_LDMST_SWAP },
    Group {
        primary: 0xE9,
        format: Format::Bol,
        rows: &[row(0x00, "st.b", &[Bol, Da], Sem::Store(MemKind::B), F::NONE).v16()],
    },
    Group {
        primary: 0xED,
        format: Format::B,
        rows: &[row(0x00, "calla", &[ABS], Sem::Call, F::NONE)],
    },
    Group {
        primary: 0xF9,
        format: Format::Bol,
        rows: &[row(0x00, "st.h", &[Bol, Da], Sem::Store(MemKind::H), F::NONE).v16()],
    },
    Group {
        primary: 0xFB,
        format: Format::Rlc,
        rows: &[row(0x00, "mov", &[Ec, C16s], Sem::Mov, F::NONE).v16()],
    },
    Group {
        primary: 0xFD,
        format: Format::Brr,
        rows: &[
            row(0x00, "loop", &[Ab, REL], Sem::Loop, F::NONE),
            row(0x01, "loopu", &[REL], Sem::LoopU, F::NONE),
        ],
    },
    Group {
        primary: 0xFF,
        format: Format::Brc,
        rows: &[
            row(0x00, "jge", &[Da, C4s, REL], Sem::CondJump(Cond::Ge), F::NONE),
            row(0x01, "jge.u", &[Da, C4u, REL], Sem::CondJump(Cond::GeU), F::NONE),
        ],
    },
];
