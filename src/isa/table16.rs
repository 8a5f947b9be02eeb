//! 16-bit encodings. Only SR carries a secondary opcode.

use super::Opnd::*;
use super::{row, Cond, Group, LogicOp, MemKind, SatKind, Sem, ShiftKind, LOOP16, REL, REL16};
use crate::fields::Format;
use crate::flags::FlagWrite as F;
use crate::il::Intrinsic;
use crate::isa::Sign::Signed as S;

pub(super) static GROUPS: &[Group] = &[
    Group {
        primary: 0x00,
        format: Format::Sr,
        rows: &[
            row(0x00, "nop", &[], Sem::Nop, F::NONE),
            row(0x07, "fret", &[], Sem::FastRet, F::NONE).v16(),
            row(0x08, "rfe", &[], Sem::Rfe, F::NONE),
            row(0x09, "ret", &[], Sem::Ret, F::NONE),
            row(0x0A, "debug", &[], Sem::Sys(Intrinsic::Debug), F::NONE),
        ],
    },
    Group { primary: 0x02, format: Format::Srr, rows: &[row(0, "mov", &[Da, Db], Sem::Mov, F::NONE)] },
    Group {
        primary: 0x04,
        format: Format::Slr,
        rows: &[row(0, "ld.bu", &[Da, MemAbPost(1)], Sem::Load(MemKind::Bu), F::NONE)],
    },
    Group {
        primary: 0x06,
        format: Format::Src,
        rows: &[row(0, "sh", &[Da, C4s], Sem::Shift(ShiftKind::Logical), F::NONE)],
    },
    Group {
        primary: 0x08,
        format: Format::Slro,
        rows: &[row(0, "ld.bu", &[Da, MemA15Off(1)], Sem::Load(MemKind::Bu), F::NONE)],
    },
    Group {
        primary: 0x0C,
        format: Format::Sro,
        rows: &[row(0, "ld.bu", &[D15, MemAbOff(1)], Sem::Load(MemKind::Bu), F::NONE)],
    },
    Group {
        primary: 0x0E,
        format: Format::Sbr,
        rows: &[row(0, "jltz", &[Db, REL], Sem::CondJump(Cond::Lt), F::NONE)],
    },
    Group {
        primary: 0x10,
        format: Format::Srrs,
        rows: &[row(0, "addsc.a", &[Aa, Ab, D15, N], Sem::AddScaled, F::NONE)],
    },
    Group { primary: 0x12, format: Format::Srr, rows: &[row(0, "add", &[Da, D15, Db], Sem::Add, F::VSVAVSAV)] },
    Group {
        primary: 0x14,
        format: Format::Slr,
        rows: &[row(0, "ld.bu", &[Da, MemAb], Sem::Load(MemKind::Bu), F::NONE)],
    },
    Group {
        primary: 0x16,
        format: Format::Sc,
        rows: &[row(0, "and", &[D15, C8u], Sem::Logic(LogicOp::And), F::NONE)],
    },
    Group { primary: 0x1A, format: Format::Srr, rows: &[row(0, "add", &[D15, Da, Db], Sem::Add, F::VSVAVSAV)] },
    Group {
        primary: 0x1E,
        format: Format::Sbc,
        rows: &[row(0, "jeq", &[D15, C4s, REL], Sem::CondJump(Cond::Eq), F::NONE)],
    },
    Group { primary: 0x20, format: Format::Sc, rows: &[row(0, "sub.a", &[A10, C8u], Sem::Sub, F::NONE)] },
    Group {
        primary: 0x22,
        format: Format::Srr,
        rows: &[row(0, "adds", &[Da, Db], Sem::AddSat(S), F::VSVAVSAV)],
    },
    Group {
        primary: 0x24,
        format: Format::Ssr,
        rows: &[row(0, "st.b", &[MemAbPost(1), Da], Sem::Store(MemKind::B), F::NONE)],
    },
    Group {
        primary: 0x26,
        format: Format::Srr,
        rows: &[row(0, "and", &[Da, Db], Sem::Logic(LogicOp::And), F::NONE)],
    },
    Group {
        primary: 0x28,
        format: Format::Ssro,
        rows: &[row(0, "st.b", &[MemA15Off(1), Da], Sem::Store(MemKind::B), F::NONE)],
    },
    Group {
        primary: 0x2A,
        format: Format::Srr,
        rows: &[row(0, "cmov", &[Da, D15, Db], Sem::CondMove { negate: false }, F::NONE)],
    },
    Group {
        primary: 0x2C,
        format: Format::Sro,
        rows: &[row(0, "st.b", &[MemAbOff(1), D15], Sem::Store(MemKind::B), F::NONE)],
    },
    Group {
        primary: 0x2E,
        format: Format::Sbrn,
        rows: &[row(0, "jz.t", &[D15, BitN, REL], Sem::JumpBit { set: false }, F::NONE)],
    },
    Group { primary: 0x30, format: Format::Srr, rows: &[row(0, "add.a", &[Aa, Ab], Sem::Add, F::NONE)] },
    Group {
        primary: 0x32,
        format: Format::Sr,
        rows: &[
            row(0x00, "sat.b", &[Da], Sem::Sat(SatKind::B), F::NONE),
            row(0x01, "sat.bu", &[Da], Sem::Sat(SatKind::Bu), F::NONE),
            row(0x02, "sat.h", &[Da], Sem::Sat(SatKind::H), F::NONE),
            row(0x03, "sat.hu", &[Da], Sem::Sat(SatKind::Hu), F::NONE),
            row(0x05, "rsub", &[Da], Sem::Rsub, F::VSVAVSAV),
        ],
    },
    Group {
        primary: 0x34,
        format: Format::Ssr,
        rows: &[row(0, "st.b", &[MemAb, Da], Sem::Store(MemKind::B), F::NONE)],
    },
    Group {
        primary: 0x3A,
        format: Format::Srr,
        rows: &[row(0, "eq", &[D15, Da, Db], Sem::Compare(Cond::Eq), F::NONE)],
    },
    Group { primary: 0x3C, format: Format::Sb, rows: &[row(0, "j", &[REL], Sem::Jump, F::NONE)] },
    Group {
        primary: 0x3E,
        format: Format::Sbr,
        rows: &[row(0, "jeq", &[D15, Db, REL], Sem::CondJump(Cond::Eq), F::NONE)],
    },
    Group { primary: 0x40, format: Format::Srr, rows: &[row(0, "mov.aa", &[Aa, Ab], Sem::Mov, F::NONE)] },
    Group { primary: 0x42, format: Format::Srr, rows: &[row(0, "add", &[Da, Db], Sem::Add, F::VSVAVSAV)] },
    Group {
        primary: 0x44,
        format: Format::Slr,
        rows: &[row(0, "ld.w", &[Da, MemAbPost(4)], Sem::Load(MemKind::W), F::NONE)],
    },
    Group { primary: 0x46, format: Format::Sr, rows: &[row(0, "not", &[Da], Sem::Not, F::NONE)] },
    Group {
        primary: 0x48,
        format: Format::Slro,
        rows: &[row(0, "ld.w", &[Da, MemA15Off(4)], Sem::Load(MemKind::W), F::NONE)],
    },
    Group {
        primary: 0x4C,
        format: Format::Sro,
        rows: &[row(0, "ld.w", &[D15, MemAbOff(4)], Sem::Load(MemKind::W), F::NONE)],
    },
    Group {
        primary: 0x4E,
        format: Format::Sbr,
        rows: &[row(0, "jgtz", &[Db, REL], Sem::CondJump(Cond::Gt), F::NONE)],
    },
    Group { primary: 0x52, format: Format::Srr, rows: &[row(0, "sub", &[Da, D15, Db], Sem::Sub, F::VSVAVSAV)] },
    Group {
        primary: 0x54,
        format: Format::Slr,
        rows: &[row(0, "ld.w", &[Da, MemAb], Sem::Load(MemKind::W), F::NONE)],
    },
    Group {
        primary: 0x58,
        format: Format::Sc,
        rows: &[row(0, "ld.w", &[D15, MemA10C8], Sem::Load(MemKind::W), F::NONE)],
    },
    Group { primary: 0x5A, format: Format::Srr, rows: &[row(0, "sub", &[D15, Da, Db], Sem::Sub, F::VSVAVSAV)] },
    Group { primary: 0x5C, format: Format::Sb, rows: &[row(0, "call", &[REL], Sem::Call, F::NONE)] },
    Group {
        primary: 0x5E,
        format: Format::Sbc,
        rows: &[row(0, "jne", &[D15, C4s, REL], Sem::CondJump(Cond::Ne), F::NONE)],
    },
    Group { primary: 0x60, format: Format::Srr, rows: &[row(0, "mov.a", &[Aa, Db], Sem::Mov, F::NONE)] },
    Group {
        primary: 0x62,
        format: Format::Srr,
        rows: &[row(0, "subs", &[Da, Db], Sem::SubSat(S), F::VSVAVSAV)],
    },
    Group {
        primary: 0x64,
        format: Format::Ssr,
        rows: &[row(0, "st.w", &[MemAbPost(4), Da], Sem::Store(MemKind::W), F::NONE)],
    },
    Group {
        primary: 0x68,
        format: Format::Ssro,
        rows: &[row(0, "st.w", &[MemA15Off(4), Da], Sem::Store(MemKind::W), F::NONE)],
    },
    Group {
        primary: 0x6A,
        format: Format::Srr,
        rows: &[row(0, "cmovn", &[Da, D15, Db], Sem::CondMove { negate: true }, F::NONE)],
    },
    Group {
        primary: 0x6C,
        format: Format::Sro,
        rows: &[row(0, "st.w", &[MemAbOff(4), D15], Sem::Store(MemKind::W), F::NONE)],
    },
    Group {
        primary: 0x6E,
        format: Format::Sb,
        rows: &[row(0, "jz", &[D15, REL], Sem::CondJump(Cond::Eq), F::NONE)],
    },
    Group {
        primary: 0x74,
        format: Format::Ssr,
        rows: &[row(0, "st.w", &[MemAb, Da], Sem::Store(MemKind::W), F::NONE)],
    },
    Group {
        primary: 0x76,
        format: Format::Sbr,
        rows: &[row(0, "jz", &[Db, REL], Sem::CondJump(Cond::Eq), F::NONE)],
    },
    Group {
        primary: 0x78,
        format: Format::Sc,
        rows: &[row(0, "st.w", &[MemA10C8, D15], Sem::Store(MemKind::W), F::NONE)],
    },
    Group {
        primary: 0x7A,
        format: Format::Srr,
        rows: &[row(0, "lt", &[D15, Da, Db], Sem::Compare(Cond::Lt), F::NONE)],
    },
    Group {
        primary: 0x7C,
        format: Format::Sbr,
        rows: &[row(0, "jnz.a", &[Ab, REL], Sem::CondJump(Cond::Ne), F::NONE)],
    },
    Group {
        primary: 0x7E,
        format: Format::Sbr,
        rows: &[row(0, "jne", &[D15, Db, REL], Sem::CondJump(Cond::Ne), F::NONE)],
    },
    Group { primary: 0x80, format: Format::Srr, rows: &[row(0, "mov.d", &[Da, Ab], Sem::Mov, F::NONE)] },
    Group { primary: 0x82, format: Format::Src, rows: &[row(0, "mov", &[Da, C4s], Sem::Mov, F::NONE)] },
    Group {
        primary: 0x84,
        format: Format::Slr,
        rows: &[row(0, "ld.h", &[Da, MemAbPost(2)], Sem::Load(MemKind::H), F::NONE)],
    },
    Group {
        primary: 0x86,
        format: Format::Src,
        rows: &[row(0, "sha", &[Da, C4s], Sem::Shift(ShiftKind::Arithmetic), F::ALL)],
    },
    Group {
        primary: 0x88,
        format: Format::Slro,
        rows: &[row(0, "ld.h", &[Da, MemA15Off(2)], Sem::Load(MemKind::H), F::NONE)],
    },
    Group {
        primary: 0x8A,
        format: Format::Src,
        rows: &[row(0, "cadd", &[Da, D15, C4s], Sem::CondArith { sub: false, negate: false }, F::VSVAVSAV)],
    },
    Group {
        primary: 0x8C,
        format: Format::Sro,
        rows: &[row(0, "ld.h", &[D15, MemAbOff(2)], Sem::Load(MemKind::H), F::NONE)],
    },
    Group {
        primary: 0x8E,
        format: Format::Sbr,
        rows: &[row(0, "jlez", &[Db, REL], Sem::CondJump(Cond::Le), F::NONE)],
    },
    Group { primary: 0x92, format: Format::Src, rows: &[row(0, "add", &[Da, D15, C4s], Sem::Add, F::VSVAVSAV)] },
    Group {
        primary: 0x94,
        format: Format::Slr,
        rows: &[row(0, "ld.h", &[Da, MemAb], Sem::Load(MemKind::H), F::NONE)],
    },
    Group {
        primary: 0x96,
        format: Format::Sc,
        rows: &[row(0, "or", &[D15, C8u], Sem::Logic(LogicOp::Or), F::NONE)],
    },
    Group { primary: 0x9A, format: Format::Src, rows: &[row(0, "add", &[D15, Da, C4s], Sem::Add, F::VSVAVSAV)] },
    Group {
        primary: 0x9E,
        format: Format::Sbc,
        rows: &[row(0, "jeq", &[D15, C4s, REL16], Sem::CondJump(Cond::Eq), F::NONE).v16()],
    },
    Group { primary: 0xA0, format: Format::Src, rows: &[row(0, "mov.a", &[Aa, C4u], Sem::Mov, F::NONE)] },
    Group { primary: 0xA2, format: Format::Srr, rows: &[row(0, "sub", &[Da, Db], Sem::Sub, F::VSVAVSAV)] },
    Group {
        primary: 0xA4,
        format: Format::Ssr,
        rows: &[row(0, "st.h", &[MemAbPost(2), Da], Sem::Store(MemKind::H), F::NONE)],
    },
    Group {
        primary: 0xA6,
        format: Format::Srr,
        rows: &[row(0, "or", &[Da, Db], Sem::Logic(LogicOp::Or), F::NONE)],
    },
    Group {
        primary: 0xA8,
        format: Format::Ssro,
        rows: &[row(0, "st.h", &[MemA15Off(2), Da], Sem::Store(MemKind::H), F::NONE)],
    },
    Group {
        primary: 0xAA,
        format: Format::Src,
        rows: &[row(0, "cmov", &[Da, D15, C4s], Sem::CondMove { negate: false }, F::NONE)],
    },
    Group {
        primary: 0xAC,
        format: Format::Sro,
        rows: &[row(0, "st.h", &[MemAbOff(2), D15], Sem::Store(MemKind::H), F::NONE)],
    },
    Group {
        primary: 0xAE,
        format: Format::Sbrn,
        rows: &[row(0, "jnz.t", &[D15, BitN, REL], Sem::JumpBit { set: true }, F::NONE)],
    },
    Group { primary: 0xB0, format: Format::Src, rows: &[row(0, "add.a", &[Aa, C4s], Sem::Add, F::NONE)] },
    Group {
        primary: 0xB4,
        format: Format::Ssr,
        rows: &[row(0, "st.h", &[MemAb, Da], Sem::Store(MemKind::H), F::NONE)],
    },
    Group {
        primary: 0xBA,
        format: Format::Src,
        rows: &[row(0, "eq", &[D15, Da, C4s], Sem::Compare(Cond::Eq), F::NONE)],
    },
    Group {
        primary: 0xBC,
        format: Format::Sbr,
        rows: &[row(0, "jz.a", &[Ab, REL], Sem::CondJump(Cond::Eq), F::NONE)],
    },
    Group {
        primary: 0xBE,
        format: Format::Sbr,
        rows: &[row(0, "jeq", &[D15, Db, REL16], Sem::CondJump(Cond::Eq), F::NONE).v16()],
    },
    Group { primary: 0xC2, format: Format::Src, rows: &[row(0, "add", &[Da, C4s], Sem::Add, F::VSVAVSAV)] },
    Group {
        primary: 0xC4,
        format: Format::Slr,
        rows: &[row(0, "ld.a", &[Aa, MemAbPost(4)], Sem::Load(MemKind::A), F::NONE)],
    },
    Group {
        primary: 0xC6,
        format: Format::Srr,
        rows: &[row(0, "xor", &[Da, Db], Sem::Logic(LogicOp::Xor), F::NONE)],
    },
    Group {
        primary: 0xC8,
        format: Format::Slro,
        rows: &[row(0, "ld.a", &[Aa, MemA15Off(4)], Sem::Load(MemKind::A), F::NONE)],
    },
    Group {
        primary: 0xCA,
        format: Format::Src,
        rows: &[row(0, "caddn", &[Da, D15, C4s], Sem::CondArith { sub: false, negate: true }, F::VSVAVSAV)],
    },
    Group {
        primary: 0xCC,
        format: Format::Sro,
        rows: &[row(0, "ld.a", &[A15, MemAbOff(4)], Sem::Load(MemKind::A), F::NONE)],
    },
    Group {
        primary: 0xCE,
        format: Format::Sbr,
        rows: &[row(0, "jgez", &[Db, REL], Sem::CondJump(Cond::Ge), F::NONE)],
    },
    Group { primary: 0xD2, format: Format::Src, rows: &[row(0, "mov", &[Ea, C4s], Sem::Mov, F::NONE).v16()] },
    Group {
        primary: 0xD4,
        format: Format::Slr,
        rows: &[row(0, "ld.a", &[Aa, MemAb], Sem::Load(MemKind::A), F::NONE)],
    },
    Group {
        primary: 0xD8,
        format: Format::Sc,
        rows: &[row(0, "ld.a", &[A15, MemA10C8], Sem::Load(MemKind::A), F::NONE)],
    },
    Group { primary: 0xDA, format: Format::Sc, rows: &[row(0, "mov", &[D15, C8u], Sem::Mov, F::NONE)] },
    Group { primary: 0xDC, format: Format::Sr, rows: &[row(0, "ji", &[Aa], Sem::JumpIndirect, F::NONE)] },
    Group {
        primary: 0xDE,
        format: Format::Sbc,
        rows: &[row(0, "jne", &[D15, C4s, REL16], Sem::CondJump(Cond::Ne), F::NONE).v16()],
    },
    Group { primary: 0xE0, format: Format::Sc, rows: &[row(0, "bisr", &[C8u], Sem::Sys(Intrinsic::Bisr), F::NONE)] },
    Group {
        primary: 0xE2,
        format: Format::Srr,
        rows: &[row(0, "mul", &[Da, Db], Sem::Mul { sign: S, wide: false, sat: false }, F::VSVAVSAV)],
    },
    Group {
        primary: 0xE4,
        format: Format::Ssr,
        rows: &[row(0, "st.a", &[MemAbPost(4), Aa], Sem::Store(MemKind::A), F::NONE)],
    },
    Group {
        primary: 0xE8,
        format: Format::Ssro,
        rows: &[row(0, "st.a", &[MemA15Off(4), Aa], Sem::Store(MemKind::A), F::NONE)],
    },
    Group {
        primary: 0xEA,
        format: Format::Src,
        rows: &[row(0, "cmovn", &[Da, D15, C4s], Sem::CondMove { negate: true }, F::NONE)],
    },
    Group {
        primary: 0xEC,
        format: Format::Sro,
        rows: &[row(0, "st.a", &[MemAbOff(4), A15], Sem::Store(MemKind::A), F::NONE)],
    },
    Group {
        primary: 0xEE,
        format: Format::Sb,
        rows: &[row(0, "jnz", &[D15, REL], Sem::CondJump(Cond::Ne), F::NONE)],
    },
    Group {
        primary: 0xF4,
        format: Format::Ssr,
        rows: &[row(0, "st.a", &[MemAb, Aa], Sem::Store(MemKind::A), F::NONE)],
    },
    Group {
        primary: 0xF6,
        format: Format::Sbr,
        rows: &[row(0, "jnz", &[Db, REL], Sem::CondJump(Cond::Ne), F::NONE)],
    },
    Group {
        primary: 0xF8,
        format: Format::Sc,
        rows: &[row(0, "st.a", &[MemA10C8, A15], Sem::Store(MemKind::A), F::NONE)],
    },
    Group {
        primary: 0xFA,
        format: Format::Src,
        rows: &[row(0, "lt", &[D15, Da, C4s], Sem::Compare(Cond::Lt), F::NONE)],
    },
    Group { primary: 0xFC, format: Format::Sbr, rows: &[row(0, "loop", &[Ab, LOOP16], Sem::Loop, F::NONE)] },
    Group {
        primary: 0xFE,
        format: Format::Sbr,
        rows: &[row(0, "jne", &[D15, Db, REL16], Sem::CondJump(Cond::Ne), F::NONE).v16()],
    },
];
