use proptest::prelude::*;

use tricore_lift::decoder::{decode, Mem, Operand};
use tricore_lift::fields::Format;
use tricore_lift::il::{Intrinsic, Label};
use tricore_lift::isa::{groups, BoMode, Flow, Group, Opnd, Row};
use tricore_lift::lift::lift_audited;
use tricore_lift::{
    nop_canonicalize, BranchKind, DecodeError, Expr, IlBuilder, IlTrace, IsaVariant, Reg, Stmt,
    TriCore,
};

/// Smallest encoding that selects `row`: primary and secondary set, every
/// operand field zero.
fn encode(group: &Group, row: &Row) -> Vec<u8> {
    let mut raw = group.primary as u32;
    if let Some((lo, _)) = group.format.secondary_field() {
        raw |= (row.secondary as u32) << lo;
    }
    bytes_of(group.format, raw)
}

/// `row` with its primary and secondary opcode forced onto `rest`.
fn encode_with(group: &Group, row: &Row, rest: u32) -> Vec<u8> {
    let mut raw = (rest & !0xFF) | group.primary as u32;
    if let Some((lo, len)) = group.format.secondary_field() {
        let field = ((1u32 << len) - 1) << lo;
        raw = (raw & !field) | ((row.secondary as u32) << lo);
    }
    bytes_of(group.format, raw)
}

fn bytes_of(format: Format, raw: u32) -> Vec<u8> {
    if format.is_short() {
        (raw as u16).to_le_bytes().to_vec()
    } else {
        raw.to_le_bytes().to_vec()
    }
}

fn width(first: u8) -> u8 {
    if first & 1 == 1 {
        4
    } else {
        2
    }
}

fn call_rows() -> Vec<(&'static Group, &'static Row)> {
    groups()
        .flat_map(|g| g.rows.iter().map(move |r| (g, r)))
        .filter(|(_, r)| matches!(r.sem.flow(), Flow::Call | Flow::IndirectCall))
        .collect()
}

/// Transfers that link in A11 without saving a context: JL* only link,
/// FCALL* push the old A11 on the stack.
const LINK_ONLY_CALLS: [&str; 6] = ["fcall", "fcalla", "fcalli", "jl", "jla", "jli"];

/// Bit offset of the register field an E/P operand reads.
fn pair_field(format: Format, op: Opnd) -> Option<u32> {
    match op {
        Opnd::Ea | Opnd::Pa => Some(8),
        Opnd::Bo(BoMode::BitRev | BoMode::Circ) => Some(12),
        Opnd::Ed if !format.is_short() => Some(24),
        Opnd::Ec if !format.is_short() => Some(28),
        _ => None,
    }
}

fn pair_rows() -> Vec<(&'static Group, &'static Row, u32)> {
    let mut out = Vec::new();
    for group in groups() {
        for row in group.rows {
            for &op in row.operands {
                if let Some(lo) = pair_field(group.format, op) {
                    out.push((group, row, lo));
                }
            }
        }
    }
    out
}

fn position(il: &IlTrace, pred: impl Fn(&Stmt) -> bool) -> Option<usize> {
    il.stmts.iter().position(pred)
}

/// Check the statement order of a lifted call-class instruction.
fn check_call(mnemonic: &str, next: u32, il: &IlTrace) -> Result<(), String> {
    let call = position(il, |s| matches!(s, Stmt::Call(_)));
    if call != Some(il.stmts.len() - 1) {
        return Err(format!("{mnemonic}: call is not the last statement"));
    }
    let link = position(il, |s| {
        matches!(s, Stmt::SetReg { reg: Reg::A(11), value } if *value == Expr::c32(next))
    });
    if link.is_none() || link > call {
        return Err(format!("{mnemonic}: a11 is not linked before the call"));
    }
    let save = position(il, |s| {
        matches!(s, Stmt::Intrinsic { intrinsic: Intrinsic::SaveUpperContext, .. })
    });
    if LINK_ONLY_CALLS.contains(&mnemonic) {
        if save.is_some() {
            return Err(format!("{mnemonic}: saves a context"));
        }
        if mnemonic.starts_with("fcall") {
            let push = position(il, |s| {
                matches!(s, Stmt::Store { value: Expr::Reg(Reg::A(11)), .. })
            });
            if push.is_none() || push > link {
                return Err(format!("{mnemonic}: old a11 is not pushed first"));
            }
        }
    } else if save.is_none() || save > link {
        return Err(format!("{mnemonic}: no context save before the link"));
    }
    Ok(())
}

#[test]
fn every_row_decodes_to_itself() {
    for group in groups() {
        for row in group.rows {
            let bytes = encode(group, row);
            let insn = decode(&bytes, 0x8000_0000, IsaVariant::V16)
                .unwrap_or_else(|e| panic!("{} ({:#04x}): {e}", row.mnemonic, group.primary));
            assert_eq!(insn.mnemonic(), row.mnemonic);
            assert_eq!(insn.len as usize, bytes.len());
        }
    }
}

#[test]
fn lifted_flag_writes_match_declarations() {
    let mut checked = 0;
    for group in groups() {
        for row in group.rows {
            let bytes = encode(group, row);
            let Ok(insn) = decode(&bytes, 0x8000_0000, IsaVariant::V16) else {
                continue;
            };
            let mut il = IlTrace::new();
            let written = lift_audited(&insn, &mut il)
                .unwrap_or_else(|e| panic!("{} ({:#04x}): {e}", row.mnemonic, group.primary));
            assert_eq!(
                written, row.flags,
                "{} ({:#04x}/{:#04x})",
                row.mnemonic, group.primary, row.secondary
            );
            checked += 1;
        }
    }
    assert!(checked > 500, "only {checked} rows lifted");
}

#[test]
fn v16_rows_are_rejected_on_v13() {
    let mut seen = 0;
    for group in groups() {
        for row in group.rows.iter().filter(|r| r.since == IsaVariant::V16) {
            let bytes = encode(group, row);
            let err = decode(&bytes, 0, IsaVariant::V13).unwrap_err();
            assert!(matches!(err, DecodeError::RequiresV16 { .. }), "{}", row.mnemonic);
            assert_eq!(err.skip_len() as usize, bytes.len(), "{}", row.mnemonic);
            seen += 1;
        }
    }
    assert!(seen > 0);
}

#[test]
fn odd_pair_destination_is_invalid() {
    // mul.h e1, d1, d2ul, #1
    let raw: u32 = (1 << 28) | (0x18 << 18) | (1 << 16) | (2 << 12) | (1 << 8) | 0xB3;
    let err = TriCore::default().render_text(&raw.to_le_bytes(), 0).unwrap_err();
    assert!(matches!(err.error, DecodeError::OddPair { index: 1, .. }));
    assert_eq!(err.length, 4);
}

#[test]
fn rejected_short_encodings_skip_one_half_word() {
    // jeq d15, #0, +32 is v1.6 only
    let v13 = TriCore::with_variant(IsaVariant::V13);
    let err = v13.probe_info(&[0x9E, 0x00, 0x00, 0x00], 0, 4).unwrap_err();
    assert!(matches!(err.error, DecodeError::RequiresV16 { mnemonic: "jeq", .. }));
    assert_eq!(err.length, 2);

    // mov e1, #0
    let err = TriCore::default().probe_info(&[0xD2, 0x01, 0x00, 0x00], 0, 4).unwrap_err();
    assert!(matches!(err.error, DecodeError::OddPair { index: 1, .. }));
    assert_eq!(err.length, 2);
}

#[test]
fn only_call_proper_saves_a_context() {
    let mut link_only: Vec<&str> = Vec::new();
    for (group, row) in call_rows() {
        let bytes = encode(group, row);
        let mut il = IlTrace::new();
        TriCore::default().lift(&bytes, 0x1000, &mut il).unwrap();
        let next = 0x1000 + bytes.len() as u32;
        check_call(row.mnemonic, next, &il).unwrap();
        let saves = il.stmts.iter().any(|s| {
            matches!(s, Stmt::Intrinsic { intrinsic: Intrinsic::SaveUpperContext, .. })
        });
        if !saves {
            link_only.push(row.mnemonic);
        }
    }
    link_only.sort_unstable();
    link_only.dedup();
    assert_eq!(link_only, LINK_ONLY_CALLS);
}

#[test]
fn branch_without_a_target_allocates_no_labels() {
    // jeq d15, d1, +6 with its target dropped
    let mut insn = decode(&[0x3E, 0x13], 0x3000, IsaVariant::V16).unwrap();
    insn.operands.truncate(2);
    let mut il = IlTrace::new();
    assert!(lift_audited(&insn, &mut il).is_err());
    assert!(il.is_empty());
    assert_eq!(il.new_label(), Label(0));
}

#[test]
fn unknown_primaries_skip_by_width() {
    let cpu = TriCore::default();
    assert_eq!(cpu.probe_info(&[0x21, 0, 0, 0], 0, 4).unwrap_err().length, 4);
    assert_eq!(cpu.probe_info(&[0x0A, 0, 0, 0], 0, 4).unwrap_err().length, 2);
}

proptest! {
    #[test]
    fn nop_canonicalize_is_idempotent(bytes in proptest::collection::vec(any::<u8>(), 0..16)) {
        let mut once = bytes.clone();
        nop_canonicalize(&mut once);
        let mut twice = once.clone();
        nop_canonicalize(&mut twice);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn render_text_is_pure(bytes in any::<[u8; 4]>(), addr in any::<u32>()) {
        let cpu = TriCore::default();
        let addr = addr & !1;
        prop_assert_eq!(cpu.render_text(&bytes, addr), cpu.render_text(&bytes, addr));
    }

    #[test]
    fn lengths_follow_bit_zero(bytes in any::<[u8; 4]>(), v13 in any::<bool>()) {
        let variant = if v13 { IsaVariant::V13 } else { IsaVariant::V16 };
        let length = match TriCore::with_variant(variant).probe_info(&bytes, 0x1000, 4) {
            Ok(info) => info.length,
            Err(invalid) => invalid.length,
        };
        prop_assert_eq!(length, width(bytes[0]));
    }

    #[test]
    fn facets_agree_on_length(bytes in any::<[u8; 4]>(), addr in 0u32..0x1000_0000) {
        let cpu = TriCore::default();
        let addr = addr & !1;
        let info = cpu.probe_info(&bytes, addr, 4).map(|i| i.length);
        let text = cpu.render_text(&bytes, addr).map(|(len, _)| len);
        let mut il = IlTrace::new();
        let lifted = cpu.lift(&bytes, addr, &mut il);
        prop_assert_eq!(info, text);
        prop_assert_eq!(info, lifted);
    }

    #[test]
    fn calls_link_before_transferring(pick in any::<prop::sample::Index>(), rest in any::<u32>()) {
        let rows = call_rows();
        let (group, row) = rows[pick.index(rows.len())];
        let bytes = encode_with(group, row, rest);
        let addr = 0x8000_0000;
        let cpu = TriCore::default();
        let info = cpu.probe_info(&bytes, addr, 4).unwrap();
        prop_assert!(info
            .branches
            .iter()
            .any(|b| matches!(b, BranchKind::Call(_) | BranchKind::IndirectCall(_))));
        let mut il = IlTrace::new();
        cpu.lift(&bytes, addr, &mut il).unwrap();
        let next = addr + info.length as u32;
        prop_assert_eq!(check_call(row.mnemonic, next, &il), Ok(()));
    }

    #[test]
    fn odd_pair_indices_are_invalid(pick in any::<prop::sample::Index>(), half in 0u32..8) {
        let rows = pair_rows();
        let (group, row, lo) = rows[pick.index(rows.len())];
        let index = 2 * half + 1;
        let mut bytes = encode(group, row);
        let mut raw = 0u32;
        for (i, b) in bytes.iter().enumerate() {
            raw |= (*b as u32) << (8 * i);
        }
        raw |= index << lo;
        bytes = bytes_of(group.format, raw);
        let err = decode(&bytes, 0, IsaVariant::V16).unwrap_err();
        prop_assert_eq!(
            err,
            DecodeError::OddPair {
                addr: 0,
                mnemonic: row.mnemonic,
                index: index as u8,
                len: bytes.len() as u8,
            }
        );
    }

    #[test]
    fn decoded_pairs_are_even(bytes in any::<[u8; 4]>()) {
        if let Ok(insn) = decode(&bytes, 0, IsaVariant::V16) {
            for op in &insn.operands {
                let reg = match *op {
                    Operand::Reg(reg)
                    | Operand::Mem(Mem::BitReverse { pair: reg })
                    | Operand::Mem(Mem::Circular { pair: reg, .. }) => reg,
                    _ => continue,
                };
                if let Reg::E(n) | Reg::P(n) = reg {
                    prop_assert_eq!(n % 2, 0, "{} {:?}", insn.mnemonic(), op);
                }
            }
        }
    }

    #[test]
    fn conditional_branches_have_two_edges(bytes in any::<[u8; 4]>(), addr in 0u32..0x1000_0000) {
        let addr = addr & !1;
        if let Ok(info) = TriCore::default().probe_info(&bytes, addr, 4) {
            let trues = info.branches.iter().filter(|b| matches!(b, BranchKind::True(_))).count();
            let falses: Vec<u32> = info
                .branches
                .iter()
                .filter_map(|b| match b {
                    BranchKind::False(t) => Some(*t),
                    _ => None,
                })
                .collect();
            prop_assert_eq!(trues, falses.len());
            if trues == 1 {
                prop_assert_eq!(falses[0], addr.wrapping_add(info.length as u32));
            }
        }
    }

    #[test]
    fn failed_lifts_emit_nothing(bytes in any::<[u8; 4]>()) {
        let mut il = IlTrace::new();
        if TriCore::default().lift(&bytes, 0x2000, &mut il).is_err() {
            prop_assert!(il.is_empty());
            prop_assert_eq!(il.new_label(), Label(0));
        }
    }
}
