use pretty_assertions::assert_eq;

use tricore_lift::il::Intrinsic;
use tricore_lift::{BranchKind, Expr, IlTrace, Reg, Stmt, TriCore};

fn lift_at(bytes: &[u8], addr: u32) -> IlTrace {
    let mut il = IlTrace::new();
    TriCore::default().lift(bytes, addr, &mut il).expect("lifts");
    il
}

fn enc_rlc(op1: u32, c: u32, a: u32, const16: u32) -> [u8; 4] {
    ((c << 28) | ((const16 & 0xFFFF) << 12) | (a << 8) | op1).to_le_bytes()
}

#[test]
fn short_unconditional_jump() {
    let cpu = TriCore::default();
    let info = cpu.probe_info(&[0x3C, 0x04], 0x1000, 4).unwrap();
    assert_eq!(info.length, 2);
    assert_eq!(info.branches, vec![BranchKind::Unconditional(0x1008)]);
    assert_eq!(lift_at(&[0x3C, 0x04], 0x1000).to_string(), "jump(0x1008)\n");
}

#[test]
fn long_call_saves_context_and_links() {
    let bytes = [0x6D, 0x00, 0x80, 0x00];
    let info = TriCore::default().probe_info(&bytes, 0x2000, 4).unwrap();
    assert_eq!(info.length, 4);
    assert_eq!(info.branches, vec![BranchKind::Call(0x2100)]);

    let il = lift_at(&bytes, 0x2000);
    assert_eq!(
        il.to_string(),
        "pcxi = save_upper_context()\na11 = 0x2004\ncall(0x2100)\n"
    );
    assert!(matches!(
        il.stmts[0],
        Stmt::Intrinsic { intrinsic: Intrinsic::SaveUpperContext, .. }
    ));
}

#[test]
fn compare_and_branch_to_known_labels() {
    // jeq d15, d1, +6
    let bytes = [0x3E, 0x13];
    let info = TriCore::default().probe_info(&bytes, 0x3000, 4).unwrap();
    assert_eq!(info.length, 2);
    assert_eq!(
        info.branches,
        vec![BranchKind::True(0x3006), BranchKind::False(0x3002)]
    );

    let mut il = IlTrace::new();
    il.bind_address(0x3006);
    il.bind_address(0x3002);
    TriCore::default().lift(&bytes, 0x3000, &mut il).unwrap();
    assert_eq!(il.to_string(), "if (cmp_eq.4(d15, d1)) goto L0 else goto L1\n");
}

fn wide_sum(lhs: Reg, rhs: u32) -> Stmt {
    Stmt::SetReg {
        reg: Reg::TempWide(0),
        value: Expr::add(8, Expr::sext(8, Expr::reg(lhs)), Expr::sext(8, Expr::c32(rhs))),
    }
}

#[test]
fn addi_adds_the_sign_extended_constant() {
    let il = lift_at(&enc_rlc(0x1B, 1, 2, 0x1234), 0);
    assert_eq!(il.stmts[0], wide_sum(Reg::D(2), 0x1234));
    assert_eq!(
        il.stmts.last(),
        Some(&Stmt::SetReg { reg: Reg::D(1), value: Expr::reg(Reg::Temp(1)) })
    );
    let flags: Vec<String> = il
        .stmts
        .iter()
        .filter_map(|s| match s {
            Stmt::SetFlag { flag, .. } => Some(flag.to_string()),
            _ => None,
        })
        .collect();
    assert_eq!(flags, vec!["v", "sv", "av", "sav"]);
}

#[test]
fn addi_negative_constant_is_sign_extended() {
    let il = lift_at(&enc_rlc(0x1B, 1, 2, 0xFFFF), 0);
    assert_eq!(il.stmts[0], wide_sum(Reg::D(2), 0xFFFF_FFFF));
}

#[test]
fn movh_writes_no_flags() {
    let il = lift_at(&enc_rlc(0x7B, 3, 0, 0xBEEF), 0);
    assert_eq!(il.to_string(), "d3 = 0xbeef0000\n");
}

#[test]
fn short_return() {
    let bytes = [0x00, 0x90];
    let info = TriCore::default().probe_info(&bytes, 0x4000, 4).unwrap();
    assert_eq!(info.length, 2);
    assert_eq!(info.branches, vec![BranchKind::Return]);

    let il = lift_at(&bytes, 0x4000);
    let restore = il.stmts.iter().position(|s| {
        matches!(s, Stmt::Intrinsic { intrinsic: Intrinsic::RestoreUpperContext, .. })
    });
    let ret = il.stmts.iter().position(|s| matches!(s, Stmt::Ret(_)));
    assert!(restore.is_some());
    assert_eq!(ret, Some(il.stmts.len() - 1));
    assert!(restore < ret);
    // The return address is captured before the context restore clobbers a11.
    assert_eq!(il.stmts[0].to_string(), "t0 = and.4(a11, 0xfffffffe)");
}

#[test]
fn branch_to_a_known_label_becomes_goto() {
    let mut il = IlTrace::new();
    let label = il.bind_address(0x1008);
    TriCore::default().lift(&[0x3C, 0x04], 0x1000, &mut il).unwrap();
    assert_eq!(il.stmts, vec![Stmt::Goto(label)]);
}
