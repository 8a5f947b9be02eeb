use pretty_assertions::assert_eq;

use tricore_lift::disasm::render;
use tricore_lift::{IsaVariant, Token, TriCore};

fn text(bytes: &[u8], addr: u32) -> String {
    let (_, tokens) = TriCore::default().render_text(bytes, addr).expect("decodes");
    render(&tokens)
}

#[test]
fn token_stream_for_a_register_form() {
    // add d3, d1, d2
    let raw: u32 = (3 << 28) | (2 << 12) | (1 << 8) | 0x0B;
    let (len, tokens) = TriCore::default().render_text(&raw.to_le_bytes(), 0).unwrap();
    assert_eq!(len, 4);
    assert_eq!(
        tokens,
        vec![
            Token::Mnemonic("add"),
            Token::Whitespace,
            Token::Register("d3".into()),
            Token::Sep,
            Token::Register("d1".into()),
            Token::Sep,
            Token::Register("d2".into()),
        ]
    );
}

#[test]
fn immediates_pick_their_base() {
    // addi d1, d2, #5
    let raw: u32 = (1 << 28) | (5 << 12) | (2 << 8) | 0x1B;
    assert_eq!(text(&raw.to_le_bytes(), 0), "addi d1, d2, #5");
    // addi d1, d2, #-0x10
    let raw: u32 = (1 << 28) | (0xFFF0 << 12) | (2 << 8) | 0x1B;
    assert_eq!(text(&raw.to_le_bytes(), 0), "addi d1, d2, #-0x10");
    // movh d3, #0xbeef
    let raw: u32 = (3 << 28) | (0xBEEF << 12) | 0x7B;
    assert_eq!(text(&raw.to_le_bytes(), 0), "movh d3, #0xbeef");
}

#[test]
fn branch_targets_are_absolute() {
    assert_eq!(text(&[0x3C, 0x04], 0x1000), "j 0x00001008");
    assert_eq!(text(&[0x6D, 0x00, 0x80, 0x00], 0x2000), "call 0x00002100");
    assert_eq!(text(&[0x3E, 0x13], 0x3000), "jeq d15, d1, 0x00003006");
}

#[test]
fn system_registers_use_their_names() {
    // mfcr d1, #0xfe04 (PSW)
    let raw: u32 = (1 << 28) | (0xFE04 << 12) | 0x4D;
    assert_eq!(text(&raw.to_le_bytes(), 0), "mfcr d1, psw");
}

#[test]
fn short_forms_without_operands() {
    assert_eq!(text(&[0x00, 0x90], 0), "ret");
    assert_eq!(text(&[0x00, 0x00], 0), "nop");
}

#[test]
fn v16_only_encodings_fail_on_v13() {
    let v13 = TriCore::with_variant(IsaVariant::V13);
    let v16 = TriCore::with_variant(IsaVariant::V16);
    // fret
    let bytes = [0x00, 0x70];
    assert!(v13.render_text(&bytes, 0).is_err());
    assert_eq!(v16.render_text(&bytes, 0).map(|(_, t)| render(&t)), Ok("fret".to_string()));
}
