use tricore_lift::{ArchConfig, Bus, Cpu, Flag, IlExecutor, LinearMemory, TriCore, Trap};

fn enc_rlc(op1: u32, c: u32, a: u32, const16: u32) -> u32 {
    (c << 28) | ((const16 & 0xFFFF) << 12) | (a << 8) | op1
}

fn enc_bo(op1: u32, op2: u32, a: u32, b: u32, off10: u32) -> u32 {
    ((off10 >> 6) << 28) | (op2 << 22) | ((off10 & 0x3F) << 16) | (b << 12) | (a << 8) | op1
}

fn enc_rr(op1: u32, op2: u32, c: u32, a: u32, b: u32) -> u32 {
    (c << 28) | (op2 << 20) | (b << 12) | (a << 8) | op1
}

struct Machine {
    cpu: Cpu,
    mem: LinearMemory,
    dec: TriCore,
}

impl Machine {
    fn new(program: &[u8]) -> Self {
        let mut mem = LinearMemory::new(0x100);
        mem.load(0, program).unwrap();
        let mut cpu = Cpu::new(ArchConfig::default());
        cpu.reset(0);
        Self {
            cpu,
            mem,
            dec: TriCore::default(),
        }
    }

    fn step(&mut self) -> Result<(), Trap> {
        self.cpu.step(&mut self.mem, &self.dec, &IlExecutor)
    }

    fn run(&mut self, steps: usize) {
        for _ in 0..steps {
            self.step().unwrap();
        }
    }
}

fn program(parts: &[&[u8]]) -> Vec<u8> {
    parts.concat()
}

#[test]
fn addi_overflow_sets_sticky_flags() {
    let mut m = Machine::new(&enc_rlc(0x1B, 1, 2, 1).to_le_bytes());
    m.cpu.d[2] = 0x7FFF_FFFF;
    m.run(1);
    assert_eq!(m.cpu.d[1], 0x8000_0000);
    assert!(m.cpu.flag(Flag::V));
    assert!(m.cpu.flag(Flag::Sv));
    assert!(m.cpu.flag(Flag::Av));
    assert!(m.cpu.flag(Flag::Sav));
    assert_eq!(m.cpu.pc, 4);
}

#[test]
fn sticky_bits_survive_a_clean_add() {
    let add = enc_rr(0x0B, 0x00, 3, 1, 2).to_le_bytes();
    let mut m = Machine::new(&add);
    m.cpu.set_flag(Flag::Sv, true);
    m.cpu.set_flag(Flag::V, true);
    m.cpu.d[1] = 2;
    m.cpu.d[2] = 3;
    m.run(1);
    assert_eq!(m.cpu.d[3], 5);
    assert!(!m.cpu.flag(Flag::V));
    assert!(m.cpu.flag(Flag::Sv));
}

#[test]
fn movh_and_mov_u_build_a_constant() {
    let code = program(&[
        &enc_rlc(0x7B, 3, 0, 0xBEEF).to_le_bytes(),
        &enc_rlc(0xBB, 4, 0, 0x1234).to_le_bytes(),
    ]);
    let mut m = Machine::new(&code);
    m.cpu.set_flag(Flag::V, true);
    m.run(2);
    assert_eq!(m.cpu.d[3], 0xBEEF_0000);
    assert_eq!(m.cpu.d[4], 0x1234);
    assert!(m.cpu.flag(Flag::V));
}

#[test]
fn short_jump_skips_an_instruction() {
    // 0x00: j +4 ; 0x02: mov d0, #1 (skipped) ; 0x04: mov d0, #2
    let code = [0x3C, 0x02, 0x82, 0x10, 0x82, 0x20];
    let mut m = Machine::new(&code);
    m.run(2);
    assert_eq!(m.cpu.d[0], 2);
    assert_eq!(m.cpu.pc, 6);
}

#[test]
fn jeq_takes_both_edges() {
    // jeq d15, d1, +6
    let code = [0x3E, 0x13];
    let mut m = Machine::new(&code);
    m.cpu.d[15] = 7;
    m.cpu.d[1] = 7;
    m.run(1);
    assert_eq!(m.cpu.pc, 6);

    let mut m = Machine::new(&code);
    m.cpu.d[15] = 7;
    m.cpu.d[1] = 8;
    m.run(1);
    assert_eq!(m.cpu.pc, 2);
}

#[test]
fn call_and_return_restore_the_upper_context() {
    let code = program(&[
        // 0x00: call 0x10
        &[0x6D, 0x00, 0x08, 0x00],
        // 0x04: mov d0, #2
        &[0x82, 0x20],
        &[0u8; 10],
        // 0x10: mov d1, #3 ; mov d8, #4 ; ret
        &[0x82, 0x31, 0x82, 0x48, 0x00, 0x90],
    ]);
    let mut m = Machine::new(&code);
    m.cpu.a[11] = 0x40;
    m.cpu.d[8] = 9;

    m.run(1);
    assert_eq!(m.cpu.pc, 0x10);
    assert_eq!(m.cpu.a[11], 4);
    assert_eq!(m.cpu.csa.len(), 1);

    m.run(3);
    assert_eq!(m.cpu.pc, 4);
    assert!(m.cpu.csa.is_empty());
    // Upper context registers come back, lower ones keep the callee's value.
    assert_eq!(m.cpu.a[11], 0x40);
    assert_eq!(m.cpu.d[8], 9);
    assert_eq!(m.cpu.d[1], 3);

    m.run(1);
    assert_eq!(m.cpu.d[0], 2);
}

#[test]
fn ret_without_a_saved_context_traps() {
    let mut m = Machine::new(&[0x00, 0x90]);
    assert!(matches!(m.step(), Err(Trap::ContextUnderflow { .. })));
}

#[test]
fn store_then_pre_increment_load() {
    let code = program(&[
        // st.w [a2]4, d1
        &enc_bo(0x89, 0x24, 1, 2, 4).to_le_bytes(),
        // ld.w d4, [+a2]4
        &enc_bo(0x09, 0x14, 4, 2, 4).to_le_bytes(),
    ]);
    let mut m = Machine::new(&code);
    m.cpu.a[2] = 0x80;
    m.cpu.d[1] = 0xDEAD_BEEF;
    m.run(2);
    assert_eq!(m.mem.read_u32(0x84).unwrap(), 0xDEAD_BEEF);
    assert_eq!(m.cpu.d[4], 0xDEAD_BEEF);
    assert_eq!(m.cpu.a[2], 0x84);
}

#[test]
fn post_increment_load_advances_the_base() {
    // ld.w d1, [a2+]4
    let mut m = Machine::new(&enc_bo(0x09, 0x04, 1, 2, 4).to_le_bytes());
    m.mem.write_u32(0x80, 0x1122_3344).unwrap();
    m.cpu.a[2] = 0x80;
    m.run(1);
    assert_eq!(m.cpu.d[1], 0x1122_3344);
    assert_eq!(m.cpu.a[2], 0x84);
}

#[test]
fn odd_word_store_traps() {
    let mut m = Machine::new(&enc_bo(0x89, 0x24, 1, 2, 0).to_le_bytes());
    m.cpu.a[2] = 0x81;
    assert!(matches!(m.step(), Err(Trap::Unaligned { addr: 0x81 })));
}

#[test]
fn unmapped_fetch_is_a_bus_trap() {
    let mut m = Machine::new(&[]);
    m.cpu.pc = 0x1000;
    assert!(matches!(m.step(), Err(Trap::Bus { addr: 0x1000, .. })));
}

#[test]
fn undecodable_fetch_is_invalid() {
    let mut m = Machine::new(&[0x21, 0x00, 0x00, 0x00]);
    assert!(matches!(m.step(), Err(Trap::InvalidInstruction { pc: 0 })));
}

fn sha(value: u32, count: u32) -> (u32, bool) {
    // sha d3, d1, d2
    let mut m = Machine::new(&enc_rr(0x0F, 0x01, 3, 1, 2).to_le_bytes());
    m.cpu.d[1] = value;
    m.cpu.d[2] = count;
    m.run(1);
    (m.cpu.d[3], m.cpu.flag(Flag::C))
}

#[test]
fn sha_right_carries_any_dropped_bit() {
    // -2: bit 0 is dropped even though the last bit out (bit 1) is clear
    assert_eq!(sha(1, 0xFFFF_FFFE), (0, true));
    assert_eq!(sha(4, 0xFFFF_FFFE), (1, false));
    assert_eq!(sha(0x8000_0004, 0xFFFF_FFFE), (0xE000_0001, false));
}

#[test]
fn sha_left_carries_any_bit_shifted_out() {
    assert_eq!(sha(0x8000_0001, 1), (2, true));
    assert_eq!(sha(0x4000_0000, 1), (0x8000_0000, false));
    // bit 31 leaves first; bit 30, the last one out, is clear
    assert_eq!(sha(0x8000_0000, 2), (0, true));
}
