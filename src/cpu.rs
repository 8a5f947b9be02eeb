use std::collections::BTreeMap;

use anyhow::Error;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::arch::ArchConfig;
use crate::decoder::Decoder;
use crate::exec::Executor;
use crate::flags::Flag;
use crate::memory::Bus;
use crate::regs::{canonical_sysreg, Reg};

bitflags! {
    /// Status bits of the PSW the arithmetic writes. The FPU flags alias
    /// the same positions (FS = C, FI = V, ...) plus FX at bit 26.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Psw: u32 {
        const C = 1 << 31;
        const V = 1 << 30;
        const SV = 1 << 29;
        const AV = 1 << 28;
        const SAV = 1 << 27;
        const FX = 1 << 26;
        const _ = !0;
    }
}

/// ICR: interrupt enable bit.
pub const ICR: u16 = 0xFE2C;
const ICR_IE: u32 = 1 << 15;

#[derive(thiserror::Error, Debug)]
pub enum Trap {
    #[error("Invalid instruction at {pc:#010x}")]
    InvalidInstruction { pc: u32 },
    #[error("Unaligned access at {addr:#010x}")]
    Unaligned { addr: u32 },
    #[error("Bus error at {addr:#010x}: {source}")]
    Bus {
        addr: u32,
        #[source]
        source: Error,
    },
    #[error("Breakpoint")]
    Break,
    #[error("System call {number} at {pc:#010x}")]
    Syscall { pc: u32, number: u32 },
    #[error("Overflow trap at {pc:#010x}")]
    Overflow { pc: u32 },
    #[error("Context list underflow at {pc:#010x}")]
    ContextUnderflow { pc: u32 },
    #[error("{what} is not modeled (at {pc:#010x})")]
    Unsupported { pc: u32, what: &'static str },
}

/// Which half of the register file a saved context holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContextKind {
    Upper,
    Lower,
}

/// One CSA frame: 16 words in the architectural save order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    pub kind: ContextKind,
    pub words: [u32; 16],
}

impl ContextKind {
    /// Registers of a context in save order. Slot 0 is always PCXI.
    pub fn layout(self) -> [Reg; 16] {
        match self {
            ContextKind::Upper => [
                Reg::Pcxi,
                Reg::Psw,
                Reg::A(10),
                Reg::A(11),
                Reg::D(8),
                Reg::D(9),
                Reg::D(10),
                Reg::D(11),
                Reg::A(12),
                Reg::A(13),
                Reg::A(14),
                Reg::A(15),
                Reg::D(12),
                Reg::D(13),
                Reg::D(14),
                Reg::D(15),
            ],
            ContextKind::Lower => [
                Reg::Pcxi,
                Reg::A(11),
                Reg::A(2),
                Reg::A(3),
                Reg::D(0),
                Reg::D(1),
                Reg::D(2),
                Reg::D(3),
                Reg::A(4),
                Reg::A(5),
                Reg::A(6),
                Reg::A(7),
                Reg::D(4),
                Reg::D(5),
                Reg::D(6),
                Reg::D(7),
            ],
        }
    }
}

/// Architectural state the IL evaluator runs against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cpu {
    pub pc: u32,
    pub psw: Psw,
    pub d: [u32; 16],
    pub a: [u32; 16],
    pub pcxi: u32,
    /// Core special function registers without a dedicated field.
    pub sys: BTreeMap<u16, u32>,
    /// Saved contexts, most recent last.
    pub csa: Vec<Context>,
    #[serde(skip)]
    pub(crate) temps: BTreeMap<Reg, u64>,
    pub cfg: ArchConfig,
}

impl Cpu {
    pub fn new(cfg: ArchConfig) -> Self {
        Self {
            pc: 0,
            psw: Psw::empty(),
            d: [0; 16],
            a: [0; 16],
            pcxi: 0,
            sys: BTreeMap::new(),
            csa: Vec::new(),
            temps: BTreeMap::new(),
            cfg,
        }
    }

    pub fn reset(&mut self, reset_pc: u32) {
        self.pc = reset_pc;
    }

    /// Register value, zero-extended; pairs read as `high:low`.
    pub fn read_reg(&self, reg: Reg) -> u64 {
        match reg {
            Reg::D(n) => self.d[n as usize & 15] as u64,
            Reg::A(n) => self.a[n as usize & 15] as u64,
            Reg::E(_) | Reg::P(_) => match reg.halves() {
                Some((lo, hi)) => self.read_reg(lo) | (self.read_reg(hi) << 32),
                None => 0,
            },
            Reg::Psw => self.psw.bits() as u64,
            Reg::Pc => self.pc as u64,
            Reg::Pcxi => self.pcxi as u64,
            Reg::Sys(idx) => match canonical_sysreg(idx) {
                Some(alias) => self.read_reg(alias),
                None => self.sys.get(&idx).copied().unwrap_or(0) as u64,
            },
            Reg::Temp(_) | Reg::TempWide(_) => self.temps.get(&reg).copied().unwrap_or(0),
        }
    }

    pub fn write_reg(&mut self, reg: Reg, value: u64) {
        match reg {
            Reg::D(n) => self.d[n as usize & 15] = value as u32,
            Reg::A(n) => self.a[n as usize & 15] = value as u32,
            Reg::E(_) | Reg::P(_) => {
                if let Some((lo, hi)) = reg.halves() {
                    self.write_reg(lo, value);
                    self.write_reg(hi, value >> 32);
                }
            }
            Reg::Psw => self.psw = Psw::from_bits_retain(value as u32),
            Reg::Pc => self.pc = value as u32,
            Reg::Pcxi => self.pcxi = value as u32,
            Reg::Sys(idx) => match canonical_sysreg(idx) {
                Some(alias) => self.write_reg(alias, value),
                None => {
                    self.sys.insert(idx, value as u32);
                }
            },
            Reg::Temp(_) => {
                self.temps.insert(reg, value & 0xFFFF_FFFF);
            }
            Reg::TempWide(_) => {
                self.temps.insert(reg, value);
            }
        }
    }

    pub fn flag(&self, flag: Flag) -> bool {
        self.psw.bits() & (1 << flag.psw_bit()) != 0
    }

    pub fn set_flag(&mut self, flag: Flag, on: bool) {
        self.psw
            .set(Psw::from_bits_retain(1 << flag.psw_bit()), on);
    }

    pub fn interrupts_enabled(&self) -> bool {
        self.read_reg(Reg::Sys(ICR)) as u32 & ICR_IE != 0
    }

    pub(crate) fn set_interrupts(&mut self, on: bool) {
        let icr = self.read_reg(Reg::Sys(ICR)) as u32;
        let icr = if on { icr | ICR_IE } else { icr & !ICR_IE };
        self.write_reg(Reg::Sys(ICR), icr as u64);
    }

    /// Push a context frame and link PCXI to it.
    pub fn save_context(&mut self, kind: ContextKind) {
        let mut words = [0u32; 16];
        for (slot, reg) in words.iter_mut().zip(kind.layout()) {
            *slot = self.read_reg(reg) as u32;
        }
        self.csa.push(Context { kind, words });
        self.pcxi = self.csa.len() as u32;
    }

    /// Pop the most recent frame back into the registers.
    pub fn restore_context(&mut self, kind: ContextKind) -> Result<(), Trap> {
        let frame = self
            .csa
            .pop()
            .ok_or(Trap::ContextUnderflow { pc: self.pc })?;
        if frame.kind != kind {
            tracing::debug!(saved = ?frame.kind, wanted = ?kind, "restoring a mismatched context");
        }
        for (reg, word) in kind.layout().into_iter().zip(frame.words) {
            self.write_reg(reg, word as u64);
        }
        Ok(())
    }

    /// Fetch, decode, lift and execute one instruction.
    pub fn step<B: Bus, D: Decoder, X: Executor>(
        &mut self,
        bus: &mut B,
        dec: &D,
        exec: &X,
    ) -> Result<(), Trap> {
        let pc = self.pc;
        // Fetch up to four bytes; a 16-bit instruction at the end of the
        // window still decodes from the first two.
        let mut window = Vec::with_capacity(4);
        for i in 0..4 {
            match bus.read_u8(pc.wrapping_add(i)) {
                Ok(byte) => window.push(byte),
                Err(source) if window.is_empty() => return Err(Trap::Bus { addr: pc, source }),
                Err(_) => break,
            }
        }
        let insn = dec.decode(&window, pc).map_err(|error| {
            tracing::debug!(pc, %error, "fetch does not decode");
            Trap::InvalidInstruction { pc }
        })?;
        tracing::trace!(pc, mnemonic = insn.mnemonic(), "step");
        self.pc = insn.next();
        exec.exec(self, bus, &insn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_alias_their_halves() {
        let mut cpu = Cpu::new(ArchConfig::default());
        cpu.write_reg(Reg::E(4), 0x1111_2222_3333_4444);
        assert_eq!(cpu.d[4], 0x3333_4444);
        assert_eq!(cpu.d[5], 0x1111_2222);
        assert_eq!(cpu.read_reg(Reg::P(2)), 0);
    }

    #[test]
    fn flags_live_in_the_psw() {
        let mut cpu = Cpu::new(ArchConfig::default());
        cpu.set_flag(Flag::Sv, true);
        assert!(cpu.psw.contains(Psw::SV));
        assert!(cpu.flag(Flag::Fv));
        cpu.write_reg(Reg::Sys(0xFE04), 0);
        assert!(!cpu.flag(Flag::Sv));
    }

    #[test]
    fn contexts_round_trip() {
        let mut cpu = Cpu::new(ArchConfig::default());
        cpu.d[8] = 7;
        cpu.a[11] = 0x100;
        cpu.save_context(ContextKind::Upper);
        cpu.d[8] = 0;
        cpu.a[11] = 0;
        cpu.restore_context(ContextKind::Upper).unwrap();
        assert_eq!((cpu.d[8], cpu.a[11]), (7, 0x100));
        assert!(matches!(
            cpu.restore_context(ContextKind::Upper),
            Err(Trap::ContextUnderflow { .. })
        ));
    }
}
