use serde::{Deserialize, Serialize};

/// Architectural (and lifter-temporary) register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Reg {
    D(u8),
    A(u8),
    /// 64-bit data pair, even index only.
    E(u8),
    /// 64-bit address pair, even index only.
    P(u8),
    Psw,
    Pc,
    Pcxi,
    /// Core special function register addressed by its 16-bit CSFR offset.
    Sys(u16),
    /// 32-bit lifter temporary.
    Temp(u8),
    /// 64-bit lifter temporary.
    TempWide(u8),
}

pub const SP: Reg = Reg::A(10);
pub const RA: Reg = Reg::A(11);
pub const GLOBAL_ADDRESS_REGS: [Reg; 4] = [Reg::A(0), Reg::A(1), Reg::A(8), Reg::A(9)];

impl Reg {
    /// Width in bytes.
    pub fn size(self) -> u8 {
        match self {
            Reg::E(_) | Reg::P(_) | Reg::TempWide(_) => 8,
            _ => 4,
        }
    }

    /// Low and high 32-bit halves of a pair.
    pub fn halves(self) -> Option<(Reg, Reg)> {
        match self {
            Reg::E(n) => Some((Reg::D(n), Reg::D(n + 1))),
            Reg::P(n) => Some((Reg::A(n), Reg::A(n + 1))),
            _ => None,
        }
    }

    pub fn name(self) -> String {
        match self {
            Reg::D(n) => format!("d{n}"),
            Reg::A(n) => format!("a{n}"),
            Reg::E(n) => format!("e{n}"),
            Reg::P(n) => format!("p{n}"),
            Reg::Psw => "psw".into(),
            Reg::Pc => "pc".into(),
            Reg::Pcxi => "pcxi".into(),
            Reg::Sys(idx) => match sysreg_name(idx) {
                Some(name) => name.to_ascii_lowercase(),
                None => format!("csfr_{idx:04x}"),
            },
            Reg::Temp(n) => format!("t{n}"),
            Reg::TempWide(n) => format!("tw{n}"),
        }
    }
}

impl std::fmt::Display for Reg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

/// Where a register lives inside its full-width container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegisterInfo {
    pub full_width: Reg,
    pub offset: u8,
    pub size: u8,
}

/// Data registers are halves of E pairs, address registers halves of P
/// pairs. Everything else is its own container.
pub fn register_info(reg: Reg) -> RegisterInfo {
    match reg {
        Reg::D(n) => RegisterInfo {
            full_width: Reg::E(n & !1),
            offset: (n & 1) * 4,
            size: 4,
        },
        Reg::A(n) => RegisterInfo {
            full_width: Reg::P(n & !1),
            offset: (n & 1) * 4,
            size: 4,
        },
        other => RegisterInfo {
            full_width: other,
            offset: 0,
            size: other.size(),
        },
    }
}

/// Every architectural register a host should list.
pub fn all_registers() -> Vec<Reg> {
    let mut regs = Vec::with_capacity(64 + SYSTEM_REGISTERS.len());
    regs.extend((0..16).map(Reg::D));
    regs.extend((0..16).map(Reg::A));
    regs.extend((0..16).step_by(2).map(Reg::E));
    regs.extend((0..16).step_by(2).map(Reg::P));
    regs.extend([Reg::Psw, Reg::Pc, Reg::Pcxi]);
    regs.extend(
        SYSTEM_REGISTERS
            .iter()
            .filter(|(idx, _)| canonical_sysreg(*idx).is_none())
            .map(|(idx, _)| Reg::Sys(*idx)),
    );
    regs
}

/// Core special function registers, by CSFR offset.
pub const SYSTEM_REGISTERS: &[(u16, &str)] = &[
    // memory management
    (0x8000, "MMU_CON"),
    (0x8004, "MMU_ASI"),
    (0x8008, "MMU_TVA"),
    (0x800C, "MMU_TPA"),
    (0x8010, "MMU_TPX"),
    (0x8014, "MMU_TFA"),
    // protection
    (0x9200, "PSTR"),
    (0x9400, "COMPAT"),
    (0x9000, "DSTR"),
    (0x9010, "DATR"),
    (0x9018, "DEADD"),
    (0x9020, "DIEAR"),
    (0x9024, "DIETR"),
    (0x9040, "DCON0"),
    (0x9044, "DCON1"),
    (0x9048, "DCON2"),
    (0x920C, "PCON0"),
    (0x9204, "PCON1"),
    (0x9208, "PCON2"),
    (0x9210, "PIEAR"),
    (0x9214, "PIETR"),
    (0xE000, "CPXE_0"),
    (0xE004, "CPXE_1"),
    (0xE008, "CPXE_2"),
    (0xE00C, "CPXE_3"),
    (0xE010, "DPRE_0"),
    (0xE014, "DPRE_1"),
    (0xE018, "DPRE_2"),
    (0xE01C, "DPRE_3"),
    (0xE020, "DPWE_0"),
    (0xE024, "DPWE_1"),
    (0xE028, "DPWE_2"),
    (0xE02C, "DPWE_3"),
    (0xE400, "TPS_CON"),
    (0xE404, "TPS_TIMER0"),
    (0xE408, "TPS_TIMER1"),
    (0xE40C, "TPS_TIMER2"),
    // FPU
    (0xA000, "FPU_TRAP_CON"),
    (0xA004, "FPU_TRAP_PC"),
    (0xA008, "FPU_TRAP_OPC"),
    (0xA010, "FPU_TRAP_SRC1"),
    (0xA014, "FPU_TRAP_SRC2"),
    (0xA018, "FPU_TRAP_SRC3"),
    // data protection ranges
    (0xC000, "DPR0_L"),
    (0xC004, "DPR0_U"),
    (0xC008, "DPR1_L"),
    (0xC00C, "DPR1_U"),
    (0xC010, "DPR2_L"),
    (0xC014, "DPR2_U"),
    (0xC018, "DPR3_L"),
    (0xC01C, "DPR3_U"),
    (0xC020, "DPR4_L"),
    (0xC024, "DPR4_U"),
    (0xC028, "DPR5_L"),
    (0xC02C, "DPR5_U"),
    (0xC030, "DPR6_L"),
    (0xC034, "DPR6_U"),
    (0xC038, "DPR7_L"),
    (0xC03C, "DPR7_U"),
    // code protection ranges
    (0xD000, "CPR0_L"),
    (0xD004, "CPR0_U"),
    (0xD008, "CPR1_L"),
    (0xD00C, "CPR1_U"),
    (0xD010, "CPR2_L"),
    (0xD014, "CPR2_U"),
    (0xD018, "CPR3_L"),
    (0xD01C, "CPR3_U"),
    // performance counters
    (0xFC00, "CCTRL"),
    (0xFC04, "CCNT"),
    (0xFC08, "ICNT"),
    (0xFC0C, "M1CNT"),
    (0xFC10, "M2CNT"),
    (0xFC14, "M3CNT"),
    // debug
    (0xFD00, "DBGSR"),
    (0xFD08, "EXEVT"),
    (0xFD0C, "CREVT"),
    (0xFD10, "SWEVT"),
    (0xFD20, "TR0EVT"),
    (0xFD24, "TR0ADR"),
    (0xFD28, "TR1EVT"),
    (0xFD2C, "TR1ADR"),
    (0xFD30, "TRIG_ACC"),
    (0xFD40, "DMS"),
    (0xFD44, "DCX"),
    (0xFD48, "DBGTCR"),
    // core
    (0xFE00, "PCXI"),
    (0xFE04, "PSW"),
    (0xFE08, "PC"),
    (0xFE14, "SYSCON"),
    (0xFE18, "CPU_ID"),
    (0xFE1C, "CORE_ID"),
    (0xFE20, "BIV"),
    (0xFE24, "BTV"),
    (0xFE28, "ISP"),
    (0xFE2C, "ICR"),
    (0xFE38, "FCX"),
    (0xFE3C, "LCX"),
    // GPR mirrors
    (0xFF00, "D0"),
    (0xFF04, "D1"),
    (0xFF08, "D2"),
    (0xFF0C, "D3"),
    (0xFF10, "D4"),
    (0xFF14, "D5"),
    (0xFF18, "D6"),
    (0xFF1C, "D7"),
    (0xFF20, "D8"),
    (0xFF24, "D9"),
    (0xFF28, "D10"),
    (0xFF2C, "D11"),
    (0xFF30, "D12"),
    (0xFF34, "D13"),
    (0xFF38, "D14"),
    (0xFF3C, "D15"),
    (0xFF80, "A0"),
    (0xFF84, "A1"),
    (0xFF88, "A2"),
    (0xFF8C, "A3"),
    (0xFF90, "A4"),
    (0xFF94, "A5"),
    (0xFF98, "A6"),
    (0xFF9C, "A7"),
    (0xFFA0, "A8"),
    (0xFFA4, "A9"),
    (0xFFA8, "A10"),
    (0xFFAC, "A11"),
    (0xFFB0, "A12"),
    (0xFFB4, "A13"),
    (0xFFB8, "A14"),
    (0xFFBC, "A15"),
];

pub fn sysreg_name(idx: u16) -> Option<&'static str> {
    SYSTEM_REGISTERS
        .iter()
        .find(|(i, _)| *i == idx)
        .map(|(_, name)| *name)
}

/// CSFR offsets that alias a register modeled on its own.
pub fn canonical_sysreg(idx: u16) -> Option<Reg> {
    match idx {
        0xFE00 => Some(Reg::Pcxi),
        0xFE04 => Some(Reg::Psw),
        0xFE08 => Some(Reg::Pc),
        0xFF00..=0xFF3C if idx % 4 == 0 => Some(Reg::D(((idx - 0xFF00) / 4) as u8)),
        0xFF80..=0xFFBC if idx % 4 == 0 => Some(Reg::A(((idx - 0xFF80) / 4) as u8)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_regs_live_in_pairs() {
        let info = register_info(Reg::D(5));
        assert_eq!(info.full_width, Reg::E(4));
        assert_eq!(info.offset, 4);
        assert_eq!(register_info(Reg::E(2)).size, 8);
        assert_eq!(register_info(Reg::Sys(0xFE14)).full_width, Reg::Sys(0xFE14));
    }

    #[test]
    fn sysreg_lookup() {
        assert_eq!(sysreg_name(0xFE04), Some("PSW"));
        assert_eq!(Reg::Sys(0xFE38).name(), "fcx");
        assert_eq!(Reg::Sys(0x1234).name(), "csfr_1234");
        assert_eq!(canonical_sysreg(0xFF3C), Some(Reg::D(15)));
        assert_eq!(canonical_sysreg(0xFFA8), Some(SP));
    }

    #[test]
    fn register_list_has_no_aliased_csfrs() {
        let regs = all_registers();
        assert!(regs.contains(&Reg::E(14)));
        assert!(!regs.contains(&Reg::E(1)));
        assert!(regs.contains(&Reg::Sys(0xFE38)));
        assert!(!regs.contains(&Reg::Sys(0xFE04)));
    }

    #[test]
    fn sysreg_offsets_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for (idx, name) in SYSTEM_REGISTERS {
            assert!(seen.insert(*idx), "duplicate CSFR offset for {name}");
        }
    }
}
