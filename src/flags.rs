use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// A single status bit the lifter can read or write.
///
/// The FPU bits share PSW[31:26] with the integer status bits, so `Fs`
/// and `C` name the same physical bit. They stay distinct here because the
/// write-set of an instruction is declared in terms of one or the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flag {
    C,
    V,
    Sv,
    Av,
    Sav,
    Fs,
    Fi,
    Fv,
    Fz,
    Fu,
    Fx,
}

impl Flag {
    pub const ALU: [Flag; 5] = [Flag::C, Flag::V, Flag::Sv, Flag::Av, Flag::Sav];
    pub const FPU: [Flag; 6] = [Flag::Fs, Flag::Fi, Flag::Fv, Flag::Fz, Flag::Fu, Flag::Fx];

    /// Bit position inside PSW.
    pub fn psw_bit(self) -> u32 {
        match self {
            Flag::C | Flag::Fs => 31,
            Flag::V | Flag::Fi => 30,
            Flag::Sv | Flag::Fv => 29,
            Flag::Av | Flag::Fz => 28,
            Flag::Sav | Flag::Fu => 27,
            Flag::Fx => 26,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Flag::C => "c",
            Flag::V => "v",
            Flag::Sv => "sv",
            Flag::Av => "av",
            Flag::Sav => "sav",
            Flag::Fs => "fs",
            Flag::Fi => "fi",
            Flag::Fv => "fv",
            Flag::Fz => "fz",
            Flag::Fu => "fu",
            Flag::Fx => "fx",
        }
    }

    pub fn write_bit(self) -> FlagWrite {
        match self {
            Flag::C => FlagWrite::C,
            Flag::V => FlagWrite::V,
            Flag::Sv => FlagWrite::SV,
            Flag::Av => FlagWrite::AV,
            Flag::Sav => FlagWrite::SAV,
            Flag::Fs => FlagWrite::FS,
            Flag::Fi => FlagWrite::FI,
            Flag::Fv => FlagWrite::FV,
            Flag::Fz => FlagWrite::FZ,
            Flag::Fu => FlagWrite::FU,
            Flag::Fx => FlagWrite::FX,
        }
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Declared PSW write-set of one dispatch row.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct FlagWrite: u16 {
        const C = 1 << 0;
        const V = 1 << 1;
        const SV = 1 << 2;
        const AV = 1 << 3;
        const SAV = 1 << 4;
        const FS = 1 << 5;
        const FI = 1 << 6;
        const FV = 1 << 7;
        const FZ = 1 << 8;
        const FU = 1 << 9;
        const FX = 1 << 10;
    }
}

impl FlagWrite {
    pub const NONE: Self = Self::empty();
    pub const VSVAV: Self = Self::V.union(Self::SV).union(Self::AV);
    pub const VSVAVSAV: Self = Self::VSVAV.union(Self::SAV);
    pub const ALL: Self = Self::C.union(Self::VSVAVSAV);
    pub const FS_FI: Self = Self::FS.union(Self::FI);
    pub const FS_FX: Self = Self::FS.union(Self::FX);
    pub const FS_FI_FX: Self = Self::FS_FI.union(Self::FX);
    pub const FP_ARITH: Self = Self::FS_FI_FX.union(Self::FV).union(Self::FU);
    pub const ALL_FP: Self = Self::FP_ARITH.union(Self::FZ);

    /// Flags in this set, in PSW order.
    pub fn flags(self) -> impl Iterator<Item = Flag> {
        Flag::ALU
            .into_iter()
            .chain(Flag::FPU)
            .filter(move |f| self.contains(f.write_bit()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_sets_nest() {
        assert!(FlagWrite::ALL.contains(FlagWrite::VSVAVSAV));
        assert!(FlagWrite::VSVAVSAV.contains(FlagWrite::VSVAV));
        assert!(!FlagWrite::VSVAV.contains(FlagWrite::SAV));
        assert!(FlagWrite::ALL_FP.contains(FlagWrite::FP_ARITH));
        assert!(!FlagWrite::FP_ARITH.contains(FlagWrite::FZ));
        assert_eq!(FlagWrite::ALL.flags().count(), 5);
        assert_eq!(FlagWrite::ALL_FP.flags().count(), 6);
    }

    #[test]
    fn fpu_bits_alias_alu_bits() {
        assert_eq!(Flag::Fs.psw_bit(), Flag::C.psw_bit());
        assert_eq!(Flag::Fu.psw_bit(), Flag::Sav.psw_bit());
        assert_eq!(Flag::Fx.psw_bit(), 26);
    }
}
