//! The decoder object and its three entry points.

use serde::{Deserialize, Serialize};

use crate::decoder::{Decoder, Insn};
use crate::disasm::{self, Token};
use crate::error::{DecodeError, Invalid};
use crate::il::IlBuilder;
use crate::info::{self, InstructionInfo};
use crate::lift;
use crate::regs::{Reg, RA, SP};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
pub enum IsaVariant {
    #[value(name = "v1.3")]
    #[serde(rename = "v1.3")]
    V13,
    #[default]
    #[value(name = "v1.6")]
    #[serde(rename = "v1.6")]
    V16,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchConfig {
    pub variant: IsaVariant,
}

/// Stateless TriCore decoder; cheap to copy and safe to share.
#[derive(Debug, Clone, Copy, Default)]
pub struct TriCore {
    cfg: ArchConfig,
}

impl TriCore {
    pub const STACK_POINTER: Reg = SP;
    pub const LINK_REGISTER: Reg = RA;
    pub const ADDRESS_SIZE: usize = 4;
    pub const DEFAULT_INT_SIZE: usize = 4;
    pub const INSTRUCTION_ALIGNMENT: usize = 2;
    pub const MAX_INSTRUCTION_LENGTH: usize = 4;
    pub const LITTLE_ENDIAN: bool = true;

    pub fn new(cfg: ArchConfig) -> Self {
        Self { cfg }
    }

    pub fn with_variant(variant: IsaVariant) -> Self {
        Self::new(ArchConfig { variant })
    }

    pub fn config(&self) -> ArchConfig {
        self.cfg
    }

    fn decode_logged(&self, bytes: &[u8], addr: u32) -> Result<Insn, Invalid> {
        self.decode(bytes, addr).map_err(|error| {
            tracing::debug!(addr, %error, "invalid encoding");
            Invalid::from(error)
        })
    }

    /// Length and control-flow edges of the instruction at `addr`.
    pub fn probe_info(
        &self,
        bytes: &[u8],
        addr: u32,
        max_len: usize,
    ) -> Result<InstructionInfo, Invalid> {
        let window = &bytes[..bytes.len().min(max_len)];
        let insn = self.decode_logged(window, addr)?;
        Ok(info::classify(&insn))
    }

    pub fn render_text(&self, bytes: &[u8], addr: u32) -> Result<(u8, Vec<Token>), Invalid> {
        let insn = self.decode_logged(bytes, addr)?;
        Ok((insn.len, disasm::tokens(&insn)))
    }

    /// Lift one instruction into `il`. Nothing is emitted on failure.
    pub fn lift<B: IlBuilder + ?Sized>(
        &self,
        bytes: &[u8],
        addr: u32,
        il: &mut B,
    ) -> Result<u8, Invalid> {
        let insn = self.decode_logged(bytes, addr)?;
        lift::lift(&insn, il).map_err(|error| {
            tracing::debug!(addr, %error, "lift failed");
            Invalid::from(DecodeError::Unliftable {
                addr,
                mnemonic: insn.mnemonic(),
                len: insn.len,
            })
        })?;
        Ok(insn.len)
    }
}

/// Overwrite `buf` with NOPs: the 32-bit `nop` when the buffer starts a
/// 32-bit encoding and four bytes fit, 16-bit `nop`s otherwise. A trailing
/// odd byte is left alone.
pub fn nop_canonicalize(buf: &mut [u8]) {
    if buf.len() >= 4 && buf[0] & 1 == 1 {
        buf[..4].copy_from_slice(&[0x0D, 0x00, 0x00, 0x00]);
        return;
    }
    for half in buf.chunks_exact_mut(2) {
        half.copy_from_slice(&[0x00, 0x00]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_order() {
        assert!(IsaVariant::V13 < IsaVariant::V16);
        assert_eq!(ArchConfig::default().variant, IsaVariant::V16);
    }

    #[test]
    fn nops() {
        let mut buf = [0x6D, 0x00, 0x10, 0x00];
        nop_canonicalize(&mut buf);
        assert_eq!(buf, [0x0D, 0x00, 0x00, 0x00]);

        let mut buf = [0x3C, 0x05, 0x82, 0x10];
        nop_canonicalize(&mut buf);
        assert_eq!(buf, [0, 0, 0, 0]);

        let mut buf = [0x6D, 0x00];
        nop_canonicalize(&mut buf);
        assert_eq!(buf, [0, 0]);
    }

    #[test]
    fn probe_respects_max_len() {
        let cpu = TriCore::default();
        let bytes = [0x6D, 0x00, 0x10, 0x00];
        let err = cpu.probe_info(&bytes, 0, 2).unwrap_err();
        assert_eq!(err.length, 4);
        assert!(cpu.probe_info(&bytes, 0, 4).is_ok());
    }
}
