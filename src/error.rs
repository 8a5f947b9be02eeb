use serde::Serialize;

/// Why a byte sequence does not decode to an instruction.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DecodeError {
    #[error("truncated instruction at {addr:#010x}: need {need} bytes, have {have}")]
    Truncated { addr: u32, need: u8, have: usize },
    #[error("unknown primary opcode {primary:#04x} at {addr:#010x}")]
    UnknownPrimary { addr: u32, primary: u8 },
    #[error("unknown secondary opcode {secondary:#04x} under primary {primary:#04x} at {addr:#010x}")]
    UnknownSecondary { addr: u32, primary: u8, secondary: u8 },
    #[error("odd register pair index {index} in {mnemonic} at {addr:#010x}")]
    OddPair {
        addr: u32,
        mnemonic: &'static str,
        index: u8,
        len: u8,
    },
    #[error("{mnemonic} at {addr:#010x} requires TriCore v1.6")]
    RequiresV16 {
        addr: u32,
        mnemonic: &'static str,
        len: u8,
    },
    #[error("{mnemonic} at {addr:#010x} has operands the lifter cannot represent")]
    Unliftable {
        addr: u32,
        mnemonic: &'static str,
        len: u8,
    },
}

impl DecodeError {
    /// Number of bytes a host should skip past the bad encoding.
    ///
    /// 2 when the 16-bit path rejected it, 4 otherwise (including the case
    /// where not even one half-word was readable).
    pub fn skip_len(&self) -> u8 {
        match *self {
            DecodeError::Truncated { need, .. } => need,
            DecodeError::UnknownPrimary { primary, .. }
            | DecodeError::UnknownSecondary { primary, .. } => {
                if primary & 1 == 1 {
                    4
                } else {
                    2
                }
            }
            DecodeError::OddPair { len, .. }
            | DecodeError::RequiresV16 { len, .. }
            | DecodeError::Unliftable { len, .. } => len,
        }
    }
}

/// Entry-point failure: the decode error plus the length the host may
/// assume to keep sweeping.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[error("{error} (skip {length} bytes)")]
pub struct Invalid {
    pub error: DecodeError,
    pub length: u8,
}

impl From<DecodeError> for Invalid {
    fn from(error: DecodeError) -> Self {
        Self {
            length: error.skip_len(),
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_lengths_follow_the_rejecting_path() {
        let short = DecodeError::UnknownPrimary { addr: 0, primary: 0x18 };
        let long = DecodeError::UnknownSecondary {
            addr: 0,
            primary: 0x0B,
            secondary: 0xFF,
        };
        let empty = DecodeError::Truncated { addr: 0, need: 4, have: 0 };
        assert_eq!(Invalid::from(short).length, 2);
        assert_eq!(Invalid::from(long).length, 4);
        assert_eq!(Invalid::from(empty).length, 4);
    }

    #[test]
    fn rejected_short_encodings_skip_two() {
        let odd = DecodeError::OddPair {
            addr: 0,
            mnemonic: "mov",
            index: 1,
            len: 2,
        };
        let newer = DecodeError::RequiresV16 {
            addr: 0,
            mnemonic: "jeq",
            len: 2,
        };
        assert_eq!(Invalid::from(odd).length, 2);
        assert_eq!(Invalid::from(newer).length, 2);
    }
}
