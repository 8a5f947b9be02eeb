//! TriCore v1.3/v1.6 decoder with three facets over one dispatch table:
//! control-flow info, tokenized disassembly and an IL lifter. A small IL
//! evaluator runs lifted code for testing.

pub mod arch;
pub mod cpu;
pub mod decoder;
pub mod disasm;
pub mod error;
pub mod exec;
pub mod fields;
pub mod flags;
pub mod il;
pub mod info;
pub mod isa;
pub mod lift;
pub mod memory;
pub mod regs;

pub use arch::{nop_canonicalize, ArchConfig, IsaVariant, TriCore};
pub use cpu::{Cpu, Trap};
pub use decoder::{decode, Decoder, Insn};
pub use disasm::Token;
pub use error::{DecodeError, Invalid};
pub use exec::{Executor, IlExecutor};
pub use flags::{Flag, FlagWrite};
pub use il::{Expr, IlBuilder, IlTrace, Stmt};
pub use info::{BranchKind, InstructionInfo};
pub use memory::{Bus, LinearMemory};
pub use regs::Reg;
