//! Synthesized instruction values
//!
//! The injector hands these to the (out-of-scope) stream rewriter. Each
//! variant pairs an [`Opcode`] with the operand that category of instruction
//! carries.

use crate::opcode::Opcode;
use crate::pool::MethodRef;
use std::fmt;

/// A single synthesized instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Load a local variable onto the operand stack
    Load {
        /// One of the load opcodes
        opcode: Opcode,
        /// Local-variable slot index
        slot: u16,
    },
    /// Return from the current method
    Return {
        /// One of the return opcodes
        opcode: Opcode,
    },
    /// Invoke a method through a symbolic reference
    Invoke {
        /// `Invokestatic` or `Invokevirtual`
        opcode: Opcode,
        /// The method being called
        target: MethodRef,
    },
}

impl Instruction {
    /// The opcode this instruction encodes as
    pub const fn opcode(&self) -> Opcode {
        match self {
            Instruction::Load { opcode, .. } => *opcode,
            Instruction::Return { opcode } => *opcode,
            Instruction::Invoke { opcode, .. } => *opcode,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Load { opcode, slot } => write!(f, "{} {}", opcode.mnemonic(), slot),
            Instruction::Return { opcode } => f.write_str(opcode.mnemonic()),
            Instruction::Invoke { opcode, target } => {
                write!(f, "{} {}", opcode.mnemonic(), target)
            }
        }
    }
}
