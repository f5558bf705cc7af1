//! Bytecode opcodes produced by instruction synthesis
//!
//! This module carries only the load/return/invoke subset the injector
//! emits, with the class-format byte values. The full instruction stream is
//! owned by the surrounding pipeline; synthesis never reads or rewrites it.

/// Bytecode opcode enumeration
///
/// Opcodes are organized into categories:
/// - 0x15-0x19: local-variable loads, one per operand category
/// - 0xAC-0xB1: returns, one per operand category plus the no-value return
/// - 0xB6/0xB8: virtual and static invocation
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // ===== Local-variable loads (0x15-0x19) =====
    /// Load int-category local (also byte/char/short/boolean)
    Iload = 0x15,
    /// Load long local
    Lload = 0x16,
    /// Load float local
    Fload = 0x17,
    /// Load double local
    Dload = 0x18,
    /// Load reference local (objects and arrays)
    Aload = 0x19,

    // ===== Returns (0xAC-0xB1) =====
    /// Return int-category value
    Ireturn = 0xAC,
    /// Return long value
    Lreturn = 0xAD,
    /// Return float value
    Freturn = 0xAE,
    /// Return double value
    Dreturn = 0xAF,
    /// Return reference value
    Areturn = 0xB0,
    /// Return with no value
    Return = 0xB1,

    // ===== Invocation (0xB6, 0xB8) =====
    /// Invoke an instance method with virtual dispatch
    Invokevirtual = 0xB6,
    /// Invoke a static method
    Invokestatic = 0xB8,
}

impl Opcode {
    /// Assembler mnemonic, used in diagnostics and dumps
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Iload => "iload",
            Opcode::Lload => "lload",
            Opcode::Fload => "fload",
            Opcode::Dload => "dload",
            Opcode::Aload => "aload",
            Opcode::Ireturn => "ireturn",
            Opcode::Lreturn => "lreturn",
            Opcode::Freturn => "freturn",
            Opcode::Dreturn => "dreturn",
            Opcode::Areturn => "areturn",
            Opcode::Return => "return",
            Opcode::Invokevirtual => "invokevirtual",
            Opcode::Invokestatic => "invokestatic",
        }
    }
}
