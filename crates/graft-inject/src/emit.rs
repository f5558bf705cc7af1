//! Instruction synthesis
//!
//! Total, pure factories mapping a type and calling convention to the
//! category-correct instruction. There is no search and no recoverable
//! failure here; asking to load a `void` is a programming error and panics.

use graft_bytecode::{Instruction, MethodRef, Opcode, Primitive, Type};

/// The load instruction for a local of type `ty` in `slot`
///
/// Objects and arrays load as references; byte, char, short, and boolean
/// share the int-width load.
///
/// # Panics
///
/// Panics on the `void` type, which has no load instruction.
pub fn load_for(ty: &Type, slot: u16) -> Instruction {
    let opcode = match scalar_tag(ty) {
        None => Opcode::Aload,
        Some(
            Primitive::Byte
            | Primitive::Char
            | Primitive::Int
            | Primitive::Short
            | Primitive::Boolean,
        ) => Opcode::Iload,
        Some(Primitive::Double) => Opcode::Dload,
        Some(Primitive::Float) => Opcode::Fload,
        Some(Primitive::Long) => Opcode::Lload,
        Some(Primitive::Void) => panic!("no load instruction for void"),
    };

    Instruction::Load { opcode, slot }
}

/// The return instruction for a method whose return type is `ty`
///
/// Includes the no-value `return` for `void`; total over every type.
pub fn return_for(ty: &Type) -> Instruction {
    let opcode = match scalar_tag(ty) {
        None => Opcode::Areturn,
        Some(
            Primitive::Byte
            | Primitive::Char
            | Primitive::Int
            | Primitive::Short
            | Primitive::Boolean,
        ) => Opcode::Ireturn,
        Some(Primitive::Double) => Opcode::Dreturn,
        Some(Primitive::Float) => Opcode::Freturn,
        Some(Primitive::Long) => Opcode::Lreturn,
        Some(Primitive::Void) => Opcode::Return,
    };

    Instruction::Return { opcode }
}

/// The invocation instruction for `target` under the given calling
/// convention
pub fn invoke_for(target: MethodRef, is_static: bool) -> Instruction {
    Instruction::Invoke {
        opcode: if is_static {
            Opcode::Invokestatic
        } else {
            Opcode::Invokevirtual
        },
        target,
    }
}

/// The primitive tag of a scalar; arrays count as references
fn scalar_tag(ty: &Type) -> Option<Primitive> {
    if ty.dims > 0 {
        return None;
    }
    ty.primitive_tag()
}
