//! Graft class-group definitions
//!
//! This crate provides the data model the graft injector resolves against:
//! the type/signature algebra in JVM descriptor form, class definitions with
//! recorded deobfuscation metadata, class groups with name indexes and
//! ancestor iteration, symbolic pool references, and the opcode/instruction
//! values that instruction synthesis produces.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod class;
pub mod group;
pub mod instruction;
pub mod opcode;
pub mod pool;
pub mod signature;
pub mod ty;

pub use class::{ClassDef, Field, Method};
pub use group::{Ancestors, ClassGroup, ClassId, FieldId, MethodId};
pub use instruction::Instruction;
pub use opcode::Opcode;
pub use pool::{FieldRef, MethodRef};
pub use signature::Signature;
pub use ty::{Base, DescriptorError, Primitive, Type};
