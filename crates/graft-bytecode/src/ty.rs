//! Field and value types in JVM descriptor form
//!
//! A [`Type`] is either a primitive tag or a reference to a class by internal
//! (slash-separated) name, plus an array dimension count. Obfuscation records
//! are authored as descriptor strings (`"I"`, `"[LClient;"`), so types parse
//! from and print to that form.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised while parsing a type or signature descriptor
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DescriptorError {
    /// Descriptor ended before a complete type was read
    #[error("descriptor {descriptor:?} ends before a complete type")]
    UnexpectedEnd {
        /// The full descriptor being parsed
        descriptor: String,
    },

    /// A character that is not a valid type tag
    #[error("unknown type tag {tag:?} in descriptor {descriptor:?}")]
    UnknownTag {
        /// The offending character
        tag: char,
        /// The full descriptor being parsed
        descriptor: String,
    },

    /// An `L...;` class reference with no closing semicolon
    #[error("unterminated class reference in descriptor {descriptor:?}")]
    UnterminatedReference {
        /// The full descriptor being parsed
        descriptor: String,
    },

    /// Extra characters after the type was fully read
    #[error("trailing characters after type in descriptor {descriptor:?}")]
    TrailingInput {
        /// The full descriptor being parsed
        descriptor: String,
    },

    /// A method descriptor without a parenthesized argument list
    #[error("missing argument list in signature descriptor {descriptor:?}")]
    MissingArguments {
        /// The full descriptor being parsed
        descriptor: String,
    },

    /// More array dimensions than the class format allows
    #[error("more than 255 array dimensions in descriptor {descriptor:?}")]
    TooManyDimensions {
        /// The full descriptor being parsed
        descriptor: String,
    },
}

/// Primitive type tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Primitive {
    /// `byte` (descriptor `B`)
    Byte,
    /// `char` (descriptor `C`)
    Char,
    /// `double` (descriptor `D`)
    Double,
    /// `float` (descriptor `F`)
    Float,
    /// `int` (descriptor `I`)
    Int,
    /// `long` (descriptor `J`)
    Long,
    /// `short` (descriptor `S`)
    Short,
    /// `boolean` (descriptor `Z`)
    Boolean,
    /// `void` (descriptor `V`)
    Void,
}

impl Primitive {
    /// Descriptor tag character for this primitive
    pub const fn descriptor(self) -> char {
        match self {
            Primitive::Byte => 'B',
            Primitive::Char => 'C',
            Primitive::Double => 'D',
            Primitive::Float => 'F',
            Primitive::Int => 'I',
            Primitive::Long => 'J',
            Primitive::Short => 'S',
            Primitive::Boolean => 'Z',
            Primitive::Void => 'V',
        }
    }

    /// Source-level keyword, used in diagnostics
    pub const fn name(self) -> &'static str {
        match self {
            Primitive::Byte => "byte",
            Primitive::Char => "char",
            Primitive::Double => "double",
            Primitive::Float => "float",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Short => "short",
            Primitive::Boolean => "boolean",
            Primitive::Void => "void",
        }
    }

    /// Look up a primitive by its descriptor tag
    pub const fn from_descriptor(tag: char) -> Option<Primitive> {
        match tag {
            'B' => Some(Primitive::Byte),
            'C' => Some(Primitive::Char),
            'D' => Some(Primitive::Double),
            'F' => Some(Primitive::Float),
            'I' => Some(Primitive::Int),
            'J' => Some(Primitive::Long),
            'S' => Some(Primitive::Short),
            'Z' => Some(Primitive::Boolean),
            'V' => Some(Primitive::Void),
            _ => None,
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Element kind of a [`Type`], before array dimensions are applied
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Base {
    /// One of the fixed primitive tags
    Primitive(Primitive),
    /// Reference to a class by internal (slash-separated) name
    Object(String),
}

/// A field or value type: element kind plus array dimension count
///
/// Equality is structural. Only reference types participate in
/// cross-representation translation; primitives pass through every
/// translation unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Type {
    /// Element type before array dimensions are applied
    pub base: Base,
    /// Number of array dimensions (0 for a scalar)
    pub dims: u8,
}

impl Type {
    /// The `byte` type
    pub const BYTE: Type = Type::primitive(Primitive::Byte);
    /// The `char` type
    pub const CHAR: Type = Type::primitive(Primitive::Char);
    /// The `double` type
    pub const DOUBLE: Type = Type::primitive(Primitive::Double);
    /// The `float` type
    pub const FLOAT: Type = Type::primitive(Primitive::Float);
    /// The `int` type
    pub const INT: Type = Type::primitive(Primitive::Int);
    /// The `long` type
    pub const LONG: Type = Type::primitive(Primitive::Long);
    /// The `short` type
    pub const SHORT: Type = Type::primitive(Primitive::Short);
    /// The `boolean` type
    pub const BOOLEAN: Type = Type::primitive(Primitive::Boolean);
    /// The `void` type
    pub const VOID: Type = Type::primitive(Primitive::Void);

    /// Scalar primitive type
    pub const fn primitive(p: Primitive) -> Type {
        Type {
            base: Base::Primitive(p),
            dims: 0,
        }
    }

    /// Scalar reference type naming a class
    pub fn object(name: impl Into<String>) -> Type {
        Type {
            base: Base::Object(name.into()),
            dims: 0,
        }
    }

    /// Same element type with a different array dimension count
    pub fn with_dims(mut self, dims: u8) -> Type {
        self.dims = dims;
        self
    }

    /// True if the element type is a primitive tag
    ///
    /// Note that an array of primitives still reports `true` here; callers
    /// that care about reference-ness on the operand stack must also check
    /// [`dims`](Type::dims), as the instruction factories do.
    pub const fn is_primitive(&self) -> bool {
        matches!(self.base, Base::Primitive(_))
    }

    /// The primitive tag, if the element type is primitive
    pub const fn primitive_tag(&self) -> Option<Primitive> {
        match self.base {
            Base::Primitive(p) => Some(p),
            Base::Object(_) => None,
        }
    }

    /// The referenced class name, if the element type is a reference
    pub fn class_name(&self) -> Option<&str> {
        match &self.base {
            Base::Object(name) => Some(name.as_str()),
            Base::Primitive(_) => None,
        }
    }

    /// Parse a single type descriptor such as `"I"`, `"[J"`, or `"LClient;"`
    pub fn from_descriptor(descriptor: &str) -> Result<Type, DescriptorError> {
        let mut pos = 0;
        let ty = parse_type(descriptor, &mut pos)?;
        if pos != descriptor.len() {
            return Err(DescriptorError::TrailingInput {
                descriptor: descriptor.to_string(),
            });
        }
        Ok(ty)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.dims {
            f.write_str("[")?;
        }
        match &self.base {
            Base::Primitive(p) => write!(f, "{}", p.descriptor()),
            Base::Object(name) => write!(f, "L{name};"),
        }
    }
}

/// Parse one type starting at `pos`, advancing `pos` past it
///
/// Shared with signature parsing, which reads a sequence of types out of one
/// descriptor string.
pub(crate) fn parse_type(descriptor: &str, pos: &mut usize) -> Result<Type, DescriptorError> {
    let bytes = descriptor.as_bytes();
    let mut dims: usize = 0;
    while *pos < bytes.len() && bytes[*pos] == b'[' {
        dims += 1;
        *pos += 1;
    }
    if dims > u8::MAX as usize {
        return Err(DescriptorError::TooManyDimensions {
            descriptor: descriptor.to_string(),
        });
    }

    let tag = descriptor[*pos..]
        .chars()
        .next()
        .ok_or_else(|| DescriptorError::UnexpectedEnd {
            descriptor: descriptor.to_string(),
        })?;

    let base = if tag == 'L' {
        let rest = &descriptor[*pos + 1..];
        let semi = rest
            .find(';')
            .ok_or_else(|| DescriptorError::UnterminatedReference {
                descriptor: descriptor.to_string(),
            })?;
        let name = rest[..semi].to_string();
        *pos += 1 + semi + 1;
        Base::Object(name)
    } else {
        let p = Primitive::from_descriptor(tag).ok_or_else(|| DescriptorError::UnknownTag {
            tag,
            descriptor: descriptor.to_string(),
        })?;
        *pos += tag.len_utf8();
        Base::Primitive(p)
    };

    Ok(Type {
        base,
        dims: dims as u8,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_descriptor_roundtrip() {
        for p in [
            Primitive::Byte,
            Primitive::Char,
            Primitive::Double,
            Primitive::Float,
            Primitive::Int,
            Primitive::Long,
            Primitive::Short,
            Primitive::Boolean,
            Primitive::Void,
        ] {
            assert_eq!(Primitive::from_descriptor(p.descriptor()), Some(p));
        }
        assert_eq!(Primitive::from_descriptor('X'), None);
    }

    #[test]
    fn test_parse_scalar_primitive() {
        let ty = Type::from_descriptor("I").unwrap();
        assert_eq!(ty, Type::INT);
        assert!(ty.is_primitive());
        assert_eq!(ty.to_string(), "I");
    }

    #[test]
    fn test_parse_reference() {
        let ty = Type::from_descriptor("LClient;").unwrap();
        assert_eq!(ty, Type::object("Client"));
        assert_eq!(ty.class_name(), Some("Client"));
        assert!(!ty.is_primitive());
        assert_eq!(ty.to_string(), "LClient;");
    }

    #[test]
    fn test_parse_arrays() {
        let ints = Type::from_descriptor("[[I").unwrap();
        assert_eq!(ints, Type::INT.with_dims(2));
        assert_eq!(ints.to_string(), "[[I");

        let refs = Type::from_descriptor("[Lgraft/api/Widget;").unwrap();
        assert_eq!(refs, Type::object("graft/api/Widget").with_dims(1));
        assert_eq!(refs.to_string(), "[Lgraft/api/Widget;");
    }

    #[test]
    fn test_array_of_primitive_still_reports_primitive_base() {
        let ty = Type::from_descriptor("[I").unwrap();
        assert!(ty.is_primitive());
        assert_eq!(ty.dims, 1);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Type::from_descriptor(""),
            Err(DescriptorError::UnexpectedEnd { .. })
        ));
        assert!(matches!(
            Type::from_descriptor("["),
            Err(DescriptorError::UnexpectedEnd { .. })
        ));
        assert!(matches!(
            Type::from_descriptor("Q"),
            Err(DescriptorError::UnknownTag { tag: 'Q', .. })
        ));
        assert!(matches!(
            Type::from_descriptor("LClient"),
            Err(DescriptorError::UnterminatedReference { .. })
        ));
        assert!(matches!(
            Type::from_descriptor("II"),
            Err(DescriptorError::TrailingInput { .. })
        ));
    }

    #[test]
    fn test_structural_equality_ignores_nothing() {
        assert_eq!(Type::object("Client"), Type::object("Client"));
        assert_ne!(Type::object("Client"), Type::object("Client").with_dims(1));
        assert_ne!(Type::object("Client"), Type::object("Actor"));
        assert_ne!(Type::INT, Type::LONG);
    }
}
