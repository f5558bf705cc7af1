//! Method signatures
//!
//! A [`Signature`] is one return [`Type`] plus the ordered argument types.
//! Equality is structural over both; the resolver has a separate
//! argument-only comparison for the cases where return types are not
//! trustworthy across representations.

use crate::ty::{parse_type, DescriptorError, Type};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A method signature: return type plus ordered argument types
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    /// Return type (may be `void`)
    pub return_type: Type,
    /// Argument types in declaration order
    pub arguments: Vec<Type>,
}

impl Signature {
    /// Build a signature from parts
    pub fn new(return_type: Type, arguments: Vec<Type>) -> Signature {
        Signature {
            return_type,
            arguments,
        }
    }

    /// Parse a method descriptor such as `"(ILClient;)V"`
    pub fn from_descriptor(descriptor: &str) -> Result<Signature, DescriptorError> {
        let missing = || DescriptorError::MissingArguments {
            descriptor: descriptor.to_string(),
        };

        if !descriptor.starts_with('(') {
            return Err(missing());
        }
        let mut pos = 1;
        let mut arguments = Vec::new();
        loop {
            match descriptor.as_bytes().get(pos) {
                Some(b')') => {
                    pos += 1;
                    break;
                }
                Some(_) => arguments.push(parse_type(descriptor, &mut pos)?),
                None => return Err(missing()),
            }
        }
        let return_type = parse_type(descriptor, &mut pos)?;
        if pos != descriptor.len() {
            return Err(DescriptorError::TrailingInput {
                descriptor: descriptor.to_string(),
            });
        }
        Ok(Signature {
            return_type,
            arguments,
        })
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for arg in &self.arguments {
            write!(f, "{arg}")?;
        }
        write!(f, "){}", self.return_type)
    }
}
