//! Symbolic member references
//!
//! Pool-style references name a member by owner class, name, and
//! signature/type without pointing into any particular
//! [`ClassGroup`](crate::ClassGroup). Invoke instructions embed them, and the resolver
//! accepts them as search keys (owner becomes the class hint).

use crate::signature::Signature;
use crate::ty::Type;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbolic reference to a method
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodRef {
    /// Owner class name
    pub owner: String,
    /// Method name
    pub name: String,
    /// Method signature
    pub signature: Signature,
}

impl MethodRef {
    /// Build a method reference
    pub fn new(owner: impl Into<String>, name: impl Into<String>, signature: Signature) -> MethodRef {
        MethodRef {
            owner: owner.into(),
            name: name.into(),
            signature,
        }
    }
}

impl fmt::Display for MethodRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}{}", self.owner, self.name, self.signature)
    }
}

/// Symbolic reference to a field
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldRef {
    /// Owner class name
    pub owner: String,
    /// Field name
    pub name: String,
    /// Field type
    pub ty: Type,
}

impl FieldRef {
    /// Build a field reference
    pub fn new(owner: impl Into<String>, name: impl Into<String>, ty: Type) -> FieldRef {
        FieldRef {
            owner: owner.into(),
            name: name.into(),
            ty,
        }
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}:{}", self.owner, self.name, self.ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_ref_display() {
        let r = MethodRef::new(
            "Client",
            "tick",
            Signature::from_descriptor("(I)V").unwrap(),
        );
        assert_eq!(r.to_string(), "Client.tick(I)V");
    }

    #[test]
    fn test_field_ref_display() {
        let r = FieldRef::new("Client", "cameraX", Type::INT);
        assert_eq!(r.to_string(), "Client.cameraX:I");
    }
}
