//! Error types for resolution and mapping integrity
//!
//! Two distinct classes. [`ResolveError`] is the expected failure of a
//! search: the named construct genuinely does not exist under the given
//! name/signature/hint, and the caller abandons that injection step.
//! [`Defect`] means the mapping tables themselves are inconsistent; it is
//! not meant to be caught per call and should fail the whole run.

use graft_bytecode::{Signature, Type};
use thiserror::Error;

/// A search that exhausted its strategy without finding the target
///
/// Each variant carries the searched name/signature/hint for diagnostics.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// Exact class lookup failed
    #[error("class {name} doesn't exist")]
    ClassNotFound {
        /// The searched class name
        name: String,
    },

    /// Static method search exhausted the readable group
    #[error("static method {name}{} doesn't exist", fmt_opt_sig(.signature))]
    StaticMethodNotFound {
        /// The searched method name
        name: String,
        /// The signature filter, when one was given
        signature: Option<Signature>,
        /// The class hint, when one was given
        class_hint: Option<String>,
    },

    /// Argument-matching method search exhausted the readable group
    #[error("method called {name} with args matching {signature} doesn't exist")]
    MethodArgsNotFound {
        /// The searched method name
        name: String,
        /// The signature whose arguments were matched
        signature: Signature,
        /// The class hint or search-root class name
        class_hint: Option<String>,
    },

    /// Exact method search exhausted a class and its ancestors
    #[error("method {name}{signature} couldn't be found in {class} or its ancestors")]
    MethodNotFound {
        /// The searched method name
        name: String,
        /// The searched signature
        signature: Signature,
        /// The search-root class name
        class: String,
    },

    /// Field search exhausted its scope
    #[error("field {name} doesn't exist")]
    FieldNotFound {
        /// The searched field name
        name: String,
        /// The class hint or search-root class name, when one was given
        class_hint: Option<String>,
    },

    /// Static field search exhausted its scope
    #[error("static field {}{name} doesn't exist", fmt_opt_ty(.ty))]
    StaticFieldNotFound {
        /// The searched field name
        name: String,
        /// The type filter, when one was given
        ty: Option<Type>,
        /// The class hint, when one was given
        class_hint: Option<String>,
    },

    /// A member was resolved but its owning class has no shipped counterpart
    #[error("class {class} has no shipped counterpart")]
    UnmappedClass {
        /// The readable class name
        class: String,
    },

    /// The shipped class lacks the method the obfuscation record names
    #[error("shipped class {class} has no method {name}{signature}")]
    ShippedMethodMissing {
        /// The shipped class name
        class: String,
        /// The effective (obfuscated) method name searched
        name: String,
        /// The effective (obfuscated) signature searched
        signature: Signature,
    },

    /// The shipped class lacks the field the obfuscation record names
    #[error("shipped class {class} has no field {name}:{ty}")]
    ShippedFieldMissing {
        /// The shipped class name
        class: String,
        /// The effective (obfuscated) field name searched
        name: String,
        /// The effective (obfuscated) field type searched
        ty: Type,
    },
}

/// An internal inconsistency in the mapping tables
///
/// The input data is pre-validated; hitting one of these means the data or
/// the tables built from it are wrong, and the run should stop.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Defect {
    /// A readable class records an obfuscated name absent from the shipped group
    #[error("readable class {readable} records obfuscated name {obfuscated}, which is not in the shipped group")]
    ShippedClassMissing {
        /// The readable class name
        readable: String,
        /// The recorded obfuscated name that failed to resolve
        obfuscated: String,
    },

    /// A readable class participating in translation has no shipped counterpart
    #[error("readable class {class} has no shipped counterpart")]
    UnmappedClass {
        /// The readable class name
        class: String,
    },

    /// No API-overlay class implements a host interface
    #[error("no api class implements host interface {interface}")]
    NoImplementor {
        /// The host interface name
        interface: String,
    },

    /// A readable class has no mirror in the API overlay
    #[error("readable class {class} has no api mirror {mirror}")]
    MirrorMissing {
        /// The readable class name
        class: String,
        /// The mirror name that failed to resolve
        mirror: String,
    },
}

fn fmt_opt_sig(sig: &Option<Signature>) -> String {
    sig.as_ref().map(Signature::to_string).unwrap_or_default()
}

fn fmt_opt_ty(ty: &Option<Type>) -> String {
    ty.as_ref().map(|t| format!("{t} ")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_error_messages_carry_search_terms() {
        let err = ResolveError::StaticMethodNotFound {
            name: "tick".to_string(),
            signature: Some(Signature::from_descriptor("()V").unwrap()),
            class_hint: Some("Client".to_string()),
        };
        assert_eq!(err.to_string(), "static method tick()V doesn't exist");

        let err = ResolveError::StaticFieldNotFound {
            name: "cameraX".to_string(),
            ty: Some(Type::INT),
            class_hint: None,
        };
        assert_eq!(err.to_string(), "static field I cameraX doesn't exist");
    }

    #[test]
    fn test_defect_messages() {
        let err = Defect::NoImplementor {
            interface: "graft/api/Widget".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no api class implements host interface graft/api/Widget"
        );
    }
}
