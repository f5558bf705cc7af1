//! Name/signature-based member lookup
//!
//! Free functions over a [`SymbolBridge`] and/or a [`ClassGroup`]. The
//! bridge-taking finders search the readable group and return the shipped
//! counterpart; the group-taking ones operate purely within the given
//! representation.
//!
//! A class hint is an optimization and a disambiguator, not a restriction:
//! when the hinted class is absent or yields no match, the search falls back
//! to a full scan of the group in declaration order.

use crate::bridge::SymbolBridge;
use crate::error::ResolveError;
use graft_bytecode::{
    ClassGroup, ClassId, FieldId, FieldRef, MethodId, MethodRef, Signature, Type,
};

/// Fail-fast exact class lookup
pub fn find_class(group: &ClassGroup, name: &str) -> Result<ClassId, ResolveError> {
    group
        .find_class(name)
        .ok_or_else(|| ResolveError::ClassNotFound {
            name: name.to_string(),
        })
}

/// Find a static method in the readable group and return its shipped
/// counterpart
///
/// Hinted class first (exact name, plus signature when given), then a full
/// scan in declaration order.
pub fn find_static_method(
    bridge: &SymbolBridge,
    name: &str,
    class_hint: Option<&str>,
    signature: Option<&Signature>,
) -> Result<MethodId, ResolveError> {
    let readable = bridge.readable();

    if let Some(hint) = class_hint {
        if let Some(class) = readable.find_class(hint) {
            if let Some(index) = readable[class].find_static_method(name, signature) {
                return bridge.method_to_shipped(MethodId { class, index });
            }
        }
    }

    if let Some(id) = readable.find_static_method(name, signature) {
        return bridge.method_to_shipped(id);
    }

    Err(ResolveError::StaticMethodNotFound {
        name: name.to_string(),
        signature: signature.cloned(),
        class_hint: class_hint.map(str::to_string),
    })
}

/// [`find_static_method`] keyed by a pool reference
///
/// The reference's owner becomes the class hint and its signature the
/// filter.
pub fn find_static_method_ref(
    bridge: &SymbolBridge,
    target: &MethodRef,
) -> Result<MethodId, ResolveError> {
    find_static_method(bridge, &target.name, Some(&target.owner), Some(&target.signature))
}

/// Find a method by name and argument types, ignoring the return type
///
/// The hinted phase considers static methods only; the fallback scan
/// considers every method in the readable group. Used when the return type
/// is not trustworthy across representations.
pub fn find_method_with_args(
    bridge: &SymbolBridge,
    name: &str,
    class_hint: Option<&str>,
    signature: &Signature,
) -> Result<MethodId, ResolveError> {
    let readable = bridge.readable();

    if let Some(hint) = class_hint {
        if let Some(class) = readable.find_class(hint) {
            if let Some(index) = readable[class].find_static_method(name, None) {
                let id = MethodId { class, index };
                if args_match(signature, &readable.method(id).signature) {
                    return bridge.method_to_shipped(id);
                }
            }
        }
    }

    for (class, def) in readable.iter() {
        for (index, method) in def.methods.iter().enumerate() {
            if method.name == name && args_match(signature, &method.signature) {
                return bridge.method_to_shipped(MethodId { class, index });
            }
        }
    }

    Err(ResolveError::MethodArgsNotFound {
        name: name.to_string(),
        signature: signature.clone(),
        class_hint: class_hint.map(str::to_string),
    })
}

/// Find a method by name and argument types in a class and its ancestors
///
/// Searches `class` (readable group) and its parent chain only, never
/// siblings; returns the shipped counterpart of the first match.
pub fn find_method_with_args_deep(
    bridge: &SymbolBridge,
    class: ClassId,
    name: &str,
    signature: &Signature,
) -> Result<MethodId, ResolveError> {
    let readable = bridge.readable();

    for ancestor in readable.ancestors(class) {
        for (index, method) in readable[ancestor].methods.iter().enumerate() {
            if method.name == name && args_match(signature, &method.signature) {
                return bridge.method_to_shipped(MethodId {
                    class: ancestor,
                    index,
                });
            }
        }
    }

    Err(ResolveError::MethodArgsNotFound {
        name: name.to_string(),
        signature: signature.clone(),
        class_hint: Some(readable[class].name.clone()),
    })
}

/// Fail-fast group-wide static method lookup, no translation
pub fn find_static_method_in(
    group: &ClassGroup,
    name: &str,
    signature: &Signature,
) -> Result<MethodId, ResolveError> {
    group
        .find_static_method(name, Some(signature))
        .ok_or_else(|| ResolveError::StaticMethodNotFound {
            name: name.to_string(),
            signature: Some(signature.clone()),
            class_hint: None,
        })
}

/// Fail-fast exact-signature method lookup over a class and its ancestors,
/// no translation
pub fn find_method_deep(
    group: &ClassGroup,
    class: ClassId,
    name: &str,
    signature: &Signature,
) -> Result<MethodId, ResolveError> {
    for ancestor in group.ancestors(class) {
        if let Some(index) = group[ancestor].find_method(name, signature) {
            return Ok(MethodId {
                class: ancestor,
                index,
            });
        }
    }

    Err(ResolveError::MethodNotFound {
        name: name.to_string(),
        signature: signature.clone(),
        class: group[class].name.clone(),
    })
}

/// Find the first static field with a matching name in a group
pub fn find_static_field(group: &ClassGroup, name: &str) -> Result<FieldId, ResolveError> {
    for (class, def) in group.iter() {
        for (index, field) in def.fields.iter().enumerate() {
            if field.is_static && field.name == name {
                return Ok(FieldId { class, index });
            }
        }
    }

    Err(ResolveError::StaticFieldNotFound {
        name: name.to_string(),
        ty: None,
        class_hint: None,
    })
}

/// Find a static field in the readable group and return its shipped
/// counterpart
///
/// Hinted class first (by name, plus type when given), then a full scan.
/// Both phases require the static flag.
pub fn find_static_field_with(
    bridge: &SymbolBridge,
    name: &str,
    class_hint: Option<&str>,
    ty: Option<&Type>,
) -> Result<FieldId, ResolveError> {
    let readable = bridge.readable();
    let matches = |field: &graft_bytecode::Field| {
        field.is_static && field.name == name && ty.map_or(true, |t| field.ty == *t)
    };

    if let Some(hint) = class_hint {
        if let Some(class) = readable.find_class(hint) {
            if let Some(index) = readable[class].fields.iter().position(&matches) {
                return bridge.field_to_shipped(FieldId { class, index });
            }
        }
    }

    for (class, def) in readable.iter() {
        if let Some(index) = def.fields.iter().position(&matches) {
            return bridge.field_to_shipped(FieldId { class, index });
        }
    }

    Err(ResolveError::StaticFieldNotFound {
        name: name.to_string(),
        ty: ty.cloned(),
        class_hint: class_hint.map(str::to_string),
    })
}

/// [`find_static_field_with`] keyed by a pool reference
pub fn find_static_field_ref(
    bridge: &SymbolBridge,
    target: &FieldRef,
) -> Result<FieldId, ResolveError> {
    find_static_field_with(bridge, &target.name, Some(&target.owner), Some(&target.ty))
}

/// Find a field by name in the readable group and return its shipped
/// counterpart
pub fn find_field(
    bridge: &SymbolBridge,
    name: &str,
    class_hint: Option<&str>,
) -> Result<FieldId, ResolveError> {
    let id = find_field_in(bridge.readable(), name, class_hint)?;
    bridge.field_to_shipped(id)
}

/// Find a field by name within one group, hinted class first
///
/// No type or static filter; the first name match wins.
pub fn find_field_in(
    group: &ClassGroup,
    name: &str,
    class_hint: Option<&str>,
) -> Result<FieldId, ResolveError> {
    if let Some(hint) = class_hint {
        if let Some(class) = group.find_class(hint) {
            if let Some(index) = group[class].find_field(name, None) {
                return Ok(FieldId { class, index });
            }
        }
    }

    for (class, def) in group.iter() {
        if let Some(index) = def.find_field(name, None) {
            return Ok(FieldId { class, index });
        }
    }

    Err(ResolveError::FieldNotFound {
        name: name.to_string(),
        class_hint: class_hint.map(str::to_string),
    })
}

/// Find a field by name in a class and its ancestors
pub fn find_field_deep(
    group: &ClassGroup,
    class: ClassId,
    name: &str,
) -> Result<FieldId, ResolveError> {
    for ancestor in group.ancestors(class) {
        if let Some(index) = group[ancestor].find_field(name, None) {
            return Ok(FieldId {
                class: ancestor,
                index,
            });
        }
    }

    Err(ResolveError::FieldNotFound {
        name: name.to_string(),
        class_hint: Some(group[class].name.clone()),
    })
}

/// True iff both signatures take the same argument types, position by
/// position
///
/// Return types are never compared here.
pub fn args_match(a: &Signature, b: &Signature) -> bool {
    a.arguments.len() == b.arguments.len()
        && a.arguments.iter().zip(&b.arguments).all(|(x, y)| x == y)
}
