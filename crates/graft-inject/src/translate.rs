//! Type and signature translation across representations
//!
//! The API overlay mirrors the readable model one-to-one under
//! [`API_BASE`], and may additionally implement capability interfaces under
//! [`HOST_API_BASE`]. Translating a host interface down to a concrete class
//! requires the most-derived-implementor walk: the one overlay class that
//! implements the interface and has no declared interface of its own that
//! also implements it.
//!
//! Primitives never translate; reference types outside the known namespaces
//! and groups are platform/library types and pass through unchanged.

use crate::bridge::SymbolBridge;
use crate::error::Defect;
use graft_bytecode::{ClassGroup, ClassId, Signature, Type};
use rustc_hash::FxHashSet;

/// Namespace of the API overlay, the 1:1 interface mirror of the readable
/// model
pub const API_BASE: &str = "graft/mirror/";

/// Namespace of the external capability interfaces the API overlay
/// implements
pub const HOST_API_BASE: &str = "graft/api/";

/// Translate an API-model type to the readable model
///
/// [`API_BASE`] types strip the prefix; [`HOST_API_BASE`] types resolve
/// through the most-derived implementor and recurse on its mirror type;
/// everything else passes through. Array dimensions are preserved.
pub fn api_type_to_readable(bridge: &SymbolBridge, ty: &Type) -> Result<Type, Defect> {
    let Some(name) = ty.class_name() else {
        return Ok(ty.clone());
    };

    if let Some(readable_name) = name.strip_prefix(API_BASE) {
        return Ok(Type::object(readable_name).with_dims(ty.dims));
    }

    if name.starts_with(HOST_API_BASE) {
        let implementor = most_derived_implementor(bridge.api(), name)?;
        let mirror = Type::object(&bridge.api()[implementor].name).with_dims(ty.dims);
        return api_type_to_readable(bridge, &mirror);
    }

    Ok(ty.clone())
}

/// Translate a readable-model type to the shipped model
///
/// Class names absent from the readable group are external types and pass
/// through. A readable class without a shipped counterpart here means the
/// data promised a mapping it does not have.
pub fn readable_type_to_shipped(bridge: &SymbolBridge, ty: &Type) -> Result<Type, Defect> {
    let Some(name) = ty.class_name() else {
        return Ok(ty.clone());
    };

    let Some(readable) = bridge.readable().find_class(name) else {
        return Ok(ty.clone());
    };

    let shipped = bridge
        .class_to_shipped(readable)
        .ok_or_else(|| Defect::UnmappedClass {
            class: name.to_string(),
        })?;

    Ok(Type::object(&bridge.shipped()[shipped].name).with_dims(ty.dims))
}

/// Element-wise [`api_type_to_readable`] over a whole signature
pub fn api_signature_to_readable(
    bridge: &SymbolBridge,
    signature: &Signature,
) -> Result<Signature, Defect> {
    let return_type = api_type_to_readable(bridge, &signature.return_type)?;
    let arguments = signature
        .arguments
        .iter()
        .map(|arg| api_type_to_readable(bridge, arg))
        .collect::<Result<Vec<Type>, Defect>>()?;
    Ok(Signature::new(return_type, arguments))
}

/// True iff the readable signature is the API signature's translation
pub fn signatures_structurally_match(
    bridge: &SymbolBridge,
    readable_sig: &Signature,
    api_sig: &Signature,
) -> Result<bool, Defect> {
    Ok(*readable_sig == api_signature_to_readable(bridge, api_sig)?)
}

/// Translate a readable-model type to its API-overlay surface type
///
/// Prefers the last declared host-API interface of the mirror class over
/// the concrete mirror type, keeping generated API surfaces
/// capability-typed. Class names absent from the readable group pass
/// through.
pub fn readable_type_to_api(bridge: &SymbolBridge, ty: &Type) -> Result<Type, Defect> {
    let Some(name) = ty.class_name() else {
        return Ok(ty.clone());
    };

    let Some(readable) = bridge.readable().find_class(name) else {
        return Ok(ty.clone());
    };

    let mirror_name = format!("{API_BASE}{}", bridge.readable()[readable].name);
    let mirror = bridge
        .api()
        .find_class(&mirror_name)
        .ok_or_else(|| Defect::MirrorMissing {
            class: name.to_string(),
            mirror: mirror_name.clone(),
        })?;

    let mut surface = mirror_name.as_str();
    for interface in &bridge.api()[mirror].interfaces {
        if interface.starts_with(HOST_API_BASE) {
            surface = interface;
        }
    }

    Ok(Type::object(surface).with_dims(ty.dims))
}

/// Find the most-derived API-overlay class implementing a host interface
///
/// Starts from the first overlay class that declares the interface, then
/// repeatedly moves to any of the candidate's own declared interfaces that
/// also implements the target, until no such interface exists. The lattice
/// is expected acyclic; a visited set makes the walk terminate regardless.
pub fn most_derived_implementor(
    api: &ClassGroup,
    interface_name: &str,
) -> Result<ClassId, Defect> {
    let mut current = api
        .iter()
        .find(|(_, class)| class.implements(interface_name))
        .map(|(id, _)| id)
        .ok_or_else(|| Defect::NoImplementor {
            interface: interface_name.to_string(),
        })?;

    let mut seen = FxHashSet::default();
    seen.insert(current);

    let mut changed = true;
    while changed {
        changed = false;
        for declared in &api[current].interfaces {
            let Some(candidate) = api.find_class(declared) else {
                continue;
            };
            if api[candidate].implements(interface_name) && seen.insert(candidate) {
                current = candidate;
                changed = true;
                break;
            }
        }
    }

    Ok(current)
}
