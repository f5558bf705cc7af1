//! Class definitions and members
//!
//! A [`ClassDef`] carries its members in declaration order together with the
//! deobfuscation metadata recorded on the readable model: the obfuscated
//! name/signature a member had in the shipped binary, and the export name
//! under which it is published to the host API. The metadata is stored as
//! typed optional fields populated at load time; nothing here re-queries an
//! annotation bag.

use crate::signature::Signature;
use crate::ty::Type;
use serde::{Deserialize, Serialize};

/// A method definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    /// Method name in the owning representation
    pub name: String,
    /// Method signature in the owning representation
    pub signature: Signature,
    /// True for `static` methods
    pub is_static: bool,
    /// Name this method had in the shipped binary, when recorded
    pub obfuscated_name: Option<String>,
    /// Signature this method had in the shipped binary, when recorded
    pub obfuscated_signature: Option<Signature>,
    /// Name under which the member is published to the host API, when exported
    pub export: Option<String>,
}

impl Method {
    /// New instance method with no recorded metadata
    pub fn new(name: impl Into<String>, signature: Signature) -> Method {
        Method {
            name: name.into(),
            signature,
            is_static: false,
            obfuscated_name: None,
            obfuscated_signature: None,
            export: None,
        }
    }

    /// New static method with no recorded metadata
    pub fn new_static(name: impl Into<String>, signature: Signature) -> Method {
        Method {
            is_static: true,
            ..Method::new(name, signature)
        }
    }

    /// Record the shipped-binary name
    pub fn with_obfuscated_name(mut self, name: impl Into<String>) -> Method {
        self.obfuscated_name = Some(name.into());
        self
    }

    /// Record the shipped-binary signature
    pub fn with_obfuscated_signature(mut self, signature: Signature) -> Method {
        self.obfuscated_signature = Some(signature);
        self
    }

    /// Record the export name
    pub fn with_export(mut self, name: impl Into<String>) -> Method {
        self.export = Some(name.into());
        self
    }

    /// Name this method resolves to in the shipped group: the recorded
    /// obfuscated name, else the current name
    pub fn shipped_name(&self) -> &str {
        self.obfuscated_name.as_deref().unwrap_or(&self.name)
    }

    /// Signature this method resolves to in the shipped group: the recorded
    /// obfuscated signature, else the current one
    pub fn shipped_signature(&self) -> &Signature {
        self.obfuscated_signature.as_ref().unwrap_or(&self.signature)
    }
}

/// A field definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name in the owning representation
    pub name: String,
    /// Field type in the owning representation
    pub ty: Type,
    /// True for `static` fields
    pub is_static: bool,
    /// Name this field had in the shipped binary, when recorded
    pub obfuscated_name: Option<String>,
    /// Type this field had in the shipped binary, when recorded
    pub obfuscated_ty: Option<Type>,
    /// Name under which the member is published to the host API, when exported
    pub export: Option<String>,
}

impl Field {
    /// New instance field with no recorded metadata
    pub fn new(name: impl Into<String>, ty: Type) -> Field {
        Field {
            name: name.into(),
            ty,
            is_static: false,
            obfuscated_name: None,
            obfuscated_ty: None,
            export: None,
        }
    }

    /// New static field with no recorded metadata
    pub fn new_static(name: impl Into<String>, ty: Type) -> Field {
        Field {
            is_static: true,
            ..Field::new(name, ty)
        }
    }

    /// Record the shipped-binary name
    pub fn with_obfuscated_name(mut self, name: impl Into<String>) -> Field {
        self.obfuscated_name = Some(name.into());
        self
    }

    /// Record the shipped-binary type
    pub fn with_obfuscated_ty(mut self, ty: Type) -> Field {
        self.obfuscated_ty = Some(ty);
        self
    }

    /// Record the export name
    pub fn with_export(mut self, name: impl Into<String>) -> Field {
        self.export = Some(name.into());
        self
    }

    /// Name this field resolves to in the shipped group
    pub fn shipped_name(&self) -> &str {
        self.obfuscated_name.as_deref().unwrap_or(&self.name)
    }

    /// Type this field resolves to in the shipped group
    pub fn shipped_ty(&self) -> &Type {
        self.obfuscated_ty.as_ref().unwrap_or(&self.ty)
    }
}

/// A class definition: name, hierarchy references, and ordered members
///
/// The parent and interface references are stored as names and resolved
/// against the owning [`ClassGroup`](crate::ClassGroup) on demand; a name
/// absent from the group refers to a platform/library type outside the
/// modeled program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDef {
    /// Internal (slash-separated) class name
    pub name: String,
    /// Parent class name; `None` for root classes
    pub super_name: Option<String>,
    /// Declared interface names, in declaration order
    pub interfaces: Vec<String>,
    /// Methods in declaration order
    pub methods: Vec<Method>,
    /// Fields in declaration order
    pub fields: Vec<Field>,
    /// Name this class had in the shipped binary, when recorded
    pub obfuscated_name: Option<String>,
    /// Name under which the class is published to the host API, when exported
    pub export: Option<String>,
}

impl ClassDef {
    /// New empty class
    pub fn new(name: impl Into<String>) -> ClassDef {
        ClassDef {
            name: name.into(),
            super_name: None,
            interfaces: Vec::new(),
            methods: Vec::new(),
            fields: Vec::new(),
            obfuscated_name: None,
            export: None,
        }
    }

    /// Set the parent class name
    pub fn with_super(mut self, name: impl Into<String>) -> ClassDef {
        self.super_name = Some(name.into());
        self
    }

    /// Add a declared interface name
    pub fn with_interface(mut self, name: impl Into<String>) -> ClassDef {
        self.interfaces.push(name.into());
        self
    }

    /// Record the shipped-binary name
    pub fn with_obfuscated_name(mut self, name: impl Into<String>) -> ClassDef {
        self.obfuscated_name = Some(name.into());
        self
    }

    /// Record the export name
    pub fn with_export(mut self, name: impl Into<String>) -> ClassDef {
        self.export = Some(name.into());
        self
    }

    /// Add a method
    pub fn with_method(mut self, method: Method) -> ClassDef {
        self.methods.push(method);
        self
    }

    /// Add a field
    pub fn with_field(mut self, field: Field) -> ClassDef {
        self.fields.push(field);
        self
    }

    /// True if `interface_name` is in the declared interface set
    pub fn implements(&self, interface_name: &str) -> bool {
        self.interfaces.iter().any(|i| i == interface_name)
    }

    /// Index of the first method matching `name` and exactly `signature`
    /// (static or not)
    pub fn find_method(&self, name: &str, signature: &Signature) -> Option<usize> {
        self.methods
            .iter()
            .position(|m| m.name == name && m.signature == *signature)
    }

    /// Index of the first static method matching `name`, and `signature`
    /// when one is given
    pub fn find_static_method(&self, name: &str, signature: Option<&Signature>) -> Option<usize> {
        self.methods.iter().position(|m| {
            m.is_static
                && m.name == name
                && signature.map_or(true, |sig| m.signature == *sig)
        })
    }

    /// Index of the first field matching `name`, and `ty` when one is given
    pub fn find_field(&self, name: &str, ty: Option<&Type>) -> Option<usize> {
        self.fields
            .iter()
            .position(|f| f.name == name && ty.map_or(true, |t| f.ty == *t))
    }
}
