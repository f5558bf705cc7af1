//! Class groups and hierarchy walks
//!
//! A [`ClassGroup`] is one representation of the program: an ordered store of
//! [`ClassDef`]s with a name index for exact lookup. The shipped, readable,
//! mixin, and API-overlay representations are separate groups; a [`ClassId`]
//! is only meaningful against the group that produced it.

use crate::class::{ClassDef, Field, Method};
use crate::signature::Signature;
use rustc_hash::{FxHashMap, FxHashSet};
use std::ops::Index;

/// Identifies a class within one [`ClassGroup`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassId(pub usize);

/// Identifies a method within one [`ClassGroup`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodId {
    /// Owning class
    pub class: ClassId,
    /// Position in the owning class's method list
    pub index: usize,
}

/// Identifies a field within one [`ClassGroup`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId {
    /// Owning class
    pub class: ClassId,
    /// Position in the owning class's field list
    pub index: usize,
}

/// An ordered collection of class definitions with a name index
///
/// Classes are stored in registration order; iteration and full-scan lookups
/// follow that order, which keeps resolution deterministic across runs given
/// stable input ordering.
#[derive(Debug, Clone, Default)]
pub struct ClassGroup {
    /// Classes indexed by id
    classes: Vec<ClassDef>,
    /// Class name to id mapping
    name_to_id: FxHashMap<String, ClassId>,
}

impl ClassGroup {
    /// Create a new empty group
    pub fn new() -> ClassGroup {
        ClassGroup::default()
    }

    /// Register a class, returning its id
    ///
    /// A later registration under an already-indexed name takes over the name
    /// index entry.
    pub fn add_class(&mut self, class: ClassDef) -> ClassId {
        let id = ClassId(self.classes.len());
        self.name_to_id.insert(class.name.clone(), id);
        self.classes.push(class);
        id
    }

    /// Number of classes in the group
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// True if the group holds no classes
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Get a class by id
    pub fn get(&self, id: ClassId) -> Option<&ClassDef> {
        self.classes.get(id.0)
    }

    /// Exact-name lookup
    pub fn find_class(&self, name: &str) -> Option<ClassId> {
        self.name_to_id.get(name).copied()
    }

    /// Iterate classes with their ids, in registration order
    pub fn iter(&self) -> impl Iterator<Item = (ClassId, &ClassDef)> {
        self.classes
            .iter()
            .enumerate()
            .map(|(i, c)| (ClassId(i), c))
    }

    /// The method an id points at
    ///
    /// Panics if `id` did not come from this group.
    pub fn method(&self, id: MethodId) -> &Method {
        &self[id.class].methods[id.index]
    }

    /// The field an id points at
    ///
    /// Panics if `id` did not come from this group.
    pub fn field(&self, id: FieldId) -> &Field {
        &self[id.class].fields[id.index]
    }

    /// The parent class of `id`, when its recorded parent name is itself a
    /// class of this group
    ///
    /// A parent name absent from the group refers to a platform/library type
    /// outside the modeled program and terminates ancestor walks.
    pub fn parent_of(&self, id: ClassId) -> Option<ClassId> {
        let super_name = self[id].super_name.as_deref()?;
        self.find_class(super_name)
    }

    /// Walk `id` and its ancestor chain, most-derived first
    ///
    /// Parent links are expected acyclic, but the walk carries a visited set
    /// so it terminates on cyclic input instead of spinning.
    pub fn ancestors(&self, id: ClassId) -> Ancestors<'_> {
        Ancestors {
            group: self,
            next: Some(id),
            seen: FxHashSet::default(),
        }
    }

    /// Group-wide scan for a static method by name, and signature when given
    ///
    /// Classes are scanned in registration order; the first match wins.
    pub fn find_static_method(
        &self,
        name: &str,
        signature: Option<&Signature>,
    ) -> Option<MethodId> {
        self.iter().find_map(|(id, class)| {
            class
                .find_static_method(name, signature)
                .map(|index| MethodId { class: id, index })
        })
    }
}

impl Index<ClassId> for ClassGroup {
    type Output = ClassDef;

    fn index(&self, id: ClassId) -> &ClassDef {
        &self.classes[id.0]
    }
}

/// Iterator over a class and its ancestor chain
///
/// Produced by [`ClassGroup::ancestors`]. Yields the starting class first,
/// then each in-group parent; stops at the root or at the first repeated
/// class.
pub struct Ancestors<'a> {
    group: &'a ClassGroup,
    next: Option<ClassId>,
    seen: FxHashSet<ClassId>,
}

impl Iterator for Ancestors<'_> {
    type Item = ClassId;

    fn next(&mut self) -> Option<ClassId> {
        let id = self.next.take()?;
        if !self.seen.insert(id) {
            return None;
        }
        self.next = self.group.parent_of(id);
        Some(id)
    }
}
