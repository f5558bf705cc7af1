//! The symbol bridge between the readable and shipped representations
//!
//! [`SymbolBridge`] owns the four class groups and the two tables the rest
//! of the injector works through: the immutable readable→shipped class map
//! built at construction, and the mutable name→readable-class index that the
//! pipeline extends as it discovers mappings.

use crate::error::{Defect, ResolveError};
use graft_bytecode::{ClassGroup, ClassId, FieldId, MethodId};
use rustc_hash::FxHashMap;

/// Reserved namespace of the injection framework's own classes
///
/// Readable classes under this prefix have no shipped counterpart and are
/// skipped when the class map is built.
pub const FRAMEWORK_BASE: &str = "graft/";

/// The framework callback sink injected call sites target
pub const HOOKS_CLASS: &str = "graft/callback/Hooks";

/// Holds the class groups and the cross-representation mapping tables
#[derive(Debug)]
pub struct SymbolBridge {
    shipped: ClassGroup,
    readable: ClassGroup,
    mixins: ClassGroup,
    api: ClassGroup,
    /// Readable class -> shipped class; immutable once built
    to_shipped: FxHashMap<ClassId, ClassId>,
    /// Mapped (readable, shipped) pairs in readable declaration order
    pairs: Vec<(ClassId, ClassId)>,
    /// Name -> readable class
    ///
    /// Keys are obfuscated names seeded at construction, plus whatever the
    /// pipeline registers later (API implementor names, synthesized classes).
    to_readable: FxHashMap<String, ClassId>,
}

impl SymbolBridge {
    /// Build the bridge from the four representations
    ///
    /// Walks the readable group in declaration order, skipping
    /// [`FRAMEWORK_BASE`] classes; every remaining class with a recorded
    /// obfuscated name is indexed and paired with the shipped class of that
    /// name. The input data guarantees the shipped class exists, so a miss
    /// is a [`Defect`], not a recoverable error.
    pub fn new(
        shipped: ClassGroup,
        readable: ClassGroup,
        mixins: ClassGroup,
        api: ClassGroup,
    ) -> Result<SymbolBridge, Defect> {
        let mut to_shipped = FxHashMap::default();
        let mut pairs = Vec::new();
        let mut to_readable = FxHashMap::default();

        for (readable_id, class) in readable.iter() {
            if class.name.starts_with(FRAMEWORK_BASE) {
                continue;
            }

            let Some(obfuscated) = &class.obfuscated_name else {
                continue;
            };
            to_readable.insert(obfuscated.clone(), readable_id);

            let shipped_id = shipped.find_class(obfuscated).ok_or_else(|| {
                Defect::ShippedClassMissing {
                    readable: class.name.clone(),
                    obfuscated: obfuscated.clone(),
                }
            })?;
            to_shipped.insert(readable_id, shipped_id);
            pairs.push((readable_id, shipped_id));
        }

        Ok(SymbolBridge {
            shipped,
            readable,
            mixins,
            api,
            to_shipped,
            pairs,
            to_readable,
        })
    }

    /// The shipped class group
    pub fn shipped(&self) -> &ClassGroup {
        &self.shipped
    }

    /// The readable class group
    pub fn readable(&self) -> &ClassGroup {
        &self.readable
    }

    /// The mixin-overlay class group
    pub fn mixins(&self) -> &ClassGroup {
        &self.mixins
    }

    /// The API-overlay class group
    pub fn api(&self) -> &ClassGroup {
        &self.api
    }

    /// Readable class -> shipped class
    ///
    /// `None` for classes that were never indexed, such as framework classes
    /// and classes without an obfuscated-name record.
    pub fn class_to_shipped(&self, readable: ClassId) -> Option<ClassId> {
        self.to_shipped.get(&readable).copied()
    }

    /// Readable method -> shipped method
    ///
    /// Resolves the owning class, then looks the method up in the shipped
    /// class under its effective identity: the recorded obfuscated
    /// name/signature, falling back to the current ones. A miss there means
    /// the obfuscation record is stale or missing.
    pub fn method_to_shipped(&self, readable: MethodId) -> Result<MethodId, ResolveError> {
        let owner = &self.readable[readable.class];
        let shipped_class = self.class_to_shipped(readable.class).ok_or_else(|| {
            ResolveError::UnmappedClass {
                class: owner.name.clone(),
            }
        })?;

        let method = self.readable.method(readable);
        let name = method.shipped_name();
        let signature = method.shipped_signature();

        let shipped_def = &self.shipped[shipped_class];
        let index = shipped_def.find_method(name, signature).ok_or_else(|| {
            ResolveError::ShippedMethodMissing {
                class: shipped_def.name.clone(),
                name: name.to_string(),
                signature: signature.clone(),
            }
        })?;

        Ok(MethodId {
            class: shipped_class,
            index,
        })
    }

    /// Readable field -> shipped field
    ///
    /// As [`method_to_shipped`](SymbolBridge::method_to_shipped), by name
    /// and type.
    pub fn field_to_shipped(&self, readable: FieldId) -> Result<FieldId, ResolveError> {
        let owner = &self.readable[readable.class];
        let shipped_class = self.class_to_shipped(readable.class).ok_or_else(|| {
            ResolveError::UnmappedClass {
                class: owner.name.clone(),
            }
        })?;

        let field = self.readable.field(readable);
        let name = field.shipped_name();
        let ty = field.shipped_ty();

        let shipped_def = &self.shipped[shipped_class];
        let index = shipped_def.find_field(name, Some(ty)).ok_or_else(|| {
            ResolveError::ShippedFieldMissing {
                class: shipped_def.name.clone(),
                name: name.to_string(),
                ty: ty.clone(),
            }
        })?;

        Ok(FieldId {
            class: shipped_class,
            index,
        })
    }

    /// Name -> readable class, through the mutable index
    pub fn readable_class_by_name(&self, name: &str) -> Option<ClassId> {
        self.to_readable.get(name).copied()
    }

    /// Insert or overwrite a name index entry
    ///
    /// Last write wins. Returns the displaced class id so callers can flag a
    /// doubly-registered name instead of it passing silently.
    pub fn register_name(&mut self, name: impl Into<String>, readable: ClassId) -> Option<ClassId> {
        self.to_readable.insert(name.into(), readable)
    }

    /// Name -> shipped class, through the mutable index and the class map
    pub fn shipped_class_for(&self, name: &str) -> Option<ClassId> {
        self.readable_class_by_name(name)
            .and_then(|id| self.class_to_shipped(id))
    }

    /// Iterate every mapped (readable, shipped) pair
    ///
    /// Order is the readable group's declaration order of mapped classes,
    /// stable across runs given stable input ordering.
    pub fn mapped_pairs(&self) -> impl Iterator<Item = (ClassId, ClassId)> + '_ {
        self.pairs.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graft_bytecode::{ClassDef, Field, Method, Signature, Type};

    fn sig(descriptor: &str) -> Signature {
        Signature::from_descriptor(descriptor).unwrap()
    }

    fn fixture() -> SymbolBridge {
        let mut shipped = ClassGroup::new();
        shipped.add_class(
            ClassDef::new("a")
                .with_method(Method::new_static("g", sig("()V")))
                .with_field(Field::new("q", Type::INT)),
        );
        shipped.add_class(ClassDef::new("b"));

        let mut readable = ClassGroup::new();
        readable.add_class(ClassDef::new("graft/callback/Hooks"));
        readable.add_class(
            ClassDef::new("Client")
                .with_obfuscated_name("a")
                .with_method(
                    Method::new_static("tick", sig("()V")).with_obfuscated_name("g"),
                )
                .with_field(Field::new("cameraX", Type::INT).with_obfuscated_name("q")),
        );
        readable.add_class(ClassDef::new("Actor").with_obfuscated_name("b"));
        readable.add_class(ClassDef::new("Canvas"));

        SymbolBridge::new(shipped, readable, ClassGroup::new(), ClassGroup::new()).unwrap()
    }

    #[test]
    fn test_class_map_follows_obfuscated_names() {
        let bridge = fixture();
        for (readable, shipped) in bridge.mapped_pairs() {
            let recorded = bridge.readable()[readable].obfuscated_name.as_deref();
            assert_eq!(recorded, Some(bridge.shipped()[shipped].name.as_str()));
        }
    }

    #[test]
    fn test_unindexed_classes_stay_unmapped() {
        let bridge = fixture();
        let hooks = bridge.readable().find_class("graft/callback/Hooks").unwrap();
        let canvas = bridge.readable().find_class("Canvas").unwrap();
        assert_eq!(bridge.class_to_shipped(hooks), None);
        assert_eq!(bridge.class_to_shipped(canvas), None);
    }

    #[test]
    fn test_method_to_shipped_uses_effective_identity() {
        let bridge = fixture();
        let client = bridge.readable().find_class("Client").unwrap();
        let tick = MethodId {
            class: client,
            index: 0,
        };

        let shipped = bridge.method_to_shipped(tick).unwrap();
        assert_eq!(bridge.shipped().method(shipped).name, "g");
        // Deterministic: same input, same id.
        assert_eq!(bridge.method_to_shipped(tick).unwrap(), shipped);
    }

    #[test]
    fn test_field_to_shipped_uses_effective_identity() {
        let bridge = fixture();
        let client = bridge.readable().find_class("Client").unwrap();
        let camera = FieldId {
            class: client,
            index: 0,
        };

        let shipped = bridge.field_to_shipped(camera).unwrap();
        assert_eq!(bridge.shipped().field(shipped).name, "q");
        assert_eq!(bridge.field_to_shipped(camera).unwrap(), shipped);
    }

    #[test]
    fn test_member_translation_from_unmapped_owner_fails() {
        let bridge = fixture();
        let canvas = bridge.readable().find_class("Canvas").unwrap();
        let err = bridge
            .field_to_shipped(FieldId {
                class: canvas,
                index: 0,
            })
            .unwrap_err();
        assert!(matches!(err, ResolveError::UnmappedClass { .. }));
    }

    #[test]
    fn test_stale_obfuscation_record_is_a_resolve_error() {
        let mut shipped = ClassGroup::new();
        shipped.add_class(ClassDef::new("a"));

        let mut readable = ClassGroup::new();
        readable.add_class(
            ClassDef::new("Client")
                .with_obfuscated_name("a")
                .with_method(
                    Method::new_static("tick", sig("()V")).with_obfuscated_name("gone"),
                ),
        );

        let bridge =
            SymbolBridge::new(shipped, readable, ClassGroup::new(), ClassGroup::new()).unwrap();
        let client = bridge.readable().find_class("Client").unwrap();
        let err = bridge
            .method_to_shipped(MethodId {
                class: client,
                index: 0,
            })
            .unwrap_err();
        assert!(matches!(err, ResolveError::ShippedMethodMissing { .. }));
    }

    #[test]
    fn test_missing_shipped_class_is_a_construction_defect() {
        let mut readable = ClassGroup::new();
        readable.add_class(ClassDef::new("Client").with_obfuscated_name("a"));

        let err = SymbolBridge::new(
            ClassGroup::new(),
            readable,
            ClassGroup::new(),
            ClassGroup::new(),
        )
        .unwrap_err();
        assert!(matches!(err, Defect::ShippedClassMissing { .. }));
    }

    #[test]
    fn test_register_name_is_last_write_wins() {
        let mut bridge = fixture();
        let client = bridge.readable().find_class("Client").unwrap();
        let actor = bridge.readable().find_class("Actor").unwrap();

        assert_eq!(bridge.register_name("Extra", client), None);
        assert_eq!(bridge.readable_class_by_name("Extra"), Some(client));

        // Overwrite is observable through the returned displaced id.
        assert_eq!(bridge.register_name("Extra", actor), Some(client));
        assert_eq!(bridge.readable_class_by_name("Extra"), Some(actor));
    }

    #[test]
    fn test_shipped_class_for_chains_both_tables() {
        let bridge = fixture();
        let shipped = bridge.shipped_class_for("a").unwrap();
        assert_eq!(bridge.shipped()[shipped].name, "a");
        assert_eq!(bridge.shipped_class_for("Client"), None);
    }

    #[test]
    fn test_mapped_pairs_follow_declaration_order() {
        let bridge = fixture();
        let names: Vec<&str> = bridge
            .mapped_pairs()
            .map(|(readable, _)| bridge.readable()[readable].name.as_str())
            .collect();
        assert_eq!(names, ["Client", "Actor"]);
    }
}
