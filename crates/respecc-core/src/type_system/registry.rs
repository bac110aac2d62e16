use super::{ClassId, ClassInfo, TypeId, TypeKind, TypeMetadata};
use std::collections::HashMap;

/// Central registry for all types in the Respecc++ type system
///
/// The registry provides:
/// - Primitive singletons pre-registered at fixed ids
/// - Construction of array, dictionary and class types
/// - Ownership of every class descriptor and its member table
/// - The mixed structural/nominal equality and assignability rules
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: HashMap<TypeId, TypeMetadata>,
    next_id: u64,
    name_to_id: HashMap<String, TypeId>,
    classes: Vec<ClassInfo>,
}

impl TypeRegistry {
    /// Creates a new registry with built-in types pre-registered
    pub fn new() -> Self {
        let mut registry = Self {
            types: HashMap::new(),
            next_id: TypeId::USER_DEFINED_START,
            name_to_id: HashMap::new(),
            classes: Vec::new(),
        };

        registry.register_builtin(TypeId::NUMBER, TypeKind::Number);
        registry.register_builtin(TypeId::STRING, TypeKind::String);
        registry.register_builtin(TypeId::BOOLEAN, TypeKind::Boolean);
        registry.register_builtin(TypeId::NULL, TypeKind::Null);
        registry.register_builtin(TypeId::ANY, TypeKind::Any);

        registry
    }

    /// Registers a built-in type
    fn register_builtin(&mut self, id: TypeId, kind: TypeKind) {
        self.name_to_id.insert(kind.name(), id);
        self.types.insert(id, TypeMetadata::primitive(id, kind));
    }

    /// Generates a new unique TypeId
    fn generate_id(&mut self) -> TypeId {
        let id = TypeId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn register(&mut self, kind: TypeKind) -> TypeId {
        let id = self.generate_id();
        self.types.insert(id, TypeMetadata::constructed(id, kind));
        id
    }

    /// Looks up type metadata by TypeId
    pub fn get(&self, id: TypeId) -> Option<&TypeMetadata> {
        self.types.get(&id)
    }

    /// Looks up the kind of a type
    pub fn kind(&self, id: TypeId) -> Option<&TypeKind> {
        self.get(id).map(|meta| &meta.kind)
    }

    /// Looks up a primitive TypeId by name
    pub fn get_by_name(&self, name: &str) -> Option<TypeId> {
        self.name_to_id.get(name).copied()
    }

    /// Creates a fresh array type
    ///
    /// Array types are never interned: equal element types still produce
    /// distinct ids, which compare equal only structurally.
    pub fn create_array(&mut self, element: TypeId) -> TypeId {
        self.register(TypeKind::Array { element })
    }

    /// Creates a fresh dictionary type
    pub fn create_dictionary(&mut self, key: TypeId, value: TypeId) -> TypeId {
        self.register(TypeKind::Dictionary { key, value })
    }

    /// Creates a placeholder class and its nominal object type
    ///
    /// The class starts with no constructors and an empty member table; the
    /// analyzer fills both in while walking the class body.
    pub fn create_object(&mut self, name: &str) -> ClassId {
        let class = ClassId::new(self.classes.len() as u32);
        let type_id = self.register(TypeKind::Object {
            class,
            name: name.to_string(),
        });
        self.classes.push(ClassInfo::new(class, name, type_id));
        class
    }

    /// Returns a class descriptor
    pub fn class(&self, id: ClassId) -> Option<&ClassInfo> {
        self.classes.get(id.index())
    }

    /// Returns a mutable class descriptor
    pub fn class_mut(&mut self, id: ClassId) -> Option<&mut ClassInfo> {
        self.classes.get_mut(id.index())
    }

    /// Returns every registered class in declaration order
    pub fn classes(&self) -> &[ClassInfo] {
        &self.classes
    }

    /// Returns the class behind an object type
    pub fn class_of(&self, id: TypeId) -> Option<ClassId> {
        match self.kind(id)? {
            TypeKind::Object { class, .. } => Some(*class),
            _ => None,
        }
    }

    /// Returns the element type of an array type
    pub fn array_element(&self, id: TypeId) -> Option<TypeId> {
        match self.kind(id)? {
            TypeKind::Array { element } => Some(*element),
            _ => None,
        }
    }

    /// Returns the key and value types of a dictionary type
    pub fn dictionary_entry(&self, id: TypeId) -> Option<(TypeId, TypeId)> {
        match self.kind(id)? {
            TypeKind::Dictionary { key, value } => Some((*key, *value)),
            _ => None,
        }
    }

    /// Returns the type of a built-in member of a non-class type
    ///
    /// Strings, arrays and dictionaries expose a read-only `length`.
    pub fn builtin_member(&self, id: TypeId, name: &str) -> Option<TypeId> {
        let has_length = matches!(
            self.kind(id)?,
            TypeKind::String | TypeKind::Array { .. } | TypeKind::Dictionary { .. }
        );
        (has_length && name == "length").then_some(TypeId::NUMBER)
    }

    /// Gets the name of a type for error messages
    pub fn get_type_name(&self, id: TypeId) -> String {
        if let Some(meta) = self.get(id) {
            meta.display_name(self)
        } else {
            format!("Unknown({})", id.as_u64())
        }
    }

    /// Serializes the structure of a type
    pub fn signature(&self, id: TypeId) -> String {
        if let Some(meta) = self.get(id) {
            meta.signature(self)
        } else {
            format!("?{}", id.as_u64())
        }
    }

    fn is_structural(&self, id: TypeId) -> bool {
        self.kind(id).is_some_and(TypeKind::is_structural)
    }

    /// Checks whether two types are the same type
    ///
    /// Arrays and dictionaries compare by serialized structure; primitives,
    /// `Any` and objects compare by identity.
    pub fn same_type(&self, a: TypeId, b: TypeId) -> bool {
        if self.is_structural(a) || self.is_structural(b) {
            self.signature(a) == self.signature(b)
        } else {
            a == b
        }
    }

    /// Checks if a value of type `source` may be stored where `target` is expected
    ///
    /// `Any` on either side passes unconditionally. Otherwise the types must
    /// be the same under [`same_type`](Self::same_type).
    pub fn is_assignable(&self, target: TypeId, source: TypeId) -> bool {
        if target.is_any() || source.is_any() {
            return true;
        }
        self.same_type(target, source)
    }

    /// Checks whether two parameter types cannot be told apart at a call site
    pub fn types_overlap(&self, a: TypeId, b: TypeId) -> bool {
        a.is_any() || b.is_any() || self.same_type(a, b)
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_types() {
        let registry = TypeRegistry::new();
        assert!(registry.get(TypeId::NUMBER).is_some());
        assert!(registry.get(TypeId::ANY).is_some());
        assert_eq!(registry.get_by_name("Boolean"), Some(TypeId::BOOLEAN));
        assert_eq!(registry.get_by_name("Dog"), None);
    }

    #[test]
    fn test_arrays_are_not_interned() {
        let mut registry = TypeRegistry::new();
        let first = registry.create_array(TypeId::NUMBER);
        let second = registry.create_array(TypeId::NUMBER);
        assert_ne!(first, second);
        assert!(registry.same_type(first, second));
    }

    #[test]
    fn test_dictionary_lookup() {
        let mut registry = TypeRegistry::new();
        let dict = registry.create_dictionary(TypeId::STRING, TypeId::NUMBER);
        assert_eq!(
            registry.dictionary_entry(dict),
            Some((TypeId::STRING, TypeId::NUMBER))
        );
        assert_eq!(registry.array_element(dict), None);
    }

    #[test]
    fn test_object_creation() {
        let mut registry = TypeRegistry::new();
        let class = registry.create_object("Dog");
        let info = registry.class(class).unwrap();
        assert_eq!(info.name, "Dog");
        assert_eq!(registry.class_of(info.type_id), Some(class));
        assert_eq!(registry.get_type_name(info.type_id), "Dog");
    }

    #[test]
    fn test_builtin_length_member() {
        let mut registry = TypeRegistry::new();
        let array = registry.create_array(TypeId::STRING);
        assert_eq!(registry.builtin_member(array, "length"), Some(TypeId::NUMBER));
        assert_eq!(
            registry.builtin_member(TypeId::STRING, "length"),
            Some(TypeId::NUMBER)
        );
        assert_eq!(registry.builtin_member(TypeId::NUMBER, "length"), None);
        assert_eq!(registry.builtin_member(array, "size"), None);
    }
}
