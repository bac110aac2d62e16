use super::{TypeId, TypeKind, TypeRegistry};

/// Registry entry for a type: its id and structure
#[derive(Debug, Clone, PartialEq)]
pub struct TypeMetadata {
    /// Unique identifier for this type
    pub id: TypeId,

    /// The kind/structure of the type
    pub kind: TypeKind,
}

impl TypeMetadata {
    /// Creates metadata for a primitive singleton
    pub fn primitive(id: TypeId, kind: TypeKind) -> Self {
        Self { id, kind }
    }

    /// Creates metadata for a constructed type (array, dictionary, object)
    pub fn constructed(id: TypeId, kind: TypeKind) -> Self {
        Self { id, kind }
    }

    /// Returns the user-facing name, expanding collection element types
    pub fn display_name(&self, registry: &TypeRegistry) -> String {
        match &self.kind {
            TypeKind::Array { element } => {
                format!("Array<{}>", registry.get_type_name(*element))
            }
            TypeKind::Dictionary { key, value } => format!(
                "Dictionary<{}, {}>",
                registry.get_type_name(*key),
                registry.get_type_name(*value)
            ),
            kind => kind.name(),
        }
    }

    /// Serializes the structure of the type for structural comparison
    ///
    /// Nominal types serialize to their identity, so two distinct classes with
    /// the same name still differ.
    pub fn signature(&self, registry: &TypeRegistry) -> String {
        match &self.kind {
            TypeKind::Array { element } => format!("[{}]", registry.signature(*element)),
            TypeKind::Dictionary { key, value } => format!(
                "{{{}:{}}}",
                registry.signature(*key),
                registry.signature(*value)
            ),
            TypeKind::Object { class, name } => format!("{name}#{}", class.index()),
            kind => kind.name(),
        }
    }
}
