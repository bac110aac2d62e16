//! Declarations as stored in scopes and class member tables.

use crate::type_system::{ClassId, TypeId};

/// Resolved signature of a function, method or lambda
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSignature {
    pub parameters: Vec<TypeId>,
    pub return_type: TypeId,
}

impl FunctionSignature {
    pub fn new(parameters: Vec<TypeId>, return_type: TypeId) -> Self {
        Self {
            parameters,
            return_type,
        }
    }
}

/// What a name is bound to
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolKind {
    /// A type name such as `Number`
    Type,
    /// A variable or class field
    Variable,
    /// A function, method or constructor parameter
    Parameter,
    /// A named function or method
    Function(FunctionSignature),
    /// A class declaration
    Class(ClassId),
}

/// A declaration bound in a scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    /// The declared name
    pub name: String,
    pub kind: SymbolKind,
    /// Value type of the symbol: the declared/inferred type of variables and
    /// parameters, the return type of functions, the object type of classes
    /// and the denoted type of type names
    pub symbol_type: TypeId,
    /// Set for standard library entities
    pub builtin: bool,
}

impl Symbol {
    pub fn variable(name: impl Into<String>, symbol_type: TypeId) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::Variable,
            symbol_type,
            builtin: false,
        }
    }

    pub fn parameter(name: impl Into<String>, symbol_type: TypeId) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::Parameter,
            symbol_type,
            builtin: false,
        }
    }

    pub fn function(name: impl Into<String>, signature: FunctionSignature) -> Self {
        let symbol_type = signature.return_type;
        Self {
            name: name.into(),
            kind: SymbolKind::Function(signature),
            symbol_type,
            builtin: false,
        }
    }

    pub fn builtin_function(name: impl Into<String>, signature: FunctionSignature) -> Self {
        Self {
            builtin: true,
            ..Self::function(name, signature)
        }
    }

    pub fn class(name: impl Into<String>, class: ClassId, object_type: TypeId) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::Class(class),
            symbol_type: object_type,
            builtin: false,
        }
    }

    pub fn type_name(name: impl Into<String>, denoted: TypeId) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::Type,
            symbol_type: denoted,
            builtin: true,
        }
    }

    /// Returns the function signature if this symbol is callable by name.
    pub fn signature(&self) -> Option<&FunctionSignature> {
        match &self.kind {
            SymbolKind::Function(signature) => Some(signature),
            _ => None,
        }
    }
}
