//! Core analyzer structure.

use crate::Analysis;
use crate::scope::ScopeTree;
use respecc_core::type_system::{ClassId, ClassInfo, TypeRegistry};
use respecc_core::{Error, Result, ScopeId, Span, Symbol};
use std::collections::HashSet;

/// Semantic analyzer for Respecc++ programs.
///
/// Holds everything one analysis session produces: the type registry, the
/// scope arena and the names of every top-level function the program
/// references.
pub struct Analyzer {
    pub(crate) registry: TypeRegistry,
    pub(crate) scopes: ScopeTree,
    pub(crate) call_sites: HashSet<String>,
}

impl Analyzer {
    /// Creates an analyzer with a fresh registry and a seeded root scope.
    pub fn new() -> Self {
        Self {
            registry: TypeRegistry::new(),
            scopes: ScopeTree::with_builtins(),
            call_sites: HashSet::new(),
        }
    }

    /// Consumes the analyzer and returns the session state.
    pub fn into_analysis(self) -> Analysis {
        Analysis {
            registry: self.registry,
            scopes: self.scopes,
            call_sites: self.call_sites,
        }
    }

    /// Declares a symbol, mirroring class-body declarations into the class's
    /// member table so member access sees them immediately.
    pub(crate) fn declare(&mut self, scope: ScopeId, symbol: Symbol, span: Span) -> Result<()> {
        let owner = self.class_body_owner(scope);
        self.scopes.declare(scope, symbol.clone(), span)?;
        if let Some(class) = owner {
            self.class_mut(class)?
                .members
                .insert(symbol.name.clone(), symbol);
        }
        Ok(())
    }

    /// Records a reference to `name` when it is a top-level function.
    /// Methods and shadowing locals never keep a top-level function alive.
    pub(crate) fn record_call_site(&mut self, scope: ScopeId, name: &str) {
        if self.scopes.declaring_scope(scope, name) == Some(ScopeId::ROOT) {
            self.call_sites.insert(name.to_string());
        }
    }

    /// Returns the class whose body scope is exactly `scope`.
    pub(crate) fn class_body_owner(&self, scope: ScopeId) -> Option<ClassId> {
        let class = self.scopes.scope(scope).current_class?;
        let info = self.registry.class(class)?;
        (info.body_scope == Some(scope)).then_some(class)
    }

    pub(crate) fn class_info(&self, class: ClassId) -> Result<&ClassInfo> {
        self.registry
            .class(class)
            .ok_or_else(|| Error::Semantic(format!("Unknown class #{}", class.index())))
    }

    pub(crate) fn class_mut(&mut self, class: ClassId) -> Result<&mut ClassInfo> {
        self.registry
            .class_mut(class)
            .ok_or_else(|| Error::Semantic(format!("Unknown class #{}", class.index())))
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Error for a declaration whose body is reached before its signature.
pub(crate) fn not_hoisted(name: &str, span: Span) -> Error {
    Error::SemanticWithSpan(
        format!("{name} was analyzed before its declaration was registered"),
        span,
    )
}
