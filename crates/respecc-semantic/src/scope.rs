//! Lexical scopes for name resolution during semantic analysis.
//!
//! Scopes live in an arena and link to their parent by [`ScopeId`], forming
//! the backward chain that lookups walk outward. Every scope also carries the
//! context flags the checks consult: whether a `break` is legal, which
//! function-like declaration encloses it and which class body encloses it.

use respecc_ast::TypeAnnotation;
use respecc_core::type_system::{BUILTIN_TYPE_NAMES, ClassId, TypeId, TypeRegistry, standard_functions};
use respecc_core::{Error, Result, ScopeId, Span, Symbol, SymbolKind};
use std::collections::HashMap;

/// Handle to a function-like context (function, method, constructor or lambda)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FunctionId(u32);

impl FunctionId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Which kind of declaration a function context belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    Function,
    Method,
    Constructor,
    Lambda,
}

/// State tracked for one function-like declaration while its body is analyzed.
#[derive(Debug, Clone)]
pub struct FunctionContext {
    pub name: String,
    pub kind: FunctionKind,
    /// Declared return type, `Any` when unannotated
    pub return_type: TypeId,
    /// Set once a return statement matched the declared type
    pub type_resolved: bool,
}

/// One lexical scope.
#[derive(Debug, Clone)]
pub struct Scope {
    pub parent: Option<ScopeId>,
    symbols: HashMap<String, Symbol>,
    pub in_loop: bool,
    pub current_function: Option<FunctionId>,
    pub current_class: Option<ClassId>,
}

impl Scope {
    fn root() -> Self {
        Self {
            parent: None,
            symbols: HashMap::new(),
            in_loop: false,
            current_function: None,
            current_class: None,
        }
    }

    /// Returns the declarations made directly in this scope
    pub fn symbols(&self) -> &HashMap<String, Symbol> {
        &self.symbols
    }
}

/// Arena of every scope created while analyzing one program.
#[derive(Debug, Clone)]
pub struct ScopeTree {
    scopes: Vec<Scope>,
    functions: Vec<FunctionContext>,
}

impl ScopeTree {
    /// Creates a tree holding only an empty root scope.
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::root()],
            functions: Vec::new(),
        }
    }

    /// Creates a tree whose root scope binds the built-in types and functions.
    pub fn with_builtins() -> Self {
        let mut tree = Self::new();
        let root = &mut tree.scopes[ScopeId::ROOT.index()];
        for (name, id) in BUILTIN_TYPE_NAMES {
            root.symbols.insert(name.to_string(), Symbol::type_name(name, id));
        }
        for function in standard_functions() {
            root.symbols.insert(function.name.clone(), function);
        }
        tree
    }

    /// Returns a scope by handle.
    ///
    /// # Panics
    /// Panics if the handle was not produced by this tree.
    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.index()]
    }

    fn scope_mut(&mut self, id: ScopeId) -> &mut Scope {
        &mut self.scopes[id.index()]
    }

    /// Number of scopes created so far, the root included
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    fn push_child(&mut self, parent: ScopeId, configure: impl FnOnce(&mut Scope)) -> ScopeId {
        let base = self.scope(parent);
        let mut child = Scope {
            parent: Some(parent),
            symbols: HashMap::new(),
            in_loop: base.in_loop,
            current_function: base.current_function,
            current_class: base.current_class,
        };
        configure(&mut child);
        let id = ScopeId::new(self.scopes.len() as u32);
        self.scopes.push(child);
        id
    }

    /// Child scope for a function-like body. A loop does not survive into it,
    /// the enclosing class does.
    pub fn child_for_function_body(&mut self, parent: ScopeId, function: FunctionId) -> ScopeId {
        self.push_child(parent, |scope| {
            scope.in_loop = false;
            scope.current_function = Some(function);
        })
    }

    /// Child scope for a class body. Resets the loop flag.
    pub fn child_for_class_body(&mut self, parent: ScopeId, class: ClassId) -> ScopeId {
        self.push_child(parent, |scope| {
            scope.in_loop = false;
            scope.current_class = Some(class);
        })
    }

    /// Child scope for a loop body.
    pub fn child_for_loop(&mut self, parent: ScopeId) -> ScopeId {
        self.push_child(parent, |scope| scope.in_loop = true)
    }

    /// Child scope for a conditional branch, inheriting every flag.
    pub fn child_for_block(&mut self, parent: ScopeId) -> ScopeId {
        self.push_child(parent, |_| {})
    }

    /// Registers a function-like context.
    pub fn push_function(&mut self, context: FunctionContext) -> FunctionId {
        let id = FunctionId(self.functions.len() as u32);
        self.functions.push(context);
        id
    }

    pub fn function(&self, id: FunctionId) -> &FunctionContext {
        &self.functions[id.index()]
    }

    pub fn function_mut(&mut self, id: FunctionId) -> &mut FunctionContext {
        &mut self.functions[id.index()]
    }

    /// Declares a symbol in `scope`.
    ///
    /// Shadowing a name from an enclosing scope is allowed; declaring it twice
    /// in the same scope is not.
    pub fn declare(&mut self, scope: ScopeId, symbol: Symbol, span: Span) -> Result<()> {
        let table = &mut self.scope_mut(scope).symbols;
        if table.contains_key(&symbol.name) {
            return Err(Error::SemanticWithSpan(
                format!("{} already declared in this scope", symbol.name),
                span,
            ));
        }
        table.insert(symbol.name.clone(), symbol);
        Ok(())
    }

    /// Looks up a name from `scope` outward to the root.
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<&Symbol> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let scope = self.scope(id);
            if let Some(symbol) = scope.symbols.get(name) {
                return Some(symbol);
            }
            current = scope.parent;
        }
        None
    }

    /// The scope that declares the symbol `name` resolves to from `scope`.
    pub fn declaring_scope(&self, scope: ScopeId, name: &str) -> Option<ScopeId> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let scope = self.scope(id);
            if scope.symbols.contains_key(name) {
                return Some(id);
            }
            current = scope.parent;
        }
        None
    }

    /// Like [`lookup`](Self::lookup), failing for undeclared names.
    pub fn resolve(&self, scope: ScopeId, name: &str, span: Span) -> Result<&Symbol> {
        self.lookup(scope, name).ok_or_else(|| {
            Error::SemanticWithSpan(format!("Identifier {name} has not been declared"), span)
        })
    }

    /// Resolves a type annotation to a type.
    ///
    /// Names go through the same lookup as values and must denote a type or a
    /// class. Array and dictionary annotations resolve their inner types and
    /// construct a fresh structural type.
    pub fn resolve_type(
        &self,
        scope: ScopeId,
        annotation: &TypeAnnotation,
        registry: &mut TypeRegistry,
    ) -> Result<TypeId> {
        match annotation {
            TypeAnnotation::Named { name, span } => {
                let symbol = self.resolve(scope, name, *span)?;
                match symbol.kind {
                    SymbolKind::Type | SymbolKind::Class(_) => Ok(symbol.symbol_type),
                    _ => Err(Error::SemanticWithSpan(
                        format!("{name} is not a type"),
                        *span,
                    )),
                }
            }
            TypeAnnotation::Array(element) => {
                let element = self.resolve_type(scope, element, registry)?;
                Ok(registry.create_array(element))
            }
            TypeAnnotation::Dictionary(key, value) => {
                let key = self.resolve_type(scope, key, registry)?;
                let value = self.resolve_type(scope, value, registry)?;
                Ok(registry.create_dictionary(key, value))
            }
        }
    }
}

impl Default for ScopeTree {
    fn default() -> Self {
        Self::with_builtins()
    }
}
