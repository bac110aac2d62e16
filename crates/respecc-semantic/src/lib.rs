//! Semantic analysis for Respecc++ programs.
//!
//! This crate resolves names through a chain of lexical scopes, assigns a
//! static type to every expression and validates the program against the
//! language's checks. It operates on the AST handed over by the parser and
//! annotates it in place.

mod checker;
pub mod checks;
mod scope;

pub use checker::Analyzer;
pub use scope::{FunctionContext, FunctionId, FunctionKind, Scope, ScopeTree};

use respecc_ast::Program;
use respecc_core::Result;
use respecc_core::type_system::{ClassInfo, TypeId, TypeRegistry};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// State produced by one successful analysis.
///
/// Every type, class and scope handle stored on the analyzed AST resolves
/// against the registry and scope tree kept here.
#[derive(Debug)]
pub struct Analysis {
    pub registry: TypeRegistry,
    pub scopes: ScopeTree,
    /// Names of the top-level functions referenced by the program
    pub call_sites: HashSet<String>,
}

impl Analysis {
    /// Returns the user-facing name of a type.
    pub fn type_name(&self, id: TypeId) -> String {
        self.registry.get_type_name(id)
    }

    /// Finds a class by its declared name.
    pub fn class_named(&self, name: &str) -> Option<&ClassInfo> {
        self.registry
            .classes()
            .iter()
            .find(|class| class.name == name)
    }
}

/// Performs semantic analysis on a Respecc++ program.
///
/// The program is annotated in place: expressions receive their resolved
/// types, declarations their body scopes and call sites their targets.
///
/// # Errors
/// Analysis is fail-fast. The first failed check is returned and the program
/// must be treated as rejected; its annotations are then incomplete.
///
/// # Examples
/// ```
/// use respecc_ast::{ExprBuilder, ProgramBuilder, TypeAnnotation};
/// use respecc_semantic::analyze;
///
/// let mut builder = ProgramBuilder::new();
/// builder.add_variable("x", Some(TypeAnnotation::named("Number")), Some(ExprBuilder::number(1.0)));
/// let mut program = builder.build();
/// assert!(analyze(&mut program).is_ok());
/// ```
#[instrument(skip_all, fields(statements = program.statements.len()))]
pub fn analyze(program: &mut Program) -> Result<Analysis> {
    let mut analyzer = Analyzer::new();
    analyzer
        .analyze_program(program)
        .inspect_err(|err| debug!(error = %err, "Semantic analysis failed"))?;
    Ok(analyzer.into_analysis())
}
