//! Program-level analysis and declaration hoisting.

use crate::checker::core::Analyzer;
use crate::scope::FunctionKind;
use respecc_ast::{Program, Statement};
use respecc_core::{FunctionSignature, Result, ScopeId, Span, Symbol};
use tracing::debug;

impl Analyzer {
    /// Analyzes a complete program in the root scope.
    pub fn analyze_program(&mut self, program: &mut Program) -> Result<()> {
        self.hoist_declarations(&mut program.statements, ScopeId::ROOT)?;
        for statement in &mut program.statements {
            if let Statement::Class(class) = statement {
                self.analyze_class_fields(class)?;
            }
        }

        for statement in &mut program.statements {
            self.analyze_statement(statement, ScopeId::ROOT)?;
        }

        debug!(
            statements = program.statements.len(),
            "Completed full walk"
        );
        Ok(())
    }

    /// Makes the classes and functions of a declaration list visible before
    /// any statement of it is walked.
    ///
    /// Classes come first, registered as placeholders and then named, so they
    /// can refer to each other. Function and constructor signatures follow,
    /// enabling forward and mutually recursive calls. Class fields are
    /// analyzed by the caller once every signature is bound.
    pub(crate) fn hoist_declarations(
        &mut self,
        statements: &mut [Statement],
        scope: ScopeId,
    ) -> Result<()> {
        let mut classes = 0;
        for statement in statements.iter_mut() {
            if let Statement::Class(class) = statement {
                self.register_class(class, scope)?;
                classes += 1;
            }
        }
        for statement in statements.iter_mut() {
            if let Statement::Class(class) = statement {
                self.analyze_class_names(class, scope)?;
            }
        }
        debug!(classes, ?scope, "Registered class names");

        let kind = if self.class_body_owner(scope).is_some() {
            FunctionKind::Method
        } else {
            FunctionKind::Function
        };
        let mut signatures: Vec<(String, FunctionSignature, Span)> = Vec::new();
        for statement in statements.iter_mut() {
            match statement {
                Statement::Function(func) => {
                    let signature = self.analyze_function_signature(func, scope, kind)?;
                    signatures.push((func.name.clone(), signature, func.span));
                }
                Statement::Constructor(ctor) => self.analyze_constructor_signature(ctor, scope)?,
                _ => {}
            }
        }
        let functions = signatures.len();
        for (name, signature, span) in signatures {
            self.declare(scope, Symbol::function(name, signature), span)?;
        }
        debug!(functions, ?scope, "Bound function signatures");

        Ok(())
    }
}
