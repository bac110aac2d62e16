//! Statement analysis.

use crate::checker::core::Analyzer;
use crate::checks;
use respecc_ast::{Assignment, Block, ExpressionKind, Return, Statement, VariableDeclaration};
use respecc_core::type_system::TypeId;
use respecc_core::{Error, Result, ScopeId, Symbol};

impl Analyzer {
    /// Analyzes one statement in `scope`.
    pub(crate) fn analyze_statement(&mut self, statement: &mut Statement, scope: ScopeId) -> Result<()> {
        match statement {
            Statement::Variable(decl) => self.analyze_variable(decl, scope),
            Statement::Assignment(assign) => self.analyze_assignment(assign, scope),
            Statement::Function(func) => self.analyze_function_body(func),
            Statement::Class(class) => self.analyze_class_body(class),
            Statement::Constructor(ctor) => self.analyze_constructor_body(ctor),
            Statement::Conditional(cond) => self.analyze_conditional(cond, scope),
            Statement::While(while_loop) => self.analyze_while(while_loop, scope),
            Statement::For(for_loop) => self.analyze_for(for_loop, scope),
            Statement::Return(ret) => self.analyze_return(ret, scope),
            Statement::Break { span } => checks::in_loop(&self.scopes, scope, "break", *span),
            Statement::Expression(expr) => self.analyze_expression(expr, scope).map(|_| ()),
        }
    }

    /// Analyzes a nested statement list directly in `scope`.
    ///
    /// Class and function declarations are rejected before any statement of
    /// the list is analyzed.
    pub(crate) fn analyze_block_in(&mut self, block: &mut Block, scope: ScopeId) -> Result<()> {
        for statement in &block.statements {
            checks::is_not_class_declaration(statement)?;
            checks::is_not_function_declaration(statement)?;
        }
        for statement in &mut block.statements {
            self.analyze_statement(statement, scope)?;
        }
        Ok(())
    }

    /// An annotation is checked against the initializer, never overridden by
    /// it; without one the type is inferred from the initializer.
    pub(crate) fn analyze_variable(&mut self, decl: &mut VariableDeclaration, scope: ScopeId) -> Result<()> {
        let declared = match &decl.type_annotation {
            Some(annotation) => Some(self.scopes.resolve_type(scope, annotation, &mut self.registry)?),
            None => None,
        };

        let inferred = match &mut decl.initializer {
            Some(initializer) => {
                let ty = self.analyze_expression(initializer, scope)?;
                if let Some(declared) = declared {
                    checks::is_assignable_to(&self.registry, initializer, declared, None)?;
                }
                Some(ty)
            }
            None => None,
        };

        let ty = declared.or(inferred).unwrap_or(TypeId::ANY);
        decl.resolved_type = Some(ty);
        self.declare(scope, Symbol::variable(&decl.name, ty), decl.span)
    }

    fn analyze_assignment(&mut self, assign: &mut Assignment, scope: ScopeId) -> Result<()> {
        self.analyze_expression(&mut assign.value, scope)?;
        if !matches!(
            assign.target.kind,
            ExpressionKind::Identifier(_) | ExpressionKind::Member { .. } | ExpressionKind::Subscript { .. }
        ) {
            return Err(Error::SemanticWithSpan(
                "Invalid assignment target".to_string(),
                assign.target.span,
            ));
        }
        let target = self.analyze_expression(&mut assign.target, scope)?;
        checks::is_assignable_to(&self.registry, &assign.value, target, None)
    }

    fn analyze_return(&mut self, ret: &mut Return, scope: ScopeId) -> Result<()> {
        checks::in_function(&self.scopes, scope, "return", ret.span)?;
        let Some(frame) = self.scopes.scope(scope).current_function else {
            return Ok(());
        };
        let context = self.scopes.function(frame);
        let (kind, return_type) = (context.kind, context.return_type);
        checks::constructor_has_no_return_value(kind, ret.value.as_ref(), ret.span)?;

        if let Some(value) = &mut ret.value {
            let found = self.analyze_expression(value, scope)?;
            if !return_type.is_any() {
                let message = format!(
                    "Type mismatch in function return: expected {}, found {}",
                    self.registry.get_type_name(return_type),
                    self.registry.get_type_name(found)
                );
                checks::is_assignable_to(&self.registry, value, return_type, Some(&message))?;
                // One matching return satisfies the function; paths are not checked.
                self.scopes.function_mut(frame).type_resolved = true;
            }
        }
        Ok(())
    }
}
