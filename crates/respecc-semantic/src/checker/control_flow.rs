//! Conditionals and loops.

use crate::checker::core::Analyzer;
use crate::checks;
use respecc_ast::{Conditional, Expression, ForLoop, WhileLoop};
use respecc_core::{Result, ScopeId};

impl Analyzer {
    /// Analyzes a condition and requires it to be Boolean.
    pub(crate) fn analyze_condition(
        &mut self,
        condition: &mut Expression,
        scope: ScopeId,
        context: &str,
    ) -> Result<()> {
        self.analyze_expression(condition, scope)?;
        checks::is_boolean(condition, context)
    }

    /// Conditions see only the enclosing scope; every branch gets its own.
    pub(crate) fn analyze_conditional(&mut self, cond: &mut Conditional, scope: ScopeId) -> Result<()> {
        self.analyze_condition(&mut cond.condition, scope, "If condition")?;
        let branch = self.scopes.child_for_block(scope);
        self.analyze_block_in(&mut cond.then_block, branch)?;

        for else_if in &mut cond.else_ifs {
            self.analyze_condition(&mut else_if.condition, scope, "Else if condition")?;
            let branch = self.scopes.child_for_block(scope);
            self.analyze_block_in(&mut else_if.block, branch)?;
        }

        if let Some(else_block) = &mut cond.else_block {
            let branch = self.scopes.child_for_block(scope);
            self.analyze_block_in(else_block, branch)?;
        }
        Ok(())
    }

    pub(crate) fn analyze_while(&mut self, while_loop: &mut WhileLoop, scope: ScopeId) -> Result<()> {
        self.analyze_condition(&mut while_loop.condition, scope, "While condition")?;
        let body = self.scopes.child_for_loop(scope);
        self.analyze_block_in(&mut while_loop.body, body)
    }

    /// The loop variable lives in the loop scope and is visible to the
    /// condition, the update and the body.
    pub(crate) fn analyze_for(&mut self, for_loop: &mut ForLoop, scope: ScopeId) -> Result<()> {
        let body = self.scopes.child_for_loop(scope);
        if let Some(initializer) = &mut for_loop.initializer {
            self.analyze_variable(initializer, body)?;
        }
        if let Some(condition) = &mut for_loop.condition {
            self.analyze_condition(condition, body, "For condition")?;
        }
        if let Some(update) = &mut for_loop.update {
            checks::is_not_class_declaration(update)?;
            checks::is_not_function_declaration(update)?;
            self.analyze_statement(update, body)?;
        }
        self.analyze_block_in(&mut for_loop.body, body)
    }
}
