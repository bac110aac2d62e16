//! Expression analysis.
//!
//! Every routine returns the static type of the expression and the
//! dispatcher stores it in the node's `resolved_type` slot.

mod access;
mod calls;
mod collections;
mod operators;

use crate::checker::core::Analyzer;
use crate::checks;
use crate::scope::{FunctionContext, FunctionKind};
use respecc_ast::{Expression, ExpressionKind, Lambda, LambdaBody};
use respecc_core::type_system::TypeId;
use respecc_core::{Error, Result, ScopeId, Span, SymbolKind};

impl Analyzer {
    /// Analyzes an expression and annotates it with its type.
    pub(crate) fn analyze_expression(&mut self, expr: &mut Expression, scope: ScopeId) -> Result<TypeId> {
        let span = expr.span;
        let ty = match &mut expr.kind {
            ExpressionKind::Number(_) => TypeId::NUMBER,
            ExpressionKind::String(_) => TypeId::STRING,
            ExpressionKind::Boolean(_) => TypeId::BOOLEAN,
            ExpressionKind::Null => TypeId::NULL,
            ExpressionKind::Identifier(name) => self.analyze_identifier(name, scope, span)?,
            ExpressionKind::This => self.analyze_this(scope, span)?,
            ExpressionKind::Binary {
                left,
                operator,
                right,
            } => self.analyze_binary(left, *operator, right, scope)?,
            ExpressionKind::Unary { operator, operand } => {
                self.analyze_unary(*operator, operand, scope)?
            }
            ExpressionKind::Postfix { operand, .. } => self.analyze_postfix(operand, scope)?,
            ExpressionKind::Ternary {
                condition,
                then_branch,
                else_branch,
            } => self.analyze_ternary(condition, then_branch, else_branch, scope)?,
            ExpressionKind::Call(call) => self.analyze_call(call, scope, span)?,
            ExpressionKind::Member { object, field } => {
                self.analyze_member(object, field, scope, span)?
            }
            ExpressionKind::Subscript { object, index } => {
                self.analyze_subscript(object, index, scope)?
            }
            ExpressionKind::Array(elements) => self.analyze_array_literal(elements, scope)?,
            ExpressionKind::Dictionary(entries) => {
                self.analyze_dictionary_literal(entries, scope)?
            }
            ExpressionKind::Lambda(lambda) => self.analyze_lambda(lambda, scope)?,
        };
        expr.resolved_type = Some(ty);
        Ok(ty)
    }

    /// Named functions and classes used as values are dynamically typed.
    fn analyze_identifier(&mut self, name: &str, scope: ScopeId, span: Span) -> Result<TypeId> {
        let symbol = self.scopes.resolve(scope, name, span)?;
        match symbol.kind {
            SymbolKind::Variable | SymbolKind::Parameter => Ok(symbol.symbol_type),
            SymbolKind::Function(_) => {
                self.record_call_site(scope, name);
                Ok(TypeId::ANY)
            }
            SymbolKind::Class(_) => Ok(TypeId::ANY),
            SymbolKind::Type => Err(Error::SemanticWithSpan(
                format!("{name} is a type, not a value"),
                span,
            )),
        }
    }

    fn analyze_this(&self, scope: ScopeId, span: Span) -> Result<TypeId> {
        checks::in_class(&self.scopes, scope, "this", span)?;
        match self.scopes.scope(scope).current_class {
            Some(class) => Ok(self.class_info(class)?.type_id),
            None => Ok(TypeId::ANY),
        }
    }

    /// Identical branch types carry over; anything else degrades to `Any`.
    fn analyze_ternary(
        &mut self,
        condition: &mut Expression,
        then_branch: &mut Expression,
        else_branch: &mut Expression,
        scope: ScopeId,
    ) -> Result<TypeId> {
        self.analyze_condition(condition, scope, "Ternary condition")?;
        let then_type = self.analyze_expression(then_branch, scope)?;
        let else_type = self.analyze_expression(else_branch, scope)?;
        if self.registry.same_type(then_type, else_type) {
            Ok(then_type)
        } else {
            Ok(TypeId::ANY)
        }
    }

    /// Lambdas are always `Any`; their bodies are checked in a fresh
    /// function scope with no declared return type.
    fn analyze_lambda(&mut self, lambda: &mut Lambda, scope: ScopeId) -> Result<TypeId> {
        let frame = self.scopes.push_function(FunctionContext {
            name: "lambda".to_string(),
            kind: FunctionKind::Lambda,
            return_type: TypeId::ANY,
            type_resolved: true,
        });
        let body = self.scopes.child_for_function_body(scope, frame);
        self.analyze_parameters(&mut lambda.parameters, body)?;
        match &mut lambda.body {
            LambdaBody::Block(block) => self.analyze_block_in(block, body)?,
            LambdaBody::Expression(expr) => {
                self.analyze_expression(expr, body)?;
            }
        }
        lambda.body_scope = Some(body);
        Ok(TypeId::ANY)
    }
}
