//! Function calls, method calls and instantiation.

use crate::checker::core::Analyzer;
use crate::checks;
use respecc_ast::{Call, CallTarget, Expression, ExpressionKind};
use respecc_core::type_system::{ClassId, TypeId, TypeKind};
use respecc_core::{Error, Result, ScopeId, Span, Symbol, SymbolKind};

impl Analyzer {
    /// Resolves the callee, checks the arguments against it and records the
    /// call target. Returns the call's result type.
    pub(super) fn analyze_call(&mut self, call: &mut Call, scope: ScopeId, span: Span) -> Result<TypeId> {
        let callee_span = call.callee.span;
        let (target, result) = match &mut call.callee.kind {
            ExpressionKind::Identifier(name) => {
                let symbol = self.scopes.resolve(scope, name, callee_span)?.clone();
                checks::is_function(&symbol, callee_span)?;
                self.record_call_site(scope, name);
                self.analyze_arguments(&mut call.arguments, scope)?;
                self.resolve_named_call(&symbol, &call.arguments, span)?
            }
            ExpressionKind::Member { object, field } => {
                let object_type = self.analyze_expression(object, scope)?;
                checks::member_exists(&self.registry, object_type, field, callee_span)?;
                self.analyze_arguments(&mut call.arguments, scope)?;
                self.resolve_method_call(object_type, field, &call.arguments, span)?
            }
            _ => {
                let callee = self.analyze_callee_expression(&mut call.callee, scope)?;
                self.analyze_arguments(&mut call.arguments, scope)?;
                callee
            }
        };
        call.callee.resolved_type = Some(TypeId::ANY);
        call.target = Some(target);
        Ok(result)
    }

    fn analyze_arguments(&mut self, arguments: &mut [Expression], scope: ScopeId) -> Result<()> {
        for argument in arguments {
            self.analyze_expression(argument, scope)?;
        }
        Ok(())
    }

    /// Only `Any`-typed expressions, such as lambdas, can be called directly.
    fn analyze_callee_expression(
        &mut self,
        callee: &mut Expression,
        scope: ScopeId,
    ) -> Result<(CallTarget, TypeId)> {
        let ty = self.analyze_expression(callee, scope)?;
        if ty.is_any() {
            Ok((CallTarget::Dynamic, TypeId::ANY))
        } else {
            Err(Error::SemanticWithSpan(
                format!(
                    "Attempt to call a non-function of type {}",
                    self.registry.get_type_name(ty)
                ),
                callee.span,
            ))
        }
    }

    fn resolve_named_call(
        &self,
        symbol: &Symbol,
        arguments: &[Expression],
        span: Span,
    ) -> Result<(CallTarget, TypeId)> {
        match &symbol.kind {
            SymbolKind::Function(signature) => {
                checks::legal_arguments(&self.registry, arguments, &signature.parameters, span)?;
                let target = if symbol.builtin {
                    CallTarget::Builtin(symbol.name.clone())
                } else {
                    CallTarget::Function(symbol.name.clone())
                };
                Ok((target, signature.return_type))
            }
            SymbolKind::Class(class) => self.resolve_instantiation(*class, arguments, span),
            // Closure held in an `Any` variable
            _ => Ok((CallTarget::Dynamic, TypeId::ANY)),
        }
    }

    fn resolve_method_call(
        &self,
        object_type: TypeId,
        name: &str,
        arguments: &[Expression],
        span: Span,
    ) -> Result<(CallTarget, TypeId)> {
        let class = match self.registry.kind(object_type) {
            Some(TypeKind::Object { class, .. }) => *class,
            Some(TypeKind::Any) => return Ok((CallTarget::Dynamic, TypeId::ANY)),
            _ => {
                let member_type = self
                    .registry
                    .builtin_member(object_type, name)
                    .unwrap_or(TypeId::ANY);
                checks::is_function(&Symbol::variable(name, member_type), span)?;
                return Ok((CallTarget::Dynamic, TypeId::ANY));
            }
        };

        let info = self.class_info(class)?;
        let member = info.member(name).cloned().ok_or_else(|| {
            Error::SemanticWithSpan(format!("{name} is not a member of {}", info.name), span)
        })?;
        checks::is_function(&member, span)?;
        match &member.kind {
            SymbolKind::Function(signature) => {
                checks::legal_arguments(&self.registry, arguments, &signature.parameters, span)?;
                let target = CallTarget::Method {
                    class,
                    name: name.to_string(),
                };
                Ok((target, signature.return_type))
            }
            SymbolKind::Class(nested) => self.resolve_instantiation(*nested, arguments, span),
            _ => Ok((CallTarget::Dynamic, TypeId::ANY)),
        }
    }

    /// Instantiation accepts the call if any constructor overload does.
    fn resolve_instantiation(
        &self,
        class: ClassId,
        arguments: &[Expression],
        span: Span,
    ) -> Result<(CallTarget, TypeId)> {
        let info = self.class_info(class)?;
        checks::any_legal_arguments(&self.registry, arguments, &info.overloads(), &info.name, span)?;
        Ok((CallTarget::Constructor(class), info.type_id))
    }
}
