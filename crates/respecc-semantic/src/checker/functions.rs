//! Functions, methods, constructors and parameters.

use crate::checker::core::{Analyzer, not_hoisted};
use crate::checks;
use crate::scope::{FunctionContext, FunctionKind};
use respecc_ast::{Constructor, FunctionDeclaration, Parameter};
use respecc_core::type_system::{ConstructorSignature, TypeId};
use respecc_core::{Error, FunctionSignature, Result, ScopeId, Symbol};

impl Analyzer {
    /// Signature phase: resolves the return type, opens the body scope and
    /// binds the parameters in it.
    pub(crate) fn analyze_function_signature(
        &mut self,
        func: &mut FunctionDeclaration,
        scope: ScopeId,
        kind: FunctionKind,
    ) -> Result<FunctionSignature> {
        let return_type = match &func.return_type {
            Some(annotation) => self.scopes.resolve_type(scope, annotation, &mut self.registry)?,
            None => TypeId::ANY,
        };
        let frame = self.scopes.push_function(FunctionContext {
            name: func.name.clone(),
            kind,
            return_type,
            type_resolved: return_type.is_any(),
        });
        let body = self.scopes.child_for_function_body(scope, frame);
        let parameters = self.analyze_parameters(&mut func.parameters, body)?;

        func.resolved_type = Some(return_type);
        func.type_resolved = return_type.is_any();
        func.body_scope = Some(body);
        Ok(FunctionSignature::new(parameters, return_type))
    }

    /// Body phase: walks the body in the scope opened by the signature phase.
    pub(crate) fn analyze_function_body(&mut self, func: &mut FunctionDeclaration) -> Result<()> {
        let body = func
            .body_scope
            .ok_or_else(|| not_hoisted(&func.name, func.span))?;
        self.analyze_block_in(&mut func.body, body)?;

        let frame = self
            .scopes
            .scope(body)
            .current_function
            .ok_or_else(|| not_hoisted(&func.name, func.span))?;
        let context = self.scopes.function(frame);
        func.type_resolved = context.type_resolved;
        checks::function_type_resolved(
            &self.registry,
            &func.name,
            context.return_type,
            context.type_resolved,
            func.span,
        )
    }

    /// Binds parameters in a function-like body scope and returns their types.
    pub(crate) fn analyze_parameters(
        &mut self,
        parameters: &mut [Parameter],
        body: ScopeId,
    ) -> Result<Vec<TypeId>> {
        let mut types = Vec::with_capacity(parameters.len());
        for parameter in parameters {
            let ty = match &parameter.type_annotation {
                Some(annotation) => self.scopes.resolve_type(body, annotation, &mut self.registry)?,
                None => TypeId::ANY,
            };
            parameter.resolved_type = Some(ty);
            self.declare(body, Symbol::parameter(&parameter.name, ty), parameter.span)?;
            types.push(ty);
        }
        Ok(types)
    }

    /// Registers a constructor overload with its enclosing class.
    pub(crate) fn analyze_constructor_signature(
        &mut self,
        ctor: &mut Constructor,
        scope: ScopeId,
    ) -> Result<()> {
        checks::in_class(
            &self.scopes,
            scope,
            &format!("Constructor {}", ctor.name),
            ctor.span,
        )?;
        let class = self
            .scopes
            .scope(scope)
            .current_class
            .ok_or_else(|| not_hoisted(&ctor.name, ctor.span))?;
        let info = self.class_info(class)?;
        checks::constructor_matches_class(&ctor.name, &info.name, ctor.span)?;
        let object_type = info.type_id;

        let frame = self.scopes.push_function(FunctionContext {
            name: ctor.name.clone(),
            kind: FunctionKind::Constructor,
            return_type: object_type,
            type_resolved: true,
        });
        let body = self.scopes.child_for_function_body(scope, frame);
        let parameters = self.analyze_parameters(&mut ctor.parameters, body)?;

        ctor.body_scope = Some(body);
        ctor.class_id = Some(class);
        self.class_mut(class)?.constructors.push(ConstructorSignature {
            parameters,
            span: ctor.span,
        });
        Ok(())
    }

    pub(crate) fn analyze_constructor_body(&mut self, ctor: &mut Constructor) -> Result<()> {
        let body = ctor.body_scope.ok_or_else(|| {
            Error::SemanticWithSpan(
                format!("Constructor {} can only be used in a class", ctor.name),
                ctor.span,
            )
        })?;
        self.analyze_block_in(&mut ctor.body, body)
    }
}
