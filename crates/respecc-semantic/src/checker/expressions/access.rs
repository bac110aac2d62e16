//! Member access and subscripts.

use crate::checker::core::Analyzer;
use crate::checks;
use respecc_ast::Expression;
use respecc_core::type_system::{TypeId, TypeKind};
use respecc_core::{Result, ScopeId, Span, SymbolKind};

impl Analyzer {
    pub(super) fn analyze_member(
        &mut self,
        object: &mut Expression,
        field: &str,
        scope: ScopeId,
        span: Span,
    ) -> Result<TypeId> {
        let object_type = self.analyze_expression(object, scope)?;
        checks::member_exists(&self.registry, object_type, field, span)?;

        let ty = match self.registry.kind(object_type) {
            // Methods and nested classes used as values are dynamically typed.
            Some(TypeKind::Object { class, .. }) => match self.class_info(*class)?.member(field) {
                Some(member)
                    if matches!(member.kind, SymbolKind::Variable | SymbolKind::Parameter) =>
                {
                    member.symbol_type
                }
                _ => TypeId::ANY,
            },
            _ => self
                .registry
                .builtin_member(object_type, field)
                .unwrap_or(TypeId::ANY),
        };
        Ok(ty)
    }

    /// Arrays take Number subscripts and yield elements; dictionaries take
    /// keys and yield values.
    pub(super) fn analyze_subscript(
        &mut self,
        object: &mut Expression,
        index: &mut Expression,
        scope: ScopeId,
    ) -> Result<TypeId> {
        let object_type = self.analyze_expression(object, scope)?;
        checks::is_array_or_dictionary(&self.registry, object)?;
        self.analyze_expression(index, scope)?;

        if let Some(element) = self.registry.array_element(object_type) {
            checks::is_assignable_to(
                &self.registry,
                index,
                TypeId::NUMBER,
                Some("Array subscript must be of type Number"),
            )?;
            return Ok(element);
        }
        if let Some((key, value)) = self.registry.dictionary_entry(object_type) {
            checks::is_assignable_to(
                &self.registry,
                index,
                key,
                Some("Dictionary subscript must match key type"),
            )?;
            return Ok(value);
        }
        Ok(TypeId::ANY)
    }
}
