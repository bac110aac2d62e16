//! Array and dictionary literals.

use crate::checker::core::Analyzer;
use crate::checks;
use respecc_ast::{DictEntry, Expression};
use respecc_core::type_system::TypeId;
use respecc_core::{Result, ScopeId};

impl Analyzer {
    /// Mixed or empty literals become `Array<Any>`.
    pub(super) fn analyze_array_literal(
        &mut self,
        elements: &mut [Expression],
        scope: ScopeId,
    ) -> Result<TypeId> {
        let mut types = Vec::with_capacity(elements.len());
        for element in elements {
            types.push(self.analyze_expression(element, scope)?);
        }
        Ok(self.registry.create_array(checks::common_type(&types)))
    }

    /// Keys and values are unified independently.
    pub(super) fn analyze_dictionary_literal(
        &mut self,
        entries: &mut [DictEntry],
        scope: ScopeId,
    ) -> Result<TypeId> {
        let mut keys = Vec::with_capacity(entries.len());
        let mut values = Vec::with_capacity(entries.len());
        for entry in entries {
            keys.push(self.analyze_expression(&mut entry.key, scope)?);
            values.push(self.analyze_expression(&mut entry.value, scope)?);
        }
        Ok(self
            .registry
            .create_dictionary(checks::common_type(&keys), checks::common_type(&values)))
    }
}
