//! Binary and unary operator analysis.

use crate::checker::core::Analyzer;
use crate::checks;
use respecc_ast::{BinaryOperator, Expression, UnaryOperator};
use respecc_core::type_system::TypeId;
use respecc_core::{Result, ScopeId};

impl Analyzer {
    /// Arithmetic takes the left operand's type; everything else is Boolean.
    pub(super) fn analyze_binary(
        &mut self,
        left: &mut Expression,
        operator: BinaryOperator,
        right: &mut Expression,
        scope: ScopeId,
    ) -> Result<TypeId> {
        let left_type = self.analyze_expression(left, scope)?;
        self.analyze_expression(right, scope)?;
        if operator.is_arithmetic() {
            Ok(left_type)
        } else {
            Ok(TypeId::BOOLEAN)
        }
    }

    pub(super) fn analyze_unary(
        &mut self,
        operator: UnaryOperator,
        operand: &mut Expression,
        scope: ScopeId,
    ) -> Result<TypeId> {
        let ty = self.analyze_expression(operand, scope)?;
        match operator {
            UnaryOperator::Not => checks::is_boolean(operand, "Operand of !")?,
            UnaryOperator::Negate | UnaryOperator::Increment | UnaryOperator::Decrement => {
                checks::is_number(operand, None)?;
            }
        }
        Ok(ty)
    }

    /// Postfix `++`/`--` only apply to numbers.
    pub(super) fn analyze_postfix(&mut self, operand: &mut Expression, scope: ScopeId) -> Result<TypeId> {
        let ty = self.analyze_expression(operand, scope)?;
        checks::is_number(operand, None)?;
        Ok(ty)
    }
}
