//! Named semantic checks.
//!
//! Each check either returns `Ok(())` or fails with a semantic error pointing
//! at the offending node. None of them mutate analysis state.

use crate::scope::{FunctionKind, ScopeTree};
use respecc_ast::{Expression, Statement};
use respecc_core::type_system::{ClassInfo, TypeId, TypeKind, TypeRegistry};
use respecc_core::{Error, Result, ScopeId, Span, Symbol, SymbolKind};

fn ensure(condition: bool, span: Span, message: impl FnOnce() -> String) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::SemanticWithSpan(message(), span))
    }
}

/// Static type of an analyzed expression.
pub fn type_of(expression: &Expression) -> TypeId {
    expression.resolved_type.unwrap_or(TypeId::ANY)
}

fn type_list(registry: &TypeRegistry, types: &[TypeId]) -> String {
    types
        .iter()
        .map(|ty| registry.get_type_name(*ty))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Checks that `expression` may be stored where `target` is expected.
pub fn is_assignable_to(
    registry: &TypeRegistry,
    expression: &Expression,
    target: TypeId,
    message: Option<&str>,
) -> Result<()> {
    let source = type_of(expression);
    ensure(registry.is_assignable(target, source), expression.span, || {
        message.map(str::to_string).unwrap_or_else(|| {
            format!(
                "Expression of type {} not compatible with type {}",
                registry.get_type_name(source),
                registry.get_type_name(target)
            )
        })
    })
}

pub fn in_loop(scopes: &ScopeTree, scope: ScopeId, keyword: &str, span: Span) -> Result<()> {
    ensure(scopes.scope(scope).in_loop, span, || {
        format!("{keyword} can only be used in a loop")
    })
}

pub fn in_function(scopes: &ScopeTree, scope: ScopeId, keyword: &str, span: Span) -> Result<()> {
    ensure(scopes.scope(scope).current_function.is_some(), span, || {
        format!("{keyword} can only be used in a function")
    })
}

pub fn in_class(scopes: &ScopeTree, scope: ScopeId, keyword: &str, span: Span) -> Result<()> {
    ensure(scopes.scope(scope).current_class.is_some(), span, || {
        format!("{keyword} can only be used in a class")
    })
}

/// Constructors return the new instance implicitly.
pub fn constructor_has_no_return_value(
    kind: FunctionKind,
    value: Option<&Expression>,
    span: Span,
) -> Result<()> {
    ensure(
        kind != FunctionKind::Constructor || value.is_none(),
        span,
        || "Constructors cannot return a value".to_string(),
    )
}

pub fn constructor_matches_class(constructor: &str, class: &str, span: Span) -> Result<()> {
    ensure(constructor == class, span, || {
        format!("Constructor {constructor} does not match class {class}")
    })
}

/// Exact arity, then positional assignability.
pub fn legal_arguments(
    registry: &TypeRegistry,
    arguments: &[Expression],
    parameters: &[TypeId],
    span: Span,
) -> Result<()> {
    ensure(arguments.len() == parameters.len(), span, || {
        format!(
            "Expected {} args in call, got {}",
            parameters.len(),
            arguments.len()
        )
    })?;
    for (argument, parameter) in arguments.iter().zip(parameters) {
        is_assignable_to(registry, argument, *parameter, None)?;
    }
    Ok(())
}

fn arguments_fit(registry: &TypeRegistry, arguments: &[Expression], parameters: &[TypeId]) -> bool {
    arguments
        .iter()
        .zip(parameters)
        .all(|(argument, parameter)| registry.is_assignable(*parameter, type_of(argument)))
}

/// Accepts the call if any overload of matching arity accepts every argument.
///
/// There is no best-match ranking: the first compatible overload suffices.
pub fn any_legal_arguments(
    registry: &TypeRegistry,
    arguments: &[Expression],
    overloads: &[Vec<TypeId>],
    class: &str,
    span: Span,
) -> Result<()> {
    let candidates: Vec<&Vec<TypeId>> = overloads
        .iter()
        .filter(|parameters| parameters.len() == arguments.len())
        .collect();
    ensure(!candidates.is_empty(), span, || {
        format!(
            "No constructor of {class} takes {} args",
            arguments.len()
        )
    })?;
    ensure(
        candidates
            .iter()
            .any(|parameters| arguments_fit(registry, arguments, parameters)),
        span,
        || {
            let found: Vec<TypeId> = arguments.iter().map(type_of).collect();
            format!(
                "No constructor of {class} accepts arguments ({})",
                type_list(registry, &found)
            )
        },
    )
}

/// Checks that `name` is a member of `object_type`.
///
/// `Any` permits every member; the lookup is deferred to runtime.
pub fn member_exists(
    registry: &TypeRegistry,
    object_type: TypeId,
    name: &str,
    span: Span,
) -> Result<()> {
    match registry.kind(object_type) {
        Some(TypeKind::Any) => Ok(()),
        Some(TypeKind::Object { class, .. }) => {
            let info = registry.class(*class);
            ensure(
                info.is_some_and(|info| info.member(name).is_some()),
                span,
                || {
                    format!(
                        "{name} is not a member of {}",
                        registry.get_type_name(object_type)
                    )
                },
            )
        }
        _ => ensure(
            registry.builtin_member(object_type, name).is_some(),
            span,
            || {
                format!(
                    "Cannot access member {name} of non-object type {}",
                    registry.get_type_name(object_type)
                )
            },
        ),
    }
}

/// Fails when two constructor overloads cannot be told apart at a call site.
pub fn no_ambiguous_constructors(registry: &TypeRegistry, class: &ClassInfo) -> Result<()> {
    for (index, first) in class.constructors.iter().enumerate() {
        for second in &class.constructors[index + 1..] {
            let conflict = first.parameters.len() == second.parameters.len()
                && first
                    .parameters
                    .iter()
                    .zip(&second.parameters)
                    .all(|(a, b)| registry.types_overlap(*a, *b));
            ensure(!conflict, second.span, || {
                format!(
                    "Ambiguous constructors for class {}: ({}) conflicts with ({})",
                    class.name,
                    type_list(registry, &first.parameters),
                    type_list(registry, &second.parameters)
                )
            })?;
        }
    }
    Ok(())
}

pub fn is_not_class_declaration(statement: &Statement) -> Result<()> {
    ensure(
        !matches!(statement, Statement::Class(_)),
        statement.span(),
        || "Classes must be declared in root scope.".to_string(),
    )
}

pub fn is_not_function_declaration(statement: &Statement) -> Result<()> {
    ensure(
        !matches!(statement, Statement::Function(_) | Statement::Constructor(_)),
        statement.span(),
        || "Functions must be declared as class member or in root scope.".to_string(),
    )
}

pub fn is_number(expression: &Expression, message: Option<&str>) -> Result<()> {
    let ty = type_of(expression);
    ensure(ty == TypeId::NUMBER || ty.is_any(), expression.span, || {
        message.unwrap_or("Not a Number").to_string()
    })
}

pub fn is_boolean(expression: &Expression, context: &str) -> Result<()> {
    let ty = type_of(expression);
    ensure(ty == TypeId::BOOLEAN || ty.is_any(), expression.span, || {
        format!("{context} must be a Boolean")
    })
}

pub fn is_array_or_dictionary(registry: &TypeRegistry, expression: &Expression) -> Result<()> {
    let ok = matches!(
        registry.kind(type_of(expression)),
        Some(TypeKind::Array { .. } | TypeKind::Dictionary { .. } | TypeKind::Any)
    );
    ensure(ok, expression.span, || {
        "Not an array or a dictionary".to_string()
    })
}

/// Checks that a resolved name can be called.
pub fn is_function(symbol: &Symbol, span: Span) -> Result<()> {
    let callable = match symbol.kind {
        SymbolKind::Function(_) | SymbolKind::Class(_) => true,
        SymbolKind::Variable | SymbolKind::Parameter => symbol.symbol_type.is_any(),
        SymbolKind::Type => false,
    };
    ensure(callable, span, || {
        format!("Attempt to call a non-function: {}", symbol.name)
    })
}

/// Fails when a function with a declared return type never returned a value of it.
pub fn function_type_resolved(
    registry: &TypeRegistry,
    name: &str,
    return_type: TypeId,
    type_resolved: bool,
    span: Span,
) -> Result<()> {
    ensure(type_resolved, span, || {
        format!(
            "Function {name} needs to return value of type {}",
            registry.get_type_name(return_type)
        )
    })
}

/// The one type shared by every element, or `Any` for mixed or empty lists.
///
/// Commonality is identity: two freshly built array types are not common.
pub fn common_type(types: &[TypeId]) -> TypeId {
    match types.split_first() {
        Some((first, rest)) if rest.iter().all(|ty| ty == first) => *first,
        _ => TypeId::ANY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use respecc_ast::ExprBuilder;
    use respecc_core::type_system::ConstructorSignature;

    fn typed(mut expression: Expression, ty: TypeId) -> Expression {
        expression.resolved_type = Some(ty);
        expression
    }

    #[test]
    fn test_common_type() {
        assert_eq!(common_type(&[TypeId::NUMBER, TypeId::NUMBER]), TypeId::NUMBER);
        assert_eq!(common_type(&[TypeId::NUMBER, TypeId::BOOLEAN]), TypeId::ANY);
        assert_eq!(common_type(&[]), TypeId::ANY);
    }

    #[test]
    fn test_legal_arguments_arity_message() {
        let registry = TypeRegistry::new();
        let args = vec![
            typed(ExprBuilder::number(3.0), TypeId::NUMBER),
            typed(ExprBuilder::number(1.0), TypeId::NUMBER),
        ];
        let err = legal_arguments(&registry, &args, &[TypeId::NUMBER], Span::default())
            .unwrap_err();
        assert_eq!(err.message(), "Expected 1 args in call, got 2");
    }

    #[test]
    fn test_any_legal_arguments_first_compatible_wins() {
        let registry = TypeRegistry::new();
        let args = vec![typed(ExprBuilder::string("rex"), TypeId::STRING)];
        let overloads = vec![vec![TypeId::NUMBER], vec![TypeId::STRING]];
        assert!(any_legal_arguments(&registry, &args, &overloads, "Dog", Span::default()).is_ok());

        let overloads = vec![vec![TypeId::NUMBER]];
        let err = any_legal_arguments(&registry, &args, &overloads, "Dog", Span::default())
            .unwrap_err();
        assert_eq!(err.message(), "No constructor of Dog accepts arguments (String)");
    }

    #[test]
    fn test_ambiguous_constructors() {
        let mut registry = TypeRegistry::new();
        let class = registry.create_object("Dog");
        let info = registry.class_mut(class).unwrap();
        info.constructors.push(ConstructorSignature {
            parameters: vec![TypeId::STRING],
            span: Span::default(),
        });
        info.constructors.push(ConstructorSignature {
            parameters: vec![TypeId::ANY],
            span: Span::default(),
        });
        let info = registry.class(class).unwrap();
        assert!(no_ambiguous_constructors(&registry, info).is_err());
    }

    #[test]
    fn test_constructor_return_value() {
        let value = ExprBuilder::number(1.0);
        assert!(
            constructor_has_no_return_value(FunctionKind::Constructor, Some(&value), Span::default())
                .is_err()
        );
        assert!(constructor_has_no_return_value(FunctionKind::Constructor, None, Span::default()).is_ok());
        assert!(
            constructor_has_no_return_value(FunctionKind::Function, Some(&value), Span::default())
                .is_ok()
        );
    }

    #[test]
    fn test_member_exists_on_builtins() {
        let mut registry = TypeRegistry::new();
        let array = registry.create_array(TypeId::NUMBER);
        assert!(member_exists(&registry, array, "length", Span::default()).is_ok());
        assert!(member_exists(&registry, TypeId::ANY, "anything", Span::default()).is_ok());
        let err = member_exists(&registry, TypeId::NUMBER, "length", Span::default()).unwrap_err();
        assert_eq!(
            err.message(),
            "Cannot access member length of non-object type Number"
        );
    }
}
