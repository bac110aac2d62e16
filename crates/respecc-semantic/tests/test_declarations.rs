//! Declaration, lookup and scoping tests.

mod common;
use common::{analyze_statements, block, error_message, should_fail, should_pass};
use respecc_ast::{ExprBuilder as E, Statement, StmtBuilder as S, TypeAnnotation as T};
use respecc_core::type_system::TypeId;

fn number() -> Option<T> {
    Some(T::named("Number"))
}

#[test]
fn test_duplicate_declaration_in_same_scope() {
    let message = error_message(vec![
        S::variable("x", number(), Some(E::number(1.0))),
        S::variable("x", number(), Some(E::number(2.0))),
    ]);
    assert_eq!(message, "x already declared in this scope");
}

#[test]
fn test_shadowing_in_nested_scope() {
    let (program, _) = analyze_statements(vec![
        S::variable("x", number(), Some(E::number(1.0))),
        S::conditional(
            E::boolean(true),
            block(vec![
                S::variable("x", Some(T::named("String")), Some(E::string("inner"))),
                S::variable("inner", None, Some(E::ident("x"))),
            ]),
            vec![],
            None,
        ),
        S::variable("outer", None, Some(E::ident("x"))),
    ])
    .unwrap();

    let Statement::Conditional(cond) = &program.statements[1] else {
        panic!("expected conditional");
    };
    let Statement::Variable(inner) = &cond.then_block.statements[1] else {
        panic!("expected declaration");
    };
    assert_eq!(inner.resolved_type, Some(TypeId::STRING));

    let Statement::Variable(outer) = &program.statements[2] else {
        panic!("expected declaration");
    };
    assert_eq!(outer.resolved_type, Some(TypeId::NUMBER));
}

#[test]
fn test_type_inference_from_initializer() {
    let (program, _) = analyze_statements(vec![S::variable("x", None, Some(E::string("hi")))]).unwrap();
    let Statement::Variable(decl) = &program.statements[0] else {
        panic!("expected declaration");
    };
    assert_eq!(decl.resolved_type, Some(TypeId::STRING));
}

#[test]
fn test_annotation_is_checked_not_overridden() {
    assert!(should_fail(vec![S::variable(
        "x",
        number(),
        Some(E::string("hello"))
    )]));

    let message = error_message(vec![S::variable("x", number(), Some(E::boolean(true)))]);
    assert_eq!(
        message,
        "Expression of type Boolean not compatible with type Number"
    );
}

#[test]
fn test_any_annotation_accepts_everything() {
    assert!(should_pass(vec![
        S::variable("x", Some(T::named("Any")), Some(E::string("hello"))),
        S::variable("y", number(), Some(E::ident("x"))),
    ]));
}

#[test]
fn test_undeclared_identifier() {
    let message = error_message(vec![S::variable("x", None, Some(E::ident("y")))]);
    assert_eq!(message, "Identifier y has not been declared");
}

#[test]
fn test_declaration_without_type_or_initializer_is_any() {
    let (program, _) = analyze_statements(vec![
        S::variable("x", None, None),
        S::assign(E::ident("x"), E::string("later")),
    ])
    .unwrap();
    let Statement::Variable(decl) = &program.statements[0] else {
        panic!("expected declaration");
    };
    assert_eq!(decl.resolved_type, Some(TypeId::ANY));
}

#[test]
fn test_assignment_checks_target_type() {
    assert!(should_pass(vec![
        S::variable("x", number(), Some(E::number(1.0))),
        S::assign(E::ident("x"), E::number(2.0)),
    ]));
    assert!(should_fail(vec![
        S::variable("x", number(), Some(E::number(1.0))),
        S::assign(E::ident("x"), E::string("two")),
    ]));
}

#[test]
fn test_assignment_to_literal_rejected() {
    let message = error_message(vec![S::assign(E::number(1.0), E::number(2.0))]);
    assert_eq!(message, "Invalid assignment target");
}

#[test]
fn test_type_name_is_not_a_value() {
    let message = error_message(vec![S::variable("x", None, Some(E::ident("Number")))]);
    assert_eq!(message, "Number is a type, not a value");
}

#[test]
fn test_variable_is_not_a_type() {
    let message = error_message(vec![
        S::variable("x", number(), Some(E::number(1.0))),
        S::variable("y", Some(T::named("x")), None),
    ]);
    assert_eq!(message, "x is not a type");
}

#[test]
fn test_branch_declarations_do_not_leak() {
    assert!(should_fail(vec![
        S::conditional(
            E::boolean(true),
            block(vec![S::variable("hidden", None, Some(E::number(1.0)))]),
            vec![],
            None,
        ),
        S::expr(E::call("print", vec![E::ident("hidden")])),
    ]));
}

#[test]
fn test_sibling_branches_have_separate_scopes() {
    assert!(should_pass(vec![S::conditional(
        E::boolean(true),
        block(vec![S::variable("y", None, Some(E::number(1.0)))]),
        vec![(
            E::boolean(false),
            block(vec![S::variable("y", None, Some(E::number(2.0)))]),
        )],
        Some(block(vec![S::variable("y", None, Some(E::number(3.0)))])),
    )]));
}

#[test]
fn test_builtin_types_cannot_be_redeclared_at_root() {
    // Builtins live in the root scope, so a top-level redeclaration collides.
    let message = error_message(vec![S::variable("print", None, Some(E::number(1.0)))]);
    assert_eq!(message, "print already declared in this scope");
}
