//! Tests for building ASTs the way the external parser would hand them over.

use respecc_ast::{
    BinaryOperator, BlockBuilder, ExprBuilder, ExpressionKind, LambdaBody, ProgramBuilder,
    Statement, StmtBuilder, TypeAnnotation,
};
use respecc_core::{Location, Span};

#[test]
fn test_class_with_constructor_and_method() {
    let mut ctor_body = BlockBuilder::default();
    ctor_body.add_assign(
        ExprBuilder::member(ExprBuilder::this(), "name"),
        ExprBuilder::ident("name"),
    );

    let mut method_body = BlockBuilder::default();
    method_body.add_return(Some(ExprBuilder::member(ExprBuilder::this(), "name")));

    let class = StmtBuilder::class(
        "Dog",
        vec![
            StmtBuilder::variable("name", Some(TypeAnnotation::named("String")), None),
            StmtBuilder::constructor(
                "Dog",
                vec![StmtBuilder::param("name", Some(TypeAnnotation::named("String")))],
                ctor_body.build(),
            ),
            StmtBuilder::function(
                "getName",
                vec![],
                Some(TypeAnnotation::named("String")),
                method_body.build(),
            ),
        ],
    );

    let Statement::Class(class) = class else {
        panic!("expected class");
    };
    assert_eq!(class.name, "Dog");
    assert_eq!(class.body.members.len(), 3);
    assert!(class.class_id.is_none());
    assert!(!class.overloads_validated);
    assert!(matches!(class.body.members[1], Statement::Constructor(_)));
}

#[test]
fn test_nested_type_annotations() {
    let annotation = TypeAnnotation::dictionary(
        TypeAnnotation::named("String"),
        TypeAnnotation::array(TypeAnnotation::named("Number")),
    );
    let TypeAnnotation::Dictionary(key, value) = annotation else {
        panic!("expected dictionary annotation");
    };
    assert_eq!(*key, TypeAnnotation::named("String"));
    assert!(matches!(*value, TypeAnnotation::Array(_)));
}

#[test]
fn test_lambda_bodies() {
    let expr_lambda = ExprBuilder::lambda_expr(
        vec![StmtBuilder::param("x", None)],
        ExprBuilder::binary(ExprBuilder::ident("x"), BinaryOperator::Multiply, ExprBuilder::number(2.0)),
    );
    let ExpressionKind::Lambda(lambda) = &expr_lambda.kind else {
        panic!("expected lambda");
    };
    assert_eq!(lambda.parameters.len(), 1);
    assert!(matches!(lambda.body, LambdaBody::Expression(_)));
    assert!(lambda.body_scope.is_none());
}

#[test]
fn test_spans_are_carried() {
    let span = Span::new(Location::new(3, 1), Location::new(3, 12));
    let expr = ExprBuilder::number(7.0).at(span);
    assert_eq!(expr.span, span);

    let stmt = StmtBuilder::expr(expr);
    assert_eq!(stmt.span(), span);
}

#[test]
fn test_program_statement_order_is_textual() {
    let mut builder = ProgramBuilder::new();
    builder
        .add_expression(ExprBuilder::call("later", vec![]))
        .add_statement(StmtBuilder::function("later", vec![], None, Default::default()));

    let program = builder.build();
    assert!(matches!(program.statements[0], Statement::Expression(_)));
    assert!(matches!(program.statements[1], Statement::Function(_)));
}
