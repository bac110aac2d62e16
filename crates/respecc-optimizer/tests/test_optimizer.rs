//! End-to-end tests: analyze a program, then optimize it.

use respecc_ast::{
    BinaryOperator, Block, ExprBuilder as E, Program, Statement, StmtBuilder as S,
    TypeAnnotation as T,
};
use respecc_optimizer::Optimizer;
use respecc_semantic::analyze;
use respecc_utils::OptimizerConfig;

fn analyzed(statements: Vec<Statement>) -> (Program, Optimizer) {
    let mut program = Program {
        statements,
        ..Program::default()
    };
    let analysis = analyze(&mut program).unwrap();
    (program, Optimizer::new(analysis.call_sites))
}

fn initializer(statement: &Statement) -> &respecc_ast::Expression {
    match statement {
        Statement::Variable(decl) => decl.initializer.as_ref().unwrap(),
        other => panic!("expected declaration, got {other:?}"),
    }
}

#[test]
fn test_fold_declaration_initializer() {
    let (mut program, optimizer) = analyzed(vec![S::variable(
        "x",
        Some(T::named("Number")),
        Some(E::binary(
            E::number(2.0),
            BinaryOperator::Add,
            E::binary(E::number(3.0), BinaryOperator::Multiply, E::number(4.0)),
        )),
    )]);

    assert!(optimizer.optimize(&mut program));
    assert_eq!(initializer(&program.statements[0]).as_number(), Some(14.0));
}

#[test]
fn test_identities_use_analyzed_types() {
    let (mut program, optimizer) = analyzed(vec![
        S::variable("n", None, Some(E::number(5.0))),
        S::variable("s", None, Some(E::string("five"))),
        S::variable(
            "a",
            None,
            Some(E::binary(E::ident("n"), BinaryOperator::Add, E::number(0.0))),
        ),
        S::variable(
            "b",
            None,
            Some(E::binary(E::ident("s"), BinaryOperator::Add, E::number(0.0))),
        ),
    ]);

    optimizer.optimize(&mut program);
    assert_eq!(
        initializer(&program.statements[2]).kind,
        respecc_ast::ExpressionKind::Identifier("n".to_string())
    );
    assert!(matches!(
        initializer(&program.statements[3]).kind,
        respecc_ast::ExpressionKind::Binary { .. }
    ));
}

#[test]
fn test_folded_condition_prunes_branch() {
    let (mut program, optimizer) = analyzed(vec![
        S::conditional(
            E::binary(E::number(1.0), BinaryOperator::Greater, E::number(2.0)),
            Block::new(vec![S::expr(E::call("print", vec![E::string("never")]))]),
            vec![],
            None,
        ),
        S::while_loop(
            E::binary(E::number(1.0), BinaryOperator::Equal, E::number(2.0)),
            Block::new(vec![S::brk()]),
        ),
    ]);

    assert!(optimizer.optimize(&mut program));
    assert!(program.statements.is_empty());
}

#[test]
fn test_unreachable_code_and_uncalled_functions() {
    let (mut program, optimizer) = analyzed(vec![
        S::function(
            "used",
            vec![],
            Some(T::named("Number")),
            Block::new(vec![
                S::ret(Some(E::number(1.0))),
                S::expr(E::call("print", vec![E::string("unreachable")])),
            ]),
        ),
        S::function("unused", vec![], None, Block::default()),
        S::expr(E::call("print", vec![E::call("used", vec![])])),
    ]);

    assert!(optimizer.optimize(&mut program));
    assert_eq!(program.statements.len(), 2);
    let Statement::Function(used) = &program.statements[0] else {
        panic!("expected function");
    };
    assert_eq!(used.name, "used");
    assert_eq!(used.body.statements.len(), 1);
}

#[test]
fn test_functions_referenced_as_values_are_kept() {
    let (mut program, optimizer) = analyzed(vec![
        S::function("callback", vec![], None, Block::default()),
        S::variable("handler", None, Some(E::ident("callback"))),
    ]);

    assert!(!optimizer.optimize(&mut program));
    assert_eq!(program.statements.len(), 2);
}

#[test]
fn test_method_call_does_not_keep_same_named_function() {
    let (mut program, optimizer) = analyzed(vec![
        S::function("speak", vec![], None, Block::default()),
        S::class(
            "Parrot",
            vec![S::function("speak", vec![], None, Block::default())],
        ),
        S::expr(E::method_call(E::call("Parrot", vec![]), "speak", vec![])),
    ]);

    assert!(optimizer.optimize(&mut program));
    assert_eq!(program.statements.len(), 2);
    assert!(matches!(&program.statements[0], Statement::Class(class) if class.name == "Parrot"));
    assert!(matches!(&program.statements[1], Statement::Expression(_)));
}

#[test]
fn test_disabled_optimizer_leaves_program() {
    let mut program = Program {
        statements: vec![S::variable(
            "x",
            None,
            Some(E::binary(E::number(1.0), BinaryOperator::Add, E::number(1.0))),
        )],
        ..Program::default()
    };
    let analysis = analyze(&mut program).unwrap();
    let original = program.clone();

    let config = OptimizerConfig {
        enabled: false,
        ..OptimizerConfig::default()
    };
    let optimizer = Optimizer::from_config(&config, analysis.call_sites);
    assert!(!optimizer.optimize(&mut program));
    assert_eq!(program, original);
}

#[test]
fn test_optimization_is_idempotent() {
    let (mut program, optimizer) = analyzed(vec![S::function(
        "f",
        vec![S::param("x", Some(T::named("Number")))],
        Some(T::named("Number")),
        Block::new(vec![S::ret(Some(E::binary(
            E::binary(E::ident("x"), BinaryOperator::Multiply, E::number(1.0)),
            BinaryOperator::Add,
            E::unary(respecc_ast::UnaryOperator::Negate, E::number(0.0)),
        )))]),
    )]);
    // `f` is never called, so the whole program goes away
    assert!(optimizer.optimize(&mut program));
    assert!(program.statements.is_empty());
    assert!(!optimizer.optimize(&mut program));
}
