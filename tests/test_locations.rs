extern crate env_logger;
extern crate jsgen;

use jsgen::codegen::{Generator, Locations, Style};
use jsgen::es6::ast::*;

fn script(statements: Vec<Statement>) -> Program {
    Script {
        directives: vec![],
        statements,
    }
    .into()
}

fn statement(expression: Expression) -> Statement {
    ExpressionStatement { expression }.into()
}

fn id(name: &'static str) -> Expression {
    IdentifierExpression { name: name.into() }.into()
}

fn locate(program: &Program, style: Style) -> (String, Locations) {
    let _ = env_logger::try_init();
    Generator::new(style)
        .generate_with_locations(program)
        .expect("Could not generate")
}

fn statements(program: &Program) -> &[Statement] {
    match *program {
        Program::Script(ref script) => &script.statements,
        _ => panic!("Expected a script"),
    }
}

fn expression_at(program: &Program, index: usize) -> &Expression {
    match statements(program)[index] {
        Statement::ExpressionStatement(ref statement) => &statement.expression,
        ref other => panic!("Unexpected statement {:?}", other),
    }
}

#[test]
fn test_statements_own_their_semicolon() {
    let program = script(vec![statement(id("a")), statement(id("b"))]);
    let (source, locations) = locate(&program, Style::Compact);
    assert_eq!(source, "a;b");

    let first = match statements(&program)[0] {
        Statement::ExpressionStatement(ref statement) => statement,
        _ => unreachable!(),
    };
    assert_eq!(locations.get(&**first).unwrap().text(&source), "a;");
    let second = match statements(&program)[1] {
        Statement::ExpressionStatement(ref statement) => statement,
        _ => unreachable!(),
    };
    // The last `;` is never written.
    assert_eq!(locations.get(&**second).unwrap().text(&source), "b");

    match *expression_at(&program, 0) {
        Expression::IdentifierExpression(ref a) => {
            assert_eq!(locations.get(&**a).unwrap().text(&source), "a")
        }
        _ => unreachable!(),
    }
    match program {
        Program::Script(ref script) => {
            assert_eq!(locations.get(&**script).unwrap().text(&source), "a;b")
        }
        _ => unreachable!(),
    }
}

#[test]
fn test_parentheses_belong_to_the_parent() {
    // (a + b) * c
    let sum: Expression = BinaryExpression {
        left: id("a"),
        operator: BinaryOperator::Plus,
        right: id("b"),
    }
    .into();
    let program = script(vec![statement(
        BinaryExpression {
            left: sum,
            operator: BinaryOperator::Mul,
            right: id("c"),
        }
        .into(),
    )]);
    let (source, locations) = locate(&program, Style::Compact);
    assert_eq!(source, "(a+b)*c");
    let product = match *expression_at(&program, 0) {
        Expression::BinaryExpression(ref product) => product,
        _ => unreachable!(),
    };
    assert_eq!(locations.get(&**product).unwrap().text(&source), "(a+b)*c");
    let sum = match product.left {
        Expression::BinaryExpression(ref sum) => sum,
        _ => unreachable!(),
    };
    let span = locations.get(&**sum).unwrap();
    assert_eq!(span.text(&source), "a+b");
    assert_eq!(span.start.offset, 1);
    assert_eq!(span.end.offset, 4);
}

#[test]
fn test_simple_arrow_parameters() {
    // x => y
    let program = script(vec![statement(
        ArrowExpression {
            is_async: false,
            params: FormalParameters {
                items: vec![Binding::from(BindingIdentifier { name: "x".into() }).into()],
                rest: None,
            },
            body: id("y").into(),
        }
        .into(),
    )]);
    let (source, locations) = locate(&program, Style::Compact);
    assert_eq!(source, "x=>y");
    let arrow = match *expression_at(&program, 0) {
        Expression::ArrowExpression(ref arrow) => arrow,
        _ => unreachable!(),
    };
    assert_eq!(locations.get(&**arrow).unwrap().text(&source), "x=>y");
    assert_eq!(locations.get(&arrow.params).unwrap().text(&source), "x");
    match arrow.params.items[0] {
        Parameter::Binding(Binding::BindingIdentifier(ref x)) => {
            let span = locations.get(&**x).unwrap();
            assert_eq!(span.text(&source), "x");
            assert_eq!(span.start.offset, 0);
        }
        _ => unreachable!(),
    }
    match arrow.body {
        ArrowBody::Expression(Expression::IdentifierExpression(ref y)) => {
            assert_eq!(locations.get(&**y).unwrap().start.offset, 3)
        }
        _ => unreachable!(),
    }
}

#[test]
fn test_number_followed_by_dot() {
    // 1..a
    let program = script(vec![statement(
        StaticMemberExpression {
            object: Expression::from(LiteralNumericExpression { value: 1. }).into(),
            property: "a".into(),
        }
        .into(),
    )]);
    let (source, locations) = locate(&program, Style::Compact);
    assert_eq!(source, "1..a");
    let member = match *expression_at(&program, 0) {
        Expression::StaticMemberExpression(ref member) => member,
        _ => unreachable!(),
    };
    assert_eq!(locations.get(&**member).unwrap().text(&source), "1..a");
    match member.object {
        ExpressionOrSuper::Expression(Expression::LiteralNumericExpression(ref one)) => {
            assert_eq!(locations.get(&**one).unwrap().text(&source), "1.")
        }
        _ => unreachable!(),
    }
}

#[test]
fn test_lines_and_columns() {
    // if (a) { b; }
    let block = BlockStatement {
        block: Block {
            statements: vec![statement(id("b"))],
        },
    };
    let program = script(vec![IfStatement {
        test: id("a"),
        consequent: block.into(),
        alternate: None,
    }
    .into()]);
    let (source, locations) = locate(&program, Style::Pretty);
    assert_eq!(source, "if(a){\n  b;\n}");

    let consequent = match statements(&program)[0] {
        Statement::IfStatement(ref statement) => {
            let span = locations.get(&**statement).unwrap();
            assert_eq!((span.start.line, span.start.column), (1, 0));
            assert_eq!((span.end.line, span.end.column), (3, 1));
            assert_eq!(span.end.offset, source.len());
            &statement.consequent
        }
        _ => unreachable!(),
    };
    let inner = match *consequent {
        Statement::BlockStatement(ref block) => &block.block.statements[0],
        _ => unreachable!(),
    };
    match *inner {
        Statement::ExpressionStatement(ref b) => {
            let span = locations.get(&**b).unwrap();
            assert_eq!(span.text(&source), "b;");
            assert_eq!((span.start.line, span.start.column, span.start.offset), (2, 2, 9));
            assert_eq!((span.end.line, span.end.column), (2, 4));
        }
        _ => unreachable!(),
    }
}

#[test]
fn test_line_terminators_within_templates() {
    // `a
    // b`; c
    let template = TemplateExpression {
        tag: None,
        elements: vec![TemplateElement {
            raw_value: "a\r\nb".into(),
        }
        .into()],
    };
    let program = script(vec![statement(template.into()), statement(id("c"))]);
    let (source, locations) = locate(&program, Style::Compact);
    assert_eq!(source, "`a\r\nb`;c");
    match *expression_at(&program, 1) {
        Expression::IdentifierExpression(ref c) => {
            let span = locations.get(&**c).unwrap();
            assert_eq!((span.start.line, span.start.column, span.start.offset), (2, 3, 7));
        }
        _ => unreachable!(),
    }
}

#[test]
fn test_nodes_without_fields() {
    let this = || -> Expression { ThisExpression {}.into() };
    let program = script(vec![statement(this()), statement(this())]);
    let (source, locations) = locate(&program, Style::Compact);
    assert_eq!(source, "this;this");

    // Both `this` share their address.
    match *expression_at(&program, 0) {
        Expression::ThisExpression(ref this) => assert!(locations.get(&**this).is_none()),
        _ => unreachable!(),
    }
    let offsets: Vec<usize> = locations
        .iter()
        .filter(|&(kind, _)| kind == ASTNode::ThisExpression)
        .map(|(_, span)| span.start.offset)
        .collect();
    assert_eq!(offsets, vec![0, 5]);
    assert_eq!(locations.iter().next().map(|(kind, _)| kind), Some(ASTNode::Script));
    assert_eq!(locations.len(), 5);
}

#[test]
fn test_empty_script() {
    let program = script(vec![]);
    let (source, locations) = locate(&program, Style::Pretty);
    assert_eq!(source, "");
    let span = match program {
        Program::Script(ref script) => locations.get(&**script).unwrap(),
        _ => unreachable!(),
    };
    assert_eq!(span.start, span.end);
    assert_eq!(span.start.line, 1);
}

#[test]
fn test_same_text_as_without_locations() {
    let program = jsgen::from_json(
        r#"{
        "type": "Script",
        "directives": [{ "type": "Directive", "rawValue": "use strict" }],
        "statements": [{
            "type": "ForStatement",
            "init": {
                "type": "BinaryExpression",
                "left": { "type": "IdentifierExpression", "name": "a" },
                "operator": "in",
                "right": { "type": "IdentifierExpression", "name": "b" }
            },
            "test": null,
            "update": null,
            "body": {
                "type": "ExpressionStatement",
                "expression": { "type": "LiteralStringExpression", "value": "x" }
            }
        }, {
            "type": "ExpressionStatement",
            "expression": { "type": "LiteralStringExpression", "value": "y" }
        }]
    }"#,
    )
    .unwrap();
    for style in &[Style::Compact, Style::Pretty] {
        let generator = Generator::new(*style);
        let (source, locations) = generator.generate_with_locations(&program).unwrap();
        assert_eq!(source, generator.generate(&program).unwrap());
        assert!(!locations.is_empty());
    }
}
