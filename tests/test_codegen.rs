extern crate env_logger;
extern crate jsgen;
#[macro_use]
extern crate assert_matches;

use jsgen::codegen::{generate, Generator, Style};
use jsgen::es6::ast::*;
use jsgen::Error;

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

fn num(value: f64) -> Expression {
    LiteralNumericExpression { value }.into()
}

fn string(value: &'static str) -> Expression {
    LiteralStringExpression {
        value: value.into(),
    }
    .into()
}

fn binary(left: Expression, operator: BinaryOperator, right: Expression) -> Expression {
    BinaryExpression {
        left,
        operator,
        right,
    }
    .into()
}

fn unary(operator: UnaryOperator, operand: Expression) -> Expression {
    UnaryExpression { operator, operand }.into()
}

fn call(callee: Expression, arguments: Vec<Expression>) -> Expression {
    CallExpression {
        callee: callee.into(),
        arguments: arguments.into_iter().map(Into::into).collect(),
    }
    .into()
}

fn member(object: Expression, property: &'static str) -> Expression {
    StaticMemberExpression {
        object: object.into(),
        property: property.into(),
    }
    .into()
}

fn if_statement(test: Expression, consequent: Statement, alternate: Option<Statement>) -> Statement {
    IfStatement {
        test,
        consequent,
        alternate,
    }
    .into()
}

fn compact(statements: Vec<Statement>) -> String {
    let _ = env_logger::try_init();
    generate(&script(statements), Style::Compact)
}

fn expression(expression: Expression) -> String {
    compact(vec![statement(expression)])
}

#[test]
fn test_precedence() {
    let sum = binary(num(1.), BinaryOperator::Plus, num(2.));
    assert_eq!(expression(binary(sum.clone(), BinaryOperator::Mul, num(3.))), "(1+2)*3");
    assert_eq!(expression(binary(num(3.), BinaryOperator::Mul, sum.clone())), "3*(1+2)");
    assert_eq!(
        expression(binary(num(1.), BinaryOperator::Plus, binary(num(2.), BinaryOperator::Mul, num(3.)))),
        "1+2*3"
    );

    // Left-associative.
    let difference = binary(id("b"), BinaryOperator::Minus, id("c"));
    assert_eq!(expression(binary(id("a"), BinaryOperator::Minus, difference.clone())), "a-(b-c)");
    assert_eq!(expression(binary(difference, BinaryOperator::Minus, id("a"))), "b-c-a");

    // Right-associative.
    let power = binary(id("b"), BinaryOperator::Exp, id("c"));
    assert_eq!(expression(binary(id("a"), BinaryOperator::Exp, power.clone())), "a**b**c");
    assert_eq!(expression(binary(power.clone(), BinaryOperator::Exp, id("a"))), "(b**c)**a");
    assert_eq!(
        expression(binary(unary(UnaryOperator::Minus, id("a")), BinaryOperator::Exp, id("b"))),
        "(-a)**b"
    );
    assert_eq!(expression(unary(UnaryOperator::Minus, power)), "-(b**c)");

    assert_eq!(
        expression(binary(id("a"), BinaryOperator::Plus, unary(UnaryOperator::Plus, id("b")))),
        "a+ +b"
    );
    assert_eq!(expression(unary(UnaryOperator::Typeof, id("a"))), "typeof a");
}

#[test]
fn test_sequences_are_grouped() {
    let sequence = binary(id("a"), BinaryOperator::Sequence, id("b"));
    assert_eq!(expression(sequence.clone()), "a,b");
    assert_eq!(expression(call(id("f"), vec![sequence.clone()])), "f((a,b))");
    let array = ArrayExpression {
        elements: vec![Some(sequence.into())],
    };
    assert_eq!(expression(array.into()), "[(a,b)]");
}

#[test]
fn test_in_within_for_init() {
    let contains_in = binary(id("a"), BinaryOperator::In, id("b"));
    assert_eq!(expression(contains_in.clone()), "a in b");

    let loop_with = |init: ForInit| -> Statement {
        ForStatement {
            init: Some(init),
            test: None,
            update: None,
            body: EmptyStatement {}.into(),
        }
        .into()
    };
    assert_eq!(compact(vec![loop_with(contains_in.clone().into())]), "for((a in b);;);");

    let declaration = VariableDeclaration {
        kind: VariableDeclarationKind::Var,
        declarators: vec![VariableDeclarator {
            binding: BindingIdentifier { name: "x".into() }.into(),
            init: Some(contains_in.clone()),
        }],
    };
    assert_eq!(compact(vec![loop_with(declaration.into())]), "for(var x=(a in b);;);");

    // Brackets protect the operator.
    let invocation = call(id("f"), vec![contains_in]);
    assert_eq!(compact(vec![loop_with(invocation.into())]), "for(f(a in b);;);");
}

#[test]
fn test_dangling_else() {
    let inner = if_statement(id("b"), statement(id("c")), None);
    assert_eq!(
        compact(vec![if_statement(id("a"), inner.clone(), Some(statement(id("d"))))]),
        "if(a){if(b)c}else d"
    );
    assert_eq!(
        compact(vec![if_statement(id("a"), inner.clone(), None)]),
        "if(a)if(b)c"
    );

    let looping = WhileStatement {
        test: id("w"),
        body: inner,
    };
    assert_eq!(
        compact(vec![if_statement(id("a"), looping.into(), Some(statement(id("d"))))]),
        "if(a){while(w)if(b)c}else d"
    );

    assert_eq!(
        compact(vec![if_statement(id("a"), statement(id("b")), Some(statement(id("c"))))]),
        "if(a)b;else c"
    );
}

#[test]
fn test_directives_and_string_statements() {
    let directive = Directive {
        raw_value: "use strict".into(),
    };
    let with_directive: Program = Script {
        directives: vec![directive],
        statements: vec![statement(string("x"))],
    }
    .into();
    assert_eq!(generate(&with_directive, Style::Compact), r#""use strict";("x")"#);

    assert_eq!(compact(vec![statement(string("use strict"))]), r#"("use strict")"#);
    assert_eq!(
        compact(vec![statement(id("a")), statement(string("use strict"))]),
        r#"a;"use strict""#
    );

    let quoted = |raw: &'static str| -> String {
        let program: Program = Script {
            directives: vec![Directive {
                raw_value: raw.into(),
            }],
            statements: vec![],
        }
        .into();
        generate(&program, Style::Compact)
    };
    assert_eq!(quoted(r#"a"b"#), r#"'a"b'"#);
    assert_eq!(quoted(r#"a\"b"#), r#""a\"b""#);
    assert_eq!(quoted("a'b"), r#""a'b""#);
}

#[test]
fn test_numbers() {
    assert_eq!(expression(num(100.)), "100");
    assert_eq!(expression(num(1000.)), "1e3");
    assert_eq!(expression(num(0.5)), ".5");
    assert_eq!(expression(LiteralInfinityExpression {}.into()), "2e308");
    assert_eq!(expression(member(num(1.), "a")), "1..a");
    assert_eq!(expression(member(num(1.5), "a")), "1.5.a");
}

#[test]
fn test_strings() {
    assert_eq!(expression(string("a")), r#"("a")"#);
    let concatenation = binary(id("x"), BinaryOperator::Plus, string(r#"say "hi""#));
    assert_eq!(expression(concatenation), r#"x+'say "hi"'"#);
    let concatenation = binary(id("x"), BinaryOperator::Plus, string("a\nb"));
    assert_eq!(expression(concatenation), r#"x+"a\nb""#);
}

#[test]
fn test_property_names() {
    let object = |name: &'static str| -> String {
        let property = DataProperty {
            name: StaticPropertyName { value: name.into() }.into(),
            expression: num(1.),
        };
        expression(
            ObjectExpression {
                properties: vec![property.into()],
            }
            .into(),
        )
    };
    assert_eq!(object("a"), "({a:1})");
    assert_eq!(object("default"), "({default:1})");
    assert_eq!(object("1"), "({1:1})");
    assert_eq!(object("Infinity"), r#"({"Infinity":1})"#);
    assert_eq!(object("a-b"), r#"({"a-b":1})"#);

    // `²` is a digit, but not an identifier character.
    assert_eq!(object("a\u{B2}"), "({\"a\u{B2}\":1})");
}

#[test]
fn test_array_holes() {
    let array = |elements: Vec<Option<Expression>>| -> String {
        expression(
            ArrayExpression {
                elements: elements.into_iter().map(|e| e.map(Into::into)).collect(),
            }
            .into(),
        )
    };
    assert_eq!(array(vec![Some(id("a")), None]), "[a,,]");
    assert_eq!(array(vec![None, Some(id("a"))]), "[,a]");
    assert_eq!(array(vec![Some(id("a"))]), "[a]");
    assert_eq!(array(vec![None]), "[,]");
    assert_eq!(array(vec![]), "[]");
}

#[test]
fn test_statement_starts() {
    let function = FunctionExpression {
        is_async: false,
        is_generator: false,
        name: None,
        params: FormalParameters::default(),
        body: FunctionBody::default(),
    };
    assert_eq!(expression(call(function.into(), vec![])), "(function(){}())");

    let object = ObjectExpression { properties: vec![] };
    assert_eq!(expression(member(object.into(), "x")), "({}.x)");

    let computed = ComputedMemberExpression {
        object: id("let").into(),
        expression: num(0.),
    };
    assert_eq!(expression(computed.into()), "(let[0])");
    assert_eq!(expression(member(id("let"), "x")), "let.x");
}

#[test]
fn test_new_and_call() {
    let new_without_arguments = |callee: Expression| -> Expression {
        NewExpression {
            callee,
            arguments: vec![],
        }
        .into()
    };
    assert_eq!(expression(new_without_arguments(id("a"))), "new a");
    assert_eq!(expression(new_without_arguments(call(id("f"), vec![]))), "new(f())");
    assert_eq!(expression(call(new_without_arguments(id("a")), vec![])), "(new a)()");
    assert_eq!(expression(member(call(id("f"), vec![]), "x")), "f().x");
}

#[test]
fn test_arrows() {
    let single = ArrowExpression {
        is_async: false,
        params: FormalParameters {
            items: vec![Binding::from(BindingIdentifier { name: "x".into() }).into()],
            rest: None,
        },
        body: id("x").into(),
    };
    assert_eq!(expression(single.into()), "x=>x");

    let object = ArrowExpression {
        is_async: true,
        params: FormalParameters::default(),
        body: Expression::from(ObjectExpression { properties: vec![] }).into(),
    };
    assert_eq!(expression(object.into()), "async()=>({})");
}

#[test]
fn test_templates() {
    let template = TemplateExpression {
        tag: Some(id("tag")),
        elements: vec![
            TemplateElement {
                raw_value: "x".into(),
            }
            .into(),
            id("b").into(),
            TemplateElement {
                raw_value: "y".into(),
            }
            .into(),
        ],
    };
    assert_eq!(expression(template.into()), "tag`x${b}y`");
}

#[test]
fn test_pretty_differs_only_in_layout() {
    let _ = env_logger::try_init();
    let block = BlockStatement {
        block: Block {
            statements: vec![statement(id("b")), statement(id("c"))],
        },
    };
    let program = script(vec![
        if_statement(id("a"), block.into(), Some(statement(id("d")))),
        statement(call(id("f"), vec![num(1.)])),
    ]);

    let compact = generate(&program, Style::Compact);
    let pretty = generate(&program, Style::Pretty);
    assert_eq!(compact, "if(a){b;c}else d;f(1)");
    assert_eq!(pretty, "if(a){\n  b;\n  c;\n}else d;\nf(1);");

    let strip = |text: &str| -> String {
        text.chars()
            .filter(|c| !c.is_whitespace() && *c != ';')
            .collect()
    };
    assert_eq!(strip(&compact), strip(&pretty));

    let tabs = Generator {
        style: Style::Pretty,
        indent: "\t".to_string(),
        ..Generator::default()
    };
    assert_eq!(
        tabs.generate(&program).unwrap(),
        "if(a){\n\tb;\n\tc;\n}else d;\nf(1);"
    );
}

#[test]
fn test_web_safe() {
    let _ = env_logger::try_init();
    let generator = Generator {
        web_safe: true,
        ..Generator::default()
    };
    let program = script(vec![
        statement(id("φ")),
        statement(binary(id("x"), BinaryOperator::Plus, string("<script "))),
    ]);
    assert_eq!(
        generator.generate(&program).unwrap(),
        r#"\u03C6;x+"<\x73cript ""#
    );
    assert_eq!(generate(&program, Style::Compact), r#"φ;x+"<script ""#);

    let regexp = LiteralRegExpExpression {
        pattern: "<script>".into(),
        global: true,
        ignore_case: false,
        multi_line: false,
        sticky: false,
        unicode: false,
    };
    let program = script(vec![statement(regexp.into())]);
    assert_eq!(generate(&program, Style::Compact), "/<script>/g");
    assert_matches!(
        generator.generate(&program),
        Err(Error::WebSafety {
            kind: ASTNode::LiteralRegExpExpression,
            ..
        })
    );
}

#[test]
fn test_from_json() {
    let _ = env_logger::try_init();
    let source = r#"{
        "type": "Script",
        "directives": [],
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
            "body": { "type": "EmptyStatement" }
        }]
    }"#;
    let program = jsgen::from_json(source).unwrap();
    assert_eq!(generate(&program, Style::Compact), "for((a in b);;);");

    assert_matches!(jsgen::from_json("{"), Err(Error::Json(_)));
}

#[test]
fn test_module() {
    let _ = env_logger::try_init();
    let program = jsgen::from_json(
        r#"{
        "type": "Module",
        "directives": [],
        "items": [
            {
                "type": "Import",
                "defaultBinding": { "type": "BindingIdentifier", "name": "a" },
                "namedImports": [{
                    "type": "ImportSpecifier",
                    "name": "b",
                    "binding": { "type": "BindingIdentifier", "name": "c" }
                }],
                "moduleSpecifier": "m"
            },
            {
                "type": "ExportDefault",
                "body": {
                    "type": "ClassDeclaration",
                    "name": { "type": "BindingIdentifier", "name": "*default*" },
                    "super": { "type": "IdentifierExpression", "name": "a" },
                    "elements": []
                }
            },
            {
                "type": "ForInStatement",
                "left": { "type": "AssignmentTargetIdentifier", "name": "let" },
                "right": { "type": "IdentifierExpression", "name": "c" },
                "body": { "type": "EmptyStatement" }
            }
        ]
    }"#,
    )
    .unwrap();
    assert_eq!(
        generate(&program, Style::Compact),
        r#"import a,{b as c}from"m";export default class extends a{}for((let)in c);"#
    );
    assert_eq!(
        generate(&program, Style::Pretty),
        "import a,{b as c}from\"m\";\nexport default class extends a{}\nfor((let)in c);"
    );
}
