//! Loading ASTs from the JSON produced by the Shift parser, and walking them.

extern crate env_logger;
extern crate jsgen_es6;
extern crate serde_json;

use jsgen_es6::ast::*;
use jsgen_es6::count::{NodeCount, NodeCounter};

const MODULE: &str = r#"{
    "type": "Module",
    "directives": [],
    "items": [
        {
            "type": "Import",
            "defaultBinding": { "type": "BindingIdentifier", "name": "a" },
            "namedImports": [],
            "moduleSpecifier": "m"
        },
        {
            "type": "ExportDefault",
            "body": {
                "type": "ClassDeclaration",
                "name": { "type": "BindingIdentifier", "name": "*default*" },
                "super": null,
                "elements": []
            }
        },
        {
            "type": "ExpressionStatement",
            "expression": { "type": "ThisExpression" }
        }
    ]
}"#;

#[test]
fn test_load_module() {
    let _ = env_logger::try_init();
    let program: Program = serde_json::from_str(MODULE).expect("Could not parse module");
    let module = match program {
        Program::Module(ref module) => module,
        _ => panic!("Expected a module"),
    };
    assert_eq!(module.items.len(), 3);
    match module.items[0] {
        ModuleItem::ImportDeclaration(ImportDeclaration::Import(ref import)) => {
            assert_eq!(import.module_specifier.as_str(), "m");
            assert_eq!(
                import.default_binding.as_ref().map(|binding| binding.name.as_str()),
                Some("a")
            );
        }
        ref other => panic!("Unexpected item {:?}", other),
    }
    match module.items[1] {
        ModuleItem::ExportDeclaration(ExportDeclaration::ExportDefault(ref export)) => {
            match export.body {
                ExportDefaultBody::Declaration(DefaultDeclaration::ClassDeclaration(ref class)) => {
                    assert_eq!(class.name.name.as_str(), "*default*");
                    assert!(class.super_.is_none());
                }
                ref other => panic!("Unexpected export {:?}", other),
            }
        }
        ref other => panic!("Unexpected item {:?}", other),
    }

    // Serializing then loading again yields the same AST.
    let json = serde_json::to_string(&program).expect("Could not serialize module");
    let reloaded: Program = serde_json::from_str(&json).expect("Could not reload module");
    assert_eq!(program, reloaded);
}

#[test]
fn test_count_module() {
    let _ = env_logger::try_init();
    let program: Program = serde_json::from_str(MODULE).expect("Could not parse module");
    let counts = NodeCounter::count(&program);
    assert_eq!(counts.total(), NodeCount::from(8));
    assert_eq!(counts.get(ASTNode::BindingIdentifier), NodeCount::from(2));
    assert_eq!(counts.get(ASTNode::ThisExpression), NodeCount::from(1));
    assert_eq!(counts.get(ASTNode::Script), NodeCount::from(0));
}
