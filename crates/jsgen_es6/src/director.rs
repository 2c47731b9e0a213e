//! Drive a `Reducer` through an AST.

use crate::ast::*;
use crate::reduce::{Path, Reducer};

use std::marker::PhantomData;

/// Walks an AST in post-order, feeding a `Reducer`.
///
/// Children are reduced from left to right, in the order of the fields of
/// their parent, before the parent itself. The `Path` handed to each rule
/// leads from the root to the node being reduced.
pub struct Director<'a, D, R>
where
    D: Reducer<R>,
{
    reducer: &'a D,
    path: Path,
    result: PhantomData<R>,
}

impl<'a, D, R> Director<'a, D, R>
where
    D: Reducer<R>,
{
    pub fn new(reducer: &'a D) -> Self {
        Director {
            reducer,
            path: Path::new(),
            result: PhantomData,
        }
    }

    fn interface<T>(&mut self, kind: ASTNode, f: impl FnOnce(&mut Self) -> T) -> T {
        self.path.enter_interface(kind);
        let result = f(self);
        self.path.exit_interface(kind);
        result
    }

    fn field<T>(&mut self, name: &'static str, f: impl FnOnce(&mut Self) -> T) -> T {
        self.path.enter_field(name);
        let result = f(self);
        self.path.exit_field(name);
        result
    }

    fn opt<N, T>(
        &mut self,
        name: &'static str,
        node: &Option<N>,
        f: impl FnOnce(&mut Self, &N) -> T,
    ) -> Option<T> {
        match *node {
            None => None,
            Some(ref node) => Some(self.field(name, |d| f(d, node))),
        }
    }

    fn list<N, T>(
        &mut self,
        name: &'static str,
        nodes: &[N],
        mut f: impl FnMut(&mut Self, &N) -> T,
    ) -> Vec<T> {
        self.field(name, |d| nodes.iter().map(|node| f(d, node)).collect())
    }

    fn list_opt<N, T>(
        &mut self,
        name: &'static str,
        nodes: &[Option<N>],
        mut f: impl FnMut(&mut Self, &N) -> T,
    ) -> Vec<Option<T>> {
        self.field(name, |d| {
            nodes
                .iter()
                .map(|node| node.as_ref().map(|node| f(d, node)))
                .collect()
        })
    }

    // Sums

    pub fn reduce_program(&mut self, node: &Program) -> R {
        match *node {
            Program::Script(ref script) => self.reduce_script(script),
            Program::Module(ref module) => self.reduce_module(module),
        }
    }

    pub fn reduce_module_item(&mut self, node: &ModuleItem) -> R {
        match *node {
            ModuleItem::ImportDeclaration(ref node) => self.reduce_import_declaration(node),
            ModuleItem::ExportDeclaration(ref node) => self.reduce_export_declaration(node),
            ModuleItem::Statement(ref node) => self.reduce_statement(node),
        }
    }

    pub fn reduce_binding(&mut self, node: &Binding) -> R {
        match *node {
            Binding::BindingIdentifier(ref node) => self.reduce_binding_identifier(node),
            Binding::ObjectBinding(ref node) => self.reduce_object_binding(node),
            Binding::ArrayBinding(ref node) => self.reduce_array_binding(node),
        }
    }

    pub fn reduce_parameter(&mut self, node: &Parameter) -> R {
        match *node {
            Parameter::Binding(ref node) => self.reduce_binding(node),
            Parameter::BindingWithDefault(ref node) => self.reduce_binding_with_default(node),
        }
    }

    pub fn reduce_binding_property(&mut self, node: &BindingProperty) -> R {
        match *node {
            BindingProperty::BindingPropertyIdentifier(ref node) => {
                self.reduce_binding_property_identifier(node)
            }
            BindingProperty::BindingPropertyProperty(ref node) => {
                self.reduce_binding_property_property(node)
            }
        }
    }

    pub fn reduce_assignment_target(&mut self, node: &AssignmentTarget) -> R {
        match *node {
            AssignmentTarget::AssignmentTargetIdentifier(ref node) => {
                self.reduce_assignment_target_identifier(node)
            }
            AssignmentTarget::ComputedMemberAssignmentTarget(ref node) => {
                self.reduce_computed_member_assignment_target(node)
            }
            AssignmentTarget::StaticMemberAssignmentTarget(ref node) => {
                self.reduce_static_member_assignment_target(node)
            }
            AssignmentTarget::ObjectAssignmentTarget(ref node) => {
                self.reduce_object_assignment_target(node)
            }
            AssignmentTarget::ArrayAssignmentTarget(ref node) => {
                self.reduce_array_assignment_target(node)
            }
        }
    }

    pub fn reduce_simple_assignment_target(&mut self, node: &SimpleAssignmentTarget) -> R {
        match *node {
            SimpleAssignmentTarget::AssignmentTargetIdentifier(ref node) => {
                self.reduce_assignment_target_identifier(node)
            }
            SimpleAssignmentTarget::ComputedMemberAssignmentTarget(ref node) => {
                self.reduce_computed_member_assignment_target(node)
            }
            SimpleAssignmentTarget::StaticMemberAssignmentTarget(ref node) => {
                self.reduce_static_member_assignment_target(node)
            }
        }
    }

    pub fn reduce_assignment_target_or_default(&mut self, node: &AssignmentTargetOrDefault) -> R {
        match *node {
            AssignmentTargetOrDefault::AssignmentTarget(ref node) => {
                self.reduce_assignment_target(node)
            }
            AssignmentTargetOrDefault::AssignmentTargetWithDefault(ref node) => {
                self.reduce_assignment_target_with_default(node)
            }
        }
    }

    pub fn reduce_assignment_target_property(&mut self, node: &AssignmentTargetProperty) -> R {
        match *node {
            AssignmentTargetProperty::AssignmentTargetPropertyIdentifier(ref node) => {
                self.reduce_assignment_target_property_identifier(node)
            }
            AssignmentTargetProperty::AssignmentTargetPropertyProperty(ref node) => {
                self.reduce_assignment_target_property_property(node)
            }
        }
    }

    pub fn reduce_import_declaration(&mut self, node: &ImportDeclaration) -> R {
        match *node {
            ImportDeclaration::Import(ref node) => self.reduce_import(node),
            ImportDeclaration::ImportNamespace(ref node) => self.reduce_import_namespace(node),
        }
    }

    pub fn reduce_export_declaration(&mut self, node: &ExportDeclaration) -> R {
        match *node {
            ExportDeclaration::ExportAllFrom(ref node) => self.reduce_export_all_from(node),
            ExportDeclaration::ExportFrom(ref node) => self.reduce_export_from(node),
            ExportDeclaration::ExportLocals(ref node) => self.reduce_export_locals(node),
            ExportDeclaration::Export(ref node) => self.reduce_export(node),
            ExportDeclaration::ExportDefault(ref node) => self.reduce_export_default(node),
        }
    }

    pub fn reduce_exportable_declaration(&mut self, node: &ExportableDeclaration) -> R {
        match *node {
            ExportableDeclaration::FunctionDeclaration(ref node) => {
                self.reduce_function_declaration(node)
            }
            ExportableDeclaration::ClassDeclaration(ref node) => self.reduce_class_declaration(node),
            ExportableDeclaration::VariableDeclaration(ref node) => {
                self.reduce_variable_declaration(node)
            }
        }
    }

    pub fn reduce_export_default_body(&mut self, node: &ExportDefaultBody) -> R {
        match *node {
            ExportDefaultBody::Declaration(DefaultDeclaration::FunctionDeclaration(ref node)) => {
                self.reduce_function_declaration(node)
            }
            ExportDefaultBody::Declaration(DefaultDeclaration::ClassDeclaration(ref node)) => {
                self.reduce_class_declaration(node)
            }
            ExportDefaultBody::Expression(ref node) => self.reduce_expression(node),
        }
    }

    pub fn reduce_method_definition(&mut self, node: &MethodDefinition) -> R {
        match *node {
            MethodDefinition::Method(ref node) => self.reduce_method(node),
            MethodDefinition::Getter(ref node) => self.reduce_getter(node),
            MethodDefinition::Setter(ref node) => self.reduce_setter(node),
        }
    }

    pub fn reduce_object_property(&mut self, node: &ObjectProperty) -> R {
        match *node {
            ObjectProperty::Method(ref node) => self.reduce_method(node),
            ObjectProperty::Getter(ref node) => self.reduce_getter(node),
            ObjectProperty::Setter(ref node) => self.reduce_setter(node),
            ObjectProperty::DataProperty(ref node) => self.reduce_data_property(node),
            ObjectProperty::ShorthandProperty(ref node) => self.reduce_shorthand_property(node),
        }
    }

    pub fn reduce_property_name(&mut self, node: &PropertyName) -> R {
        match *node {
            PropertyName::ComputedPropertyName(ref node) => self.reduce_computed_property_name(node),
            PropertyName::StaticPropertyName(ref node) => self.reduce_static_property_name(node),
        }
    }

    pub fn reduce_expression_or_super(&mut self, node: &ExpressionOrSuper) -> R {
        match *node {
            ExpressionOrSuper::Expression(ref node) => self.reduce_expression(node),
            ExpressionOrSuper::Super(ref node) => self.reduce_super(node),
        }
    }

    pub fn reduce_spread_element_or_expression(&mut self, node: &SpreadElementOrExpression) -> R {
        match *node {
            SpreadElementOrExpression::Expression(ref node) => self.reduce_expression(node),
            SpreadElementOrExpression::SpreadElement(ref node) => self.reduce_spread_element(node),
        }
    }

    pub fn reduce_arrow_body(&mut self, node: &ArrowBody) -> R {
        match *node {
            ArrowBody::Expression(ref node) => self.reduce_expression(node),
            ArrowBody::FunctionBody(ref node) => self.reduce_function_body(node),
        }
    }

    pub fn reduce_template_part(&mut self, node: &TemplatePart) -> R {
        match *node {
            TemplatePart::Expression(ref node) => self.reduce_expression(node),
            TemplatePart::TemplateElement(ref node) => self.reduce_template_element(node),
        }
    }

    pub fn reduce_for_in_of_binding(&mut self, node: &ForInOfBinding) -> R {
        match *node {
            ForInOfBinding::AssignmentTarget(ref node) => self.reduce_assignment_target(node),
            ForInOfBinding::VariableDeclaration(ref node) => self.reduce_variable_declaration(node),
        }
    }

    pub fn reduce_for_init(&mut self, node: &ForInit) -> R {
        match *node {
            ForInit::Expression(ref node) => self.reduce_expression(node),
            ForInit::VariableDeclaration(ref node) => self.reduce_variable_declaration(node),
        }
    }

    pub fn reduce_expression(&mut self, node: &Expression) -> R {
        use crate::ast::Expression::*;
        match *node {
            LiteralBooleanExpression(ref node) => self.reduce_literal_boolean_expression(node),
            LiteralInfinityExpression(ref node) => self.reduce_literal_infinity_expression(node),
            LiteralNullExpression(ref node) => self.reduce_literal_null_expression(node),
            LiteralNumericExpression(ref node) => self.reduce_literal_numeric_expression(node),
            LiteralRegExpExpression(ref node) => self.reduce_literal_reg_exp_expression(node),
            LiteralStringExpression(ref node) => self.reduce_literal_string_expression(node),
            ArrayExpression(ref node) => self.reduce_array_expression(node),
            ArrowExpression(ref node) => self.reduce_arrow_expression(node),
            AssignmentExpression(ref node) => self.reduce_assignment_expression(node),
            AwaitExpression(ref node) => self.reduce_await_expression(node),
            BinaryExpression(ref node) => self.reduce_binary_expression(node),
            CallExpression(ref node) => self.reduce_call_expression(node),
            ClassExpression(ref node) => self.reduce_class_expression(node),
            CompoundAssignmentExpression(ref node) => {
                self.reduce_compound_assignment_expression(node)
            }
            ComputedMemberExpression(ref node) => self.reduce_computed_member_expression(node),
            ConditionalExpression(ref node) => self.reduce_conditional_expression(node),
            FunctionExpression(ref node) => self.reduce_function_expression(node),
            IdentifierExpression(ref node) => self.reduce_identifier_expression(node),
            NewExpression(ref node) => self.reduce_new_expression(node),
            NewTargetExpression(ref node) => self.reduce_new_target_expression(node),
            ObjectExpression(ref node) => self.reduce_object_expression(node),
            StaticMemberExpression(ref node) => self.reduce_static_member_expression(node),
            TemplateExpression(ref node) => self.reduce_template_expression(node),
            ThisExpression(ref node) => self.reduce_this_expression(node),
            UnaryExpression(ref node) => self.reduce_unary_expression(node),
            UpdateExpression(ref node) => self.reduce_update_expression(node),
            YieldExpression(ref node) => self.reduce_yield_expression(node),
            YieldGeneratorExpression(ref node) => self.reduce_yield_generator_expression(node),
        }
    }

    pub fn reduce_statement(&mut self, node: &Statement) -> R {
        use crate::ast::Statement::*;
        match *node {
            BlockStatement(ref node) => self.reduce_block_statement(node),
            BreakStatement(ref node) => self.reduce_break_statement(node),
            ClassDeclaration(ref node) => self.reduce_class_declaration(node),
            ContinueStatement(ref node) => self.reduce_continue_statement(node),
            DebuggerStatement(ref node) => self.reduce_debugger_statement(node),
            DoWhileStatement(ref node) => self.reduce_do_while_statement(node),
            EmptyStatement(ref node) => self.reduce_empty_statement(node),
            ExpressionStatement(ref node) => self.reduce_expression_statement(node),
            ForInStatement(ref node) => self.reduce_for_in_statement(node),
            ForOfStatement(ref node) => self.reduce_for_of_statement(node),
            ForStatement(ref node) => self.reduce_for_statement(node),
            FunctionDeclaration(ref node) => self.reduce_function_declaration(node),
            IfStatement(ref node) => self.reduce_if_statement(node),
            LabeledStatement(ref node) => self.reduce_labeled_statement(node),
            ReturnStatement(ref node) => self.reduce_return_statement(node),
            SwitchStatement(ref node) => self.reduce_switch_statement(node),
            SwitchStatementWithDefault(ref node) => self.reduce_switch_statement_with_default(node),
            ThrowStatement(ref node) => self.reduce_throw_statement(node),
            TryCatchStatement(ref node) => self.reduce_try_catch_statement(node),
            TryFinallyStatement(ref node) => self.reduce_try_finally_statement(node),
            VariableDeclarationStatement(ref node) => {
                self.reduce_variable_declaration_statement(node)
            }
            WhileStatement(ref node) => self.reduce_while_statement(node),
            WithStatement(ref node) => self.reduce_with_statement(node),
        }
    }

    // Programs

    pub fn reduce_script(&mut self, node: &Script) -> R {
        self.interface(ASTNode::Script, |d| {
            let directives = d.list("directives", &node.directives, Self::reduce_directive);
            let statements = d.list("statements", &node.statements, Self::reduce_statement);
            d.reducer.reduce_script(&d.path, node, directives, statements)
        })
    }

    pub fn reduce_module(&mut self, node: &Module) -> R {
        self.interface(ASTNode::Module, |d| {
            let directives = d.list("directives", &node.directives, Self::reduce_directive);
            let items = d.list("items", &node.items, Self::reduce_module_item);
            d.reducer.reduce_module(&d.path, node, directives, items)
        })
    }

    pub fn reduce_directive(&mut self, node: &Directive) -> R {
        self.interface(ASTNode::Directive, |d| d.reducer.reduce_directive(&d.path, node))
    }

    pub fn reduce_function_body(&mut self, node: &FunctionBody) -> R {
        self.interface(ASTNode::FunctionBody, |d| {
            let directives = d.list("directives", &node.directives, Self::reduce_directive);
            let statements = d.list("statements", &node.statements, Self::reduce_statement);
            d.reducer
                .reduce_function_body(&d.path, node, directives, statements)
        })
    }

    pub fn reduce_formal_parameters(&mut self, node: &FormalParameters) -> R {
        self.interface(ASTNode::FormalParameters, |d| {
            let items = d.list("items", &node.items, Self::reduce_parameter);
            let rest = d.opt("rest", &node.rest, Self::reduce_binding);
            d.reducer.reduce_formal_parameters(&d.path, node, items, rest)
        })
    }

    // Bindings

    pub fn reduce_binding_identifier(&mut self, node: &BindingIdentifier) -> R {
        self.interface(ASTNode::BindingIdentifier, |d| {
            d.reducer.reduce_binding_identifier(&d.path, node)
        })
    }

    pub fn reduce_binding_with_default(&mut self, node: &BindingWithDefault) -> R {
        self.interface(ASTNode::BindingWithDefault, |d| {
            let binding = d.field("binding", |d| d.reduce_binding(&node.binding));
            let init = d.field("init", |d| d.reduce_expression(&node.init));
            d.reducer
                .reduce_binding_with_default(&d.path, node, binding, init)
        })
    }

    pub fn reduce_object_binding(&mut self, node: &ObjectBinding) -> R {
        self.interface(ASTNode::ObjectBinding, |d| {
            let properties = d.list("properties", &node.properties, Self::reduce_binding_property);
            d.reducer.reduce_object_binding(&d.path, node, properties)
        })
    }

    pub fn reduce_binding_property_identifier(&mut self, node: &BindingPropertyIdentifier) -> R {
        self.interface(ASTNode::BindingPropertyIdentifier, |d| {
            let binding = d.field("binding", |d| d.reduce_binding_identifier(&node.binding));
            let init = d.opt("init", &node.init, Self::reduce_expression);
            d.reducer
                .reduce_binding_property_identifier(&d.path, node, binding, init)
        })
    }

    pub fn reduce_binding_property_property(&mut self, node: &BindingPropertyProperty) -> R {
        self.interface(ASTNode::BindingPropertyProperty, |d| {
            let name = d.field("name", |d| d.reduce_property_name(&node.name));
            let binding = d.field("binding", |d| d.reduce_parameter(&node.binding));
            d.reducer
                .reduce_binding_property_property(&d.path, node, name, binding)
        })
    }

    pub fn reduce_array_binding(&mut self, node: &ArrayBinding) -> R {
        self.interface(ASTNode::ArrayBinding, |d| {
            let elements = d.list_opt("elements", &node.elements, Self::reduce_parameter);
            let rest = d.opt("rest", &node.rest, Self::reduce_binding);
            d.reducer.reduce_array_binding(&d.path, node, elements, rest)
        })
    }

    // Assignment targets

    pub fn reduce_assignment_target_identifier(&mut self, node: &AssignmentTargetIdentifier) -> R {
        self.interface(ASTNode::AssignmentTargetIdentifier, |d| {
            d.reducer.reduce_assignment_target_identifier(&d.path, node)
        })
    }

    pub fn reduce_computed_member_assignment_target(
        &mut self,
        node: &ComputedMemberAssignmentTarget,
    ) -> R {
        self.interface(ASTNode::ComputedMemberAssignmentTarget, |d| {
            let object = d.field("object", |d| d.reduce_expression_or_super(&node.object));
            let expression = d.field("expression", |d| d.reduce_expression(&node.expression));
            d.reducer
                .reduce_computed_member_assignment_target(&d.path, node, object, expression)
        })
    }

    pub fn reduce_static_member_assignment_target(
        &mut self,
        node: &StaticMemberAssignmentTarget,
    ) -> R {
        self.interface(ASTNode::StaticMemberAssignmentTarget, |d| {
            let object = d.field("object", |d| d.reduce_expression_or_super(&node.object));
            d.reducer
                .reduce_static_member_assignment_target(&d.path, node, object)
        })
    }

    pub fn reduce_assignment_target_with_default(
        &mut self,
        node: &AssignmentTargetWithDefault,
    ) -> R {
        self.interface(ASTNode::AssignmentTargetWithDefault, |d| {
            let binding = d.field("binding", |d| d.reduce_assignment_target(&node.binding));
            let init = d.field("init", |d| d.reduce_expression(&node.init));
            d.reducer
                .reduce_assignment_target_with_default(&d.path, node, binding, init)
        })
    }

    pub fn reduce_object_assignment_target(&mut self, node: &ObjectAssignmentTarget) -> R {
        self.interface(ASTNode::ObjectAssignmentTarget, |d| {
            let properties = d.list(
                "properties",
                &node.properties,
                Self::reduce_assignment_target_property,
            );
            d.reducer
                .reduce_object_assignment_target(&d.path, node, properties)
        })
    }

    pub fn reduce_assignment_target_property_identifier(
        &mut self,
        node: &AssignmentTargetPropertyIdentifier,
    ) -> R {
        self.interface(ASTNode::AssignmentTargetPropertyIdentifier, |d| {
            let binding = d.field("binding", |d| {
                d.reduce_assignment_target_identifier(&node.binding)
            });
            let init = d.opt("init", &node.init, Self::reduce_expression);
            d.reducer
                .reduce_assignment_target_property_identifier(&d.path, node, binding, init)
        })
    }

    pub fn reduce_assignment_target_property_property(
        &mut self,
        node: &AssignmentTargetPropertyProperty,
    ) -> R {
        self.interface(ASTNode::AssignmentTargetPropertyProperty, |d| {
            let name = d.field("name", |d| d.reduce_property_name(&node.name));
            let binding = d.field("binding", |d| {
                d.reduce_assignment_target_or_default(&node.binding)
            });
            d.reducer
                .reduce_assignment_target_property_property(&d.path, node, name, binding)
        })
    }

    pub fn reduce_array_assignment_target(&mut self, node: &ArrayAssignmentTarget) -> R {
        self.interface(ASTNode::ArrayAssignmentTarget, |d| {
            let elements = d.list_opt(
                "elements",
                &node.elements,
                Self::reduce_assignment_target_or_default,
            );
            let rest = d.opt("rest", &node.rest, Self::reduce_assignment_target);
            d.reducer
                .reduce_array_assignment_target(&d.path, node, elements, rest)
        })
    }

    // Classes

    pub fn reduce_class_declaration(&mut self, node: &ClassDeclaration) -> R {
        self.interface(ASTNode::ClassDeclaration, |d| {
            let name = d.field("name", |d| d.reduce_binding_identifier(&node.name));
            let super_ = d.opt("super", &node.super_, Self::reduce_expression);
            let elements = d.list("elements", &node.elements, Self::reduce_class_element);
            d.reducer
                .reduce_class_declaration(&d.path, node, name, super_, elements)
        })
    }

    pub fn reduce_class_expression(&mut self, node: &ClassExpression) -> R {
        self.interface(ASTNode::ClassExpression, |d| {
            let name = d.opt("name", &node.name, Self::reduce_binding_identifier);
            let super_ = d.opt("super", &node.super_, Self::reduce_expression);
            let elements = d.list("elements", &node.elements, Self::reduce_class_element);
            d.reducer
                .reduce_class_expression(&d.path, node, name, super_, elements)
        })
    }

    pub fn reduce_class_element(&mut self, node: &ClassElement) -> R {
        self.interface(ASTNode::ClassElement, |d| {
            let method = d.field("method", |d| d.reduce_method_definition(&node.method));
            d.reducer.reduce_class_element(&d.path, node, method)
        })
    }

    // Modules

    pub fn reduce_import(&mut self, node: &Import) -> R {
        self.interface(ASTNode::Import, |d| {
            let default_binding = d.opt(
                "defaultBinding",
                &node.default_binding,
                Self::reduce_binding_identifier,
            );
            let named_imports = d.list(
                "namedImports",
                &node.named_imports,
                Self::reduce_import_specifier,
            );
            d.reducer
                .reduce_import(&d.path, node, default_binding, named_imports)
        })
    }

    pub fn reduce_import_namespace(&mut self, node: &ImportNamespace) -> R {
        self.interface(ASTNode::ImportNamespace, |d| {
            let default_binding = d.opt(
                "defaultBinding",
                &node.default_binding,
                Self::reduce_binding_identifier,
            );
            let namespace_binding = d.field("namespaceBinding", |d| {
                d.reduce_binding_identifier(&node.namespace_binding)
            });
            d.reducer
                .reduce_import_namespace(&d.path, node, default_binding, namespace_binding)
        })
    }

    pub fn reduce_import_specifier(&mut self, node: &ImportSpecifier) -> R {
        self.interface(ASTNode::ImportSpecifier, |d| {
            let binding = d.field("binding", |d| d.reduce_binding_identifier(&node.binding));
            d.reducer.reduce_import_specifier(&d.path, node, binding)
        })
    }

    pub fn reduce_export_all_from(&mut self, node: &ExportAllFrom) -> R {
        self.interface(ASTNode::ExportAllFrom, |d| {
            d.reducer.reduce_export_all_from(&d.path, node)
        })
    }

    pub fn reduce_export_from(&mut self, node: &ExportFrom) -> R {
        self.interface(ASTNode::ExportFrom, |d| {
            let named_exports = d.list(
                "namedExports",
                &node.named_exports,
                Self::reduce_export_from_specifier,
            );
            d.reducer.reduce_export_from(&d.path, node, named_exports)
        })
    }

    pub fn reduce_export_from_specifier(&mut self, node: &ExportFromSpecifier) -> R {
        self.interface(ASTNode::ExportFromSpecifier, |d| {
            d.reducer.reduce_export_from_specifier(&d.path, node)
        })
    }

    pub fn reduce_export_locals(&mut self, node: &ExportLocals) -> R {
        self.interface(ASTNode::ExportLocals, |d| {
            let named_exports = d.list(
                "namedExports",
                &node.named_exports,
                Self::reduce_export_local_specifier,
            );
            d.reducer.reduce_export_locals(&d.path, node, named_exports)
        })
    }

    pub fn reduce_export_local_specifier(&mut self, node: &ExportLocalSpecifier) -> R {
        self.interface(ASTNode::ExportLocalSpecifier, |d| {
            let name = d.field("name", |d| d.reduce_identifier_expression(&node.name));
            d.reducer.reduce_export_local_specifier(&d.path, node, name)
        })
    }

    pub fn reduce_export(&mut self, node: &Export) -> R {
        self.interface(ASTNode::Export, |d| {
            let declaration = d.field("declaration", |d| {
                d.reduce_exportable_declaration(&node.declaration)
            });
            d.reducer.reduce_export(&d.path, node, declaration)
        })
    }

    pub fn reduce_export_default(&mut self, node: &ExportDefault) -> R {
        self.interface(ASTNode::ExportDefault, |d| {
            let body = d.field("body", |d| d.reduce_export_default_body(&node.body));
            d.reducer.reduce_export_default(&d.path, node, body)
        })
    }

    // Property definitions

    pub fn reduce_method(&mut self, node: &Method) -> R {
        self.interface(ASTNode::Method, |d| {
            let name = d.field("name", |d| d.reduce_property_name(&node.name));
            let params = d.field("params", |d| d.reduce_formal_parameters(&node.params));
            let body = d.field("body", |d| d.reduce_function_body(&node.body));
            d.reducer.reduce_method(&d.path, node, name, params, body)
        })
    }

    pub fn reduce_getter(&mut self, node: &Getter) -> R {
        self.interface(ASTNode::Getter, |d| {
            let name = d.field("name", |d| d.reduce_property_name(&node.name));
            let body = d.field("body", |d| d.reduce_function_body(&node.body));
            d.reducer.reduce_getter(&d.path, node, name, body)
        })
    }

    pub fn reduce_setter(&mut self, node: &Setter) -> R {
        self.interface(ASTNode::Setter, |d| {
            let name = d.field("name", |d| d.reduce_property_name(&node.name));
            let param = d.field("param", |d| d.reduce_parameter(&node.param));
            let body = d.field("body", |d| d.reduce_function_body(&node.body));
            d.reducer.reduce_setter(&d.path, node, name, param, body)
        })
    }

    pub fn reduce_data_property(&mut self, node: &DataProperty) -> R {
        self.interface(ASTNode::DataProperty, |d| {
            let name = d.field("name", |d| d.reduce_property_name(&node.name));
            let expression = d.field("expression", |d| d.reduce_expression(&node.expression));
            d.reducer
                .reduce_data_property(&d.path, node, name, expression)
        })
    }

    pub fn reduce_shorthand_property(&mut self, node: &ShorthandProperty) -> R {
        self.interface(ASTNode::ShorthandProperty, |d| {
            let name = d.field("name", |d| d.reduce_identifier_expression(&node.name));
            d.reducer.reduce_shorthand_property(&d.path, node, name)
        })
    }

    pub fn reduce_computed_property_name(&mut self, node: &ComputedPropertyName) -> R {
        self.interface(ASTNode::ComputedPropertyName, |d| {
            let expression = d.field("expression", |d| d.reduce_expression(&node.expression));
            d.reducer
                .reduce_computed_property_name(&d.path, node, expression)
        })
    }

    pub fn reduce_static_property_name(&mut self, node: &StaticPropertyName) -> R {
        self.interface(ASTNode::StaticPropertyName, |d| {
            d.reducer.reduce_static_property_name(&d.path, node)
        })
    }

    // Expressions

    pub fn reduce_literal_boolean_expression(&mut self, node: &LiteralBooleanExpression) -> R {
        self.interface(ASTNode::LiteralBooleanExpression, |d| {
            d.reducer.reduce_literal_boolean_expression(&d.path, node)
        })
    }

    pub fn reduce_literal_infinity_expression(&mut self, node: &LiteralInfinityExpression) -> R {
        self.interface(ASTNode::LiteralInfinityExpression, |d| {
            d.reducer.reduce_literal_infinity_expression(&d.path, node)
        })
    }

    pub fn reduce_literal_null_expression(&mut self, node: &LiteralNullExpression) -> R {
        self.interface(ASTNode::LiteralNullExpression, |d| {
            d.reducer.reduce_literal_null_expression(&d.path, node)
        })
    }

    pub fn reduce_literal_numeric_expression(&mut self, node: &LiteralNumericExpression) -> R {
        self.interface(ASTNode::LiteralNumericExpression, |d| {
            d.reducer.reduce_literal_numeric_expression(&d.path, node)
        })
    }

    pub fn reduce_literal_reg_exp_expression(&mut self, node: &LiteralRegExpExpression) -> R {
        self.interface(ASTNode::LiteralRegExpExpression, |d| {
            d.reducer.reduce_literal_reg_exp_expression(&d.path, node)
        })
    }

    pub fn reduce_literal_string_expression(&mut self, node: &LiteralStringExpression) -> R {
        self.interface(ASTNode::LiteralStringExpression, |d| {
            d.reducer.reduce_literal_string_expression(&d.path, node)
        })
    }

    pub fn reduce_array_expression(&mut self, node: &ArrayExpression) -> R {
        self.interface(ASTNode::ArrayExpression, |d| {
            let elements = d.list_opt(
                "elements",
                &node.elements,
                Self::reduce_spread_element_or_expression,
            );
            d.reducer.reduce_array_expression(&d.path, node, elements)
        })
    }

    pub fn reduce_arrow_expression(&mut self, node: &ArrowExpression) -> R {
        self.interface(ASTNode::ArrowExpression, |d| {
            let params = d.field("params", |d| d.reduce_formal_parameters(&node.params));
            let body = d.field("body", |d| d.reduce_arrow_body(&node.body));
            d.reducer.reduce_arrow_expression(&d.path, node, params, body)
        })
    }

    pub fn reduce_assignment_expression(&mut self, node: &AssignmentExpression) -> R {
        self.interface(ASTNode::AssignmentExpression, |d| {
            let binding = d.field("binding", |d| d.reduce_assignment_target(&node.binding));
            let expression = d.field("expression", |d| d.reduce_expression(&node.expression));
            d.reducer
                .reduce_assignment_expression(&d.path, node, binding, expression)
        })
    }

    pub fn reduce_await_expression(&mut self, node: &AwaitExpression) -> R {
        self.interface(ASTNode::AwaitExpression, |d| {
            let expression = d.field("expression", |d| d.reduce_expression(&node.expression));
            d.reducer.reduce_await_expression(&d.path, node, expression)
        })
    }

    pub fn reduce_binary_expression(&mut self, node: &BinaryExpression) -> R {
        self.interface(ASTNode::BinaryExpression, |d| {
            let left = d.field("left", |d| d.reduce_expression(&node.left));
            let right = d.field("right", |d| d.reduce_expression(&node.right));
            d.reducer.reduce_binary_expression(&d.path, node, left, right)
        })
    }

    pub fn reduce_call_expression(&mut self, node: &CallExpression) -> R {
        self.interface(ASTNode::CallExpression, |d| {
            let callee = d.field("callee", |d| d.reduce_expression_or_super(&node.callee));
            let arguments = d.list(
                "arguments",
                &node.arguments,
                Self::reduce_spread_element_or_expression,
            );
            d.reducer
                .reduce_call_expression(&d.path, node, callee, arguments)
        })
    }

    pub fn reduce_compound_assignment_expression(
        &mut self,
        node: &CompoundAssignmentExpression,
    ) -> R {
        self.interface(ASTNode::CompoundAssignmentExpression, |d| {
            let binding = d.field("binding", |d| {
                d.reduce_simple_assignment_target(&node.binding)
            });
            let expression = d.field("expression", |d| d.reduce_expression(&node.expression));
            d.reducer
                .reduce_compound_assignment_expression(&d.path, node, binding, expression)
        })
    }

    pub fn reduce_computed_member_expression(&mut self, node: &ComputedMemberExpression) -> R {
        self.interface(ASTNode::ComputedMemberExpression, |d| {
            let object = d.field("object", |d| d.reduce_expression_or_super(&node.object));
            let expression = d.field("expression", |d| d.reduce_expression(&node.expression));
            d.reducer
                .reduce_computed_member_expression(&d.path, node, object, expression)
        })
    }

    pub fn reduce_conditional_expression(&mut self, node: &ConditionalExpression) -> R {
        self.interface(ASTNode::ConditionalExpression, |d| {
            let test = d.field("test", |d| d.reduce_expression(&node.test));
            let consequent = d.field("consequent", |d| d.reduce_expression(&node.consequent));
            let alternate = d.field("alternate", |d| d.reduce_expression(&node.alternate));
            d.reducer
                .reduce_conditional_expression(&d.path, node, test, consequent, alternate)
        })
    }

    pub fn reduce_function_expression(&mut self, node: &FunctionExpression) -> R {
        self.interface(ASTNode::FunctionExpression, |d| {
            let name = d.opt("name", &node.name, Self::reduce_binding_identifier);
            let params = d.field("params", |d| d.reduce_formal_parameters(&node.params));
            let body = d.field("body", |d| d.reduce_function_body(&node.body));
            d.reducer
                .reduce_function_expression(&d.path, node, name, params, body)
        })
    }

    pub fn reduce_identifier_expression(&mut self, node: &IdentifierExpression) -> R {
        self.interface(ASTNode::IdentifierExpression, |d| {
            d.reducer.reduce_identifier_expression(&d.path, node)
        })
    }

    pub fn reduce_new_expression(&mut self, node: &NewExpression) -> R {
        self.interface(ASTNode::NewExpression, |d| {
            let callee = d.field("callee", |d| d.reduce_expression(&node.callee));
            let arguments = d.list(
                "arguments",
                &node.arguments,
                Self::reduce_spread_element_or_expression,
            );
            d.reducer
                .reduce_new_expression(&d.path, node, callee, arguments)
        })
    }

    pub fn reduce_new_target_expression(&mut self, node: &NewTargetExpression) -> R {
        self.interface(ASTNode::NewTargetExpression, |d| {
            d.reducer.reduce_new_target_expression(&d.path, node)
        })
    }

    pub fn reduce_object_expression(&mut self, node: &ObjectExpression) -> R {
        self.interface(ASTNode::ObjectExpression, |d| {
            let properties = d.list("properties", &node.properties, Self::reduce_object_property);
            d.reducer.reduce_object_expression(&d.path, node, properties)
        })
    }

    pub fn reduce_static_member_expression(&mut self, node: &StaticMemberExpression) -> R {
        self.interface(ASTNode::StaticMemberExpression, |d| {
            let object = d.field("object", |d| d.reduce_expression_or_super(&node.object));
            d.reducer
                .reduce_static_member_expression(&d.path, node, object)
        })
    }

    pub fn reduce_template_expression(&mut self, node: &TemplateExpression) -> R {
        self.interface(ASTNode::TemplateExpression, |d| {
            let tag = d.opt("tag", &node.tag, Self::reduce_expression);
            let elements = d.list("elements", &node.elements, Self::reduce_template_part);
            d.reducer
                .reduce_template_expression(&d.path, node, tag, elements)
        })
    }

    pub fn reduce_this_expression(&mut self, node: &ThisExpression) -> R {
        self.interface(ASTNode::ThisExpression, |d| {
            d.reducer.reduce_this_expression(&d.path, node)
        })
    }

    pub fn reduce_unary_expression(&mut self, node: &UnaryExpression) -> R {
        self.interface(ASTNode::UnaryExpression, |d| {
            let operand = d.field("operand", |d| d.reduce_expression(&node.operand));
            d.reducer.reduce_unary_expression(&d.path, node, operand)
        })
    }

    pub fn reduce_update_expression(&mut self, node: &UpdateExpression) -> R {
        self.interface(ASTNode::UpdateExpression, |d| {
            let operand = d.field("operand", |d| {
                d.reduce_simple_assignment_target(&node.operand)
            });
            d.reducer.reduce_update_expression(&d.path, node, operand)
        })
    }

    pub fn reduce_yield_expression(&mut self, node: &YieldExpression) -> R {
        self.interface(ASTNode::YieldExpression, |d| {
            let expression = d.opt("expression", &node.expression, Self::reduce_expression);
            d.reducer.reduce_yield_expression(&d.path, node, expression)
        })
    }

    pub fn reduce_yield_generator_expression(&mut self, node: &YieldGeneratorExpression) -> R {
        self.interface(ASTNode::YieldGeneratorExpression, |d| {
            let expression = d.field("expression", |d| d.reduce_expression(&node.expression));
            d.reducer
                .reduce_yield_generator_expression(&d.path, node, expression)
        })
    }

    pub fn reduce_spread_element(&mut self, node: &SpreadElement) -> R {
        self.interface(ASTNode::SpreadElement, |d| {
            let expression = d.field("expression", |d| d.reduce_expression(&node.expression));
            d.reducer.reduce_spread_element(&d.path, node, expression)
        })
    }

    pub fn reduce_super(&mut self, node: &Super) -> R {
        self.interface(ASTNode::Super, |d| d.reducer.reduce_super(&d.path, node))
    }

    pub fn reduce_template_element(&mut self, node: &TemplateElement) -> R {
        self.interface(ASTNode::TemplateElement, |d| {
            d.reducer.reduce_template_element(&d.path, node)
        })
    }

    // Statements

    pub fn reduce_block(&mut self, node: &Block) -> R {
        self.interface(ASTNode::Block, |d| {
            let statements = d.list("statements", &node.statements, Self::reduce_statement);
            d.reducer.reduce_block(&d.path, node, statements)
        })
    }

    pub fn reduce_block_statement(&mut self, node: &BlockStatement) -> R {
        self.interface(ASTNode::BlockStatement, |d| {
            let block = d.field("block", |d| d.reduce_block(&node.block));
            d.reducer.reduce_block_statement(&d.path, node, block)
        })
    }

    pub fn reduce_break_statement(&mut self, node: &BreakStatement) -> R {
        self.interface(ASTNode::BreakStatement, |d| {
            d.reducer.reduce_break_statement(&d.path, node)
        })
    }

    pub fn reduce_continue_statement(&mut self, node: &ContinueStatement) -> R {
        self.interface(ASTNode::ContinueStatement, |d| {
            d.reducer.reduce_continue_statement(&d.path, node)
        })
    }

    pub fn reduce_debugger_statement(&mut self, node: &DebuggerStatement) -> R {
        self.interface(ASTNode::DebuggerStatement, |d| {
            d.reducer.reduce_debugger_statement(&d.path, node)
        })
    }

    pub fn reduce_do_while_statement(&mut self, node: &DoWhileStatement) -> R {
        self.interface(ASTNode::DoWhileStatement, |d| {
            let body = d.field("body", |d| d.reduce_statement(&node.body));
            let test = d.field("test", |d| d.reduce_expression(&node.test));
            d.reducer.reduce_do_while_statement(&d.path, node, body, test)
        })
    }

    pub fn reduce_empty_statement(&mut self, node: &EmptyStatement) -> R {
        self.interface(ASTNode::EmptyStatement, |d| {
            d.reducer.reduce_empty_statement(&d.path, node)
        })
    }

    pub fn reduce_expression_statement(&mut self, node: &ExpressionStatement) -> R {
        self.interface(ASTNode::ExpressionStatement, |d| {
            let expression = d.field("expression", |d| d.reduce_expression(&node.expression));
            d.reducer
                .reduce_expression_statement(&d.path, node, expression)
        })
    }

    pub fn reduce_for_in_statement(&mut self, node: &ForInStatement) -> R {
        self.interface(ASTNode::ForInStatement, |d| {
            let left = d.field("left", |d| d.reduce_for_in_of_binding(&node.left));
            let right = d.field("right", |d| d.reduce_expression(&node.right));
            let body = d.field("body", |d| d.reduce_statement(&node.body));
            d.reducer
                .reduce_for_in_statement(&d.path, node, left, right, body)
        })
    }

    pub fn reduce_for_of_statement(&mut self, node: &ForOfStatement) -> R {
        self.interface(ASTNode::ForOfStatement, |d| {
            let left = d.field("left", |d| d.reduce_for_in_of_binding(&node.left));
            let right = d.field("right", |d| d.reduce_expression(&node.right));
            let body = d.field("body", |d| d.reduce_statement(&node.body));
            d.reducer
                .reduce_for_of_statement(&d.path, node, left, right, body)
        })
    }

    pub fn reduce_for_statement(&mut self, node: &ForStatement) -> R {
        self.interface(ASTNode::ForStatement, |d| {
            let init = d.opt("init", &node.init, Self::reduce_for_init);
            let test = d.opt("test", &node.test, Self::reduce_expression);
            let update = d.opt("update", &node.update, Self::reduce_expression);
            let body = d.field("body", |d| d.reduce_statement(&node.body));
            d.reducer
                .reduce_for_statement(&d.path, node, init, test, update, body)
        })
    }

    pub fn reduce_function_declaration(&mut self, node: &FunctionDeclaration) -> R {
        self.interface(ASTNode::FunctionDeclaration, |d| {
            let name = d.field("name", |d| d.reduce_binding_identifier(&node.name));
            let params = d.field("params", |d| d.reduce_formal_parameters(&node.params));
            let body = d.field("body", |d| d.reduce_function_body(&node.body));
            d.reducer
                .reduce_function_declaration(&d.path, node, name, params, body)
        })
    }

    pub fn reduce_if_statement(&mut self, node: &IfStatement) -> R {
        self.interface(ASTNode::IfStatement, |d| {
            let test = d.field("test", |d| d.reduce_expression(&node.test));
            let consequent = d.field("consequent", |d| d.reduce_statement(&node.consequent));
            let alternate = d.opt("alternate", &node.alternate, Self::reduce_statement);
            d.reducer
                .reduce_if_statement(&d.path, node, test, consequent, alternate)
        })
    }

    pub fn reduce_labeled_statement(&mut self, node: &LabeledStatement) -> R {
        self.interface(ASTNode::LabeledStatement, |d| {
            let body = d.field("body", |d| d.reduce_statement(&node.body));
            d.reducer.reduce_labeled_statement(&d.path, node, body)
        })
    }

    pub fn reduce_return_statement(&mut self, node: &ReturnStatement) -> R {
        self.interface(ASTNode::ReturnStatement, |d| {
            let expression = d.opt("expression", &node.expression, Self::reduce_expression);
            d.reducer.reduce_return_statement(&d.path, node, expression)
        })
    }

    pub fn reduce_switch_statement(&mut self, node: &SwitchStatement) -> R {
        self.interface(ASTNode::SwitchStatement, |d| {
            let discriminant = d.field("discriminant", |d| d.reduce_expression(&node.discriminant));
            let cases = d.list("cases", &node.cases, Self::reduce_switch_case);
            d.reducer
                .reduce_switch_statement(&d.path, node, discriminant, cases)
        })
    }

    pub fn reduce_switch_statement_with_default(
        &mut self,
        node: &SwitchStatementWithDefault,
    ) -> R {
        self.interface(ASTNode::SwitchStatementWithDefault, |d| {
            let discriminant = d.field("discriminant", |d| d.reduce_expression(&node.discriminant));
            let pre_default_cases = d.list(
                "preDefaultCases",
                &node.pre_default_cases,
                Self::reduce_switch_case,
            );
            let default_case = d.field("defaultCase", |d| d.reduce_switch_default(&node.default_case));
            let post_default_cases = d.list(
                "postDefaultCases",
                &node.post_default_cases,
                Self::reduce_switch_case,
            );
            d.reducer.reduce_switch_statement_with_default(
                &d.path,
                node,
                discriminant,
                pre_default_cases,
                default_case,
                post_default_cases,
            )
        })
    }

    pub fn reduce_switch_case(&mut self, node: &SwitchCase) -> R {
        self.interface(ASTNode::SwitchCase, |d| {
            let test = d.field("test", |d| d.reduce_expression(&node.test));
            let consequent = d.list("consequent", &node.consequent, Self::reduce_statement);
            d.reducer.reduce_switch_case(&d.path, node, test, consequent)
        })
    }

    pub fn reduce_switch_default(&mut self, node: &SwitchDefault) -> R {
        self.interface(ASTNode::SwitchDefault, |d| {
            let consequent = d.list("consequent", &node.consequent, Self::reduce_statement);
            d.reducer.reduce_switch_default(&d.path, node, consequent)
        })
    }

    pub fn reduce_throw_statement(&mut self, node: &ThrowStatement) -> R {
        self.interface(ASTNode::ThrowStatement, |d| {
            let expression = d.field("expression", |d| d.reduce_expression(&node.expression));
            d.reducer.reduce_throw_statement(&d.path, node, expression)
        })
    }

    pub fn reduce_try_catch_statement(&mut self, node: &TryCatchStatement) -> R {
        self.interface(ASTNode::TryCatchStatement, |d| {
            let body = d.field("body", |d| d.reduce_block(&node.body));
            let catch_clause = d.field("catchClause", |d| d.reduce_catch_clause(&node.catch_clause));
            d.reducer
                .reduce_try_catch_statement(&d.path, node, body, catch_clause)
        })
    }

    pub fn reduce_try_finally_statement(&mut self, node: &TryFinallyStatement) -> R {
        self.interface(ASTNode::TryFinallyStatement, |d| {
            let body = d.field("body", |d| d.reduce_block(&node.body));
            let catch_clause = d.opt("catchClause", &node.catch_clause, Self::reduce_catch_clause);
            let finalizer = d.field("finalizer", |d| d.reduce_block(&node.finalizer));
            d.reducer
                .reduce_try_finally_statement(&d.path, node, body, catch_clause, finalizer)
        })
    }

    pub fn reduce_catch_clause(&mut self, node: &CatchClause) -> R {
        self.interface(ASTNode::CatchClause, |d| {
            let binding = d.field("binding", |d| d.reduce_binding(&node.binding));
            let body = d.field("body", |d| d.reduce_block(&node.body));
            d.reducer.reduce_catch_clause(&d.path, node, binding, body)
        })
    }

    pub fn reduce_variable_declaration_statement(
        &mut self,
        node: &VariableDeclarationStatement,
    ) -> R {
        self.interface(ASTNode::VariableDeclarationStatement, |d| {
            let declaration = d.field("declaration", |d| {
                d.reduce_variable_declaration(&node.declaration)
            });
            d.reducer
                .reduce_variable_declaration_statement(&d.path, node, declaration)
        })
    }

    pub fn reduce_variable_declaration(&mut self, node: &VariableDeclaration) -> R {
        self.interface(ASTNode::VariableDeclaration, |d| {
            let declarators = d.list(
                "declarators",
                &node.declarators,
                Self::reduce_variable_declarator,
            );
            d.reducer
                .reduce_variable_declaration(&d.path, node, declarators)
        })
    }

    pub fn reduce_variable_declarator(&mut self, node: &VariableDeclarator) -> R {
        self.interface(ASTNode::VariableDeclarator, |d| {
            let binding = d.field("binding", |d| d.reduce_binding(&node.binding));
            let init = d.opt("init", &node.init, Self::reduce_expression);
            d.reducer
                .reduce_variable_declarator(&d.path, node, binding, init)
        })
    }

    pub fn reduce_while_statement(&mut self, node: &WhileStatement) -> R {
        self.interface(ASTNode::WhileStatement, |d| {
            let test = d.field("test", |d| d.reduce_expression(&node.test));
            let body = d.field("body", |d| d.reduce_statement(&node.body));
            d.reducer.reduce_while_statement(&d.path, node, test, body)
        })
    }

    pub fn reduce_with_statement(&mut self, node: &WithStatement) -> R {
        self.interface(ASTNode::WithStatement, |d| {
            let object = d.field("object", |d| d.reduce_expression(&node.object));
            let body = d.field("body", |d| d.reduce_statement(&node.body));
            d.reducer.reduce_with_statement(&d.path, node, object, body)
        })
    }
}

/// Reduce a whole program with `reducer`.
pub fn reduce_program<D, R>(reducer: &D, program: &Program) -> R
where
    D: Reducer<R>,
{
    Director::new(reducer).reduce_program(program)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::reduce::{Monoid, MonoidalReducer, NodeRef, Wrap, WrappedReducer};

    /// Records the kinds of nodes, in the order in which they are reduced.
    struct Order;
    impl MonoidalReducer for Order {
        type State = Vec<ASTNode>;
        fn node(&self, _path: &Path, kind: ASTNode, children: Self::State) -> Self::State {
            Monoid::append(children, vec![kind])
        }
    }

    /// Records the depth of the path at each identifier.
    struct Depth;
    impl MonoidalReducer for Depth {
        type State = Vec<usize>;
        fn reduce_identifier_expression(
            &self,
            path: &Path,
            _node: &IdentifierExpression,
        ) -> Self::State {
            vec![path.len()]
        }
    }

    /// Collects nothing by itself.
    struct Nothing;
    impl MonoidalReducer for Nothing {
        type State = Vec<ASTNode>;
    }

    /// Appends the kind of each node after the result of its children.
    struct Kind;
    impl Wrap<Vec<ASTNode>> for Kind {
        fn wrap(&self, _path: &Path, node: NodeRef, result: Vec<ASTNode>) -> Vec<ASTNode> {
            Monoid::append(result, vec![node.kind()])
        }
    }

    fn id(name: &'static str) -> Expression {
        IdentifierExpression { name: name.into() }.into()
    }

    fn script(statements: Vec<Statement>) -> Program {
        Script {
            directives: vec![],
            statements,
        }
        .into()
    }

    #[test]
    fn test_post_order() {
        // a + b;
        let program = script(vec![ExpressionStatement {
            expression: BinaryExpression {
                left: id("a"),
                operator: BinaryOperator::Plus,
                right: id("b"),
            }
            .into(),
        }
        .into()]);
        let order = reduce_program(&Order, &program);
        assert_eq!(
            order,
            vec![
                ASTNode::IdentifierExpression,
                ASTNode::IdentifierExpression,
                ASTNode::BinaryExpression,
                ASTNode::ExpressionStatement,
                ASTNode::Script
            ]
        );
    }

    #[test]
    fn test_elisions_are_skipped() {
        // [, a, , b];
        let program = script(vec![ExpressionStatement {
            expression: ArrayExpression {
                elements: vec![None, Some(id("a").into()), None, Some(id("b").into())],
            }
            .into(),
        }
        .into()]);
        let order = reduce_program(&Order, &program);
        assert_eq!(order.len(), 5);
        assert_eq!(order[2], ASTNode::ArrayExpression);
    }

    #[test]
    fn test_path_depth() {
        // if (a) b; else if (c) d;
        let program = script(vec![IfStatement {
            test: id("a"),
            consequent: ExpressionStatement { expression: id("b") }.into(),
            alternate: Some(
                IfStatement {
                    test: id("c"),
                    consequent: ExpressionStatement { expression: id("d") }.into(),
                    alternate: None,
                }
                .into(),
            ),
        }
        .into()]);
        let depths = reduce_program(&Depth, &program);
        assert_eq!(depths, vec![2, 3, 3, 4]);
    }

    #[test]
    fn test_wrapped_reducer() {
        // a, b;
        let program = script(vec![ExpressionStatement {
            expression: BinaryExpression {
                left: id("a"),
                operator: BinaryOperator::Sequence,
                right: id("b"),
            }
            .into(),
        }
        .into()]);
        let wrapped = WrappedReducer::new(Nothing, Kind);
        let kinds: Vec<ASTNode> = reduce_program(&wrapped, &program);
        assert_eq!(kinds, reduce_program(&Order, &program));
    }

    #[test]
    fn test_node_ref_identity() {
        let left = IdentifierExpression { name: "a".into() };
        let right = left.clone();
        assert_eq!(NodeRef::from(&left).kind(), ASTNode::IdentifierExpression);
        assert_eq!(NodeRef::from(&left).address(), NodeRef::from(&left).address());
        assert_ne!(NodeRef::from(&left).address(), NodeRef::from(&right).address());
    }
}
