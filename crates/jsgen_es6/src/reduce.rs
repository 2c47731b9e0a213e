//! Bottom-up reductions of an AST.
//!
//! A `Reducer<R>` has exactly one rule per kind of node. The `Director`
//! reduces the children of a node first, left to right, then hands their
//! results to the rule for the node itself. Since the trait has no default
//! methods, a reducer that forgets a kind of node does not compile.
//!
//! Reductions whose result is a `Monoid` may implement `MonoidalReducer`
//! instead, overriding only the rules they care about; every
//! `MonoidalReducer` is a `Reducer`.
//!
//! A `WrappedReducer` post-processes the result of every rule of another
//! reducer, given a `NodeRef` to the node that was reduced.

use crate::ast::*;

/// The path from the root to the node being reduced.
pub type Path = jsgen_shared::ast::Path<ASTNode, &'static str>;

/// A type with an associative `append` and a neutral element.
pub trait Monoid: Sized {
    fn empty() -> Self;
    fn append(self, other: Self) -> Self;
}

impl Monoid for () {
    fn empty() -> Self {}
    fn append(self, _: Self) -> Self {}
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        vec![]
    }
    fn append(mut self, mut other: Self) -> Self {
        Vec::append(&mut self, &mut other);
        self
    }
}

/// Post-processing applied by a `WrappedReducer`.
pub trait Wrap<R> {
    fn wrap(&self, path: &Path, node: NodeRef, result: R) -> R;
}

/// A reducer passing each result of `reducer` through `wrap`.
pub struct WrappedReducer<T, W> {
    pub reducer: T,
    pub wrap: W,
}

impl<T, W> WrappedReducer<T, W> {
    pub fn new(reducer: T, wrap: W) -> Self {
        WrappedReducer { reducer, wrap }
    }
}

macro_rules! child_type {
    ($r:ty, one) => { $r };
    ($r:ty, opt) => { Option<$r> };
    ($r:ty, list) => { Vec<$r> };
    ($r:ty, list_opt) => { Vec<Option<$r>> };
}

macro_rules! fold_child {
    ($state:expr, one, $child:expr) => {
        Monoid::append($state, $child)
    };
    ($state:expr, opt, $child:expr) => {
        match $child {
            Some(child) => Monoid::append($state, child),
            None => $state,
        }
    };
    ($state:expr, list, $child:expr) => {
        $child.into_iter().fold($state, Monoid::append)
    };
    ($state:expr, list_opt, $child:expr) => {
        $child.into_iter().flatten().fold($state, Monoid::append)
    };
}

macro_rules! make_reducers {
    ( $( $kind:ident => $method:ident ( $( $field:ident : $shape:ident ),* ); )* ) => {
        /// One rule per kind of node.
        ///
        /// Each rule receives the node and the results of reducing its children:
        /// `Option<R>` for optional children, `Vec<R>` for lists, `Vec<Option<R>>`
        /// for lists with elisions.
        pub trait Reducer<R> {
            $(
                fn $method(&self, path: &Path, node: &$kind $(, $field: child_type!(R, $shape))*) -> R;
            )*
        }

        /// A reducer into a monoid.
        ///
        /// By default, each rule appends the states of the children, in
        /// source order, and passes the result to `node`.
        pub trait MonoidalReducer {
            type State: Monoid;

            /// Called by every default rule, once its children have been appended.
            fn node(&self, _path: &Path, _kind: ASTNode, children: Self::State) -> Self::State {
                children
            }

            $(
                fn $method(&self, path: &Path, _node: &$kind $(, $field: child_type!(Self::State, $shape))*) -> Self::State {
                    let state = <Self::State as Monoid>::empty();
                    $(
                        let state = fold_child!(state, $shape, $field);
                    )*
                    self.node(path, ASTNode::$kind, state)
                }
            )*
        }

        /// A reference to a node of any kind.
        #[derive(Clone, Copy, Debug)]
        pub enum NodeRef<'a> {
            $( $kind(&'a $kind), )*
        }

        impl<'a> NodeRef<'a> {
            pub fn kind(&self) -> ASTNode {
                match *self {
                    $( NodeRef::$kind(_) => ASTNode::$kind, )*
                }
            }

            /// The address of the node.
            ///
            /// Nodes without fields are zero-sized, hence may share their
            /// address with other nodes of the same kind.
            pub fn address(&self) -> usize {
                match *self {
                    $( NodeRef::$kind(node) => node as *const $kind as usize, )*
                }
            }
        }

        $(
            impl<'a> From<&'a $kind> for NodeRef<'a> {
                fn from(node: &'a $kind) -> Self {
                    NodeRef::$kind(node)
                }
            }
        )*

        impl<R, T, W> Reducer<R> for WrappedReducer<T, W> where T: Reducer<R>, W: Wrap<R> {
            $(
                fn $method(&self, path: &Path, node: &$kind $(, $field: child_type!(R, $shape))*) -> R {
                    let result = self.reducer.$method(path, node $(, $field)*);
                    self.wrap.wrap(path, NodeRef::$kind(node), result)
                }
            )*
        }

        impl<M> Reducer<M::State> for M where M: MonoidalReducer {
            $(
                fn $method(&self, path: &Path, node: &$kind $(, $field: child_type!(M::State, $shape))*) -> M::State {
                    MonoidalReducer::$method(self, path, node $(, $field)*)
                }
            )*
        }
    }
}

make_reducers! {
    ArrayAssignmentTarget => reduce_array_assignment_target(elements: list_opt, rest: opt);
    ArrayBinding => reduce_array_binding(elements: list_opt, rest: opt);
    ArrayExpression => reduce_array_expression(elements: list_opt);
    ArrowExpression => reduce_arrow_expression(params: one, body: one);
    AssignmentExpression => reduce_assignment_expression(binding: one, expression: one);
    AssignmentTargetIdentifier => reduce_assignment_target_identifier();
    AssignmentTargetPropertyIdentifier => reduce_assignment_target_property_identifier(binding: one, init: opt);
    AssignmentTargetPropertyProperty => reduce_assignment_target_property_property(name: one, binding: one);
    AssignmentTargetWithDefault => reduce_assignment_target_with_default(binding: one, init: one);
    AwaitExpression => reduce_await_expression(expression: one);
    BinaryExpression => reduce_binary_expression(left: one, right: one);
    BindingIdentifier => reduce_binding_identifier();
    BindingPropertyIdentifier => reduce_binding_property_identifier(binding: one, init: opt);
    BindingPropertyProperty => reduce_binding_property_property(name: one, binding: one);
    BindingWithDefault => reduce_binding_with_default(binding: one, init: one);
    Block => reduce_block(statements: list);
    BlockStatement => reduce_block_statement(block: one);
    BreakStatement => reduce_break_statement();
    CallExpression => reduce_call_expression(callee: one, arguments: list);
    CatchClause => reduce_catch_clause(binding: one, body: one);
    ClassDeclaration => reduce_class_declaration(name: one, super_: opt, elements: list);
    ClassElement => reduce_class_element(method: one);
    ClassExpression => reduce_class_expression(name: opt, super_: opt, elements: list);
    CompoundAssignmentExpression => reduce_compound_assignment_expression(binding: one, expression: one);
    ComputedMemberAssignmentTarget => reduce_computed_member_assignment_target(object: one, expression: one);
    ComputedMemberExpression => reduce_computed_member_expression(object: one, expression: one);
    ComputedPropertyName => reduce_computed_property_name(expression: one);
    ConditionalExpression => reduce_conditional_expression(test: one, consequent: one, alternate: one);
    ContinueStatement => reduce_continue_statement();
    DataProperty => reduce_data_property(name: one, expression: one);
    DebuggerStatement => reduce_debugger_statement();
    Directive => reduce_directive();
    DoWhileStatement => reduce_do_while_statement(body: one, test: one);
    EmptyStatement => reduce_empty_statement();
    Export => reduce_export(declaration: one);
    ExportAllFrom => reduce_export_all_from();
    ExportDefault => reduce_export_default(body: one);
    ExportFrom => reduce_export_from(named_exports: list);
    ExportFromSpecifier => reduce_export_from_specifier();
    ExportLocalSpecifier => reduce_export_local_specifier(name: one);
    ExportLocals => reduce_export_locals(named_exports: list);
    ExpressionStatement => reduce_expression_statement(expression: one);
    ForInStatement => reduce_for_in_statement(left: one, right: one, body: one);
    ForOfStatement => reduce_for_of_statement(left: one, right: one, body: one);
    ForStatement => reduce_for_statement(init: opt, test: opt, update: opt, body: one);
    FormalParameters => reduce_formal_parameters(items: list, rest: opt);
    FunctionBody => reduce_function_body(directives: list, statements: list);
    FunctionDeclaration => reduce_function_declaration(name: one, params: one, body: one);
    FunctionExpression => reduce_function_expression(name: opt, params: one, body: one);
    Getter => reduce_getter(name: one, body: one);
    IdentifierExpression => reduce_identifier_expression();
    IfStatement => reduce_if_statement(test: one, consequent: one, alternate: opt);
    Import => reduce_import(default_binding: opt, named_imports: list);
    ImportNamespace => reduce_import_namespace(default_binding: opt, namespace_binding: one);
    ImportSpecifier => reduce_import_specifier(binding: one);
    LabeledStatement => reduce_labeled_statement(body: one);
    LiteralBooleanExpression => reduce_literal_boolean_expression();
    LiteralInfinityExpression => reduce_literal_infinity_expression();
    LiteralNullExpression => reduce_literal_null_expression();
    LiteralNumericExpression => reduce_literal_numeric_expression();
    LiteralRegExpExpression => reduce_literal_reg_exp_expression();
    LiteralStringExpression => reduce_literal_string_expression();
    Method => reduce_method(name: one, params: one, body: one);
    Module => reduce_module(directives: list, items: list);
    NewExpression => reduce_new_expression(callee: one, arguments: list);
    NewTargetExpression => reduce_new_target_expression();
    ObjectAssignmentTarget => reduce_object_assignment_target(properties: list);
    ObjectBinding => reduce_object_binding(properties: list);
    ObjectExpression => reduce_object_expression(properties: list);
    ReturnStatement => reduce_return_statement(expression: opt);
    Script => reduce_script(directives: list, statements: list);
    Setter => reduce_setter(name: one, param: one, body: one);
    ShorthandProperty => reduce_shorthand_property(name: one);
    SpreadElement => reduce_spread_element(expression: one);
    StaticMemberAssignmentTarget => reduce_static_member_assignment_target(object: one);
    StaticMemberExpression => reduce_static_member_expression(object: one);
    StaticPropertyName => reduce_static_property_name();
    Super => reduce_super();
    SwitchCase => reduce_switch_case(test: one, consequent: list);
    SwitchDefault => reduce_switch_default(consequent: list);
    SwitchStatement => reduce_switch_statement(discriminant: one, cases: list);
    SwitchStatementWithDefault => reduce_switch_statement_with_default(discriminant: one, pre_default_cases: list, default_case: one, post_default_cases: list);
    TemplateElement => reduce_template_element();
    TemplateExpression => reduce_template_expression(tag: opt, elements: list);
    ThisExpression => reduce_this_expression();
    ThrowStatement => reduce_throw_statement(expression: one);
    TryCatchStatement => reduce_try_catch_statement(body: one, catch_clause: one);
    TryFinallyStatement => reduce_try_finally_statement(body: one, catch_clause: opt, finalizer: one);
    UnaryExpression => reduce_unary_expression(operand: one);
    UpdateExpression => reduce_update_expression(operand: one);
    VariableDeclaration => reduce_variable_declaration(declarators: list);
    VariableDeclarationStatement => reduce_variable_declaration_statement(declaration: one);
    VariableDeclarator => reduce_variable_declarator(binding: one, init: opt);
    WhileStatement => reduce_while_statement(test: one, body: one);
    WithStatement => reduce_with_statement(object: one, body: one);
    YieldExpression => reduce_yield_expression(expression: opt);
    YieldGeneratorExpression => reduce_yield_generator_expression(expression: one);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_vec_monoid_keeps_order() {
        let state = Monoid::append(vec![1, 2], vec![3]);
        let state = Monoid::append(state, Monoid::empty());
        assert_eq!(state, vec![1, 2, 3]);
    }
}
