//! The rules turning each kind of node into a `Code`.
//!
//! Each rule receives the `Code` of the children of a node and decides
//! which of them must be parenthesized, using the precedence found in the
//! AST and the `Attributes` computed for the children.

use super::code_rep::{Attributes, Code, CodeRep};
use super::policy::Policy;
use super::websafe::safe;
use crate::util::{d2a, escape_string_literal, is_identifier_name};

use jsgen_es6::ast::*;
use jsgen_es6::precedence::Precedence;
use jsgen_es6::{Path, Reducer};
use jsgen_shared::{Identifier, IdentifierName, SharedString};

fn token(text: &'static str) -> CodeRep {
    CodeRep::token(text)
}

fn raw(text: &'static str) -> CodeRep {
    CodeRep::RawToken(SharedString::from_str(text))
}

fn seq(items: Vec<CodeRep>) -> CodeRep {
    CodeRep::Seq(items)
}

fn comma_sep(items: Vec<CodeRep>) -> CodeRep {
    CodeRep::CommaSep(items)
}

fn paren(inner: CodeRep) -> CodeRep {
    CodeRep::Paren(Box::new(inner))
}

fn bracket(inner: CodeRep) -> CodeRep {
    CodeRep::Bracket(Box::new(inner))
}

fn brace(inner: CodeRep) -> CodeRep {
    CodeRep::Brace(Box::new(inner))
}

fn optional(rep: Option<CodeRep>) -> CodeRep {
    rep.unwrap_or(CodeRep::Empty)
}

fn keyword_if(condition: bool, keyword: &'static str) -> CodeRep {
    if condition {
        token(keyword)
    } else {
        CodeRep::Empty
    }
}

fn reps(codes: Vec<Code>) -> Vec<CodeRep> {
    codes.into_iter().map(|code| code.rep).collect()
}

/// Parenthesize `code` if its `precedence` is lower than `at_least`.
fn protect(code: Code, precedence: Precedence, at_least: Precedence) -> Code {
    if precedence < at_least {
        paren(code.rep).into()
    } else {
        code
    }
}

/// Parenthesize a sequence expression used where a single expression is expected.
fn group(code: Code) -> Code {
    if code.attributes.contains_group {
        paren(code.rep).into()
    } else {
        code
    }
}

/// Forward `ends_with_missing_else` from the body of a statement.
fn with_body(rep: CodeRep, body: Attributes) -> Code {
    Code::new(
        rep,
        Attributes {
            ends_with_missing_else: body.ends_with_missing_else,
            ..Attributes::default()
        },
    )
}

/// `binding = init`, if there is an `init`.
fn initialized(binding: Code, init: Option<Code>, expression: Option<&Expression>) -> Code {
    match (init, expression) {
        (Some(init), Some(expression)) => {
            let init = protect(init, expression.precedence(), Precedence::Assignment);
            seq(vec![binding.rep, token("="), init.rep]).into()
        }
        _ => binding.rep.into(),
    }
}

fn array_pattern(elements: Vec<Option<Code>>, rest: Option<Code>) -> Code {
    let rest = rest.map(|rest| seq(vec![token("..."), rest.rep]));
    if elements.is_empty() {
        return bracket(optional(rest)).into();
    }
    // `[a,]` has a single element.
    let trailing_hole = rest.is_none() && elements.last().map_or(false, Option::is_none);
    let mut items: Vec<CodeRep> = elements
        .into_iter()
        .map(|element| element.map_or(CodeRep::Empty, |element| element.rep))
        .collect();
    items.extend(rest);
    let mut content = vec![comma_sep(items)];
    if trailing_hole {
        content.push(token(","));
    }
    bracket(seq(content)).into()
}

/// Parenthesize the object of a member or the callee of a call, unless it is `super`.
fn object(code: Code, node: &ExpressionOrSuper, at_least: Precedence) -> Code {
    match *node {
        ExpressionOrSuper::Super(_) => code,
        ExpressionOrSuper::Expression(ref expression) => {
            protect(code, expression.precedence(), at_least)
        }
    }
}

fn arguments(codes: Vec<Code>, nodes: &[SpreadElementOrExpression]) -> CodeRep {
    comma_sep(
        codes
            .into_iter()
            .zip(nodes)
            .map(|(code, node)| match *node {
                SpreadElementOrExpression::SpreadElement(_) => code.rep,
                SpreadElementOrExpression::Expression(ref expression) => {
                    protect(code, expression.precedence(), Precedence::Assignment).rep
                }
            })
            .collect(),
    )
}

/// The left-hand side of `for-in` and `for-of`.
fn for_in_of_left(left: Code, node: &ForInOfBinding) -> CodeRep {
    match *node {
        ForInOfBinding::VariableDeclaration(_) => {
            let contains_in = left.attributes.contains_in;
            CodeRep::NoIn(Box::new(left.rep.mark_contains_in(contains_in)))
        }
        // `for (let of x)` would declare `of`.
        ForInOfBinding::AssignmentTarget(_)
            if left.attributes.starts_with_let || left.attributes.starts_with_let_bracket =>
        {
            paren(left.rep)
        }
        ForInOfBinding::AssignmentTarget(_) => left.rep,
    }
}

/// `true` if a directive needs to be quoted with `'`.
fn has_unescaped_double_quote(raw: &str) -> bool {
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '"' => return true,
            _ => {}
        }
    }
    false
}

fn is_default_name(name: &BindingIdentifier) -> bool {
    name.name.as_str() == "*default*"
}

/// Generates the `Code` of each node.
///
/// Precedence and ambiguity rules are the same for all policies, the
/// `Policy` only decides on layout and statement terminators.
pub struct CodeGen<P: Policy> {
    policy: P,

    /// If `true`, escape the text of identifiers, strings and templates
    /// so that it may appear within an HTML `<script>` element.
    web_safe: bool,
}

impl<P: Policy> CodeGen<P> {
    pub fn new(policy: P) -> Self {
        CodeGen {
            policy,
            web_safe: false,
        }
    }

    pub fn web_safe(policy: P) -> Self {
        CodeGen {
            policy,
            web_safe: true,
        }
    }

    fn identifier(&self, name: &SharedString) -> CodeRep {
        if self.web_safe {
            CodeRep::Token(safe(name).into())
        } else {
            CodeRep::Token(name.clone())
        }
    }

    /// An identifier that may be `let`.
    fn name(&self, name: &Identifier) -> Code {
        Code::new(
            self.identifier(name.as_shared_string()),
            Attributes {
                starts_with_let: name.as_str() == "let",
                ..Attributes::default()
            },
        )
    }

    fn string_literal(&self, value: &str) -> CodeRep {
        let escaped = escape_string_literal(value);
        if self.web_safe {
            CodeRep::Token(safe(&escaped).into())
        } else {
            CodeRep::Token(escaped.into())
        }
    }

    fn terminated(&self, mut items: Vec<CodeRep>) -> Code {
        items.push(self.policy.semi_op());
        seq(items).into()
    }

    fn jump(&self, keyword: &'static str, label: &Option<Identifier>) -> Code {
        let label = label
            .as_ref()
            .map(|label| self.identifier(label.as_shared_string()));
        self.terminated(vec![token(keyword), optional(label)])
    }

    fn function(
        &self,
        is_async: bool,
        is_generator: bool,
        name: Option<CodeRep>,
        params: Code,
        body: Code,
    ) -> CodeRep {
        seq(vec![
            keyword_if(is_async, "async"),
            token("function"),
            keyword_if(is_generator, "*"),
            optional(name),
            params.rep,
            body.rep,
        ])
    }

    fn class(
        &self,
        name: Option<CodeRep>,
        heritage: Option<Code>,
        heritage_node: Option<&Expression>,
        elements: Vec<Code>,
    ) -> CodeRep {
        let mut items = vec![token("class")];
        items.extend(name);
        if let (Some(heritage), Some(expression)) = (heritage, heritage_node) {
            items.push(token("extends"));
            items.push(protect(heritage, expression.precedence(), Precedence::New).rep);
        }
        items.push(self.policy.block(reps(elements)));
        seq(items)
    }

    fn program(&self, directives: Vec<Code>, mut items: Vec<Code>) -> Code {
        if let Some(first) = items.first_mut() {
            first.rep.mark_directive_position();
        }
        self.policy
            .lines(reps(directives).into_iter().chain(reps(items)).collect())
            .into()
    }

    fn computed_member(&self, object_code: Code, node: &ExpressionOrSuper, expression: Code) -> Code {
        let object_code = object(object_code, node, node.member_precedence());
        let is_let = match *node {
            ExpressionOrSuper::Expression(Expression::IdentifierExpression(ref id)) => {
                id.name.as_str() == "let"
            }
            _ => false,
        };
        let attributes = Attributes {
            starts_with_let_bracket: object_code.attributes.starts_with_let_bracket || is_let,
            ..object_code.attributes.leading()
        };
        Code::new(seq(vec![object_code.rep, bracket(expression.rep)]), attributes)
    }

    fn static_member(&self, object_code: Code, node: &ExpressionOrSuper, property: &IdentifierName) -> Code {
        let object_code = object(object_code, node, node.member_precedence());
        Code::new(
            seq(vec![
                object_code.rep,
                token("."),
                self.identifier(property.as_shared_string()),
            ]),
            object_code.attributes.leading(),
        )
    }

    fn assignment(&self, binding: Code, operator: &'static str, expression: Code, node: &Expression) -> Code {
        let expression = protect(expression, node.precedence(), Precedence::Assignment);
        Code::new(
            seq(vec![binding.rep, token(operator), expression.rep]),
            Attributes {
                contains_in: expression.attributes.contains_in,
                ..binding.attributes.leading()
            },
        )
    }
}

impl<P: Policy> Reducer<Code> for CodeGen<P> {
    fn reduce_array_assignment_target(
        &self,
        _path: &Path,
        _node: &ArrayAssignmentTarget,
        elements: Vec<Option<Code>>,
        rest: Option<Code>,
    ) -> Code {
        array_pattern(elements, rest)
    }

    fn reduce_array_binding(
        &self,
        _path: &Path,
        _node: &ArrayBinding,
        elements: Vec<Option<Code>>,
        rest: Option<Code>,
    ) -> Code {
        array_pattern(elements, rest)
    }

    fn reduce_array_expression(
        &self,
        _path: &Path,
        _node: &ArrayExpression,
        elements: Vec<Option<Code>>,
    ) -> Code {
        if elements.is_empty() {
            return bracket(CodeRep::Empty).into();
        }
        let trailing_hole = elements.last().map_or(false, Option::is_none);
        let items = elements
            .into_iter()
            .map(|element| element.map_or(CodeRep::Empty, |element| group(element).rep))
            .collect();
        let mut content = vec![comma_sep(items)];
        if trailing_hole {
            content.push(token(","));
        }
        bracket(seq(content)).into()
    }

    fn reduce_arrow_expression(
        &self,
        _path: &Path,
        node: &ArrowExpression,
        params: Code,
        body: Code,
    ) -> Code {
        let params = match (node.params.items.as_slice(), &node.params.rest) {
            ([Parameter::Binding(Binding::BindingIdentifier(_))], &None) => {
                params.rep.strip_parens()
            }
            _ => params.rep,
        };
        let (body, contains_in) = match node.body {
            ArrowBody::Expression(ref expression) => {
                let body = protect(body, expression.precedence(), Precedence::Assignment);
                if body.attributes.starts_with_curly {
                    (paren(body.rep), false)
                } else {
                    (body.rep, body.attributes.contains_in)
                }
            }
            ArrowBody::FunctionBody(_) => (body.rep, false),
        };
        Code::new(
            seq(vec![keyword_if(node.is_async, "async"), params, token("=>"), body]),
            Attributes {
                contains_in,
                ..Attributes::default()
            },
        )
    }

    fn reduce_assignment_expression(
        &self,
        _path: &Path,
        node: &AssignmentExpression,
        binding: Code,
        expression: Code,
    ) -> Code {
        self.assignment(binding, "=", expression, &node.expression)
    }

    fn reduce_assignment_target_identifier(
        &self,
        _path: &Path,
        node: &AssignmentTargetIdentifier,
    ) -> Code {
        self.name(&node.name)
    }

    fn reduce_assignment_target_property_identifier(
        &self,
        _path: &Path,
        node: &AssignmentTargetPropertyIdentifier,
        binding: Code,
        init: Option<Code>,
    ) -> Code {
        initialized(binding, init, node.init.as_ref())
    }

    fn reduce_assignment_target_property_property(
        &self,
        _path: &Path,
        _node: &AssignmentTargetPropertyProperty,
        name: Code,
        binding: Code,
    ) -> Code {
        seq(vec![name.rep, token(":"), binding.rep]).into()
    }

    fn reduce_assignment_target_with_default(
        &self,
        _path: &Path,
        node: &AssignmentTargetWithDefault,
        binding: Code,
        init: Code,
    ) -> Code {
        initialized(binding, Some(init), Some(&node.init))
    }

    fn reduce_await_expression(
        &self,
        _path: &Path,
        node: &AwaitExpression,
        expression: Code,
    ) -> Code {
        let expression = protect(expression, node.expression.precedence(), Precedence::Prefix);
        seq(vec![token("await"), expression.rep]).into()
    }

    fn reduce_binary_expression(
        &self,
        _path: &Path,
        node: &BinaryExpression,
        left: Code,
        right: Code,
    ) -> Code {
        let operator = node.operator;
        let precedence = operator.precedence();
        let (left_wrapped, right_wrapped) = if operator.is_right_associative() {
            (
                node.left.precedence() < Precedence::Postfix,
                node.right.precedence() < precedence,
            )
        } else {
            (
                node.left.precedence() < precedence,
                node.right.precedence() <= precedence,
            )
        };
        let left = if left_wrapped { paren(left.rep).into() } else { left };
        let right = if right_wrapped { paren(right.rep).into() } else { right };
        let attributes = Attributes {
            contains_in: left.attributes.contains_in
                || right.attributes.contains_in
                || operator == BinaryOperator::In,
            contains_group: operator == BinaryOperator::Sequence,
            ..left.attributes.leading()
        };
        Code::new(
            seq(vec![left.rep, token(operator.as_str()), right.rep]),
            attributes,
        )
    }

    fn reduce_binding_identifier(&self, _path: &Path, node: &BindingIdentifier) -> Code {
        self.name(&node.name)
    }

    fn reduce_binding_property_identifier(
        &self,
        _path: &Path,
        node: &BindingPropertyIdentifier,
        binding: Code,
        init: Option<Code>,
    ) -> Code {
        initialized(binding, init, node.init.as_ref())
    }

    fn reduce_binding_property_property(
        &self,
        _path: &Path,
        _node: &BindingPropertyProperty,
        name: Code,
        binding: Code,
    ) -> Code {
        seq(vec![name.rep, token(":"), binding.rep]).into()
    }

    fn reduce_binding_with_default(
        &self,
        _path: &Path,
        node: &BindingWithDefault,
        binding: Code,
        init: Code,
    ) -> Code {
        initialized(binding, Some(init), Some(&node.init))
    }

    fn reduce_block(&self, _path: &Path, _node: &Block, statements: Vec<Code>) -> Code {
        self.policy.block(reps(statements)).into()
    }

    fn reduce_block_statement(&self, _path: &Path, _node: &BlockStatement, block: Code) -> Code {
        block
    }

    fn reduce_break_statement(&self, _path: &Path, node: &BreakStatement) -> Code {
        self.jump("break", &node.label)
    }

    fn reduce_call_expression(
        &self,
        _path: &Path,
        node: &CallExpression,
        callee: Code,
        arguments: Vec<Code>,
    ) -> Code {
        let callee = object(callee, &node.callee, Precedence::Call);
        let arguments = self::arguments(arguments, &node.arguments);
        Code::new(
            seq(vec![callee.rep, paren(arguments)]),
            callee.attributes.leading(),
        )
    }

    fn reduce_catch_clause(
        &self,
        _path: &Path,
        _node: &CatchClause,
        binding: Code,
        body: Code,
    ) -> Code {
        seq(vec![token("catch"), paren(binding.rep), body.rep]).into()
    }

    fn reduce_class_declaration(
        &self,
        _path: &Path,
        node: &ClassDeclaration,
        name: Code,
        super_: Option<Code>,
        elements: Vec<Code>,
    ) -> Code {
        let name = if is_default_name(&node.name) {
            None
        } else {
            Some(name.rep)
        };
        self.class(name, super_, node.super_.as_ref(), elements)
            .into()
    }

    fn reduce_class_element(&self, _path: &Path, node: &ClassElement, method: Code) -> Code {
        seq(vec![keyword_if(node.is_static, "static"), method.rep]).into()
    }

    fn reduce_class_expression(
        &self,
        _path: &Path,
        node: &ClassExpression,
        name: Option<Code>,
        super_: Option<Code>,
        elements: Vec<Code>,
    ) -> Code {
        let name = name.map(|name| name.rep);
        Code::new(
            self.class(name, super_, node.super_.as_ref(), elements),
            Attributes {
                starts_with_function_or_class: true,
                ..Attributes::default()
            },
        )
    }

    fn reduce_compound_assignment_expression(
        &self,
        _path: &Path,
        node: &CompoundAssignmentExpression,
        binding: Code,
        expression: Code,
    ) -> Code {
        self.assignment(binding, node.operator.as_str(), expression, &node.expression)
    }

    fn reduce_computed_member_assignment_target(
        &self,
        _path: &Path,
        node: &ComputedMemberAssignmentTarget,
        object: Code,
        expression: Code,
    ) -> Code {
        self.computed_member(object, &node.object, expression)
    }

    fn reduce_computed_member_expression(
        &self,
        _path: &Path,
        node: &ComputedMemberExpression,
        object: Code,
        expression: Code,
    ) -> Code {
        self.computed_member(object, &node.object, expression)
    }

    fn reduce_computed_property_name(
        &self,
        _path: &Path,
        node: &ComputedPropertyName,
        expression: Code,
    ) -> Code {
        let expression = protect(expression, node.expression.precedence(), Precedence::Assignment);
        bracket(expression.rep).into()
    }

    fn reduce_conditional_expression(
        &self,
        _path: &Path,
        node: &ConditionalExpression,
        test: Code,
        consequent: Code,
        alternate: Code,
    ) -> Code {
        let test = protect(test, node.test.precedence(), Precedence::LogicalOr);
        let consequent = protect(consequent, node.consequent.precedence(), Precedence::Assignment);
        let alternate = protect(alternate, node.alternate.precedence(), Precedence::Assignment);
        let attributes = Attributes {
            contains_in: test.attributes.contains_in || alternate.attributes.contains_in,
            ..test.attributes.leading()
        };
        Code::new(
            seq(vec![
                test.rep,
                token("?"),
                consequent.rep,
                token(":"),
                alternate.rep,
            ]),
            attributes,
        )
    }

    fn reduce_continue_statement(&self, _path: &Path, node: &ContinueStatement) -> Code {
        self.jump("continue", &node.label)
    }

    fn reduce_data_property(
        &self,
        _path: &Path,
        _node: &DataProperty,
        name: Code,
        expression: Code,
    ) -> Code {
        seq(vec![name.rep, token(":"), group(expression).rep]).into()
    }

    fn reduce_debugger_statement(&self, _path: &Path, _node: &DebuggerStatement) -> Code {
        self.terminated(vec![token("debugger")])
    }

    fn reduce_directive(&self, _path: &Path, node: &Directive) -> Code {
        let raw = node.raw_value.as_str();
        let delim = if has_unescaped_double_quote(raw) {
            '\''
        } else {
            '"'
        };
        let raw = if self.web_safe {
            safe(raw)
        } else {
            raw.to_string()
        };
        let text = format!("{}{}{}", delim, raw, delim);
        self.terminated(vec![CodeRep::Token(text.into())])
    }

    fn reduce_do_while_statement(
        &self,
        _path: &Path,
        _node: &DoWhileStatement,
        body: Code,
        test: Code,
    ) -> Code {
        self.terminated(vec![
            token("do"),
            body.rep,
            token("while"),
            paren(test.rep),
        ])
    }

    fn reduce_empty_statement(&self, _path: &Path, _node: &EmptyStatement) -> Code {
        CodeRep::Semi.into()
    }

    fn reduce_export(&self, _path: &Path, node: &Export, declaration: Code) -> Code {
        match node.declaration {
            ExportableDeclaration::VariableDeclaration(_) => {
                self.terminated(vec![token("export"), declaration.rep])
            }
            _ => seq(vec![token("export"), declaration.rep]).into(),
        }
    }

    fn reduce_export_all_from(&self, _path: &Path, node: &ExportAllFrom) -> Code {
        self.terminated(vec![
            token("export"),
            token("*"),
            token("from"),
            self.string_literal(&node.module_specifier),
        ])
    }

    fn reduce_export_default(&self, _path: &Path, node: &ExportDefault, body: Code) -> Code {
        let body = match node.body {
            ExportDefaultBody::Declaration(_) => body.rep,
            ExportDefaultBody::Expression(ref expression) => {
                let body = protect(body, expression.precedence(), Precedence::Assignment);
                // Otherwise, a declaration.
                let body = if body.attributes.starts_with_function_or_class {
                    paren(body.rep)
                } else {
                    body.rep
                };
                seq(vec![body, self.policy.semi_op()])
            }
        };
        seq(vec![token("export"), token("default"), body]).into()
    }

    fn reduce_export_from(
        &self,
        _path: &Path,
        node: &ExportFrom,
        named_exports: Vec<Code>,
    ) -> Code {
        self.terminated(vec![
            token("export"),
            brace(comma_sep(reps(named_exports))),
            token("from"),
            self.string_literal(&node.module_specifier),
        ])
    }

    fn reduce_export_from_specifier(&self, _path: &Path, node: &ExportFromSpecifier) -> Code {
        let exported = node.exported_name.as_ref().map(|exported| {
            seq(vec![
                token("as"),
                self.identifier(exported.as_shared_string()),
            ])
        });
        seq(vec![
            self.identifier(node.name.as_shared_string()),
            optional(exported),
        ])
        .into()
    }

    fn reduce_export_local_specifier(
        &self,
        _path: &Path,
        node: &ExportLocalSpecifier,
        name: Code,
    ) -> Code {
        let exported = node.exported_name.as_ref().map(|exported| {
            seq(vec![
                token("as"),
                self.identifier(exported.as_shared_string()),
            ])
        });
        seq(vec![name.rep, optional(exported)]).into()
    }

    fn reduce_export_locals(
        &self,
        _path: &Path,
        _node: &ExportLocals,
        named_exports: Vec<Code>,
    ) -> Code {
        self.terminated(vec![
            token("export"),
            brace(comma_sep(reps(named_exports))),
        ])
    }

    fn reduce_expression_statement(
        &self,
        _path: &Path,
        node: &ExpressionStatement,
        expression: Code,
    ) -> Code {
        let rep = match node.expression {
            Expression::LiteralStringExpression(_) => CodeRep::StringStatement {
                expr: Box::new(expression.rep),
                directive_position: false,
            },
            _ if expression.attributes.starts_with_function_or_curly() => paren(expression.rep),
            _ => expression.rep,
        };
        self.terminated(vec![rep])
    }

    fn reduce_for_in_statement(
        &self,
        _path: &Path,
        node: &ForInStatement,
        left: Code,
        right: Code,
        body: Code,
    ) -> Code {
        let left = for_in_of_left(left, &node.left);
        let head = paren(seq(vec![left, token("in"), right.rep]));
        with_body(seq(vec![token("for"), head, body.rep]), body.attributes)
    }

    fn reduce_for_of_statement(
        &self,
        _path: &Path,
        node: &ForOfStatement,
        left: Code,
        right: Code,
        body: Code,
    ) -> Code {
        let left = for_in_of_left(left, &node.left);
        let right = protect(right, node.right.precedence(), Precedence::Assignment);
        let head = paren(seq(vec![left, token("of"), right.rep]));
        with_body(seq(vec![token("for"), head, body.rep]), body.attributes)
    }

    fn reduce_for_statement(
        &self,
        _path: &Path,
        _node: &ForStatement,
        init: Option<Code>,
        test: Option<Code>,
        update: Option<Code>,
        body: Code,
    ) -> Code {
        let init = init.map(|init| {
            // `for (let [a] ...` would be a declaration.
            let rep = if init.attributes.starts_with_let_bracket {
                paren(init.rep)
            } else {
                let contains_in = init.attributes.contains_in;
                init.rep.mark_contains_in(contains_in)
            };
            CodeRep::NoIn(Box::new(rep))
        });
        let head = paren(seq(vec![
            optional(init),
            token(";"),
            optional(test.map(|test| test.rep)),
            token(";"),
            optional(update.map(|update| update.rep)),
        ]));
        with_body(seq(vec![token("for"), head, body.rep]), body.attributes)
    }

    fn reduce_formal_parameters(
        &self,
        _path: &Path,
        _node: &FormalParameters,
        items: Vec<Code>,
        rest: Option<Code>,
    ) -> Code {
        let mut items = reps(items);
        items.extend(rest.map(|rest| seq(vec![token("..."), rest.rep])));
        paren(comma_sep(items)).into()
    }

    fn reduce_function_body(
        &self,
        _path: &Path,
        _node: &FunctionBody,
        directives: Vec<Code>,
        mut statements: Vec<Code>,
    ) -> Code {
        if let Some(first) = statements.first_mut() {
            first.rep.mark_directive_position();
        }
        let items = reps(directives).into_iter().chain(reps(statements)).collect();
        self.policy.block(items).into()
    }

    fn reduce_function_declaration(
        &self,
        _path: &Path,
        node: &FunctionDeclaration,
        name: Code,
        params: Code,
        body: Code,
    ) -> Code {
        let name = if is_default_name(&node.name) {
            None
        } else {
            Some(name.rep)
        };
        self.function(node.is_async, node.is_generator, name, params, body)
            .into()
    }

    fn reduce_function_expression(
        &self,
        _path: &Path,
        node: &FunctionExpression,
        name: Option<Code>,
        params: Code,
        body: Code,
    ) -> Code {
        let name = name.map(|name| name.rep);
        Code::new(
            self.function(node.is_async, node.is_generator, name, params, body),
            Attributes {
                starts_with_function_or_class: true,
                ..Attributes::default()
            },
        )
    }

    fn reduce_getter(&self, _path: &Path, _node: &Getter, name: Code, body: Code) -> Code {
        seq(vec![
            token("get"),
            name.rep,
            paren(CodeRep::Empty),
            body.rep,
        ])
        .into()
    }

    fn reduce_identifier_expression(&self, _path: &Path, node: &IdentifierExpression) -> Code {
        self.name(&node.name)
    }

    fn reduce_if_statement(
        &self,
        _path: &Path,
        _node: &IfStatement,
        test: Code,
        consequent: Code,
        alternate: Option<Code>,
    ) -> Code {
        // `if (a) if (b) c; else d` would attach `else d` to `if (b)`.
        let consequent = if alternate.is_some() && consequent.attributes.ends_with_missing_else {
            self.policy.block(vec![consequent.rep])
        } else {
            consequent.rep
        };
        let ends_with_missing_else = alternate
            .as_ref()
            .map_or(true, |alternate| alternate.attributes.ends_with_missing_else);
        let mut items = vec![token("if"), paren(test.rep), consequent];
        if let Some(alternate) = alternate {
            items.push(token("else"));
            items.push(alternate.rep);
        }
        Code::new(
            seq(items),
            Attributes {
                ends_with_missing_else,
                ..Attributes::default()
            },
        )
    }

    fn reduce_import(
        &self,
        _path: &Path,
        node: &Import,
        default_binding: Option<Code>,
        named_imports: Vec<Code>,
    ) -> Code {
        let mut bindings: Vec<CodeRep> = default_binding.into_iter().map(|code| code.rep).collect();
        if !named_imports.is_empty() {
            bindings.push(brace(comma_sep(reps(named_imports))));
        }
        let specifier = self.string_literal(&node.module_specifier);
        if bindings.is_empty() {
            return self.terminated(vec![token("import"), specifier]);
        }
        self.terminated(vec![
            token("import"),
            comma_sep(bindings),
            token("from"),
            specifier,
        ])
    }

    fn reduce_import_namespace(
        &self,
        _path: &Path,
        node: &ImportNamespace,
        default_binding: Option<Code>,
        namespace_binding: Code,
    ) -> Code {
        let default_binding =
            default_binding.map(|binding| seq(vec![binding.rep, token(",")]));
        self.terminated(vec![
            token("import"),
            optional(default_binding),
            token("*"),
            token("as"),
            namespace_binding.rep,
            token("from"),
            self.string_literal(&node.module_specifier),
        ])
    }

    fn reduce_import_specifier(
        &self,
        _path: &Path,
        node: &ImportSpecifier,
        binding: Code,
    ) -> Code {
        let name = node
            .name
            .as_ref()
            .map(|name| seq(vec![self.identifier(name.as_shared_string()), token("as")]));
        seq(vec![optional(name), binding.rep]).into()
    }

    fn reduce_labeled_statement(
        &self,
        _path: &Path,
        node: &LabeledStatement,
        body: Code,
    ) -> Code {
        let label = self.identifier(node.label.as_shared_string());
        with_body(seq(vec![label, token(":"), body.rep]), body.attributes)
    }

    fn reduce_literal_boolean_expression(
        &self,
        _path: &Path,
        node: &LiteralBooleanExpression,
    ) -> Code {
        token(if node.value { "true" } else { "false" }).into()
    }

    fn reduce_literal_infinity_expression(
        &self,
        _path: &Path,
        _node: &LiteralInfinityExpression,
    ) -> Code {
        token("2e308").into()
    }

    fn reduce_literal_null_expression(&self, _path: &Path, _node: &LiteralNullExpression) -> Code {
        token("null").into()
    }

    fn reduce_literal_numeric_expression(
        &self,
        _path: &Path,
        node: &LiteralNumericExpression,
    ) -> Code {
        CodeRep::Number(node.value).into()
    }

    fn reduce_literal_reg_exp_expression(
        &self,
        _path: &Path,
        node: &LiteralRegExpExpression,
    ) -> Code {
        let flags = [
            (node.global, 'g'),
            (node.ignore_case, 'i'),
            (node.multi_line, 'm'),
            (node.unicode, 'u'),
            (node.sticky, 'y'),
        ]
        .iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, flag)| *flag)
        .collect::<String>();
        CodeRep::Token(format!("/{}/{}", node.pattern, flags).into()).into()
    }

    fn reduce_literal_string_expression(
        &self,
        _path: &Path,
        node: &LiteralStringExpression,
    ) -> Code {
        self.string_literal(&node.value).into()
    }

    fn reduce_method(
        &self,
        _path: &Path,
        node: &Method,
        name: Code,
        params: Code,
        body: Code,
    ) -> Code {
        seq(vec![
            keyword_if(node.is_async, "async"),
            keyword_if(node.is_generator, "*"),
            name.rep,
            params.rep,
            body.rep,
        ])
        .into()
    }

    fn reduce_module(
        &self,
        _path: &Path,
        _node: &Module,
        directives: Vec<Code>,
        items: Vec<Code>,
    ) -> Code {
        self.program(directives, items)
    }

    fn reduce_new_expression(
        &self,
        _path: &Path,
        node: &NewExpression,
        callee: Code,
        arguments: Vec<Code>,
    ) -> Code {
        // `new (f())` and `new f()` differ.
        let callee = if node.callee.precedence() == Precedence::Call {
            paren(callee.rep)
        } else {
            protect(callee, node.callee.precedence(), node.precedence()).rep
        };
        let arguments = if arguments.is_empty() {
            CodeRep::Empty
        } else {
            paren(self::arguments(arguments, &node.arguments))
        };
        seq(vec![token("new"), callee, arguments]).into()
    }

    fn reduce_new_target_expression(&self, _path: &Path, _node: &NewTargetExpression) -> Code {
        token("new.target").into()
    }

    fn reduce_object_assignment_target(
        &self,
        _path: &Path,
        _node: &ObjectAssignmentTarget,
        properties: Vec<Code>,
    ) -> Code {
        object_literal(properties)
    }

    fn reduce_object_binding(
        &self,
        _path: &Path,
        _node: &ObjectBinding,
        properties: Vec<Code>,
    ) -> Code {
        object_literal(properties)
    }

    fn reduce_object_expression(
        &self,
        _path: &Path,
        _node: &ObjectExpression,
        properties: Vec<Code>,
    ) -> Code {
        object_literal(properties)
    }

    fn reduce_return_statement(
        &self,
        _path: &Path,
        _node: &ReturnStatement,
        expression: Option<Code>,
    ) -> Code {
        self.terminated(vec![
            token("return"),
            optional(expression.map(|expression| expression.rep)),
        ])
    }

    fn reduce_script(
        &self,
        _path: &Path,
        _node: &Script,
        directives: Vec<Code>,
        statements: Vec<Code>,
    ) -> Code {
        self.program(directives, statements)
    }

    fn reduce_setter(
        &self,
        _path: &Path,
        _node: &Setter,
        name: Code,
        param: Code,
        body: Code,
    ) -> Code {
        seq(vec![token("set"), name.rep, paren(param.rep), body.rep]).into()
    }

    fn reduce_shorthand_property(
        &self,
        _path: &Path,
        _node: &ShorthandProperty,
        name: Code,
    ) -> Code {
        name.rep.into()
    }

    fn reduce_spread_element(
        &self,
        _path: &Path,
        node: &SpreadElement,
        expression: Code,
    ) -> Code {
        let expression = protect(expression, node.expression.precedence(), Precedence::Assignment);
        seq(vec![token("..."), expression.rep]).into()
    }

    fn reduce_static_member_assignment_target(
        &self,
        _path: &Path,
        node: &StaticMemberAssignmentTarget,
        object: Code,
    ) -> Code {
        self.static_member(object, &node.object, &node.property)
    }

    fn reduce_static_member_expression(
        &self,
        _path: &Path,
        node: &StaticMemberExpression,
        object: Code,
    ) -> Code {
        self.static_member(object, &node.object, &node.property)
    }

    fn reduce_static_property_name(&self, _path: &Path, node: &StaticPropertyName) -> Code {
        let value = node.value.as_str();
        if is_identifier_name(value) && value != "Infinity" {
            return self.identifier(&node.value).into();
        }
        if let Ok(number) = value.parse::<f64>() {
            if number.is_finite() && number >= 0. && d2a(number) == value {
                return CodeRep::Number(number).into();
            }
        }
        self.string_literal(value).into()
    }

    fn reduce_super(&self, _path: &Path, _node: &Super) -> Code {
        token("super").into()
    }

    fn reduce_switch_case(
        &self,
        _path: &Path,
        _node: &SwitchCase,
        test: Code,
        consequent: Vec<Code>,
    ) -> Code {
        seq(vec![
            token("case"),
            test.rep,
            token(":"),
            self.policy.case_body(reps(consequent)),
        ])
        .into()
    }

    fn reduce_switch_default(
        &self,
        _path: &Path,
        _node: &SwitchDefault,
        consequent: Vec<Code>,
    ) -> Code {
        seq(vec![
            token("default"),
            token(":"),
            self.policy.case_body(reps(consequent)),
        ])
        .into()
    }

    fn reduce_switch_statement(
        &self,
        _path: &Path,
        _node: &SwitchStatement,
        discriminant: Code,
        cases: Vec<Code>,
    ) -> Code {
        seq(vec![
            token("switch"),
            paren(discriminant.rep),
            self.policy.block(reps(cases)),
        ])
        .into()
    }

    fn reduce_switch_statement_with_default(
        &self,
        _path: &Path,
        _node: &SwitchStatementWithDefault,
        discriminant: Code,
        pre_default_cases: Vec<Code>,
        default_case: Code,
        post_default_cases: Vec<Code>,
    ) -> Code {
        let mut cases = reps(pre_default_cases);
        cases.push(default_case.rep);
        cases.extend(reps(post_default_cases));
        seq(vec![
            token("switch"),
            paren(discriminant.rep),
            self.policy.block(cases),
        ])
        .into()
    }

    fn reduce_template_element(&self, _path: &Path, node: &TemplateElement) -> Code {
        if self.web_safe {
            CodeRep::RawToken(safe(&node.raw_value).into()).into()
        } else {
            CodeRep::RawToken(node.raw_value.clone()).into()
        }
    }

    fn reduce_template_expression(
        &self,
        _path: &Path,
        node: &TemplateExpression,
        tag: Option<Code>,
        elements: Vec<Code>,
    ) -> Code {
        let tag = match (tag, node.tag.as_ref()) {
            (Some(tag), Some(expression)) => {
                Some(protect(tag, expression.precedence(), node.precedence()))
            }
            _ => None,
        };
        let attributes = tag
            .as_ref()
            .map_or_else(Attributes::default, |tag| tag.attributes.leading());
        let mut items: Vec<CodeRep> = tag.into_iter().map(|tag| tag.rep).collect();
        items.push(token("`"));
        let last = node.elements.len().saturating_sub(1);
        for (index, (part, code)) in node.elements.iter().zip(elements).enumerate() {
            match *part {
                TemplatePart::TemplateElement(_) => {
                    if index > 0 {
                        items.push(raw("}"));
                    }
                    items.push(code.rep);
                    if index < last {
                        items.push(raw("${"));
                    }
                }
                TemplatePart::Expression(_) => items.push(code.rep),
            }
        }
        items.push(token("`"));
        Code::new(seq(items), attributes)
    }

    fn reduce_this_expression(&self, _path: &Path, _node: &ThisExpression) -> Code {
        token("this").into()
    }

    fn reduce_throw_statement(
        &self,
        _path: &Path,
        _node: &ThrowStatement,
        expression: Code,
    ) -> Code {
        self.terminated(vec![token("throw"), expression.rep])
    }

    fn reduce_try_catch_statement(
        &self,
        _path: &Path,
        _node: &TryCatchStatement,
        body: Code,
        catch_clause: Code,
    ) -> Code {
        seq(vec![token("try"), body.rep, catch_clause.rep]).into()
    }

    fn reduce_try_finally_statement(
        &self,
        _path: &Path,
        _node: &TryFinallyStatement,
        body: Code,
        catch_clause: Option<Code>,
        finalizer: Code,
    ) -> Code {
        seq(vec![
            token("try"),
            body.rep,
            optional(catch_clause.map(|catch_clause| catch_clause.rep)),
            token("finally"),
            finalizer.rep,
        ])
        .into()
    }

    fn reduce_unary_expression(
        &self,
        _path: &Path,
        node: &UnaryExpression,
        operand: Code,
    ) -> Code {
        let operand = protect(operand, node.operand.precedence(), Precedence::Prefix);
        seq(vec![token(node.operator.as_str()), operand.rep]).into()
    }

    fn reduce_update_expression(
        &self,
        _path: &Path,
        node: &UpdateExpression,
        operand: Code,
    ) -> Code {
        let operator = token(node.operator.as_str());
        if node.is_prefix {
            seq(vec![operator, operand.rep]).into()
        } else {
            Code::new(
                seq(vec![operand.rep, operator]),
                operand.attributes.leading(),
            )
        }
    }

    fn reduce_variable_declaration(
        &self,
        _path: &Path,
        node: &VariableDeclaration,
        declarators: Vec<Code>,
    ) -> Code {
        seq(vec![
            token(node.kind.as_str()),
            comma_sep(reps(declarators)),
        ])
        .into()
    }

    fn reduce_variable_declaration_statement(
        &self,
        _path: &Path,
        _node: &VariableDeclarationStatement,
        declaration: Code,
    ) -> Code {
        self.terminated(vec![declaration.rep])
    }

    fn reduce_variable_declarator(
        &self,
        _path: &Path,
        _node: &VariableDeclarator,
        binding: Code,
        init: Option<Code>,
    ) -> Code {
        match init {
            None => binding.rep.into(),
            Some(init) => {
                let init = if init.attributes.contains_group {
                    paren(init.rep)
                } else {
                    let contains_in = init.attributes.contains_in;
                    init.rep.mark_contains_in(contains_in)
                };
                CodeRep::Init(Box::new(binding.rep), Box::new(init)).into()
            }
        }
    }

    fn reduce_while_statement(
        &self,
        _path: &Path,
        _node: &WhileStatement,
        test: Code,
        body: Code,
    ) -> Code {
        with_body(
            seq(vec![token("while"), paren(test.rep), body.rep]),
            body.attributes,
        )
    }

    fn reduce_with_statement(
        &self,
        _path: &Path,
        _node: &WithStatement,
        object: Code,
        body: Code,
    ) -> Code {
        with_body(
            seq(vec![token("with"), paren(object.rep), body.rep]),
            body.attributes,
        )
    }

    fn reduce_yield_expression(
        &self,
        _path: &Path,
        node: &YieldExpression,
        expression: Option<Code>,
    ) -> Code {
        match (expression, node.expression.as_ref()) {
            (Some(code), Some(expression)) => {
                let code = protect(code, expression.precedence(), Precedence::Assignment);
                Code::new(
                    seq(vec![token("yield"), code.rep]),
                    Attributes {
                        contains_in: code.attributes.contains_in,
                        ..Attributes::default()
                    },
                )
            }
            _ => token("yield").into(),
        }
    }

    fn reduce_yield_generator_expression(
        &self,
        _path: &Path,
        node: &YieldGeneratorExpression,
        expression: Code,
    ) -> Code {
        let expression = protect(expression, node.expression.precedence(), Precedence::Assignment);
        Code::new(
            seq(vec![token("yield"), token("*"), expression.rep]),
            Attributes {
                contains_in: expression.attributes.contains_in,
                ..Attributes::default()
            },
        )
    }
}

fn object_literal(properties: Vec<Code>) -> Code {
    Code::new(
        brace(comma_sep(reps(properties))),
        Attributes {
            starts_with_curly: true,
            ..Attributes::default()
        },
    )
}
