//! A strongly-typed AST for ES2017, following the Shift AST specification.
//!
//! Every interface is a struct. Every union of interfaces is an enum whose
//! variants hold the interface (boxed for interfaces that may recurse) and
//! which implements `From` for each of its variants.
//!
//! The (de)serialization format is Shift JSON: each node is an object with a
//! `"type"` field naming the interface and camelCase field names.

use jsgen_shared::{Identifier, IdentifierName, SharedString};

use serde::{Deserialize, Serialize};

macro_rules! ast_nodes {
    ( $($name:ident,)* ) => {
        /// The kind of a node, used to name nodes in paths and diagnostics.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum ASTNode {
            $($name,)*
        }
        impl ASTNode {
            pub fn name(&self) -> &'static str {
                match *self {
                    $(ASTNode::$name => stringify!($name),)*
                }
            }

            /// All kinds of nodes, in alphabetical order.
            pub fn all() -> &'static [ASTNode] {
                &[$(ASTNode::$name,)*]
            }
        }
    }
}

ast_nodes!(
    ArrayAssignmentTarget,
    ArrayBinding,
    ArrayExpression,
    ArrowExpression,
    AssignmentExpression,
    AssignmentTargetIdentifier,
    AssignmentTargetPropertyIdentifier,
    AssignmentTargetPropertyProperty,
    AssignmentTargetWithDefault,
    AwaitExpression,
    BinaryExpression,
    BindingIdentifier,
    BindingPropertyIdentifier,
    BindingPropertyProperty,
    BindingWithDefault,
    Block,
    BlockStatement,
    BreakStatement,
    CallExpression,
    CatchClause,
    ClassDeclaration,
    ClassElement,
    ClassExpression,
    CompoundAssignmentExpression,
    ComputedMemberAssignmentTarget,
    ComputedMemberExpression,
    ComputedPropertyName,
    ConditionalExpression,
    ContinueStatement,
    DataProperty,
    DebuggerStatement,
    Directive,
    DoWhileStatement,
    EmptyStatement,
    Export,
    ExportAllFrom,
    ExportDefault,
    ExportFrom,
    ExportFromSpecifier,
    ExportLocalSpecifier,
    ExportLocals,
    ExpressionStatement,
    ForInStatement,
    ForOfStatement,
    ForStatement,
    FormalParameters,
    FunctionBody,
    FunctionDeclaration,
    FunctionExpression,
    Getter,
    IdentifierExpression,
    IfStatement,
    Import,
    ImportNamespace,
    ImportSpecifier,
    LabeledStatement,
    LiteralBooleanExpression,
    LiteralInfinityExpression,
    LiteralNullExpression,
    LiteralNumericExpression,
    LiteralRegExpExpression,
    LiteralStringExpression,
    Method,
    Module,
    NewExpression,
    NewTargetExpression,
    ObjectAssignmentTarget,
    ObjectBinding,
    ObjectExpression,
    ReturnStatement,
    Script,
    Setter,
    ShorthandProperty,
    SpreadElement,
    StaticMemberAssignmentTarget,
    StaticMemberExpression,
    StaticPropertyName,
    Super,
    SwitchCase,
    SwitchDefault,
    SwitchStatement,
    SwitchStatementWithDefault,
    TemplateElement,
    TemplateExpression,
    ThisExpression,
    ThrowStatement,
    TryCatchStatement,
    TryFinallyStatement,
    UnaryExpression,
    UpdateExpression,
    VariableDeclaration,
    VariableDeclarationStatement,
    VariableDeclarator,
    WhileStatement,
    WithStatement,
    YieldExpression,
    YieldGeneratorExpression,
);

impl std::fmt::Display for ASTNode {
    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        formatter.write_str(self.name())
    }
}

/// Implement `From<Interface>` for a sum whose variants box their interface.
macro_rules! boxed_sum {
    ( $sum:ident { $($variant:ident),* } ) => {
        $(
            impl From<$variant> for $sum {
                fn from(value: $variant) -> Self {
                    $sum::$variant(Box::new(value))
                }
            }
        )*
    }
}

/// Define an operator enum, along with its source text.
macro_rules! operators {
    (
        $(#[$outer:meta])*
        pub enum $name:ident { $($variant:ident => $text:literal,)* }
    ) => {
        $(#[$outer])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )*
        }
        impl $name {
            /// The source text of this operator.
            pub fn as_str(&self) -> &'static str {
                match *self {
                    $($name::$variant => $text,)*
                }
            }
        }
    }
}

operators!(
    pub enum BinaryOperator {
        Sequence => ",",
        LogicalOr => "||",
        LogicalAnd => "&&",
        BitOr => "|",
        BitXor => "^",
        BitAnd => "&",
        Equal => "==",
        NotEqual => "!=",
        StrictEqual => "===",
        StrictNotEqual => "!==",
        LessThan => "<",
        LessThanEqual => "<=",
        GreaterThan => ">",
        GreaterThanEqual => ">=",
        In => "in",
        Instanceof => "instanceof",
        Lsh => "<<",
        Rsh => ">>",
        Ursh => ">>>",
        Plus => "+",
        Minus => "-",
        Mul => "*",
        Div => "/",
        Mod => "%",
        Exp => "**",
    }
);

operators!(
    pub enum CompoundAssignmentOperator {
        Plus => "+=",
        Minus => "-=",
        Mul => "*=",
        Div => "/=",
        Mod => "%=",
        Exp => "**=",
        Lsh => "<<=",
        Rsh => ">>=",
        Ursh => ">>>=",
        BitOr => "|=",
        BitXor => "^=",
        BitAnd => "&=",
    }
);

operators!(
    pub enum UnaryOperator {
        Plus => "+",
        Minus => "-",
        LogicalNot => "!",
        BitNot => "~",
        Typeof => "typeof",
        Void => "void",
        Delete => "delete",
    }
);

operators!(
    pub enum UpdateOperator {
        Increment => "++",
        Decrement => "--",
    }
);

operators!(
    pub enum VariableDeclarationKind {
        Var => "var",
        Let => "let",
        Const => "const",
    }
);

// Programs

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Program {
    Script(Box<Script>),
    Module(Box<Module>),
}
boxed_sum!(Program { Script, Module });

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    pub directives: Vec<Directive>,
    pub statements: Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub directives: Vec<Directive>,
    pub items: Vec<ModuleItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModuleItem {
    ImportDeclaration(ImportDeclaration),
    ExportDeclaration(ExportDeclaration),
    Statement(Statement),
}
impl From<Statement> for ModuleItem {
    fn from(value: Statement) -> Self {
        ModuleItem::Statement(value)
    }
}
impl From<ImportDeclaration> for ModuleItem {
    fn from(value: ImportDeclaration) -> Self {
        ModuleItem::ImportDeclaration(value)
    }
}
impl From<ExportDeclaration> for ModuleItem {
    fn from(value: ExportDeclaration) -> Self {
        ModuleItem::ExportDeclaration(value)
    }
}

/// A directive, e.g. `"use strict"`. `raw_value` is the source text between the quotes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Directive {
    pub raw_value: SharedString,
}

// Bindings

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Binding {
    BindingIdentifier(Box<BindingIdentifier>),
    ObjectBinding(Box<ObjectBinding>),
    ArrayBinding(Box<ArrayBinding>),
}
boxed_sum!(Binding { BindingIdentifier, ObjectBinding, ArrayBinding });

/// A binding, optionally with a default value: a formal parameter, an array
/// binding element, or the target of a binding property.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Parameter {
    Binding(Binding),
    BindingWithDefault(Box<BindingWithDefault>),
}
impl From<Binding> for Parameter {
    fn from(value: Binding) -> Self {
        Parameter::Binding(value)
    }
}
impl From<BindingWithDefault> for Parameter {
    fn from(value: BindingWithDefault) -> Self {
        Parameter::BindingWithDefault(Box::new(value))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingIdentifier {
    pub name: Identifier,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingWithDefault {
    pub binding: Binding,
    pub init: Expression,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectBinding {
    pub properties: Vec<BindingProperty>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BindingProperty {
    BindingPropertyIdentifier(Box<BindingPropertyIdentifier>),
    BindingPropertyProperty(Box<BindingPropertyProperty>),
}
boxed_sum!(BindingProperty { BindingPropertyIdentifier, BindingPropertyProperty });

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingPropertyIdentifier {
    pub binding: BindingIdentifier,
    pub init: Option<Expression>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingPropertyProperty {
    pub name: PropertyName,
    pub binding: Parameter,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayBinding {
    /// `None` for an elision.
    pub elements: Vec<Option<Parameter>>,
    pub rest: Option<Binding>,
}

// Assignment targets

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AssignmentTarget {
    AssignmentTargetIdentifier(Box<AssignmentTargetIdentifier>),
    ComputedMemberAssignmentTarget(Box<ComputedMemberAssignmentTarget>),
    StaticMemberAssignmentTarget(Box<StaticMemberAssignmentTarget>),
    ObjectAssignmentTarget(Box<ObjectAssignmentTarget>),
    ArrayAssignmentTarget(Box<ArrayAssignmentTarget>),
}
boxed_sum!(AssignmentTarget {
    AssignmentTargetIdentifier,
    ComputedMemberAssignmentTarget,
    StaticMemberAssignmentTarget,
    ObjectAssignmentTarget,
    ArrayAssignmentTarget
});

/// The targets of compound assignments and updates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimpleAssignmentTarget {
    AssignmentTargetIdentifier(Box<AssignmentTargetIdentifier>),
    ComputedMemberAssignmentTarget(Box<ComputedMemberAssignmentTarget>),
    StaticMemberAssignmentTarget(Box<StaticMemberAssignmentTarget>),
}
boxed_sum!(SimpleAssignmentTarget {
    AssignmentTargetIdentifier,
    ComputedMemberAssignmentTarget,
    StaticMemberAssignmentTarget
});

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssignmentTargetOrDefault {
    AssignmentTarget(AssignmentTarget),
    AssignmentTargetWithDefault(Box<AssignmentTargetWithDefault>),
}
impl From<AssignmentTarget> for AssignmentTargetOrDefault {
    fn from(value: AssignmentTarget) -> Self {
        AssignmentTargetOrDefault::AssignmentTarget(value)
    }
}
impl From<AssignmentTargetWithDefault> for AssignmentTargetOrDefault {
    fn from(value: AssignmentTargetWithDefault) -> Self {
        AssignmentTargetOrDefault::AssignmentTargetWithDefault(Box::new(value))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentTargetIdentifier {
    pub name: Identifier,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedMemberAssignmentTarget {
    pub object: ExpressionOrSuper,
    pub expression: Expression,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticMemberAssignmentTarget {
    pub object: ExpressionOrSuper,
    pub property: IdentifierName,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentTargetWithDefault {
    pub binding: AssignmentTarget,
    pub init: Expression,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectAssignmentTarget {
    pub properties: Vec<AssignmentTargetProperty>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AssignmentTargetProperty {
    AssignmentTargetPropertyIdentifier(Box<AssignmentTargetPropertyIdentifier>),
    AssignmentTargetPropertyProperty(Box<AssignmentTargetPropertyProperty>),
}
boxed_sum!(AssignmentTargetProperty {
    AssignmentTargetPropertyIdentifier,
    AssignmentTargetPropertyProperty
});

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentTargetPropertyIdentifier {
    pub binding: AssignmentTargetIdentifier,
    pub init: Option<Expression>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentTargetPropertyProperty {
    pub name: PropertyName,
    pub binding: AssignmentTargetOrDefault,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayAssignmentTarget {
    /// `None` for an elision.
    pub elements: Vec<Option<AssignmentTargetOrDefault>>,
    pub rest: Option<AssignmentTarget>,
}

// Classes

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDeclaration {
    /// `*default*` for `export default class {}`.
    pub name: BindingIdentifier,
    #[serde(rename = "super")]
    pub super_: Option<Expression>,
    pub elements: Vec<ClassElement>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassExpression {
    pub name: Option<BindingIdentifier>,
    #[serde(rename = "super")]
    pub super_: Option<Expression>,
    pub elements: Vec<ClassElement>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassElement {
    pub is_static: bool,
    pub method: MethodDefinition,
}

// Modules

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ImportDeclaration {
    Import(Box<Import>),
    ImportNamespace(Box<ImportNamespace>),
}
boxed_sum!(ImportDeclaration { Import, ImportNamespace });

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Import {
    pub default_binding: Option<BindingIdentifier>,
    pub named_imports: Vec<ImportSpecifier>,
    pub module_specifier: SharedString,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportNamespace {
    pub default_binding: Option<BindingIdentifier>,
    pub namespace_binding: BindingIdentifier,
    pub module_specifier: SharedString,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSpecifier {
    pub name: Option<IdentifierName>,
    pub binding: BindingIdentifier,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExportDeclaration {
    ExportAllFrom(Box<ExportAllFrom>),
    ExportFrom(Box<ExportFrom>),
    ExportLocals(Box<ExportLocals>),
    Export(Box<Export>),
    ExportDefault(Box<ExportDefault>),
}
boxed_sum!(ExportDeclaration {
    ExportAllFrom,
    ExportFrom,
    ExportLocals,
    Export,
    ExportDefault
});

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportAllFrom {
    pub module_specifier: SharedString,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFrom {
    pub named_exports: Vec<ExportFromSpecifier>,
    pub module_specifier: SharedString,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportLocals {
    pub named_exports: Vec<ExportLocalSpecifier>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Export {
    pub declaration: ExportableDeclaration,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExportableDeclaration {
    FunctionDeclaration(Box<FunctionDeclaration>),
    ClassDeclaration(Box<ClassDeclaration>),
    VariableDeclaration(Box<VariableDeclaration>),
}
boxed_sum!(ExportableDeclaration {
    FunctionDeclaration,
    ClassDeclaration,
    VariableDeclaration
});

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDefault {
    pub body: ExportDefaultBody,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExportDefaultBody {
    Declaration(DefaultDeclaration),
    Expression(Expression),
}
impl From<Expression> for ExportDefaultBody {
    fn from(value: Expression) -> Self {
        ExportDefaultBody::Expression(value)
    }
}
impl From<DefaultDeclaration> for ExportDefaultBody {
    fn from(value: DefaultDeclaration) -> Self {
        ExportDefaultBody::Declaration(value)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DefaultDeclaration {
    FunctionDeclaration(Box<FunctionDeclaration>),
    ClassDeclaration(Box<ClassDeclaration>),
}
boxed_sum!(DefaultDeclaration { FunctionDeclaration, ClassDeclaration });

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFromSpecifier {
    pub name: IdentifierName,
    pub exported_name: Option<IdentifierName>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportLocalSpecifier {
    pub name: IdentifierExpression,
    pub exported_name: Option<IdentifierName>,
}

// Property definitions

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MethodDefinition {
    Method(Box<Method>),
    Getter(Box<Getter>),
    Setter(Box<Setter>),
}
boxed_sum!(MethodDefinition { Method, Getter, Setter });

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    pub is_async: bool,
    pub is_generator: bool,
    pub name: PropertyName,
    pub params: FormalParameters,
    pub body: FunctionBody,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Getter {
    pub name: PropertyName,
    pub body: FunctionBody,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Setter {
    pub name: PropertyName,
    pub param: Parameter,
    pub body: FunctionBody,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ObjectProperty {
    Method(Box<Method>),
    Getter(Box<Getter>),
    Setter(Box<Setter>),
    DataProperty(Box<DataProperty>),
    ShorthandProperty(Box<ShorthandProperty>),
}
boxed_sum!(ObjectProperty {
    Method,
    Getter,
    Setter,
    DataProperty,
    ShorthandProperty
});

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataProperty {
    pub name: PropertyName,
    pub expression: Expression,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShorthandProperty {
    pub name: IdentifierExpression,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PropertyName {
    ComputedPropertyName(Box<ComputedPropertyName>),
    StaticPropertyName(Box<StaticPropertyName>),
}
boxed_sum!(PropertyName { ComputedPropertyName, StaticPropertyName });

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedPropertyName {
    pub expression: Expression,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticPropertyName {
    /// The cooked value of the name.
    pub value: SharedString,
}

// Expressions

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expression {
    LiteralBooleanExpression(Box<LiteralBooleanExpression>),
    LiteralInfinityExpression(Box<LiteralInfinityExpression>),
    LiteralNullExpression(Box<LiteralNullExpression>),
    LiteralNumericExpression(Box<LiteralNumericExpression>),
    LiteralRegExpExpression(Box<LiteralRegExpExpression>),
    LiteralStringExpression(Box<LiteralStringExpression>),
    ArrayExpression(Box<ArrayExpression>),
    ArrowExpression(Box<ArrowExpression>),
    AssignmentExpression(Box<AssignmentExpression>),
    AwaitExpression(Box<AwaitExpression>),
    BinaryExpression(Box<BinaryExpression>),
    CallExpression(Box<CallExpression>),
    ClassExpression(Box<ClassExpression>),
    CompoundAssignmentExpression(Box<CompoundAssignmentExpression>),
    ComputedMemberExpression(Box<ComputedMemberExpression>),
    ConditionalExpression(Box<ConditionalExpression>),
    FunctionExpression(Box<FunctionExpression>),
    IdentifierExpression(Box<IdentifierExpression>),
    NewExpression(Box<NewExpression>),
    NewTargetExpression(Box<NewTargetExpression>),
    ObjectExpression(Box<ObjectExpression>),
    StaticMemberExpression(Box<StaticMemberExpression>),
    TemplateExpression(Box<TemplateExpression>),
    ThisExpression(Box<ThisExpression>),
    UnaryExpression(Box<UnaryExpression>),
    UpdateExpression(Box<UpdateExpression>),
    YieldExpression(Box<YieldExpression>),
    YieldGeneratorExpression(Box<YieldGeneratorExpression>),
}
boxed_sum!(Expression {
    LiteralBooleanExpression,
    LiteralInfinityExpression,
    LiteralNullExpression,
    LiteralNumericExpression,
    LiteralRegExpExpression,
    LiteralStringExpression,
    ArrayExpression,
    ArrowExpression,
    AssignmentExpression,
    AwaitExpression,
    BinaryExpression,
    CallExpression,
    ClassExpression,
    CompoundAssignmentExpression,
    ComputedMemberExpression,
    ConditionalExpression,
    FunctionExpression,
    IdentifierExpression,
    NewExpression,
    NewTargetExpression,
    ObjectExpression,
    StaticMemberExpression,
    TemplateExpression,
    ThisExpression,
    UnaryExpression,
    UpdateExpression,
    YieldExpression,
    YieldGeneratorExpression
});

/// The object of a member expression or the callee of a call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpressionOrSuper {
    Expression(Expression),
    Super(Box<Super>),
}
impl From<Expression> for ExpressionOrSuper {
    fn from(value: Expression) -> Self {
        ExpressionOrSuper::Expression(value)
    }
}
impl From<Super> for ExpressionOrSuper {
    fn from(value: Super) -> Self {
        ExpressionOrSuper::Super(Box::new(value))
    }
}

/// An element of an array literal or an argument of a call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpreadElementOrExpression {
    Expression(Expression),
    SpreadElement(Box<SpreadElement>),
}
impl From<Expression> for SpreadElementOrExpression {
    fn from(value: Expression) -> Self {
        SpreadElementOrExpression::Expression(value)
    }
}
impl From<SpreadElement> for SpreadElementOrExpression {
    fn from(value: SpreadElement) -> Self {
        SpreadElementOrExpression::SpreadElement(Box::new(value))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiteralBooleanExpression {
    pub value: bool,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct LiteralInfinityExpression {}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct LiteralNullExpression {}

/// A numeric literal. The value is finite and non-negative: `-1` is a
/// unary expression and infinity is `LiteralInfinityExpression`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiteralNumericExpression {
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiteralRegExpExpression {
    pub pattern: SharedString,
    pub global: bool,
    pub ignore_case: bool,
    pub multi_line: bool,
    pub sticky: bool,
    pub unicode: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiteralStringExpression {
    /// The cooked value of the literal.
    pub value: SharedString,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayExpression {
    /// `None` for an elision.
    pub elements: Vec<Option<SpreadElementOrExpression>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowExpression {
    pub is_async: bool,
    pub params: FormalParameters,
    pub body: ArrowBody,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArrowBody {
    Expression(Expression),
    FunctionBody(Box<FunctionBody>),
}
impl From<Expression> for ArrowBody {
    fn from(value: Expression) -> Self {
        ArrowBody::Expression(value)
    }
}
impl From<FunctionBody> for ArrowBody {
    fn from(value: FunctionBody) -> Self {
        ArrowBody::FunctionBody(Box::new(value))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentExpression {
    pub binding: AssignmentTarget,
    pub expression: Expression,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwaitExpression {
    pub expression: Expression,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryExpression {
    pub left: Expression,
    pub operator: BinaryOperator,
    pub right: Expression,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallExpression {
    pub callee: ExpressionOrSuper,
    pub arguments: Vec<SpreadElementOrExpression>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundAssignmentExpression {
    pub binding: SimpleAssignmentTarget,
    pub operator: CompoundAssignmentOperator,
    pub expression: Expression,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedMemberExpression {
    pub object: ExpressionOrSuper,
    pub expression: Expression,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalExpression {
    pub test: Expression,
    pub consequent: Expression,
    pub alternate: Expression,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionExpression {
    pub is_async: bool,
    pub is_generator: bool,
    pub name: Option<BindingIdentifier>,
    pub params: FormalParameters,
    pub body: FunctionBody,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierExpression {
    pub name: Identifier,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpression {
    pub callee: Expression,
    pub arguments: Vec<SpreadElementOrExpression>,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct NewTargetExpression {}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectExpression {
    pub properties: Vec<ObjectProperty>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticMemberExpression {
    pub object: ExpressionOrSuper,
    pub property: IdentifierName,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateExpression {
    pub tag: Option<Expression>,
    /// Alternates template elements and expressions, starting and ending
    /// with a template element.
    pub elements: Vec<TemplatePart>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemplatePart {
    Expression(Expression),
    TemplateElement(Box<TemplateElement>),
}
impl From<Expression> for TemplatePart {
    fn from(value: Expression) -> Self {
        TemplatePart::Expression(value)
    }
}
impl From<TemplateElement> for TemplatePart {
    fn from(value: TemplateElement) -> Self {
        TemplatePart::TemplateElement(Box::new(value))
    }
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct ThisExpression {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnaryExpression {
    pub operator: UnaryOperator,
    pub operand: Expression,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExpression {
    pub is_prefix: bool,
    pub operator: UpdateOperator,
    pub operand: SimpleAssignmentTarget,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldExpression {
    pub expression: Option<Expression>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldGeneratorExpression {
    pub expression: Expression,
}

// Statements

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Statement {
    BlockStatement(Box<BlockStatement>),
    BreakStatement(Box<BreakStatement>),
    ClassDeclaration(Box<ClassDeclaration>),
    ContinueStatement(Box<ContinueStatement>),
    DebuggerStatement(Box<DebuggerStatement>),
    DoWhileStatement(Box<DoWhileStatement>),
    EmptyStatement(Box<EmptyStatement>),
    ExpressionStatement(Box<ExpressionStatement>),
    ForInStatement(Box<ForInStatement>),
    ForOfStatement(Box<ForOfStatement>),
    ForStatement(Box<ForStatement>),
    FunctionDeclaration(Box<FunctionDeclaration>),
    IfStatement(Box<IfStatement>),
    LabeledStatement(Box<LabeledStatement>),
    ReturnStatement(Box<ReturnStatement>),
    SwitchStatement(Box<SwitchStatement>),
    SwitchStatementWithDefault(Box<SwitchStatementWithDefault>),
    ThrowStatement(Box<ThrowStatement>),
    TryCatchStatement(Box<TryCatchStatement>),
    TryFinallyStatement(Box<TryFinallyStatement>),
    VariableDeclarationStatement(Box<VariableDeclarationStatement>),
    WhileStatement(Box<WhileStatement>),
    WithStatement(Box<WithStatement>),
}
boxed_sum!(Statement {
    BlockStatement,
    BreakStatement,
    ClassDeclaration,
    ContinueStatement,
    DebuggerStatement,
    DoWhileStatement,
    EmptyStatement,
    ExpressionStatement,
    ForInStatement,
    ForOfStatement,
    ForStatement,
    FunctionDeclaration,
    IfStatement,
    LabeledStatement,
    ReturnStatement,
    SwitchStatement,
    SwitchStatementWithDefault,
    ThrowStatement,
    TryCatchStatement,
    TryFinallyStatement,
    VariableDeclarationStatement,
    WhileStatement,
    WithStatement
});

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub statements: Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockStatement {
    pub block: Block,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakStatement {
    pub label: Option<Identifier>,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinueStatement {
    pub label: Option<Identifier>,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct DebuggerStatement {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoWhileStatement {
    pub body: Statement,
    pub test: Expression,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct EmptyStatement {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionStatement {
    pub expression: Expression,
}

/// The left-hand side of `for-in` and `for-of`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ForInOfBinding {
    AssignmentTarget(AssignmentTarget),
    VariableDeclaration(Box<VariableDeclaration>),
}
impl From<AssignmentTarget> for ForInOfBinding {
    fn from(value: AssignmentTarget) -> Self {
        ForInOfBinding::AssignmentTarget(value)
    }
}
impl From<VariableDeclaration> for ForInOfBinding {
    fn from(value: VariableDeclaration) -> Self {
        ForInOfBinding::VariableDeclaration(Box::new(value))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForInStatement {
    pub left: ForInOfBinding,
    pub right: Expression,
    pub body: Statement,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForOfStatement {
    pub left: ForInOfBinding,
    pub right: Expression,
    pub body: Statement,
}

/// The `init` part of a `for (init; test; update)` statement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ForInit {
    Expression(Expression),
    VariableDeclaration(Box<VariableDeclaration>),
}
impl From<Expression> for ForInit {
    fn from(value: Expression) -> Self {
        ForInit::Expression(value)
    }
}
impl From<VariableDeclaration> for ForInit {
    fn from(value: VariableDeclaration) -> Self {
        ForInit::VariableDeclaration(Box::new(value))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForStatement {
    pub init: Option<ForInit>,
    pub test: Option<Expression>,
    pub update: Option<Expression>,
    pub body: Statement,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDeclaration {
    pub is_async: bool,
    pub is_generator: bool,
    /// `*default*` for `export default function () {}`.
    pub name: BindingIdentifier,
    pub params: FormalParameters,
    pub body: FunctionBody,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IfStatement {
    pub test: Expression,
    pub consequent: Statement,
    pub alternate: Option<Statement>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabeledStatement {
    pub label: Identifier,
    pub body: Statement,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnStatement {
    pub expression: Option<Expression>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchStatement {
    pub discriminant: Expression,
    pub cases: Vec<SwitchCase>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchStatementWithDefault {
    pub discriminant: Expression,
    pub pre_default_cases: Vec<SwitchCase>,
    pub default_case: SwitchDefault,
    pub post_default_cases: Vec<SwitchCase>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThrowStatement {
    pub expression: Expression,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TryCatchStatement {
    pub body: Block,
    pub catch_clause: CatchClause,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TryFinallyStatement {
    pub body: Block,
    pub catch_clause: Option<CatchClause>,
    pub finalizer: Block,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDeclarationStatement {
    pub declaration: VariableDeclaration,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhileStatement {
    pub test: Expression,
    pub body: Statement,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithStatement {
    pub object: Expression,
    pub body: Statement,
}

// Other nodes

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatchClause {
    pub binding: Binding,
    pub body: Block,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormalParameters {
    pub items: Vec<Parameter>,
    pub rest: Option<Binding>,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionBody {
    pub directives: Vec<Directive>,
    pub statements: Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpreadElement {
    pub expression: Expression,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Super {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchCase {
    pub test: Expression,
    pub consequent: Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchDefault {
    pub consequent: Vec<Statement>,
}

/// A chunk of a template, e.g. `a` and `b` in `` `a${x}b` ``. `raw_value` is the
/// source text of the chunk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateElement {
    pub raw_value: SharedString,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDeclaration {
    pub kind: VariableDeclarationKind,
    pub declarators: Vec<VariableDeclarator>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDeclarator {
    pub binding: Binding,
    pub init: Option<Expression>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ast_node_names() {
        assert_eq!(ASTNode::YieldGeneratorExpression.name(), "YieldGeneratorExpression");
        assert_eq!(format!("{}", ASTNode::Script), "Script");
        assert_eq!(ASTNode::all().len(), 97);
        let mut sorted = ASTNode::all().to_vec();
        sorted.sort_by_key(|kind| kind.name());
        assert_eq!(sorted.as_slice(), ASTNode::all());
    }

    #[test]
    fn test_operator_text() {
        assert_eq!(BinaryOperator::Sequence.as_str(), ",");
        assert_eq!(BinaryOperator::Instanceof.as_str(), "instanceof");
        assert_eq!(CompoundAssignmentOperator::Ursh.as_str(), ">>>=");
        assert_eq!(UnaryOperator::Typeof.as_str(), "typeof");
        assert_eq!(VariableDeclarationKind::Const.as_str(), "const");
    }

    #[test]
    fn test_from_conversions() {
        let expr: Expression = IdentifierExpression {
            name: "a".into(),
        }
        .into();
        let statement: Statement = ExpressionStatement { expression: expr }.into();
        match statement {
            Statement::ExpressionStatement(ref statement) => match statement.expression {
                Expression::IdentifierExpression(ref id) => assert_eq!(id.name, "a"),
                ref other => panic!("Unexpected expression {:?}", other),
            },
            ref other => panic!("Unexpected statement {:?}", other),
        }
    }
}
