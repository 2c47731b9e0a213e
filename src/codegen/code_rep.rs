//! An intermediate representation of source text: a tree of tokens
//! annotated with the grouping decisions taken by the generator.

use super::location::NodeKey;
use super::token_stream::TokenStream;

use jsgen_shared::SharedString;

#[derive(Clone, Debug, PartialEq)]
pub enum CodeRep {
    Empty,
    Token(SharedString),

    /// Appended verbatim, e.g. the chunks of a template.
    RawToken(SharedString),
    Number(f64),
    Seq(Vec<CodeRep>),

    /// Items separated by `,`.
    CommaSep(Vec<CodeRep>),
    Paren(Box<CodeRep>),
    Bracket(Box<CodeRep>),
    Brace(Box<CodeRep>),

    /// Any `in` operator within this node must be parenthesized, e.g. the
    /// initializer of a `for (init; ...)` loop.
    NoIn(Box<CodeRep>),

    /// A node containing an `in` operator, parenthesized if it appears
    /// inside a `NoIn`.
    ContainsIn(Box<CodeRep>),

    /// `lhs = rhs` in a variable declarator.
    Init(Box<CodeRep>, Box<CodeRep>),

    /// A `;` that may never be elided.
    Semi,

    /// A `;` that may be elided before a `}` or at the end of the text.
    SemiOp,

    /// A string literal used as an expression statement. It must be
    /// parenthesized if it starts a body, lest it be read as a directive.
    /// The statement terminator is not part of this node.
    StringStatement {
        expr: Box<CodeRep>,
        directive_position: bool,
    },

    /// Start the next token on a new line.
    Line,

    /// Indent the lines started within.
    Indent(Box<CodeRep>),

    /// The text of `node`, whose span is recorded while emitting.
    Located { node: NodeKey, rep: Box<CodeRep> },
}

impl CodeRep {
    pub fn token(text: &'static str) -> Self {
        CodeRep::Token(SharedString::from_str(text))
    }

    /// Wrap in `ContainsIn` if `contains_in`.
    pub fn mark_contains_in(self, contains_in: bool) -> Self {
        if contains_in {
            CodeRep::ContainsIn(Box::new(self))
        } else {
            self
        }
    }

    /// If this is a string statement, possibly followed by its terminator,
    /// mark it as the first statement of a body.
    pub fn mark_directive_position(&mut self) {
        match *self {
            CodeRep::StringStatement {
                ref mut directive_position,
                ..
            } => *directive_position = true,
            CodeRep::Seq(ref mut items) => {
                if let Some(first) = items.first_mut() {
                    first.mark_directive_position()
                }
            }
            CodeRep::Located { ref mut rep, .. } => rep.mark_directive_position(),
            _ => {}
        }
    }

    /// Turn `(x)` into `x`, e.g. for the parameters of `x => x`.
    pub fn strip_parens(self) -> Self {
        match self {
            CodeRep::Located { node, rep } => CodeRep::Located {
                node,
                rep: Box::new(rep.strip_parens()),
            },
            CodeRep::Paren(inner) => match *inner {
                CodeRep::CommaSep(mut items) if items.len() == 1 => items.remove(0),
                inner => inner,
            },
            rep => rep,
        }
    }

    /// Write the tokens of this node.
    ///
    /// `no_in` is `true` within the head of a `for` loop, where an `in`
    /// operator that is not nested in some brackets must be parenthesized.
    pub fn emit(&self, out: &mut TokenStream, no_in: bool) {
        use self::CodeRep::*;
        match *self {
            Empty => {}
            Token(ref text) => out.put(text),
            RawToken(ref text) => out.put_raw(text),
            Number(value) => out.put_number(value),
            Seq(ref items) => {
                for item in items {
                    item.emit(out, no_in);
                }
            }
            CommaSep(ref items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        out.put(",");
                    }
                    item.emit(out, no_in);
                }
            }
            Paren(ref inner) => {
                out.put("(");
                inner.emit(out, false);
                out.put(")");
            }
            Bracket(ref inner) => {
                out.put("[");
                inner.emit(out, false);
                out.put("]");
            }
            Brace(ref inner) => {
                out.put("{");
                inner.emit(out, false);
                out.put("}");
            }
            NoIn(ref inner) => inner.emit(out, true),
            ContainsIn(ref inner) => {
                if no_in {
                    out.put("(");
                    inner.emit(out, false);
                    out.put(")");
                } else {
                    inner.emit(out, false);
                }
            }
            Init(ref lhs, ref rhs) => {
                lhs.emit(out, false);
                out.put("=");
                rhs.emit(out, no_in);
            }
            Semi => out.put(";"),
            SemiOp => out.put_optional_semi(),
            StringStatement {
                ref expr,
                directive_position,
            } => {
                if directive_position {
                    out.put("(");
                    expr.emit(out, false);
                    out.put(")");
                } else {
                    expr.emit(out, false);
                }
            }
            Line => out.line(),
            Indent(ref inner) => {
                out.indent();
                inner.emit(out, no_in);
                out.dedent();
            }
            Located { node, ref rep } => {
                out.start_node(node);
                rep.emit(out, no_in);
                out.finish_node();
            }
        }
    }
}

/// Facts about a `CodeRep` that the rules of enclosing nodes depend on.
///
/// The `starts_with_*` flags describe the first token and are only
/// inherited through the leftmost operand of an expression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    /// Starts with `function`, `async function` or `class`.
    pub starts_with_function_or_class: bool,

    /// Starts with the `{` of an object literal or pattern.
    pub starts_with_curly: bool,

    /// Starts with `let [`.
    pub starts_with_let_bracket: bool,

    /// Starts with the identifier `let`.
    pub starts_with_let: bool,

    /// Contains an `in` operator that is not nested in brackets.
    pub contains_in: bool,

    /// Is a sequence expression.
    pub contains_group: bool,

    /// Is a statement ending with an `if` without `else`, which would
    /// capture a following `else`.
    pub ends_with_missing_else: bool,
}

impl Attributes {
    pub fn starts_with_function_or_curly(&self) -> bool {
        self.starts_with_function_or_class || self.starts_with_curly || self.starts_with_let_bracket
    }

    /// Keep only the flags describing the first token.
    pub fn leading(&self) -> Attributes {
        Attributes {
            starts_with_function_or_class: self.starts_with_function_or_class,
            starts_with_curly: self.starts_with_curly,
            starts_with_let_bracket: self.starts_with_let_bracket,
            starts_with_let: self.starts_with_let,
            ..Attributes::default()
        }
    }
}

/// The result of generating code for a node.
#[derive(Clone, Debug, PartialEq)]
pub struct Code {
    pub rep: CodeRep,
    pub attributes: Attributes,
}

impl Code {
    pub fn new(rep: CodeRep, attributes: Attributes) -> Self {
        Code { rep, attributes }
    }
}

impl From<CodeRep> for Code {
    fn from(rep: CodeRep) -> Self {
        Code {
            rep,
            attributes: Attributes::default(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn emit(rep: &CodeRep) -> String {
        let mut out = TokenStream::new();
        rep.emit(&mut out, false);
        out.finish()
    }

    fn contains_in() -> CodeRep {
        CodeRep::ContainsIn(Box::new(CodeRep::Seq(vec![
            CodeRep::token("a"),
            CodeRep::token("in"),
            CodeRep::token("b"),
        ])))
    }

    #[test]
    fn test_contains_in_only_parenthesized_in_no_in() {
        assert_eq!(emit(&contains_in()), "a in b");
        assert_eq!(emit(&CodeRep::NoIn(Box::new(contains_in()))), "(a in b)");
        let bracketed = CodeRep::NoIn(Box::new(CodeRep::Bracket(Box::new(contains_in()))));
        assert_eq!(emit(&bracketed), "[a in b]");
        let init = CodeRep::NoIn(Box::new(CodeRep::Init(
            Box::new(CodeRep::token("x")),
            Box::new(contains_in()),
        )));
        assert_eq!(emit(&init), "x=(a in b)");
    }

    #[test]
    fn test_directive_position() {
        let mut statement = CodeRep::Seq(vec![
            CodeRep::StringStatement {
                expr: Box::new(CodeRep::token("\"use strict\"")),
                directive_position: false,
            },
            CodeRep::SemiOp,
        ]);
        assert_eq!(emit(&statement), "\"use strict\"");
        statement.mark_directive_position();
        assert_eq!(emit(&statement), "(\"use strict\")");
    }

    #[test]
    fn test_comma_sep_and_numbers() {
        let rep = CodeRep::Bracket(Box::new(CodeRep::CommaSep(vec![
            CodeRep::Number(1000.),
            CodeRep::Empty,
            CodeRep::Number(0.25),
        ])));
        assert_eq!(emit(&rep), "[1e3,,.25]");
    }

    #[test]
    fn test_leading_attributes() {
        let attributes = Attributes {
            starts_with_curly: true,
            contains_in: true,
            ends_with_missing_else: true,
            ..Attributes::default()
        };
        assert!(attributes.starts_with_function_or_curly());
        assert_eq!(
            attributes.leading(),
            Attributes {
                starts_with_curly: true,
                ..Attributes::default()
            }
        );
    }

    #[test]
    fn test_strip_parens() {
        let single = CodeRep::Paren(Box::new(CodeRep::CommaSep(vec![CodeRep::token("x")])));
        assert_eq!(single.strip_parens(), CodeRep::token("x"));
        let pair = CodeRep::Paren(Box::new(CodeRep::CommaSep(vec![
            CodeRep::token("x"),
            CodeRep::token("y"),
        ])));
        assert_eq!(emit(&pair.strip_parens()), "x,y");
    }
}
