//! Generating JavaScript source text from an AST.
//!
//! Generation happens in two steps:
//!
//! 1. the AST is reduced, bottom-up, to a `CodeRep`, a tree of tokens in
//!    which all parentheses required by precedence and by the ambiguities
//!    of the grammar have been inserted (see `CodeGen`);
//! 2. the `CodeRep` is written to a `TokenStream`, which decides on the
//!    whitespace and semicolons required between tokens.
//!
//! Layout is entirely controlled by a `Policy`: `Compact` produces the
//! shortest text, `Pretty` one statement per line.
//!
//! `Generator::generate_with_locations` also maps each node to its span in
//! the text.

mod code_rep;
mod location;
mod policy;
mod rules;
mod token_stream;
pub mod websafe;

pub use self::code_rep::{Attributes, Code, CodeRep};
pub use self::location::{Locate, Location, Locations, NodeKey, Span};
pub use self::policy::{Compact, Policy, Pretty};
pub use self::rules::CodeGen;
pub use self::token_stream::TokenStream;

use self::websafe::WebSafetyChecker;
use crate::Error;

use jsgen_es6::ast::Program;
use jsgen_es6::{reduce_program, WrappedReducer};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Style {
    Compact,
    Pretty,
}
impl Default for Style {
    fn default() -> Self {
        Style::Compact
    }
}

/// Options for code generation.
///
/// ```
/// use jsgen::codegen::{Generator, Style};
///
/// let program = jsgen::from_json(r#"{
///     "type": "Script",
///     "directives": [],
///     "statements": [{
///         "type": "ExpressionStatement",
///         "expression": { "type": "IdentifierExpression", "name": "φ" }
///     }]
/// }"#).unwrap();
///
/// let generator = Generator {
///     web_safe: true,
///     ..Generator::default()
/// };
/// assert_eq!(generator.generate(&program).unwrap(), "\\u03C6");
///
/// let generator = Generator {
///     style: Style::Pretty,
///     ..Generator::default()
/// };
/// assert_eq!(generator.generate(&program).unwrap(), "φ;");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Generator {
    /// Compact or pretty-printed.
    pub style: Style,

    /// If `true`, produce text that may be inlined within an HTML
    /// `<script>` element, or fail if the program contains literals
    /// whose source text cannot be escaped.
    pub web_safe: bool,

    /// The text of one level of indentation, when pretty-printing.
    pub indent: String,
}
impl Default for Generator {
    fn default() -> Self {
        Generator {
            style: Style::Compact,
            web_safe: false,
            indent: "  ".to_string(),
        }
    }
}

impl Generator {
    pub fn new(style: Style) -> Self {
        Generator {
            style,
            ..Self::default()
        }
    }

    pub fn generate(&self, program: &Program) -> Result<String, Error> {
        let out = self.emit(program, false)?;
        Ok(out.finish())
    }

    /// Generate the source text of `program`, along with the span of each
    /// of its nodes within that text.
    ///
    /// ```
    /// use jsgen::codegen::Generator;
    /// use jsgen::es6::ast::*;
    ///
    /// let program = jsgen::from_json(r#"{
    ///     "type": "Script",
    ///     "directives": [],
    ///     "statements": [{
    ///         "type": "ExpressionStatement",
    ///         "expression": {
    ///             "type": "BinaryExpression",
    ///             "left": { "type": "IdentifierExpression", "name": "a" },
    ///             "operator": "+",
    ///             "right": { "type": "IdentifierExpression", "name": "b" }
    ///         }
    ///     }, {
    ///         "type": "DebuggerStatement"
    ///     }]
    /// }"#).unwrap();
    ///
    /// let (source, locations) = Generator::default().generate_with_locations(&program).unwrap();
    /// assert_eq!(source, "a+b;debugger");
    ///
    /// let statement = match program {
    ///     Program::Script(ref script) => match script.statements[0] {
    ///         Statement::ExpressionStatement(ref statement) => statement,
    ///         _ => unreachable!(),
    ///     },
    ///     _ => unreachable!(),
    /// };
    /// // The statement owns its `;`, the expression does not.
    /// let span = locations.get(&**statement).unwrap();
    /// assert_eq!(span.text(&source), "a+b;");
    /// let span = locations.get(match statement.expression {
    ///     Expression::BinaryExpression(ref binary) => &**binary,
    ///     _ => unreachable!(),
    /// }).unwrap();
    /// assert_eq!(span.text(&source), "a+b");
    /// ```
    pub fn generate_with_locations(&self, program: &Program) -> Result<(String, Locations), Error> {
        let out = self.emit(program, true)?;
        let (source, locations) = out.finish_with_locations();
        debug!(target: "codegen", "Located {} nodes", locations.len());
        Ok((source, locations))
    }

    fn emit(&self, program: &Program, locate: bool) -> Result<TokenStream, Error> {
        if self.web_safe {
            WebSafetyChecker::check(program)?;
        }
        let code: Code = match (self.style, locate) {
            (Style::Compact, false) => reduce_program(&self.rules(Compact), program),
            (Style::Pretty, false) => reduce_program(&self.rules(Pretty), program),
            (Style::Compact, true) => {
                reduce_program(&WrappedReducer::new(self.rules(Compact), Locate), program)
            }
            (Style::Pretty, true) => {
                reduce_program(&WrappedReducer::new(self.rules(Pretty), Locate), program)
            }
        };
        let mut out = TokenStream::new()
            .with_indent(&self.indent)
            .with_web_safe(self.web_safe);
        if locate {
            out = out.with_locations();
        }
        code.rep.emit(&mut out, false);
        debug!(
            target: "codegen",
            "Generated {} bytes ({:?}, web_safe: {})",
            out.location().offset,
            self.style,
            self.web_safe
        );
        Ok(out)
    }

    fn rules<P: Policy>(&self, policy: P) -> CodeGen<P> {
        if self.web_safe {
            CodeGen::web_safe(policy)
        } else {
            CodeGen::new(policy)
        }
    }
}

/// Generate the source text of `program`.
///
/// Without web-safety, generation cannot fail.
pub fn generate(program: &Program, style: Style) -> String {
    let code: Code = match style {
        Style::Compact => reduce_program(&CodeGen::new(Compact), program),
        Style::Pretty => reduce_program(&CodeGen::new(Pretty), program),
    };
    let mut out = TokenStream::new();
    code.rep.emit(&mut out, false);
    out.finish()
}
