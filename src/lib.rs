//! Turning an ES2017 AST back into JavaScript source text.
//!
//! # About jsgen
//!
//! Tools that rewrite JavaScript (minifiers, bundlers, instrumenters) work on
//! an AST, and eventually need to print it back. The text must parse back to
//! the same AST: every parenthesis required by operator precedence or by the
//! ambiguities of the grammar must be present, while the compact output
//! should contain nothing more.
//!
//! # Layers
//!
//! - the AST, in the Shift format, and its reducers (see module `es6`);
//! - the code generator (see module `codegen`);
//! - lexical helpers for numbers, strings and identifiers (see module `util`).
//!
//! ```
//! use jsgen::codegen::{generate, Style};
//! use jsgen::es6::ast::*;
//!
//! let sum = BinaryExpression {
//!     left: LiteralNumericExpression { value: 1. }.into(),
//!     operator: BinaryOperator::Plus,
//!     right: LiteralNumericExpression { value: 2. }.into(),
//! };
//! let product = BinaryExpression {
//!     left: sum.into(),
//!     operator: BinaryOperator::Mul,
//!     right: LiteralNumericExpression { value: 3. }.into(),
//! };
//! let program: Program = Script {
//!     directives: vec![],
//!     statements: vec![ExpressionStatement { expression: product.into() }.into()],
//! }
//! .into();
//!
//! assert_eq!(generate(&program, Style::Compact), "(1+2)*3");
//! assert_eq!(generate(&program, Style::Pretty), "(1+2)*3;");
//! ```

extern crate jsgen_es6;
extern crate jsgen_shared;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
#[cfg(test)]
extern crate env_logger;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate serde;
extern crate serde_json;
extern crate unicode_xid;

pub mod es6 {
    pub use jsgen_es6::*;
}

pub mod shared {
    pub use jsgen_shared::*;
}

/// Generating source text.
pub mod codegen;

/// Misc utilities.
pub mod util;

use jsgen_es6::ast::{ASTNode, Program};
use jsgen_es6::Path;

#[derive(Debug)]
pub enum Error {
    /// The source is not a valid Shift AST.
    Json(serde_json::Error),

    /// A node whose source text cannot be inlined within an HTML
    /// `<script>` element.
    WebSafety {
        path: String,
        kind: ASTNode,
        reason: &'static str,
    },
}

impl Error {
    pub fn web_safety(path: &Path, kind: ASTNode, reason: &'static str) -> Self {
        Error::WebSafety {
            path: format!("{:?}", path),
            kind,
            reason,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::Json(ref err) => write!(f, "Invalid AST: {}", err),
            Error::WebSafety {
                ref path,
                kind,
                reason,
            } => write!(f, "{:?} at {} is not web-safe: {}", kind, path, reason),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::Json(ref err) => Some(err),
            Error::WebSafety { .. } => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

/// Load a program from its Shift JSON representation.
pub fn from_json(source: &str) -> Result<Program, Error> {
    let program = serde_json::from_str(source)?;
    debug!(target: "jsgen", "Loaded program from {} bytes of JSON", source.len());
    Ok(program)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_json_rejects_unknown_nodes() {
        let _ = env_logger::try_init();
        assert!(from_json(r#"{"type": "Script", "directives": [], "statements": []}"#).is_ok());
        assert_matches!(
            from_json(r#"{"type": "Program", "body": []}"#),
            Err(Error::Json(_))
        );
    }
}
