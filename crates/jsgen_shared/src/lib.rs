//! Data structures shared by the AST and the code generator.

extern crate itertools;
#[macro_use]
extern crate log;
extern crate serde;

pub mod ast;
#[macro_use]
mod shared_string;
pub use crate::shared_string::SharedString;

shared_string!(
    /// The name of a binding, reference or label, e.g. `foo` in `let foo`.
    pub Identifier
);
shared_string!(
    /// A name that is not a binding, e.g. `bar` in `foo.bar` or in `export { foo as bar }`.
    pub IdentifierName
);
