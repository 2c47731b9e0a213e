//! The ES2017 AST and the machinery to reduce it.
//!
//! - module `ast` defines the tree, following the Shift AST specification;
//! - module `precedence` defines the binding strength of expressions;
//! - module `reduce` defines reducers, i.e. bottom-up folds over the tree;
//! - module `director` walks a tree and feeds a reducer.

#[macro_use]
extern crate derive_more;
extern crate itertools;
extern crate jsgen_shared;
#[macro_use]
extern crate log;
extern crate serde;

pub mod ast;

/// Counting nodes.
pub mod count;

pub mod director;

pub mod precedence;

pub mod reduce;

pub use crate::director::{reduce_program, Director};
pub use crate::reduce::{Monoid, MonoidalReducer, NodeRef, Path, Reducer, Wrap, WrappedReducer};
