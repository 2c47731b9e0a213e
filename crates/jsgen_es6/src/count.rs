//! Counting the nodes of an AST, per kind of node.

use crate::ast::{ASTNode, Program};
use crate::director::reduce_program;
use crate::reduce::{Monoid, MonoidalReducer, Path};

use std::collections::BTreeMap;

use itertools::Itertools;

/// A newtype for `usize` used to count the number of nodes.
#[derive(
    Debug, Default, Display, From, Into, Add, AddAssign, Clone, Copy, PartialEq, Eq, PartialOrd, Ord,
)]
pub struct NodeCount(usize);

impl std::iter::Sum for NodeCount {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = NodeCount>,
    {
        iter.fold(Default::default(), std::ops::Add::add)
    }
}

impl Monoid for NodeCount {
    fn empty() -> Self {
        NodeCount(0)
    }
    fn append(self, other: Self) -> Self {
        self + other
    }
}

/// The number of nodes of each kind in a subtree.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NodeCounts {
    per_kind: BTreeMap<ASTNode, NodeCount>,
}
impl NodeCounts {
    /// The number of nodes of kind `kind`.
    pub fn get(&self, kind: ASTNode) -> NodeCount {
        self.per_kind.get(&kind).cloned().unwrap_or_default()
    }

    /// The number of nodes, all kinds included.
    pub fn total(&self) -> NodeCount {
        self.per_kind.values().cloned().sum()
    }

    /// The kinds that appear at least once, with their count, in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (ASTNode, NodeCount)> + '_ {
        self.per_kind.iter().map(|(kind, count)| (*kind, *count))
    }
}

impl Monoid for NodeCounts {
    fn empty() -> Self {
        Self::default()
    }
    fn append(mut self, other: Self) -> Self {
        for (kind, count) in other.per_kind {
            *self.per_kind.entry(kind).or_default() += count;
        }
        self
    }
}

impl std::fmt::Display for NodeCounts {
    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(
            formatter,
            "{}",
            self.iter()
                .map(|(kind, count)| format!("{}: {}", kind, count))
                .format(", ")
        )
    }
}

/// A reducer counting nodes.
pub struct NodeCounter;

impl MonoidalReducer for NodeCounter {
    type State = NodeCounts;
    fn node(&self, _path: &Path, kind: ASTNode, children: NodeCounts) -> NodeCounts {
        let mut per_kind = BTreeMap::new();
        per_kind.insert(kind, NodeCount(1));
        children.append(NodeCounts { per_kind })
    }
}

impl NodeCounter {
    pub fn count(program: &Program) -> NodeCounts {
        let counts = reduce_program(&NodeCounter, program);
        debug!(target: "count", "{} nodes: {}", counts.total(), counts);
        counts
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ast::*;

    #[test]
    fn test_count_nodes() {
        // var a = b, c;
        let program: Program = Script {
            directives: vec![],
            statements: vec![VariableDeclarationStatement {
                declaration: VariableDeclaration {
                    kind: VariableDeclarationKind::Var,
                    declarators: vec![
                        VariableDeclarator {
                            binding: BindingIdentifier { name: "a".into() }.into(),
                            init: Some(IdentifierExpression { name: "b".into() }.into()),
                        },
                        VariableDeclarator {
                            binding: BindingIdentifier { name: "c".into() }.into(),
                            init: None,
                        },
                    ],
                },
            }
            .into()],
        }
        .into();
        let counts = NodeCounter::count(&program);
        assert_eq!(counts.total(), NodeCount::from(8));
        assert_eq!(counts.get(ASTNode::BindingIdentifier), NodeCount::from(2));
        assert_eq!(counts.get(ASTNode::VariableDeclarator), NodeCount::from(2));
        assert_eq!(counts.get(ASTNode::Module), NodeCount::from(0));
        assert_eq!(counts.iter().count(), 6);
        assert_eq!(
            format!("{}", counts),
            "BindingIdentifier: 2, IdentifierExpression: 1, Script: 1, \
             VariableDeclaration: 1, VariableDeclarationStatement: 1, VariableDeclarator: 2"
        );
    }
}
