//! Tracking where each node ends up in the generated text.
//!
//! Every rule result is wrapped in a `CodeRep::Located` (see `Locate`).
//! While emitting, the `TokenStream` records the location of the first
//! token written within each `Located` and the location following its
//! last token.

use super::code_rep::{Code, CodeRep};

use jsgen_es6::ast::ASTNode;
use jsgen_es6::{NodeRef, Path, Wrap};

use std::collections::HashMap;

/// A position in the generated text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    /// Starting at 1.
    pub line: usize,

    /// Bytes since the start of the line.
    pub column: usize,

    /// Bytes since the start of the text.
    pub offset: usize,
}

impl Location {
    fn advance(&mut self, bytes: usize) {
        self.column += bytes;
        self.offset += bytes;
    }
}

/// The text of a node, from its first byte to the byte following its last.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Location,
    pub end: Location,
}

impl Span {
    /// The generated text of the node.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start.offset..self.end.offset]
    }
}

/// Identifies a node of the AST being generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeKey {
    pub kind: ASTNode,
    address: usize,
}

impl<'a> From<NodeRef<'a>> for NodeKey {
    fn from(node: NodeRef<'a>) -> Self {
        NodeKey {
            kind: node.kind(),
            address: node.address(),
        }
    }
}

impl NodeKey {
    /// Statements may own a `;` written only once the next token is known.
    fn owns_semicolon(&self) -> bool {
        use jsgen_es6::ast::ASTNode::*;
        match self.kind {
            BlockStatement
            | BreakStatement
            | ClassDeclaration
            | ContinueStatement
            | DebuggerStatement
            | DoWhileStatement
            | EmptyStatement
            | ExpressionStatement
            | ForInStatement
            | ForOfStatement
            | ForStatement
            | FunctionDeclaration
            | IfStatement
            | LabeledStatement
            | ReturnStatement
            | SwitchStatement
            | SwitchStatementWithDefault
            | ThrowStatement
            | TryCatchStatement
            | TryFinallyStatement
            | VariableDeclarationStatement
            | WhileStatement
            | WithStatement
            | Import
            | ImportNamespace
            | Export
            | ExportAllFrom
            | ExportDefault
            | ExportFrom
            | ExportLocals
            | Directive
            | SwitchCase
            | SwitchDefault => true,
            _ => false,
        }
    }
}

/// Wraps the result of each rule of a `CodeGen` in a `CodeRep::Located`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Locate;

impl Wrap<Code> for Locate {
    fn wrap(&self, _path: &Path, node: NodeRef, code: Code) -> Code {
        Code::new(
            CodeRep::Located {
                node: NodeKey::from(node),
                rep: Box::new(code.rep),
            },
            code.attributes,
        )
    }
}

struct Entry {
    node: NodeKey,
    start: Option<Location>,
    end: Option<Location>,
}

/// The bookkeeping of a `TokenStream` that tracks locations.
#[derive(Default)]
pub(super) struct Tracker {
    /// One entry per node, in the order in which they were entered.
    entries: Vec<Entry>,

    /// The nodes being emitted, innermost last.
    open: Vec<usize>,

    /// The nodes entered since the last token.
    starting: Vec<usize>,

    /// The statements finished since the last token.
    finishing: Vec<usize>,

    /// The number literal finished just before the current position.
    last_number: Option<usize>,
}

impl Tracker {
    pub fn enter(&mut self, node: NodeKey) {
        let index = self.entries.len();
        self.entries.push(Entry {
            node,
            start: None,
            end: None,
        });
        self.open.push(index);
        self.starting.push(index);
    }

    pub fn exit(&mut self, here: Location) {
        let index = match self.open.pop() {
            Some(index) => index,
            None => panic!("Could not exit a node, none was entered"),
        };
        // A node without any token starts where it ends.
        if let Some(position) = self.starting.iter().position(|i| *i == index) {
            self.starting.remove(position);
            self.entries[index].start = Some(here);
        }
        self.entries[index].end = Some(here);
        let node = self.entries[index].node;
        if node.owns_semicolon() {
            self.finishing.push(index);
        } else if node.kind == ASTNode::LiteralNumericExpression {
            self.last_number = Some(index);
        }
    }

    /// A token is written at `here`.
    pub fn token(&mut self, here: Location) {
        for index in self.starting.drain(..) {
            self.entries[index].start = Some(here);
        }
        self.finishing.clear();
        self.last_number = None;
    }

    /// The `;` owed by the statements just finished is written.
    pub fn semicolon(&mut self) {
        for index in &self.finishing {
            if let Some(ref mut end) = self.entries[*index].end {
                end.advance(1);
            }
        }
    }

    /// The number just finished turns out to end with `.`, e.g. `1..x`.
    pub fn dot_after_number(&mut self) {
        if let Some(index) = self.last_number.take() {
            if let Some(ref mut end) = self.entries[index].end {
                end.advance(1);
            }
        }
    }

    pub fn into_locations(self) -> Locations {
        let spans: Vec<(NodeKey, Span)> = self
            .entries
            .into_iter()
            .filter_map(|entry| match (entry.start, entry.end) {
                (Some(start), Some(end)) => Some((entry.node, Span { start, end })),
                _ => None,
            })
            .collect();
        let mut index = HashMap::with_capacity(spans.len());
        for (position, (node, _)) in spans.iter().enumerate() {
            index
                .entry(*node)
                .and_modify(|found| *found = None)
                .or_insert(Some(position));
        }
        Locations { spans, index }
    }
}

/// The span of each node in the generated text.
///
/// Nodes are looked up by identity: the `Program` passed to the generator
/// must be the one queried. Nodes without fields (e.g. `this`, `super`,
/// `;`) are zero-sized, so several of them may share an identity. Such
/// nodes are only visible through `iter`.
#[derive(Clone, Debug, Default)]
pub struct Locations {
    spans: Vec<(NodeKey, Span)>,

    /// `None` if several nodes share the key.
    index: HashMap<NodeKey, Option<usize>>,
}

impl Locations {
    pub fn get<'a, N>(&self, node: N) -> Option<Span>
    where
        N: Into<NodeRef<'a>>,
    {
        let key = NodeKey::from(node.into());
        match self.index.get(&key) {
            Some(&Some(position)) => Some(self.spans[position].1),
            _ => None,
        }
    }

    /// All nodes, outermost first, in source order.
    pub fn iter(&self) -> impl Iterator<Item = (ASTNode, Span)> + '_ {
        self.spans.iter().map(|(node, span)| (node.kind, *span))
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}
