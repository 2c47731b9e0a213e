//! Layout policies: where statements start and how they are terminated.
//!
//! Policies only ever add whitespace or turn elidable semicolons into
//! mandatory ones, so all of them produce text with the same AST.

use super::code_rep::CodeRep;

pub trait Policy {
    /// The terminator of a statement whose `;` may be elided.
    fn semi_op(&self) -> CodeRep;

    /// A `{ ... }` holding statements, class elements or switch cases.
    fn block(&self, items: Vec<CodeRep>) -> CodeRep;

    /// The top-level items of a script or module.
    fn lines(&self, items: Vec<CodeRep>) -> CodeRep;

    /// The statements following `case x:` or `default:`.
    fn case_body(&self, items: Vec<CodeRep>) -> CodeRep;
}

/// The shortest text.
#[derive(Clone, Copy, Debug, Default)]
pub struct Compact;

impl Policy for Compact {
    fn semi_op(&self) -> CodeRep {
        CodeRep::SemiOp
    }
    fn block(&self, items: Vec<CodeRep>) -> CodeRep {
        CodeRep::Brace(Box::new(CodeRep::Seq(items)))
    }
    fn lines(&self, items: Vec<CodeRep>) -> CodeRep {
        CodeRep::Seq(items)
    }
    fn case_body(&self, items: Vec<CodeRep>) -> CodeRep {
        CodeRep::Seq(items)
    }
}

/// One statement per line, with indented blocks and explicit semicolons.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pretty;

impl Pretty {
    fn each_on_its_line(items: Vec<CodeRep>) -> Vec<CodeRep> {
        let mut result = Vec::with_capacity(items.len() * 2);
        for item in items {
            result.push(CodeRep::Line);
            result.push(item);
        }
        result
    }
}

impl Policy for Pretty {
    fn semi_op(&self) -> CodeRep {
        CodeRep::Semi
    }
    fn block(&self, items: Vec<CodeRep>) -> CodeRep {
        if items.is_empty() {
            return CodeRep::Brace(Box::new(CodeRep::Empty));
        }
        CodeRep::Brace(Box::new(CodeRep::Seq(vec![
            CodeRep::Indent(Box::new(CodeRep::Seq(Self::each_on_its_line(items)))),
            CodeRep::Line,
        ])))
    }
    fn lines(&self, items: Vec<CodeRep>) -> CodeRep {
        CodeRep::Seq(Self::each_on_its_line(items))
    }
    fn case_body(&self, items: Vec<CodeRep>) -> CodeRep {
        CodeRep::Indent(Box::new(self.lines(items)))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::codegen::TokenStream;

    fn emit(rep: CodeRep) -> String {
        let mut out = TokenStream::new();
        rep.emit(&mut out, false);
        out.finish()
    }

    fn statement(name: &'static str, policy: &dyn Policy) -> CodeRep {
        CodeRep::Seq(vec![CodeRep::token(name), policy.semi_op()])
    }

    #[test]
    fn test_compact_block() {
        let block = Compact.block(vec![statement("a", &Compact), statement("b", &Compact)]);
        assert_eq!(emit(block), "{a;b}");
        assert_eq!(emit(Compact.block(vec![])), "{}");
    }

    #[test]
    fn test_pretty_block() {
        let inner = Pretty.block(vec![statement("b", &Pretty)]);
        let outer = Pretty.lines(vec![
            statement("a", &Pretty),
            Pretty.block(vec![inner, Pretty.block(vec![])]),
        ]);
        assert_eq!(emit(outer), "a;\n{\n  {\n    b;\n  }\n  {}\n}");
    }
}
