//! Making source text safe to inline within an HTML `<script>` element.
//!
//! Within identifiers, string literals, directives, module specifiers and
//! templates, characters that could end the script element or upset a
//! parser are replaced with escape sequences that denote the same value.
//! Regular expressions and tagged templates observe their source text, so
//! they cannot be rewritten. `WebSafetyChecker` finds those that would need
//! to be.

use crate::Error;

use jsgen_es6::ast::*;
use jsgen_es6::{Monoid, MonoidalReducer, Path};

use itertools::Itertools;

/// Escape NUL, non-ASCII characters and `<script` or `</script`.
///
/// ```
/// use jsgen::codegen::websafe::safe;
///
/// assert_eq!(safe("φ"), "\\u03C6");
/// assert_eq!(safe("\u{1F600}"), "\\uD83D\\uDE00");
/// assert_eq!(safe("</script>"), "</\\x73cript>");
/// assert_eq!(safe("<scripts"), "<scripts");
/// ```
pub fn safe(unsafe_text: &str) -> String {
    let mut ascii = String::with_capacity(unsafe_text.len());
    for c in unsafe_text.chars() {
        if c == '\0' {
            ascii.push_str("\\x00");
        } else if c.is_ascii() {
            ascii.push(c);
        } else {
            let mut units = [0; 2];
            for unit in c.encode_utf16(&mut units) {
                ascii.push_str(&format!("\\u{:04X}", unit));
            }
        }
    }

    let bytes = ascii.as_bytes();
    let mut result = String::with_capacity(ascii.len());
    let mut start = 0;
    let mut index = 0;
    while index < bytes.len() {
        if bytes[index] == b'<' {
            let name = if bytes.get(index + 1) == Some(&b'/') {
                index + 2
            } else {
                index + 1
            };
            if is_script_tag(bytes, name) {
                result.push_str(&ascii[start..name]);
                result.push_str(&format!("\\x{:02X}", bytes[name]));
                start = name + 1;
                index = name + 1;
                continue;
            }
        }
        index += 1;
    }
    result.push_str(&ascii[start..]);
    result
}

/// `true` if `bytes[name..]` starts with `script` (in any case), followed
/// by a character that ends a tag name.
fn is_script_tag(bytes: &[u8], name: usize) -> bool {
    let end = name + "script".len();
    if end >= bytes.len() || !bytes[name..end].eq_ignore_ascii_case(b"script") {
        return false;
    }
    match bytes[end] {
        b'\t' | b'\r' | b'\x0C' | b' ' | b'/' | b'>' => true,
        _ => false,
    }
}

/// Find the nodes that cannot be made web-safe.
pub struct WebSafetyChecker;

impl WebSafetyChecker {
    pub fn check(program: &Program) -> Result<(), Error> {
        let mut errors: Vec<Error> = jsgen_es6::reduce_program(&WebSafetyChecker, program);
        if errors.is_empty() {
            return Ok(());
        }
        warn!(
            target: "websafe",
            "{} node(s) cannot be made web-safe: {}",
            errors.len(),
            errors.iter().format("; ")
        );
        Err(errors.swap_remove(0))
    }
}

impl MonoidalReducer for WebSafetyChecker {
    type State = Vec<Error>;

    fn reduce_literal_reg_exp_expression(
        &self,
        path: &Path,
        node: &LiteralRegExpExpression,
    ) -> Vec<Error> {
        let source = format!("{}/", node.pattern);
        if safe(&source) == source {
            return vec![];
        }
        vec![Error::web_safety(
            path,
            ASTNode::LiteralRegExpExpression,
            "regular expression literals cannot be escaped",
        )]
    }

    fn reduce_template_expression(
        &self,
        path: &Path,
        node: &TemplateExpression,
        tag: Option<Vec<Error>>,
        elements: Vec<Vec<Error>>,
    ) -> Vec<Error> {
        let children = elements
            .into_iter()
            .fold(tag.unwrap_or_default(), Monoid::append);
        if node.tag.is_none() {
            return children;
        }
        let unsafe_chunk = node.elements.iter().any(|part| match *part {
            TemplatePart::TemplateElement(ref element) => {
                safe(&element.raw_value) != element.raw_value.as_str()
            }
            TemplatePart::Expression(_) => false,
        });
        if !unsafe_chunk {
            return children;
        }
        children.append(vec![Error::web_safety(
            path,
            ASTNode::TemplateExpression,
            "the raw text of tagged templates cannot be escaped",
        )])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_safe() {
        assert_eq!(safe("abc"), "abc");
        assert_eq!(safe("a\u{0}b"), "a\\x00b");
        assert_eq!(safe("abcφxyz"), "abc\\u03C6xyz");
        assert_eq!(safe("<script "), "<\\x73cript ");
        assert_eq!(safe("</script "), "</\\x73cript ");
        assert_eq!(safe("<SCRIPT>"), "<\\x53CRIPT>");
        assert_eq!(safe("[</script ]"), "[</\\x73cript ]");
        assert_eq!(safe("<script"), "<script");
        assert_eq!(safe("<<script/"), "<<\\x73cript/");
    }

    fn expression_statement(expression: Expression) -> Program {
        Script {
            directives: vec![],
            statements: vec![ExpressionStatement { expression }.into()],
        }
        .into()
    }

    fn regexp(pattern: &str) -> Expression {
        LiteralRegExpExpression {
            pattern: pattern.into(),
            global: false,
            ignore_case: false,
            multi_line: false,
            sticky: false,
            unicode: false,
        }
        .into()
    }

    fn template(tag: Option<&'static str>, raw: &str) -> Expression {
        TemplateExpression {
            tag: tag.map(|name| IdentifierExpression { name: name.into() }.into()),
            elements: vec![TemplateElement {
                raw_value: raw.into(),
            }
            .into()],
        }
        .into()
    }

    #[test]
    fn test_regexp_must_be_safe() {
        assert!(WebSafetyChecker::check(&expression_statement(regexp("a+"))).is_ok());
        let error = WebSafetyChecker::check(&expression_statement(regexp("φ")))
            .expect_err("Non-ASCII regexp");
        match error {
            Error::WebSafety { kind, ref path, .. } => {
                assert_eq!(kind, ASTNode::LiteralRegExpExpression);
                assert!(path.contains("ExpressionStatement"));
            }
            other => panic!("Unexpected error {:?}", other),
        }
        assert!(WebSafetyChecker::check(&expression_statement(regexp("<scrip"))).is_ok());
        // Followed by the closing `/`.
        assert!(WebSafetyChecker::check(&expression_statement(regexp("<script"))).is_err());
    }

    #[test]
    fn test_only_tagged_templates_must_be_safe() {
        assert!(WebSafetyChecker::check(&expression_statement(template(None, "φ"))).is_ok());
        assert!(WebSafetyChecker::check(&expression_statement(template(Some("t"), "a"))).is_ok());
        assert_matches!(
            WebSafetyChecker::check(&expression_statement(template(Some("t"), "\u{0}"))),
            Err(Error::WebSafety {
                kind: ASTNode::TemplateExpression,
                ..
            })
        );
    }
}
