//! Linearizing tokens into source text.

use super::location::{Location, Locations, NodeKey, Tracker};
use crate::util::{is_identifier_part, short_d2a};

/// Appends tokens to a `String`, inserting the whitespace and semicolons
/// needed to lex them back as the same tokens.
///
/// ```
/// use jsgen::codegen::TokenStream;
///
/// let mut out = TokenStream::new();
/// out.put("typeof");
/// out.put("a");
/// out.put_optional_semi();
/// out.put("a");
/// out.put("+");
/// out.put("+");
/// out.put("b");
/// out.put_optional_semi();
/// out.put("}");
/// assert_eq!(out.finish(), "typeof a;a+ +b}");
/// ```
pub struct TokenStream {
    writer: String,

    /// The last character written by `put`, if any.
    last_char: Option<char>,

    /// The text of the number just written, if the last token was a number.
    last_number: Option<String>,

    /// If `true`, a `;` is owed unless the next token is `}`.
    optional_semi: bool,

    /// If `true`, a line break is owed before the next token.
    pending_line: bool,
    depth: usize,
    indent: String,

    /// If `true`, never let `<` and `script` or `/script` touch.
    web_safe: bool,

    /// Lines started so far, and the offset at which the current one starts.
    line: usize,
    line_start: usize,

    /// Present if the locations of nodes are recorded.
    tracker: Option<Tracker>,
}

impl Default for TokenStream {
    fn default() -> Self {
        TokenStream {
            writer: String::new(),
            last_char: None,
            last_number: None,
            optional_semi: false,
            pending_line: false,
            depth: 0,
            indent: "  ".to_string(),
            web_safe: false,
            line: 0,
            line_start: 0,
            tracker: None,
        }
    }
}

impl TokenStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `indent` once per level of indentation.
    pub fn with_indent(mut self, indent: &str) -> Self {
        self.indent = indent.to_string();
        self
    }

    pub fn with_web_safe(mut self, web_safe: bool) -> Self {
        self.web_safe = web_safe;
        self
    }

    /// Record the span of the nodes entered with `start_node`.
    pub fn with_locations(mut self) -> Self {
        self.tracker = Some(Tracker::default());
        self
    }

    pub fn put(&mut self, token: &str) {
        if token.is_empty() {
            return;
        }
        if self.optional_semi {
            self.optional_semi = false;
            if token != "}" {
                if let Some(ref mut tracker) = self.tracker {
                    tracker.semicolon();
                }
                self.push(";");
                self.last_char = Some(';');
                self.last_number = None;
            }
        }
        if self.pending_line {
            self.break_line();
        }
        self.write(token);
    }

    /// Append `raw` verbatim.
    pub fn put_raw(&mut self, raw: &str) {
        trace!(target: "token_stream", "raw {:?}", raw);
        self.mark_token();
        self.push(raw);
        self.last_char = None;
        self.last_number = None;
    }

    pub fn put_number(&mut self, value: f64) {
        let text = short_d2a(value);
        self.put(&text);
        self.last_number = Some(text);
    }

    /// Owe a `;`, dropped if the next token is `}` or if nothing follows.
    pub fn put_optional_semi(&mut self) {
        self.optional_semi = true;
    }

    /// Start the next token on a new line, unless it is the first token.
    pub fn line(&mut self) {
        self.pending_line = true;
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        assert!(self.depth > 0, "Could not dedent at depth 0");
        self.depth -= 1;
    }

    /// The tokens put from now on, until the matching `finish_node`,
    /// belong to `node`.
    pub fn start_node(&mut self, node: NodeKey) {
        if let Some(ref mut tracker) = self.tracker {
            tracker.enter(node);
        }
    }

    pub fn finish_node(&mut self) {
        let here = self.location();
        if let Some(ref mut tracker) = self.tracker {
            tracker.exit(here);
        }
    }

    /// The location at which the next byte will be written.
    pub fn location(&self) -> Location {
        Location {
            line: self.line + 1,
            column: self.writer.len() - self.line_start,
            offset: self.writer.len(),
        }
    }

    pub fn finish(self) -> String {
        self.writer
    }

    /// The text, and the span of each node if locations were recorded.
    pub fn finish_with_locations(self) -> (String, Locations) {
        let locations = self
            .tracker
            .map(Tracker::into_locations)
            .unwrap_or_default();
        (self.writer, locations)
    }

    fn break_line(&mut self) {
        self.pending_line = false;
        if self.writer.is_empty() {
            return;
        }
        self.push("\n");
        for _ in 0..self.depth {
            self.writer.push_str(&self.indent);
        }
        self.last_char = None;
        self.last_number = None;
    }

    /// The nodes waiting for their first token start here.
    fn mark_token(&mut self) {
        let here = self.location();
        if let Some(ref mut tracker) = self.tracker {
            tracker.token(here);
        }
    }

    /// Append `text`, counting the line terminators within.
    fn push(&mut self, text: &str) {
        let mut chars = text.char_indices().peekable();
        while let Some((index, c)) = chars.next() {
            match c {
                '\r' if chars.peek().map(|&(_, next)| next) == Some('\n') => {}
                '\r' | '\n' | '\u{2028}' | '\u{2029}' => {
                    self.line += 1;
                    self.line_start = self.writer.len() + index + c.len_utf8();
                }
                _ => {}
            }
        }
        self.writer.push_str(text);
    }

    fn write(&mut self, token: &str) {
        trace!(target: "token_stream", "put {:?}", token);
        let (first, last) = match (token.chars().next(), token.chars().last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return,
        };
        if let Some(number) = self.last_number.take() {
            if token == "." {
                // `1.x` would lex as `1.` followed by `x`.
                if number.chars().all(|c| c.is_ascii_digit()) {
                    if let Some(ref mut tracker) = self.tracker {
                        tracker.dot_after_number();
                    }
                    self.push("..");
                } else {
                    self.push(".");
                }
                self.last_char = Some('.');
                return;
            }
        }
        if let Some(previous) = self.last_char {
            if self.must_separate(previous, first, token) {
                self.writer.push(' ');
            }
        }
        if token == "--" && self.writer.ends_with("<!") {
            // `<!--` opens an HTML comment.
            self.writer.push(' ');
        }
        self.mark_token();
        self.push(token);
        self.last_char = Some(last);
    }

    fn must_separate(&self, previous: char, first: char, token: &str) -> bool {
        if (previous == '+' || previous == '-') && previous == first {
            return true;
        }
        if joins_identifier(previous) && joins_identifier(first) {
            return true;
        }
        if previous == '/' && (first == 'i' || first == '/') {
            return true;
        }
        self.web_safe
            && previous == '<'
            && (token.starts_with("script") || token.starts_with("/script"))
    }
}

/// Characters that would merge with a neighbouring identifier character.
///
/// Escaped identifiers start with `\`. Characters outside of ASCII are
/// assumed to be identifier characters.
fn joins_identifier(c: char) -> bool {
    c == '\\' || !c.is_ascii() || is_identifier_part(c)
}

#[cfg(test)]
mod test {
    use super::*;

    fn stream(tokens: &[&str]) -> String {
        let mut out = TokenStream::new();
        for token in tokens {
            out.put(token);
        }
        out.finish()
    }

    #[test]
    fn test_spaces_only_where_needed() {
        assert_eq!(stream(&["var", "a", "=", "b"]), "var a=b");
        assert_eq!(stream(&["a", "+", "+", "b"]), "a+ +b");
        assert_eq!(stream(&["a", "-", "--", "b"]), "a- --b");
        assert_eq!(stream(&["a", "+", "-", "b"]), "a+-b");
        assert_eq!(stream(&["a", "in", "b"]), "a in b");
        assert_eq!(stream(&["/a/", "in", "b"]), "/a/ in b");
        assert_eq!(stream(&["a", "/", "/b/"]), "a/ /b/");
        assert_eq!(stream(&["a", "<", "!", "--", "b"]), "a<! --b");
        assert_eq!(stream(&["let", "\\u03C6"]), "let \\u03C6");
        assert_eq!(stream(&["return", "φ"]), "return φ");
    }

    #[test]
    fn test_optional_semicolons() {
        let mut out = TokenStream::new();
        out.put("{");
        out.put("a");
        out.put_optional_semi();
        out.put("}");
        out.put("b");
        out.put_optional_semi();
        out.put(";");
        out.put_optional_semi();
        assert_eq!(out.finish(), "{a}b;;");
    }

    #[test]
    fn test_number_then_dot() {
        let mut out = TokenStream::new();
        out.put_number(1.);
        out.put(".");
        out.put("a");
        out.put("+");
        out.put_number(0.5);
        out.put(".");
        out.put("b");
        out.put("+");
        out.put_number(1000.);
        out.put(".");
        out.put("c");
        assert_eq!(out.finish(), "1..a+.5.b+1e3.c");
    }

    #[test]
    fn test_raw_tokens_reset_adjacency() {
        let mut out = TokenStream::new();
        out.put("`");
        out.put_raw("a");
        out.put_raw("${");
        out.put("b");
        out.put_raw("}c");
        out.put("`");
        assert_eq!(out.finish(), "`a${b}c`");
    }

    #[test]
    fn test_lines_and_indentation() {
        let mut out = TokenStream::new().with_indent("    ");
        out.line();
        out.put("{");
        out.indent();
        out.line();
        out.put("a");
        out.put(";");
        out.dedent();
        out.line();
        out.put("}");
        assert_eq!(out.finish(), "{\n    a;\n}");
    }

    #[test]
    fn test_web_safe_script_tags() {
        let tokens = ["a", "<", "script"];
        assert_eq!(stream(&tokens), "a<script");
        let mut out = TokenStream::new().with_web_safe(true);
        for token in &tokens {
            out.put(token);
        }
        out.put("<");
        out.put("/script/");
        assert_eq!(out.finish(), "a< script< /script/");
    }

    #[test]
    #[should_panic]
    fn test_unbalanced_dedent() {
        let mut out = TokenStream::new();
        out.indent();
        out.dedent();
        out.dedent();
    }

    #[test]
    fn test_location_counts_line_terminators() {
        let mut out = TokenStream::new();
        out.put("`");
        out.put_raw("a\r\nb\rc\u{2028}d");
        out.put("`");
        let location = out.location();
        assert_eq!(location.line, 4);
        assert_eq!(location.column, 2);
        assert_eq!(location.offset, out.finish().len());
    }
}
