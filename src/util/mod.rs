//! Lexical helpers: printing numbers, quoting strings, recognizing identifiers.

use unicode_xid::UnicodeXID;

/// Print a number the way `Number.prototype.toString` does.
///
/// Digits are the shortest that round-trip to the same `f64`.
///
/// ```
/// use jsgen::util::d2a;
///
/// assert_eq!(d2a(100.), "100");
/// assert_eq!(d2a(0.5), "0.5");
/// assert_eq!(d2a(1e21), "1e+21");
/// assert_eq!(d2a(1.5e-7), "1.5e-7");
/// ```
pub fn d2a(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0. {
        // Including -0.
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0. { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value < 0. {
        return format!("-{}", d2a(-value));
    }

    // `{:e}` prints the shortest round-tripping digits, e.g. `1.2345e3`.
    let exponential = format!("{:e}", value);
    let (mantissa, exponent) = match exponential.find('e') {
        Some(index) => (&exponential[..index], &exponential[index + 1..]),
        None => (exponential.as_str(), "0"),
    };
    let exponent = exponent.parse::<i32>().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    // With `k` digits, the value is `0.digits * 10^n`.
    let k = digits.len() as i32;
    let n = exponent + 1;
    if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, fract) = digits.split_at(n as usize);
        format!("{}.{}", int, fract)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat(-n as usize), digits)
    } else {
        let sign = if n - 1 < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, sign, (n - 1).abs())
        } else {
            format!("{}.{}e{}{}", first, rest, sign, (n - 1).abs())
        }
    }
}

/// 2^64, the first integer that does not fit in a `u64`.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.;

/// Print a non-negative number as a short JavaScript numeric literal.
///
/// ```
/// use jsgen::util::short_d2a;
///
/// assert_eq!(short_d2a(1000.), "1e3");
/// assert_eq!(short_d2a(100.), "100");
/// assert_eq!(short_d2a(0.5), ".5");
/// assert_eq!(short_d2a(1e21), "1e21");
/// ```
pub fn short_d2a(value: f64) -> String {
    let s = d2a(value);
    if value >= 1e3 && value % 10. == 0. {
        if s.contains('e') {
            return s.replace("e+", "e");
        }
        let trimmed = s.trim_end_matches('0');
        let zeros = s.len() - trimmed.len();
        if zeros > 1 {
            format!("{}e{}", trimmed, zeros)
        } else {
            s
        }
    } else if value.fract() == 0. {
        // Beyond `u64::MAX`, hexadecimal is never shorter than decimal.
        if value > 1e15 && value < U64_LIMIT {
            return format!("0x{:X}", value as u64);
        }
        s.replace("e+", "e")
    } else {
        let s = if s.starts_with("0.") { &s[1..] } else { &s[..] };
        s.replace("e+", "e")
    }
}

/// Quote a string as a JavaScript string literal.
///
/// The quote that needs the fewest escapes is picked, `"` in case of a tie.
///
/// ```
/// use jsgen::util::escape_string_literal;
///
/// assert_eq!(escape_string_literal("a"), r#""a""#);
/// assert_eq!(escape_string_literal(r#"a""#), r#"'a"'"#);
/// assert_eq!(escape_string_literal("'\n"), r#""'\n""#);
/// ```
pub fn escape_string_literal(value: &str) -> String {
    let doubles = value.chars().filter(|c| *c == '"').count();
    let singles = value.chars().filter(|c| *c == '\'').count();
    let delim = if doubles > singles { '\'' } else { '"' };
    escape_string_literal_with(value, delim)
}

fn escape_string_literal_with(value: &str, delim: char) -> String {
    let mut result = String::with_capacity(value.len() + 2);
    result.push(delim);
    for c in value.chars() {
        match c {
            _ if c == delim => {
                result.push('\\');
                result.push(delim);
            }
            '\u{8}' => result.push_str("\\b"),
            '\t' => result.push_str("\\t"),
            '\n' => result.push_str("\\n"),
            '\u{B}' => result.push_str("\\v"),
            '\u{C}' => result.push_str("\\f"),
            '\r' => result.push_str("\\r"),
            '\\' => result.push_str("\\\\"),
            '\u{2028}' => result.push_str("\\u2028"),
            '\u{2029}' => result.push_str("\\u2029"),
            _ if c.is_ascii_control() => result.push_str(&format!("\\x{:02X}", c as u32)),
            _ => result.push(c),
        }
    }
    result.push(delim);
    result
}

/// `ID_Start`, plus `$` and `_`.
pub fn is_identifier_start(c: char) -> bool {
    c == '$' || c == '_' || UnicodeXID::is_xid_start(c)
}

/// `ID_Continue`, plus `$`, ZWNJ and ZWJ.
pub fn is_identifier_part(c: char) -> bool {
    c == '$' || c == '\u{200C}' || c == '\u{200D}' || UnicodeXID::is_xid_continue(c)
}

/// `true` if `name` may be written as a bare identifier name, e.g. as a property name.
pub fn is_identifier_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if is_identifier_start(c) => chars.all(is_identifier_part),
        _ => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_d2a() {
        assert_eq!(d2a(0.), "0");
        assert_eq!(d2a(-0.), "0");
        assert_eq!(d2a(1.), "1");
        assert_eq!(d2a(123.456), "123.456");
        assert_eq!(d2a(0.1), "0.1");
        assert_eq!(d2a(0.000001), "0.000001");
        assert_eq!(d2a(0.0000001), "1e-7");
        assert_eq!(d2a(1e20), "100000000000000000000");
        assert_eq!(d2a(1e21), "1e+21");
        assert_eq!(d2a(1.25e300), "1.25e+300");
        assert_eq!(d2a(std::f64::INFINITY), "Infinity");
        assert_eq!(d2a(std::f64::NAN), "NaN");
        assert_eq!(d2a(-2.5), "-2.5");
    }

    #[test]
    fn test_short_d2a() {
        assert_eq!(short_d2a(0.), "0");
        assert_eq!(short_d2a(10.), "10");
        assert_eq!(short_d2a(100.), "100");
        assert_eq!(short_d2a(1000.), "1e3");
        assert_eq!(short_d2a(1010.), "1010");
        assert_eq!(short_d2a(12000.), "12e3");
        assert_eq!(short_d2a(0.5), ".5");
        assert_eq!(short_d2a(1.5), "1.5");
        assert_eq!(short_d2a(1.5e-7), "1.5e-7");
        assert_eq!(short_d2a(1e21), "1e21");
        assert_eq!(short_d2a(1e100), "1e100");
        assert_eq!(short_d2a(1234567890123457.), "0x462D53C8ABAC1");

        // Around 2^64.
        assert_eq!(short_d2a(18446744073709549568.), "0xFFFFFFFFFFFFF800");
        assert_eq!(short_d2a(18446744073709551616.), "18446744073709552000");
        assert_eq!(short_d2a(18446744073709555712.), "18446744073709556000");
        assert_eq!(short_d2a(99999999999999983616.), "99999999999999980000");
    }

    #[test]
    fn test_escape_string_literal() {
        assert_eq!(escape_string_literal(""), "\"\"");
        assert_eq!(escape_string_literal("'\""), "\"'\\\"\"");
        assert_eq!(escape_string_literal("\"\"'"), "'\"\"\\''");
        assert_eq!(escape_string_literal("a\\b"), "\"a\\\\b\"");
        assert_eq!(
            escape_string_literal("\u{8}\t\n\u{B}\u{C}\r"),
            "\"\\b\\t\\n\\v\\f\\r\""
        );
        assert_eq!(escape_string_literal("\u{2028}\u{2029}"), "\"\\u2028\\u2029\"");
        assert_eq!(escape_string_literal("\u{0}\u{1B}"), "\"\\x00\\x1B\"");
        assert_eq!(escape_string_literal("φ"), "\"φ\"");
    }

    #[test]
    fn test_identifier_names() {
        assert!(is_identifier_name("a"));
        assert!(is_identifier_name("$_0"));
        assert!(is_identifier_name("φ"));
        assert!(is_identifier_name("default"));
        assert!(!is_identifier_name(""));
        assert!(!is_identifier_name("0a"));
        assert!(!is_identifier_name("a-b"));
        assert!(!is_identifier_name("a b"));
        assert!(is_identifier_name("a\u{200C}b"));
        assert!(is_identifier_name("x\u{300}"));
        assert!(!is_identifier_name("a\u{B2}"));
        assert!(!is_identifier_name("\u{2160}\u{B2}"));
        assert!(!is_identifier_name("\u{300}x"));
    }
}
