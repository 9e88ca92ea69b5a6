//! Scalar values of the `key: value` front-matter grammar.

use serde_json::{Number, Value as JsonValue};

/// Parse a front-matter value string to a JSON value.
///
/// Supports:
/// - Quoted strings: `"a \"b\""`, `'it''s'`
/// - Booleans: `true`, `false` (any case)
/// - Null: `null`, `~`, empty
/// - Numbers: `123`, `-4`, `3.14`, `1e3`
/// - Flow lists: `[a, 2, "c, d"]`
/// - Strings: everything else, verbatim
pub fn parse_scalar(s: &str) -> JsonValue {
    let s = s.trim();

    if s.is_empty() || s == "~" || s.eq_ignore_ascii_case("null") {
        return JsonValue::Null;
    }

    if let Some(text) = unquote(s) {
        return JsonValue::String(text);
    }

    if s.eq_ignore_ascii_case("true") {
        return JsonValue::Bool(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return JsonValue::Bool(false);
    }

    if let Ok(n) = s.parse::<i64>() {
        return JsonValue::Number(n.into());
    }

    // `inf` and `NaN` parse as f64 but have no JSON form, so they stay strings
    if let Ok(n) = s.parse::<f64>()
        && let Some(num) = Number::from_f64(n)
    {
        return JsonValue::Number(num);
    }

    if let Some(inner) = s.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
        return JsonValue::Array(
            split_flow_items(inner)
                .into_iter()
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(parse_scalar)
                .collect(),
        );
    }

    JsonValue::String(s.to_string())
}

/// Strip matching quotes, returning `None` when `s` is not a quoted string.
fn unquote(s: &str) -> Option<String> {
    if s.len() < 2 {
        return None;
    }

    if let Some(inner) = s.strip_prefix('"').and_then(|r| r.strip_suffix('"')) {
        let mut out = String::with_capacity(inner.len());
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            if c != '\\' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some(other) => out.push(other),
                None => out.push('\\'),
            }
        }
        return Some(out);
    }

    s.strip_prefix('\'')
        .and_then(|r| r.strip_suffix('\''))
        .map(|inner| inner.replace("''", "'"))
}

/// Split the inside of a flow list on top-level commas.
///
/// Commas inside quotes or nested brackets do not split.
fn split_flow_items(inner: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in inner.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' && q == '"' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                items.push(&inner[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    items.push(&inner[start..]);
    items
}
