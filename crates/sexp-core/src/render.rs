//! Renderer — converts a decoded JSON value tree into S-expression text.
//!
//! The output dialect is the one understood by Lisp readers that accept
//! `#(...)` vector syntax:
//!
//! - **Arrays** become space-separated lists: `[1,2,3]` → `(1 2 3)`
//! - **Objects** become vectors of dotted pairs: `{"x":1}` → `#((x . 1))`
//! - **Strings** are double-quoted with backslash escapes
//! - **Numbers** are emitted bare; reals always keep a decimal point
//! - **Booleans** become `#t` / `#f`, **null** becomes `NIL`
//!
//! Object keys are emitted raw — unquoted and unescaped — so the pair shape
//! is always `(key . value)`. Keys containing spaces, parentheses, or dots
//! therefore produce ambiguous output; consumers of this dialect rely on the
//! raw-key form, so it is kept as-is.
//!
//! # Example
//! ```
//! use sexp_core::convert;
//! let sexp = convert(r#"{"x": 1, "y": [2, 3]}"#).unwrap();
//! assert_eq!(sexp, "#((x . 1) (y . (2 3)))");
//! ```

use crate::error::Result;
use serde_json::Value;

/// Convert a JSON string into S-expression text.
///
/// Parses the input as a single JSON document, then walks the value tree.
/// Returns an error if the input is not valid JSON; no partial output is
/// produced in that case.
pub fn convert(json: &str) -> Result<String> {
    let value: Value = serde_json::from_str(json)?;
    Ok(render(&value))
}

/// Render a decoded JSON value as S-expression text.
///
/// Pure structural recursion over the value tree; recursion depth equals the
/// nesting depth of the document. Total over every `Value` variant, so
/// booleans and null render like everything else instead of falling through.
pub fn render(value: &Value) -> String {
    let mut out = String::new();
    render_value(value, &mut out);
    out
}

fn render_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("NIL"),
        Value::Bool(b) => out.push_str(if *b { "#t" } else { "#f" }),
        Value::Number(n) => render_number(n, out),
        Value::String(s) => render_text(s, out),
        Value::Array(items) => render_sequence(items, out),
        Value::Object(map) => render_mapping(map, out),
    }
}

/// Emit a JSON number. Integers (including u64 magnitudes beyond i64) keep
/// their exact decimal digits; floats use Rust's shortest round-trip form,
/// which always retains a decimal point or exponent, so `1.0` stays
/// distinguishable from the integer `1`.
fn render_number(n: &serde_json::Number, out: &mut String) {
    if let Some(i) = n.as_i64() {
        out.push_str(&i.to_string());
    } else if let Some(u) = n.as_u64() {
        out.push_str(&u.to_string());
    } else if let Some(f) = n.as_f64() {
        out.push_str(&format!("{:?}", f));
    }
}

/// Emit a string value: a double-quoted region in which backslash, double
/// quote, and control characters never appear literally.
///
/// Named escapes cover the sequences Lisp readers of this dialect understand
/// (`\\`, `\"`, `\n`, `\t`, `\r`, `\f`); any other control character falls
/// back to `\u{XX}`. Printable non-ASCII passes through unchanged.
fn render_text(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{0c}' => out.push_str("\\f"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Emit an array as a parenthesized list: `(e1 e2 e3)`, empty as `()`.
/// Element order is the document's array order.
fn render_sequence(items: &[Value], out: &mut String) {
    out.push('(');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        render_value(item, out);
    }
    out.push(')');
}

/// Emit an object as a vector of dotted pairs: `#((k1 . v1) (k2 . v2))`,
/// empty as `#()`. Keys are emitted raw.
///
/// Relies on `serde_json::Map` with the `preserve_order` feature so that
/// iteration follows the document's key order (IndexMap, not BTreeMap).
fn render_mapping(map: &serde_json::Map<String, Value>, out: &mut String) {
    out.push_str("#(");
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push('(');
        out.push_str(key);
        out.push_str(" . ");
        render_value(value, out);
        out.push(')');
    }
    out.push(')');
}
