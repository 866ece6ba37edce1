//! JSON Encoder — renders a [`Node`] tree back into JSON text.
//!
//! The layout is fixed, with no options:
//!
//! - Containers put a space before every entry and before the closing bracket:
//!   `{ "a" : 1, "b" : [ true, null ] }`. Empty containers are `{ }` / `[ ]`.
//! - Object members appear in insertion order.
//! - Numbers use the default `f32` formatting (`1.50` renders as `1.5`).
//!   Infinities and NaN are not JSON and render as `null`.
//! - Strings are escaped: `"` and `\`, the short forms `\b \f \n \r \t`, and
//!   `\u00XX` for the remaining control characters.

use crate::node::Node;
use std::fmt::Write;

/// Render a node (and its descendants) as JSON text.
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    render_into(node, &mut out);
    out
}

/// Append the JSON text of `node` to `out`.
pub fn render_into(node: &Node, out: &mut String) {
    match node {
        Node::Null => out.push_str("null"),
        Node::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Node::Number(n) => render_number(*n, out),
        Node::String(s) => render_string(s, out),
        Node::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push(' ');
                render_into(item, out);
            }
            out.push_str(" ]");
        }
        Node::Object(object) => {
            out.push('{');
            for (i, (key, value)) in object.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push(' ');
                render_string(key, out);
                out.push_str(" : ");
                render_into(value, out);
            }
            out.push_str(" }");
        }
    }
}

fn render_number(n: f32, out: &mut String) {
    if n.is_finite() {
        let _ = write!(out, "{n}");
    } else {
        out.push_str("null");
    }
}

fn render_string(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c < '\u{20}' => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
