//! Console rendering of a cached record.
//!
//! Objects print one `key: value` line per field in key order. Nested
//! containers stay on one line while they fit in the width and otherwise
//! break into indented lines. Long strings wrap at spaces.

use serde_json::{Map, Value};

const INDENT: usize = 2;

pub fn render(value: &Value, width: usize) -> String {
    let mut lines = Vec::new();
    match value {
        Value::Object(map) if !map.is_empty() => render_fields(map, 0, width, &mut lines),
        Value::Array(items) if !items.is_empty() && !fits(0, &inline(value), width) => {
            render_items(items, 0, width, &mut lines)
        }
        Value::Array(_) | Value::Object(_) => lines.push(inline(value)),
        scalar => push_wrapped(String::new(), &scalar_text(scalar), width, &mut lines),
    }
    lines.join("\n")
}

fn render_fields(map: &Map<String, Value>, indent: usize, width: usize, lines: &mut Vec<String>) {
    let pad = " ".repeat(indent);
    for (key, value) in map {
        let key = text_or_quoted(key);
        let prefix = format!("{}{}: ", pad, key);
        match value {
            Value::Object(_) | Value::Array(_) => {
                let compact = inline(value);
                if is_empty_container(value) || fits(prefix.chars().count(), &compact, width) {
                    lines.push(prefix + &compact);
                } else {
                    lines.push(format!("{}{}:", pad, key));
                    render_nested(value, indent + INDENT, width, lines);
                }
            }
            scalar => push_wrapped(prefix, &scalar_text(scalar), width, lines),
        }
    }
}

fn render_items(items: &[Value], indent: usize, width: usize, lines: &mut Vec<String>) {
    let pad = " ".repeat(indent);
    for item in items {
        let prefix = format!("{}- ", pad);
        match item {
            Value::Object(_) | Value::Array(_) => {
                let compact = inline(item);
                if is_empty_container(item) || fits(prefix.chars().count(), &compact, width) {
                    lines.push(prefix + &compact);
                } else {
                    lines.push(format!("{}-", pad));
                    render_nested(item, indent + INDENT, width, lines);
                }
            }
            scalar => push_wrapped(prefix, &scalar_text(scalar), width, lines),
        }
    }
}

fn render_nested(value: &Value, indent: usize, width: usize, lines: &mut Vec<String>) {
    match value {
        Value::Object(map) => render_fields(map, indent, width, lines),
        Value::Array(items) => render_items(items, indent, width, lines),
        _ => unreachable!("render_nested is only called with containers"),
    }
}

fn is_empty_container(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn fits(used: usize, text: &str, width: usize) -> bool {
    used + text.chars().count() <= width
}

/// Single-line form of any value.
fn inline(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let fields: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", text_or_quoted(k), inline(v)))
                .collect();
            format!("{{{}}}", fields.join(", "))
        }
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(inline).collect();
            format!("[{}]", items.join(", "))
        }
        scalar => scalar_text(scalar),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => text_or_quoted(s),
        other => other.to_string(),
    }
}

/// Keys and string values print raw unless they are empty or hold control
/// characters, in which case the JSON-quoted form keeps them on one line.
fn text_or_quoted(text: &str) -> String {
    if text.is_empty() || text.chars().any(char::is_control) {
        Value::String(text.to_string()).to_string()
    } else {
        text.to_string()
    }
}

/// Splits `text` into (spaces, word) pairs; each pair's spaces are the run
/// that precedes its word.
fn space_runs(text: &str) -> Vec<(&str, &str)> {
    let mut tokens = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let word_start = rest.len() - rest.trim_start_matches(' ').len();
        let after = &rest[word_start..];
        let word_end = after.find(' ').unwrap_or(after.len());
        tokens.push((&rest[..word_start], &after[..word_end]));
        rest = &after[word_end..];
    }
    tokens
}

/// Greedy word wrap. Continuation lines line up under the first character
/// after `prefix`. A single word longer than the width is never split.
/// Space runs inside a line are kept; the run at a break point is dropped.
fn push_wrapped(prefix: String, text: &str, width: usize, lines: &mut Vec<String>) {
    let prefix_len = prefix.chars().count();
    if fits(prefix_len, text, width) {
        lines.push(prefix + text);
        return;
    }

    let hang = " ".repeat(prefix_len);
    let mut current = prefix;
    let mut current_len = prefix_len;
    let mut at_line_start = true;
    for (spaces, word) in space_runs(text) {
        let spaces_len = spaces.len();
        let word_len = word.chars().count();
        if at_line_start {
            current.push_str(spaces);
            current.push_str(word);
            current_len += spaces_len + word_len;
            at_line_start = false;
        } else if current_len + spaces_len + word_len <= width {
            current.push_str(spaces);
            current.push_str(word);
            current_len += spaces_len + word_len;
        } else {
            lines.push(std::mem::replace(&mut current, hang.clone()));
            current.push_str(word);
            current_len = prefix_len + word_len;
        }
    }
    lines.push(current);
}
