//! Placeholder substitution for prompt templates.
//!
//! `{dotted.path}` is replaced by the value at that path in the input's wire
//! form. Lists render comma-joined; maps render one `key: value` line per entry.
//! Anything else inside braces (JSON examples, prose) is left untouched.

use serde_json::Value;

pub fn render(template: &str, context: &Value) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match placeholder_len(after) {
            Some(len) => {
                out.push_str(&format_block(lookup(context, &after[..len])));
                rest = &after[len + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Length of the placeholder name if `s` starts with `name}`.
fn placeholder_len(s: &str) -> Option<usize> {
    let close = s.find('}')?;
    let name = &s[..close];
    let starts_alpha = name.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
    let valid = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
    (starts_alpha && valid).then_some(close)
}

fn lookup<'a>(context: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(context, |value, key| value.get(key))
}

fn format_block(value: Option<&Value>) -> String {
    match value {
        Some(Value::Object(map)) => map
            .iter()
            .map(|(key, v)| format!("{key}: {}", format_inline(v)))
            .collect::<Vec<_>>()
            .join("\n"),
        Some(v) => format_inline(v),
        None => String::new(),
    }
}

fn format_inline(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(format_inline)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => value.to_string(),
    }
}
