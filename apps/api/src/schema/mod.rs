//! Schema Definitions: declarative shapes for every pipeline input and output.
//!
//! A `Shape` is checked against untyped JSON and reports EVERY non-conforming
//! field, not just the first. Only after a value passes is it handed to serde.
//! The same shape renders the output skeleton that is appended to prompts.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Declares a closed set of literal labels as a serde enum with a `LABELS` table.
macro_rules! label_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $(#[serde(rename = $label)] $variant),+
        }

        impl $name {
            pub const LABELS: &'static [&'static str] = &[$($label),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub mod career;
pub mod chatbot;
pub mod profile;
pub mod roadmap;
pub mod skills_gap;

// ────────────────────────────────────────────────────────────────────────────
// Violations
// ────────────────────────────────────────────────────────────────────────────

/// One non-conforming field, addressed by its JSON path (`goals.industries`,
/// `roadmap[2].resources`). The root value is `$`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub path: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{} field(s) failed validation: {}", .violations.len(), summarize(.violations))]
pub struct SchemaViolation {
    pub violations: Vec<FieldViolation>,
}

impl SchemaViolation {
    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            violations: vec![FieldViolation::new(path, message)],
        }
    }

    /// True if any violation sits at or below `path`.
    #[cfg(test)]
    pub fn touches(&self, path: &str) -> bool {
        self.violations
            .iter()
            .any(|v| v.path == path || v.path.starts_with(&format!("{path}.")))
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.path, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "$".to_string()
    } else {
        path.to_string()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Shapes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum Shape {
    /// String with a minimum trimmed length in characters.
    Text { min_len: usize },
    Number { min: f64, max: f64 },
    Integer { min: i64, max: i64 },
    OneOf(&'static [&'static str]),
    List {
        item: Box<Shape>,
        min_items: usize,
        max_items: Option<usize>,
    },
    Object(Vec<Field>),
    /// String-keyed map with uniformly shaped values.
    Record(Box<Shape>),
    Any,
}

#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub shape: Shape,
    pub required: bool,
    pub description: Option<&'static str>,
    /// User-facing message replacing generic wording for this field.
    pub message: Option<&'static str>,
}

impl Field {
    pub fn required(name: &'static str, shape: Shape) -> Self {
        Self {
            name,
            shape,
            required: true,
            description: None,
            message: None,
        }
    }

    /// Absent, `null` and `""` are all accepted as "not provided".
    pub fn optional(name: &'static str, shape: Shape) -> Self {
        Self {
            required: false,
            ..Self::required(name, shape)
        }
    }

    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }
}

fn is_absent(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

impl Shape {
    pub fn text() -> Self {
        Shape::Text { min_len: 1 }
    }

    pub fn text_min(min_len: usize) -> Self {
        Shape::Text { min_len }
    }

    pub fn list(item: Shape) -> Self {
        Shape::List {
            item: Box::new(item),
            min_items: 0,
            max_items: None,
        }
    }

    pub fn list_between(item: Shape, min_items: usize, max_items: Option<usize>) -> Self {
        Shape::List {
            item: Box::new(item),
            min_items,
            max_items,
        }
    }

    pub fn record(item: Shape) -> Self {
        Shape::Record(Box::new(item))
    }

    /// Walks `value`, appending one violation per non-conforming field under `path`.
    pub fn check(&self, value: &Value, path: &str, out: &mut Vec<FieldViolation>) {
        let at = display_path(path);
        match self {
            Shape::Text { min_len } => match value.as_str() {
                Some(s) if s.trim().chars().count() < *min_len => {
                    let message = if *min_len <= 1 {
                        "must not be empty".to_string()
                    } else {
                        format!("must be at least {min_len} characters")
                    };
                    out.push(FieldViolation::new(at, message));
                }
                Some(_) => {}
                None => out.push(FieldViolation::new(at, "expected a string")),
            },
            Shape::Number { min, max } => match value.as_f64() {
                Some(n) if n < *min || n > *max => out.push(FieldViolation::new(
                    at,
                    format!("must be between {min} and {max}"),
                )),
                Some(_) => {}
                None => out.push(FieldViolation::new(at, "expected a number")),
            },
            Shape::Integer { min, max } => match value.as_i64() {
                Some(n) if n < *min || n > *max => out.push(FieldViolation::new(
                    at,
                    format!("must be between {min} and {max}"),
                )),
                Some(_) => {}
                None => out.push(FieldViolation::new(at, "expected a whole number")),
            },
            Shape::OneOf(labels) => match value.as_str() {
                Some(s) if labels.contains(&s) => {}
                _ => out.push(FieldViolation::new(
                    at,
                    format!("must be one of: {}", labels.join(", ")),
                )),
            },
            Shape::List {
                item,
                min_items,
                max_items,
            } => {
                let Some(items) = value.as_array() else {
                    out.push(FieldViolation::new(at, "expected an array"));
                    return;
                };
                if items.len() < *min_items {
                    out.push(FieldViolation::new(
                        at.clone(),
                        format!("must contain at least {min_items} item(s)"),
                    ));
                }
                if let Some(max) = max_items {
                    if items.len() > *max {
                        out.push(FieldViolation::new(
                            at.clone(),
                            format!("must contain at most {max} item(s)"),
                        ));
                    }
                }
                for (i, element) in items.iter().enumerate() {
                    item.check(element, &format!("{at}[{i}]"), out);
                }
            }
            Shape::Object(fields) => {
                let Some(map) = value.as_object() else {
                    out.push(FieldViolation::new(at, "expected an object"));
                    return;
                };
                for field in fields {
                    check_field(field, map, path, out);
                }
            }
            Shape::Record(item) => {
                let Some(map) = value.as_object() else {
                    out.push(FieldViolation::new(at, "expected an object"));
                    return;
                };
                for (key, element) in map {
                    item.check(element, &join_path(path, key), out);
                }
            }
            Shape::Any => {}
        }
    }

    /// Drops optional fields that are `null` or blank so serde sees them as absent.
    pub fn normalize(&self, value: &mut Value) {
        match self {
            Shape::Object(fields) => {
                let Some(map) = value.as_object_mut() else {
                    return;
                };
                for field in fields {
                    if !field.required && is_absent(map.get(field.name)) {
                        map.remove(field.name);
                    } else if let Some(child) = map.get_mut(field.name) {
                        field.shape.normalize(child);
                    }
                }
            }
            Shape::List { item, .. } => {
                if let Some(items) = value.as_array_mut() {
                    items.iter_mut().for_each(|v| item.normalize(v));
                }
            }
            Shape::Record(item) => {
                if let Some(map) = value.as_object_mut() {
                    map.values_mut().for_each(|v| item.normalize(v));
                }
            }
            _ => {}
        }
    }

    /// JSON skeleton of this shape. Scalars become a type label.
    pub fn skeleton(&self) -> Value {
        match self {
            Shape::Text { .. } => Value::String("string".to_string()),
            Shape::Number { min, max } => Value::String(format!("number ({min}-{max})")),
            Shape::Integer { min, max } => Value::String(format!("integer ({min}-{max})")),
            Shape::OneOf(labels) => Value::String(format!("one of: {}", labels.join(" | "))),
            Shape::List { item, .. } => Value::Array(vec![item.skeleton()]),
            Shape::Object(fields) => {
                let mut map = Map::new();
                for field in fields {
                    map.insert(field.name.to_string(), field.shape.skeleton());
                }
                Value::Object(map)
            }
            Shape::Record(item) => {
                let mut map = Map::new();
                map.insert("<key>".to_string(), item.skeleton());
                Value::Object(map)
            }
            Shape::Any => Value::String("any".to_string()),
        }
    }

    /// One line per described field: `path: description (constraints)`.
    pub fn field_notes(&self) -> Vec<String> {
        let mut notes = Vec::new();
        self.collect_notes("", &mut notes);
        notes
    }

    fn collect_notes(&self, path: &str, notes: &mut Vec<String>) {
        match self {
            Shape::Object(fields) => {
                for field in fields {
                    let field_path = join_path(path, field.name);
                    if let Some(description) = field.description {
                        let mut note = format!("{field_path}: {description}");
                        if let Shape::List {
                            min_items,
                            max_items: Some(max),
                            ..
                        } = &field.shape
                        {
                            note.push_str(&format!(" ({min_items}-{max} items)"));
                        }
                        notes.push(note);
                    }
                    field.shape.collect_notes(&field_path, notes);
                }
            }
            Shape::List { item, .. } => item.collect_notes(&format!("{path}[]"), notes),
            Shape::Record(item) => item.collect_notes(&join_path(path, "<key>"), notes),
            _ => {}
        }
    }
}

fn check_field(
    field: &Field,
    map: &Map<String, Value>,
    parent: &str,
    out: &mut Vec<FieldViolation>,
) {
    let path = join_path(parent, field.name);

    let Some(value) = map.get(field.name).filter(|v| !v.is_null()) else {
        if field.required {
            out.push(FieldViolation::new(
                path,
                field.message.unwrap_or("is required"),
            ));
        }
        return;
    };
    if !field.required && is_absent(Some(value)) {
        return;
    }

    let mut local = Vec::new();
    field.shape.check(value, &path, &mut local);
    if let Some(message) = field.message {
        for violation in local.iter_mut().filter(|v| v.path == path) {
            violation.message = message.to_string();
        }
    }
    out.extend(local);
}

// ────────────────────────────────────────────────────────────────────────────
// Schema trait
// ────────────────────────────────────────────────────────────────────────────

/// A typed value with a declarative wire shape.
pub trait Schema: Sized {
    fn shape() -> Shape;

    /// Cross-field rules that a single field's shape cannot express.
    fn refine(_value: &Value, _out: &mut Vec<FieldViolation>) {}

    /// Drops fields that the rest of the value makes irrelevant. Runs after a
    /// successful check.
    fn tidy(_value: &mut Value) {}
}

/// Checks untyped data against `S`, collecting every violation.
pub fn check<S: Schema>(value: &Value) -> Result<(), SchemaViolation> {
    let mut violations = Vec::new();
    S::shape().check(value, "", &mut violations);
    S::refine(value, &mut violations);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(SchemaViolation { violations })
    }
}

/// Validates untyped data and converts it into the strongly-shaped value.
pub fn validate<S: Schema + DeserializeOwned>(mut value: Value) -> Result<S, SchemaViolation> {
    check::<S>(&value)?;
    S::shape().normalize(&mut value);
    S::tidy(&mut value);
    serde_json::from_value(value).map_err(|e| SchemaViolation::single("$", e.to_string()))
}

/// Re-checks an already typed value through its wire form.
pub fn validate_typed<S: Schema + Serialize>(value: &S) -> Result<Value, SchemaViolation> {
    let mut wire =
        serde_json::to_value(value).map_err(|e| SchemaViolation::single("$", e.to_string()))?;
    check::<S>(&wire)?;
    S::tidy(&mut wire);
    Ok(wire)
}
