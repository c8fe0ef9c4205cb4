use serde_json::Value;

use super::document::{PrimitiveType, Schema, SchemaKind};

/// The "absent" literal. Deliberately not `null`: consumers distinguish
/// "no sensible default" from "default is null".
pub const ABSENT: &str = "undefined";

/// The default literal for a property, preferring the schema's explicit
/// `default` over a synthesized one.
pub fn property_default(schema: &Schema) -> String {
  schema
    .default
    .as_ref()
    .map_or_else(|| synthesize_default(schema), render_literal)
}

/// Synthesizes a reasonable runtime default for a schema with no explicit
/// one: first alternative for unions, `minimum` (else `0`) for numbers,
/// empty literals for strings and arrays, [`ABSENT`] for everything else.
pub fn synthesize_default(schema: &Schema) -> String {
  match &schema.kind {
    SchemaKind::OneOf(alternatives) => alternatives
      .first()
      .map_or_else(|| ABSENT.to_string(), synthesize_default),
    SchemaKind::Primitive(primitive) if primitive.is_numeric() => {
      schema.minimum.map_or_else(|| "0".to_string(), render_number)
    }
    SchemaKind::Primitive(PrimitiveType::String) => "''".to_string(),
    SchemaKind::Array { .. } => "[]".to_string(),
    _ => ABSENT.to_string(),
  }
}

/// Renders a document literal as TypeScript source text. Strings become
/// single-quoted literals; everything else keeps its JSON rendering.
pub fn render_literal(value: &Value) -> String {
  match value {
    Value::String(text) => quote_text(text),
    other => other.to_string(),
  }
}

/// Wraps text in a single-quoted TypeScript string literal, escaping the
/// characters that would terminate or corrupt it. Document text is
/// arbitrary; apostrophes and newlines are common in descriptions.
pub fn quote_text(text: &str) -> String {
  let mut quoted = String::with_capacity(text.len() + 2);
  quoted.push('\'');
  for c in text.chars() {
    match c {
      '\\' => quoted.push_str("\\\\"),
      '\'' => quoted.push_str("\\'"),
      '\n' => quoted.push_str("\\n"),
      '\r' => quoted.push_str("\\r"),
      _ => quoted.push(c),
    }
  }
  quoted.push('\'');
  quoted
}

/// Numeric bounds parse as floats, but whole values render without the
/// trailing `.0` so an integer minimum stays an integer literal.
pub fn render_number(value: f64) -> String {
  if value.fract() == 0.0 && value.is_finite() {
    format!("{}", value as i64)
  } else {
    value.to_string()
  }
}
