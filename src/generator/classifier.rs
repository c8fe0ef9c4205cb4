use serde::Serialize;
use strum::Display;

use super::{
  document::{PrimitiveType, Schema, SchemaKind, SchemaTable},
  error::GeneratorResult,
  resolver,
};

/// Coarse runtime tag attached to every model property.
///
/// These are the only shapes the runtime metadata layer distinguishes;
/// anything without a recognized `type`, `enum`, or `$ref` degrades to
/// [`FieldKind::Undefined`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum FieldKind {
  String,
  Number,
  Boolean,
  Array,
  Object,
  Enum,
  Undefined,
}

/// Classifies a schema node into its runtime tag, resolving references
/// first. Enum detection takes priority over the primitive type; `integer`
/// and `number` both classify as NUMBER.
pub fn classify_field(schemas: &SchemaTable, schema: &Schema) -> GeneratorResult<FieldKind> {
  let resolved = resolver::deref_schema(schemas, schema)?;

  let kind = match &resolved.kind {
    SchemaKind::Enum { .. } => FieldKind::Enum,
    SchemaKind::Primitive(PrimitiveType::String) => FieldKind::String,
    SchemaKind::Primitive(primitive) if primitive.is_numeric() => FieldKind::Number,
    SchemaKind::Primitive(PrimitiveType::Boolean) => FieldKind::Boolean,
    SchemaKind::Array { .. } => FieldKind::Array,
    SchemaKind::Object { .. } => FieldKind::Object,
    _ => FieldKind::Undefined,
  };

  Ok(kind)
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn table(value: serde_json::Value) -> SchemaTable {
    serde_json::from_value(value).unwrap()
  }

  fn schema_from(value: serde_json::Value) -> Schema {
    serde_json::from_value(value).unwrap()
  }

  #[test]
  fn test_enum_wins_over_declared_type() {
    let schemas = table(json!({}));
    let schema = schema_from(json!({ "type": "string", "enum": ["on", "off"] }));
    assert_eq!(classify_field(&schemas, &schema).unwrap(), FieldKind::Enum);
  }

  #[test]
  fn test_integer_and_number_both_classify_as_number() {
    let schemas = table(json!({}));
    for type_name in ["integer", "number"] {
      let schema = schema_from(json!({ "type": type_name }));
      assert_eq!(classify_field(&schemas, &schema).unwrap(), FieldKind::Number);
    }
  }

  #[test]
  fn test_reference_is_resolved_before_classifying() {
    let schemas = table(json!({
      "Status": { "type": "string", "enum": ["active", "inactive"] }
    }));
    let schema = schema_from(json!({ "$ref": "#/components/schemas/Status" }));
    assert_eq!(classify_field(&schemas, &schema).unwrap(), FieldKind::Enum);
  }

  #[test]
  fn test_unrecognized_shape_degrades_to_undefined() {
    let schemas = table(json!({}));
    for value in [json!({}), json!({ "type": "file" })] {
      let schema = schema_from(value);
      assert_eq!(classify_field(&schemas, &schema).unwrap(), FieldKind::Undefined);
    }
  }

  #[test]
  fn test_display_renders_uppercase_tags() {
    assert_eq!(FieldKind::String.to_string(), "STRING");
    assert_eq!(FieldKind::Undefined.to_string(), "UNDEFINED");
  }
}
