use itertools::Itertools;

use super::{
  document::{PrimitiveType, Schema, SchemaKind},
  resolver,
};

/// Placeholder type for schemas with no usable static shape.
pub const ANY_TYPE: &str = "any";

/// Module prefix used when a generated type is consumed from a file other
/// than the one declaring it.
pub const TYPES_MODULE: &str = "ApiModelTypes";

/// Translates a schema node into a TypeScript type expression.
///
/// Decision order, first match wins: reference name, enum placeholder,
/// union join, numeric collapse, boolean, open record, array, verbatim
/// type fallback. Each call is a fresh top-down walk; nothing is memoized,
/// so translating the same node twice always yields the same text.
pub fn translate_type(schema: &Schema, external: bool) -> String {
  match &schema.kind {
    SchemaKind::Reference(ref_path) => qualify(&resolver::schema_name(ref_path), external),
    // Enums are declared separately; the translator never inlines members.
    SchemaKind::Enum { .. } => ANY_TYPE.to_string(),
    SchemaKind::OneOf(alternatives) if alternatives.is_empty() => ANY_TYPE.to_string(),
    SchemaKind::OneOf(alternatives) => alternatives
      .iter()
      .map(|alternative| translate_type(alternative, external))
      .join(" | "),
    // OpenAPI's integer/number distinction collapses to one numeric type.
    SchemaKind::Primitive(PrimitiveType::Integer) => "number".to_string(),
    SchemaKind::Primitive(PrimitiveType::Boolean) => "boolean".to_string(),
    SchemaKind::Object { properties, .. } if properties.is_empty() => "Record<string, any>".to_string(),
    SchemaKind::Array { items } => {
      let element = items
        .as_deref()
        .map_or_else(|| ANY_TYPE.to_string(), |item| translate_type(item, external));
      format!("Array<{element}>")
    }
    SchemaKind::Primitive(primitive) => primitive.as_str().to_string(),
    SchemaKind::Object { .. } => "object".to_string(),
    SchemaKind::Other(type_name) => type_name.clone(),
    SchemaKind::AllOf(_) | SchemaKind::Untyped => ANY_TYPE.to_string(),
  }
}

fn qualify(name: &str, external: bool) -> String {
  if external {
    format!("{TYPES_MODULE}.{name}")
  } else {
    name.to_string()
  }
}
