use indexmap::IndexMap;

use super::{
  document::{Schema, SchemaKind, SchemaTable},
  error::GeneratorResult,
  resolver,
};

/// Merges an `allOf` composition into one synthetic object schema.
///
/// Each part is brought to a concrete shape first: references are resolved
/// through the schema table, and a `oneOf` part is itself unified over its
/// alternatives. The resolved parts are then deep-merged left to right, so
/// later parts override earlier ones key by key.
pub fn unify(schemas: &SchemaTable, parts: &[Schema]) -> GeneratorResult<Schema> {
  let mut merged = empty_object();

  for part in parts {
    let resolved = match &part.kind {
      SchemaKind::Reference(ref_path) => resolver::resolve_schema(schemas, ref_path)?.clone(),
      SchemaKind::OneOf(alternatives) => unify(schemas, alternatives)?,
      _ => part.clone(),
    };
    merged = merge(merged, resolved);
  }

  Ok(merged)
}

fn empty_object() -> Schema {
  Schema::of_kind(SchemaKind::Object {
    properties: IndexMap::new(),
    required: Vec::new(),
  })
}

/// Left-to-right deep merge of two schema nodes.
///
/// Two object schemas combine their property maps, recursing per key. Two
/// array schemas combine into one array whose `items` is a `oneOf` over
/// both item schemas in order, duplicates kept; this widens an element
/// type instead of overwriting it and is the one place union typing is
/// synthesized structurally. Any other pairing lets the later schema win.
fn merge(mut left: Schema, mut right: Schema) -> Schema {
  let left_kind = std::mem::take(&mut left.kind);
  let right_kind = std::mem::take(&mut right.kind);

  match (left_kind, right_kind) {
    (
      SchemaKind::Object {
        properties: mut merged_properties,
        required: mut merged_required,
      },
      SchemaKind::Object { properties, required },
    ) => {
      for (name, incoming) in properties {
        match merged_properties.get_mut(&name) {
          Some(existing) => {
            let previous = std::mem::take(existing);
            *existing = merge(previous, incoming);
          }
          None => {
            merged_properties.insert(name, incoming);
          }
        }
      }
      for name in required {
        if !merged_required.contains(&name) {
          merged_required.push(name);
        }
      }
      right.kind = SchemaKind::Object {
        properties: merged_properties,
        required: merged_required,
      };
      fill_annotations(right, &left)
    }
    (SchemaKind::Array { items: left_items }, SchemaKind::Array { items: right_items }) => {
      let mut alternatives = Vec::new();
      if let Some(item) = left_items {
        push_alternatives(*item, &mut alternatives);
      }
      if let Some(item) = right_items {
        push_alternatives(*item, &mut alternatives);
      }
      let items = match alternatives.len() {
        0 => None,
        1 => alternatives.pop().map(Box::new),
        _ => Some(Box::new(Schema::of_kind(SchemaKind::OneOf(alternatives)))),
      };
      right.kind = SchemaKind::Array { items };
      fill_annotations(right, &left)
    }
    (_, right_kind) => {
      right.kind = right_kind;
      fill_annotations(right, &left)
    }
  }
}

/// Keeps successive array merges flat: an already-widened `oneOf` item
/// contributes its alternatives, not itself.
fn push_alternatives(item: Schema, alternatives: &mut Vec<Schema>) {
  match item.kind {
    SchemaKind::OneOf(inner) => alternatives.extend(inner),
    _ => alternatives.push(item),
  }
}

/// Deep-merge semantics for the scalar annotations: later parts override,
/// earlier parts fill the gaps.
fn fill_annotations(mut keep: Schema, fallback: &Schema) -> Schema {
  keep.description = keep.description.or_else(|| fallback.description.clone());
  keep.default = keep.default.or_else(|| fallback.default.clone());
  keep.minimum = keep.minimum.or(fallback.minimum);
  keep.maximum = keep.maximum.or(fallback.maximum);
  keep.min_length = keep.min_length.or(fallback.min_length);
  keep.max_length = keep.max_length.or(fallback.max_length);
  keep.read_only = keep.read_only || fallback.read_only;
  keep.format = keep.format.or_else(|| fallback.format.clone());
  keep.units = keep.units.or_else(|| fallback.units.clone());
  keep
}
