use super::{
  document::{Schema, SchemaKind, SchemaTable},
  error::{GeneratorError, GeneratorResult},
  naming,
};

/// Extracts the schema name from a `$ref` pointer string and renders it in
/// the identifier convention used for generated types.
///
/// References use JSON Pointer syntax (`#/components/schemas/Pet`); only
/// the trailing segment names the schema.
pub fn schema_name(ref_path: &str) -> String {
  naming::pascal_identifier(raw_schema_name(ref_path))
}

/// The trailing segment of a `$ref` pointer, exactly as written in the
/// document. This is the key used for `components.schemas` lookups.
pub fn raw_schema_name(ref_path: &str) -> &str {
  ref_path.rsplit('/').next().unwrap_or(ref_path)
}

/// Looks up the schema a `$ref` points at, following chained references
/// until a non-reference node is reached.
///
/// Callers must guarantee the reference target exists; a missing entry is
/// the one unrecoverable document-integrity failure in the core. A chain
/// that re-enters a name it already visited reports [`GeneratorError::CyclicSchema`]
/// instead of looping.
pub fn resolve_schema<'a>(schemas: &'a SchemaTable, ref_path: &str) -> GeneratorResult<&'a Schema> {
  let mut visited: Vec<&str> = Vec::new();
  let mut current = ref_path;

  loop {
    let name = raw_schema_name(current);
    if visited.contains(&name) {
      return Err(GeneratorError::CyclicSchema(name.to_string()));
    }
    visited.push(name);

    let schema = schemas
      .get(name)
      .ok_or_else(|| GeneratorError::UnknownSchema(name.to_string()))?;

    match &schema.kind {
      SchemaKind::Reference(next) => current = next,
      _ => return Ok(schema),
    }
  }
}

/// Resolves a schema node if it is a reference; returns it unchanged
/// otherwise.
pub fn deref_schema<'a>(schemas: &'a SchemaTable, schema: &'a Schema) -> GeneratorResult<&'a Schema> {
  match &schema.kind {
    SchemaKind::Reference(ref_path) => resolve_schema(schemas, ref_path),
    _ => Ok(schema),
  }
}
