use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// Root of a parsed Swagger/OpenAPI document.
///
/// The document is read-only for the duration of one generation run; every
/// derived record is rebuilt from it on each run. Maps use [`IndexMap`] so
/// the original insertion order of paths, methods, and schemas survives
/// parsing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
  #[serde(default)]
  pub paths: IndexMap<String, PathItem>,
  #[serde(default)]
  pub components: Components,
  #[serde(default, rename = "basePath")]
  pub base_path: Option<String>,
}

impl Document {
  /// A document with no paths and no schemas has nothing to generate and is
  /// treated the same as an unparseable one.
  pub fn is_empty(&self) -> bool {
    self.paths.is_empty() && self.components.schemas.is_empty()
  }
}

/// HTTP method -> operation, in document order.
pub type PathItem = IndexMap<String, OperationSource>;

pub type SchemaTable = IndexMap<String, Schema>;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Components {
  #[serde(default)]
  pub schemas: SchemaTable,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OperationSource {
  #[serde(rename = "operationId")]
  pub operation_id: Option<String>,
  pub summary: Option<String>,
  #[serde(default)]
  pub tags: Vec<String>,
  #[serde(default)]
  pub parameters: Vec<ParameterSource>,
  #[serde(rename = "requestBody")]
  pub request_body: Option<BodySource>,
  #[serde(default)]
  pub responses: IndexMap<String, BodySource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParameterSource {
  pub name: String,
  #[serde(rename = "in")]
  pub location: Option<String>,
  #[serde(default)]
  pub required: bool,
  pub description: Option<String>,
  pub schema: Option<Schema>,
}

/// A request body or response wrapper around a content-type map.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BodySource {
  #[serde(default)]
  pub content: IndexMap<String, MediaTypeSource>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaTypeSource {
  pub schema: Option<Schema>,
}

/// One schema node, with its shape classified exactly once at parse time.
///
/// Annotations that apply to any shape (description, default, bounds, ...)
/// live here; the shape itself is the closed [`SchemaKind`] union, so
/// downstream components pattern-match instead of re-sniffing field
/// presence.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "RawSchema")]
pub struct Schema {
  pub kind: SchemaKind,
  pub description: Option<String>,
  pub default: Option<Value>,
  pub minimum: Option<f64>,
  pub maximum: Option<f64>,
  pub min_length: Option<u64>,
  pub max_length: Option<u64>,
  pub read_only: bool,
  pub format: Option<String>,
  pub units: Option<String>,
}

impl Schema {
  pub fn of_kind(kind: SchemaKind) -> Self {
    Self {
      kind,
      ..Self::default()
    }
  }
}

#[derive(Debug, Clone, Default)]
pub enum SchemaKind {
  /// A `$ref` pointer string, kept verbatim.
  Reference(String),
  /// Closed set of literal values.
  Enum { values: Vec<Value> },
  OneOf(Vec<Schema>),
  AllOf(Vec<Schema>),
  Array {
    items: Option<Box<Schema>>,
  },
  Object {
    properties: IndexMap<String, Schema>,
    required: Vec<String>,
  },
  Primitive(PrimitiveType),
  /// A declared `type` string we do not recognize, kept verbatim so the
  /// translator can fall back to it.
  Other(String),
  /// No recognized shape at all. Classifies as UNDEFINED, never errors.
  #[default]
  Untyped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
  String,
  Number,
  Integer,
  Boolean,
}

impl PrimitiveType {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::String => "string",
      Self::Number => "number",
      Self::Integer => "integer",
      Self::Boolean => "boolean",
    }
  }

  fn from_type_name(name: &str) -> Option<Self> {
    match name {
      "string" => Some(Self::String),
      "number" => Some(Self::Number),
      "integer" => Some(Self::Integer),
      "boolean" => Some(Self::Boolean),
      _ => None,
    }
  }

  pub fn is_numeric(self) -> bool {
    matches!(self, Self::Number | Self::Integer)
  }
}

/// The untyped wire shape of a schema node. Deserialized once, then folded
/// into [`Schema`] so the ad hoc field sniffing happens in exactly one
/// place.
#[derive(Debug, Default, Deserialize)]
struct RawSchema {
  #[serde(rename = "$ref")]
  ref_path: Option<String>,
  #[serde(rename = "type")]
  schema_type: Option<String>,
  #[serde(default)]
  properties: IndexMap<String, Schema>,
  #[serde(default)]
  required: Vec<String>,
  items: Option<Box<Schema>>,
  #[serde(rename = "enum", default)]
  enum_values: Vec<Value>,
  #[serde(rename = "oneOf", default)]
  one_of: Vec<Schema>,
  #[serde(rename = "allOf", default)]
  all_of: Vec<Schema>,
  description: Option<String>,
  default: Option<Value>,
  minimum: Option<f64>,
  maximum: Option<f64>,
  #[serde(rename = "minLength")]
  min_length: Option<u64>,
  #[serde(rename = "maxLength")]
  max_length: Option<u64>,
  #[serde(rename = "readOnly", default)]
  read_only: bool,
  format: Option<String>,
  #[serde(rename = "x-units")]
  units: Option<String>,
}

impl From<RawSchema> for Schema {
  fn from(raw: RawSchema) -> Self {
    let RawSchema {
      ref_path,
      schema_type,
      properties,
      required,
      items,
      enum_values,
      one_of,
      all_of,
      description,
      default,
      minimum,
      maximum,
      min_length,
      max_length,
      read_only,
      format,
      units,
    } = raw;

    // Shape precedence: a bare `$ref` wins, then `enum`, then the
    // compositions, then the declared `type`. A `$ref` next to an inline
    // `type` defers to the type, matching the translator's first rule.
    let kind = if let Some(path) = ref_path.filter(|_| schema_type.is_none()) {
      SchemaKind::Reference(path)
    } else if !enum_values.is_empty() {
      SchemaKind::Enum { values: enum_values }
    } else if !one_of.is_empty() {
      SchemaKind::OneOf(one_of)
    } else if !all_of.is_empty() {
      SchemaKind::AllOf(all_of)
    } else {
      match schema_type.as_deref() {
        Some("array") => SchemaKind::Array { items },
        Some("object") => SchemaKind::Object { properties, required },
        Some(name) => match PrimitiveType::from_type_name(name) {
          Some(primitive) => SchemaKind::Primitive(primitive),
          None => SchemaKind::Other(name.to_string()),
        },
        None if !properties.is_empty() => SchemaKind::Object { properties, required },
        None => SchemaKind::Untyped,
      }
    };

    Self {
      kind,
      description,
      default,
      minimum,
      maximum,
      min_length,
      max_length,
      read_only,
      format,
      units,
    }
  }
}
