use indexmap::IndexMap;
use serde_json::Value;

use super::{
  classifier::{self, FieldKind},
  contexts::{
    EnumDecl, EnumMember, FunctionContext, ModelDecl, ModelTypesContext, ParamContext, PropertyDecl, RuntimeModel,
    RuntimeModelsContext, RuntimeProperty, ServiceContext, UnionDecl,
  },
  defaults,
  document::{Document, Schema, SchemaKind},
  error::GeneratorResult,
  naming, operations,
  operations::Operation,
  resolver, translator, unifier,
};

/// Service files are written one directory below the types module.
const TYPES_DIRECTORY: &str = "../apiModelTypes";

/// Description filler for parameters that declare none.
const PARAM_DESCRIPTION_STUB: &str = "stub";

/// How operations are bucketed into services.
#[derive(Debug, Clone, Default)]
pub enum ServiceGrouping {
  /// Monolithic API: one service per first declared tag.
  #[default]
  ByTag,
  /// Microservice API: everything in one caller-named bucket.
  SingleService { name: Option<String> },
}

#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
  pub grouping: ServiceGrouping,
  /// Passed through into the service context untouched; the emitters use
  /// it to pick between the legacy and current HTTP-client typings.
  pub modern_client: bool,
}

/// Drives the extraction pipeline and assembles the three output contexts.
///
/// Each context builder is a pure projection of the immutable document;
/// they share no mutable state and may run in any order.
#[derive(Debug)]
pub struct Orchestrator {
  document: Document,
  options: GeneratorOptions,
}

/// The named-schema partition: a schema is exactly one of these.
enum SchemaRecord {
  Model(Schema),
  Enum(Vec<Value>),
  Union(Schema),
}

impl Orchestrator {
  pub fn new(document: Document, options: GeneratorOptions) -> Self {
    Self { document, options }
  }

  /// One context per service bucket, in first-seen operation order.
  pub fn service_contexts(&self) -> Vec<ServiceContext> {
    let mut buckets: IndexMap<String, Vec<Operation>> = IndexMap::new();

    for operation in operations::extract_operations(&self.document) {
      let bucket = match &self.options.grouping {
        ServiceGrouping::ByTag => operation.tag.clone(),
        ServiceGrouping::SingleService { name } => name
          .clone()
          .unwrap_or_else(|| operations::DEFAULT_SERVICE_NAME.to_string()),
      };
      buckets.entry(bucket).or_default().push(operation);
    }

    buckets
      .into_iter()
      .map(|(bucket, bucket_operations)| ServiceContext {
        service_name: naming::camel_identifier(&bucket),
        types_directory: TYPES_DIRECTORY.to_string(),
        base_path: self.document.base_path.clone().unwrap_or_default(),
        modern_client: self.options.modern_client,
        functions: bucket_operations.iter().map(function_context).collect(),
      })
      .collect()
  }

  /// The model/enum/union partition used for type declarations.
  pub fn model_types_context(&self) -> GeneratorResult<ModelTypesContext> {
    let mut context = ModelTypesContext::default();

    for (name, record) in self.partition_schemas()? {
      match record {
        SchemaRecord::Model(schema) => context.models.push(ModelDecl {
          name: naming::pascal_identifier(&name),
          description: schema.description.clone(),
          properties: model_properties(&schema)
            .map(|(property_name, property)| PropertyDecl {
              name: property_name.clone(),
              type_expression: translator::translate_type(property, false),
              description: property.description.clone(),
              required: is_required(&schema, property_name),
              read_only: property.read_only,
            })
            .collect(),
        }),
        SchemaRecord::Enum(values) => context.enums.push(EnumDecl {
          name: naming::pascal_identifier(&name),
          members: values.iter().enumerate().map(|(index, value)| enum_member(index, value)).collect(),
        }),
        SchemaRecord::Union(schema) => context.unions.push(UnionDecl {
          name: naming::pascal_identifier(&name),
          expression: translator::translate_type(&schema, false),
        }),
      }
    }

    Ok(context)
  }

  /// The model partition re-projected into runtime field metadata.
  pub fn runtime_models_context(&self) -> GeneratorResult<RuntimeModelsContext> {
    let schemas = &self.document.components.schemas;
    let mut context = RuntimeModelsContext::default();

    for (name, record) in self.partition_schemas()? {
      let SchemaRecord::Model(schema) = record else {
        continue;
      };

      let mut properties = Vec::new();
      for (property_name, property) in model_properties(&schema) {
        let tag = classifier::classify_field(schemas, property)?;
        let options = if tag == FieldKind::Enum {
          enum_options(schemas, property)?
        } else {
          Vec::new()
        };
        properties.push(RuntimeProperty {
          name: property_name.clone(),
          tag,
          options,
          description: property.description.clone(),
          units: property.units.clone(),
          format: property.format.clone(),
          default: defaults::property_default(property),
          minimum: render_bound(property.minimum, property.min_length),
          maximum: render_bound(property.maximum, property.max_length),
        });
      }

      context.models.push(RuntimeModel {
        name: naming::pascal_identifier(&name),
        description: schema.description.clone(),
        properties,
      });
    }

    Ok(context)
  }

  /// Partitions `components.schemas` by shape, in document order. A
  /// top-level reference is resolved first and partitioned by its target;
  /// an `allOf` schema is unified before it joins the model bucket.
  fn partition_schemas(&self) -> GeneratorResult<Vec<(String, SchemaRecord)>> {
    let schemas = &self.document.components.schemas;
    let mut partitioned = Vec::new();

    for (name, schema) in schemas {
      let resolved = resolver::deref_schema(schemas, schema)?;
      let record = match &resolved.kind {
        SchemaKind::Enum { values, .. } => SchemaRecord::Enum(values.clone()),
        SchemaKind::OneOf(_) => SchemaRecord::Union(resolved.clone()),
        SchemaKind::AllOf(parts) => SchemaRecord::Model(unifier::unify(schemas, parts)?),
        _ => SchemaRecord::Model(resolved.clone()),
      };
      partitioned.push((name.clone(), record));
    }

    Ok(partitioned)
  }
}

fn function_context(operation: &Operation) -> FunctionContext {
  FunctionContext {
    summary: operation.summary.clone(),
    name: naming::camel_identifier(&operation.function_name),
    path_params: operation.path_parameters().map(param_context).collect(),
    query_params: operation.query_parameters().map(param_context).collect(),
    payload_type: payload_type(operation.request_body.as_ref()),
    response_type: payload_type(operation.response.as_ref()),
    method: operation.method.clone(),
    path: operation.interpolated_path(),
  }
}

fn param_context(parameter: &operations::Parameter) -> ParamContext {
  ParamContext {
    name: parameter.name.clone(),
    type_expression: payload_type(parameter.schema.as_ref()),
    description: parameter
      .description
      .clone()
      .unwrap_or_else(|| PARAM_DESCRIPTION_STUB.to_string()),
    required: parameter.required,
  }
}

/// Service files consume types from the declarations module, so every
/// translation here is externally qualified.
fn payload_type(schema: Option<&Schema>) -> String {
  schema.map_or_else(
    || translator::ANY_TYPE.to_string(),
    |schema| translator::translate_type(schema, true),
  )
}

fn model_properties(schema: &Schema) -> impl Iterator<Item = (&String, &Schema)> {
  let properties = match &schema.kind {
    SchemaKind::Object { properties, .. } => Some(properties),
    _ => None,
  };
  properties.into_iter().flatten()
}

fn is_required(schema: &Schema, property_name: &str) -> bool {
  match &schema.kind {
    SchemaKind::Object { required, .. } => required.iter().any(|name| name == property_name),
    _ => false,
  }
}

fn enum_member(index: usize, value: &Value) -> EnumMember {
  let rendered_name = match value {
    Value::String(text) => naming::pascal_identifier(text),
    other => naming::pascal_identifier(&other.to_string()),
  };
  let name = if rendered_name.is_empty() || rendered_name.starts_with(|c: char| c.is_ascii_digit()) {
    format!("Value{index}")
  } else {
    rendered_name
  };
  EnumMember {
    name,
    value: defaults::render_literal(value),
  }
}

/// Options for an enum-tagged field: the literal values of the (possibly
/// referenced) enum schema.
fn enum_options(
  schemas: &super::document::SchemaTable,
  property: &Schema,
) -> GeneratorResult<Vec<String>> {
  let resolved = resolver::deref_schema(schemas, property)?;
  let options = match &resolved.kind {
    SchemaKind::Enum { values, .. } => values.iter().map(defaults::render_literal).collect(),
    _ => Vec::new(),
  };
  Ok(options)
}

/// Numeric bounds win over length bounds; a model with neither renders the
/// absent literal.
fn render_bound(numeric: Option<f64>, length: Option<u64>) -> String {
  numeric.map(defaults::render_number).unwrap_or_else(|| {
    length.map_or_else(|| defaults::ABSENT.to_string(), |bound| bound.to_string())
  })
}
