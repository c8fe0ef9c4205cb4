use super::{
  document::{BodySource, Document, OperationSource, Schema},
  naming,
};

/// Method keys recognized inside a path item; anything else in the map is
/// not an operation.
const HTTP_METHODS: [&str; 8] = ["get", "put", "post", "delete", "patch", "head", "options", "trace"];

/// Bodies and responses pick the first content type present in this order.
const CONTENT_TYPE_PREFERENCE: [&str; 4] = [
  "application/json",
  "application/xml",
  "application/x-www-form-urlencoded",
  "text/plain",
];

/// Bucket for operations that declare no tags in multi-tag mode.
pub const DEFAULT_TAG: &str = "default";

/// Bucket name when single-service mode is selected without a name.
pub const DEFAULT_SERVICE_NAME: &str = "service";

const SUCCESS_STATUS_PREFIX: char = '2';
const DEFAULT_RESPONSE_KEY: &str = "default";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterLocation {
  Path,
  Query,
  /// Header and cookie parameters land here and are dropped from
  /// generated functions.
  Other,
}

impl ParameterLocation {
  fn parse(raw: Option<&str>) -> Self {
    match raw.map(str::to_ascii_lowercase).as_deref() {
      Some("path") => Self::Path,
      Some("query") => Self::Query,
      _ => Self::Other,
    }
  }
}

#[derive(Debug, Clone)]
pub struct Parameter {
  pub name: String,
  pub location: ParameterLocation,
  pub required: bool,
  pub description: Option<String>,
  pub schema: Option<Schema>,
}

/// One HTTP method bound to one path: the unit of client-function
/// generation.
#[derive(Debug, Clone)]
pub struct Operation {
  pub path: String,
  pub method: String,
  pub function_name: String,
  pub summary: Option<String>,
  pub parameters: Vec<Parameter>,
  pub request_body: Option<Schema>,
  pub response: Option<Schema>,
  /// First declared tag, or the default bucket name.
  pub tag: String,
}

impl Operation {
  pub fn path_parameters(&self) -> impl Iterator<Item = &Parameter> {
    self
      .parameters
      .iter()
      .filter(|parameter| parameter.location == ParameterLocation::Path)
  }

  pub fn query_parameters(&self) -> impl Iterator<Item = &Parameter> {
    self
      .parameters
      .iter()
      .filter(|parameter| parameter.location == ParameterLocation::Query)
  }

  /// Rewrites every `{name}` placeholder matching a declared parameter to
  /// a `${params.name}` runtime interpolation. Placeholders with no
  /// matching parameter stay literal; the parameter's location does not
  /// matter here.
  pub fn interpolated_path(&self) -> String {
    let mut rendered = self.path.clone();
    for parameter in &self.parameters {
      let placeholder = format!("{{{}}}", parameter.name);
      let interpolation = format!("${{params.{}}}", parameter.name);
      rendered = rendered.replace(&placeholder, &interpolation);
    }
    rendered
  }
}

/// Flattens the document's `paths` map into one record per (path, method)
/// pair, preserving document insertion order.
pub fn extract_operations(document: &Document) -> Vec<Operation> {
  let mut operations = Vec::new();

  for (path, item) in &document.paths {
    for (method, source) in item {
      let method = method.to_ascii_lowercase();
      if !HTTP_METHODS.contains(&method.as_str()) {
        continue;
      }
      operations.push(build_operation(path, &method, source));
    }
  }

  operations
}

fn build_operation(path: &str, method: &str, source: &OperationSource) -> Operation {
  let function_name = source
    .operation_id
    .clone()
    .unwrap_or_else(|| derive_operation_id(method, path));

  let parameters = source
    .parameters
    .iter()
    .map(|parameter| Parameter {
      name: parameter.name.clone(),
      location: ParameterLocation::parse(parameter.location.as_deref()),
      required: parameter.required,
      description: parameter.description.clone(),
      schema: parameter.schema.clone(),
    })
    .collect();

  Operation {
    path: path.to_string(),
    method: method.to_string(),
    function_name,
    summary: source.summary.clone(),
    parameters,
    request_body: source.request_body.as_ref().and_then(select_content_schema).cloned(),
    response: success_response(source).and_then(select_content_schema).cloned(),
    tag: source.tags.first().cloned().unwrap_or_else(|| DEFAULT_TAG.to_string()),
  }
}

/// In absence of a declared operation id, cobble one together from the
/// method and path: `get` + `/users/{id}` -> `getUsersId`.
pub fn derive_operation_id(method: &str, path: &str) -> String {
  naming::camel_identifier(&format!("{method} {path}"))
}

/// The success response wrapper: the first `2xx` status in document order,
/// falling back to the `default` entry.
fn success_response(source: &OperationSource) -> Option<&BodySource> {
  source
    .responses
    .iter()
    .find(|(status, _)| status.starts_with(SUCCESS_STATUS_PREFIX))
    .map(|(_, body)| body)
    .or_else(|| source.responses.get(DEFAULT_RESPONSE_KEY))
}

fn select_content_schema(body: &BodySource) -> Option<&Schema> {
  CONTENT_TYPE_PREFERENCE
    .iter()
    .find_map(|content_type| body.content.get(*content_type))
    .and_then(|media_type| media_type.schema.as_ref())
}
