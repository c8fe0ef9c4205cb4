use serde::Serialize;

use super::classifier::FieldKind;

/// The data handed to the service emitter, one per service bucket.
///
/// Field names keep the UPPER_SNAKE keys the emitters are written
/// against; serializing a context yields exactly the shape the template
/// layer consumes.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceContext {
  #[serde(rename = "SERVICE_NAME")]
  pub service_name: String,
  #[serde(rename = "TYPES_DIRECTORY")]
  pub types_directory: String,
  #[serde(rename = "BASE_PATH")]
  pub base_path: String,
  #[serde(rename = "MODERN_CLIENT")]
  pub modern_client: bool,
  #[serde(rename = "FUNCTIONS")]
  pub functions: Vec<FunctionContext>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FunctionContext {
  #[serde(rename = "FUNCTION_SUMMARY")]
  pub summary: Option<String>,
  #[serde(rename = "FUNCTION_NAME")]
  pub name: String,
  #[serde(rename = "FUNCTION_PARAMS")]
  pub path_params: Vec<ParamContext>,
  #[serde(rename = "QUERY_PARAMS")]
  pub query_params: Vec<ParamContext>,
  #[serde(rename = "FUNCTION_PAYLOAD")]
  pub payload_type: String,
  #[serde(rename = "FUNCTION_RESPONSE")]
  pub response_type: String,
  #[serde(rename = "REQUEST_METHOD")]
  pub method: String,
  #[serde(rename = "REQUEST_PATH")]
  pub path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParamContext {
  #[serde(rename = "FUNCTION_PARAM")]
  pub name: String,
  #[serde(rename = "FUNCTION_PARAM_TYPE")]
  pub type_expression: String,
  #[serde(rename = "FUNCTION_PARAM_DESCRIPTION")]
  pub description: String,
  #[serde(rename = "FUNCTION_PARAM_REQUIRED")]
  pub required: bool,
}

/// Declarations context: the model/enum/union partition of
/// `components.schemas`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModelTypesContext {
  #[serde(rename = "MODELS")]
  pub models: Vec<ModelDecl>,
  #[serde(rename = "ENUMS")]
  pub enums: Vec<EnumDecl>,
  #[serde(rename = "TYPES")]
  pub unions: Vec<UnionDecl>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelDecl {
  #[serde(rename = "MODEL_NAME")]
  pub name: String,
  #[serde(rename = "MODEL_DESCRIPTION")]
  pub description: Option<String>,
  #[serde(rename = "MODEL_PROPERTIES")]
  pub properties: Vec<PropertyDecl>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PropertyDecl {
  #[serde(rename = "PROPERTY_NAME")]
  pub name: String,
  #[serde(rename = "PROPERTY_TYPE")]
  pub type_expression: String,
  #[serde(rename = "PROPERTY_DESCRIPTION")]
  pub description: Option<String>,
  #[serde(rename = "PROPERTY_REQUIRED")]
  pub required: bool,
  #[serde(rename = "PROPERTY_READ_ONLY")]
  pub read_only: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnumDecl {
  #[serde(rename = "ENUM_NAME")]
  pub name: String,
  #[serde(rename = "ENUM_MEMBERS")]
  pub members: Vec<EnumMember>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnumMember {
  #[serde(rename = "MEMBER_NAME")]
  pub name: String,
  #[serde(rename = "MEMBER_VALUE")]
  pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnionDecl {
  #[serde(rename = "TYPE_NAME")]
  pub name: String,
  #[serde(rename = "TYPE_EXPRESSION")]
  pub expression: String,
}

/// Runtime-metadata context: the model partition re-projected through the
/// field classifier and default synthesizer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RuntimeModelsContext {
  #[serde(rename = "MODELS")]
  pub models: Vec<RuntimeModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RuntimeModel {
  #[serde(rename = "MODEL_NAME")]
  pub name: String,
  #[serde(rename = "MODEL_DESCRIPTION")]
  pub description: Option<String>,
  #[serde(rename = "MODEL_PROPERTIES")]
  pub properties: Vec<RuntimeProperty>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RuntimeProperty {
  #[serde(rename = "PROPERTY_NAME")]
  pub name: String,
  #[serde(rename = "PROPERTY_TYPE")]
  pub tag: FieldKind,
  #[serde(rename = "PROPERTY_OPTIONS")]
  pub options: Vec<String>,
  #[serde(rename = "PROPERTY_DESCRIPTION")]
  pub description: Option<String>,
  #[serde(rename = "PROPERTY_UNITS")]
  pub units: Option<String>,
  #[serde(rename = "PROPERTY_FORMAT")]
  pub format: Option<String>,
  #[serde(rename = "PROPERTY_DEFAULT")]
  pub default: String,
  #[serde(rename = "PROPERTY_MINIMUM")]
  pub minimum: String,
  #[serde(rename = "PROPERTY_MAXIMUM")]
  pub maximum: String,
}
