use std::fmt::Write;

use itertools::Itertools;

use crate::generator::contexts::{FunctionContext, ServiceContext};

use super::{push_doc_comment, push_header};

const BODY_METHODS: [&str; 3] = ["post", "put", "patch"];

/// Renders one request-function module for a service bucket.
///
/// The axios 1.x release changed its request-header typings; the
/// `MODERN_CLIENT` flag picks which alias the generated functions accept.
pub fn render_service(context: &ServiceContext) -> String {
  let mut out = String::new();
  push_header(&mut out);

  out.push_str("import axios from \"axios\";\n");
  if context.modern_client {
    out.push_str("import type { RawAxiosRequestHeaders } from \"axios\";\n");
  } else {
    out.push_str("import type { AxiosRequestHeaders } from \"axios\";\n");
  }
  let _ = writeln!(out, "import * as ApiModelTypes from \"{}\";", context.types_directory);
  out.push('\n');

  if context.modern_client {
    out.push_str("export type RequestHeaders = RawAxiosRequestHeaders;\n\n");
  } else {
    out.push_str("export type RequestHeaders = AxiosRequestHeaders;\n\n");
  }

  let _ = writeln!(out, "const BASE_PATH = \"{}\";\n", context.base_path);

  for function in &context.functions {
    push_function(&mut out, function);
  }

  out
}

fn push_function(out: &mut String, function: &FunctionContext) {
  push_doc_comment(out, "", function.summary.as_deref());

  let mut arguments = Vec::new();
  let declared_params: Vec<_> = function.path_params.iter().chain(&function.query_params).collect();
  if !declared_params.is_empty() {
    let fields = declared_params
      .iter()
      .map(|param| {
        let optional = if param.required { "" } else { "?" };
        format!("{}{optional}: {}", param.name, param.type_expression)
      })
      .join("; ");
    arguments.push(format!("params: {{ {fields} }}"));
  }

  let has_body = BODY_METHODS.contains(&function.method.as_str());
  if has_body {
    arguments.push(format!("payload: {}", function.payload_type));
  }
  arguments.push("headers?: RequestHeaders".to_string());

  let _ = writeln!(
    out,
    "export const {} = ({}): Promise<{}> =>",
    function.name,
    arguments.join(", "),
    function.response_type
  );

  let mut options = Vec::new();
  if !function.query_params.is_empty() {
    let entries = function
      .query_params
      .iter()
      .map(|param| format!("{}: params.{}", param.name, param.name))
      .join(", ");
    options.push(format!("params: {{ {entries} }}"));
  }
  options.push("headers".to_string());

  let url = format!("`${{BASE_PATH}}{}`", function.path);
  if has_body {
    let _ = writeln!(
      out,
      "  axios.{}({url}, payload, {{ {} }});\n",
      function.method,
      options.join(", ")
    );
  } else {
    let _ = writeln!(out, "  axios.{}({url}, {{ {} }});\n", function.method, options.join(", "));
  }
}

#[cfg(test)]
mod tests {
  use crate::generator::contexts::ParamContext;

  use super::*;

  fn pet_service(modern_client: bool) -> ServiceContext {
    ServiceContext {
      service_name: "pets".to_string(),
      types_directory: "../apiModelTypes".to_string(),
      base_path: "/v2".to_string(),
      modern_client,
      functions: vec![
        FunctionContext {
          summary: Some("Find a pet by id".to_string()),
          name: "getPetsId".to_string(),
          path_params: vec![ParamContext {
            name: "id".to_string(),
            type_expression: "string".to_string(),
            description: "stub".to_string(),
            required: true,
          }],
          query_params: vec![ParamContext {
            name: "verbose".to_string(),
            type_expression: "boolean".to_string(),
            description: "stub".to_string(),
            required: false,
          }],
          payload_type: "any".to_string(),
          response_type: "ApiModelTypes.Pet".to_string(),
          method: "get".to_string(),
          path: "/pets/${params.id}".to_string(),
        },
        FunctionContext {
          summary: None,
          name: "postPets".to_string(),
          path_params: vec![],
          query_params: vec![],
          payload_type: "ApiModelTypes.Pet".to_string(),
          response_type: "any".to_string(),
          method: "post".to_string(),
          path: "/pets".to_string(),
        },
      ],
    }
  }

  #[test]
  fn test_get_function_interpolates_path_and_query() {
    let rendered = render_service(&pet_service(true));
    assert!(rendered.contains("import * as ApiModelTypes from \"../apiModelTypes\";"));
    assert!(rendered.contains("/** Find a pet by id */"));
    assert!(rendered.contains(
      "export const getPetsId = (params: { id: string; verbose?: boolean }, headers?: RequestHeaders): Promise<ApiModelTypes.Pet> =>"
    ));
    assert!(rendered.contains("axios.get(`${BASE_PATH}/pets/${params.id}`, { params: { verbose: params.verbose }, headers });"));
    assert!(!rendered.contains("{id}"));
  }

  #[test]
  fn test_post_function_takes_payload() {
    let rendered = render_service(&pet_service(true));
    assert!(rendered.contains("export const postPets = (payload: ApiModelTypes.Pet, headers?: RequestHeaders)"));
    assert!(rendered.contains("axios.post(`${BASE_PATH}/pets`, payload, { headers });"));
  }

  #[test]
  fn test_optional_marker_tracks_required_flag() {
    let rendered = render_service(&pet_service(true));
    assert!(rendered.contains("id: string"));
    assert!(!rendered.contains("id?: string"));
    assert!(rendered.contains("verbose?: boolean"));
  }

  #[test]
  fn test_header_typing_tracks_client_version() {
    assert!(render_service(&pet_service(true)).contains("RawAxiosRequestHeaders"));
    assert!(render_service(&pet_service(false)).contains("export type RequestHeaders = AxiosRequestHeaders;"));
  }
}
