use std::fmt::Write;

use crate::generator::contexts::ModelTypesContext;

use super::{push_doc_comment, push_header};

/// Renders the type-declarations module: one interface per model, one
/// enum per enum schema, one type alias per union.
pub fn render_model_types(context: &ModelTypesContext) -> String {
  let mut out = String::new();
  push_header(&mut out);

  for model in &context.models {
    push_doc_comment(&mut out, "", model.description.as_deref());
    let _ = writeln!(out, "export interface {} {{", model.name);
    for property in &model.properties {
      push_doc_comment(&mut out, "  ", property.description.as_deref());
      let modifier = if property.read_only { "readonly " } else { "" };
      let optional = if property.required { "" } else { "?" };
      let _ = writeln!(
        out,
        "  {modifier}{}{optional}: {};",
        property.name, property.type_expression
      );
    }
    out.push_str("}\n\n");
  }

  for declaration in &context.enums {
    let _ = writeln!(out, "export enum {} {{", declaration.name);
    for member in &declaration.members {
      let _ = writeln!(out, "  {} = {},", member.name, member.value);
    }
    out.push_str("}\n\n");
  }

  for union in &context.unions {
    let _ = writeln!(out, "export type {} = {};", union.name, union.expression);
  }

  out
}
