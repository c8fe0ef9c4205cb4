//! TypeScript emitters. Each renderer reads one assembled context and
//! produces the text of one output file; nothing here reaches back into
//! the document or the schema table.

mod model_types;
mod runtime_models;
mod service;

pub use model_types::render_model_types;
pub use runtime_models::render_runtime_models;
pub use service::render_service;

const FILE_HEADER: &str = "/* Generated by oas-ts-gen. Do not edit by hand. */";

fn push_header(out: &mut String) {
  out.push_str(FILE_HEADER);
  out.push_str("\n\n");
}

/// Renders an optional description as a one-line doc comment. A `*/` in
/// the text would close the comment early, so it is defanged first.
fn push_doc_comment(out: &mut String, indent: &str, description: Option<&str>) {
  if let Some(text) = description {
    out.push_str(indent);
    out.push_str("/** ");
    out.push_str(&text.replace("*/", "*\\/"));
    out.push_str(" */\n");
  }
}
