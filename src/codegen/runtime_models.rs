use std::fmt::Write;

use itertools::Itertools;

use crate::generator::{contexts::RuntimeModelsContext, defaults};

use super::push_header;

/// Renders the runtime-metadata module: one exported record per model
/// describing each field's tag, options, default, and bounds. Defaults and
/// bounds arrive as ready-made TypeScript literals and are inserted
/// verbatim.
pub fn render_runtime_models(context: &RuntimeModelsContext) -> String {
  let mut out = String::new();
  push_header(&mut out);

  for model in &context.models {
    let _ = writeln!(out, "export const {}Model = {{", model.name);
    for property in &model.properties {
      let _ = writeln!(out, "  {}: {{", property.name);
      let _ = writeln!(out, "    type: '{}',", property.tag);
      let _ = writeln!(out, "    options: [{}],", property.options.iter().join(", "));
      let _ = writeln!(out, "    description: {},", text_or_undefined(property.description.as_deref()));
      let _ = writeln!(out, "    units: {},", text_or_undefined(property.units.as_deref()));
      let _ = writeln!(out, "    format: {},", text_or_undefined(property.format.as_deref()));
      let _ = writeln!(out, "    default: {},", property.default);
      let _ = writeln!(out, "    minimum: {},", property.minimum);
      let _ = writeln!(out, "    maximum: {},", property.maximum);
      out.push_str("  },\n");
    }
    out.push_str("};\n\n");
  }

  out
}

fn text_or_undefined(text: Option<&str>) -> String {
  text.map_or_else(|| "undefined".to_string(), defaults::quote_text)
}

#[cfg(test)]
mod tests {
  use crate::generator::{
    classifier::FieldKind,
    contexts::{RuntimeModel, RuntimeProperty},
  };

  use super::*;

  #[test]
  fn test_renders_field_metadata_record() {
    let context = RuntimeModelsContext {
      models: vec![RuntimeModel {
        name: "Pet".to_string(),
        description: None,
        properties: vec![RuntimeProperty {
          name: "status".to_string(),
          tag: FieldKind::Enum,
          options: vec!["'active'".to_string(), "'inactive'".to_string()],
          description: None,
          units: Some("state".to_string()),
          format: None,
          default: "undefined".to_string(),
          minimum: "undefined".to_string(),
          maximum: "undefined".to_string(),
        }],
      }],
    };

    let rendered = render_runtime_models(&context);
    assert!(rendered.contains("export const PetModel = {"));
    assert!(rendered.contains("    type: 'ENUM',"));
    assert!(rendered.contains("    options: ['active', 'inactive'],"));
    assert!(rendered.contains("    units: 'state',"));
    assert!(rendered.contains("    default: undefined,"));
  }

  #[test]
  fn test_apostrophes_in_text_fields_stay_inside_the_literal() {
    let context = RuntimeModelsContext {
      models: vec![RuntimeModel {
        name: "Pet".to_string(),
        description: None,
        properties: vec![RuntimeProperty {
          name: "name".to_string(),
          tag: FieldKind::String,
          options: vec![],
          description: Some("The pet's name".to_string()),
          units: None,
          format: None,
          default: "''".to_string(),
          minimum: "undefined".to_string(),
          maximum: "undefined".to_string(),
        }],
      }],
    };

    let rendered = render_runtime_models(&context);
    assert!(rendered.contains("    description: 'The pet\\'s name',"));
    assert!(!rendered.contains("'The pet's name'"));
  }
}
