use serde_json::json;

use super::common::{document_from, petstore};
use crate::generator::{
  classifier::FieldKind,
  orchestrator::{GeneratorOptions, Orchestrator, ServiceGrouping},
};

fn orchestrator(options: GeneratorOptions) -> Orchestrator {
  Orchestrator::new(petstore(), options)
}

#[test]
fn test_services_bucketed_by_tag_with_default_bucket() {
  let orchestrator = orchestrator(GeneratorOptions::default());
  let services = orchestrator.service_contexts();

  let names: Vec<_> = services.iter().map(|s| s.service_name.as_str()).collect();
  assert_eq!(names, ["pets", "default"]);
  assert_eq!(services[0].functions.len(), 2);
  assert_eq!(services[1].functions.len(), 1);
}

#[test]
fn test_single_service_grouping_uses_caller_name() {
  let orchestrator = orchestrator(GeneratorOptions {
    grouping: ServiceGrouping::SingleService {
      name: Some("pet-store".to_string()),
    },
    ..GeneratorOptions::default()
  });

  let services = orchestrator.service_contexts();
  assert_eq!(services.len(), 1);
  assert_eq!(services[0].service_name, "petStore");
  assert_eq!(services[0].functions.len(), 3);
}

#[test]
fn test_single_service_grouping_falls_back_to_literal() {
  let orchestrator = orchestrator(GeneratorOptions {
    grouping: ServiceGrouping::SingleService { name: None },
    ..GeneratorOptions::default()
  });

  assert_eq!(orchestrator.service_contexts()[0].service_name, "service");
}

#[test]
fn test_pet_lookup_function_end_to_end() {
  let orchestrator = orchestrator(GeneratorOptions::default());
  let services = orchestrator.service_contexts();

  let lookup = &services[0].functions[0];
  assert_eq!(lookup.name, "getPetsId");
  assert_eq!(lookup.method, "get");
  assert_eq!(lookup.path, "/pets/${params.id}");
  assert!(!lookup.path.contains("{id}"));
  assert_eq!(lookup.response_type, "ApiModelTypes.Pet");
  assert_eq!(lookup.summary.as_deref(), Some("Find a pet by id"));

  assert_eq!(lookup.path_params.len(), 1);
  assert_eq!(lookup.path_params[0].name, "id");
  assert_eq!(lookup.path_params[0].type_expression, "string");
  assert!(lookup.path_params[0].required);
  assert_eq!(lookup.query_params.len(), 1);
  assert_eq!(lookup.query_params[0].name, "verbose");
  assert!(!lookup.query_params[0].required);

  let create = &services[0].functions[1];
  assert_eq!(create.payload_type, "ApiModelTypes.Pet");
  // No declared response content degrades to the any placeholder.
  assert_eq!(create.response_type, "any");
  assert_eq!(services[0].base_path, "/v2");
}

#[test]
fn test_schema_partition_separates_enums_and_unions() {
  let orchestrator = orchestrator(GeneratorOptions::default());
  let context = orchestrator.model_types_context().unwrap();

  let model_names: Vec<_> = context.models.iter().map(|m| m.name.as_str()).collect();
  assert_eq!(model_names, ["Pet", "TrackedPet"]);
  assert!(!model_names.contains(&"Status"));

  assert_eq!(context.enums.len(), 1);
  assert_eq!(context.enums[0].name, "Status");
  assert_eq!(context.enums[0].members[0].name, "Active");
  assert_eq!(context.enums[0].members[0].value, "'active'");

  assert_eq!(context.unions.len(), 1);
  assert_eq!(context.unions[0].name, "PetOrOwner");
  assert_eq!(context.unions[0].expression, "Pet | string");
}

#[test]
fn test_all_of_model_is_unified_before_declaration() {
  let orchestrator = orchestrator(GeneratorOptions::default());
  let context = orchestrator.model_types_context().unwrap();

  let tracked = context.models.iter().find(|m| m.name == "TrackedPet").unwrap();
  let property_names: Vec<_> = tracked.properties.iter().map(|p| p.name.as_str()).collect();
  assert!(property_names.contains(&"name"));
  assert!(property_names.contains(&"trackerId"));

  let name = tracked.properties.iter().find(|p| p.name == "name").unwrap();
  assert!(name.required);
}

#[test]
fn test_model_property_type_expressions() {
  let orchestrator = orchestrator(GeneratorOptions::default());
  let context = orchestrator.model_types_context().unwrap();

  let pet = &context.models[0];
  let type_of = |name: &str| {
    pet
      .properties
      .iter()
      .find(|p| p.name == name)
      .map(|p| p.type_expression.clone())
      .unwrap()
  };

  assert_eq!(type_of("name"), "string");
  assert_eq!(type_of("age"), "number");
  // Enums referenced from model files are unqualified; declarations share
  // the file.
  assert_eq!(type_of("status"), "Status");
  assert_eq!(type_of("tags"), "Array<string>");
  assert_eq!(type_of("owner"), "Record<string, any>");
}

#[test]
fn test_runtime_metadata_projection() {
  let orchestrator = orchestrator(GeneratorOptions::default());
  let context = orchestrator.runtime_models_context().unwrap();

  let pet = &context.models[0];
  assert_eq!(pet.name, "Pet");
  let property = |name: &str| pet.properties.iter().find(|p| p.name == name).unwrap();

  assert_eq!(property("name").tag, FieldKind::String);
  assert_eq!(property("name").default, "''");
  assert_eq!(property("name").minimum, "1");
  assert_eq!(property("name").maximum, "64");

  assert_eq!(property("age").tag, FieldKind::Number);
  assert_eq!(property("age").default, "0");
  assert_eq!(property("age").minimum, "0");
  assert_eq!(property("age").maximum, "undefined");
  assert_eq!(property("age").units.as_deref(), Some("years"));

  assert_eq!(property("status").tag, FieldKind::Enum);
  assert_eq!(property("status").options, ["'active'", "'inactive'"]);

  assert_eq!(property("tags").tag, FieldKind::Array);
  assert_eq!(property("tags").default, "[]");
}

#[test]
fn test_enum_schemas_never_join_runtime_models() {
  let orchestrator = orchestrator(GeneratorOptions::default());
  let context = orchestrator.runtime_models_context().unwrap();
  assert!(context.models.iter().all(|m| m.name != "Status"));
}

#[test]
fn test_explicit_default_wins_in_runtime_records() {
  let document = document_from(json!({
    "components": {
      "schemas": {
        "Config": {
          "type": "object",
          "properties": {
            "retries": { "type": "integer", "minimum": 1, "default": 3 }
          }
        }
      }
    }
  }));

  let orchestrator = Orchestrator::new(document, GeneratorOptions::default());
  let context = orchestrator.runtime_models_context().unwrap();
  assert_eq!(context.models[0].properties[0].default, "3");
}

#[test]
fn test_context_builders_are_order_independent() {
  let first = orchestrator(GeneratorOptions::default());
  let second = orchestrator(GeneratorOptions::default());

  // Build in opposite orders; projections of an immutable document must
  // not observe each other.
  let services_a = first.service_contexts();
  let types_a = first.model_types_context().unwrap();
  let types_b = second.model_types_context().unwrap();
  let services_b = second.service_contexts();

  assert_eq!(
    serde_json::to_value(&services_a).unwrap(),
    serde_json::to_value(&services_b).unwrap()
  );
  assert_eq!(
    serde_json::to_value(&types_a).unwrap(),
    serde_json::to_value(&types_b).unwrap()
  );
}

#[test]
fn test_modern_client_flag_passes_through() {
  let orchestrator = orchestrator(GeneratorOptions {
    modern_client: true,
    ..GeneratorOptions::default()
  });
  assert!(orchestrator.service_contexts().iter().all(|s| s.modern_client));
}

#[test]
fn test_top_level_reference_partitions_by_target() {
  let document = document_from(json!({
    "components": {
      "schemas": {
        "StatusAlias": { "$ref": "#/components/schemas/Status" },
        "Status": { "type": "string", "enum": ["on", "off"] }
      }
    }
  }));

  let orchestrator = Orchestrator::new(document, GeneratorOptions::default());
  let context = orchestrator.model_types_context().unwrap();
  let enum_names: Vec<_> = context.enums.iter().map(|e| e.name.as_str()).collect();
  assert_eq!(enum_names, ["StatusAlias", "Status"]);
  assert!(context.models.is_empty());
}
