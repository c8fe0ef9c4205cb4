use serde_json::json;

use crate::generator::document::Document;

pub(crate) fn document_from(value: serde_json::Value) -> Document {
  serde_json::from_value(value).unwrap()
}

/// A small petstore document exercising tags, path parameters, references,
/// enums, unions, and an `allOf` composition.
pub(crate) fn petstore() -> Document {
  document_from(json!({
    "basePath": "/v2",
    "paths": {
      "/pets/{id}": {
        "get": {
          "summary": "Find a pet by id",
          "tags": ["pets"],
          "parameters": [
            { "name": "id", "in": "path", "required": true, "schema": { "type": "string" } },
            { "name": "verbose", "in": "query", "schema": { "type": "boolean" } }
          ],
          "responses": {
            "200": {
              "content": {
                "application/json": { "schema": { "$ref": "#/components/schemas/Pet" } }
              }
            }
          }
        }
      },
      "/pets": {
        "post": {
          "tags": ["pets"],
          "requestBody": {
            "content": {
              "application/json": { "schema": { "$ref": "#/components/schemas/Pet" } }
            }
          },
          "responses": {}
        }
      },
      "/ping": { "get": {} }
    },
    "components": {
      "schemas": {
        "Pet": {
          "type": "object",
          "description": "A pet in the store",
          "required": ["name"],
          "properties": {
            "name": { "type": "string", "minLength": 1, "maxLength": 64 },
            "age": { "type": "integer", "minimum": 0, "x-units": "years" },
            "status": { "$ref": "#/components/schemas/Status" },
            "tags": { "type": "array", "items": { "type": "string" } },
            "owner": { "type": "object" }
          }
        },
        "Status": { "type": "string", "enum": ["active", "inactive"] },
        "PetOrOwner": {
          "oneOf": [
            { "$ref": "#/components/schemas/Pet" },
            { "type": "string" }
          ]
        },
        "TrackedPet": {
          "allOf": [
            { "$ref": "#/components/schemas/Pet" },
            { "type": "object", "properties": { "trackerId": { "type": "string" } } }
          ]
        }
      }
    }
  }))
}
