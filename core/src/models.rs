#![deny(missing_docs)]

//! # Schema Models
//!
//! Serde representation of the `components.schemas` section of a model document.
//!
//! Fields the generator understands are typed; everything else on a model or a
//! property is kept in `extensions` so custom templates can still reach it.
//! Recognised fields are read leniently: a value of the wrong shape is dropped
//! instead of failing the whole document.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_yaml::{Mapping, Value as YamlValue};

/// One property's schema, as written in the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaObject {
    /// The declared `type` (e.g. "string", "array").
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub type_: Option<String>,

    /// Element schema for arrays.
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub items: Option<Box<SchemaObject>>,

    /// Reference to another model, e.g. `#/components/schemas/User`.
    #[serde(
        rename = "$ref",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub reference: Option<String>,

    /// Free-form documentation.
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,

    /// Unrecognised keys (`format`, `example`, ...).
    #[serde(flatten)]
    pub extensions: IndexMap<String, Value>,
}

impl SchemaObject {
    /// Builds a schema carrying only a `type`.
    pub fn of_type(type_: impl Into<String>) -> Self {
        Self {
            type_: Some(type_.into()),
            ..Self::default()
        }
    }

    /// Builds a schema carrying only a `$ref`.
    pub fn reference(target: impl Into<String>) -> Self {
        Self {
            reference: Some(target.into()),
            ..Self::default()
        }
    }

    /// Builds an `array` schema over `items`.
    pub fn array_of(items: SchemaObject) -> Self {
        Self {
            type_: Some("array".into()),
            items: Some(Box::new(items)),
            ..Self::default()
        }
    }
}

/// A named model under `components.schemas`.
///
/// The name itself is the key of the surrounding map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelDefinition {
    /// Display name.
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,

    /// Free-form documentation.
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,

    /// Property name to schema, in declaration order.
    #[serde(default, deserialize_with = "lenient_properties")]
    pub properties: IndexMap<String, SchemaObject>,

    /// Unrecognised keys (`type`, `required`, ...).
    #[serde(flatten)]
    pub extensions: IndexMap<String, Value>,
}

/// Ordered mapping of model name to definition.
pub type ModelMap = IndexMap<String, ModelDefinition>;

/// Rewrites a YAML tree into the shape JSON can hold.
///
/// Scalar mapping keys become strings (`200` -> `"200"`, `~` -> `"null"`), entries with
/// collection keys are dropped, and tags are stripped down to their value.
pub fn stringify_keys(value: YamlValue) -> YamlValue {
    match value {
        YamlValue::Mapping(mapping) => YamlValue::Mapping(
            mapping
                .into_iter()
                .filter_map(|(key, value)| {
                    let key = match key {
                        YamlValue::String(s) => s,
                        YamlValue::Number(n) => n.to_string(),
                        YamlValue::Bool(b) => b.to_string(),
                        YamlValue::Null => "null".to_string(),
                        _ => return None,
                    };
                    Some((YamlValue::String(key), stringify_keys(value)))
                })
                .collect::<Mapping>(),
        ),
        YamlValue::Sequence(items) => {
            YamlValue::Sequence(items.into_iter().map(stringify_keys).collect())
        }
        YamlValue::Tagged(tagged) => stringify_keys(tagged.value),
        scalar => scalar,
    }
}

/// Accepts any value and keeps it only if it has the expected shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Reads `properties`, turning entries that are not mappings (e.g. `name:` with no body)
/// into empty schemas.
fn lenient_properties<'de, D>(deserializer: D) -> Result<IndexMap<String, SchemaObject>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Object(entries) = value else {
        return Ok(IndexMap::new());
    };

    Ok(entries
        .into_iter()
        .map(|(name, schema)| (name, serde_json::from_value(schema).unwrap_or_default()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_fields_and_extensions() {
        let yaml = r##"
type: string
format: email
description: Contact address
"##;
        let schema: SchemaObject = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(schema.type_.as_deref(), Some("string"));
        assert_eq!(schema.description.as_deref(), Some("Contact address"));
        assert_eq!(schema.extensions.get("format"), Some(&Value::from("email")));
    }

    #[test]
    fn test_wrong_shaped_type_is_dropped() {
        // OAS 3.1 style type lists are not understood and degrade to absent.
        let yaml = "type: [string, 'null']\n$ref: '#/components/schemas/User'\n";
        let schema: SchemaObject = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(schema.type_, None);
        assert_eq!(schema.reference.as_deref(), Some("#/components/schemas/User"));
    }

    #[test]
    fn test_model_keeps_property_order() {
        let yaml = r#"
title: User
properties:
  zeta: { type: string }
  alpha: { type: integer }
  mid: { type: boolean }
"#;
        let model: ModelDefinition = serde_yaml::from_str(yaml).unwrap();
        let names: Vec<&str> = model.properties.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_empty_property_body() {
        let yaml = "properties:\n  name:\n  age: { type: integer }\n";
        let model: ModelDefinition = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(model.properties["name"], SchemaObject::default());
        assert_eq!(model.properties["age"].type_.as_deref(), Some("integer"));
    }

    #[test]
    fn test_missing_properties_defaults_to_empty() {
        let model: ModelDefinition = serde_yaml::from_str("title: Empty\n").unwrap();
        assert!(model.properties.is_empty());
        assert_eq!(model.title.as_deref(), Some("Empty"));
    }

    #[test]
    fn test_non_string_keys_are_stringified() {
        let yaml = r#"
properties:
  1: { type: string }
  code:
    type: integer
    example: { 200: ok, true: yes, ~: none }
"#;
        let raw: YamlValue = serde_yaml::from_str(yaml).unwrap();
        let model = ModelDefinition::deserialize(stringify_keys(raw)).unwrap();

        let names: Vec<&str> = model.properties.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["1", "code"]);
        assert_eq!(model.properties["1"].type_.as_deref(), Some("string"));
        assert_eq!(
            model.properties["code"].extensions["example"],
            serde_json::json!({ "200": "ok", "true": "yes", "null": "none" })
        );
    }

    #[test]
    fn test_collection_keys_and_tags() {
        let yaml = r#"
properties:
  ? [a, b]
  : { type: string }
  id: !custom { type: integer }
"#;
        let raw: YamlValue = serde_yaml::from_str(yaml).unwrap();
        let model = ModelDefinition::deserialize(stringify_keys(raw)).unwrap();

        let names: Vec<&str> = model.properties.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["id"]);
        assert_eq!(model.properties["id"].type_.as_deref(), Some("integer"));
    }

    #[test]
    fn test_serialization_skips_absent_fields() {
        let json = serde_json::to_value(SchemaObject::of_type("string")).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "string" }));
    }
}
