#![deny(missing_docs)]

//! # Type Mapping
//!
//! Converts property schemas into type expressions of a target language.
//! Handles primitives, arrays (recursively) and `$ref` model references.
//!
//! Resolution is total: shapes that cannot be understood degrade to the
//! language's untyped type instead of failing.

use crate::error::AppError;
use crate::models::SchemaObject;
use std::fmt::Display;
use std::str::FromStr;

/// Languages with a built-in template and type table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetLanguage {
    /// TypeScript interfaces.
    TypeScript,
    /// Java classes.
    Java,
}

impl TargetLanguage {
    /// Every supported language.
    pub const ALL: [TargetLanguage; 2] = [TargetLanguage::TypeScript, TargetLanguage::Java];

    /// Name of the template helper that resolves property types for this language.
    pub fn helper_name(self) -> &'static str {
        match self {
            TargetLanguage::TypeScript => "getTsType",
            TargetLanguage::Java => "getJavaType",
        }
    }

    /// The type table for this language.
    pub fn mapper(self) -> &'static dyn TypeMapper {
        match self {
            TargetLanguage::TypeScript => &TypeScriptMapper,
            TargetLanguage::Java => &JavaMapper,
        }
    }
}

impl Display for TargetLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetLanguage::TypeScript => write!(f, "TypeScript"),
            TargetLanguage::Java => write!(f, "Java"),
        }
    }
}

impl FromStr for TargetLanguage {
    type Err = AppError;

    /// Case-insensitive: `typescript`, `TypeScript`, `JAVA`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "typescript" => Ok(TargetLanguage::TypeScript),
            "java" => Ok(TargetLanguage::Java),
            _ => Err(AppError::UnsupportedLanguage(s.to_string())),
        }
    }
}

/// Scalar schema types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    /// `string`
    String,
    /// `number`
    Number,
    /// `integer`
    Integer,
    /// `boolean`
    Boolean,
}

/// The resolvable shape of a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertySchema {
    /// A scalar.
    Primitive(PrimitiveKind),
    /// An array whose elements have the inner shape.
    ArrayOf(Box<PropertySchema>),
    /// Another model, by name.
    ObjectRef(String),
    /// Anything else, including a plain `object` without `$ref`.
    Untyped,
}

impl From<&SchemaObject> for PropertySchema {
    fn from(schema: &SchemaObject) -> Self {
        // A bare `$ref` counts as an object reference.
        let type_ = match (schema.type_.as_deref(), schema.reference.as_deref()) {
            (None, Some(_)) => "object",
            (Some(t), _) => t,
            (None, None) => return PropertySchema::Untyped,
        };

        match type_ {
            "string" => PropertySchema::Primitive(PrimitiveKind::String),
            "number" => PropertySchema::Primitive(PrimitiveKind::Number),
            "integer" => PropertySchema::Primitive(PrimitiveKind::Integer),
            "boolean" => PropertySchema::Primitive(PrimitiveKind::Boolean),
            "array" => {
                let inner = schema
                    .items
                    .as_deref()
                    .map(PropertySchema::from)
                    .unwrap_or(PropertySchema::Untyped);
                PropertySchema::ArrayOf(Box::new(inner))
            }
            "object" => schema
                .reference
                .as_deref()
                .and_then(extract_ref_name)
                .map(PropertySchema::ObjectRef)
                .unwrap_or(PropertySchema::Untyped),
            _ => PropertySchema::Untyped,
        }
    }
}

/// Extracts the model name from a reference string.
/// e.g. `#/components/schemas/User` -> `User`
///
/// Returns `None` when the trailing segment is empty.
pub fn extract_ref_name(ref_loc: &str) -> Option<String> {
    ref_loc
        .split('/')
        .next_back()
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

/// Per-language type table.
///
/// Only the leaves differ between languages; [`TypeMapper::map`] walks the shape.
pub trait TypeMapper {
    /// Type name for a scalar.
    fn primitive(&self, kind: PrimitiveKind) -> &'static str;

    /// Wraps an element type in the language's list syntax.
    fn list_of(&self, element: &str) -> String;

    /// The catch-all type.
    fn untyped(&self) -> &'static str;

    /// Resolves a full property shape.
    fn map(&self, schema: &PropertySchema) -> String {
        match schema {
            PropertySchema::Primitive(kind) => self.primitive(*kind).to_string(),
            PropertySchema::ArrayOf(inner) => self.list_of(&self.map(inner)),
            PropertySchema::ObjectRef(name) => name.clone(),
            PropertySchema::Untyped => self.untyped().to_string(),
        }
    }
}

/// TypeScript: `string`, `number`, `boolean`, `T[]`, `any`.
pub struct TypeScriptMapper;

impl TypeMapper for TypeScriptMapper {
    fn primitive(&self, kind: PrimitiveKind) -> &'static str {
        match kind {
            PrimitiveKind::String => "string",
            PrimitiveKind::Number | PrimitiveKind::Integer => "number",
            PrimitiveKind::Boolean => "boolean",
        }
    }

    fn list_of(&self, element: &str) -> String {
        format!("{}[]", element)
    }

    fn untyped(&self) -> &'static str {
        "any"
    }
}

/// Java: boxed `String`, `Long`, `Boolean`, `List<T>`, `Object`.
pub struct JavaMapper;

impl TypeMapper for JavaMapper {
    fn primitive(&self, kind: PrimitiveKind) -> &'static str {
        match kind {
            PrimitiveKind::String => "String",
            // Integers and floats collapse onto one 64-bit type.
            PrimitiveKind::Number | PrimitiveKind::Integer => "Long",
            PrimitiveKind::Boolean => "Boolean",
        }
    }

    fn list_of(&self, element: &str) -> String {
        format!("List<{}>", element)
    }

    fn untyped(&self) -> &'static str {
        "Object"
    }
}

/// Resolves a property schema into a type expression of `language`.
pub fn resolve_type(schema: &SchemaObject, language: TargetLanguage) -> String {
    language.mapper().map(&PropertySchema::from(schema))
}
