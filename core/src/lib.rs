#![deny(missing_docs)]

//! # Modelgen Core
//!
//! Turns the `components.schemas` section of a YAML document into TypeScript
//! interfaces or Java classes through Handlebars templates.
//!
//! The pipeline is pure apart from reading the document and an optional custom
//! template: [`generate`] returns the rendered files and leaves writing them to the caller.

/// Shared error types.
pub mod error;

/// Serde models of the schema document.
pub mod models;

/// Type mapping logic (schema -> TypeScript / Java).
pub mod type_mapping;

/// Document loading.
pub mod loader;

/// Template selection.
pub mod templates;

/// Template rendering.
pub mod renderer;

/// Pipeline entry point.
pub mod assembler;

pub use assembler::{generate, GenerateOptions};
pub use error::{AppError, AppResult};
pub use loader::{load_models, parse_models, DocumentLocation};
pub use models::{ModelDefinition, ModelMap, SchemaObject};
pub use renderer::{render, Grouping, RenderedFile};
pub use templates::{
    select_templates, FileNamePattern, TemplateChoice, TemplateEntry, TemplateSpec,
};
pub use type_mapping::{resolve_type, PrimitiveKind, PropertySchema, TargetLanguage, TypeMapper};
