#![deny(missing_docs)]

//! # Renderer
//!
//! Binds templates to model data through Handlebars.
//!
//! Type helpers (`getTsType`, `getJavaType`) are registered on a registry built
//! for each call; nothing is shared between invocations.

use crate::error::AppResult;
use crate::models::{ModelDefinition, ModelMap, SchemaObject};
use crate::templates::{TemplateEntry, TemplateSpec};
use crate::type_mapping::{resolve_type, TargetLanguage};
use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderErrorReason,
};
use serde::Serialize;

/// A generated file, ready to be persisted by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// File name including extension, no directory.
    pub file_name: String,
    /// Full file text.
    pub content: String,
}

/// Whether models share one output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// One file per model, named after the model.
    PerModel,
    /// One file for all models, named after the document.
    Aggregated,
}

impl Grouping {
    /// Java keeps one class per file; everything else is aggregated.
    pub fn for_language(language: &str) -> Self {
        if language.eq_ignore_ascii_case("java") {
            Grouping::PerModel
        } else {
            Grouping::Aggregated
        }
    }
}

/// Template data for one model: its own fields plus `key` and `modelName`.
#[derive(Debug, Serialize)]
struct ModelContext<'a> {
    #[serde(flatten)]
    model: &'a ModelDefinition,
    key: &'a str,
    #[serde(rename = "modelName")]
    model_name: &'a str,
}

impl<'a> ModelContext<'a> {
    fn new(name: &'a str, model: &'a ModelDefinition) -> Self {
        Self {
            model,
            key: name,
            model_name: name,
        }
    }
}

/// Template data for aggregated rendering.
#[derive(Debug, Serialize)]
struct DocumentContext<'a> {
    models: Vec<ModelContext<'a>>,
}

/// Helper resolving a property schema to a type of a fixed language.
///
/// Usage: `{{getTsType this}}` inside `{{#each properties}}`.
#[derive(Debug, Clone, Copy)]
pub struct TypeHelper {
    language: TargetLanguage,
}

impl TypeHelper {
    /// A helper for `language`.
    pub fn new(language: TargetLanguage) -> Self {
        Self { language }
    }
}

impl HelperDef for TypeHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let param = h.param(0).ok_or_else(|| {
            RenderErrorReason::ParamNotFoundForIndex(self.language.helper_name(), 0)
        })?;

        // Values that are not schema objects fall back to the untyped type.
        let schema: SchemaObject =
            serde_json::from_value(param.value().clone()).unwrap_or_default();

        out.write(&resolve_type(&schema, self.language))?;
        Ok(())
    }
}

/// Builds a registry with both type helpers and HTML escaping disabled.
pub fn registry() -> Handlebars<'static> {
    let mut hb = Handlebars::new();
    hb.register_escape_fn(handlebars::no_escape);
    for language in TargetLanguage::ALL {
        hb.register_helper(language.helper_name(), Box::new(TypeHelper::new(language)));
    }
    hb
}

/// Renders every template of `spec` against `models`.
///
/// `document_name` names the output in [`Grouping::Aggregated`] mode.
///
/// # Errors
///
/// * `TemplateCompile` if a template is not valid Handlebars.
/// * `TemplateRender` if rendering fails.
pub fn render(
    spec: &TemplateSpec,
    models: &ModelMap,
    document_name: &str,
    grouping: Grouping,
) -> AppResult<Vec<RenderedFile>> {
    let mut hb = registry();
    let mut files = Vec::new();

    for (index, entry) in spec.entries.iter().enumerate() {
        let template_name = format!("template_{}", index);
        hb.register_template_string(&template_name, &entry.source)?;

        match grouping {
            Grouping::PerModel => {
                for (name, model) in models {
                    let content = hb.render(&template_name, &ModelContext::new(name, model))?;
                    files.push(named(entry, name, content));
                }
            }
            Grouping::Aggregated => {
                let context = DocumentContext {
                    models: models
                        .iter()
                        .map(|(name, model)| ModelContext::new(name, model))
                        .collect(),
                };
                let content = hb.render(&template_name, &context)?;
                files.push(named(entry, document_name, content));
            }
        }
    }

    Ok(files)
}

fn named(entry: &TemplateEntry, name: &str, content: String) -> RenderedFile {
    let file_name = entry.file_name.resolve(name);
    tracing::debug!(file = %file_name, bytes = content.len(), "rendered");
    RenderedFile { file_name, content }
}
