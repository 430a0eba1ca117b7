#![deny(missing_docs)]

//! # Output Assembler
//!
//! Entry point of the pipeline: load models, select templates, render.
//! Returns the files to write; persisting them is the caller's job.

use crate::error::AppResult;
use crate::loader::{load_models, DocumentLocation};
use crate::renderer::{render, Grouping, RenderedFile};
use crate::templates::{select_templates, TemplateChoice};

/// Inputs of one generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// The model document.
    pub document: DocumentLocation,
    /// Target language name, case-insensitive (`typescript`, `java`).
    pub language: String,
    /// Built-in or custom template.
    pub template: TemplateChoice,
    /// One file per model or one for all.
    pub grouping: Grouping,
}

impl GenerateOptions {
    /// Options with the grouping derived from the language.
    pub fn new(
        document: DocumentLocation,
        language: impl Into<String>,
        template: TemplateChoice,
    ) -> Self {
        let language = language.into();
        let grouping = Grouping::for_language(&language);
        Self {
            document,
            language,
            template,
            grouping,
        }
    }

    /// Overrides the grouping.
    pub fn with_grouping(mut self, grouping: Grouping) -> Self {
        self.grouping = grouping;
        self
    }
}

/// Runs the pipeline.
///
/// All-or-nothing: any error aborts the run and no files are returned.
///
/// # Arguments
///
/// * `options` - Document, language, template and grouping.
pub fn generate(options: &GenerateOptions) -> AppResult<Vec<RenderedFile>> {
    let models = load_models(&options.document)?;
    let spec = select_templates(&options.language, &options.template)?;

    tracing::debug!(
        document = %options.document.name,
        models = models.len(),
        templates = spec.entries.len(),
        grouping = ?options.grouping,
        "generating"
    );

    render(&spec, &models, &options.document.name, options.grouping)
}
