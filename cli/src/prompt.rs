#![deny(missing_docs)]

//! # Prompting
//!
//! Fills in generation settings the user did not pass on the command line.
//!
//! Interaction is abstracted behind [`Prompter`] so the resolution logic can be
//! tested without a terminal.

use crate::error::CliResult;
use inquire::{Select, Text};
use std::path::PathBuf;

/// Languages offered in the selection prompt.
pub const LANGUAGE_CHOICES: [&str; 2] = ["TypeScript", "Java"];

/// Default language when the user accepts defaults.
pub const DEFAULT_LANGUAGE: &str = "TypeScript";

/// Default template argument (the built-in template).
pub const DEFAULT_TEMPLATE: &str = modelgen_core::templates::DEFAULT_TEMPLATE;

/// Default output directory.
pub const DEFAULT_OUTPUT: &str = "./output";

/// Source of answers for missing settings.
pub trait Prompter {
    /// Picks one of `choices`, starting at `default`.
    fn select(&self, message: &str, choices: &[&str], default: &str) -> CliResult<String>;

    /// Reads free text, `default` if left empty.
    fn text(&self, message: &str, default: &str) -> CliResult<String>;
}

/// Terminal prompts via `inquire`.
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn select(&self, message: &str, choices: &[&str], default: &str) -> CliResult<String> {
        let cursor = choices.iter().position(|c| *c == default).unwrap_or(0);
        let answer = Select::new(message, choices.to_vec())
            .with_starting_cursor(cursor)
            .prompt()?;
        Ok(answer.to_string())
    }

    fn text(&self, message: &str, default: &str) -> CliResult<String> {
        Ok(Text::new(message).with_default(default).prompt()?)
    }
}

/// Answers every question with its default (`--yes`).
pub struct DefaultsPrompter;

impl Prompter for DefaultsPrompter {
    fn select(&self, _: &str, _: &[&str], default: &str) -> CliResult<String> {
        Ok(default.to_string())
    }

    fn text(&self, _: &str, default: &str) -> CliResult<String> {
        Ok(default.to_string())
    }
}

/// Fully populated settings of one run. Nothing after this point is interactive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// The YAML model document as given by the user.
    pub document: PathBuf,
    /// Target language name.
    pub language: String,
    /// Template path or `"default"`.
    pub template: String,
    /// Directory the rendered files are written to.
    pub output_dir: PathBuf,
}

/// Completes the settings, asking `prompter` only for what is missing.
pub fn resolve_config(
    document: PathBuf,
    language: Option<String>,
    template: Option<String>,
    output_dir: Option<PathBuf>,
    prompter: &impl Prompter,
) -> CliResult<GenerationConfig> {
    let language = match language {
        Some(l) => l,
        None => prompter.select(
            "Which language should be generated?",
            &LANGUAGE_CHOICES,
            DEFAULT_LANGUAGE,
        )?,
    };

    let template = match template {
        Some(t) => t,
        None => prompter.text("Template file path:", DEFAULT_TEMPLATE)?,
    };

    let output_dir = match output_dir {
        Some(o) => o,
        None => PathBuf::from(prompter.text("Output directory:", DEFAULT_OUTPUT)?),
    };

    let config = GenerationConfig {
        document,
        language,
        template,
        output_dir,
    };
    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}
