#![deny(missing_docs)]

//! # Template Selection
//!
//! Decides which template source renders the models and how output files are named.
//!
//! Built-in templates live in `core/templates/` and are compiled into the binary.

use crate::error::{AppError, AppResult};
use crate::type_mapping::TargetLanguage;
use std::fs;
use std::path::PathBuf;

/// Placeholder in a file-name pattern, replaced by the model or document name.
pub const NAME_PLACEHOLDER: &str = "{{@key}}";

/// Sentinel template argument meaning "use the built-in template".
pub const DEFAULT_TEMPLATE: &str = "default";

/// Extension given to output of custom templates when the caller names none.
pub const GENERIC_EXTENSION: &str = "txt";

const TYPESCRIPT_TEMPLATE: &str = include_str!("../templates/typescript.hbs");
const JAVA_TEMPLATE: &str = include_str!("../templates/java.hbs");

/// An output file name containing [`NAME_PLACEHOLDER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNamePattern(String);

impl FileNamePattern {
    /// Pattern `{{@key}}.<extension>`.
    pub fn with_extension(extension: &str) -> Self {
        Self(format!("{}.{}", NAME_PLACEHOLDER, extension.trim_start_matches('.')))
    }

    /// Substitutes `name` for the placeholder.
    pub fn resolve(&self, name: &str) -> String {
        self.0.replace(NAME_PLACEHOLDER, name)
    }

    /// The raw pattern.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One template source with its output naming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    /// Handlebars source text.
    pub source: String,
    /// How rendered output is named.
    pub file_name: FileNamePattern,
}

/// The set of templates applied to one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateSpec {
    /// Templates in render order.
    pub entries: Vec<TemplateEntry>,
}

impl TemplateSpec {
    /// A spec holding a single template.
    pub fn single(source: impl Into<String>, file_name: FileNamePattern) -> Self {
        Self {
            entries: vec![TemplateEntry {
                source: source.into(),
                file_name,
            }],
        }
    }
}

/// Which template the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateChoice {
    /// The built-in template of the target language.
    BuiltIn,
    /// A developer-supplied template file.
    Custom {
        /// Template file path.
        path: PathBuf,
        /// Extension for output files; [`GENERIC_EXTENSION`] if `None`.
        extension: Option<String>,
    },
}

impl TemplateChoice {
    /// Interprets a template argument; absent or `"default"` selects the built-in.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some(DEFAULT_TEMPLATE) => TemplateChoice::BuiltIn,
            Some(path) => TemplateChoice::Custom {
                path: PathBuf::from(path),
                extension: None,
            },
        }
    }

    /// Sets the output extension of a custom template. No effect on built-ins.
    pub fn with_extension(self, ext: Option<String>) -> Self {
        match self {
            TemplateChoice::Custom { path, .. } => TemplateChoice::Custom {
                path,
                extension: ext,
            },
            built_in => built_in,
        }
    }
}

/// The built-in template for `language`.
pub fn builtin_template(language: TargetLanguage) -> TemplateEntry {
    match language {
        TargetLanguage::TypeScript => TemplateEntry {
            source: TYPESCRIPT_TEMPLATE.to_string(),
            file_name: FileNamePattern::with_extension("ts"),
        },
        TargetLanguage::Java => TemplateEntry {
            source: JAVA_TEMPLATE.to_string(),
            file_name: FileNamePattern::with_extension("java"),
        },
    }
}

/// Resolves the template set for an invocation.
///
/// A custom template is read verbatim and the language is not checked, since the
/// template may target anything. Otherwise `language` (case-insensitive) picks a built-in.
///
/// # Errors
///
/// * `UnsupportedLanguage` if no custom template is given and the language is unknown.
/// * `General` if the custom template cannot be read.
pub fn select_templates(language: &str, choice: &TemplateChoice) -> AppResult<TemplateSpec> {
    match choice {
        TemplateChoice::Custom { path, extension } => {
            let source = fs::read_to_string(path).map_err(|e| {
                AppError::General(format!("Failed to read template {:?}: {}", path, e))
            })?;
            let ext = extension.as_deref().unwrap_or(GENERIC_EXTENSION);
            tracing::debug!(path = %path.display(), ext, "using custom template");
            Ok(TemplateSpec::single(source, FileNamePattern::with_extension(ext)))
        }
        TemplateChoice::BuiltIn => {
            let language: TargetLanguage = language.parse()?;
            tracing::debug!(%language, "using built-in template");
            Ok(TemplateSpec {
                entries: vec![builtin_template(language)],
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_pattern_resolution() {
        let pattern = FileNamePattern::with_extension(".java");
        assert_eq!(pattern.as_str(), "{{@key}}.java");
        assert_eq!(pattern.resolve("User"), "User.java");
    }

    #[test]
    fn test_from_arg_sentinel() {
        assert_eq!(TemplateChoice::from_arg(None), TemplateChoice::BuiltIn);
        assert_eq!(TemplateChoice::from_arg(Some("default")), TemplateChoice::BuiltIn);
        assert!(matches!(
            TemplateChoice::from_arg(Some("my.hbs")),
            TemplateChoice::Custom { .. }
        ));
    }

    #[test]
    fn test_builtin_selection_is_case_insensitive() {
        let spec = select_templates("TypeScript", &TemplateChoice::BuiltIn).unwrap();
        assert_eq!(spec.entries.len(), 1);
        assert_eq!(spec.entries[0].file_name.resolve("api"), "api.ts");
        assert!(spec.entries[0].source.contains("getTsType"));

        let spec = select_templates("JAVA", &TemplateChoice::BuiltIn).unwrap();
        assert_eq!(spec.entries[0].file_name.resolve("User"), "User.java");
        assert!(spec.entries[0].source.contains("getJavaType"));
    }

    #[test]
    fn test_unsupported_language() {
        let err = select_templates("kotlin", &TemplateChoice::BuiltIn).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedLanguage(_)));
    }

    #[test]
    fn test_custom_template_ignores_language() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("models.hbs");
        fs::write(&path, "{{#each models}}{{modelName}}\n{{/each}}").unwrap();

        let choice = TemplateChoice::from_arg(path.to_str());
        let spec = select_templates("kotlin", &choice).unwrap();
        assert_eq!(spec.entries[0].source, "{{#each models}}{{modelName}}\n{{/each}}");
        assert_eq!(spec.entries[0].file_name.resolve("api"), "api.txt");
    }

    #[test]
    fn test_custom_template_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("models.hbs");
        fs::write(&path, "x").unwrap();

        let choice = TemplateChoice::from_arg(path.to_str()).with_extension(Some("kt".into()));
        let spec = select_templates("typescript", &choice).unwrap();
        assert_eq!(spec.entries[0].file_name.resolve("User"), "User.kt");
    }

    #[test]
    fn test_missing_custom_template() {
        let choice = TemplateChoice::from_arg(Some("/definitely/not/here.hbs"));
        let err = select_templates("typescript", &choice).unwrap_err();
        assert!(err.to_string().contains("Failed to read template"));
    }
}
