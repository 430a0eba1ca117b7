//! # Error Handling
//!
//! Provides the unified `AppError` enum used by the generation pipeline.

use derive_more::{Display, From};
use std::path::PathBuf;

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The model document does not resolve to a readable file.
    #[from(ignore)]
    #[display("Document not found: {}", path.display())]
    DocumentNotFound {
        /// The location that was tried.
        path: PathBuf,
    },

    /// The document was read but lacks the `components.schemas` sub-tree,
    /// or is not valid YAML at all.
    #[from(ignore)]
    #[display("Malformed document: {_0}")]
    MalformedDocument(String),

    /// No built-in template exists for the requested language.
    #[from(ignore)]
    #[display("Unsupported language: {_0}.")]
    UnsupportedLanguage(String),

    /// The template source is not valid Handlebars.
    #[display("Template compile error: {_0}")]
    TemplateCompile(handlebars::TemplateError),

    /// Rendering a compiled template failed.
    #[display("Template render error: {_0}")]
    TemplateRender(handlebars::RenderError),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_conversion() {
        let io_err = Error::new(ErrorKind::Other, "test");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_string_conversion() {
        let msg = String::from("something wrong");
        let app_err: AppError = msg.into();
        match app_err {
            AppError::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to AppError::General"),
        }
    }

    #[test]
    fn test_document_not_found_display() {
        let app_err = AppError::DocumentNotFound {
            path: PathBuf::from("specs/user.yml"),
        };
        assert_eq!(app_err.to_string(), "Document not found: specs/user.yml");
    }

    #[test]
    fn test_unsupported_language_display() {
        let app_err = AppError::UnsupportedLanguage("kotlin".into());
        assert_eq!(app_err.to_string(), "Unsupported language: kotlin.");
    }
}
