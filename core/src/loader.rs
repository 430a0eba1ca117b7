#![deny(missing_docs)]

//! # Model Loader
//!
//! Reads a model document (`<dir>/<name>.yml`) and extracts `components.schemas`.

use crate::error::{AppError, AppResult};
use crate::models::{stringify_keys, ModelDefinition, ModelMap};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension the document is looked up with.
pub const DOCUMENT_EXTENSION: &str = "yml";

/// Accepted as a fallback when `<name>.yml` does not exist.
const FALLBACK_EXTENSION: &str = "yaml";

/// Where a model document lives: a directory plus a base name without extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLocation {
    /// Directory containing the document.
    pub dir: PathBuf,
    /// File name up to its first `.`; also names aggregated output.
    pub name: String,
}

impl DocumentLocation {
    /// Creates a location from its parts.
    pub fn new(dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            name: name.into(),
        }
    }

    /// Splits a user-supplied path such as `specs/user.yml`.
    ///
    /// The name stops at the first `.`, so `user.v1.yml` becomes `user`.
    pub fn from_path(path: &Path) -> Self {
        let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default()
            .split('.')
            .next()
            .unwrap_or_default()
            .to_string();
        Self { dir, name }
    }

    /// The concrete document path, `<dir>/<name>.yml`.
    pub fn document_path(&self) -> PathBuf {
        self.dir.join(format!("{}.{}", self.name, DOCUMENT_EXTENSION))
    }

    fn fallback_path(&self) -> PathBuf {
        self.dir.join(format!("{}.{}", self.name, FALLBACK_EXTENSION))
    }
}

/// Loads the model definitions of the document at `location`.
///
/// # Errors
///
/// * `DocumentNotFound` if neither `<name>.yml` nor `<name>.yaml` can be read.
/// * `MalformedDocument` if the content is not YAML or lacks `components.schemas`.
pub fn load_models(location: &DocumentLocation) -> AppResult<ModelMap> {
    let primary = location.document_path();
    let path = if primary.is_file() {
        primary
    } else {
        let fallback = location.fallback_path();
        if fallback.is_file() {
            fallback
        } else {
            return Err(AppError::DocumentNotFound { path: primary });
        }
    };

    let content =
        fs::read_to_string(&path).map_err(|_| AppError::DocumentNotFound { path: path.clone() })?;

    let models = parse_models(&content)?;
    tracing::debug!(path = %path.display(), count = models.len(), "loaded models");
    Ok(models)
}

/// Parses document text and extracts `components.schemas`.
pub fn parse_models(content: &str) -> AppResult<ModelMap> {
    let document: Value = serde_yaml::from_str(content)
        .map_err(|e| AppError::MalformedDocument(format!("invalid YAML: {}", e)))?;

    let components = document
        .get("components")
        .ok_or_else(|| AppError::MalformedDocument("missing `components`".into()))?;

    let schemas = components
        .get("schemas")
        .filter(|s| s.is_mapping())
        .ok_or_else(|| {
            AppError::MalformedDocument("missing `components.schemas` mapping".into())
        })?;

    let models: IndexMap<String, ModelDefinition> =
        IndexMap::deserialize(stringify_keys(schemas.clone())).map_err(|e| {
            AppError::MalformedDocument(format!("invalid model definition: {}", e))
        })?;

    Ok(models)
}
