#![deny(missing_docs)]

//! # Output
//!
//! Persists rendered files into the output directory.

use crate::error::CliResult;
use modelgen_core::RenderedFile;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes every file into `output_dir`, creating it if absent. Existing files are overwritten.
///
/// Returns the written paths in input order.
pub fn write_rendered_files(output_dir: &Path, files: &[RenderedFile]) -> CliResult<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = output_dir.join(&file.file_name);
        fs::write(&path, &file.content)?;
        tracing::info!(path = %path.display(), "wrote file");
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn file(name: &str, content: &str) -> RenderedFile {
        RenderedFile {
            file_name: name.into(),
            content: content.into(),
        }
    }

    #[test]
    fn test_creates_nested_directory() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("a/b/c");

        let written = write_rendered_files(&out, &[file("User.java", "class User {}")]).unwrap();

        assert_eq!(written, vec![out.join("User.java")]);
        assert_eq!(fs::read_to_string(out.join("User.java")).unwrap(), "class User {}");
    }

    #[test]
    fn test_overwrites_existing_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("api.ts"), "stale").unwrap();

        write_rendered_files(dir.path(), &[file("api.ts", "fresh")]).unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("api.ts")).unwrap(), "fresh");
    }
}
