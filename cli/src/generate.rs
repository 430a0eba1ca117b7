#![deny(missing_docs)]

//! # Gen Command
//!
//! Renders the models of a YAML document into source files.

use crate::error::CliResult;
use crate::output::write_rendered_files;
use crate::prompt::{resolve_config, Prompter};
use modelgen_core::{generate, DocumentLocation, GenerateOptions, TemplateChoice};
use std::path::PathBuf;

/// Arguments for the gen command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenArgs {
    /// Path to the YAML model document (e.g. `specs/user.yml`).
    pub yml: PathBuf,

    /// Target language: `TypeScript` or `Java` (case-insensitive).
    #[clap(short, long, env = "MODELGEN_LANGUAGE")]
    pub language: Option<String>,

    /// Custom Handlebars template file, or `default` for the built-in one.
    #[clap(short, long, env = "MODELGEN_TEMPLATE")]
    pub template: Option<String>,

    /// Output directory, created if missing.
    #[clap(short, long, env = "MODELGEN_OUTPUT")]
    pub output: Option<PathBuf>,

    /// File extension for output of a custom template (default: `txt`).
    #[clap(long)]
    pub extension: Option<String>,

    /// Do not prompt; use defaults for anything not given.
    #[clap(short, long)]
    pub yes: bool,
}

/// Executes the gen command.
///
/// # Arguments
///
/// * `args` - Command arguments.
/// * `prompter` - Asked for settings missing from `args`.
pub fn execute(args: &GenArgs, prompter: &impl Prompter) -> CliResult<Vec<PathBuf>> {
    let config = resolve_config(
        args.yml.clone(),
        args.language.clone(),
        args.template.clone(),
        args.output.clone(),
        prompter,
    )?;

    let template = TemplateChoice::from_arg(Some(config.template.as_str()))
        .with_extension(args.extension.clone());
    let options = GenerateOptions::new(
        DocumentLocation::from_path(&config.document),
        config.language.as_str(),
        template,
    );

    let files = generate(&options)?;
    let written = write_rendered_files(&config.output_dir, &files)?;

    println!(
        "Generated {} file(s) in {:?}",
        written.len(),
        config.output_dir
    );

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use crate::prompt::DefaultsPrompter;
    use modelgen_core::AppError;
    use std::fs;
    use tempfile::tempdir;

    const DOC: &str = r#"
components:
  schemas:
    User:
      title: User
      properties:
        name: { type: string }
        tags: { type: array, items: { type: string } }
    Team:
      properties:
        members: { type: array, items: { $ref: '#/components/schemas/User' } }
"#;

    fn args(dir: &std::path::Path, language: &str) -> GenArgs {
        GenArgs {
            yml: dir.join("team.yml"),
            language: Some(language.into()),
            template: None,
            output: Some(dir.join("out")),
            extension: None,
            yes: true,
        }
    }

    #[test]
    fn test_typescript_single_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("team.yml"), DOC).unwrap();

        let written = execute(&args(dir.path(), "TypeScript"), &DefaultsPrompter).unwrap();

        assert_eq!(written, vec![dir.path().join("out/team.ts")]);
        let ts = fs::read_to_string(&written[0]).unwrap();
        assert!(ts.contains("members: User[];"));
    }

    #[test]
    fn test_java_file_per_model() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("team.yml"), DOC).unwrap();

        let written = execute(&args(dir.path(), "java"), &DefaultsPrompter).unwrap();

        assert_eq!(
            written,
            vec![
                dir.path().join("out/User.java"),
                dir.path().join("out/Team.java"),
            ]
        );
        let team = fs::read_to_string(&written[1]).unwrap();
        assert!(team.contains("public List<User> members;"));
    }

    #[test]
    fn test_failure_writes_nothing() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("team.yml"), DOC).unwrap();

        let err = execute(&args(dir.path(), "cobol"), &DefaultsPrompter).unwrap_err();

        assert!(matches!(err, CliError::Core(AppError::UnsupportedLanguage(_))));
        assert!(!dir.path().join("out").exists());
    }
}
