//! CLI command implementations

use colored::Colorize;
use glob::Pattern;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use plint_core::diagnostics::{Applicability, Diagnostic};
use plint_core::{DefinitionModel, PlintConfiguration, PlintError, ResultExt};
use plint_rules::{LintEngine, all_rules};

use crate::OutputFormat;
use crate::output::{LintSummary, OutputFormatter};

/// Outcome of linting a single file
pub struct FileResult {
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
    pub error: Option<PlintError>,
    pub fixes_applied: usize,
}

impl FileResult {
    fn clean(path: PathBuf, diagnostics: Vec<Diagnostic>, fixes_applied: usize) -> Self {
        Self {
            path,
            diagnostics,
            error: None,
            fixes_applied,
        }
    }

    fn failed(path: PathBuf, error: PlintError) -> Self {
        Self {
            path,
            diagnostics: Vec::new(),
            error: Some(error),
            fixes_applied: 0,
        }
    }

    fn skipped(path: PathBuf) -> Self {
        Self {
            path,
            diagnostics: Vec::new(),
            error: None,
            fixes_applied: 0,
        }
    }
}

/// Run the lint command over the given paths
pub fn lint(
    paths: &[PathBuf],
    config: &PlintConfiguration,
    format: OutputFormat,
    fix: bool,
) -> anyhow::Result<i32> {
    let files = discover_files(paths, config);
    if files.is_empty() {
        tracing::warn!("no definition files found");
    }

    let engine = LintEngine::new(config.clone());
    let results: Vec<FileResult> = files
        .par_iter()
        .map(|path| lint_file(&engine, path, fix))
        .collect();

    let summary = LintSummary::from_results(&results);
    let formatter = OutputFormatter::new(format);
    formatter.print_results(&results, &summary)?;

    Ok(if summary.has_errors() { 1 } else { 0 })
}

fn lint_file(engine: &LintEngine, path: &Path, fix: bool) -> FileResult {
    // Recoverable failures (bad JSON, cyclic chains) are logged and the
    // file is skipped; fatal ones are carried into the result
    let model = match DefinitionModel::load(path).recoverable() {
        Ok(Some(model)) => model,
        Ok(None) => return FileResult::skipped(path.to_path_buf()),
        Err(err) => return FileResult::failed(path.to_path_buf(), err),
    };

    let diagnostics = engine.run(&model);
    let fixes_applied = if fix {
        match apply_safe_fixes(&model, &diagnostics) {
            Ok(count) => count,
            Err(err) => return FileResult::failed(path.to_path_buf(), err),
        }
    } else {
        0
    };

    FileResult::clean(path.to_path_buf(), diagnostics, fixes_applied)
}

/// Apply every safe suggestion to the file, bottom-up so earlier offsets
/// stay valid, and rewrite it in place
fn apply_safe_fixes(model: &DefinitionModel, diagnostics: &[Diagnostic]) -> plint_core::Result<usize> {
    let mut suggestions: Vec<_> = diagnostics
        .iter()
        .flat_map(|diagnostic| diagnostic.suggestions.iter())
        .filter(|suggestion| suggestion.applicability == Applicability::Always)
        .collect();
    if suggestions.is_empty() {
        return Ok(0);
    }
    suggestions.sort_by(|a, b| b.location.offset.cmp(&a.location.offset));

    let mut source = model.source.clone();
    let mut applied = 0;
    for suggestion in suggestions {
        let start = suggestion.location.offset;
        let end = start + suggestion.location.length;
        if end > source.len() {
            tracing::warn!(
                file = %model.path.display(),
                "suggestion span out of bounds, skipping"
            );
            continue;
        }
        source.replace_range(start..end, &suggestion.replacement);
        applied += 1;
    }

    fs::write(&model.path, source).map_err(|e| PlintError::io_error(&model.path, e))?;
    tracing::info!(file = %model.path.display(), applied, "applied fixes");
    Ok(applied)
}

/// Collect definition files from the given paths.
///
/// Explicit file arguments are taken as-is; directories are walked and
/// filtered through the configured include/exclude globs.
fn discover_files(paths: &[PathBuf], config: &PlintConfiguration) -> Vec<PathBuf> {
    let include = compile_patterns(&config.include_patterns());
    let exclude = compile_patterns(&config.exclude_patterns());

    let roots: Vec<PathBuf> = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths.to_vec()
    };

    let mut files = Vec::new();
    for root in roots {
        if root.is_file() {
            files.push(root);
            continue;
        }
        for entry in WalkDir::new(&root)
            .into_iter()
            .filter_map(|entry| entry.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if include.iter().any(|pattern| pattern.matches_path(path))
                && !exclude.iter().any(|pattern| pattern.matches_path(path))
            {
                files.push(path.to_path_buf());
            }
        }
    }

    files.sort();
    files.dedup();
    files
}

fn compile_patterns(patterns: &[String]) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|raw| match Pattern::new(raw) {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                tracing::warn!("ignoring invalid glob pattern '{raw}': {err}");
                None
            }
        })
        .collect()
}

/// Print the built-in rule listing
pub fn rules(verbose: bool) {
    println!("{}", "Built-in rules:".bold());
    for rule in all_rules() {
        if verbose {
            println!("  {}  {}", rule.id.cyan(), rule.description);
        } else {
            println!("  {}", rule.id.cyan());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_discover_filters_by_extension() {
        let temp = tempfile::TempDir::new().unwrap();
        fs::write(temp.path().join("printer.def.json"), "{}").unwrap();
        fs::write(temp.path().join("notes.txt"), "").unwrap();

        let config = PlintConfiguration::default();
        let files = discover_files(&[temp.path().to_path_buf()], &config);

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("printer.def.json"));
    }

    #[test]
    fn test_discover_respects_exclude_patterns() {
        let temp = tempfile::TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("build")).unwrap();
        fs::write(temp.path().join("build/a.def.json"), "{}").unwrap();
        fs::write(temp.path().join("b.def.json"), "{}").unwrap();

        let config = PlintConfiguration::default();
        let files = discover_files(&[temp.path().to_path_buf()], &config);

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("b.def.json"));
    }

    #[test]
    fn test_explicit_file_bypasses_patterns() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("odd_name.json");
        fs::write(&path, "{}").unwrap();

        let config = PlintConfiguration::default();
        let files = discover_files(&[path.clone()], &config);
        assert_eq!(files, vec![path]);
    }

    #[test]
    fn test_fix_deletes_single_line_block() {
        let temp = tempfile::TempDir::new().unwrap();
        let root = temp.path().join("resources");
        fs::create_dir_all(root.join("definitions")).unwrap();
        fs::create_dir_all(root.join("printers/acme")).unwrap();
        fs::write(
            root.join("definitions/fdmprinter.def.json"),
            r#"{"settings": {"speed_print": {"type": "float", "default_value": 50}}, "overrides": {"speed_print": {"default_value": 50}}}"#,
        )
        .unwrap();
        let target = root.join("printers/acme/acme.def.json");
        fs::write(
            &target,
            "{\n  \"inherits\": \"fdmprinter\",\n  \"overrides\": { \"speed_print\": { \"value\": 50 } }\n}",
        )
        .unwrap();

        let mut checks = HashMap::new();
        checks.insert(
            "diagnostic-definition-redundant-override".to_string(),
            true,
        );
        let config = PlintConfiguration {
            checks: Some(checks),
            ..Default::default()
        };
        let engine = LintEngine::new(config);

        let result = lint_file(&engine, &target, true);
        assert!(result.error.is_none());
        assert_eq!(result.fixes_applied, 1);

        let rewritten = fs::read_to_string(&target).unwrap();
        assert!(!rewritten.contains("speed_print"));
    }
}
