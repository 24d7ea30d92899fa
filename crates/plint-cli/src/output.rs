//! Output formatting and reporting

use colored::Colorize;
use plint_core::diagnostics::{Diagnostic, Severity};

use crate::OutputFormat;
use crate::commands::FileResult;

/// Summary statistics for linting results
#[derive(Debug, Clone, Default)]
pub struct LintSummary {
    pub files_checked: usize,
    pub files_failed: usize,
    pub errors: usize,
    pub warnings: usize,
    pub info: usize,
    pub hints: usize,
    pub fixes_applied: usize,
}

impl LintSummary {
    pub fn from_results(results: &[FileResult]) -> Self {
        let mut summary = Self::default();
        for result in results {
            if result.error.is_some() {
                summary.files_failed += 1;
                continue;
            }
            summary.files_checked += 1;
            summary.fixes_applied += result.fixes_applied;
            for diagnostic in &result.diagnostics {
                match diagnostic.severity {
                    Severity::Error => summary.errors += 1,
                    Severity::Warning => summary.warnings += 1,
                    Severity::Hint => summary.hints += 1,
                    Severity::Info => summary.info += 1,
                }
            }
        }
        summary
    }

    pub fn total_issues(&self) -> usize {
        self.errors + self.warnings + self.info + self.hints
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0 || self.files_failed > 0
    }
}

/// Output formatter for the supported formats
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Format and print linting results
    pub fn print_results(
        &self,
        results: &[FileResult],
        summary: &LintSummary,
    ) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Human => self.print_human(results, summary),
            OutputFormat::Json => self.print_json(results, summary)?,
            OutputFormat::Github => self.print_github(results),
        }
        Ok(())
    }

    fn print_human(&self, results: &[FileResult], summary: &LintSummary) {
        for result in results {
            if let Some(error) = &result.error {
                println!(
                    "{}: {}: {error}",
                    result.path.display(),
                    "error".red().bold()
                );
                continue;
            }
            for diagnostic in &result.diagnostics {
                self.print_diagnostic_human(diagnostic);
            }
        }

        println!("\n{}", "Summary:".bold());
        println!("  Files checked: {}", summary.files_checked);
        if summary.files_failed > 0 {
            println!(
                "  Files failed: {}",
                summary.files_failed.to_string().red()
            );
        }
        if summary.total_issues() > 0 {
            if summary.errors > 0 {
                println!("  Errors: {}", summary.errors.to_string().red());
            }
            if summary.warnings > 0 {
                println!("  Warnings: {}", summary.warnings.to_string().yellow());
            }
            if summary.info > 0 {
                println!("  Info: {}", summary.info.to_string().blue());
            }
            if summary.hints > 0 {
                println!("  Hints: {}", summary.hints.to_string().cyan());
            }
        } else {
            println!("  {}", "No issues found".green());
        }
        if summary.fixes_applied > 0 {
            println!(
                "  Fixes applied: {}",
                summary.fixes_applied.to_string().green()
            );
        }
    }

    fn print_diagnostic_human(&self, diagnostic: &Diagnostic) {
        let severity = match diagnostic.severity {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
            Severity::Hint => "hint".cyan().bold(),
            Severity::Info => "info".blue().bold(),
        };
        println!(
            "{}: {severity}[{}]: {}",
            diagnostic.location,
            diagnostic.rule_id,
            diagnostic.message
        );
        if diagnostic.has_safe_fixes() {
            println!("  {} safe fix available (run with --fix)", "→".green());
        }
    }

    fn print_json(&self, results: &[FileResult], summary: &LintSummary) -> anyhow::Result<()> {
        let issues: Vec<&Diagnostic> = results
            .iter()
            .flat_map(|result| result.diagnostics.iter())
            .collect();
        let failures: Vec<serde_json::Value> = results
            .iter()
            .filter_map(|result| {
                result.error.as_ref().map(|error| {
                    serde_json::json!({
                        "file": result.path,
                        "message": error.to_string(),
                    })
                })
            })
            .collect();

        let payload = serde_json::json!({
            "files_checked": summary.files_checked,
            "issues": issues,
            "failures": failures,
            "summary": {
                "errors": summary.errors,
                "warnings": summary.warnings,
                "info": summary.info,
                "hints": summary.hints,
                "total": summary.total_issues(),
                "fixes_applied": summary.fixes_applied,
            }
        });

        println!("{}", serde_json::to_string_pretty(&payload)?);
        Ok(())
    }

    fn print_github(&self, results: &[FileResult]) {
        for result in results {
            if let Some(error) = &result.error {
                println!("::error file={}::{error}", result.path.display());
                continue;
            }
            for diagnostic in &result.diagnostics {
                let level = match diagnostic.severity {
                    Severity::Error => "error",
                    Severity::Warning => "warning",
                    _ => "notice",
                };
                println!(
                    "::{level} file={},line={}::{}",
                    diagnostic.location.file.display(),
                    diagnostic.location.line,
                    diagnostic.message
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plint_core::diagnostics::Location;
    use std::path::PathBuf;

    fn result_with(severity: Severity) -> FileResult {
        FileResult {
            path: PathBuf::from("a.def.json"),
            diagnostics: vec![Diagnostic::new(
                "some-rule",
                severity,
                "message",
                Location::default(),
            )],
            error: None,
            fixes_applied: 0,
        }
    }

    #[test]
    fn test_summary_counts_severities() {
        let results = vec![result_with(Severity::Warning), result_with(Severity::Error)];
        let summary = LintSummary::from_results(&results);
        assert_eq!(summary.files_checked, 2);
        assert_eq!(summary.warnings, 1);
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.total_issues(), 2);
        assert!(summary.has_errors());
    }

    #[test]
    fn test_warnings_alone_do_not_fail_the_run() {
        let results = vec![result_with(Severity::Warning)];
        let summary = LintSummary::from_results(&results);
        assert!(!summary.has_errors());
    }
}
