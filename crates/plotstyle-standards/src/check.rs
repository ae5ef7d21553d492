//! The individual checks and the runner that applies them to a file list.

use std::collections::BTreeMap;
use std::path::Path;

use regex::{Regex, RegexBuilder};

use crate::config::{ImportConfig, LicenseConfig, StandardsConfig};
use crate::discover::discover_files;
use crate::error::{Result, StandardsError};
use crate::pattern::PatternSet;

/// Optional first line allowed before a license header: a shebang or the
/// opener of a C block comment.
const OPENER_PATTERN: &str = r"(?:(?:#!.*|/\*)\n)?";

/// A content check applied to one file at a time.
pub trait Check {
    /// Short name used in reports.
    fn name(&self) -> &str;

    /// Whether `path` (relative, `/`-separated) is in scope.
    fn applies_to(&self, path: &str) -> bool;

    /// Whether non-empty `content` passes.
    fn passes(&self, content: &str) -> bool;
}

/// Shared extension and exclusion filtering.
#[derive(Debug, Clone)]
struct Scope {
    extensions: Vec<String>,
    exclude: PatternSet,
}

impl Scope {
    fn new(extensions: &[String], exclude: &[String]) -> Result<Self> {
        Ok(Scope {
            extensions: extensions.to_vec(),
            exclude: PatternSet::new(exclude)?,
        })
    }

    fn contains(&self, path: &str) -> bool {
        self.extensions.iter().any(|ext| path.ends_with(ext.as_str()))
            && !self.exclude.matches(path)
    }
}

/// Requires every in-scope file to start with the license header.
#[derive(Debug, Clone)]
pub struct LicenseHeaderCheck {
    regex: Regex,
    scope: Scope,
}

impl LicenseHeaderCheck {
    pub fn new(config: &LicenseConfig) -> Result<Self> {
        let template = config.template.trim_end();
        let regex = Regex::new(&format!("^{}{}", OPENER_PATTERN, regex::escape(template)))?;
        Ok(LicenseHeaderCheck {
            regex,
            scope: Scope::new(&config.extensions, &config.exclude)?,
        })
    }
}

impl Check for LicenseHeaderCheck {
    fn name(&self) -> &str {
        "license-header"
    }

    fn applies_to(&self, path: &str) -> bool {
        self.scope.contains(path)
    }

    fn passes(&self, content: &str) -> bool {
        self.regex.is_match(content)
    }
}

/// Requires every in-scope file to contain a line matching a pattern.
#[derive(Debug, Clone)]
pub struct ImportConventionCheck {
    regex: Regex,
    scope: Scope,
}

impl ImportConventionCheck {
    pub fn new(config: &ImportConfig) -> Result<Self> {
        let regex = RegexBuilder::new(&config.pattern)
            .multi_line(true)
            .build()?;
        Ok(ImportConventionCheck {
            regex,
            scope: Scope::new(&config.extensions, &config.exclude)?,
        })
    }
}

impl Check for ImportConventionCheck {
    fn name(&self) -> &str {
        "import-convention"
    }

    fn applies_to(&self, path: &str) -> bool {
        self.scope.contains(path)
    }

    fn passes(&self, content: &str) -> bool {
        self.regex.is_match(content)
    }
}

/// Failing files per check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    checked: BTreeMap<String, usize>,
    failures: BTreeMap<String, Vec<String>>,
}

impl Report {
    /// Returns true when no check failed.
    pub fn is_success(&self) -> bool {
        self.failures.values().all(Vec::is_empty)
    }

    /// Failing paths for one check, sorted.
    pub fn failures(&self, check: &str) -> &[String] {
        self.failures.get(check).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of files a check looked at.
    pub fn checked(&self, check: &str) -> usize {
        self.checked.get(check).copied().unwrap_or(0)
    }

    /// Iterates `(check, failing paths)` for every check that ran.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.failures
            .iter()
            .map(|(name, paths)| (name.as_str(), paths.as_slice()))
    }
}

/// Builds the checks enabled in `config`.
pub fn build_checks(config: &StandardsConfig) -> Result<Vec<Box<dyn Check>>> {
    let mut checks: Vec<Box<dyn Check>> = Vec::new();
    if let Some(license) = &config.license {
        checks.push(Box::new(LicenseHeaderCheck::new(license)?));
    }
    if let Some(imports) = &config.imports {
        checks.push(Box::new(ImportConventionCheck::new(imports)?));
    }
    Ok(checks)
}

/// Runs `checks` over `files` (relative to `root`).
///
/// Empty files always pass. Missing files are skipped. `\r\n` line endings
/// are normalised to `\n` before any check sees the content.
pub fn run_checks(root: &Path, files: &[String], checks: &[Box<dyn Check>]) -> Result<Report> {
    let mut report = Report::default();
    for check in checks {
        report.failures.entry(check.name().to_string()).or_default();
        report.checked.entry(check.name().to_string()).or_default();
    }

    for relative in files {
        let in_scope: Vec<&dyn Check> = checks
            .iter()
            .map(|check| &**check)
            .filter(|check| check.applies_to(relative))
            .collect();
        if in_scope.is_empty() {
            continue;
        }

        let full = root.join(relative);
        if !full.is_file() {
            continue;
        }
        let content = std::fs::read_to_string(&full).map_err(|source| StandardsError::Io {
            path: full.clone(),
            source,
        })?;
        let content = normalize_newlines(content);

        for check in in_scope {
            *report.checked.entry(check.name().to_string()).or_default() += 1;
            if content.is_empty() || check.passes(&content) {
                continue;
            }
            tracing::debug!(check = check.name(), path = %relative, "check failed");
            report
                .failures
                .entry(check.name().to_string())
                .or_default()
                .push(relative.clone());
        }
    }

    for paths in report.failures.values_mut() {
        paths.sort();
    }
    Ok(report)
}

fn normalize_newlines(content: String) -> String {
    if content.contains("\r\n") {
        content.replace("\r\n", "\n")
    } else {
        content
    }
}

/// Discovers files and runs every check enabled in `config`.
pub fn check_repository(root: &Path, config: &StandardsConfig) -> Result<Report> {
    let checks = build_checks(config)?;
    let files = discover_files(root, config.discovery)?;
    tracing::debug!(root = %root.display(), files = files.len(), "discovered files");
    run_checks(root, &files, &checks)
}
