//! Standards configuration.
//!
//! Loaded from YAML. Every section of a file is optional; a missing section
//! disables that check. With no file at all, [`StandardsConfig::default`]
//! applies the project's own conventions (see [`DEFAULT_LICENSE_TEMPLATE`]
//! and [`DEFAULT_IMPORT_PATTERN`]).
//!
//! ```yaml
//! discovery: git          # or "walk"
//! license:
//!   template: |
//!     // Copyright Example Contributors
//!     //
//!     // Released under the MIT license.
//!   extensions: [".rs"]
//!   exclude: ["target/*", "*/generated/*"]
//! imports:
//!   pattern: '^#!\[forbid\(unsafe_code\)\]$'
//!   extensions: [".rs"]
//!   exclude: ["*/tests/*"]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StandardsError};

/// File name looked up in a repository root when no config is given.
pub const CONFIG_FILE_NAME: &str = "plotstyle-standards.yaml";

/// Header every Rust source file of the project starts with.
pub const DEFAULT_LICENSE_TEMPLATE: &str = "\
// Copyright plotstyle Contributors
//
// This file is part of plotstyle and is released under the MIT license.
// See LICENSE in the root of the repository for full licensing details.
";

/// Line every crate root of the project must contain.
pub const DEFAULT_IMPORT_PATTERN: &str = r"^#!\[forbid\(unsafe_code\)\]$";

/// How files are discovered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Discovery {
    /// Files tracked at `HEAD`, via `git ls-tree`.
    #[default]
    Git,
    /// Every file below the root.
    Walk,
}

/// License header check settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseConfig {
    /// The exact header text. Trailing whitespace is trimmed.
    pub template: String,
    /// Extensions (with leading dot) of files to check.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Shell-style patterns of relative paths to skip.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for LicenseConfig {
    fn default() -> Self {
        LicenseConfig {
            template: DEFAULT_LICENSE_TEMPLATE.to_string(),
            extensions: default_extensions(),
            exclude: default_exclude(),
        }
    }
}

/// Import convention check settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Regex, in multi-line mode, that every checked file must contain.
    pub pattern: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        ImportConfig {
            pattern: DEFAULT_IMPORT_PATTERN.to_string(),
            extensions: vec!["lib.rs".to_string(), "main.rs".to_string()],
            exclude: default_exclude(),
        }
    }
}

/// Top-level configuration.
///
/// `Default` enables both checks with the project's conventions. A parsed
/// file only enables the sections it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardsConfig {
    #[serde(default)]
    pub discovery: Discovery,
    #[serde(default)]
    pub license: Option<LicenseConfig>,
    #[serde(default)]
    pub imports: Option<ImportConfig>,
}

impl Default for StandardsConfig {
    fn default() -> Self {
        StandardsConfig {
            discovery: Discovery::default(),
            license: Some(LicenseConfig::default()),
            imports: Some(ImportConfig::default()),
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec![".rs".to_string()]
}

fn default_exclude() -> Vec<String> {
    vec!["target/*".to_string()]
}

impl StandardsConfig {
    /// A configuration with no check enabled.
    pub fn empty() -> Self {
        StandardsConfig {
            discovery: Discovery::default(),
            license: None,
            imports: None,
        }
    }

    /// Parses configuration from YAML. An empty document enables nothing.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::empty());
        }
        serde_yaml::from_str(yaml).map_err(|e| StandardsError::Config(e.to_string()))
    }

    /// Reads configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| StandardsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Reads `plotstyle-standards.yaml` from `root`, if present.
    pub fn discover(root: &Path) -> Result<Option<Self>> {
        let path = root.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Returns true if no check is configured.
    pub fn is_empty(&self) -> bool {
        self.license.is_none() && self.imports.is_none()
    }
}
