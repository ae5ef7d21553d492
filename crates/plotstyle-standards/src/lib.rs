//! Repository coding-standard checks.
//!
//! Two content checks run over a repository's files:
//!
//! - [`LicenseHeaderCheck`]: the file starts with the project license header,
//!   optionally preceded by a shebang or a `/*` line
//! - [`ImportConventionCheck`]: the file contains a line matching a required
//!   pattern, such as a crate-level attribute or prelude import
//!
//! Files are discovered from git (`HEAD`) or by walking the tree, filtered by
//! extension and shell-style exclusion patterns. Empty files always pass, and
//! `\r\n` line endings are read as `\n`.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use plotstyle_standards::{check_repository, StandardsConfig};
//!
//! let root = Path::new(".");
//! let config = StandardsConfig::discover(root)?.unwrap_or_default();
//! let report = check_repository(root, &config)?;
//! for (check, paths) in report.iter() {
//!     for path in paths {
//!         println!("{}: {}", check, path);
//!     }
//! }
//! # Ok::<(), plotstyle_standards::StandardsError>(())
//! ```

mod check;
mod config;
mod discover;
mod error;
mod pattern;

pub use check::{
    build_checks, check_repository, run_checks, Check, ImportConventionCheck, LicenseHeaderCheck,
    Report,
};
pub use config::{
    Discovery, ImportConfig, LicenseConfig, StandardsConfig, CONFIG_FILE_NAME,
    DEFAULT_IMPORT_PATTERN, DEFAULT_LICENSE_TEMPLATE,
};
pub use discover::{discover_files, tracked_files, walk_files};
pub use error::{Result, StandardsError};
pub use pattern::{GlobPattern, PatternSet};
