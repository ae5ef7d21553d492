//! # plotstyle - Style merging for map plotting
//!
//! `plotstyle` combines layered, partial style dictionaries into a single
//! canonical style that a plotting layer can apply to its drawing primitives.
//!
//! ## Core Concepts
//!
//! - [`StyleDict`]: one partial layer, keyed by raw names (`fc`, `color`, ...)
//! - [`StyleKey`]: canonical attribute names (`facecolor`, `linewidth`, ...)
//! - [`StyleValue`]: tagged attribute values, including the `"never"` fill sentinel
//! - [`merge`]: layers dicts left to right into a [`StyleMap`]
//! - [`finalize`]: turns sentinels into renderer values
//! - [`Stylesheet`]: layers loaded from YAML or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use plotstyle::{finalize, merge, StyleDict, StyleKey, StyleValue};
//!
//! let defaults = StyleDict::new().with("facecolor", "never").with("lw", 0.5);
//! let user = StyleDict::new().with("color", "yellow");
//!
//! let mut merged = merge([&defaults, &user]);
//!
//! // The fill was protected; the user gets a diagnostic instead.
//! assert_eq!(merged.diagnostics.len(), 1);
//! assert_eq!(merged.style.edgecolor(), Some(&StyleValue::from("yellow")));
//!
//! finalize(&mut merged.style);
//! assert_eq!(merged.style.facecolor(), Some(&StyleValue::from("none")));
//! assert_eq!(merged.style.get(&StyleKey::LineWidth), Some(&StyleValue::from(0.5)));
//! ```
//!
//! ## Stylesheets
//!
//! ```rust
//! use plotstyle::{Stylesheet, StyleValue};
//!
//! let sheet = Stylesheet::from_yaml(r#"
//! - color: blue
//! - ec: red
//! "#).unwrap();
//!
//! let style = sheet.to_style();
//! assert_eq!(style.facecolor(), Some(&StyleValue::from("blue")));
//! assert_eq!(style.edgecolor(), Some(&StyleValue::from("red")));
//! ```

pub mod style;

pub use style::{
    finalize, load_stylesheet, merge, merge_into, DiagnosticSink, InputKey, Merged, StyleDiagnostic,
    StyleDict, StyleKey, StyleMap, StyleValue, Stylesheet, StylesheetError, NEVER, NONE,
    STYLESHEET_EXTENSIONS,
};
