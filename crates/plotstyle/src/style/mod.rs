//! Style attributes: keys, values, dictionaries, merging and stylesheets.
//!
//! Input dicts ([`StyleDict`]) hold attributes under whatever names the caller
//! used. [`merge`] resolves aliases and the `color` shorthand, layers the dicts
//! left to right into a canonical [`StyleMap`], and reports advisory
//! [`StyleDiagnostic`]s. [`finalize`] prepares the result for drawing.

mod diagnostic;
mod dict;
mod error;
mod key;
mod merge;
mod parser;
mod value;

pub use diagnostic::{DiagnosticSink, StyleDiagnostic};
pub use dict::{StyleDict, StyleMap};
pub use error::{Result, StylesheetError};
pub use key::{InputKey, StyleKey};
pub use merge::{finalize, merge, merge_into, Merged};
pub use parser::{load_stylesheet, Stylesheet, STYLESHEET_EXTENSIONS};
pub use value::{StyleValue, NEVER, NONE};
