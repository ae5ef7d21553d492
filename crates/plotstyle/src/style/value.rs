//! Style value types.

use std::fmt;

use serde::{Serialize, Serializer};

/// The sentinel string meaning "never fill".
pub const NEVER: &str = "never";

/// The renderer's "no fill" value, substituted for [`StyleValue::Never`] by
/// [`finalize`](super::finalize).
pub const NONE: &str = "none";

/// A style attribute value.
///
/// Colours and other free-form strings are kept as [`StyleValue::Text`]
/// untouched. The only string given special meaning is the exact lowercase
/// `"never"`, which becomes [`StyleValue::Never`].
///
/// # Example
///
/// ```rust
/// use plotstyle::StyleValue;
///
/// assert_eq!(StyleValue::from("red"), StyleValue::Text("red".into()));
/// assert_eq!(StyleValue::from("never"), StyleValue::Never);
/// assert_eq!(StyleValue::from(1.5), StyleValue::Number(1.5));
/// assert_eq!(StyleValue::from(None::<f64>), StyleValue::None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// An explicit null. Overrides earlier values like any other value.
    None,
    /// The "never fill" sentinel.
    Never,
    /// A boolean flag such as `antialiased`.
    Bool(bool),
    /// A numeric value such as a line width.
    Number(f64),
    /// A colour name, colour spec, or any other string.
    Text(String),
}

impl StyleValue {
    /// Returns true for [`StyleValue::Never`].
    pub fn is_never(&self) -> bool {
        matches!(self, StyleValue::Never)
    }

    /// Returns true if this value would actually paint a fill.
    ///
    /// `None`, the sentinel, and the strings `none`/`never` in any casing do
    /// not count.
    pub fn is_real_fill(&self) -> bool {
        match self {
            StyleValue::None | StyleValue::Never => false,
            StyleValue::Text(s) => {
                let lower = s.to_lowercase();
                lower != NONE && lower != NEVER
            }
            StyleValue::Bool(_) | StyleValue::Number(_) => true,
        }
    }

    /// Returns the string content for text values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            StyleValue::Never => Some(NEVER),
            _ => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::None => f.write_str("None"),
            StyleValue::Never => f.write_str(NEVER),
            StyleValue::Bool(b) => write!(f, "{}", b),
            StyleValue::Number(n) => write!(f, "{}", n),
            StyleValue::Text(s) => write!(f, "'{}'", s),
        }
    }
}

impl Serialize for StyleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StyleValue::None => serializer.serialize_none(),
            StyleValue::Never => serializer.serialize_str(NEVER),
            StyleValue::Bool(b) => serializer.serialize_bool(*b),
            StyleValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() && n.abs() < i64::MAX as f64 {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
            StyleValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        if s == NEVER {
            StyleValue::Never
        } else {
            StyleValue::Text(s.to_string())
        }
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        if s == NEVER {
            StyleValue::Never
        } else {
            StyleValue::Text(s)
        }
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(f64::from(n))
    }
}

impl From<bool> for StyleValue {
    fn from(b: bool) -> Self {
        StyleValue::Bool(b)
    }
}

impl<T: Into<StyleValue>> From<Option<T>> for StyleValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(StyleValue::None, Into::into)
    }
}
