//! Canonical style keys and alias resolution.
//!
//! Every attribute written into a [`StyleDict`](super::StyleDict) is stored
//! under the name the caller used. At merge time each name is resolved with
//! [`InputKey::parse`] into either a canonical [`StyleKey`] or the `color`
//! shorthand.
//!
//! | Alias | Canonical    |
//! |-------|--------------|
//! | `fc`  | `facecolor`  |
//! | `ec`  | `edgecolor`  |
//! | `lw`  | `linewidth`  |
//! | `ls`  | `linestyle`  |
//! | `aa`  | `antialiased`|
//!
//! Names that are neither canonical nor aliases pass through as
//! [`StyleKey::Other`].

use std::fmt;

use serde::{Serialize, Serializer};

/// A canonical style attribute key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleKey {
    /// Fill colour of patches and polygons.
    FaceColor,
    /// Outline colour.
    EdgeColor,
    /// Stroke width in points.
    LineWidth,
    /// Dash pattern of the stroke.
    LineStyle,
    /// Opacity in `0.0..=1.0`.
    Alpha,
    /// Drawing order.
    ZOrder,
    /// Whether to antialias when drawing.
    Antialiased,
    /// Any attribute without a dedicated variant, kept as written.
    Other(String),
}

impl StyleKey {
    /// Every key with a dedicated variant.
    pub const KNOWN: [StyleKey; 7] = [
        StyleKey::FaceColor,
        StyleKey::EdgeColor,
        StyleKey::LineWidth,
        StyleKey::LineStyle,
        StyleKey::Alpha,
        StyleKey::ZOrder,
        StyleKey::Antialiased,
    ];

    /// The canonical name of this key.
    pub fn as_str(&self) -> &str {
        match self {
            StyleKey::FaceColor => "facecolor",
            StyleKey::EdgeColor => "edgecolor",
            StyleKey::LineWidth => "linewidth",
            StyleKey::LineStyle => "linestyle",
            StyleKey::Alpha => "alpha",
            StyleKey::ZOrder => "zorder",
            StyleKey::Antialiased => "antialiased",
            StyleKey::Other(name) => name,
        }
    }

    /// The short alias for this key, if it has one.
    pub fn alias(&self) -> Option<&'static str> {
        match self {
            StyleKey::FaceColor => Some("fc"),
            StyleKey::EdgeColor => Some("ec"),
            StyleKey::LineWidth => Some("lw"),
            StyleKey::LineStyle => Some("ls"),
            StyleKey::Antialiased => Some("aa"),
            StyleKey::Alpha | StyleKey::ZOrder | StyleKey::Other(_) => None,
        }
    }

    /// Returns true for keys without a dedicated variant.
    pub fn is_other(&self) -> bool {
        matches!(self, StyleKey::Other(_))
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for StyleKey {
    /// Resolves aliases. The `color` shorthand has no single canonical key and
    /// becomes [`StyleKey::Other`]; use [`InputKey::parse`] to detect it.
    /// [`StyleMap::insert`](super::StyleMap::insert) expands it into both
    /// colours.
    fn from(name: &str) -> Self {
        match InputKey::parse(name) {
            InputKey::Attribute(key) => key,
            InputKey::Color => StyleKey::Other(name.to_string()),
        }
    }
}

impl Serialize for StyleKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A key as it may appear in an input dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// A canonical key, or an alias already resolved to one.
    Attribute(StyleKey),
    /// The `color` shorthand, which sets both face and edge colour.
    Color,
}

impl InputKey {
    /// Resolves a raw attribute name.
    pub fn parse(name: &str) -> Self {
        let key = match name {
            "color" => return InputKey::Color,
            "facecolor" | "fc" => StyleKey::FaceColor,
            "edgecolor" | "ec" => StyleKey::EdgeColor,
            "linewidth" | "lw" => StyleKey::LineWidth,
            "linestyle" | "ls" => StyleKey::LineStyle,
            "antialiased" | "aa" => StyleKey::Antialiased,
            "alpha" => StyleKey::Alpha,
            "zorder" => StyleKey::ZOrder,
            other => StyleKey::Other(other.to_string()),
        };
        InputKey::Attribute(key)
    }

    /// The canonical keys this input key writes to.
    pub fn targets(&self) -> Vec<StyleKey> {
        match self {
            InputKey::Attribute(key) => vec![key.clone()],
            InputKey::Color => vec![StyleKey::FaceColor, StyleKey::EdgeColor],
        }
    }
}
