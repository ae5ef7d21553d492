//! Merging of layered style dictionaries.
//!
//! # Precedence
//!
//! Dicts are applied left to right and each one overwrites the accumulated
//! result attribute by attribute. Within a single dict:
//!
//! 1. Aliases resolve to canonical keys. If an alias and its canonical key
//!    both appear, the one inserted later wins.
//! 2. The `color` shorthand sets `facecolor` and `edgecolor`, beating any
//!    sibling face/edge colour in the same dict.
//!
//! A later dict can still override either colour individually, including one
//! that came from an earlier `color`.
//!
//! # The `"never"` fill
//!
//! Once `facecolor` is `"never"`, later dicts cannot change it. A later dict
//! that tries to set a real fill has its facecolor dropped and a
//! [`StyleDiagnostic::NeverOverridden`] is reported. Values that would not
//! paint anyway (`None`, `"none"`, `"never"` in any casing) are dropped
//! silently.
//!
//! [`finalize`] then turns the sentinel into `"none"` for the renderer.

use std::collections::BTreeMap;

use super::diagnostic::{DiagnosticSink, StyleDiagnostic};
use super::dict::{StyleDict, StyleMap};
use super::key::{InputKey, StyleKey};
use super::value::{StyleValue, NONE};

/// The result of [`merge`]: the merged style plus any diagnostics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Merged {
    pub style: StyleMap,
    pub diagnostics: Vec<StyleDiagnostic>,
}

impl Merged {
    /// Discards the diagnostics.
    pub fn into_style(self) -> StyleMap {
        self.style
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Merges style dicts in order, collecting diagnostics.
///
/// # Example
///
/// ```rust
/// use plotstyle::{merge, StyleDict, StyleMap};
///
/// let base = StyleDict::new().with("color", "blue");
/// let layer = StyleDict::new().with("ec", "red");
///
/// let merged = merge([&base, &layer]);
/// let expected: StyleMap = [("facecolor", "blue"), ("edgecolor", "red")]
///     .into_iter()
///     .collect();
/// assert_eq!(merged.style, expected);
/// assert!(merged.diagnostics.is_empty());
/// ```
pub fn merge<'a, I>(dicts: I) -> Merged
where
    I: IntoIterator<Item = &'a StyleDict>,
{
    let mut diagnostics = Vec::new();
    let style = merge_into(dicts, &mut diagnostics);
    Merged { style, diagnostics }
}

/// Merges style dicts in order, reporting diagnostics to `sink`.
///
/// Every diagnostic is also logged at `warn` level.
pub fn merge_into<'a, I, S>(dicts: I, sink: &mut S) -> StyleMap
where
    I: IntoIterator<Item = &'a StyleDict>,
    S: DiagnosticSink + ?Sized,
{
    let mut style = StyleMap::new();

    for dict in dicts {
        let mut contribution = resolve(dict);

        if style.facecolor().is_some_and(StyleValue::is_never) {
            if let Some(attempted) = contribution.remove(&StyleKey::FaceColor) {
                if attempted.is_real_fill() {
                    let diagnostic = StyleDiagnostic::NeverOverridden { attempted };
                    tracing::warn!("{}", diagnostic);
                    sink.report(diagnostic);
                }
            }
        }

        for (key, value) in contribution {
            style.insert(key, value);
        }
    }

    style
}

/// Resolves one dict into its canonical contribution.
fn resolve(dict: &StyleDict) -> BTreeMap<StyleKey, StyleValue> {
    let mut contribution = BTreeMap::new();
    let mut color = None;

    for (key, value) in dict.resolved() {
        match key {
            InputKey::Attribute(key) => {
                contribution.insert(key, value.clone());
            }
            InputKey::Color => color = Some(value),
        }
    }

    if let Some(color) = color {
        for key in InputKey::Color.targets() {
            contribution.insert(key, color.clone());
        }
    }

    contribution
}

/// Prepares a merged style for the renderer.
///
/// A `"never"` facecolor becomes `"none"`. The map is modified in place and
/// returned for chaining.
pub fn finalize(style: &mut StyleMap) -> &mut StyleMap {
    if let Some(fc) = style.get_mut(&StyleKey::FaceColor) {
        if fc.is_never() {
            *fc = StyleValue::Text(NONE.to_string());
        }
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict<const N: usize>(entries: [(&str, StyleValue); N]) -> StyleDict {
        entries.into_iter().collect()
    }

    fn map<const N: usize>(entries: [(&str, StyleValue); N]) -> StyleMap {
        entries.into_iter().collect()
    }

    fn s(value: &str) -> StyleValue {
        StyleValue::from(value)
    }

    fn n(value: i32) -> StyleValue {
        StyleValue::from(value)
    }

    fn merged(dicts: &[StyleDict]) -> StyleMap {
        merge(dicts).style
    }

    // =========================================================================
    // Precedence
    // =========================================================================

    #[test]
    fn test_merge_nothing() {
        assert_eq!(merged(&[]), StyleMap::new());
    }

    #[test]
    fn test_merge_empty_dicts() {
        assert_eq!(
            merged(&[StyleDict::new(), StyleDict::new(), StyleDict::new()]),
            StyleMap::new()
        );
    }

    #[test]
    fn test_rightmost_wins() {
        let result = merged(&[StyleDict::new(), dict([("a", n(2))]), dict([("a", n(1))])]);
        assert_eq!(result, map([("a", n(1))]));
    }

    #[test]
    fn test_alias_expansion() {
        assert_eq!(
            merged(&[dict([("fc", s("red"))])]),
            map([("facecolor", s("red"))])
        );
    }

    #[test]
    fn test_later_canonical_beats_alias_in_same_dict() {
        assert_eq!(
            merged(&[dict([("fc", s("red")), ("facecolor", s("blue"))])]),
            map([("facecolor", s("blue"))])
        );
        assert_eq!(
            merged(&[dict([("lw", n(1)), ("linewidth", n(2))])]),
            map([("linewidth", n(2))])
        );
    }

    #[test]
    fn test_later_alias_beats_earlier_canonical_across_dicts() {
        assert_eq!(
            merged(&[dict([("lw", n(1)), ("linewidth", n(2))]), dict([("lw", n(3))])]),
            map([("linewidth", n(3))])
        );
    }

    // =========================================================================
    // Color shorthand
    // =========================================================================

    #[test]
    fn test_color_sets_face_and_edge() {
        assert_eq!(
            merged(&[dict([("color", s("red"))])]),
            map([("edgecolor", s("red")), ("facecolor", s("red"))])
        );
    }

    #[test]
    fn test_color_beats_sibling_fc() {
        assert_eq!(
            merged(&[dict([("fc", s("red")), ("color", s("blue"))])]),
            map([("facecolor", s("blue")), ("edgecolor", s("blue"))])
        );
    }

    #[test]
    fn test_color_beats_sibling_even_when_inserted_first() {
        assert_eq!(
            merged(&[dict([("color", s("blue")), ("ec", s("red"))])]),
            map([("facecolor", s("blue")), ("edgecolor", s("blue"))])
        );
    }

    #[test]
    fn test_later_color_overrides_earlier_edgecolor() {
        assert_eq!(
            merged(&[dict([("edgecolor", s("blue"))]), dict([("color", s("red"))])]),
            map([("edgecolor", s("red")), ("facecolor", s("red"))])
        );
    }

    #[test]
    fn test_later_edgecolor_overrides_earlier_color() {
        assert_eq!(
            merged(&[dict([("color", s("blue"))]), dict([("edgecolor", s("red"))])]),
            map([("edgecolor", s("red")), ("facecolor", s("blue"))])
        );
    }

    #[test]
    fn test_color_trumps_explicit_edgecolor_in_same_dict() {
        assert_eq!(
            merged(&[
                dict([("color", s("blue"))]),
                dict([("edgecolor", s("red")), ("color", s("yellow"))]),
            ]),
            map([("edgecolor", s("yellow")), ("facecolor", s("yellow"))])
        );
    }

    // =========================================================================
    // None values
    // =========================================================================

    #[test]
    fn test_none_color_then_facecolor() {
        assert_eq!(
            merged(&[dict([("color", StyleValue::None)]), dict([("facecolor", s("red"))])]),
            map([("facecolor", s("red")), ("edgecolor", StyleValue::None)])
        );
    }

    #[test]
    fn test_none_via_alias_overrides() {
        assert_eq!(
            merged(&[dict([("linewidth", n(1))]), dict([("lw", StyleValue::None)])]),
            map([("linewidth", StyleValue::None)])
        );
    }

    // =========================================================================
    // Never sentinel
    // =========================================================================

    #[test]
    fn test_never_is_honoured() {
        let result = merge(&[
            dict([("facecolor", s("never"))]),
            dict([("color", s("yellow"))]),
        ]);
        assert_eq!(
            result.style,
            map([("edgecolor", s("yellow")), ("facecolor", StyleValue::Never)])
        );
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0].to_string().contains("defined as \"never\""));
    }

    #[test]
    fn test_never_override_warnings() {
        let cases = [(s("red"), 1), (s("NoNe"), 0), (n(1), 1), (StyleValue::None, 0)];
        for (value, expected) in cases {
            let result = merge(&[
                dict([("facecolor", s("never"))]),
                dict([("fc", value.clone())]),
            ]);
            assert_eq!(
                result.diagnostics.len(),
                expected,
                "unexpected diagnostics for {:?}",
                value
            );
            assert_eq!(result.style.facecolor(), Some(&StyleValue::Never));
        }
    }

    #[test]
    fn test_warning_count_matches_override_attempts() {
        let result = merge(&[
            dict([("facecolor", s("never"))]),
            dict([("fc", s("red"))]),
            dict([("lw", n(2))]),
            dict([("color", s("blue"))]),
        ]);
        assert_eq!(result.diagnostics.len(), 2);
        assert_eq!(result.style.edgecolor(), Some(&s("blue")));
        assert_eq!(result.style.get(&StyleKey::LineWidth), Some(&n(2)));
    }

    #[test]
    fn test_never_can_be_set_late() {
        let result = merge(&[dict([("fc", s("red"))]), dict([("fc", s("never"))])]);
        assert_eq!(result.style.facecolor(), Some(&StyleValue::Never));
        assert!(!result.has_diagnostics());
    }

    #[test]
    fn test_merge_into_custom_sink() {
        let mut seen = Vec::new();
        let style = merge_into(
            &[dict([("fc", s("never"))]), dict([("fc", s("green"))])],
            &mut |d: StyleDiagnostic| seen.push(d),
        );
        assert_eq!(style.facecolor(), Some(&StyleValue::Never));
        assert_eq!(
            seen,
            vec![StyleDiagnostic::NeverOverridden { attempted: s("green") }]
        );
    }

    // =========================================================================
    // finalize
    // =========================================================================

    #[test]
    fn test_finalize_never() {
        let mut style = map([("facecolor", s("never")), ("edgecolor", s("yellow"))]);
        let expected = map([("edgecolor", s("yellow")), ("facecolor", s("none"))]);
        assert_eq!(*finalize(&mut style), expected);
        assert_eq!(style, expected);
    }

    #[test]
    fn test_finalize_leaves_other_values() {
        let mut style = map([("facecolor", s("Never")), ("lw", n(1))]);
        let before = style.clone();
        finalize(&mut style);
        assert_eq!(style, before);
    }
}
