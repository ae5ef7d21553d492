//! Advisory diagnostics raised while merging.
//!
//! Merging never fails. Conditions a caller should hear about are reported as
//! [`StyleDiagnostic`]s, either collected in [`Merged`](super::Merged) or
//! pushed into a caller-supplied [`DiagnosticSink`].

use std::fmt;

use super::value::StyleValue;

/// A non-fatal condition encountered during a merge.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleDiagnostic {
    /// A dict tried to set a real fill after facecolor was set to `"never"`.
    /// The attempted value was discarded.
    NeverOverridden {
        /// The fill value that was discarded.
        attempted: StyleValue,
    },
}

impl fmt::Display for StyleDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleDiagnostic::NeverOverridden { attempted } => write!(
                f,
                "facecolor was defined as \"never\" but an attempt was made to \
                 override it with {}; the override is ignored",
                attempted
            ),
        }
    }
}

/// Destination for diagnostics produced during a merge.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: StyleDiagnostic);
}

impl DiagnosticSink for Vec<StyleDiagnostic> {
    fn report(&mut self, diagnostic: StyleDiagnostic) {
        self.push(diagnostic);
    }
}

impl<F: FnMut(StyleDiagnostic)> DiagnosticSink for F {
    fn report(&mut self, diagnostic: StyleDiagnostic) {
        self(diagnostic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_overridden_message() {
        let diag = StyleDiagnostic::NeverOverridden {
            attempted: StyleValue::from("red"),
        };
        let msg = diag.to_string();
        assert!(msg.contains("defined as \"never\""));
        assert!(msg.contains("'red'"));
    }

    #[test]
    fn test_closure_sink() {
        let mut count = 0;
        let mut sink = |_: StyleDiagnostic| count += 1;
        sink.report(StyleDiagnostic::NeverOverridden {
            attempted: StyleValue::from(1),
        });
        assert_eq!(count, 1);
    }
}
