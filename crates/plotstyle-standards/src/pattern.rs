//! Shell-style exclusion patterns.
//!
//! Patterns follow `fnmatch` rules: `*` matches any run of characters
//! (including `/`), `?` matches one character, and `[...]` / `[!...]` match a
//! character class. Matching is against the whole relative path.

use regex::Regex;

use crate::error::Result;

/// A compiled shell-style pattern.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    source: String,
    regex: Regex,
}

impl GlobPattern {
    /// Compiles a pattern.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(&translate(pattern))?;
        Ok(GlobPattern {
            source: pattern.to_string(),
            regex,
        })
    }

    /// Returns true if `path` matches the whole pattern.
    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

/// A set of patterns; a path is excluded if any pattern matches.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<GlobPattern>,
}

impl PatternSet {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| GlobPattern::new(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(PatternSet { patterns })
    }

    pub fn matches(&self, path: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(path))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Translates an fnmatch pattern into an anchored regex.
fn translate(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::from("^(?s:");
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => {
                // Collapse runs of stars.
                while i + 1 < chars.len() && chars[i + 1] == '*' {
                    i += 1;
                }
                out.push_str(".*");
            }
            '?' => out.push('.'),
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    let mut body: String = chars[i + 1..end].iter().collect();
                    out.push('[');
                    if let Some(rest) = body.strip_prefix('!') {
                        out.push('^');
                        body = rest.to_string();
                    } else if body.starts_with('^') {
                        out.push('\\');
                    }
                    out.push_str(&body.replace('\\', "\\\\").replace('[', "\\["));
                    out.push(']');
                    i = end;
                }
                None => out.push_str("\\["),
            },
            c => out.push_str(&regex::escape(&c.to_string())),
        }
        i += 1;
    }

    out.push_str(")$");
    out
}

/// Finds the closing `]` of a class starting at `start`, if any.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start + 1;
    if j < chars.len() && chars[j] == '!' {
        j += 1;
    }
    // A leading ']' is literal.
    if j < chars.len() && chars[j] == ']' {
        j += 1;
    }
    while j < chars.len() && chars[j] != ']' {
        j += 1;
    }
    (j < chars.len()).then_some(j)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn glob(p: &str) -> GlobPattern {
        GlobPattern::new(p).unwrap()
    }

    #[test]
    fn test_star_crosses_directories() {
        assert!(glob("build/*").matches("build/a/b.rs"));
        assert!(glob("*/examples/*.rs").matches("crates/x/examples/demo.rs"));
        assert!(!glob("build/*").matches("src/build/a.rs"));
    }

    #[test]
    fn test_question_mark() {
        assert!(glob("a?.rs").matches("ab.rs"));
        assert!(!glob("a?.rs").matches("a.rs"));
    }

    #[test]
    fn test_literal_dot() {
        assert!(glob("version.rs").matches("version.rs"));
        assert!(!glob("version.rs").matches("versionXrs"));
    }

    #[test]
    fn test_character_class() {
        assert!(glob("file[0-9].rs").matches("file3.rs"));
        assert!(!glob("file[!0-9].rs").matches("file3.rs"));
        assert!(glob("file[!0-9].rs").matches("filex.rs"));
    }

    #[test]
    fn test_unclosed_bracket_is_literal() {
        assert!(glob("a[b").matches("a[b"));
    }

    #[test]
    fn test_pattern_set() {
        let set = PatternSet::new(&["dist/*", "*.generated.rs"]).unwrap();
        assert!(set.matches("dist/x.rs"));
        assert!(set.matches("src/model.generated.rs"));
        assert!(!set.matches("src/model.rs"));
        assert!(!PatternSet::default().matches("anything"));
    }

    proptest! {
        #[test]
        fn plain_names_match_themselves(name in "[a-zA-Z0-9_./+()-]{1,30}") {
            prop_assert!(glob(&name).matches(&name));
        }

        #[test]
        fn star_matches_everything(path in ".{0,40}") {
            prop_assert!(glob("*").matches(&path));
        }
    }
}
