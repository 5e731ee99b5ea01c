//! File path predicates used by processing rules

use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};

/// Marks a stylesheet as module-scoped: `foo.module.css`, `bar.module.scss`, ...
pub const MODULE_MARKER: &str = r"\.module\.[a-z]+$";

/// A compiled regular expression that compares and serializes by its source text
#[derive(Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Regex::new(source).map(Pattern)
    }

    /// For patterns that are compile-time constants of this crate
    pub(crate) fn fixed(source: &'static str) -> Self {
        Pattern(Regex::new(source).expect("valid regex"))
    }

    pub fn module_marker() -> Self {
        Self::fixed(MODULE_MARKER)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.0.is_match(haystack)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Pattern {}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.as_str())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// An include/exclude condition: either a pattern over the path text or a directory prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Regex(Pattern),
    Directory(PathBuf),
}

impl Condition {
    pub fn matches(&self, path: &Path) -> bool {
        match self {
            Condition::Regex(pattern) => pattern.is_match(&path_text(path)),
            Condition::Directory(dir) => path.starts_with(dir),
        }
    }
}

/// `test` must match; then at least one `include` (when any are given) and no `exclude`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchPredicate {
    pub test: Pattern,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<Condition>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<Condition>,
}

impl MatchPredicate {
    pub fn new(test: Pattern) -> Self {
        Self {
            test,
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }

    pub fn including(mut self, condition: Condition) -> Self {
        self.include.push(condition);
        self
    }

    pub fn excluding(mut self, condition: Condition) -> Self {
        self.exclude.push(condition);
        self
    }

    pub fn matches(&self, path: &Path) -> bool {
        if !self.test.is_match(&path_text(path)) {
            return false;
        }
        if !self.include.is_empty() && !self.include.iter().any(|c| c.matches(path)) {
            return false;
        }
        !self.exclude.iter().any(|c| c.matches(path))
    }
}

fn path_text(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_equality_uses_source() {
        assert_eq!(Pattern::new(r"\.css$").unwrap(), Pattern::new(r"\.css$").unwrap());
        assert_ne!(Pattern::new(r"\.css$").unwrap(), Pattern::new(r"\.scss$").unwrap());
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(Pattern::new("(unclosed").is_err());
    }

    #[test]
    fn test_pattern_serializes_as_string() {
        let json = serde_json::to_string(&Pattern::module_marker()).unwrap();
        assert_eq!(json, r#""\\.module\\.[a-z]+$""#);
    }

    #[test]
    fn test_module_marker() {
        let marker = Pattern::module_marker();
        assert!(marker.is_match("app.module.css"));
        assert!(marker.is_match("nested/app.module.scss"));
        assert!(!marker.is_match("app.css"));
        assert!(!marker.is_match("module.css"));
        assert!(!marker.is_match("app.module.CSS"));
    }

    #[test]
    fn test_include_and_exclude() {
        let predicate = MatchPredicate::new(Pattern::new(r"\.js$").unwrap())
            .including(Condition::Directory(PathBuf::from("/app/javascript")))
            .excluding(Condition::Regex(Pattern::new("node_modules").unwrap()));

        assert!(predicate.matches(Path::new("/app/javascript/packs/app.js")));
        assert!(!predicate.matches(Path::new("/vendor/lib.js")));
        assert!(!predicate.matches(Path::new("/app/javascript/node_modules/x/index.js")));
        assert!(!predicate.matches(Path::new("/app/javascript/app.css")));
    }

    #[test]
    fn test_directory_condition_is_component_based() {
        let condition = Condition::Directory(PathBuf::from("/app/javascript"));
        assert!(!condition.matches(Path::new("/app/javascript-legacy/app.js")));
    }
}
