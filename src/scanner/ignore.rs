//! Substring-based path ignore rules.
//!
//! The ignore set is a fixed collection of substrings, not globs or
//! regexes: a path is ignored when any rule occurs anywhere in its
//! string form. The defaults exclude version-control directories and
//! OS metadata files. The set is immutable once constructed and is
//! injected into the [`Walker`](crate::scanner::Walker), so tests can
//! substitute their own rules.

use std::path::Path;

/// Default ignore substrings: version-control internals and OS cruft.
///
/// Note that substring matching makes `/.git` also cover `.gitignore`
/// and `.gitattributes`; those files are never duplicate candidates
/// worth keeping in sync, so the broad match is acceptable.
pub const DEFAULT_IGNORE_RULES: &[&str] = &["/.idea", "/.git", "/.DS_Store"];

/// An immutable set of substring ignore rules.
#[derive(Debug, Clone)]
pub struct IgnoreRules {
    rules: Vec<String>,
}

impl Default for IgnoreRules {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORE_RULES.iter().map(|s| (*s).to_string()))
    }
}

impl IgnoreRules {
    /// Create a rule set from arbitrary substrings.
    pub fn new(rules: impl IntoIterator<Item = String>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// An empty rule set that ignores nothing.
    #[must_use]
    pub fn none() -> Self {
        Self { rules: Vec::new() }
    }

    /// Check whether `path` matches any rule.
    ///
    /// Matching is plain substring containment on the full path string.
    /// On Windows the path separators are normalized to `/` first so the
    /// default rules behave identically across platforms.
    #[must_use]
    pub fn is_ignored(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        let haystack = if cfg!(windows) {
            path_str.replace('\\', "/")
        } else {
            path_str.into_owned()
        };

        self.rules.iter().any(|rule| haystack.contains(rule))
    }

    /// The rule substrings, in insertion order.
    #[must_use]
    pub fn rules(&self) -> &[String] {
        &self.rules
    }
}
