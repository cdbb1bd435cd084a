//! Case-insensitive set of excluded directory names

use std::collections::BTreeSet;
use std::ffi::OsStr;

use super::config::DEFAULT_EXCLUDES;

/// Directory names that prune a subtree.
///
/// Entries are compared against single path segments, never against a whole
/// path, so `dist` excludes `dist/` but not `redistribute/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: BTreeSet<String>,
}

impl ExclusionSet {
    /// An empty set that excludes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge the default exclusions with caller-supplied names.
    pub fn with_defaults<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set: Self = DEFAULT_EXCLUDES.iter().collect();
        set.extend(extra);
        set
    }

    pub fn insert(&mut self, name: &str) {
        let name = name.trim();
        if !name.is_empty() {
            self.names.insert(fold_case(name));
        }
    }

    /// Check whether a single path segment names an excluded directory.
    pub fn is_excluded(&self, segment: &OsStr) -> bool {
        self.names.contains(&fold_case(&segment.to_string_lossy()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Normalized (lowercased) names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> Extend<S> for ExclusionSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::empty();
        set.extend(iter);
        set
    }
}

fn fold_case(name: &str) -> String {
    name.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_present() {
        let set = ExclusionSet::with_defaults(Vec::<String>::new());
        for name in DEFAULT_EXCLUDES {
            assert!(set.is_excluded(OsStr::new(name)), "{} should be excluded", name);
        }
        assert_eq!(set.len(), DEFAULT_EXCLUDES.len());
    }

    #[test]
    fn test_case_insensitive() {
        let set = ExclusionSet::with_defaults(["Vendor"]);
        assert!(set.is_excluded(OsStr::new("Node_Modules")));
        assert!(set.is_excluded(OsStr::new("NODE_MODULES")));
        assert!(set.is_excluded(OsStr::new("vendor")));
        assert!(set.is_excluded(OsStr::new("VENDOR")));
    }

    #[test]
    fn test_whole_segment_only() {
        let set = ExclusionSet::with_defaults(Vec::<String>::new());
        assert!(!set.is_excluded(OsStr::new("redistribute")));
        assert!(!set.is_excluded(OsStr::new("distribution")));
        assert!(!set.is_excluded(OsStr::new("builder")));
        assert!(!set.is_excluded(OsStr::new("output")));
        assert!(!set.is_excluded(OsStr::new(".github")));
    }

    #[test]
    fn test_duplicates_collapse() {
        let set = ExclusionSet::with_defaults(["dist", "DIST", "coverage", "Coverage", " "]);
        assert_eq!(set.len(), DEFAULT_EXCLUDES.len() + 1);
        assert!(set.is_excluded(OsStr::new("coverage")));
    }

    #[test]
    fn test_empty_set_excludes_nothing() {
        let set = ExclusionSet::empty();
        assert!(set.is_empty());
        assert!(!set.is_excluded(OsStr::new("node_modules")));
    }
}
