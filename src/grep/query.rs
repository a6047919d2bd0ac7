/// Substring query applied to declaration identifiers.
///
/// An empty needle is a wildcard. Case-insensitive matching folds ASCII
/// letters only; non-ASCII bytes compare verbatim, which mirrors the
/// classic `toupper`-per-byte behavior and is a documented limitation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySpec {
    pub needle: String,
    pub ignore_case: bool,
}

impl QuerySpec {
    pub fn new(needle: impl Into<String>, ignore_case: bool) -> Self {
        Self {
            needle: needle.into(),
            ignore_case,
        }
    }

    /// Plain substring containment; no regex, no fuzzy matching.
    pub fn matches(&self, identifier: &str) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        if self.ignore_case {
            contains_ignore_ascii_case(identifier, &self.needle)
        } else {
            identifier.contains(&self.needle)
        }
    }
}

fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.len() > haystack.len() {
        return false;
    }
    haystack
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}
