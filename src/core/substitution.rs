//! Ordered literal find-and-replace over a text buffer

/// A literal `(old, new)` fragment pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution<'a> {
    /// Fragment to look for, matched byte for byte
    pub old: &'a str,
    /// Fragment written in its place
    pub new: &'a str,
}

impl<'a> Substitution<'a> {
    pub const fn new(old: &'a str, new: &'a str) -> Self {
        Self { old, new }
    }

    /// Count non-overlapping occurrences of the old fragment
    pub fn occurrences(&self, text: &str) -> usize {
        if self.old.is_empty() {
            return 0;
        }
        text.matches(self.old).count()
    }

    /// Replace every occurrence of the old fragment
    pub fn replace(&self, text: &str) -> String {
        if self.old.is_empty() {
            return text.to_string();
        }
        text.replace(self.old, self.new)
    }
}

/// Apply `pairs` to `text` in order, each one seeing the output of the previous.
///
/// A pair whose fragment does not occur leaves the text as it is.
pub fn apply(text: &str, pairs: &[Substitution<'_>]) -> String {
    let mut content = text.to_string();
    for (index, pair) in pairs.iter().enumerate() {
        let hits = pair.occurrences(&content);
        tracing::debug!("Substitution #{} matched {} time(s)", index + 1, hits);
        if hits > 0 {
            content = pair.replace(&content);
        }
    }
    content
}
