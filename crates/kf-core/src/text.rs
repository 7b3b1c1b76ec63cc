//! Text normalization and word-boundary classification
//!
//! Scanning works on `char` sequences. Case folding here is deliberately
//! one-to-one: a codepoint whose lowercase form expands to several codepoints
//! (for example `İ`) is kept as is, so the folded sequence always has the same
//! length as the input and match offsets can be reported against the original
//! text.

use std::collections::HashSet;

// =============================================================================
// Case Folding
// =============================================================================

/// Lowercase a single codepoint without changing the codepoint count.
#[inline]
pub fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}

/// Fold a keyword for trie insertion or lookup.
pub fn fold_str(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

/// Decode `text` into codepoints, folding case when `case_sensitive` is false.
pub fn to_scan_chars(text: &str, case_sensitive: bool) -> Vec<char> {
    if case_sensitive {
        text.chars().collect()
    } else {
        text.chars().map(fold_char).collect()
    }
}

// =============================================================================
// Boundary Set
// =============================================================================

/// Codepoints that form word tokens.
///
/// A keyword may only match at the start of a run of these codepoints and
/// must end where the run ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundarySet {
    chars: HashSet<char>,
}

impl Default for BoundarySet {
    /// ASCII letters, ASCII digits and `-`.
    fn default() -> Self {
        let chars = ('a'..='z')
            .chain('A'..='Z')
            .chain('0'..='9')
            .chain(std::iter::once('-'))
            .collect();
        Self { chars }
    }
}

impl BoundarySet {
    /// An empty set: every codepoint separates tokens.
    pub fn empty() -> Self {
        Self {
            chars: HashSet::new(),
        }
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn insert(&mut self, c: char) {
        self.chars.insert(c);
    }

    pub fn remove(&mut self, c: char) {
        self.chars.remove(&c);
    }

    /// Whether a match ending right before `pos` ends on a token edge.
    #[inline]
    pub fn is_token_end(&self, chars: &[char], pos: usize) -> bool {
        match chars.get(pos) {
            Some(&c) => !self.contains(c),
            None => true,
        }
    }
}
