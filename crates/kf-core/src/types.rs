//! Shared type definitions for keyword matching

// =============================================================================
// Match Options
// =============================================================================

/// Per-call matching policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// When `true`, the longest keyword ending on a token edge wins.
    /// When `false`, the first keyword that ends on a token edge wins.
    pub longest_match: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self { longest_match: true }
    }
}

impl MatchOptions {
    /// Longest match wins (the default).
    pub const fn longest_match() -> Self {
        Self { longest_match: true }
    }

    /// First (shortest reachable) match wins.
    pub const fn first_match() -> Self {
        Self {
            longest_match: false,
        }
    }
}

// =============================================================================
// Match Result
// =============================================================================

/// A keyword found in the scanned text.
///
/// Offsets are codepoint indices into the text as passed in by the caller,
/// never into a rewritten buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatch {
    /// Label stored for the matched keyword
    pub label: String,
    /// Codepoint offset where the match begins
    pub start: usize,
    /// Codepoint offset right after the match
    pub end: usize,
}

impl KeywordMatch {
    /// Matched span length in codepoints.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
