//! Core Matching Engine
//!
//! A single left-to-right pass over the (already case-folded) input. Every
//! public operation (extract, replace, mask) consumes the same [`Hit`]
//! stream, so they always agree on which spans matched.
//!
//! A walk is only attempted at a token start: a boundary codepoint that
//! follows a non-boundary codepoint or the start of input. A candidate is
//! accepted only if the codepoint after it is not a boundary codepoint.

use crate::text::BoundarySet;
use crate::trie::Trie;
use crate::types::MatchOptions;

/// A committed match in scan coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit<'a> {
    /// Codepoint offset of the first matched codepoint
    pub start: usize,
    /// Codepoint offset right after the match
    pub end: usize,
    /// Normalized keyword stored in the trie
    pub keyword: &'a str,
}

// =============================================================================
// Scanner
// =============================================================================

/// Iterator over the matches in a codepoint sequence.
pub struct Scanner<'t, 'c> {
    trie: &'t Trie,
    boundary: &'t BoundarySet,
    chars: &'c [char],
    longest_match: bool,
    idx: usize,
    at_token_start: bool,
}

impl<'t, 'c> Scanner<'t, 'c> {
    pub fn new(
        trie: &'t Trie,
        boundary: &'t BoundarySet,
        chars: &'c [char],
        options: MatchOptions,
    ) -> Self {
        Self {
            trie,
            boundary,
            chars,
            longest_match: options.longest_match,
            idx: 0,
            at_token_start: true,
        }
    }

    /// Walk the trie from `start` and return the committed candidate, if any.
    fn walk(&self, start: usize) -> Option<Hit<'t>> {
        let mut node = self.trie.root();
        let mut found = None;

        for (j, &c) in self.chars.iter().enumerate().skip(start) {
            node = match self.trie.child(node, c) {
                Some(next) => next,
                None => break,
            };

            let Some(keyword) = self.trie.terminal(node) else {
                continue;
            };
            if !self.boundary.is_token_end(self.chars, j + 1) {
                continue;
            }

            found = Some(Hit {
                start,
                end: j + 1,
                keyword,
            });
            if !self.longest_match {
                break;
            }
        }

        found
    }
}

impl<'t> Iterator for Scanner<'t, '_> {
    type Item = Hit<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < self.chars.len() {
            let c = self.chars[self.idx];

            if !self.boundary.contains(c) {
                self.idx += 1;
                self.at_token_start = true;
                continue;
            }

            // Mid-token: a keyword may not start here
            if !self.at_token_start {
                self.idx += 1;
                continue;
            }

            self.at_token_start = false;
            match self.walk(self.idx) {
                Some(hit) => {
                    self.idx = hit.end;
                    return Some(hit);
                }
                None => self.idx += 1,
            }
        }

        None
    }
}
