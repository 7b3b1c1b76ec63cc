//! Keyword Processor
//!
//! Owns the dictionary (trie plus labels) and the matching settings behind a
//! single reader/writer lock. Scans share the read lock; adding or removing
//! keywords and changing settings take the write lock. All methods take
//! `&self`, so a processor can be shared through an `Arc` once built.
//!
//! # Examples
//!
//! ```
//! use kf_core::{KeywordProcessor, MatchOptions};
//!
//! let processor = KeywordProcessor::new();
//! processor.add_keyword_with_label("New York", "NYC");
//! processor.add_keyword("new");
//!
//! let found = processor.extract_keywords("I love new york", MatchOptions::default());
//! assert_eq!(found[0].label, "NYC");
//!
//! let (text, _) = processor.replace_keywords("I love New York", MatchOptions::default());
//! assert_eq!(text, "I love NYC");
//! ```

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::{ConfigError, ProcessorConfig};
use crate::matcher::{Hit, Scanner};
use crate::rewrite::Rewriter;
use crate::text::{fold_str, to_scan_chars, BoundarySet};
use crate::trie::Trie;
use crate::types::{KeywordMatch, MatchOptions};

// =============================================================================
// State
// =============================================================================

#[derive(Debug, Default)]
struct State {
    trie: Trie,
    /// Normalized keyword -> caller-facing label
    labels: HashMap<String, String>,
    case_sensitive: bool,
    boundary: BoundarySet,
}

impl State {
    fn normalize(&self, keyword: &str) -> String {
        if self.case_sensitive {
            keyword.to_string()
        } else {
            fold_str(keyword)
        }
    }

    fn label<'a>(&'a self, keyword: &'a str) -> &'a str {
        self.labels.get(keyword).map_or(keyword, String::as_str)
    }

    /// Run one scan over `text` and hand every hit to `commit`.
    fn scan<'s>(&'s self, text: &str, options: MatchOptions, mut commit: impl FnMut(Hit<'s>)) {
        if text.is_empty() || self.trie.is_empty() {
            return;
        }
        let chars = to_scan_chars(text, self.case_sensitive);
        let mut hits = 0usize;
        for hit in Scanner::new(&self.trie, &self.boundary, &chars, options) {
            log::trace!("match {:?} at {}..{}", hit.keyword, hit.start, hit.end);
            hits += 1;
            commit(hit);
        }
        log::trace!(
            "scanned {} codepoints, {} matches (longest_match={})",
            chars.len(),
            hits,
            options.longest_match
        );
    }
}

// =============================================================================
// KeywordProcessor
// =============================================================================

/// Dictionary-driven keyword extractor, replacer and masker.
#[derive(Debug, Default)]
pub struct KeywordProcessor {
    state: RwLock<State>,
}

impl KeywordProcessor {
    /// Create an empty, case-insensitive processor with the default
    /// boundary set (ASCII letters, digits and `-`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty processor from a configuration.
    pub fn from_config(config: &ProcessorConfig) -> Result<Self, ConfigError> {
        let processor = Self::new();
        processor.set_case_sensitive(config.case_sensitive);
        processor.add_boundary_chars(config.extra_boundary()?);
        processor.remove_boundary_chars(config.removed_boundary()?);
        log::debug!(
            "processor configured: case_sensitive={}, +{} -{} boundary chars",
            config.case_sensitive,
            config.extra_boundary_chars.len(),
            config.removed_boundary_chars.len()
        );
        Ok(processor)
    }

    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    // -------------------------------------------------------------------------
    // Settings
    // -------------------------------------------------------------------------

    /// Switch case-sensitive matching on or off.
    ///
    /// Keywords already in the dictionary keep the form they were inserted
    /// with, so this should be set before adding keywords.
    pub fn set_case_sensitive(&self, case_sensitive: bool) {
        self.write().case_sensitive = case_sensitive;
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.read().case_sensitive
    }

    /// Treat additional codepoints as word characters.
    pub fn add_boundary_chars<I: IntoIterator<Item = char>>(&self, chars: I) {
        let mut state = self.write();
        for c in chars {
            state.boundary.insert(c);
        }
    }

    /// Treat codepoints as separators.
    pub fn remove_boundary_chars<I: IntoIterator<Item = char>>(&self, chars: I) {
        let mut state = self.write();
        for c in chars {
            state.boundary.remove(c);
        }
    }

    // -------------------------------------------------------------------------
    // Dictionary
    // -------------------------------------------------------------------------

    /// Add a keyword whose label is the keyword itself.
    pub fn add_keyword(&self, keyword: &str) {
        self.add_keyword_with(keyword, None, false);
    }

    /// Add a keyword reported (and substituted) as `label`.
    pub fn add_keyword_with_label(&self, keyword: &str, label: &str) {
        self.add_keyword_with(keyword, Some(label), false);
    }

    /// Add several keywords, each labelled with itself.
    pub fn add_keywords<I, S>(&self, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for keyword in keywords {
            self.add_keyword(keyword.as_ref());
        }
    }

    /// Add a keyword.
    ///
    /// `exact_case` inserts the keyword verbatim even when the processor is
    /// case-insensitive; such a keyword only matches input that folds to the
    /// same codepoints. The label is stored verbatim. Without a label, an
    /// existing label for the same keyword is kept, otherwise the normalized
    /// keyword becomes its own label. Empty keywords are ignored.
    pub fn add_keyword_with(&self, keyword: &str, label: Option<&str>, exact_case: bool) {
        if keyword.is_empty() {
            log::debug!("ignoring empty keyword");
            return;
        }

        let mut state = self.write();
        let normalized = if exact_case {
            keyword.to_string()
        } else {
            state.normalize(keyword)
        };

        state.trie.insert(&normalized);
        match label {
            Some(label) => {
                state.labels.insert(normalized.clone(), label.to_string());
            }
            None => {
                state
                    .labels
                    .entry(normalized.clone())
                    .or_insert_with(|| normalized.clone());
            }
        }
        log::debug!("added keyword {:?} ({} total)", normalized, state.trie.len());
    }

    /// Remove keywords from the dictionary. Unknown keywords are ignored.
    ///
    /// Labels are kept: re-adding a removed keyword without a label brings
    /// its previous label back.
    pub fn remove_keywords<I, S>(&self, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = self.write();
        for keyword in keywords {
            let normalized = state.normalize(keyword.as_ref());
            if state.trie.remove(&normalized) {
                log::debug!("removed keyword {:?}", normalized);
            }
        }
    }

    /// Check whether a keyword is in the dictionary.
    pub fn exists(&self, keyword: &str) -> bool {
        let state = self.read();
        state.trie.contains(&state.normalize(keyword))
    }

    /// Label a matching `keyword` would be reported with.
    pub fn label_for(&self, keyword: &str) -> Option<String> {
        let state = self.read();
        let normalized = state.normalize(keyword);
        if !state.trie.contains(&normalized) {
            return None;
        }
        Some(state.label(&normalized).to_string())
    }

    /// Number of keywords in the dictionary.
    pub fn len(&self) -> usize {
        self.read().trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().trie.is_empty()
    }

    // -------------------------------------------------------------------------
    // Scanning
    // -------------------------------------------------------------------------

    /// Find every keyword in `text`.
    pub fn extract_keywords(&self, text: &str, options: MatchOptions) -> Vec<KeywordMatch> {
        let state = self.read();
        let mut found = Vec::new();
        state.scan(text, options, |hit| {
            found.push(KeywordMatch {
                label: state.label(hit.keyword).to_string(),
                start: hit.start,
                end: hit.end,
            });
        });
        found
    }

    /// Replace every keyword in `text` with its label.
    ///
    /// Returned matches use offsets into `text`, not into the rewritten
    /// string.
    pub fn replace_keywords(&self, text: &str, options: MatchOptions) -> (String, Vec<KeywordMatch>) {
        let state = self.read();
        let mut rewriter = Rewriter::new(text);
        let mut found = Vec::new();
        state.scan(text, options, |hit| {
            let label = state.label(hit.keyword);
            rewriter.splice(hit.start, hit.end, label);
            found.push(KeywordMatch {
                label: label.to_string(),
                start: hit.start,
                end: hit.end,
            });
        });
        (rewriter.into_string(), found)
    }

    /// Replace every keyword in `text` with `mask(keyword)`.
    ///
    /// `mask` receives the normalized keyword from the dictionary, not the
    /// label and not the input's spelling. It runs while the dictionary is
    /// read-locked and must not modify this processor.
    pub fn mask_keywords<F>(&self, text: &str, mut mask: F, options: MatchOptions) -> String
    where
        F: FnMut(&str) -> String,
    {
        let state = self.read();
        let mut rewriter = Rewriter::new(text);
        state.scan(text, options, |hit| {
            rewriter.splice(hit.start, hit.end, &mask(hit.keyword));
        });
        rewriter.into_string()
    }
}
