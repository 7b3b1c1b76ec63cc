//! KeyFlash Core Library
//!
//! Single-pass keyword extraction, replacement and masking over a
//! dictionary of arbitrary-length keywords.
//!
//! # Architecture
//!
//! Keywords are stored in a prefix trie over codepoints. A scan walks the
//! input once, attempting a trie walk only where a word token starts, and
//! accepts a keyword only if it also ends where the token ends. Extract,
//! replace and mask all consume the same stream of matches and differ only
//! in what they do with each matched span.
//!
//! # Modules
//!
//! - `trie`: Arena-backed keyword trie
//! - `text`: Case folding and the word-boundary set
//! - `matcher`: The shared left-to-right scanner
//! - `rewrite`: Splice buffer for replace and mask
//! - `processor`: The public `KeywordProcessor`
//! - `config`: Serializable processor configuration
//! - `types`: Shared type definitions

pub mod config;
pub mod matcher;
pub mod processor;
pub mod rewrite;
pub mod text;
pub mod trie;
pub mod types;

// Re-export commonly used types
pub use config::{ConfigError, ProcessorConfig};
pub use processor::KeywordProcessor;
pub use text::BoundarySet;
pub use trie::Trie;
pub use types::{KeywordMatch, MatchOptions};
