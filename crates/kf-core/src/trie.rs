//! Keyword Trie
//!
//! Arena-backed prefix tree over codepoints. Nodes live in a single `Vec`
//! and refer to their children by index, so the tree never recurses on drop
//! and every node has exactly one owner (the arena).
//!
//! Removal only clears terminal markers; emptied branches stay allocated
//! until the trie itself is dropped.

use std::collections::HashMap;

// =============================================================================
// Node Handles
// =============================================================================

/// Index of a node inside a [`Trie`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node of every trie.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Default, Clone)]
struct TrieNode {
    children: HashMap<char, NodeId>,
    /// Normalized keyword ending exactly at this node.
    terminal: Option<String>,
}

// =============================================================================
// Trie
// =============================================================================

/// Prefix tree storing normalized keywords.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    keywords: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Create a trie holding only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            keywords: 0,
        }
    }

    /// Handle of the root node.
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Insert a keyword. Inserting the same keyword twice is a no-op.
    pub fn insert(&mut self, keyword: &str) {
        let mut node = NodeId::ROOT;
        for c in keyword.chars() {
            node = match self.nodes[node.index()].children.get(&c) {
                Some(&child) => child,
                None => {
                    let child = NodeId(self.nodes.len() as u32);
                    self.nodes.push(TrieNode::default());
                    self.nodes[node.index()].children.insert(c, child);
                    child
                }
            };
        }

        let slot = &mut self.nodes[node.index()].terminal;
        if slot.is_none() {
            self.keywords += 1;
        }
        *slot = Some(keyword.to_string());
    }

    /// Clear the terminal marker for `keyword`.
    ///
    /// Returns `true` if the keyword was present. A missing path is a no-op.
    pub fn remove(&mut self, keyword: &str) -> bool {
        let Some(node) = self.find(keyword) else {
            return false;
        };
        if self.nodes[node.index()].terminal.take().is_some() {
            self.keywords -= 1;
            true
        } else {
            false
        }
    }

    /// Check whether `keyword` was inserted and not removed since.
    pub fn contains(&self, keyword: &str) -> bool {
        self.find(keyword)
            .is_some_and(|node| self.nodes[node.index()].terminal.is_some())
    }

    /// Follow the edge labelled `c` out of `node`.
    #[inline]
    pub fn child(&self, node: NodeId, c: char) -> Option<NodeId> {
        self.nodes[node.index()].children.get(&c).copied()
    }

    /// Keyword ending at `node`, if any.
    #[inline]
    pub fn terminal(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.index()].terminal.as_deref()
    }

    /// Number of live keywords.
    pub fn len(&self) -> usize {
        self.keywords
    }

    pub fn is_empty(&self) -> bool {
        self.keywords == 0
    }

    /// Number of allocated nodes, root included. Never shrinks on removal.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn find(&self, keyword: &str) -> Option<NodeId> {
        keyword
            .chars()
            .try_fold(NodeId::ROOT, |node, c| self.child(node, c))
    }
}
