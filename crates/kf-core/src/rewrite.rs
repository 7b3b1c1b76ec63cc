//! In-place text rewriting for replace and mask
//!
//! Matches arrive in original-text coordinates, strictly left to right and
//! non-overlapping. The working buffer grows or shrinks with every splice,
//! so a running offset translates original positions into buffer positions.
//! Callers only ever pass original positions in.

/// Working copy of the original codepoints plus the splice offset.
#[derive(Debug, Clone)]
pub struct Rewriter {
    buf: Vec<char>,
    /// Buffer length minus original length, accumulated over all splices
    offset: isize,
}

impl Rewriter {
    pub fn new(original: &str) -> Self {
        Self {
            buf: original.chars().collect(),
            offset: 0,
        }
    }

    /// Replace the original span `start..end` with `replacement`.
    ///
    /// Spans must be passed in increasing, non-overlapping order.
    pub fn splice(&mut self, start: usize, end: usize, replacement: &str) {
        let at = self.buffer_pos(start);
        let to = self.buffer_pos(end);
        let replacement: Vec<char> = replacement.chars().collect();
        let inserted = replacement.len() as isize;

        self.buf.splice(at..to, replacement);
        self.offset += inserted - (end - start) as isize;
    }

    /// Current length difference between the buffer and the original.
    #[inline]
    pub fn offset(&self) -> isize {
        self.offset
    }

    /// Translate an original position at or after the last splice.
    #[inline]
    pub fn buffer_pos(&self, original: usize) -> usize {
        original.saturating_add_signed(self.offset)
    }

    pub fn into_string(self) -> String {
        self.buf.into_iter().collect()
    }
}
