//! Right-to-left hostname decomposition.
//!
//! Labels are views into the caller's buffer carrying their start offset;
//! the buffer itself is never modified.

use crate::label::SEPARATOR;

/// One dot-delimited label of a hostname.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label<'a> {
    /// Label bytes, without separators.
    pub text: &'a [u8],
    /// Offset of the first byte of the label in the hostname buffer.
    pub start: usize,
}

impl<'a> Label<'a> {
    /// Offset one past the last byte of the label.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Offset of the first byte that is not a leading separator.
pub fn skip_leading_dots(hostname: &[u8]) -> usize {
    hostname
        .iter()
        .position(|&b| b != SEPARATOR)
        .unwrap_or(hostname.len())
}

/// Iterator over the labels of `hostname[start..]`, rightmost first.
///
/// A single trailing separator is skipped. Any other run of separators
/// produces empty labels, so `"a..b"` yields `b`, ``, `a` and `"com.."`
/// yields `` first.
#[derive(Debug, Clone)]
pub struct Labels<'a> {
    hostname: &'a [u8],
    start: usize,
    /// End of the next label to yield; `None` once exhausted.
    cursor: Option<usize>,
}

impl<'a> Labels<'a> {
    /// Decompose `hostname[start..]`. `start` is clamped to the buffer.
    pub fn new(hostname: &'a [u8], start: usize) -> Self {
        let end = hostname.len();
        let start = start.min(end);
        let cursor = if end > start && hostname[end - 1] == SEPARATOR {
            end - 1
        } else {
            end
        };
        Self {
            hostname,
            start,
            cursor: Some(cursor),
        }
    }
}

impl<'a> Iterator for Labels<'a> {
    type Item = Label<'a>;

    fn next(&mut self) -> Option<Label<'a>> {
        let last = self.cursor?;
        let window = &self.hostname[self.start..last];

        match window.iter().rposition(|&b| b == SEPARATOR) {
            Some(pos) => {
                let sep = self.start + pos;
                self.cursor = Some(sep);
                Some(Label {
                    text: &self.hostname[sep + 1..last],
                    start: sep + 1,
                })
            }
            None if last != self.start => {
                self.cursor = None;
                Some(Label {
                    text: window,
                    start: self.start,
                })
            }
            None => {
                self.cursor = None;
                None
            }
        }
    }
}
