//! The token buffer assembled during one formatting call.
//!
//! A `PartBuffer` is created fresh per call, grows by append plus the
//! occasional remove-last trim used to drop trailing separators, and is
//! frozen into the immutable part sequence returned to the caller. Buffers
//! are never shared or retained between calls.

use refmeta_model::{DisplayPart, PartKind, SymbolId};

#[derive(Debug, Default)]
pub struct PartBuffer {
    parts: Vec<DisplayPart>,
}

impl PartBuffer {
    pub fn new() -> Self {
        PartBuffer::default()
    }

    pub fn push(&mut self, part: DisplayPart) {
        self.parts.push(part);
    }

    pub fn keyword(&mut self, text: impl Into<String>) {
        self.push(DisplayPart::keyword(text));
    }

    pub fn punctuation(&mut self, text: impl Into<String>) {
        self.push(DisplayPart::punctuation(text));
    }

    pub fn space(&mut self) {
        self.push(DisplayPart::space());
    }

    pub fn line_break(&mut self) {
        self.push(DisplayPart::line_break());
    }

    /// Push a name token tagged with the symbol it denotes.
    pub fn name(&mut self, kind: PartKind, text: impl Into<String>, symbol: SymbolId) {
        self.push(DisplayPart::symbol(kind, text, symbol));
    }

    pub fn extend(&mut self, parts: impl IntoIterator<Item = DisplayPart>) {
        self.parts.extend(parts);
    }

    /// Drop the last part. Used to trim trailing separators.
    pub fn remove_end(&mut self) {
        self.parts.pop();
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn as_slice(&self) -> &[DisplayPart] {
        &self.parts
    }

    /// Split off everything from `index` to the end, leaving the head.
    pub fn split_off(&mut self, index: usize) -> Vec<DisplayPart> {
        self.parts.split_off(index)
    }

    /// Freeze into the immutable part sequence handed to the caller.
    pub fn finish(self) -> Vec<DisplayPart> {
        self.parts
    }
}
