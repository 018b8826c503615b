use crate::Source;
use crate::SourcePosition;
use std::sync::Arc;

/// The byte range `[start, end)` an AST node was parsed from.
///
/// `source` is absent when the document was parsed with
/// [`ParseOptions::no_source`](crate::ParseOptions::no_source).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Location {
    pub start: usize,
    pub end: usize,
    pub source: Option<Arc<Source>>,
}

impl Location {
    pub fn new(start: usize, end: usize, source: Option<Arc<Source>>) -> Self {
        Self { start, end, source }
    }

    /// Line/column of `start`, when the source is attached.
    pub fn start_position(&self) -> Option<SourcePosition> {
        self.source.as_ref().map(|source| source.position(self.start))
    }

    /// Line/column of `end`, when the source is attached.
    pub fn end_position(&self) -> Option<SourcePosition> {
        self.source.as_ref().map(|source| source.position(self.end))
    }

    /// The source text this location covers.
    pub fn source_text(&self) -> Option<&str> {
        self.source.as_ref()
            .and_then(|source| source.body().get(self.start..self.end))
    }
}
