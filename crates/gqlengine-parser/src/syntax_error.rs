use crate::Source;
use smallvec::SmallVec;
use std::sync::Arc;

/// Supplementary help lines attached to a [`SyntaxError`].
///
/// Most errors carry zero or one note, so a small inline buffer avoids an
/// allocation in the common case.
pub type SyntaxErrorNotes = SmallVec<[String; 2]>;

/// Categorizes a [`SyntaxError`] for programmatic inspection.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SyntaxErrorKind {
    /// A token was found where a different one was required.
    UnexpectedToken {
        expected: String,
        found: String,
    },

    /// The document ended while a construct was still open.
    UnexpectedEof,

    /// The lexer could not form a valid token.
    LexerError,

    /// A reserved word was used where it is not permitted (e.g. a fragment
    /// named `on`).
    ReservedName {
        name: String,
    },

    /// An object literal repeated one of its field names.
    DuplicateObjectField {
        name: String,
    },

    /// A literal was lexically valid but semantically malformed (e.g. a
    /// string containing an invalid escape sequence).
    InvalidValue,

    /// Nesting exceeded the parser's recursion limit.
    NestingTooDeep,
}

/// A parse failure, positioned at the byte offset where it was detected.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("Syntax Error {} ({}:{}) {}", self.graphql_source.name(), self.line, self.column, self.message)]
pub struct SyntaxError {
    pub message: String,
    pub graphql_source: Arc<Source>,
    pub line: usize,
    pub column: usize,
    pub offset: usize,
    pub kind: SyntaxErrorKind,
    pub notes: SyntaxErrorNotes,
}

impl SyntaxError {
    pub fn new(
        source: &Arc<Source>,
        offset: usize,
        message: impl Into<String>,
        kind: SyntaxErrorKind,
    ) -> Self {
        let position = source.position(offset);
        Self {
            message: message.into(),
            graphql_source: Arc::clone(source),
            line: position.line,
            column: position.column,
            offset,
            kind,
            notes: SyntaxErrorNotes::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Multi-line rendering: the one-line message, the offending line with
    /// its neighbors, a caret under the error column, and any notes.
    pub fn format_detailed(&self) -> String {
        let mut output = format!("{self}\n\n");

        let gutter_width = (self.line + 1).to_string().len();
        if self.line >= 2
            && let Some(prev) = self.graphql_source.line_text(self.line - 1) {
            output.push_str(&format!(
                "{:>gutter_width$}: {prev}\n",
                self.line - 1,
            ));
        }
        if let Some(curr) = self.graphql_source.line_text(self.line) {
            output.push_str(&format!("{:>gutter_width$}: {curr}\n", self.line));
        }
        output.push_str(&" ".repeat(gutter_width + 2 + self.column - 1));
        output.push_str("^\n");
        if let Some(next) = self.graphql_source.line_text(self.line + 1) {
            output.push_str(&format!(
                "{:>gutter_width$}: {next}\n",
                self.line + 1,
            ));
        }

        for note in &self.notes {
            output.push_str(&format!("  = help: {note}\n"));
        }

        output
    }
}
