use std::sync::OnceLock;

/// The body of a GraphQL document plus a display name used in error
/// messages.
///
/// Line/column lookups are served from a line-start index that is built
/// lazily on first use and then reused for every subsequent lookup.
#[derive(Debug)]
pub struct Source {
    body: String,
    name: String,
    line_starts: OnceLock<Vec<usize>>,
}

impl Source {
    pub const DEFAULT_NAME: &'static str = "GraphQL";

    pub fn new(body: impl Into<String>) -> Self {
        Self::with_name(body, Self::DEFAULT_NAME)
    }

    pub fn with_name(body: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            name: name.into(),
            line_starts: OnceLock::new(),
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the 1-based line and column for a byte offset into the body.
    ///
    /// Columns count characters, not bytes. `\r\n`, `\n`, and `\r` are all
    /// recognized as line terminators. Offsets past the end of the body
    /// clamp to the end.
    pub fn position(&self, byte_offset: usize) -> SourcePosition {
        let offset = byte_offset.min(self.body.len());
        let line_starts = self.line_starts();
        let line_idx = match line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let line_start = line_starts[line_idx];
        let column = self.body
            .get(line_start..offset)
            .map(|s| s.chars().count())
            .unwrap_or(offset - line_start);

        SourcePosition {
            line: line_idx + 1,
            column: column + 1,
        }
    }

    /// Returns the text of the given 1-based line, without its terminator.
    pub fn line_text(&self, line: usize) -> Option<&str> {
        let line_starts = self.line_starts();
        let start = *line_starts.get(line.checked_sub(1)?)?;
        let end = line_starts.get(line)
            .copied()
            .unwrap_or(self.body.len());
        Some(self.body[start..end].trim_end_matches(['\n', '\r']))
    }

    fn line_starts(&self) -> &[usize] {
        self.line_starts.get_or_init(|| {
            let bytes = self.body.as_bytes();
            let mut starts = vec![0];
            let mut idx = 0;
            while idx < bytes.len() {
                match bytes[idx] {
                    b'\r' if bytes.get(idx + 1) == Some(&b'\n') => {
                        idx += 2;
                        starts.push(idx);
                    },
                    b'\r' | b'\n' => {
                        idx += 1;
                        starts.push(idx);
                    },
                    _ => idx += 1,
                }
            }
            starts
        })
    }
}

impl Clone for Source {
    fn clone(&self) -> Self {
        Self::with_name(self.body.clone(), self.name.clone())
    }
}

impl PartialEq for Source {
    fn eq(&self, other: &Self) -> bool {
        self.body == other.body && self.name == other.name
    }
}
impl Eq for Source {}

impl From<&str> for Source {
    fn from(body: &str) -> Self {
        Self::new(body)
    }
}

impl From<String> for Source {
    fn from(body: String) -> Self {
        Self::new(body)
    }
}

impl From<&String> for Source {
    fn from(body: &String) -> Self {
        Self::new(body.as_str())
    }
}

/// A 1-based line/column pair within a [`Source`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SourcePosition {
    pub line: usize,
    pub column: usize,
}
