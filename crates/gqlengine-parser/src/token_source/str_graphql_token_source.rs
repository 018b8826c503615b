//! A [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource) that
//! lexes a `&str`.
//!
//! Token payloads borrow from the input (`Cow::Borrowed`), so lexing names,
//! numbers and strings never allocates. Positions are byte offsets into the
//! body; line/column conversion happens lazily through
//! [`Source::position`](crate::Source::position) only when an error or a
//! location needs it.
//!
//! ```rust
//! use gqlengine_parser::token::GraphQLTokenKind;
//! use gqlengine_parser::token_source::StrGraphQLTokenSource;
//!
//! let kinds: Vec<_> = StrGraphQLTokenSource::new("{ name }")
//!     .map(|token| token.kind)
//!     .collect();
//! assert_eq!(kinds, vec![
//!     GraphQLTokenKind::CurlyBraceOpen,
//!     GraphQLTokenKind::name_borrowed("name"),
//!     GraphQLTokenKind::CurlyBraceClose,
//!     GraphQLTokenKind::Eof,
//! ]);
//! ```

use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;

pub struct StrGraphQLTokenSource<'src> {
    body: &'src str,

    /// The remaining text to lex is `&body[offset..]`.
    offset: usize,

    finished: bool,
}

impl<'src> StrGraphQLTokenSource<'src> {
    pub fn new(body: &'src str) -> Self {
        Self {
            body,
            offset: 0,
            finished: false,
        }
    }

    // =========================================================================
    // Scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.body[self.offset..]
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.offset += ch.len_utf8();
        Some(ch)
    }

    fn consume_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek_char() {
            if !pred(ch) {
                break;
            }
            self.consume();
        }
    }

    fn token(&self, kind: GraphQLTokenKind<'src>, start: usize) -> GraphQLToken<'src> {
        GraphQLToken::new(kind, start, self.offset)
    }

    fn punctuator(&mut self, kind: GraphQLTokenKind<'src>, start: usize) -> GraphQLToken<'src> {
        self.consume();
        self.token(kind, start)
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn next_token(&mut self) -> GraphQLToken<'src> {
        self.skip_ignored();
        let start = self.offset;

        let Some(ch) = self.peek_char() else {
            return self.token(GraphQLTokenKind::Eof, start);
        };

        match ch {
            '!' => self.punctuator(GraphQLTokenKind::Bang, start),
            '$' => self.punctuator(GraphQLTokenKind::Dollar, start),
            '&' => self.punctuator(GraphQLTokenKind::Ampersand, start),
            '(' => self.punctuator(GraphQLTokenKind::ParenOpen, start),
            ')' => self.punctuator(GraphQLTokenKind::ParenClose, start),
            ':' => self.punctuator(GraphQLTokenKind::Colon, start),
            '=' => self.punctuator(GraphQLTokenKind::Equals, start),
            '@' => self.punctuator(GraphQLTokenKind::At, start),
            '[' => self.punctuator(GraphQLTokenKind::SquareBracketOpen, start),
            ']' => self.punctuator(GraphQLTokenKind::SquareBracketClose, start),
            '{' => self.punctuator(GraphQLTokenKind::CurlyBraceOpen, start),
            '}' => self.punctuator(GraphQLTokenKind::CurlyBraceClose, start),
            '|' => self.punctuator(GraphQLTokenKind::Pipe, start),
            '.' => self.lex_dot_or_ellipsis(start),
            '"' => self.lex_string(start),
            c if is_name_start(c) => self.lex_name(start),
            c if c == '-' || c.is_ascii_digit() => self.lex_number(start),
            _ => self.lex_invalid_character(start),
        }
    }

    /// Skips whitespace, line terminators, commas, byte order marks and
    /// `#` comments.
    fn skip_ignored(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}' => {
                    self.consume();
                },
                '#' => self.consume_while(|c| c != '\n' && c != '\r'),
                _ => break,
            }
        }
    }

    // =========================================================================
    // Dot / Ellipsis lexing
    // =========================================================================

    /// `...` becomes an `Ellipsis`. Anything else made of dots is an error,
    /// with a hint when the dots look like a mistyped spread.
    fn lex_dot_or_ellipsis(&mut self, start: usize) -> GraphQLToken<'src> {
        if self.remaining().starts_with("...") {
            self.offset += 3;
            return self.token(GraphQLTokenKind::Ellipsis, start);
        }

        self.consume();
        if self.peek_char() == Some('.') {
            self.consume();
            return self.token(
                GraphQLTokenKind::error_with_help(
                    "Unexpected `..` (use `...` for spread operator)",
                    "Add one more `.` to form the spread operator `...`",
                ),
                start,
            );
        }

        let spaced_dots = self
            .remaining()
            .trim_start_matches([' ', '\t'])
            .starts_with('.');
        let kind = if spaced_dots {
            GraphQLTokenKind::error_with_help(
                "Unexpected `.`",
                "These dots may have been intended to form a `...` spread \
                 operator. Try removing the extra spacing between the dots.",
            )
        } else {
            GraphQLTokenKind::error("Unexpected `.`")
        };
        self.token(kind, start)
    }

    // =========================================================================
    // Names
    // =========================================================================

    /// Names match `/[_A-Za-z][_0-9A-Za-z]*/`. The keywords `true`, `false`
    /// and `null` get their own token kinds.
    fn lex_name(&mut self, start: usize) -> GraphQLToken<'src> {
        self.consume();
        self.consume_while(is_name_continue);

        let kind = match &self.body[start..self.offset] {
            "true" => GraphQLTokenKind::True,
            "false" => GraphQLTokenKind::False,
            "null" => GraphQLTokenKind::Null,
            name => GraphQLTokenKind::name_borrowed(name),
        };
        self.token(kind, start)
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`
    fn lex_number(&mut self, start: usize) -> GraphQLToken<'src> {
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        match self.peek_char() {
            Some('0') => {
                self.consume();
                if self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                    return self.lex_number_error(
                        start,
                        "Invalid number, unexpected digit after 0",
                    );
                }
            },
            Some(c) if c.is_ascii_digit() => self.consume_while(|c| c.is_ascii_digit()),
            _ => {
                return self.lex_number_error(start, "Invalid number, expected digit");
            },
        }

        if self.peek_char() == Some('.') {
            if !self.peek_char_nth(1).is_some_and(|c| c.is_ascii_digit()) {
                return self.lex_number_error(start, "Invalid number, expected digit after `.`");
            }
            is_float = true;
            self.consume();
            self.consume_while(|c| c.is_ascii_digit());
        }

        if matches!(self.peek_char(), Some('e' | 'E')) {
            is_float = true;
            self.consume();
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.consume();
            }
            if !self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                return self.lex_number_error(
                    start,
                    "Invalid number, exponent must have at least one digit",
                );
            }
            self.consume_while(|c| c.is_ascii_digit());
        }

        if self.peek_char().is_some_and(|c| c == '.' || is_name_start(c)) {
            return self.lex_number_error(start, "Invalid number");
        }

        let text = &self.body[start..self.offset];
        let kind = if is_float {
            GraphQLTokenKind::float_value_borrowed(text)
        } else {
            GraphQLTokenKind::int_value_borrowed(text)
        };
        self.token(kind, start)
    }

    fn lex_number_error(&mut self, start: usize, message: &str) -> GraphQLToken<'src> {
        self.consume_while(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '.' | '+' | '-' | '_')
        });
        let text = &self.body[start..self.offset];
        self.token(GraphQLTokenKind::error(format!("{message}: `{text}`")), start)
    }

    // =========================================================================
    // Strings
    // =========================================================================

    fn lex_string(&mut self, start: usize) -> GraphQLToken<'src> {
        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start);
        }

        self.consume();
        loop {
            match self.peek_char() {
                None | Some('\n') | Some('\r') => {
                    return self.token(
                        GraphQLTokenKind::error_with_help(
                            "Unterminated string",
                            "Use a block string (triple quotes) for multi-line \
                             strings, or escape the newline with `\\n`",
                        ),
                        start,
                    );
                },
                Some('"') => {
                    self.consume();
                    break;
                },
                Some('\\') => {
                    self.consume();
                    self.consume();
                },
                Some(c) if c.is_control() && c != '\t' => {
                    return self.token(
                        GraphQLTokenKind::error(format!(
                            "Invalid character within String: {}",
                            describe_char(c),
                        )),
                        start,
                    );
                },
                Some(_) => {
                    self.consume();
                },
            }
        }

        self.string_token(start)
    }

    fn lex_block_string(&mut self, start: usize) -> GraphQLToken<'src> {
        self.offset += 3;
        loop {
            let rest = self.remaining();
            if rest.is_empty() {
                return self.token(
                    GraphQLTokenKind::error_with_help(
                        "Unterminated string",
                        "Add closing `\"\"\"`",
                    ),
                    start,
                );
            }
            if rest.starts_with("\\\"\"\"") {
                self.offset += 4;
            } else if rest.starts_with("\"\"\"") {
                self.offset += 3;
                break;
            } else {
                self.consume();
            }
        }

        self.string_token(start)
    }

    /// Produces a `StringValue` token for `[start, offset)`, or an error
    /// token if its escapes do not decode.
    fn string_token(&self, start: usize) -> GraphQLToken<'src> {
        let kind = GraphQLTokenKind::string_value_borrowed(&self.body[start..self.offset]);
        match kind.parse_string_value() {
            Some(Err(err)) => self.token(GraphQLTokenKind::error(err.to_string()), start),
            _ => self.token(kind, start),
        }
    }

    // =========================================================================
    // Invalid characters
    // =========================================================================

    fn lex_invalid_character(&mut self, start: usize) -> GraphQLToken<'src> {
        let message = match self.consume() {
            Some(ch) => format!("Unexpected character {}", describe_char(ch)),
            None => "Unexpected end of input".to_string(),
        };
        self.token(GraphQLTokenKind::error(message), start)
    }
}

impl<'src> Iterator for StrGraphQLTokenSource<'src> {
    type Item = GraphQLToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if matches!(token.kind, GraphQLTokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}

fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Printable characters are shown in backticks. Invisible ones also get
/// their code point and, where known, their Unicode name.
fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') || unicode_char_name(ch).is_some() {
        match unicode_char_name(ch) {
            Some(name) => format!("`{}` (U+{:04X}: {})", ch.escape_default(), ch as u32, name),
            None => format!("`{}` (U+{:04X})", ch.escape_default(), ch as u32),
        }
    } else {
        format!("`{ch}`")
    }
}

fn unicode_char_name(ch: char) -> Option<&'static str> {
    match ch {
        '\u{0000}' => Some("NULL"),
        '\u{0007}' => Some("BELL"),
        '\u{0008}' => Some("BACKSPACE"),
        '\u{000B}' => Some("VERTICAL TAB"),
        '\u{000C}' => Some("FORM FEED"),
        '\u{001B}' => Some("ESCAPE"),
        '\u{007F}' => Some("DELETE"),
        '\u{00A0}' => Some("NO-BREAK SPACE"),
        '\u{00AD}' => Some("SOFT HYPHEN"),
        '\u{200B}' => Some("ZERO WIDTH SPACE"),
        '\u{200C}' => Some("ZERO WIDTH NON-JOINER"),
        '\u{200D}' => Some("ZERO WIDTH JOINER"),
        '\u{200E}' => Some("LEFT-TO-RIGHT MARK"),
        '\u{200F}' => Some("RIGHT-TO-LEFT MARK"),
        '\u{2028}' => Some("LINE SEPARATOR"),
        '\u{2029}' => Some("PARAGRAPH SEPARATOR"),
        '\u{202E}' => Some("RIGHT-TO-LEFT OVERRIDE"),
        '\u{2060}' => Some("WORD JOINER"),
        '\u{3000}' => Some("IDEOGRAPHIC SPACE"),
        '\u{FFFE}' | '\u{FFFF}' => Some("NONCHARACTER"),
        _ => None,
    }
}
