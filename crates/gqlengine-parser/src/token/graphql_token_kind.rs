use crate::token::StringValueParsingError;
use crate::token::parse_block_string;
use crate::token::parse_single_line_string;
use std::borrow::Cow;

/// The kind of a [`GraphQLToken`](crate::token::GraphQLToken), carrying the
/// token's source text where it matters.
///
/// Literal payloads borrow from the source body. `StringValue` keeps the
/// raw, still-quoted text (including escapes or block-string indentation);
/// use [`parse_single_line_string`](crate::token::parse_single_line_string)
/// or [`parse_block_string`](crate::token::parse_block_string) to obtain the
/// semantic value.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTokenKind<'src> {
    Ampersand,
    At,
    Bang,
    Colon,
    CurlyBraceClose,
    CurlyBraceOpen,
    Dollar,
    Ellipsis,
    Equals,
    ParenClose,
    ParenOpen,
    Pipe,
    SquareBracketClose,
    SquareBracketOpen,

    Name(Cow<'src, str>),
    IntValue(Cow<'src, str>),
    FloatValue(Cow<'src, str>),
    StringValue(Cow<'src, str>),

    True,
    False,
    Null,

    Eof,

    /// A lexing failure. The parser converts this into a
    /// [`SyntaxError`](crate::SyntaxError) as soon as it is observed.
    Error {
        message: String,
        help: Option<String>,
    },
}

impl<'src> GraphQLTokenKind<'src> {
    pub fn name_borrowed(s: &'src str) -> Self {
        Self::Name(Cow::Borrowed(s))
    }

    pub fn int_value_borrowed(s: &'src str) -> Self {
        Self::IntValue(Cow::Borrowed(s))
    }

    pub fn float_value_borrowed(s: &'src str) -> Self {
        Self::FloatValue(Cow::Borrowed(s))
    }

    pub fn string_value_borrowed(s: &'src str) -> Self {
        Self::StringValue(Cow::Borrowed(s))
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            help: None,
        }
    }

    pub fn error_with_help(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            help: Some(help.into()),
        }
    }

    /// Returns `true` for the single-character (and `...`) punctuators.
    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            Self::Ampersand => Some("&"),
            Self::At => Some("@"),
            Self::Bang => Some("!"),
            Self::Colon => Some(":"),
            Self::CurlyBraceClose => Some("}"),
            Self::CurlyBraceOpen => Some("{"),
            Self::Dollar => Some("$"),
            Self::Ellipsis => Some("..."),
            Self::Equals => Some("="),
            Self::ParenClose => Some(")"),
            Self::ParenOpen => Some("("),
            Self::Pipe => Some("|"),
            Self::SquareBracketClose => Some("]"),
            Self::SquareBracketOpen => Some("["),
            _ => None,
        }
    }

    /// Describes the *kind* of token, independent of its payload. Used for
    /// the "expected" half of `Expected X, found Y` messages.
    pub fn describe_kind(&self) -> &'static str {
        match self {
            Self::Name(_) | Self::True | Self::False | Self::Null => "Name",
            Self::IntValue(_) => "Int",
            Self::FloatValue(_) => "Float",
            Self::StringValue(_) => "String",
            Self::Eof => "EOF",
            Self::Error { .. } => "<error>",
            punct => punct.as_punctuator_str().unwrap_or("<punctuator>"),
        }
    }

    /// Decodes a `StringValue` token's raw text. Returns `None` for any
    /// other kind of token.
    pub fn parse_string_value(&self) -> Option<Result<String, StringValueParsingError>> {
        match self {
            Self::StringValue(raw) if raw.starts_with("\"\"\"") => {
                Some(parse_block_string(raw))
            },
            Self::StringValue(raw) => Some(parse_single_line_string(raw)),
            _ => None,
        }
    }

    /// Compares token kinds by variant only, ignoring payloads.
    pub fn same_kind_as(&self, other: &GraphQLTokenKind<'_>) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}
