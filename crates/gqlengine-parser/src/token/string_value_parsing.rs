//! Decoding of raw string-literal token text into semantic string values.

use std::iter::Peekable;
use std::str::Chars;

/// Failure to decode a string literal's escapes.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum StringValueParsingError {
    #[error("Invalid character escape sequence: {0}.")]
    InvalidEscapeSequence(String),

    #[error("Unterminated string.")]
    Unterminated,

    #[error("Invalid Unicode escape sequence: {0}.")]
    InvalidUnicodeEscape(String),
}

/// Decodes a `"..."` literal, resolving escape sequences.
pub fn parse_single_line_string(raw: &str) -> Result<String, StringValueParsingError> {
    let body = raw
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or(StringValueParsingError::Unterminated)?;

    let mut decoded = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            decoded.push(ch);
            continue;
        }
        let escaped = match chars.next() {
            Some('"') => '"',
            Some('\\') => '\\',
            Some('/') => '/',
            Some('b') => '\u{0008}',
            Some('f') => '\u{000C}',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('u') => decode_unicode_escape(&mut chars)?,
            Some(other) => {
                return Err(StringValueParsingError::InvalidEscapeSequence(
                    format!("\\{other}"),
                ));
            },
            None => {
                return Err(StringValueParsingError::InvalidEscapeSequence(
                    "\\".to_string(),
                ));
            },
        };
        decoded.push(escaped);
    }
    Ok(decoded)
}

/// Reads the hex digits after `\u`, in either the fixed `XXXX` form or the
/// braced `{X...}` form.
fn decode_unicode_escape(
    chars: &mut Peekable<Chars<'_>>,
) -> Result<char, StringValueParsingError> {
    let mut hex = String::with_capacity(4);
    let shown = if chars.peek() == Some(&'{') {
        chars.next();
        loop {
            match chars.next() {
                Some('}') => break,
                Some(c) if c.is_ascii_hexdigit() => hex.push(c),
                Some(c) => {
                    return Err(StringValueParsingError::InvalidUnicodeEscape(
                        format!("\\u{{{hex}{c}"),
                    ));
                },
                None => {
                    return Err(StringValueParsingError::InvalidUnicodeEscape(
                        format!("\\u{{{hex}"),
                    ));
                },
            }
        }
        format!("\\u{{{hex}}}")
    } else {
        for _ in 0..4 {
            match chars.next() {
                Some(c) if c.is_ascii_hexdigit() => hex.push(c),
                Some(c) => {
                    return Err(StringValueParsingError::InvalidUnicodeEscape(
                        format!("\\u{hex}{c}"),
                    ));
                },
                None => {
                    return Err(StringValueParsingError::InvalidUnicodeEscape(
                        format!("\\u{hex}"),
                    ));
                },
            }
        }
        format!("\\u{hex}")
    };

    if hex.is_empty() {
        return Err(StringValueParsingError::InvalidUnicodeEscape(shown));
    }
    u32::from_str_radix(&hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or(StringValueParsingError::InvalidUnicodeEscape(shown))
}

/// Decodes a `"""..."""` literal: unescapes `\"""`, strips the common
/// indentation of every line after the first and drops leading/trailing
/// blank lines.
pub fn parse_block_string(raw: &str) -> Result<String, StringValueParsingError> {
    let body = raw
        .strip_prefix("\"\"\"")
        .and_then(|rest| rest.strip_suffix("\"\"\""))
        .ok_or(StringValueParsingError::Unterminated)?;
    let body = body.replace("\\\"\"\"", "\"\"\"");

    let lines: Vec<&str> = body.lines().collect();
    let common_indent = lines
        .iter()
        .skip(1)
        .filter(|line| !is_blank(line))
        .map(|line| leading_whitespace(line))
        .min()
        .unwrap_or(0);

    let mut dedented: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            if idx == 0 {
                *line
            } else {
                line.get(common_indent.min(line.len())..).unwrap_or("")
            }
        })
        .collect();

    while dedented.first().is_some_and(|line| is_blank(line)) {
        dedented.remove(0);
    }
    while dedented.last().is_some_and(|line| is_blank(line)) {
        dedented.pop();
    }
    Ok(dedented.join("\n"))
}

fn leading_whitespace(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}

fn is_blank(line: &str) -> bool {
    line.trim_matches([' ', '\t']).is_empty()
}
