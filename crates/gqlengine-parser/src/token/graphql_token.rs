use crate::token::GraphQLTokenKind;

/// A single lexed token and the byte range `[start, end)` it occupies in
/// the source body.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLToken<'src> {
    pub kind: GraphQLTokenKind<'src>,
    pub start: usize,
    pub end: usize,
}

impl<'src> GraphQLToken<'src> {
    pub fn new(kind: GraphQLTokenKind<'src>, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }

    /// A human-readable description used in syntax error messages, e.g.
    /// `Name "foo"` or `EOF`.
    pub fn describe(&self) -> String {
        match &self.kind {
            GraphQLTokenKind::Name(value) => format!("Name \"{value}\""),
            GraphQLTokenKind::IntValue(value) => format!("Int \"{value}\""),
            GraphQLTokenKind::FloatValue(value) => format!("Float \"{value}\""),
            GraphQLTokenKind::StringValue(raw) => {
                if raw.starts_with("\"\"\"") {
                    "BlockString".to_string()
                } else {
                    "String".to_string()
                }
            },
            GraphQLTokenKind::True => "Name \"true\"".to_string(),
            GraphQLTokenKind::False => "Name \"false\"".to_string(),
            GraphQLTokenKind::Null => "Name \"null\"".to_string(),
            other => other.describe_kind().to_string(),
        }
    }
}
