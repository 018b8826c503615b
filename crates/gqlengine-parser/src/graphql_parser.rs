//! Recursive descent parser over a [`GraphQLTokenStream`].

use crate::GraphQLTokenStream;
use crate::Location;
use crate::ParseOptions;
use crate::Source;
use crate::SyntaxError;
use crate::SyntaxErrorKind;
use crate::ast;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use crate::token_source::StrGraphQLTokenSource;
use std::collections::HashSet;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SyntaxError>;

/// Locations a `directive @x on ...` definition may name.
const DIRECTIVE_LOCATIONS: &[&str] = &[
    "QUERY",
    "MUTATION",
    "SUBSCRIPTION",
    "FIELD",
    "FRAGMENT_DEFINITION",
    "FRAGMENT_SPREAD",
    "INLINE_FRAGMENT",
    "VARIABLE_DEFINITION",
    "SCHEMA",
    "SCALAR",
    "OBJECT",
    "FIELD_DEFINITION",
    "ARGUMENT_DEFINITION",
    "INTERFACE",
    "UNION",
    "ENUM",
    "ENUM_VALUE",
    "INPUT_OBJECT",
    "INPUT_FIELD_DEFINITION",
];

/// Keywords that start a definition. A bare name in an `implements` list
/// that matches one of these ends the list.
const DEFINITION_KEYWORDS: &[&str] = &[
    "query",
    "mutation",
    "subscription",
    "fragment",
    "schema",
    "scalar",
    "type",
    "interface",
    "union",
    "enum",
    "input",
    "extend",
    "directive",
];

/// A one-token-lookahead recursive descent parser.
///
/// Parsing is fail-fast: the first syntax error (lexical or grammatical)
/// aborts the parse and is returned as a [`SyntaxError`]. No partial AST is
/// ever produced.
///
/// Every production records the start offset of its first token and, on
/// exit, attaches `Location { start, end: <end of last consumed token> }`
/// unless [`ParseOptions::no_location`] is set.
pub struct GraphQLParser<'src, TTokenSource: GraphQLTokenSource<'src> = StrGraphQLTokenSource<'src>> {
    source: Arc<Source>,
    options: ParseOptions,
    token_stream: GraphQLTokenStream<'src, TTokenSource>,

    /// Shared nesting counter for values, selection sets and type
    /// annotations. Bounds stack usage on adversarial input such as
    /// `[[[[[[...`.
    recursion_depth: usize,

    /// End offset of the most recently consumed token.
    prev_end: usize,
}

impl<'src> GraphQLParser<'src, StrGraphQLTokenSource<'src>> {
    /// Creates a parser over the body of `source`.
    ///
    /// ```
    /// use gqlengine_parser::GraphQLParser;
    /// use gqlengine_parser::ParseOptions;
    /// use gqlengine_parser::Source;
    /// use std::sync::Arc;
    ///
    /// let source = Arc::new(Source::new("type Query { hello: String }"));
    /// let doc = GraphQLParser::new(&source, ParseOptions::default())
    ///     .parse_document()
    ///     .unwrap();
    /// assert_eq!(doc.definitions.len(), 1);
    /// ```
    pub fn new(source: &'src Arc<Source>, options: ParseOptions) -> Self {
        Self::from_token_source(
            Arc::clone(source),
            options,
            StrGraphQLTokenSource::new(source.body()),
        )
    }
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLParser<'src, TTokenSource> {
    const MAX_RECURSION_DEPTH: usize = 64;

    /// Creates a parser over an arbitrary token source. `source` is used
    /// for error positions and is attached to locations.
    pub fn from_token_source(
        source: Arc<Source>,
        options: ParseOptions,
        token_source: TTokenSource,
    ) -> Self {
        Self {
            source,
            options,
            token_stream: GraphQLTokenStream::new(token_source),
            recursion_depth: 0,
            prev_end: 0,
        }
    }

    // =========================================================================
    // Entry points
    // =========================================================================

    /// `Document : Definition+`
    pub fn parse_document(mut self) -> Result<ast::Document> {
        let start = self.peek()?.start;
        let mut definitions = vec![self.parse_definition()?];
        while !self.token_stream.is_at_end() {
            definitions.push(self.parse_definition()?);
        }
        Ok(ast::Document {
            definitions,
            loc: self.loc(start),
        })
    }

    /// Parses a lone value literal followed by end of input.
    pub fn parse_value_document(mut self) -> Result<ast::Value> {
        let value = self.parse_value_literal(false)?;
        self.expect(&GraphQLTokenKind::Eof)?;
        Ok(value)
    }

    /// Parses a lone type reference followed by end of input.
    pub fn parse_type_document(mut self) -> Result<ast::Type> {
        let type_ref = self.parse_type_reference()?;
        self.expect(&GraphQLTokenKind::Eof)?;
        Ok(type_ref)
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    /// Returns the next token without consuming it. Lexer error tokens are
    /// surfaced here as syntax errors.
    fn peek(&mut self) -> Result<GraphQLToken<'src>> {
        let token = self.token_stream.peek().clone();
        if let GraphQLTokenKind::Error { message, help } = &token.kind {
            let mut error = SyntaxError::new(
                &self.source,
                token.start,
                message.clone(),
                SyntaxErrorKind::LexerError,
            );
            if let Some(help) = help {
                error = error.with_note(help.clone());
            }
            return Err(error);
        }
        Ok(token)
    }

    fn peek_is(&mut self, kind: &GraphQLTokenKind<'_>) -> bool {
        self.token_stream.peek().kind.same_kind_as(kind)
    }

    fn peek_is_keyword(&mut self, keyword: &str) -> bool {
        matches!(&self.token_stream.peek().kind, GraphQLTokenKind::Name(name) if name == keyword)
    }

    fn advance(&mut self) -> GraphQLToken<'src> {
        let token = self.token_stream.consume();
        self.prev_end = token.end;
        token
    }

    /// Consumes the next token if it has the given kind.
    fn skip(&mut self, kind: &GraphQLTokenKind<'_>) -> bool {
        if self.peek_is(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a token of the given kind or fails with
    /// `Expected <kind>, found <token>`.
    fn expect(&mut self, kind: &GraphQLTokenKind<'_>) -> Result<GraphQLToken<'src>> {
        let token = self.peek()?;
        if token.kind.same_kind_as(kind) {
            return Ok(self.advance());
        }
        Err(self.error_at(
            &token,
            format!("Expected {}, found {}", kind.describe_kind(), token.describe()),
            SyntaxErrorKind::UnexpectedToken {
                expected: kind.describe_kind().to_string(),
                found: token.describe(),
            },
        ))
    }

    /// Consumes a `Name` token whose text is exactly `keyword`.
    fn expect_keyword(&mut self, keyword: &str) -> Result<()> {
        let token = self.peek()?;
        if matches!(&token.kind, GraphQLTokenKind::Name(name) if name == keyword) {
            self.advance();
            return Ok(());
        }
        Err(self.error_at(
            &token,
            format!("Expected \"{keyword}\", found {}", token.describe()),
            SyntaxErrorKind::UnexpectedToken {
                expected: format!("\"{keyword}\""),
                found: token.describe(),
            },
        ))
    }

    /// Consumes a name. `true`, `false` and `null` lex as their own token
    /// kinds but are still valid names outside of value positions.
    fn expect_name(&mut self) -> Result<ast::Name> {
        let token = self.peek()?;
        let value = match &token.kind {
            GraphQLTokenKind::Name(name) => name.to_string(),
            GraphQLTokenKind::True => "true".to_string(),
            GraphQLTokenKind::False => "false".to_string(),
            GraphQLTokenKind::Null => "null".to_string(),
            _ => {
                return Err(self.error_at(
                    &token,
                    format!("Expected Name, found {}", token.describe()),
                    SyntaxErrorKind::UnexpectedToken {
                        expected: "Name".to_string(),
                        found: token.describe(),
                    },
                ));
            },
        };
        self.advance();
        Ok(ast::Name {
            value,
            loc: self.loc(token.start),
        })
    }

    fn peek_is_name(&mut self) -> bool {
        matches!(
            self.token_stream.peek().kind,
            GraphQLTokenKind::Name(_)
                | GraphQLTokenKind::True
                | GraphQLTokenKind::False
                | GraphQLTokenKind::Null
        )
    }

    fn unexpected(&self, token: &GraphQLToken<'_>) -> SyntaxError {
        let kind = if matches!(token.kind, GraphQLTokenKind::Eof) {
            SyntaxErrorKind::UnexpectedEof
        } else {
            SyntaxErrorKind::UnexpectedToken {
                expected: String::new(),
                found: token.describe(),
            }
        };
        self.error_at(token, format!("Unexpected {}", token.describe()), kind)
    }

    fn error_at(
        &self,
        token: &GraphQLToken<'_>,
        message: String,
        kind: SyntaxErrorKind,
    ) -> SyntaxError {
        SyntaxError::new(&self.source, token.start, message, kind)
    }

    fn token_text(&self, token: &GraphQLToken<'_>) -> &str {
        self.source.body().get(token.start..token.end).unwrap_or_default()
    }

    fn loc(&self, start: usize) -> Option<Location> {
        if self.options.no_location {
            return None;
        }
        let source = (!self.options.no_source).then(|| Arc::clone(&self.source));
        Some(Location::new(start, self.prev_end.max(start), source))
    }

    /// Runs `parse` one nesting level deeper, failing once the nesting
    /// limit is exceeded.
    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.recursion_depth >= Self::MAX_RECURSION_DEPTH {
            let token = self.token_stream.peek().clone();
            return Err(self.error_at(
                &token,
                "Maximum nesting depth exceeded".to_string(),
                SyntaxErrorKind::NestingTooDeep,
            ));
        }
        self.recursion_depth += 1;
        let result = parse(self);
        self.recursion_depth -= 1;
        result
    }

    /// `open item+ close`
    fn many<T>(
        &mut self,
        open: &GraphQLTokenKind<'_>,
        mut item: impl FnMut(&mut Self) -> Result<T>,
        close: &GraphQLTokenKind<'_>,
    ) -> Result<Vec<T>> {
        self.expect(open)?;
        let mut items = vec![item(self)?];
        while !self.skip(close) {
            items.push(item(self)?);
        }
        Ok(items)
    }

    /// `open item* close`
    fn any<T>(
        &mut self,
        open: &GraphQLTokenKind<'_>,
        mut item: impl FnMut(&mut Self) -> Result<T>,
        close: &GraphQLTokenKind<'_>,
    ) -> Result<Vec<T>> {
        self.expect(open)?;
        let mut items = vec![];
        while !self.skip(close) {
            items.push(item(self)?);
        }
        Ok(items)
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    fn parse_definition(&mut self) -> Result<ast::Definition> {
        let token = self.peek()?;
        match &token.kind {
            GraphQLTokenKind::CurlyBraceOpen => {
                Ok(ast::Definition::Operation(self.parse_operation_definition()?))
            },
            GraphQLTokenKind::StringValue(_) => {
                Ok(ast::Definition::TypeSystem(self.parse_type_system_definition()?))
            },
            GraphQLTokenKind::Name(name) => match &**name {
                "query" | "mutation" | "subscription" => {
                    Ok(ast::Definition::Operation(self.parse_operation_definition()?))
                },
                "fragment" => Ok(ast::Definition::Fragment(self.parse_fragment_definition()?)),
                "schema" | "scalar" | "type" | "interface" | "union" | "enum" | "input"
                | "extend" | "directive" => {
                    Ok(ast::Definition::TypeSystem(self.parse_type_system_definition()?))
                },
                _ => Err(self.unexpected(&token)),
            },
            _ => Err(self.unexpected(&token)),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// ```text
    /// OperationDefinition :
    ///   SelectionSet
    ///   OperationType Name? VariableDefinitions? Directives? SelectionSet
    /// ```
    fn parse_operation_definition(&mut self) -> Result<ast::OperationDefinition> {
        let start = self.peek()?.start;
        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            let selection_set = self.parse_selection_set()?;
            return Ok(ast::OperationDefinition {
                operation: ast::OperationType::Query,
                name: None,
                variable_definitions: vec![],
                directives: vec![],
                selection_set,
                loc: self.loc(start),
            });
        }

        let operation = self.parse_operation_type()?;
        let name = if self.peek_is_name() {
            Some(self.expect_name()?)
        } else {
            None
        };
        let variable_definitions = self.parse_variable_definitions()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::OperationDefinition {
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
            loc: self.loc(start),
        })
    }

    fn parse_operation_type(&mut self) -> Result<ast::OperationType> {
        let token = self.peek()?;
        let operation = match &token.kind {
            GraphQLTokenKind::Name(name) if name == "query" => ast::OperationType::Query,
            GraphQLTokenKind::Name(name) if name == "mutation" => ast::OperationType::Mutation,
            GraphQLTokenKind::Name(name) if name == "subscription" => {
                ast::OperationType::Subscription
            },
            _ => return Err(self.unexpected(&token)),
        };
        self.advance();
        Ok(operation)
    }

    fn parse_variable_definitions(&mut self) -> Result<Vec<ast::VariableDefinition>> {
        if !self.peek_is(&GraphQLTokenKind::ParenOpen) {
            return Ok(vec![]);
        }
        self.many(
            &GraphQLTokenKind::ParenOpen,
            Self::parse_variable_definition,
            &GraphQLTokenKind::ParenClose,
        )
    }

    /// `VariableDefinition : Variable : Type DefaultValue?`
    fn parse_variable_definition(&mut self) -> Result<ast::VariableDefinition> {
        let start = self.peek()?.start;
        let variable = self.parse_variable()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let var_type = self.parse_type_reference()?;
        let default_value = if self.skip(&GraphQLTokenKind::Equals) {
            Some(self.parse_value_literal(true)?)
        } else {
            None
        };
        Ok(ast::VariableDefinition {
            variable,
            var_type,
            default_value,
            loc: self.loc(start),
        })
    }

    /// `Variable : $ Name`
    fn parse_variable(&mut self) -> Result<ast::Variable> {
        let start = self.expect(&GraphQLTokenKind::Dollar)?.start;
        let name = self.expect_name()?;
        Ok(ast::Variable {
            name,
            loc: self.loc(start),
        })
    }

    // =========================================================================
    // Selections
    // =========================================================================

    /// `SelectionSet : { Selection+ }`
    fn parse_selection_set(&mut self) -> Result<ast::SelectionSet> {
        self.nested(|parser| {
            let start = parser.peek()?.start;
            let selections = parser.many(
                &GraphQLTokenKind::CurlyBraceOpen,
                Self::parse_selection,
                &GraphQLTokenKind::CurlyBraceClose,
            )?;
            Ok(ast::SelectionSet {
                selections,
                loc: parser.loc(start),
            })
        })
    }

    fn parse_selection(&mut self) -> Result<ast::Selection> {
        if self.peek_is(&GraphQLTokenKind::Ellipsis) {
            self.parse_fragment()
        } else {
            Ok(ast::Selection::Field(self.parse_field()?))
        }
    }

    /// `Field : Alias? Name Arguments? Directives? SelectionSet?`
    fn parse_field(&mut self) -> Result<ast::Field> {
        let start = self.peek()?.start;
        let name_or_alias = self.expect_name()?;
        let (alias, name) = if self.skip(&GraphQLTokenKind::Colon) {
            (Some(name_or_alias), self.expect_name()?)
        } else {
            (None, name_or_alias)
        };
        let arguments = self.parse_arguments(false)?;
        let directives = self.parse_directives(false)?;
        let selection_set = if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };
        Ok(ast::Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            loc: self.loc(start),
        })
    }

    fn parse_arguments(&mut self, is_const: bool) -> Result<Vec<ast::Argument>> {
        if !self.peek_is(&GraphQLTokenKind::ParenOpen) {
            return Ok(vec![]);
        }
        self.many(
            &GraphQLTokenKind::ParenOpen,
            |parser| parser.parse_argument(is_const),
            &GraphQLTokenKind::ParenClose,
        )
    }

    /// `Argument : Name : Value`
    fn parse_argument(&mut self, is_const: bool) -> Result<ast::Argument> {
        let start = self.peek()?.start;
        let name = self.expect_name()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(ast::Argument {
            name,
            value,
            loc: self.loc(start),
        })
    }

    /// ```text
    /// FragmentSpread : ... FragmentName Directives?
    /// InlineFragment : ... TypeCondition? Directives? SelectionSet
    /// ```
    fn parse_fragment(&mut self) -> Result<ast::Selection> {
        let start = self.expect(&GraphQLTokenKind::Ellipsis)?.start;

        if self.peek_is_keyword("on") {
            self.advance();
            let type_condition = self.parse_named_type()?;
            let directives = self.parse_directives(false)?;
            let selection_set = self.parse_selection_set()?;
            return Ok(ast::Selection::InlineFragment(ast::InlineFragment {
                type_condition: Some(type_condition),
                directives,
                selection_set,
                loc: self.loc(start),
            }));
        }

        if self.peek_is_name() {
            let name = self.expect_name()?;
            let directives = self.parse_directives(false)?;
            return Ok(ast::Selection::FragmentSpread(ast::FragmentSpread {
                name,
                directives,
                loc: self.loc(start),
            }));
        }

        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::Selection::InlineFragment(ast::InlineFragment {
            type_condition: None,
            directives,
            selection_set,
            loc: self.loc(start),
        }))
    }

    /// ```text
    /// FragmentDefinition :
    ///   fragment FragmentName TypeCondition Directives? SelectionSet
    /// ```
    fn parse_fragment_definition(&mut self) -> Result<ast::FragmentDefinition> {
        let start = self.peek()?.start;
        self.expect_keyword("fragment")?;
        let name = self.parse_fragment_name()?;
        self.expect_keyword("on")?;
        let type_condition = self.parse_named_type()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            loc: self.loc(start),
        })
    }

    /// `FragmentName : Name but not on`
    fn parse_fragment_name(&mut self) -> Result<ast::Name> {
        if self.peek_is_keyword("on") {
            let token = self.peek()?;
            return Err(self.error_at(
                &token,
                format!("Unexpected {}", token.describe()),
                SyntaxErrorKind::ReservedName {
                    name: "on".to_string(),
                },
            ));
        }
        self.expect_name()
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// ```text
    /// Value[Const] :
    ///   [~Const] Variable
    ///   IntValue | FloatValue | StringValue | BooleanValue | NullValue
    ///   EnumValue | ListValue[?Const] | ObjectValue[?Const]
    /// ```
    fn parse_value_literal(&mut self, is_const: bool) -> Result<ast::Value> {
        self.nested(|parser| parser.parse_value_literal_impl(is_const))
    }

    fn parse_value_literal_impl(&mut self, is_const: bool) -> Result<ast::Value> {
        let token = self.peek()?;
        let start = token.start;
        match &token.kind {
            GraphQLTokenKind::SquareBracketOpen => {
                let values = self.any(
                    &GraphQLTokenKind::SquareBracketOpen,
                    |parser| parser.parse_value_literal(is_const),
                    &GraphQLTokenKind::SquareBracketClose,
                )?;
                Ok(ast::Value::List(ast::ListValue {
                    values,
                    loc: self.loc(start),
                }))
            },
            GraphQLTokenKind::CurlyBraceOpen => self.parse_object_value(is_const),
            GraphQLTokenKind::IntValue(text) => {
                self.advance();
                Ok(ast::Value::Int(ast::IntValue {
                    value: text.to_string(),
                    loc: self.loc(start),
                }))
            },
            GraphQLTokenKind::FloatValue(text) => {
                self.advance();
                Ok(ast::Value::Float(ast::FloatValue {
                    value: text.to_string(),
                    loc: self.loc(start),
                }))
            },
            GraphQLTokenKind::StringValue(_) => Ok(ast::Value::String(self.parse_string_literal()?)),
            GraphQLTokenKind::True | GraphQLTokenKind::False => {
                let value = matches!(token.kind, GraphQLTokenKind::True);
                self.advance();
                Ok(ast::Value::Boolean(ast::BooleanValue {
                    value,
                    loc: self.loc(start),
                }))
            },
            GraphQLTokenKind::Null => {
                self.advance();
                Ok(ast::Value::Null(ast::NullValue {
                    loc: self.loc(start),
                }))
            },
            GraphQLTokenKind::Name(name) => {
                self.advance();
                Ok(ast::Value::Enum(ast::EnumValue {
                    value: name.to_string(),
                    loc: self.loc(start),
                }))
            },
            GraphQLTokenKind::Dollar if !is_const => Ok(ast::Value::Variable(self.parse_variable()?)),
            _ => Err(self.unexpected(&token)),
        }
    }

    /// `ObjectValue : { ObjectField* }`. Field names must be unique within
    /// one object literal.
    fn parse_object_value(&mut self, is_const: bool) -> Result<ast::Value> {
        let start = self.expect(&GraphQLTokenKind::CurlyBraceOpen)?.start;
        let mut fields = vec![];
        let mut seen = HashSet::new();
        while !self.skip(&GraphQLTokenKind::CurlyBraceClose) {
            let field_start = self.peek()?.start;
            let name = self.expect_name()?;
            if !seen.insert(name.value.clone()) {
                return Err(SyntaxError::new(
                    &self.source,
                    field_start,
                    format!("Duplicate input object field {}.", name.value),
                    SyntaxErrorKind::DuplicateObjectField {
                        name: name.value,
                    },
                ));
            }
            self.expect(&GraphQLTokenKind::Colon)?;
            let value = self.parse_value_literal(is_const)?;
            fields.push(ast::ObjectField {
                name,
                value,
                loc: self.loc(field_start),
            });
        }
        Ok(ast::Value::Object(ast::ObjectValue {
            fields,
            loc: self.loc(start),
        }))
    }

    fn parse_string_literal(&mut self) -> Result<ast::StringValue> {
        let token = self.expect(&GraphQLTokenKind::StringValue(Default::default()))?;
        let GraphQLTokenKind::StringValue(raw) = &token.kind else {
            return Err(self.unexpected(&token));
        };
        let block = raw.starts_with("\"\"\"");
        let value = match token.kind.parse_string_value() {
            Some(Ok(value)) => value,
            Some(Err(err)) => {
                return Err(self.error_at(&token, err.to_string(), SyntaxErrorKind::InvalidValue));
            },
            None => return Err(self.unexpected(&token)),
        };
        Ok(ast::StringValue {
            value,
            block,
            loc: self.loc(token.start),
        })
    }

    // =========================================================================
    // Directives
    // =========================================================================

    fn parse_directives(&mut self, is_const: bool) -> Result<Vec<ast::Directive>> {
        let mut directives = vec![];
        while self.peek_is(&GraphQLTokenKind::At) {
            directives.push(self.parse_directive(is_const)?);
        }
        Ok(directives)
    }

    /// `Directive : @ Name Arguments?`
    fn parse_directive(&mut self, is_const: bool) -> Result<ast::Directive> {
        let start = self.expect(&GraphQLTokenKind::At)?.start;
        let name = self.expect_name()?;
        let arguments = self.parse_arguments(is_const)?;
        Ok(ast::Directive {
            name,
            arguments,
            loc: self.loc(start),
        })
    }

    // =========================================================================
    // Type references
    // =========================================================================

    /// `Type : NamedType | [ Type ] | Type !`
    fn parse_type_reference(&mut self) -> Result<ast::Type> {
        self.nested(|parser| {
            let start = parser.peek()?.start;
            let inner = if parser.skip(&GraphQLTokenKind::SquareBracketOpen) {
                let of_type = parser.parse_type_reference()?;
                parser.expect(&GraphQLTokenKind::SquareBracketClose)?;
                ast::Type::List(ast::ListType {
                    of_type: Box::new(of_type),
                    loc: parser.loc(start),
                })
            } else {
                ast::Type::Named(parser.parse_named_type()?)
            };
            if parser.skip(&GraphQLTokenKind::Bang) {
                return Ok(ast::Type::NonNull(ast::NonNullType {
                    of_type: Box::new(inner),
                    loc: parser.loc(start),
                }));
            }
            Ok(inner)
        })
    }

    fn parse_named_type(&mut self) -> Result<ast::NamedType> {
        let start = self.peek()?.start;
        let name = self.expect_name()?;
        Ok(ast::NamedType {
            name,
            loc: self.loc(start),
        })
    }

    // =========================================================================
    // Type system
    // =========================================================================

    fn parse_type_system_definition(&mut self) -> Result<ast::TypeSystemDefinition> {
        // A leading description belongs to the definition after it.
        let keyword_token = if self.peek_is(&GraphQLTokenKind::StringValue(Default::default())) {
            self.token_stream.peek_nth(1).clone()
        } else {
            self.peek()?
        };
        let GraphQLTokenKind::Name(keyword) = &keyword_token.kind else {
            return Err(self.unexpected(&keyword_token));
        };

        Ok(match &**keyword {
            "schema" => ast::TypeSystemDefinition::Schema(self.parse_schema_definition()?),
            "scalar" => ast::TypeSystemDefinition::Type(ast::TypeDefinition::Scalar(
                self.parse_scalar_type_definition()?,
            )),
            "type" => ast::TypeSystemDefinition::Type(ast::TypeDefinition::Object(
                self.parse_object_type_definition()?,
            )),
            "interface" => ast::TypeSystemDefinition::Type(ast::TypeDefinition::Interface(
                self.parse_interface_type_definition()?,
            )),
            "union" => ast::TypeSystemDefinition::Type(ast::TypeDefinition::Union(
                self.parse_union_type_definition()?,
            )),
            "enum" => ast::TypeSystemDefinition::Type(ast::TypeDefinition::Enum(
                self.parse_enum_type_definition()?,
            )),
            "input" => ast::TypeSystemDefinition::Type(ast::TypeDefinition::InputObject(
                self.parse_input_object_type_definition()?,
            )),
            "extend" => {
                ast::TypeSystemDefinition::TypeExtension(self.parse_type_extension_definition()?)
            },
            "directive" => {
                ast::TypeSystemDefinition::Directive(self.parse_directive_definition()?)
            },
            _ => return Err(self.unexpected(&keyword_token)),
        })
    }

    fn parse_description(&mut self) -> Result<Option<ast::StringValue>> {
        if self.peek_is(&GraphQLTokenKind::StringValue(Default::default())) {
            Ok(Some(self.parse_string_literal()?))
        } else {
            Ok(None)
        }
    }

    /// `SchemaDefinition : schema Directives? { OperationTypeDefinition+ }`
    fn parse_schema_definition(&mut self) -> Result<ast::SchemaDefinition> {
        let start = self.peek()?.start;
        self.parse_description()?;
        self.expect_keyword("schema")?;
        let directives = self.parse_directives(true)?;
        let operation_types = self.many(
            &GraphQLTokenKind::CurlyBraceOpen,
            Self::parse_operation_type_definition,
            &GraphQLTokenKind::CurlyBraceClose,
        )?;
        Ok(ast::SchemaDefinition {
            directives,
            operation_types,
            loc: self.loc(start),
        })
    }

    /// `OperationTypeDefinition : OperationType : NamedType`
    fn parse_operation_type_definition(&mut self) -> Result<ast::OperationTypeDefinition> {
        let start = self.peek()?.start;
        let operation = self.parse_operation_type()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let named_type = self.parse_named_type()?;
        Ok(ast::OperationTypeDefinition {
            operation,
            named_type,
            loc: self.loc(start),
        })
    }

    fn parse_scalar_type_definition(&mut self) -> Result<ast::ScalarTypeDefinition> {
        let start = self.peek()?.start;
        let description = self.parse_description()?;
        self.expect_keyword("scalar")?;
        let name = self.expect_name()?;
        let directives = self.parse_directives(true)?;
        Ok(ast::ScalarTypeDefinition {
            description,
            name,
            directives,
            loc: self.loc(start),
        })
    }

    /// ```text
    /// ObjectTypeDefinition :
    ///   Description? type Name ImplementsInterfaces? Directives? FieldsDefinition?
    /// ```
    fn parse_object_type_definition(&mut self) -> Result<ast::ObjectTypeDefinition> {
        let start = self.peek()?.start;
        let description = self.parse_description()?;
        self.expect_keyword("type")?;
        let name = self.expect_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_fields_definition()?;
        Ok(ast::ObjectTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            loc: self.loc(start),
        })
    }

    /// `implements &? A & B`. The older whitespace/comma separated form
    /// (`implements A, B`) is accepted too.
    fn parse_implements_interfaces(&mut self) -> Result<Vec<ast::NamedType>> {
        if !self.peek_is_keyword("implements") {
            return Ok(vec![]);
        }
        self.advance();
        self.skip(&GraphQLTokenKind::Ampersand);
        let mut interfaces = vec![self.parse_named_type()?];
        loop {
            if self.skip(&GraphQLTokenKind::Ampersand) {
                interfaces.push(self.parse_named_type()?);
                continue;
            }
            let continues_list = matches!(
                &self.token_stream.peek().kind,
                GraphQLTokenKind::Name(name) if !DEFINITION_KEYWORDS.contains(&&**name)
            );
            if !continues_list {
                break;
            }
            interfaces.push(self.parse_named_type()?);
        }
        Ok(interfaces)
    }

    /// `FieldsDefinition : { FieldDefinition* }` (optional as a whole)
    fn parse_fields_definition(&mut self) -> Result<Vec<ast::FieldDefinition>> {
        if !self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            return Ok(vec![]);
        }
        self.any(
            &GraphQLTokenKind::CurlyBraceOpen,
            Self::parse_field_definition,
            &GraphQLTokenKind::CurlyBraceClose,
        )
    }

    /// `FieldDefinition : Description? Name ArgumentsDefinition? : Type Directives?`
    fn parse_field_definition(&mut self) -> Result<ast::FieldDefinition> {
        let start = self.peek()?.start;
        let description = self.parse_description()?;
        let name = self.expect_name()?;
        let arguments = self.parse_arguments_definition()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let field_type = self.parse_type_reference()?;
        let directives = self.parse_directives(true)?;
        Ok(ast::FieldDefinition {
            description,
            name,
            arguments,
            field_type,
            directives,
            loc: self.loc(start),
        })
    }

    fn parse_arguments_definition(&mut self) -> Result<Vec<ast::InputValueDefinition>> {
        if !self.peek_is(&GraphQLTokenKind::ParenOpen) {
            return Ok(vec![]);
        }
        self.many(
            &GraphQLTokenKind::ParenOpen,
            Self::parse_input_value_definition,
            &GraphQLTokenKind::ParenClose,
        )
    }

    /// `InputValueDefinition : Description? Name : Type DefaultValue? Directives?`
    fn parse_input_value_definition(&mut self) -> Result<ast::InputValueDefinition> {
        let start = self.peek()?.start;
        let description = self.parse_description()?;
        let name = self.expect_name()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let value_type = self.parse_type_reference()?;
        let default_value = if self.skip(&GraphQLTokenKind::Equals) {
            Some(self.parse_value_literal(true)?)
        } else {
            None
        };
        let directives = self.parse_directives(true)?;
        Ok(ast::InputValueDefinition {
            description,
            name,
            value_type,
            default_value,
            directives,
            loc: self.loc(start),
        })
    }

    fn parse_interface_type_definition(&mut self) -> Result<ast::InterfaceTypeDefinition> {
        let start = self.peek()?.start;
        let description = self.parse_description()?;
        self.expect_keyword("interface")?;
        let name = self.expect_name()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_fields_definition()?;
        Ok(ast::InterfaceTypeDefinition {
            description,
            name,
            directives,
            fields,
            loc: self.loc(start),
        })
    }

    /// `UnionTypeDefinition : Description? union Name Directives? (= |? A | B)?`
    fn parse_union_type_definition(&mut self) -> Result<ast::UnionTypeDefinition> {
        let start = self.peek()?.start;
        let description = self.parse_description()?;
        self.expect_keyword("union")?;
        let name = self.expect_name()?;
        let directives = self.parse_directives(true)?;
        let mut types = vec![];
        if self.skip(&GraphQLTokenKind::Equals) {
            self.skip(&GraphQLTokenKind::Pipe);
            types.push(self.parse_named_type()?);
            while self.skip(&GraphQLTokenKind::Pipe) {
                types.push(self.parse_named_type()?);
            }
        }
        Ok(ast::UnionTypeDefinition {
            description,
            name,
            directives,
            types,
            loc: self.loc(start),
        })
    }

    fn parse_enum_type_definition(&mut self) -> Result<ast::EnumTypeDefinition> {
        let start = self.peek()?.start;
        let description = self.parse_description()?;
        self.expect_keyword("enum")?;
        let name = self.expect_name()?;
        let directives = self.parse_directives(true)?;
        let values = if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            self.many(
                &GraphQLTokenKind::CurlyBraceOpen,
                Self::parse_enum_value_definition,
                &GraphQLTokenKind::CurlyBraceClose,
            )?
        } else {
            vec![]
        };
        Ok(ast::EnumTypeDefinition {
            description,
            name,
            directives,
            values,
            loc: self.loc(start),
        })
    }

    /// `EnumValueDefinition : Description? EnumValue Directives?` where an
    /// enum value is any name except `true`, `false` or `null`.
    fn parse_enum_value_definition(&mut self) -> Result<ast::EnumValueDefinition> {
        let start = self.peek()?.start;
        let description = self.parse_description()?;
        let token = self.peek()?;
        if matches!(
            token.kind,
            GraphQLTokenKind::True | GraphQLTokenKind::False | GraphQLTokenKind::Null
        ) {
            return Err(self.error_at(
                &token,
                format!("Unexpected {}", token.describe()),
                SyntaxErrorKind::ReservedName {
                    name: self.token_text(&token).to_string(),
                },
            ));
        }
        let name = self.expect_name()?;
        let directives = self.parse_directives(true)?;
        Ok(ast::EnumValueDefinition {
            description,
            name,
            directives,
            loc: self.loc(start),
        })
    }

    fn parse_input_object_type_definition(&mut self) -> Result<ast::InputObjectTypeDefinition> {
        let start = self.peek()?.start;
        let description = self.parse_description()?;
        self.expect_keyword("input")?;
        let name = self.expect_name()?;
        let directives = self.parse_directives(true)?;
        let fields = if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            self.any(
                &GraphQLTokenKind::CurlyBraceOpen,
                Self::parse_input_value_definition,
                &GraphQLTokenKind::CurlyBraceClose,
            )?
        } else {
            vec![]
        };
        Ok(ast::InputObjectTypeDefinition {
            description,
            name,
            directives,
            fields,
            loc: self.loc(start),
        })
    }

    /// `TypeExtensionDefinition : extend ObjectTypeDefinition`
    fn parse_type_extension_definition(&mut self) -> Result<ast::TypeExtensionDefinition> {
        let start = self.peek()?.start;
        self.expect_keyword("extend")?;
        let definition = self.parse_object_type_definition()?;
        Ok(ast::TypeExtensionDefinition {
            definition,
            loc: self.loc(start),
        })
    }

    /// ```text
    /// DirectiveDefinition :
    ///   Description? directive @ Name ArgumentsDefinition? on |? Location (| Location)*
    /// ```
    fn parse_directive_definition(&mut self) -> Result<ast::DirectiveDefinition> {
        let start = self.peek()?.start;
        let description = self.parse_description()?;
        self.expect_keyword("directive")?;
        self.expect(&GraphQLTokenKind::At)?;
        let name = self.expect_name()?;
        let arguments = self.parse_arguments_definition()?;
        self.expect_keyword("on")?;
        self.skip(&GraphQLTokenKind::Pipe);
        let mut locations = vec![self.parse_directive_location()?];
        while self.skip(&GraphQLTokenKind::Pipe) {
            locations.push(self.parse_directive_location()?);
        }
        Ok(ast::DirectiveDefinition {
            description,
            name,
            arguments,
            locations,
            loc: self.loc(start),
        })
    }

    fn parse_directive_location(&mut self) -> Result<ast::Name> {
        let token = self.peek()?;
        let name = self.expect_name()?;
        if !DIRECTIVE_LOCATIONS.contains(&name.as_str()) {
            return Err(self.unexpected(&token));
        }
        Ok(name)
    }
}
