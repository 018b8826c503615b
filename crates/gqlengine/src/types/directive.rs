use crate::types::InputValueDefinition;
use crate::types::TypeRef;
use crate::types::scalars;
use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// Where a directive may appear.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    pub const ALL: [DirectiveLocation; 18] = [
        Self::Query,
        Self::Mutation,
        Self::Subscription,
        Self::Field,
        Self::FragmentDefinition,
        Self::FragmentSpread,
        Self::InlineFragment,
        Self::Schema,
        Self::Scalar,
        Self::Object,
        Self::FieldDefinition,
        Self::ArgumentDefinition,
        Self::Interface,
        Self::Union,
        Self::Enum,
        Self::EnumValue,
        Self::InputObject,
        Self::InputFieldDefinition,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "QUERY",
            Self::Mutation => "MUTATION",
            Self::Subscription => "SUBSCRIPTION",
            Self::Field => "FIELD",
            Self::FragmentDefinition => "FRAGMENT_DEFINITION",
            Self::FragmentSpread => "FRAGMENT_SPREAD",
            Self::InlineFragment => "INLINE_FRAGMENT",
            Self::Schema => "SCHEMA",
            Self::Scalar => "SCALAR",
            Self::Object => "OBJECT",
            Self::FieldDefinition => "FIELD_DEFINITION",
            Self::ArgumentDefinition => "ARGUMENT_DEFINITION",
            Self::Interface => "INTERFACE",
            Self::Union => "UNION",
            Self::Enum => "ENUM",
            Self::EnumValue => "ENUM_VALUE",
            Self::InputObject => "INPUT_OBJECT",
            Self::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }
}

impl fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DirectiveLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter()
            .find(|loc| loc.as_str() == s)
            .ok_or_else(|| format!("unknown directive location `{s}`"))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) arguments: IndexMap<String, InputValueDefinition>,
    pub(crate) locations: Vec<DirectiveLocation>,
}

impl Directive {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            arguments: IndexMap::new(),
            locations: vec![],
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_argument(mut self, argument: InputValueDefinition) -> Self {
        self.arguments.insert(argument.name.clone(), argument);
        self
    }

    pub fn with_location(mut self, location: DirectiveLocation) -> Self {
        if !self.locations.contains(&location) {
            self.locations.push(location);
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn arguments(&self) -> &IndexMap<String, InputValueDefinition> {
        &self.arguments
    }

    pub fn argument(&self, name: &str) -> Option<&InputValueDefinition> {
        self.arguments.get(name)
    }

    pub fn locations(&self) -> &[DirectiveLocation] {
        &self.locations
    }

    pub fn is_valid_at(&self, location: DirectiveLocation) -> bool {
        self.locations.contains(&location)
    }

    /// `@skip(if: Boolean!)`
    pub fn skip() -> Self {
        Self::conditional("skip", "Directs the executor to skip this field or fragment when the `if` argument is true.")
    }

    /// `@include(if: Boolean!)`
    pub fn include() -> Self {
        Self::conditional("include", "Directs the executor to include this field or fragment only when the `if` argument is true.")
    }

    /// `@deprecated(reason: String = "No longer supported")`
    pub fn deprecated() -> Self {
        Self::new("deprecated")
            .with_description("Marks an element of a GraphQL schema as no longer supported.")
            .with_argument(
                InputValueDefinition::new("reason", TypeRef::named(scalars::STRING))
                    .with_description(
                        "Explains why this element was deprecated, usually also including a \
                         suggestion for how to access supported similar data.",
                    )
                    .with_default_value(DEFAULT_DEPRECATION_REASON),
            )
            .with_location(DirectiveLocation::FieldDefinition)
            .with_location(DirectiveLocation::EnumValue)
    }

    pub fn builtins() -> [Directive; 3] {
        [Self::skip(), Self::include(), Self::deprecated()]
    }

    fn conditional(name: &str, description: &str) -> Self {
        Self::new(name)
            .with_description(description)
            .with_argument(
                InputValueDefinition::new("if", TypeRef::named_non_null(scalars::BOOLEAN))
                    .with_description(if name == "skip" { "Skipped when true." } else { "Included when true." }),
            )
            .with_location(DirectiveLocation::Field)
            .with_location(DirectiveLocation::FragmentSpread)
            .with_location(DirectiveLocation::InlineFragment)
    }
}
