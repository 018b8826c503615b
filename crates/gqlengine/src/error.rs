use gqlengine_parser::Location;
use gqlengine_parser::SyntaxError;
use serde::Deserialize;
use serde::Serialize;
use std::any::Any;
use std::fmt;

/// A 1-based line/column pair pointing into the request document.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct ErrorLocation {
    pub line: usize,
    pub column: usize,
}

/// One step of a response path: an object key or a list index.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

/// A user-visible error, as it appears in the `errors` list of a response.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct GraphQLError {
    pub message: String,

    #[serde(default)]
    pub locations: Vec<ErrorLocation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<PathSegment>>,
}

impl GraphQLError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: vec![],
            path: None,
        }
    }

    /// Builds an error located at each of the given AST locations. Locations
    /// without an attached source are skipped.
    pub fn located<'a>(
        message: impl Into<String>,
        locations: impl IntoIterator<Item = Option<&'a Location>>,
    ) -> Self {
        Self {
            message: message.into(),
            locations: locations.into_iter()
                .flatten()
                .filter_map(Location::start_position)
                .map(|pos| ErrorLocation {
                    line: pos.line,
                    column: pos.column,
                })
                .collect(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: Vec<PathSegment>) -> Self {
        self.path = Some(path);
        self
    }
}

impl From<SyntaxError> for GraphQLError {
    fn from(err: SyntaxError) -> Self {
        Self {
            message: err.to_string(),
            locations: vec![ErrorLocation {
                line: err.line,
                column: err.column,
            }],
            path: None,
        }
    }
}

/// The error a resolver (or subscribe function) hands back to the executor.
///
/// Anything `Display`-able converts into a `FieldError` via `?`, so resolvers
/// can freely mix their own error types.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldError {
    pub message: String,
}

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Converts the payload of a caught panic into a `FieldError`.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        Self::new(panic_message(payload.as_ref()))
    }
}

// `FieldError` must not implement `Display`, or this impl would overlap the
// reflexive `From<T> for T`.
impl<E: fmt::Display> From<E> for FieldError {
    fn from(err: E) -> Self {
        Self::new(err.to_string())
    }
}

pub type FieldResult<T> = std::result::Result<T, FieldError>;

/// Renders a `catch_unwind` payload as text.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(err) = payload.downcast_ref::<FieldError>() {
        err.message.clone()
    } else {
        "unknown panic".to_string()
    }
}
