//! Runtime values produced by resolvers, and the coerced argument map handed
//! to them.

use crate::error::FieldError;
use crate::error::FieldResult;
use indexmap::IndexMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::sync::OnceLock;

pub type LazyFn = Arc<dyn Fn() -> FieldResult<Value> + Send + Sync>;

type RecordSerializer = fn(&(dyn Any + Send + Sync)) -> Option<JsonValue>;

/// A value returned by a resolver.
///
/// Besides plain data, a resolver may return a [`Record`] (a typed Rust value
/// whose fields are read through serde, and which `is_type_of` callbacks can
/// downcast) or a zero-argument [`Value::Lazy`] callable that is invoked
/// during completion.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(IndexMap<String, Value>),
    Record(Record),
    Lazy(LazyFn),
}

impl Value {
    pub fn record<T: Serialize + Send + Sync + 'static>(value: T) -> Self {
        Self::Record(Record::new(value))
    }

    /// Wraps a value that has no serde representation. Such a record has no
    /// fields for the default resolver, but can still be downcast.
    pub fn opaque<T: Send + Sync + 'static>(value: T) -> Self {
        Self::Record(Record::opaque(value))
    }

    pub fn lazy(thunk: impl Fn() -> FieldResult<Value> + Send + Sync + 'static) -> Self {
        Self::Lazy(Arc::new(thunk))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Downcasts a [`Value::Record`] to the Rust type it was built from.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        match self {
            Self::Record(record) => record.downcast_ref(),
            _ => None,
        }
    }

    /// Looks up `name` on a map or on a serializable record.
    pub fn field(&self, name: &str) -> Option<Value> {
        match self {
            Self::Map(map) => map.get(name).cloned(),
            Self::Record(record) => record.field(name).cloned().map(Value::from),
            _ => None,
        }
    }

    /// A short description of what kind of value this is, for error messages.
    pub fn type_description(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "bool",
            Self::Int(_) => "i64",
            Self::Float(_) => "f64",
            Self::String(_) => "String",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Record(record) => record.type_name(),
            Self::Lazy(_) => "lazy value",
        }
    }

    /// Converts into plain JSON, forcing lazy values along the way. This is
    /// the representation scalar `serialize` functions receive.
    pub fn to_json(&self) -> FieldResult<JsonValue> {
        Ok(match self {
            Self::Null => JsonValue::Null,
            Self::Boolean(b) => JsonValue::Bool(*b),
            Self::Int(i) => JsonValue::from(*i),
            Self::Float(f) => serde_json::Number::from_f64(*f)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Self::String(s) => JsonValue::String(s.clone()),
            Self::List(items) => JsonValue::Array(
                items.iter()
                    .map(Value::to_json)
                    .collect::<FieldResult<Vec<_>>>()?,
            ),
            Self::Map(map) => {
                let mut obj = serde_json::Map::with_capacity(map.len());
                for (key, value) in map {
                    obj.insert(key.clone(), value.to_json()?);
                }
                JsonValue::Object(obj)
            },
            Self::Record(record) => record.to_json().cloned().unwrap_or(JsonValue::Null),
            Self::Lazy(thunk) => thunk()?.to_json()?,
        })
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Self::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Self::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Self::String(s) => f.debug_tuple("String").field(s).finish(),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Map(map) => f.debug_tuple("Map").field(map).finish(),
            Self::Record(record) => f.debug_tuple("Record").field(&record.type_name()).finish(),
            Self::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<usize> for Value {
    fn from(i: usize) -> Self {
        i64::try_from(i).map(Self::Int).unwrap_or(Self::Float(i as f64))
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Self::Float(f64::from(f))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Self::Null)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(map: IndexMap<String, Value>) -> Self {
        Self::Map(map)
    }
}

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Boolean(b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            JsonValue::String(s) => Self::String(s),
            JsonValue::Array(items) => Self::List(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(obj) => Self::Map(
                obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            ),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Map(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A typed Rust value carried through execution.
///
/// Serializable records expose their serde fields to the default resolver;
/// the serialized form is computed at most once per record.
#[derive(Clone)]
pub struct Record {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
    serializer: Option<RecordSerializer>,
    fields: Arc<OnceLock<Option<JsonValue>>>,
}

fn serialize_as<T: Serialize + 'static>(value: &(dyn Any + Send + Sync)) -> Option<JsonValue> {
    value.downcast_ref::<T>()
        .and_then(|value| serde_json::to_value(value).ok())
}

impl Record {
    pub fn new<T: Serialize + Send + Sync + 'static>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
            type_name: std::any::type_name::<T>(),
            serializer: Some(serialize_as::<T>),
            fields: Arc::new(OnceLock::new()),
        }
    }

    pub fn opaque<T: Send + Sync + 'static>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
            type_name: std::any::type_name::<T>(),
            serializer: None,
            fields: Arc::new(OnceLock::new()),
        }
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// The Rust type name of the wrapped value.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn to_json(&self) -> Option<&JsonValue> {
        self.fields
            .get_or_init(|| self.serializer.and_then(|serialize| serialize(self.inner.as_ref())))
            .as_ref()
    }

    pub fn field(&self, name: &str) -> Option<&JsonValue> {
        self.to_json()?.as_object()?.get(name)
    }
}

/// Coerced field arguments, keyed by argument name.
///
/// Values are already coerced against the argument types (enum values are
/// their internal values, defaults are applied). [`Arguments::get`]
/// deserializes a single argument into any serde type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Arguments {
    values: IndexMap<String, JsonValue>,
}

impl Arguments {
    pub fn new(values: IndexMap<String, JsonValue>) -> Self {
        Self { values }
    }

    /// Deserializes argument `name`. A missing argument deserializes from
    /// `null`, so `Option<T>` targets read it as `None`.
    pub fn get<T: DeserializeOwned>(&self, name: &str) -> FieldResult<T> {
        let raw = self.values.get(name).cloned().unwrap_or(JsonValue::Null);
        serde_json::from_value(raw).map_err(|err| {
            FieldError::new(format!("Argument \"{name}\" could not be read: {err}"))
        })
    }

    pub fn raw(&self, name: &str) -> Option<&JsonValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &JsonValue)> {
        self.values.iter()
    }

    pub fn as_map(&self) -> &IndexMap<String, JsonValue> {
        &self.values
    }
}
