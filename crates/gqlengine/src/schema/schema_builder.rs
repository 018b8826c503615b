use crate::coercion::TypeMap;
use crate::error::FieldResult;
use crate::execution::FieldNameConvention;
use crate::execution::ResolveInfo;
use crate::execution::ResolveParams;
use crate::extensions::Extension;
use crate::introspection;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::file_reader;
use crate::schema::input_object_type_validator::InputObjectTypeValidator;
use crate::schema::input_object_type_validator::check_argument;
use crate::schema::object_or_interface_type_validator::ObjectOrInterfaceTypeValidator;
use crate::schema::sdl_loader;
use crate::schema::union_type_validator::UnionTypeValidator;
use crate::types::Directive;
use crate::types::FieldDefinition;
use crate::types::IsTypeOfFn;
use crate::types::NamedType;
use crate::types::ObjectType;
use crate::types::ResolveFn;
use crate::types::ResolveTypeFn;
use crate::types::ScalarType;
use crate::types::SubscribeFn;
use crate::types::scalars;
use crate::value::Value;
use futures::stream::BoxStream;
use gqlengine_parser::ParseOptions;
use gqlengine_parser::Source;
use gqlengine_parser::ast;
use gqlengine_parser::ast::OperationType;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const DEFAULT_QUERY_NAME: &str = "Query";
const DEFAULT_MUTATION_NAME: &str = "Mutation";
const DEFAULT_SUBSCRIPTION_NAME: &str = "Subscription";

/// Utility for building a [`Schema`].
///
/// Types may be registered programmatically, loaded from SDL, or both. Hooks
/// (resolvers, `is_type_of`, `resolve_type`, subscribe functions) can be
/// attached by type and field name to any type, which is how SDL-loaded
/// types get their behavior:
///
/// ```
/// use gqlengine::schema::SchemaBuilder;
/// use gqlengine::Value;
///
/// let schema = SchemaBuilder::new()
///     .load_str("type Query { hello: String }")?
///     .resolver("Query", "hello", |_| Ok(Value::from("world")))
///     .build()?;
/// assert_eq!(schema.query_type().name(), "Query");
/// # Ok::<(), gqlengine::schema::SchemaBuildError>(())
/// ```
pub struct SchemaBuilder {
    types: IndexMap<String, NamedType>,
    builtin_type_names: IndexSet<String>,
    errors: Vec<SchemaBuildError>,
    query_name: Option<String>,
    mutation_name: Option<String>,
    subscription_name: Option<String>,
    directives: IndexMap<String, Directive>,
    extensions: Vec<Arc<dyn Extension>>,
    field_name_convention: FieldNameConvention,
    type_extensions: Vec<ast::ObjectTypeDefinition>,
    resolvers: Vec<(String, String, ResolveFn)>,
    subscribers: Vec<(String, String, SubscribeFn)>,
    is_type_of_fns: Vec<(String, IsTypeOfFn)>,
    resolve_type_fns: Vec<(String, ResolveTypeFn)>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        let mut builder = Self {
            types: IndexMap::new(),
            builtin_type_names: IndexSet::new(),
            errors: vec![],
            query_name: None,
            mutation_name: None,
            subscription_name: None,
            directives: Directive::builtins()
                .into_iter()
                .map(|directive| (directive.name().to_string(), directive))
                .collect(),
            extensions: vec![],
            field_name_convention: FieldNameConvention::default(),
            type_extensions: vec![],
            resolvers: vec![],
            subscribers: vec![],
            is_type_of_fns: vec![],
            resolve_type_fns: vec![],
        };

        let builtins = scalars::builtin_scalars()
            .into_iter()
            .map(NamedType::from)
            .chain(introspection::types());
        for builtin in builtins {
            builder.builtin_type_names.insert(builtin.name().to_string());
            builder.types.insert(builtin.name().to_string(), builtin);
        }
        builder
    }

    /// Registers a type. Registering the same allocation twice is a no-op; a
    /// different type under an already-registered name is an error.
    pub fn register_type(mut self, named_type: impl Into<NamedType>) -> Self {
        self.add_type(named_type.into());
        self
    }

    fn add_type(&mut self, named_type: NamedType) {
        let name = named_type.name().to_string();
        if name.starts_with("__") {
            self.errors.push(SchemaBuildError::ReservedName(name));
            return;
        }
        match self.types.get(&name) {
            Some(existing) if existing.ptr_eq(&named_type) => {},
            Some(_) => self.errors.push(SchemaBuildError::DuplicateTypeName(name)),
            None => {
                self.types.insert(name, named_type);
            },
        }
    }

    /// Registers a scalar, replacing any scalar of the same name (such as a
    /// placeholder declared in SDL or a built-in).
    pub fn scalar(mut self, scalar: ScalarType) -> Self {
        let name = scalar.name().to_string();
        match self.types.get(&name) {
            Some(NamedType::Scalar(_)) | None => {
                self.types.insert(name, scalar.into());
            },
            Some(_) => self.errors.push(SchemaBuildError::DuplicateTypeName(name)),
        }
        self
    }

    pub fn query(self, query: impl Into<Arc<ObjectType>>) -> Self {
        self.root(OperationType::Query, query.into())
    }

    pub fn mutation(self, mutation: impl Into<Arc<ObjectType>>) -> Self {
        self.root(OperationType::Mutation, mutation.into())
    }

    pub fn subscription(self, subscription: impl Into<Arc<ObjectType>>) -> Self {
        self.root(OperationType::Subscription, subscription.into())
    }

    fn root(mut self, operation: OperationType, object: Arc<ObjectType>) -> Self {
        self.set_root_name(operation, object.name().to_string());
        self.add_type(NamedType::Object(object));
        self
    }

    fn set_root_name(&mut self, operation: OperationType, name: String) {
        let slot = match operation {
            OperationType::Query => &mut self.query_name,
            OperationType::Mutation => &mut self.mutation_name,
            OperationType::Subscription => &mut self.subscription_name,
        };
        *slot = Some(name);
    }

    /// Adds a custom directive.
    pub fn directive(mut self, directive: Directive) -> Self {
        self.add_directive(directive);
        self
    }

    fn add_directive(&mut self, directive: Directive) {
        let name = directive.name().to_string();
        if self.directives.contains_key(&name) {
            self.errors.push(SchemaBuildError::DuplicateDirective(name));
        } else {
            self.directives.insert(name, directive);
        }
    }

    pub fn extension(mut self, extension: Arc<dyn Extension>) -> Self {
        self.extensions.push(extension);
        self
    }

    /// How the default resolver maps field names onto record fields.
    pub fn field_name_convention(mut self, convention: FieldNameConvention) -> Self {
        self.field_name_convention = convention;
        self
    }

    /// Loads every type-system definition in `sdl`.
    pub fn load_str(self, sdl: &str) -> Result<Self> {
        self.load_source(Source::new(sdl))
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        self.load_files([file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: impl IntoIterator<Item = impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let content = file_reader::read_content(file_path)?;
            log::debug!("loading schema file {}", file_path.display());
            self = self.load_source(
                Source::with_name(content, file_path.display().to_string()),
            )?;
        }
        Ok(self)
    }

    fn load_source(mut self, source: Source) -> Result<Self> {
        let doc = gqlengine_parser::parse(source, ParseOptions::default())?;
        let loaded = sdl_loader::load_document(&doc)?;

        for named_type in loaded.types {
            match (&named_type, self.types.get(named_type.name())) {
                // A scalar declared in SDL after its implementation was
                // registered keeps the implementation.
                (NamedType::Scalar(_), Some(NamedType::Scalar(_))) => {},
                _ => self.add_type(named_type),
            }
        }
        for directive in loaded.directives {
            self.add_directive(directive);
        }
        for (operation, name) in loaded.root_names {
            self.set_root_name(operation, name);
        }
        self.type_extensions.extend(loaded.type_extensions);
        Ok(self)
    }

    /// Attaches a resolver to `type_name.field_name`.
    pub fn resolver(
        mut self,
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        resolve: impl Fn(ResolveParams<'_>) -> FieldResult<Value> + Send + Sync + 'static,
    ) -> Self {
        self.resolvers.push((type_name.into(), field_name.into(), Arc::new(resolve)));
        self
    }

    /// Attaches a subscribe function to a field of the subscription root.
    pub fn subscribe(
        mut self,
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        subscribe: impl Fn(ResolveParams<'_>) -> FieldResult<BoxStream<'static, FieldResult<Value>>>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.subscribers.push((type_name.into(), field_name.into(), Arc::new(subscribe)));
        self
    }

    pub fn is_type_of(
        mut self,
        type_name: impl Into<String>,
        is_type_of: impl Fn(&Value, &ResolveInfo<'_>) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.is_type_of_fns.push((type_name.into(), Arc::new(is_type_of)));
        self
    }

    pub fn resolve_type(
        mut self,
        type_name: impl Into<String>,
        resolve_type: impl Fn(&Value, &ResolveInfo<'_>) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.resolve_type_fns.push((type_name.into(), Arc::new(resolve_type)));
        self
    }

    /// Checks every schema invariant and freezes the result.
    pub fn build(mut self) -> Result<Schema> {
        if let Some(err) = self.errors.drain(..).next() {
            return Err(err);
        }

        for named_type in self.types.values_mut() {
            named_type.resolve_thunks();
        }
        self.apply_type_extensions()?;
        self.attach_hooks()?;

        let query_name = self.query_name.clone()
            .or_else(|| self.default_root_name(DEFAULT_QUERY_NAME));
        let mutation_name = self.mutation_name.clone()
            .or_else(|| self.default_root_name(DEFAULT_MUTATION_NAME));
        let subscription_name = self.subscription_name.clone()
            .or_else(|| self.default_root_name(DEFAULT_SUBSCRIPTION_NAME));

        let query_type = self.root_object(OperationType::Query, query_name)?
            .ok_or(SchemaBuildError::MissingQueryRoot)?;
        let mutation_type = self.root_object(OperationType::Mutation, mutation_name)?;
        let subscription_type = self.root_object(OperationType::Subscription, subscription_name)?;

        if let Some(err) = self.validate_types().into_iter().next() {
            return Err(err);
        }

        let possible_types = self.possible_types();
        let mut roots = vec![query_type.name().to_string()];
        roots.extend(mutation_type.iter().map(|root| root.name().to_string()));
        roots.extend(subscription_type.iter().map(|root| root.name().to_string()));
        let types = order_types(self.types, &roots);

        log::debug!(
            "built schema with {} types and {} directives",
            types.len(),
            self.directives.len(),
        );
        Ok(Schema {
            types,
            query_type,
            mutation_type,
            subscription_type,
            directives: self.directives,
            possible_types,
            extensions: self.extensions,
            field_name_convention: self.field_name_convention,
            meta_fields: introspection::MetaFields::new(),
        })
    }

    fn default_root_name(&self, name: &str) -> Option<String> {
        self.types.contains_key(name).then(|| name.to_string())
    }

    fn root_object(
        &self,
        operation: OperationType,
        name: Option<String>,
    ) -> Result<Option<Arc<ObjectType>>> {
        let Some(name) = name else {
            return Ok(None);
        };
        match self.types.get(&name) {
            Some(NamedType::Object(object)) => Ok(Some(object.clone())),
            _ => Err(SchemaBuildError::RootNotObject {
                operation,
                type_name: name,
            }),
        }
    }

    fn apply_type_extensions(&mut self) -> Result<()> {
        for ext in std::mem::take(&mut self.type_extensions) {
            let type_name = ext.name.value.as_str();
            let object = match self.types.get_mut(type_name) {
                Some(NamedType::Object(object)) => Arc::make_mut(object),
                Some(_) => return Err(SchemaBuildError::InvalidExtensionType(type_name.to_string())),
                None => return Err(SchemaBuildError::ExtensionOfUndefinedType(type_name.to_string())),
            };

            for iface in &ext.interfaces {
                if !object.implements(&iface.name.value) {
                    object.interfaces.push(iface.name.value.to_string());
                }
            }
            for field_def in &ext.fields {
                if object.fields.contains_key(&field_def.name.value) {
                    return Err(SchemaBuildError::DuplicateFieldName {
                        type_name: type_name.to_string(),
                        field_name: field_def.name.value.to_string(),
                    });
                }
                let field = sdl_loader::field_definition(field_def);
                object.fields.insert(field.name().to_string(), field);
            }
        }
        Ok(())
    }

    fn attach_hooks(&mut self) -> Result<()> {
        for (type_name, field_name, resolve) in std::mem::take(&mut self.resolvers) {
            let field = self.object_field_mut("resolver", &type_name, &field_name)?;
            field.resolve = Some(resolve);
        }

        for (type_name, field_name, subscribe) in std::mem::take(&mut self.subscribers) {
            let field = self.object_field_mut("subscribe", &type_name, &field_name)?;
            field.subscribe = Some(subscribe);
        }

        for (type_name, is_type_of) in std::mem::take(&mut self.is_type_of_fns) {
            match self.types.get_mut(&type_name) {
                Some(NamedType::Object(object)) => {
                    Arc::make_mut(object).is_type_of = Some(is_type_of);
                },
                _ => return Err(SchemaBuildError::UnknownResolverTarget {
                    hook: "is_type_of",
                    target: type_name,
                    expected: "object type",
                }),
            }
        }

        for (type_name, resolve_type) in std::mem::take(&mut self.resolve_type_fns) {
            match self.types.get_mut(&type_name) {
                Some(NamedType::Interface(iface)) => {
                    Arc::make_mut(iface).resolve_type = Some(resolve_type);
                },
                Some(NamedType::Union(union_type)) => {
                    Arc::make_mut(union_type).resolve_type = Some(resolve_type);
                },
                _ => return Err(SchemaBuildError::UnknownResolverTarget {
                    hook: "resolve_type",
                    target: type_name,
                    expected: "interface or union type",
                }),
            }
        }

        Ok(())
    }

    fn object_field_mut(
        &mut self,
        hook: &'static str,
        type_name: &str,
        field_name: &str,
    ) -> Result<&mut FieldDefinition> {
        let unknown_target = || SchemaBuildError::UnknownResolverTarget {
            hook,
            target: format!("{type_name}.{field_name}"),
            expected: "object field",
        };
        match self.types.get_mut(type_name) {
            Some(NamedType::Object(object)) => Arc::make_mut(object)
                .fields
                .get_mut(field_name)
                .ok_or_else(unknown_target),
            _ => Err(unknown_target()),
        }
    }

    fn validate_types(&self) -> Vec<SchemaBuildError> {
        let mut errors = vec![];
        for named_type in self.types.values() {
            if self.builtin_type_names.contains(named_type.name()) {
                continue;
            }
            errors.extend(match named_type {
                NamedType::Object(object) => {
                    ObjectOrInterfaceTypeValidator::for_object(object, &self.types).validate()
                },
                NamedType::Interface(iface) => {
                    ObjectOrInterfaceTypeValidator::for_interface(iface, &self.types).validate()
                },
                NamedType::Union(union_type) => {
                    UnionTypeValidator::new(union_type, &self.types).validate()
                },
                NamedType::InputObject(input_object) => {
                    InputObjectTypeValidator::new(input_object, &self.types).validate()
                },
                NamedType::Scalar(_) | NamedType::Enum(_) => vec![],
            });
        }

        for directive in self.directives.values() {
            let owner = format!("@{}", directive.name());
            errors.extend(
                directive.arguments()
                    .values()
                    .filter_map(|arg| check_argument(&self.types, &owner, arg)),
            );
        }
        errors
    }

    /// Maps every abstract type to the objects it may resolve to.
    fn possible_types(&self) -> HashMap<String, Vec<Arc<ObjectType>>> {
        let mut possible_types: HashMap<String, Vec<Arc<ObjectType>>> = HashMap::new();
        for named_type in self.types.values() {
            match named_type {
                NamedType::Union(union_type) => {
                    let members = union_type.members()
                        .iter()
                        .filter_map(|member| self.types.get(member)?.as_object().cloned())
                        .collect();
                    possible_types.insert(union_type.name().to_string(), members);
                },
                NamedType::Interface(iface) => {
                    possible_types.entry(iface.name().to_string()).or_default();
                },
                NamedType::Object(object) => {
                    for iface_name in object.interfaces() {
                        possible_types.entry(iface_name.to_string())
                            .or_default()
                            .push(object.clone());
                    }
                },
                _ => {},
            }
        }
        possible_types
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Orders the type map: types reachable from the roots and introspection
/// come first, in discovery order, followed by any remaining registered
/// types in registration order.
fn order_types(mut types: TypeMap, roots: &[String]) -> TypeMap {
    let mut visited: IndexSet<String> = IndexSet::new();
    let mut stack: Vec<String> = roots.iter()
        .cloned()
        .chain(introspection::ROOT_TYPE_NAMES.iter().map(|name| name.to_string()))
        .rev()
        .collect();

    while let Some(name) = stack.pop() {
        if visited.contains(&name) {
            continue;
        }
        let Some(named_type) = types.get(&name) else {
            continue;
        };
        visited.insert(name);

        let referenced = referenced_type_names(named_type);
        stack.extend(referenced.into_iter().rev().map(str::to_string));
    }

    let mut ordered = TypeMap::with_capacity(types.len());
    for name in &visited {
        if let Some(named_type) = types.shift_remove(name) {
            ordered.insert(name.clone(), named_type);
        }
    }
    ordered.extend(types);
    ordered
}

fn referenced_type_names(named_type: &NamedType) -> Vec<&str> {
    let mut referenced = vec![];
    let fields = match named_type {
        NamedType::Object(object) => {
            referenced.extend(object.interfaces().iter().map(String::as_str));
            object.fields()
        },
        NamedType::Interface(iface) => iface.fields(),
        NamedType::Union(union_type) => {
            referenced.extend(union_type.members().iter().map(String::as_str));
            return referenced;
        },
        NamedType::InputObject(input_object) => {
            referenced.extend(
                input_object.fields()
                    .values()
                    .map(|field| field.value_type().innermost_name()),
            );
            return referenced;
        },
        NamedType::Scalar(_) | NamedType::Enum(_) => return referenced,
    };
    for field in fields.values() {
        referenced.push(field.field_type().innermost_name());
        referenced.extend(field.arguments().values().map(|arg| arg.value_type().innermost_name()));
    }
    referenced
}
