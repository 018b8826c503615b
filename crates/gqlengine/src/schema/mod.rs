mod file_reader;
mod input_object_type_validator;
mod object_or_interface_type_validator;
#[allow(clippy::module_inception)]
mod schema;
mod schema_build_error;
mod schema_builder;
mod sdl_loader;
mod union_type_validator;

pub use file_reader::ReadContentError;
pub use schema::Schema;
pub use schema_build_error::SchemaBuildError;
pub use schema_builder::SchemaBuilder;

#[cfg(test)]
mod tests;
