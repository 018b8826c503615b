pub const STARWARS_SCHEMA: &str = include_str!("starwars_schema.graphql");
pub const SIMPLE_QUERY: &str = include_str!("simple_query.graphql");
pub const COMPLEX_QUERY: &str = include_str!("complex_query.graphql");

/// A synthetic schema with `types` object types of ten fields each.
pub fn synthetic_schema(types: usize) -> String {
    let mut sdl = String::from("schema { query: Type0 }\n");
    for t in 0..types {
        sdl.push_str(&format!("\"\"\"Type number {t}\"\"\"\ntype Type{t} {{\n"));
        for f in 0..10 {
            let next = (t + 1) % types;
            sdl.push_str(&format!("  field{f}(arg: Int = {f}, flag: Boolean!): Type{next}\n"));
        }
        sdl.push_str("}\n");
    }
    sdl
}
