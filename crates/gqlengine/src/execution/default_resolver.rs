use crate::error::FieldResult;
use crate::execution::ResolveParams;
use crate::value::Value;

/// How the default resolver maps a GraphQL field name onto the keys of a
/// parent map or the fields of a parent record.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FieldNameConvention {
    /// Look the field name up verbatim. Records can still rename their
    /// fields with `#[serde(rename = "...")]`.
    #[default]
    Exact,

    /// Look the name up verbatim, then fall back to its snake_case form
    /// (`theNumber` reads `the_number`).
    SnakeCase,
}

impl FieldNameConvention {
    fn fallback_name(&self, field_name: &str) -> Option<String> {
        match self {
            Self::Exact => None,
            Self::SnakeCase => {
                let snake = to_snake_case(field_name);
                (snake != field_name).then_some(snake)
            },
        }
    }
}

/// The resolver used for fields without one: reads the field from the
/// parent value. Missing fields resolve to `null`.
pub fn default_resolve(params: ResolveParams<'_>) -> FieldResult<Value> {
    let field_name = params.info.field_name;
    if let Some(value) = params.source.field(field_name) {
        return Ok(value);
    }
    let convention = params.info.schema.field_name_convention();
    Ok(convention.fallback_name(field_name)
        .and_then(|name| params.source.field(&name))
        .unwrap_or_default())
}

fn to_snake_case(name: &str) -> String {
    let mut snake = String::with_capacity(name.len() + 4);
    let mut prev_is_lower_or_digit = false;
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            if prev_is_lower_or_digit {
                snake.push('_');
            }
            snake.push(ch.to_ascii_lowercase());
            prev_is_lower_or_digit = false;
        } else {
            snake.push(ch);
            prev_is_lower_or_digit = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        }
    }
    snake
}
