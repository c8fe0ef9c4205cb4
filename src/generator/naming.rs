use inflections::Inflect;

/// Pascal-case identifier for generated type and model names.
pub fn pascal_identifier(input: &str) -> String {
  sanitize(input).to_pascal_case()
}

/// Camel-case identifier for generated function and directory names.
pub fn camel_identifier(input: &str) -> String {
  sanitize(input).to_camel_case()
}

/// Path strings and method names carry separators (`/`, `{`, `}`, `-`) that
/// the case converters must treat as word breaks.
fn sanitize(input: &str) -> String {
  input
    .chars()
    .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
    .collect()
}
