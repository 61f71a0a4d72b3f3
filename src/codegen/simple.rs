/// Body delegating to the type's own `PartialEq`.
pub fn eq_body() -> Vec<String> {
    vec!["self == other".to_string()]
}

/// Body for types whose content never matters to equivalence, such as spans.
pub fn ignore_body() -> Vec<String> {
    vec!["true".to_string()]
}
