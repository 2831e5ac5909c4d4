/// Limits applied while parsing type expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaConfig {
    /// Maximum nesting depth of the parsed schema (a scalar has depth 1).
    pub max_depth: usize,
    /// Maximum length of a type expression in bytes.
    pub max_input_len: usize,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            max_depth: 32,
            max_input_len: 4096,
        }
    }
}
