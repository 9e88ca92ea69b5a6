//! Config field path used in diagnostics.

/// Dotted path to a config field, e.g. `collection[1].name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    #[inline]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Path of a field inside the `index`-th `[[collection]]` table.
    pub fn collection(index: usize, field: &str) -> Self {
        Self(format!("collection[{index}].{field}"))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
