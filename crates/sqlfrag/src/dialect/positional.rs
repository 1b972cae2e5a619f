use super::{Dialect, RenderedSql};
use crate::flatten::FlatFragment;
use serde::Serialize;

/// Query text with one repeated placeholder plus the values in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionalQuery<V> {
    pub sql: String,
    pub values: Vec<V>,
}

/// The MySQL shape: `{ sql, values }` with `?`.
pub type MySqlQuery<V> = PositionalQuery<V>;

impl<V> RenderedSql for PositionalQuery<V> {
    fn sql(&self) -> &str {
        &self.sql
    }

    fn param_count(&self) -> usize {
        self.values.len()
    }
}

/// Joins literals with a fixed placeholder token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalDialect {
    pub placeholder: String,
}

impl Default for PositionalDialect {
    fn default() -> Self {
        Self::mysql()
    }
}

impl PositionalDialect {
    /// `?` placeholders.
    pub fn mysql() -> Self {
        Self::new("?")
    }

    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }
}

impl<V> Dialect<V> for PositionalDialect {
    type Output = PositionalQuery<V>;

    fn render(&self, fragment: FlatFragment<V>) -> PositionalQuery<V> {
        PositionalQuery {
            sql: fragment.literals.join(self.placeholder.as_str()),
            values: fragment.values,
        }
    }
}
