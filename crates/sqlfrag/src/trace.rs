//! `tracing` integration.

use crate::dialect::{Dialect, RenderedSql};
use crate::flatten::FlatFragment;
use tracing::Level;

/// Wraps a [`Dialect`] and emits the rendered SQL as a `tracing` event.
///
/// Events use target `sqlfrag.sql` and carry `dialect`, `param_count` and
/// `sql` fields. Values are never logged.
///
/// Enable via the crate feature: `sqlfrag = { features = ["tracing"] }`.
#[derive(Debug, Clone)]
pub struct TracedDialect<D> {
    inner: D,
    /// Tracing event level to emit at.
    pub level: Level,
    /// Truncate long SQL strings (in bytes, at a char boundary). `None` means no truncation.
    pub max_sql_length: Option<usize>,
}

impl<D> TracedDialect<D> {
    /// Wrap `inner`, logging at `DEBUG` and truncating SQL to 200 bytes.
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            level: Level::DEBUG,
            max_sql_length: Some(200),
        }
    }

    /// Override the tracing event level.
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set maximum SQL length to display.
    pub fn max_sql_length(mut self, len: usize) -> Self {
        self.max_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation.
    pub fn no_truncate(mut self) -> Self {
        self.max_sql_length = None;
        self
    }

    /// The wrapped dialect.
    pub fn inner(&self) -> &D {
        &self.inner
    }

    fn truncate_sql(&self, sql: &str) -> String {
        match self.max_sql_length {
            Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
            _ => sql.to_string(),
        }
    }

    fn emit(&self, sql: &str, param_count: usize) {
        /// Dispatch a tracing event at a runtime-determined level.
        macro_rules! emit_at_level {
            ($level:expr, $($field:tt)*) => {
                match $level {
                    Level::ERROR => tracing::error!($($field)*),
                    Level::WARN  => tracing::warn!($($field)*),
                    Level::INFO  => tracing::info!($($field)*),
                    Level::DEBUG => tracing::debug!($($field)*),
                    Level::TRACE => tracing::trace!($($field)*),
                }
            };
        }

        let dialect = std::any::type_name::<D>();
        let sql = self.truncate_sql(sql);
        emit_at_level!(
            self.level,
            target: "sqlfrag.sql",
            dialect,
            param_count,
            sql = %sql,
        );
    }
}

impl<V, D> Dialect<V> for TracedDialect<D>
where
    D: Dialect<V>,
    D::Output: RenderedSql,
{
    type Output = D::Output;

    fn render(&self, fragment: FlatFragment<V>) -> D::Output {
        let output = self.inner.render(fragment);
        self.emit(output.sql(), output.param_count());
        output
    }
}

fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{NumberedDialect, UnsafeDialect};
    use crate::fragment::{Fragment, Value};

    fn flat() -> FlatFragment<i64> {
        Fragment::new(["a = ", ""], [Value::Param(1_i64)])
            .unwrap()
            .into_flat()
    }

    #[test]
    fn passes_output_through() {
        let traced = TracedDialect::new(NumberedDialect::postgres()).level(Level::INFO);
        let q = flat().render(&traced);
        assert_eq!(q.text, "a = $1");
        assert_eq!(q.values, vec![1]);

        let s = flat().render(&TracedDialect::new(UnsafeDialect).no_truncate());
        assert_eq!(s, "a = 1");
    }

    #[test]
    fn truncates_at_char_boundary() {
        assert_eq!(truncate_sql_bytes("héllo", 2), "h");
        assert_eq!(truncate_sql_bytes("hello", 10), "hello");

        let traced = TracedDialect::new(UnsafeDialect).max_sql_length(3);
        assert_eq!(traced.truncate_sql("select"), "sel...");
    }
}
