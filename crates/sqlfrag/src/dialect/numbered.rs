use super::{Dialect, RenderedSql};
use crate::flatten::FlatFragment;
use serde::Serialize;

/// Query text with numbered placeholders plus the values they refer to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumberedQuery<V> {
    pub text: String,
    pub values: Vec<V>,
}

/// The Postgres shape: `{ text, values }` with `$1, $2, ...`.
pub type PostgresQuery<V> = NumberedQuery<V>;

impl<V> RenderedSql for NumberedQuery<V> {
    fn sql(&self) -> &str {
        &self.text
    }

    fn param_count(&self) -> usize {
        self.values.len()
    }
}

#[cfg(feature = "postgres")]
impl<V> NumberedQuery<V>
where
    V: tokio_postgres::types::ToSql + Sync,
{
    /// Parameter refs compatible with `tokio-postgres`.
    pub fn params_ref(&self) -> Vec<&(dyn tokio_postgres::types::ToSql + Sync)> {
        self.values
            .iter()
            .map(|v| v as &(dyn tokio_postgres::types::ToSql + Sync))
            .collect()
    }
}

/// Joins literals with `prefix` followed by a running index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedDialect {
    /// Text written before each index (`$` for Postgres).
    pub prefix: String,
    /// Index of the first placeholder.
    pub start: usize,
}

impl Default for NumberedDialect {
    fn default() -> Self {
        Self::postgres()
    }
}

impl NumberedDialect {
    /// `$1, $2, ...`
    pub fn postgres() -> Self {
        Self {
            prefix: "$".to_string(),
            start: 1,
        }
    }

    /// Override the placeholder prefix (e.g. `:` for `:1, :2, ...`).
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Override the first placeholder index.
    pub fn start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    /// Indices saturate at `usize::MAX` instead of wrapping.
    fn join_with_placeholders(&self, literals: &[String]) -> String {
        let slots = literals.len().saturating_sub(1);
        let last = self.start.saturating_add(slots);
        // Pre-size to avoid repeated reallocations.
        let cap = literals.iter().map(String::len).sum::<usize>()
            + slots.saturating_mul(self.prefix.len() + decimal_digits(last));

        let mut out = String::with_capacity(cap);
        let mut literals = literals.iter();
        if let Some(first) = literals.next() {
            out.push_str(first);
        }
        let mut idx = self.start;
        for literal in literals {
            out.push_str(&self.prefix);
            push_usize(&mut out, idx);
            out.push_str(literal);
            idx = idx.saturating_add(1);
        }
        out
    }
}

impl<V> Dialect<V> for NumberedDialect {
    type Output = NumberedQuery<V>;

    fn render(&self, fragment: FlatFragment<V>) -> NumberedQuery<V> {
        let text = self.join_with_placeholders(&fragment.literals);
        NumberedQuery {
            text,
            values: fragment.values,
        }
    }
}

#[inline]
fn decimal_digits(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

// Write a usize as decimal digits into `out` without going through fmt.
#[inline]
fn push_usize(out: &mut String, mut n: usize) {
    if n < 10 {
        out.push(char::from(b'0' + n as u8));
        return;
    }
    let mut buf = [0u8; 20];
    let mut pos = buf.len();
    while n > 0 {
        pos -= 1;
        buf[pos] = b'0' + (n % 10) as u8;
        n /= 10;
    }
    for &digit in &buf[pos..] {
        out.push(char::from(digit));
    }
}
