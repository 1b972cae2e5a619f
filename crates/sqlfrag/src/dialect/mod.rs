//! Dialects render a [`FlatFragment`] into what a particular driver expects.
//!
//! - [`UnsafeDialect`]: values inlined as text, for humans only.
//! - [`NumberedDialect`]: `$1, $2, ...` placeholders (Postgres).
//! - [`PositionalDialect`]: `?` placeholders (MySQL, SQLite).
//!
//! Dialects only accept flattened fragments, so a nested fragment can never
//! reach a renderer.

mod numbered;
mod positional;
mod unsafe_string;


use crate::flatten::FlatFragment;
use std::fmt::Display;

pub use numbered::{NumberedDialect, NumberedQuery, PostgresQuery};
pub use positional::{MySqlQuery, PositionalDialect, PositionalQuery};
pub use unsafe_string::UnsafeDialect;

/// Renders a flattened fragment into a driver-specific value.
pub trait Dialect<V> {
    type Output;

    fn render(&self, fragment: FlatFragment<V>) -> Self::Output;
}

/// Read access to the SQL text of a rendered query.
pub trait RenderedSql {
    /// The SQL text as sent to the driver.
    fn sql(&self) -> &str;

    /// Number of bound parameters.
    fn param_count(&self) -> usize;
}

impl RenderedSql for String {
    fn sql(&self) -> &str {
        self
    }

    // Values are inlined; nothing is bound.
    fn param_count(&self) -> usize {
        0
    }
}

/// Inline values into the SQL text. **Never** execute the result.
pub fn to_unsafe_string<V: Display>(fragment: &FlatFragment<V>) -> String {
    unsafe_string::inline_values(fragment)
}

/// Render with `$1, $2, ...` placeholders.
pub fn to_postgres_query<V>(fragment: FlatFragment<V>) -> PostgresQuery<V> {
    NumberedDialect::postgres().render(fragment)
}

/// Render with `?` placeholders.
pub fn to_mysql_query<V>(fragment: FlatFragment<V>) -> MySqlQuery<V> {
    PositionalDialect::mysql().render(fragment)
}

impl<V> FlatFragment<V> {
    /// Render with any [`Dialect`].
    pub fn render<D: Dialect<V>>(self, dialect: &D) -> D::Output {
        dialect.render(self)
    }

    /// See [`to_unsafe_string`].
    pub fn to_unsafe_string(&self) -> String
    where
        V: Display,
    {
        to_unsafe_string(self)
    }

    /// See [`to_postgres_query`].
    pub fn to_postgres_query(self) -> PostgresQuery<V> {
        to_postgres_query(self)
    }

    /// See [`to_mysql_query`].
    pub fn to_mysql_query(self) -> MySqlQuery<V> {
        to_mysql_query(self)
    }
}
