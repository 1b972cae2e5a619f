//! # sqlfrag
//!
//! Composable SQL fragments that nest inside one another and flatten into a
//! single parameterized query for a specific driver.
//!
//! ## Features
//!
//! - **SQL explicit**: literal SQL is written as-is; values always become placeholders
//! - **Nesting**: a fragment's value can be another fragment, to any depth
//! - **Exact splicing**: nested text is joined at the seams with nothing inserted
//! - **Type-state**: dialects only accept [`FlatFragment`], which only flattening produces
//! - **Several dialects**: `$n` (Postgres), `?` (MySQL/SQLite), and an inline debug rendering
//!
//! ## Example
//!
//! ```ignore
//! use sqlfrag::{sql, Fragment};
//!
//! let filter: Fragment = sql!("status = ", "active", " AND age > ", 18, "");
//! let q: Fragment = sql!("SELECT * FROM users WHERE ", filter, " LIMIT ", 10, "");
//!
//! let pg = q.into_flat().to_postgres_query();
//! assert_eq!(pg.text, "SELECT * FROM users WHERE status = $1 AND age > $2 LIMIT $3");
//! ```

pub mod config;
pub mod dialect;
pub mod error;
pub mod flatten;
pub mod fragment;
pub mod prelude;
pub mod value;

#[cfg(feature = "tracing")]
pub mod trace;

pub use config::DialectConfig;
pub use dialect::{
    Dialect, MySqlQuery, NumberedDialect, NumberedQuery, PositionalDialect, PositionalQuery,
    PostgresQuery, RenderedSql, UnsafeDialect, to_mysql_query, to_postgres_query,
    to_unsafe_string,
};
pub use error::{FragmentError, FragmentResult};
pub use flatten::{FlatFragment, flatten};
pub use fragment::{Fragment, IntoValue, Value};
pub use value::SqlValue;

#[cfg(feature = "tracing")]
pub use trace::TracedDialect;
