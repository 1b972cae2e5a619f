//! Convenient imports for typical `sqlfrag` usage.
//!
//! ```ignore
//! use sqlfrag::prelude::*;
//! ```

pub use crate::sql;
pub use crate::{
    Dialect, FlatFragment, Fragment, FragmentError, FragmentResult, IntoValue, RenderedSql,
    SqlValue, Value, flatten,
};
