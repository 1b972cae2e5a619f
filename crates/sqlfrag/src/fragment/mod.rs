//! Raw, composable SQL fragments.
//!
//! A [`Fragment`] stores literal SQL text and parameter values separately:
//! `literals[0] value[0] literals[1] ... value[n-1] literals[n]`. A parameter
//! may itself be a fragment, which is spliced in place when the outer fragment
//! is flattened.
//!
//! # Example
//!
//! ```ignore
//! use sqlfrag::{sql, Fragment};
//!
//! let active: Fragment = sql!("status = ", "active", "");
//! let q: Fragment = sql!("SELECT * FROM users WHERE ", active, " AND age > ", 18, "");
//!
//! let pg = q.into_flat().to_postgres_query();
//! assert_eq!(pg.text, "SELECT * FROM users WHERE status = $1 AND age > $2");
//! ```

mod macros;


use crate::error::{FragmentError, FragmentResult};
use crate::flatten::{self, FlatFragment};
use crate::value::SqlValue;
use serde::Serialize;

/// A single parameter slot of a raw [`Fragment`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value<V = SqlValue> {
    /// A scalar bound as one placeholder.
    Param(V),
    /// A raw nested fragment, flattened recursively.
    Fragment(Fragment<V>),
    /// An already flattened nested fragment, spliced as-is.
    Flat(FlatFragment<V>),
}

impl<V> Value<V> {
    /// Check if this slot holds a nested fragment (raw or flattened).
    pub fn is_fragment(&self) -> bool {
        !matches!(self, Self::Param(_))
    }
}

/// A raw SQL fragment whose parameters may contain nested fragments.
///
/// Invariant: `literals.len() == values.len() + 1`. Every constructor upholds it,
/// so the only way to get a fragment with mismatched sequences is
/// [`Fragment::new`], which rejects them.
///
/// Renderers never accept a `Fragment`; flatten it first with
/// [`Fragment::into_flat`] or [`Fragment::flatten`].
#[must_use]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fragment<V = SqlValue> {
    pub(crate) literals: Vec<String>,
    pub(crate) values: Vec<Value<V>>,
}

impl<V> Fragment<V> {
    /// Build a fragment from literal segments and the values between them.
    ///
    /// Returns [`FragmentError::LengthMismatch`] unless there is exactly one
    /// more literal than values.
    pub fn new<S, T>(
        literals: impl IntoIterator<Item = S>,
        values: impl IntoIterator<Item = T>,
    ) -> FragmentResult<Self>
    where
        S: Into<String>,
        T: IntoValue<V>,
    {
        let literals: Vec<String> = literals.into_iter().map(Into::into).collect();
        let values: Vec<Value<V>> = values.into_iter().map(IntoValue::into_value).collect();
        if literals.len() != values.len() + 1 {
            return Err(FragmentError::length_mismatch(literals.len(), values.len()));
        }
        Ok(Self { literals, values })
    }

    /// Macro support for [`sql!`](crate::sql), not public API.
    ///
    /// Each value travels with the literal that follows it, so the pair
    /// layout cannot break the length invariant.
    #[doc(hidden)]
    pub fn __from_template(first: String, rest: Vec<(Value<V>, String)>) -> Self {
        let mut literals = Vec::with_capacity(rest.len() + 1);
        let mut values = Vec::with_capacity(rest.len());
        literals.push(first);
        for (value, literal) in rest {
            values.push(value);
            literals.push(literal);
        }
        Self { literals, values }
    }

    /// A fragment of literal SQL with no parameters.
    pub fn raw(sql: impl Into<String>) -> Self {
        Self {
            literals: vec![sql.into()],
            values: Vec::new(),
        }
    }

    /// An empty fragment (one empty literal).
    pub fn empty() -> Self {
        Self::raw("")
    }

    /// A fragment consisting of a single parameter slot.
    pub fn bind(value: impl IntoValue<V>) -> Self {
        Self {
            literals: vec![String::new(), String::new()],
            values: vec![value.into_value()],
        }
    }

    /// Join items with a literal separator, each item taking one slot.
    ///
    /// Fragments among `items` stay nested until flattening. An empty
    /// iterator yields [`Fragment::empty`].
    pub fn join<T>(items: impl IntoIterator<Item = T>, separator: &str) -> Self
    where
        T: IntoValue<V>,
    {
        let values: Vec<Value<V>> = items.into_iter().map(IntoValue::into_value).collect();
        let mut literals = Vec::with_capacity(values.len() + 1);
        literals.push(String::new());
        if !values.is_empty() {
            literals.extend((1..values.len()).map(|_| separator.to_string()));
            literals.push(String::new());
        }
        Self { literals, values }
    }

    /// Comma-separated placeholders for `values`.
    ///
    /// If `values` is empty this is the literal `NULL`, so `IN (NULL)` stays
    /// valid SQL (and matches nothing).
    pub fn bind_list<T>(values: impl IntoIterator<Item = T>) -> Self
    where
        T: IntoValue<V>,
    {
        let list = Self::join(values, ", ");
        if list.values.is_empty() {
            return Self::raw("NULL");
        }
        list
    }

    /// Append literal SQL (no parameters).
    pub fn push(&mut self, sql: &str) -> &mut Self {
        if let Some(last) = self.literals.last_mut() {
            last.push_str(sql);
        }
        self
    }

    /// Append one parameter slot.
    ///
    /// Passing a fragment nests it; it is spliced in place on flattening.
    pub fn push_bind(&mut self, value: impl IntoValue<V>) -> &mut Self {
        self.values.push(value.into_value());
        self.literals.push(String::new());
        self
    }

    /// Append another fragment's sequences directly, joining the boundary text.
    ///
    /// Unlike [`push_bind`](Fragment::push_bind) this does not nest: `other`'s
    /// slots become slots of `self`.
    pub fn append(&mut self, other: Fragment<V>) -> &mut Self {
        let mut literals = other.literals.into_iter();
        if let (Some(last), Some(first)) = (self.literals.last_mut(), literals.next()) {
            last.push_str(&first);
        }
        self.literals.extend(literals);
        self.values.extend(other.values);
        self
    }

    /// Append literal SQL and return `self` (consuming version of [`push`](Fragment::push)).
    pub fn sql(mut self, sql: &str) -> Self {
        self.push(sql);
        self
    }

    /// Bind a value and return `self` (consuming version of [`push_bind`](Fragment::push_bind)).
    pub fn bound(mut self, value: impl IntoValue<V>) -> Self {
        self.push_bind(value);
        self
    }

    /// Literal segments, one more than [`values`](Fragment::values).
    pub fn literals(&self) -> &[String] {
        &self.literals
    }

    /// Parameter slots of this fragment (not recursing into nested fragments).
    pub fn values(&self) -> &[Value<V>] {
        &self.values
    }

    /// Number of parameter slots at this level.
    pub fn param_count(&self) -> usize {
        self.values.len()
    }

    /// Check if no slot holds a nested fragment.
    pub fn is_flat(&self) -> bool {
        !self.values.iter().any(Value::is_fragment)
    }

    /// Maximum nesting depth; `0` for a fragment without nested fragments.
    pub fn depth(&self) -> usize {
        self.values
            .iter()
            .map(|value| match value {
                Value::Param(_) => 0,
                Value::Fragment(child) => child.depth() + 1,
                Value::Flat(_) => 1,
            })
            .max()
            .unwrap_or(0)
    }

    /// Split into `(literals, values)`.
    pub fn into_parts(self) -> (Vec<String>, Vec<Value<V>>) {
        (self.literals, self.values)
    }

    /// Flatten, consuming `self` so values are moved rather than cloned.
    pub fn into_flat(self) -> FlatFragment<V> {
        #[cfg(feature = "tracing")]
        let (literals, params, depth) = (self.literals.len(), self.values.len(), self.depth());

        let flat = flatten::compile(self);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "sqlfrag.flatten",
            literals,
            params,
            depth,
            flat_params = flat.param_count(),
            "flattened fragment"
        );

        flat
    }

    /// Flatten a copy of this fragment, leaving `self` untouched.
    pub fn flatten(&self) -> FlatFragment<V>
    where
        V: Clone,
    {
        self.clone().into_flat()
    }
}

impl<V> Default for Fragment<V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V> From<FlatFragment<V>> for Fragment<V> {
    fn from(flat: FlatFragment<V>) -> Self {
        let (literals, values) = flat.into_parts();
        Self {
            literals,
            values: values.into_iter().map(Value::Param).collect(),
        }
    }
}

/// Conversion into a parameter slot.
///
/// Implemented for nested fragments (raw or flattened), for [`Value`] itself,
/// and for the common Rust scalars (as [`SqlValue`]). Implement it for your own
/// scalar type to use it with [`sql!`](crate::sql):
///
/// ```ignore
/// impl sqlfrag::IntoValue<MyParam> for MyParam {
///     fn into_value(self) -> sqlfrag::Value<MyParam> {
///         sqlfrag::Value::Param(self)
///     }
/// }
/// ```
pub trait IntoValue<V> {
    fn into_value(self) -> Value<V>;
}

impl<V> IntoValue<V> for Value<V> {
    fn into_value(self) -> Value<V> {
        self
    }
}

impl<V> IntoValue<V> for Fragment<V> {
    fn into_value(self) -> Value<V> {
        Value::Fragment(self)
    }
}

impl<V: Clone> IntoValue<V> for &Fragment<V> {
    fn into_value(self) -> Value<V> {
        Value::Fragment(self.clone())
    }
}

impl<V> IntoValue<V> for FlatFragment<V> {
    fn into_value(self) -> Value<V> {
        Value::Flat(self)
    }
}

impl<V: Clone> IntoValue<V> for &FlatFragment<V> {
    fn into_value(self) -> Value<V> {
        Value::Flat(self.clone())
    }
}

macro_rules! impl_into_sql_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl IntoValue<SqlValue> for $ty {
                fn into_value(self) -> Value<SqlValue> {
                    Value::Param(SqlValue::from(self))
                }
            }
        )+
    };
}

impl_into_sql_value!(
    SqlValue,
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    f32,
    f64,
    char,
    String,
    &str,
    serde_json::Value,
);

impl<T: Into<SqlValue>> IntoValue<SqlValue> for Option<T> {
    fn into_value(self) -> Value<SqlValue> {
        Value::Param(SqlValue::from(self))
    }
}
