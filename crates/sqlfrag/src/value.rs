//! Dynamic scalar values for fragment parameters.
//!
//! [`SqlValue`] is the default parameter type of [`Fragment`](crate::Fragment).
//! Any other type can be used as the parameter type; `SqlValue` only exists so
//! heterogeneous values (`1`, `"alice"`, `None::<i64>`) can sit in one fragment.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A dynamically typed SQL parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Json(serde_json::Value),
}

impl SqlValue {
    /// Check if this value is SQL `NULL`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Naive rendering used by the unsafe dialect. Text is **not** quoted or escaped.
impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Json(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! impl_from_scalar {
    ($variant:ident: $($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for SqlValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value.into())
                }
            }
        )+
    };
}

impl_from_scalar!(Bool: bool);
impl_from_scalar!(Int: i8, i16, i32, i64, u8, u16, u32);
impl_from_scalar!(Float: f32, f64);
impl_from_scalar!(Text: String, &str, char);
impl_from_scalar!(Json: serde_json::Value);

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(feature = "postgres")]
mod pg {
    use super::SqlValue;
    use bytes::BytesMut;
    use std::error::Error;
    use tokio_postgres::types::{IsNull, ToSql, Type};

    // Integers and floats narrow to the column's width so `Int` binds to
    // INT2/INT4 columns as well as INT8.
    impl ToSql for SqlValue {
        fn to_sql(
            &self,
            ty: &Type,
            out: &mut BytesMut,
        ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
            match self {
                SqlValue::Null => Ok(IsNull::Yes),
                SqlValue::Bool(v) => v.to_sql_checked(ty, out),
                SqlValue::Int(v) => match *ty {
                    Type::INT2 => i16::try_from(*v)?.to_sql_checked(ty, out),
                    Type::INT4 => i32::try_from(*v)?.to_sql_checked(ty, out),
                    _ => v.to_sql_checked(ty, out),
                },
                SqlValue::Float(v) => match *ty {
                    Type::FLOAT4 => (*v as f32).to_sql_checked(ty, out),
                    _ => v.to_sql_checked(ty, out),
                },
                SqlValue::Text(v) => v.as_str().to_sql_checked(ty, out),
                SqlValue::Json(v) => v.to_sql_checked(ty, out),
            }
        }

        fn accepts(_ty: &Type) -> bool {
            true
        }

        tokio_postgres::types::to_sql_checked!();
    }
}
