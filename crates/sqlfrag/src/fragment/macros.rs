/// Build a raw [`Fragment`](crate::Fragment) from alternating literals and values.
///
/// Arguments alternate between string literals and value expressions, starting
/// and ending with a literal, so a fragment with `n` values always has `n + 1`
/// literals. Literal SQL must be written as string literals; runtime strings go
/// through [`Fragment::raw`](crate::Fragment::raw) explicitly.
///
/// Values are converted with [`IntoValue`](crate::IntoValue): scalars become
/// placeholders, fragments are nested.
///
/// ```ignore
/// use sqlfrag::{sql, Fragment};
///
/// let by_id: Fragment = sql!("id = ", 42, "");
/// let q: Fragment = sql!("SELECT * FROM users WHERE ", by_id, " LIMIT ", 10, "");
/// assert_eq!(q.flatten().to_unsafe_string(), "SELECT * FROM users WHERE id = 42 LIMIT 10");
/// ```
#[macro_export]
macro_rules! sql {
    ($first:literal $(, $value:expr, $lit:literal)*) => {
        $crate::Fragment::__from_template(
            ::std::string::String::from($first),
            ::std::vec![$((
                $crate::IntoValue::into_value($value),
                ::std::string::String::from($lit),
            )),*],
        )
    };
}
