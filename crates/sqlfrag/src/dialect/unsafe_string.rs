use super::Dialect;
use crate::flatten::FlatFragment;
use std::fmt::{Display, Write};

/// Inlines every value with its `Display` output.
///
/// No quoting or escaping is done. Use it for logs and debugging, never for
/// running queries against a database.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsafeDialect;

impl<V: Display> Dialect<V> for UnsafeDialect {
    type Output = String;

    fn render(&self, fragment: FlatFragment<V>) -> String {
        inline_values(&fragment)
    }
}

pub(super) fn inline_values<V: Display>(fragment: &FlatFragment<V>) -> String {
    let (first, rest) = match fragment.literals.split_first() {
        Some(split) => split,
        None => return String::new(),
    };
    let cap = fragment.literals.iter().map(String::len).sum::<usize>()
        + fragment.values.len() * 4;

    let mut out = String::with_capacity(cap);
    out.push_str(first);
    for (value, literal) in fragment.values.iter().zip(rest) {
        // Writing into a String cannot fail.
        let _ = write!(out, "{value}");
        out.push_str(literal);
    }
    out
}
