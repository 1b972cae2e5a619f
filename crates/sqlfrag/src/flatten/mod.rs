//! Flattening nested fragments into one literal sequence and one value sequence.
//!
//! The walk is depth-first and left-to-right. Every nested fragment is
//! flattened first and then spliced into the parent's working copies at the
//! current literal position, joining the text on both sides of the slot so no
//! separator or placeholder is introduced at the seam.
//!
//! Recursion uses one stack frame per nesting level, so nesting depth is bounded
//! by the thread's stack size.

mod splice;

#[cfg(test)]
mod tests;

use crate::fragment::{Fragment, Value};
use crate::value::SqlValue;
use serde::Serialize;

pub(crate) use splice::splice;

/// A fragment with no nested fragments, ready to be rendered by a
/// [`Dialect`](crate::Dialect).
///
/// Produced only by flattening (see [`flatten`]); there is no public
/// constructor taking raw sequences.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FlatFragment<V = SqlValue> {
    pub(crate) literals: Vec<String>,
    pub(crate) values: Vec<V>,
}

impl<V> FlatFragment<V> {
    /// Literal segments, one more than [`values`](FlatFragment::values).
    pub fn literals(&self) -> &[String] {
        &self.literals
    }

    /// Parameter values in placeholder order.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Number of placeholders.
    pub fn param_count(&self) -> usize {
        self.values.len()
    }

    /// Split into `(literals, values)`.
    pub fn into_parts(self) -> (Vec<String>, Vec<V>) {
        (self.literals, self.values)
    }

    /// Turn back into a raw fragment, e.g. to keep composing.
    pub fn into_raw(self) -> Fragment<V> {
        Fragment::from(self)
    }

    /// Flattening a flat fragment is the identity.
    pub fn flatten(&self) -> FlatFragment<V>
    where
        V: Clone,
    {
        self.clone()
    }
}

impl<V> Default for FlatFragment<V> {
    fn default() -> Self {
        Self {
            literals: vec![String::new()],
            values: Vec::new(),
        }
    }
}

/// Flatten `fragment` without touching it.
///
/// The result renders to exactly the text (and value order) obtained by pasting
/// every nested fragment into its slot.
pub fn flatten<V: Clone>(fragment: &Fragment<V>) -> FlatFragment<V> {
    fragment.flatten()
}

/// Recursive driver. Owns its input, so the literal vector doubles as the
/// working copy and scalars are moved, not cloned.
pub(crate) fn compile<V>(fragment: Fragment<V>) -> FlatFragment<V> {
    let (mut literals, slots) = fragment.into_parts();
    let mut values = Vec::with_capacity(slots.len());
    // Literal to the left of the current slot. The value cursor is `values.len()`.
    let mut at = 0;

    for slot in slots {
        let child = match slot {
            Value::Param(value) => {
                values.push(value);
                at += 1;
                continue;
            }
            Value::Fragment(child) => compile(child),
            Value::Flat(child) => child,
        };
        at += splice(at, child, &mut literals, &mut values);
    }

    debug_assert_eq!(literals.len(), values.len() + 1);
    FlatFragment { literals, values }
}
