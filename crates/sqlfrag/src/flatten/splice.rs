use super::FlatFragment;

/// Splice a flattened child into the slot right of `literals[at]`.
///
/// The child's first literal is appended to `literals[at]`, its interior
/// literals are inserted after it, and its last literal is prepended to the
/// literal that followed the slot. A child with no values has a single literal,
/// in which case both neighbours and that literal merge into one.
///
/// The child's values are appended to `values`, whose end is the slot being
/// replaced. Returns the number of values the child contributed, which is also
/// how far the literal cursor moves.
///
/// Requires `at + 1 < literals.len()`, i.e. `at` addresses an open slot.
pub(crate) fn splice<V>(
    at: usize,
    child: FlatFragment<V>,
    literals: &mut Vec<String>,
    values: &mut Vec<V>,
) -> usize {
    let (child_literals, child_values) = child.into_parts();
    let added = child_values.len();
    let mut child_literals = child_literals.into_iter();

    if let Some(first) = child_literals.next() {
        literals[at].push_str(&first);
    }

    match child_literals.next_back() {
        Some(mut last) => {
            last.push_str(&literals[at + 1]);
            literals[at + 1] = last;
            literals.splice(at + 1..at + 1, child_literals);
        }
        None => {
            let after = literals.remove(at + 1);
            literals[at].push_str(&after);
        }
    }

    values.extend(child_values);
    added
}
