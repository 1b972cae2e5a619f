use super::*;
use crate::sql;

/// Reference rendering: paste every nested fragment's text into its slot.
fn substitute(fragment: &Fragment<i64>) -> String {
    let mut out = fragment.literals()[0].clone();
    for (value, literal) in fragment.values().iter().zip(&fragment.literals()[1..]) {
        match value {
            Value::Param(v) => out.push_str(&v.to_string()),
            Value::Fragment(child) => out.push_str(&substitute(child)),
            Value::Flat(child) => out.push_str(&child.to_unsafe_string()),
        }
        out.push_str(literal);
    }
    out
}

fn raw(literals: &[&str], values: Vec<Value<i64>>) -> Fragment<i64> {
    Fragment::new(literals.iter().copied(), values).unwrap()
}

fn p(v: i64) -> Value<i64> {
    Value::Param(v)
}

fn nested(f: Fragment<i64>) -> Value<i64> {
    Value::Fragment(f)
}

#[test]
fn scalar_only_fragment_is_unchanged() {
    let f = raw(&["a", "b"], vec![p(1)]);
    let flat = f.flatten();

    assert_eq!(flat.literals(), ["a", "b"]);
    assert_eq!(flat.values(), [1]);
}

#[test]
fn nested_fragment_joins_boundaries() {
    let inner = raw(&["p", "q"], vec![p(5)]);
    let outer = raw(&["x", "y"], vec![nested(inner)]);
    let flat = outer.flatten();

    assert_eq!(flat.literals(), ["xp", "qy"]);
    assert_eq!(flat.values(), [5]);
}

#[test]
fn nested_then_scalar_sibling() {
    let inner = raw(&["1", "2"], vec![p(10)]);
    let outer = raw(&["a", "b", "c"], vec![nested(inner), p(20)]);
    let flat = outer.flatten();

    assert_eq!(flat.literals(), ["a1", "2b", "c"]);
    assert_eq!(flat.values(), [10, 20]);
    assert_eq!(flat.to_unsafe_string(), substitute(&outer));
}

#[test]
fn literal_only_child_leaves_no_slot() {
    let inner = raw(&["literal-only"], vec![]);
    let outer = raw(&["[", "]"], vec![nested(inner)]);
    let flat = outer.flatten();

    assert_eq!(flat.literals(), ["[literal-only]"]);
    assert!(flat.values().is_empty());
}

#[test]
fn literal_only_child_between_scalars() {
    let inner = raw(&[" AND "], vec![]);
    let outer = raw(&["a = ", "", " b = ", ""], vec![p(1), nested(inner), p(2)]);
    let flat = outer.flatten();

    assert_eq!(flat.literals(), ["a = ", " AND  b = ", ""]);
    assert_eq!(flat.values(), [1, 2]);
    assert_eq!(flat.to_unsafe_string(), "a = 1 AND  b = 2");
}

#[test]
fn cursor_advances_past_multi_value_child() {
    let inner = raw(&["(", ", ", ")"], vec![p(1), p(2)]);
    let outer = raw(&["IN ", " AND x = ", ""], vec![nested(inner), p(3)]);
    let flat = outer.flatten();

    assert_eq!(flat.literals(), ["IN (", ", ", ") AND x = ", ""]);
    assert_eq!(flat.values(), [1, 2, 3]);
}

#[test]
fn deep_nesting_preserves_order() {
    let leaf = raw(&["<", ">"], vec![p(3)]);
    let mid = raw(&["{", "", "}"], vec![p(2), nested(leaf)]);
    let top = raw(&["[", "", "", "]"], vec![p(1), nested(mid), p(4)]);
    let flat = top.flatten();

    assert_eq!(flat.values(), [1, 2, 3, 4]);
    assert_eq!(flat.to_unsafe_string(), "[1{2<3>}4]");
    assert_eq!(flat.to_unsafe_string(), substitute(&top));
    assert_eq!(flat.literals().len(), flat.values().len() + 1);
}

#[test]
fn flat_child_is_spliced_without_recursion() {
    let child = raw(&["p", "q"], vec![p(5)]).into_flat();
    let outer = raw(&["x", "y"], vec![Value::Flat(child)]);
    let flat = outer.flatten();

    assert_eq!(flat.literals(), ["xp", "qy"]);
    assert_eq!(flat.values(), [5]);
}

#[test]
fn flatten_does_not_touch_input() {
    let inner = raw(&["p", "q"], vec![p(5)]);
    let outer = raw(&["x", "y"], vec![nested(inner)]);
    let before = outer.clone();

    let _ = flatten(&outer);
    assert_eq!(outer, before);
}

#[test]
fn flattening_is_idempotent() {
    let inner = raw(&["(", ", ", ")"], vec![p(1), p(2)]);
    let outer = raw(&["IN ", ""], vec![nested(inner)]);
    let once = outer.flatten();

    assert_eq!(once.flatten(), once);
    assert_eq!(once.clone().into_raw().into_flat(), once);
}

#[test]
fn macro_built_fragments_flatten() {
    let inner: Fragment = sql!("status = ", "active", "");
    let outer: Fragment = sql!("SELECT * FROM users WHERE ", inner, " LIMIT ", 10_i64, "");
    let flat = outer.into_flat();

    assert_eq!(
        flat.literals(),
        ["SELECT * FROM users WHERE status = ", " LIMIT ", ""]
    );
    assert_eq!(flat.param_count(), 2);
}

#[test]
fn default_is_single_empty_literal() {
    let flat = FlatFragment::<i64>::default();
    assert_eq!(flat.literals(), [""]);
    assert!(flat.values().is_empty());
}
