//! Balanced binary folding.
//!
//! Wildcards and classes expand to up to 256 single-byte alternatives. A
//! left fold would nest them 256 deep; splitting at the midpoint keeps the
//! depth at `ceil(log2 n) + 1`.

use rexc_ir::Ir;

/// Folds `items` into a balanced tree with `join`.
///
/// Empty input yields `None`; a single item is returned unchanged. Otherwise
/// the left half is `items[..n / 2]` and the right half the rest.
pub fn balanced<T>(mut items: Vec<T>, join: &impl Fn(T, T) -> T) -> Option<T> {
    match items.len() {
        0 => None,
        1 => items.pop(),
        n => {
            let right = items.split_off(n / 2);
            let left = balanced(items, join)?;
            let right = balanced(right, join)?;
            Some(join(left, right))
        }
    }
}

/// Balanced alternation over already-lowered nodes.
pub fn balanced_alt(nodes: Vec<Ir>) -> Option<Ir> {
    balanced(nodes, &Ir::alt)
}
