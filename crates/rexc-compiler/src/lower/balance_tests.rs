use rexc_ir::Ir;

use super::balance::{balanced, balanced_alt};

/// Joins into a parenthesized string, making the tree shape visible.
fn shape(items: &[&str]) -> Option<String> {
    let items = items.iter().map(|s| s.to_string()).collect();
    balanced(items, &|a: String, b: String| format!("({a} {b})"))
}

#[test]
fn empty_input_is_none() {
    assert_eq!(shape(&[]), None);
    assert_eq!(balanced_alt(Vec::new()), None);
}

#[test]
fn single_item_is_returned_unchanged() {
    assert_eq!(shape(&["a"]), Some("a".to_string()));
    assert_eq!(balanced_alt(vec![Ir::byte(b'x')]), Some(Ir::byte(b'x')));
}

#[test]
fn odd_counts_put_the_extra_item_on_the_right() {
    assert_eq!(shape(&["a", "b", "c"]), Some("(a (b c))".to_string()));
    assert_eq!(
        shape(&["a", "b", "c", "d", "e"]),
        Some("((a b) (c (d e)))".to_string())
    );
}

#[test]
fn order_is_preserved() {
    assert_eq!(
        shape(&["1", "2", "3", "4"]),
        Some("((1 2) (3 4))".to_string())
    );
}

#[test]
fn depth_is_logarithmic() {
    for n in [2usize, 3, 4, 5, 16, 17, 100, 255, 256] {
        let nodes = (0..n).map(|i| Ir::byte(i as u8)).collect();
        let tree = balanced_alt(nodes).unwrap();
        let expected = n.next_power_of_two().trailing_zeros() as usize + 1;
        assert_eq!(tree.depth(), expected, "n = {n}");
    }
}

#[test]
fn balanced_alt_of_three_bytes() {
    let tree = balanced_alt(vec![Ir::byte(b'a'), Ir::byte(b'b'), Ir::byte(b'c')]).unwrap();
    assert_eq!(tree.to_string(), "(alt 'a' (alt 'b' 'c'))");
}
