use super::*;

fn gid(n: u32) -> GroupId {
    GroupId::new(n).unwrap()
}

#[test]
fn group_id_starts_at_one() {
    assert_eq!(GroupId::FIRST.get(), 1);
    assert_eq!(GroupId::FIRST.succ().get(), 2);
    assert!(GroupId::new(0).is_none());
}

#[test]
fn display_sexpr() {
    let ir = Ir::seq(
        Ir::group(gid(1), Ir::byte(b'a')),
        Ir::star(Ir::alt(Ir::empty(), Ir::byte(b'\n'))),
    );

    insta::assert_snapshot!(ir.to_string(), @"(seq (group 1 'a') (star (alt eps 0x0a)))");
}

#[test]
fn display_escapes_quote_and_backslash() {
    let ir = Ir::alt(Ir::byte(b'\''), Ir::byte(b'\\'));

    insta::assert_snapshot!(ir.to_string(), @"(alt 0x27 0x5c)");
}

#[test]
fn dump_tree() {
    let ir = Ir::alt(Ir::empty(), Ir::group(gid(1), Ir::byte(b'a')));

    insta::assert_snapshot!(ir.dump(), @r"
    Alt
      Empty
      Group 1
        Byte 'a'
    ");
}

#[test]
fn depth_of_leaf_and_spine() {
    assert_eq!(Ir::byte(0).depth(), 1);
    let spine = Ir::seq(Ir::seq(Ir::byte(1), Ir::byte(2)), Ir::byte(3));
    assert_eq!(spine.depth(), 3);
}

#[test]
fn group_ids_pre_order() {
    let ir = Ir::group(
        gid(1),
        Ir::seq(
            Ir::group(gid(2), Ir::byte(b'a')),
            Ir::group(gid(2), Ir::byte(b'a')),
        ),
    );

    assert_eq!(ir.group_ids(), vec![gid(1), gid(2), gid(2)]);
}

#[test]
fn serde_round_trip_json() {
    let ir = Ir::seq(Ir::group(gid(3), Ir::byte(b'x')), Ir::empty());

    let json = serde_json::to_string(&ir).unwrap();
    assert_eq!(json, r#"{"Seq":[{"Group":[3,{"Byte":120}]},"Empty"]}"#);

    let back: Ir = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ir);
}

#[test]
fn dump_shows_non_graphic_bytes_in_hex() {
    let ir = Ir::star(Ir::seq(Ir::byte(b' '), Ir::byte(0xFF)));

    let expected = indoc::indoc! {"
        Star
          Seq
            Byte 0x20
            Byte 0xff
    "};
    assert_eq!(ir.dump(), expected);
}

fn left_spine(leaves: usize) -> Ir {
    (1..leaves).fold(Ir::byte(b'a'), |acc, _| Ir::seq(acc, Ir::byte(b'a')))
}

fn hash_of(ir: &Ir) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    ir.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn million_node_spine_is_walked_without_recursion() {
    let ir = left_spine(1_000_000);
    assert_eq!(ir.depth(), 1_000_000);
    assert_eq!(ir.size(), 1_999_999);
    assert!(ir.group_ids().is_empty());

    let text = ir.to_string();
    assert_eq!(text.matches("(seq ").count(), 999_999);
    assert!(text.starts_with("(seq (seq (seq "));
    assert!(text.ends_with("'a' 'a') 'a') 'a')"));

    let copy = ir.clone();
    assert!(copy == ir);
    assert_eq!(hash_of(&copy), hash_of(&ir));
}

#[test]
fn deep_single_child_chain_drops() {
    let ir = (0..500_000).fold(Ir::byte(b'x'), |acc, i| {
        if i % 2 == 0 {
            Ir::star(acc)
        } else {
            Ir::group(GroupId::FIRST, acc)
        }
    });
    assert_eq!(ir.depth(), 500_001);
    assert_eq!(ir.group_ids().len(), 250_000);
    drop(ir);
}

#[test]
fn clone_preserves_shape_and_ids() {
    let ir = Ir::alt(
        Ir::group(gid(2), Ir::seq(Ir::byte(b'a'), Ir::empty())),
        Ir::star(Ir::byte(0xff)),
    );
    let copy = ir.clone();
    assert_eq!(copy, ir);
    assert_eq!(copy.to_string(), "(alt (group 2 (seq 'a' eps)) (star 0xff))");
}

#[test]
fn equality_and_hash_see_operator_and_id() {
    let seq = Ir::seq(Ir::byte(b'a'), Ir::byte(b'b'));
    let alt = Ir::alt(Ir::byte(b'a'), Ir::byte(b'b'));
    assert_ne!(seq, alt);
    assert_ne!(hash_of(&seq), hash_of(&alt));

    assert_ne!(Ir::group(gid(1), Ir::empty()), Ir::group(gid(2), Ir::empty()));
    assert_ne!(Ir::byte(b'a'), Ir::byte(b'b'));
    assert_eq!(hash_of(&seq), hash_of(&Ir::seq(Ir::byte(b'a'), Ir::byte(b'b'))));
}

#[test]
fn size_counts_every_node() {
    assert_eq!(Ir::empty().size(), 1);
    assert_eq!(Ir::group(gid(1), Ir::star(Ir::byte(b'a'))).size(), 3);
    assert_eq!(left_spine(4).size(), 7);
}
