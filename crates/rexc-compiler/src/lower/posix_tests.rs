use regex_syntax::ParserBuilder;
use regex_syntax::hir::{Class, HirKind};

use super::intervals::{Interval, normalize};
use super::posix::ranges;
use crate::parser::NamedSet;

/// Byte ranges `regex-syntax` assigns to `[[:name:]]` in ASCII mode.
fn oracle(set: NamedSet) -> Vec<(u8, u8)> {
    let pattern = format!("[[:{set}:]]");
    let hir = ParserBuilder::new()
        .unicode(false)
        .utf8(false)
        .build()
        .parse(&pattern)
        .unwrap();
    match hir.kind() {
        HirKind::Class(Class::Bytes(class)) => class
            .ranges()
            .iter()
            .map(|r| (r.start(), r.end()))
            .collect(),
        other => panic!("unexpected HIR for {pattern}: {other:?}"),
    }
}

fn as_bytes(intervals: &[Interval]) -> Vec<(u8, u8)> {
    intervals
        .iter()
        .map(|iv| (iv.lo as u8, iv.hi as u8))
        .collect()
}

#[test]
fn tables_match_regex_syntax() {
    for set in NamedSet::ALL {
        assert_eq!(as_bytes(ranges(set)), oracle(set), "[:{set}:]");
    }
}

#[test]
fn tables_are_normalized() {
    for set in NamedSet::ALL {
        assert_eq!(normalize(ranges(set)), ranges(set), "[:{set}:]");
    }
}

#[test]
fn tables_stay_within_ascii() {
    for set in NamedSet::ALL {
        assert!(ranges(set).iter().all(|iv| iv.hi <= 0x7F), "[:{set}:]");
    }
}

#[test]
fn word_is_alnum_plus_underscore() {
    let mut alnum = ranges(NamedSet::Alnum).to_vec();
    alnum.push(Interval::new(b'_'.into(), b'_'.into()));
    assert_eq!(normalize(&alnum), ranges(NamedSet::Word));
}

#[test]
fn graph_is_print_without_space() {
    let print = ranges(NamedSet::Print);
    let graph = ranges(NamedSet::Graph);
    assert_eq!(print, [Interval::new(0x20, 0x7E)]);
    assert_eq!(graph, [Interval::new(0x21, 0x7E)]);
}
