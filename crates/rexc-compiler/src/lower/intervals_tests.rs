use super::intervals::{ALPHABET_MAX, Interval, complement, normalize};

fn iv(lo: u32, hi: u32) -> Interval {
    Interval::new(lo, hi)
}

#[test]
fn normalize_sorts_and_merges_overlaps() {
    assert_eq!(
        normalize(&[iv(10, 20), iv(0, 5), iv(15, 30)]),
        vec![iv(0, 5), iv(10, 30)]
    );
}

#[test]
fn normalize_merges_adjacent_ranges() {
    assert_eq!(normalize(&[iv(0, 4), iv(5, 9)]), vec![iv(0, 9)]);
    assert_eq!(normalize(&[iv(0, 4), iv(6, 9)]), vec![iv(0, 4), iv(6, 9)]);
}

#[test]
fn normalize_drops_reversed_ranges() {
    assert_eq!(normalize(&[iv(9, 3), iv(1, 1)]), vec![iv(1, 1)]);
    assert!(normalize(&[iv(9, 3)]).is_empty());
}

#[test]
fn normalize_swallows_contained_ranges() {
    assert_eq!(normalize(&[iv(0, 100), iv(10, 20)]), vec![iv(0, 100)]);
}

#[test]
fn normalize_empty() {
    assert!(normalize(&[]).is_empty());
}

#[test]
fn normalize_is_idempotent() {
    let inputs: [&[Interval]; 4] = [
        &[iv(5, 1), iv(3, 8), iv(0, 0), iv(9, 9), iv(100, 120)],
        &[iv(0, 255)],
        &[iv(7, 7), iv(7, 7), iv(6, 6)],
        &[],
    ];
    for input in inputs {
        let once = normalize(input);
        assert_eq!(normalize(&once), once, "{input:?}");
    }
}

#[test]
fn normalized_ranges_are_disjoint_and_non_adjacent() {
    let out = normalize(&[iv(40, 50), iv(0, 3), iv(4, 8), iv(52, 60), iv(51, 51)]);
    assert_eq!(out, vec![iv(0, 8), iv(40, 60)]);
    for pair in out.windows(2) {
        assert!(pair[0].hi + 1 < pair[1].lo);
    }
}

#[test]
fn normalize_survives_max_value() {
    assert_eq!(
        normalize(&[iv(u32::MAX, u32::MAX), iv(0, 1)]),
        vec![iv(0, 1), iv(u32::MAX, u32::MAX)]
    );
}

#[test]
fn complement_of_empty_is_everything() {
    assert_eq!(complement(&[]), vec![iv(0, ALPHABET_MAX)]);
}

#[test]
fn complement_of_everything_is_empty() {
    assert!(complement(&[iv(0, 255)]).is_empty());
}

#[test]
fn complement_of_inner_ranges() {
    assert_eq!(
        complement(&[iv(b'a'.into(), b'z'.into()), iv(b'0'.into(), b'9'.into())]),
        vec![iv(0, 47), iv(58, 96), iv(123, 255)]
    );
}

#[test]
fn complement_touching_the_edges() {
    assert_eq!(complement(&[iv(0, 9), iv(250, 255)]), vec![iv(10, 249)]);
}

#[test]
fn complement_ignores_values_above_the_alphabet() {
    assert_eq!(complement(&[iv(200, 1000)]), vec![iv(0, 199)]);
    assert_eq!(complement(&[iv(300, 400)]), vec![iv(0, 255)]);
}

#[test]
fn complement_is_an_involution() {
    let inputs: [&[Interval]; 5] = [
        &[iv(b'a'.into(), b'z'.into())],
        &[iv(0, 0)],
        &[iv(255, 255)],
        &[iv(3, 7), iv(100, 101), iv(9, 9)],
        &[],
    ];
    for input in inputs {
        assert_eq!(complement(&complement(input)), normalize(input), "{input:?}");
    }
}

#[test]
fn complement_covers_the_alphabet_together_with_its_input() {
    let input = [iv(10, 20), iv(30, 40)];
    let mut all = complement(&input);
    all.extend_from_slice(&input);
    assert_eq!(normalize(&all), vec![iv(0, ALPHABET_MAX)]);
}

#[test]
fn interval_values() {
    assert_eq!(iv(3, 5).values().collect::<Vec<_>>(), vec![3, 4, 5]);
    assert!(!iv(5, 3).is_valid());
    assert_eq!(iv(5, 3).values().count(), 0);
}
