//! Byte ranges for the POSIX named sets (ASCII definitions).

use super::intervals::Interval;
use crate::parser::NamedSet;

const fn r(lo: u8, hi: u8) -> Interval {
    Interval::new(lo as u32, hi as u32)
}

const ALNUM: &[Interval] = &[r(b'0', b'9'), r(b'A', b'Z'), r(b'a', b'z')];
const ALPHA: &[Interval] = &[r(b'A', b'Z'), r(b'a', b'z')];
const ASCII: &[Interval] = &[r(0x00, 0x7F)];
const BLANK: &[Interval] = &[r(b'\t', b'\t'), r(b' ', b' ')];
const CNTRL: &[Interval] = &[r(0x00, 0x1F), r(0x7F, 0x7F)];
const DIGIT: &[Interval] = &[r(b'0', b'9')];
const GRAPH: &[Interval] = &[r(b'!', b'~')];
const LOWER: &[Interval] = &[r(b'a', b'z')];
const PRINT: &[Interval] = &[r(b' ', b'~')];
const PUNCT: &[Interval] = &[r(b'!', b'/'), r(b':', b'@'), r(b'[', b'`'), r(b'{', b'~')];
const SPACE: &[Interval] = &[r(b'\t', b'\r'), r(b' ', b' ')];
const UPPER: &[Interval] = &[r(b'A', b'Z')];
const WORD: &[Interval] = &[r(b'0', b'9'), r(b'A', b'Z'), r(b'_', b'_'), r(b'a', b'z')];
const XDIGIT: &[Interval] = &[r(b'0', b'9'), r(b'A', b'F'), r(b'a', b'f')];

/// Sorted, normalized ranges for `set`.
pub fn ranges(set: NamedSet) -> &'static [Interval] {
    match set {
        NamedSet::Alnum => ALNUM,
        NamedSet::Alpha => ALPHA,
        NamedSet::Ascii => ASCII,
        NamedSet::Blank => BLANK,
        NamedSet::Cntrl => CNTRL,
        NamedSet::Digit => DIGIT,
        NamedSet::Graph => GRAPH,
        NamedSet::Lower => LOWER,
        NamedSet::Print => PRINT,
        NamedSet::Punct => PUNCT,
        NamedSet::Space => SPACE,
        NamedSet::Upper => UPPER,
        NamedSet::Word => WORD,
        NamedSet::Xdigit => XDIGIT,
    }
}
