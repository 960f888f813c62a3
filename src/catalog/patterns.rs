//! Regular expressions for classifying and pricing list lines.
//!
//! Each pattern backs exactly one predicate of the classifier or the price
//! extractor. Matching is leftmost-first, so the lazy name group in
//! [`PRICE_TAIL`] always yields the earliest digit group that can run to the
//! end of the line.

use regex_lite::Regex;
use std::sync::LazyLock;

/// Whitespace class used in place of `\s`, which is ASCII-only here.
///
/// Covers the Unicode space separators that pasted lists carry, most often
/// the no-break space. Kept in sync with [`is_space`].
const SPACE: &str =
    r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

/// Returns true for the characters matched by the whitespace class.
pub fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{B}'
            | '\u{C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Leading bullet markers (`-`, `●`, `*`, runs thereof) plus trailing space.
pub static BULLETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^[-●*]+{space}*", space = SPACE)).unwrap());

/// Section headers naming a TV size: `TV 55`, `tv50"`, `TV 65 pulgadas`.
pub static TV_CATEGORY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r#"(?i)^tv{space}*\d{{2}}(?:["'″]| pulgadas)?"#, space = SPACE)).unwrap()
});

/// Any run of two or more digits. Lines without one are titles.
pub static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{2,}").unwrap());

/// Brand names that open a section despite being too short for a title.
pub static FORCED_CATEGORY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:OPPO|JBL)$").unwrap());

/// Trailing price: `name`, grouped digits, optional `$`/`Gs` marker, stray punctuation.
pub static PRICE_TAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)(?P<name>.*?)(?P<digits>\d{{1,3}}(?:[.,]\d{{3}})*)(?:{space}*(?P<marker>[$Gs]+))?[.,%]*{space}*$",
        space = SPACE
    ))
    .unwrap()
});
