//! Line classification: section headers versus priced product candidates.

use super::patterns::{is_space, BULLETS, DIGIT_RUN, FORCED_CATEGORY, TV_CATEGORY};

/// Lines shorter than this (after cleaning) are dropped.
pub const MIN_LINE_LEN: usize = 2;

/// Titles without digit runs must be longer than this to open a section.
pub const MIN_TITLE_LEN: usize = 4;

/// What a single input line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Opens (or reopens) the section with this uppercased name.
    Header(String),
    /// Cleaned text to hand to the price extractor.
    Candidate(String),
}

/// Trims a raw line and strips leading bullet markers.
pub fn clean_line(raw: &str) -> &str {
    let trimmed = raw.trim_matches(is_space);
    match BULLETS.find(trimmed) {
        Some(m) => &trimmed[m.end()..],
        None => trimmed,
    }
}

/// Returns true if a cleaned line opens a section.
pub fn is_header(line: &str) -> bool {
    TV_CATEGORY.is_match(line) || is_title(line) || FORCED_CATEGORY.is_match(line)
}

/// Descriptive text: no run of two or more digits and long enough to not be noise.
fn is_title(line: &str) -> bool {
    !DIGIT_RUN.is_match(line) && line.chars().count() > MIN_TITLE_LEN
}

/// Classifies one raw input line. Returns `None` for discarded lines.
pub fn classify(raw: &str) -> Option<LineKind> {
    let line = clean_line(raw);
    if line.chars().count() < MIN_LINE_LEN {
        return None;
    }

    if is_header(line) {
        Some(LineKind::Header(line.to_uppercase()))
    } else {
        Some(LineKind::Candidate(line.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(name: &str) -> Option<LineKind> {
        Some(LineKind::Header(name.to_string()))
    }

    fn candidate(text: &str) -> Option<LineKind> {
        Some(LineKind::Candidate(text.to_string()))
    }

    #[test]
    fn test_clean_line() {
        assert_eq!(clean_line("  - Samsung 55 2.500.000  "), "Samsung 55 2.500.000");
        assert_eq!(clean_line("●● Audio"), "Audio");
        assert_eq!(clean_line("*Item"), "Item");
        assert_eq!(clean_line("\tPlain\r"), "Plain");
        assert_eq!(clean_line("- "), "");
    }

    #[test]
    fn test_discards_short_lines() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("   "), None);
        assert_eq!(classify("x"), None);
        assert_eq!(classify("- 5"), None);
        assert_eq!(classify("---"), None);
    }

    #[test]
    fn test_tv_category_headers() {
        assert_eq!(classify("TV 55 pulgadas"), header("TV 55 PULGADAS"));
        assert_eq!(classify("tv 43\""), header("TV 43\""));
        assert_eq!(classify("TV50"), header("TV50"));
    }

    #[test]
    fn test_generic_title_headers() {
        assert_eq!(classify("Celulares"), header("CELULARES"));
        assert_eq!(classify("otra cosa"), header("OTRA COSA"));
        assert_eq!(classify("- Smart watch"), header("SMART WATCH"));
        // single digits do not make a price
        assert_eq!(classify("Raro 5"), header("RARO 5"));
    }

    #[test]
    fn test_title_length_boundary() {
        // four characters is too short for a title
        assert_eq!(classify("SONY"), candidate("SONY"));
        assert_eq!(classify("SONYS"), header("SONYS"));
    }

    #[test]
    fn test_forced_categories() {
        assert_eq!(classify("OPPO"), header("OPPO"));
        assert_eq!(classify("jbl"), header("JBL"));
        assert_eq!(classify("- JBL"), header("JBL"));
    }

    #[test]
    fn test_price_lines_are_candidates() {
        assert_eq!(classify("Samsung 55 2.500.000"), candidate("Samsung 55 2.500.000"));
        assert_eq!(classify("* JBL Flip 6 150$"), candidate("JBL Flip 6 150$"));
        assert_eq!(classify("AB"), candidate("AB"));
        assert_eq!(classify("Raro 05"), candidate("Raro 05"));
    }

    #[test]
    fn test_unicode_spaces() {
        assert_eq!(clean_line("\u{A0}Audio\u{A0}"), "Audio");
        assert_eq!(classify("-\u{A0}Sony"), candidate("Sony"));
        assert_eq!(classify("TV\u{A0}55"), header("TV\u{A0}55"));
        assert_eq!(classify("Parlante 150\u{A0}$"), candidate("Parlante 150\u{A0}$"));
    }

    #[test]
    fn test_length_counts_characters() {
        // five characters, seven bytes
        assert_eq!(classify("ÁUDÍO"), header("ÁUDÍO"));
        assert_eq!(classify("ÑÑ"), candidate("ÑÑ"));
    }
}
