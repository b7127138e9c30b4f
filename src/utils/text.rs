//! Text utilities

/// Strip every character at or below U+0020 from both ends.
///
/// Matches how the course's graders trim replies: ASCII control characters
/// count as whitespace, non-ASCII spaces do not.
pub fn trim_control(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_control() {
        assert_eq!(trim_control("  a b \r\n"), "a b");
        assert_eq!(trim_control("\u{0}\u{7}text\t"), "text");
        assert_eq!(trim_control("\u{a0}text\u{a0}"), "\u{a0}text\u{a0}");
        assert_eq!(trim_control(" \n "), "");
    }
}
