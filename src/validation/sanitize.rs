//! Free-text normalization

/// Collapse whitespace runs to single spaces, trim the ends, and cut the
/// result to at most `max_len` characters
pub fn sanitize_text(value: &str, max_len: usize) -> String {
    let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    match collapsed.char_indices().nth(max_len) {
        Some((cut, _)) => collapsed[..cut].to_string(),
        None => collapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(sanitize_text("  coffee \t and\n\nbagel  ", 500), "coffee and bagel");
        assert_eq!(sanitize_text("   ", 500), "");
    }

    #[test]
    fn test_truncates_on_char_boundary() {
        assert_eq!(sanitize_text("abcdef", 3), "abc");
        assert_eq!(sanitize_text("ééééé", 2), "éé");
        assert_eq!(sanitize_text("short", 10), "short");
    }
}
