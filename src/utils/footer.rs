//! Footer copyright-year rewrite.

/// Replaces the first standalone four-digit `20xx` token in `text` with
/// `year`. The markup hardcodes the year it shipped with; matching any such
/// token (rather than one specific literal) keeps the rewrite working after
/// that literal goes stale. Text without a year token is returned unchanged.
pub fn rewrite_year(text: &str, year: u32) -> String {
    let bytes = text.as_bytes();
    for i in 0..bytes.len().saturating_sub(3) {
        if bytes[i] == b'2'
            && bytes[i + 1] == b'0'
            && bytes[i + 2].is_ascii_digit()
            && bytes[i + 3].is_ascii_digit()
        {
            // Skip matches embedded in a longer digit run.
            let digit_before = i > 0 && bytes[i - 1].is_ascii_digit();
            let digit_after = bytes.get(i + 4).is_some_and(|b| b.is_ascii_digit());
            if !digit_before && !digit_after {
                return format!("{}{}{}", &text[..i], year, &text[i + 4..]);
            }
        }
    }
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_year_token() {
        assert_eq!(
            rewrite_year("© 2025 Aditya Naman Soni. All rights reserved.", 2026),
            "© 2026 Aditya Naman Soni. All rights reserved."
        );
    }

    #[test]
    fn replaces_stale_year_too() {
        assert_eq!(rewrite_year("© 2023 A. Person", 2026), "© 2026 A. Person");
    }

    #[test]
    fn text_without_year_is_unchanged() {
        assert_eq!(rewrite_year("All rights reserved.", 2026), "All rights reserved.");
    }

    #[test]
    fn ignores_longer_digit_runs() {
        assert_eq!(rewrite_year("item 202500", 2026), "item 202500");
        assert_eq!(rewrite_year("item 12025", 2026), "item 12025");
    }

    #[test]
    fn only_first_token_is_rewritten() {
        assert_eq!(rewrite_year("2024 and 2025", 2026), "2026 and 2025");
    }
}
