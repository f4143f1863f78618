use once_cell::sync::Lazy;
use regex::Regex;

#[allow(clippy::expect_used)]
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern should compile"));

/// Lower-case `text` and split it into terms of two or more word characters.
///
/// Duplicates are kept; term frequency depends on them.
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN_RE
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_non_word_characters() {
        assert_eq!(
            tokenize("Jalan-Jalan ke Bali, 2024!"),
            vec!["jalan", "jalan", "ke", "bali", "2024"]
        );
    }

    #[test]
    fn drops_single_characters() {
        assert_eq!(tokenize("a b cd"), vec!["cd"]);
        assert!(tokenize("   ").is_empty());
    }
}
