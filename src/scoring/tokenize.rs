/// Split a text into uppercase word tokens.
///
/// Reference and predicted sequences both go through this; order is
/// significant and duplicates survive.
pub fn tokenize_words(text: &str) -> Vec<String> {
    text.to_uppercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_yields_no_tokens() {
        assert!(tokenize_words("").is_empty());
        assert!(tokenize_words("   \t\n").is_empty());
    }

    #[test]
    fn tokens_are_uppercased() {
        assert_eq!(tokenize_words("the Quick fox"), ["THE", "QUICK", "FOX"]);
    }

    #[test]
    fn repeated_whitespace_is_collapsed() {
        assert_eq!(tokenize_words("  a \t b\n\nc "), ["A", "B", "C"]);
    }

    #[test]
    fn duplicates_survive_in_order() {
        assert_eq!(tokenize_words("and again and"), ["AND", "AGAIN", "AND"]);
    }
}
