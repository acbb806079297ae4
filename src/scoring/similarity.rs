use std::collections::HashSet;

/// Character-set Jaccard similarity between two words, case-insensitive.
///
/// Multiplicities and order are ignored; an empty word on either side scores
/// 0.0. Symmetric, and 1.0 for any non-empty word against itself.
pub fn word_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let chars_a: HashSet<char> = a.to_lowercase().chars().collect();
    let chars_b: HashSet<char> = b.to_lowercase().chars().collect();

    let intersection = chars_a.intersection(&chars_b).count();
    let union = chars_a.union(&chars_b).count();
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Whole-text similarity as a 0-100 percentage.
///
/// Blends character overlap (weight 0.4) with word overlap (weight 0.6),
/// each normalized by the size of the *reference* set rather than the union,
/// so the metric is recall-oriented: extra predicted material is not
/// penalized here. Either text empty after trimming scores 0.0.
pub fn text_similarity(reference: &str, predicted: &str) -> f64 {
    let reference = reference.trim().to_uppercase();
    let predicted = predicted.trim().to_uppercase();
    if reference.is_empty() || predicted.is_empty() {
        return 0.0;
    }

    let ref_chars: HashSet<char> = reference.chars().filter(|c| *c != ' ').collect();
    let pred_chars: HashSet<char> = predicted.chars().filter(|c| *c != ' ').collect();
    if ref_chars.is_empty() {
        return 0.0;
    }
    let char_overlap = ref_chars.intersection(&pred_chars).count() as f64 / ref_chars.len() as f64;

    let ref_words: HashSet<&str> = reference.split_whitespace().collect();
    let pred_words: HashSet<&str> = predicted.split_whitespace().collect();
    let word_overlap = if ref_words.is_empty() {
        0.0
    } else {
        ref_words.intersection(&pred_words).count() as f64 / ref_words.len() as f64
    };

    (char_overlap * 0.4 + word_overlap * 0.6) * 100.0
}
