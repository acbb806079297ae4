use crate::catalog::Catalog;
use crate::scoring::score::round3;
use crate::types::{AlignedPair, IssueKind, WordVerdict};

/// Similarity above this is considered correctly pronounced.
const CORRECT_THRESHOLD: f64 = 0.7;
/// Similarity above this (but not above `CORRECT_THRESHOLD`) is merely unclear.
const UNCLEAR_THRESHOLD: f64 = 0.3;

pub const NOT_DETECTED: &str = "NOT_DETECTED";

/// Bucket an aligned pair into an issue category and attach the catalog's
/// phonetic annotation and pronunciation tip. Lookup misses resolve to
/// fallback values; this never fails.
pub fn classify_pair(pair: &AlignedPair, catalog: &Catalog) -> WordVerdict {
    let (issue_type, issue_description) = match &pair.predicted {
        None => (IssueKind::Missing, "Word not detected in speech"),
        Some(_) if pair.similarity > CORRECT_THRESHOLD => {
            (IssueKind::Correct, "Correctly pronounced")
        }
        Some(_) if pair.similarity > UNCLEAR_THRESHOLD => {
            (IssueKind::Mispronounced, "Pronunciation unclear")
        }
        Some(_) => (IssueKind::SeverelyMispronounced, "Significantly mispronounced"),
    };

    WordVerdict {
        word: pair.reference.clone(),
        detected_as: pair
            .predicted
            .clone()
            .unwrap_or_else(|| NOT_DETECTED.to_string()),
        similarity_score: round3(pair.similarity),
        issue_type,
        issue_description,
        phonetic_pronunciation: catalog.phonetic(&pair.reference).to_string(),
        pronunciation_tip: catalog.word_tip(&pair.reference),
    }
}
