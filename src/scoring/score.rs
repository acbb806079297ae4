/// Weight of the whole-text similarity in the blended overall score.
const SIMILARITY_WEIGHT: f64 = 0.7;
/// Weight of the acoustic confidence in the blended overall score.
const CONFIDENCE_WEIGHT: f64 = 0.3;

/// Blend whole-text similarity (0-100) with acoustic confidence (0-1) into
/// the overall score, rounded to 2 decimals.
pub fn overall_score(similarity_pct: f64, confidence: f64) -> f64 {
    round2(similarity_pct * SIMILARITY_WEIGHT + confidence * 100.0 * CONFIDENCE_WEIGHT)
}

/// Letter grade for an overall score; band lower bounds are inclusive.
pub fn letter_grade(score: f64) -> &'static str {
    if score >= 90.0 {
        "A"
    } else if score >= 80.0 {
        "B"
    } else if score >= 70.0 {
        "C"
    } else if score >= 60.0 {
        "D"
    } else {
        "F"
    }
}

/// Percentage of reference words pronounced correctly, rounded to 2
/// decimals; 0 for an empty reference rather than a division fault.
pub fn word_accuracy(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(correct as f64 / total as f64 * 100.0)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
