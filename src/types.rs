use serde::Serialize;

/// Finalized recognizer output handed over by the acoustic collaborator.
#[derive(Debug, Clone)]
pub struct Transcription {
    pub text: String,
    /// Mean top-class probability in [0, 1].
    pub confidence: f64,
}

/// One reference word matched (or not) against the predicted sequence.
///
/// The aligner emits exactly one pair per reference word, in reference
/// order. Unmatched predicted words never appear here.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedPair {
    pub reference: String,
    /// `None` when no predicted word covers this reference position.
    pub predicted: Option<String>,
    /// Character-set Jaccard similarity in [0, 1]; 0.0 when `predicted` is `None`.
    pub similarity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueKind {
    Correct,
    Mispronounced,
    SeverelyMispronounced,
    Missing,
}

impl IssueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "CORRECT",
            Self::Mispronounced => "MISPRONOUNCED",
            Self::SeverelyMispronounced => "SEVERELY_MISPRONOUNCED",
            Self::Missing => "MISSING",
        }
    }

    pub fn is_correct(self) -> bool {
        self == Self::Correct
    }
}

/// Classifier output for a single reference word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordVerdict {
    pub word: String,
    /// The predicted word this position aligned to, or `"NOT_DETECTED"`.
    pub detected_as: String,
    /// Pair similarity rounded to 3 decimals.
    pub similarity_score: f64,
    pub issue_type: IssueKind,
    pub issue_description: &'static str,
    /// Catalog phonetic annotation; `"Not available"` on lookup miss.
    pub phonetic_pronunciation: String,
    /// Catalog pronunciation tip; generic per-word fallback on lookup miss.
    pub pronunciation_tip: String,
}
