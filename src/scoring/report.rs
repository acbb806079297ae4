use chrono::Utc;
use serde::Serialize;

use crate::scoring::score::{letter_grade, overall_score, round2, word_accuracy};
use crate::scoring::similarity::text_similarity;
use crate::types::WordVerdict;

const ANALYSIS_TYPE: &str = "multi_domain_pronunciation_analysis";

/// Complete per-call analysis document; serializes to the nested report the
/// surrounding service returns to callers.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub analysis_metadata: Metadata,
    pub overall_performance: OverallPerformance,
    pub text_analysis: TextAnalysis,
    pub word_statistics: WordStatistics,
    pub word_lists: WordLists,
    pub detailed_word_analysis: Vec<WordVerdict>,
    pub pronunciation_guidance: PronunciationGuidance,
    pub success: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Metadata {
    pub generated_at: String,
    pub engine_version: &'static str,
    pub analysis_type: &'static str,
    pub practice_session: PracticeSession,
}

#[derive(Debug, Clone, Serialize)]
pub struct PracticeSession {
    pub domain: String,
    pub domain_name: String,
    pub paragraph_number: u32,
    pub paragraph_title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverallPerformance {
    pub overall_score: f64,
    pub similarity_score: f64,
    pub confidence_score: f64,
    pub grade: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextAnalysis {
    pub reference_text: String,
    pub predicted_text: String,
    pub text_similarity_percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WordStatistics {
    pub total_word_count: usize,
    pub correct_word_count: usize,
    pub wrong_word_count: usize,
    pub word_accuracy_percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WordLists {
    pub correct_words: Vec<String>,
    pub wrong_words: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PronunciationGuidance {
    pub words_needing_practice: Vec<PracticeWord>,
    pub improvement_suggestions: Vec<String>,
    pub domain_specific_tips: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PracticeWord {
    pub word: String,
    pub phonetic: String,
    pub tip: String,
    pub current_issue: &'static str,
}

/// The document returned instead of a report when analysis fails.
#[derive(Debug, Clone, Serialize)]
pub struct FailureReport {
    pub error: String,
    pub success: bool,
}

impl FailureReport {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            success: false,
        }
    }
}

pub(crate) struct ReportInputs<'a> {
    pub domain_key: &'a str,
    pub domain_name: &'a str,
    pub paragraph_number: u32,
    pub paragraph_title: &'a str,
    pub reference_text: &'a str,
    pub predicted_text: &'a str,
    pub confidence: f64,
    pub verdicts: Vec<WordVerdict>,
    pub domain_tips: Vec<String>,
}

/// Merge classifier and scorer outputs with the catalog entry into the final
/// report. Deterministic given the same inputs, except for the timestamp.
pub(crate) fn build_report(inputs: ReportInputs<'_>) -> AnalysisReport {
    let raw_similarity = text_similarity(inputs.reference_text, inputs.predicted_text);
    let similarity = round2(raw_similarity);
    let overall = overall_score(raw_similarity, inputs.confidence);

    let total = inputs.verdicts.len();
    let correct_words: Vec<String> = inputs
        .verdicts
        .iter()
        .filter(|v| v.issue_type.is_correct())
        .map(|v| v.word.clone())
        .collect();
    let wrong_words: Vec<String> = inputs
        .verdicts
        .iter()
        .filter(|v| !v.issue_type.is_correct())
        .map(|v| v.word.clone())
        .collect();
    let accuracy = word_accuracy(correct_words.len(), total);

    let words_needing_practice: Vec<PracticeWord> = inputs
        .verdicts
        .iter()
        .filter(|v| !v.issue_type.is_correct())
        .map(|v| PracticeWord {
            word: v.word.clone(),
            phonetic: v.phonetic_pronunciation.clone(),
            tip: v.pronunciation_tip.clone(),
            current_issue: v.issue_description,
        })
        .collect();

    let improvement_suggestions = improvement_suggestions(accuracy, wrong_words.len());
    let domain_specific_tips = domain_tips(inputs.domain_tips, inputs.domain_key, wrong_words.len());

    AnalysisReport {
        analysis_metadata: Metadata {
            generated_at: Utc::now().to_rfc3339(),
            engine_version: env!("CARGO_PKG_VERSION"),
            analysis_type: ANALYSIS_TYPE,
            practice_session: PracticeSession {
                domain: inputs.domain_key.to_string(),
                domain_name: inputs.domain_name.to_string(),
                paragraph_number: inputs.paragraph_number,
                paragraph_title: inputs.paragraph_title.to_string(),
            },
        },
        overall_performance: OverallPerformance {
            overall_score: overall,
            similarity_score: similarity,
            confidence_score: round2(inputs.confidence * 100.0),
            grade: letter_grade(overall),
        },
        text_analysis: TextAnalysis {
            reference_text: inputs.reference_text.to_string(),
            predicted_text: inputs.predicted_text.to_string(),
            text_similarity_percentage: similarity,
        },
        word_statistics: WordStatistics {
            total_word_count: total,
            correct_word_count: correct_words.len(),
            wrong_word_count: wrong_words.len(),
            word_accuracy_percentage: accuracy,
        },
        word_lists: WordLists {
            correct_words,
            wrong_words,
        },
        detailed_word_analysis: inputs.verdicts,
        pronunciation_guidance: PronunciationGuidance {
            words_needing_practice,
            improvement_suggestions,
            domain_specific_tips,
        },
        success: true,
    }
}

fn improvement_suggestions(accuracy: f64, wrong_count: usize) -> Vec<String> {
    let mut suggestions = Vec::new();

    if accuracy > 80.0 {
        suggestions
            .push("Excellent pronunciation! Your speech is very clear and accurate.".to_string());
    } else if accuracy > 60.0 {
        suggestions.push(
            "Good pronunciation overall. Focus on the highlighted words for improvement."
                .to_string(),
        );
    } else {
        suggestions.push(
            "Keep practicing! Try speaking more slowly and emphasizing each syllable.".to_string(),
        );
    }

    if wrong_count > 0 {
        suggestions.push(format!(
            "Practice the {wrong_count} words that need improvement."
        ));
        suggestions.push(
            "Break difficult words into syllables and practice each part separately.".to_string(),
        );
        suggestions.push(
            "Record yourself saying individual words and compare with correct pronunciation."
                .to_string(),
        );
        suggestions.push("Practice in short 10-15 minute sessions for better retention.".to_string());
    }

    suggestions
}

fn domain_tips(mut tips: Vec<String>, domain_key: &str, wrong_count: usize) -> Vec<String> {
    if wrong_count > 0 {
        tips.push(format!(
            "Focus on {wrong_count} words that need improvement in {} context",
            domain_key.to_lowercase()
        ));
    }
    tips
}
