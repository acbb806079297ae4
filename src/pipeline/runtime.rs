use crate::catalog::Catalog;
use crate::error::AnalysisError;
use crate::pipeline::traits::{SequenceAligner, Transcriber};
use crate::scoring::classify::classify_pair;
use crate::scoring::report::{build_report, AnalysisReport, ReportInputs};
use crate::scoring::tokenize::tokenize_words;
use crate::types::WordVerdict;

/// Stateless scoring engine: each analysis call is a pure function of
/// (reference text, predicted text, confidence) over the read-only catalog,
/// so one analyzer can be shared across threads without coordination.
pub struct PronunciationAnalyzer {
    catalog: Catalog,
    transcriber: Option<Box<dyn Transcriber>>,
    sequence_aligner: Box<dyn SequenceAligner>,
}

pub(crate) struct PronunciationAnalyzerParts {
    pub catalog: Catalog,
    pub transcriber: Option<Box<dyn Transcriber>>,
    pub sequence_aligner: Box<dyn SequenceAligner>,
}

impl PronunciationAnalyzer {
    pub(crate) fn from_parts(parts: PronunciationAnalyzerParts) -> Self {
        Self {
            catalog: parts.catalog,
            transcriber: parts.transcriber,
            sequence_aligner: parts.sequence_aligner,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Transcribe an audio buffer through the injected acoustic backend,
    /// then score the transcript against the requested paragraph.
    pub fn analyze_audio(
        &self,
        domain: &str,
        paragraph_number: u32,
        samples: &[f32],
        sample_rate_hz: u32,
    ) -> Result<AnalysisReport, AnalysisError> {
        let transcriber = self.transcriber.as_ref().ok_or_else(|| {
            AnalysisError::runtime("transcribe audio", "no acoustic backend configured")
        })?;
        let transcription = transcriber.transcribe(samples, sample_rate_hz)?;
        self.analyze_transcript(
            domain,
            paragraph_number,
            &transcription.text,
            transcription.confidence,
        )
    }

    /// Score an already-finalized transcript against the requested paragraph.
    ///
    /// Unknown domain/paragraph keys and out-of-range confidence are errors;
    /// an empty transcript is not — it degrades to similarity 0 with every
    /// reference word reported missing.
    pub fn analyze_transcript(
        &self,
        domain: &str,
        paragraph_number: u32,
        predicted_text: &str,
        confidence: f64,
    ) -> Result<AnalysisReport, AnalysisError> {
        if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
            return Err(AnalysisError::invalid_input(format!(
                "confidence must be within [0, 1], got {confidence}"
            )));
        }

        let passage = self.catalog.passage(domain, paragraph_number)?;

        if predicted_text.trim().is_empty() {
            tracing::warn!(
                domain = passage.domain_key,
                paragraph = paragraph_number,
                "empty transcript; every reference word will be reported missing"
            );
        }

        let reference_words = tokenize_words(&passage.paragraph.text);
        let predicted_words = tokenize_words(predicted_text);
        let pairs = self.sequence_aligner.align(&reference_words, &predicted_words);
        let verdicts: Vec<WordVerdict> = pairs
            .iter()
            .map(|pair| classify_pair(pair, &self.catalog))
            .collect();

        Ok(build_report(ReportInputs {
            domain_key: passage.domain_key,
            domain_name: passage.domain_name,
            paragraph_number,
            paragraph_title: &passage.paragraph.title,
            reference_text: &passage.paragraph.text,
            predicted_text,
            confidence,
            verdicts,
            domain_tips: self.catalog.domain_tips(passage.domain_key),
        }))
    }
}
