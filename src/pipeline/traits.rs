use crate::error::AnalysisError;
use crate::types::{AlignedPair, Transcription};

/// The acoustic collaborator: turns an audio buffer into a finalized
/// transcript plus a scalar confidence. Implementations live outside this
/// crate; tests inject scripted fakes.
pub trait Transcriber: Send + Sync {
    fn transcribe(
        &self,
        samples: &[f32],
        sample_rate_hz: u32,
    ) -> Result<Transcription, AnalysisError>;
}

/// Maps the reference word sequence onto the predicted one, emitting exactly
/// one pair per reference word in reference order.
pub trait SequenceAligner: Send + Sync {
    fn align(&self, reference: &[String], predicted: &[String]) -> Vec<AlignedPair>;
}
