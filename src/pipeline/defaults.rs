use crate::pipeline::traits::SequenceAligner;
use crate::scoring::align::align_words;
use crate::types::AlignedPair;

/// Default aligner: LCS edit-script decomposition with the clamped replace
/// policy.
pub struct EditScriptAligner;

impl SequenceAligner for EditScriptAligner {
    fn align(&self, reference: &[String], predicted: &[String]) -> Vec<AlignedPair> {
        align_words(reference, predicted)
    }
}
