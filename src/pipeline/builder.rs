use crate::catalog::Catalog;
use crate::config::AnalyzerConfig;
use crate::error::AnalysisError;
use crate::pipeline::defaults::EditScriptAligner;
use crate::pipeline::runtime::{PronunciationAnalyzer, PronunciationAnalyzerParts};
use crate::pipeline::traits::{SequenceAligner, Transcriber};

pub struct PronunciationAnalyzerBuilder {
    config: AnalyzerConfig,
    catalog: Option<Catalog>,
    transcriber: Option<Box<dyn Transcriber>>,
    sequence_aligner: Option<Box<dyn SequenceAligner>>,
}

impl PronunciationAnalyzerBuilder {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            catalog: None,
            transcriber: None,
            sequence_aligner: None,
        }
    }

    /// Use an already-loaded catalog instead of resolving one from the
    /// config at build time.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_transcriber(mut self, transcriber: Box<dyn Transcriber>) -> Self {
        self.transcriber = Some(transcriber);
        self
    }

    pub fn with_sequence_aligner(mut self, sequence_aligner: Box<dyn SequenceAligner>) -> Self {
        self.sequence_aligner = Some(sequence_aligner);
        self
    }

    pub fn build(self) -> Result<PronunciationAnalyzer, AnalysisError> {
        let catalog = match self.catalog {
            Some(catalog) => catalog,
            None => match &self.config.catalog_path {
                Some(path) => Catalog::load(path)?,
                None => Catalog::builtin()?,
            },
        };

        Ok(PronunciationAnalyzer::from_parts(
            PronunciationAnalyzerParts {
                catalog,
                transcriber: self.transcriber,
                sequence_aligner: self
                    .sequence_aligner
                    .unwrap_or_else(|| Box::new(EditScriptAligner)),
            },
        ))
    }
}
