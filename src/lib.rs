pub mod catalog;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod scoring;
pub mod types;

pub use catalog::{Catalog, Passage, ReferenceParagraph};
pub use config::AnalyzerConfig;
pub use error::AnalysisError;
pub use pipeline::builder::PronunciationAnalyzerBuilder;
pub use pipeline::runtime::PronunciationAnalyzer;
pub use pipeline::traits::{SequenceAligner, Transcriber};
pub use scoring::report::{AnalysisReport, FailureReport};
pub use types::{AlignedPair, IssueKind, Transcription, WordVerdict};
