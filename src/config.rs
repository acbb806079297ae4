use std::path::PathBuf;

/// Analyzer construction options.
///
/// The catalog is the only configurable collaborator data: `None` uses the
/// catalog compiled into the crate, `Some(path)` loads a JSON override with
/// the same schema.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfig {
    pub catalog_path: Option<PathBuf>,
}
