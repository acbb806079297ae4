use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;

use pronounce_rs::{
    AnalyzerConfig, FailureReport, PronunciationAnalyzer, PronunciationAnalyzerBuilder,
};

#[path = "pronunciation_report/json_report_formatter.rs"]
mod json_report_formatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    /// One line per case: grade, overall score, accuracy, wrong-word count.
    Summary,
}

#[derive(Debug, Parser)]
#[command(name = "pronunciation_report")]
#[command(about = "Grade recognized transcripts against reference paragraphs")]
struct Args {
    /// Practice domain key, e.g. SOCIAL (case-insensitive).
    #[arg(long, env = "PRONOUNCE_REPORT_DOMAIN")]
    domain: Option<String>,
    /// Paragraph number within the domain.
    #[arg(long, env = "PRONOUNCE_REPORT_PARAGRAPH")]
    paragraph: Option<u32>,
    /// Recognized transcript for a single case.
    #[arg(long)]
    transcript: Option<String>,
    /// Acoustic confidence in [0, 1] for a single case.
    #[arg(long, default_value_t = 1.0)]
    confidence: f64,
    /// JSON array of cases for batch mode.
    #[arg(long, env = "PRONOUNCE_REPORT_CASES_FILE", conflicts_with = "transcript")]
    cases_file: Option<PathBuf>,
    /// Catalog JSON overriding the embedded one.
    #[arg(long, env = "PRONOUNCE_REPORT_CATALOG")]
    catalog: Option<PathBuf>,
    /// Output file (single case) or directory (batch mode); stdout when omitted.
    #[arg(long, env = "PRONOUNCE_REPORT_OUT")]
    out: Option<PathBuf>,
    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Debug, Deserialize)]
struct TranscriptCase {
    id: String,
    domain: String,
    paragraph: u32,
    transcript: String,
    #[serde(default = "default_confidence")]
    confidence: f64,
}

fn default_confidence() -> f64 {
    1.0
}

fn main() {
    let args = Args::parse();
    if let Err(message) = run(args) {
        eprintln!("pronunciation_report: {message}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), String> {
    let config = AnalyzerConfig {
        catalog_path: args.catalog.clone(),
    };
    let analyzer = PronunciationAnalyzerBuilder::new(config)
        .build()
        .map_err(|err| format!("failed to build analyzer: {err}"))?;

    if let Some(cases_file) = args.cases_file.clone() {
        return run_batch(&analyzer, &args, &cases_file);
    }

    let domain = args.domain.as_deref().ok_or("--domain is required")?;
    let paragraph = args.paragraph.ok_or("--paragraph is required")?;
    let transcript = args
        .transcript
        .as_deref()
        .ok_or("--transcript is required (or use --cases-file)")?;

    let document = analyze_document(&analyzer, domain, paragraph, transcript, args.confidence)?;
    let label = format!("{domain}/{paragraph}");
    match args.format {
        OutputFormat::Json => match &args.out {
            Some(path) => json_report_formatter::write_document(path, &document),
            None => {
                let pretty = serde_json::to_string_pretty(&document)
                    .map_err(|err| format!("failed to serialize report: {err}"))?;
                println!("{pretty}");
                Ok(())
            }
        },
        OutputFormat::Summary => {
            println!("{}", summary_line(&label, &document));
            Ok(())
        }
    }
}

fn run_batch(
    analyzer: &PronunciationAnalyzer,
    args: &Args,
    cases_file: &PathBuf,
) -> Result<(), String> {
    let data = fs::read_to_string(cases_file)
        .map_err(|err| format!("failed to read cases file '{}': {err}", cases_file.display()))?;
    let cases: Vec<TranscriptCase> = serde_json::from_str(&data)
        .map_err(|err| format!("failed to parse cases file '{}': {err}", cases_file.display()))?;
    if cases.is_empty() {
        return Err(format!("cases file '{}' contains no cases", cases_file.display()));
    }

    let progress = ProgressBar::new(cases.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
            .map_err(|err| format!("invalid progress template: {err}"))?,
    );

    for case in &cases {
        progress.set_message(case.id.clone());
        let document = analyze_document(
            analyzer,
            &case.domain,
            case.paragraph,
            &case.transcript,
            case.confidence,
        )?;
        match args.format {
            OutputFormat::Json => match &args.out {
                Some(out_dir) => {
                    let path = out_dir.join(format!("{}.json", case.id));
                    json_report_formatter::write_document(&path, &document)?;
                }
                None => {
                    let line = serde_json::to_string(&document)
                        .map_err(|err| format!("failed to serialize report: {err}"))?;
                    progress.println(line);
                }
            },
            OutputFormat::Summary => progress.println(summary_line(&case.id, &document)),
        }
        progress.inc(1);
    }
    progress.finish_and_clear();
    Ok(())
}

/// Analysis failures become failure documents rather than aborting the run;
/// only argument and I/O problems bubble up as hard errors.
fn analyze_document(
    analyzer: &PronunciationAnalyzer,
    domain: &str,
    paragraph: u32,
    transcript: &str,
    confidence: f64,
) -> Result<serde_json::Value, String> {
    let value = match analyzer.analyze_transcript(domain, paragraph, transcript, confidence) {
        Ok(report) => serde_json::to_value(&report),
        Err(err) => serde_json::to_value(FailureReport::new(err.to_string())),
    };
    value.map_err(|err| format!("failed to serialize report: {err}"))
}

fn summary_line(id: &str, document: &serde_json::Value) -> String {
    if document["success"].as_bool().unwrap_or(false) {
        format!(
            "{id}: grade {} overall {} accuracy {}% wrong {}",
            document["overall_performance"]["grade"].as_str().unwrap_or("?"),
            document["overall_performance"]["overall_score"],
            document["word_statistics"]["word_accuracy_percentage"],
            document["word_statistics"]["wrong_word_count"],
        )
    } else {
        format!(
            "{id}: FAILED: {}",
            document["error"].as_str().unwrap_or("unknown error")
        )
    }
}
