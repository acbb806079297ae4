use libtest_mimic::{Arguments, Failed, Trial};
use serde::Deserialize;

use pronounce_rs::{AnalyzerConfig, PronunciationAnalyzerBuilder};

const SCENARIOS_JSON: &str = include_str!("fixtures/scenarios.json");
const SUITE_NAME: &str = "pronunciation_scoring_scenarios";
const SCORE_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Deserialize)]
struct ScenarioCase {
    id: String,
    domain: String,
    paragraph: u32,
    #[serde(default)]
    transcript: String,
    #[serde(default = "default_confidence")]
    confidence: f64,
    expect: Expectations,
}

fn default_confidence() -> f64 {
    1.0
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Expectations {
    grade: Option<String>,
    overall_score: Option<f64>,
    similarity_score: Option<f64>,
    word_accuracy: Option<f64>,
    correct_count: Option<usize>,
    wrong_count: Option<usize>,
    /// Every verdict must carry this issue type, e.g. "CORRECT" or "MISSING".
    all_issues: Option<String>,
    error_contains: Option<String>,
}

fn main() {
    let args = Arguments::from_args();

    let cases: Vec<ScenarioCase> = match serde_json::from_str(SCENARIOS_JSON) {
        Ok(cases) => cases,
        Err(err) => {
            run_setup_failure(&args, format!("failed to parse scenarios fixture: {err}"));
            return;
        }
    };

    let tests: Vec<Trial> = cases
        .into_iter()
        .map(|case| {
            let name = format!("{SUITE_NAME}::{}", case.id);
            Trial::test(name, move || run_case(&case).map_err(Failed::from))
        })
        .collect();

    libtest_mimic::run(&args, tests).exit();
}

fn run_setup_failure(args: &Arguments, message: String) {
    let test = Trial::test(format!("{SUITE_NAME}::setup"), move || {
        Err(Failed::from(message))
    });
    libtest_mimic::run(args, vec![test]).exit();
}

fn run_case(case: &ScenarioCase) -> Result<(), String> {
    let analyzer = PronunciationAnalyzerBuilder::new(AnalyzerConfig::default())
        .build()
        .map_err(|err| format!("analyzer build failed: {err}"))?;

    let result =
        analyzer.analyze_transcript(&case.domain, case.paragraph, &case.transcript, case.confidence);

    if let Some(expected) = &case.expect.error_contains {
        return match result {
            Ok(_) => Err(format!(
                "expected an error containing '{expected}', got a report"
            )),
            Err(err) if err.to_string().contains(expected) => Ok(()),
            Err(err) => Err(format!(
                "expected an error containing '{expected}', got '{err}'"
            )),
        };
    }

    let report = result.map_err(|err| format!("analysis failed: {err}"))?;

    // Structural invariants hold for every successful case regardless of the
    // per-case expectations.
    let stats = &report.word_statistics;
    if stats.correct_word_count + stats.wrong_word_count != stats.total_word_count {
        return Err(format!(
            "word counts do not round-trip: {} + {} != {}",
            stats.correct_word_count, stats.wrong_word_count, stats.total_word_count
        ));
    }
    if report.detailed_word_analysis.len() != stats.total_word_count {
        return Err(format!(
            "verdict count {} does not match total word count {}",
            report.detailed_word_analysis.len(),
            stats.total_word_count
        ));
    }
    if report.word_lists.correct_words.len() != stats.correct_word_count
        || report.word_lists.wrong_words.len() != stats.wrong_word_count
    {
        return Err("word lists disagree with word statistics".to_string());
    }
    if !report.success {
        return Err("successful analysis must set success = true".to_string());
    }

    let expect = &case.expect;
    if let Some(grade) = &expect.grade {
        let actual = report.overall_performance.grade;
        if actual != grade.as_str() {
            return Err(format!("grade: expected {grade}, got {actual}"));
        }
    }
    check_score(
        "overall_score",
        expect.overall_score,
        report.overall_performance.overall_score,
    )?;
    check_score(
        "similarity_score",
        expect.similarity_score,
        report.overall_performance.similarity_score,
    )?;
    check_score(
        "word_accuracy",
        expect.word_accuracy,
        stats.word_accuracy_percentage,
    )?;
    check_count("correct_count", expect.correct_count, stats.correct_word_count)?;
    check_count("wrong_count", expect.wrong_count, stats.wrong_word_count)?;

    if let Some(issue) = &expect.all_issues {
        for verdict in &report.detailed_word_analysis {
            let actual = verdict.issue_type.as_str();
            if actual != issue.as_str() {
                return Err(format!(
                    "word '{}': expected issue {issue}, got {actual}",
                    verdict.word
                ));
            }
        }
    }

    Ok(())
}

fn check_score(label: &str, expected: Option<f64>, actual: f64) -> Result<(), String> {
    if let Some(expected) = expected {
        if (expected - actual).abs() > SCORE_TOLERANCE {
            return Err(format!("{label}: expected {expected}, got {actual}"));
        }
    }
    Ok(())
}

fn check_count(label: &str, expected: Option<usize>, actual: usize) -> Result<(), String> {
    if let Some(expected) = expected {
        if expected != actual {
            return Err(format!("{label}: expected {expected}, got {actual}"));
        }
    }
    Ok(())
}
