use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::AnalysisError;

const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

pub const PHONETIC_FALLBACK: &str = "Not available";
const GENERIC_DOMAIN_TIP: &str = "Practice pronunciation with focus on clarity and accuracy";

/// A fixed target paragraph the speaker is asked to read. Text is uppercase,
/// whitespace-separated words; never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReferenceParagraph {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Domain {
    pub name: String,
    pub paragraphs: HashMap<u32, ReferenceParagraph>,
    #[serde(default)]
    pub tips: Vec<String>,
}

/// Resolved (domain, paragraph) lookup, borrowing from the catalog.
#[derive(Debug, Clone, Copy)]
pub struct Passage<'a> {
    pub domain_key: &'a str,
    pub domain_name: &'a str,
    pub paragraph_number: u32,
    pub paragraph: &'a ReferenceParagraph,
}

/// Read-only reference content and lookup tables: practice domains with
/// their paragraphs, the phonetic dictionary, per-word pronunciation tips
/// and per-domain coaching tips.
///
/// Loaded once at startup and shared by reference; no interior mutability.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    domains: HashMap<String, Domain>,
    phonetics: HashMap<String, String>,
    word_tips: HashMap<String, String>,
}

impl Catalog {
    /// The catalog compiled into the crate (`data/catalog.json`).
    pub fn builtin() -> Result<Self, AnalysisError> {
        serde_json::from_str(EMBEDDED_CATALOG)
            .map_err(|e| AnalysisError::json("parse embedded catalog.json", e))
    }

    pub fn load(path: &Path) -> Result<Self, AnalysisError> {
        let data =
            std::fs::read_to_string(path).map_err(|e| AnalysisError::io("read catalog.json", e))?;
        serde_json::from_str(&data).map_err(|e| AnalysisError::json("parse catalog.json", e))
    }

    /// Resolve a (domain, paragraph number) key. Domain keys match
    /// case-insensitively; unknown keys are the caller-facing error of the
    /// scoring path.
    pub fn passage(&self, domain: &str, paragraph_number: u32) -> Result<Passage<'_>, AnalysisError> {
        let key = domain.to_uppercase();
        let (canonical, dom) = self
            .domains
            .get_key_value(&key)
            .ok_or_else(|| AnalysisError::unknown_passage(format!("Domain '{key}' not found")))?;
        let paragraph = dom.paragraphs.get(&paragraph_number).ok_or_else(|| {
            AnalysisError::unknown_passage(format!(
                "Paragraph {paragraph_number} not found in {canonical} domain"
            ))
        })?;
        Ok(Passage {
            domain_key: canonical.as_str(),
            domain_name: dom.name.as_str(),
            paragraph_number,
            paragraph,
        })
    }

    /// Phonetic annotation for an uppercase word; total, falls back to
    /// [`PHONETIC_FALLBACK`] on a miss.
    pub fn phonetic(&self, word: &str) -> &str {
        self.phonetics
            .get(word)
            .map(String::as_str)
            .unwrap_or(PHONETIC_FALLBACK)
    }

    /// Pronunciation tip for an uppercase word; total, falls back to a
    /// generic per-word suggestion on a miss.
    pub fn word_tip(&self, word: &str) -> String {
        self.word_tips.get(word).cloned().unwrap_or_else(|| {
            format!("Practice pronouncing '{word}' clearly, breaking it into syllables")
        })
    }

    /// Coaching tips for a domain; total, unknown keys get a single generic
    /// tip rather than an error.
    pub fn domain_tips(&self, domain: &str) -> Vec<String> {
        match self.domains.get(&domain.to_uppercase()) {
            Some(dom) if !dom.tips.is_empty() => dom.tips.clone(),
            _ => {
                tracing::debug!(domain, "no domain tips in catalog, using generic tip");
                vec![GENERIC_DOMAIN_TIP.to_string()]
            }
        }
    }

    pub fn domain_keys(&self) -> impl Iterator<Item = &str> {
        self.domains.keys().map(String::as_str)
    }
}
