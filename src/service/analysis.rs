//! Premise/conclusion extraction and result assembly
//!
//! Decomposes a text into labeled premises and a single labeled conclusion.
//! Pure, never-failing computation: degenerate inputs are absorbed by the
//! short-text and single-sentence guards rather than signaled as errors.

use std::collections::BTreeMap;

use crate::model::{Analysis, Conclusion, Premise};
use crate::service::segmenter::SentenceSegmenter;

/// Texts shorter than this (in chars, after trimming) cannot reliably
/// contain both a premise and a conclusion boundary
const SHORT_TEXT_THRESHOLD: usize = 10;

/// Premise labels in priority order; overflow premises get "P4", "P5", ...
const PREMISE_LABELS: [&str; 3] = ["P", "Q", "R"];

/// Label of the conclusion
const CONCLUSION_LABEL: &str = "C";

/// Conclusion placeholder for sub-threshold input
const SHORT_TEXT_CONCLUSION: &str = "Texto muito curto para análise robusta.";

/// Conclusion placeholder when no conclusion could be structurally isolated
const UNIDENTIFIED_CONCLUSION: &str = "Conclusão não identificada explicitamente.";

/// Factual assessment is not implemented; the field is a fixed placeholder
const FACTUAL_PLACEHOLDER: &str = "inconclusivo";

/// Stateless service decomposing texts into premises and a conclusion
pub struct AnalysisService {
    segmenter: SentenceSegmenter,
}

impl AnalysisService {
    pub fn new() -> Self {
        Self {
            segmenter: SentenceSegmenter::new(),
        }
    }

    /// Analyze a text into labeled premises, a conclusion, a proposition
    /// mapping and a structure summary
    ///
    /// The caller guarantees the text is non-empty after trimming; empty
    /// input is rejected at the API boundary before reaching this service.
    pub fn analyze(&self, text: &str) -> Analysis {
        let text = text.trim();

        let (premises, conclusion) = if text.chars().count() < SHORT_TEXT_THRESHOLD {
            // Too short to contain a premise/conclusion boundary
            (vec![text.to_string()], SHORT_TEXT_CONCLUSION.to_string())
        } else {
            self.extract(text)
        };

        tracing::debug!(
            premise_count = premises.len(),
            text_chars = text.chars().count(),
            "Text decomposed"
        );

        assemble(premises, conclusion)
    }

    /// Extract premise sentences and the conclusion sentence
    ///
    /// With two or more sentences, every sentence except the last is a
    /// premise and the last is the conclusion verbatim. A single sentence
    /// becomes the sole premise with a placeholder conclusion.
    fn extract(&self, text: &str) -> (Vec<String>, String) {
        let mut sentences = self.segmenter.segment(text);

        match sentences.pop() {
            Some(last) if !sentences.is_empty() => (sentences, last),
            Some(only) => (vec![only], UNIDENTIFIED_CONCLUSION.to_string()),
            // Unreachable for non-empty input; kept as a harmless fallback
            None => (
                vec![text.to_string()],
                UNIDENTIFIED_CONCLUSION.to_string(),
            ),
        }
    }
}

impl Default for AnalysisService {
    fn default() -> Self {
        Self::new()
    }
}

/// Label for the premise at the given 0-based index
fn premise_label(index: usize) -> String {
    match PREMISE_LABELS.get(index) {
        Some(label) => (*label).to_string(),
        None => format!("P{}", index + 1),
    }
}

/// Assemble the final analysis from raw premise texts and a conclusion text
///
/// Assigns labels, builds the proposition mapping (premises first, the
/// conclusion's "C" entry inserted last so a colliding label would be
/// overwritten by the conclusion) and renders the structure summary.
pub fn assemble(premise_texts: Vec<String>, conclusion_text: String) -> Analysis {
    let premises: Vec<Premise> = premise_texts
        .into_iter()
        .enumerate()
        .map(|(i, text)| Premise {
            label: premise_label(i),
            text,
        })
        .collect();

    let conclusion = Conclusion {
        label: CONCLUSION_LABEL.to_string(),
        text: conclusion_text,
    };

    let mut propositions = BTreeMap::new();
    for premise in &premises {
        propositions.insert(premise.label.clone(), premise.text.clone());
    }
    // Conclusion goes in last: on a label collision the conclusion wins
    propositions.insert(conclusion.label.clone(), conclusion.text.clone());

    let logical_structure = format!(
        "{} premissas (P, Q, R...) → 1 conclusão (C)",
        premises.len()
    );

    Analysis {
        premises,
        conclusion,
        propositions,
        logical_structure,
        factual: FACTUAL_PLACEHOLDER.to_string(),
    }
}
