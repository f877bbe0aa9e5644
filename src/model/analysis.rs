//! Domain types for the premise/conclusion decomposition of a text

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

/// A labeled premise extracted from the input text
///
/// Labels are assigned in priority order "P", "Q", "R"; premises beyond the
/// third are labeled "P4", "P5", and so on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Premise {
    pub label: String,
    pub text: String,
}

/// The single conclusion of a text, always labeled "C"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Conclusion {
    pub label: String,
    pub text: String,
}

/// Complete result of analyzing one text
///
/// Fully determined by the input text; constructed per request and discarded
/// after the response is written.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Analysis {
    /// Premises in order of appearance
    pub premises: Vec<Premise>,
    pub conclusion: Conclusion,
    /// Label → text for every premise plus the conclusion
    pub propositions: BTreeMap<String, String>,
    /// Human-readable summary of the argument shape
    pub logical_structure: String,
    /// Factual assessment placeholder; always "inconclusivo"
    pub factual: String,
}
