//! Report and risk derivation
//!
//! Pure, total functions over an incident slice - no store access, no
//! hidden state, no failure modes.

use std::fmt;

use serde::Serialize;

use crate::domain::Incident;

/// Incident count below which the risk level is Low
const MODERATE_THRESHOLD: usize = 3;
/// Incident count at which the risk level becomes High
const HIGH_THRESHOLD: usize = 6;

/// Occurrence count for one normalized incident-type label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    pub label: String,
    pub count: usize,
}

/// Group incidents by type and order by descending frequency
///
/// The grouping key is the type label trimmed of surrounding whitespace and
/// upper-cased, so " fire " and "Fire" land in the same bucket. Ties keep
/// first-appearance order (stable sort).
pub fn grouped_report(incidents: &[Incident]) -> Vec<TypeCount> {
    let mut counts: Vec<TypeCount> = Vec::new();

    for incident in incidents {
        let label = incident.kind.trim().to_uppercase();
        match counts.iter_mut().find(|entry| entry.label == label) {
            Some(entry) => entry.count += 1,
            None => counts.push(TypeCount { label, count: 1 }),
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Three-tier risk classification derived from total incident count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        };
        f.write_str(label)
    }
}

/// Classify the risk level from the total incident count
pub fn risk_level(incidents: &[Incident]) -> RiskLevel {
    let count = incidents.len();
    if count < MODERATE_THRESHOLD {
        RiskLevel::Low
    } else if count < HIGH_THRESHOLD {
        RiskLevel::Moderate
    } else {
        RiskLevel::High
    }
}

/// Fixed prevention tips keyed by incident-type label
///
/// Matching is exact, case-sensitive, and untrimmed - unlike the grouped
/// report's normalized keys. The two behaviors are deliberately distinct;
/// see DESIGN.md before unifying them.
const TIP_TABLE: &[(&str, &str)] = &[
    ("Fire", "Avoid lighting candles near curtains."),
    ("Fall", "Keep hallways and stairs well lit."),
];

/// One tip per matched incident type, in tip-table order
pub fn personalized_tips(incidents: &[Incident]) -> Vec<&'static str> {
    TIP_TABLE
        .iter()
        .filter(|(kind, _)| incidents.iter().any(|incident| incident.kind == *kind))
        .map(|(_, tip)| *tip)
        .collect()
}
