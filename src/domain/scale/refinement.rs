//! Verbal grade labels and step-wise refinement of the degree of preference.

use serde::{Deserialize, Serialize};

use super::Scale;

const ORDINAL_LABELS: [&str; 2] = ["Equal", "Preferred"];

const SAATY_9_LABELS: [&str; 9] = [
    "Equal importance",
    "Very weak preference",
    "Weak preference",
    "Moderately weak preference",
    "Moderate preference",
    "Moderately strong preference",
    "Strong preference",
    "Very strong preference",
    "Extreme preference",
];

/// A finer scale to re-ask a judgment on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refinement {
    pub scale: Scale,
    pub gradations: usize,
}

/// Returns the verbal label of a 0-based grade.
///
/// Scales without a verbal vocabulary fall back to "Grade k (≈ v)".
pub fn linguistic_label(scale: Scale, gradations: usize, grade_index: usize) -> String {
    let verbal: &[&str] = match (scale, gradations) {
        (Scale::Ordinal, 2) => &ORDINAL_LABELS,
        (Scale::Saaty9, 9) => &SAATY_9_LABELS,
        _ => &[],
    };
    if let Some(label) = verbal.get(grade_index) {
        return (*label).to_string();
    }

    match scale
        .values(gradations)
        .ok()
        .and_then(|values| values.get(grade_index).copied())
    {
        Some(value) => format!("Grade {} (≈ {:.1})", grade_index + 1, value),
        None => format!("Grade {}", grade_index + 1),
    }
}

/// Suggests a finer scale for an expert who wants to state a preference
/// more precisely.
///
/// Within a scale the count grows by two up to the scale's maximum; an
/// ordinal answer moves to a three-grade Saaty-9 scale.
pub fn suggest_refinement(scale: Scale, gradations: usize) -> Option<Refinement> {
    let (_, max) = scale.gradation_range();
    if gradations < max {
        return Some(Refinement {
            scale,
            gradations: (gradations + 2).min(max),
        });
    }
    match scale {
        Scale::Ordinal => Some(Refinement {
            scale: Scale::Saaty9,
            gradations: 3,
        }),
        _ => None,
    }
}
