//! Input document describing one group evaluation session.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::domain::aggregation::CompetenceMap;
use crate::domain::foundation::{Competence, ValidationError};
use crate::domain::pcm::JudgmentRecord;

/// One expert's answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertInput {
    pub expert_id: String,
    /// Full competence when absent.
    #[serde(default)]
    pub competence: Option<Competence>,
    #[serde(default)]
    pub judgments: Vec<JudgmentRecord>,
}

impl ExpertInput {
    pub fn new(expert_id: impl Into<String>, judgments: Vec<JudgmentRecord>) -> Self {
        Self {
            expert_id: expert_id.into(),
            competence: None,
            judgments,
        }
    }

    pub fn with_competence(mut self, competence: Competence) -> Self {
        self.competence = Some(competence);
        self
    }
}

/// Alternatives plus every expert's judgments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInput {
    pub alternatives: Vec<String>,
    pub experts: Vec<ExpertInput>,
    /// Session-wide coefficients; an expert's own `competence` takes precedence.
    #[serde(default)]
    pub competence_coefficients: HashMap<String, Competence>,
}

impl SessionInput {
    pub fn new(alternatives: Vec<impl Into<String>>, experts: Vec<ExpertInput>) -> Self {
        Self {
            alternatives: alternatives.into_iter().map(Into::into).collect(),
            experts,
            competence_coefficients: HashMap::new(),
        }
    }

    /// Checks the shape of the session before any matrix is built.
    ///
    /// # Errors
    /// - `InvalidFormat` for fewer than two alternatives or duplicate names
    /// - `EmptyField` when no expert is present or an expert id is blank
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.alternatives.len() < 2 {
            return Err(ValidationError::invalid_format(
                "alternatives",
                format!("at least 2 required, got {}", self.alternatives.len()),
            ));
        }
        let mut seen = HashSet::new();
        for alternative in &self.alternatives {
            if alternative.trim().is_empty() {
                return Err(ValidationError::empty_field("alternatives"));
            }
            if !seen.insert(alternative.as_str()) {
                return Err(ValidationError::invalid_format(
                    "alternatives",
                    format!("duplicate alternative '{}'", alternative),
                ));
            }
        }
        if self.experts.is_empty() {
            return Err(ValidationError::empty_field("experts"));
        }
        if self.experts.iter().any(|expert| expert.expert_id.trim().is_empty()) {
            return Err(ValidationError::empty_field("expert_id"));
        }
        Ok(())
    }

    /// Effective competence per expert.
    pub fn competence_map(&self) -> CompetenceMap {
        let mut map = self.competence_coefficients.clone();
        for expert in &self.experts {
            if let Some(competence) = expert.competence {
                map.insert(expert.expert_id.clone(), competence);
            }
        }
        map
    }
}
