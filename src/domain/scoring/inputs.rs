//! Read-only inputs to a scoring run.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AlternativeId, AnalysisId, CriterionId, RatingValue, Weight};

/// A candidate option being ranked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: AlternativeId,
    pub analysis_id: AnalysisId,
    pub name: String,
}

impl Alternative {
    pub fn new(id: AlternativeId, analysis_id: AnalysisId, name: impl Into<String>) -> Self {
        Self {
            id,
            analysis_id,
            name: name.into(),
        }
    }
}

/// A weighted dimension alternatives are rated on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: CriterionId,
    pub analysis_id: AnalysisId,
    pub name: String,
    pub weight: Weight,
}

impl Criterion {
    pub fn new(
        id: CriterionId,
        analysis_id: AnalysisId,
        name: impl Into<String>,
        weight: Weight,
    ) -> Self {
        Self {
            id,
            analysis_id,
            name: name.into(),
            weight,
        }
    }
}

/// One cell of the rating matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingEntry {
    pub alternative_id: AlternativeId,
    pub criterion_id: CriterionId,
    pub value: RatingValue,
}

impl RatingEntry {
    pub fn new(alternative_id: AlternativeId, criterion_id: CriterionId, value: RatingValue) -> Self {
        Self {
            alternative_id,
            criterion_id,
            value,
        }
    }
}

/// Everything one computation reads, already scoped to a single analysis.
#[derive(Debug, Clone, Default)]
pub struct ScoringInputs {
    pub alternatives: Vec<Alternative>,
    pub criteria: Vec<Criterion>,
    pub ratings: Vec<RatingEntry>,
}

impl ScoringInputs {
    /// Creates a builder for inputs belonging to `analysis_id`.
    pub fn builder(analysis_id: AnalysisId) -> ScoringInputsBuilder {
        ScoringInputsBuilder::new(analysis_id)
    }
}

/// Builder for constructing ScoringInputs instances.
#[derive(Debug)]
pub struct ScoringInputsBuilder {
    analysis_id: AnalysisId,
    alternatives: Vec<Alternative>,
    criteria: Vec<Criterion>,
    ratings: Vec<RatingEntry>,
}

impl ScoringInputsBuilder {
    /// Creates a new builder.
    pub fn new(analysis_id: AnalysisId) -> Self {
        Self {
            analysis_id,
            alternatives: Vec::new(),
            criteria: Vec::new(),
            ratings: Vec::new(),
        }
    }

    /// Appends an alternative.
    pub fn alternative(mut self, id: AlternativeId, name: impl Into<String>) -> Self {
        self.alternatives
            .push(Alternative::new(id, self.analysis_id, name));
        self
    }

    /// Appends a criterion.
    pub fn criterion(mut self, id: CriterionId, name: impl Into<String>, weight: Weight) -> Self {
        self.criteria
            .push(Criterion::new(id, self.analysis_id, name, weight));
        self
    }

    /// Appends a rating cell.
    pub fn rating(
        mut self,
        alternative_id: AlternativeId,
        criterion_id: CriterionId,
        value: RatingValue,
    ) -> Self {
        self.ratings
            .push(RatingEntry::new(alternative_id, criterion_id, value));
        self
    }

    /// Builds the inputs, preserving insertion order.
    pub fn build(self) -> ScoringInputs {
        ScoringInputs {
            alternatives: self.alternatives,
            criteria: self.criteria,
            ratings: self.ratings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_insertion_order() {
        let analysis_id = AnalysisId::new();
        let first = AlternativeId::new();
        let second = AlternativeId::new();
        let cost = CriterionId::new();

        let inputs = ScoringInputs::builder(analysis_id)
            .alternative(second, "Second")
            .alternative(first, "First")
            .criterion(cost, "Cost", Weight::try_new(100).unwrap())
            .rating(second, cost, RatingValue::try_from_i16(2).unwrap())
            .build();

        assert_eq!(inputs.alternatives[0].id, second);
        assert_eq!(inputs.alternatives[1].id, first);
        assert_eq!(inputs.criteria[0].analysis_id, analysis_id);
        assert_eq!(inputs.ratings.len(), 1);
    }

    #[test]
    fn default_inputs_are_empty() {
        let inputs = ScoringInputs::default();
        assert!(inputs.alternatives.is_empty());
        assert!(inputs.criteria.is_empty());
        assert!(inputs.ratings.is_empty());
    }
}
