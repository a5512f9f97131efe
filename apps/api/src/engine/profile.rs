use serde::Serialize;

use crate::catalog::careers::CareerTable;
use crate::models::riasec::{DimensionScores, PerDimension};

/// One dimension's share of the user's total score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraitProfile {
    pub score: u32,
    /// Percent of the total across all six dimensions, one decimal place.
    pub percentage: f64,
    pub name: String,
    pub description: String,
}

/// Serializes as `{"R": {..}, ..}`, or `{}` when the user scored nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PersonalityProfile {
    #[serde(flatten)]
    pub traits: Option<PerDimension<TraitProfile>>,
}

pub fn build_personality_profile(
    scores: &DimensionScores,
    careers: &CareerTable,
) -> PersonalityProfile {
    let total = scores.total();
    if total == 0 {
        return PersonalityProfile::default();
    }

    let traits = PerDimension::from_fn(|dimension| {
        let score = *scores.get(dimension);
        let percentage = (score as f64 / total as f64 * 1000.0).round() / 10.0;
        let (name, description) = match careers.get(dimension) {
            Some(info) => (info.name.clone(), info.description.clone()),
            None => (dimension.code().to_string(), String::new()),
        };
        TraitProfile {
            score,
            percentage,
            name,
            description,
        }
    });

    PersonalityProfile {
        traits: Some(traits),
    }
}
