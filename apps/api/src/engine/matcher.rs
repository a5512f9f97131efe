//! Career matcher: ranks careers from dimension totals using the RIASEC type table.
//!
//! Algorithm:
//! 1. Rank dimensions by score, descending (ties keep R, I, A, S, E, C order)
//! 2. All-zero totals → `CareerMatches::Fallback` with a fixed generic list
//! 3. Walk ranked dimensions with score > 0, taking up to 3 careers each,
//!    skipping careers already collected; percentage = score / max × 100
//! 4. Stop at `top_n` careers

use serde::Serialize;
use tracing::debug;

use crate::catalog::careers::CareerTable;
use crate::models::riasec::{Dimension, DimensionScores};

/// Returned when no dimension has a positive score. Not derived from data.
pub const FALLBACK_CAREERS: [&str; 3] = ["Software Engineer", "Data Analyst", "Product Manager"];

pub const DEFAULT_TOP_CAREERS: usize = 5;

/// Careers pulled from any single dimension.
const CAREERS_PER_DIMENSION: usize = 3;

/// A career reached through one dimension of the user's profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerMatch {
    pub career: String,
    pub riasec_type: Dimension,
    pub type_name: String,
    pub description: String,
    pub score: u32,
    /// 0 – 100, relative to the user's strongest dimension.
    pub match_percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CareerMatches {
    Ranked(Vec<CareerMatch>),
    /// Every dimension scored 0.
    Fallback(Vec<String>),
}

impl CareerMatches {
    pub fn career_names(&self) -> Vec<String> {
        match self {
            CareerMatches::Ranked(matches) => matches.iter().map(|m| m.career.clone()).collect(),
            CareerMatches::Fallback(careers) => careers.clone(),
        }
    }

    /// Detailed matches; empty on the fallback path.
    pub fn ranked(&self) -> &[CareerMatch] {
        match self {
            CareerMatches::Ranked(matches) => matches,
            CareerMatches::Fallback(_) => &[],
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, CareerMatches::Fallback(_))
    }
}

/// Dimensions sorted by score, descending. Stable, so ties keep declaration order.
pub fn rank_dimensions(scores: &DimensionScores) -> Vec<(Dimension, u32)> {
    let mut ranked: Vec<(Dimension, u32)> = scores.iter().map(|(d, s)| (d, *s)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

pub fn match_careers(scores: &DimensionScores, table: &CareerTable, top_n: usize) -> CareerMatches {
    let max_score = scores.max_score();
    if max_score == 0 {
        debug!("All RIASEC scores are zero, using fallback careers");
        return CareerMatches::Fallback(FALLBACK_CAREERS.iter().map(|c| c.to_string()).collect());
    }

    let mut matches: Vec<CareerMatch> = Vec::new();

    for (dimension, score) in rank_dimensions(scores) {
        if matches.len() >= top_n || score == 0 {
            break;
        }

        let Some(riasec_type) = table.get(dimension) else {
            debug!("No careers mapped for dimension {dimension}, skipping");
            continue;
        };

        let match_percentage = (f64::from(score) / f64::from(max_score) * 100.0).min(100.0);

        for career in riasec_type.careers.iter().take(CAREERS_PER_DIMENSION) {
            if matches.len() >= top_n {
                break;
            }
            if matches.iter().any(|m| &m.career == career) {
                continue;
            }
            matches.push(CareerMatch {
                career: career.clone(),
                riasec_type: dimension,
                type_name: riasec_type.name.clone(),
                description: riasec_type.description.clone(),
                score,
                match_percentage,
            });
        }
    }

    CareerMatches::Ranked(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::careers::RiasecType;

    fn riasec_type(name: &str, careers: &[&str]) -> RiasecType {
        RiasecType {
            name: name.to_string(),
            description: format!("{name} description"),
            careers: careers.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn make_table() -> CareerTable {
        CareerTable::new([
            (
                Dimension::Realistic,
                riasec_type("Realistic", &["Mechanic", "Engineer", "Architect", "Farmer", "Pilot"]),
            ),
            (
                Dimension::Investigative,
                riasec_type("Investigative", &["Scientist", "Researcher", "Engineer", "Analyst"]),
            ),
            (
                Dimension::Artistic,
                riasec_type("Artistic", &["Artist", "Designer", "Writer"]),
            ),
            (
                Dimension::Social,
                riasec_type("Social", &["Teacher", "Counselor", "Nurse"]),
            ),
        ])
        .unwrap()
    }

    fn scores(values: [u32; 6]) -> DimensionScores {
        DimensionScores::from_fn(|d| {
            let index = Dimension::ALL.iter().position(|x| *x == d).unwrap();
            values[index]
        })
    }

    #[test]
    fn test_top_dimension_careers_first_with_relative_percentages() {
        let result = match_careers(&scores([5, 3, 0, 0, 0, 0]), &make_table(), 5);
        let ranked = result.ranked();

        assert_eq!(ranked.len(), 5);
        let names: Vec<_> = ranked.iter().map(|m| m.career.as_str()).collect();
        assert_eq!(
            names,
            vec!["Mechanic", "Engineer", "Architect", "Scientist", "Researcher"]
        );
        assert!(ranked[..3]
            .iter()
            .all(|m| m.riasec_type == Dimension::Realistic && m.match_percentage == 100.0));
        assert!(ranked[3..]
            .iter()
            .all(|m| (m.match_percentage - 60.0).abs() < 1e-9));
        assert_eq!(ranked[3].type_name, "Investigative");
        assert_eq!(ranked[3].score, 3);
    }

    #[test]
    fn test_all_zero_scores_fall_back() {
        let result = match_careers(&DimensionScores::default(), &make_table(), 5);
        assert!(result.is_fallback());
        assert_eq!(
            result.career_names(),
            vec!["Software Engineer", "Data Analyst", "Product Manager"]
        );
        assert!(result.ranked().is_empty());
    }

    #[test]
    fn test_duplicate_career_across_dimensions_is_skipped() {
        // "Engineer" appears under R and I; only the R entry survives.
        let result = match_careers(&scores([4, 4, 0, 0, 0, 0]), &make_table(), 10);
        let engineers: Vec<_> = result
            .ranked()
            .iter()
            .filter(|m| m.career == "Engineer")
            .collect();
        assert_eq!(engineers.len(), 1);
        assert_eq!(engineers[0].riasec_type, Dimension::Realistic);
        // I contributes Scientist, Researcher only (Engineer was its third).
        assert_eq!(result.ranked().len(), 5);
    }

    #[test]
    fn test_ties_keep_declaration_order() {
        let result = match_careers(&scores([0, 0, 2, 2, 0, 0]), &make_table(), 4);
        let names = result.career_names();
        assert_eq!(names, vec!["Artist", "Designer", "Writer", "Teacher"]);
    }

    #[test]
    fn test_unmapped_dimension_is_skipped() {
        // E and C have no table entry.
        let result = match_careers(&scores([0, 0, 0, 1, 9, 7]), &make_table(), 5);
        assert!(!result.is_fallback());
        let ranked = result.ranked();
        assert_eq!(ranked.len(), 3);
        assert!(ranked.iter().all(|m| m.riasec_type == Dimension::Social));
        assert!((ranked[0].match_percentage - 100.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_score_dimensions_contribute_nothing() {
        let result = match_careers(&scores([0, 1, 0, 0, 0, 0]), &make_table(), 10);
        assert_eq!(result.ranked().len(), 3);
    }

    #[test]
    fn test_result_never_exceeds_top_n_and_percentages_bounded() {
        for top_n in 0..8 {
            let result = match_careers(&scores([3, 7, 1, 5, 2, 9]), &make_table(), top_n);
            let ranked = result.ranked();
            assert!(ranked.len() <= top_n);
            assert!(ranked
                .iter()
                .all(|m| (0.0..=100.0).contains(&m.match_percentage)));
        }
    }

    #[test]
    fn test_rank_dimensions_is_stable() {
        let ranked = rank_dimensions(&scores([1, 3, 3, 0, 1, 3]));
        let order: Vec<_> = ranked.iter().map(|(d, _)| d.code()).collect();
        assert_eq!(order, vec!["I", "A", "C", "R", "E", "S"]);
    }

    #[test]
    fn test_match_serializes_camel_case() {
        let result = match_careers(&scores([1, 0, 0, 0, 0, 0]), &make_table(), 1);
        let json = serde_json::to_value(&result.ranked()[0]).unwrap();
        assert_eq!(json["riasecType"], "R");
        assert_eq!(json["typeName"], "Realistic");
        assert_eq!(json["matchPercentage"], 100.0);
    }
}
