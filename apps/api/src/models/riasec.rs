//! RIASEC personality dimensions and fixed six-field per-dimension records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the six RIASEC axes. Declaration order (R, I, A, S, E, C) is the
/// tie-break order everywhere dimensions are ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "R")]
    Realistic,
    #[serde(rename = "I")]
    Investigative,
    #[serde(rename = "A")]
    Artistic,
    #[serde(rename = "S")]
    Social,
    #[serde(rename = "E")]
    Enterprising,
    #[serde(rename = "C")]
    Conventional,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::Realistic,
        Dimension::Investigative,
        Dimension::Artistic,
        Dimension::Social,
        Dimension::Enterprising,
        Dimension::Conventional,
    ];

    /// Single-letter code used in catalogs and JSON payloads.
    pub fn code(self) -> &'static str {
        match self {
            Dimension::Realistic => "R",
            Dimension::Investigative => "I",
            Dimension::Artistic => "A",
            Dimension::Social => "S",
            Dimension::Enterprising => "E",
            Dimension::Conventional => "C",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown RIASEC dimension code '{0}'")]
pub struct UnknownDimension(pub String);

impl FromStr for Dimension {
    type Err = UnknownDimension;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDimension(s.to_string()))
    }
}

/// A value for each of the six dimensions. Serializes as `{"R":..,"I":..,..}`;
/// dimensions missing from input deserialize to `T::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerDimension<T> {
    #[serde(rename = "R", default)]
    pub realistic: T,
    #[serde(rename = "I", default)]
    pub investigative: T,
    #[serde(rename = "A", default)]
    pub artistic: T,
    #[serde(rename = "S", default)]
    pub social: T,
    #[serde(rename = "E", default)]
    pub enterprising: T,
    #[serde(rename = "C", default)]
    pub conventional: T,
}

impl<T> PerDimension<T> {
    pub fn from_fn(mut f: impl FnMut(Dimension) -> T) -> Self {
        Self {
            realistic: f(Dimension::Realistic),
            investigative: f(Dimension::Investigative),
            artistic: f(Dimension::Artistic),
            social: f(Dimension::Social),
            enterprising: f(Dimension::Enterprising),
            conventional: f(Dimension::Conventional),
        }
    }

    pub fn get(&self, dimension: Dimension) -> &T {
        match dimension {
            Dimension::Realistic => &self.realistic,
            Dimension::Investigative => &self.investigative,
            Dimension::Artistic => &self.artistic,
            Dimension::Social => &self.social,
            Dimension::Enterprising => &self.enterprising,
            Dimension::Conventional => &self.conventional,
        }
    }

    pub fn get_mut(&mut self, dimension: Dimension) -> &mut T {
        match dimension {
            Dimension::Realistic => &mut self.realistic,
            Dimension::Investigative => &mut self.investigative,
            Dimension::Artistic => &mut self.artistic,
            Dimension::Social => &mut self.social,
            Dimension::Enterprising => &mut self.enterprising,
            Dimension::Conventional => &mut self.conventional,
        }
    }

    /// Iterates in declaration order (R, I, A, S, E, C).
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &T)> + '_ {
        Dimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }
}

/// Six RIASEC totals. Every dimension is always present.
pub type DimensionScores = PerDimension<u32>;

impl DimensionScores {
    /// Adds another score record field-by-field, saturating at `u32::MAX`.
    pub fn accumulate(&mut self, contribution: &DimensionScores) {
        for dimension in Dimension::ALL {
            let total = self.get_mut(dimension);
            *total = total.saturating_add(*contribution.get(dimension));
        }
    }

    pub fn total(&self) -> u64 {
        self.iter().map(|(_, score)| u64::from(*score)).sum()
    }

    pub fn max_score(&self) -> u32 {
        self.iter().map(|(_, score)| *score).max().unwrap_or(0)
    }
}
