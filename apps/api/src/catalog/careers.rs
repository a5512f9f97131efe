//! RIASEC type table: per-dimension name, description and ranked career list.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogError;
use crate::models::riasec::Dimension;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiasecType {
    pub name: String,
    pub description: String,
    /// Top-weighted first.
    pub careers: Vec<String>,
}

/// Lookup result for a single career name.
#[derive(Debug, Clone, Serialize)]
pub struct CareerInfo {
    pub career: String,
    pub riasec_type: Dimension,
    pub type_info: RiasecType,
    pub related_careers: Vec<String>,
}

/// Dimension → careers mapping. A dimension may be absent; a present
/// dimension always has at least one career.
#[derive(Debug, Clone, Default)]
pub struct CareerTable {
    types: BTreeMap<Dimension, RiasecType>,
}

impl CareerTable {
    pub fn new(
        types: impl IntoIterator<Item = (Dimension, RiasecType)>,
    ) -> Result<Self, CatalogError> {
        let types: BTreeMap<_, _> = types.into_iter().collect();
        if let Some((dimension, _)) = types.iter().find(|(_, t)| t.careers.is_empty()) {
            return Err(CatalogError::Invalid(format!(
                "RIASEC type {dimension} has no careers"
            )));
        }
        Ok(Self { types })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let types: BTreeMap<Dimension, RiasecType> =
            serde_json::from_str(json).map_err(|e| CatalogError::json("careers table", e))?;
        Self::new(types)
    }

    pub fn get(&self, dimension: Dimension) -> Option<&RiasecType> {
        self.types.get(&dimension)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Finds the first dimension (R, I, A, S, E, C order) listing `career`.
    pub fn career_info(&self, career: &str) -> Option<CareerInfo> {
        self.types.iter().find_map(|(dimension, info)| {
            info.careers.iter().any(|c| c == career).then(|| CareerInfo {
                career: career.to_string(),
                riasec_type: *dimension,
                type_info: info.clone(),
                related_careers: info
                    .careers
                    .iter()
                    .filter(|c| c.as_str() != career)
                    .cloned()
                    .collect(),
            })
        })
    }
}
