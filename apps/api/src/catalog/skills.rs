use std::collections::HashMap;

use crate::catalog::CatalogError;

/// Career name → required skills, each list kept in catalog order.
#[derive(Debug, Clone, Default)]
pub struct SkillRequirements {
    table: HashMap<String, Vec<String>>,
}

impl SkillRequirements {
    pub fn new(table: impl IntoIterator<Item = (String, Vec<String>)>) -> Self {
        Self {
            table: table.into_iter().collect(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let table: HashMap<String, Vec<String>> = serde_json::from_str(json)
            .map_err(|e| CatalogError::json("career skills table", e))?;
        Ok(Self { table })
    }

    /// `None` when the career is not in the table.
    pub fn required_skills(&self, career: &str) -> Option<&[String]> {
        self.table.get(career).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_order_is_preserved() {
        let table = SkillRequirements::from_json(
            r#"{"Data Scientist": ["Python", "Machine Learning", "Statistics", "SQL"]}"#,
        )
        .unwrap();
        assert_eq!(
            table.required_skills("Data Scientist").unwrap(),
            ["Python", "Machine Learning", "Statistics", "SQL"]
        );
    }

    #[test]
    fn test_lookup_is_exact() {
        let table = SkillRequirements::new([("Teacher".to_string(), vec!["Ethics".to_string()])]);
        assert!(table.required_skills("Teacher").is_some());
        assert!(table.required_skills("teacher").is_none());
    }
}
