//! Name search criteria.

use serde::{Deserialize, Serialize};

/// Criteria for searching owners by name fragments.
///
/// Both fields default to the empty string, which means "no filter on
/// this field". Searching with both fields empty matches every owner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchCriteria {
    /// Family-name fragment. Empty means wildcard.
    pub last_name: String,
    /// Given-name fragment. Empty means wildcard.
    pub first_name: String,
}

impl SearchCriteria {
    /// True when neither field constrains the search.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.last_name.is_empty() && self.first_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_criteria_is_unfiltered() {
        assert!(SearchCriteria::default().is_unfiltered());
    }

    #[test]
    fn test_criteria_with_last_name_is_filtered() {
        let criteria = SearchCriteria {
            last_name: "Franklin".to_string(),
            ..Default::default()
        };
        assert!(!criteria.is_unfiltered());
    }
}
