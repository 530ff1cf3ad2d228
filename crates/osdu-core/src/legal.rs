//! Legal metadata attached to records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of a legal review, as carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegalCompliance {
    /// The record may be stored and served.
    Compliant,
    /// The record failed legal review.
    Incompliant,
}

impl fmt::Display for LegalCompliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compliant => write!(f, "compliant"),
            Self::Incompliant => write!(f, "incompliant"),
        }
    }
}

/// Legal tags, jurisdictions and compliance status of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legal {
    /// Legal tag names registered with the legal service
    pub legaltags: Vec<String>,

    /// ISO country codes with a stake in the data
    #[serde(rename = "otherRelevantDataCountries")]
    pub other_relevant_data_countries: Vec<String>,

    /// Compliance marker
    pub status: LegalCompliance,
}

impl Legal {
    /// Creates legal metadata with the given status.
    #[must_use]
    pub fn new(
        legaltags: Vec<String>,
        other_relevant_data_countries: Vec<String>,
        status: LegalCompliance,
    ) -> Self {
        Self {
            legaltags,
            other_relevant_data_countries,
            status,
        }
    }

    /// Returns true when at least one legal tag is attached.
    #[must_use]
    pub fn has_legaltags(&self) -> bool {
        !self.legaltags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_legal_wire_shape() {
        let legal = Legal::new(
            vec!["opendes-public-usa-dataset-1".to_string()],
            vec!["US".to_string()],
            LegalCompliance::Compliant,
        );

        assert_eq!(
            serde_json::to_value(&legal).unwrap(),
            json!({
                "legaltags": ["opendes-public-usa-dataset-1"],
                "otherRelevantDataCountries": ["US"],
                "status": "compliant"
            })
        );
    }

    #[test]
    fn test_has_legaltags() {
        let empty = Legal::new(vec![], vec!["US".to_string()], LegalCompliance::Incompliant);
        assert!(!empty.has_legaltags());
        assert_eq!(empty.status.to_string(), "incompliant");
    }
}
