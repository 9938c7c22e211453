// models/src/medical/family_history.rs
use serde::{Deserialize, Serialize};

use crate::errors::{require_text, ValidationError, ValidationResult};
use crate::medical::ToNode;
use crate::vertices::NodeType;

const MAX_AGE_YEARS: u32 = 150;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelativeStatus {
    Living,
    Deceased,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FamilyHistoryProperties {
    pub relationship: String, // e.g. "Father"
    pub condition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_at_onset: Option<u32>,
    pub status: RelativeStatus,
}

impl ToNode for FamilyHistoryProperties {
    const NODE_TYPE: NodeType = NodeType::FamilyHistory;

    fn validate(&self) -> ValidationResult<()> {
        require_text("relationship", &self.relationship)?;
        require_text("condition", &self.condition)?;
        if let Some(age) = self.age_at_onset {
            if age > MAX_AGE_YEARS {
                return Err(ValidationError::OutOfRange {
                    field: "ageAtOnset",
                    value: f64::from(age),
                    min: 0.0,
                    max: f64::from(MAX_AGE_YEARS),
                });
            }
        }
        Ok(())
    }
}
