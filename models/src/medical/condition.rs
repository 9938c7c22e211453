// models/src/medical/condition.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{optional_text, require_text, ValidationResult};
use crate::medical::{ClinicalStatus, Severity, ToNode};
use crate::vertices::NodeType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConditionProperties {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icd_code: Option<String>, // e.g. "E11"
    pub status: ClinicalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onset_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>, // e.g. "Cardiovascular", "Endocrine"
}

impl ConditionProperties {
    pub fn is_active(&self) -> bool {
        self.status == ClinicalStatus::Active
    }
}

impl ToNode for ConditionProperties {
    const NODE_TYPE: NodeType = NodeType::Condition;

    fn validate(&self) -> ValidationResult<()> {
        require_text("name", &self.name)?;
        optional_text("icdCode", self.icd_code.as_ref())?;
        optional_text("category", self.category.as_ref())
    }

    fn primary_date(&self) -> Option<NaiveDate> {
        self.onset_date
    }
}
