// models/src/medical/diagnosis.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{require_text, ValidationResult};
use crate::medical::{ClinicalStatus, ToNode};
use crate::vertices::NodeType;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosisRank {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DiagnosisProperties {
    pub diagnosis_name: String,
    pub icd_code: String,
    pub diagnosis_date: NaiveDate,
    #[serde(rename = "type")]
    pub rank: DiagnosisRank,
    pub status: ClinicalStatus,
}

impl ToNode for DiagnosisProperties {
    const NODE_TYPE: NodeType = NodeType::Diagnosis;

    fn validate(&self) -> ValidationResult<()> {
        require_text("diagnosisName", &self.diagnosis_name)?;
        require_text("icdCode", &self.icd_code)
    }

    fn primary_date(&self) -> Option<NaiveDate> {
        Some(self.diagnosis_date)
    }
}
