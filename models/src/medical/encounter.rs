// models/src/medical/encounter.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{optional_text, require_text, ValidationResult};
use crate::medical::ToNode;
use crate::vertices::NodeType;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncounterStatus {
    Scheduled,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EncounterProperties {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub encounter_type: String, // e.g. "Follow-up", "Annual Physical"
    pub status: EncounterStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chief_complaint: Option<String>,
}

impl ToNode for EncounterProperties {
    const NODE_TYPE: NodeType = NodeType::Encounter;

    fn validate(&self) -> ValidationResult<()> {
        require_text("type", &self.encounter_type)?;
        optional_text("chiefComplaint", self.chief_complaint.as_ref())
    }

    fn primary_date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }
}
