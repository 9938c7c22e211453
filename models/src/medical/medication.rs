// models/src/medical/medication.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{optional_text, require_text, ValidationError, ValidationResult};
use crate::medical::ToNode;
use crate::vertices::NodeType;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MedicationStatus {
    Active,
    Discontinued,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MedicationProperties {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic_name: Option<String>,
    pub dosage: String,    // e.g. "1000mg"
    pub frequency: String, // e.g. "Twice daily"
    pub route: String,     // e.g. "Oral"
    #[serde(rename = "class", default, skip_serializing_if = "Option::is_none")]
    pub medication_class: Option<String>,
    pub status: MedicationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl ToNode for MedicationProperties {
    const NODE_TYPE: NodeType = NodeType::Medication;

    fn validate(&self) -> ValidationResult<()> {
        require_text("name", &self.name)?;
        require_text("dosage", &self.dosage)?;
        require_text("frequency", &self.frequency)?;
        require_text("route", &self.route)?;
        optional_text("genericName", self.generic_name.as_ref())?;
        optional_text("class", self.medication_class.as_ref())?;
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                return Err(ValidationError::InvalidDateRange {
                    start_field: "startDate",
                    end_field: "endDate",
                });
            }
        }
        Ok(())
    }

    fn primary_date(&self) -> Option<NaiveDate> {
        self.start_date
    }
}
