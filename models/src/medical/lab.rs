// models/src/medical/lab.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{optional_text, require_text, ValidationResult};
use crate::medical::ToNode;
use crate::vertices::NodeType;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabStatus {
    Normal,
    Abnormal,
    Critical,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LabProperties {
    pub test_name: String,
    /// Result as reported, e.g. "7.2" or "Positive".
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_range: Option<String>, // e.g. "<7.0", "0.4-4.0"
    pub status: LabStatus,
    pub date: NaiveDate,
}

impl ToNode for LabProperties {
    const NODE_TYPE: NodeType = NodeType::Lab;

    fn validate(&self) -> ValidationResult<()> {
        require_text("testName", &self.test_name)?;
        require_text("value", &self.value)?;
        optional_text("unit", self.unit.as_ref())?;
        optional_text("referenceRange", self.reference_range.as_ref())
    }

    fn primary_date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }
}
