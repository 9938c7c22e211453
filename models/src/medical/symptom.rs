// models/src/medical/symptom.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{optional_text, require_text, ValidationResult};
use crate::medical::{Severity, ToNode};
use crate::vertices::NodeType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SymptomProperties {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onset_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ToNode for SymptomProperties {
    const NODE_TYPE: NodeType = NodeType::Symptom;

    fn validate(&self) -> ValidationResult<()> {
        require_text("name", &self.name)?;
        optional_text("notes", self.notes.as_ref())
    }

    fn primary_date(&self) -> Option<NaiveDate> {
        self.onset_date
    }
}
