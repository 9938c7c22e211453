// models/src/medical/procedure.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{optional_text, require_text, ValidationResult};
use crate::medical::ToNode;
use crate::vertices::NodeType;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcedureStatus {
    Completed,
    Scheduled,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProcedureProperties {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>, // CPT code
    pub date: NaiveDate,
    pub status: ProcedureStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ToNode for ProcedureProperties {
    const NODE_TYPE: NodeType = NodeType::Procedure;

    fn validate(&self) -> ValidationResult<()> {
        require_text("name", &self.name)?;
        optional_text("code", self.code.as_ref())
    }

    fn primary_date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }
}
