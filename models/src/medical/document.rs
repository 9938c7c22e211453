// models/src/medical/document.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{optional_text, require_text, ValidationResult};
use crate::medical::ToNode;
use crate::vertices::NodeType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DocumentProperties {
    pub document_type: String, // e.g. "Discharge Summary"
    pub file_name: String,
    pub upload_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ToNode for DocumentProperties {
    const NODE_TYPE: NodeType = NodeType::Document;

    fn validate(&self) -> ValidationResult<()> {
        require_text("documentType", &self.document_type)?;
        require_text("fileName", &self.file_name)?;
        optional_text("description", self.description.as_ref())
    }

    fn primary_date(&self) -> Option<NaiveDate> {
        Some(self.upload_date)
    }
}
