// models/src/medical/allergy.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{optional_text, require_text, ValidationResult};
use crate::medical::ToNode;
use crate::vertices::NodeType;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AllergySeverity {
    Mild,
    Moderate,
    Severe,
    #[serde(rename = "Life-threatening")]
    LifeThreatening,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AllergyProperties {
    pub allergen: String,
    pub reaction: String,
    pub severity: AllergySeverity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onset_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ToNode for AllergyProperties {
    const NODE_TYPE: NodeType = NodeType::Allergy;

    fn validate(&self) -> ValidationResult<()> {
        require_text("allergen", &self.allergen)?;
        require_text("reaction", &self.reaction)?;
        optional_text("notes", self.notes.as_ref())
    }

    fn primary_date(&self) -> Option<NaiveDate> {
        self.onset_date
    }
}
