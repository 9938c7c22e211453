// models/src/medical/social_history.rs
use serde::{Deserialize, Serialize};

use crate::errors::{optional_text, require_text, ValidationResult};
use crate::medical::ToNode;
use crate::vertices::NodeType;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocialCategory {
    Smoking,
    Alcohol,
    Exercise,
    Diet,
    Occupation,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExposureStatus {
    Current,
    Former,
    Never,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SocialHistoryProperties {
    pub category: SocialCategory,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ExposureStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>, // e.g. "1 pack/day"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl ToNode for SocialHistoryProperties {
    const NODE_TYPE: NodeType = NodeType::SocialHistory;

    fn validate(&self) -> ValidationResult<()> {
        require_text("description", &self.description)?;
        optional_text("quantity", self.quantity.as_ref())?;
        optional_text("duration", self.duration.as_ref())
    }
}
