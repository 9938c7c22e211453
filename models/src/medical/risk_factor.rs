// models/src/medical/risk_factor.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{optional_text, require_text, ValidationError, ValidationResult};
use crate::medical::ToNode;
use crate::vertices::NodeType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RiskFactorProperties {
    pub risk_type: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exposure_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl ToNode for RiskFactorProperties {
    const NODE_TYPE: NodeType = NodeType::RiskFactor;

    fn validate(&self) -> ValidationResult<()> {
        require_text("riskType", &self.risk_type)?;
        require_text("description", &self.description)?;
        optional_text("exposureLevel", self.exposure_level.as_ref())?;
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
