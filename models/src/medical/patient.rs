// models/src/medical/patient.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{optional_text, require_text, ValidationResult};
use crate::medical::ToNode;
use crate::vertices::NodeType;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PatientProperties {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub sex: Sex,
    pub health_card_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl ToNode for PatientProperties {
    const NODE_TYPE: NodeType = NodeType::Patient;

    fn validate(&self) -> ValidationResult<()> {
        require_text("firstName", &self.first_name)?;
        require_text("lastName", &self.last_name)?;
        require_text("healthCardNumber", &self.health_card_number)?;
        optional_text("phone", self.phone.as_ref())?;
        optional_text("email", self.email.as_ref())?;
        optional_text("address", self.address.as_ref())
    }

    fn primary_date(&self) -> Option<NaiveDate> {
        Some(self.date_of_birth)
    }
}
