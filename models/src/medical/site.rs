// models/src/medical/site.rs
use serde::{Deserialize, Serialize};

use crate::errors::{optional_text, require_text, ValidationResult};
use crate::medical::ToNode;
use crate::vertices::NodeType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteProperties {
    pub name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
}

impl ToNode for SiteProperties {
    const NODE_TYPE: NodeType = NodeType::Site;

    fn validate(&self) -> ValidationResult<()> {
        require_text("name", &self.name)?;
        require_text("address", &self.address)?;
        optional_text("phone", self.phone.as_ref())?;
        optional_text("fax", self.fax.as_ref())
    }
}
