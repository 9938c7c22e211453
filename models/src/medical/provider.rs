// models/src/medical/provider.rs
use serde::{Deserialize, Serialize};

use crate::errors::{optional_text, require_text, ValidationResult};
use crate::medical::ToNode;
use crate::vertices::NodeType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProviderProperties {
    pub first_name: String,
    pub last_name: String,
    pub title: String, // e.g. "MD", "NP"
    pub specialty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npi: Option<String>,
}

impl ToNode for ProviderProperties {
    const NODE_TYPE: NodeType = NodeType::Provider;

    fn validate(&self) -> ValidationResult<()> {
        require_text("firstName", &self.first_name)?;
        require_text("lastName", &self.last_name)?;
        require_text("title", &self.title)?;
        require_text("specialty", &self.specialty)?;
        optional_text("npi", self.npi.as_ref())
    }
}
