// models/src/vertices.rs
use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::errors::{require_unit_interval, ValidationError, ValidationResult};
use crate::identifiers::Identifier;
use crate::medical::*;

/// The closed vocabulary of node types in a patient's medical graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeType {
    Patient,
    Condition,
    Medication,
    Procedure,
    Lab,
    Vital,
    Allergy,
    Provider,
    Encounter,
    Symptom,
    Diagnosis,
    FamilyHistory,
    SocialHistory,
    RiskFactor,
    Document,
    Site,
}

impl NodeType {
    pub const ALL: [NodeType; 16] = [
        NodeType::Patient,
        NodeType::Condition,
        NodeType::Medication,
        NodeType::Procedure,
        NodeType::Lab,
        NodeType::Vital,
        NodeType::Allergy,
        NodeType::Provider,
        NodeType::Encounter,
        NodeType::Symptom,
        NodeType::Diagnosis,
        NodeType::FamilyHistory,
        NodeType::SocialHistory,
        NodeType::RiskFactor,
        NodeType::Document,
        NodeType::Site,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Patient => "Patient",
            NodeType::Condition => "Condition",
            NodeType::Medication => "Medication",
            NodeType::Procedure => "Procedure",
            NodeType::Lab => "Lab",
            NodeType::Vital => "Vital",
            NodeType::Allergy => "Allergy",
            NodeType::Provider => "Provider",
            NodeType::Encounter => "Encounter",
            NodeType::Symptom => "Symptom",
            NodeType::Diagnosis => "Diagnosis",
            NodeType::FamilyHistory => "FamilyHistory",
            NodeType::SocialHistory => "SocialHistory",
            NodeType::RiskFactor => "RiskFactor",
            NodeType::Document => "Document",
            NodeType::Site => "Site",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown node type '{}'", s))
    }
}

/// Provenance attached to a node.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NodeMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl NodeMetadata {
    pub fn validate(&self) -> ValidationResult<()> {
        if let Some(confidence) = self.confidence {
            require_unit_interval("confidence", confidence)?;
        }
        if let (Some(created), Some(updated)) = (self.created_date, self.last_updated) {
            if updated < created {
                return Err(ValidationError::InvalidDateRange {
                    start_field: "createdDate",
                    end_field: "lastUpdated",
                });
            }
        }
        Ok(())
    }
}

macro_rules! node_properties {
    ($($variant:ident => $record:ty),+ $(,)?) => {
        /// The typed `properties` payload of a node; one variant per [`NodeType`].
        #[derive(Clone, Debug, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum NodeProperties {
            $($variant($record),)+
        }

        impl NodeProperties {
            /// The node type implied by this payload.
            pub fn node_type(&self) -> NodeType {
                match self {
                    $(NodeProperties::$variant(_) => NodeType::$variant,)+
                }
            }

            pub fn validate(&self) -> ValidationResult<()> {
                match self {
                    $(NodeProperties::$variant(record) => record.validate(),)+
                }
            }

            pub fn primary_date(&self) -> Option<NaiveDate> {
                match self {
                    $(NodeProperties::$variant(record) => record.primary_date(),)+
                }
            }

            /// Decodes a raw JSON payload according to the declared node type.
            pub fn decode(node_type: NodeType, value: Value) -> ValidationResult<Self> {
                let decoded = match node_type {
                    $(NodeType::$variant => serde_json::from_value::<$record>(value)
                        .map(NodeProperties::$variant),)+
                };
                let properties = decoded.map_err(|e| ValidationError::InvalidProperties {
                    node_type,
                    reason: e.to_string(),
                })?;
                properties.validate()?;
                Ok(properties)
            }
        }

        $(
            impl From<$record> for NodeProperties {
                fn from(record: $record) -> Self {
                    NodeProperties::$variant(record)
                }
            }
        )+
    };
}

node_properties! {
    Patient => PatientProperties,
    Condition => ConditionProperties,
    Medication => MedicationProperties,
    Procedure => ProcedureProperties,
    Lab => LabProperties,
    Vital => VitalProperties,
    Allergy => AllergyProperties,
    Provider => ProviderProperties,
    Encounter => EncounterProperties,
    Symptom => SymptomProperties,
    Diagnosis => DiagnosisProperties,
    FamilyHistory => FamilyHistoryProperties,
    SocialHistory => SocialHistoryProperties,
    RiskFactor => RiskFactorProperties,
    Document => DocumentProperties,
    Site => SiteProperties,
}

/// A typed vertex in a patient's medical graph.
///
/// The node's type is not stored separately: it is implied by the
/// [`NodeProperties`] variant, so a node cannot claim one type while carrying
/// another type's fields.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "RawNode")]
pub struct GraphNode {
    /// Unique within the owning graph.
    pub id: Identifier,

    /// Human-readable display string (e.g., "Metformin 1000mg").
    pub label: String,

    pub properties: NodeProperties,

    pub metadata: Option<NodeMetadata>,
}

impl GraphNode {
    /// Creates a node from a typed record, validating the record.
    pub fn new(id: Identifier, label: impl Into<String>, record: impl Into<NodeProperties>) -> ValidationResult<Self> {
        let node = GraphNode {
            id,
            label: label.into(),
            properties: record.into(),
            metadata: None,
        };
        node.validate()?;
        Ok(node)
    }

    /// Attaches provenance, validating it.
    pub fn with_metadata(mut self, metadata: NodeMetadata) -> ValidationResult<Self> {
        metadata.validate()?;
        self.metadata = Some(metadata);
        Ok(self)
    }

    pub fn node_type(&self) -> NodeType {
        self.properties.node_type()
    }

    pub fn validate(&self) -> ValidationResult<()> {
        self.properties.validate()?;
        if let Some(metadata) = &self.metadata {
            metadata.validate()?;
        }
        Ok(())
    }
}

impl Serialize for GraphNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.metadata.is_some() { 5 } else { 4 };
        let mut state = serializer.serialize_struct("GraphNode", len)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("type", &self.node_type())?;
        state.serialize_field("label", &self.label)?;
        state.serialize_field("properties", &self.properties)?;
        if let Some(metadata) = &self.metadata {
            state.serialize_field("metadata", metadata)?;
        }
        state.end()
    }
}

/// Wire shape of a node before its properties are decoded for its type.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawNode {
    id: Identifier,
    #[serde(rename = "type")]
    node_type: NodeType,
    label: String,
    properties: Value,
    #[serde(default)]
    metadata: Option<NodeMetadata>,
}

impl TryFrom<RawNode> for GraphNode {
    type Error = ValidationError;

    fn try_from(raw: RawNode) -> ValidationResult<Self> {
        let properties = NodeProperties::decode(raw.node_type, raw.properties)?;
        let node = GraphNode {
            id: raw.id,
            label: raw.label,
            properties,
            metadata: raw.metadata,
        };
        node.validate()?;
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hba1c_json() -> Value {
        json!({
            "id": "lab_hba1c",
            "type": "Lab",
            "label": "HbA1c 7.2%",
            "properties": {
                "testName": "Hemoglobin A1c",
                "value": "7.2",
                "unit": "%",
                "referenceRange": "<7.0",
                "status": "Abnormal",
                "date": "2024-05-15"
            }
        })
    }

    #[test]
    fn decodes_properties_for_declared_type() {
        let node: GraphNode = serde_json::from_value(hba1c_json()).unwrap();
        assert_eq!(node.node_type(), NodeType::Lab);
        assert_eq!(node.id, "lab_hba1c");
        match &node.properties {
            NodeProperties::Lab(lab) => assert_eq!(lab.status, LabStatus::Abnormal),
            other => panic!("unexpected properties {:?}", other),
        }
    }

    #[test]
    fn rejects_properties_of_another_type() {
        let mut raw = hba1c_json();
        raw["type"] = json!("Medication");
        let err = serde_json::from_value::<GraphNode>(raw).unwrap_err();
        assert!(err.to_string().contains("invalid Medication properties"));
    }

    #[test]
    fn rejects_blank_required_field() {
        let mut raw = hba1c_json();
        raw["properties"]["testName"] = json!("   ");
        let err = serde_json::from_value::<GraphNode>(raw).unwrap_err();
        assert!(err.to_string().contains("testName"));
    }

    #[test]
    fn serializes_back_to_wire_shape() {
        let node: GraphNode = serde_json::from_value(hba1c_json()).unwrap();
        assert_eq!(serde_json::to_value(&node).unwrap(), hba1c_json());
    }

    #[test]
    fn metadata_confidence_is_bounded() {
        let node: GraphNode = serde_json::from_value(hba1c_json()).unwrap();
        let bad = NodeMetadata { confidence: Some(1.5), ..Default::default() };
        assert!(node.clone().with_metadata(bad).is_err());

        let good = NodeMetadata {
            source: Some("lab-feed".into()),
            confidence: Some(0.95),
            ..Default::default()
        };
        let node = node.with_metadata(good).unwrap();
        assert_eq!(serde_json::to_value(&node).unwrap()["metadata"]["confidence"], 0.95);
    }

    #[test]
    fn node_type_parses_case_insensitively() {
        assert_eq!("familyhistory".parse::<NodeType>(), Ok(NodeType::FamilyHistory));
        assert!("Planet".parse::<NodeType>().is_err());
        assert_eq!(NodeType::ALL.len(), 16);
    }
}
