// models/src/edges.rs
use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{require_unit_interval, ValidationError, ValidationResult};
use crate::identifiers::Identifier;
use crate::properties::{PropertyMap, PropertyValue};

/// The closed vocabulary of relationship kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeType {
    HasCondition,
    TakesMedication,
    HadProcedure,
    HasLabResult,
    HasVitalSign,
    AllergicTo,
    TreatedBy,
    SeenInEncounter,
    HasSymptom,
    DiagnosedWith,
    FamilyHistoryOf,
    SocialHistoryOf,
    AtRiskFor,
    DocumentedIn,
    LocatedAt,
    PrescribedBy,
    OrderedBy,
    Indicates,
    ContraindicatedWith,
    InteractsWith,
    CausedBy,
    LeadsTo,
    RelatedTo,
}

impl EdgeType {
    pub const ALL: [EdgeType; 23] = [
        EdgeType::HasCondition,
        EdgeType::TakesMedication,
        EdgeType::HadProcedure,
        EdgeType::HasLabResult,
        EdgeType::HasVitalSign,
        EdgeType::AllergicTo,
        EdgeType::TreatedBy,
        EdgeType::SeenInEncounter,
        EdgeType::HasSymptom,
        EdgeType::DiagnosedWith,
        EdgeType::FamilyHistoryOf,
        EdgeType::SocialHistoryOf,
        EdgeType::AtRiskFor,
        EdgeType::DocumentedIn,
        EdgeType::LocatedAt,
        EdgeType::PrescribedBy,
        EdgeType::OrderedBy,
        EdgeType::Indicates,
        EdgeType::ContraindicatedWith,
        EdgeType::InteractsWith,
        EdgeType::CausedBy,
        EdgeType::LeadsTo,
        EdgeType::RelatedTo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeType::HasCondition => "HAS_CONDITION",
            EdgeType::TakesMedication => "TAKES_MEDICATION",
            EdgeType::HadProcedure => "HAD_PROCEDURE",
            EdgeType::HasLabResult => "HAS_LAB_RESULT",
            EdgeType::HasVitalSign => "HAS_VITAL_SIGN",
            EdgeType::AllergicTo => "ALLERGIC_TO",
            EdgeType::TreatedBy => "TREATED_BY",
            EdgeType::SeenInEncounter => "SEEN_IN_ENCOUNTER",
            EdgeType::HasSymptom => "HAS_SYMPTOM",
            EdgeType::DiagnosedWith => "DIAGNOSED_WITH",
            EdgeType::FamilyHistoryOf => "FAMILY_HISTORY_OF",
            EdgeType::SocialHistoryOf => "SOCIAL_HISTORY_OF",
            EdgeType::AtRiskFor => "AT_RISK_FOR",
            EdgeType::DocumentedIn => "DOCUMENTED_IN",
            EdgeType::LocatedAt => "LOCATED_AT",
            EdgeType::PrescribedBy => "PRESCRIBED_BY",
            EdgeType::OrderedBy => "ORDERED_BY",
            EdgeType::Indicates => "INDICATES",
            EdgeType::ContraindicatedWith => "CONTRAINDICATED_WITH",
            EdgeType::InteractsWith => "INTERACTS_WITH",
            EdgeType::CausedBy => "CAUSED_BY",
            EdgeType::LeadsTo => "LEADS_TO",
            EdgeType::RelatedTo => "RELATED_TO",
        }
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EdgeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.replace('-', "_");
        EdgeType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| format!("unknown edge type '{}'", s))
    }
}

/// Provenance attached to an edge.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EdgeMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}

/// A directed, typed, weighted relationship between two nodes of the same graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEdge")]
pub struct GraphEdge {
    /// Unique within the owning graph.
    pub id: Identifier,

    /// Source node.
    pub source: Identifier,

    /// Target node.
    pub target: Identifier,

    /// Edge type (e.g., `HAS_CONDITION`, `AT_RISK_FOR`).
    #[serde(rename = "type")]
    pub edge_type: EdgeType,

    /// Human-readable relationship description (e.g., "treated with").
    pub label: String,

    #[serde(default, skip_serializing_if = "PropertyMap::is_empty")]
    pub properties: PropertyMap,

    /// Strength/confidence in `[0, 1]`; traversal treats absence as `1.0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<EdgeMetadata>,
}

impl GraphEdge {
    /// Create a new unweighted edge.
    pub fn new(
        id: Identifier,
        source: Identifier,
        target: Identifier,
        edge_type: EdgeType,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id,
            source,
            target,
            edge_type,
            label: label.into(),
            properties: PropertyMap::new(),
            weight: None,
            metadata: None,
        }
    }

    /// Sets the weight, which must lie in `[0, 1]`.
    pub fn with_weight(mut self, weight: f64) -> ValidationResult<Self> {
        require_unit_interval("weight", weight)?;
        self.weight = Some(weight);
        Ok(self)
    }

    /// Add or update a property using a builder pattern.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn with_metadata(mut self, metadata: EdgeMetadata) -> ValidationResult<Self> {
        self.metadata = Some(metadata);
        self.validate()?;
        Ok(self)
    }

    /// The weight used for traversal: the stored weight, or `1.0` when absent.
    pub fn effective_weight(&self) -> f64 {
        self.weight.unwrap_or(1.0)
    }

    /// Whether this edge joins `a` and `b`, in either direction.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }

    /// The endpoint opposite `node_id`, if this edge touches it.
    pub fn other_endpoint(&self, node_id: &str) -> Option<Identifier> {
        if self.source == node_id {
            Some(self.target)
        } else if self.target == node_id {
            Some(self.source)
        } else {
            None
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    pub fn validate(&self) -> ValidationResult<()> {
        if let Some(weight) = self.weight {
            require_unit_interval("weight", weight)?;
        }
        if let Some(strength) = self.metadata.as_ref().and_then(|m| m.strength) {
            require_unit_interval("strength", strength)?;
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEdge {
    id: Identifier,
    source: Identifier,
    target: Identifier,
    #[serde(rename = "type")]
    edge_type: EdgeType,
    label: String,
    #[serde(default)]
    properties: PropertyMap,
    #[serde(default)]
    weight: Option<f64>,
    #[serde(default)]
    metadata: Option<EdgeMetadata>,
}

impl TryFrom<RawEdge> for GraphEdge {
    type Error = ValidationError;

    fn try_from(raw: RawEdge) -> ValidationResult<Self> {
        let edge = GraphEdge {
            id: raw.id,
            source: raw.source,
            target: raw.target,
            edge_type: raw.edge_type,
            label: raw.label,
            properties: raw.properties,
            weight: raw.weight,
            metadata: raw.metadata,
        };
        edge.validate()?;
        Ok(edge)
    }
}
