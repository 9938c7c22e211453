// models/src/medical/mod.rs
//! Typed property records, one per `NodeType`.
//!
//! Each record is the `properties` payload of a [`GraphNode`] of the matching
//! type. Records validate themselves at construction time through
//! [`ToNode::validate`]; the graph container never accepts a record that has
//! not been validated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};
use crate::identifiers::Identifier;
use crate::vertices::{GraphNode, NodeProperties, NodeType};

pub mod allergy;
pub mod condition;
pub mod diagnosis;
pub mod document;
pub mod encounter;
pub mod family_history;
pub mod lab;
pub mod medication;
pub mod patient;
pub mod procedure;
pub mod provider;
pub mod risk_factor;
pub mod site;
pub mod social_history;
pub mod symptom;
pub mod vital;

pub use allergy::*;
pub use condition::*;
pub use diagnosis::*;
pub use document::*;
pub use encounter::*;
pub use family_history::*;
pub use lab::*;
pub use medication::*;
pub use patient::*;
pub use procedure::*;
pub use provider::*;
pub use risk_factor::*;
pub use site::*;
pub use social_history::*;
pub use symptom::*;
pub use vital::*;

/// Conversion of a typed record into a graph node.
pub trait ToNode: Sized + Into<NodeProperties> {
    /// The node type this record describes.
    const NODE_TYPE: NodeType;

    /// Checks the record's documented contract.
    fn validate(&self) -> ValidationResult<()>;

    /// The date used when filtering by date range, if the record has one.
    fn primary_date(&self) -> Option<NaiveDate> {
        None
    }

    /// Validates the record and wraps it in a node.
    fn to_node(self, id: Identifier, label: impl Into<String>) -> ValidationResult<GraphNode> {
        let node = GraphNode::new(id, label, self)?;
        if node.node_type() != Self::NODE_TYPE {
            return Err(ValidationError::NodeTypeMismatch {
                id: node.id,
                declared: Self::NODE_TYPE,
                actual: node.node_type(),
            });
        }
        Ok(node)
    }
}

/// Lifecycle status shared by conditions and diagnoses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClinicalStatus {
    Active,
    Inactive,
    Resolved,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}
