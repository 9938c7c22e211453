// models/src/graph.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::edges::GraphEdge;
use crate::vertices::{GraphNode, NodeType};

/// The capability set shared by everything a graph holds or projects:
/// an id, a type name, and a display label.
pub trait GraphElement {
    fn id(&self) -> &str;
    fn type_name(&self) -> &'static str;
    fn label(&self) -> &str;
}

impl GraphElement for GraphNode {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn type_name(&self) -> &'static str {
        self.node_type().as_str()
    }

    fn label(&self) -> &str {
        &self.label
    }
}

impl GraphElement for GraphEdge {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn type_name(&self) -> &'static str {
        self.edge_type.as_str()
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// One patient's medical knowledge graph.
///
/// Node and edge order is insertion order; it carries no meaning beyond
/// making query results deterministic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalKnowledgeGraph {
    pub patient_id: String,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub last_updated: DateTime<Utc>,
}

impl MedicalKnowledgeGraph {
    pub fn new(patient_id: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
            nodes: Vec::new(),
            edges: Vec::new(),
            last_updated: Utc::now(),
        }
    }

    pub fn with_nodes(mut self, nodes: impl IntoIterator<Item = GraphNode>) -> Self {
        self.nodes.extend(nodes);
        self
    }

    pub fn with_edges(mut self, edges: impl IntoIterator<Item = GraphEdge>) -> Self {
        self.edges.extend(edges);
        self
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&GraphEdge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn nodes_of_type(&self, node_type: NodeType) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(move |n| n.node_type() == node_type)
    }

    /// Marks the graph as mutated now.
    pub fn touch(&mut self) {
        self.last_updated = Utc::now();
    }
}
