// models/src/visualization.rs
//! Display-only projections of a graph. Nothing here is stored back into a
//! graph, and the decoration fields never take part in node or edge identity.

use serde::{Deserialize, Serialize};

use crate::edges::GraphEdge;
use crate::graph::GraphElement;
use crate::vertices::GraphNode;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Force,
    Hierarchical,
    Circular,
    Grid,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VisualNode {
    #[serde(flatten)]
    pub node: GraphNode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    pub color: String,
    pub size: u32,
    pub group: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VisualEdge {
    #[serde(flatten)]
    pub edge: GraphEdge,
    pub color: String,
    pub width: f64,
    pub style: EdgeStyle,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphVisualization {
    pub nodes: Vec<VisualNode>,
    pub edges: Vec<VisualEdge>,
    pub layout: Layout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_node_id: Option<String>,
}

impl GraphElement for VisualNode {
    fn id(&self) -> &str {
        self.node.id.as_str()
    }

    fn type_name(&self) -> &'static str {
        self.node.node_type().as_str()
    }

    fn label(&self) -> &str {
        &self.node.label
    }
}

impl GraphElement for VisualEdge {
    fn id(&self) -> &str {
        self.edge.id.as_str()
    }

    fn type_name(&self) -> &'static str {
        self.edge.edge_type.as_str()
    }

    fn label(&self) -> &str {
        &self.edge.label
    }
}
