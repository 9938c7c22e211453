// lib/src/visualizing.rs
//! Projection of a patient graph into the decorated form consumed by a
//! force-directed renderer.

use models::{
    EdgeStyle, GraphEdge, GraphNode, GraphVisualization, Layout, MedicalKnowledgeGraph, NodeType, VisualEdge,
    VisualNode,
};

pub const DEFAULT_NODE_COLOR: &str = "#6B7280";
pub const DEFAULT_NODE_SIZE: u32 = 8;
pub const EDGE_COLOR: &str = "#9CA3AF";

const NODE_COLORS: &[(NodeType, &str)] = &[
    (NodeType::Patient, "#4F46E5"),
    (NodeType::Condition, "#DC2626"),
    (NodeType::Medication, "#059669"),
    (NodeType::Lab, "#D97706"),
    (NodeType::Vital, "#7C3AED"),
    (NodeType::Allergy, "#BE123C"),
    (NodeType::Provider, "#0891B2"),
    (NodeType::Encounter, "#4338CA"),
    (NodeType::Symptom, "#F59E0B"),
    (NodeType::Diagnosis, "#EF4444"),
    (NodeType::FamilyHistory, "#F97316"),
    (NodeType::SocialHistory, "#10B981"),
    (NodeType::RiskFactor, "#EC4899"),
    (NodeType::Document, "#6B7280"),
    (NodeType::Site, "#374151"),
    (NodeType::Procedure, "#8B5CF6"),
];

const NODE_SIZES: &[(NodeType, u32)] = &[
    (NodeType::Patient, 20),
    (NodeType::Condition, 15),
    (NodeType::Medication, 12),
    (NodeType::Lab, 10),
];

pub fn node_color(node_type: NodeType) -> &'static str {
    NODE_COLORS
        .iter()
        .find(|(t, _)| *t == node_type)
        .map_or(DEFAULT_NODE_COLOR, |(_, color)| *color)
}

pub fn node_size(node_type: NodeType) -> u32 {
    NODE_SIZES
        .iter()
        .find(|(t, _)| *t == node_type)
        .map_or(DEFAULT_NODE_SIZE, |(_, size)| *size)
}

pub fn visual_node(node: &GraphNode) -> VisualNode {
    let node_type = node.node_type();
    VisualNode {
        node: node.clone(),
        x: None,
        y: None,
        color: node_color(node_type).to_string(),
        size: node_size(node_type),
        group: node_type.as_str().to_string(),
    }
}

pub fn visual_edge(edge: &GraphEdge) -> VisualEdge {
    VisualEdge {
        edge: edge.clone(),
        color: EDGE_COLOR.to_string(),
        width: edge.effective_weight(),
        style: EdgeStyle::Solid,
    }
}

/// Decorates every node and edge of `graph`, preserving order. The center
/// node id is passed through as given, whether or not such a node exists.
pub fn to_visualization(
    graph: &MedicalKnowledgeGraph,
    layout: Layout,
    center_node_id: Option<&str>,
) -> GraphVisualization {
    GraphVisualization {
        nodes: graph.nodes.iter().map(visual_node).collect(),
        edges: graph.edges.iter().map(visual_edge).collect(),
        layout,
        center_node_id: center_node_id.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::{condition, edge, graph_of, lab, medication};
    use models::GraphElement;

    #[test]
    fn every_node_type_has_a_color() {
        for node_type in NodeType::ALL {
            assert!(NODE_COLORS.iter().any(|(t, _)| *t == node_type), "{} has no color", node_type);
        }
        assert_eq!(node_color(NodeType::Patient), "#4F46E5");
        assert_eq!(node_color(NodeType::Procedure), "#8B5CF6");
    }

    #[test]
    fn sizes_fall_back_to_default() {
        assert_eq!(node_size(NodeType::Patient), 20);
        assert_eq!(node_size(NodeType::Condition), 15);
        assert_eq!(node_size(NodeType::Medication), 12);
        assert_eq!(node_size(NodeType::Lab), 10);
        assert_eq!(node_size(NodeType::SocialHistory), DEFAULT_NODE_SIZE);
    }

    #[test]
    fn projects_graph_in_order() {
        let graph = graph_of(
            vec![condition("condition_dm"), medication("med_metformin"), lab("lab_hba1c", 2024, 5, 15)],
            vec![
                edge("e1", "condition_dm", "med_metformin", Some(0.9)),
                edge("e2", "condition_dm", "lab_hba1c", None),
            ],
        );
        let vis = to_visualization(&graph, Layout::Force, Some("nowhere"));

        let ids: Vec<&str> = vis.nodes.iter().map(|n| n.id()).collect();
        assert_eq!(ids, vec!["condition_dm", "med_metformin", "lab_hba1c"]);
        assert_eq!(vis.nodes[0].color, "#DC2626");
        assert_eq!(vis.nodes[0].group, "Condition");
        assert_eq!(vis.edges[0].width, 0.9);
        assert_eq!(vis.edges[1].width, 1.0);
        assert_eq!(vis.edges[1].color, EDGE_COLOR);
        assert_eq!(vis.center_node_id.as_deref(), Some("nowhere"));
    }

    #[test]
    fn zero_weight_edge_has_zero_width() {
        let graph = graph_of(
            vec![condition("condition_dm"), medication("med_metformin")],
            vec![edge("e1", "condition_dm", "med_metformin", Some(0.0))],
        );
        let vis = to_visualization(&graph, Layout::Force, None);
        assert_eq!(vis.edges[0].width, 0.0);
    }

    #[test]
    fn serializes_flat() {
        let graph = graph_of(vec![condition("condition_dm")], vec![]);
        let value = serde_json::to_value(to_visualization(&graph, Layout::Circular, None)).unwrap();
        assert_eq!(value["layout"], "circular");
        assert!(value.get("centerNodeId").is_none());
        assert_eq!(value["nodes"][0]["id"], "condition_dm");
        assert_eq!(value["nodes"][0]["type"], "Condition");
        assert_eq!(value["nodes"][0]["size"], 15);
        assert!(value["nodes"][0].get("x").is_none());
    }
}
