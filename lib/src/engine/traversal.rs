// lib/src/engine/traversal.rs

use std::collections::HashSet;

use models::{GraphNode, GraphPath, Identifier, PathType};

use crate::engine::graph::IndexedGraph;

impl IndexedGraph {
    /// Nodes one edge away from `node_id`, ignoring direction.
    ///
    /// The node itself is never included, even through a self-loop, and each
    /// neighbour appears once, in the graph's node order. An unknown id yields
    /// an empty list.
    pub fn related_nodes(&self, node_id: &str) -> Vec<&GraphNode> {
        let neighbours: HashSet<Identifier> = self
            .incident_edges(node_id)
            .filter_map(|edge| edge.other_endpoint(node_id))
            .filter(|id| *id != node_id)
            .collect();
        if neighbours.is_empty() {
            return Vec::new();
        }
        self.graph()
            .nodes
            .iter()
            .filter(|node| neighbours.contains(&node.id))
            .collect()
    }

    /// The single-edge path between two nodes, if one exists.
    ///
    /// Edges count in either direction; when several connect the pair the
    /// first in edge order wins. Routes longer than one edge are not searched.
    /// A node reaches itself only through a self-loop edge.
    pub fn direct_path(&self, source_id: &str, target_id: &str) -> Option<GraphPath> {
        let source = self.node(source_id)?;
        let target = self.node(target_id)?;
        let edge = self
            .incident_edges(source_id)
            .find(|edge| edge.connects(source_id, target_id))?;

        Some(GraphPath {
            nodes: vec![source.clone(), target.clone()],
            edges: vec![edge.clone()],
            path_type: PathType::Direct,
            strength: edge.effective_weight(),
        })
    }
}
