// lib/src/engine/graph.rs

use std::collections::HashMap;

use log::debug;
use models::errors::{GraphError, GraphResult};
use models::{GraphEdge, GraphNode, MedicalKnowledgeGraph};

use crate::engine::integrity::{integrity_error, validate_graph, IntegrityProblem};

/// Lookup tables kept next to a graph so reads do not scan the vectors.
#[derive(Clone, Debug, Default)]
pub struct GraphIndex {
    node_positions: HashMap<String, usize>,
    edge_positions: HashMap<String, usize>,
    // node id -> positions of every edge touching it, in either direction, ascending
    incident: HashMap<String, Vec<usize>>,
}

impl GraphIndex {
    fn build(graph: &MedicalKnowledgeGraph) -> Self {
        let mut index = GraphIndex::default();
        for (pos, node) in graph.nodes.iter().enumerate() {
            index.node_positions.insert(node.id.to_string(), pos);
        }
        index.rebuild_edges(&graph.edges);
        index
    }

    fn rebuild_edges(&mut self, edges: &[GraphEdge]) {
        self.edge_positions.clear();
        self.incident.clear();
        for (pos, edge) in edges.iter().enumerate() {
            self.index_edge(edge, pos);
        }
    }

    fn index_edge(&mut self, edge: &GraphEdge, pos: usize) {
        self.edge_positions.insert(edge.id.to_string(), pos);
        self.incident.entry(edge.source.to_string()).or_default().push(pos);
        if !edge.is_self_loop() {
            self.incident.entry(edge.target.to_string()).or_default().push(pos);
        }
    }
}

/// A validated graph together with its index. Every instance satisfies the
/// referential-integrity invariant: ids are unique and every edge endpoint
/// resolves to a node of the same graph.
#[derive(Clone, Debug)]
pub struct IndexedGraph {
    graph: MedicalKnowledgeGraph,
    index: GraphIndex,
}

impl IndexedGraph {
    /// Validates `graph` and indexes it.
    pub fn new(graph: MedicalKnowledgeGraph) -> GraphResult<Self> {
        validate_graph(&graph)?;
        let index = GraphIndex::build(&graph);
        debug!(
            "Indexed graph for patient {}: {} nodes, {} edges",
            graph.patient_id,
            graph.nodes.len(),
            graph.edges.len()
        );
        Ok(IndexedGraph { graph, index })
    }

    pub fn graph(&self) -> &MedicalKnowledgeGraph {
        &self.graph
    }

    pub fn patient_id(&self) -> &str {
        &self.graph.patient_id
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.index.node_positions.get(id).map(|&pos| &self.graph.nodes[pos])
    }

    pub fn edge(&self, id: &str) -> Option<&GraphEdge> {
        self.index.edge_positions.get(id).map(|&pos| &self.graph.edges[pos])
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.index.node_positions.contains_key(id)
    }

    /// Every edge touching `node_id`, in stored edge order.
    pub fn incident_edges<'a>(&'a self, node_id: &str) -> impl Iterator<Item = &'a GraphEdge> + 'a {
        self.index
            .incident
            .get(node_id)
            .into_iter()
            .flatten()
            .map(move |&pos| &self.graph.edges[pos])
    }

    pub fn insert_node(&mut self, node: GraphNode) -> GraphResult<()> {
        node.validate()?;
        if self.contains_node(&node.id) {
            return Err(GraphError::AlreadyExists(format!(
                "node {} in graph for patient {}",
                node.id, self.graph.patient_id
            )));
        }
        self.index.node_positions.insert(node.id.to_string(), self.graph.nodes.len());
        self.graph.nodes.push(node);
        Ok(())
    }

    pub fn insert_edge(&mut self, edge: GraphEdge) -> GraphResult<()> {
        edge.validate()?;
        if self.edge(&edge.id).is_some() {
            return Err(GraphError::AlreadyExists(format!(
                "edge {} in graph for patient {}",
                edge.id, self.graph.patient_id
            )));
        }
        self.check_endpoints(&edge)?;
        let pos = self.graph.edges.len();
        self.index.index_edge(&edge, pos);
        self.graph.edges.push(edge);
        Ok(())
    }

    /// Replaces the node with the same id, keeping its position.
    pub fn replace_node(&mut self, node: GraphNode) -> GraphResult<()> {
        node.validate()?;
        let pos = *self
            .index
            .node_positions
            .get(node.id.as_str())
            .ok_or_else(|| GraphError::NotFound(node.id.to_string()))?;
        self.graph.nodes[pos] = node;
        Ok(())
    }

    /// Replaces the edge with the same id, keeping its position. Endpoints are
    /// re-checked since they may have changed.
    pub fn replace_edge(&mut self, edge: GraphEdge) -> GraphResult<()> {
        edge.validate()?;
        let pos = *self
            .index
            .edge_positions
            .get(edge.id.as_str())
            .ok_or_else(|| GraphError::NotFound(edge.id.to_string()))?;
        self.check_endpoints(&edge)?;
        self.graph.edges[pos] = edge;
        self.index.rebuild_edges(&self.graph.edges);
        Ok(())
    }

    /// Marks the underlying graph as mutated now.
    pub(crate) fn touch(&mut self) {
        self.graph.touch();
    }

    fn check_endpoints(&self, edge: &GraphEdge) -> GraphResult<()> {
        let problems: Vec<IntegrityProblem> = IntegrityProblem::dangling_endpoints(edge, |id| self.contains_node(id));
        if problems.is_empty() {
            Ok(())
        } else {
            Err(integrity_error(&self.graph.patient_id, &problems))
        }
    }
}
