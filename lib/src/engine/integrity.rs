// lib/src/engine/integrity.rs
//! Referential-integrity checks run on every graph before it is indexed.

use std::collections::HashSet;
use std::fmt;

use models::errors::{GraphError, GraphResult};
use models::{GraphEdge, Identifier, MedicalKnowledgeGraph, ValidationError};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Target,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Source => f.write_str("source"),
            Endpoint::Target => f.write_str("target"),
        }
    }
}

/// One defect found in a graph.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum IntegrityProblem {
    #[error("duplicate node id {0}")]
    DuplicateNodeId(Identifier),
    #[error("duplicate edge id {0}")]
    DuplicateEdgeId(Identifier),
    #[error("edge {edge_id} {endpoint} references missing node {node_id}")]
    DanglingEdge {
        edge_id: Identifier,
        endpoint: Endpoint,
        node_id: Identifier,
    },
    #[error("node {id} is invalid: {error}")]
    InvalidNode { id: Identifier, error: ValidationError },
    #[error("edge {id} is invalid: {error}")]
    InvalidEdge { id: Identifier, error: ValidationError },
}

impl IntegrityProblem {
    /// Dangling-endpoint problems for one edge, given a node-existence test.
    pub fn dangling_endpoints(edge: &GraphEdge, exists: impl Fn(&str) -> bool) -> Vec<IntegrityProblem> {
        [(Endpoint::Source, edge.source), (Endpoint::Target, edge.target)]
            .into_iter()
            .filter(|(_, node_id)| !exists(node_id))
            .map(|(endpoint, node_id)| IntegrityProblem::DanglingEdge {
                edge_id: edge.id,
                endpoint,
                node_id,
            })
            .collect()
    }

    pub fn is_dangling_edge(&self) -> bool {
        matches!(self, IntegrityProblem::DanglingEdge { .. })
    }
}

/// Lists every defect in `graph`; an empty result means the graph is sound.
pub fn check_integrity(graph: &MedicalKnowledgeGraph) -> Vec<IntegrityProblem> {
    let mut problems = Vec::new();

    let mut node_ids = HashSet::with_capacity(graph.nodes.len());
    for node in &graph.nodes {
        if !node_ids.insert(node.id.as_str()) {
            problems.push(IntegrityProblem::DuplicateNodeId(node.id));
        }
        if let Err(error) = node.validate() {
            problems.push(IntegrityProblem::InvalidNode { id: node.id, error });
        }
    }

    let mut edge_ids = HashSet::with_capacity(graph.edges.len());
    for edge in &graph.edges {
        if !edge_ids.insert(edge.id.as_str()) {
            problems.push(IntegrityProblem::DuplicateEdgeId(edge.id));
        }
        if let Err(error) = edge.validate() {
            problems.push(IntegrityProblem::InvalidEdge { id: edge.id, error });
        }
        problems.extend(IntegrityProblem::dangling_endpoints(edge, |id| node_ids.contains(id)));
    }

    problems
}

/// Fails with `GraphError::IntegrityViolation` listing every defect of `graph`.
pub fn validate_graph(graph: &MedicalKnowledgeGraph) -> GraphResult<()> {
    let problems = check_integrity(graph);
    if problems.is_empty() {
        Ok(())
    } else {
        Err(integrity_error(&graph.patient_id, &problems))
    }
}

pub(crate) fn integrity_error(patient_id: &str, problems: &[IntegrityProblem]) -> GraphError {
    GraphError::IntegrityViolation {
        patient_id: patient_id.to_string(),
        problems: problems.iter().map(ToString::to_string).collect(),
    }
}

/// Removes edges with a missing endpoint from `graph`, returning them.
pub fn remove_dangling_edges(graph: &mut MedicalKnowledgeGraph) -> Vec<GraphEdge> {
    let node_ids: HashSet<Identifier> = graph.nodes.iter().map(|n| n.id).collect();
    let (kept, dangling): (Vec<GraphEdge>, Vec<GraphEdge>) = graph
        .edges
        .drain(..)
        .partition(|e| node_ids.contains(&e.source) && node_ids.contains(&e.target));
    graph.edges = kept;
    dangling
}
