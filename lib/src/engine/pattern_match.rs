// lib/src/engine/pattern_match.rs

use std::collections::HashSet;

use models::{
    DateRange, EdgeType, GraphEdge, GraphNode, GraphQuery, Identifier, MedicalKnowledgeGraph, NodeType,
    PropertyValue,
};

use crate::engine::graph::IndexedGraph;

/// A predicate over nodes or edges. A [`GraphQuery`] compiles into one
/// pattern for nodes and one for edges.
#[derive(Clone, Debug, PartialEq)]
pub enum Pattern {
    Any,
    NodeType(NodeType),
    EdgeType(EdgeType),
    PropertyEquals(String, PropertyValue),
    DateWithin(DateRange),
    And(Box<Pattern>, Box<Pattern>),
    Or(Box<Pattern>, Box<Pattern>),
    Not(Box<Pattern>),
}

impl Pattern {
    /// Conjunction of `patterns`; `Any` when empty.
    pub fn all_of(patterns: impl IntoIterator<Item = Pattern>) -> Pattern {
        patterns
            .into_iter()
            .reduce(|acc, p| Pattern::And(Box::new(acc), Box::new(p)))
            .unwrap_or(Pattern::Any)
    }

    /// Disjunction of `patterns`; matches nothing when empty.
    pub fn any_of(patterns: impl IntoIterator<Item = Pattern>) -> Pattern {
        patterns
            .into_iter()
            .reduce(|acc, p| Pattern::Or(Box::new(acc), Box::new(p)))
            .unwrap_or_else(|| Pattern::Not(Box::new(Pattern::Any)))
    }

    pub fn matches_node(&self, node: &GraphNode) -> bool {
        match self {
            Pattern::Any => true,
            Pattern::NodeType(t) => node.node_type() == *t,
            Pattern::PropertyEquals(k, v) => serde_json::to_value(&node.properties)
                .ok()
                .and_then(|props| props.get(k).map(|stored| v.matches_json(stored)))
                .unwrap_or(false),
            // nodes without a date of their own never match a date window
            Pattern::DateWithin(range) => node
                .properties
                .primary_date()
                .map_or(false, |date| range.contains(date)),
            Pattern::And(left, right) => left.matches_node(node) && right.matches_node(node),
            Pattern::Or(left, right) => left.matches_node(node) || right.matches_node(node),
            Pattern::Not(inner) => !inner.matches_node(node),
            _ => false,
        }
    }

    pub fn matches_edge(&self, edge: &GraphEdge) -> bool {
        match self {
            Pattern::Any => true,
            Pattern::EdgeType(t) => edge.edge_type == *t,
            Pattern::PropertyEquals(k, v) => edge.properties.get(k).map_or(false, |stored| stored == v),
            Pattern::And(left, right) => left.matches_edge(edge) && right.matches_edge(edge),
            Pattern::Or(left, right) => left.matches_edge(edge) || right.matches_edge(edge),
            Pattern::Not(inner) => !inner.matches_edge(edge),
            _ => false,
        }
    }
}

/// Node and edge patterns compiled from a [`GraphQuery`].
#[derive(Clone, Debug, PartialEq)]
pub struct QueryPatterns {
    pub nodes: Pattern,
    pub edges: Pattern,
}

impl From<&GraphQuery> for QueryPatterns {
    fn from(query: &GraphQuery) -> Self {
        let mut node_parts = Vec::new();
        if let Some(types) = &query.node_types {
            node_parts.push(Pattern::any_of(types.iter().copied().map(Pattern::NodeType)));
        }
        if let Some(range) = query.date_range {
            node_parts.push(Pattern::DateWithin(range));
        }
        if let Some(filters) = &query.filters {
            node_parts.extend(
                filters
                    .iter()
                    .map(|(k, v)| Pattern::PropertyEquals(k.clone(), v.clone())),
            );
        }

        let edges = match &query.edge_types {
            Some(types) => Pattern::any_of(types.iter().copied().map(Pattern::EdgeType)),
            None => Pattern::Any,
        };

        QueryPatterns {
            nodes: Pattern::all_of(node_parts),
            edges,
        }
    }
}

impl IndexedGraph {
    /// The sub-graph selected by `query`: matching nodes, plus matching edges
    /// whose endpoints both survived. Order and `lastUpdated` are kept.
    pub fn select(&self, query: &GraphQuery) -> MedicalKnowledgeGraph {
        let patterns = QueryPatterns::from(query);
        let graph = self.graph();

        let nodes: Vec<GraphNode> = graph
            .nodes
            .iter()
            .filter(|n| patterns.nodes.matches_node(n))
            .cloned()
            .collect();
        let kept: HashSet<Identifier> = nodes.iter().map(|n| n.id).collect();
        let edges = graph
            .edges
            .iter()
            .filter(|e| kept.contains(&e.source) && kept.contains(&e.target))
            .filter(|e| patterns.edges.matches_edge(e))
            .cloned()
            .collect();

        MedicalKnowledgeGraph {
            patient_id: graph.patient_id.clone(),
            nodes,
            edges,
            last_updated: graph.last_updated,
        }
    }
}
