// lib/src/engine/mod.rs
//! In-memory graph engine: integrity checks, indexing, traversal and
//! query matching over a single patient's graph.

pub mod graph;
pub mod integrity;
pub mod pattern_match;
pub mod traversal;

#[cfg(test)]
pub(crate) mod test_support;

pub use graph::{GraphIndex, IndexedGraph};
pub use integrity::{check_integrity, remove_dangling_edges, validate_graph, Endpoint, IntegrityProblem};
pub use pattern_match::{Pattern, QueryPatterns};
