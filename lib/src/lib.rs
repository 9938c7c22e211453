// lib/src/lib.rs

//! Per-patient medical knowledge graphs: validated loading, an in-memory
//! store with consistent snapshots, traversal and query operations, and
//! projection into a renderable form.

pub mod config;
pub mod engine;
pub mod graph_service;
pub mod memory;
pub mod seed;
pub mod visualizing;

pub use models::errors::{GraphError, GraphResult};
pub use models::{
    GraphEdge, GraphNode, GraphPath, GraphQuery, GraphVisualization, MedicalKnowledgeGraph, NodeType,
};

pub use crate::config::{load_service_config, IntegrityMode, ServiceConfig};
pub use crate::engine::{validate_graph, IndexedGraph};
pub use crate::graph_service::MedicalGraphService;
pub use crate::memory::GraphStore;
pub use crate::seed::{LoadReport, QuarantinedEdge, SeedFile};
