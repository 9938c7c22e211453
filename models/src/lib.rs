// models/src/lib.rs
//! Shared types for the medical knowledge graph: identifiers, typed nodes and
//! edges, the per-patient graph container, query/path shapes, visualization
//! projections and the error taxonomy.

pub mod edges;
pub mod errors;
pub mod graph;
pub mod identifiers;
pub mod medical;
pub mod properties;
pub mod queries;
pub mod vertices;
pub mod visualization;

pub use edges::{EdgeMetadata, EdgeType, GraphEdge};
pub use errors::{GraphError, GraphResult, ValidationError, ValidationResult};
pub use graph::{GraphElement, MedicalKnowledgeGraph};
pub use identifiers::Identifier;
pub use medical::ToNode;
pub use properties::{PropertyMap, PropertyValue};
pub use queries::{DateRange, GraphPath, GraphQuery, PathType};
pub use vertices::{GraphNode, NodeMetadata, NodeProperties, NodeType};
pub use visualization::{EdgeStyle, GraphVisualization, Layout, VisualEdge, VisualNode};
