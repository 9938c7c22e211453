// lib/src/graph_service.rs
//! Read and write façade over the per-patient graph store.

use std::sync::Arc;

use log::{debug, info, warn};
use models::errors::{GraphError, GraphResult};
use models::{
    GraphEdge, GraphNode, GraphPath, GraphQuery, GraphVisualization, MedicalKnowledgeGraph, NodeType,
};
use once_cell::sync::OnceCell;

use crate::config::ServiceConfig;
use crate::engine::IndexedGraph;
use crate::memory::GraphStore;
use crate::seed::{builtin_seed, prepare_graph, read_seed_file, LoadReport};
use crate::visualizing;

/// Optional process-wide instance, for deployments that want one.
static GRAPH_SERVICE: OnceCell<Arc<MedicalGraphService>> = OnceCell::new();

/// Query service over a set of patient knowledge graphs.
///
/// Reads never fail: an unknown patient or node yields `None` or an empty
/// list. Loads, writes and configuration return `GraphResult`.
#[derive(Debug)]
pub struct MedicalGraphService {
    store: GraphStore,
    config: ServiceConfig,
    load_report: LoadReport,
}

impl MedicalGraphService {
    /// Builds a service from the given graphs, each checked under the
    /// configured integrity mode.
    pub fn new(
        graphs: impl IntoIterator<Item = MedicalKnowledgeGraph>,
        config: ServiceConfig,
    ) -> GraphResult<Self> {
        let mut service = MedicalGraphService {
            store: GraphStore::new(),
            config,
            load_report: LoadReport::default(),
        };
        service.load(graphs)?;
        Ok(service)
    }

    /// A service holding the built-in mock patients `p001` and `p002`.
    pub fn with_builtin_seed() -> GraphResult<Self> {
        Self::new(builtin_seed()?.graphs, ServiceConfig::default())
    }

    /// Builds a service as described by `config`: the built-in dataset when
    /// enabled, then the configured seed file, if any.
    pub fn from_config(config: ServiceConfig) -> GraphResult<Self> {
        let mut graphs = Vec::new();
        if config.load_builtin_seed {
            graphs.extend(builtin_seed()?.graphs);
        }
        if let Some(path) = &config.seed_path {
            graphs.extend(read_seed_file(path)?.graphs);
        }
        Self::new(graphs, config)
    }

    fn load(&mut self, graphs: impl IntoIterator<Item = MedicalKnowledgeGraph>) -> GraphResult<()> {
        for graph in graphs {
            let (indexed, quarantined) = prepare_graph(graph, self.config.integrity_mode)?;
            let patient_id = indexed.patient_id().to_string();
            self.store.insert_indexed(indexed)?;
            self.load_report.loaded.push(patient_id);
            self.load_report.quarantined.extend(quarantined);
        }
        info!(
            "Loaded {} patient graphs ({} edges quarantined)",
            self.load_report.loaded.len(),
            self.load_report.quarantined.len()
        );
        Ok(())
    }

    /// Installs `service` as the process-wide instance. Fails if one is already set.
    pub fn init_global(service: MedicalGraphService) -> GraphResult<Arc<MedicalGraphService>> {
        let service = Arc::new(service);
        GRAPH_SERVICE
            .set(Arc::clone(&service))
            .map_err(|_| GraphError::AlreadyExists("global MedicalGraphService".into()))?;
        Ok(service)
    }

    /// The process-wide instance, if [`init_global`](Self::init_global) was called.
    pub fn global() -> Option<Arc<MedicalGraphService>> {
        GRAPH_SERVICE.get().cloned()
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// What happened while the initial graphs were loaded.
    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    fn snapshot(&self, patient_id: &str) -> Option<Arc<IndexedGraph>> {
        let snapshot = self.store.snapshot(patient_id);
        if snapshot.is_none() {
            debug!("No graph for patient {}", patient_id);
        }
        snapshot
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Sorted ids of every patient with a graph.
    pub fn list_patients(&self) -> Vec<String> {
        self.store.patient_ids()
    }

    pub fn get_patient_graph(&self, patient_id: &str) -> Option<MedicalKnowledgeGraph> {
        self.snapshot(patient_id).map(|s| s.graph().clone())
    }

    /// Nodes of one type, in stored order.
    pub fn get_nodes_by_type(&self, patient_id: &str, node_type: NodeType) -> Vec<GraphNode> {
        self.snapshot(patient_id)
            .map(|s| s.graph().nodes_of_type(node_type).cloned().collect())
            .unwrap_or_default()
    }

    /// Nodes one edge away from `node_id`, in either direction.
    pub fn get_related_nodes(&self, patient_id: &str, node_id: &str) -> Vec<GraphNode> {
        let Some(snapshot) = self.snapshot(patient_id) else {
            return Vec::new();
        };
        if !snapshot.contains_node(node_id) {
            debug!("Node {} not in graph for patient {}", node_id, patient_id);
        }
        snapshot.related_nodes(node_id).into_iter().cloned().collect()
    }

    /// The single edge joining two nodes, as a path. Longer routes are not searched.
    pub fn get_path_between_nodes(
        &self,
        patient_id: &str,
        source_node_id: &str,
        target_node_id: &str,
    ) -> Option<GraphPath> {
        self.snapshot(patient_id)?
            .direct_path(source_node_id, target_node_id)
    }

    /// The patient's graph decorated for rendering with the configured layout.
    pub fn to_visualization(&self, patient_id: &str, center_node_id: Option<&str>) -> Option<GraphVisualization> {
        let snapshot = self.snapshot(patient_id)?;
        if let Some(center) = center_node_id {
            if !snapshot.contains_node(center) {
                warn!("Center node {} is not in graph for patient {}", center, patient_id);
            }
        }
        Some(visualizing::to_visualization(
            snapshot.graph(),
            self.config.default_layout,
            center_node_id,
        ))
    }

    /// The sub-graph selected by `query`.
    ///
    /// A query naming a different patient than `patient_id` selects nothing.
    pub fn query_graph(&self, patient_id: &str, query: &GraphQuery) -> Option<MedicalKnowledgeGraph> {
        if let Some(wanted) = &query.patient_id {
            if wanted != patient_id {
                warn!("Query for patient {} issued against patient {}", wanted, patient_id);
                return None;
            }
        }
        let selected = self.snapshot(patient_id)?.select(query);
        debug!(
            "Query on patient {} selected {} nodes, {} edges",
            patient_id,
            selected.nodes.len(),
            selected.edges.len()
        );
        Some(selected)
    }

    // -------------------------------------------------------------------------
    // Writes
    // -------------------------------------------------------------------------

    pub fn insert_graph(&self, graph: MedicalKnowledgeGraph) -> GraphResult<()> {
        self.store.insert_graph(graph)
    }

    pub fn insert_node(&self, patient_id: &str, node: GraphNode) -> GraphResult<()> {
        self.store.insert_node(patient_id, node)
    }

    pub fn insert_edge(&self, patient_id: &str, edge: GraphEdge) -> GraphResult<()> {
        self.store.insert_edge(patient_id, edge)
    }

    pub fn update_node(&self, patient_id: &str, node: GraphNode) -> GraphResult<()> {
        self.store.update_node(patient_id, node)
    }

    pub fn update_edge(&self, patient_id: &str, edge: GraphEdge) -> GraphResult<()> {
        self.store.update_edge(patient_id, edge)
    }
}
