// lib/src/memory/datastore.rs

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

use log::{debug, info};
use models::errors::{GraphError, GraphResult};
use models::{GraphEdge, GraphNode, MedicalKnowledgeGraph};

use crate::engine::IndexedGraph;

/// One patient's graph. Readers clone the inner `Arc` and keep a consistent
/// snapshot for as long as they hold it; writers build the next snapshot
/// under the write lock and swap it in.
type PatientSlot = RwLock<Arc<IndexedGraph>>;

/// In-memory store of validated patient graphs.
///
/// Writes to one patient are serialized by that patient's slot lock; writes
/// to different patients proceed independently.
#[derive(Debug, Default)]
pub struct GraphStore {
    slots: RwLock<HashMap<String, Arc<PatientSlot>>>,
}

impl GraphStore {
    pub fn new() -> Self {
        GraphStore::default()
    }

    /// The current snapshot of a patient's graph.
    pub fn snapshot(&self, patient_id: &str) -> Option<Arc<IndexedGraph>> {
        let slot = self.slot(patient_id)?;
        // a snapshot is swapped in whole, so a poisoned lock still guards a consistent value
        let current = slot.read().unwrap_or_else(PoisonError::into_inner);
        Some(Arc::clone(&current))
    }

    /// Known patient ids, sorted.
    pub fn patient_ids(&self) -> Vec<String> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        let mut ids: Vec<String> = slots.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Registers a new patient graph after validating it.
    pub fn insert_graph(&self, graph: MedicalKnowledgeGraph) -> GraphResult<()> {
        self.insert_indexed(IndexedGraph::new(graph)?)
    }

    /// Registers an already validated graph.
    pub fn insert_indexed(&self, graph: IndexedGraph) -> GraphResult<()> {
        let mut slots = self
            .slots
            .write()
            .map_err(|e| GraphError::LockError(e.to_string()))?;
        let patient_id = graph.patient_id().to_string();
        if slots.contains_key(&patient_id) {
            return Err(GraphError::AlreadyExists(format!("graph for patient {}", patient_id)));
        }
        info!(
            "Registered graph for patient {} ({} nodes, {} edges)",
            patient_id,
            graph.graph().nodes.len(),
            graph.graph().edges.len()
        );
        slots.insert(patient_id, Arc::new(RwLock::new(Arc::new(graph))));
        Ok(())
    }

    pub fn insert_node(&self, patient_id: &str, node: GraphNode) -> GraphResult<()> {
        self.write_with(patient_id, |graph| graph.insert_node(node))
    }

    /// Adds an edge; both endpoints must already be in the patient's graph.
    pub fn insert_edge(&self, patient_id: &str, edge: GraphEdge) -> GraphResult<()> {
        self.write_with(patient_id, |graph| graph.insert_edge(edge))
    }

    /// Replaces the node with the same id.
    pub fn update_node(&self, patient_id: &str, node: GraphNode) -> GraphResult<()> {
        self.write_with(patient_id, |graph| graph.replace_node(node))
    }

    /// Replaces the edge with the same id, re-checking its endpoints.
    pub fn update_edge(&self, patient_id: &str, edge: GraphEdge) -> GraphResult<()> {
        self.write_with(patient_id, |graph| graph.replace_edge(edge))
    }

    fn slot(&self, patient_id: &str) -> Option<Arc<PatientSlot>> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        slots.get(patient_id).cloned()
    }

    // Read-modify-swap under the patient's write lock. The live snapshot is
    // only replaced when `apply` succeeds.
    fn write_with<F>(&self, patient_id: &str, apply: F) -> GraphResult<()>
    where
        F: FnOnce(&mut IndexedGraph) -> GraphResult<()>,
    {
        let slot = self
            .slot(patient_id)
            .ok_or_else(|| GraphError::NotFound(format!("graph for patient {}", patient_id)))?;
        let mut current: RwLockWriteGuard<'_, Arc<IndexedGraph>> =
            slot.write().map_err(|e| GraphError::LockError(e.to_string()))?;

        let mut next = IndexedGraph::clone(&current);
        apply(&mut next)?;
        next.touch();
        *current = Arc::new(next);
        debug!("Committed write to graph for patient {}", patient_id);
        Ok(())
    }
}
