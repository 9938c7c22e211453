// lib/src/seed.rs
//! Seed datasets: the built-in mock patients and external JSON seed files,
//! both loaded through the same validating path.

use std::fs;
use std::path::Path;

use log::{error, info};
use models::errors::GraphResult;
use models::{GraphEdge, MedicalKnowledgeGraph};
use serde::{Deserialize, Serialize};

use crate::config::IntegrityMode;
use crate::engine::integrity::integrity_error;
use crate::engine::{check_integrity, remove_dangling_edges, IndexedGraph, IntegrityProblem};

/// Mock patients `p001` and `p002`.
pub const BUILTIN_SEED_JSON: &str = include_str!("../data/seed_graphs.json");

/// Wire shape of a seed file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedFile {
    pub graphs: Vec<MedicalKnowledgeGraph>,
}

/// An edge dropped at load because an endpoint was missing.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarantinedEdge {
    pub patient_id: String,
    pub edge: GraphEdge,
    pub problems: Vec<String>,
}

/// Outcome of loading one or more seed graphs.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadReport {
    pub loaded: Vec<String>,
    pub quarantined: Vec<QuarantinedEdge>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.quarantined.is_empty()
    }
}

pub fn parse_seed(json: &str) -> GraphResult<SeedFile> {
    Ok(serde_json::from_str(json)?)
}

pub fn read_seed_file(path: &Path) -> GraphResult<SeedFile> {
    info!("Reading seed file {}", path.display());
    let json = fs::read_to_string(path)?;
    parse_seed(&json)
}

pub fn builtin_seed() -> GraphResult<SeedFile> {
    parse_seed(BUILTIN_SEED_JSON)
}

/// Checks one graph under `mode` and indexes it.
///
/// In [`IntegrityMode::Reject`] any defect fails the load. In
/// [`IntegrityMode::Quarantine`] dangling edges are removed and returned;
/// any other defect still fails the load.
pub fn prepare_graph(
    mut graph: MedicalKnowledgeGraph,
    mode: IntegrityMode,
) -> GraphResult<(IndexedGraph, Vec<QuarantinedEdge>)> {
    let problems = check_integrity(&graph);
    if problems.is_empty() {
        return Ok((IndexedGraph::new(graph)?, Vec::new()));
    }
    let recoverable = mode == IntegrityMode::Quarantine && problems.iter().all(IntegrityProblem::is_dangling_edge);
    if !recoverable {
        return Err(integrity_error(&graph.patient_id, &problems));
    }

    let patient_id = graph.patient_id.clone();
    let quarantined: Vec<QuarantinedEdge> = remove_dangling_edges(&mut graph)
        .into_iter()
        .map(|edge| {
            let problems = problems
                .iter()
                .filter(|p| matches!(p, IntegrityProblem::DanglingEdge { edge_id, .. } if *edge_id == edge.id))
                .map(ToString::to_string)
                .collect();
            QuarantinedEdge {
                patient_id: patient_id.clone(),
                edge,
                problems,
            }
        })
        .collect();
    for q in &quarantined {
        error!(
            "Quarantined edge {} in graph for patient {}: {}",
            q.edge.id,
            q.patient_id,
            q.problems.join("; ")
        );
    }
    Ok((IndexedGraph::new(graph)?, quarantined))
}
